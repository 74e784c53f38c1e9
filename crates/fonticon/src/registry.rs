//! Font collection registry: prefix -> (family, charmap).
//!
//! Collections are loaded once during application start-up and are immutable
//! afterwards. The registry itself uses interior mutability so it can be
//! shared behind an `Arc` by every live [`Icon`](crate::Icon) while `load`
//! keeps a `&self` signature.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::error::{IconError, Result};

/// Content hashes for the font assets bundled with this crate. Consulted
/// only for filenames present here; user-supplied fonts are never checked.
#[cfg(not(feature = "system-fonts"))]
const BUNDLED_FONT_HASHES: &[(&str, &str)] = &[
    (
        "Font Awesome 5 Brands-Regular-400.otf",
        "fa63e85727b1b8ad35b9390d81617e08",
    ),
    (
        "Font Awesome 5 Free-Regular-400.otf",
        "57f731fe9728946eea37155e8ca0479a",
    ),
    (
        "Font Awesome 5 Free-Solid-900.otf",
        "6a001f8bc3ace8d0fff495ebd123413e",
    ),
    ("elusiveicons-webfont.ttf", "207966b04c032d5b873fd595a211582e"),
];

/// One loaded icon font: resolved family name plus its glyph charmap.
#[derive(Clone, Debug)]
pub struct FontCollection {
    pub prefix: String,
    pub family: String,
    charmap: HashMap<String, char>,
}

impl FontCollection {
    pub fn glyph(&self, name: &str) -> Option<char> {
        self.charmap.get(name).copied()
    }

    pub fn glyph_count(&self) -> usize {
        self.charmap.len()
    }

    /// Iterate over the symbolic glyph names in this collection.
    pub fn glyph_names(&self) -> impl Iterator<Item = &str> {
        self.charmap.keys().map(String::as_str)
    }
}

/// Sized font descriptor handed to the text-drawing primitive. Family is
/// fixed at load time, pixel size is chosen per draw call.
#[derive(Clone, Debug, PartialEq)]
pub struct FontHandle {
    pub family: String,
    pub pixel_size: f64,
}

/// Registry of [`FontCollection`]s keyed by prefix.
#[derive(Default)]
pub struct FontRegistry {
    collections: RwLock<HashMap<String, Arc<FontCollection>>>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a font file and its JSON charmap, registering them under
    /// `prefix`. With `directory` unset the files are looked up in the
    /// bundled `fonts/` directory next to the crate manifest.
    pub fn load(
        &self,
        prefix: &str,
        font_filename: &str,
        charmap_filename: &str,
        directory: Option<&Path>,
    ) -> Result<()> {
        let directory = directory
            .map(Path::to_path_buf)
            .unwrap_or_else(bundled_font_dir);
        let font_path = directory.join(font_filename);
        let font_data = fs::read(&font_path)?;

        verify_bundled(font_filename, &font_data, &font_path)?;

        let family = parse_family(&font_data).ok_or_else(|| IconError::FontLoad(font_path))?;
        let charmap_json = fs::read_to_string(directory.join(charmap_filename))?;
        let charmap = parse_charmap(&charmap_json)?;

        tracing::debug!(prefix, family = %family, glyphs = charmap.len(), "loaded icon font");
        self.register(prefix, &family, charmap)
    }

    /// Register an already-resolved collection. Used by embedders whose
    /// toolkit owns font loading, and by tests.
    pub fn register(
        &self,
        prefix: &str,
        family: &str,
        charmap: HashMap<String, char>,
    ) -> Result<()> {
        let mut collections = self.collections.write().unwrap();
        if collections.contains_key(prefix) {
            return Err(IconError::DuplicatePrefix(prefix.to_string()));
        }
        collections.insert(
            prefix.to_string(),
            Arc::new(FontCollection {
                prefix: prefix.to_string(),
                family: family.to_string(),
                charmap,
            }),
        );
        Ok(())
    }

    pub fn collection(&self, prefix: &str) -> Result<Arc<FontCollection>> {
        self.collections
            .read()
            .unwrap()
            .get(prefix)
            .cloned()
            .ok_or_else(|| IconError::UnknownPrefix(prefix.to_string()))
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.collections.read().unwrap().contains_key(prefix)
    }

    /// Code point for a symbolic glyph name in the given collection.
    pub fn lookup(&self, prefix: &str, name: &str) -> Result<char> {
        self.collection(prefix)?
            .glyph(name)
            .ok_or_else(|| IconError::UnknownGlyph {
                prefix: prefix.to_string(),
                name: name.to_string(),
            })
    }

    /// Font descriptor for `prefix` at the requested pixel size.
    pub fn font(&self, prefix: &str, pixel_size: f64) -> Result<FontHandle> {
        Ok(FontHandle {
            family: self.collection(prefix)?.family.clone(),
            pixel_size,
        })
    }
}

fn bundled_font_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fonts")
}

#[cfg(not(feature = "system-fonts"))]
fn verify_bundled(filename: &str, data: &[u8], path: &Path) -> Result<()> {
    let expected = BUNDLED_FONT_HASHES
        .iter()
        .find(|(name, _)| *name == filename)
        .map(|(_, hash)| *hash);
    if let Some(expected) = expected {
        let actual = format!("{:x}", md5::compute(data));
        if actual != expected {
            return Err(IconError::Integrity(path.to_path_buf()));
        }
    }
    Ok(())
}

#[cfg(feature = "system-fonts")]
fn verify_bundled(_filename: &str, _data: &[u8], _path: &Path) -> Result<()> {
    Ok(())
}

/// Family name from the font's name table.
fn parse_family(data: &[u8]) -> Option<String> {
    let face = ttf_parser::Face::parse(data, 0).ok()?;
    face.names()
        .into_iter()
        .filter(|name| name.name_id == ttf_parser::name_id::FAMILY && name.is_unicode())
        .find_map(|name| name.to_string())
}

/// Parse a charmap: a JSON object mapping glyph names to hex code points,
/// e.g. `{"flag": "f024"}`.
pub fn parse_charmap(json: &str) -> Result<HashMap<String, char>> {
    let raw: HashMap<String, String> = serde_json::from_str(json)?;
    raw.into_iter()
        .map(|(name, hex)| {
            let ch = u32::from_str_radix(&hex, 16)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| IconError::InvalidCodePoint {
                    name: name.clone(),
                    value: hex,
                })?;
            Ok((name, ch))
        })
        .collect()
}
