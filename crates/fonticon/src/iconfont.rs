//! Main entry point tying the registry, resolver and painters together.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::error::Result;
use crate::icon::Icon;
use crate::options::{self, IconOptions};
use crate::painter::{CharIconPainter, Painter};
use crate::registry::{FontHandle, FontRegistry};

/// Prefix addressing user-registered paint strategies instead of a loaded
/// font collection.
pub const CUSTOM_PREFIX: &str = "custom";

/// Manager for iconic fonts: loads collections and mints [`Icon`]s.
///
/// One instance per process is the expected shape (see [`install`]), but
/// nothing prevents standalone instances, e.g. in tests.
///
/// [`install`]: crate::install
pub struct IconFont {
    fonts: Arc<FontRegistry>,
    painter: Arc<CharIconPainter>,
    custom_painters: RwLock<HashMap<String, Arc<dyn Painter>>>,
}

impl Default for IconFont {
    fn default() -> Self {
        Self::new()
    }
}

impl IconFont {
    pub fn new() -> Self {
        Self {
            fonts: Arc::new(FontRegistry::new()),
            painter: Arc::new(CharIconPainter),
            custom_painters: RwLock::new(HashMap::new()),
        }
    }

    /// Load a font file and its charmap under `prefix`. See
    /// [`FontRegistry::load`].
    pub fn load_font(
        &self,
        prefix: &str,
        font_filename: &str,
        charmap_filename: &str,
        directory: Option<&Path>,
    ) -> Result<()> {
        self.fonts
            .load(prefix, font_filename, charmap_filename, directory)
    }

    /// Register an already-resolved collection under `prefix`. See
    /// [`FontRegistry::register`].
    pub fn register_font(
        &self,
        prefix: &str,
        family: &str,
        charmap: HashMap<String, char>,
    ) -> Result<()> {
        self.fonts.register(prefix, family, charmap)
    }

    /// Shared registry handle, also held by every icon minted here.
    pub fn registry(&self) -> &Arc<FontRegistry> {
        &self.fonts
    }

    /// Font descriptor for text-label widgets, independent of any icon.
    pub fn font(&self, prefix: &str, pixel_size: f64) -> Result<FontHandle> {
        self.fonts.font(prefix, pixel_size)
    }

    /// Build an icon from one or more stacked `"prefix.name"` glyphs with
    /// a shared override set.
    pub fn icon(&self, names: &[&str], options: &IconOptions) -> Result<Icon> {
        self.build_icon(names, None, options)
    }

    /// Like [`icon`](IconFont::icon) with an additional per-glyph override
    /// list, aligned with `names`. Later names paint on top of earlier
    /// ones.
    pub fn icon_with_options(
        &self,
        names: &[&str],
        per_glyph: &[IconOptions],
        shared: &IconOptions,
    ) -> Result<Icon> {
        self.build_icon(names, Some(per_glyph), shared)
    }

    fn build_icon(
        &self,
        names: &[&str],
        per_glyph: Option<&[IconOptions]>,
        shared: &IconOptions,
    ) -> Result<Icon> {
        if let [name] = names {
            if let Some(custom) = name
                .strip_prefix(CUSTOM_PREFIX)
                .and_then(|rest| rest.strip_prefix('.'))
            {
                return Ok(self.custom_icon(custom));
            }
        }
        let specs = options::resolve(&self.fonts, names, per_glyph, shared)?;
        Ok(Icon::new(specs, self.painter.clone(), self.fonts.clone()))
    }

    /// Associate a user-provided paint strategy with a name, addressable
    /// afterwards as `icon(&["custom.NAME"], ..)`. The strategy bypasses
    /// the glyph registry entirely and receives an empty spec list; any
    /// state it needs must be captured at registration time.
    pub fn set_custom_icon(&self, name: &str, painter: Arc<dyn Painter>) {
        self.custom_painters
            .write()
            .unwrap()
            .insert(name.to_string(), painter);
    }

    fn custom_icon(&self, name: &str) -> Icon {
        match self.custom_painters.read().unwrap().get(name) {
            Some(painter) => Icon::new(Vec::new(), painter.clone(), self.fonts.clone()),
            None => {
                tracing::warn!(name, "no custom painter registered under this name");
                Icon::empty()
            }
        }
    }
}
