use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use fonticon::{FontRegistry, IconError};

/// Fresh scratch directory for font fixtures.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fonticon-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_charmap(dir: &std::path::Path) -> &'static str {
    fs::write(dir.join("charmap.json"), r#"{"flag": "f024"}"#).unwrap();
    "charmap.json"
}

#[test]
fn missing_font_file_is_an_io_error() {
    let registry = FontRegistry::new();
    let dir = scratch_dir("missing");
    let charmap = write_charmap(&dir);
    let err = registry
        .load("fas", "no-such-font.ttf", charmap, Some(&dir))
        .unwrap_err();
    assert!(matches!(err, IconError::Io(_)));
}

#[test]
fn unparseable_font_file_is_a_font_load_error() {
    let registry = FontRegistry::new();
    let dir = scratch_dir("garbage");
    let charmap = write_charmap(&dir);
    fs::write(dir.join("myfont.ttf"), b"definitely not a font").unwrap();
    let err = registry
        .load("fas", "myfont.ttf", charmap, Some(&dir))
        .unwrap_err();
    assert!(matches!(err, IconError::FontLoad(path) if path.ends_with("myfont.ttf")));
    assert!(!registry.has_prefix("fas"));
}

#[cfg(not(feature = "system-fonts"))]
#[test]
fn corrupted_bundled_font_fails_integrity_and_spares_other_prefixes() {
    let registry = FontRegistry::new();
    registry
        .register(
            "fas",
            "Font Awesome 5 Free Solid",
            [("flag".to_string(), '\u{f024}')].into_iter().collect(),
        )
        .unwrap();

    let dir = scratch_dir("corrupt");
    let charmap = write_charmap(&dir);
    // A recognized bundled filename with the wrong content must be caught
    // by the hash check before any parsing is attempted.
    fs::write(dir.join("elusiveicons-webfont.ttf"), b"tampered bytes").unwrap();
    let err = registry
        .load("ei", "elusiveicons-webfont.ttf", charmap, Some(&dir))
        .unwrap_err();
    assert!(matches!(err, IconError::Integrity(_)));

    assert!(!registry.has_prefix("ei"));
    assert_eq!(registry.lookup("fas", "flag").unwrap(), '\u{f024}');
}

#[test]
fn user_supplied_fonts_skip_the_integrity_table() {
    let registry = FontRegistry::new();
    let dir = scratch_dir("user");
    let charmap = write_charmap(&dir);
    // Unknown filename: the hash table does not apply, so the failure is
    // the parse step, not the integrity check.
    fs::write(dir.join("custom-icons.ttf"), b"tampered bytes").unwrap();
    let err = registry
        .load("cst", "custom-icons.ttf", charmap, Some(&dir))
        .unwrap_err();
    assert!(matches!(err, IconError::FontLoad(_)));
}

#[test]
fn register_rejects_duplicate_prefix() {
    let registry = FontRegistry::new();
    let charmap: HashMap<String, char> = [("flag".to_string(), '\u{f024}')].into_iter().collect();
    registry.register("fas", "Family A", charmap.clone()).unwrap();
    let err = registry.register("fas", "Family B", charmap).unwrap_err();
    assert!(matches!(err, IconError::DuplicatePrefix(prefix) if prefix == "fas"));
}

#[test]
fn collection_exposes_glyph_names() {
    let registry = FontRegistry::new();
    registry
        .register(
            "fas",
            "Font Awesome 5 Free Solid",
            [
                ("flag".to_string(), '\u{f024}'),
                ("ban".to_string(), '\u{f05e}'),
            ]
            .into_iter()
            .collect(),
        )
        .unwrap();
    let collection = registry.collection("fas").unwrap();
    assert_eq!(collection.glyph_count(), 2);
    let mut names: Vec<&str> = collection.glyph_names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["ban", "flag"]);
}
