use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("font at '{0}' appears to be empty or unreadable")]
    FontLoad(PathBuf),
    #[error("font is corrupt at '{0}'")]
    Integrity(PathBuf),
    #[error("font prefix '{0}' is already registered")]
    DuplicatePrefix(String),
    #[error("invalid font prefix '{0}'")]
    UnknownPrefix(String),
    #[error("invalid icon name '{name}' in font '{prefix}'")]
    UnknownGlyph { prefix: String, name: String },
    #[error("per-glyph options must be a list of size {expected}, got {got}")]
    ArityMismatch { expected: usize, got: usize },
    #[error("invalid option '{0}'")]
    InvalidOption(String),
    #[error("invalid icon name '{0}': expected 'prefix.name'")]
    InvalidGlyphName(String),
    #[error("invalid code point '{value}' for glyph '{name}'")]
    InvalidCodePoint { name: String, value: String },
    #[error("charmap parse error: {0}")]
    CharmapParse(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IconError>;
