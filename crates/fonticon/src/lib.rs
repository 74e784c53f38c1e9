//! fonticon: iconic font toolkit.
//!
//! Renders glyphs from icon fonts (Font Awesome, Elusive Icons, ...) as
//! scalable, themeable, state-aware icon resources for widget toolkits.
//! A symbolic name like `"fas.flag"` becomes an [`Icon`] that re-renders
//! its glyphs at whatever pixel size the toolkit asks for, with colors and
//! glyph substitutions per widget mode and toggle state.
//!
//! Fonts are loaded once per prefix during application start-up; icons are
//! cheap immutable values created per call. Rendering goes through the
//! toolkit-agnostic [`Canvas`] capability, so the compositor core carries
//! no toolkit dependency.

pub mod animation;
mod canvas;
mod error;
mod icon;
mod iconfont;
pub mod options;
mod painter;
mod registry;

// Test utilities
pub mod test_support;

pub use animation::{Animation, Pulse, Spin};
pub use canvas::{Canvas, Rect, Rgba, Surface};
pub use error::{IconError, Result};
pub use icon::Icon;
pub use iconfont::{CUSTOM_PREFIX, IconFont};
pub use options::{set_global_defaults, IconOptions, OptionValue, RenderSpec};
pub use painter::{CharIconPainter, Painter};
pub use registry::{parse_charmap, FontCollection, FontHandle, FontRegistry};

use once_cell::sync::OnceCell;

/// Widget visual context, per host toolkit convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Normal,
    Disabled,
    Active,
    Selected,
}

/// Binary toggle state for checkable controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum State {
    On,
    #[default]
    Off,
}

static INSTANCE: OnceCell<IconFont> = OnceCell::new();

/// Install the process-wide [`IconFont`] instance.
///
/// Host integrations call this once the toolkit's application object
/// exists, with the bundled collections already loaded. A second install
/// is rejected and hands the instance back.
pub fn install(fonts: IconFont) -> std::result::Result<(), IconFont> {
    INSTANCE.set(fonts)
}

/// The installed process-wide instance, if any.
pub fn instance() -> Option<&'static IconFont> {
    INSTANCE.get()
}

fn warn_not_installed() {
    tracing::warn!(
        "no IconFont is installed; call fonticon::install during application start-up"
    );
}

/// Build an icon from stacked `"prefix.name"` glyphs via the installed
/// instance. Before [`install`] this degrades to [`Icon::empty`] with a
/// warning instead of failing, so construction stays safe in headless
/// code paths.
pub fn icon(names: &[&str], options: &IconOptions) -> Result<Icon> {
    match INSTANCE.get() {
        Some(fonts) => fonts.icon(names, options),
        None => {
            warn_not_installed();
            Ok(Icon::empty())
        }
    }
}

/// [`icon`] with per-glyph overrides, aligned with `names`.
pub fn icon_with_options(
    names: &[&str],
    per_glyph: &[IconOptions],
    shared: &IconOptions,
) -> Result<Icon> {
    match INSTANCE.get() {
        Some(fonts) => fonts.icon_with_options(names, per_glyph, shared),
        None => {
            warn_not_installed();
            Ok(Icon::empty())
        }
    }
}

/// Font descriptor for text-label widgets via the installed instance.
pub fn font(prefix: &str, pixel_size: f64) -> Result<FontHandle> {
    match INSTANCE.get() {
        Some(fonts) => fonts.font(prefix, pixel_size),
        None => {
            warn_not_installed();
            Err(IconError::UnknownPrefix(prefix.to_string()))
        }
    }
}

/// Register a custom paint strategy on the installed instance, addressable
/// as `icon(&["custom.NAME"], ..)`.
pub fn register_custom_icon(name: &str, painter: std::sync::Arc<dyn Painter>) {
    match INSTANCE.get() {
        Some(fonts) => fonts.set_custom_icon(name, painter),
        None => warn_not_installed(),
    }
}
