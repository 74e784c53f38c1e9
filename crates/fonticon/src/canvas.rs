//! Toolkit-agnostic 2D drawing-context capability.
//!
//! The painter never talks to a concrete widget toolkit. It drives a
//! [`Canvas`], a minimal vector drawing context that host integrations
//! implement on top of their native painter (a `QPainter`, a cairo context,
//! a wgpu text layer). [`Surface`] extends it with allocation so icons can
//! mint fresh transparent render targets on demand.

use crate::registry::FontHandle;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    /// Neutral gray used as the process-wide default icon color.
    pub const DEFAULT: Rgba = Rgba::rgb(50, 50, 50);
    /// Lighter gray used as the default disabled color.
    pub const DEFAULT_DISABLED: Rgba = Rgba::rgb(150, 150, 150);
}

/// Axis-aligned drawing rectangle in device-independent pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square rect anchored at the origin, as handed to icon paint calls.
    pub fn sized(size: f64) -> Self {
        Self::new(0.0, 0.0, size, size)
    }

    /// Copy of this rect moved by (dx, dy) absolute pixels.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Drawing context driven by the icon painter.
///
/// Implementations own the mapping onto the real toolkit painter. All
/// setters mutate the current drawing state; `save`/`restore` push and pop
/// the full state (color, font, opacity, transform) so painters can scope
/// their mutations.
pub trait Canvas {
    fn save(&mut self);
    fn restore(&mut self);
    fn set_color(&mut self, color: Rgba);
    fn set_font(&mut self, font: &FontHandle);
    fn set_opacity(&mut self, opacity: f64);
    /// Append a translation to the current transform.
    fn translate(&mut self, dx: f64, dy: f64);
    /// Append a clockwise rotation (degrees) about the current origin.
    fn rotate(&mut self, degrees: f64);
    /// Draw a single character centered in `rect` with the current state.
    fn draw_char(&mut self, rect: Rect, ch: char);
}

/// A canvas that can be allocated stand-alone, used by [`Icon::render`] to
/// produce rendered surfaces at any requested size.
///
/// [`Icon::render`]: crate::Icon::render
pub trait Surface: Canvas + Sized {
    /// Allocate a fully transparent surface of the given pixel size.
    fn transparent(width: u32, height: u32) -> Self;
}
