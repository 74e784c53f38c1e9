//! Test support utilities for fonticon.
//!
//! Provides a canvas that records every drawing call instead of painting,
//! so tests can assert on paint order, geometry and state handling. Not
//! part of the public rendering contract.

use crate::canvas::{Canvas, Rect, Rgba, Surface};
use crate::registry::FontHandle;

/// One recorded drawing-context call.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasOp {
    Save,
    Restore,
    SetColor(Rgba),
    SetFont(FontHandle),
    SetOpacity(f64),
    Translate(f64, f64),
    Rotate(f64),
    DrawChar(Rect, char),
}

/// A surface that captures the full op stream for inspection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingCanvas {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the glyphs actually emitted, in paint order.
    pub fn drawn_chars(&self) -> Vec<char> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::DrawChar(_, ch) => Some(*ch),
                _ => None,
            })
            .collect()
    }

    /// The rects glyphs were drawn into, in paint order.
    pub fn draw_rects(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::DrawChar(rect, _) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, matches: impl Fn(&CanvasOp) -> bool) -> usize {
        self.ops.iter().filter(|op| matches(op)).count()
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.ops.push(CanvasOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(CanvasOp::Restore);
    }

    fn set_color(&mut self, color: Rgba) {
        self.ops.push(CanvasOp::SetColor(color));
    }

    fn set_font(&mut self, font: &FontHandle) {
        self.ops.push(CanvasOp::SetFont(font.clone()));
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.ops.push(CanvasOp::SetOpacity(opacity));
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.ops.push(CanvasOp::Translate(dx, dy));
    }

    fn rotate(&mut self, degrees: f64) {
        self.ops.push(CanvasOp::Rotate(degrees));
    }

    fn draw_char(&mut self, rect: Rect, ch: char) {
        self.ops.push(CanvasOp::DrawChar(rect, ch));
    }
}

impl Surface for RecordingCanvas {
    fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }
}
