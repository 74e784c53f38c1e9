//! Per-frame animation hooks.
//!
//! Hooks pre-transform the drawing context before a glyph is painted. They
//! hold no timer of their own: the hosting toolkit advances them from its
//! event loop (`tick`) and repaints the widget, which re-renders the icon.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::canvas::{Canvas, Rect};

/// Drawing-context pre-transform applied before a glyph is emitted.
///
/// A single hook instance may be shared by several stacked glyphs or
/// several icons; implementations must tolerate `setup` being called once
/// per glyph per frame.
pub trait Animation: Send + Sync {
    fn setup(&self, canvas: &mut dyn Canvas, rect: Rect);
}

/// Continuous rotation about the icon center.
///
/// Advance with [`tick`](Spin::tick) from a host timer; a ~10 ms interval
/// with the default 1° step gives a smooth spin.
pub struct Spin {
    step_degrees: f64,
    // f64 bit pattern; atomic so one driver can serve many icons.
    angle: AtomicU64,
}

impl Spin {
    pub fn new(step_degrees: f64) -> Self {
        Self {
            step_degrees,
            angle: AtomicU64::new(0f64.to_bits()),
        }
    }

    /// Current rotation in degrees, in `[0, 360)`.
    pub fn angle(&self) -> f64 {
        f64::from_bits(self.angle.load(Ordering::Relaxed))
    }

    /// Advance the rotation by one step.
    pub fn tick(&self) {
        let next = (self.angle() + self.step_degrees) % 360.0;
        self.angle.store(next.to_bits(), Ordering::Relaxed);
    }
}

impl Default for Spin {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Animation for Spin {
    fn setup(&self, canvas: &mut dyn Canvas, rect: Rect) {
        let (cx, cy) = rect.center();
        canvas.translate(cx, cy);
        canvas.rotate(self.angle());
        canvas.translate(-cx, -cy);
    }
}

/// Coarse eight-position rotation (45° steps), the classic "pulsing"
/// spinner look. Drive with a slower timer than [`Spin`], around 300 ms.
pub struct Pulse {
    spin: Spin,
}

impl Pulse {
    pub fn new() -> Self {
        Self {
            spin: Spin::new(45.0),
        }
    }

    pub fn angle(&self) -> f64 {
        self.spin.angle()
    }

    pub fn tick(&self) {
        self.spin.tick();
    }
}

impl Default for Pulse {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for Pulse {
    fn setup(&self, canvas: &mut dyn Canvas, rect: Rect) {
        self.spin.setup(canvas, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_wraps_at_full_turn() {
        let spin = Spin::new(90.0);
        for _ in 0..5 {
            spin.tick();
        }
        assert_eq!(spin.angle(), 90.0);
    }

    #[test]
    fn pulse_steps_by_45_degrees() {
        let pulse = Pulse::new();
        pulse.tick();
        assert_eq!(pulse.angle(), 45.0);
    }
}
