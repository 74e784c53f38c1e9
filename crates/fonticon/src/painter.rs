//! Paint strategies.
//!
//! [`Painter`] is the pluggable compositor capability; [`CharIconPainter`]
//! is the built-in strategy that draws one font glyph per resolved spec
//! entry. Custom strategies can be registered by name on an
//! [`IconFont`](crate::IconFont) to take over painting entirely.

use crate::canvas::{Canvas, Rect};
use crate::error::Result;
use crate::options::RenderSpec;
use crate::registry::FontRegistry;
use crate::{Mode, State};

/// Compositor capability invoked whenever an icon is drawn.
///
/// Implementations may only mutate the passed canvas and must leave its
/// state fully restored on return, on error paths included.
pub trait Painter: Send + Sync {
    fn paint(
        &self,
        fonts: &FontRegistry,
        canvas: &mut dyn Canvas,
        rect: Rect,
        mode: Mode,
        state: State,
        specs: &[RenderSpec],
    ) -> Result<()>;
}

/// Default strategy: one font glyph per spec entry, stacked in order.
#[derive(Default)]
pub struct CharIconPainter;

impl Painter for CharIconPainter {
    fn paint(
        &self,
        fonts: &FontRegistry,
        canvas: &mut dyn Canvas,
        rect: Rect,
        mode: Mode,
        state: State,
        specs: &[RenderSpec],
    ) -> Result<()> {
        for spec in specs {
            paint_glyph(fonts, canvas, rect, mode, state, spec)?;
        }
        Ok(())
    }
}

fn paint_glyph(
    fonts: &FontRegistry,
    canvas: &mut dyn Canvas,
    rect: Rect,
    mode: Mode,
    state: State,
    spec: &RenderSpec,
) -> Result<()> {
    canvas.save();
    let result = paint_glyph_inner(fonts, canvas, rect, mode, state, spec);
    canvas.restore();
    result
}

fn paint_glyph_inner(
    fonts: &FontRegistry,
    canvas: &mut dyn Canvas,
    rect: Rect,
    mode: Mode,
    state: State,
    spec: &RenderSpec,
) -> Result<()> {
    canvas.set_color(spec.color_for(mode, state));

    // A 16 pixel-high box yields a 14 pixel glyph: 16 * 0.875 = 14. The
    // glyph is kept smaller than the box to make room for font bearing.
    let draw_size = 0.875 * (rect.height * spec.scale_factor).round();

    if let Some(animation) = &spec.animation {
        animation.setup(canvas, rect);
    }

    canvas.set_font(&fonts.font(&spec.prefix, draw_size)?);

    // Offset is a fraction of the box per axis, so it scales with the
    // requested render size.
    let rect = match spec.offset {
        Some((dx, dy)) => rect.translated(dx * rect.width, dy * rect.height),
        None => rect,
    };

    canvas.set_opacity(spec.opacity);
    canvas.draw_char(rect, spec.glyph_for(mode, state));
    Ok(())
}
