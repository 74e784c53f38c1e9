//! The lazy, size-parametric icon resource handed to the hosting toolkit.

use std::fmt;
use std::sync::Arc;

use crate::canvas::{Canvas, Rect, Surface};
use crate::error::Result;
use crate::options::RenderSpec;
use crate::painter::{CharIconPainter, Painter};
use crate::registry::FontRegistry;
use crate::{Mode, State};

/// A themeable vector icon.
///
/// Holds a resolved specification and a paint strategy, nothing else: no
/// rasterization is cached here, every render re-draws the glyphs at the
/// requested size so icons stay crisp at any DPI. Cheap to clone and safe
/// to share across widgets.
#[derive(Clone)]
pub struct Icon {
    specs: Arc<Vec<RenderSpec>>,
    painter: Arc<dyn Painter>,
    fonts: Arc<FontRegistry>,
}

// The painter is an opaque trait object, so derive is not an option.
impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Icon")
            .field("glyphs", &self.specs.len())
            .finish_non_exhaustive()
    }
}

impl Icon {
    pub(crate) fn new(
        specs: Vec<RenderSpec>,
        painter: Arc<dyn Painter>,
        fonts: Arc<FontRegistry>,
    ) -> Self {
        Self {
            specs: Arc::new(specs),
            painter,
            fonts,
        }
    }

    /// An icon that paints nothing. Returned by the process-global `icon`
    /// call when no [`IconFont`](crate::IconFont) has been installed yet.
    pub fn empty() -> Self {
        Self::new(
            Vec::new(),
            Arc::new(CharIconPainter),
            Arc::new(FontRegistry::new()),
        )
    }

    /// Whether this icon has nothing to paint.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// The resolved per-glyph specification backing this icon.
    pub fn specs(&self) -> &[RenderSpec] {
        &self.specs
    }

    /// Paint into a host-provided drawing context. This is the extension
    /// point a toolkit's icon engine calls from its own paint event.
    pub fn paint(
        &self,
        canvas: &mut dyn Canvas,
        rect: Rect,
        mode: Mode,
        state: State,
    ) -> Result<()> {
        self.painter
            .paint(&self.fonts, canvas, rect, mode, state, &self.specs)
    }

    /// Render onto a freshly allocated transparent surface of `size` x
    /// `size` pixels. Pure function of its arguments: repeated calls
    /// produce identical surfaces.
    pub fn render<S: Surface>(&self, size: u32, mode: Mode, state: State) -> Result<S> {
        let mut surface = S::transparent(size, size);
        self.paint(&mut surface, Rect::sized(size as f64), mode, state)?;
        Ok(surface)
    }

    /// Convenience wrapper over [`render`](Icon::render) matching toolkit
    /// pixmap-request signatures.
    pub fn pixmap_at<S: Surface>(&self, size: u32, mode: Mode, state: State) -> Result<S> {
        self.render(size, mode, state)
    }
}
