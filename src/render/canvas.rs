//! Browser canvas-2D surface

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::Surface;

/// [`Surface`] backed by a 2D canvas context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, extent: Vec2) {
        self.ctx
            .clear_rect(0.0, 0.0, extent.x as f64, extent.y as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }
}
