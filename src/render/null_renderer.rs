use crate::error::PlotResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_fill_count: usize,
    pub last_stroke_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        self.last_fill_count = frame.fills.len();
        self.last_stroke_count = frame.strokes.len();
        self.frames_rendered += 1;
        Ok(())
    }
}
