use std::fs::File;
use std::path::Path as FsPath;

use cairo::{Context, Format, ImageSurface, Matrix};

use crate::core::{Path, PathCommand};
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, RenderFrame, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub fills_drawn: usize,
    pub strokes_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PlotResult<()>;
}

/// Cairo renderer backend.
///
/// Frames use y-up device coordinates; the renderer flips them onto
/// Cairo's y-down surface using the frame viewport height.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> PlotResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlotError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> PlotResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface as a PNG file.
    pub fn write_png(&self, path: impl AsRef<FsPath>) -> PlotResult<()> {
        let mut file = File::create(path.as_ref()).map_err(|err| {
            PlotError::Backend(format!(
                "failed to create {}: {err}",
                path.as_ref().display()
            ))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| PlotError::Backend(format!("failed to encode png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        context.save().map_err(|err| map_backend_error("failed to save state", err))?;
        context.transform(Matrix::new(
            1.0,
            0.0,
            0.0,
            -1.0,
            0.0,
            f64::from(frame.viewport.height),
        ));

        let mut stats = CairoRenderStats::default();

        for fill in &frame.fills {
            append_path(context, &fill.path);
            apply_color(context, fill.color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill path", err))?;
            stats.fills_drawn += 1;
        }

        for stroke in &frame.strokes {
            append_path(context, &stroke.path);
            apply_color(context, stroke.style.color);
            context.set_line_width(stroke.style.width);
            context.set_dash(&stroke.style.dashes, stroke.style.dash_offset);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke path", err))?;
            stats.strokes_drawn += 1;
        }

        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore state", err))?;

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PlotResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_path(context: &Context, path: &Path) {
    context.new_path();
    for command in path.commands() {
        match *command {
            PathCommand::MoveTo(point) => context.move_to(point.x, point.y),
            PathCommand::LineTo(point) => context.line_to(point.x, point.y),
            PathCommand::Close => context.close_path(),
        }
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::Backend(format!("{prefix}: {err}"))
}
