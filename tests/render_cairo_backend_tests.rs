#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use step_plot::PlotError;
use step_plot::api::{PlotContext, Plotter, Step};
use step_plot::core::{Axis, StepKind, Viewport};
use step_plot::render::{
    Canvas, CairoContextRenderer, CairoRenderer, Color, LineStyle, RenderFrame, Renderer,
};

fn plotted_frame(width: u32, height: u32) -> RenderFrame {
    let step = Step::try_from_pairs(vec![(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)])
        .expect("step")
        .with_step_kind(StepKind::Mid)
        .with_line_style(LineStyle::new(2.0, Color::rgb(0.8, 0.2, 0.2)).with_dashes(vec![4.0, 2.0], 0.0))
        .with_fill_color(Color::rgba(0.2, 0.2, 0.8, 0.4));
    let plot = PlotContext::new(
        Axis::new(0.0, 2.0).expect("x axis"),
        Axis::new(0.0, 4.0).expect("y axis"),
    );
    let mut canvas = Canvas::new(Viewport::new(width, height));
    step.plot(&mut canvas, &plot);
    canvas.into_frame()
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_fill_and_stroke() {
    let mut renderer = CairoRenderer::new(320, 200).expect("renderer");
    renderer.render(&plotted_frame(320, 200)).expect("render");

    let stats = renderer.last_stats();
    assert_eq!(stats.fills_drawn, 1);
    assert_eq!(stats.strokes_drawn, 1);
}

#[test]
fn cairo_renderer_flips_y_up_frames() {
    let mut renderer = CairoRenderer::new(40, 40).expect("renderer");
    let mut canvas = Canvas::new(Viewport::new(40, 40));
    canvas.fill_polygon(
        Color::rgb(0.0, 0.0, 1.0),
        &[
            step_plot::Point::new(0.0, 0.0),
            step_plot::Point::new(0.0, 10.0),
            step_plot::Point::new(40.0, 10.0),
            step_plot::Point::new(40.0, 0.0),
        ],
    );
    renderer.render(canvas.frame()).expect("render");

    let stride = usize::try_from(renderer.surface().stride()).expect("stride");
    let mut bottom = 0_u32;
    let mut top = 0_u32;
    renderer
        .surface()
        .with_data(|data| {
            bottom = u32::from_ne_bytes([
                data[stride * 35],
                data[stride * 35 + 1],
                data[stride * 35 + 2],
                data[stride * 35 + 3],
            ]);
            top = u32::from_ne_bytes([data[0], data[1], data[2], data[3]]);
        })
        .expect("surface data");

    assert_eq!(bottom, 0xFF00_00FF);
    assert_eq!(top, 0xFFFF_FFFF);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let mut renderer = CairoRenderer::new(320, 200).expect("renderer");
    let surface = ImageSurface::create(Format::ARgb32, 320, 200).expect("surface");
    let context = Context::new(&surface).expect("context");

    renderer
        .render_on_cairo_context(&context, &plotted_frame(320, 200))
        .expect("render on context");
    assert_eq!(renderer.last_stats().strokes_drawn, 1);
}

#[test]
fn cairo_renderer_rejects_invalid_clear_color() {
    let mut renderer = CairoRenderer::new(10, 10).expect("renderer");
    assert!(renderer.set_clear_color(Color::rgba(0.0, 0.0, 0.0, 1.5)).is_err());
    assert_eq!(renderer.clear_color(), Color::rgb(1.0, 1.0, 1.0));
}

#[test]
fn cairo_renderer_writes_png() {
    let mut renderer = CairoRenderer::new(64, 32).expect("renderer");
    renderer.render(&plotted_frame(64, 32)).expect("render");

    let path = std::env::temp_dir().join(format!("step_plot_{}.png", std::process::id()));
    renderer.write_png(&path).expect("write png");
    let written = std::fs::metadata(&path).expect("png metadata");
    assert!(written.len() > 0);
    let _ = std::fs::remove_file(&path);
}
