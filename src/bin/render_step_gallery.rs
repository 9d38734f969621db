use std::fs;
use std::path::PathBuf;

use step_plot::api::{DataRanger, PlotContext, Plotter, Step, StepConfig, Thumbnailer};
use step_plot::core::{Point, Rect, StepKind, Viewport, XYs};
use step_plot::render::{Canvas, CairoRenderer, Color, LineStyle, Renderer};

const DEFAULT_OUTPUT_DIR: &str = "target/step_gallery";
const WIDTH: u32 = 640;
const HEIGHT: u32 = 360;
const MARGIN: f64 = 24.0;

#[derive(Debug)]
struct CliArgs {
    output_dir: PathBuf,
    config_path: Option<PathBuf>,
}

fn main() {
    let _ = step_plot::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let base_config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            StepConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => StepConfig {
            line_style: Some(LineStyle::new(2.0, Color::rgb(0.13, 0.47, 0.78))),
            fill_color: Some(Color::rgba(0.13, 0.47, 0.78, 0.25)),
            ..StepConfig::default()
        },
    };

    fs::create_dir_all(&args.output_dir).map_err(|err| {
        format!(
            "failed to create output dir `{}`: {err}",
            args.output_dir.display()
        )
    })?;

    let xys = XYs::try_from_pairs(sample_points()).map_err(|err| err.to_string())?;
    for (name, kind) in [
        ("pre", StepKind::Pre),
        ("mid", StepKind::Mid),
        ("post", StepKind::Post),
    ] {
        let step = Step::from_config(xys.clone(), base_config.clone()).with_step_kind(kind);
        let output = args.output_dir.join(format!("step_{name}.png"));
        render_one(&step, &output)?;
        println!("wrote {}", output.display());
    }
    Ok(())
}

fn render_one(step: &Step, output: &std::path::Path) -> Result<(), String> {
    let viewport = Viewport::new(WIDTH, HEIGHT);
    let plot_area = Rect::new(
        Point::new(MARGIN, MARGIN),
        Point::new(f64::from(WIDTH) - MARGIN, f64::from(HEIGHT) - MARGIN),
    );
    let mut canvas = Canvas::with_bounds(viewport, plot_area);
    let rangers: [&dyn DataRanger; 1] = [step];
    let plot = PlotContext::fit(&rangers).map_err(|err| err.to_string())?;
    step.plot(&mut canvas, &plot);

    let mut legend = canvas.sub_canvas(Rect::from_origin_size(
        plot_area.max.x - 40.0,
        plot_area.max.y - 20.0,
        32.0,
        12.0,
    ));
    step.thumbnail(&mut legend);
    canvas.append(legend);

    let width = i32::try_from(WIDTH).map_err(|_| "width overflows i32".to_owned())?;
    let height = i32::try_from(HEIGHT).map_err(|_| "height overflows i32".to_owned())?;
    let mut renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
    renderer
        .render(canvas.frame())
        .map_err(|err| err.to_string())?;
    renderer.write_png(output).map_err(|err| err.to_string())
}

fn sample_points() -> Vec<(f64, f64)> {
    vec![
        (0.0, 1.0),
        (1.0, 3.0),
        (2.0, 2.0),
        (3.0, -1.0),
        (4.0, 0.5),
        (5.0, 2.5),
        (6.0, 2.0),
    ]
}

fn parse_args() -> Result<CliArgs, String> {
    let mut output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);
    let mut config_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => {
                let value = args.next().ok_or("missing value for --out")?;
                output_dir = PathBuf::from(value);
            }
            "--config" => {
                let value = args.next().ok_or("missing value for --config")?;
                config_path = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                println!("usage: render_step_gallery [--out <dir>] [--config <step-config.json>]");
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument `{other}`")),
        }
    }

    Ok(CliArgs {
        output_dir,
        config_path,
    })
}
