use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "orbline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame of a scene as a PNG.
    Frame(FrameArgs),
    /// Print the stroke plan of a scene as JSON.
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Input scene JSON (element boxes, styles, scroll state).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override the scene's scroll position.
    #[arg(long)]
    scroll: Option<f64>,

    /// Override the scene's device pixel ratio.
    #[arg(long)]
    dpr: Option<f64>,

    /// Renderer config JSON; missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Include every stroke segment, not just per-line summaries.
    #[arg(long)]
    segments: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn read_scene(args: &SceneArgs) -> anyhow::Result<orbline::StaticLayout> {
    let s = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("open scene '{}'", args.in_path.display()))?;
    let mut scene =
        orbline::StaticLayout::from_json_str(&s).with_context(|| "parse scene JSON")?;
    if let Some(y) = args.scroll {
        scene.set_scroll_y(y);
    }
    if let Some(dpr) = args.dpr {
        scene.device_pixel_ratio = dpr;
    }
    Ok(scene)
}

fn read_config(path: Option<&Path>) -> anyhow::Result<orbline::RendererConfig> {
    match path {
        Some(p) => Ok(orbline::RendererConfig::from_json_path(p)?),
        None => Ok(orbline::RendererConfig::default()),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut scene = read_scene(&args.scene)?;
    let config = read_config(args.scene.config.as_deref())?;

    let mut renderer = orbline::OrbLineRenderer::new(config);
    let mut surface = orbline::CpuSurface::new();
    let report = renderer
        .recompute(&mut scene, &mut surface)
        .with_context(|| "scene is missing the background, surface or a mandatory orb")?;

    surface.readback().save_png(&args.out)?;

    eprintln!(
        "wrote {} ({}x{}, {} lines, {} strokes)",
        args.out.display(),
        report.pixel_size.width,
        report.pixel_size.height,
        report.lines,
        report.strokes
    );
    Ok(())
}

#[derive(serde::Serialize)]
struct PlanDump<'a> {
    pixel_size: orbline::PixelSize,
    dpr: f64,
    progress: orbline::ScrollProgress,
    total_segments: usize,
    lines: Vec<LineDump<'a>>,
}

#[derive(serde::Serialize)]
struct LineDump<'a> {
    from: orbline::Point,
    to: orbline::Point,
    widths: orbline::LineWidths,
    reveal: Option<orbline::LineReveal>,
    segment_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    segments: Option<&'a [orbline::StrokeSegment]>,
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let scene = read_scene(&args.scene)?;
    let config = read_config(args.scene.config.as_deref())?;

    let plan = orbline::plan_frame(&scene, &config)
        .with_context(|| "scene is missing the background, surface or a mandatory orb")?;

    let lines = plan
        .lines
        .iter()
        .zip(&plan.strokes.lines)
        .map(|(spec, tapered)| LineDump {
            from: spec.a.center,
            to: spec.b.center,
            widths: spec.widths,
            reveal: tapered.reveal,
            segment_count: tapered.segments.len(),
            segments: args.segments.then_some(tapered.segments.as_slice()),
        })
        .collect();

    let dump = PlanDump {
        pixel_size: plan.pixel_size,
        dpr: plan.dpr,
        progress: plan.progress,
        total_segments: plan.strokes.segment_count(),
        lines,
    };

    let json = serde_json::to_string_pretty(&dump).with_context(|| "serialize plan")?;
    println!("{json}");
    Ok(())
}
