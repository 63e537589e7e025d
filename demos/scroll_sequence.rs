//! Render a strip of frames across the whole scroll range of the fixture scene.
//!
//! `cargo run --example scroll_sequence` writes PNGs to `target/scroll_sequence/`.

use std::path::PathBuf;

use orbline::{
    CpuSurface, HostEvent, ManualScheduler, OrbLineRenderer, RendererConfig, StaticLayout,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let s = include_str!("../tests/fixtures/scene.json");
    let mut layout = StaticLayout::from_json_str(s)?;
    let max_scroll = layout.scroll.max_scroll();

    let mut renderer = OrbLineRenderer::new(RendererConfig::default());
    let mut surface = CpuSurface::new();
    let mut scheduler = ManualScheduler::new();
    renderer.handle_event(HostEvent::Load, &mut layout, &mut surface, &mut scheduler);

    let out_dir = PathBuf::from("target").join("scroll_sequence");
    let frames = 12u32;
    for i in 0..=frames {
        layout.set_scroll_y(max_scroll * f64::from(i) / f64::from(frames));
        if scheduler.take_pending().is_none() {
            continue;
        }
        let Some(report) = renderer.handle_event(
            HostEvent::AnimationFrame,
            &mut layout,
            &mut surface,
            &mut scheduler,
        ) else {
            continue;
        };

        let scale = layout.take_writes().pop().map(|w| w.value);

        let path = out_dir.join(format!("frame_{i:02}.png"));
        surface.readback().save_png(&path)?;
        println!(
            "{}: base {:.2}, quaternary line {:.2}, {} strokes, orb scale {}",
            path.display(),
            report.progress.base,
            report.progress.quaternary_line,
            report.strokes,
            scale.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
