use super::*;
use crate::{
    layout::source::StaticLayout,
    render::recording::{DrawCommand, RecordingSurface},
    runtime::frame_loop::ManualScheduler,
    scroll::progress::ScrollState,
};

/// Circle of radius `r` centred on `(cx, cy)` in container space (container at origin).
fn orb(cx: f64, cy: f64, r: f64) -> Rect {
    Rect::new(cx - r, cy - r, cx + r, cy + r)
}

/// Near-equilateral triangle; 1000 units of scroll, base progress saturates at 500.
fn triangle(scroll_y: f64) -> StaticLayout {
    StaticLayout::new(ScrollState::new(scroll_y, 1800.0, 800.0))
        .with_element(ElementId::Background, Rect::new(0.0, 0.0, 200.0, 150.0))
        .with_element(ElementId::Surface, Rect::new(0.0, 0.0, 200.0, 150.0))
        .with_element(ElementId::Primary, orb(0.0, 0.0, 20.0))
        .with_element(ElementId::Secondary, orb(100.0, 0.0, 20.0))
        .with_element(ElementId::Tertiary, orb(50.0, 86.6, 20.0))
}

fn with_quaternary(layout: StaticLayout, flat: bool) -> StaticLayout {
    let layout = layout.with_element(ElementId::Quaternary, orb(150.0, 120.0, 10.0));
    if flat {
        layout.with_element(ElementId::QuaternaryFlat, orb(150.0, 120.0, 10.0))
    } else {
        layout
    }
}

#[test]
fn full_progress_triangle_issues_72_strokes_per_line() {
    let mut layout = triangle(500.0);
    let mut surface = RecordingSurface::new();
    let mut renderer = OrbLineRenderer::default();

    let report = renderer.recompute(&mut layout, &mut surface).unwrap();
    assert_eq!(report.progress.base, 1.0);
    assert_eq!(report.lines, 3);
    assert_eq!(report.strokes, 216);
    assert_eq!(surface.stroke_count(), 216);

    let strokes: Vec<_> = surface.strokes().copied().collect();
    let ranges = [(6.0, 10.0), (10.0, 50.0), (8.0, 14.0)];
    for (chunk, (min, max)) in strokes.chunks(72).zip(ranges) {
        assert!(chunk.iter().all(|s| s.width >= min && s.width <= max));
        let thinnest = chunk.iter().map(|s| s.width).fold(f64::INFINITY, f64::min);
        let widest = chunk.iter().map(|s| s.width).fold(0.0, f64::max);
        assert!(thinnest - min < 0.01, "thinnest {thinnest} vs {min}");
        // Outermost stroke midpoints sit half a step in from the ends.
        assert!(max - widest < 0.03 * (max - min), "widest {widest} vs {max}");
    }
}

#[test]
fn frame_clears_before_drawing_and_flushes_last() {
    let mut layout = triangle(500.0).with_dpr(2.0);
    let mut surface = RecordingSurface::new();
    let mut renderer = OrbLineRenderer::default();
    renderer.recompute(&mut layout, &mut surface).unwrap();

    let cmds = surface.commands();
    assert_eq!(cmds[0], DrawCommand::SetTransform(Affine::scale(2.0)));
    assert_eq!(cmds[1], DrawCommand::ClearRect(Rect::new(0.0, 0.0, 200.0, 150.0)));
    assert!(matches!(cmds[2], DrawCommand::Stroke(_)));
    assert_eq!(cmds.last(), Some(&DrawCommand::Flush));
    assert_eq!(surface.pixel_size(), PixelSize::new(400, 300));
}

#[test]
fn surface_is_resized_only_when_the_size_changes() {
    let mut layout = triangle(100.0);
    let mut surface = RecordingSurface::new();
    let mut renderer = OrbLineRenderer::default();

    assert!(renderer.recompute(&mut layout, &mut surface).unwrap().resized);
    assert!(!renderer.recompute(&mut layout, &mut surface).unwrap().resized);
    assert_eq!(surface.resize_count(), 1);
    assert_eq!(renderer.cached_size(), Some(PixelSize::new(200, 150)));

    layout
        .elements
        .get_mut(&ElementId::Background)
        .unwrap()
        .rect = Rect::new(0.0, 0.0, 320.5, 150.0);
    let report = renderer.recompute(&mut layout, &mut surface).unwrap();
    assert!(report.resized);
    assert_eq!(report.pixel_size, PixelSize::new(320, 150));
    assert_eq!(surface.resize_count(), 2);
}

#[test]
fn missing_orb_skips_without_touching_the_surface() {
    let mut layout = triangle(500.0);
    layout.elements.remove(&ElementId::Secondary);
    let mut surface = RecordingSurface::new();
    let mut renderer = OrbLineRenderer::default();

    assert!(renderer.recompute(&mut layout, &mut surface).is_none());
    assert!(surface.commands().is_empty());
    assert_eq!(surface.resize_count(), 0);
    assert_eq!(renderer.cached_size(), None);
}

#[test]
fn missing_context_skips_after_resizing() {
    let mut layout = with_quaternary(triangle(500.0), true);
    let mut surface = RecordingSurface::without_context();
    let mut renderer = OrbLineRenderer::default();

    assert!(renderer.recompute(&mut layout, &mut surface).is_none());
    assert_eq!(surface.resize_count(), 1);
    assert!(surface.commands().is_empty());
    assert!(layout.writes.is_empty());
}

#[test]
fn orb_scale_is_written_to_both_quaternary_elements() {
    let mut layout = with_quaternary(triangle(250.0), true);
    let mut surface = RecordingSurface::new();
    let mut renderer = OrbLineRenderer::default();
    renderer.recompute(&mut layout, &mut surface).unwrap();

    let written: Vec<_> = layout
        .writes
        .iter()
        .map(|w| (w.element, w.key.as_str(), w.value.as_str()))
        .collect();
    assert_eq!(
        written,
        vec![
            (ElementId::Quaternary, "--orb-scale", "0.625"),
            (ElementId::QuaternaryFlat, "--orb-scale", "0.625"),
        ]
    );
}

#[test]
fn orb_scale_needs_the_flat_variant() {
    let mut layout = with_quaternary(triangle(250.0), false);
    let mut surface = RecordingSurface::new();
    let report = OrbLineRenderer::default()
        .recompute(&mut layout, &mut surface)
        .unwrap();
    assert!(layout.writes.is_empty());
    // The quaternary line is still drawn.
    assert_eq!(report.lines, 4);
}

#[test]
fn quaternary_line_waits_for_its_scroll_window() {
    let mut renderer = OrbLineRenderer::default();

    let mut layout = with_quaternary(triangle(0.0), true);
    let mut surface = RecordingSurface::new();
    let report = renderer.recompute(&mut layout, &mut surface).unwrap();
    assert_eq!(report.lines, 4);
    // Base lines still emerge from their orbs; the quaternary line has nothing to show.
    assert_eq!(report.strokes, 216);

    layout.set_scroll_y(400.0);
    let report = renderer.recompute(&mut layout, &mut surface).unwrap();
    assert_eq!(report.progress.quaternary_line, 1.0);
    assert_eq!(report.strokes, 288);
}

#[test]
fn quaternary_line_uses_the_blended_color() {
    let mut layout = with_quaternary(triangle(1000.0), true)
        .with_style(ElementId::Primary, "--line-color", "#000000")
        .with_style(ElementId::Quaternary, "--line-color", "rgb(255, 255, 255)");
    let mut surface = RecordingSurface::new();
    OrbLineRenderer::default()
        .recompute(&mut layout, &mut surface)
        .unwrap();

    let last = surface.strokes().last().copied().unwrap();
    assert_eq!(last.color, crate::paint::color::Rgb::new(128, 128, 128));
    assert_eq!(last.alpha, 1.0);
}

#[test]
fn plan_frame_is_pure() {
    let layout = with_quaternary(triangle(250.0), true);
    let plan = plan_frame(&layout, &RendererConfig::default()).unwrap();
    assert_eq!(plan.pixel_size, PixelSize::new(200, 150));
    assert_eq!(plan.lines.len(), 4);
    assert!(layout.writes.is_empty());
}

#[test]
fn load_starts_the_loop_once() {
    let mut layout = triangle(500.0);
    let mut surface = RecordingSurface::new();
    let mut sched = ManualScheduler::new();
    let mut renderer = OrbLineRenderer::default();

    let report = renderer.handle_event(HostEvent::Load, &mut layout, &mut surface, &mut sched);
    assert!(report.is_some());
    assert!(renderer.is_running());
    assert_eq!(sched.requested(), 1);

    renderer.handle_event(HostEvent::Load, &mut layout, &mut surface, &mut sched);
    assert_eq!(sched.requested(), 1);
    assert!(!renderer.start_loop(&mut sched));
}

#[test]
fn animation_frames_reschedule_while_running() {
    let mut layout = triangle(500.0);
    let mut surface = RecordingSurface::new();
    let mut sched = ManualScheduler::new();
    let mut renderer = OrbLineRenderer::default();

    // Not running yet: a stray frame redraws but does not request another.
    renderer.handle_event(HostEvent::AnimationFrame, &mut layout, &mut surface, &mut sched);
    assert_eq!(sched.requested(), 0);

    assert!(renderer.start_loop(&mut sched));
    for _ in 0..3 {
        assert!(sched.take_pending().is_some());
        let report =
            renderer.handle_event(HostEvent::AnimationFrame, &mut layout, &mut surface, &mut sched);
        assert!(report.is_some());
    }
    assert_eq!(sched.requested(), 4);
    assert!(sched.has_pending());
    assert_eq!(renderer.loop_state().pending(), sched.take_pending());
}

#[test]
fn scroll_and_resize_only_redraw() {
    let mut layout = triangle(500.0);
    let mut surface = RecordingSurface::new();
    let mut sched = ManualScheduler::new();
    let mut renderer = OrbLineRenderer::default();

    for event in [HostEvent::Scroll, HostEvent::Resize] {
        assert!(
            renderer
                .handle_event(event, &mut layout, &mut surface, &mut sched)
                .is_some()
        );
    }
    assert!(!renderer.is_running());
    assert_eq!(sched.requested(), 0);
}

#[test]
fn drained_logs_stay_bounded_across_frames() {
    let mut layout = with_quaternary(triangle(500.0), true);
    let mut surface = RecordingSurface::new();
    let mut scheduler = ManualScheduler::new();
    let mut renderer = OrbLineRenderer::default();
    renderer.handle_event(HostEvent::Load, &mut layout, &mut surface, &mut scheduler);

    for _ in 0..5 {
        let commands = surface.take_commands();
        let writes = layout.take_writes();
        // transform + clear + 4 lines of strokes + flush
        assert_eq!(commands.len(), 3 + 4 * 72);
        assert_eq!(writes.len(), 2);

        assert!(scheduler.take_pending().is_some());
        renderer.handle_event(
            HostEvent::AnimationFrame,
            &mut layout,
            &mut surface,
            &mut scheduler,
        );
    }
    assert_eq!(surface.commands().len(), 3 + 4 * 72);
    assert_eq!(layout.writes.len(), 2);
}
