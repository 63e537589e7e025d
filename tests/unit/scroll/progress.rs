use super::*;

fn page(scroll_y: f64) -> ScrollState {
    // 1000 units of scrollable distance.
    ScrollState::new(scroll_y, 1800.0, 800.0)
}

fn in_unit(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

#[test]
fn max_scroll_has_floor_of_one() {
    assert_eq!(page(0.0).max_scroll(), 1000.0);
    assert_eq!(ScrollState::new(0.0, 500.0, 800.0).max_scroll(), 1.0);
    assert_eq!(ScrollState::new(0.0, 800.0, 800.0).max_scroll(), 1.0);
}

#[test]
fn windows_match_tuned_literals() {
    let w = ScrollWindows::default();
    let p = ScrollProgress::derive(page(250.0), &w);
    assert!((p.base - 0.5).abs() < 1e-12);
    assert!((p.quaternary_raw - 0.25).abs() < 1e-12);
    assert!((p.quaternary_scale - 0.625).abs() < 1e-12);
    assert!((p.quaternary_line - 0.4).abs() < 1e-12);

    let p = ScrollProgress::derive(page(500.0), &w);
    assert_eq!(p.base, 1.0);
    assert_eq!(p.quaternary_scale, 1.0);
}

#[test]
fn all_values_stay_in_unit_interval() {
    let w = ScrollWindows::default();
    for y in [-500.0, -1.0, 0.0, 1.0, 150.0, 399.0, 400.0, 999.0, 1000.0, 5000.0] {
        let p = ScrollProgress::derive(page(y), &w);
        assert!(in_unit(p.base), "base out of range at {y}");
        assert!(in_unit(p.quaternary_raw), "raw out of range at {y}");
        assert!(in_unit(p.quaternary_scale), "scale out of range at {y}");
        assert!(in_unit(p.quaternary_line), "line out of range at {y}");
    }
}

#[test]
fn quaternary_line_window_edges() {
    let w = ScrollWindows::default();
    for y in [-20.0, 0.0, 100.0, 149.0, 150.0] {
        assert_eq!(ScrollProgress::derive(page(y), &w).quaternary_line, 0.0);
    }
    for y in [400.0, 401.0, 700.0, 1000.0, 1500.0] {
        assert_eq!(ScrollProgress::derive(page(y), &w).quaternary_line, 1.0);
    }
}

#[test]
fn short_page_saturates_immediately() {
    let p = ScrollProgress::derive(ScrollState::new(3.0, 600.0, 800.0), &ScrollWindows::default());
    assert_eq!(p.base, 1.0);
    assert_eq!(p.quaternary_raw, 1.0);
    assert_eq!(p.quaternary_line, 1.0);
}
