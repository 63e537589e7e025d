use super::*;

#[test]
fn defaults_are_the_shipped_constants() {
    let cfg = RendererConfig::default();
    assert_eq!(cfg.steps, 72);
    assert_eq!(cfg.emerge_inset, 8.0);
    assert_eq!(cfg.primary_secondary, LineWidths::new(6.0, 10.0));
    assert_eq!(cfg.secondary_tertiary, LineWidths::new(10.0, 50.0));
    assert_eq!(cfg.primary_tertiary, LineWidths::new(8.0, 14.0));
    assert_eq!(cfg.quaternary, LineWidths::new(9.0, 16.0));
    assert_eq!(cfg.default_color, "#0f0f0f");
    assert_eq!(cfg.default_quaternary_color, "#84c318");
    assert_eq!(cfg.windows, ScrollWindows::default());
    cfg.validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = RendererConfig::from_json_str(r#"{ "steps": 24, "windows": { "base_span": 0.75 } }"#)
        .unwrap();
    assert_eq!(cfg.steps, 24);
    assert_eq!(cfg.windows.base_span, 0.75);
    assert_eq!(cfg.windows.line_start, 0.15);
    assert_eq!(cfg.secondary_tertiary, LineWidths::new(10.0, 50.0));
}

#[test]
fn validate_rejects_bad_values() {
    let cfg = RendererConfig {
        steps: 0,
        ..RendererConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(OrblineError::Validation(_))));

    let mut cfg = RendererConfig::default();
    cfg.quaternary.max = -1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = RendererConfig::default();
    cfg.windows.line_span = 0.0;
    assert!(cfg.validate().is_err());

    let cfg = RendererConfig {
        scale_property: String::new(),
        ..RendererConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = RendererConfig::from_json_str("{ steps: ").unwrap_err();
    assert!(matches!(err, OrblineError::Serde(_)));
}
