use step_plot::api::{STEP_CONFIG_JSON_SCHEMA_V1, Step, StepConfig};
use step_plot::core::{StepKind, XYs};
use step_plot::render::{Color, LineStyle};

fn styled_config() -> StepConfig {
    StepConfig {
        step_kind: StepKind::Mid,
        line_style: Some(LineStyle::new(2.5, Color::rgb(0.2, 0.3, 0.4)).with_dashes(vec![4.0, 2.0], 1.0)),
        fill_color: Some(Color::rgba(0.2, 0.3, 0.4, 0.25)),
    }
}

#[test]
fn default_config_strokes_pre_steps_without_fill() {
    let config = StepConfig::default();
    assert_eq!(config.step_kind, StepKind::Pre);
    assert_eq!(config.line_style, Some(LineStyle::default()));
    assert_eq!(config.fill_color, None);
    config.validate().expect("default config is valid");
}

#[test]
fn bare_json_round_trips() {
    let config = styled_config();
    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"mid\""));

    let parsed = StepConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn versioned_contract_round_trips() {
    let config = styled_config();
    let json = config.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {STEP_CONFIG_JSON_SCHEMA_V1}")));

    let parsed = StepConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let json = r#"{ "schema_version": 99, "config": { "step_kind": "post" } }"#;
    let err = StepConfig::from_json_str(json).expect_err("unsupported version");
    assert!(err.to_string().contains("unsupported step config schema version: 99"));
}

#[test]
fn missing_keys_use_defaults_and_null_disables_the_line() {
    let parsed = StepConfig::from_json_str(r#"{ "step_kind": "post" }"#).expect("parse");
    assert_eq!(parsed.step_kind, StepKind::Post);
    assert_eq!(parsed.line_style, Some(LineStyle::default()));
    assert_eq!(parsed.fill_color, None);

    let no_line = StepConfig::from_json_str(r#"{ "line_style": null }"#).expect("parse");
    assert_eq!(no_line.line_style, None);
    assert_eq!(no_line.step_kind, StepKind::Pre);
}

#[test]
fn invalid_styles_are_rejected() {
    let bad_color = r#"{ "fill_color": { "red": 2.0, "green": 0.0, "blue": 0.0, "alpha": 1.0 } }"#;
    assert!(StepConfig::from_json_str(bad_color).is_err());

    let bad_width = r#"{ "line_style": { "width": 0.0, "color": { "red": 0.0, "green": 0.0, "blue": 0.0, "alpha": 1.0 } } }"#;
    assert!(StepConfig::from_json_str(bad_width).is_err());

    let bad_dashes = StepConfig {
        line_style: Some(LineStyle::default().with_dashes(vec![0.0, 0.0], 0.0)),
        ..StepConfig::default()
    };
    assert!(bad_dashes.validate().is_err());
}

#[test]
fn unknown_fields_and_kinds_are_rejected() {
    assert!(StepConfig::from_json_str(r#"{ "step": "pre" }"#).is_err());
    assert!(StepConfig::from_json_str(r#"{ "step_kind": "sideways" }"#).is_err());
    assert!(StepConfig::from_json_str("not json").is_err());
}

#[test]
fn malformed_bare_config_reports_its_own_error() {
    let err = StepConfig::from_json_str(r#"{ "step_kind": "diagonal" }"#).expect_err("bad kind");
    let message = err.to_string();
    assert!(message.contains("diagonal"), "{message}");
    assert!(!message.contains("schema_version"), "{message}");
}

#[test]
fn malformed_contract_payload_is_reported_as_contract_error() {
    let json = r#"{ "schema_version": 1, "config": { "step_kind": "diagonal" } }"#;
    let err = StepConfig::from_json_str(json).expect_err("bad kind");
    assert!(err.to_string().contains("contract v1"));
}

#[test]
fn step_element_exposes_its_config() {
    let config = styled_config();
    let step = Step::from_config(XYs::empty(), config.clone());
    assert_eq!(step.config(), config);
    assert_eq!(step.step_kind(), StepKind::Mid);
    assert_eq!(step.fill_color(), config.fill_color);
    assert_eq!(step.line_style(), config.line_style.as_ref());
}
