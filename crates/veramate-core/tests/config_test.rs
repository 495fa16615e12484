use std::collections::HashMap;
use std::path::PathBuf;

use veramate_core::config::*;
use veramate_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = VeraMateConfig::from_toml("").unwrap();

    // Calibration defaults
    assert_eq!(
        config.calibration.stage_a_artifact,
        PathBuf::from("artifacts/stage_a/calibration.json")
    );

    // Fusion defaults
    assert_eq!(config.fusion.stage_b_bypass_threshold, None);
    assert_eq!(config.fusion.healthy_index, 0);
    assert_eq!(
        config.fusion.disease_labels,
        vec!["aloe_rot", "aloe_rust", "anthracnose", "leaf_spot", "sunburn"]
    );

    // Confidence defaults
    assert_eq!(config.confidence.high_threshold, 0.80);
    assert_eq!(config.confidence.medium_threshold, 0.60);

    // Knowledge defaults
    assert_eq!(config.knowledge.root, PathBuf::from("data/knowledge"));
    assert!(config.knowledge.required_categories.is_empty());

    // Inference defaults
    assert_eq!(config.inference.timeout_ms, 10_000);
    assert_eq!(config.inference.max_images, 3);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);

    assert!(config.validate().is_ok());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[fusion]
stage_b_bypass_threshold = 0.85

[knowledge]
root = "/srv/knowledge"
required_categories = ["scientific/fungal"]
"#;
    let config = VeraMateConfig::from_toml(toml).unwrap();
    assert_eq!(config.fusion.stage_b_bypass_threshold, Some(0.85));
    assert_eq!(config.knowledge.root, PathBuf::from("/srv/knowledge"));
    assert_eq!(config.knowledge.required_categories, vec!["scientific/fungal"]);
    // Non-overridden fields keep defaults
    assert_eq!(config.fusion.disease_labels.len(), 5);
    assert_eq!(config.confidence.high_threshold, 0.80);
}

#[test]
fn config_serde_roundtrip() {
    let mut config = VeraMateConfig::default();
    config.fusion.stage_b_bypass_threshold = Some(0.9);
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = VeraMateConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.fusion.stage_b_bypass_threshold, Some(0.9));
    assert_eq!(roundtripped.inference.max_images, config.inference.max_images);
}

#[test]
fn config_rejects_inverted_thresholds() {
    let mut config = VeraMateConfig::default();
    config.confidence.medium_threshold = 0.85;
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "confidence.medium_threshold"));
}

#[test]
fn config_rejects_out_of_range_bypass_threshold() {
    let mut config = VeraMateConfig::default();
    config.fusion.stage_b_bypass_threshold = Some(1.5);
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_duplicate_disease_labels() {
    let mut config = VeraMateConfig::default();
    config.fusion.disease_labels = vec!["leaf_spot".into(), "leaf_spot".into()];
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn config_rejects_reserved_class_ids_as_disease_labels() {
    for reserved in ["healthy", "unhealthy_unspecified"] {
        let mut config = VeraMateConfig::default();
        config.fusion.disease_labels = vec![reserved.into(), "aloe_rot".into()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("reserved"), "{reserved}: {err}");
    }
}

#[test]
fn config_rejects_zero_timeout_and_zero_images() {
    let mut config = VeraMateConfig::default();
    config.inference.timeout_ms = 0;
    assert!(config.validate().is_err());

    let mut config = VeraMateConfig::default();
    config.inference.max_images = 0;
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_malformed_required_category() {
    let mut config = VeraMateConfig::default();
    config.knowledge.required_categories = vec!["fungal".into()];
    assert!(config.validate().is_err());
}

#[test]
fn env_overrides_apply_and_ignore_unparseable_values() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("VERAMATE_KNOWLEDGE_ROOT", "/opt/kb"),
        ("VERAMATE_STAGE_B_BYPASS_THRESHOLD", "0.9"),
        ("VERAMATE_INFERENCE_TIMEOUT_MS", "not-a-number"),
        ("VERAMATE_MAX_IMAGES", "5"),
    ]);
    let mut config = VeraMateConfig::default();
    config.apply_overrides_from(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.knowledge.root, PathBuf::from("/opt/kb"));
    assert_eq!(config.fusion.stage_b_bypass_threshold, Some(0.9));
    assert_eq!(config.inference.timeout_ms, 10_000);
    assert_eq!(config.inference.max_images, 5);
}

#[test]
fn log_overrides_reach_observability_config() {
    let env = HashMap::from([
        ("VERAMATE_LOG_LEVEL", "veramate_knowledge=debug"),
        ("VERAMATE_LOG_JSON", "true"),
    ]);
    let mut config = VeraMateConfig::default();
    config.apply_overrides_from(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.observability.log_level, "veramate_knowledge=debug");
    assert!(config.observability.json);
}

#[test]
fn load_reads_file_and_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("veramate.toml");
    std::fs::write(&path, "[inference]\nmax_images = 2\n").unwrap();

    let config = VeraMateConfig::from_file(&path).unwrap();
    assert_eq!(config.inference.max_images, 2);

    let missing = dir.path().join("absent.toml");
    let err = VeraMateConfig::load(Some(&missing)).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn load_reports_parse_errors_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[fusion\nhealthy_index = ").unwrap();

    let err = VeraMateConfig::from_file(&path).unwrap_err();
    match err {
        ConfigError::ParseError { path: p, .. } => assert!(p.ends_with("broken.toml")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn bypass_check_respects_configured_threshold() {
    let mut fusion = FusionConfig::default();
    assert!(!fusion.bypasses_stage_b(0.99), "no threshold means stage B always runs");

    fusion.stage_b_bypass_threshold = Some(0.85);
    assert!(fusion.bypasses_stage_b(0.85));
    assert!(!fusion.bypasses_stage_b(0.8499));
}
