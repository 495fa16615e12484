use veramate_core::models::*;

#[test]
fn aggregated_prediction_top_prefers_earlier_class_on_ties() {
    let pred = AggregatedPrediction::new(["healthy", "leaf_spot", "sunburn"], &[0.4, 0.4, 0.2], 2);
    let top = pred.top().unwrap();
    assert_eq!(top.class_id, "healthy");
    assert_eq!(pred.images_used, 2);
}

#[test]
fn aggregated_prediction_top_k_sorts_descending() {
    let pred = AggregatedPrediction::new(
        ["healthy", "aloe_rot", "leaf_spot", "sunburn"],
        &[0.1, 0.2, 0.6, 0.1],
        1,
    );
    let top = pred.top_k(3);
    let ids: Vec<&str> = top.iter().map(|c| c.class_id.as_str()).collect();
    assert_eq!(ids, vec!["leaf_spot", "aloe_rot", "healthy"]);
    assert!((pred.total() - 1.0).abs() < 1e-12);
    assert_eq!(pred.get("leaf_spot"), Some(0.6));
    assert_eq!(pred.get("anthracnose"), None);
}

#[test]
fn empty_prediction_has_no_top() {
    let pred = AggregatedPrediction::new(Vec::<String>::new(), &[], 0);
    assert!(pred.top().is_none());
    assert!(pred.is_empty());
}

#[test]
fn rejection_reasons_parse_gate_labels() {
    assert_eq!(RejectionReason::from_label("blur"), RejectionReason::Blurry);
    assert_eq!(RejectionReason::from_label("Poor Lighting"), RejectionReason::TooDark);
    assert_eq!(RejectionReason::from_label("overexposed"), RejectionReason::TooBright);
    assert_eq!(RejectionReason::from_label("low-resolution"), RejectionReason::LowResolution);
    assert_eq!(
        RejectionReason::from_label("finger_over_lens"),
        RejectionReason::Other("finger_over_lens".into())
    );
}

#[test]
fn quality_verdict_from_gate_drops_blank_reason() {
    let verdict = QualityVerdict::from_gate(false, Some("  "));
    assert!(!verdict.valid);
    assert!(verdict.reason.is_none());

    let verdict = QualityVerdict::from_gate(false, Some("blurry"));
    assert_eq!(verdict.reason, Some(RejectionReason::Blurry));
}

#[test]
fn image_sample_builders_keep_quality_and_stages() {
    let sample = ImageSample::new("img-1", RawScores::Probabilities(vec![0.3, 0.7]))
        .with_stage_b(RawScores::Logits(vec![1.0, 0.0, 0.0, 0.0, 0.0]));
    assert!(sample.is_valid());
    assert_eq!(sample.stage_a().unwrap().len(), 2);
    assert!(matches!(sample.stage_b(), Some(RawScores::Logits(_))));

    let rejected = ImageSample::rejected("img-2", RejectionReason::TooDark);
    assert!(!rejected.is_valid());
    assert!(rejected.stage_a().is_none());
    assert_eq!(rejected.quality().reason, Some(RejectionReason::TooDark));
}

#[test]
fn raw_scores_serialize_with_kind_tag() {
    let json = serde_json::to_string(&RawScores::Logits(vec![1.0, 2.0])).unwrap();
    assert_eq!(json, r#"{"kind":"logits","values":[1.0,2.0]}"#);
}

#[test]
fn guidance_mode_parses_case_insensitively() {
    assert_eq!("SCIENTIFIC".parse::<GuidanceMode>().unwrap(), GuidanceMode::Scientific);
    assert_eq!("ayurvedic".parse::<GuidanceMode>().unwrap(), GuidanceMode::Ayurvedic);
    assert!("herbal".parse::<GuidanceMode>().is_err());
    assert_eq!(GuidanceMode::Ayurvedic.dir_name(), "ayurvedic");
}

#[test]
fn safe_fallback_depends_only_on_disease_and_mode() {
    let a = SafeFallbackResponse::new("sunburn", "SCIENTIFIC");
    let b = SafeFallbackResponse::new("sunburn", "SCIENTIFIC");
    assert_eq!(serde_json::to_vec(&a).unwrap(), serde_json::to_vec(&b).unwrap());
    assert_eq!(a.error_code, "CURATED_KNOWLEDGE_NOT_AVAILABLE");
    assert!(a.message.contains("'sunburn'"));
    assert!(a.message.contains("SCIENTIFIC"));
    assert_eq!(a.actionable_steps.len(), 5);
    assert_eq!(a.escalation_resources.len(), 4);

    let other = SafeFallbackResponse::new("sunburn", "AYURVEDIC");
    assert_ne!(a, other);
}

#[test]
fn decision_serializes_screaming_case_enums() {
    let decision = DiagnosisDecision {
        disease_id: Some("healthy".into()),
        probability: Some(0.92),
        status: ConfidenceStatus::High,
        next_step: NextStep::ShowTreatment,
        retake_message: None,
        valid_images: 3,
        total_images: 3,
    };
    let json = serde_json::to_value(&decision).unwrap();
    assert_eq!(json["status"], "HIGH");
    assert_eq!(json["next_step"], "SHOW_TREATMENT");
    assert!(decision.shows_treatment());
    assert!(!decision.needs_caution_banner());
}

#[test]
fn validation_report_summary_lists_every_violation() {
    let mut report = ValidationReport::new();
    assert!(report.summary().contains("successfully"));

    report.push("scientific/fungal.json", "safety_warnings", "only 2 entries");
    report.push("ayurvedic/rot.json", "last_updated", "date is in the future");
    let summary = report.summary();
    assert!(summary.contains("2 violation(s)"));
    assert!(summary.contains("scientific/fungal.json [safety_warnings]"));
    assert!(summary.contains("ayurvedic/rot.json [last_updated]"));
    assert!(report.has_violation("scientific/fungal.json", "safety_warnings"));
    assert_eq!(report.violations_for("ayurvedic/rot.json").count(), 1);
}
