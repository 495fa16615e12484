use chrono::NaiveDate;
use serde_json::{json, Value};
use tempfile::TempDir;
use veramate_knowledge::KnowledgeValidator;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// A writable copy of the compliant fixture tree.
fn tree() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    test_fixtures::copy_knowledge_tree(dir.path());
    dir
}

fn fixture(mode: &str, category: &str) -> Value {
    test_fixtures::load_fixture_value(&format!("knowledge/{mode}/{category}.json"))
}

fn validate(dir: &TempDir) -> veramate_core::models::ValidationReport {
    KnowledgeValidator::new(dir.path()).validate_all_as_of(today())
}

#[test]
fn compliant_fixture_set_is_clean() {
    let report = KnowledgeValidator::new(test_fixtures::knowledge_root()).validate_all();
    assert!(report.is_clean(), "{}", report.summary());
}

#[test]
fn two_safety_warnings_reports_file_and_field() {
    let dir = tree();
    let mut doc = fixture("scientific", "fungal");
    doc["safety_warnings"] = json!(["Wear gloves.", "Keep away from pets."]);
    test_fixtures::write_knowledge_file(dir.path(), "scientific", "fungal", &doc);

    let report = validate(&dir);
    assert_eq!(report.len(), 1, "{}", report.summary());
    assert!(report.has_violation("scientific/fungal.json", "safety_warnings"));
}

#[test]
fn duplicate_and_blank_entries_do_not_count() {
    let dir = tree();
    let mut doc = fixture("ayurvedic", "rot");
    doc["when_to_consult_expert"] = json!(["Stem is soft.", "Stem is soft.", "  ", "Roots are gone."]);
    test_fixtures::write_knowledge_file(dir.path(), "ayurvedic", "rot", &doc);

    let report = validate(&dir);
    assert!(report.has_violation("ayurvedic/rot.json", "when_to_consult_expert"));
}

#[test]
fn violations_accumulate_across_files() {
    let dir = tree();

    let mut fungal = fixture("scientific", "fungal");
    fungal.as_object_mut().unwrap().remove("dosage_frequency");
    fungal["citations"] = json!([fungal["citations"][0].clone()]);
    test_fixtures::write_knowledge_file(dir.path(), "scientific", "fungal", &fungal);

    let mut prevention = fixture("ayurvedic", "general_prevention");
    prevention["reviewed_by"] = json!("");
    test_fixtures::write_knowledge_file(dir.path(), "ayurvedic", "general_prevention", &prevention);

    let report = validate(&dir);
    assert!(report.has_violation("scientific/fungal.json", "dosage_frequency"));
    assert!(report.has_violation("scientific/fungal.json", "citations"));
    assert!(report.has_violation("ayurvedic/general_prevention.json", "reviewed_by"));
    assert_eq!(report.len(), 3, "{}", report.summary());
}

#[test]
fn step_structure_is_checked() {
    let dir = tree();
    let mut doc = fixture("scientific", "rot");
    doc["treatment_steps"][1]["description"] = json!("Too short.");
    doc["treatment_steps"][2]["step_number"] = json!(7);
    doc["treatment_steps"][3].as_object_mut().unwrap().remove("materials_needed");
    test_fixtures::write_knowledge_file(dir.path(), "scientific", "rot", &doc);

    let report = validate(&dir);
    assert!(report.has_violation("scientific/rot.json", "treatment_steps[1].description"));
    assert!(report.has_violation("scientific/rot.json", "treatment_steps[2].step_number"));
    assert!(report.has_violation("scientific/rot.json", "treatment_steps[3].materials_needed"));
}

#[test]
fn too_few_steps_is_a_violation() {
    let dir = tree();
    let mut doc = fixture("scientific", "general_prevention");
    doc["treatment_steps"].as_array_mut().unwrap().truncate(2);
    test_fixtures::write_knowledge_file(dir.path(), "scientific", "general_prevention", &doc);

    let report = validate(&dir);
    assert!(report.has_violation("scientific/general_prevention.json", "treatment_steps"));
}

#[test]
fn citation_fields_and_years_are_checked() {
    let dir = tree();
    let mut doc = fixture("scientific", "fungal");
    doc["citations"][0]["year"] = json!(1850);
    doc["citations"][1]["year"] = json!(2031);
    doc["citations"][1]["authors"] = json!([]);
    test_fixtures::write_knowledge_file(dir.path(), "scientific", "fungal", &doc);

    let report = validate(&dir);
    assert!(report.has_violation("scientific/fungal.json", "citations[0].year"));
    assert!(report.has_violation("scientific/fungal.json", "citations[1].year"));
    assert!(report.has_violation("scientific/fungal.json", "citations[1].authors"));
}

#[test]
fn last_updated_must_be_a_past_date() {
    let dir = tree();
    let mut future = fixture("scientific", "fungal");
    future["last_updated"] = json!("2025-03-01");
    test_fixtures::write_knowledge_file(dir.path(), "scientific", "fungal", &future);

    let mut garbled = fixture("scientific", "rot");
    garbled["last_updated"] = json!("June 2024");
    test_fixtures::write_knowledge_file(dir.path(), "scientific", "rot", &garbled);

    let report = validate(&dir);
    assert!(report.has_violation("scientific/fungal.json", "last_updated"));
    assert!(report.has_violation("scientific/rot.json", "last_updated"));
}

#[test]
fn invalid_json_names_the_file() {
    let dir = tree();
    std::fs::write(dir.path().join("ayurvedic/fungal.json"), "{ \"disease_id\": ").unwrap();

    let report = validate(&dir);
    assert!(report.has_violation("ayurvedic/fungal.json", "document"));
}

#[test]
fn wrong_field_type_is_reported_at_its_path() {
    let dir = tree();
    let mut doc = fixture("ayurvedic", "fungal");
    doc["safety_warnings"] = json!("wear gloves");
    doc["citations"][0]["year"] = json!("recent");
    test_fixtures::write_knowledge_file(dir.path(), "ayurvedic", "fungal", &doc);

    let report = validate(&dir);
    let fields: Vec<_> = report
        .violations_for("ayurvedic/fungal.json")
        .map(|v| v.field.as_str())
        .collect();
    assert_eq!(fields, vec!["citations[0].year", "safety_warnings"], "{}", report.summary());
    assert!(!report.has_violation("ayurvedic/fungal.json", "document"));
}

#[test]
fn quoted_citation_year_does_not_mask_other_violations() {
    let dir = tree();
    let mut doc = fixture("scientific", "fungal");
    doc["citations"][0]["year"] = json!("2019");
    doc["safety_warnings"] = json!(["Wear gloves.", "Keep away from pets."]);
    test_fixtures::write_knowledge_file(dir.path(), "scientific", "fungal", &doc);

    let report = validate(&dir);
    assert_eq!(report.len(), 1, "{}", report.summary());
    assert!(report.has_violation("scientific/fungal.json", "safety_warnings"));
}

#[test]
fn quoted_citation_year_is_accepted() {
    let dir = tree();
    let mut doc = fixture("scientific", "fungal");
    doc["citations"][0]["year"] = json!("2019");
    test_fixtures::write_knowledge_file(dir.path(), "scientific", "fungal", &doc);

    let report = validate(&dir);
    assert!(report.is_clean(), "{}", report.summary());
}

#[test]
fn non_object_step_skips_its_field_checks() {
    let dir = tree();
    let mut doc = fixture("scientific", "rot");
    doc["treatment_steps"][1] = json!("water less");
    test_fixtures::write_knowledge_file(dir.path(), "scientific", "rot", &doc);

    let report = validate(&dir);
    let fields: Vec<_> = report
        .violations_for("scientific/rot.json")
        .map(|v| v.field.as_str())
        .collect();
    assert_eq!(fields, vec!["treatment_steps[1]"], "{}", report.summary());
}

#[test]
fn category_must_match_file_name() {
    let dir = tree();
    let doc = fixture("scientific", "fungal");
    test_fixtures::write_knowledge_file(dir.path(), "scientific", "sunburn", &doc);

    let report = validate(&dir);
    assert!(report.has_violation("scientific/sunburn.json", "category"));
}

#[test]
fn missing_mode_directory_is_a_violation() {
    let dir = tree();
    std::fs::remove_dir_all(dir.path().join("ayurvedic")).unwrap();

    let report = validate(&dir);
    assert!(report.has_violation("ayurvedic/", "directory"));
}

#[test]
fn required_categories_must_exist() {
    let dir = tree();
    let report = KnowledgeValidator::new(dir.path())
        .with_required_categories(["scientific/fungal", "scientific/sunburn", "herbal/rot"])
        .validate_all_as_of(today());

    assert!(report.has_violation("scientific/sunburn.json", "file"));
    assert!(report.has_violation("herbal/rot", "required_categories"));
    assert_eq!(report.len(), 2);
}

#[test]
fn non_json_files_are_ignored() {
    let dir = tree();
    std::fs::write(dir.path().join("scientific/README.md"), "notes").unwrap();
    assert!(validate(&dir).is_clean());
}

#[test]
fn scan_returns_typed_documents() {
    let outcome = KnowledgeValidator::new(test_fixtures::knowledge_root()).scan(today());
    assert_eq!(outcome.files_scanned, 6);
    assert_eq!(outcome.documents.len(), 6);
    assert!(outcome
        .documents
        .iter()
        .any(|d| d.category == "fungal" && d.entry.treatment_steps.len() == 4));
}

#[test]
fn summary_lists_each_violation() {
    let dir = tree();
    let mut doc = fixture("scientific", "fungal");
    doc["safety_warnings"] = json!(["only one"]);
    test_fixtures::write_knowledge_file(dir.path(), "scientific", "fungal", &doc);

    let summary = validate(&dir).summary();
    assert!(summary.starts_with("Knowledge validation found 1 violation(s):"));
    assert!(summary.contains("scientific/fungal.json [safety_warnings]"));
}
