use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One numbered treatment step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentStep {
    pub step_number: u32,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub materials_needed: Vec<String>,
}

/// A literature or traditional-text reference backing an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub title: String,
    pub source: String,
    pub year: i32,
    pub authors: Vec<String>,
    pub key_findings: String,
}

/// Validated, expert-reviewed guidance for one (mode, category).
///
/// Only constructed from a knowledge file that passed validation and
/// served verbatim afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub disease_id: String,
    pub disease_name: String,
    pub category: String,
    pub treatment_steps: Vec<TreatmentStep>,
    pub dosage_frequency: String,
    pub safety_warnings: Vec<String>,
    pub when_to_consult_expert: Vec<String>,
    pub citations: Vec<Citation>,
    pub evidence_level: String,
    pub last_updated: NaiveDate,
    pub reviewed_by: String,
}
