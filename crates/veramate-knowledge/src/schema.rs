//! Raw on-disk shape of a knowledge file.
//!
//! Documents are read field by field from a JSON value. A missing field stays
//! `None`; a field of the wrong type also stays `None` and is recorded as a
//! [`TypeMismatch`] at its own path, so the remaining checks still run.
//! Only syntactically invalid JSON fails the whole document.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use veramate_core::constants::KNOWLEDGE_DATE_FORMAT;
use veramate_core::models::{Citation, KnowledgeEntry, TreatmentStep};

/// A field whose JSON type is not the one the schema expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatch {
    /// Field path, e.g. `citations[0].year`, or `document` for a non-object root.
    pub field: String,
    pub expected: &'static str,
    pub found: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct RawKnowledgeDocument {
    pub disease_id: Option<String>,
    pub disease_name: Option<String>,
    pub category: Option<String>,
    pub treatment_steps: Option<Vec<RawTreatmentStep>>,
    pub dosage_frequency: Option<String>,
    pub safety_warnings: Option<Vec<String>>,
    pub when_to_consult_expert: Option<Vec<String>>,
    pub citations: Option<Vec<RawCitation>>,
    pub evidence_level: Option<String>,
    pub last_updated: Option<String>,
    pub reviewed_by: Option<String>,
    mismatches: Vec<TypeMismatch>,
}

#[derive(Debug, Clone, Default)]
pub struct RawTreatmentStep {
    pub step_number: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub materials_needed: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct RawCitation {
    pub title: Option<String>,
    pub source: Option<String>,
    pub year: Option<i64>,
    pub authors: Option<Vec<String>>,
    pub key_findings: Option<String>,
}

impl RawKnowledgeDocument {
    /// Parse document text. Fails only on invalid JSON.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(content)?;
        Ok(Self::from_value(&value))
    }

    /// Read a document from an already-parsed JSON value.
    pub fn from_value(value: &Value) -> Self {
        let mut reader = FieldReader::default();

        let Some(root) = value.as_object() else {
            reader.mismatch("document".to_string(), "an object", value);
            return Self {
                mismatches: reader.mismatches,
                ..Self::default()
            };
        };

        let treatment_steps: Option<Vec<RawTreatmentStep>> = reader
            .objects(root, "treatment_steps")
            .map(|steps| {
                steps
                    .into_iter()
                    .enumerate()
                    .map(|(i, step)| {
                        step.map(|obj| RawTreatmentStep::read(&mut reader, obj, i))
                            .unwrap_or_default()
                    })
                    .collect()
            });
        let citations: Option<Vec<RawCitation>> = reader.objects(root, "citations").map(|citations| {
            citations
                .into_iter()
                .enumerate()
                .map(|(i, citation)| {
                    citation
                        .map(|obj| RawCitation::read(&mut reader, obj, i))
                        .unwrap_or_default()
                })
                .collect()
        });

        Self {
            disease_id: reader.string(root, "disease_id", "disease_id"),
            disease_name: reader.string(root, "disease_name", "disease_name"),
            category: reader.string(root, "category", "category"),
            treatment_steps,
            dosage_frequency: reader.string(root, "dosage_frequency", "dosage_frequency"),
            safety_warnings: reader.strings(root, "safety_warnings", "safety_warnings"),
            when_to_consult_expert: reader.strings(
                root,
                "when_to_consult_expert",
                "when_to_consult_expert",
            ),
            citations,
            evidence_level: reader.string(root, "evidence_level", "evidence_level"),
            last_updated: reader.string(root, "last_updated", "last_updated"),
            reviewed_by: reader.string(root, "reviewed_by", "reviewed_by"),
            mismatches: reader.mismatches,
        }
    }

    /// Wrong-typed fields, in reading order.
    pub fn type_mismatches(&self) -> &[TypeMismatch] {
        &self.mismatches
    }

    /// Whether `field` was present with the wrong type. Such a field is
    /// already reported and must not also be reported as missing.
    pub fn is_mistyped(&self, field: &str) -> bool {
        self.mismatches.iter().any(|m| m.field == field)
    }

    /// Typed entry for a document that passed validation.
    /// `None` if any field the entry needs is missing or out of range.
    pub fn to_entry(&self) -> Option<KnowledgeEntry> {
        let treatment_steps = self
            .treatment_steps
            .as_ref()?
            .iter()
            .map(RawTreatmentStep::to_step)
            .collect::<Option<Vec<_>>>()?;
        let citations = self
            .citations
            .as_ref()?
            .iter()
            .map(RawCitation::to_citation)
            .collect::<Option<Vec<_>>>()?;
        let last_updated =
            NaiveDate::parse_from_str(self.last_updated.as_deref()?.trim(), KNOWLEDGE_DATE_FORMAT).ok()?;

        Some(KnowledgeEntry {
            disease_id: self.disease_id.clone()?,
            disease_name: self.disease_name.clone()?,
            category: self.category.clone()?,
            treatment_steps,
            dosage_frequency: self.dosage_frequency.clone()?,
            safety_warnings: self.safety_warnings.clone()?,
            when_to_consult_expert: self.when_to_consult_expert.clone()?,
            citations,
            evidence_level: self.evidence_level.clone()?,
            last_updated,
            reviewed_by: self.reviewed_by.clone()?,
        })
    }
}

impl RawTreatmentStep {
    fn read(reader: &mut FieldReader, obj: &Map<String, Value>, i: usize) -> Self {
        let path = |field: &str| format!("treatment_steps[{i}].{field}");
        Self {
            step_number: reader.integer(obj, "step_number", path("step_number"), false),
            title: reader.string(obj, "title", path("title")),
            description: reader.string(obj, "description", path("description")),
            duration: reader.string(obj, "duration", path("duration")),
            materials_needed: reader.strings(obj, "materials_needed", path("materials_needed")),
        }
    }

    fn to_step(&self) -> Option<TreatmentStep> {
        Some(TreatmentStep {
            step_number: u32::try_from(self.step_number?).ok()?,
            title: self.title.clone()?,
            description: self.description.clone()?,
            duration: self.duration.clone()?,
            materials_needed: self.materials_needed.clone()?,
        })
    }
}

impl RawCitation {
    fn read(reader: &mut FieldReader, obj: &Map<String, Value>, i: usize) -> Self {
        let path = |field: &str| format!("citations[{i}].{field}");
        Self {
            title: reader.string(obj, "title", path("title")),
            source: reader.string(obj, "source", path("source")),
            // Curators sometimes quote the year.
            year: reader.integer(obj, "year", path("year"), true),
            authors: reader.strings(obj, "authors", path("authors")),
            key_findings: reader.string(obj, "key_findings", path("key_findings")),
        }
    }

    fn to_citation(&self) -> Option<Citation> {
        Some(Citation {
            title: self.title.clone()?,
            source: self.source.clone()?,
            year: i32::try_from(self.year?).ok()?,
            authors: self.authors.clone()?,
            key_findings: self.key_findings.clone()?,
        })
    }
}

/// Typed field access over a JSON object that records, rather than fails on,
/// wrong types. `null` reads as absent.
#[derive(Default)]
struct FieldReader {
    mismatches: Vec<TypeMismatch>,
}

impl FieldReader {
    fn mismatch(&mut self, field: String, expected: &'static str, found: &Value) {
        self.mismatches.push(TypeMismatch {
            field,
            expected,
            found: json_kind(found),
        });
    }

    fn string(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        path: impl Into<String>,
    ) -> Option<String> {
        match obj.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.mismatch(path.into(), "a string", other);
                None
            }
        }
    }

    /// String list; wrong-typed elements are reported at `path[i]` and skipped.
    fn strings(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        path: impl Into<String>,
    ) -> Option<Vec<String>> {
        let path = path.into();
        match obj.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    match item {
                        Value::String(s) => out.push(s.clone()),
                        other => self.mismatch(format!("{path}[{i}]"), "a string", other),
                    }
                }
                Some(out)
            }
            Some(other) => {
                self.mismatch(path, "an array of strings", other);
                None
            }
        }
    }

    fn integer(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        path: impl Into<String>,
        accept_numeric_string: bool,
    ) -> Option<i64> {
        let value = match obj.get(key) {
            None | Some(Value::Null) => return None,
            Some(value) => value,
        };
        let parsed = match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) if accept_numeric_string => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        if parsed.is_none() {
            self.mismatch(path.into(), "an integer", value);
        }
        parsed
    }

    /// Array of objects. Non-object elements are reported at `key[i]` and
    /// come back as `None` so indices stay aligned.
    fn objects<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        key: &str,
    ) -> Option<Vec<Option<&'v Map<String, Value>>>> {
        match obj.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => Some(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let object = item.as_object();
                        if object.is_none() {
                            self.mismatch(format!("{key}[{i}]"), "an object", item);
                        }
                        object
                    })
                    .collect(),
            ),
            Some(other) => {
                self.mismatch(key.to_string(), "an array of objects", other);
                None
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
