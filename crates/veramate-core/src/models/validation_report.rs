use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// One knowledge-base violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// File identifier relative to the knowledge root, e.g. `scientific/fungal.json`.
    pub file: String,
    /// Offending field path, e.g. `citations[1].year`.
    pub field: String,
    pub message: String,
}

/// Every violation found in one validation pass, in discovery order.
/// Empty iff the knowledge base may be served.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        file: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.violations.push(Violation {
            file: file.into(),
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn extend(&mut self, other: ValidationReport) {
        self.violations.extend(other.violations);
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }

    /// Violations recorded against one file.
    pub fn violations_for<'a>(&'a self, file: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations.iter().filter(move |v| v.file == file)
    }

    /// Whether `file` has a violation on exactly `field`.
    pub fn has_violation(&self, file: &str, field: &str) -> bool {
        self.violations_for(file).any(|v| v.field == field)
    }

    /// Operator-facing multi-line summary.
    pub fn summary(&self) -> String {
        if self.is_clean() {
            return "All knowledge base files validated successfully".to_string();
        }

        let mut out = format!("Knowledge validation found {} violation(s):\n", self.len());
        for v in &self.violations {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "  {} [{}]: {}", v.file, v.field, v.message);
        }
        out
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
