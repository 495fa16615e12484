//! Per-file validation checks. Each check records violations into a
//! [`FileContext`] and never stops at the first problem.

pub mod citations;
pub mod counts;
pub mod fields;
pub mod freshness;
pub mod steps;
pub mod types;

use chrono::NaiveDate;
use veramate_core::models::ValidationReport;

use crate::schema::RawKnowledgeDocument;

/// The file being checked, the reference date, and the report to append to.
pub struct FileContext<'a> {
    pub file: &'a str,
    pub today: NaiveDate,
    report: &'a mut ValidationReport,
    mistyped: Vec<String>,
}

impl<'a> FileContext<'a> {
    pub fn new(file: &'a str, today: NaiveDate, report: &'a mut ValidationReport) -> Self {
        Self {
            file,
            today,
            report,
            mistyped: Vec::new(),
        }
    }

    /// Record a violation, unless `field` or its parent element was already
    /// reported as having the wrong type.
    pub fn violation(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        if self.covered_by_type_violation(&field) {
            return;
        }
        let message = message.into();
        tracing::error!(file = %self.file, field = %field, %message, "knowledge violation");
        self.report.push(self.file, field, message);
    }

    /// Report a wrong-typed field and silence later checks on that path.
    pub fn type_violation(&mut self, field: &str, message: impl Into<String>) {
        self.violation(field, message);
        self.mistyped.push(field.to_string());
    }

    fn covered_by_type_violation(&self, field: &str) -> bool {
        self.mistyped.iter().any(|path| {
            field
                .strip_prefix(path.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
        })
    }
}

/// Run every content check against one parsed document.
pub fn check_document(doc: &RawKnowledgeDocument, ctx: &mut FileContext<'_>) {
    types::check(doc, ctx);
    if doc.is_mistyped("document") {
        return;
    }
    fields::check(doc, ctx);
    counts::check(doc, ctx);
    steps::check(doc, ctx);
    citations::check(doc, ctx);
    freshness::check(doc, ctx);
}

/// Whether an optional string is present and not blank.
pub(crate) fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
