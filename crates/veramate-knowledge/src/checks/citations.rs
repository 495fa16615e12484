//! Citation completeness and year plausibility.

use chrono::Datelike;
use veramate_core::constants::MIN_CITATION_YEAR;

use super::{is_filled, FileContext};
use crate::schema::RawKnowledgeDocument;

pub fn check(doc: &RawKnowledgeDocument, ctx: &mut FileContext<'_>) {
    let Some(citations) = &doc.citations else {
        return;
    };
    let max_year = i64::from(ctx.today.year());

    for (i, citation) in citations.iter().enumerate() {
        for (field, value) in [
            ("title", citation.title.as_deref()),
            ("source", citation.source.as_deref()),
            ("key_findings", citation.key_findings.as_deref()),
        ] {
            if !is_filled(value) {
                ctx.violation(format!("citations[{i}].{field}"), "missing or empty");
            }
        }

        let has_author = citation
            .authors
            .as_ref()
            .is_some_and(|authors| authors.iter().any(|a| !a.trim().is_empty()));
        if !has_author {
            ctx.violation(format!("citations[{i}].authors"), "at least one author required");
        }

        match citation.year {
            None => ctx.violation(format!("citations[{i}].year"), "missing required field"),
            Some(year) if year < i64::from(MIN_CITATION_YEAR) || year > max_year => ctx.violation(
                format!("citations[{i}].year"),
                format!("implausible year {year}, expected {MIN_CITATION_YEAR}..={max_year}"),
            ),
            Some(_) => {}
        }
    }
}
