//! Required top-level fields.

use super::{is_filled, FileContext};
use crate::schema::RawKnowledgeDocument;

pub fn check(doc: &RawKnowledgeDocument, ctx: &mut FileContext<'_>) {
    let text_fields = [
        ("disease_id", doc.disease_id.as_deref()),
        ("disease_name", doc.disease_name.as_deref()),
        ("category", doc.category.as_deref()),
        ("dosage_frequency", doc.dosage_frequency.as_deref()),
        ("evidence_level", doc.evidence_level.as_deref()),
        ("last_updated", doc.last_updated.as_deref()),
        ("reviewed_by", doc.reviewed_by.as_deref()),
    ];
    for (field, value) in text_fields {
        match value {
            None => ctx.violation(field, "missing required field"),
            Some(_) if !is_filled(value) => ctx.violation(field, "must not be empty"),
            Some(_) => {}
        }
    }

    // List minimums are enforced in `counts`; only absence is reported here.
    let list_fields = [
        ("treatment_steps", doc.treatment_steps.is_some()),
        ("safety_warnings", doc.safety_warnings.is_some()),
        ("when_to_consult_expert", doc.when_to_consult_expert.is_some()),
        ("citations", doc.citations.is_some()),
    ];
    for (field, present) in list_fields {
        if !present {
            ctx.violation(field, "missing required field");
        }
    }
}
