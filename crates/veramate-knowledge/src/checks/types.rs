//! Fields present with the wrong JSON type.

use super::FileContext;
use crate::schema::RawKnowledgeDocument;

pub fn check(doc: &RawKnowledgeDocument, ctx: &mut FileContext<'_>) {
    for mismatch in doc.type_mismatches() {
        ctx.type_violation(
            &mismatch.field,
            format!("expected {}, found {}", mismatch.expected, mismatch.found),
        );
    }
}
