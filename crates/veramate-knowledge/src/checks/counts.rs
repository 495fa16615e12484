//! Safety minimums on list lengths.

use std::collections::HashSet;

use veramate_core::constants::{
    MIN_CITATIONS, MIN_EXPERT_TRIGGERS, MIN_SAFETY_WARNINGS, MIN_TREATMENT_STEPS,
};

use super::FileContext;
use crate::schema::RawKnowledgeDocument;

pub fn check(doc: &RawKnowledgeDocument, ctx: &mut FileContext<'_>) {
    if let Some(warnings) = &doc.safety_warnings {
        check_distinct(ctx, "safety_warnings", warnings, MIN_SAFETY_WARNINGS);
    }
    if let Some(triggers) = &doc.when_to_consult_expert {
        check_distinct(ctx, "when_to_consult_expert", triggers, MIN_EXPERT_TRIGGERS);
    }
    if let Some(citations) = &doc.citations {
        if citations.len() < MIN_CITATIONS {
            ctx.violation(
                "citations",
                format!(
                    "at least {MIN_CITATIONS} citations required, found {}",
                    citations.len()
                ),
            );
        }
    }
    if let Some(steps) = &doc.treatment_steps {
        if steps.len() < MIN_TREATMENT_STEPS {
            ctx.violation(
                "treatment_steps",
                format!(
                    "at least {MIN_TREATMENT_STEPS} treatment steps required, found {}",
                    steps.len()
                ),
            );
        }
    }
}

/// Blank and repeated entries do not count towards the minimum.
fn check_distinct(ctx: &mut FileContext<'_>, field: &str, entries: &[String], min: usize) {
    let distinct: HashSet<&str> = entries
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .collect();
    if distinct.len() < min {
        ctx.violation(
            field,
            format!(
                "at least {min} distinct non-empty entries required, found {}",
                distinct.len()
            ),
        );
    }
}
