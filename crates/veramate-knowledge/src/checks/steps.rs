//! Treatment step structure.

use veramate_core::constants::MIN_STEP_DESCRIPTION_CHARS;

use super::{is_filled, FileContext};
use crate::schema::RawKnowledgeDocument;

pub fn check(doc: &RawKnowledgeDocument, ctx: &mut FileContext<'_>) {
    let Some(steps) = &doc.treatment_steps else {
        return;
    };

    for (i, step) in steps.iter().enumerate() {
        let expected = i as i64 + 1;
        match step.step_number {
            None => ctx.violation(format!("treatment_steps[{i}].step_number"), "missing required field"),
            Some(n) if n != expected => ctx.violation(
                format!("treatment_steps[{i}].step_number"),
                format!("steps must be numbered sequentially from 1: expected {expected}, found {n}"),
            ),
            Some(_) => {}
        }

        for (field, value) in [("title", step.title.as_deref()), ("duration", step.duration.as_deref())] {
            if !is_filled(value) {
                ctx.violation(format!("treatment_steps[{i}].{field}"), "missing or empty");
            }
        }

        match step.description.as_deref() {
            None => ctx.violation(format!("treatment_steps[{i}].description"), "missing required field"),
            Some(d) if d.trim().chars().count() < MIN_STEP_DESCRIPTION_CHARS => ctx.violation(
                format!("treatment_steps[{i}].description"),
                format!(
                    "description must be at least {MIN_STEP_DESCRIPTION_CHARS} characters, found {}",
                    d.trim().chars().count()
                ),
            ),
            Some(_) => {}
        }

        // An empty materials list is allowed; a missing one is not.
        if step.materials_needed.is_none() {
            ctx.violation(format!("treatment_steps[{i}].materials_needed"), "missing required field");
        }
    }
}
