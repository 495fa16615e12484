//! `last_updated` must be a real date that is not in the future.

use chrono::NaiveDate;
use veramate_core::constants::KNOWLEDGE_DATE_FORMAT;

use super::FileContext;
use crate::schema::RawKnowledgeDocument;

pub fn check(doc: &RawKnowledgeDocument, ctx: &mut FileContext<'_>) {
    // Absence and blankness are reported by `fields`.
    let Some(raw) = doc.last_updated.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
        return;
    };

    match NaiveDate::parse_from_str(raw, KNOWLEDGE_DATE_FORMAT) {
        Err(_) => ctx.violation("last_updated", format!("'{raw}' is not a YYYY-MM-DD date")),
        Ok(date) if date > ctx.today => {
            ctx.violation("last_updated", format!("{date} is in the future"))
        }
        Ok(_) => {}
    }
}
