//! # veramate-knowledge
//!
//! The curated-knowledge safety gate.
//!
//! - [`KnowledgeValidator`] checks every `<root>/<mode>/<category>.json` and
//!   accumulates all violations into one `ValidationReport`.
//! - [`KnowledgeBase`] is built only from a clean report and is immutable afterwards.
//! - [`TreatmentRouter`] maps a disease id and mode to curated content or the
//!   fixed safe fallback. It never approximates.

pub mod categories;
pub mod checks;
pub mod knowledge_base;
pub mod router;
pub mod schema;
pub mod validator;

pub use categories::category_for;
pub use knowledge_base::KnowledgeBase;
pub use router::TreatmentRouter;
pub use schema::{RawKnowledgeDocument, TypeMismatch};
pub use validator::{KnowledgeValidator, ScanOutcome, ValidatedDocument};
