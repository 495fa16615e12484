//! Retake guidance text.

use std::collections::BTreeSet;

use veramate_core::models::RejectionReason;

const GENERIC_RETAKE: &str =
    "We could not get a reliable diagnosis from these photos. Please retake them with better lighting and focus.";

const TIPS: [&str; 3] = [
    "Use bright, natural daylight (avoid harsh direct sun)",
    "Tap to focus on the affected area and wait for a sharp image",
    "Hold the camera 6-12 inches from the plant",
];

const CLOSING_TIPS: [&str; 2] = [
    "Clean the camera lens",
    "Remove background clutter and shadows",
];

/// Deterministic retake message for a batch.
///
/// Leads with the guidance for each distinct rejection reason (in reason
/// order) or a generic line when there are none, followed by fixed tips.
/// A tip to supply every recommended photo is added when `supplied < recommended`.
pub fn build_retake_message(
    reasons: &BTreeSet<RejectionReason>,
    supplied: usize,
    recommended: usize,
) -> String {
    let intro = if reasons.is_empty() {
        GENERIC_RETAKE.to_string()
    } else {
        reasons
            .iter()
            .map(RejectionReason::user_message)
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut tips: Vec<String> = TIPS.iter().map(|t| t.to_string()).collect();
    if supplied < recommended {
        tips.push(format!(
            "Take all {recommended} recommended photos (you provided {supplied})"
        ));
    }
    tips.extend(CLOSING_TIPS.iter().map(|t| t.to_string()));

    format!("{intro} Tips for better results: {}", tips.join(" • "))
}
