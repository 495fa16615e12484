//! Disease id → knowledge category table.
//!
//! Hand-maintained. A disease with no row here, or whose category has no
//! validated file for the requested mode, gets the safe fallback.

const DISEASE_CATEGORIES: &[(&str, &str)] = &[
    ("leaf_spot", "fungal"),
    ("aloe_rust", "fungal"),
    ("anthracnose", "fungal"),
    ("root_rot", "rot"),
    ("aloe_rot", "rot"),
    // Own category: sunburn care differs from generic prevention.
    ("sunburn", "sunburn"),
    ("healthy", "general_prevention"),
    ("prevention", "general_prevention"),
];

/// Knowledge category for a disease id. Exact, case-sensitive match.
pub fn category_for(disease_id: &str) -> Option<&'static str> {
    DISEASE_CATEGORIES
        .iter()
        .find(|(id, _)| *id == disease_id)
        .map(|(_, category)| *category)
}

/// Every category the table can route to, deduplicated, in table order.
pub fn known_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for (_, category) in DISEASE_CATEGORIES {
        if !categories.contains(category) {
            categories.push(*category);
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fungal_diseases_share_a_category() {
        assert_eq!(category_for("leaf_spot"), Some("fungal"));
        assert_eq!(category_for("aloe_rust"), Some("fungal"));
        assert_eq!(category_for("anthracnose"), Some("fungal"));
    }

    #[test]
    fn unknown_and_unattributed_have_no_category() {
        assert_eq!(category_for("mealybugs"), None);
        assert_eq!(category_for("unhealthy_unspecified"), None);
        assert_eq!(category_for("Leaf_Spot"), None);
    }

    #[test]
    fn known_categories_deduplicated() {
        assert_eq!(
            known_categories(),
            vec!["fungal", "rot", "sunburn", "general_prevention"]
        );
    }
}
