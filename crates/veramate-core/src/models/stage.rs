use std::fmt;

use serde::{Deserialize, Serialize};

/// Classifier stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Binary healthy/unhealthy classifier.
    #[serde(rename = "A")]
    A,
    /// Conditional disease-type classifier, run only on unhealthy cases.
    #[serde(rename = "B")]
    B,
}

impl Stage {
    pub const ALL: [Stage; 2] = [Stage::A, Stage::B];

    pub fn name(self) -> &'static str {
        match self {
            Self::A => "stage_a",
            Self::B => "stage_b",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
