//! Formality (register) classification output

use serde::{Deserialize, Serialize};

use crate::NEUTRAL_FORMALITY_SCORE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormalityLevel {
    Formal,
    Casual,
    Neutral,
}

impl std::fmt::Display for FormalityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FormalityLevel::Formal => "formal",
            FormalityLevel::Casual => "casual",
            FormalityLevel::Neutral => "neutral",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormalityResult {
    pub level: FormalityLevel,
    /// 0.0 (very casual) to 1.0 (very formal)
    pub score: f64,
    /// Formal particles first, then casual ones
    pub markers_found: Vec<String>,
}

impl FormalityResult {
    /// No particles at all
    pub fn neutral() -> Self {
        Self {
            level: FormalityLevel::Neutral,
            score: NEUTRAL_FORMALITY_SCORE,
            markers_found: Vec::new(),
        }
    }
}
