//! Golden Ratio balancer output

use serde::{Deserialize, Serialize};

/// Result of one emotion/logic balancing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoldenRatioResult {
    /// emotion_component + logic_component
    pub harmonic_score: f64,
    /// emotion_weight × emotion_score
    pub emotion_component: f64,
    /// logic_weight × logic_score
    pub logic_component: f64,
    /// Signed deviation from φ: > 0 emotion-heavy, < 0 logic-heavy
    pub balance_index: f64,
    pub is_balanced: bool,
}

impl GoldenRatioResult {
    /// All zero, balanced
    pub fn zero() -> Self {
        Self {
            harmonic_score: 0.0,
            emotion_component: 0.0,
            logic_component: 0.0,
            balance_index: 0.0,
            is_balanced: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentDirection {
    IncreaseLogic,
    IncreaseEmotion,
    Balanced,
}

impl std::fmt::Display for AdjustmentDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AdjustmentDirection::IncreaseLogic => "increase_logic",
            AdjustmentDirection::IncreaseEmotion => "increase_emotion",
            AdjustmentDirection::Balanced => "balanced",
        };
        write!(f, "{}", name)
    }
}

/// Which side to push to get back toward φ, and how far (0.0-1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub direction: AdjustmentDirection,
    pub magnitude: f64,
}

impl Adjustment {
    pub fn balanced() -> Self {
        Self {
            direction: AdjustmentDirection::Balanced,
            magnitude: 0.0,
        }
    }
}
