//! Text-level emotion/logic analysis output

use serde::{Deserialize, Serialize};

/// Which side of the conversation should lead the reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    EmotionDriven,
    LogicDriven,
    Balanced,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::EmotionDriven => "emotion_driven",
            Strategy::LogicDriven => "logic_driven",
            Strategy::Balanced => "balanced",
        };
        write!(f, "{}", name)
    }
}

/// Conversation facts that shift the logic score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisContext {
    #[serde(default)]
    pub has_history: bool,
}

/// Result of analyzing one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    /// Polarity intensity, 0.0-1.0
    pub emotion: f64,
    /// Reasoning signal, 0.0-1.0
    pub logic: f64,
    /// Golden Ratio weighted blend of the two
    pub combined: f64,
    /// High when both scores are high and close together
    pub confidence: f64,
    pub strategy: Strategy,
}

impl TextAnalysis {
    /// Result for empty text
    pub fn empty() -> Self {
        Self {
            emotion: 0.0,
            logic: 0.0,
            combined: 0.0,
            confidence: 0.0,
            strategy: Strategy::Balanced,
        }
    }
}
