//! Full detection record: classifier + balancer + formality

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::types::{Adjustment, AdjustmentDirection, Emotion, FormalityResult, GoldenRatioResult};

/// Output of one `detect` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub emotion: Emotion,
    pub confidence: f64,
    pub keywords_found: Vec<String>,
    /// Profile intensity × confidence, floored at 0.1 (0.0 for empty text)
    pub emotion_score: f64,
    /// Profile clarity × confidence, floored at 0.1 (0.0 for empty text)
    pub logic_score: f64,
    #[serde(flatten)]
    pub balance: GoldenRatioResult,
    pub formality: FormalityResult,
    pub adjustment: Adjustment,
}

impl DetectionResult {
    /// Result for empty or whitespace-only text
    pub fn empty() -> Self {
        Self {
            emotion: Emotion::Neutral,
            confidence: 0.0,
            keywords_found: Vec::new(),
            emotion_score: 0.0,
            logic_score: 0.0,
            balance: GoldenRatioResult::zero(),
            formality: FormalityResult::neutral(),
            adjustment: Adjustment::balanced(),
        }
    }

    pub fn harmonic_score(&self) -> f64 {
        self.balance.harmonic_score
    }

    pub fn balance_index(&self) -> f64 {
        self.balance.balance_index
    }

    pub fn is_balanced(&self) -> bool {
        self.balance.is_balanced
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let balance = if self.is_balanced() {
            "balanced".green()
        } else {
            match self.adjustment.direction {
                AdjustmentDirection::IncreaseLogic => "emotion-heavy".yellow(),
                AdjustmentDirection::IncreaseEmotion => "logic-heavy".cyan(),
                AdjustmentDirection::Balanced => "balanced".green(),
            }
        };

        format!(
            "{} {} ({:.0}%) | harmonic={:.3} | balance={:+.3} {} | {}",
            self.emotion.emoji(),
            self.emotion.to_string().bold(),
            self.confidence * 100.0,
            self.harmonic_score(),
            self.balance_index(),
            balance,
            self.formality.level.to_string().dimmed(),
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "emotion={} | confidence={:.4} | harmonic={:.6} | balance={:.6} | balanced={} | formality={} | adjust={}:{:.4}",
            self.emotion,
            self.confidence,
            self.harmonic_score(),
            self.balance_index(),
            self.is_balanced(),
            self.formality.level,
            self.adjustment.direction,
            self.adjustment.magnitude,
        )
    }
}
