//! Golden Ratio Analyzer: balances an emotion score against a logic score
//!
//! harmonic = emotion_weight × emotion + logic_weight × logic
//! where emotion_weight = 1/φ ≈ 0.618 and logic_weight = 1 - 1/φ ≈ 0.382.
//!
//! balance_index = (emotion/logic - φ) / φ, with logic == 0 special-cased:
//! 1.0 when emotion > 0, else 0.0.

use crate::types::{Adjustment, AdjustmentDirection, GoldenRatioResult};
use crate::{round_to, OmniError, Result, BALANCE_PRECISION, BALANCE_THRESHOLD, PHI, SCORE_PRECISION};

/// Golden Ratio analyzer. Immutable once built; share freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoldenRatioAnalyzer {
    phi: f64,
    emotion_weight: f64,
    logic_weight: f64,
    balance_threshold: f64,
}

impl Default for GoldenRatioAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl GoldenRatioAnalyzer {
    /// Analyzer with φ = 1.618033988749895 and threshold 0.15
    pub fn new() -> Self {
        Self::from_parts(PHI, BALANCE_THRESHOLD)
    }

    /// Analyzer with a custom φ and threshold.
    ///
    /// φ must be finite and > 1 so both weights stay positive; the threshold
    /// must be finite and non-negative.
    pub fn with_config(phi: f64, balance_threshold: f64) -> Result<Self> {
        if !phi.is_finite() || phi <= 1.0 {
            return Err(OmniError::InvalidPhi(phi));
        }
        if !balance_threshold.is_finite() || balance_threshold < 0.0 {
            return Err(OmniError::InvalidThreshold(balance_threshold));
        }
        Ok(Self::from_parts(phi, balance_threshold))
    }

    fn from_parts(phi: f64, balance_threshold: f64) -> Self {
        let emotion_weight = 1.0 / phi;
        Self {
            phi,
            emotion_weight,
            logic_weight: 1.0 - emotion_weight,
            balance_threshold,
        }
    }

    pub fn phi(&self) -> f64 {
        self.phi
    }

    pub fn emotion_weight(&self) -> f64 {
        self.emotion_weight
    }

    pub fn logic_weight(&self) -> f64 {
        self.logic_weight
    }

    pub fn balance_threshold(&self) -> f64 {
        self.balance_threshold
    }

    /// φ-weighted harmonic score plus balance info.
    ///
    /// Inputs are clamped to [0, 1] (NaN counts as 0.0); never fails.
    pub fn analyze(&self, emotion_score: f64, logic_score: f64) -> GoldenRatioResult {
        let emotion_score = clamp_unit(emotion_score);
        let logic_score = clamp_unit(logic_score);

        let emotion_component = self.emotion_weight * emotion_score;
        let logic_component = self.logic_weight * logic_score;
        let harmonic_score = emotion_component + logic_component;

        let balance_index = self.calculate_balance_index(emotion_score, logic_score);
        let is_balanced = balance_index.abs() <= self.balance_threshold;

        GoldenRatioResult {
            harmonic_score: round_to(harmonic_score, BALANCE_PRECISION),
            emotion_component: round_to(emotion_component, BALANCE_PRECISION),
            logic_component: round_to(logic_component, BALANCE_PRECISION),
            balance_index: round_to(balance_index, BALANCE_PRECISION),
            is_balanced,
        }
    }

    /// Signed distance of emotion/logic from φ, relative to φ.
    ///
    /// 0.0 = perfect proportion, > 0 emotion-heavy, < 0 logic-heavy.
    /// Not clamped and not rounded.
    pub fn calculate_balance_index(&self, emotion_score: f64, logic_score: f64) -> f64 {
        if logic_score == 0.0 {
            return if emotion_score > 0.0 { 1.0 } else { 0.0 };
        }

        let actual_ratio = emotion_score / logic_score;
        (actual_ratio - self.phi) / self.phi
    }

    /// Which way to move the pair toward φ, magnitude capped at 1.0.
    ///
    /// Inputs are clamped exactly as in `analyze`, so the two always agree.
    pub fn suggest_adjustment(&self, emotion_score: f64, logic_score: f64) -> Adjustment {
        let balance =
            self.calculate_balance_index(clamp_unit(emotion_score), clamp_unit(logic_score));

        if balance.abs() <= self.balance_threshold {
            return Adjustment::balanced();
        }

        let direction = if balance > 0.0 {
            AdjustmentDirection::IncreaseLogic
        } else {
            AdjustmentDirection::IncreaseEmotion
        };

        Adjustment {
            direction,
            magnitude: round_to(balance.abs().min(1.0), SCORE_PRECISION),
        }
    }
}

/// Clamp to [0, 1]; NaN becomes 0.0
fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

// =============================================================================
// TESTS
// =============================================================================
