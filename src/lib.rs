//! Omni-Genesis: Golden Ratio emotion/logic balancing engine
//!
//! text → lexical emotion classifier → emotion profile → Golden Ratio balancer,
//! with the formality classifier running alongside on the same text.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod types;

pub use error::{OmniError, Result};

// =============================================================================
// GOLDEN RATIO [C]
// =============================================================================

/// The Golden Ratio φ
pub const PHI: f64 = 1.618033988749895;

/// |balance_index| at or below this counts as balanced
pub const BALANCE_THRESHOLD: f64 = 0.15;

/// Decimal places kept on balancer outputs
pub const BALANCE_PRECISION: i32 = 6;

/// Decimal places kept on confidences, formality scores and magnitudes
pub const SCORE_PRECISION: i32 = 4;

// =============================================================================
// CLASSIFIER CONSTANTS [C] - empirical, keep exactly
// =============================================================================

/// Keyword hits per token are scaled by this before capping at 1.0
pub const CONFIDENCE_SCALE: f64 = 2.0;

/// Confidence reported when text has content but no keyword matched
pub const WEAK_NEUTRAL_CONFIDENCE: f64 = 0.3;

/// Lower bound on profile-derived scores fed to the balancer
pub const SCORE_FLOOR: f64 = 0.1;

/// Formality score at or above this is formal
pub const FORMAL_THRESHOLD: f64 = 0.6;

/// Formality score at or below this is casual
pub const CASUAL_THRESHOLD: f64 = 0.4;

/// Formality score when no particle is present
pub const NEUTRAL_FORMALITY_SCORE: f64 = 0.5;

/// Runs of this many identical characters or more get shortened
pub const REPEAT_RUN_MIN: usize = 5;

/// Length a shortened run is reduced to (5555555 → 555)
pub const REPEAT_RUN_KEEP: usize = 3;

// =============================================================================
// TEXT ANALYZER [C]
// =============================================================================

/// Polarity hits that saturate text-level emotion intensity
pub const POLARITY_HITS_FULL: f64 = 3.0;

/// Added to emotion intensity when the text contains `!`
pub const EXCLAMATION_BOOST: f64 = 0.1;

/// Logic score of any non-empty text
pub const LOGIC_BASE: f64 = 0.25;

/// Word counts at which longer texts earn more logic, and the bonus for each
pub const LOGIC_MEDIUM_WORDS: usize = 6;
pub const LOGIC_MEDIUM_BONUS: f64 = 0.2;
pub const LOGIC_LONG_WORDS: usize = 12;
pub const LOGIC_LONG_BONUS: f64 = 0.35;

/// Per logic hint, and the cap on the total hint bonus
pub const LOGIC_HINT_STEP: f64 = 0.12;
pub const LOGIC_HINT_CAP: f64 = 0.35;

/// Bonus when the conversation already has history
pub const HISTORY_BONUS: f64 = 0.05;

/// Score gap beyond which one side drives the strategy
pub const STRATEGY_MARGIN: f64 = 0.2;

// =============================================================================
// CHAT [C]
// =============================================================================

/// Longest chat message accepted, in characters, after trimming
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Chat sessions held before the least recently active one is evicted
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Interaction records kept per user; older ones are dropped first
pub const MAX_INTERACTIONS_PER_USER: usize = 1_000;

/// Emotions listed on the analytics dashboard
pub const TOP_EMOTIONS: usize = 5;

/// Emotion trend window, in days
pub const TREND_DAYS_DEFAULT: i64 = 7;
pub const TREND_DAYS_MAX: i64 = 90;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "2.0.0";

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
