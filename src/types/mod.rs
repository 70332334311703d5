//! Core types for Omni-Genesis

mod analysis;
mod analytics;
mod balance;
mod detection;
mod emotion;
mod formality;
mod idiom;
mod personality;

pub use analysis::{AnalysisContext, Strategy, TextAnalysis};
pub use analytics::{DailyEmotions, Dashboard, EmotionCount, EmotionTrends, Interaction};
pub use balance::{Adjustment, AdjustmentDirection, GoldenRatioResult};
pub use detection::DetectionResult;
pub use emotion::{Emotion, EmotionProfile, EmotionProfiles, EmotionResult};
pub use formality::{FormalityLevel, FormalityResult};
pub use idiom::Idiom;
pub use personality::{Mood, PersonalityResponse, PersonalityState};
