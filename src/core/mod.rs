//! Core engines for Omni-Genesis

pub mod text;
pub mod lexicon;
pub mod golden_ratio;
pub mod emotion;
pub mod formality;
pub mod idiom;
pub mod text_analyzer;
pub mod detector;
pub mod personality;
pub mod analytics;
pub mod session;
pub mod pdpa;
pub mod api;

pub use text::{normalize, tokenize};
pub use lexicon::Lexicon;
pub use golden_ratio::GoldenRatioAnalyzer;
pub use emotion::{CategoryScore, EmotionClassifier};
pub use formality::FormalityClassifier;
pub use idiom::IdiomMatcher;
pub use text_analyzer::TextAnalyzer;
pub use detector::EmotionDetector;
pub use personality::{PersonalityConfig, PersonalityEngine};
pub use analytics::InteractionLog;
pub use session::{SessionStore, UserSession};
pub use pdpa::{anonymize, redact_pii, user_data_export, DataExport};
pub use api::{create_router, run_server, AppState};
