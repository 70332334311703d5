//! Personality moods and responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Cheerful,
    Calm,
    Playful,
    Serious,
    Loving,
}

impl Mood {
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Cheerful => "✨",
            Mood::Calm => "🌙",
            Mood::Playful => "🎀",
            Mood::Serious => "🔮",
            Mood::Loving => "💕",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mood::Cheerful => "cheerful",
            Mood::Calm => "calm",
            Mood::Playful => "playful",
            Mood::Serious => "serious",
            Mood::Loving => "loving",
        };
        write!(f, "{}", name)
    }
}

/// One in-character reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityResponse {
    pub message: String,
    pub mood: Mood,
    pub emoji: String,
    pub formality_matched: bool,
}

/// Snapshot of a personality session, for status endpoints and debugging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityState {
    pub name: String,
    pub mood: Mood,
    pub interaction_count: u64,
    /// Most recent five previous moods, oldest first
    pub mood_history: Vec<Mood>,
    pub traits: Vec<String>,
    pub last_interaction: Option<DateTime<Utc>>,
}
