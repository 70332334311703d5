//! Emotion labels, classifier output and per-emotion intensity profiles

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// The six emotion categories.
///
/// Declaration order is the classifier's tie-break order (first wins), and
/// `Ord` follows it, so ordered maps keyed by `Emotion` iterate the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Love,
    Neutral,
}

impl Emotion {
    /// All categories in tie-break order
    pub const ALL: [Emotion; 6] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Love,
        Emotion::Neutral,
    ];

    /// Lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Love => "love",
            Emotion::Neutral => "neutral",
        }
    }

    /// Emoji for terminal display
    pub fn emoji(&self) -> &'static str {
        match self {
            Emotion::Joy => "😊",
            Emotion::Sadness => "😢",
            Emotion::Anger => "😠",
            Emotion::Fear => "😨",
            Emotion::Love => "💕",
            Emotion::Neutral => "😐",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Emotion::ALL
            .iter()
            .copied()
            .find(|e| e.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown emotion label: {s}"))
    }
}

/// Output of the lexical emotion classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    pub emotion: Emotion,
    /// 0.0-1.0, rounded to 4 places
    pub confidence: f64,
    /// Matched keywords, in lexicon order
    pub keywords_found: Vec<String>,
}

impl EmotionResult {
    pub fn new(emotion: Emotion, confidence: f64, keywords_found: Vec<String>) -> Self {
        Self {
            emotion,
            confidence,
            keywords_found,
        }
    }

    /// Result for empty or whitespace-only text
    pub fn empty() -> Self {
        Self::new(Emotion::Neutral, 0.0, Vec::new())
    }
}

/// Baseline intensities used to turn an emotion label into two scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionProfile {
    /// 0.0-1.0
    pub emotion_intensity: f64,
    /// 0.0-1.0
    pub logic_clarity: f64,
}

impl EmotionProfile {
    pub const fn new(emotion_intensity: f64, logic_clarity: f64) -> Self {
        Self {
            emotion_intensity,
            logic_clarity,
        }
    }

    /// Profile used whenever a lookup misses
    pub const NEUTRAL: EmotionProfile = EmotionProfile::new(0.40, 0.70);
}

/// Immutable emotion → profile table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionProfiles {
    profiles: BTreeMap<Emotion, EmotionProfile>,
}

impl Default for EmotionProfiles {
    fn default() -> Self {
        Self::standard()
    }
}

impl EmotionProfiles {
    /// The six built-in profiles
    pub fn standard() -> Self {
        Self::from_entries([
            (Emotion::Joy, EmotionProfile::new(0.85, 0.65)),
            (Emotion::Sadness, EmotionProfile::new(0.80, 0.40)),
            (Emotion::Anger, EmotionProfile::new(0.90, 0.30)),
            (Emotion::Fear, EmotionProfile::new(0.75, 0.45)),
            (Emotion::Love, EmotionProfile::new(0.95, 0.55)),
            (Emotion::Neutral, EmotionProfile::NEUTRAL),
        ])
    }

    /// Build a table from explicit entries (missing emotions fall back to neutral)
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Emotion, EmotionProfile)>,
    {
        Self {
            profiles: entries.into_iter().collect(),
        }
    }

    /// Profile for an emotion; never fails
    pub fn get(&self, emotion: Emotion) -> EmotionProfile {
        self.profiles
            .get(&emotion)
            .or_else(|| self.profiles.get(&Emotion::Neutral))
            .copied()
            .unwrap_or(EmotionProfile::NEUTRAL)
    }

    /// Profile for a free-form label; unknown labels get the neutral profile
    pub fn get_by_label(&self, label: &str) -> EmotionProfile {
        match label.parse::<Emotion>() {
            Ok(emotion) => self.get(emotion),
            Err(_) => self.get(Emotion::Neutral),
        }
    }
}
