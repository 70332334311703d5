//! Per-user interaction records and the reports built from them

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::Emotion;

/// One chat exchange as seen by analytics. Never holds message text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub emotion: Emotion,
    pub harmonic_score: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionCount {
    pub emotion: Emotion,
    pub count: usize,
}

/// Dashboard summary for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub user_id: String,
    pub total_interactions: usize,
    /// Most frequent first, at most five
    pub top_emotions: Vec<EmotionCount>,
    pub avg_harmonic_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Emotion counts for one UTC day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEmotions {
    pub date: NaiveDate,
    pub emotions: BTreeMap<Emotion, usize>,
}

/// Emotion trend over a window of days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionTrends {
    pub user_id: String,
    pub period_days: i64,
    /// Oldest day first; days without interactions are omitted
    pub trends: Vec<DailyEmotions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
