//! Per-user interaction log with dashboard and emotion-trend reports

use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::{BTreeMap, VecDeque};

use crate::types::{DailyEmotions, Dashboard, Emotion, EmotionCount, EmotionTrends, Interaction};
use crate::{
    round_to, OmniError, Result, MAX_INTERACTIONS_PER_USER, SCORE_PRECISION, TOP_EMOTIONS,
    TREND_DAYS_MAX,
};

/// Bounded, oldest-first record of one user's interactions
#[derive(Debug, Clone)]
pub struct InteractionLog {
    entries: VecDeque<Interaction>,
    capacity: usize,
}

impl Default for InteractionLog {
    fn default() -> Self {
        Self::with_capacity(MAX_INTERACTIONS_PER_USER)
    }
}

impl InteractionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append, dropping the oldest entry once full
    pub fn record(&mut self, interaction: Interaction) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(interaction);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Interaction> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<Interaction> {
        self.entries.iter().cloned().collect()
    }

    /// Totals, top five emotions (ties in emotion order) and mean harmonic score
    pub fn dashboard(&self, user_id: &str) -> Dashboard {
        if self.entries.is_empty() {
            return Dashboard {
                user_id: user_id.to_string(),
                total_interactions: 0,
                top_emotions: Vec::new(),
                avg_harmonic_score: 0.0,
                message: Some("No interactions recorded yet.".to_string()),
            };
        }

        let mut counts: BTreeMap<Emotion, usize> = BTreeMap::new();
        let mut total_harmonic = 0.0;
        for interaction in &self.entries {
            *counts.entry(interaction.emotion).or_insert(0) += 1;
            total_harmonic += interaction.harmonic_score;
        }

        let mut top_emotions: Vec<EmotionCount> = counts
            .into_iter()
            .map(|(emotion, count)| EmotionCount { emotion, count })
            .collect();
        // stable: equal counts keep emotion order
        top_emotions.sort_by(|a, b| b.count.cmp(&a.count));
        top_emotions.truncate(TOP_EMOTIONS);

        Dashboard {
            user_id: user_id.to_string(),
            total_interactions: self.entries.len(),
            top_emotions,
            avg_harmonic_score: round_to(total_harmonic / self.entries.len() as f64, SCORE_PRECISION),
            message: None,
        }
    }

    /// Daily emotion counts (UTC days) for interactions within `days` of `now`
    pub fn emotion_trends(&self, user_id: &str, days: i64, now: DateTime<Utc>) -> Result<EmotionTrends> {
        let days = validate_days(days)?;
        let cutoff = now - Duration::days(days);

        let mut daily: BTreeMap<NaiveDate, BTreeMap<Emotion, usize>> = BTreeMap::new();
        for interaction in self.entries.iter().filter(|i| i.timestamp >= cutoff) {
            *daily
                .entry(interaction.timestamp.date_naive())
                .or_default()
                .entry(interaction.emotion)
                .or_insert(0) += 1;
        }

        let message = if daily.is_empty() {
            Some(format!("No interactions in the last {days} days."))
        } else {
            None
        };

        Ok(EmotionTrends {
            user_id: user_id.to_string(),
            period_days: days,
            trends: daily
                .into_iter()
                .map(|(date, emotions)| DailyEmotions { date, emotions })
                .collect(),
            message,
        })
    }
}

/// Trend windows run from 1 to 90 days
pub fn validate_days(days: i64) -> Result<i64> {
    if !(1..=TREND_DAYS_MAX).contains(&days) {
        return Err(OmniError::InvalidRequest(format!(
            "days must be between 1 and {TREND_DAYS_MAX}, got {days}"
        )));
    }
    Ok(days)
}
