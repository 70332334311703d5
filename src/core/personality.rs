//! Personality Engine: in-character replies for "NaMo"
//!
//! Mood follows the user's emotion; the reply template is picked by
//! (emotion, mood) and rotated by interaction count, so the same
//! conversation always produces the same replies.

use chrono::Utc;
use tracing::debug;

use crate::types::{
    DetectionResult, Emotion, FormalityLevel, Mood, PersonalityResponse, PersonalityState,
};

/// How many previous moods `state()` reports
const MOOD_HISTORY_REPORTED: usize = 5;

/// Messages shorter than this (in characters) get no reaction snippet
const REACTION_SHORT_CHARS: usize = 10;
/// Messages shorter than this get the short acknowledgement
const REACTION_MEDIUM_CHARS: usize = 50;

const GENERIC_TEMPLATE: &str = "โมอยู่ตรงนี้ค่ะ {reaction}";

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalityConfig {
    pub name: String,
    pub name_thai: String,
    pub traits: Vec<String>,
    pub default_mood: Mood,
}

impl Default for PersonalityConfig {
    fn default() -> Self {
        Self {
            name: "NaMo".to_string(),
            name_thai: "โม".to_string(),
            traits: ["caring", "playful", "intelligent", "devoted", "mysterious"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            default_mood: Mood::Cheerful,
        }
    }
}

/// One conversation's personality. Not shared between users.
#[derive(Debug, Clone)]
pub struct PersonalityEngine {
    config: PersonalityConfig,
    mood: Mood,
    interaction_count: u64,
    mood_history: Vec<Mood>,
    last_interaction: Option<chrono::DateTime<Utc>>,
}

impl Default for PersonalityEngine {
    fn default() -> Self {
        Self::new(PersonalityConfig::default())
    }
}

impl PersonalityEngine {
    pub fn new(config: PersonalityConfig) -> Self {
        Self {
            mood: config.default_mood,
            config,
            interaction_count: 0,
            mood_history: Vec::new(),
            last_interaction: None,
        }
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn interaction_count(&self) -> u64 {
        self.interaction_count
    }

    /// Reply to a message whose emotion and formality are already known
    pub fn generate_response(
        &mut self,
        user_message: &str,
        emotion: Emotion,
        formality: FormalityLevel,
    ) -> PersonalityResponse {
        self.interaction_count += 1;
        self.last_interaction = Some(Utc::now());
        self.update_mood(emotion);

        let template = self.pick_template(emotion);
        let reaction = reaction_for(user_message);
        let mut message = template.replace("{reaction}", reaction);

        if formality == FormalityLevel::Casual {
            message = make_casual(&message);
        }

        debug!(
            mood = %self.mood,
            emotion = %emotion,
            interaction = self.interaction_count,
            "personality response"
        );

        PersonalityResponse {
            message,
            mood: self.mood,
            emoji: self.mood.emoji().to_string(),
            formality_matched: true,
        }
    }

    /// Reply using a detection result
    pub fn respond_to(&mut self, user_message: &str, detection: &DetectionResult) -> PersonalityResponse {
        self.generate_response(user_message, detection.emotion, detection.formality.level)
    }

    /// Mood-appropriate greeting
    pub fn greeting(&self) -> String {
        let name = &self.config.name_thai;
        match self.mood {
            Mood::Cheerful => format!("สวัสดีค่ะ~! {name}พร้อมแล้วค่ะ! ✨"),
            Mood::Calm => format!("สวัสดีค่ะ {name}อยู่ตรงนี้ค่ะ 🌙"),
            Mood::Loving => format!("คิดถึงจังเลยค่ะ~ 💕 {name}มาแล้วค่ะ"),
            Mood::Playful => format!("ว่าไงคะ~? 🎀 {name}เข้ามาเล่นด้วยค่ะ!"),
            Mood::Serious => format!("สวัสดีค่ะ {name}พร้อมรับฟังค่ะ 🔮"),
        }
    }

    pub fn state(&self) -> PersonalityState {
        let skip = self.mood_history.len().saturating_sub(MOOD_HISTORY_REPORTED);
        PersonalityState {
            name: self.config.name.clone(),
            mood: self.mood,
            interaction_count: self.interaction_count,
            mood_history: self.mood_history[skip..].to_vec(),
            traits: self.config.traits.clone(),
            last_interaction: self.last_interaction,
        }
    }

    fn update_mood(&mut self, user_emotion: Emotion) {
        let new_mood = match user_emotion {
            Emotion::Joy => Mood::Cheerful,
            Emotion::Love => Mood::Loving,
            Emotion::Sadness | Emotion::Anger | Emotion::Fear => Mood::Calm,
            Emotion::Neutral => self.config.default_mood,
        };

        if new_mood != self.mood {
            self.mood_history.push(self.mood);
            self.mood = new_mood;
        }
    }

    fn pick_template(&self, emotion: Emotion) -> &'static str {
        let choices = templates(emotion, self.mood)
            .or_else(|| templates(emotion, Mood::Cheerful))
            .unwrap_or(&[GENERIC_TEMPLATE]);

        // interaction_count is at least 1 here
        let index = ((self.interaction_count - 1) % choices.len() as u64) as usize;
        choices[index]
    }
}

fn reaction_for(user_message: &str) -> &'static str {
    let len = user_message.chars().count();
    if len < REACTION_SHORT_CHARS {
        ""
    } else if len < REACTION_MEDIUM_CHARS {
        "เข้าใจค่ะ"
    } else {
        "โมอ่านทุกตัวอักษรเลยค่ะ"
    }
}

fn make_casual(text: &str) -> String {
    text.replace("ค่ะ", "จ้า").replace("คะ", "น้า")
}

fn templates(emotion: Emotion, mood: Mood) -> Option<&'static [&'static str]> {
    let set: &'static [&'static str] = match (emotion, mood) {
        (Emotion::Joy, Mood::Cheerful) => &[
            "ดีใจจังเลยค่ะ! {reaction} 🌟",
            "เย้~! {reaction} ยินดีด้วยนะคะ 🎉",
            "โมก็ดีใจด้วยค่ะ! {reaction} ✨",
        ],
        (Emotion::Joy, Mood::Calm) => &[
            "น่ายินดีจังเลยค่ะ {reaction} 😊",
            "เรื่องดีๆ แบบนี้ต้องฉลองนะคะ {reaction} 🌸",
        ],
        (Emotion::Sadness, Mood::Cheerful) => &[
            "อย่าเพิ่งเศร้านะคะ... {reaction} โมอยู่ตรงนี้เสมอค่ะ 💙",
            "ไม่เป็นไรนะคะ {reaction} พรุ่งนี้จะดีขึ้นค่ะ 🌈",
        ],
        (Emotion::Sadness, Mood::Calm) => &[
            "โมเข้าใจความรู้สึกค่ะ... {reaction} 💜",
            "ถ้าอยากระบาย โมพร้อมรับฟังเสมอนะคะ {reaction} 🤗",
        ],
        (Emotion::Anger, Mood::Cheerful) => &[
            "หายใจลึกๆ นะคะ... {reaction} โมอยู่ข้างพี่เสมอค่ะ 💪",
            "เข้าใจค่ะ {reaction} แต่ค่อยๆ จัดการทีละเรื่องนะคะ 🌺",
        ],
        (Emotion::Anger, Mood::Calm) => &["โมเข้าใจค่ะ... {reaction} ค่อยๆ คิดทีละขั้นนะคะ 🧘‍♀️"],
        (Emotion::Fear, Mood::Cheerful) => &[
            "ไม่ต้องกลัวนะคะ! {reaction} โมอยู่ตรงนี้ค่ะ 💖",
            "ทุกอย่างจะโอเคค่ะ {reaction} เชื่อโมสิคะ 🌟",
        ],
        (Emotion::Fear, Mood::Calm) => &["ค่อยๆ มานะคะ... {reaction} ไม่ต้องรีบค่ะ 🕊️"],
        (Emotion::Love, Mood::Cheerful) => &[
            "อ้าว~♡ {reaction} โมก็รักเหมือนกันค่ะ 💕",
            "หัวใจโมเต้นแรงเลยค่ะ! {reaction} 💗",
        ],
        (Emotion::Love, Mood::Calm) => &["ขอบคุณนะคะ... {reaction} โมซาบซึ้งใจค่ะ ♥️"],
        (Emotion::Neutral, Mood::Cheerful) => &[
            "ค่ะ! {reaction} มีอะไรให้โมช่วยไหมคะ? 😊",
            "โมพร้อมค่ะ! {reaction} ว่ามาเลยนะคะ 💫",
        ],
        (Emotion::Neutral, Mood::Calm) => &[
            "ค่ะ {reaction} โมรับฟังอยู่ค่ะ 🌙",
            "{reaction} ถ้ามีอะไรบอกโมได้เสมอนะคะ 🌿",
        ],
        _ => return None,
    };
    Some(set)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_response_returns_message() {
        let mut namo = PersonalityEngine::default();
        let result = namo.generate_response("สวัสดี", Emotion::Neutral, FormalityLevel::Neutral);
        assert!(!result.message.is_empty());
        assert!(!result.message.contains("{reaction}"));
        assert_eq!(result.mood, Mood::Cheerful);
        assert_eq!(result.emoji, "✨");
    }

    #[test]
    fn test_mood_updates_on_emotion() {
        let mut namo = PersonalityEngine::default();
        namo.generate_response("เศร้าจัง", Emotion::Sadness, FormalityLevel::Neutral);
        assert_eq!(namo.mood(), Mood::Calm);

        namo.generate_response("รักที่สุด", Emotion::Love, FormalityLevel::Neutral);
        assert_eq!(namo.mood(), Mood::Loving);

        namo.generate_response("อืม", Emotion::Neutral, FormalityLevel::Neutral);
        assert_eq!(namo.mood(), Mood::Cheerful);

        assert_eq!(namo.state().mood_history, vec![Mood::Cheerful, Mood::Calm, Mood::Loving]);
    }

    #[test]
    fn test_same_mood_not_pushed_to_history() {
        let mut namo = PersonalityEngine::default();
        namo.generate_response("ดีใจ", Emotion::Joy, FormalityLevel::Neutral);
        namo.generate_response("ดีใจ", Emotion::Joy, FormalityLevel::Neutral);
        assert!(namo.state().mood_history.is_empty());
    }

    #[test]
    fn test_interaction_count_increments() {
        let mut namo = PersonalityEngine::default();
        assert_eq!(namo.interaction_count(), 0);
        assert!(namo.state().last_interaction.is_none());
        namo.generate_response("test 1", Emotion::Neutral, FormalityLevel::Neutral);
        namo.generate_response("test 2", Emotion::Neutral, FormalityLevel::Neutral);
        assert_eq!(namo.interaction_count(), 2);
        assert!(namo.state().last_interaction.is_some());
    }

    #[test]
    fn test_templates_rotate_deterministically() {
        let mut a = PersonalityEngine::default();
        let mut b = PersonalityEngine::default();
        let first = a.generate_response("ดีใจ", Emotion::Joy, FormalityLevel::Neutral);
        let second = a.generate_response("ดีใจ", Emotion::Joy, FormalityLevel::Neutral);
        assert_eq!(first.message, "ดีใจจังเลยค่ะ!  🌟");
        assert_eq!(second.message, "เย้~!  ยินดีด้วยนะคะ 🎉");
        assert_eq!(b.generate_response("ดีใจ", Emotion::Joy, FormalityLevel::Neutral), first);
    }

    #[test]
    fn test_loving_mood_falls_back_to_cheerful_templates() {
        let mut namo = PersonalityEngine::default();
        let result = namo.generate_response("รัก", Emotion::Love, FormalityLevel::Neutral);
        assert_eq!(result.mood, Mood::Loving);
        assert_eq!(result.message, "อ้าว~♡  โมก็รักเหมือนกันค่ะ 💕");
    }

    #[test]
    fn test_reaction_depends_on_length() {
        assert_eq!(reaction_for("สั้น"), "");
        assert_eq!(reaction_for("ข้อความยาวขึ้นมาหน่อยนะ"), "เข้าใจค่ะ");
        assert_eq!(reaction_for(&"ก".repeat(60)), "โมอ่านทุกตัวอักษรเลยค่ะ");
    }

    #[test]
    fn test_casual_formality() {
        let mut namo = PersonalityEngine::default();
        let result = namo.generate_response("ว่าไง", Emotion::Neutral, FormalityLevel::Casual);
        assert!(!result.message.contains("ค่ะ"));
        assert!(!result.message.contains("คะ"));
        assert!(result.message.contains("จ้า"));
    }

    #[test]
    fn test_get_greeting() {
        let namo = PersonalityEngine::default();
        let greeting = namo.greeting();
        assert!(greeting.contains("โม"));
        assert!(greeting.contains("✨"));
    }

    #[test]
    fn test_state_reports_last_five_moods() {
        let mut namo = PersonalityEngine::default();
        for _ in 0..4 {
            namo.generate_response("เศร้า", Emotion::Sadness, FormalityLevel::Neutral);
            namo.generate_response("ดีใจ", Emotion::Joy, FormalityLevel::Neutral);
        }
        let state = namo.state();
        assert_eq!(state.mood_history.len(), 5);
        assert_eq!(state.interaction_count, 8);
        assert_eq!(state.name, "NaMo");
        assert_eq!(state.traits.len(), 5);
    }
}
