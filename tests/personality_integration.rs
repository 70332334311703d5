//! Integration tests for the personality engine
//!
//! Tests the full path: text → EmotionDetector → PersonalityEngine → reply

use omni_genesis::core::{EmotionDetector, PersonalityConfig, PersonalityEngine};
use omni_genesis::types::{Emotion, FormalityLevel, Mood};

#[test]
fn test_detect_then_respond() {
    let detector = EmotionDetector::new();
    let mut namo = PersonalityEngine::default();

    let detection = detector.detect("เศร้าจังเลย ร้องไห้ทั้งคืน");
    assert_eq!(detection.emotion, Emotion::Sadness);

    let reply = namo.respond_to("เศร้าจังเลย ร้องไห้ทั้งคืน", &detection);
    assert_eq!(reply.mood, Mood::Calm);
    assert_eq!(reply.emoji, "🌙");
    assert!(reply.formality_matched);
    assert!(!reply.message.contains("{reaction}"));
    // 10 to 49 characters → medium reaction
    assert!(reply.message.contains("เข้าใจ"));
}

#[test]
fn test_casual_user_gets_casual_reply() {
    let detector = EmotionDetector::new();
    let mut namo = PersonalityEngine::default();

    let detection = detector.detect("สนุกจ้า 555");
    assert_eq!(detection.formality.level, FormalityLevel::Casual);

    let reply = namo.respond_to("สนุกจ้า 555", &detection);
    assert!(!reply.message.contains("ค่ะ"));
    assert!(!reply.message.contains("คะ"));
}

#[test]
fn test_conversation_replays_identically() {
    let detector = EmotionDetector::new();
    let conversation = ["สวัสดีค่ะ", "ดีใจมากเลย", "กลัวจัง", "รักนะ", "ขอบคุณค่ะ"];

    let run = || {
        let mut namo = PersonalityEngine::default();
        conversation
            .iter()
            .map(|m| namo.respond_to(m, &detector.detect(m)).message)
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_state_tracks_conversation() {
    let detector = EmotionDetector::new();
    let mut namo = PersonalityEngine::default();

    for message in ["เศร้า", "โกรธ", "ดีใจ", "รัก"] {
        let detection = detector.detect(message);
        namo.respond_to(message, &detection);
    }

    let state = namo.state();
    assert_eq!(state.interaction_count, 4);
    assert_eq!(state.mood, Mood::Loving);
    // sadness and anger both map to calm, so only three transitions
    assert_eq!(state.mood_history, vec![Mood::Cheerful, Mood::Calm, Mood::Cheerful]);
    assert!(state.last_interaction.is_some());
}

#[test]
fn test_custom_config() {
    let config = PersonalityConfig {
        name: "Aura".to_string(),
        name_thai: "ออร่า".to_string(),
        traits: vec!["calm".to_string()],
        default_mood: Mood::Calm,
    };
    let mut engine = PersonalityEngine::new(config);
    assert_eq!(engine.mood(), Mood::Calm);
    assert!(engine.greeting().contains("ออร่า"));

    engine.generate_response("อะไรนะ", Emotion::Neutral, FormalityLevel::Neutral);
    let state = engine.state();
    assert_eq!(state.name, "Aura");
    assert_eq!(state.mood, Mood::Calm);
    assert!(state.mood_history.is_empty());
    assert_eq!(state.traits, vec!["calm".to_string()]);
}
