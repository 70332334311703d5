//! Integration tests for the detection pipeline
//!
//! text → classifier → profile → balancer, plus formality and idioms,
//! over the built-in Thai lexicon and the sample English one.

use omni_genesis::core::{EmotionDetector, GoldenRatioAnalyzer, Lexicon};
use omni_genesis::types::{DetectionResult, Emotion, EmotionProfile, EmotionProfiles, FormalityLevel};
use pretty_assertions::assert_eq;

fn english_detector() -> EmotionDetector {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/lexicon_en.json");
    let lexicon = Lexicon::load(path).unwrap();
    EmotionDetector::with_parts(&lexicon, GoldenRatioAnalyzer::new(), EmotionProfiles::standard())
}

#[test]
fn test_detect_joy_thai() {
    let detector = EmotionDetector::new();
    let emotion = detector.emotion_classifier().detect_emotion("ดีใจมากเลย สนุกจัง");
    assert_eq!(emotion.emotion, Emotion::Joy);
    assert!(emotion.confidence > 0.0);
    assert!(!emotion.keywords_found.is_empty());
}

#[test]
fn test_detect_formality_thai() {
    let detector = EmotionDetector::new();
    let formal = detector.formality_classifier().detect_formality("ขอบคุณครับ");
    assert_eq!(formal.level, FormalityLevel::Formal);
    assert!(formal.score > 0.5);

    let casual = detector.formality_classifier().detect_formality("สนุกจ้า 555");
    assert_eq!(casual.level, FormalityLevel::Casual);
    assert!(casual.score < 0.5);
}

#[test]
fn test_detect_empty_is_zeroed() {
    let result = EmotionDetector::new().detect("");
    assert_eq!(result, DetectionResult::empty());
    assert!(result.is_balanced());
    assert_eq!(result.formality.level, FormalityLevel::Neutral);
}

#[test]
fn test_batch_matches_single_calls() {
    let detector = EmotionDetector::new();
    let texts = ["ดีใจมากเลย สนุกจัง", "โกรธมากเลย หงุดหงิด", "กลัวจัง เครียดมาก"];
    let batch = detector.detect_batch(&texts);
    assert_eq!(batch.len(), 3);
    for (text, result) in texts.iter().zip(&batch) {
        assert_eq!(*result, detector.detect(text));
    }
}

#[test]
fn test_detection_is_deterministic() {
    let detector = EmotionDetector::new();
    let text = "รักนะ คิดถึงมากๆ";
    assert_eq!(detector.detect(text), detector.detect(text));
}

#[test]
fn test_unknown_label_falls_back_to_neutral_profile() {
    let profiles = EmotionProfiles::standard();
    assert_eq!(profiles.get_by_label("bewildered"), profiles.get(Emotion::Neutral));
    assert_eq!(profiles.get(Emotion::Neutral), EmotionProfile::NEUTRAL);
}

#[test]
fn test_thai_idioms() {
    let detector = EmotionDetector::new();
    let idioms = detector.detect_idioms("เขาบอกว่า น้ำขึ้นให้รีบตัก นะ");
    assert_eq!(idioms.len(), 1);
    assert_eq!(idioms[0].meaning, "seize_opportunity");
}

#[test]
fn test_english_lexicon_emotion() {
    let result = english_detector().detect("I am so happy today");
    assert_eq!(result.emotion, Emotion::Joy);
    // 1 hit / 5 tokens × 2
    assert_eq!(result.confidence, 0.4);
    assert_eq!(result.keywords_found, vec!["happy".to_string()]);
}

#[test]
fn test_english_lexicon_is_case_insensitive_per_token() {
    let result = english_detector().detect("I am SO HAPPY");
    assert_eq!(result.emotion, Emotion::Joy);
    assert_eq!(result.confidence, 0.5);
}

#[test]
fn test_english_lexicon_formality() {
    let detector = english_detector();
    let formal = detector.detect("Could you please help me, sir");
    assert_eq!(formal.formality.level, FormalityLevel::Formal);
    assert_eq!(formal.formality.score, 1.0);

    let casual = detector.detect("lol that was fun dude");
    assert_eq!(casual.formality.level, FormalityLevel::Casual);
    assert_eq!(casual.emotion, Emotion::Joy);
}

#[test]
fn test_english_lexicon_idioms() {
    let idioms = english_detector().detect_idioms("you should strike while the iron is hot");
    assert_eq!(idioms.len(), 1);
    assert_eq!(idioms[0].meaning, "seize_opportunity");
}

#[test]
fn test_detection_serializes_flat_balance_fields() {
    let result = EmotionDetector::new().detect("ดีใจ");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["emotion"], "joy");
    assert!(json["harmonic_score"].is_number());
    assert!(json["is_balanced"].is_boolean());
    assert!(json["adjustment"]["direction"].is_string());
    assert_eq!(json["formality"]["level"], "neutral");
}
