//! Keyword tables for the classifiers
//!
//! Everything language-specific lives here so the classifiers stay
//! vocabulary-free. `Lexicon::thai()` is the built-in table; any other
//! language can be loaded from JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::types::{Emotion, Idiom};
use crate::{OmniError, Result};

/// Injectable vocabulary for emotion, formality and idiom detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Keywords per emotion. Iterates in `Emotion` order whatever the JSON order.
    pub emotions: BTreeMap<Emotion, Vec<String>>,
    /// Particles marking a formal register
    #[serde(default)]
    pub formal_particles: Vec<String>,
    /// Particles marking a casual register
    #[serde(default)]
    pub casual_particles: Vec<String>,
    #[serde(default)]
    pub idioms: Vec<Idiom>,
    /// Polarity words for text-level emotion intensity
    #[serde(default)]
    pub positive_words: Vec<String>,
    #[serde(default)]
    pub negative_words: Vec<String>,
    /// Connectives that signal reasoning ("because", "therefore", ...)
    #[serde(default)]
    pub logic_hints: Vec<String>,
    /// Apply Thai-specific cleanup during normalization
    #[serde(default)]
    pub thai_normalization: bool,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::thai()
    }
}

impl Lexicon {
    /// Built-in Thai table
    pub fn thai() -> Self {
        let emotions = [
            (
                Emotion::Joy,
                &[
                    "ดีใจ", "สนุก", "มีความสุข", "ยินดี", "เฮ", "สุขใจ",
                    "ตื่นเต้น", "ปลื้ม", "หัวเราะ", "555", "ขอบคุณ",
                ][..],
            ),
            (
                Emotion::Sadness,
                &[
                    "เศร้า", "เสียใจ", "ร้องไห้", "ผิดหวัง", "โศก",
                    "หดหู่", "เหงา", "คิดถึง", "ทุกข์", "ใจสลาย",
                ][..],
            ),
            (
                Emotion::Anger,
                &[
                    "โกรธ", "หงุดหงิด", "โมโห", "บ้า", "เกลียด",
                    "รำคาญ", "ฉุนเฉียว", "อารมณ์เสีย",
                ][..],
            ),
            (
                Emotion::Fear,
                &[
                    "กลัว", "หวาดกลัว", "ตกใจ", "ระแวง", "วิตก",
                    "กังวล", "เครียด", "หวาดผวา",
                ][..],
            ),
            (
                Emotion::Love,
                &[
                    "รัก", "คิดถึง", "ที่รัก", "หัวใจ", "กอด",
                    "จูบ", "ดูแล", "ห่วงใย", "แฟน",
                ][..],
            ),
            (
                Emotion::Neutral,
                &[
                    "สวัสดี", "ครับ", "ค่ะ", "อะไร", "ทำไม",
                    "ยังไง", "ได้", "ไม่", "ใช่",
                ][..],
            ),
        ]
        .into_iter()
        .map(|(emotion, words)| (emotion, to_strings(words)))
        .collect();

        Self {
            emotions,
            formal_particles: to_strings(&["ครับ", "ค่ะ", "คะ", "ขอรับ", "เจ้าค่ะ"]),
            casual_particles: to_strings(&["จ้า", "จ้ะ", "นะ", "อ่ะ", "ว่ะ", "เว้ย", "โว้ย", "555"]),
            idioms: vec![
                Idiom::new("น้ำขึ้นให้รีบตัก", "seize_opportunity"),
                Idiom::new("ช้าๆ ได้พร้าเล่มงาม", "patience_rewarded"),
                Idiom::new("กว่าถั่วจะสุก งาก็ไหม้", "trade_off"),
                Idiom::new("ปากหวาน ก้นเปรี้ยว", "deception"),
                Idiom::new("รักวัวให้ผูก รักลูกให้ตี", "tough_love"),
            ],
            positive_words: to_strings(&["ดีใจ", "มีความสุข", "ยินดี", "ปลื้ม", "happy", "great", "love"]),
            negative_words: to_strings(&[
                "เศร้า", "โกรธ", "เครียด", "กังวล", "เสียใจ", "sad", "angry", "stress",
            ]),
            logic_hints: to_strings(&["เพราะ", "ดังนั้น", "สรุป", "เหตุผล", "because", "therefore", "so"]),
            thai_normalization: true,
        }
    }

    /// Parse a lexicon from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let lexicon: Lexicon = serde_json::from_str(json)
            .map_err(|e| OmniError::Lexicon(format!("invalid lexicon JSON: {e}")))?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Load a lexicon from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| OmniError::Lexicon(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// Keywords for one emotion (empty when the table has none)
    pub fn keywords(&self, emotion: Emotion) -> &[String] {
        self.emotions.get(&emotion).map(Vec::as_slice).unwrap_or(&[])
    }

    fn validate(&self) -> Result<()> {
        let blank_keyword = self
            .emotions
            .iter()
            .find(|(_, words)| words.iter().any(|w| w.trim().is_empty()));
        if let Some((emotion, _)) = blank_keyword {
            return Err(OmniError::Lexicon(format!("blank keyword under {emotion}")));
        }

        let blank_particle = self
            .formal_particles
            .iter()
            .chain(&self.casual_particles)
            .any(|p| p.trim().is_empty());
        if blank_particle {
            return Err(OmniError::Lexicon("blank formality particle".to_string()));
        }

        let blank_word = self
            .positive_words
            .iter()
            .chain(&self.negative_words)
            .chain(&self.logic_hints)
            .any(|w| w.trim().is_empty());
        if blank_word {
            return Err(OmniError::Lexicon("blank polarity word or logic hint".to_string()));
        }

        // An empty phrase is contained in every text
        if self.idioms.iter().any(|i| i.idiom.trim().is_empty()) {
            return Err(OmniError::Lexicon("blank idiom phrase".to_string()));
        }

        Ok(())
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thai_table_covers_every_emotion() {
        let lexicon = Lexicon::thai();
        for emotion in Emotion::ALL {
            assert!(!lexicon.keywords(emotion).is_empty(), "{} has no keywords", emotion);
        }
        assert_eq!(lexicon.formal_particles.len(), 5);
        assert_eq!(lexicon.casual_particles.len(), 8);
        assert_eq!(lexicon.idioms.len(), 5);
        assert_eq!(lexicon.positive_words.len(), 7);
        assert_eq!(lexicon.negative_words.len(), 8);
        assert_eq!(lexicon.logic_hints.len(), 7);
        assert!(lexicon.thai_normalization);
    }

    #[test]
    fn test_json_key_order_does_not_change_iteration_order() {
        let json = r#"{
            "emotions": {
                "neutral": ["hello"],
                "love": ["love"],
                "joy": ["happy"]
            }
        }"#;
        let lexicon = Lexicon::from_json_str(json).unwrap();
        let order: Vec<Emotion> = lexicon.emotions.keys().copied().collect();
        assert_eq!(order, vec![Emotion::Joy, Emotion::Love, Emotion::Neutral]);
        assert!(lexicon.keywords(Emotion::Fear).is_empty());
        assert!(lexicon.formal_particles.is_empty());
        assert!(lexicon.logic_hints.is_empty());
        assert!(!lexicon.thai_normalization);
    }

    #[test]
    fn test_unknown_emotion_key_rejected() {
        let json = r#"{ "emotions": { "dominant": ["x"] } }"#;
        assert!(matches!(Lexicon::from_json_str(json), Err(OmniError::Lexicon(_))));
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let json = r#"{ "emotions": { "joy": ["happy", " "] } }"#;
        assert!(matches!(Lexicon::from_json_str(json), Err(OmniError::Lexicon(_))));
    }

    #[test]
    fn test_blank_idiom_rejected() {
        let json = r#"{
            "emotions": { "joy": ["happy"] },
            "idioms": [{ "idiom": "  ", "meaning": "anything" }]
        }"#;
        assert!(matches!(Lexicon::from_json_str(json), Err(OmniError::Lexicon(_))));
    }

    #[test]
    fn test_missing_file_is_lexicon_error() {
        let err = Lexicon::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, OmniError::Lexicon(_)));
    }

    #[test]
    fn test_thai_table_survives_json() {
        let json = serde_json::to_string(&Lexicon::thai()).unwrap();
        assert_eq!(Lexicon::from_json_str(&json).unwrap(), Lexicon::thai());
    }
}
