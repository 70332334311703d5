//! Emotion Detector: classifier → profile → Golden Ratio, plus formality
//!
//! emotion_score = max(intensity × confidence, 0.1)
//! logic_score   = max(clarity × confidence, 0.1)

use tracing::debug;

use crate::core::emotion::EmotionClassifier;
use crate::core::formality::FormalityClassifier;
use crate::core::golden_ratio::GoldenRatioAnalyzer;
use crate::core::idiom::IdiomMatcher;
use crate::core::lexicon::Lexicon;
use crate::core::text_analyzer::TextAnalyzer;
use crate::types::{AnalysisContext, DetectionResult, EmotionProfiles, Idiom, TextAnalysis};
use crate::SCORE_FLOOR;

/// End-to-end detector. Holds only immutable tables, so one instance can
/// serve any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct EmotionDetector {
    emotions: EmotionClassifier,
    formality: FormalityClassifier,
    idioms: IdiomMatcher,
    text: TextAnalyzer,
    analyzer: GoldenRatioAnalyzer,
    profiles: EmotionProfiles,
}

impl Default for EmotionDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionDetector {
    /// Thai lexicon, default analyzer, standard profiles
    pub fn new() -> Self {
        Self::with_parts(&Lexicon::thai(), GoldenRatioAnalyzer::new(), EmotionProfiles::standard())
    }

    /// Detector over a custom lexicon, analyzer and profile table
    pub fn with_parts(lexicon: &Lexicon, analyzer: GoldenRatioAnalyzer, profiles: EmotionProfiles) -> Self {
        Self {
            emotions: EmotionClassifier::new(lexicon),
            formality: FormalityClassifier::new(lexicon),
            idioms: IdiomMatcher::new(lexicon),
            text: TextAnalyzer::new(lexicon, &analyzer),
            analyzer,
            profiles,
        }
    }

    pub fn analyzer(&self) -> &GoldenRatioAnalyzer {
        &self.analyzer
    }

    pub fn emotion_classifier(&self) -> &EmotionClassifier {
        &self.emotions
    }

    pub fn formality_classifier(&self) -> &FormalityClassifier {
        &self.formality
    }

    pub fn profiles(&self) -> &EmotionProfiles {
        &self.profiles
    }

    pub fn text_analyzer(&self) -> &TextAnalyzer {
        &self.text
    }

    /// Run the full pipeline on one text
    pub fn detect(&self, text: &str) -> DetectionResult {
        if text.trim().is_empty() {
            return DetectionResult::empty();
        }

        let emotion = self.emotions.detect_emotion(text);
        let profile = self.profiles.get(emotion.emotion);

        let emotion_score = (profile.emotion_intensity * emotion.confidence).max(SCORE_FLOOR);
        let logic_score = (profile.logic_clarity * emotion.confidence).max(SCORE_FLOOR);

        let balance = self.analyzer.analyze(emotion_score, logic_score);
        let adjustment = self.analyzer.suggest_adjustment(emotion_score, logic_score);
        let formality = self.formality.detect_formality(text);

        debug!(
            emotion = %emotion.emotion,
            confidence = emotion.confidence,
            harmonic_score = balance.harmonic_score,
            "emotion detected"
        );

        DetectionResult {
            emotion: emotion.emotion,
            confidence: emotion.confidence,
            keywords_found: emotion.keywords_found,
            emotion_score,
            logic_score,
            balance,
            formality,
            adjustment,
        }
    }

    /// `detect` over each text, order preserved
    pub fn detect_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<DetectionResult> {
        texts.iter().map(|t| self.detect(t.as_ref())).collect()
    }

    pub fn detect_idioms(&self, text: &str) -> Vec<Idiom> {
        self.idioms.detect_idioms(text)
    }

    /// Text-level emotion/logic scores and the strategy they imply
    pub fn analyze_text(&self, text: &str, context: AnalysisContext) -> TextAnalysis {
        self.text.analyze(text, context)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AdjustmentDirection, Emotion, EmotionProfile, FormalityLevel};

    #[test]
    fn test_detect_happy_text() {
        let result = EmotionDetector::new().detect("ดีใจมากค่ะ สนุกสุดๆ");
        assert_eq!(result.emotion, Emotion::Joy);
        assert!(result.harmonic_score() > 0.0);
        assert!(result.confidence > 0.0);
    }

    #[test]
    fn test_detect_empty_text() {
        let detector = EmotionDetector::new();
        for text in ["", "   ", "\n\t"] {
            let result = detector.detect(text);
            assert_eq!(result, DetectionResult::empty());
            assert_eq!(result.emotion, Emotion::Neutral);
            assert_eq!(result.confidence, 0.0);
            assert_eq!(result.harmonic_score(), 0.0);
            assert_eq!(result.balance_index(), 0.0);
            assert!(result.is_balanced());
            assert_eq!(result.adjustment.direction, AdjustmentDirection::Balanced);
        }
    }

    #[test]
    fn test_scores_follow_profile_and_confidence() {
        // joy at confidence 1.0 → (0.85, 0.65)
        let result = EmotionDetector::new().detect("ดีใจ");
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.emotion_score, 0.85);
        assert_eq!(result.logic_score, 0.65);

        let analyzer = GoldenRatioAnalyzer::new();
        assert_eq!(result.balance, analyzer.analyze(0.85, 0.65));
        assert_eq!(result.adjustment, analyzer.suggest_adjustment(0.85, 0.65));
    }

    #[test]
    fn test_score_floor() {
        // anger at confidence 0.25 → clarity 0.3 × 0.25 = 0.075, floored to 0.1
        let result = EmotionDetector::new().detect("a b c d e f g โกรธ");
        assert_eq!(result.emotion, Emotion::Anger);
        assert_eq!(result.logic_score, 0.1);
        assert!((result.emotion_score - 0.225).abs() < 1e-12);
    }

    #[test]
    fn test_weak_neutral_profile() {
        // no keyword: neutral at 0.3 → (0.12, 0.21)
        let result = EmotionDetector::new().detect("the quick brown fox");
        assert_eq!(result.emotion, Emotion::Neutral);
        assert!((result.emotion_score - 0.12).abs() < 1e-12);
        assert!((result.logic_score - 0.21).abs() < 1e-12);
        assert_eq!(result.adjustment.direction, AdjustmentDirection::IncreaseEmotion);
    }

    #[test]
    fn test_detect_returns_formality() {
        let result = EmotionDetector::new().detect("ขอบคุณครับ ดีใจมาก");
        assert_eq!(result.formality.level, FormalityLevel::Formal);
        assert_eq!(result.emotion, Emotion::Joy);
    }

    #[test]
    fn test_anger_suggests_more_logic() {
        let result = EmotionDetector::new().detect("โกรธมากเลย หงุดหงิด");
        assert_eq!(result.emotion, Emotion::Anger);
        // 0.9 / 0.3 = 3.0 → well above φ
        assert_eq!(result.adjustment.direction, AdjustmentDirection::IncreaseLogic);
        assert!(!result.is_balanced());
    }

    #[test]
    fn test_custom_profiles_are_used() {
        let profiles = EmotionProfiles::from_entries([(Emotion::Joy, EmotionProfile::new(0.5, 0.5))]);
        let detector =
            EmotionDetector::with_parts(&Lexicon::thai(), GoldenRatioAnalyzer::new(), profiles);
        let result = detector.detect("ดีใจ");
        assert_eq!(result.emotion_score, 0.5);
        assert_eq!(result.logic_score, 0.5);
    }

    #[test]
    fn test_detect_batch_preserves_order() {
        let detector = EmotionDetector::new();
        let results = detector.detect_batch(&["ดีใจ", "เศร้า", ""]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].emotion, Emotion::Joy);
        assert_eq!(results[1].emotion, Emotion::Sadness);
        assert_eq!(results[2].emotion, Emotion::Neutral);
        assert_eq!(results[2], DetectionResult::empty());
    }

    #[test]
    fn test_analyze_text_uses_configured_phi() {
        let analyzer = GoldenRatioAnalyzer::with_config(2.0, 0.15).unwrap();
        let detector =
            EmotionDetector::with_parts(&Lexicon::thai(), analyzer, EmotionProfiles::standard());
        // one positive hit, no '!' → emotion 0.3333, logic 0.25; weights 0.5 / 0.5
        let result = detector.analyze_text("ดีใจ", AnalysisContext::default());
        assert_eq!(result.emotion, 0.3333);
        assert!((result.combined - (0.3333 + 0.25) / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_detect_batch_empty() {
        let empty: [&str; 0] = [];
        assert!(EmotionDetector::new().detect_batch(&empty).is_empty());
    }
}
