//! Text Analyzer: coarse emotion and logic scores straight from a text
//!
//! emotion = min(1, polarity_hits / 3 + 0.1 if '!')
//! logic   = min(1, 0.25 + length bonus + hint bonus + history bonus)
//! combined = emotion_weight × emotion + logic_weight × logic
//!
//! Unlike the lexical classifier this does not name an emotion; it says how
//! charged and how reasoned a message is, and which of the two should lead.

use crate::core::golden_ratio::GoldenRatioAnalyzer;
use crate::core::lexicon::Lexicon;
use crate::types::{AnalysisContext, Strategy, TextAnalysis};
use crate::{
    round_to, EXCLAMATION_BOOST, HISTORY_BONUS, LOGIC_BASE, LOGIC_HINT_CAP, LOGIC_HINT_STEP,
    LOGIC_LONG_BONUS, LOGIC_LONG_WORDS, LOGIC_MEDIUM_BONUS, LOGIC_MEDIUM_WORDS,
    POLARITY_HITS_FULL, SCORE_PRECISION, STRATEGY_MARGIN,
};

#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    positive_words: Vec<String>,
    negative_words: Vec<String>,
    logic_hints: Vec<String>,
    emotion_weight: f64,
    logic_weight: f64,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(&Lexicon::thai(), &GoldenRatioAnalyzer::new())
    }
}

impl TextAnalyzer {
    /// Words come from the lexicon, weights from the analyzer's φ
    pub fn new(lexicon: &Lexicon, analyzer: &GoldenRatioAnalyzer) -> Self {
        Self {
            positive_words: lowercased(&lexicon.positive_words),
            negative_words: lowercased(&lexicon.negative_words),
            logic_hints: lowercased(&lexicon.logic_hints),
            emotion_weight: analyzer.emotion_weight(),
            logic_weight: analyzer.logic_weight(),
        }
    }

    pub fn analyze(&self, text: &str, context: AnalysisContext) -> TextAnalysis {
        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() {
            return TextAnalysis::empty();
        }

        let emotion = self.emotion_score(&normalized);
        let logic = self.logic_score(&normalized, context);
        let combined = emotion * self.emotion_weight + logic * self.logic_weight;

        TextAnalysis {
            emotion,
            logic,
            combined: round_to(combined, SCORE_PRECISION),
            confidence: confidence(emotion, logic),
            strategy: strategy(emotion, logic),
        }
    }

    fn emotion_score(&self, text: &str) -> f64 {
        let hits = count_hits(text, &self.positive_words) + count_hits(text, &self.negative_words);
        let intensity = (hits as f64 / POLARITY_HITS_FULL).min(1.0);
        let boost = if text.contains('!') { EXCLAMATION_BOOST } else { 0.0 };
        round_to((intensity + boost).min(1.0), SCORE_PRECISION)
    }

    fn logic_score(&self, text: &str, context: AnalysisContext) -> f64 {
        let words = text.split_whitespace().count();
        let hints = count_hits(text, &self.logic_hints);

        let mut score = LOGIC_BASE;
        if words >= LOGIC_LONG_WORDS {
            score += LOGIC_LONG_BONUS;
        } else if words >= LOGIC_MEDIUM_WORDS {
            score += LOGIC_MEDIUM_BONUS;
        }
        if hints > 0 {
            score += (hints as f64 * LOGIC_HINT_STEP).min(LOGIC_HINT_CAP);
        }
        if context.has_history {
            score += HISTORY_BONUS;
        }

        round_to(score.min(1.0), SCORE_PRECISION)
    }
}

/// Number of distinct words that occur in `text`
fn count_hits(text: &str, words: &[String]) -> usize {
    words.iter().filter(|w| text.contains(w.as_str())).count()
}

fn lowercased(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

/// Mean of the two scores, discounted by how far apart they are
fn confidence(emotion: f64, logic: f64) -> f64 {
    if emotion == 0.0 && logic == 0.0 {
        return 0.0;
    }
    let closeness = (1.0 - (emotion - logic).abs()).max(0.0);
    let value = (emotion + logic) / 2.0 * closeness;
    round_to(value.clamp(0.0, 1.0), SCORE_PRECISION)
}

fn strategy(emotion: f64, logic: f64) -> Strategy {
    if emotion - logic > STRATEGY_MARGIN {
        Strategy::EmotionDriven
    } else if logic - emotion > STRATEGY_MARGIN {
        Strategy::LogicDriven
    } else {
        Strategy::Balanced
    }
}

// =============================================================================
// TESTS
// =============================================================================
