//! Lexical Emotion Classifier: keyword hits per category, no ML
//!
//! confidence(category) = min(hits / max(tokens, 1) × 2.0, 1.0)
//! A keyword hits when it is a substring of the normalized text or equals a
//! lowercased token. Highest confidence wins; ties go to the earlier category.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::lexicon::Lexicon;
use crate::core::text::{normalize, tokenize};
use crate::types::{Emotion, EmotionResult};
use crate::{round_to, CONFIDENCE_SCALE, SCORE_PRECISION, WEAK_NEUTRAL_CONFIDENCE};

/// Score of one emotion category for one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub emotion: Emotion,
    /// Unrounded
    pub confidence: f64,
    pub keywords: Vec<String>,
}

/// Keyword-set emotion classifier
#[derive(Debug, Clone)]
pub struct EmotionClassifier {
    keywords: BTreeMap<Emotion, Vec<String>>,
    thai_normalization: bool,
}

impl Default for EmotionClassifier {
    fn default() -> Self {
        Self::new(&Lexicon::thai())
    }
}

impl EmotionClassifier {
    pub fn new(lexicon: &Lexicon) -> Self {
        Self {
            keywords: lexicon.emotions.clone(),
            thai_normalization: lexicon.thai_normalization,
        }
    }

    /// Dominant emotion of `text`
    pub fn detect_emotion(&self, text: &str) -> EmotionResult {
        if text.trim().is_empty() {
            return EmotionResult::empty();
        }

        let mut best: Option<CategoryScore> = None;
        for score in self.category_scores(text) {
            let better = best
                .as_ref()
                .map_or(true, |current| score.confidence > current.confidence);
            if better {
                best = Some(score);
            }
        }

        match best {
            Some(score) => EmotionResult::new(
                score.emotion,
                round_to(score.confidence, SCORE_PRECISION),
                score.keywords,
            ),
            None => EmotionResult::new(Emotion::Neutral, WEAK_NEUTRAL_CONFIDENCE, Vec::new()),
        }
    }

    /// Every category with at least one hit, in `Emotion` order
    pub fn category_scores(&self, text: &str) -> Vec<CategoryScore> {
        let normalized = normalize(text, self.thai_normalization);
        let tokens: Vec<String> = tokenize(&normalized)
            .iter()
            .map(|t| t.to_lowercase())
            .collect();
        let token_count = tokens.len().max(1) as f64;

        self.keywords
            .iter()
            .filter_map(|(&emotion, keywords)| {
                let matched: Vec<String> = keywords
                    .iter()
                    .filter(|kw| normalized.contains(kw.as_str()) || tokens.iter().any(|t| t == *kw))
                    .cloned()
                    .collect();

                if matched.is_empty() {
                    return None;
                }

                let confidence = (matched.len() as f64 / token_count * CONFIDENCE_SCALE).min(1.0);
                Some(CategoryScore {
                    emotion,
                    confidence,
                    keywords: matched,
                })
            })
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
