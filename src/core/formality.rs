//! Formality Classifier: sentence-final particle counting
//!
//! score = formal / (formal + casual), over distinct particles present.
//! ≥ 0.6 formal, ≤ 0.4 casual, otherwise neutral.

use crate::core::lexicon::Lexicon;
use crate::types::{FormalityLevel, FormalityResult};
use crate::{round_to, CASUAL_THRESHOLD, FORMAL_THRESHOLD, SCORE_PRECISION};

#[derive(Debug, Clone)]
pub struct FormalityClassifier {
    formal_particles: Vec<String>,
    casual_particles: Vec<String>,
}

impl Default for FormalityClassifier {
    fn default() -> Self {
        Self::new(&Lexicon::thai())
    }
}

impl FormalityClassifier {
    pub fn new(lexicon: &Lexicon) -> Self {
        Self {
            formal_particles: lexicon.formal_particles.clone(),
            casual_particles: lexicon.casual_particles.clone(),
        }
    }

    pub fn detect_formality(&self, text: &str) -> FormalityResult {
        if text.is_empty() {
            return FormalityResult::neutral();
        }

        let formal_found = find_particles(&self.formal_particles, text);
        let casual_found = find_particles(&self.casual_particles, text);

        let formal_count = formal_found.len();
        let total = formal_count + casual_found.len();
        if total == 0 {
            return FormalityResult::neutral();
        }

        let score = formal_count as f64 / total as f64;
        let level = if score >= FORMAL_THRESHOLD {
            FormalityLevel::Formal
        } else if score <= CASUAL_THRESHOLD {
            FormalityLevel::Casual
        } else {
            FormalityLevel::Neutral
        };

        let mut markers_found = formal_found;
        markers_found.extend(casual_found);

        FormalityResult {
            level,
            score: round_to(score, SCORE_PRECISION),
            markers_found,
        }
    }
}

fn find_particles(particles: &[String], text: &str) -> Vec<String> {
    particles
        .iter()
        .filter(|p| text.contains(p.as_str()))
        .cloned()
        .collect()
}
