//! Idiom entries: a fixed phrase and the intent it signals

use serde::{Deserialize, Serialize};

/// A fixed expression and the intent it stands for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idiom {
    pub idiom: String,
    pub meaning: String,
}

impl Idiom {
    pub fn new(idiom: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            idiom: idiom.into(),
            meaning: meaning.into(),
        }
    }
}
