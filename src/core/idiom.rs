//! Idiom recognition by exact phrase lookup

use crate::core::lexicon::Lexicon;
use crate::types::Idiom;

#[derive(Debug, Clone, Default)]
pub struct IdiomMatcher {
    idioms: Vec<Idiom>,
}

impl IdiomMatcher {
    pub fn new(lexicon: &Lexicon) -> Self {
        Self {
            idioms: lexicon.idioms.clone(),
        }
    }

    /// Every known idiom contained in `text`, in lexicon order
    pub fn detect_idioms(&self, text: &str) -> Vec<Idiom> {
        if text.is_empty() {
            return Vec::new();
        }
        self.idioms
            .iter()
            .filter(|idiom| text.contains(idiom.idiom.as_str()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_idiom() {
        let matcher = IdiomMatcher::new(&Lexicon::thai());
        let found = matcher.detect_idioms("น้ำขึ้นให้รีบตัก");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].meaning, "seize_opportunity");
    }

    #[test]
    fn test_detect_several_in_order() {
        let matcher = IdiomMatcher::new(&Lexicon::thai());
        let found = matcher.detect_idioms("ปากหวาน ก้นเปรี้ยว แต่ก็ น้ำขึ้นให้รีบตัก");
        let meanings: Vec<&str> = found.iter().map(|i| i.meaning.as_str()).collect();
        assert_eq!(meanings, vec!["seize_opportunity", "deception"]);
    }

    #[test]
    fn test_no_idioms() {
        let matcher = IdiomMatcher::new(&Lexicon::thai());
        assert!(matcher.detect_idioms("สวัสดีครับ").is_empty());
        assert!(IdiomMatcher::default().detect_idioms("น้ำขึ้นให้รีบตัก").is_empty());
    }
}
