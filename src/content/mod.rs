use serde::{Deserialize, Serialize};

/// One question/answer pair shown on the FAQ page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// FAQ entries for a language from embedded JSON, in page order.
/// Unknown languages fall back to English.
pub fn faq_entries(lang: &str) -> Vec<FaqEntry> {
    let json = match lang {
        "de" => include_str!("faq_de.json"),
        _ => include_str!("faq_en.json"),
    };

    serde_json::from_str(json).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_entries_en() {
        let entries = faq_entries("en");
        assert!(!entries.is_empty());
        assert!(entries.iter().all(|e| !e.question.is_empty()));
        assert!(entries.iter().all(|e| !e.answer.is_empty()));
    }

    #[test]
    fn test_faq_entries_de_matches_en_length() {
        assert_eq!(faq_entries("de").len(), faq_entries("en").len());
    }

    #[test]
    fn test_faq_entries_fallback() {
        assert_eq!(faq_entries("invalid"), faq_entries("en"));
    }

    #[test]
    fn test_faq_entries_order_is_stable() {
        let first = faq_entries("en");
        let second = faq_entries("en");
        assert_eq!(first, second);
    }
}
