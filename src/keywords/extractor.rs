//! Keyword extraction.
//!
//! Keywords are the salient terms of a cleaned article: nouns for languages with a
//! [Tokenize] implementation, non stop-words otherwise, that occur often enough in the text.
use std::collections::BTreeSet;

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use unic_ucd::GeneralCategory;

use super::tokenizer::{ScriptRunTokenizer, Tokenize};
use crate::profiles::{KeywordConfig, Registry, TokenizerKind};

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\b[a-zA-Z]+\b").unwrap();
}

pub struct KeywordExtractor<'a> {
    registry: &'a Registry,
}

impl<'a> KeywordExtractor<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Terms of `cleaned` occurring at least `min_frequency` times.
    ///
    /// Extraction settings come from the profile registered for `profile_code`.
    pub fn extract(
        &self,
        cleaned: &str,
        profile_code: &str,
        min_frequency: usize,
    ) -> BTreeSet<String> {
        let profile = self.registry.resolve(profile_code);
        let config = profile.keywords();

        let candidates = match config.tokenizer {
            TokenizerKind::ScriptRuns => Self::nouns(&ScriptRunTokenizer, cleaned, config),
            TokenizerKind::Regex => Self::words(cleaned, config),
        };

        candidates
            .into_iter()
            .counts()
            .into_iter()
            .filter(|(_, count)| *count >= min_frequency)
            .map(|(term, _)| term)
            .collect()
    }

    /// nouns that are long enough and not in an excluded sub-category.
    fn nouns<T: Tokenize>(tokenizer: &T, text: &str, config: &KeywordConfig) -> Vec<String> {
        tokenizer
            .tokenize(text)
            .into_iter()
            .filter(|m| {
                m.features
                    .first()
                    .map_or(false, |pos| config.target_pos.iter().any(|t| t == pos))
            })
            .filter(|m| {
                !config
                    .exclude_pos
                    .iter()
                    .any(|ex| m.features.contains(&ex.as_str()))
            })
            .filter(|m| m.surface.chars().count() >= config.min_length)
            .filter(|m| !m.surface.chars().all(char::is_numeric))
            .filter(|m| {
                !m.surface
                    .chars()
                    .all(|c| GeneralCategory::of(c).is_punctuation())
            })
            .map(|m| m.surface.to_string())
            .collect()
    }

    /// lowercased ascii words that are long enough and not stop words.
    fn words(text: &str, config: &KeywordConfig) -> Vec<String> {
        let text = text.to_lowercase();
        WORD.find_iter(&text)
            .map(|m| m.as_str())
            .filter(|w| w.len() >= config.min_length)
            .filter(|w| !config.stop_words.contains(*w))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::KeywordExtractor;
    use crate::profiles::Registry;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn english_frequency_threshold() {
        let r = Registry::with_defaults();
        let e = KeywordExtractor::new(&r);
        let text = "Apple apple banana. The cherry, cherry and cherry.";
        assert_eq!(e.extract(text, "en", 2), set(&["apple", "cherry"]));
        assert_eq!(e.extract(text, "en", 3), set(&["cherry"]));
        assert_eq!(e.extract(text, "en", 1), set(&["apple", "banana", "cherry"]));
    }

    #[test]
    fn english_stop_words_and_length() {
        let r = Registry::with_defaults();
        let e = KeywordExtractor::new(&r);
        // "of" is a stop word, "go" is too short for english (3)
        let text = "of of go go tea tea";
        assert_eq!(e.extract(text, "en", 2), set(&["tea"]));
    }

    #[test]
    fn default_profile_uses_regex_split() {
        let r = Registry::with_defaults();
        let e = KeywordExtractor::new(&r);
        // default min length is 2
        let text = "le le chat chat";
        assert_eq!(e.extract(text, "fr", 2), set(&["le", "chat"]));
    }

    #[test]
    fn japanese_nouns() {
        let r = Registry::with_defaults();
        let e = KeywordExtractor::new(&r);
        let text = "東京タワーは東京にある。東京タワーは高い。";
        assert_eq!(e.extract(text, "ja", 2), set(&["東京", "タワー"]));
        assert_eq!(e.extract(text, "ja", 3), set(&["東京"]));
    }

    #[test]
    fn japanese_exclusions() {
        let r = Registry::with_defaults();
        let e = KeywordExtractor::new(&r);
        // pronoun, numeral, one-character noun and dependent noun are all dropped
        let text = "彼女は2024年に来た。彼女は2024年に来た。こと、こと";
        assert!(e.extract(text, "ja", 2).is_empty());
    }

    #[test]
    fn frequency_boundary() {
        let r = Registry::with_defaults();
        let e = KeywordExtractor::new(&r);
        let text = "rust rust rust";
        assert!(e.extract(text, "en", 3).contains("rust"));
        assert!(!e.extract(text, "en", 4).contains("rust"));
    }
}
