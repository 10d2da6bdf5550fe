//! Language profile.
//!
//! A profile bundles everything that is language-dependent in the quality pipeline:
//! thresholds, an optional script matcher and keyword extraction settings.
//! Profiles are plain configuration and can be (de)serialized from JSON.
use std::collections::BTreeSet;
use std::convert::TryFrom;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const DEFAULT_MIN_LENGTH: usize = 2000;
pub const DEFAULT_TARGET_SCRIPT_RATIO: f64 = 0.4;
/// One template invocation every 200 characters.
pub const DEFAULT_MAX_TEMPLATE_DENSITY: f64 = 1.0 / 200.0;
/// One bullet/numbering marker every 50 characters.
pub const DEFAULT_MAX_BULLET_DENSITY: f64 = 1.0 / 50.0;

const GENERIC_EXCLUDED_CATEGORIES: [&str; 6] = [
    "stub",
    "Stub",
    "List of",
    "Lists of",
    "disambiguation",
    "Disambiguation",
];

const ENGLISH_STOP_WORDS: [&str; 14] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Matcher for the glyphs of a writing system.
///
/// Serialized as its regex source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScriptPattern(Regex);

impl ScriptPattern {
    pub fn new(pattern: &str) -> Result<Self, Error> {
        Ok(Self(Regex::new(pattern)?))
    }

    /// Number of characters that belong to a match of the pattern.
    pub fn count_matching(&self, text: &str) -> usize {
        self.0.find_iter(text).map(|m| m.as_str().chars().count()).sum()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for ScriptPattern {
    type Error = Error;
    fn try_from(pattern: String) -> Result<Self, Error> {
        Self::new(&pattern)
    }
}

impl From<ScriptPattern> for String {
    fn from(p: ScriptPattern) -> String {
        p.0.as_str().to_string()
    }
}

/// Tokenization strategy used for keyword extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// `\b[a-zA-Z]+\b` split and stop words.
    #[default]
    Regex,
    /// part-of-speech tagged script runs (CJK).
    ScriptRuns,
}

/// Keyword extraction settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordConfig {
    #[serde(default)]
    pub tokenizer: TokenizerKind,
    #[serde(default = "default_keyword_min_length")]
    pub min_length: usize,
    /// kept parts of speech (first feature).
    #[serde(default = "default_target_pos")]
    pub target_pos: Vec<String>,
    /// rejected sub-categories (any feature).
    #[serde(default = "default_exclude_pos")]
    pub exclude_pos: Vec<String>,
    #[serde(default = "default_stop_words")]
    pub stop_words: BTreeSet<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerKind::default(),
            min_length: default_keyword_min_length(),
            target_pos: default_target_pos(),
            exclude_pos: default_exclude_pos(),
            stop_words: default_stop_words(),
        }
    }
}

fn default_keyword_min_length() -> usize {
    2
}

fn default_target_pos() -> Vec<String> {
    vec!["名詞".to_string()]
}

fn default_exclude_pos() -> Vec<String> {
    ["非自立", "代名詞", "数"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_stop_words() -> BTreeSet<String> {
    ENGLISH_STOP_WORDS.iter().map(|s| s.to_string()).collect()
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_target_script_ratio() -> f64 {
    DEFAULT_TARGET_SCRIPT_RATIO
}

fn default_max_template_density() -> f64 {
    DEFAULT_MAX_TEMPLATE_DENSITY
}

fn default_max_bullet_density() -> f64 {
    DEFAULT_MAX_BULLET_DENSITY
}

fn default_excluded_categories() -> BTreeSet<String> {
    GENERIC_EXCLUDED_CATEGORIES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Per-language thresholds and matchers governing acceptance and detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageProfile {
    code: String,
    #[serde(default = "default_min_length")]
    min_length: usize,
    #[serde(default = "default_target_script_ratio")]
    target_script_ratio: f64,
    #[serde(default = "default_excluded_categories")]
    excluded_category_substrings: BTreeSet<String>,
    #[serde(default)]
    script_pattern: Option<ScriptPattern>,
    #[serde(default = "default_max_template_density")]
    max_template_density: f64,
    #[serde(default = "default_max_bullet_density")]
    max_bullet_density: f64,
    #[serde(default)]
    keywords: KeywordConfig,
}

impl LanguageProfile {
    /// Profile with default thresholds and no script pattern.
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            min_length: DEFAULT_MIN_LENGTH,
            target_script_ratio: DEFAULT_TARGET_SCRIPT_RATIO,
            excluded_category_substrings: default_excluded_categories(),
            script_pattern: None,
            max_template_density: DEFAULT_MAX_TEMPLATE_DENSITY,
            max_bullet_density: DEFAULT_MAX_BULLET_DENSITY,
            keywords: KeywordConfig::default(),
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Clamped to `[0, 1]`.
    pub fn with_target_script_ratio(mut self, ratio: f64) -> Self {
        self.target_script_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Replaces the excluded category substrings.
    pub fn with_excluded_categories<I, S>(mut self, excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_category_substrings = excluded.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_script_pattern(mut self, pattern: ScriptPattern) -> Self {
        self.script_pattern = Some(pattern);
        self
    }

    pub fn with_max_template_density(mut self, density: f64) -> Self {
        self.max_template_density = density;
        self
    }

    pub fn with_max_bullet_density(mut self, density: f64) -> Self {
        self.max_bullet_density = density;
        self
    }

    pub fn with_keywords(mut self, keywords: KeywordConfig) -> Self {
        self.keywords = keywords;
        self
    }

    pub(crate) fn with_code(mut self, code: &str) -> Self {
        self.code = code.to_string();
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn target_script_ratio(&self) -> f64 {
        self.target_script_ratio
    }

    pub fn excluded_category_substrings(&self) -> &BTreeSet<String> {
        &self.excluded_category_substrings
    }

    pub fn script_pattern(&self) -> Option<&ScriptPattern> {
        self.script_pattern.as_ref()
    }

    pub fn max_template_density(&self) -> f64 {
        self.max_template_density
    }

    pub fn max_bullet_density(&self) -> f64 {
        self.max_bullet_density
    }

    pub fn keywords(&self) -> &KeywordConfig {
        &self.keywords
    }
}
