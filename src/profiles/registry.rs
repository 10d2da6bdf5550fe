//! Language profile registry.
//!
//! Holds the profiles that are known at startup.
//! The registry is built once (built-in table, then an optional JSON file)
//! and is read-only afterwards, so it can be shared across threads freely.
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};
use oxilangtag::LanguageTag;

use super::profile::{KeywordConfig, LanguageProfile, ScriptPattern, TokenizerKind};
use crate::error::Error;

/// (code, script pattern, target ratio, excluded category substrings)
type BuiltinEntry = (
    &'static str,
    Option<&'static str>,
    f64,
    &'static [&'static str],
);

const BUILTIN: [BuiltinEntry; 5] = [
    (
        "ja",
        Some(r"[\p{Hiragana}\p{Katakana}\p{Han}ー々]"),
        0.3,
        &["一覧", "曖昧さ回避", "スタブ", "索引"],
    ),
    ("zh", Some(r"\p{Han}"), 0.4, &["消歧义", "列表", "小作品"]),
    ("ko", Some(r"\p{Hangul}"), 0.4, &["동음이의", "목록", "토막글"]),
    (
        "ru",
        Some(r"\p{Cyrillic}"),
        0.4,
        &["Списки", "Многозначные термины", "Незавершённые статьи"],
    ),
    (
        "en",
        None,
        0.4,
        &["stubs", "Lists of", "List of", "Disambiguation pages"],
    ),
];

pub struct Registry {
    profiles: HashMap<String, LanguageProfile>,
    default: LanguageProfile,
}

impl Registry {
    /// Registry with no profiles: every code resolves to the default one.
    pub fn empty() -> Self {
        Self {
            profiles: HashMap::new(),
            default: LanguageProfile::new("und"),
        }
    }

    /// Registry holding the built-in profile table.
    pub fn with_defaults() -> Self {
        let mut profiles = HashMap::new();
        for (code, pattern, ratio, excluded) in BUILTIN.iter() {
            let mut profile = LanguageProfile::new(code)
                .with_target_script_ratio(*ratio)
                .with_excluded_categories(excluded.iter().copied())
                .with_keywords(Self::builtin_keywords(code));

            // built-in patterns are constants, a failure here is a bug in the table.
            if let Some(pattern) = pattern {
                match ScriptPattern::new(pattern) {
                    Ok(p) => profile = profile.with_script_pattern(p),
                    Err(e) => log::error!("invalid built-in pattern for {code}: {e}"),
                }
            }
            profiles.insert(code.to_string(), profile);
        }

        Self {
            profiles,
            default: LanguageProfile::new("und"),
        }
    }

    fn builtin_keywords(code: &str) -> KeywordConfig {
        match code {
            "ja" | "zh" => KeywordConfig {
                tokenizer: TokenizerKind::ScriptRuns,
                ..KeywordConfig::default()
            },
            "en" => KeywordConfig {
                min_length: 3,
                ..KeywordConfig::default()
            },
            _ => KeywordConfig::default(),
        }
    }

    /// Adds (or replaces) a profile.
    pub fn with_profile(mut self, profile: LanguageProfile) -> Self {
        debug!("registering profile {}", profile.code());
        self.profiles.insert(profile.code().to_string(), profile);
        self
    }

    /// Adds the profiles of a JSON file holding an array of profiles.
    pub fn extend_from_path(mut self, path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        let profiles: Vec<LanguageProfile> = serde_json::from_reader(BufReader::new(file))?;
        info!("loaded {} profiles from {:?}", profiles.len(), path);
        for profile in profiles {
            self = self.with_profile(profile);
        }
        Ok(self)
    }

    /// Returns the registered profile for `code`.
    ///
    /// Lookup tries the code as-is, then its normalized BCP47 form,
    /// then its primary language subtag.
    /// Unknown codes get the default profile, carrying the requested code
    /// so that generic detection compares against it.
    pub fn resolve(&self, code: &str) -> Cow<'_, LanguageProfile> {
        if let Some(p) = self.profiles.get(code) {
            return Cow::Borrowed(p);
        }

        match LanguageTag::parse_and_normalize(code) {
            Ok(tag) => {
                if let Some(p) = self
                    .profiles
                    .get(tag.as_str())
                    .or_else(|| self.profiles.get(tag.primary_language()))
                {
                    return Cow::Borrowed(p);
                }
                debug!("no profile for {code}, using default");
                Cow::Owned(self.default.clone().with_code(tag.primary_language()))
            }
            Err(e) => {
                debug!("{code} is not a valid language tag ({e:?}), using default");
                Cow::Owned(self.default.clone().with_code(code))
            }
        }
    }

    /// Strict lookup, without fallback.
    pub fn get(&self, code: &str) -> Result<&LanguageProfile, Error> {
        self.profiles
            .get(code)
            .ok_or_else(|| Error::UnknownProfile(code.to_string()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
