//! Script-ratio language detector.
//!
//! Decides whether a cleaned text is written in the language of a [LanguageProfile]:
//! - profiles with a script pattern are checked by counting the characters that match it,
//! - other profiles are checked by a statistical [Identifier].
use log::debug;

use super::{Identifier, Whatlang};
use crate::profiles::LanguageProfile;

/// Language membership test.
pub trait Detect {
    /// true if `cleaned` is in the language of `profile`.
    /// Detection failures are non-matches.
    fn matches(&self, cleaned: &str, profile: &LanguageProfile) -> bool;
}

pub struct ScriptRatio {
    identifier: Box<dyn Identifier + Send + Sync>,
}

impl ScriptRatio {
    /// Use a custom identifier for profiles without script pattern.
    pub fn new(identifier: Box<dyn Identifier + Send + Sync>) -> Self {
        Self { identifier }
    }

    /// Share of characters of `text` that belong to the profile's script,
    /// or `None` if the text is empty or the profile has no pattern.
    pub fn ratio(text: &str, profile: &LanguageProfile) -> Option<f64> {
        let pattern = profile.script_pattern()?;
        let total = text.chars().count();
        if total == 0 {
            return None;
        }
        Some(pattern.count_matching(text) as f64 / total as f64)
    }

    fn identify_matches(&self, text: &str, profile: &LanguageProfile) -> bool {
        match self.identifier.identify(text) {
            Ok(Some(id)) => {
                debug!("identified as {} ({:.3})", id.label(), id.prob());
                // compare primary language subtags only (zh-Hans → zh)
                let label = id.label().split('-').next().unwrap_or_default();
                label == profile.code()
            }
            Ok(None) => false,
            Err(e) => {
                debug!("identification failed: {e}");
                false
            }
        }
    }
}

impl Default for ScriptRatio {
    fn default() -> Self {
        Self::new(Box::<Whatlang>::default())
    }
}

impl Detect for ScriptRatio {
    fn matches(&self, cleaned: &str, profile: &LanguageProfile) -> bool {
        if profile.script_pattern().is_some() {
            match Self::ratio(cleaned, profile) {
                Some(ratio) => ratio >= profile.target_script_ratio(),
                None => false,
            }
        } else {
            self.identify_matches(cleaned, profile)
        }
    }
}
