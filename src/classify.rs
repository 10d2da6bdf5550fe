//! Quality classification.
//!
//! Decides whether a raw article is a good-quality, language-pure corpus entry.
//!
//! Checks are run cheapest first and stop at the first failure:
//! 1. wikitext length
//! 1. excluded categories
//! 1. template density
//! 1. bullet density
//! 1. language of the cleaned text
//!
//! Only the last one needs cleaning and detection.
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::article::RawArticle;
use crate::filtering::{BulletDensity, Categories, Filter, Length, TemplateDensity};
use crate::identifiers::{Detect, ScriptRatio};
use crate::profiles::LanguageProfile;
use crate::transformers::{Clean, MarkupCleaner};

/// Why an article was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    TooShort,
    ExcludedCategory,
    TemplateDensity,
    BulletDensity,
    LanguageMismatch,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::TooShort => "too_short",
            Rejection::ExcludedCategory => "excluded_category",
            Rejection::TemplateDensity => "template_density",
            Rejection::BulletDensity => "bullet_density",
            Rejection::LanguageMismatch => "language_mismatch",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accept/reject decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn reason(&self) -> Option<Rejection> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected(r) => Some(*r),
        }
    }
}

/// A verdict along with the cleaned text, when cleaning was needed to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub verdict: Verdict,
    pub cleaned: Option<String>,
}

impl Assessment {
    fn rejected(reason: Rejection) -> Self {
        Self {
            verdict: Verdict::Rejected(reason),
            cleaned: None,
        }
    }
}

/// Quality classifier.
///
/// Generic over its cleaner and detector so that both can be swapped (or counted, in tests).
pub struct Classifier<C = MarkupCleaner, D = ScriptRatio> {
    cleaner: C,
    detector: D,
}

impl<C: Clean, D: Detect> Classifier<C, D> {
    pub fn new(cleaner: C, detector: D) -> Self {
        Self { cleaner, detector }
    }

    pub fn cleaner(&self) -> &C {
        &self.cleaner
    }

    /// Classifies `article` against `profile`.
    pub fn classify(&self, article: &RawArticle, profile: &LanguageProfile) -> Verdict {
        self.assess(article, profile).verdict
    }

    /// Like [Classifier::classify], but keeps the cleaned text around for later use.
    pub fn assess(&self, article: &RawArticle, profile: &LanguageProfile) -> Assessment {
        if !Length::from(profile).detect(article) {
            return Assessment::rejected(Rejection::TooShort);
        }

        if !Categories::from(profile).detect(article) {
            return Assessment::rejected(Rejection::ExcludedCategory);
        }

        if !TemplateDensity::from(profile).detect(article) {
            return Assessment::rejected(Rejection::TemplateDensity);
        }

        if !BulletDensity::from(profile).detect(article) {
            return Assessment::rejected(Rejection::BulletDensity);
        }

        let cleaned = self.cleaner.clean(article.wikitext());
        let verdict = if self.detector.matches(&cleaned, profile) {
            Verdict::Accepted
        } else {
            Verdict::Rejected(Rejection::LanguageMismatch)
        };

        debug!("{}: {:?}", article.title(), verdict);
        Assessment {
            verdict,
            cleaned: Some(cleaned),
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(MarkupCleaner::default(), ScriptRatio::default())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::{Classifier, Rejection, Verdict};
    use crate::article::RawArticle;
    use crate::identifiers::Detect;
    use crate::profiles::{LanguageProfile, ScriptPattern};
    use crate::transformers::{Clean, MarkupCleaner};

    #[derive(Default)]
    struct CountingCleaner(Cell<usize>);
    impl Clean for CountingCleaner {
        fn clean(&self, wikitext: &str) -> String {
            self.0.set(self.0.get() + 1);
            wikitext.to_string()
        }
    }

    #[derive(Default)]
    struct CountingDetector(Cell<usize>);
    impl Detect for CountingDetector {
        fn matches(&self, _: &str, _: &LanguageProfile) -> bool {
            self.0.set(self.0.get() + 1);
            true
        }
    }

    fn profile() -> LanguageProfile {
        LanguageProfile::new("ja")
            .with_min_length(20)
            .with_target_script_ratio(0.3)
            .with_excluded_categories(["一覧"])
            .with_script_pattern(ScriptPattern::new(r"[\p{Hiragana}\p{Katakana}\p{Han}]").unwrap())
    }

    fn article(wikitext: &str, categories: &[&str]) -> RawArticle {
        RawArticle::new(
            "テスト".to_string(),
            wikitext.to_string(),
            categories.iter().map(|c| c.to_string()).collect(),
        )
    }

    fn counting() -> Classifier<CountingCleaner, CountingDetector> {
        Classifier::new(CountingCleaner::default(), CountingDetector::default())
    }

    #[test]
    fn too_short_short_circuits() {
        let c = counting();
        let v = c.classify(&article("短い", &[]), &profile());
        assert_eq!(v, Verdict::Rejected(Rejection::TooShort));
        assert_eq!(c.cleaner.0.get(), 0);
        assert_eq!(c.detector.0.get(), 0);
    }

    #[test]
    fn cheap_checks_short_circuit() {
        let c = counting();
        let text = "日本語の文章です".repeat(5);

        let v = c.classify(&article(&text, &["駅一覧"]), &profile());
        assert_eq!(v.reason(), Some(Rejection::ExcludedCategory));

        let bullets = format!("{}{}", "*".repeat(10), text);
        let v = c.classify(&article(&bullets, &[]), &profile());
        assert_eq!(v.reason(), Some(Rejection::BulletDensity));

        assert_eq!(c.cleaner.0.get(), 0);
        assert_eq!(c.detector.0.get(), 0);
    }

    #[test]
    fn template_checked_before_bullets() {
        let c = counting();
        let text = format!("{}{}", "{{a}}*#".repeat(5), "日本語".repeat(10));
        let v = c.classify(&article(&text, &[]), &profile());
        assert_eq!(v.reason(), Some(Rejection::TemplateDensity));
    }

    #[test]
    fn accepted_runs_cleaner_and_detector_once() {
        let c = counting();
        let text = "日本語の文章です".repeat(5);
        assert!(c.classify(&article(&text, &[]), &profile()).is_accepted());
        assert_eq!(c.cleaner.0.get(), 1);
        assert_eq!(c.detector.0.get(), 1);
    }

    #[test]
    fn language_mismatch() {
        let c = Classifier::default();
        let text = "This article is written in English only. ".repeat(5);
        let a = c.assess(&article(&text, &[]), &profile());
        assert_eq!(a.verdict, Verdict::Rejected(Rejection::LanguageMismatch));
        assert!(a.cleaned.is_some());
    }

    #[test]
    fn deterministic() {
        let c = Classifier::new(MarkupCleaner::default(), crate::identifiers::ScriptRatio::default());
        let a = article(&"'''日本語'''の[[文章]]です。".repeat(5), &["日本"]);
        let first = c.classify(&a, &profile());
        for _ in 0..10 {
            assert_eq!(c.classify(&a, &profile()), first);
        }
        assert!(first.is_accepted());
    }

    #[test]
    fn reason_codes() {
        assert_eq!(Rejection::TooShort.to_string(), "too_short");
        assert_eq!(
            serde_json::to_string(&Rejection::LanguageMismatch).unwrap(),
            "\"language_mismatch\""
        );
        assert_eq!(Verdict::Accepted.reason(), None);
    }
}
