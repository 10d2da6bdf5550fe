//! Article-level filtering.
//!
//! These filters only look at the raw article (wikitext and categories),
//! so they are cheap compared to cleaning and language detection.
use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::article::RawArticle;
use crate::profiles::{
    LanguageProfile, DEFAULT_MAX_BULLET_DENSITY, DEFAULT_MAX_TEMPLATE_DENSITY, DEFAULT_MIN_LENGTH,
};

use super::Filter;

/// ratio of `count` over the number of characters of `text`, 0 for empty texts.
fn density(count: usize, text: &str) -> f64 {
    match text.chars().count() {
        0 => 0.0,
        len => count as f64 / len as f64,
    }
}

/// Keeps articles whose wikitext is at least `min_length` unicode codepoints long.
pub struct Length {
    min_length: usize,
}

impl Length {
    pub fn with_min_length(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Default for Length {
    /// 2000 codepoints.
    fn default() -> Self {
        Self::with_min_length(DEFAULT_MIN_LENGTH)
    }
}

impl From<&LanguageProfile> for Length {
    fn from(profile: &LanguageProfile) -> Self {
        Self::with_min_length(profile.min_length())
    }
}

impl Filter<&RawArticle> for Length {
    fn detect(&self, article: &RawArticle) -> bool {
        article.wikitext().chars().count() >= self.min_length
    }
}

/// Discards articles that have a category title containing one of the excluded substrings.
///
/// Matching is case-sensitive.
#[derive(Default)]
pub struct Categories<'a> {
    excluded: Cow<'a, BTreeSet<String>>,
}

impl Categories<'_> {
    pub fn new(excluded: BTreeSet<String>) -> Self {
        Self {
            excluded: Cow::Owned(excluded),
        }
    }
}

impl<'a> From<&'a LanguageProfile> for Categories<'a> {
    fn from(profile: &'a LanguageProfile) -> Self {
        Self {
            excluded: Cow::Borrowed(profile.excluded_category_substrings()),
        }
    }
}

impl Filter<&RawArticle> for Categories<'_> {
    fn detect(&self, article: &RawArticle) -> bool {
        !article.categories().iter().any(|category| {
            self.excluded
                .iter()
                .any(|excluded| category.contains(excluded.as_str()))
        })
    }
}

/// Discards template-heavy articles (count of `{{` per character).
pub struct TemplateDensity {
    max_density: f64,
}

impl TemplateDensity {
    pub fn with_max_density(max_density: f64) -> Self {
        Self { max_density }
    }
}

impl Default for TemplateDensity {
    /// 1/200
    fn default() -> Self {
        Self::with_max_density(DEFAULT_MAX_TEMPLATE_DENSITY)
    }
}

impl From<&LanguageProfile> for TemplateDensity {
    fn from(profile: &LanguageProfile) -> Self {
        Self::with_max_density(profile.max_template_density())
    }
}

impl Filter<&RawArticle> for TemplateDensity {
    fn detect(&self, article: &RawArticle) -> bool {
        let text = article.wikitext();
        density(text.matches("{{").count(), text) <= self.max_density
    }
}

/// Discards list-like articles (count of `*` and `#` per character).
pub struct BulletDensity {
    max_density: f64,
}

impl BulletDensity {
    pub fn with_max_density(max_density: f64) -> Self {
        Self { max_density }
    }
}

impl Default for BulletDensity {
    /// 1/50
    fn default() -> Self {
        Self::with_max_density(DEFAULT_MAX_BULLET_DENSITY)
    }
}

impl From<&LanguageProfile> for BulletDensity {
    fn from(profile: &LanguageProfile) -> Self {
        Self::with_max_density(profile.max_bullet_density())
    }
}

impl Filter<&RawArticle> for BulletDensity {
    fn detect(&self, article: &RawArticle) -> bool {
        let text = article.wikitext();
        let bullets = text.chars().filter(|c| *c == '*' || *c == '#').count();
        density(bullets, text) <= self.max_density
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{BulletDensity, Categories, Length, TemplateDensity};
    use crate::article::RawArticle;
    use crate::filtering::Filter;

    fn article(wikitext: &str, categories: &[&str]) -> RawArticle {
        RawArticle::new(
            "title".to_string(),
            wikitext.to_string(),
            categories.iter().map(|c| c.to_string()).collect(),
        )
    }

    #[test]
    fn length_counts_codepoints() {
        let f = Length::with_min_length(5);
        assert!(f.detect(&article("日本語です", &[])));
        assert!(!f.detect(&article("日本語", &[])));
    }

    #[test]
    fn length_default() {
        let valid: String = ['z'; 2000].iter().collect();
        let invalid: String = ['z'; 1999].iter().collect();
        let f = Length::default();
        assert!(f.detect(&article(&valid, &[])));
        assert!(!f.detect(&article(&invalid, &[])));
    }

    #[test]
    fn categories_substring() {
        let excluded: BTreeSet<String> = ["一覧".to_string()].into_iter().collect();
        let f = Categories::new(excluded);
        assert!(!f.detect(&article("", &["日本の駅一覧"])));
        assert!(f.detect(&article("", &["日本の駅"])));
        assert!(f.detect(&article("", &[])));
    }

    #[test]
    fn categories_case_sensitive() {
        let excluded: BTreeSet<String> = ["Stub".to_string()].into_iter().collect();
        let f = Categories::new(excluded);
        assert!(f.detect(&article("", &["stub articles"])));
        assert!(!f.detect(&article("", &["Stub articles"])));
    }

    #[test]
    fn template_density_boundary() {
        let f = TemplateDensity::default();
        // 1 template per 200 chars is tolerated
        let ok = format!("{{{{}}}}{}", "a".repeat(196));
        assert_eq!(ok.chars().count(), 200);
        assert!(f.detect(&article(&ok, &[])));

        let ko = format!("{{{{}}}}{}", "a".repeat(195));
        assert!(!f.detect(&article(&ko, &[])));
    }

    #[test]
    fn bullet_density() {
        let f = BulletDensity::default();
        let list = "* a\n* b\n# c\n".repeat(10);
        assert!(!f.detect(&article(&list, &[])));
        let prose = format!("*{}", "a".repeat(99));
        assert!(f.detect(&article(&prose, &[])));
    }

    #[test]
    fn empty_text_has_no_density() {
        assert!(TemplateDensity::default().detect(&article("", &[])));
        assert!(BulletDensity::default().detect(&article("", &[])));
    }
}
