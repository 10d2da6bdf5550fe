//! Markup cleaner.
//!
//! Chains [Transform] rules, in order, to turn wikitext into plain text.
use log::warn;

use super::{Emphasis, Headings, Links, Tags, Templates, Transform, Whitespace};

/// Anything that turns wikitext into plain text.
///
/// Cleaning is total: implementors must always return some text.
pub trait Clean {
    fn clean(&self, wikitext: &str) -> String;
}

/// Ordered list of rewrite rules.
///
/// Template removal comes before link collapsing,
/// so that links inside templates do not leak into the output.
pub struct MarkupCleaner(Vec<Box<dyn Transform + Send + Sync>>);

impl MarkupCleaner {
    /// Cleaner with no rules (returns its input).
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn add(&mut self, rule: Box<dyn Transform + Send + Sync>) -> &mut MarkupCleaner {
        self.0.push(rule);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for MarkupCleaner {
    fn default() -> Self {
        let mut cleaner = Self::empty();
        cleaner
            .add(Box::<Templates>::default())
            .add(Box::<Links>::default())
            .add(Box::<Headings>::default())
            .add(Box::<Tags>::default())
            .add(Box::<Emphasis>::default())
            .add(Box::<Whitespace>::default());
        cleaner
    }
}

impl Clean for MarkupCleaner {
    /// Applies every rule in order.
    /// If one fails, the raw input is returned unchanged.
    fn clean(&self, wikitext: &str) -> String {
        let mut text = wikitext.to_string();
        for rule in &self.0 {
            match rule.transform_own(text) {
                Ok(t) => text = t,
                Err(e) => {
                    warn!("markup cleaning failed, keeping raw text: {e}");
                    return wikitext.to_string();
                }
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::{Clean, MarkupCleaner};
    use crate::error::Error;
    use crate::transformers::Transform;

    struct Failing;
    impl Transform for Failing {
        fn transform_own(&self, _: String) -> Result<String, Error> {
            Err(Error::Markup("failing rule".to_string()))
        }
    }

    #[test]
    fn full_article() {
        let wikitext = r#"{{Infobox 都市
|名前 = 東京都
|画像 = [[File:Tokyo.jpg]]
}}
'''東京都'''（とうきょうと）は、[[日本]]の[[首都|首都]]である<ref>出典</ref>。

== 歴史 ==
[[江戸]]時代には<span>将軍</span>が住んだ。
[[Category:日本の都道府県]]"#;

        let out = MarkupCleaner::default().clean(wikitext);
        assert_eq!(
            out,
            "東京都（とうきょうと）は、日本の首都である。 江戸時代には将軍が住んだ。"
        );
    }

    #[test]
    fn templates_before_links() {
        let out = MarkupCleaner::default().clean("a {{see also|[[Foo|bar]]}} b");
        assert_eq!(out, "a b");
    }

    #[test]
    fn failing_rule_returns_input() {
        let mut cleaner = MarkupCleaner::default();
        cleaner.add(Box::new(Failing));
        let input = "'''raw''' [[text]]";
        assert_eq!(cleaner.clean(input), input);
    }

    #[test]
    fn empty_cleaner_is_identity() {
        let cleaner = MarkupCleaner::empty();
        assert!(cleaner.is_empty());
        assert_eq!(cleaner.clean("{{a}}"), "{{a}}");
    }

    #[test]
    fn default_rule_count() {
        assert_eq!(MarkupCleaner::default().len(), 6);
    }
}
