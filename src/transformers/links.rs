//! Collapses wiki links to their displayed text.
//!
//! - `[[target|label]]` becomes `label`
//! - `[[target]]` becomes `target`
//! - `[[Category:foo]]`, `[[File:bar.jpg|thumb|caption]]` (and their localized forms) are dropped
//! - `[https://example.org label]` becomes `label`, bare external links are dropped
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::error::Error;

use super::Transform;

/// Namespaces whose links do not render as text.
pub const HIDDEN_NAMESPACES: [&str; 9] = [
    "category",
    "file",
    "image",
    "media",
    "カテゴリ",
    "ファイル",
    "画像",
    "分类",
    "분류",
];

lazy_static! {
    // innermost links only: neither target nor label may contain brackets.
    static ref WIKI_LINK: Regex = Regex::new(r"\[\[([^\[\]|]*)(?:\|([^\[\]]*))?\]\]").unwrap();
    static ref EXTERNAL_LINK: Regex =
        Regex::new(r"\[(?:https?:)?//[^\s\]]+(?:\s+([^\]]*))?\]").unwrap();
}

#[derive(Default)]
pub struct Links;

impl Links {
    /// true if the link target lives in a namespace that is not rendered as text.
    pub fn is_hidden(target: &str) -> bool {
        match target.trim().split_once(':') {
            Some((ns, _)) => {
                let ns = ns.trim().to_lowercase();
                HIDDEN_NAMESPACES.iter().any(|hidden| *hidden == ns)
            }
            None => false,
        }
    }

    fn collapse(caps: &Captures) -> String {
        let target = caps.get(1).map_or("", |m| m.as_str());
        if Self::is_hidden(target) {
            return String::new();
        }
        match caps.get(2).map(|m| m.as_str()) {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => target.to_string(),
        }
    }
}

impl Transform for Links {
    fn transform_own(&self, mut text: String) -> Result<String, Error> {
        // each pass removes at least one `[[`, so this terminates.
        // links nested in captions get collapsed before their enclosing file link.
        while WIKI_LINK.is_match(&text) {
            text = WIKI_LINK
                .replace_all(&text, |caps: &Captures| Self::collapse(caps))
                .into_owned();
        }

        let text = EXTERNAL_LINK
            .replace_all(&text, |caps: &Captures| {
                caps.get(1)
                    .map_or(String::new(), |m| m.as_str().trim().to_string())
            })
            .into_owned();

        Ok(text)
    }
}
