/*! Page sources.

A page source is any iterator of `Result<RawArticle, Error>`.
Errors are yielded rather than raised so that the consumer decides, through [Error::is_fatal],
whether to skip the page or abort the run.

- [WikiApi] samples random articles from a live wiki,
- [DumpReader] streams articles from a MediaWiki XML dump.
!*/
use lazy_static::lazy_static;
use regex::Regex;

use crate::article::RawArticle;
use crate::error::Error;

pub mod api;
pub mod dump;

pub use api::WikiApi;
pub use dump::DumpReader;

/// Localized names of the category namespace.
pub const CATEGORY_NAMESPACES: [&str; 5] = ["category", "カテゴリ", "分类", "분류", "категория"];

lazy_static! {
    static ref CATEGORY_LINK: Regex =
        Regex::new(r"\[\[\s*([^\[\]|:]+?)\s*:\s*([^\[\]|]+?)\s*(?:\|[^\[\]]*)?\]\]").unwrap();
}

/// Marker trait for article sources.
pub trait PageSource: Iterator<Item = Result<RawArticle, Error>> {}
impl<T> PageSource for T where T: Iterator<Item = Result<RawArticle, Error>> {}

/// Removes the namespace prefix of a category title (`Category:Foo` → `Foo`).
pub fn strip_namespace(title: &str) -> &str {
    match title.split_once(':') {
        Some((_, name)) => name.trim(),
        None => title.trim(),
    }
}

/// Category names linked from `wikitext`, in order of appearance.
pub fn categories_of(wikitext: &str) -> Vec<String> {
    CATEGORY_LINK
        .captures_iter(wikitext)
        .filter(|caps| {
            let ns = caps[1].to_lowercase();
            CATEGORY_NAMESPACES.iter().any(|c| *c == ns)
        })
        .map(|caps| caps[2].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{categories_of, strip_namespace};

    #[test]
    fn category_links() {
        let text = "本文[[Category:日本の駅|とうきよう]]\n[[カテゴリ:東京都]][[ファイル:a.jpg]][[東京]]";
        assert_eq!(categories_of(text), vec!["日本の駅", "東京都"]);
    }

    #[test]
    fn category_links_case_insensitive() {
        assert_eq!(categories_of("[[category: Rust ]]"), vec!["Rust"]);
    }

    #[test]
    fn strip() {
        assert_eq!(strip_namespace("Category:日本の駅"), "日本の駅");
        assert_eq!(strip_namespace("日本の駅"), "日本の駅");
    }
}
