//! Article types.
//!
//! [RawArticle] is what page sources yield,
//! [AcceptedArticle] is what sinks persist.
use serde::{Deserialize, Serialize};

/// Article as fetched from a wiki, before any cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArticle {
    title: String,
    wikitext: String,
    categories: Vec<String>,
}

impl RawArticle {
    pub fn new(title: String, wikitext: String, categories: Vec<String>) -> Self {
        Self {
            title,
            wikitext,
            categories,
        }
    }

    /// Get a reference to the article's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get a reference to the article's wikitext.
    pub fn wikitext(&self) -> &str {
        &self.wikitext
    }

    /// Category titles, without namespace prefix.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn into_parts(self) -> (String, String, Vec<String>) {
        (self.title, self.wikitext, self.categories)
    }
}

/// Which text ends up in [AcceptedArticle::content].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentKind {
    Raw,
    #[default]
    Cleaned,
}

/// Article that passed every quality check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedArticle {
    title: String,
    content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    keywords: Option<Vec<String>>,
}

impl AcceptedArticle {
    pub fn new(title: String, content: String, keywords: Option<Vec<String>>) -> Self {
        Self {
            title,
            content,
            keywords,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn keywords(&self) -> Option<&[String]> {
        self.keywords.as_deref()
    }
}

/// Output entry of the keywords command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleKeywords {
    pub title: String,
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::AcceptedArticle;

    #[test]
    fn keywords_are_omitted_when_absent() {
        let a = AcceptedArticle::new("東京".to_string(), "東京は日本の首都".to_string(), None);
        let ser = serde_json::to_string(&a).unwrap();
        assert_eq!(ser, r#"{"title":"東京","content":"東京は日本の首都"}"#);
    }

    #[test]
    fn keywords_are_serialized() {
        let a = AcceptedArticle::new(
            "Rust".to_string(),
            "Rust is a language".to_string(),
            Some(vec!["language".to_string()]),
        );
        let ser = serde_json::to_value(&a).unwrap();
        assert_eq!(ser["keywords"][0], "language");
    }
}
