//! Reading back saved articles.
//!
//! Accepts JSON arrays of `{title, content}` objects, as written by the quality pipeline,
//! as well as `{title, text}` objects.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};
use serde_json::Value;

use crate::article::AcceptedArticle;
use crate::error::Error;

fn field<'v>(entry: &'v Value, names: &[&str]) -> Option<&'v str> {
    names
        .iter()
        .find_map(|name| entry.get(*name).and_then(Value::as_str))
}

fn into_article(idx: usize, entry: &Value) -> Result<AcceptedArticle, Error> {
    let title = field(entry, &["title"])
        .ok_or_else(|| Error::MalformedPage(format!("entry {idx} has no title")))?;
    let content = field(entry, &["content", "text"])
        .ok_or_else(|| Error::MalformedPage(format!("entry {idx} ({title}) has no content")))?;
    Ok(AcceptedArticle::new(
        title.to_string(),
        content.to_string(),
        None,
    ))
}

/// Reads the articles of a JSON array file.
///
/// Malformed entries are skipped.
pub fn read_articles(path: &Path) -> Result<Vec<AcceptedArticle>, Error> {
    let file = File::open(path)?;
    let entries: Vec<Value> = serde_json::from_reader(BufReader::new(file))?;
    let total = entries.len();

    let articles: Vec<AcceptedArticle> = entries
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| match into_article(idx, entry) {
            Ok(article) => Some(article),
            Err(e) => {
                debug!("skipping: {}", e);
                None
            }
        })
        .collect();

    info!("read {}/{} articles from {:?}", articles.len(), total, path);
    Ok(articles)
}
