//! MediaWiki API source.
//!
//! Samples random main namespace articles from a live wiki:
//! each batch lists up to 100 random titles, then fetches every title's
//! wikitext and categories with one request per title.
//!
//! Non-success statuses are fatal ([Error::Api]), there is no retry.
use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use super::strip_namespace;
use crate::article::RawArticle;
use crate::error::Error;

pub const USER_AGENT: &str =
    "FTSTBot/1.0 (https://github.com/osawa-naotaka/full-text-search-testdata; ohsawa.naotaka@gmail.com)";

/// `list=random` limit for non-bot accounts.
pub const MAX_BATCH_SIZE: usize = 100;

#[derive(Debug, Deserialize)]
struct RandomResponse {
    query: RandomQuery,
}

#[derive(Debug, Deserialize)]
struct RandomQuery {
    random: Vec<RandomEntry>,
}

#[derive(Debug, Deserialize)]
struct RandomEntry {
    title: String,
}

#[derive(Debug, Deserialize)]
struct PagesResponse {
    query: PagesQuery,
}

#[derive(Debug, Deserialize)]
struct PagesQuery {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    title: String,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    revisions: Vec<Revision>,
    #[serde(default)]
    categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
struct Revision {
    slots: Slots,
}

#[derive(Debug, Deserialize)]
struct Slots {
    main: Slot,
}

#[derive(Debug, Deserialize)]
struct Slot {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    title: String,
}

impl PagesResponse {
    fn into_article(self, title: &str) -> Result<RawArticle, Error> {
        let page = self
            .query
            .pages
            .into_iter()
            .next()
            .ok_or_else(|| Error::MissingPage(title.to_string()))?;

        if page.missing {
            return Err(Error::MissingPage(page.title));
        }

        let content = page
            .revisions
            .into_iter()
            .next()
            .and_then(|r| r.slots.main.content)
            .ok_or_else(|| Error::MalformedPage(format!("{:?} has no content", page.title)))?;

        let categories = page
            .categories
            .iter()
            .map(|c| strip_namespace(&c.title).to_string())
            .collect();

        Ok(RawArticle::new(page.title, content, categories))
    }
}

/// Lazy random article source.
///
/// The iterator is endless unless a batch limit is set:
/// callers stop pulling when they have enough articles.
pub struct WikiApi {
    client: Client,
    endpoint: Url,
    batch_size: usize,
    delay: Duration,
    max_batches: Option<usize>,
    batches: usize,
    pending: VecDeque<String>,
}

impl WikiApi {
    pub fn new(endpoint: Url) -> Result<Self, Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            endpoint,
            batch_size: 10,
            delay: Duration::from_secs(1),
            max_batches: None,
            batches: 0,
            pending: VecDeque::new(),
        })
    }

    /// Source for `https://<code>.wikipedia.org/w/api.php`.
    pub fn for_language(code: &str) -> Result<Self, Error> {
        let endpoint = Url::parse(&format!("https://{code}.wikipedia.org/w/api.php"))
            .map_err(|e| Error::Custom(format!("invalid endpoint for {code}: {e}")))?;
        Self::new(endpoint)
    }

    /// Titles per batch, capped to [MAX_BATCH_SIZE].
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.clamp(1, MAX_BATCH_SIZE);
        self
    }

    /// Pause between two batches.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_max_batches(mut self, max_batches: Option<usize>) -> Self {
        self.max_batches = max_batches;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn query_url(&self, params: &[(&str, &str)]) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("format", "json")
            .append_pair("formatversion", "2")
            .extend_pairs(params);
        url
    }

    fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);
        let resp = self.client.get(url.clone()).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Api {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp.json()?)
    }

    /// Lists a batch of random titles.
    pub fn random_titles(&self) -> Result<Vec<String>, Error> {
        let limit = self.batch_size.to_string();
        let url = self.query_url(&[
            ("list", "random"),
            ("rnnamespace", "0"),
            ("rnlimit", &limit),
        ]);
        let resp: RandomResponse = self.get(url)?;
        Ok(resp.query.random.into_iter().map(|e| e.title).collect())
    }

    /// Fetches the wikitext and categories of a single page.
    pub fn page(&self, title: &str) -> Result<RawArticle, Error> {
        let url = self.query_url(&[
            ("prop", "revisions|categories"),
            ("rvprop", "content"),
            ("rvslots", "main"),
            ("cllimit", "max"),
            ("titles", title),
        ]);
        let resp: PagesResponse = self.get(url)?;
        resp.into_article(title)
    }

    /// Fills the title queue, sleeping between batches.
    fn refill(&mut self) -> Result<bool, Error> {
        if self.max_batches.map_or(false, |max| self.batches >= max) {
            return Ok(false);
        }
        if self.batches > 0 && !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        let titles = self.random_titles()?;
        self.batches += 1;
        info!("batch {}: {} titles", self.batches, titles.len());
        self.pending.extend(titles);
        Ok(true)
    }
}

impl Iterator for WikiApi {
    type Item = Result<RawArticle, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pending.is_empty() {
            match self.refill() {
                Ok(true) => (),
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
        let title = self.pending.pop_front()?;
        Some(self.page(&title))
    }
}

#[cfg(test)]
mod tests {
    use super::{PagesResponse, RandomResponse, WikiApi};
    use crate::error::Error;

    #[test]
    fn parse_random() {
        let body = r#"{"batchcomplete":true,"continue":{"rncontinue":"0.1|0.2|0|0","continue":"-||"},
            "query":{"random":[{"id":1,"ns":0,"title":"東京"},{"id":2,"ns":0,"title":"大阪"}]}}"#;
        let resp: RandomResponse = serde_json::from_str(body).unwrap();
        let titles: Vec<_> = resp.query.random.into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["東京", "大阪"]);
    }

    #[test]
    fn parse_page() {
        let body = r#"{"batchcomplete":true,"query":{"pages":[{"pageid":1,"ns":0,"title":"東京",
            "revisions":[{"slots":{"main":{"contentmodel":"wikitext","contentformat":"text/x-wiki","content":"'''東京'''は日本の首都。"}}}],
            "categories":[{"ns":14,"title":"Category:日本の都市"},{"ns":14,"title":"Category:首都"}]}]}}"#;
        let resp: PagesResponse = serde_json::from_str(body).unwrap();
        let article = resp.into_article("東京").unwrap();
        assert_eq!(article.title(), "東京");
        assert_eq!(article.wikitext(), "'''東京'''は日本の首都。");
        assert_eq!(article.categories(), &["日本の都市", "首都"]);
    }

    #[test]
    fn parse_missing_page() {
        let body = r#"{"batchcomplete":true,"query":{"pages":[{"ns":0,"title":"存在しない","missing":true}]}}"#;
        let resp: PagesResponse = serde_json::from_str(body).unwrap();
        let err = resp.into_article("存在しない").unwrap_err();
        assert!(matches!(err, Error::MissingPage(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn query_url() {
        let api = WikiApi::for_language("ja").unwrap().with_batch_size(500);
        let url = api.query_url(&[("list", "random"), ("rnlimit", "100")]);
        assert_eq!(url.host_str(), Some("ja.wikipedia.org"));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("formatversion".to_string(), "2".to_string())));
        assert!(pairs.contains(&("list".to_string(), "random".to_string())));
        assert_eq!(api.batch_size, 100);
    }

    #[test]
    #[ignore]
    fn live_batch() {
        let mut api = WikiApi::for_language("ja").unwrap().with_batch_size(2);
        let first = api.next().unwrap();
        assert!(first.is_ok());
    }
}
