//! Error enum
use std::fmt;

use oxilangtag::LanguageTagParseError;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Regex(regex::Error),
    Http(reqwest::Error),
    Xml(quick_xml::Error),
    LangTag(LanguageTagParseError),
    FastText(String),
    /// Upstream API answered with a non-success status.
    Api {
        url: String,
        status: u16,
    },
    /// Page vanished between listing and fetching.
    MissingPage(String),
    MalformedPage(String),
    /// A markup rewrite rule failed.
    Markup(String),
    UnknownProfile(String),
    Custom(String),
}

impl Error {
    /// Fatal errors abort the run, others only cost the current page.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Error::MissingPage(_) | Error::MalformedPage(_) | Error::Markup(_)
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Serde(e) => write!(f, "json error: {e}"),
            Error::Regex(e) => write!(f, "regex error: {e}"),
            Error::Http(e) => write!(f, "http error: {e}"),
            Error::Xml(e) => write!(f, "xml error: {e}"),
            Error::LangTag(e) => write!(f, "invalid language tag: {e}"),
            Error::FastText(e) => write!(f, "fasttext error: {e}"),
            Error::Api { url, status } => write!(f, "{url} answered with status {status}"),
            Error::MissingPage(title) => write!(f, "page {title:?} is missing"),
            Error::MalformedPage(msg) => write!(f, "malformed page: {msg}"),
            Error::Markup(msg) => write!(f, "markup error: {msg}"),
            Error::UnknownProfile(code) => write!(f, "unknown language profile {code:?}"),
            Error::Custom(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Error {
        Error::Regex(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Http(e)
    }
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Error {
        Error::Xml(e)
    }
}

impl From<LanguageTagParseError> for Error {
    fn from(e: LanguageTagParseError) -> Error {
        Error::LangTag(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
