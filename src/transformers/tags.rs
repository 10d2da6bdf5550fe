//! Removes references, comments and HTML-like tags.
//!
//! References (`<ref>...</ref>`, `<ref name="x"/>`) and comments are dropped with their content.
//! Other tags are dropped, their content is kept.
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

use super::Transform;

lazy_static! {
    static ref COMMENT: Regex = Regex::new(r"(?s)<!--.*?-->").unwrap();
    static ref REF_SELF_CLOSING: Regex = Regex::new(r"(?is)<ref\b[^>]*?/>").unwrap();
    static ref REF: Regex = Regex::new(r"(?is)<ref\b[^>]*>.*?</ref\s*>").unwrap();
    static ref TAG: Regex = Regex::new(r"<[^>]+>").unwrap();
}

#[derive(Default)]
pub struct Tags;

impl Transform for Tags {
    fn transform_own(&self, text: String) -> Result<String, Error> {
        // self-closing refs first, otherwise a paired match could span from one to the next ref.
        let text = COMMENT.replace_all(&text, "");
        let text = REF_SELF_CLOSING.replace_all(&text, "");
        let text = REF.replace_all(&text, "");
        let text = TAG.replace_all(&text, "");
        Ok(text.into_owned())
    }
}
