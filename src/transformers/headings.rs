//! Removes section headings (`== History ==`), title included.
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

use super::Transform;

lazy_static! {
    static ref HEADING: Regex = Regex::new(r"={2,}.*?={2,}").unwrap();
}

#[derive(Default)]
pub struct Headings;

impl Transform for Headings {
    fn transform_own(&self, text: String) -> Result<String, Error> {
        Ok(HEADING.replace_all(&text, "").into_owned())
    }
}
