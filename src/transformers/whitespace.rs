//! Collapses whitespace runs into a single space and trims both ends.
use itertools::Itertools;

use crate::error::Error;

use super::Transform;

#[derive(Default)]
pub struct Whitespace;

impl Transform for Whitespace {
    fn transform_own(&self, text: String) -> Result<String, Error> {
        Ok(text.split_whitespace().join(" "))
    }
}
