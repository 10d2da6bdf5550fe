//! Removes bold/italic quote markers (`''`, `'''`), keeping the emphasized text.
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

use super::Transform;

lazy_static! {
    static ref QUOTES: Regex = Regex::new(r"'{2,3}").unwrap();
}

#[derive(Default)]
pub struct Emphasis;

impl Transform for Emphasis {
    fn transform_own(&self, text: String) -> Result<String, Error> {
        Ok(QUOTES.replace_all(&text, "").into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::Emphasis;
    use crate::transformers::Transform;

    #[test]
    fn markers() {
        let out = Emphasis
            .transform_own("'''東京都'''は''日本''の'''''首都'''''。it's".to_string())
            .unwrap();
        assert_eq!(out, "東京都は日本の首都。it's");
    }
}
