//! Fasttext identifier
use std::path::Path;

use fasttext::{FastText as FastTextLib, Prediction};
use log::debug;

use super::{Identification, Identifier};
use crate::error::Error;

/// Clean the prediction label field from `__label__xx` into `xx`.
///
/// # Errors
/// Returns an error if provided prediction does not start with `__label__`.
fn clean_label(prediction: &Prediction) -> Result<String, Error> {
    prediction
        .label
        .strip_prefix("__label__")
        .map(|label| label.replace('_', "-"))
        .ok_or_else(|| Error::FastText(format!("malformed label: {}", prediction.label)))
}

/// Holds a [fasttext::FastText] instance and its prediction threshold.
pub struct FastText {
    predictor: FastTextLib,
    pub threshold: f32,
}

impl FastText {
    /// Create a new fasttext classifier.
    ///
    /// `filename` has to be a path to a `bin` file (e.g. `lid.176.bin`).
    pub fn new(filename: &Path, threshold: f32) -> Result<Self, Error> {
        let filename_str = filename
            .to_str()
            .ok_or_else(|| Error::Custom(format!("invalid filepath for lid: {:?}", filename)))?;

        let mut predictor = FastTextLib::new();
        predictor
            .load_model(filename_str)
            .map_err(Error::FastText)?;
        debug!("loaded fasttext model {:?}", filename);

        Ok(Self {
            predictor,
            threshold,
        })
    }
}

impl Identifier for FastText {
    fn identify(&self, text: &str) -> Result<Option<Identification>, Error> {
        // fasttext predicts on the first line only, and chokes on NUL.
        let text = text.replace(['\n', '\0'], " ");
        let prediction = self
            .predictor
            .predict(&text, 1, self.threshold)
            .map_err(Error::FastText)?;

        match prediction.first() {
            Some(p) => Ok(Some(Identification::new(clean_label(p)?, p.prob))),
            None => Ok(None),
        }
    }
}
