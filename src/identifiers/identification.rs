/*! Identifier trait

All identifiers should implement [Identifier] to be useable by the language detector.
!*/
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A language label (ISO 639-1 when available) along with its confidence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identification {
    label: String,
    prob: f32,
}

impl Identification {
    pub fn new(label: String, prob: f32) -> Self {
        Self { label, prob }
    }

    /// Get a reference to the identification's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get a reference to the identification's prob.
    pub fn prob(&self) -> &f32 {
        &self.prob
    }
}

/// Statistical language identification.
pub trait Identifier {
    /// returns the most probable language of `text`, if any is reliable enough.
    fn identify(&self, text: &str) -> Result<Option<Identification>, Error>;
}
