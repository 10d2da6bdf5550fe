//! Model-free identifier, backed by [whatlang].
use lazy_static::lazy_static;
use log::debug;
use std::collections::HashMap;

use super::{Identification, Identifier};
use crate::error::Error;

lazy_static! {
    /// ISO 639-3 (as returned by whatlang) to ISO 639-1 (as used by Wikipedia editions).
    static ref ISO639_1: HashMap<&'static str, &'static str> = [
        ("afr", "af"),
        ("aka", "ak"),
        ("amh", "am"),
        ("ara", "ar"),
        ("aze", "az"),
        ("bel", "be"),
        ("ben", "bn"),
        ("bul", "bg"),
        ("cat", "ca"),
        ("ces", "cs"),
        ("cmn", "zh"),
        ("dan", "da"),
        ("deu", "de"),
        ("ell", "el"),
        ("eng", "en"),
        ("epo", "eo"),
        ("est", "et"),
        ("fin", "fi"),
        ("fra", "fr"),
        ("guj", "gu"),
        ("heb", "he"),
        ("hin", "hi"),
        ("hrv", "hr"),
        ("hun", "hu"),
        ("hye", "hy"),
        ("ind", "id"),
        ("ita", "it"),
        ("jav", "jv"),
        ("jpn", "ja"),
        ("kan", "kn"),
        ("kat", "ka"),
        ("khm", "km"),
        ("kor", "ko"),
        ("lat", "la"),
        ("lav", "lv"),
        ("lit", "lt"),
        ("mal", "ml"),
        ("mar", "mr"),
        ("mkd", "mk"),
        ("mya", "my"),
        ("nep", "ne"),
        ("nld", "nl"),
        ("nob", "no"),
        ("ori", "or"),
        ("pan", "pa"),
        ("pes", "fa"),
        ("pol", "pl"),
        ("por", "pt"),
        ("ron", "ro"),
        ("rus", "ru"),
        ("sin", "si"),
        ("slk", "sk"),
        ("slv", "sl"),
        ("sna", "sn"),
        ("spa", "es"),
        ("srp", "sr"),
        ("swe", "sv"),
        ("tam", "ta"),
        ("tel", "te"),
        ("tgl", "tl"),
        ("tha", "th"),
        ("tuk", "tk"),
        ("tur", "tr"),
        ("ukr", "uk"),
        ("urd", "ur"),
        ("uzb", "uz"),
        ("vie", "vi"),
        ("yid", "yi"),
        ("zul", "zu"),
    ]
    .into_iter()
    .collect();
}

/// Trigram-based identifier that needs no model file.
pub struct Whatlang {
    min_confidence: f64,
}

impl Whatlang {
    pub fn new(min_confidence: f64) -> Self {
        Self { min_confidence }
    }

    /// maps a 639-3 code to its 639-1 counterpart, keeping unknown ones as-is.
    fn to_iso639_1(code: &str) -> String {
        ISO639_1.get(code).copied().unwrap_or(code).to_string()
    }
}

impl Default for Whatlang {
    /// Minimum confidence is 0.25.
    fn default() -> Self {
        Self::new(0.25)
    }
}

impl Identifier for Whatlang {
    fn identify(&self, text: &str) -> Result<Option<Identification>, Error> {
        let info = match whatlang::detect(text) {
            Some(info) => info,
            None => return Ok(None),
        };

        if info.confidence() < self.min_confidence {
            debug!(
                "low confidence identification: {:?} ({:.3})",
                info.lang(),
                info.confidence()
            );
            return Ok(None);
        }

        Ok(Some(Identification::new(
            Self::to_iso639_1(info.lang().code()),
            info.confidence() as f32,
        )))
    }
}
