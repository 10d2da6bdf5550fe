/*! Language profiles.

A [LanguageProfile] is the per-language configuration of the quality pipeline.
Profiles are looked up by language code in a [Registry], which falls back to a default profile
for codes it does not know.
!*/
mod profile;
mod registry;

pub use profile::{
    KeywordConfig, LanguageProfile, ScriptPattern, TokenizerKind, DEFAULT_MAX_BULLET_DENSITY,
    DEFAULT_MAX_TEMPLATE_DENSITY, DEFAULT_MIN_LENGTH, DEFAULT_TARGET_SCRIPT_RATIO,
};
pub use registry::Registry;
