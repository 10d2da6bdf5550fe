//! Transform trait.
use crate::error::Error;

/// A single text rewrite rule.
///
/// Rules take ownership of the text and return it rewritten.
/// They must not depend on each other's internals: the only coupling between rules is their order in
/// [super::MarkupCleaner].
pub trait Transform {
    fn transform_own(&self, text: String) -> Result<String, Error>;
}
