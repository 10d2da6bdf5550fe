//! Pipeline trait.
use crate::error::Error;

/// Implemented by every command-level pipeline.
///
/// Generic over the return type so that pipelines can report
/// what they did (statistics, extracted data...).
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
