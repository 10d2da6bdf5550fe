/*! Language identification

Holds an [Identifier] trait for statistical identifiers, and the [Detect] trait used by the classifier.

Two identifiers are available:
- [Whatlang], the default one, that needs no model,
- [FastText], that needs a model such as [lid.176.bin](https://fasttext.cc/docs/en/language-identification.html).
!*/
mod detector;
mod fasttext;
mod identification;
mod statistical;

pub use self::fasttext::FastText;
pub use detector::{Detect, ScriptRatio};
pub use identification::{Identification, Identifier};
pub use statistical::Whatlang;
