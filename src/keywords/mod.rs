/*! Keyword extraction

Extracts salient terms from cleaned article text, to be used as search queries in benchmarks.
See [KeywordExtractor].
!*/
mod extractor;
mod sample;
mod tokenizer;

pub use extractor::KeywordExtractor;
pub use sample::sample_keywords;
pub use tokenizer::{Morpheme, ScriptRunTokenizer, Tokenize};
