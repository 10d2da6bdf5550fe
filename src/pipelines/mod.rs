//! Pipelines.
//!
//! [QualityPipeline] holds the article processing logic,
//! the other pipelines wire it (or the keyword extractor) to sources and outputs.
//! Each of them implements the light [Pipeline] trait.
pub mod extract;
pub mod fetch;
pub mod keywords;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod quality;

pub use extract::Extract;
pub use fetch::Fetch;
pub use keywords::KeywordsPipeline;
pub use pipeline::Pipeline;
pub use quality::{
    build_classifier, KeywordOptions, QualityOptions, QualityPipeline, RunConfig, RunStats,
};
