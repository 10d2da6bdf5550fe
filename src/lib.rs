/*! # fts-testdata

Builds Wikipedia based test datasets for full-text-search benchmarks.

Raw articles come from a [sources] page source, go through a [classify::Classifier]
configured by a [profiles::LanguageProfile], optionally get [keywords],
and accepted ones end up in an [io::writer] sink.
[pipelines] wire all of this together.
!*/
pub mod article;
pub mod classify;
pub mod cli;
pub mod error;
pub mod filtering;
pub mod identifiers;
pub mod io;
pub mod keywords;
pub mod pipelines;
pub mod profiles;
pub mod sources;
pub mod transformers;
