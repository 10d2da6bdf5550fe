//! # fts-testdata
//!
//! Builds test datasets for full-text-search benchmarks from Wikipedia articles.
//!
//! ```sh
//! fts-testdata 0.1.0
//! Wikipedia based test data for full-text-search benchmarks.
//!
//! USAGE:
//!     fts-testdata <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     extract     Extract articles from a MediaWiki XML dump
//!     fetch       Sample random articles from a live wiki
//!     help        Prints this message or the help of the given subcommand(s)
//!     keywords    Extract keywords from saved articles
//! ```
//!
//! Logging is configured through `RUST_LOG` (e.g. `RUST_LOG=info`).
use std::time::Duration;

use structopt::StructOpt;

use fts_testdata::cli::FtsTestdata;
use fts_testdata::error::Error;
use fts_testdata::pipelines::{Extract, Fetch, KeywordOptions, KeywordsPipeline, Pipeline};
use fts_testdata::profiles::Registry;

#[macro_use]
extern crate log;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = FtsTestdata::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        FtsTestdata::Fetch(f) => {
            let p = Fetch::new(f.quality.into_config(f.dst))
                .with_endpoint(f.endpoint)
                .with_batch_size(f.titles_per_request)
                .with_delay(Duration::from_millis(f.delay_ms))
                .with_max_batches(f.max_batches);
            p.run()?;
        }

        FtsTestdata::Extract(e) => {
            let p = Extract::new(e.src, e.quality.into_config(e.dst));
            p.run()?;
        }

        FtsTestdata::Keywords(k) => {
            let registry = match &k.profiles {
                Some(path) => Registry::with_defaults().extend_from_path(path)?,
                None => Registry::with_defaults(),
            };
            let options = KeywordOptions {
                per_article: k.keywords_per_article,
                min_frequency: k.min_frequency,
            };
            let p = KeywordsPipeline::new(k.src, k.dst, &k.language, options)
                .with_registry(registry)
                .with_seed(k.seed);
            p.run()?;
        }
    };
    Ok(())
}
