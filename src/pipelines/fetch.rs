//! Random sampling of a live wiki.
use std::time::Duration;

use log::info;
use url::Url;

use super::pipeline::Pipeline;
use super::quality::{RunConfig, RunStats};
use crate::error::Error;
use crate::sources::WikiApi;

pub struct Fetch {
    config: RunConfig,
    endpoint: Option<Url>,
    batch_size: usize,
    delay: Duration,
    max_batches: Option<usize>,
}

impl Fetch {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            endpoint: None,
            batch_size: 10,
            delay: Duration::from_secs(1),
            max_batches: None,
        }
    }

    /// Use another API endpoint than the language's Wikipedia.
    pub fn with_endpoint(mut self, endpoint: Option<Url>) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Titles listed per API batch.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_max_batches(mut self, max_batches: Option<usize>) -> Self {
        self.max_batches = max_batches;
        self
    }

    fn source(&self) -> Result<WikiApi, Error> {
        let api = match &self.endpoint {
            Some(endpoint) => WikiApi::new(endpoint.clone())?,
            None => WikiApi::for_language(&self.config.language)?,
        };
        Ok(api
            .with_batch_size(self.batch_size)
            .with_delay(self.delay)
            .with_max_batches(self.max_batches))
    }
}

impl Pipeline<RunStats> for Fetch {
    fn run(&self) -> Result<RunStats, Error> {
        let source = self.source()?;
        info!(
            "fetching from {} into {:?}",
            source.endpoint(),
            self.config.dst
        );
        self.config.process(source)
    }
}
