//! Extraction of articles from a dump.
use std::path::PathBuf;

use log::info;

use super::pipeline::Pipeline;
use super::quality::{RunConfig, RunStats};
use crate::error::Error;
use crate::sources::DumpReader;

pub struct Extract {
    src: PathBuf,
    config: RunConfig,
}

impl Extract {
    pub fn new(src: PathBuf, config: RunConfig) -> Self {
        Self { src, config }
    }
}

impl Pipeline<RunStats> for Extract {
    fn run(&self) -> Result<RunStats, Error> {
        info!("extracting {:?} into {:?}", self.src, self.config.dst);
        let source = DumpReader::from_path(&self.src)?;
        self.config.process(source)
    }
}
