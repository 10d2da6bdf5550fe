//! Keyword extraction over saved articles.
//!
//! Reads a JSON array of articles, cleans their content (raw wikitext is accepted),
//! extracts and samples keywords for each one,
//! and writes `{title, keywords}` entries.
//! Without an output path, this is a dry run: results are only logged.
use std::path::PathBuf;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use super::pipeline::Pipeline;
use super::quality::KeywordOptions;
use crate::article::ArticleKeywords;
use crate::error::Error;
use crate::io::reader::read_articles;
use crate::io::writer::{ArticleSink, BufferedJsonWriter};
use crate::keywords::{sample_keywords, KeywordExtractor};
use crate::profiles::Registry;
use crate::transformers::{Clean, MarkupCleaner};

pub struct KeywordsPipeline {
    src: PathBuf,
    dst: Option<PathBuf>,
    language: String,
    options: KeywordOptions,
    registry: Registry,
    cleaner: MarkupCleaner,
    seed: Option<u64>,
}

impl KeywordsPipeline {
    pub fn new(src: PathBuf, dst: Option<PathBuf>, language: &str, options: KeywordOptions) -> Self {
        if dst.is_none() {
            info!("no output path specified, running dry");
        }
        Self {
            src,
            dst,
            language: language.to_string(),
            options,
            registry: Registry::with_defaults(),
            cleaner: MarkupCleaner::default(),
            seed: None,
        }
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Pipeline<Vec<ArticleKeywords>> for KeywordsPipeline {
    fn run(&self) -> Result<Vec<ArticleKeywords>, Error> {
        let articles = read_articles(&self.src)?;
        let extractor = KeywordExtractor::new(&self.registry);

        let sets: Vec<_> = articles
            .par_iter()
            .map(|article| {
                let cleaned = self.cleaner.clean(article.content());
                extractor.extract(&cleaned, &self.language, self.options.min_frequency)
            })
            .collect();

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let results: Vec<ArticleKeywords> = articles
            .iter()
            .zip(sets)
            .map(|(article, set)| {
                let keywords = sample_keywords(&set, self.options.per_article, &mut rng);
                info!("{}: {} keywords", article.title(), keywords.len());
                debug!("{}: {:?}", article.title(), keywords);
                ArticleKeywords {
                    title: article.title().to_string(),
                    keywords,
                }
            })
            .collect();

        match &self.dst {
            Some(dst) => {
                let mut w = BufferedJsonWriter::new(dst);
                for entry in &results {
                    w.write_single(entry)?;
                }
                w.close()?;
            }
            None => info!("dry run: {} results not saved", results.len()),
        }

        Ok(results)
    }
}
