//! Article quality pipeline.
//!
//! Pulls raw articles from a page source in batches, classifies each batch in parallel
//! and writes the accepted articles to a sink.
//!
//! # Processing
//! 1. Source errors are sorted out: a fatal one stops pulling (the articles already pulled
//!    still go through), others skip the page.
//! 1. Articles not in any of the required categories (if any) are filtered out.
//! 1. Each remaining article is classified against the language profile.
//!    Classification is parallel, but results keep the source order.
//! 1. Keywords are extracted from the cleaned text of accepted articles, then sampled.
//! 1. Accepted articles are written in arrival order, until the requested count is reached.
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, info, warn};
use oxilangtag::LanguageTag;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;

use crate::article::{AcceptedArticle, ContentKind, RawArticle};
use crate::classify::{Assessment, Classifier, Rejection, Verdict};
use crate::error::Error;
use crate::identifiers::{Detect, FastText, ScriptRatio};
use crate::io::writer::{ArticleSink, BufferedJsonWriter, JsonArrayWriter};
use crate::keywords::{sample_keywords, KeywordExtractor};
use crate::profiles::Registry;
use crate::sources::PageSource;
use crate::transformers::{Clean, MarkupCleaner};

/// Minimum fastText confidence for an identification to count.
const LID_THRESHOLD: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordOptions {
    pub per_article: usize,
    pub min_frequency: usize,
}

impl Default for KeywordOptions {
    fn default() -> Self {
        Self {
            per_article: 5,
            min_frequency: 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QualityOptions {
    pub batch_size: usize,
    /// stop after this many accepted articles.
    pub max_articles: Option<usize>,
    /// keep only articles in one of these categories (exact match). Empty means no restriction.
    pub required_categories: Vec<String>,
    pub content: ContentKind,
    pub keywords: Option<KeywordOptions>,
    /// keyword sampling seed, for reproducible datasets.
    pub seed: Option<u64>,
}

impl Default for QualityOptions {
    fn default() -> Self {
        Self {
            batch_size: 100,
            max_articles: None,
            required_categories: Vec::new(),
            content: ContentKind::Cleaned,
            keywords: None,
            seed: None,
        }
    }
}

/// What happened during a run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// pages pulled from the source, errors included.
    pub seen: usize,
    pub accepted: usize,
    /// pages skipped because of a non-fatal source error.
    pub skipped: usize,
    /// articles not in a required category.
    pub filtered: usize,
    pub rejected: BTreeMap<Rejection, usize>,
}

impl RunStats {
    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }

    pub fn log_summary(&self) {
        info!(
            "seen {}, accepted {}, skipped {}, filtered {}, rejected {}",
            self.seen,
            self.accepted,
            self.skipped,
            self.filtered,
            self.rejected_total()
        );
        for (reason, count) in &self.rejected {
            info!("  {}: {}", reason, count);
        }
    }
}

/// Builds the default classifier, using fastText for generic detection when a model is provided.
pub fn build_classifier(lid_path: Option<&Path>) -> Result<Classifier, Error> {
    let detector = match lid_path {
        Some(path) => ScriptRatio::new(Box::new(FastText::new(path, LID_THRESHOLD)?)),
        None => ScriptRatio::default(),
    };
    Ok(Classifier::new(MarkupCleaner::default(), detector))
}

pub struct QualityPipeline<C = MarkupCleaner, D = ScriptRatio> {
    registry: Registry,
    language: String,
    classifier: Classifier<C, D>,
    options: QualityOptions,
}

impl<C, D> QualityPipeline<C, D>
where
    C: Clean + Sync,
    D: Detect + Sync,
{
    pub fn new(
        registry: Registry,
        language: &str,
        classifier: Classifier<C, D>,
        options: QualityOptions,
    ) -> Self {
        Self {
            registry,
            language: language.to_string(),
            classifier,
            options,
        }
    }

    fn in_required_categories(&self, article: &RawArticle) -> bool {
        self.options.required_categories.is_empty()
            || article
                .categories()
                .iter()
                .any(|c| self.options.required_categories.contains(c))
    }

    /// Runs `source` through the classifier and writes accepted articles into `sink`,
    /// closing it at the end.
    ///
    /// A fatal source error stops the run: the articles pulled before it are still
    /// classified and written, then the error is returned and the sink is left unclosed.
    pub fn process<S, W>(&self, source: S, sink: &mut W) -> Result<RunStats, Error>
    where
        S: PageSource,
        W: ArticleSink<Item = AcceptedArticle>,
    {
        let profile = self.registry.resolve(&self.language);
        let extractor = KeywordExtractor::new(&self.registry);
        let mut rng = match self.options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut stats = RunStats::default();
        info!(
            "processing {} articles (min length {}, target ratio {})",
            profile.code(),
            profile.min_length(),
            profile.target_script_ratio()
        );

        let mut fatal: Option<Error> = None;
        let batches = source.chunks(self.options.batch_size.max(1));
        'batches: for batch in &batches {
            let mut articles = Vec::new();
            for page in batch {
                stats.seen += 1;
                match page {
                    Ok(article) if self.in_required_categories(&article) => articles.push(article),
                    Ok(article) => {
                        debug!("{}: not in required categories", article.title());
                        stats.filtered += 1;
                    }
                    Err(e) if e.is_fatal() => {
                        fatal = Some(e);
                        break;
                    }
                    Err(e) => {
                        warn!("skipping page: {}", e);
                        stats.skipped += 1;
                    }
                }
            }

            // classify (and extract keywords) in parallel, order is kept by collect
            let results: Vec<(RawArticle, Assessment, Option<BTreeSet<String>>)> = articles
                .into_par_iter()
                .map(|article| {
                    let assessment = self.classifier.assess(&article, &profile);
                    let keywords = match (&assessment.verdict, &assessment.cleaned) {
                        (Verdict::Accepted, Some(cleaned)) => self.options.keywords.map(|k| {
                            extractor.extract(cleaned, profile.code(), k.min_frequency)
                        }),
                        _ => None,
                    };
                    (article, assessment, keywords)
                })
                .collect();

            for (article, assessment, keywords) in results {
                if let Verdict::Rejected(reason) = assessment.verdict {
                    debug!("{}: rejected ({})", article.title(), reason);
                    *stats.rejected.entry(reason).or_default() += 1;
                    continue;
                }

                let (title, wikitext, _) = article.into_parts();
                let content = match self.options.content {
                    ContentKind::Raw => wikitext,
                    ContentKind::Cleaned => assessment
                        .cleaned
                        .unwrap_or_else(|| self.classifier.cleaner().clean(&wikitext)),
                };
                let keywords = match (self.options.keywords, keywords) {
                    (Some(k), Some(set)) => Some(sample_keywords(&set, k.per_article, &mut rng)),
                    _ => None,
                };

                info!("accepted {}", title);
                sink.write_single(&AcceptedArticle::new(title, content, keywords))?;
                stats.accepted += 1;

                if self
                    .options
                    .max_articles
                    .map_or(false, |max| stats.accepted >= max)
                {
                    info!("reached {} articles", stats.accepted);
                    break 'batches;
                }
            }

            if fatal.is_some() {
                break;
            }
        }

        if let Some(e) = fatal {
            return Err(e);
        }
        sink.close()?;
        Ok(stats)
    }
}

/// Settings shared by the commands that run a [QualityPipeline].
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub language: String,
    pub dst: PathBuf,
    /// extra language profiles.
    pub profiles: Option<PathBuf>,
    /// fastText model for generic language detection.
    pub lid_path: Option<PathBuf>,
    /// write the output at once rather than streaming it.
    pub buffered: bool,
    pub options: QualityOptions,
}

impl RunConfig {
    pub fn registry(&self) -> Result<Registry, Error> {
        match &self.profiles {
            Some(path) => Registry::with_defaults().extend_from_path(path),
            None => Ok(Registry::with_defaults()),
        }
    }

    /// Builds the pipeline and runs `source` into the configured output.
    pub fn process<S: PageSource>(&self, source: S) -> Result<RunStats, Error> {
        let tag = LanguageTag::parse_and_normalize(&self.language)?;
        debug!("language tag: {}", tag.as_str());
        let classifier = build_classifier(self.lid_path.as_deref())?;
        let pipeline =
            QualityPipeline::new(self.registry()?, &self.language, classifier, self.options.clone());

        let stats = if self.buffered {
            let mut sink = BufferedJsonWriter::new(&self.dst);
            pipeline.process(source, &mut sink)?
        } else {
            let mut sink = JsonArrayWriter::create(&self.dst)?;
            pipeline.process(source, &mut sink)?
        };

        stats.log_summary();
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::{KeywordOptions, QualityOptions, QualityPipeline, RunStats};
    use crate::article::{AcceptedArticle, ContentKind, RawArticle};
    use crate::classify::{Classifier, Rejection};
    use crate::error::Error;
    use crate::io::writer::{ArticleSink, JsonArrayWriter};
    use crate::profiles::{LanguageProfile, Registry, ScriptPattern};

    fn registry() -> Registry {
        Registry::empty().with_profile(
            LanguageProfile::new("ja")
                .with_min_length(20)
                .with_target_script_ratio(0.3)
                .with_excluded_categories(["一覧"])
                .with_script_pattern(ScriptPattern::new(r"[\p{Hiragana}\p{Katakana}\p{Han}]").unwrap()),
        )
    }

    fn good(title: &str) -> RawArticle {
        RawArticle::new(
            title.to_string(),
            "'''東京'''は[[日本]]の首都である。東京タワーがある。".repeat(3),
            vec!["日本の都市".to_string()],
        )
    }

    fn pipeline(options: QualityOptions) -> QualityPipeline {
        QualityPipeline::new(registry(), "ja", Classifier::default(), options)
    }

    fn run(
        pipeline: &QualityPipeline,
        source: Vec<Result<RawArticle, Error>>,
    ) -> (Result<RunStats, Error>, Vec<AcceptedArticle>) {
        let mut sink: JsonArrayWriter<Vec<u8>, AcceptedArticle> = JsonArrayWriter::new(Vec::new());
        let stats = pipeline.process(source.into_iter(), &mut sink);
        if stats.is_err() {
            // unclosed: repair before parsing
            sink.close().unwrap();
        }
        let out: Vec<AcceptedArticle> = serde_json::from_slice(&sink.into_inner()).unwrap();
        (stats, out)
    }

    #[test]
    fn order_and_stats() {
        let source = vec![
            Ok(good("一")),
            Ok(RawArticle::new("短".to_string(), "短い".to_string(), vec![])),
            Err(Error::MissingPage("消えた".to_string())),
            Ok(RawArticle::new(
                "駅一覧".to_string(),
                good("x").wikitext().to_string(),
                vec!["駅一覧".to_string()],
            )),
            Ok(good("二")),
            Ok(good("三")),
        ];
        let p = pipeline(QualityOptions {
            batch_size: 2,
            ..Default::default()
        });
        let (stats, out) = run(&p, source);
        let stats = stats.unwrap();

        let titles: Vec<_> = out.iter().map(|a| a.title()).collect();
        assert_eq!(titles, vec!["一", "二", "三"]);
        assert_eq!(stats.seen, 6);
        assert_eq!(stats.accepted, 3);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.rejected[&Rejection::TooShort], 1);
        assert_eq!(stats.rejected[&Rejection::ExcludedCategory], 1);
        assert_eq!(stats.rejected_total(), 2);

        // cleaned content by default
        assert!(out[0].content().starts_with("東京は日本の首都である。"));
        assert!(out[0].keywords().is_none());
    }

    #[test]
    fn fatal_error_aborts() {
        let source = vec![
            Ok(good("一")),
            Err(Error::Api {
                url: "https://ja.wikipedia.org/w/api.php".to_string(),
                status: 500,
            }),
            Ok(good("二")),
        ];
        let p = pipeline(QualityOptions {
            batch_size: 10,
            ..Default::default()
        });
        let (stats, out) = run(&p, source);
        assert!(matches!(stats, Err(Error::Api { status: 500, .. })));
        let titles: Vec<_> = out.iter().map(|a| a.title()).collect();
        assert_eq!(titles, vec!["一"]);
    }

    #[test]
    fn fatal_error_keeps_earlier_batches() {
        let api_error = || Error::Api {
            url: "https://ja.wikipedia.org/w/api.php".to_string(),
            status: 503,
        };
        let p = pipeline(QualityOptions {
            batch_size: 2,
            ..Default::default()
        });

        let source = vec![Ok(good("一")), Ok(good("二")), Ok(good("三")), Err(api_error())];
        let (stats, out) = run(&p, source);
        assert!(stats.is_err());
        let titles: Vec<_> = out.iter().map(|a| a.title()).collect();
        assert_eq!(titles, vec!["一", "二", "三"]);

        let (stats, out) = run(&p, vec![Err(api_error()), Ok(good("一"))]);
        assert!(stats.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn max_articles() {
        let source = (0..10).map(|i| Ok(good(&i.to_string()))).collect();
        let p = pipeline(QualityOptions {
            batch_size: 3,
            max_articles: Some(4),
            ..Default::default()
        });
        let (stats, out) = run(&p, source);
        assert_eq!(stats.unwrap().accepted, 4);
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn required_categories() {
        let (title, wikitext, _) = good("other").into_parts();
        let other = RawArticle::new(title, wikitext, vec!["大阪".to_string()]);
        let p = pipeline(QualityOptions {
            required_categories: vec!["日本の都市".to_string()],
            ..Default::default()
        });
        let (stats, out) = run(&p, vec![Ok(good("一")), Ok(other)]);
        assert_eq!(stats.unwrap().filtered, 1);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn raw_content_and_keywords() {
        let p = pipeline(QualityOptions {
            content: ContentKind::Raw,
            keywords: Some(KeywordOptions {
                per_article: 1,
                min_frequency: 3,
            }),
            seed: Some(7),
            ..Default::default()
        });
        let (_, out) = run(&p, vec![Ok(good("一"))]);
        assert!(out[0].content().starts_with("'''東京'''"));
        // 東京 occurs 6 times, タワー 3 times, 日本/首都 3 times
        let keywords = out[0].keywords().unwrap();
        assert_eq!(keywords.len(), 1);
        assert!(["東京", "タワー", "日本", "首都"].contains(&keywords[0].as_str()));
    }
}
