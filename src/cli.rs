//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;
use url::Url;

use crate::article::ContentKind;
use crate::pipelines::{KeywordOptions, QualityOptions, RunConfig};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "fts-testdata",
    about = "Wikipedia based test data for full-text-search benchmarks."
)]
/// Holds every command that is callable by the `fts-testdata` command.
pub enum FtsTestdata {
    #[structopt(about = "Sample random articles from a live wiki")]
    Fetch(Fetch),
    #[structopt(about = "Extract articles from a MediaWiki XML dump")]
    Extract(Extract),
    #[structopt(about = "Extract keywords from saved articles")]
    Keywords(Keywords),
}

/// Options shared by `fetch` and `extract`.
#[derive(Debug, StructOpt)]
pub struct Quality {
    #[structopt(short = "l", long = "lang", default_value = "ja", help = "language code")]
    pub language: String,
    #[structopt(
        short = "n",
        long = "max-articles",
        default_value = "100",
        help = "number of accepted articles to keep. 0 for no limit."
    )]
    pub max_articles: usize,
    #[structopt(
        long = "batch-size",
        default_value = "100",
        help = "number of articles classified at once"
    )]
    pub batch_size: usize,
    #[structopt(
        short = "c",
        long = "categories",
        number_of_values = 1,
        help = "only keep articles in one of these categories"
    )]
    pub categories: Vec<String>,
    #[structopt(long = "raw", help = "save raw wikitext instead of cleaned text")]
    pub raw: bool,
    #[structopt(long = "keywords", help = "attach keywords to saved articles")]
    pub keywords: bool,
    #[structopt(long = "keywords-per-article", default_value = "5")]
    pub keywords_per_article: usize,
    #[structopt(long = "min-freq", default_value = "2", help = "keyword minimum frequency")]
    pub min_frequency: usize,
    #[structopt(long = "seed", help = "keyword sampling seed")]
    pub seed: Option<u64>,
    #[structopt(
        long = "profiles",
        parse(from_os_str),
        help = "JSON file holding extra language profiles"
    )]
    pub profiles: Option<PathBuf>,
    #[structopt(
        long = "lid-path",
        parse(from_os_str),
        help = "fastText language identification model, used for languages without script pattern"
    )]
    pub lid_path: Option<PathBuf>,
    #[structopt(long = "buffered", help = "write the output at once instead of streaming it")]
    pub buffered: bool,
}

impl Quality {
    pub fn into_config(self, dst: PathBuf) -> RunConfig {
        let keywords = if self.keywords {
            Some(KeywordOptions {
                per_article: self.keywords_per_article,
                min_frequency: self.min_frequency,
            })
        } else {
            None
        };

        RunConfig {
            language: self.language,
            dst,
            profiles: self.profiles,
            lid_path: self.lid_path,
            buffered: self.buffered,
            options: QualityOptions {
                batch_size: self.batch_size,
                max_articles: Some(self.max_articles).filter(|n| *n > 0),
                required_categories: self.categories,
                content: if self.raw {
                    ContentKind::Raw
                } else {
                    ContentKind::Cleaned
                },
                keywords,
                seed: self.seed,
            },
        }
    }
}

#[derive(Debug, StructOpt)]
/// Fetch command and parameters.
///
/// ```sh
/// fts-testdata fetch -l ja -n 100 --delay 1000 ja_random.json
/// ```
pub struct Fetch {
    #[structopt(parse(from_os_str), help = "output JSON file")]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub quality: Quality,
    #[structopt(long = "endpoint", help = "API endpoint. Defaults to the language's Wikipedia")]
    pub endpoint: Option<Url>,
    #[structopt(
        long = "titles-per-request",
        default_value = "10",
        help = "random titles listed per request (max 100)"
    )]
    pub titles_per_request: usize,
    #[structopt(
        long = "delay",
        default_value = "1000",
        help = "pause between list requests, in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(long = "max-batches", help = "stop after this many list requests")]
    pub max_batches: Option<usize>,
}

#[derive(Debug, StructOpt)]
/// Extract command and parameters.
///
/// ```sh
/// fts-testdata extract jawiki-latest-pages-articles.xml.gz ja.json -n 1000
/// ```
pub struct Extract {
    #[structopt(parse(from_os_str), help = "dump file (.xml or .xml.gz)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "output JSON file")]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub quality: Quality,
}

#[derive(Debug, StructOpt)]
/// Keywords command and parameters.
pub struct Keywords {
    #[structopt(parse(from_os_str), help = "JSON array of {title, content} articles")]
    pub src: PathBuf,
    #[structopt(short = "l", long = "lang", default_value = "ja", help = "language code")]
    pub language: String,
    #[structopt(short = "k", long = "keywords-per-article", default_value = "5")]
    pub keywords_per_article: usize,
    #[structopt(long = "min-freq", default_value = "2")]
    pub min_frequency: usize,
    #[structopt(
        short = "o",
        long = "output",
        parse(from_os_str),
        help = "output file. Leave blank for a dry run."
    )]
    pub dst: Option<PathBuf>,
    #[structopt(long = "profiles", parse(from_os_str))]
    pub profiles: Option<PathBuf>,
    #[structopt(long = "seed")]
    pub seed: Option<u64>,
}
