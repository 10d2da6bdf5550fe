use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fts_testdata::article::RawArticle;
use fts_testdata::classify::Classifier;
use fts_testdata::keywords::KeywordExtractor;
use fts_testdata::profiles::Registry;
use fts_testdata::transformers::{Clean, MarkupCleaner};

const ARTICLE: &str = r#"{{Infobox 都市|名前=東京|画像=[[ファイル:Tokyo.jpg|thumb|{{lang|en|Tokyo}}]]}}
'''東京'''(とうきょう)は、[[日本]]の[[首都]]である<ref name="a">{{cite web|url=https://example.org}}</ref>。
== 歴史 ==
[[江戸]]時代には''江戸''と呼ばれた。<!-- 要確認 -->[https://example.org 公式サイト]
[[Category:日本の都市]]
"#;

fn article() -> RawArticle {
    RawArticle::new(
        "東京".to_string(),
        ARTICLE.repeat(40),
        vec!["日本の都市".to_string()],
    )
}

pub fn clean(c: &mut Criterion) {
    let cleaner = MarkupCleaner::default();
    let text = ARTICLE.repeat(40);
    c.bench_function("clean", |b| b.iter(|| cleaner.clean(black_box(&text))));
}

pub fn classify(c: &mut Criterion) {
    let registry = Registry::with_defaults();
    let profile = registry.resolve("ja");
    let classifier = Classifier::default();
    let article = article();
    c.bench_function("classify ja", |b| {
        b.iter(|| classifier.classify(black_box(&article), &profile))
    });
}

pub fn keywords(c: &mut Criterion) {
    let registry = Registry::with_defaults();
    let extractor = KeywordExtractor::new(&registry);
    let cleaned = MarkupCleaner::default().clean(&ARTICLE.repeat(40));
    c.bench_function("keywords ja", |b| {
        b.iter(|| extractor.extract(black_box(&cleaned), "ja", 2))
    });
}

criterion_group!(benches, clean, classify, keywords);
criterion_main!(benches);
