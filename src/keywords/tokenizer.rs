//! Part-of-speech tagging tokenizer for CJK text.
//!
//! Japanese and Chinese do not separate words with spaces.
//! Rather than embedding a dictionary-based morphological analyzer, we split the text into runs of
//! characters of the same kind (kanji, katakana, hiragana, digits, other letters) and tag each run with
//! IPADIC-style features (`名詞`, `名詞,数`, `名詞,代名詞`, `助詞`...).
//!
//! This is coarse: `東京タワー` yields `東京` and `タワー`, and inflected verbs lose their kanji stem to
//! a one-character run, which the length filter then drops.
use unic_ucd::GeneralCategory;
use unicode_script::{Script, UnicodeScript};

const NOUN: &[&str] = &["名詞", "一般"];
const PROPER_NOUN: &[&str] = &["名詞", "固有名詞"];
const NUMERAL: &[&str] = &["名詞", "数"];
const PRONOUN: &[&str] = &["名詞", "代名詞"];
const DEPENDENT_NOUN: &[&str] = &["名詞", "非自立"];
const PARTICLE: &[&str] = &["助詞"];
const SYMBOL: &[&str] = &["記号"];

const PRONOUNS: [&str; 16] = [
    "私", "僕", "俺", "彼", "彼女", "彼等", "我々", "貴方", "自分", "これ", "それ", "あれ",
    "どれ", "ここ", "そこ", "あそこ",
];

const DEPENDENT_NOUNS: [&str; 8] = ["こと", "もの", "ところ", "ため", "よう", "うち", "ほう", "はず"];

/// A tagged token, borrowing from the tokenized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme<'t> {
    pub surface: &'t str,
    /// part of speech first, then sub-categories.
    pub features: &'static [&'static str],
}

/// Part-of-speech aware tokenization.
pub trait Tokenize {
    fn tokenize<'t>(&self, text: &'t str) -> Vec<Morpheme<'t>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Han,
    Katakana,
    Hiragana,
    Digit,
    Letter,
    Space,
    Symbol,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            return CharClass::Space;
        }
        // prolonged sound mark is Common, but belongs to katakana words.
        if c == 'ー' {
            return CharClass::Katakana;
        }
        match c.script() {
            Script::Han => CharClass::Han,
            Script::Katakana => CharClass::Katakana,
            Script::Hiragana => CharClass::Hiragana,
            _ => {
                let category = GeneralCategory::of(c);
                if category == GeneralCategory::DecimalNumber {
                    CharClass::Digit
                } else if category.is_letter() {
                    CharClass::Letter
                } else {
                    CharClass::Symbol
                }
            }
        }
    }
}

/// Splits text into same-class character runs and tags them.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptRunTokenizer;

impl ScriptRunTokenizer {
    fn tag(surface: &str, class: CharClass) -> &'static [&'static str] {
        if PRONOUNS.contains(&surface) {
            return PRONOUN;
        }
        if DEPENDENT_NOUNS.contains(&surface) {
            return DEPENDENT_NOUN;
        }
        match class {
            CharClass::Han | CharClass::Katakana => NOUN,
            CharClass::Letter => PROPER_NOUN,
            CharClass::Digit => NUMERAL,
            CharClass::Hiragana => PARTICLE,
            CharClass::Space | CharClass::Symbol => SYMBOL,
        }
    }
}

impl Tokenize for ScriptRunTokenizer {
    fn tokenize<'t>(&self, text: &'t str) -> Vec<Morpheme<'t>> {
        let mut morphemes = Vec::new();
        let mut run: Option<(usize, CharClass)> = None;

        for (idx, c) in text.char_indices() {
            let class = CharClass::of(c);
            match run {
                Some((_, current)) if current == class => (),
                Some((start, current)) => {
                    if current != CharClass::Space {
                        let surface = &text[start..idx];
                        morphemes.push(Morpheme {
                            surface,
                            features: Self::tag(surface, current),
                        });
                    }
                    run = Some((idx, class));
                }
                None => run = Some((idx, class)),
            }
        }

        if let Some((start, class)) = run {
            if class != CharClass::Space {
                let surface = &text[start..];
                morphemes.push(Morpheme {
                    surface,
                    features: Self::tag(surface, class),
                });
            }
        }

        morphemes
    }
}

#[cfg(test)]
mod tests {
    use super::{ScriptRunTokenizer, Tokenize};

    fn surfaces(text: &str) -> Vec<(&str, &str)> {
        ScriptRunTokenizer
            .tokenize(text)
            .into_iter()
            .map(|m| (m.surface, m.features[0]))
            .collect()
    }

    #[test]
    fn runs() {
        assert_eq!(
            surfaces("東京タワーは東京にある。"),
            vec![
                ("東京", "名詞"),
                ("タワー", "名詞"),
                ("は", "助詞"),
                ("東京", "名詞"),
                ("にある", "助詞"),
                ("。", "記号"),
            ]
        );
    }

    #[test]
    fn latin_and_digits() {
        let tokens = ScriptRunTokenizer.tokenize("Rust言語 2024年");
        let tags: Vec<_> = tokens.iter().map(|m| (m.surface, m.features)).collect();
        assert_eq!(tags[0], ("Rust", &["名詞", "固有名詞"][..]));
        assert_eq!(tags[1].0, "言語");
        assert_eq!(tags[2], ("2024", &["名詞", "数"][..]));
        assert_eq!(tags[3].0, "年");
        assert_eq!(tags.len(), 4);
    }

    #[test]
    fn pronouns_and_dependent_nouns() {
        let tokens = ScriptRunTokenizer.tokenize("彼女、こと");
        assert_eq!(tokens[0].features, &["名詞", "代名詞"]);
        assert_eq!(tokens[2].features, &["名詞", "非自立"]);
    }

    #[test]
    fn empty() {
        assert!(ScriptRunTokenizer.tokenize("").is_empty());
        assert!(ScriptRunTokenizer.tokenize("   ").is_empty());
    }
}
