//! Word tables loaded from TOML, following the same OnceLock pattern as a
//! global settings singleton.
//!
//! - `init_custom(toml_content)` sets a custom lexicon before first `lexicon()` call
//! - `lexicon()` returns `&'static Lexicon` (lazy-init singleton)
//! - Default words are embedded via `include_str!("default_lexicon.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::scale::Magnitude;

pub const DEFAULT_LEXICON_TOML: &str = include_str!("default_lexicon.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Lexicon> = OnceLock::new();

/// Set a custom lexicon TOML before first `lexicon()` call.
pub fn init_custom(toml_content: String) -> Result<(), LexiconError> {
    parse_lexicon_toml(&toml_content)?;
    if INSTANCE.get().is_some() {
        return Err(LexiconError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| LexiconError::AlreadyInitialized)
}

/// Get or initialize the global lexicon singleton.
pub fn lexicon() -> &'static Lexicon {
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_LEXICON_TOML);
        parse_lexicon_toml(toml_str).expect("lexicon TOML must be valid")
    })
}

/// Returns the embedded default lexicon TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_LEXICON_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("digits.words must list exactly 10 words, got {0}")]
    DigitCount(usize),
    #[error("invalid word for {field}: {reason}")]
    InvalidWord { field: String, reason: String },
    #[error("lexicon already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Lexicon {
    digits: DigitWords,
    multipliers: Multipliers,
    particles: Particles,
    irregular: IrregularUnits,
    scales: ScaleWords,
}

#[derive(Debug, Clone, Deserialize)]
struct DigitWords {
    words: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct Multipliers {
    tens: String,
    hundreds: String,
}

#[derive(Debug, Clone, Deserialize)]
struct Particles {
    ten: String,
    link: String,
}

#[derive(Debug, Clone, Deserialize)]
struct IrregularUnits {
    one: String,
    four: String,
    five: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ScaleWords {
    thousand: String,
    million: String,
    billion: String,
}

impl Lexicon {
    /// Word for a single decimal digit.
    ///
    /// # Panics
    /// If `d > 9`. Callers only pass digits taken from a validated `DigitString`.
    pub fn digit(&self, d: u8) -> &str {
        &self.digits.words[usize::from(d)]
    }

    pub fn tens(&self) -> &str {
        &self.multipliers.tens
    }

    pub fn hundreds(&self) -> &str {
        &self.multipliers.hundreds
    }

    /// Standalone word for exactly ten.
    pub fn ten(&self) -> &str {
        &self.particles.ten
    }

    /// Particle read in place of a zero tens digit.
    pub fn link(&self) -> &str {
        &self.particles.link
    }

    /// Irregular unit word used right after the tens multiplier, if `d` has one.
    pub fn irregular_after_tens(&self, d: u8) -> Option<&str> {
        match d {
            1 => Some(&self.irregular.one),
            4 => Some(&self.irregular.four),
            5 => Some(&self.irregular.five),
            _ => None,
        }
    }

    pub fn scale(&self, magnitude: Magnitude) -> Option<&str> {
        match magnitude {
            Magnitude::Units => None,
            Magnitude::Thousand => Some(&self.scales.thousand),
            Magnitude::Million => Some(&self.scales.million),
            Magnitude::Billion => Some(&self.scales.billion),
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        parse_lexicon_toml(DEFAULT_LEXICON_TOML).expect("default lexicon TOML must be valid")
    }
}

pub fn parse_lexicon_toml(toml_str: &str) -> Result<Lexicon, LexiconError> {
    let lex: Lexicon = toml::from_str(toml_str).map_err(|e| LexiconError::Parse(e.to_string()))?;
    validate(&lex)?;
    Ok(lex)
}

fn check_word(field: &str, word: &str) -> Result<(), LexiconError> {
    if word.is_empty() {
        return Err(LexiconError::InvalidWord {
            field: field.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if word.chars().any(char::is_whitespace) {
        return Err(LexiconError::InvalidWord {
            field: field.to_string(),
            reason: "must be a single word without whitespace".to_string(),
        });
    }
    Ok(())
}

fn validate(lex: &Lexicon) -> Result<(), LexiconError> {
    macro_rules! check {
        ($section:ident . $field:ident) => {
            check_word(
                concat!(stringify!($section), ".", stringify!($field)),
                &lex.$section.$field,
            )?;
        };
    }

    if lex.digits.words.len() != 10 {
        return Err(LexiconError::DigitCount(lex.digits.words.len()));
    }
    for (i, word) in lex.digits.words.iter().enumerate() {
        check_word(&format!("digits.words[{i}]"), word)?;
    }

    check!(multipliers.tens);
    check!(multipliers.hundreds);
    check!(particles.ten);
    check!(particles.link);
    check!(irregular.one);
    check!(irregular.four);
    check!(irregular.five);
    check!(scales.thousand);
    check!(scales.million);
    check!(scales.billion);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_toml_parses() {
        let lex = parse_lexicon_toml(DEFAULT_LEXICON_TOML).unwrap();
        assert_eq!(lex.digit(0), "không");
        assert_eq!(lex.digit(9), "chín");
        assert_eq!(lex.tens(), "mươi");
        assert_eq!(lex.hundreds(), "trăm");
        assert_eq!(lex.ten(), "mười");
        assert_eq!(lex.link(), "lẻ");
        assert_eq!(lex.scale(Magnitude::Billion), Some("tỉ"));
        assert_eq!(lex.scale(Magnitude::Units), None);
    }

    #[test]
    fn irregular_lookup() {
        let lex = Lexicon::default();
        assert_eq!(lex.irregular_after_tens(1), Some("mốt"));
        assert_eq!(lex.irregular_after_tens(4), Some("tư"));
        assert_eq!(lex.irregular_after_tens(5), Some("lăm"));
        assert_eq!(lex.irregular_after_tens(2), None);
    }

    #[test]
    fn global_lexicon_is_default() {
        assert_eq!(lexicon().digit(1), "một");
    }

    #[test]
    fn init_after_first_use_fails() {
        let _ = lexicon();
        let err = init_custom(DEFAULT_LEXICON_TOML.to_string()).unwrap_err();
        assert!(matches!(err, LexiconError::AlreadyInitialized));
    }

    #[test]
    fn custom_southern_words() {
        let custom = DEFAULT_LEXICON_TOML
            .replace("\"nghìn\"", "\"ngàn\"")
            .replace("\"lẻ\"", "\"linh\"");
        let lex = parse_lexicon_toml(&custom).unwrap();
        assert_eq!(lex.scale(Magnitude::Thousand), Some("ngàn"));
        assert_eq!(lex.link(), "linh");
    }

    #[test]
    fn error_wrong_digit_count() {
        let bad = DEFAULT_LEXICON_TOML.replace(", \"chín\"]", "]");
        let err = parse_lexicon_toml(&bad).unwrap_err();
        assert!(matches!(err, LexiconError::DigitCount(9)));
    }

    #[test]
    fn error_empty_word() {
        let bad = DEFAULT_LEXICON_TOML.replace("tens = \"mươi\"", "tens = \"\"");
        let err = parse_lexicon_toml(&bad).unwrap_err();
        match err {
            LexiconError::InvalidWord { field, .. } => assert_eq!(field, "multipliers.tens"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn error_multi_word_entry() {
        let bad = DEFAULT_LEXICON_TOML.replace("\"tỉ\"", "\"tỉ tỉ\"");
        let err = parse_lexicon_toml(&bad).unwrap_err();
        assert!(matches!(err, LexiconError::InvalidWord { .. }));
    }

    #[test]
    fn error_missing_table() {
        let err = parse_lexicon_toml("[digits]\nwords = []\n").unwrap_err();
        assert!(matches!(err, LexiconError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_lexicon_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, LexiconError::Parse(_)));
    }
}
