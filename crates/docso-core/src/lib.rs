//! Vietnamese cardinal readings of arbitrary-length decimal numbers.
//!
//! ```
//! assert_eq!(docso_core::read_number("105").unwrap(), "một trăm lẻ năm");
//! assert_eq!(docso_core::read_number("1000000").unwrap(), "một triệu");
//! ```

pub mod compose;
pub mod digits;
pub mod lexicon;
pub mod phrase;
pub mod scale;
pub mod trio;

#[cfg(test)]
mod tests;

use tracing::debug_span;

pub use digits::{DigitString, InvalidInput};
pub use lexicon::{lexicon, Lexicon, LexiconError};
pub use phrase::WordPhrase;

/// Read a non-negative decimal number using the global lexicon.
pub fn read_number(input: &str) -> Result<String, InvalidInput> {
    read_number_with(lexicon(), input)
}

/// Read a non-negative decimal number using `lex`.
pub fn read_number_with(lex: &Lexicon, input: &str) -> Result<String, InvalidInput> {
    let _span = debug_span!("read_number", len = input.len()).entered();
    let digits = DigitString::parse(input)?;
    Ok(compose::compose(&digits, lex).to_string())
}

/// Read a machine integer using the global lexicon.
pub fn read_u64(n: u64) -> String {
    let digits = n.to_string();
    compose::compose(&DigitString::from_formatted(&digits), lexicon()).to_string()
}
