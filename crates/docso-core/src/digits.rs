//! Validated decimal digit strings and their split into three-digit groups.

/// Why a raw input is not a digit string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("input is empty")]
    Empty,
    #[error("non-digit character {ch:?} at position {position}")]
    NonDigit { ch: char, position: usize },
}

/// A non-empty string of ASCII decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitString<'a> {
    raw: &'a str,
}

impl<'a> DigitString<'a> {
    /// Validate `raw`. Only ASCII `0`-`9` are accepted; there is no trimming,
    /// sign or separator handling.
    pub fn parse(raw: &'a str) -> Result<Self, InvalidInput> {
        if raw.is_empty() {
            return Err(InvalidInput::Empty);
        }
        if let Some((position, ch)) = raw.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(InvalidInput::NonDigit { ch, position });
        }
        Ok(Self { raw })
    }

    /// Wrap a string the caller has already formatted from an integer.
    pub(crate) fn from_formatted(raw: &'a str) -> Self {
        debug_assert!(!raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()));
        Self { raw }
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn is_zero(&self) -> bool {
        self.raw.bytes().all(|b| b == b'0')
    }

    pub fn group_count(&self) -> usize {
        self.raw.len().div_ceil(3)
    }

    /// Three-digit groups, most significant first, cut from the literal
    /// string: leading zeros stay in their group. Only the first group may be
    /// shorter than three digits.
    pub fn groups(&self) -> impl Iterator<Item = Trio<'a>> + 'a {
        let raw = self.raw;
        let count = self.group_count();
        (0..count).rev().map(move |index| {
            let end = raw.len() - 3 * index;
            let start = end.saturating_sub(3);
            Trio {
                digits: &raw[start..end],
                index,
            }
        })
    }
}

/// One to three consecutive digits. `index` counts groups from the least
/// significant end: 0 for units, 1 for thousands, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trio<'a> {
    pub digits: &'a str,
    pub index: usize,
}

impl Trio<'_> {
    pub fn is_zero(&self) -> bool {
        self.digits.bytes().all(|b| b == b'0')
    }

    /// Digit values, most significant first.
    pub fn values(&self) -> Vec<u8> {
        self.digits.bytes().map(|b| b - b'0').collect()
    }
}
