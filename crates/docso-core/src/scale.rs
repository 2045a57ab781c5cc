//! Scale words attached to each three-digit group.
//!
//! There is no native word above a billion, so larger groups compound the
//! billion word: group 4 is "thousand billion", group 6 "billion billion",
//! group 7 "thousand billion billion".

use crate::lexicon::Lexicon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    Units,
    Thousand,
    Million,
    Billion,
}

/// Base magnitude of a group plus how many extra billion words follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub base: Magnitude,
    pub extra_billions: usize,
}

impl Scale {
    pub fn for_group(index: usize) -> Self {
        if index == 0 {
            return Self {
                base: Magnitude::Units,
                extra_billions: 0,
            };
        }
        let base = match (index - 1) % 3 {
            0 => Magnitude::Thousand,
            1 => Magnitude::Million,
            _ => Magnitude::Billion,
        };
        Self {
            base,
            extra_billions: (index - 1) / 3,
        }
    }

    /// Number of words this scale contributes.
    pub fn word_count(&self) -> usize {
        match self.base {
            Magnitude::Units => 0,
            _ => 1 + self.extra_billions,
        }
    }

    pub fn words<'a>(&self, lex: &'a Lexicon) -> impl Iterator<Item = &'a str> {
        let billion = lex.scale(Magnitude::Billion);
        lex.scale(self.base)
            .into_iter()
            .chain(billion.into_iter().cycle().take(self.extra_billions))
    }
}
