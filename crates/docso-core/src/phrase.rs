use std::fmt;

/// Ordered word tokens borrowed from a [`Lexicon`](crate::lexicon::Lexicon).
///
/// Empty tokens are dropped on insertion, so an empty phrase is the identity
/// under [`append`](WordPhrase::append).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPhrase<'a> {
    words: Vec<&'a str>,
}

impl<'a> WordPhrase<'a> {
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    pub fn push(&mut self, word: &'a str) {
        if !word.is_empty() {
            self.words.push(word);
        }
    }

    pub fn append(&mut self, other: WordPhrase<'a>) {
        self.words.extend(other.words);
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn words(&self) -> &[&'a str] {
        &self.words
    }
}

impl<'a> Extend<&'a str> for WordPhrase<'a> {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.push(word);
        }
    }
}

impl<'a> FromIterator<&'a str> for WordPhrase<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut phrase = WordPhrase::new();
        phrase.extend(iter);
        phrase
    }
}

impl fmt::Display for WordPhrase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}
