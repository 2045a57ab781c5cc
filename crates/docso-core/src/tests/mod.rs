
use crate::lexicon::Lexicon;

pub(super) fn read(input: &str) -> String {
    crate::read_number_with(&Lexicon::default(), input).expect("valid digit string")
}

/// Number of scale words in a reading, with compounded billions counted
/// once per word.
pub(super) fn scale_word_count(reading: &str) -> usize {
    reading
        .split(' ')
        .filter(|w| matches!(*w, "nghìn" | "triệu" | "tỉ"))
        .count()
}
