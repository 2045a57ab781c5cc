use tracing::{debug, debug_span};

use crate::digits::DigitString;
use crate::lexicon::Lexicon;
use crate::phrase::WordPhrase;
use crate::scale::Scale;
use crate::trio::render_trio;

/// Read a whole digit string, group by group, most significant first.
///
/// Groups are cut from the literal string, so leading zeros read the way
/// they do inside a group (`007` is `lẻ bảy`). All-zero groups are skipped
/// together with their scale word; a value of zero reads as the zero word
/// alone.
pub fn compose<'a>(digits: &DigitString<'_>, lex: &'a Lexicon) -> WordPhrase<'a> {
    let _span = debug_span!("compose", digit_count = digits.as_str().len()).entered();

    if digits.is_zero() {
        return std::iter::once(lex.digit(0)).collect();
    }

    let mut phrase = WordPhrase::new();
    let mut skipped = 0usize;
    for trio in digits.groups() {
        if trio.is_zero() {
            skipped += 1;
            continue;
        }
        phrase.append(render_trio(&trio.values(), lex));
        phrase.extend(Scale::for_group(trio.index).words(lex));
    }

    debug!(
        groups = digits.group_count(),
        skipped,
        words = phrase.len()
    );
    phrase
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(s: &str) -> String {
        let lex = Lexicon::default();
        compose(&DigitString::parse(s).unwrap(), &lex).to_string()
    }

    #[test]
    fn test_zero() {
        assert_eq!(read("0"), "không");
        assert_eq!(read("000"), "không");
        assert_eq!(read("000000000"), "không");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(read("1000"), "một nghìn");
        assert_eq!(read("1001"), "một nghìn lẻ một");
        assert_eq!(read("1010"), "một nghìn không trăm mười");
        assert_eq!(read("1050"), "một nghìn không trăm năm mươi");
        assert_eq!(read("2021"), "hai nghìn không trăm hai mươi mốt");
        assert_eq!(read("15000"), "mười năm nghìn");
        assert_eq!(read("21500"), "hai mươi mốt nghìn năm trăm");
    }

    #[test]
    fn test_interior_zero_group_vanishes() {
        assert_eq!(read("1000000"), "một triệu");
        assert_eq!(read("1000005"), "một triệu lẻ năm");
        assert_eq!(read("5000000000"), "năm tỉ");
        assert_eq!(read("1000000001"), "một tỉ lẻ một");
    }

    #[test]
    fn test_full_number() {
        assert_eq!(
            read("123456789"),
            "một trăm hai mươi ba triệu bốn trăm năm mươi sáu nghìn bảy trăm tám mươi chín"
        );
    }

    #[test]
    fn test_beyond_billion() {
        assert_eq!(read("1000000000000"), "một nghìn tỉ");
        assert_eq!(read("2000000000000000000"), "hai tỉ tỉ");
        assert_eq!(
            read("1234000000000000"),
            "một triệu tỉ hai trăm ba mươi tư nghìn tỉ"
        );
    }

    #[test]
    fn test_leading_zeros_read_literally() {
        assert_eq!(read("007"), "lẻ bảy");
        assert_eq!(read("010"), "không trăm mười");
        assert_eq!(read("05"), "lẻ năm");
        assert_eq!(read("0001000"), "lẻ một nghìn");
        // A whole zero group in front changes nothing.
        assert_eq!(read("000105"), read("105"));
    }

    #[test]
    fn test_short_input_matches_trio() {
        let lex = Lexicon::default();
        for input in ["7", "05", "007", "010", "15", "105", "999"] {
            let digits: Vec<u8> = input.bytes().map(|b| b - b'0').collect();
            assert_eq!(
                read(input),
                render_trio(&digits, &lex).to_string(),
                "input {input:?}"
            );
        }
    }
}
