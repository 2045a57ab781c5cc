//! Reading of a single one-to-three digit group.
//!
//! Each digit position is classified into a [`Slot`] first, then every slot
//! emits its own words. Irregular forms are decided by the neighbouring
//! digits at classification time, never by matching on already emitted text.

use tracing::debug;

use crate::lexicon::Lexicon;
use crate::phrase::WordPhrase;

/// What a single digit position says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Silent position.
    Zero,
    /// Bare digit word.
    PlainDigit(u8),
    /// Digit followed by the hundreds multiplier (including "không trăm").
    HundredsDigit(u8),
    /// Tens position; 1 reads as the ten-word, others as digit + tens multiplier.
    TensDigit(u8),
    /// Particle standing in for a zero tens digit.
    Link,
    /// Units after the tens multiplier; 1, 4 and 5 take irregular words.
    UnitsAfterTens(u8),
}

/// Classify the digits of one group, most significant first.
///
/// `digits` must hold one to three values in `0..=9`.
pub fn classify(digits: &[u8]) -> Vec<Slot> {
    debug_assert!((1..=3).contains(&digits.len()));

    let (hundreds, tens, units) = match *digits {
        [u] => (None, None, u),
        [t, u] => (None, Some(t), u),
        [h, t, u] => (Some(h), Some(t), u),
        _ => return Vec::new(),
    };

    let mut slots = Vec::with_capacity(digits.len());

    if let Some(h) = hundreds {
        // "không trăm lẻ u" shortens to "lẻ u".
        if h == 0 && tens == Some(0) {
            slots.push(Slot::Zero);
        } else {
            slots.push(Slot::HundredsDigit(h));
        }
    }

    if let Some(t) = tens {
        slots.push(match t {
            0 if units != 0 => Slot::Link,
            0 => Slot::Zero,
            t => Slot::TensDigit(t),
        });
    }

    slots.push(match (tens, units) {
        (None, u) => Slot::PlainDigit(u),
        (Some(_), 0) => Slot::Zero,
        (Some(0 | 1), u) => Slot::PlainDigit(u),
        (Some(_), u) => Slot::UnitsAfterTens(u),
    });

    slots
}

fn emit<'a>(slot: Slot, lex: &'a Lexicon, out: &mut WordPhrase<'a>) {
    match slot {
        Slot::Zero => {}
        Slot::PlainDigit(d) => out.push(lex.digit(d)),
        Slot::HundredsDigit(d) => {
            out.push(lex.digit(d));
            out.push(lex.hundreds());
        }
        Slot::TensDigit(1) => out.push(lex.ten()),
        Slot::TensDigit(d) => {
            out.push(lex.digit(d));
            out.push(lex.tens());
        }
        Slot::Link => out.push(lex.link()),
        Slot::UnitsAfterTens(d) => out.push(lex.irregular_after_tens(d).unwrap_or(lex.digit(d))),
    }
}

/// Render the slots of one group.
pub fn render_slots<'a>(slots: &[Slot], lex: &'a Lexicon) -> WordPhrase<'a> {
    let mut phrase = WordPhrase::new();
    for &slot in slots {
        emit(slot, lex, &mut phrase);
    }
    phrase
}

/// Read a group of one to three digits.
///
/// Leading zeros are read literally (`007` is `lẻ bảy`). A lone `"0"` reads
/// as the zero word; wider all-zero groups read as nothing, since the
/// composer drops them before rendering.
pub fn render_trio<'a>(digits: &[u8], lex: &'a Lexicon) -> WordPhrase<'a> {
    let slots = classify(digits);
    debug!(?digits, ?slots, "classified trio");
    render_slots(&slots, lex)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(s: &str) -> String {
        let lex = Lexicon::default();
        let digits: Vec<u8> = s.bytes().map(|b| b - b'0').collect();
        render_trio(&digits, &lex).to_string()
    }

    #[test]
    fn test_classify_slots() {
        assert_eq!(classify(&[7]), vec![Slot::PlainDigit(7)]);
        assert_eq!(classify(&[1, 0]), vec![Slot::TensDigit(1), Slot::Zero]);
        assert_eq!(
            classify(&[1, 0, 5]),
            vec![Slot::HundredsDigit(1), Slot::Link, Slot::PlainDigit(5)]
        );
        assert_eq!(
            classify(&[0, 0, 7]),
            vec![Slot::Zero, Slot::Link, Slot::PlainDigit(7)]
        );
        assert_eq!(
            classify(&[3, 2, 1]),
            vec![Slot::HundredsDigit(3), Slot::TensDigit(2), Slot::UnitsAfterTens(1)]
        );
        assert_eq!(
            classify(&[1, 5]),
            vec![Slot::TensDigit(1), Slot::PlainDigit(5)]
        );
        assert_eq!(classify(&[0, 5]), vec![Slot::Link, Slot::PlainDigit(5)]);
    }

    #[test]
    fn test_units() {
        assert_eq!(read("0"), "không");
        assert_eq!(read("1"), "một");
        assert_eq!(read("4"), "bốn");
        assert_eq!(read("5"), "năm");
        assert_eq!(read("9"), "chín");
    }

    #[test]
    fn test_ten_word() {
        assert_eq!(read("10"), "mười");
        assert_eq!(read("11"), "mười một");
        assert_eq!(read("14"), "mười bốn");
        assert_eq!(read("15"), "mười năm");
        assert_eq!(read("19"), "mười chín");
    }

    #[test]
    fn test_tens() {
        assert_eq!(read("20"), "hai mươi");
        assert_eq!(read("21"), "hai mươi mốt");
        assert_eq!(read("24"), "hai mươi tư");
        assert_eq!(read("25"), "hai mươi lăm");
        assert_eq!(read("33"), "ba mươi ba");
        assert_eq!(read("90"), "chín mươi");
        assert_eq!(read("99"), "chín mươi chín");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(read("100"), "một trăm");
        assert_eq!(read("101"), "một trăm lẻ một");
        assert_eq!(read("104"), "một trăm lẻ bốn");
        assert_eq!(read("105"), "một trăm lẻ năm");
        assert_eq!(read("110"), "một trăm mười");
        assert_eq!(read("115"), "một trăm mười năm");
        assert_eq!(read("120"), "một trăm hai mươi");
        assert_eq!(read("345"), "ba trăm bốn mươi lăm");
        assert_eq!(read("999"), "chín trăm chín mươi chín");
    }

    #[test]
    fn test_zero_hundreds() {
        assert_eq!(read("007"), "lẻ bảy");
        assert_eq!(read("010"), "không trăm mười");
        assert_eq!(read("050"), "không trăm năm mươi");
        assert_eq!(read("021"), "không trăm hai mươi mốt");
        assert_eq!(read("000"), "");
    }

    #[test]
    fn test_irregular_only_after_tens_multiplier() {
        // The ten-word is not the tens multiplier: 11, 14 and 15 keep plain units.
        for (input, expected) in [("11", "mười một"), ("14", "mười bốn"), ("15", "mười năm")] {
            assert_eq!(read(input), expected);
        }
        assert_eq!(read("51"), "năm mươi mốt");
        assert_eq!(read("515"), "năm trăm mười năm");
    }

    #[test]
    fn test_no_one_ten() {
        for s in ["10", "110", "910", "010"] {
            let out = read(s);
            assert!(!out.contains("một mươi"), "{s} -> {out}");
        }
    }

    #[test]
    fn test_zero_tens_without_units() {
        assert_eq!(read("200"), "hai trăm");
        assert_eq!(read("05"), "lẻ năm");
        assert_eq!(read("00"), "");
    }
}
