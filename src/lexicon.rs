// ============================================
// src/lexicon.rs
// 数字 → スペイン語の単語 (1〜100)
// ============================================

use std::borrow::Cow;

/// 0〜29 は不規則なのでそのまま表にする
const UP_TO_TWENTY_NINE: [&str; 30] = [
    "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
    "diez", "once", "doce", "trece", "catorce", "quince",
    "dieciséis", "diecisiete", "dieciocho", "diecinueve",
    "veinte", "veintiuno", "veintidós", "veintitrés", "veinticuatro", "veinticinco",
    "veintiséis", "veintisiete", "veintiocho", "veintinueve",
];

/// 30, 40, ... 90 (インデックスは十の位)
const TENS: [&str; 10] = [
    "", "", "", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta", "noventa",
];

/// 0〜99 の単語。30 以上は「treinta y uno」の形で組み立てる
pub fn below_hundred(n: u8) -> Cow<'static, str> {
    let n = (n % 100) as usize;
    if n < 30 {
        return Cow::Borrowed(UP_TO_TWENTY_NINE[n]);
    }
    let tens = TENS[n / 10];
    match n % 10 {
        0 => Cow::Borrowed(tens),
        unit => Cow::Owned(format!("{} y {}", tens, UP_TO_TWENTY_NINE[unit])),
    }
}

/// 1〜100 の数をスペイン語にする。範囲外は None
pub fn number_word(n: u32) -> Option<Cow<'static, str>> {
    match n {
        1..=99 => Some(below_hundred(n as u8)),
        100 => Some(Cow::Borrowed("cien")),
        _ => None,
    }
}

/// 時刻用の「時」の単語 (1 は女性形の una。la hora に合わせる)
pub fn hour_word(hour: u8) -> &'static str {
    match hour {
        1 => "una",
        h => UP_TO_TWENTY_NINE[(h % 30) as usize],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn irregular_numbers() {
        assert_eq!(number_word(1).as_deref(), Some("uno"));
        assert_eq!(number_word(15).as_deref(), Some("quince"));
        assert_eq!(number_word(16).as_deref(), Some("dieciséis"));
        assert_eq!(number_word(21).as_deref(), Some("veintiuno"));
        assert_eq!(number_word(22).as_deref(), Some("veintidós"));
        assert_eq!(number_word(23).as_deref(), Some("veintitrés"));
    }

    #[test]
    fn compound_numbers() {
        assert_eq!(number_word(30).as_deref(), Some("treinta"));
        assert_eq!(number_word(31).as_deref(), Some("treinta y uno"));
        assert_eq!(number_word(45).as_deref(), Some("cuarenta y cinco"));
        assert_eq!(number_word(88).as_deref(), Some("ochenta y ocho"));
        assert_eq!(number_word(99).as_deref(), Some("noventa y nueve"));
        assert_eq!(number_word(100).as_deref(), Some("cien"));
    }

    #[test]
    fn out_of_range_is_none() {
        assert!(number_word(0).is_none());
        assert!(number_word(101).is_none());
    }

    #[test]
    fn every_number_has_a_word_without_digits() {
        for n in 1..=100 {
            let word = number_word(n).unwrap();
            assert!(!word.is_empty());
            assert!(!word.chars().any(|c| c.is_ascii_digit()), "{n} -> {word}");
        }
    }

    #[test]
    fn hour_one_is_feminine() {
        assert_eq!(hour_word(1), "una");
        assert_eq!(hour_word(2), "dos");
        assert_eq!(hour_word(12), "doce");
    }
}
