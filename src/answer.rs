// ============================================
// src/answer.rs
// 自由入力の答え合わせ
// ============================================

/// 入力の正規化ルール
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalize {
    /// 前後の空白を除き、小文字にする
    Plain,
    /// Plain に加えて末尾のピリオドを 1 つだけ取り除く (時刻クイズ)
    StripPeriod,
}

impl Normalize {
    pub fn apply(self, input: &str) -> String {
        let lowered = input.trim().to_lowercase();
        match self {
            Normalize::Plain => lowered,
            Normalize::StripPeriod => match lowered.strip_suffix('.') {
                Some(rest) => rest.to_string(),
                None => lowered,
            },
        }
    }

    /// 正規化した入力と期待値が完全一致するか (アクセントの違いは許さない)
    pub fn matches(self, input: &str, expected: &str) -> bool {
        self.apply(input) == expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::spanish_time;

    #[test]
    fn accepted_variants_of_a_phrase() {
        for (h, m) in [(1, 15), (3, 0), (10, 45), (2, 40), (12, 7)] {
            let p = spanish_time(h, m);
            let n = Normalize::StripPeriod;
            assert!(n.matches(&p, &p));
            assert!(n.matches(&p.to_uppercase(), &p));
            assert!(n.matches(&format!("{p}   "), &p));
            assert!(n.matches(&format!("  {p}.  "), &p));
            assert!(n.matches(&format!("{p}."), &p));
        }
    }

    #[test]
    fn internal_changes_fail() {
        let p = spanish_time(2, 40);
        let n = Normalize::StripPeriod;
        for (i, _) in p.char_indices() {
            let mut altered = p.clone();
            altered.replace_range(i..i + 1, "#");
            assert!(!n.matches(&altered, &p), "{altered}");
        }
    }

    #[test]
    fn only_one_trailing_period_is_stripped() {
        assert!(!Normalize::StripPeriod.matches("es la una en punto..", "es la una en punto"));
    }

    #[test]
    fn accents_are_significant() {
        assert!(!Normalize::Plain.matches("dieciseis", "dieciséis"));
        assert!(Normalize::Plain.matches(" Dieciséis ", "dieciséis"));
    }

    #[test]
    fn plain_keeps_periods() {
        assert!(!Normalize::Plain.matches("uno.", "uno"));
    }
}
