// ============================================
// src/clock.rs
// 時刻 → スペイン語の言い方 (¿Qué hora es?)
// ============================================

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

use crate::lexicon::{below_hundred, hour_word};

/// 12時間表記の時刻 (hour: 1〜12, minute: 0〜59)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseTimeError {
    #[error("expected H:MM, got {0:?}")]
    Format(String),
    #[error("hour {0} is out of range (0-23)")]
    Hour(u32),
    #[error("minute {0} is out of range (0-59)")]
    Minute(u32),
}

impl ClockTime {
    /// 時を 12 時間表記に正規化する (0 → 12, 13 → 1)
    pub fn new(hour: u8, minute: u8) -> Self {
        debug_assert!(minute < 60, "minute out of range: {minute}");
        Self {
            hour: display_hour(hour),
            minute,
        }
    }

    /// クイズ用に一様ランダムな時刻を引く
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random_range(1..=12), rng.random_range(0..60))
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// スペイン語の言い方 (小文字)
    pub fn phrase(&self) -> String {
        spanish_time(self.hour, self.minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ParseTimeError;

    /// "2:40" や "14:05" を受け付ける
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| ParseTimeError::Format(s.to_string()))?;
        let number = |part: &str| -> Result<u32, ParseTimeError> {
            // u32::parse は先頭の + を許すので数字だけか確認する
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseTimeError::Format(s.to_string()));
            }
            part.parse().map_err(|_| ParseTimeError::Format(s.to_string()))
        };
        let hour = number(h)?;
        let minute = number(m)?;
        if hour > 23 {
            return Err(ParseTimeError::Hour(hour));
        }
        if minute > 59 {
            return Err(ParseTimeError::Minute(minute));
        }
        Ok(Self::new(hour as u8, minute as u8))
    }
}

fn display_hour(hour: u8) -> u8 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// 「es la una」/「son las dos」
fn prefix(hour: u8) -> String {
    match hour {
        1 => "es la una".to_string(),
        h => format!("son las {}", hour_word(h)),
    }
}

/// MARK:時刻をスペイン語にする
///
/// - 0分: en punto
/// - 15分: y cuarto / 30分: y media
/// - 1〜29分: y + 分
/// - 31〜59分: 次の時 + menos + 残り分 (45分は menos cuarto)
pub fn spanish_time(hour: u8, minute: u8) -> String {
    let hour = display_hour(hour);

    match minute {
        0 => format!("{} en punto", prefix(hour)),
        15 => format!("{} y cuarto", prefix(hour)),
        30 => format!("{} y media", prefix(hour)),
        1..=29 => format!("{} y {}", prefix(hour), below_hundred(minute)),
        _ => {
            // 12 の次は 1 (es la una に戻る)
            let next = hour % 12 + 1;
            match 60 - minute.min(59) {
                15 => format!("{} menos cuarto", prefix(next)),
                left => format!("{} menos {}", prefix(next), below_hundred(left)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scenarios() {
        assert_eq!(spanish_time(3, 0), "son las tres en punto");
        assert_eq!(spanish_time(1, 15), "es la una y cuarto");
        assert_eq!(spanish_time(10, 45), "son las once menos cuarto");
        assert_eq!(spanish_time(2, 40), "son las tres menos veinte");
        assert_eq!(spanish_time(5, 30), "son las cinco y media");
        assert_eq!(spanish_time(2, 10), "son las dos y diez");
    }

    #[test]
    fn on_the_hour() {
        for hour in 1..=12 {
            let phrase = spanish_time(hour, 0);
            assert!(phrase.ends_with("en punto"));
            assert_eq!(phrase.starts_with("es la"), hour == 1, "{phrase}");
        }
    }

    #[test]
    fn half_past_is_never_treinta() {
        for hour in 1..=12 {
            let phrase = spanish_time(hour, 30);
            assert!(phrase.ends_with("y media"));
            assert!(!phrase.contains("treinta"));
        }
    }

    #[test]
    fn quarter_to_names_the_next_hour() {
        for hour in 1..=12u8 {
            let phrase = spanish_time(hour, 45);
            let next = hour % 12 + 1;
            assert!(phrase.ends_with("menos cuarto"));
            assert!(phrase.contains(hour_word(next)), "{phrase}");
        }
    }

    #[test]
    fn twelve_wraps_to_singular_one() {
        assert_eq!(spanish_time(12, 45), "es la una menos cuarto");
        assert_eq!(spanish_time(12, 50), "es la una menos diez");
        assert_eq!(spanish_time(12, 59), "es la una menos uno");
    }

    #[test]
    fn hour_zero_is_twelve() {
        assert_eq!(spanish_time(0, 0), "son las doce en punto");
        assert_eq!(ClockTime::new(0, 5).to_string(), "12:05");
    }

    #[test]
    fn every_minute_is_spelled_out() {
        for hour in 1..=12 {
            for minute in 0..60 {
                let phrase = spanish_time(hour, minute);
                assert!(
                    !phrase.chars().any(|c| c.is_ascii_digit()),
                    "{hour}:{minute} -> {phrase}"
                );
                assert_eq!(phrase, phrase.to_lowercase());
            }
        }
    }

    #[test]
    fn deterministic() {
        assert_eq!(spanish_time(7, 23), spanish_time(7, 23));
        assert_eq!(spanish_time(7, 23), "son las siete y veintitrés");
    }

    #[test]
    fn parse_and_display() {
        let t: ClockTime = "2:40".parse().unwrap();
        assert_eq!((t.hour(), t.minute()), (2, 40));
        assert_eq!(t.to_string(), "02:40");
        let t: ClockTime = "13:05".parse().unwrap();
        assert_eq!(t.phrase(), "es la una y cinco");
        assert_eq!("24:00".parse::<ClockTime>(), Err(ParseTimeError::Hour(24)));
        assert_eq!("3:60".parse::<ClockTime>(), Err(ParseTimeError::Minute(60)));
        assert!(matches!("tres".parse::<ClockTime>(), Err(ParseTimeError::Format(_))));
    }

    #[test]
    fn signs_are_rejected() {
        for input in ["+2:+40", "+2:40", "2:+40", "-1:30", ":30", "2:"] {
            assert!(
                matches!(input.parse::<ClockTime>(), Err(ParseTimeError::Format(_))),
                "{input}"
            );
        }
    }

    #[test]
    fn random_times_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let t = ClockTime::random(&mut rng);
            assert!((1..=12).contains(&t.hour()));
            assert!(t.minute() < 60);
        }
    }
}
