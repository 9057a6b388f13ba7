// ============================================
// src/quiz.rs
// ランダム出題クイズ (出題 → 回答 → 判定)
// ============================================

use std::time::Duration;

use rand::Rng;

use crate::answer::Normalize;
use crate::clock::ClockTime;
use crate::lexicon::number_word;
use crate::topics::Topic;
use crate::vocab::{ARTICLE_WORDS, DEMONSTRATIVES, GENDER_WORDS, POR_PARA, POSSESSIVES};

const CORRECT: &str = "¡Correcto! (Correct!)";

/// クイズのあるトピック
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizKind {
    Numbers,
    Gender,
    Demonstratives,
    Time,
    Articles,
    Possessives,
    PorPara,
}

/// 選択肢のグループ (冠詞クイズだけ 2 グループ)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceGroup {
    pub label: Option<&'static str>,
    pub options: Vec<String>,
    pub answer: String,
}

/// 期待する答え
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expect {
    Text { answer: String, normalize: Normalize },
    Choices(Vec<ChoiceGroup>),
}

/// ユーザーの回答
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Choice { group: usize, option: usize },
}

/// 判定結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub message: String,
}

/// 1 問分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub kind: QuizKind,
    pub prompt: String,
    pub expect: Expect,
    pub explanation: Option<&'static str>,
}

/// 正解数 / 回答数 (セッション中のみ)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub attempts: u32,
    pub correct: u32,
}

impl Score {
    pub fn record(&mut self, correct: bool) {
        self.attempts += 1;
        if correct {
            self.correct += 1;
        }
    }
}

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, table: &'a [T]) -> &'a T {
    &table[rng.random_range(0..table.len())]
}

fn options(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl QuizKind {
    pub fn for_topic(topic: Topic) -> Option<Self> {
        match topic {
            Topic::Numbers => Some(QuizKind::Numbers),
            Topic::Gender => Some(QuizKind::Gender),
            Topic::Demonstratives => Some(QuizKind::Demonstratives),
            Topic::Time => Some(QuizKind::Time),
            Topic::Articles => Some(QuizKind::Articles),
            Topic::Possessives => Some(QuizKind::Possessives),
            Topic::PorPara => Some(QuizKind::PorPara),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            QuizKind::Numbers => "Prueba de Números (Number Quiz)",
            QuizKind::Gender => "Prueba de Género (Gender Quiz)",
            QuizKind::Demonstratives => "Prueba de Demostrativos",
            QuizKind::Time => "Prueba de la Hora (Time Quiz)",
            QuizKind::Articles => "Prueba de Artículos (Articles Quiz)",
            QuizKind::Possessives => "Prueba de Posesivos (Possessives Quiz)",
            QuizKind::PorPara => "Prueba de Por vs Para",
        }
    }

    /// 問題文の上に出す指示
    pub fn instruction(self) -> &'static str {
        match self {
            QuizKind::Numbers => "Escribe el número en español: (Write the number in Spanish:)",
            QuizKind::Gender => "¿Cuál es el artículo correcto? (What is the correct article?)",
            QuizKind::Demonstratives => "Completa la oración:",
            QuizKind::Time => "Escribe la hora que se muestra: (Write the time shown:)",
            QuizKind::Articles => "Completa con los artículos correctos:",
            QuizKind::Possessives => "Elige el posesivo correcto:",
            QuizKind::PorPara => "Completa la oración:",
        }
    }

    /// 回答してから次の問題までの待ち時間
    pub fn delay(self) -> Duration {
        match self {
            QuizKind::Numbers => Duration::from_millis(2000),
            QuizKind::Time => Duration::from_millis(2500),
            QuizKind::PorPara => Duration::from_millis(3000),
            QuizKind::Gender
            | QuizKind::Demonstratives
            | QuizKind::Articles
            | QuizKind::Possessives => Duration::from_millis(1500),
        }
    }

    /// MARK:表から 1 問を一様ランダムに引く (直前と同じ問題も出る)
    pub fn draw<R: Rng + ?Sized>(self, rng: &mut R) -> Question {
        let (prompt, expect, explanation) = match self {
            QuizKind::Numbers => {
                let n: u32 = rng.random_range(1..=100);
                let answer = number_word(n).unwrap_or_default().into_owned();
                (
                    n.to_string(),
                    Expect::Text { answer, normalize: Normalize::Plain },
                    None,
                )
            }
            QuizKind::Time => {
                let time = ClockTime::random(rng);
                (
                    time.to_string(),
                    Expect::Text {
                        answer: time.phrase(),
                        normalize: Normalize::StripPeriod,
                    },
                    None,
                )
            }
            QuizKind::Gender => {
                let w = pick(rng, GENDER_WORDS);
                let group = ChoiceGroup {
                    label: None,
                    options: options(&["el", "la"]),
                    answer: w.gender.definite().to_string(),
                };
                (w.word.to_string(), Expect::Choices(vec![group]), None)
            }
            QuizKind::Demonstratives => {
                let q = pick(rng, DEMONSTRATIVES);
                let group = ChoiceGroup {
                    label: None,
                    options: options(q.options),
                    answer: q.answer.to_string(),
                };
                (q.sentence.to_string(), Expect::Choices(vec![group]), None)
            }
            QuizKind::Articles => {
                let w = pick(rng, ARTICLE_WORDS);
                // 複数形なら los/las, unos/unas を出す
                let (def, indef) = if w.plural {
                    (["los", "las"], ["unos", "unas"])
                } else {
                    (["el", "la"], ["un", "una"])
                };
                let groups = vec![
                    ChoiceGroup {
                        label: Some("Definido (\"the\")"),
                        options: options(&def),
                        answer: w.definite().to_string(),
                    },
                    ChoiceGroup {
                        label: Some("Indefinido (\"a/some\")"),
                        options: options(&indef),
                        answer: w.indefinite().to_string(),
                    },
                ];
                (w.word.to_string(), Expect::Choices(groups), None)
            }
            QuizKind::Possessives => {
                let q = pick(rng, POSSESSIVES);
                let group = ChoiceGroup {
                    label: None,
                    options: options(q.options),
                    answer: q.answer.to_string(),
                };
                (
                    format!("___ {} ({})", q.item, q.owner),
                    Expect::Choices(vec![group]),
                    None,
                )
            }
            QuizKind::PorPara => {
                let s = pick(rng, POR_PARA);
                let group = ChoiceGroup {
                    label: None,
                    options: options(&["por", "para"]),
                    answer: s.correct.as_str().to_string(),
                };
                (
                    s.sentence.to_string(),
                    Expect::Choices(vec![group]),
                    Some(s.explanation),
                )
            }
        };

        Question {
            kind: self,
            prompt,
            expect,
            explanation,
        }
    }
}

impl Question {
    /// 自由入力か
    pub fn is_text(&self) -> bool {
        matches!(self.expect, Expect::Text { .. })
    }

    pub fn groups(&self) -> &[ChoiceGroup] {
        match &self.expect {
            Expect::Choices(groups) => groups,
            Expect::Text { .. } => &[],
        }
    }

    /// 回答を判定する。問題の形に合わない回答 (範囲外の選択肢など) は None
    pub fn check(&self, answer: &Answer) -> Option<Feedback> {
        let (correct, expected) = match (&self.expect, answer) {
            (Expect::Text { answer: exp, normalize }, Answer::Text(input)) => {
                (normalize.matches(input, exp), exp.as_str())
            }
            (Expect::Choices(groups), Answer::Choice { group, option }) => {
                let g = groups.get(*group)?;
                let chosen = g.options.get(*option)?;
                (*chosen == g.answer, g.answer.as_str())
            }
            _ => return None,
        };

        Some(Feedback {
            correct,
            message: self.message(correct, expected),
        })
    }

    fn message(&self, correct: bool, expected: &str) -> String {
        let explanation = self.explanation.unwrap_or_default();
        match (self.kind, correct) {
            (QuizKind::PorPara, true) => format!("¡Correcto! ({explanation})"),
            (QuizKind::PorPara, false) => {
                format!("Incorrecto. La respuesta es \"{expected}\" ({explanation})")
            }
            (_, true) => CORRECT.to_string(),
            (QuizKind::Numbers, false) => format!(
                "Incorrecto. La respuesta es \"{expected}\". (Incorrect. The answer is...)"
            ),
            (QuizKind::Time, false) => {
                format!("Casi... La respuesta correcta es \"{expected}\".")
            }
            (QuizKind::Gender, false) => format!("Incorrecto. Es '{expected}' {}.", self.prompt),
            (QuizKind::Articles, false) => {
                format!("Incorrecto. La opción correcta era \"{expected}\".")
            }
            (QuizKind::Demonstratives | QuizKind::Possessives, false) => {
                format!("Incorrecto. La respuesta es \"{expected}\".")
            }
        }
    }
}
