// ============================================
// src/topics.rs
// トピック (ナビゲーションの項目)
// ============================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// サイドバーに並ぶ 15 のトピック
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Topic {
    Welcome,
    Greetings,
    Numbers,
    Questions,
    Introduce,
    Describe,
    TimeElements,
    Gender,
    Verbs,
    Demonstratives,
    Nationalities,
    Time,
    Articles,
    Possessives,
    PorPara,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown topic {0:?} (try --list-topics)")]
pub struct UnknownTopic(pub String);

impl Topic {
    /// 表示順
    pub const ALL: [Topic; 15] = [
        Topic::Welcome,
        Topic::Greetings,
        Topic::Numbers,
        Topic::Questions,
        Topic::Introduce,
        Topic::Describe,
        Topic::TimeElements,
        Topic::Gender,
        Topic::Verbs,
        Topic::Demonstratives,
        Topic::Nationalities,
        Topic::Time,
        Topic::Articles,
        Topic::Possessives,
        Topic::PorPara,
    ];

    /// 安定した識別子
    pub fn id(self) -> &'static str {
        match self {
            Topic::Welcome => "topic-welcome",
            Topic::Greetings => "topic-greetings",
            Topic::Numbers => "topic-numbers",
            Topic::Questions => "topic-questions",
            Topic::Introduce => "topic-introduce",
            Topic::Describe => "topic-describe",
            Topic::TimeElements => "topic-time-elements",
            Topic::Gender => "topic-gender",
            Topic::Verbs => "topic-verbs",
            Topic::Demonstratives => "topic-demonstratives",
            Topic::Nationalities => "topic-nationalities",
            Topic::Time => "topic-time",
            Topic::Articles => "topic-articles",
            Topic::Possessives => "topic-possessives",
            Topic::PorPara => "topic-por-para",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Topic::Welcome => "Bienvenido",
            Topic::Greetings => "Saludos",
            Topic::Numbers => "Números",
            Topic::Questions => "Preguntas",
            Topic::Introduce => "Presentarse",
            Topic::Describe => "Describir",
            Topic::TimeElements => "Días y Meses",
            Topic::Gender => "Género",
            Topic::Verbs => "Verbos",
            Topic::Demonstratives => "Demostrativos",
            Topic::Nationalities => "Nacionalidades",
            Topic::Time => "La Hora",
            Topic::Articles => "Artículos",
            Topic::Possessives => "Posesivos",
            Topic::PorPara => "Por y Para",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Topic::Welcome => "Welcome",
            Topic::Greetings => "Greetings",
            Topic::Numbers => "Numbers",
            Topic::Questions => "Questions",
            Topic::Introduce => "Introduce Yourself",
            Topic::Describe => "Describe",
            Topic::TimeElements => "Days & Months",
            Topic::Gender => "Gender",
            Topic::Verbs => "Verbs",
            Topic::Demonstratives => "Demonstratives",
            Topic::Nationalities => "Nationalities",
            Topic::Time => "The Time",
            Topic::Articles => "Articles",
            Topic::Possessives => "Possessives",
            Topic::PorPara => "Por & Para",
        }
    }

    /// 並び順のインデックス
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    /// 次のトピック (末尾からは先頭へ)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// 前のトピック (先頭からは末尾へ)
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Topic {
    type Err = UnknownTopic;

    /// "topic-time" でも "time" でも受け付ける
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let key = key.strip_prefix("topic-").unwrap_or(&key);
        Self::ALL
            .into_iter()
            .find(|t| &t.id()["topic-".len()..] == key)
            .ok_or_else(|| UnknownTopic(s.to_string()))
    }
}

impl TryFrom<String> for Topic {
    type Error = UnknownTopic;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.id().to_string()
    }
}
