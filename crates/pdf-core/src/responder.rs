// pdf-core/src/responder.rs
//! 模拟 AI 回复
//!
//! Nothing here reads the document. [`Responder`] is the seam where a real
//! retrieval or LLM backend would plug in.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

/// Starter questions offered before the first message of a chat.
pub const SUGGESTIONS: [&str; 4] = [
    "What's the main topic of this document?",
    "Can you summarize page 1?",
    "Explain the key points in this PDF",
    "What are the conclusions in this document?",
];

pub const CANNED_RESPONSES: [&str; 5] = [
    "That's an interesting point in the document. Let me elaborate...",
    "Based on the PDF content, I can tell you that...",
    "The document suggests several key points related to your question...",
    "According to the PDF, the main concept here is...",
    "I found related information on page 3 that addresses your question...",
];

const ECHO_PREFIX: &str = " This is a simulated response based on your query: ";

pub trait Responder: Send + Sync {
    fn respond(&self, query: &str) -> String;
}

/// 随机挑选一条固定回复，并附上用户的问题
pub struct CannedResponder {
    rng: Mutex<StdRng>,
}

impl CannedResponder {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic choice sequence, for tests and reproducible demos.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder for CannedResponder {
    fn respond(&self, query: &str) -> String {
        // 锁中毒时 RNG 状态仍然可用
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let template = CANNED_RESPONSES
            .choose(&mut *rng)
            .copied()
            .unwrap_or(CANNED_RESPONSES[0]);
        format!("{template}{ECHO_PREFIX}{query}")
    }
}

/// 按关键词匹配预设答案
///
/// Each key phrase is scored by how many of its words occur (as substrings)
/// in the normalized question. The highest score wins, earlier entries win
/// ties, and a score of zero everywhere yields the fallback.
pub struct KeywordResponder {
    entries: Vec<(String, String)>,
    fallback: String,
}

pub const KEYWORD_FALLBACK: &str = "I don't have specific information about that in this document. \
Would you like me to help you with something else?";

impl KeywordResponder {
    pub fn new(entries: Vec<(String, String)>, fallback: impl Into<String>) -> Self {
        Self {
            entries,
            fallback: fallback.into(),
        }
    }

    fn normalize(question: &str) -> String {
        question
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
            .collect()
    }

    fn score(key: &str, question: &str) -> usize {
        key.split_whitespace()
            .filter(|word| question.contains(word))
            .count()
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        let entries = [
            (
                "summarize this document",
                "This document gives an overview of its subject, walks through the main \
                 arguments section by section and closes with a set of recommendations.",
            ),
            (
                "what are the key points",
                "The key points are the problem statement in the introduction, the approach \
                 described in the middle sections and the results discussed at the end.",
            ),
            (
                "what are the conclusions",
                "The conclusions restate the main findings and suggest directions for \
                 further work.",
            ),
        ];

        Self::new(
            entries
                .into_iter()
                .map(|(key, answer)| (key.to_string(), answer.to_string()))
                .collect(),
            KEYWORD_FALLBACK,
        )
    }
}

impl Responder for KeywordResponder {
    fn respond(&self, query: &str) -> String {
        let question = Self::normalize(query);

        let mut best: Option<&str> = None;
        let mut best_score = 0;
        for (key, answer) in &self.entries {
            let score = Self::score(key, &question);
            if score > best_score {
                best_score = score;
                best = Some(answer.as_str());
            }
        }

        best.unwrap_or(&self.fallback).to_string()
    }
}

/// 回复器类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponderKind {
    #[default]
    Canned,
    Keyword,
}

impl ResponderKind {
    pub fn build(self) -> Box<dyn Responder> {
        match self {
            ResponderKind::Canned => Box::new(CannedResponder::new()),
            ResponderKind::Keyword => Box::new(KeywordResponder::default()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown responder '{0}', expected 'canned' or 'keyword'")]
pub struct UnknownResponder(String);

impl FromStr for ResponderKind {
    type Err = UnknownResponder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canned" => Ok(ResponderKind::Canned),
            "keyword" => Ok(ResponderKind::Keyword),
            _ => Err(UnknownResponder(s.to_string())),
        }
    }
}

impl fmt::Display for ResponderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponderKind::Canned => write!(f, "canned"),
            ResponderKind::Keyword => write!(f, "keyword"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_canned_response_echoes_query() {
        let responder = CannedResponder::with_seed(7);
        for _ in 0..20 {
            let answer = responder.respond("what is this?");
            assert!(answer.ends_with(" This is a simulated response based on your query: what is this?"));
            assert!(CANNED_RESPONSES.iter().any(|t| answer.starts_with(t)));
        }
    }

    #[test]
    fn test_canned_seed_is_deterministic() {
        let a = CannedResponder::with_seed(42);
        let b = CannedResponder::with_seed(42);
        let left: Vec<String> = (0..10).map(|_| a.respond("q")).collect();
        let right: Vec<String> = (0..10).map(|_| b.respond("q")).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_keyword_best_match() {
        let responder = KeywordResponder::default();
        let answer = responder.respond("Could you SUMMARIZE this document, please?");
        assert!(answer.starts_with("This document gives an overview"));
    }

    #[test]
    fn test_keyword_first_entry_wins_tie() {
        let responder = KeywordResponder::new(
            vec![
                ("alpha beta".to_string(), "first".to_string()),
                ("alpha gamma".to_string(), "second".to_string()),
            ],
            "none",
        );
        assert_eq!(responder.respond("alpha!"), "first");
        assert_eq!(responder.respond("gamma alpha"), "second");
        assert_eq!(responder.respond("delta"), "none");
    }

    #[test]
    fn test_keyword_fallback() {
        let responder = KeywordResponder::default();
        assert_eq!(responder.respond("xyz"), KEYWORD_FALLBACK);
    }

    #[rstest]
    #[case("canned", ResponderKind::Canned)]
    #[case("Keyword", ResponderKind::Keyword)]
    #[case(" keyword ", ResponderKind::Keyword)]
    fn test_parse_kind(#[case] input: &str, #[case] expected: ResponderKind) {
        assert_eq!(input.parse::<ResponderKind>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_kind() {
        assert!("llm".parse::<ResponderKind>().is_err());
    }

    #[test]
    fn test_built_responders_answer() {
        for kind in [ResponderKind::Canned, ResponderKind::Keyword] {
            assert!(!kind.build().respond("hello").is_empty());
        }
    }
}
