//! Free-text outcome classification
//!
//! Result strings such as `"AI Wins!"` or `"You win!!"` are mapped onto an
//! [`Outcome`] by a fixed, ordered list of keyword rules. The first rule that
//! matches decides; text that matches nothing is a [`Outcome::Tie`].
//!
//! This is a lenient heuristic, not a parser. Malformed or ambiguous text
//! never fails, it falls through to a tie. The rule order is load-bearing:
//! `"computer wins"` matches the bare-`win` player rule before any opponent
//! rule is consulted, and `"tie"` is classified only by the fallback.

use crate::types::Outcome;

/// How a rule inspects the normalized text
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Text contains the needle
    Contains(&'static str),
    /// Text equals the needle exactly
    Equals(&'static str),
    /// Text contains every needle
    ContainsAll(&'static [&'static str]),
    /// Text contains `needle` and none of `absent`
    ContainsExcept {
        needle: &'static str,
        absent: &'static [&'static str],
    },
}

impl Matcher {
    pub fn matches(&self, text: &str) -> bool {
        match *self {
            Matcher::Contains(needle) => text.contains(needle),
            Matcher::Equals(needle) => text == needle,
            Matcher::ContainsAll(needles) => needles.iter().all(|n| text.contains(n)),
            Matcher::ContainsExcept { needle, absent } => {
                text.contains(needle) && !absent.iter().any(|n| text.contains(n))
            }
        }
    }
}

/// A tagged classification rule
#[derive(Debug, Clone, Copy)]
pub struct OutcomeRule {
    pub tag: &'static str,
    pub outcome: Outcome,
    pub matcher: Matcher,
}

/// Rules in evaluation order. Player rules come first, then opponent rules.
pub const OUTCOME_RULES: &[OutcomeRule] = &[
    OutcomeRule {
        tag: "player-keyword",
        outcome: Outcome::PlayerWin,
        matcher: Matcher::Contains("player"),
    },
    OutcomeRule {
        tag: "player-letter",
        outcome: Outcome::PlayerWin,
        matcher: Matcher::Equals("p"),
    },
    OutcomeRule {
        tag: "you-and-win",
        outcome: Outcome::PlayerWin,
        matcher: Matcher::ContainsAll(&["you", "win"]),
    },
    OutcomeRule {
        tag: "player-wins",
        outcome: Outcome::PlayerWin,
        matcher: Matcher::Contains("player wins"),
    },
    OutcomeRule {
        tag: "you-win",
        outcome: Outcome::PlayerWin,
        matcher: Matcher::Contains("you win"),
    },
    OutcomeRule {
        tag: "bare-win",
        outcome: Outcome::PlayerWin,
        matcher: Matcher::ContainsExcept {
            needle: "win",
            absent: &["ai", "lose"],
        },
    },
    OutcomeRule {
        tag: "ai-keyword",
        outcome: Outcome::OpponentWin,
        matcher: Matcher::Contains("ai"),
    },
    OutcomeRule {
        tag: "ai-letter",
        outcome: Outcome::OpponentWin,
        matcher: Matcher::Equals("a"),
    },
    OutcomeRule {
        tag: "computer",
        outcome: Outcome::OpponentWin,
        matcher: Matcher::Contains("computer"),
    },
    OutcomeRule {
        tag: "you-and-lose",
        outcome: Outcome::OpponentWin,
        matcher: Matcher::ContainsAll(&["you", "lose"]),
    },
    OutcomeRule {
        tag: "ai-wins",
        outcome: Outcome::OpponentWin,
        matcher: Matcher::Contains("ai wins"),
    },
];

/// Result of classifying a string, with the rule that fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub outcome: Outcome,
    /// Tag of the matching rule, `None` when the tie fallback applied
    pub rule: Option<&'static str>,
}

/// Trim, lower-case and keep only `a-z` and spaces.
///
/// Trimming happens before punctuation is dropped, so `"p !"` becomes `"p "`
/// and no longer equals `"p"`.
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || *c == ' ')
        .collect()
}

pub fn explain_outcome(text: &str) -> Classification {
    let clean = normalize(text);
    OUTCOME_RULES
        .iter()
        .find(|rule| rule.matcher.matches(&clean))
        .map(|rule| Classification {
            outcome: rule.outcome,
            rule: Some(rule.tag),
        })
        .unwrap_or(Classification {
            outcome: Outcome::Tie,
            rule: None,
        })
}

pub fn classify_outcome(text: &str) -> Outcome {
    explain_outcome(text).outcome
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod classify_tests;
