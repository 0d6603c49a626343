//! Natural ordering for file names: `f2.bmp` sorts before `f10.bmp`.
//!
//! A name is split into alternating runs of ASCII digits and everything else.
//! Digit runs compare by numeric value, text runs compare case-insensitively.
//! At a position where one key has a number and the other text, the number
//! sorts first, and a key that is a prefix of another sorts first.

use alloc::{string::String, vec::Vec};
use core::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Decimal digits with leading zeros stripped, so `"007"` and `"7"` are equal.
    Number(String),
    /// Lowercased text run.
    Text(String),
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // No leading zeros, so a longer run is always the larger number.
            (Token::Number(a), Token::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Token::Number(_), Token::Text(_)) => Ordering::Less,
            (Token::Text(_), Token::Number(_)) => Ordering::Greater,
            (Token::Text(a), Token::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key for one file path. Only the base name takes part in the ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    tokens: Vec<Token>,
    name: String,
}

impl SortKey {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tokens
            .cmp(&other.tokens)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

pub fn natural_sort_key(path: &str) -> SortKey {
    let name = basename(path);
    let mut tokens = Vec::new();
    let mut rest = name;
    while let Some(first) = rest.chars().next() {
        let is_digit = first.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != is_digit)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        if is_digit {
            let digits = run.trim_start_matches('0');
            tokens.push(Token::Number(String::from(digits)));
        } else {
            tokens.push(Token::Text(run.to_lowercase()));
        }
        rest = tail;
    }
    SortKey {
        tokens,
        name: String::from(name),
    }
}
