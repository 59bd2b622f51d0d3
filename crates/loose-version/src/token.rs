use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of digits, runs of lowercase letters, and the period separator.
/// Anything between two matches is kept as literal text.
static COMPONENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+|[a-z]+|\.").unwrap());

/// An unbounded non-negative integer, stored as its decimal digits without
/// leading zeros.
///
/// Ordering is numeric: a longer digit string is a bigger number, and equal
/// lengths compare digit by digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    /// Returns `None` unless `digits` is a non-empty run of ASCII digits.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        Some(Self(if trimmed.is_empty() { "0" } else { trimmed }.to_string()))
    }

    /// The value, if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        self.0.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u128> for Number {
    fn from(n: u128) -> Self {
        Self(n.to_string())
    }
}

/// One component of a loose version.
///
/// The variant order is the comparison order across kinds: a number sorts
/// before any text found at the same position, so `1.1 < 1.a`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    Number(Number),
    Text(String),
}

impl Token {
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    fn from_piece(piece: &str) -> Self {
        match Number::from_digits(piece) {
            Some(n) => Self::Number(n),
            None => Self::Text(piece.to_string()),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<u128> for Token {
    fn from(n: u128) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Splits `version` into tokens, keeping the text between matches and
/// dropping empty pieces and periods.
pub(crate) fn tokenize(version: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for component in COMPONENT_REGEX.find_iter(version) {
        let gap = &version[last..component.start()];
        if !gap.is_empty() {
            tokens.push(Token::from_piece(gap));
        }
        if component.as_str() != "." {
            tokens.push(Token::from_piece(component.as_str()));
        }
        last = component.end();
    }

    let rest = &version[last..];
    if !rest.is_empty() {
        tokens.push(Token::from_piece(rest));
    }

    tokens
}
