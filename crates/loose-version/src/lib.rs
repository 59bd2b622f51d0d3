//! Version numbering for anarchists and software realists.
//!
//! A [`LooseVersion`] accepts any string and splits it into runs of digits,
//! runs of lowercase letters, and whatever text sits between them. Numbers
//! compare numerically, text compares lexically, and a number sorts before
//! text found at the same position. Two versions compare as token sequences,
//! so a version that is a prefix of another is the smaller one (`1.5 < 1.5.0`).
//!
//! ```
//! use loose_version::LooseVersion;
//!
//! let version = LooseVersion::new("1.5.1b2");
//! assert!(version > LooseVersion::new("1.5.1"));
//! assert!(version < "1.5.2");
//! assert_eq!(version.to_string(), "1.5.1b2");
//! ```

use std::{cmp::Ordering, convert::Infallible, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};

mod error;
mod token;

pub use error::VersionError;
pub use token::{Number, Token};

/// A version string and the tokens it was split into.
///
/// A version built from an empty string (or with [`LooseVersion::default`])
/// has no tokens and every comparison involving it fails with
/// [`VersionError::InvalidComparison`]. The std comparison traits are only
/// partial for that reason: `==` is false and `partial_cmp` is `None`.
#[derive(Clone, Default, DeserializeFromStr, SerializeDisplay)]
pub struct LooseVersion {
    vstring: Option<String>,
    tokens: Option<Vec<Token>>,
}

/// The right-hand side of [`LooseVersion::compare`]: either a version or a
/// raw string that gets parsed first.
#[derive(Debug, Clone, Copy)]
pub enum Comparand<'a> {
    Version(&'a LooseVersion),
    Raw(&'a str),
}

impl<'a> From<&'a LooseVersion> for Comparand<'a> {
    fn from(version: &'a LooseVersion) -> Self {
        Self::Version(version)
    }
}

impl<'a> From<&'a str> for Comparand<'a> {
    fn from(raw: &'a str) -> Self {
        Self::Raw(raw)
    }
}

impl<'a> From<&'a String> for Comparand<'a> {
    fn from(raw: &'a String) -> Self {
        Self::Raw(raw)
    }
}

impl LooseVersion {
    pub fn new(vstring: impl Into<String>) -> Self {
        let vstring = vstring.into();
        if vstring.is_empty() {
            return Self {
                vstring: Some(vstring),
                tokens: None,
            };
        }

        let tokens = token::tokenize(&vstring);
        tracing::trace!(version = %vstring, tokens = tokens.len(), "Tokenized version");
        Self {
            vstring: Some(vstring),
            tokens: Some(tokens),
        }
    }

    /// The original string, exactly as given.
    pub fn as_str(&self) -> Option<&str> {
        self.vstring.as_deref()
    }

    pub fn tokens(&self) -> Option<&[Token]> {
        self.tokens.as_deref()
    }

    /// Whether this version has tokens and can be compared.
    pub fn is_parsed(&self) -> bool {
        self.tokens.is_some()
    }

    /// Three-way comparison against another version or a raw version string.
    pub fn compare<'a>(&self, other: impl Into<Comparand<'a>>) -> Result<Ordering, VersionError> {
        let parsed;
        let other = match other.into() {
            Comparand::Version(version) => version,
            Comparand::Raw(raw) => {
                parsed = Self::new(raw);
                &parsed
            }
        };

        match (&self.tokens, &other.tokens) {
            (Some(ours), Some(theirs)) => Ok(ours.cmp(theirs)),
            _ => Err(self.invalid_comparison(other)),
        }
    }

    pub fn is_eq<'a>(&self, other: impl Into<Comparand<'a>>) -> Result<bool, VersionError> {
        self.compare(other).map(Ordering::is_eq)
    }

    pub fn is_lt<'a>(&self, other: impl Into<Comparand<'a>>) -> Result<bool, VersionError> {
        self.compare(other).map(Ordering::is_lt)
    }

    pub fn is_le<'a>(&self, other: impl Into<Comparand<'a>>) -> Result<bool, VersionError> {
        self.compare(other).map(Ordering::is_le)
    }

    pub fn is_gt<'a>(&self, other: impl Into<Comparand<'a>>) -> Result<bool, VersionError> {
        self.compare(other).map(Ordering::is_gt)
    }

    pub fn is_ge<'a>(&self, other: impl Into<Comparand<'a>>) -> Result<bool, VersionError> {
        self.compare(other).map(Ordering::is_ge)
    }

    /// Returns the greatest of `versions`, or `None` if there are none.
    /// Fails if any of them has no tokens.
    pub fn max_of<'a, I>(versions: I) -> Result<Option<&'a LooseVersion>, VersionError>
    where
        I: IntoIterator<Item = &'a LooseVersion>,
    {
        let mut max: Option<&LooseVersion> = None;
        for version in versions {
            if !version.is_parsed() {
                return Err(version.invalid_comparison(max.unwrap_or(version)));
            }
            max = match max {
                Some(current) if current.compare(version)?.is_ge() => Some(current),
                _ => Some(version),
            };
        }
        Ok(max)
    }

    /// Sorts `versions` in ascending order. The slice is left untouched if
    /// any of them has no tokens.
    pub fn sort(versions: &mut [LooseVersion]) -> Result<(), VersionError> {
        if let Some(unparsed) = versions.iter().find(|v| !v.is_parsed()) {
            return Err(unparsed.invalid_comparison(unparsed));
        }
        // All token lists are `Some`, so this is the token sequence order.
        versions.sort_by(|a, b| a.tokens.cmp(&b.tokens));
        Ok(())
    }

    fn invalid_comparison(&self, other: &Self) -> VersionError {
        tracing::debug!(
            left = ?self.vstring,
            right = ?other.vstring,
            "Refusing to compare a version without components"
        );
        VersionError::InvalidComparison {
            left: self.vstring.clone(),
            right: other.vstring.clone(),
        }
    }
}

impl std::fmt::Display for LooseVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.vstring.as_deref().unwrap_or_default())
    }
}

impl std::fmt::Debug for LooseVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.vstring {
            Some(vstring) => f.debug_tuple("LooseVersion").field(vstring).finish(),
            None => f.write_str("LooseVersion(<none>)"),
        }
    }
}

impl FromStr for LooseVersion {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for LooseVersion {
    fn from(vstring: &str) -> Self {
        Self::new(vstring)
    }
}

impl From<String> for LooseVersion {
    fn from(vstring: String) -> Self {
        Self::new(vstring)
    }
}

impl From<Option<String>> for LooseVersion {
    fn from(vstring: Option<String>) -> Self {
        vstring.map(Self::new).unwrap_or_default()
    }
}

impl PartialEq for LooseVersion {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other).is_ok_and(Ordering::is_eq)
    }
}

impl PartialOrd for LooseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl PartialEq<str> for LooseVersion {
    fn eq(&self, other: &str) -> bool {
        self.compare(other).is_ok_and(Ordering::is_eq)
    }
}

impl PartialOrd<str> for LooseVersion {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl PartialEq<&str> for LooseVersion {
    fn eq(&self, other: &&str) -> bool {
        self.compare(*other).is_ok_and(Ordering::is_eq)
    }
}

impl PartialOrd<&str> for LooseVersion {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        self.compare(*other).ok()
    }
}

impl PartialEq<String> for LooseVersion {
    fn eq(&self, other: &String) -> bool {
        self.compare(other).is_ok_and(Ordering::is_eq)
    }
}

impl PartialOrd<String> for LooseVersion {
    fn partial_cmp(&self, other: &String) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl PartialEq<LooseVersion> for &str {
    fn eq(&self, other: &LooseVersion) -> bool {
        other == self
    }
}
