//! Validated identifiers: action names and registry namespaces.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Prefix every controller action identifier carries.
pub const CONTROLLER_PREFIX: &str = "c.";

/// Maximum allowed length for a [`Namespace`].
const NAMESPACE_MAX_LEN: usize = 64;

/// Errors from constructing an [`ActionName`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionNameError {
    /// The input was empty or contained only whitespace.
    #[error("action name cannot be empty or whitespace")]
    Empty,
    /// The input contains whitespace between non-whitespace characters.
    #[error("action name `{0}` contains whitespace")]
    Whitespace(String),
}

/// A controller action identifier, always carrying the controller prefix.
///
/// Identifiers without the prefix are normalized by prepending it, so
/// `"getRecord"` and `"c.getRecord"` name the same action.
///
/// # Examples
///
/// ```
/// use lumen_core::ActionName;
///
/// let bare: ActionName = "getRecord".parse().unwrap();
/// let prefixed: ActionName = "c.getRecord".parse().unwrap();
/// assert_eq!(bare, prefixed);
/// assert_eq!(bare.method(), "getRecord");
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActionName(String);

impl ActionName {
    /// Create a new `ActionName` with the default [`CONTROLLER_PREFIX`].
    pub fn new(raw: &str) -> Result<Self, ActionNameError> {
        Self::with_prefix(raw, CONTROLLER_PREFIX)
    }

    /// Create a new `ActionName`, prepending `prefix` when it is missing.
    pub fn with_prefix(raw: &str, prefix: &str) -> Result<Self, ActionNameError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ActionNameError::Empty);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ActionNameError::Whitespace(trimmed.to_owned()));
        }
        if trimmed.starts_with(prefix) {
            if trimmed.len() == prefix.len() {
                return Err(ActionNameError::Empty);
            }
            return Ok(Self(trimmed.to_owned()));
        }
        Ok(Self(format!("{prefix}{trimmed}")))
    }

    /// Return the full, prefixed identifier.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The method part of the identifier (everything after the first `.`).
    pub fn method(&self) -> &str {
        self.0.split_once('.').map_or(self.0.as_str(), |(_, m)| m)
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ActionName {
    type Err = ActionNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ActionName {
    type Error = ActionNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<ActionName> for String {
    fn from(name: ActionName) -> Self {
        name.0
    }
}

impl AsRef<str> for ActionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors from constructing a [`Namespace`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamespaceError {
    /// The input was empty or contained only whitespace.
    #[error("namespace cannot be empty or whitespace")]
    Empty,
    /// The key contains characters other than ASCII letters, digits and `_`,
    /// or starts with a digit.
    #[error("namespace contains invalid characters (only A-Z, a-z, 0-9 and _ allowed)")]
    InvalidCharacters,
    /// The key exceeds [`NAMESPACE_MAX_LEN`] characters.
    #[error("namespace exceeds maximum length of {NAMESPACE_MAX_LEN} characters")]
    TooLong,
}

/// A validated registry namespace, e.g. `"Geo"` or `"analytics"`.
///
/// Surrounding whitespace is trimmed; case is preserved, so `"Geo"` and
/// `"geo"` are distinct namespaces. After trimming the key must:
/// - Be non-empty.
/// - Contain only ASCII letters, digits and `_`, and not start with a digit.
/// - Be at most 64 characters long.
///
/// # Examples
///
/// ```
/// use lumen_core::Namespace;
///
/// let ns: Namespace = " Geo ".parse().unwrap();
/// assert_eq!(ns.as_str(), "Geo");
/// assert!("9lives".parse::<Namespace>().is_err());
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Namespace(String);

impl Namespace {
    /// Create a new `Namespace`, trimming and validating the input.
    pub fn new(raw: &str) -> Result<Self, NamespaceError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(NamespaceError::Empty);
        }
        let mut bytes = trimmed.bytes();
        let leading_ok = bytes
            .next()
            .is_some_and(|b| b.is_ascii_alphabetic() || b == b'_');
        if !leading_ok || !bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return Err(NamespaceError::InvalidCharacters);
        }
        if trimmed.len() > NAMESPACE_MAX_LEN {
            return Err(NamespaceError::TooLong);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Return the inner string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Namespace {
    type Err = NamespaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Namespace {
    type Error = NamespaceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Namespace {
    type Error = NamespaceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Namespace> for String {
    fn from(ns: Namespace) -> Self {
        ns.0
    }
}

impl AsRef<str> for Namespace {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Namespace {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Namespace {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
