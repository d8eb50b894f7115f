//! Card faces.

use serde::{Deserialize, Serialize};

/// An opaque card face. Two cards in a session share each symbol.
///
/// The engine only compares symbols for equality; what they look like is up
/// to the presentation layer (the built-in themes use emoji).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new symbol.
    pub fn new(face: impl Into<String>) -> Self {
        Self(face.into())
    }

    /// The face as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(face: &str) -> Self {
        Self::new(face)
    }
}

impl From<String> for Symbol {
    fn from(face: String) -> Self {
        Self(face)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build a symbol pool from string faces.
pub fn pool<I, S>(faces: I) -> Vec<Symbol>
where
    I: IntoIterator<Item = S>,
    S: Into<Symbol>,
{
    faces.into_iter().map(Into::into).collect()
}
