//! Field paths leading from a root value to its selector.
//!
//! A [`Path`] is an ordered list of field names. Dispatchers are usually built
//! from two paths: a *reduce* path locating a substructure, and a *subset* path
//! locating the discriminator inside it. The two are concatenated with
//! [`Path::join`] before any traversal happens.

use std::{fmt, str::FromStr};
use thiserror::Error;

/// An ordered sequence of field names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PathRepr", into = "Vec<String>"))]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Create a path from any sequence of field names.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The empty path, which addresses the root value itself.
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Field names in traversal order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Iterate over the field names as string slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Number of steps in the path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path addresses the root value.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Field name at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    /// Append a single step.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Concatenate `self ++ other` into a new path.
    pub fn join(&self, other: &Path) -> Path {
        let mut segments = Vec::with_capacity(self.len() + other.len());
        segments.extend_from_slice(&self.segments);
        segments.extend_from_slice(&other.segments);
        Path { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        f.write_str(&self.segments.join("."))
    }
}

/// Error returned when parsing a dotted path string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid path `{input}`: empty segment at position {position}")]
pub struct ParsePathError {
    /// The rejected input.
    pub input: String,
    /// Zero-based index of the empty segment.
    pub position: usize,
}

impl FromStr for Path {
    type Err = ParsePathError;

    /// Parse `a.b.kind` into three steps. The empty string is the root path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Path::root());
        }
        let mut segments = Vec::new();
        for (position, segment) in s.split('.').enumerate() {
            if segment.is_empty() {
                return Err(ParsePathError {
                    input: s.to_string(),
                    position,
                });
            }
            segments.push(segment.to_string());
        }
        Ok(Path { segments })
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl From<Vec<&str>> for Path {
    fn from(segments: Vec<&str>) -> Self {
        Self::new(segments)
    }
}

impl From<&[&str]> for Path {
    fn from(segments: &[&str]) -> Self {
        Self::new(segments.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Path {
    fn from(segments: [&str; N]) -> Self {
        Self::new(segments)
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl From<Path> for Vec<String> {
    fn from(path: Path) -> Self {
        path.segments
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Accepted serialized forms: `"shape.kind"` or `["shape", "kind"]`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum PathRepr {
    Dotted(String),
    Segments(Vec<String>),
}

#[cfg(feature = "serde")]
impl TryFrom<PathRepr> for Path {
    type Error = ParsePathError;

    fn try_from(repr: PathRepr) -> Result<Self, Self::Error> {
        match repr {
            PathRepr::Dotted(s) => s.parse(),
            PathRepr::Segments(segments) => Ok(Path::from(segments)),
        }
    }
}
