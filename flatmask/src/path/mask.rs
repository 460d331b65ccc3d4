//! A concrete field mask.
//!
//! [`FieldMask`] mirrors the protobuf well-known type: a list of paths with
//! a comma-joined text form. It is one implementation of [`PathSource`];
//! the reducer does not depend on anything else it offers.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::segments::ancestors;
use super::source::PathSource;
use crate::error::Error;

/// Separator between paths in the text form of a mask.
pub const PATH_SEPARATOR: char = ',';

/// An ordered list of field paths.
///
/// # Examples
///
/// ```
/// use flatmask::FieldMask;
///
/// let mut mask: FieldMask = "a.b.c, a.b, d".parse().unwrap();
/// assert_eq!(mask.len(), 3);
///
/// mask.normalize();
/// assert_eq!(mask.to_string(), "a.b,d");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldMask {
    /// The paths in this mask, in insertion order.
    #[serde(default)]
    pub paths: Vec<String>,
}

impl FieldMask {
    /// Creates an empty mask.
    #[must_use]
    pub const fn new() -> Self {
        Self { paths: Vec::new() }
    }

    /// Appends a path.
    pub fn push(&mut self, path: impl Into<String>) {
        self.paths.push(path.into());
    }

    /// Number of paths, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns `true` if the mask has no paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Clears every path.
    pub fn reset(&mut self) {
        self.paths.clear();
    }

    /// Converts the mask to canonical form.
    ///
    /// Paths are sorted, duplicates removed, and any path that lies below
    /// another path of the mask is dropped, since the shorter path already
    /// selects it.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmask::FieldMask;
    ///
    /// let mut mask = FieldMask::from_iter(["b", "a.b.c", "a.b", "a.bc", "b"]);
    /// mask.normalize();
    /// assert_eq!(mask.paths, vec!["a.b", "a.bc", "b"]);
    /// ```
    pub fn normalize(&mut self) {
        let unique: BTreeSet<String> = std::mem::take(&mut self.paths).into_iter().collect();
        self.paths = unique
            .iter()
            .filter(|path| !ancestors(path).any(|ancestor| unique.contains(ancestor)))
            .cloned()
            .collect();
    }

    /// Returns the paths joined by commas, the protobuf JSON form of a mask.
    #[must_use]
    pub fn join(&self) -> String {
        self.paths.join(",")
    }
}

impl PathSource for FieldMask {
    fn paths(&self) -> &[String] {
        &self.paths
    }
}

impl<S: Into<String>> FromIterator<S> for FieldMask {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<String>> for FieldMask {
    fn from(paths: Vec<String>) -> Self {
        Self { paths }
    }
}

impl Extend<String> for FieldMask {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.paths.extend(iter);
    }
}

impl fmt::Display for FieldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

impl FromStr for FieldMask {
    type Err = Error;

    /// Parses a comma-separated list of paths.
    ///
    /// Whitespace around each path is trimmed and empty items are skipped,
    /// so the empty string parses to the empty mask.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.split(PATH_SEPARATOR)
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .collect())
    }
}
