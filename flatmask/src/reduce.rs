//! Mask reduction.
//!
//! Reduction truncates every path of a mask to at most a given number of
//! leading segments, then sorts and deduplicates what is left. The result is
//! the minimal set of paths that names the same fields at that degree of
//! specificity.
//!
//! The caller's paths are never touched: the reducer copies them into its own
//! buffer before truncating in place.
//!
//! # Examples
//!
//! ```
//! use flatmask::{reduce, FieldMask, ReduceDegree};
//!
//! let mask = FieldMask::from_iter(["a.b.c", "a.b.c.d", "g.awa"]);
//!
//! let reduced = reduce(&mask, ReduceDegree::TOTAL);
//! assert_eq!(reduced.paths(), ["a", "g"]);
//!
//! let reduced = reduce(&mask, ReduceDegree::ROOT_CHILD);
//! assert_eq!(reduced.paths(), ["a.b", "g.awa"]);
//!
//! // The source is left as it was.
//! assert_eq!(mask.paths, vec!["a.b.c", "a.b.c.d", "g.awa"]);
//! ```

use std::fmt;

use serde::Serialize;

use crate::degree::ReduceDegree;
use crate::path::segments::truncate_to_degree;
use crate::path::PathSource;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

/// The outcome of a reduction: sorted, duplicate-free paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ReducedMask {
    paths: Vec<String>,
}

impl ReducedMask {
    /// Returns the reduced paths in byte-wise sorted order.
    #[must_use]
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Consumes the mask and returns its paths.
    #[must_use]
    pub fn into_paths(self) -> Vec<String> {
        self.paths
    }

    /// Number of distinct reduced paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns `true` if nothing survived reduction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterates over the reduced paths.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.paths.iter()
    }
}

impl PathSource for ReducedMask {
    fn paths(&self) -> &[String] {
        &self.paths
    }
}

impl fmt::Display for ReducedMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.paths.join(","))
    }
}

impl IntoIterator for ReducedMask {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReducedMask {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Reduces masks to a fixed degree.
///
/// A reducer holds nothing but its degree, so it is cheap to copy and safe to
/// share between threads.
///
/// # Examples
///
/// ```
/// use flatmask::{PathReducer, ReduceDegree};
///
/// let reducer = PathReducer::new(ReduceDegree::ROOT_CHILD);
/// let paths: Vec<String> = ["1.12.512", "1", "2.52", "2.81", "2.52.3"]
///     .into_iter()
///     .map(String::from)
///     .collect();
///
/// assert_eq!(reducer.reduce(&paths).paths(), ["1", "1.12", "2.52", "2.81"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathReducer {
    degree: ReduceDegree,
}

impl PathReducer {
    /// Creates a reducer for the given degree.
    #[must_use]
    pub const fn new(degree: ReduceDegree) -> Self {
        Self { degree }
    }

    /// Returns the degree this reducer truncates to.
    #[must_use]
    pub const fn degree(&self) -> ReduceDegree {
        self.degree
    }

    /// Reduces the paths of `source`.
    ///
    /// An absent or empty source yields an empty result. Degree 0 reduces
    /// every path to the empty marker, which is not reported, so the result
    /// is empty as well.
    #[must_use]
    pub fn reduce<S: PathSource + ?Sized>(&self, source: &S) -> ReducedMask {
        let degree = self.degree.value();

        if degree == 0 {
            log::debug!(
                "degree 0 collapses all {} path(s) away",
                source.paths().len()
            );
            return ReducedMask::default();
        }

        let mut paths = source.paths().to_vec();
        let mut truncated = 0usize;
        for path in &mut paths {
            let keep = truncate_to_degree(path, degree).len();
            if keep < path.len() {
                path.truncate(keep);
                truncated += 1;
            }
        }

        let before = paths.len();
        paths.sort_unstable();
        paths.dedup();

        log::debug!(
            "reduced {before} path(s) to {} at degree {degree} ({truncated} truncated)",
            paths.len()
        );

        ReducedMask { paths }
    }
}

/// Reduces the paths of `source` to at most `degree` leading segments.
///
/// Shorthand for [`PathReducer::new(degree).reduce(source)`](PathReducer::reduce).
#[must_use]
pub fn reduce<S: PathSource + ?Sized>(source: &S, degree: ReduceDegree) -> ReducedMask {
    PathReducer::new(degree).reduce(source)
}
