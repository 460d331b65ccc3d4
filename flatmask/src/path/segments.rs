//! Segment-level operations on dot-delimited paths.
//!
//! Paths are treated as opaque byte strings split on [`DELIMITER`]. Nothing
//! here validates segments; empty segments from leading, trailing, or doubled
//! delimiters flow through like any other.

/// The segment delimiter.
pub const DELIMITER: char = '.';

/// Number of segments in `path`.
///
/// The empty string has depth 0.
///
/// # Examples
///
/// ```
/// use flatmask::path::segments::depth;
///
/// assert_eq!(depth(""), 0);
/// assert_eq!(depth("a"), 1);
/// assert_eq!(depth("a.b.c"), 3);
/// assert_eq!(depth("a..b"), 3);
/// ```
#[must_use]
pub fn depth(path: &str) -> usize {
    if path.is_empty() {
        0
    } else {
        path.matches(DELIMITER).count() + 1
    }
}

/// Truncate a single path so it keeps at most `degree` leading segments.
///
/// Paths already at or below the target depth are returned unchanged.
/// Degree 0 reduces every path to the empty string.
///
/// # Examples
///
/// ```
/// use flatmask::path::segments::truncate_to_degree;
///
/// assert_eq!(truncate_to_degree("a.b.c.d", 2), "a.b");
/// assert_eq!(truncate_to_degree("a.b", 2), "a.b");
/// assert_eq!(truncate_to_degree("g.awa", 1), "g");
/// assert_eq!(truncate_to_degree("a.b", 0), "");
/// ```
#[must_use]
pub fn truncate_to_degree(path: &str, degree: usize) -> &str {
    if degree == 0 {
        return "";
    }

    // With non-empty segments, a path deeper than `degree` is longer than
    // `degree` bytes.
    if !path.contains(DELIMITER) || path.len() <= degree {
        return path;
    }

    match reduced_index(path, degree) {
        Some(index) => &path[..index],
        None => path,
    }
}

/// Byte offset of the `degree`-th delimiter, scanning from the root.
///
/// Returns `None` when the path has fewer than `degree` delimiters.
fn reduced_index(path: &str, degree: usize) -> Option<usize> {
    debug_assert!(degree > 0);
    path.match_indices(DELIMITER)
        .nth(degree - 1)
        .map(|(index, _)| index)
}

/// Returns `true` if `path` lies strictly below `prefix` in the hierarchy.
///
/// The prefix must end on a segment boundary: `a.b.c` is covered by `a.b`
/// but `a.bc` is not.
///
/// # Examples
///
/// ```
/// use flatmask::path::segments::is_covered_by;
///
/// assert!(is_covered_by("a.b.c", "a.b"));
/// assert!(!is_covered_by("a.bc", "a.b"));
/// assert!(!is_covered_by("a.b", "a.b"));
/// ```
#[must_use]
pub fn is_covered_by(path: &str, prefix: &str) -> bool {
    path.len() > prefix.len()
        && path.starts_with(prefix)
        && path[prefix.len()..].starts_with(DELIMITER)
}

/// Proper ancestors of `path`, shortest first.
///
/// `a.b.c` yields `a` then `a.b`.
pub fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    path.match_indices(DELIMITER).map(move |(index, _)| &path[..index])
}
