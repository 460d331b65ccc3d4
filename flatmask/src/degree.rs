//! Reduction degree type.
//!
//! A degree is the number of leading segments a path keeps after reduction.
//! For a path `{a_1, a_2, ..., a_n}` and degree 3, only `{a_1, a_2, a_3}`
//! survive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Error;

/// How many leading segments of each path to retain.
///
/// Degree `0` is valid and reduces every path away.
///
/// # Examples
///
/// ```
/// use flatmask::ReduceDegree;
///
/// assert_eq!(ReduceDegree::TOTAL.value(), 1);
/// assert_eq!(ReduceDegree::ROOT_CHILD.value(), 2);
///
/// let degree: ReduceDegree = "root-child".parse().unwrap();
/// assert_eq!(degree, ReduceDegree::ROOT_CHILD);
///
/// let degree: ReduceDegree = "5".parse().unwrap();
/// assert_eq!(degree.value(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ReduceDegree(usize);

impl ReduceDegree {
    /// Collapses every path away.
    pub const ZERO: Self = Self(0);

    /// Only the root segment remains.
    pub const TOTAL: Self = Self(1);

    /// The root segment and its child remain.
    pub const ROOT_CHILD: Self = Self(2);

    /// Creates a degree from a raw segment count.
    #[must_use]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Returns the number of segments this degree keeps.
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Returns `true` for the degenerate degree that collapses everything.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<usize> for ReduceDegree {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<ReduceDegree> for usize {
    fn from(degree: ReduceDegree) -> Self {
        degree.0
    }
}

impl fmt::Display for ReduceDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReduceDegree {
    type Err = Error;

    /// Parses a degree from a number or one of the names `total` and
    /// `root-child` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "total" => return Ok(Self::TOTAL),
            "root-child" | "root_child" => return Ok(Self::ROOT_CHILD),
            _ => {}
        }

        trimmed
            .parse::<usize>()
            .map(Self)
            .map_err(|_| Error::InvalidDegree {
                value: s.to_string(),
                reason: "expected a non-negative integer, 'total', or 'root-child'".to_string(),
            })
    }
}

impl<'de> Deserialize<'de> for ReduceDegree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error as _;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Helper {
            Number(usize),
            Name(String),
        }

        match Helper::deserialize(deserializer)? {
            Helper::Number(n) => Ok(Self(n)),
            Helper::Name(name) => name.parse().map_err(D::Error::custom),
        }
    }
}
