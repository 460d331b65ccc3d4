#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # flatmask
//!
//! A library for reducing field masks to a bounded path depth.
//!
//! Given hierarchical, dot-delimited paths such as those in a protobuf
//! `FieldMask`, flatmask truncates every path to at most N leading segments
//! and removes the duplicates this creates, leaving a sorted, minimal set of
//! paths at that degree of specificity.
//!
//! ## Core Types
//!
//! - [`reduce`] and [`PathReducer`]: the reduction itself
//! - [`ReducedMask`]: its sorted, duplicate-free result
//! - [`PathSource`]: the read-only input capability
//! - [`FieldMask`]: a concrete mask type
//! - [`ReduceDegree`]: how many segments to keep
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use flatmask::{reduce, FieldMask, ReduceDegree};
//!
//! let mask: FieldMask = "1.12.512,1,2.52,2.81,2.52.3".parse().unwrap();
//! let reduced = reduce(&mask, ReduceDegree::ROOT_CHILD);
//! assert_eq!(reduced.paths(), ["1", "1.12", "2.52", "2.81"]);
//!
//! // An absent mask reduces to nothing.
//! let absent: Option<FieldMask> = None;
//! assert!(reduce(&absent, ReduceDegree::TOTAL).is_empty());
//! ```

pub mod config;
pub mod degree;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod reduce;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use degree::ReduceDegree;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter};
pub use path::{FieldMask, PathSource};
pub use reduce::{reduce, PathReducer, ReducedMask};
