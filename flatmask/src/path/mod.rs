//! Dot-delimited field paths and the sources that hold them.
//!
//! # Key Concepts
//!
//! ## Paths and segments
//!
//! A path such as `user.address.city` is a sequence of segments joined by
//! `.`. Its depth is the number of segments. Segments are opaque: nothing in
//! this crate checks that they are valid identifiers.
//!
//! ## Path sources
//!
//! The reducer reads its input through [`PathSource`], a one-method trait
//! that lists paths. Vectors, slices, options, and [`FieldMask`] implement
//! it; an absent source (`None`) lists nothing.
//!
//! # Examples
//!
//! ```
//! use flatmask::path::segments::{depth, truncate_to_degree};
//!
//! assert_eq!(depth("user.address.city"), 3);
//! assert_eq!(truncate_to_degree("user.address.city", 2), "user.address");
//! ```

mod mask;
pub mod segments;
mod source;

pub use mask::{FieldMask, PATH_SEPARATOR};
pub use segments::DELIMITER;
pub use source::PathSource;
