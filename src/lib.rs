//! # Set algebra and slice helpers
//!
//! A [`Set`] is an unordered collection of unique elements, supporting union, intersection,
//! difference and complement. The [`slice`] module wraps the same algebra for plain slices, along
//! with a handful of order-preserving helpers that need no hashing at all.
//!
//! ```
//! use setkit::prelude::*;
//!
//! let a = Set::from([1, 2, 3, 4]);
//! let b = Set::from([2, 4, 5]);
//!
//! assert_eq!(a.difference(&b), Set::from([1, 3]));
//! assert_eq!(b.difference(&a), Set::from([5]));
//! assert_eq!(a.complement(&b), Set::from([5]));
//! ```

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod prelude;
pub mod set;
pub mod slice;


/// Compiles the usage example in `README.md`.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
