//! # callables
//!
//! Composable callable abstractions for Rust: functions, consumers,
//! predicates and operators of any arity, and the algebra shared by all of
//! them.
//!
//! ## Overview
//!
//! - **Callables**: a uniform invocation contract over argument tuples,
//!   implemented by every closure of arity 0 through 6, with `and_then` /
//!   `compose` chaining and the `compose!` / `pipe!` macros
//! - **Boxing**: conversion between primitive and boxed argument and result
//!   slots
//! - **Failure**: fallible callables made total through a recovery handler
//! - **Predicates**: a Boolean algebra derived from `not`, `and` and `or`
//! - **Erased**: holders with a runtime arity, invoked over argument slices
//!
//! ## Feature Flags
//!
//! - `boxing`: Primitive/boxed conversion (default)
//! - `failure`: Recovery wrappers for fallible callables (default)
//! - `predicate`: Predicate algebra (default)
//! - `erased`: Arity-erased holders (default)
//! - `arc`: Thread-safe erased holders backed by `Arc`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use callables::prelude::*;
//!
//! let sum = |left: i32, right: i32| {
//!     left.checked_add(right).filter(|total| *total >= 0).ok_or("negative sum")
//! };
//! let safe_sum = sum.handle(|_arguments: (i32, i32), _fault: &str| 0);
//!
//! assert_eq!(safe_sum.invoke((-3, -4)), 0);
//! assert_eq!(safe_sum.invoke((3, 4)), 7);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use callables::prelude::*;
/// ```
pub mod prelude {
    pub use crate::callable::*;

    #[cfg(feature = "boxing")]
    pub use crate::boxing::*;

    #[cfg(feature = "failure")]
    pub use crate::failure::*;

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;

    #[cfg(feature = "erased")]
    pub use crate::erased::*;
}

pub mod callable;

#[cfg(feature = "boxing")]
pub mod boxing;

#[cfg(feature = "failure")]
pub mod failure;

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "erased")]
pub mod erased;
