//! Callables whose arity is known only at runtime.
//!
//! An [`ErasedFunction`] pairs an explicit arity with a body over an argument
//! slice. Invocation checks the slice length against the arity before the
//! body runs, so a mismatch is reported as an [`ArityError`] instead of
//! reaching the body.
//!
//! Any callable over a homogeneous tuple can be erased with [`Erase::erase`],
//! which lets callables of different static arity live in one collection:
//!
//! ```rust
//! use callables::erased::{Erase, ErasedFunction};
//!
//! let operations: Vec<ErasedFunction<i64, i64>> = vec![
//!     (|| 0).erase(),
//!     (|value: i64| -value).erase(),
//!     (|left: i64, right: i64| left * right).erase(),
//! ];
//!
//! let arities: Vec<usize> = operations.iter().map(ErasedFunction::arity).collect();
//! assert_eq!(arities, vec![0, 1, 2]);
//! assert_eq!(operations[2].call(&[6, 7]), Ok(42));
//! assert!(operations[1].call(&[6, 7]).is_err());
//! ```
//!
//! # Sharing
//!
//! The body is held behind a reference counter, so cloning a holder is
//! cheap and never clones the body. With the `arc` feature the counter is
//! `Arc` and every body must be `Send + Sync`; otherwise it is `Rc`.
//!
//! [`ArityError`]: crate::callable::ArityError

mod erase;
mod function;

pub use erase::Erase;
pub use function::{ErasedConsumer, ErasedFunction, ErasedPredicate};

/// Reference-counted pointer for erased bodies.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`, which is
/// thread-safe.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// Bound placed on erased bodies.
///
/// `Send + Sync` with the `arc` feature, no requirement otherwise.
#[cfg(feature = "arc")]
pub trait Shareable: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Send + Sync + ?Sized> Shareable for T {}

/// Bound placed on erased bodies.
///
/// `Send + Sync` with the `arc` feature, no requirement otherwise.
#[cfg(not(feature = "arc"))]
pub trait Shareable {}

#[cfg(not(feature = "arc"))]
impl<T: ?Sized> Shareable for T {}
