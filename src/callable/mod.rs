//! Callables and their composition.
//!
//! This module holds the part of the crate every other layer builds on:
//!
//! - [`Arguments`]: the arity contract. Arguments travel as one tuple whose
//!   length is the callable's arity.
//! - [`Callable`]: the uniform invocation contract, implemented by every `Fn`
//!   of arity 0 through 6 and by every adapter in this crate.
//! - [`ResultChainable`] / [`InputChainable`]: post- and pre-composition, with
//!   their closed refinements [`ClosedResultChainable`] /
//!   [`ClosedInputChainable`].
//! - [`Function`], [`Consumer`], [`Predicate`], [`Operator`]: named families
//!   with a fixed argument tuple, relabelled into one another through
//!   [`IntoVariant`] / [`FromVariant`].
//! - [`identity`], [`constant`], [`flip`] and the [`compose!`](crate::compose)
//!   / [`pipe!`](crate::pipe) macros.
//!
//! # Examples
//!
//! ```rust
//! use callables::callable::{Callable, Function, ResultChainable};
//!
//! let format = Function::new(|value: i32| value.to_string());
//! let length = |text: String| text.len();
//!
//! let digits = format.and_then(length);
//! assert_eq!(digits.invoke((12345,)), 5);
//! assert_eq!(digits.arity(), 1);
//! ```
//!
//! # Mathematical Background
//!
//! Given `f: A -> B` and `g: B -> C`:
//!
//! ```text
//! f.and_then(g)(x) = g(f(x))
//! g.compose(f)(x)  = g(f(x))
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `f.and_then(g).and_then(h) == f.and_then(g.and_then(h))`
//! - **Left Identity**: `identity.and_then(f) == f`
//! - **Right Identity**: `f.and_then(identity) == f`
//! - **Double Flip Identity**: `flip(flip(f)) == f`

mod arity;
mod chain;
mod compose_macro;
mod family;
mod invoke;
mod specialized;
mod utils;

pub use arity::{Arguments, ArityError, HomogeneousArguments};
pub use chain::{
    AndThen, ClosedInputChainable, ClosedResultChainable, Compose, InputChainable,
    ResultChainable,
};
pub use family::{
    BinaryOperator, Consumer, FromVariant, Function, IntoVariant, Operator, Predicate, Sequence,
    UnaryOperator, identity_operator, max_by, min_by,
};
pub use invoke::Callable;
pub use specialized::*;
pub use utils::{Constant, Flip, constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
