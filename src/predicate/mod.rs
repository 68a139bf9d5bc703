//! Boolean algebra over predicates.
//!
//! A predicate is any [`Callable`](crate::callable::Callable) returning
//! `bool`. Three primitive adapters, [`Not`], [`And`] and [`Or`], implement
//! negation, conjunction and disjunction; the derived combinators are built
//! from them:
//!
//! | Combinator | Definition |
//! |------------|------------|
//! | [`Sub`] | `a ∧ ¬b`, with `¬b` always computed |
//! | [`Xor`] | `sub(a, b) ∨ sub(b, a)` |
//! | [`Nand`] | `¬(a ∧ b)` |
//! | [`Nor`] | `¬(a ∨ b)` |
//! | [`Xnor`] | `¬xor(a, b)` |
//! | [`OrNot`] | `a ∨ ¬b` |
//!
//! Both operands of a combinator take the same argument tuple, and `And` /
//! `Or` clone that tuple so each side receives its own copy.
//!
//! # Examples
//!
//! ```rust
//! use callables::predicate::{PredicateAlgebra, always_false};
//!
//! let is_adult = |age: u8, _name: &str| age >= 18;
//! let is_named = |_age: u8, name: &str| !name.is_empty();
//!
//! let can_register = is_adult.and(is_named);
//! assert!(can_register.test((30, "Ada")));
//! assert!(!can_register.test((30, "")));
//!
//! let nobody = can_register.and(always_false());
//! assert!(!nobody.test((30, "Ada")));
//! ```

mod algebra;
mod combinator;

pub use algebra::{Nand, Nor, OrNot, PredicateAlgebra, Sub, Xnor, Xor};
pub use combinator::{And, IsEqual, Not, Or, always_false, always_true, is_equal, not};
