//! The three primitive predicate adapters and a few ready-made predicates.

use crate::callable::{Callable, Constant, constant};

/// The negation of a predicate.
#[derive(Debug, Clone, Copy)]
pub struct Not<P> {
    predicate: P,
}

impl<P> Not<P> {
    /// Negates `predicate`.
    #[inline]
    pub const fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<P, Args> Callable<Args> for Not<P>
where
    P: Callable<Args, Output = bool>,
{
    type Output = bool;

    #[inline]
    fn invoke(&self, arguments: Args) -> bool {
        !self.predicate.invoke(arguments)
    }
}

/// The conjunction of two predicates.
///
/// `left` is evaluated first; `right` is skipped when `left` is `false`.
#[derive(Debug, Clone, Copy)]
pub struct And<P, Q> {
    left: P,
    right: Q,
}

impl<P, Q> And<P, Q> {
    /// Conjoins `left` and `right`.
    #[inline]
    pub const fn new(left: P, right: Q) -> Self {
        Self { left, right }
    }
}

impl<P, Q, Args> Callable<Args> for And<P, Q>
where
    P: Callable<Args, Output = bool>,
    Q: Callable<Args, Output = bool>,
    Args: Clone,
{
    type Output = bool;

    #[inline]
    fn invoke(&self, arguments: Args) -> bool {
        self.left.invoke(arguments.clone()) && self.right.invoke(arguments)
    }
}

/// The disjunction of two predicates.
///
/// `left` is evaluated first; `right` is skipped when `left` is `true`.
#[derive(Debug, Clone, Copy)]
pub struct Or<P, Q> {
    left: P,
    right: Q,
}

impl<P, Q> Or<P, Q> {
    /// Disjoins `left` and `right`.
    #[inline]
    pub const fn new(left: P, right: Q) -> Self {
        Self { left, right }
    }
}

impl<P, Q, Args> Callable<Args> for Or<P, Q>
where
    P: Callable<Args, Output = bool>,
    Q: Callable<Args, Output = bool>,
    Args: Clone,
{
    type Output = bool;

    #[inline]
    fn invoke(&self, arguments: Args) -> bool {
        self.left.invoke(arguments.clone()) || self.right.invoke(arguments)
    }
}

/// A predicate that holds exactly where equal to a fixed target. Created by
/// [`is_equal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsEqual<T> {
    target: T,
}

impl<T> Callable<(T,)> for IsEqual<T>
where
    T: PartialEq,
{
    type Output = bool;

    #[inline]
    fn invoke(&self, (value,): (T,)) -> bool {
        value == self.target
    }
}

/// Negates `predicate`. Free-function form of
/// [`PredicateAlgebra::negate`](super::PredicateAlgebra::negate).
///
/// # Examples
///
/// ```rust
/// use callables::callable::Callable;
/// use callables::predicate::not;
///
/// let is_non_empty = not(|text: &str| text.is_empty());
/// assert!(is_non_empty.invoke(("abc",)));
/// assert!(!is_non_empty.invoke(("",)));
/// ```
#[inline]
pub const fn not<P>(predicate: P) -> Not<P> {
    Not::new(predicate)
}

/// A unary predicate testing equality with `target`.
///
/// # Examples
///
/// ```rust
/// use callables::callable::Callable;
/// use callables::predicate::{is_equal, PredicateAlgebra};
///
/// let is_vowel = is_equal('a').or(is_equal('e')).or(is_equal('i'));
/// assert!(is_vowel.invoke(('e',)));
/// assert!(!is_vowel.invoke(('z',)));
/// ```
#[inline]
pub const fn is_equal<T>(target: T) -> IsEqual<T> {
    IsEqual { target }
}

/// A predicate of any arity that always holds.
#[inline]
#[must_use]
pub const fn always_true() -> Constant<bool> {
    constant(true)
}

/// A predicate of any arity that never holds.
#[inline]
#[must_use]
pub const fn always_false() -> Constant<bool> {
    constant(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_inverts() {
        let is_zero = |value: i32| value == 0;
        assert!(not(is_zero).invoke((1,)));
        assert!(!not(is_zero).invoke((0,)));
    }

    #[test]
    fn test_is_equal_with_borrowed_target() {
        let is_admin = is_equal("admin");
        assert!(is_admin.invoke(("admin",)));
        assert!(!is_admin.invoke(("guest",)));
    }

    #[test]
    fn test_constant_predicates_ignore_arguments() {
        assert!(Callable::<(i32, i32)>::invoke(&always_true(), (1, 2)));
        assert!(!Callable::<()>::invoke(&always_false(), ()));
    }
}
