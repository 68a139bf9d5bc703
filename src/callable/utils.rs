//! Helper combinators for building callables.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: A callable of any arity that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary callable (C combinator)

use super::invoke::Callable;

/// Returns the value unchanged.
///
/// The identity function is the unit element of composition:
/// - `identity.and_then(f)` is equivalent to `f`
/// - `f.and_then(identity)` is equivalent to `f`
///
/// # Examples
///
/// ```
/// use callables::callable::{identity, Callable, ResultChainable};
///
/// let double = |value: i32| value * 2;
/// assert_eq!(double.and_then(identity).invoke((5,)), double(5));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// A callable that ignores its arguments and returns a clone of a fixed
/// value. Created by [`constant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant<T> {
    value: T,
}

impl<T, Args> Callable<Args> for Constant<T>
where
    T: Clone,
{
    type Output = T;

    #[inline]
    fn invoke(&self, _arguments: Args) -> T {
        self.value.clone()
    }
}

/// Creates a callable that always returns `value`, whatever its arguments.
///
/// The result is a [`Callable`] for every argument tuple, so the same
/// constant can stand in for a callable of any arity.
///
/// # Examples
///
/// ```
/// use callables::callable::{constant, Callable};
///
/// let always_five = constant(5);
/// assert_eq!(always_five.invoke(()), 5);
/// assert_eq!(always_five.invoke(("ignored",)), 5);
/// assert_eq!(always_five.invoke((1, 2.0, 'c')), 5);
/// ```
#[inline]
pub const fn constant<T: Clone>(value: T) -> Constant<T> {
    Constant { value }
}

/// A binary callable with its arguments swapped. Created by [`flip`].
#[derive(Debug, Clone, Copy)]
pub struct Flip<C> {
    callable: C,
}

impl<C, A, B> Callable<(B, A)> for Flip<C>
where
    C: Callable<(A, B)>,
{
    type Output = C::Output;

    #[inline]
    fn invoke(&self, (second_argument, first_argument): (B, A)) -> Self::Output {
        self.callable.invoke((first_argument, second_argument))
    }
}

/// Swaps the arguments of a binary callable.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use callables::callable::{flip, Callable};
///
/// let divide = |numerator: f64, denominator: f64| numerator / denominator;
/// let flipped_divide = flip(divide);
///
/// assert_eq!(divide.invoke((10.0, 2.0)), 5.0);
/// assert!((flipped_divide.invoke((10.0, 2.0)) - 0.2).abs() < f64::EPSILON);
/// ```
#[inline]
pub const fn flip<C>(callable: C) -> Flip<C> {
    Flip { callable }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_constant_with_reference() {
        let always_hello = constant("hello");
        assert_eq!(always_hello.invoke((42,)), "hello");
    }

    #[test]
    fn test_flip_with_asymmetric_function() {
        fn power(base: i32, exponent: u32) -> i32 {
            base.pow(exponent)
        }

        let flipped_power = flip(power);
        assert_eq!(power(2, 3), 8);
        assert_eq!(flipped_power.invoke((3, 2)), 8);
    }

    #[test]
    fn test_double_flip() {
        let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
        assert_eq!(flip(flip(subtract)).invoke((10, 3)), 7);
    }
}
