//! Pre- and post-composition of callables.
//!
//! - [`ResultChainable::and_then`] attaches a transform *after* invocation:
//!   `f.and_then(g)(args) = g(f(args))`.
//! - [`InputChainable::compose`] attaches a transform *before* invocation of a
//!   unary callable: `f.compose(g)(v) = f(g(v))`.
//!
//! Both produce a new callable that owns the two originals; neither mutates
//! them. A failure of either side is whatever value that side returns, so a
//! `Result` produced by `f` reaches `g` unchanged.
//!
//! The transform is a required, typed parameter. Passing nothing, or passing
//! something that is not a callable of the right shape, is rejected when the
//! composition is written:
//!
//! ```compile_fail
//! use callables::callable::ResultChainable;
//!
//! let length = |text: String| text.len();
//! let composed = length.and_then(None::<fn(usize) -> usize>);
//! ```
//!
//! ```compile_fail
//! use callables::callable::ResultChainable;
//!
//! let length = |text: String| text.len();
//! let composed = length.and_then();
//! ```

use super::invoke::Callable;

/// A callable followed by a post-transform. Created by
/// [`ResultChainable::and_then`].
#[derive(Debug, Clone, Copy)]
pub struct AndThen<C, G> {
    callable: C,
    after: G,
}

impl<C, G> AndThen<C, G> {
    /// Chains `after` behind `callable`.
    #[inline]
    pub const fn new(callable: C, after: G) -> Self {
        Self { callable, after }
    }
}

impl<C, G, Args> Callable<Args> for AndThen<C, G>
where
    C: Callable<Args>,
    G: Callable<(C::Output,)>,
{
    type Output = <G as Callable<(C::Output,)>>::Output;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        self.after.invoke((self.callable.invoke(arguments),))
    }
}

/// A unary callable preceded by a pre-transform. Created by
/// [`InputChainable::compose`].
#[derive(Debug, Clone, Copy)]
pub struct Compose<C, G> {
    callable: C,
    before: G,
}

impl<C, G> Compose<C, G> {
    /// Places `before` in front of `callable`.
    #[inline]
    pub const fn new(callable: C, before: G) -> Self {
        Self { callable, before }
    }
}

impl<C, G, V> Callable<(V,)> for Compose<C, G>
where
    G: Callable<(V,)>,
    C: Callable<(<G as Callable<(V,)>>::Output,)>,
{
    type Output = <C as Callable<(<G as Callable<(V,)>>::Output,)>>::Output;

    #[inline]
    fn invoke(&self, (value,): (V,)) -> Self::Output {
        self.callable.invoke((self.before.invoke((value,)),))
    }
}

// =============================================================================
// Chaining traits
// =============================================================================

/// Callables that accept a transform applied to their result.
///
/// Implemented for every [`Callable`].
///
/// # Laws
///
/// - **Associativity**: `f.and_then(g).and_then(h) == f.and_then(g.and_then(h))`
/// - **Identity**: `f.and_then(identity) == f`
///
/// # Examples
///
/// ```rust
/// use callables::callable::{Callable, ResultChainable};
///
/// let format = |value: i32| value.to_string();
/// let length = |text: String| text.len();
///
/// let digits = format.and_then(length);
/// assert_eq!(digits.invoke((12345,)), 5);
/// ```
pub trait ResultChainable<Args>: Callable<Args> + Sized {
    /// Returns a callable computing `after(self(arguments))`.
    #[inline]
    fn and_then<G>(self, after: G) -> AndThen<Self, G>
    where
        G: Callable<(Self::Output,)>,
    {
        AndThen::new(self, after)
    }
}

impl<C, Args> ResultChainable<Args> for C where C: Callable<Args> {}

/// Unary callables that accept a transform applied to their input.
///
/// Implemented for every [`Callable`] of arity 1.
///
/// # Laws
///
/// - **Associativity**: `f.compose(g).compose(h) == f.compose(g.compose(h))`
/// - **Duality**: `f.compose(g) == g.and_then(f)`
///
/// # Examples
///
/// ```rust
/// use callables::callable::{Callable, InputChainable};
///
/// let double = |value: i32| value * 2;
/// let parse = |text: &str| text.len() as i32;
///
/// let doubled_length = double.compose(parse);
/// assert_eq!(doubled_length.invoke(("abc",)), 6);
/// ```
pub trait InputChainable<T>: Callable<(T,)> + Sized {
    /// Returns a callable computing `self(before(value))`.
    #[inline]
    fn compose<G, V>(self, before: G) -> Compose<Self, G>
    where
        G: Callable<(V,), Output = T>,
    {
        Compose::new(self, before)
    }
}

impl<C, T> InputChainable<T> for C where C: Callable<(T,)> {}

/// A [`ResultChainable`] whose chained form is again a
/// `ClosedResultChainable` over the same arguments.
///
/// The guarantee is carried in the return type of
/// [`and_then_closed`](ClosedResultChainable::and_then_closed), so chains can
/// be extended indefinitely through an opaque type.
///
/// # Examples
///
/// ```rust
/// use callables::callable::{Callable, ClosedResultChainable};
///
/// fn twice<C: ClosedResultChainable<(i32,), Output = i32>>(
///     callable: C,
/// ) -> impl ClosedResultChainable<(i32,), Output = i32> {
///     callable
///         .and_then_closed(|value: i32| value + 1)
///         .and_then_closed(|value: i32| value * 10)
/// }
///
/// assert_eq!(twice(|value: i32| value).invoke((4,)), 50);
/// ```
pub trait ClosedResultChainable<Args>: ResultChainable<Args> {
    /// Same as [`ResultChainable::and_then`], with the closure guarantee
    /// exposed in the return type.
    #[inline]
    fn and_then_closed<G>(
        self,
        after: G,
    ) -> impl ClosedResultChainable<Args, Output = <G as Callable<(Self::Output,)>>::Output>
    where
        G: Callable<(Self::Output,)>,
    {
        self.and_then(after)
    }
}

impl<C, Args> ClosedResultChainable<Args> for C where C: ResultChainable<Args> {}

/// An [`InputChainable`] whose composed form is again a
/// `ClosedInputChainable` over the new input type.
///
/// # Examples
///
/// ```rust
/// use callables::callable::{Callable, ClosedInputChainable};
///
/// fn widen<C: ClosedInputChainable<i64, Output = bool>>(
///     callable: C,
/// ) -> impl ClosedInputChainable<u8, Output = bool> {
///     callable
///         .compose_closed(|value: i32| i64::from(value) * 3)
///         .compose_closed(|value: u8| i32::from(value) - 1)
/// }
///
/// let is_even = widen(|value: i64| value % 2 == 0);
/// assert!(!is_even.invoke((4,)));
/// assert!(is_even.invoke((5,)));
/// ```
pub trait ClosedInputChainable<T>: InputChainable<T> {
    /// Same as [`InputChainable::compose`], with the closure guarantee exposed
    /// in the return type.
    #[inline]
    fn compose_closed<G, V>(self, before: G) -> impl ClosedInputChainable<V, Output = Self::Output>
    where
        G: Callable<(V,), Output = T>,
    {
        self.compose(before)
    }
}

impl<C, T> ClosedInputChainable<T> for C where C: InputChainable<T> {}

static_assertions::assert_impl_all!(
    AndThen<fn(i32) -> i64, fn(i64) -> String>: ClosedResultChainable<(i32,)>,
    ClosedInputChainable<i32>
);
static_assertions::assert_impl_all!(
    Compose<fn(i64) -> String, fn(i32) -> i64>: ClosedResultChainable<(i32,)>,
    ClosedInputChainable<i32>
);
static_assertions::assert_impl_all!(AndThen<fn(u8, u8) -> u8, fn(u8) -> bool>: ClosedResultChainable<(u8, u8)>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_then_on_nullary_callable() {
        let seed = || 21;
        let doubled = seed.and_then(|value: i32| value * 2);
        assert_eq!(doubled.invoke(()), 42);
        assert_eq!(doubled.arity(), 0);
    }

    #[test]
    fn test_compose_then_and_then() {
        let square = |value: i64| value * value;
        let chained = square
            .compose(|text: &str| text.len() as i64)
            .and_then(|value: i64| value - 1);
        assert_eq!(chained.invoke(("four",)), 15);
    }

    #[test]
    fn test_and_then_binary_keeps_arity() {
        let sum = |left: i32, right: i32| left + right;
        let described = sum.and_then(|total: i32| format!("sum={total}"));
        assert_eq!(described.invoke((2, 3)), "sum=5");
        assert_eq!(described.arity(), 2);
    }

    #[test]
    fn test_compose_closed_twice() {
        let is_long = |length: usize| length > 3;
        let chained = is_long
            .compose_closed(|text: String| text.len())
            .compose_closed(|count: u8| "x".repeat(usize::from(count)));

        assert!(chained.invoke((4,)));
        assert!(!chained.invoke((3,)));
        assert_eq!(chained.arity(), 1);
    }
}
