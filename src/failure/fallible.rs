//! The `Fallible` and `RecoveryHandler` traits.

use super::wrapper::{AndThenTry, Handled, Lifted, MapFault, MapValue, Swallowed};
use crate::callable::Callable;

/// A total mapping from the original arguments and a fault to a substitute
/// value.
///
/// Implemented for every `Fn(Args, E) -> T`. A handler returns a plain value,
/// not a `Result`, so it has no way to report a fault of its own.
pub trait RecoveryHandler<Args, E> {
    /// The substitute value type.
    type Value;

    /// Produces the substitute for `fault`, raised while invoking with
    /// `arguments`.
    fn recover(&self, arguments: Args, fault: E) -> Self::Value;
}

impl<F, Args, E, T> RecoveryHandler<Args, E> for F
where
    F: Fn(Args, E) -> T,
{
    type Value = T;

    #[inline]
    fn recover(&self, arguments: Args, fault: E) -> T {
        self(arguments, fault)
    }
}

/// A callable whose invocation may fault.
///
/// Implemented for every [`Callable`] returning `Result<T, E>`. The methods
/// either make the callable total ([`handle`](Fallible::handle),
/// [`swallow`](Fallible::swallow), [`lift`](Fallible::lift)) or chain further
/// work in front of the catch boundary ([`map_value`](Fallible::map_value),
/// [`and_then_try`](Fallible::and_then_try),
/// [`map_fault`](Fallible::map_fault)).
///
/// # Laws
///
/// For a fallible `f`, a handler `h` and arguments `x`:
///
/// ```text
/// f(x) == Err(e)  =>  f.handle(h)(x) == h(x, e)
/// f(x) == Err(e)  =>  f.swallow()(x) == Default::default()
/// f(x) == Ok(v)   =>  f.handle(h)(x) == f.swallow()(x) == v
/// ```
///
/// # Examples
///
/// ```rust
/// use std::num::ParseIntError;
///
/// use callables::callable::Callable;
/// use callables::failure::Fallible;
///
/// let parse = |text: &str| text.parse::<i32>();
///
/// let recovered = parse.handle(|(text,): (&str,), _fault: ParseIntError| -(text.len() as i32));
/// assert_eq!(recovered.invoke(("42",)), 42);
/// assert_eq!(recovered.invoke(("nope",)), -4);
///
/// assert_eq!(parse.swallow().invoke(("nope",)), 0);
/// ```
pub trait Fallible<Args>: Sized {
    /// The success value type.
    type Value;

    /// The fault type.
    type Error;

    /// Invokes the callable, returning the fault instead of a value on
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns the fault produced by the wrapped body.
    fn try_call(&self, arguments: Args) -> Result<Self::Value, Self::Error>;

    /// Makes the callable total by passing every fault, together with the
    /// arguments that caused it, to `handler`.
    ///
    /// A fault raised by anything chained onto the returned callable is
    /// outside this boundary and is not seen by `handler`.
    #[inline]
    fn handle<H>(self, handler: H) -> Handled<Self, H>
    where
        H: Fn(Args, Self::Error) -> Self::Value,
        Args: Clone,
    {
        Handled::new(self, handler)
    }

    /// Makes the callable total by replacing every fault with
    /// `Default::default()`: zero for numbers, `false`, `None`, or `()` for
    /// consumer-shaped callables.
    #[inline]
    fn swallow(self) -> Swallowed<Self>
    where
        Self::Value: Default,
    {
        Swallowed::new(self)
    }

    /// Makes the callable total by reporting every fault as `None`.
    #[inline]
    fn lift(self) -> Lifted<Self> {
        Lifted::new(self)
    }

    /// Transforms the success value, leaving faults untouched.
    #[inline]
    fn map_value<G>(self, after: G) -> MapValue<Self, G>
    where
        G: Callable<(Self::Value,)>,
    {
        MapValue::new(self, after)
    }

    /// Chains a fallible transform with the same fault type.
    ///
    /// A fault of either side is returned unchanged, so a later
    /// [`handle`](Fallible::handle) covers both.
    #[inline]
    fn and_then_try<G>(self, after: G) -> AndThenTry<Self, G>
    where
        G: Fallible<(Self::Value,), Error = Self::Error>,
    {
        AndThenTry::new(self, after)
    }

    /// Rewrites the fault, leaving success values untouched.
    #[inline]
    fn map_fault<G>(self, transform: G) -> MapFault<Self, G>
    where
        G: Callable<(Self::Error,)>,
    {
        MapFault::new(self, transform)
    }
}

impl<C, Args, T, E> Fallible<Args> for C
where
    C: Callable<Args, Output = Result<T, E>>,
{
    type Value = T;
    type Error = E;

    #[inline]
    fn try_call(&self, arguments: Args) -> Result<T, E> {
        self.invoke(arguments)
    }
}
