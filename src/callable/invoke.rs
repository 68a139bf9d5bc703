//! The uniform invocation contract.

use super::arity::Arguments;

/// A callable that accepts its arguments as a single tuple.
///
/// `Callable` is the one invocation contract shared by every shape in this
/// crate: functions, consumers (whose output is `()`), predicates (whose
/// output is `bool`) and operators. Because the arguments travel as one
/// tuple, code can be written once for every arity.
///
/// Every `Fn` closure, function item and function pointer of arity 0
/// through 6 is a `Callable`, as is every adapter produced by the chaining,
/// boxing, failure and predicate layers.
///
/// # Type Parameters
///
/// * `Args` - The argument tuple, e.g. `()`, `(i32,)` or `(i32, String)`
///
/// # Examples
///
/// ```rust
/// use callables::callable::Callable;
///
/// let sum = |left: i32, right: i32| left + right;
/// assert_eq!(sum.invoke((3, 4)), 7);
/// assert_eq!(sum.arity(), 2);
///
/// let answer = || 42;
/// assert_eq!(answer.invoke(()), 42);
/// assert_eq!(answer.arity(), 0);
/// ```
///
/// ## Writing code generic over arity
///
/// ```rust
/// use callables::callable::{Arguments, Callable};
///
/// fn describe<Args: Arguments, C: Callable<Args>>(callable: &C) -> String {
///     format!("takes {} argument(s)", callable.arity())
/// }
///
/// assert_eq!(describe(&|value: u8| value), "takes 1 argument(s)");
/// assert_eq!(describe(&|a: u8, b: u8, c: u8| a + b + c), "takes 3 argument(s)");
/// ```
pub trait Callable<Args> {
    /// The value produced by an invocation.
    type Output;

    /// Invokes the callable with the given arguments.
    fn invoke(&self, arguments: Args) -> Self::Output;

    /// Returns the number of arguments this callable accepts.
    ///
    /// The value is fixed by the argument tuple type and never changes for
    /// the lifetime of the callable.
    #[inline]
    fn arity(&self) -> usize
    where
        Args: Arguments,
    {
        Args::ARITY
    }
}

macro_rules! impl_callable_for_fn {
    ($($argument:ident),*) => {
        impl<Body, Value, $($argument),*> Callable<($($argument,)*)> for Body
        where
            Body: Fn($($argument),*) -> Value,
        {
            type Output = Value;

            #[inline]
            #[allow(non_snake_case, clippy::unused_unit)]
            fn invoke(&self, ($($argument,)*): ($($argument,)*)) -> Value {
                self($($argument),*)
            }
        }
    };
}

impl_callable_for_fn!();
impl_callable_for_fn!(A);
impl_callable_for_fn!(A, B);
impl_callable_for_fn!(A, B, C);
impl_callable_for_fn!(A, B, C, D);
impl_callable_for_fn!(A, B, C, D, E);
impl_callable_for_fn!(A, B, C, D, E, F);
