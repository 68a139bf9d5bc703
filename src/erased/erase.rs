//! Erasure of statically-typed callables.

use super::Shareable;
use super::function::ErasedFunction;
use crate::callable::{Callable, HomogeneousArguments};

/// Conversion of a callable over a homogeneous tuple into an
/// [`ErasedFunction`] of the same arity.
///
/// Implemented for every [`Callable`].
///
/// # Examples
///
/// ```rust
/// use callables::callable::ArityError;
/// use callables::erased::Erase;
///
/// let clamp = |value: i32, low: i32, high: i32| value.clamp(low, high);
/// let erased = clamp.erase();
///
/// assert_eq!(erased.arity(), 3);
/// assert_eq!(erased.call(&[15, 0, 10]), Ok(10));
/// assert_eq!(erased.call(&[15]), Err(ArityError::new(3, 1)));
/// ```
pub trait Erase<Args>: Callable<Args> + Sized {
    /// Erases the static arity of `self`.
    fn erase<T>(self) -> ErasedFunction<T, Self::Output>
    where
        Args: HomogeneousArguments<T> + 'static,
        T: Clone + 'static,
        Self: Shareable + 'static,
        Self::Output: 'static,
    {
        ErasedFunction::from_checked(Args::ARITY, move |arguments: &[T]| {
            Args::from_slice(arguments).map(|arguments| self.invoke(arguments))
        })
    }
}

impl<C, Args> Erase<Args> for C where C: Callable<Args> {}
