//! The `ErasedFunction` holder.

use std::fmt;

use super::{ReferenceCounter, Shareable};
use crate::callable::{ArityError, Callable};

#[cfg(feature = "arc")]
type Body<T, R> = ReferenceCounter<dyn Fn(&[T]) -> Result<R, ArityError> + Send + Sync>;

#[cfg(not(feature = "arc"))]
type Body<T, R> = ReferenceCounter<dyn Fn(&[T]) -> Result<R, ArityError>>;

/// A callable with a runtime arity and a body over an argument slice.
///
/// # Examples
///
/// ```rust
/// use callables::callable::ArityError;
/// use callables::erased::ErasedFunction;
///
/// let sum = ErasedFunction::new(3, |arguments: &[u32]| arguments.iter().sum::<u32>());
///
/// assert_eq!(sum.arity(), 3);
/// assert_eq!(sum.call(&[1, 2, 3]), Ok(6));
/// assert_eq!(sum.call(&[1, 2]), Err(ArityError::new(3, 2)));
/// ```
pub struct ErasedFunction<T, R> {
    arity: usize,
    body: Body<T, R>,
}

/// An erased callable returning `bool`.
pub type ErasedPredicate<T> = ErasedFunction<T, bool>;

/// An erased callable returning nothing.
pub type ErasedConsumer<T> = ErasedFunction<T, ()>;

impl<T: 'static, R: 'static> ErasedFunction<T, R> {
    /// Creates a holder of `arity` arguments around `body`.
    ///
    /// `body` is only ever invoked with exactly `arity` arguments.
    pub fn new<F>(arity: usize, body: F) -> Self
    where
        F: Fn(&[T]) -> R + Shareable + 'static,
    {
        Self::from_checked(arity, move |arguments: &[T]| Ok(body(arguments)))
    }

    /// Creates a holder around a body that reports its own failures.
    pub(super) fn from_checked<F>(arity: usize, body: F) -> Self
    where
        F: Fn(&[T]) -> Result<R, ArityError> + Shareable + 'static,
    {
        Self {
            arity,
            body: ReferenceCounter::new(body),
        }
    }

    /// Returns the number of arguments this holder accepts.
    #[inline]
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Invokes the body with `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`ArityError`] if `arguments.len()` differs from
    /// [`arity`](Self::arity). The body is not run in that case.
    pub fn call(&self, arguments: &[T]) -> Result<R, ArityError> {
        if arguments.len() == self.arity {
            (self.body)(arguments)
        } else {
            Err(ArityError::new(self.arity, arguments.len()))
        }
    }

    /// Returns a holder of the same arity computing `after(self(arguments))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use callables::erased::ErasedFunction;
    ///
    /// let count = ErasedFunction::new(2, |arguments: &[&str]| arguments.concat().len());
    /// let is_long = count.map(|length| length > 5);
    /// assert_eq!(is_long.call(&["abc", "def"]), Ok(true));
    /// ```
    #[must_use]
    pub fn map<S, G>(self, after: G) -> ErasedFunction<T, S>
    where
        S: 'static,
        G: Fn(R) -> S + Shareable + 'static,
    {
        let body = self.body;
        ErasedFunction::from_checked(self.arity, move |arguments: &[T]| {
            body(arguments).map(&after)
        })
    }
}

impl<T: 'static> ErasedFunction<T, bool> {
    /// Evaluates the predicate with `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`ArityError`] if `arguments.len()` differs from the arity.
    #[inline]
    pub fn test(&self, arguments: &[T]) -> Result<bool, ArityError> {
        self.call(arguments)
    }

    /// Returns the negation of this predicate.
    #[must_use]
    pub fn negate(self) -> Self {
        self.map(|value: bool| !value)
    }

    /// Returns the conjunction of two predicates of the same arity.
    ///
    /// `self` is evaluated first; `other` is skipped when `self` is `false`.
    ///
    /// # Errors
    ///
    /// Returns [`ArityError`] with `self`'s arity as expected and `other`'s
    /// as actual if the arities differ.
    pub fn and(self, other: Self) -> Result<Self, ArityError> {
        self.combine(other, |left, right, arguments| {
            Ok(left(arguments)? && right(arguments)?)
        })
    }

    /// Returns the disjunction of two predicates of the same arity.
    ///
    /// `self` is evaluated first; `other` is skipped when `self` is `true`.
    ///
    /// # Errors
    ///
    /// Returns [`ArityError`] if the arities differ.
    pub fn or(self, other: Self) -> Result<Self, ArityError> {
        self.combine(other, |left, right, arguments| {
            Ok(left(arguments)? || right(arguments)?)
        })
    }

    fn combine<J>(self, other: Self, join: J) -> Result<Self, ArityError>
    where
        J: Fn(&Body<T, bool>, &Body<T, bool>, &[T]) -> Result<bool, ArityError>
            + Shareable
            + 'static,
    {
        if self.arity != other.arity {
            return Err(ArityError::new(self.arity, other.arity));
        }
        let (left, right) = (self.body, other.body);
        Ok(Self::from_checked(self.arity, move |arguments: &[T]| {
            join(&left, &right, arguments)
        }))
    }
}

impl<'a, T: 'static, R: 'static> Callable<(&'a [T],)> for ErasedFunction<T, R> {
    type Output = Result<R, ArityError>;

    #[inline]
    fn invoke(&self, (arguments,): (&'a [T],)) -> Self::Output {
        self.call(arguments)
    }
}

impl<T, R> Clone for ErasedFunction<T, R> {
    fn clone(&self) -> Self {
        Self {
            arity: self.arity,
            body: ReferenceCounter::clone(&self.body),
        }
    }
}

impl<T, R> fmt::Debug for ErasedFunction<T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ErasedFunction")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(ErasedFunction<i32, String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(ErasedFunction<i32, String>: Send, Sync);
