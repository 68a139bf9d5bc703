//! The arity contract.
//!
//! Every callable in this crate takes its arguments as a single tuple. The
//! [`Arguments`] trait records how many slots that tuple has, which is the
//! callable's arity. [`HomogeneousArguments`] additionally describes tuples
//! whose slots all share one element type, so that they can be built from an
//! ordered argument list whose length is only known at runtime.

use std::fmt;

/// An ordered tuple of arguments accepted by a callable.
///
/// Implemented for tuples of arity 0 through 6. The arity is a compile-time
/// constant of the tuple type, so it can never change for a given callable.
///
/// # Examples
///
/// ```rust
/// use callables::callable::Arguments;
///
/// assert_eq!(<() as Arguments>::ARITY, 0);
/// assert_eq!(<(i32,) as Arguments>::ARITY, 1);
/// assert_eq!(<(i32, String) as Arguments>::ARITY, 2);
/// ```
pub trait Arguments: Sized {
    /// The number of argument slots in this tuple.
    const ARITY: usize;
}

/// An argument tuple whose every slot holds a `T`.
///
/// This is the bridge between statically typed argument tuples and
/// runtime argument lists such as `&[T]`.
///
/// # Examples
///
/// ```rust
/// use callables::callable::{ArityError, HomogeneousArguments};
///
/// let pair = <(i64, i64)>::from_slice(&[3, 4]);
/// assert_eq!(pair, Ok((3, 4)));
///
/// let mismatch = <(i64, i64)>::from_slice(&[3]);
/// assert_eq!(mismatch, Err(ArityError::new(2, 1)));
///
/// assert_eq!((1, 2, 3).into_vec(), vec![1, 2, 3]);
/// ```
pub trait HomogeneousArguments<T>: Arguments {
    /// Builds the tuple from an argument list.
    ///
    /// # Errors
    ///
    /// Returns [`ArityError`] if `values.len()` differs from the tuple's arity.
    fn from_slice(values: &[T]) -> Result<Self, ArityError>
    where
        T: Clone;

    /// Flattens the tuple into an ordered argument list.
    fn into_vec(self) -> Vec<T>;
}

/// An argument list whose length does not match the arity of the callable
/// it was offered to.
///
/// # Examples
///
/// ```rust
/// use callables::callable::ArityError;
///
/// let error = ArityError::new(2, 3);
/// assert_eq!(format!("{error}"), "arity mismatch: expected 2 argument(s), got 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArityError {
    /// The arity of the callable.
    pub expected: usize,
    /// The number of arguments actually supplied.
    pub actual: usize,
}

impl ArityError {
    /// Creates a new `ArityError`.
    #[inline]
    #[must_use]
    pub const fn new(expected: usize, actual: usize) -> Self {
        Self { expected, actual }
    }
}

impl fmt::Display for ArityError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "arity mismatch: expected {} argument(s), got {}",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for ArityError {}

// =============================================================================
// Tuple implementations
// =============================================================================

macro_rules! slot_type {
    ($slot:ident, $element:ty) => {
        $element
    };
}

macro_rules! impl_arguments {
    ($arity:expr; $($element:ident $slot:ident),*) => {
        impl<$($element),*> Arguments for ($($element,)*) {
            const ARITY: usize = $arity;
        }

        impl<T> HomogeneousArguments<T> for ($(slot_type!($slot, T),)*) {
            #[inline]
            fn from_slice(values: &[T]) -> Result<Self, ArityError>
            where
                T: Clone,
            {
                match values {
                    [$($slot),*] => Ok(($($slot.clone(),)*)),
                    _ => Err(ArityError::new($arity, values.len())),
                }
            }

            #[inline]
            fn into_vec(self) -> Vec<T> {
                let ($($slot,)*) = self;
                vec![$($slot),*]
            }
        }
    };
}

impl_arguments!(0;);
impl_arguments!(1; A first);
impl_arguments!(2; A first, B second);
impl_arguments!(3; A first, B second, C third);
impl_arguments!(4; A first, B second, C third, D fourth);
impl_arguments!(5; A first, B second, C third, D fourth, E fifth);
impl_arguments!(6; A first, B second, C third, D fourth, E fifth, F sixth);
