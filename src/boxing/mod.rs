//! Conversion between primitive and boxed representations of a callable.
//!
//! A callable over primitive element types (`i32`, `f64`, `bool`, ...) has an
//! equivalent *boxed* form whose argument and result slots hold `Box<P>`
//! instead of `P`. Both forms compute the same thing; only the static
//! representation differs.
//!
//! - [`Boxing::box_input`] boxes the argument side only,
//! - [`Boxing::box_result`] boxes the result side only,
//! - [`Boxing::boxed`] boxes both,
//!
//! and [`Unboxing`] provides the inverse of each.
//!
//! Predicates are usually boxed on the input side only, since their result is
//! already the `bool` a caller wants to branch on.
//!
//! # Laws
//!
//! For every input `x` in the primitive domain:
//!
//! ```text
//! f.boxed().unboxed()(x)                 == f(x)
//! f.unboxed().boxed()(Box::new(x))       == f(Box::new(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use callables::boxing::{Boxing, Unboxing};
//! use callables::callable::Callable;
//!
//! let add = |left: i32, right: i32| left + right;
//!
//! let boxed = add.boxed();
//! assert_eq!(boxed.invoke((Box::new(3), Box::new(4))), Box::new(7));
//!
//! let restored = boxed.unboxed();
//! assert_eq!(restored.invoke((3, 4)), 7);
//! ```

use std::marker::PhantomData;

use crate::callable::{Arguments, Callable};

mod sealed {
    pub trait Sealed {}
}

/// A machine-primitive element type.
///
/// Sealed; implemented for `bool`, `char`, every integer type and both float
/// types.
pub trait Primitive: Copy + sealed::Sealed + 'static {}

macro_rules! impl_primitive {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $primitive {}
            impl Primitive for $primitive {}
        )*
    };
}

impl_primitive!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// A boxed primitive result, convertible back to the primitive.
pub trait BoxedPrimitive {
    /// The unboxed element type.
    type Primitive: Primitive;

    /// Moves the value out of its box.
    fn unbox(self) -> Self::Primitive;
}

impl<P: Primitive> BoxedPrimitive for Box<P> {
    type Primitive = P;

    #[inline]
    fn unbox(self) -> P {
        *self
    }
}

/// An argument tuple of primitives, convertible to its boxed form.
pub trait BoxArguments: Arguments {
    /// The same tuple with every slot boxed.
    type Boxed: Arguments;

    /// Boxes every slot.
    fn box_all(self) -> Self::Boxed;
}

/// An argument tuple of boxed primitives, convertible to its primitive form.
pub trait UnboxArguments: Arguments {
    /// The same tuple with every slot unboxed.
    type Unboxed: Arguments;

    /// Unboxes every slot.
    fn unbox_all(self) -> Self::Unboxed;
}

macro_rules! impl_box_arguments {
    ($($element:ident),*) => {
        impl<$($element: Primitive),*> BoxArguments for ($($element,)*) {
            type Boxed = ($(Box<$element>,)*);

            #[inline]
            #[allow(non_snake_case, clippy::unused_unit)]
            fn box_all(self) -> Self::Boxed {
                let ($($element,)*) = self;
                ($(Box::new($element),)*)
            }
        }

        impl<$($element: Primitive),*> UnboxArguments for ($(Box<$element>,)*) {
            type Unboxed = ($($element,)*);

            #[inline]
            #[allow(non_snake_case, clippy::unused_unit)]
            fn unbox_all(self) -> Self::Unboxed {
                let ($($element,)*) = self;
                ($(*$element,)*)
            }
        }
    };
}

impl_box_arguments!();
impl_box_arguments!(A);
impl_box_arguments!(A, B);
impl_box_arguments!(A, B, C);
impl_box_arguments!(A, B, C, D);
impl_box_arguments!(A, B, C, D, E);
impl_box_arguments!(A, B, C, D, E, F);

// =============================================================================
// Adapters
// =============================================================================

/// A callable over primitives exposed over boxed arguments. Created by
/// [`Boxing::box_input`].
///
/// `Args` is the primitive argument tuple of the wrapped callable.
pub struct BoxInput<Args, C> {
    callable: C,
    arguments: PhantomData<fn(Args)>,
}

impl<Args, C> Callable<<Args as BoxArguments>::Boxed> for BoxInput<Args, C>
where
    Args: BoxArguments,
    C: Callable<Args>,
    Args::Boxed: UnboxArguments<Unboxed = Args>,
{
    type Output = C::Output;

    #[inline]
    fn invoke(&self, arguments: Args::Boxed) -> Self::Output {
        self.callable.invoke(arguments.unbox_all())
    }
}

/// A callable with a primitive result exposed with a boxed result. Created by
/// [`Boxing::box_result`].
#[derive(Debug, Clone, Copy)]
pub struct BoxResult<C> {
    callable: C,
}

impl<C, Args> Callable<Args> for BoxResult<C>
where
    C: Callable<Args>,
    C::Output: Primitive,
{
    type Output = Box<C::Output>;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        Box::new(self.callable.invoke(arguments))
    }
}

/// A callable over boxed arguments exposed over primitives. Created by
/// [`Unboxing::unbox_input`].
///
/// `Args` is the boxed argument tuple of the wrapped callable.
pub struct UnboxInput<Args, C> {
    callable: C,
    arguments: PhantomData<fn(Args)>,
}

impl<Args, C> Callable<<Args as UnboxArguments>::Unboxed> for UnboxInput<Args, C>
where
    Args: UnboxArguments,
    C: Callable<Args>,
    Args::Unboxed: BoxArguments<Boxed = Args>,
{
    type Output = C::Output;

    #[inline]
    fn invoke(&self, arguments: Args::Unboxed) -> Self::Output {
        self.callable.invoke(arguments.box_all())
    }
}

/// A callable with a boxed result exposed with a primitive result. Created by
/// [`Unboxing::unbox_result`].
#[derive(Debug, Clone, Copy)]
pub struct UnboxResult<C> {
    callable: C,
}

impl<C, Args> Callable<Args> for UnboxResult<C>
where
    C: Callable<Args>,
    C::Output: BoxedPrimitive,
{
    type Output = <C::Output as BoxedPrimitive>::Primitive;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        self.callable.invoke(arguments).unbox()
    }
}

macro_rules! phantom_adapter_boilerplate {
    ($adapter:ident) => {
        impl<Args, C: Clone> Clone for $adapter<Args, C> {
            fn clone(&self) -> Self {
                Self {
                    callable: self.callable.clone(),
                    arguments: PhantomData,
                }
            }
        }

        impl<Args, C: Copy> Copy for $adapter<Args, C> {}

        impl<Args: Arguments, C> std::fmt::Debug for $adapter<Args, C> {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter
                    .debug_struct(stringify!($adapter))
                    .field("arity", &Args::ARITY)
                    .finish_non_exhaustive()
            }
        }
    };
}

phantom_adapter_boilerplate!(BoxInput);
phantom_adapter_boilerplate!(UnboxInput);

// =============================================================================
// Conversion traits
// =============================================================================

/// Conversion of a primitive callable into its boxed form.
///
/// Implemented for every [`Callable`]; each method is only available when the
/// side it converts is made of primitives.
///
/// # Examples
///
/// ```rust
/// use callables::boxing::Boxing;
/// use callables::callable::Callable;
///
/// let is_positive = |value: f64| value > 0.0;
/// let boxed_input = is_positive.box_input();
/// assert!(boxed_input.invoke((Box::new(1.5),)));
///
/// let to_char = |code: u8| code as char;
/// assert_eq!(*to_char.box_result().invoke((65,)), 'A');
/// ```
pub trait Boxing<Args>: Callable<Args> + Sized {
    /// Boxes every argument slot.
    #[inline]
    fn box_input(self) -> BoxInput<Args, Self>
    where
        Args: BoxArguments,
    {
        BoxInput {
            callable: self,
            arguments: PhantomData,
        }
    }

    /// Boxes the result.
    #[inline]
    fn box_result(self) -> BoxResult<Self>
    where
        Self::Output: Primitive,
    {
        BoxResult { callable: self }
    }

    /// Boxes both the arguments and the result.
    #[inline]
    fn boxed(self) -> BoxResult<BoxInput<Args, Self>>
    where
        Args: BoxArguments,
        Self::Output: Primitive,
    {
        BoxResult {
            callable: self.box_input(),
        }
    }
}

impl<C, Args> Boxing<Args> for C where C: Callable<Args> {}

/// Conversion of a boxed callable into its primitive form.
///
/// Implemented for every [`Callable`]; each method is only available when the
/// side it converts is made of boxed primitives.
///
/// # Examples
///
/// ```rust
/// use callables::boxing::Unboxing;
/// use callables::callable::Callable;
///
/// let boxed_sum = |left: Box<i64>, right: Box<i64>| Box::new(*left + *right);
/// let sum = boxed_sum.unboxed();
/// assert_eq!(sum.invoke((40, 2)), 42);
/// ```
pub trait Unboxing<Args>: Callable<Args> + Sized {
    /// Unboxes every argument slot.
    #[inline]
    fn unbox_input(self) -> UnboxInput<Args, Self>
    where
        Args: UnboxArguments,
    {
        UnboxInput {
            callable: self,
            arguments: PhantomData,
        }
    }

    /// Unboxes the result.
    #[inline]
    fn unbox_result(self) -> UnboxResult<Self>
    where
        Self::Output: BoxedPrimitive,
    {
        UnboxResult { callable: self }
    }

    /// Unboxes both the arguments and the result.
    #[inline]
    fn unboxed(self) -> UnboxResult<UnboxInput<Args, Self>>
    where
        Args: UnboxArguments,
        Self::Output: BoxedPrimitive,
    {
        UnboxResult {
            callable: self.unbox_input(),
        }
    }
}

impl<C, Args> Unboxing<Args> for C where C: Callable<Args> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_all_and_unbox_all_are_inverse() {
        let boxed = (1_u8, 'x', true).box_all();
        assert_eq!(boxed, (Box::new(1_u8), Box::new('x'), Box::new(true)));
        assert_eq!(boxed.unbox_all(), (1_u8, 'x', true));
    }

    #[test]
    fn test_nullary_boxing() {
        let answer = || 42_u32;
        assert_eq!(answer.boxed().invoke(()), Box::new(42));
    }

    #[test]
    fn test_box_input_keeps_arity() {
        let sum = |a: i16, b: i16, c: i16| a + b + c;
        let boxed = sum.box_input();
        assert_eq!(boxed.arity(), 3);
        assert_eq!(boxed.invoke((Box::new(1), Box::new(2), Box::new(3))), 6);
    }
}
