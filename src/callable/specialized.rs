//! Family aliases specialized to primitive element types.
//!
//! The families are generic over their argument tuple, so a predicate over one
//! `i32` is simply `Predicate<(i32,), F>`. The aliases below name the common
//! shapes for every primitive type, e.g. [`I32Predicate`], [`F64BinaryOperator`]
//! or [`CharBiConsumer`].
//!
//! # Examples
//!
//! ```rust
//! use callables::callable::{I32BiPredicate, I64UnaryOperator};
//!
//! let ordered: I32BiPredicate<_> = I32BiPredicate::new(|left: i32, right: i32| left <= right);
//! assert!(ordered.test((1, 2)));
//!
//! let halve: I64UnaryOperator<_> = I64UnaryOperator::new(|value: i64| value / 2);
//! assert_eq!(halve.apply((10,)), 5);
//! ```

use super::family::{Consumer, Function, Operator, Predicate};

macro_rules! specialize {
    ($($primitive:ident => $prefix:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "A [`Function`] of one `" $primitive "` argument."]
                pub type [<$prefix Function>]<F> = Function<($primitive,), F>;

                #[doc = "A [`Function`] of two `" $primitive "` arguments."]
                pub type [<$prefix BiFunction>]<F> = Function<($primitive, $primitive), F>;

                #[doc = "A [`Predicate`] over one `" $primitive "`."]
                pub type [<$prefix Predicate>]<F> = Predicate<($primitive,), F>;

                #[doc = "A [`Predicate`] over two `" $primitive "` values."]
                pub type [<$prefix BiPredicate>]<F> = Predicate<($primitive, $primitive), F>;

                #[doc = "A [`Consumer`] of one `" $primitive "`."]
                pub type [<$prefix Consumer>]<F> = Consumer<($primitive,), F>;

                #[doc = "A [`Consumer`] of two `" $primitive "` values."]
                pub type [<$prefix BiConsumer>]<F> = Consumer<($primitive, $primitive), F>;

                #[doc = "A unary [`Operator`] on `" $primitive "`."]
                pub type [<$prefix UnaryOperator>]<F> = Operator<$primitive, ($primitive,), F>;

                #[doc = "A binary [`Operator`] on `" $primitive "`."]
                pub type [<$prefix BinaryOperator>]<F> =
                    Operator<$primitive, ($primitive, $primitive), F>;
            )*
        }
    };
}

specialize!(
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
);
