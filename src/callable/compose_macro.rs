//! The `compose!` and `pipe!` macros.

/// Composes unary callables from right to left.
///
/// `compose!(f, g, h)` is a callable equivalent to `f(g(h(x)))`. Every
/// argument may be a closure, a function item or any unary
/// [`Callable`](crate::callable::Callable), including other compositions.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Examples
///
/// ```
/// use callables::compose;
/// use callables::callable::Callable;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // add_one(double(square(3))) = add_one(double(9)) = add_one(18) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed.invoke((3,)), 19);
/// ```
///
/// ## Type conversion
///
/// ```
/// use callables::compose;
/// use callables::callable::Callable;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let composed = compose!(get_length, to_string);
/// assert_eq!(composed.invoke((12345,)), 5);
/// ```
#[macro_export]
macro_rules! compose {
    ($callable:expr $(,)?) => {
        $callable
    };

    ($outer_callable:expr, $($remaining_callables:expr),+ $(,)?) => {
        $crate::callable::InputChainable::compose(
            $outer_callable,
            $crate::compose!($($remaining_callables),+),
        )
    };
}

/// Feeds a value through unary callables from left to right.
///
/// `pipe!(x, f, g, h)` evaluates to `h(g(f(x)))`.
///
/// # Examples
///
/// ```
/// use callables::pipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(pipe!(5, double, add_one), 11);
/// assert_eq!(pipe!(5), 5);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $callable:expr $(, $remaining_callables:expr)* $(,)?) => {
        $crate::pipe!(
            $crate::callable::Callable::invoke(&$callable, ($value,))
            $(, $remaining_callables)*
        )
    };
}
