//! Named callable families.
//!
//! A bare closure already satisfies [`Callable`]; the families in this module
//! give it a name and pin its argument tuple in the type, so that the arity
//! is known without looking at the body:
//!
//! | Family | Output | Invocation |
//! |--------|--------|------------|
//! | [`Function`] | any `R` | [`Function::apply`] |
//! | [`Consumer`] | `()` | [`Consumer::accept`] |
//! | [`Predicate`] | `bool` | [`Predicate::test`] |
//! | [`Operator`] | the element type `T` of its arguments | [`Operator::apply`] |
//!
//! A predicate, a consumer and an operator are each structurally a function
//! with a particular output type. [`IntoVariant`] and [`FromVariant`] relabel
//! one into the other without changing behaviour.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use super::arity::{Arguments, HomogeneousArguments};
use super::invoke::Callable;

// =============================================================================
// Variant conversion
// =============================================================================

/// Conversion into a structurally equivalent callable shape.
///
/// The conversion is a pure relabeling: the body is moved, never wrapped, and
/// every invocation of the variant returns exactly what the original would.
///
/// # Examples
///
/// ```rust
/// use callables::callable::{Function, IntoVariant, Predicate};
///
/// let is_positive = Predicate::new(|value: i32| value > 0);
/// let as_function: Function<(i32,), _> = is_positive.into_variant();
/// assert!(as_function.apply((3,)));
/// ```
pub trait IntoVariant {
    /// The equivalent shape.
    type Variant;

    /// Converts `self` into its variant.
    fn into_variant(self) -> Self::Variant;
}

/// Construction from a structurally equivalent callable shape.
///
/// # Examples
///
/// ```rust
/// use callables::callable::{FromVariant, Function, Predicate};
///
/// let is_empty = Function::new(|text: &str| text.is_empty());
/// let predicate = Predicate::from_variant(is_empty);
/// assert!(predicate.test(("",)));
/// ```
pub trait FromVariant<V>: Sized {
    /// Builds `Self` from its variant.
    fn from_variant(variant: V) -> Self;
}

macro_rules! family_boilerplate {
    ($family:ident) => {
        impl<Args, F: Clone> Clone for $family<Args, F> {
            fn clone(&self) -> Self {
                Self {
                    body: self.body.clone(),
                    arguments: PhantomData,
                }
            }
        }

        impl<Args, F: Copy> Copy for $family<Args, F> {}

        impl<Args: Arguments, F> fmt::Debug for $family<Args, F> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter
                    .debug_struct(stringify!($family))
                    .field("arity", &Args::ARITY)
                    .finish_non_exhaustive()
            }
        }
    };
}

// =============================================================================
// Function
// =============================================================================

/// A callable producing an arbitrary result.
///
/// # Examples
///
/// ```rust
/// use callables::callable::{Callable, Function};
///
/// let describe = Function::new(|name: &str, age: u32| format!("{name} is {age}"));
/// assert_eq!(describe.apply(("Ada", 36)), "Ada is 36");
/// assert_eq!(describe.arity(), 2);
/// ```
pub struct Function<Args, F> {
    body: F,
    arguments: PhantomData<fn(Args)>,
}

impl<Args, F> Function<Args, F>
where
    F: Callable<Args>,
{
    /// Wraps `body` as a function over `Args`.
    #[inline]
    pub const fn new(body: F) -> Self {
        Self {
            body,
            arguments: PhantomData,
        }
    }

    /// Applies the function.
    #[inline]
    pub fn apply(&self, arguments: Args) -> F::Output {
        self.body.invoke(arguments)
    }

    /// Returns the wrapped body.
    #[inline]
    pub fn into_inner(self) -> F {
        self.body
    }
}

impl<Args, F> Callable<Args> for Function<Args, F>
where
    F: Callable<Args>,
{
    type Output = F::Output;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        self.body.invoke(arguments)
    }
}

family_boilerplate!(Function);

// =============================================================================
// Consumer
// =============================================================================

/// A callable run for its effect, producing `()`.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use callables::callable::Consumer;
///
/// let log = RefCell::new(Vec::new());
/// let record = Consumer::new(|entry: &str| log.borrow_mut().push(entry.to_string()));
/// record.accept(("started",));
/// assert_eq!(*log.borrow(), vec!["started".to_string()]);
/// ```
pub struct Consumer<Args, F> {
    body: F,
    arguments: PhantomData<fn(Args)>,
}

impl<Args, F> Consumer<Args, F>
where
    F: Callable<Args, Output = ()>,
{
    /// Wraps `body` as a consumer over `Args`.
    #[inline]
    pub const fn new(body: F) -> Self {
        Self {
            body,
            arguments: PhantomData,
        }
    }

    /// Runs the consumer.
    #[inline]
    pub fn accept(&self, arguments: Args) {
        self.body.invoke(arguments);
    }

    /// Returns a consumer that runs `self` and then `next` with the same
    /// arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::RefCell;
    /// use callables::callable::Consumer;
    ///
    /// let seen = RefCell::new(Vec::new());
    /// let first = Consumer::new(|value: i32| seen.borrow_mut().push(value));
    /// let second = Consumer::new(|value: i32| seen.borrow_mut().push(value * 10));
    ///
    /// first.then(second).accept((4,));
    /// assert_eq!(*seen.borrow(), vec![4, 40]);
    /// ```
    #[inline]
    pub fn then<G>(self, next: G) -> Consumer<Args, Sequence<F, G>>
    where
        G: Callable<Args, Output = ()>,
        Args: Clone,
    {
        Consumer::new(Sequence {
            first: self.body,
            second: next,
        })
    }

    /// Returns the wrapped body.
    #[inline]
    pub fn into_inner(self) -> F {
        self.body
    }
}

impl<Args, F> Callable<Args> for Consumer<Args, F>
where
    F: Callable<Args, Output = ()>,
{
    type Output = ();

    #[inline]
    fn invoke(&self, arguments: Args) {
        self.body.invoke(arguments);
    }
}

family_boilerplate!(Consumer);

/// Two consumers run one after the other. Created by [`Consumer::then`].
#[derive(Debug, Clone, Copy)]
pub struct Sequence<F, G> {
    first: F,
    second: G,
}

impl<F, G, Args> Callable<Args> for Sequence<F, G>
where
    F: Callable<Args, Output = ()>,
    G: Callable<Args, Output = ()>,
    Args: Clone,
{
    type Output = ();

    #[inline]
    fn invoke(&self, arguments: Args) {
        self.first.invoke(arguments.clone());
        self.second.invoke(arguments);
    }
}

// =============================================================================
// Predicate
// =============================================================================

/// A callable producing `bool`.
///
/// Every boolean callable, named or not, takes part in the predicate algebra
/// (`and`, `or`, `negate` and their derivations); see the `predicate` module.
///
/// # Examples
///
/// ```rust
/// use callables::callable::Predicate;
///
/// let is_even = Predicate::new(|value: i32| value % 2 == 0);
/// assert!(is_even.test((10,)));
/// assert!(!is_even.test((7,)));
/// ```
pub struct Predicate<Args, F> {
    body: F,
    arguments: PhantomData<fn(Args)>,
}

impl<Args, F> Predicate<Args, F>
where
    F: Callable<Args, Output = bool>,
{
    /// Wraps `body` as a predicate over `Args`.
    #[inline]
    pub const fn new(body: F) -> Self {
        Self {
            body,
            arguments: PhantomData,
        }
    }

    /// Evaluates the predicate.
    #[inline]
    pub fn test(&self, arguments: Args) -> bool {
        self.body.invoke(arguments)
    }

    /// Returns the wrapped body.
    #[inline]
    pub fn into_inner(self) -> F {
        self.body
    }
}

impl<Args, F> Callable<Args> for Predicate<Args, F>
where
    F: Callable<Args, Output = bool>,
{
    type Output = bool;

    #[inline]
    fn invoke(&self, arguments: Args) -> bool {
        self.body.invoke(arguments)
    }
}

family_boilerplate!(Predicate);

// =============================================================================
// Operator
// =============================================================================

/// A callable whose arguments and result all share the element type `T`.
///
/// Use the [`UnaryOperator`] and [`BinaryOperator`] aliases for the common
/// arities.
///
/// # Examples
///
/// ```rust
/// use callables::callable::{BinaryOperator, UnaryOperator};
///
/// let increment: UnaryOperator<i32, _> = UnaryOperator::new(|value: i32| value + 1);
/// assert_eq!(increment.apply((41,)), 42);
///
/// let concat: BinaryOperator<String, _> =
///     BinaryOperator::new(|left: String, right: String| left + &right);
/// assert_eq!(concat.apply(("ab".into(), "cd".into())), "abcd");
/// ```
pub struct Operator<T, Args, F> {
    body: F,
    arguments: PhantomData<fn(Args) -> T>,
}

/// An [`Operator`] of arity 1.
pub type UnaryOperator<T, F> = Operator<T, (T,), F>;

/// An [`Operator`] of arity 2.
pub type BinaryOperator<T, F> = Operator<T, (T, T), F>;

impl<T, Args, F> Operator<T, Args, F>
where
    Args: HomogeneousArguments<T>,
    F: Callable<Args, Output = T>,
{
    /// Wraps `body` as an operator over `Args`.
    #[inline]
    pub const fn new(body: F) -> Self {
        Self {
            body,
            arguments: PhantomData,
        }
    }

    /// Applies the operator.
    #[inline]
    pub fn apply(&self, arguments: Args) -> T {
        self.body.invoke(arguments)
    }

    /// Returns the wrapped body.
    #[inline]
    pub fn into_inner(self) -> F {
        self.body
    }
}

impl<T, Args, F> Callable<Args> for Operator<T, Args, F>
where
    Args: HomogeneousArguments<T>,
    F: Callable<Args, Output = T>,
{
    type Output = T;

    #[inline]
    fn invoke(&self, arguments: Args) -> T {
        self.body.invoke(arguments)
    }
}

impl<T, Args, F: Clone> Clone for Operator<T, Args, F> {
    fn clone(&self) -> Self {
        Self {
            body: self.body.clone(),
            arguments: PhantomData,
        }
    }
}

impl<T, Args, F: Copy> Copy for Operator<T, Args, F> {}

impl<T, Args: Arguments, F> fmt::Debug for Operator<T, Args, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Operator")
            .field("arity", &Args::ARITY)
            .finish_non_exhaustive()
    }
}

/// Returns the unary operator that hands back its argument.
///
/// # Examples
///
/// ```rust
/// use callables::callable::identity_operator;
///
/// assert_eq!(identity_operator::<&str>().apply(("same",)), "same");
/// ```
#[inline]
pub fn identity_operator<T>() -> UnaryOperator<T, fn(T) -> T> {
    UnaryOperator::<T, fn(T) -> T>::new(super::utils::identity::<T>)
}

/// Returns the binary operator yielding the lesser of its two arguments
/// according to `compare`. Ties yield the left argument.
///
/// # Examples
///
/// ```rust
/// use callables::callable::min_by;
///
/// let shorter = min_by(|left: &&str, right: &&str| left.len().cmp(&right.len()));
/// assert_eq!(shorter.apply(("abc", "de")), "de");
/// assert_eq!(shorter.apply(("ab", "cd")), "ab");
/// ```
#[inline]
pub fn min_by<T, Compare>(compare: Compare) -> BinaryOperator<T, impl Fn(T, T) -> T>
where
    Compare: Fn(&T, &T) -> Ordering,
{
    BinaryOperator::new(move |left: T, right: T| {
        if compare(&left, &right) == Ordering::Greater {
            right
        } else {
            left
        }
    })
}

/// Returns the binary operator yielding the greater of its two arguments
/// according to `compare`. Ties yield the left argument.
///
/// # Examples
///
/// ```rust
/// use callables::callable::max_by;
///
/// let larger = max_by(|left: &i32, right: &i32| left.cmp(right));
/// assert_eq!(larger.apply((3, 9)), 9);
/// ```
#[inline]
pub fn max_by<T, Compare>(compare: Compare) -> BinaryOperator<T, impl Fn(T, T) -> T>
where
    Compare: Fn(&T, &T) -> Ordering,
{
    BinaryOperator::new(move |left: T, right: T| {
        if compare(&left, &right) == Ordering::Less {
            right
        } else {
            left
        }
    })
}

// =============================================================================
// Variant implementations
// =============================================================================

impl<Args, F> IntoVariant for Predicate<Args, F>
where
    F: Callable<Args, Output = bool>,
{
    type Variant = Function<Args, F>;

    #[inline]
    fn into_variant(self) -> Self::Variant {
        Function::new(self.body)
    }
}

impl<Args, F> FromVariant<Function<Args, F>> for Predicate<Args, F>
where
    F: Callable<Args, Output = bool>,
{
    #[inline]
    fn from_variant(variant: Function<Args, F>) -> Self {
        Self::new(variant.body)
    }
}

impl<Args, F> IntoVariant for Consumer<Args, F>
where
    F: Callable<Args, Output = ()>,
{
    type Variant = Function<Args, F>;

    #[inline]
    fn into_variant(self) -> Self::Variant {
        Function::new(self.body)
    }
}

impl<Args, F> FromVariant<Function<Args, F>> for Consumer<Args, F>
where
    F: Callable<Args, Output = ()>,
{
    #[inline]
    fn from_variant(variant: Function<Args, F>) -> Self {
        Self::new(variant.body)
    }
}

impl<T, Args, F> IntoVariant for Operator<T, Args, F>
where
    Args: HomogeneousArguments<T>,
    F: Callable<Args, Output = T>,
{
    type Variant = Function<Args, F>;

    #[inline]
    fn into_variant(self) -> Self::Variant {
        Function::new(self.body)
    }
}

impl<T, Args, F> FromVariant<Function<Args, F>> for Operator<T, Args, F>
where
    Args: HomogeneousArguments<T>,
    F: Callable<Args, Output = T>,
{
    #[inline]
    fn from_variant(variant: Function<Args, F>) -> Self {
        Self::new(variant.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_shows_arity() {
        let sum = Function::new(|left: i32, right: i32| left + right);
        assert_eq!(format!("{sum:?}"), "Function { arity: 2, .. }");
    }

    #[test]
    fn test_nullary_predicate() {
        let always = Predicate::new(|| true);
        assert!(always.test(()));
        assert_eq!(always.arity(), 0);
    }

    #[test]
    fn test_operator_round_trips_through_function() {
        let negate: UnaryOperator<i64, _> = UnaryOperator::new(|value: i64| -value);
        let function = negate.into_variant();
        let restored: UnaryOperator<i64, _> = Operator::from_variant(function);
        assert_eq!(restored.apply((5,)), -5);
    }

    #[test]
    fn test_max_by_prefers_left_on_tie() {
        let by_length = max_by(|left: &String, right: &String| left.len().cmp(&right.len()));
        assert_eq!(by_length.apply(("ab".to_string(), "cd".to_string())), "ab");
    }
}
