//! The `PredicateAlgebra` trait and the derived combinator types.

use super::combinator::{And, Not, Or};
use crate::callable::Callable;

/// `left ∧ ¬right`. Created by [`PredicateAlgebra::sub`].
///
/// Unlike [`And`], both sides are always evaluated: `left` first, then the
/// negation of `right`, and only then the conjunction.
#[derive(Debug, Clone, Copy)]
pub struct Sub<P, Q> {
    left: P,
    excluded: Not<Q>,
}

impl<P, Q> Sub<P, Q> {
    /// Builds `left ∧ ¬right`.
    #[inline]
    pub const fn new(left: P, right: Q) -> Self {
        Self {
            left,
            excluded: Not::new(right),
        }
    }
}

impl<P, Q, Args> Callable<Args> for Sub<P, Q>
where
    P: Callable<Args, Output = bool>,
    Q: Callable<Args, Output = bool>,
    Args: Clone,
{
    type Output = bool;

    #[inline]
    fn invoke(&self, arguments: Args) -> bool {
        let holds = self.left.invoke(arguments.clone());
        let excluded = self.excluded.invoke(arguments);
        holds && excluded
    }
}

/// `(left ∧ ¬right) ∨ (right ∧ ¬left)`. Created by [`PredicateAlgebra::xor`].
pub type Xor<P, Q> = Or<Sub<P, Q>, Sub<Q, P>>;

/// `¬(left ∧ right)`. Created by [`PredicateAlgebra::nand`].
pub type Nand<P, Q> = Not<And<P, Q>>;

/// `¬(left ∨ right)`. Created by [`PredicateAlgebra::nor`].
pub type Nor<P, Q> = Not<Or<P, Q>>;

/// `¬xor(left, right)`. Created by [`PredicateAlgebra::xnor`].
pub type Xnor<P, Q> = Not<Xor<P, Q>>;

/// `left ∨ ¬right`. Created by [`PredicateAlgebra::or_not`].
pub type OrNot<P, Q> = Or<P, Not<Q>>;

/// Boolean algebra over predicates sharing one argument tuple.
///
/// Implemented for every [`Callable`] returning `bool`. [`negate`], [`and`]
/// and [`or`] are the primitives; every other combinator is built from them
/// and nothing else, and its result type spells out that construction.
///
/// [`negate`]: PredicateAlgebra::negate
/// [`and`]: PredicateAlgebra::and
/// [`or`]: PredicateAlgebra::or
///
/// # Evaluation order
///
/// `and` and `or` evaluate `self` before `other` and skip `other` once `self`
/// decides the result. The derived combinators evaluate exactly what their
/// construction evaluates. `a.sub(b)` computes `¬b` before the conjunction,
/// so it evaluates `a` and then `b` exactly once each, whatever `a` returns.
/// `a.xor(b)` may evaluate each side twice.
///
/// # Laws
///
/// The primitives are fixed to `!`, `&&` and `||`, so for all predicates
/// `a`, `b`, `c` and arguments `x`:
///
/// - **Double Negation**: `a.negate().negate()(x) == a(x)`
/// - **Commutativity**: `a.and(b)(x) == b.and(a)(x)`, `a.or(b)(x) == b.or(a)(x)`
/// - **De Morgan**: `a.and(b).negate()(x) == a.negate().or(b.negate())(x)`
/// - **Distributivity**: `a.and(b.or(c))(x) == a.and(b).or(a.and(c))(x)`
/// - **Exclusive Or**: `a.xor(b)(x) == (a(x) != b(x))`
///
/// # Examples
///
/// ```rust
/// use callables::predicate::PredicateAlgebra;
///
/// let is_even = |value: i32| value % 2 == 0;
/// let has_digit_five = |value: i32| value.to_string().contains('5');
///
/// assert!(!is_even.and(has_digit_five).test((10,)));
/// assert!(is_even.or(has_digit_five).test((10,)));
/// assert!(is_even.xor(has_digit_five).test((10,)));
/// assert!(is_even.nand(has_digit_five).test((10,)));
/// ```
pub trait PredicateAlgebra<Args>: Callable<Args, Output = bool> + Sized {
    /// Evaluates the predicate.
    #[inline]
    fn test(&self, arguments: Args) -> bool {
        self.invoke(arguments)
    }

    /// Returns the negation of `self`.
    #[inline]
    fn negate(self) -> Not<Self> {
        Not::new(self)
    }

    /// Returns a predicate holding where both `self` and `other` hold.
    #[inline]
    fn and<Q>(self, other: Q) -> And<Self, Q>
    where
        Q: Callable<Args, Output = bool>,
        Args: Clone,
    {
        And::new(self, other)
    }

    /// Returns a predicate holding where `self` or `other` holds.
    #[inline]
    fn or<Q>(self, other: Q) -> Or<Self, Q>
    where
        Q: Callable<Args, Output = bool>,
        Args: Clone,
    {
        Or::new(self, other)
    }

    /// Returns a predicate holding where `self` holds and `other` does not.
    #[inline]
    fn sub<Q>(self, other: Q) -> Sub<Self, Q>
    where
        Q: Callable<Args, Output = bool>,
        Args: Clone,
    {
        Sub::new(self, other)
    }

    /// Returns a predicate holding where exactly one of `self` and `other`
    /// holds.
    #[inline]
    fn xor<Q>(self, other: Q) -> Xor<Self, Q>
    where
        Self: Clone,
        Q: Callable<Args, Output = bool> + Clone,
        Args: Clone,
    {
        Or::new(self.clone().sub(other.clone()), other.sub(self))
    }

    /// Returns the negation of [`and`](PredicateAlgebra::and).
    #[inline]
    fn nand<Q>(self, other: Q) -> Nand<Self, Q>
    where
        Q: Callable<Args, Output = bool>,
        Args: Clone,
    {
        Not::new(self.and(other))
    }

    /// Returns the negation of [`or`](PredicateAlgebra::or).
    #[inline]
    fn nor<Q>(self, other: Q) -> Nor<Self, Q>
    where
        Q: Callable<Args, Output = bool>,
        Args: Clone,
    {
        Not::new(self.or(other))
    }

    /// Returns the negation of [`xor`](PredicateAlgebra::xor).
    #[inline]
    fn xnor<Q>(self, other: Q) -> Xnor<Self, Q>
    where
        Self: Clone,
        Q: Callable<Args, Output = bool> + Clone,
        Args: Clone,
    {
        Not::new(self.xor(other))
    }

    /// Returns a predicate holding where `self` holds or `other` does not.
    #[inline]
    fn or_not<Q>(self, other: Q) -> OrNot<Self, Q>
    where
        Q: Callable<Args, Output = bool>,
        Args: Clone,
    {
        self.or(other.negate())
    }
}

impl<P, Args> PredicateAlgebra<Args> for P where P: Callable<Args, Output = bool> {}
