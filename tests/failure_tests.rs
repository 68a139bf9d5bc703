#![cfg(feature = "failure")]
//! Tests for recovery wrappers.
//!
//! ## Handle/Swallow Laws
//! - **Handle on fault**: `f(x) == Err(e)` implies `f.handle(h)(x) == h(x, e)`
//! - **Swallow on fault**: `f(x) == Err(e)` implies `f.swallow()(x) == Default::default()`
//! - **Transparency**: `f(x) == Ok(v)` implies `f.handle(h)(x) == f.swallow()(x) == v`

use callables::callable::{Callable, Consumer, Function, ResultChainable};
use callables::failure::Fallible;
use proptest::prelude::*;
use rstest::rstest;
use std::cell::Cell;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
struct NegativeSum {
    sum: i64,
}

impl fmt::Display for NegativeSum {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "sum {} is negative", self.sum)
    }
}

impl std::error::Error for NegativeSum {}

fn checked_sum(left: i64, right: i64) -> Result<i64, NegativeSum> {
    let sum = left + right;
    if sum < 0 { Err(NegativeSum { sum }) } else { Ok(sum) }
}

// =============================================================================
// Handle
// =============================================================================

#[rstest]
#[case(-3, -4, 0)]
#[case(3, 4, 7)]
#[case(0, 0, 0)]
#[case(-1, 1, 0)]
fn test_handle_sum_scenario(#[case] left: i64, #[case] right: i64, #[case] expected: i64) {
    let safe_sum = checked_sum.handle(|_arguments: (i64, i64), _fault: NegativeSum| 0);
    assert_eq!(safe_sum.invoke((left, right)), expected);
}

#[rstest]
fn test_handler_receives_arguments_and_fault() {
    let seen = Cell::new(None);
    let recorded = checked_sum.handle(|arguments: (i64, i64), fault: NegativeSum| {
        seen.set(Some((arguments, fault.sum)));
        -1
    });

    assert_eq!(recorded.invoke((-10, 2)), -1);
    assert_eq!(seen.get(), Some(((-10, 2), -8)));
}

#[rstest]
fn test_handler_not_called_on_success() {
    let calls = Cell::new(0);
    let counted = checked_sum.handle(|_arguments: (i64, i64), _fault: NegativeSum| {
        calls.set(calls.get() + 1);
        0
    });

    assert_eq!(counted.invoke((1, 2)), 3);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn test_handled_is_retried_with_faulting_input() {
    let safe_sum = checked_sum.handle(|(left, right): (i64, i64), _fault: NegativeSum| {
        left.abs() + right.abs()
    });
    assert_eq!(safe_sum.invoke((-3, -4)), 7);
    assert_eq!(safe_sum.invoke((-3, -4)), 7);
}

#[rstest]
fn test_handle_on_nullary_callable() {
    let failing = || Err::<u8, &str>("unavailable");
    let recovered =
        failing.handle(|(): (), fault: &str| u8::try_from(fault.len()).unwrap_or(u8::MAX));
    assert_eq!(recovered.invoke(()), 11);
    assert_eq!(recovered.arity(), 0);
}

// =============================================================================
// Swallow
// =============================================================================

#[rstest]
fn test_swallow_numeric_default_is_zero() {
    let safe_sum = checked_sum.swallow();
    assert_eq!(safe_sum.invoke((-3, -4)), 0);
    assert_eq!(safe_sum.invoke((3, 4)), 7);
}

#[rstest]
fn test_swallow_boolean_default_is_false() {
    let strict_parse = |text: &str| text.parse::<bool>();
    let lenient = strict_parse.swallow();
    assert!(lenient.invoke(("true",)));
    assert!(!lenient.invoke(("yes",)));
}

#[rstest]
fn test_swallow_reference_default_is_none() {
    let lookup = |key: &str| {
        if key.is_empty() {
            Err("empty key")
        } else {
            Ok(Some(key.to_uppercase()))
        }
    };
    let lenient = lookup.swallow();
    assert_eq!(lenient.invoke(("id",)), Some("ID".to_string()));
    assert_eq!(lenient.invoke(("",)), None);
}

#[rstest]
fn test_swallow_consumer_is_no_op() {
    let total = Cell::new(0_u32);
    let add = |amount: u32| -> Result<(), String> {
        if amount > 100 {
            return Err(format!("{amount} is too large"));
        }
        total.set(total.get() + amount);
        Ok(())
    };

    let lenient = Consumer::new(add.swallow());
    lenient.accept((40,));
    lenient.accept((500,));
    lenient.accept((2,));

    assert_eq!(total.get(), 42);
}

// =============================================================================
// Catch boundary
// =============================================================================

#[rstest]
fn test_and_then_try_before_handle_is_caught() {
    let halve = |value: i64| {
        if value % 2 == 0 { Ok(value / 2) } else { Err(NegativeSum { sum: value }) }
    };
    let caught = checked_sum
        .and_then_try(halve)
        .handle(|_arguments: (i64, i64), fault: NegativeSum| fault.sum * 100);

    assert_eq!(caught.invoke((2, 2)), 2);
    assert_eq!(caught.invoke((2, 3)), 500);
    assert_eq!(caught.invoke((-2, -3)), -500);
}

#[rstest]
fn test_and_then_after_handle_is_not_caught() {
    let reject_zero = |value: i64| if value == 0 { Err("zero") } else { Ok(value) };
    let outside = checked_sum
        .handle(|_arguments: (i64, i64), _fault: NegativeSum| 0)
        .and_then(reject_zero);

    assert_eq!(outside.invoke((-5, 1)), Err("zero"));
    assert_eq!(outside.invoke((5, 1)), Ok(6));
}

#[rstest]
fn test_map_value_inside_boundary() {
    let described = checked_sum
        .map_value(|sum: i64| format!("total {sum}"))
        .swallow();

    assert_eq!(described.invoke((1, 1)), "total 2");
    assert_eq!(described.invoke((-1, -1)), "");
}

#[rstest]
fn test_map_fault_rewrites_error_only() {
    let coded = checked_sum.map_fault(|fault: NegativeSum| fault.to_string());
    assert_eq!(coded.invoke((1, 1)), Ok(2));
    assert_eq!(coded.invoke((-1, -1)), Err("sum -2 is negative".to_string()));
}

#[rstest]
fn test_lift_reports_fault_as_none() {
    let lifted = Function::new(checked_sum).lift();
    assert_eq!(lifted.invoke((4, 4)), Some(8));
    assert_eq!(lifted.invoke((-4, 0)), None);
}

// =============================================================================
// Laws
// =============================================================================

proptest! {
    /// Handle on fault equals the handler applied to the input and the fault
    #[test]
    fn prop_handle_on_fault(left in -1000i64..0, right in -1000i64..0) {
        let handler = |(a, b): (i64, i64), fault: NegativeSum| a * b + fault.sum;
        let safe_sum = checked_sum.handle(handler);

        let fault = checked_sum(left, right).unwrap_err();
        prop_assert_eq!(safe_sum.invoke((left, right)), handler((left, right), fault));
    }

    /// Swallow on fault equals the default value
    #[test]
    fn prop_swallow_on_fault(left in -1000i64..0, right in -1000i64..0) {
        prop_assert_eq!(checked_sum.swallow().invoke((left, right)), i64::default());
    }

    /// Handle and swallow are transparent on success
    #[test]
    fn prop_transparent_on_success(left in 0i64..1000, right in 0i64..1000) {
        let expected = checked_sum(left, right).unwrap();
        let handled = checked_sum.handle(|_arguments: (i64, i64), _fault: NegativeSum| -1);

        prop_assert_eq!(handled.invoke((left, right)), expected);
        prop_assert_eq!(checked_sum.swallow().invoke((left, right)), expected);
    }

    /// Handle and swallow are total over the whole input domain
    #[test]
    fn prop_handle_is_total(left in -1000i64..1000, right in -1000i64..1000) {
        let handled = checked_sum.handle(|_arguments: (i64, i64), _fault: NegativeSum| -1);
        let result = handled.invoke((left, right));
        prop_assert!(result >= -1);
    }
}
