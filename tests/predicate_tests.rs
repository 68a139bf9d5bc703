#![cfg(feature = "predicate")]
//! Example-based tests for the predicate algebra.

use callables::callable::{Callable, Predicate};
use callables::predicate::{
    PredicateAlgebra, always_false, always_true, is_equal, not,
};
use rstest::rstest;
use std::cell::RefCell;

fn is_even(value: i32) -> bool {
    value % 2 == 0
}

fn has_digit_five(value: i32) -> bool {
    value.to_string().contains('5')
}

// =============================================================================
// Scenario
// =============================================================================

#[rstest]
fn test_even_and_digit_five_at_ten() {
    assert!(!is_even.and(has_digit_five).test((10,)));
    assert!(is_even.or(has_digit_five).test((10,)));
    assert!(is_even.xor(has_digit_five).test((10,)));
    assert!(is_even.nand(has_digit_five).test((10,)));
}

#[rstest]
#[case(10, false, true, true, true, false, false, true)]
#[case(15, false, true, true, true, false, false, false)]
#[case(50, true, true, false, false, false, true, true)]
#[case(7, false, false, false, true, true, true, true)]
fn test_every_combinator_truth_table(
    #[case] input: i32,
    #[case] and: bool,
    #[case] or: bool,
    #[case] xor: bool,
    #[case] nand: bool,
    #[case] nor: bool,
    #[case] xnor: bool,
    #[case] or_not: bool,
) {
    assert_eq!(is_even.and(has_digit_five).test((input,)), and);
    assert_eq!(is_even.or(has_digit_five).test((input,)), or);
    assert_eq!(is_even.xor(has_digit_five).test((input,)), xor);
    assert_eq!(is_even.nand(has_digit_five).test((input,)), nand);
    assert_eq!(is_even.nor(has_digit_five).test((input,)), nor);
    assert_eq!(is_even.xnor(has_digit_five).test((input,)), xnor);
    assert_eq!(is_even.or_not(has_digit_five).test((input,)), or_not);
}

#[rstest]
#[case(10, true)]
#[case(15, false)]
#[case(50, false)]
#[case(7, false)]
fn test_sub(#[case] input: i32, #[case] expected: bool) {
    assert_eq!(is_even.sub(has_digit_five).test((input,)), expected);
}

// =============================================================================
// Evaluation order
// =============================================================================

fn recording<'a>(
    log: &'a RefCell<Vec<&'static str>>,
    name: &'static str,
    result: bool,
) -> impl Fn(u8) -> bool + Clone + 'a {
    move |_: u8| {
        log.borrow_mut().push(name);
        result
    }
}

#[rstest]
#[case(true, vec!["left", "right"])]
#[case(false, vec!["left"])]
fn test_and_short_circuits_on_false(#[case] left: bool, #[case] expected: Vec<&'static str>) {
    let log = RefCell::new(Vec::new());
    let combined = recording(&log, "left", left).and(recording(&log, "right", true));

    combined.test((0,));

    assert_eq!(*log.borrow(), expected);
}

#[rstest]
#[case(false, vec!["left", "right"])]
#[case(true, vec!["left"])]
fn test_or_short_circuits_on_true(#[case] left: bool, #[case] expected: Vec<&'static str>) {
    let log = RefCell::new(Vec::new());
    let combined = recording(&log, "left", left).or(recording(&log, "right", true));

    combined.test((0,));

    assert_eq!(*log.borrow(), expected);
}

#[rstest]
fn test_sub_evaluates_right_when_left_holds() {
    let log = RefCell::new(Vec::new());
    let combined = recording(&log, "left", true).sub(recording(&log, "right", false));

    assert!(combined.test((0,)));
    assert_eq!(*log.borrow(), vec!["left", "right"]);
}

#[rstest]
fn test_sub_evaluates_right_once_when_left_fails() {
    let log = RefCell::new(Vec::new());
    let combined = recording(&log, "left", false).sub(recording(&log, "right", true));

    assert!(!combined.test((0,)));
    assert_eq!(*log.borrow(), vec!["left", "right"]);
}

#[rstest]
fn test_xor_runs_both_subtractions_when_first_fails() {
    let log = RefCell::new(Vec::new());
    let combined = recording(&log, "left", true).xor(recording(&log, "right", true));

    assert!(!combined.test((0,)));
    assert_eq!(*log.borrow(), vec!["left", "right", "right", "left"]);
}

// =============================================================================
// Shapes
// =============================================================================

#[rstest]
fn test_binary_predicates_combine() {
    let ascending = |left: i32, right: i32| left < right;
    let close = |left: i32, right: i32| (left - right).abs() <= 2;

    let nearly_ascending = ascending.and(close);
    assert!(nearly_ascending.test((1, 3)));
    assert!(!nearly_ascending.test((1, 4)));
    assert!(!nearly_ascending.test((3, 1)));
}

#[rstest]
fn test_nullary_predicates_combine() {
    let feature_enabled = || true;
    let maintenance = || false;

    assert!(feature_enabled.sub(maintenance).test(()));
    assert!(!feature_enabled.nand(always_true()).test(()));
}

#[rstest]
fn test_family_predicates_combine() {
    let is_vowel = Predicate::new(|letter: char| "aeiou".contains(letter));
    let is_consonant = is_vowel.negate().and(|letter: char| letter.is_ascii_lowercase());

    assert!(is_consonant.test(('k',)));
    assert!(!is_consonant.test(('e',)));
    assert!(!is_consonant.test(('K',)));
}

#[rstest]
fn test_constant_predicates_are_identities() {
    let is_positive = |value: i64| value > 0;
    assert!(is_positive.and(always_true()).test((5,)));
    assert!(!is_positive.and(always_true()).test((-5,)));
    assert!(is_positive.or(always_false()).test((5,)));
    assert!(!is_positive.or(always_false()).test((-5,)));
}

#[rstest]
fn test_free_function_not_and_is_equal() {
    let not_zero = not(is_equal(0_u64));
    assert!(not_zero.invoke((3,)));
    assert!(!not_zero.invoke((0,)));
}

#[rstest]
fn test_predicate_arity_is_operand_arity() {
    let ternary = |a: u8, b: u8, c: u8| a < b && b < c;
    assert_eq!(ternary.xor(ternary).arity(), 3);
}
