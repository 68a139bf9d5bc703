#![cfg(feature = "boxing")]
//! Tests for primitive/boxed conversion.
//!
//! The round-trip law is checked for every primitive element type:
//!
//! ```text
//! f.boxed().unboxed()(x) == f(x)
//! g.unboxed().boxed()(Box::new(x)) == g(Box::new(x))
//! ```

use callables::boxing::{BoxArguments, Boxing, UnboxArguments, Unboxing};
use callables::callable::{Callable, Function, Predicate, ResultChainable};
use proptest::prelude::*;
use rstest::rstest;

macro_rules! round_trip_properties {
    ($($name:ident: $primitive:ty => $strategy:expr, $body:expr;)*) => {
        proptest! {
            $(
                #[test]
                fn $name(value in $strategy) {
                    let function = $body;
                    let restored = function.boxed().unboxed();
                    prop_assert_eq!(restored.invoke((value,)), function(value));

                    let boxed_function = |boxed: Box<$primitive>| Box::new(function(*boxed));
                    let reboxed = boxed_function.unboxed().boxed();
                    prop_assert_eq!(
                        reboxed.invoke((Box::new(value),)),
                        boxed_function(Box::new(value))
                    );
                }
            )*
        }
    };
}

round_trip_properties! {
    prop_round_trip_bool: bool => any::<bool>(), |value: bool| !value;
    prop_round_trip_char: char => any::<char>(), |value: char| value.is_alphabetic();
    prop_round_trip_i8: i8 => any::<i8>(), |value: i8| value.wrapping_neg();
    prop_round_trip_i16: i16 => any::<i16>(), |value: i16| value.rotate_left(3);
    prop_round_trip_i32: i32 => any::<i32>(), |value: i32| value.wrapping_mul(31);
    prop_round_trip_i64: i64 => any::<i64>(), |value: i64| value.signum();
    prop_round_trip_i128: i128 => any::<i128>(), |value: i128| value.wrapping_add(1);
    prop_round_trip_isize: isize => any::<isize>(), |value: isize| value.wrapping_abs();
    prop_round_trip_u8: u8 => any::<u8>(), |value: u8| value.count_ones();
    prop_round_trip_u16: u16 => any::<u16>(), |value: u16| value.swap_bytes();
    prop_round_trip_u32: u32 => any::<u32>(), |value: u32| value.leading_zeros();
    prop_round_trip_u64: u64 => any::<u64>(), |value: u64| value % 7 == 0;
    prop_round_trip_u128: u128 => any::<u128>(), |value: u128| value.wrapping_sub(1);
    prop_round_trip_usize: usize => any::<usize>(), |value: usize| value.is_power_of_two();
    prop_round_trip_f32: f32 => -1.0e6_f32..1.0e6_f32, |value: f32| value.to_bits();
    prop_round_trip_f64: f64 => -1.0e12_f64..1.0e12_f64, |value: f64| value.floor() as i64;
}

proptest! {
    /// Binary round trip: f.boxed().unboxed()(a, b) == f(a, b)
    #[test]
    fn prop_binary_round_trip(a in any::<i32>(), b in any::<i32>()) {
        let function = |left: i32, right: i32| left.wrapping_sub(right);
        let restored = function.boxed().unboxed();
        prop_assert_eq!(restored.invoke((a, b)), function(a, b));
    }

    /// Boxing the argument tuple and unboxing it again is the identity
    #[test]
    fn prop_box_all_unbox_all(a in any::<u8>(), b in any::<char>(), c in any::<bool>()) {
        prop_assert_eq!((a, b, c).box_all().unbox_all(), (a, b, c));
    }
}

#[rstest]
fn test_box_input_only_for_predicates() {
    let is_even = Predicate::new(|value: u32| value % 2 == 0);
    let boxed = is_even.box_input();
    assert!(boxed.invoke((Box::new(4),)));
    assert!(!boxed.invoke((Box::new(5),)));
}

#[rstest]
fn test_box_input_with_reference_result() {
    let describe = Function::new(|value: u8| format!("byte {value}"));
    let boxed = describe.box_input();
    assert_eq!(boxed.invoke((Box::new(7),)), "byte 7");
}

#[rstest]
fn test_box_result_only() {
    let length = |text: &str| text.len();
    let boxed = length.box_result();
    assert_eq!(boxed.invoke(("four",)), Box::new(4));
}

#[rstest]
fn test_unbox_result_only() {
    let boxed_length = |text: String| Box::new(text.len());
    let unboxed = boxed_length.unbox_result();
    assert_eq!(unboxed.invoke(("four".to_string(),)), 4);
}

#[rstest]
fn test_boxing_composes_with_chaining() {
    let double = |value: i64| value * 2;
    let boxed = double.boxed().and_then(|result: Box<i64>| *result + 1);
    assert_eq!(boxed.invoke((Box::new(20),)), 41);
}

#[rstest]
fn test_boxing_preserves_arity() {
    let ternary = |a: u8, b: u8, c: u8| a.max(b).max(c);
    assert_eq!(ternary.boxed().arity(), 3);
    assert_eq!(ternary.boxed().unboxed().arity(), 3);
}
