//! Tests for weighted summation.

use pretty_assertions::assert_eq;

use super::*;
use crate::MixError;

fn wave(value: i16, len: usize) -> Vec<i16> {
    vec![value; len]
}

#[test]
fn test_weighted_sum_equal_weights() {
    let result = weighted_sum(&[0.5, 0.5], &[wave(1000, 10), wave(2000, 10)]).unwrap();
    assert_eq!(result, wave(1500, 10));
}

#[test]
fn test_weighted_sum_rounds_to_nearest() {
    // 0.5 * 1 + 0.5 * 2 = 1.5 -> 2
    let result = weighted_sum(&[0.5, 0.5], &[vec![1i16, -1], vec![2i16, -2]]).unwrap();
    assert_eq!(result, vec![2, -2]);
}

#[test]
fn test_weighted_sum_weights_follow_input_order() {
    let a = wave(1000, 3);
    let b = wave(2000, 3);
    let ab = weighted_sum(&[1.0, 0.0], &[&a, &b]).unwrap();
    let ba = weighted_sum(&[1.0, 0.0], &[&b, &a]).unwrap();
    assert_eq!(ab, a);
    assert_eq!(ba, b);
}

#[test]
fn test_weighted_sum_negative_weight_inverts() {
    let result = weighted_sum(&[-1.0], &[vec![100i16, -100, 0]]).unwrap();
    assert_eq!(result, vec![-100, 100, 0]);
}

#[test]
fn test_weighted_sum_saturates() {
    let result = weighted_sum(&[2.0, 2.0], &[wave(20000, 2), wave(20000, 2)]).unwrap();
    assert_eq!(result, wave(i16::MAX, 2));

    let result = weighted_sum(&[2.0, 2.0], &[wave(-20000, 2), wave(-20000, 2)]).unwrap();
    assert_eq!(result, wave(i16::MIN, 2));
}

#[test]
fn test_weighted_sum_three_inputs() {
    let result = weighted_sum(
        &[0.25, 0.25, 0.5],
        &[wave(400, 5), wave(800, 5), wave(-1000, 5)],
    )
    .unwrap();
    // 100 + 200 - 500
    assert_eq!(result, wave(-200, 5));
}

#[test]
fn test_weighted_sum_weight_count_mismatch() {
    let err = weighted_sum(&[0.5], &[wave(1000, 10), wave(1000, 10)]).unwrap_err();
    assert!(matches!(
        err,
        MixError::WeightCountMismatch {
            weights: 1,
            inputs: 2
        }
    ));
}

#[test]
fn test_weighted_sum_weight_check_precedes_empty_check() {
    let empty: [Vec<i16>; 0] = [];
    let err = weighted_sum(&[1.0], &empty).unwrap_err();
    assert!(matches!(err, MixError::WeightCountMismatch { .. }));

    let err = weighted_sum(&[], &empty).unwrap_err();
    assert!(matches!(err, MixError::EmptyInput));
}
