//! Tests for linear summation.

use pretty_assertions::assert_eq;

use super::*;

fn wave(value: i16, len: usize) -> Vec<i16> {
    vec![value; len]
}

#[test]
fn test_linear_sum_two_inputs() {
    let result = linear_sum(&[wave(1000, 10), wave(2000, 10)]).unwrap();
    assert_eq!(result, wave(3000, 10));
}

#[test]
fn test_linear_sum_single_input_is_identity() {
    let input: Vec<i16> = vec![1, -2, 300, -32768, 32767];
    let result = linear_sum(&[input.clone()]).unwrap();
    assert_eq!(result, input);
}

#[test]
fn test_linear_sum_per_index() {
    let a: Vec<i16> = vec![100, -200, 300, 0];
    let b: Vec<i16> = vec![-100, -200, 5, 7];
    let result = linear_sum(&[&a[..], &b[..]]).unwrap();
    assert_eq!(result, vec![0, -400, 305, 7]);
}

#[test]
fn test_linear_sum_saturates_high() {
    let result = linear_sum(&[wave(30000, 4), wave(30000, 4)]).unwrap();
    assert_eq!(result, wave(i16::MAX, 4));
}

#[test]
fn test_linear_sum_saturates_low() {
    let result = linear_sum(&[wave(-30000, 4), wave(-30000, 4)]).unwrap();
    assert_eq!(result, wave(i16::MIN, 4));
}

#[test]
fn test_linear_sum_many_inputs_does_not_overflow() {
    let inputs: Vec<Vec<i16>> = (0..100_000).map(|_| wave(i16::MAX, 2)).collect();
    let result = linear_sum(&inputs).unwrap();
    assert_eq!(result, wave(i16::MAX, 2));
}

#[test]
fn test_linear_sum_cancellation() {
    let result = linear_sum(&[wave(12345, 8), wave(-12345, 8)]).unwrap();
    assert!(result.iter().all(|&s| s == 0));
}

#[test]
fn test_linear_sum_empty_waveforms() {
    let result = linear_sum(&[Vec::<i16>::new(), Vec::new()]).unwrap();
    assert!(result.is_empty());
}
