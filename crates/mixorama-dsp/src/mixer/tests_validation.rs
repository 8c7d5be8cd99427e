//! Tests for the validation rules shared by every strategy.

use super::*;
use crate::MixError;

#[test]
fn test_empty_input_all_strategies() {
    let empty: [Vec<i16>; 0] = [];
    assert!(matches!(linear_sum(&empty), Err(MixError::EmptyInput)));
    assert!(matches!(weighted_sum(&[], &empty), Err(MixError::EmptyInput)));
    assert!(matches!(rms_mix(&empty), Err(MixError::EmptyInput)));
}

#[test]
fn test_length_mismatch_all_strategies() {
    let a: Vec<i16> = vec![1, 2, 3];
    let b: Vec<i16> = vec![1, 2];

    for result in [
        linear_sum(&[&a, &b]),
        weighted_sum(&[0.5, 0.5], &[&a, &b]),
        rms_mix(&[&a, &b]),
    ] {
        match result {
            Err(MixError::LengthMismatch {
                index,
                expected,
                found,
            }) => {
                assert_eq!(index, 1);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected LengthMismatch, got {:?}", other),
        }
    }
}

#[test]
fn test_length_mismatch_longer_later_input() {
    let a: Vec<i16> = vec![1, 2];
    let b: Vec<i16> = vec![1, 2, 3];
    assert!(matches!(
        linear_sum(&[&a, &b]),
        Err(MixError::LengthMismatch { .. })
    ));
}

#[test]
fn test_length_mismatch_reports_first_offender() {
    let inputs = [vec![0i16; 4], vec![0; 4], vec![0; 3], vec![0; 1]];
    match rms_mix(&inputs) {
        Err(MixError::LengthMismatch { index, found, .. }) => {
            assert_eq!(index, 2);
            assert_eq!(found, 3);
        }
        other => panic!("expected LengthMismatch, got {:?}", other),
    }
}

#[test]
fn test_length_mismatch_with_empty_first_input() {
    let a: Vec<i16> = Vec::new();
    let b: Vec<i16> = vec![1, 2];
    assert!(matches!(
        linear_sum(&[&a, &b]),
        Err(MixError::LengthMismatch { .. })
    ));
}
