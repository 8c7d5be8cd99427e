//! Tests for RMS mixing.

use pretty_assertions::assert_eq;

use super::*;

fn wave(value: i16, len: usize) -> Vec<i16> {
    vec![value; len]
}

#[test]
fn test_rms_mix_two_inputs() {
    // sqrt((1000^2 + 2000^2) / 2) = sqrt(2_500_000) = 1581.14
    let result = rms_mix(&[wave(1000, 10), wave(2000, 10)]).unwrap();
    assert_eq!(result, wave(1581, 10));
}

#[test]
fn test_rms_mix_single_input_is_magnitude() {
    let result = rms_mix(&[vec![100i16, -100, 0, -32768]]).unwrap();
    assert_eq!(result, vec![100, 100, 0, i16::MAX]);
}

#[test]
fn test_rms_mix_is_never_negative() {
    let result = rms_mix(&[wave(-5000, 6), wave(-3000, 6)]).unwrap();
    assert!(result.iter().all(|&s| s >= 0));
}

#[test]
fn test_rms_mix_full_scale_saturates() {
    let result = rms_mix(&[wave(i16::MIN, 3), wave(i16::MIN, 3)]).unwrap();
    assert_eq!(result, wave(i16::MAX, 3));
}

#[test]
fn test_rms_mix_silence() {
    let result = rms_mix(&[wave(0, 4), wave(0, 4), wave(0, 4)]).unwrap();
    assert_eq!(result, wave(0, 4));
}

#[test]
fn test_rms_mix_rounds() {
    // sqrt((3^2 + 4^2) / 2) = sqrt(12.5) = 3.54 -> 4
    let result = rms_mix(&[vec![3i16], vec![4i16]]).unwrap();
    assert_eq!(result, vec![4]);
}
