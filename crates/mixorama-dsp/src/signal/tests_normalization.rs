//! Tests for peak detection and normalization.

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_peak_amplitude_basic() {
    assert_eq!(peak_amplitude(&[100, -200, 50]), 200);
}

#[test]
fn test_peak_amplitude_empty() {
    assert_eq!(peak_amplitude(&[]), 0);
}

#[test]
fn test_peak_amplitude_most_negative_is_capped() {
    assert_eq!(peak_amplitude(&[0, i16::MIN, 10]), i16::MAX);
    assert_eq!(peak_amplitude(&[i16::MAX, i16::MIN]), i16::MAX);
}

#[test]
fn test_normalize_reaches_target_peak() {
    let samples: Vec<i16> = vec![100, -200, 50];
    let result = normalize(&samples, 1000);
    assert_eq!(result, vec![500, -1000, 250]);
    assert_eq!(peak_amplitude(&result), 1000);
}

#[test]
fn test_normalize_target_peak_various() {
    let samples: Vec<i16> = vec![3, -7, 11, -13, 17, 0, -1];
    for target in [1, 100, 999, 12345, 32767] {
        let result = normalize(&samples, target);
        assert_eq!(
            peak_amplitude(&result),
            target,
            "normalizing to {} missed the target",
            target
        );
    }
}

#[test]
fn test_normalize_attenuates() {
    let result = normalize(&[20000, -10000], 10000);
    assert_eq!(result, vec![10000, -5000]);
}

#[test]
fn test_normalize_silence_is_unchanged() {
    let silence = vec![0i16; 16];
    assert_eq!(normalize(&silence, 1000), silence);
    assert_eq!(normalize(&silence, i16::MAX), silence);
}

#[test]
fn test_normalize_empty() {
    assert!(normalize(&[], 1000).is_empty());
}

#[test]
fn test_normalize_full_scale_negative_input() {
    let result = normalize(&[i16::MIN, 16384], 10000);
    // Peak of i16::MIN counts as 32767, so -32768 scales to -10000.3
    assert_eq!(result, vec![-10000, 5000]);
    assert_eq!(peak_amplitude(&result), 10000);
}

#[test]
fn test_normalize_preserves_input() {
    let samples: Vec<i16> = vec![10, -20, 30];
    let _ = normalize(&samples, 300);
    assert_eq!(samples, vec![10, -20, 30]);
}
