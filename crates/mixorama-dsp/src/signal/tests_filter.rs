//! Tests for the one-pole low-pass filter.

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_low_pass_alpha_range() {
    let alpha = low_pass_alpha(44100, 15000.0);
    assert!(alpha > 0.0 && alpha < 1.0);

    // Higher cutoff smooths less
    assert!(low_pass_alpha(44100, 100.0) < low_pass_alpha(44100, 10000.0));
}

#[test]
fn test_low_pass_first_sample_passes_through() {
    let result = low_pass_filter(&[1234, 0, 0], 44100, 100.0);
    assert_eq!(result[0], 1234);
}

#[test]
fn test_low_pass_preserves_length() {
    let input: Vec<i16> = (0..500).map(|i| ((i % 7) * 100) as i16).collect();
    let result = low_pass_filter(&input, 44100, 1000.0);
    assert_eq!(result.len(), input.len());
}

#[test]
fn test_low_pass_empty_input() {
    assert!(low_pass_filter(&[], 44100, 1000.0).is_empty());
}

#[test]
fn test_low_pass_constant_signal_is_unchanged() {
    let input = vec![5000i16; 64];
    assert_eq!(low_pass_filter(&input, 44100, 200.0), input);
}

#[test]
fn test_low_pass_step_response_rises_monotonically() {
    let mut input = vec![0i16; 1];
    input.extend(std::iter::repeat(10000).take(2000));
    let result = low_pass_filter(&input, 44100, 500.0);

    for pair in result.windows(2) {
        assert!(pair[1] >= pair[0]);
    }
    assert!(result[1] > 0 && result[1] < 10000);
    // Settles close to the step height
    assert!(result[2000] > 9900);
}

#[test]
fn test_low_pass_attenuates_alternating_signal() {
    let input: Vec<i16> = (0..1000)
        .map(|i| if i % 2 == 0 { 10000 } else { -10000 })
        .collect();
    let result = low_pass_filter(&input, 44100, 100.0);
    let tail_peak = peak_amplitude(&result[500..]);
    assert!(tail_peak < 10000, "tail peak {} not attenuated", tail_peak);
}

#[test]
fn test_low_pass_matches_recurrence() {
    let input = [0i16, 1000, 1000, -1000];
    let alpha = low_pass_alpha(8000, 1000.0);
    let result = low_pass_filter(&input, 8000, 1000.0);

    let mut prev = 0.0_f64;
    for (i, &x) in input.iter().enumerate().skip(1) {
        let expected = (prev + alpha * (x as f64 - prev)) as i16;
        assert_eq!(result[i], expected);
        prev = expected as f64;
    }
}
