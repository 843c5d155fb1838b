use arcade_calc_wasm::domain::calculation::ResultFormatter;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn is_scientific_with_four_digits(formatted: &str) -> bool {
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return false;
    };
    let digits = mantissa.strip_prefix('-').unwrap_or(mantissa);
    let Some((integer, fraction)) = digits.split_once('.') else {
        return false;
    };
    integer.len() == 1
        && integer.chars().all(|c| c.is_ascii_digit())
        && fraction.len() == 4
        && fraction.chars().all(|c| c.is_ascii_digit())
        && (exponent.starts_with('+') || exponent.starts_with('-'))
        && exponent[1..].chars().all(|c| c.is_ascii_digit())
}

#[test]
fn zero_renders_plain() {
    assert_eq!(ResultFormatter::new().format_result(0.0), "0");
}

#[test]
fn negative_zero_never_shows_its_sign() {
    assert_eq!(ResultFormatter::new().format_result(-0.0), "0");
}

#[test]
fn integers_drop_the_fraction() {
    let formatter = ResultFormatter::new();
    assert_eq!(formatter.format_result(2.0), "2");
    assert_eq!(formatter.format_result(-42.0), "-42");
}

#[test]
fn floating_point_noise_is_rounded_away() {
    let formatter = ResultFormatter::new();
    assert_eq!(formatter.format_result(0.1 + 0.2), "0.3");
    assert_eq!(formatter.format_result(0.1 + 0.7), "0.8");
}

#[test]
fn tiny_magnitudes_go_scientific() {
    let formatted = ResultFormatter::new().format_result(1e-11);
    assert_eq!(formatted, "1.0000e-11");
    assert!(is_scientific_with_four_digits(&formatted));
}

#[test]
fn huge_magnitudes_go_scientific() {
    let formatter = ResultFormatter::new();
    assert_eq!(formatter.format_result(123456789012.0), "1.2346e+11");
    assert_eq!(formatter.format_result(-123456789012.0), "-1.2346e+11");
}

#[test]
fn boundary_magnitudes_stay_plain() {
    // the contract is strict: only strictly-beyond-1e10 and
    // strictly-below-1e-10 switch notation
    let formatter = ResultFormatter::new();
    assert_eq!(formatter.format_result(1e10), "10000000000");
    assert_eq!(formatter.format_result(1e-10), "0.0000000001");
    assert_eq!(formatter.format_result(-1e10), "-10000000000");
}

#[quickcheck]
fn plain_range_never_uses_exponent_notation(value: f64) -> TestResult {
    if !value.is_finite() {
        return TestResult::discard();
    }
    if value != 0.0 && !(1e-10..=1e10).contains(&value.abs()) {
        return TestResult::discard();
    }
    let formatted = ResultFormatter::new().format_result(value);
    TestResult::from_bool(!formatted.contains('e') && !formatted.contains('E'))
}

#[quickcheck]
fn extreme_range_always_has_four_mantissa_digits(value: f64) -> TestResult {
    // push ordinary samples out of the plain range
    let scaled = value * 1e15;
    if !scaled.is_finite() || scaled == 0.0 || (1e-10..=1e10).contains(&scaled.abs()) {
        return TestResult::discard();
    }
    let formatted = ResultFormatter::new().format_result(scaled);
    TestResult::from_bool(is_scientific_with_four_digits(&formatted))
}

#[quickcheck]
fn formatting_is_total_and_nonempty(value: f64) -> TestResult {
    if !value.is_finite() {
        return TestResult::discard();
    }
    TestResult::from_bool(!ResultFormatter::new().format_result(value).is_empty())
}
