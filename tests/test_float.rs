mod common;

use num_text::{float_to_text, float_to_text_with, parse_float, CustomFormat, ToText};
use rand::Rng;

use crate::common::{relative_error, rng, SAMPLES};

#[test]
fn test_f64() {
    let test_cases: &[(&str, f64, usize, usize, usize)] = &[
        ("0", 0.0, 1, 0, 0),
        ("0", -0.0, 1, 0, 0),
        ("1234.57", 1234.5678, 1, 0, 2),
        ("0.00", 0.0, 1, 2, 0),
        ("0.00123", 0.00123, 1, 0, 0),
        ("-0.001", -0.001, 1, 0, 0),
        ("-1.5", -1.5, 1, 0, 0),
        ("0.1", 0.1, 1, 0, 0),
        ("0.3", 0.3, 1, 0, 0),
        ("1.1", 1.1, 1, 0, 0),
        ("123.456", 123.456, 1, 0, 0),
        ("0.0000000001", 1e-10, 1, 0, 0),
        ("18446744073.709", 18446744073.709, 1, 0, 0),
        ("1000000000000000000", 1e18, 1, 0, 0),
        ("004.50", 4.5, 3, 2, 0),
        ("0100", 100.0, 4, 0, 0),
        ("12.000", 12.0, 1, 3, 0),
        ("12.5", 12.5, 1, 1, 0),
        (".5", 0.5, 0, 0, 0),
        ("0.66667", 2.0 / 3.0, 1, 0, 5),
    ];

    for (expected, input, min_int, min_frac, precision) in test_cases {
        assert_eq!(
            *expected,
            float_to_text(*input, *min_int, *min_frac, *precision),
            "{}",
            input
        );
    }
}

#[test]
fn test_f32() {
    assert_eq!(float_to_text(2.5f32, 1, 0, 0), "2.5");
    assert_eq!(float_to_text(-0.75f32, 1, 0, 0), "-0.75");
    assert_eq!(float_to_text(0.1f32, 1, 0, 3), "0.1");
}

#[test]
fn test_rounding() {
    // half up on the first dropped digit
    assert_eq!(float_to_text(0.125, 1, 0, 2), "0.13");
    assert_eq!(float_to_text(0.05, 1, 0, 1), "0.1");

    // trailing zeros left by rounding are stripped
    assert_eq!(float_to_text(1.2049, 1, 0, 2), "1.2");

    // carries into the integer part
    assert_eq!(float_to_text(0.999, 1, 0, 2), "1");
    assert_eq!(float_to_text(99.96, 1, 0, 1), "100");
    assert_eq!(float_to_text(99.96, 1, 2, 1), "100.00");

    // below the kept precision
    assert_eq!(float_to_text(0.00001, 1, 0, 3), "0");
}

#[test]
fn test_scientific_boundary() {
    assert_eq!(float_to_text(1e19, 1, 0, 0), "1e19");
    assert!(!float_to_text(9.99e18, 1, 0, 0).contains('e'));
    assert!(!float_to_text(1e-17, 1, 0, 0).contains('e'));
    assert!(!float_to_text(2e-17, 1, 0, 0).contains('e'));

    let text = float_to_text(9e-18, 1, 0, 0);
    assert!(text.starts_with("9."), "{}", text);
    assert!(text.ends_with("e-18"), "{}", text);
}

#[test]
fn test_scientific() {
    assert_eq!(float_to_text(3e20, 1, 0, 0), "3e20");
    assert_eq!(float_to_text(1e20, 1, 0, 0), "1e20");
    assert_eq!(float_to_text(-2.5e25, 1, 0, 0), "-2.5e25");
    assert_eq!(float_to_text(1.5e-20, 1, 0, 0), "1.5e-20");
    assert_eq!(float_to_text(f64::MAX, 1, 0, 0), "1.797693134862315e308");

    // minimum fraction digits do not apply
    assert_eq!(float_to_text(3e20, 1, 4, 0), "3e20");

    let text = float_to_text(5e-324, 1, 0, 0);
    assert!(text.starts_with("4.94065645841"), "{}", text);
    assert!(text.ends_with("e-324"), "{}", text);
}

#[test]
fn test_nonfinite() {
    assert_eq!(float_to_text(f64::NAN, 1, 0, 0), "NaN");
    assert_eq!(float_to_text(f64::INFINITY, 1, 0, 0), "inf");
    assert_eq!(float_to_text(f64::NEG_INFINITY, 3, 2, 1), "-inf");
    assert_eq!(float_to_text(f32::NAN, 1, 0, 0), "NaN");
    assert_eq!(float_to_text(f32::NEG_INFINITY, 1, 0, 0), "-inf");
}

#[test]
fn test_custom_format() {
    let format = CustomFormat::builder()
        .min_int_digits(2)
        .min_frac_digits(3)
        .precision(4)
        .build();

    assert_eq!(float_to_text_with(3.14159, &format), "03.1416");
    assert_eq!(float_to_text_with(3.5, &format), "03.500");
    assert_eq!(3.5f64.to_text_with(&format), "03.500");
    assert_eq!(1.5f64.to_text(), "1.5");

    let rebuilt = format.into_builder().precision(1).build();
    assert_eq!(rebuilt.min_int_digits(), 2);
    assert_eq!(rebuilt.precision(), 1);
    assert_eq!(float_to_text_with(3.14159, &rebuilt), "03.100");

    assert_eq!(CustomFormat::default(), CustomFormat::builder().build());
}

#[test]
fn test_fixed_round_trip() {
    let mut rng = rng();

    for _ in 0..SAMPLES {
        let f: f64 = 10f64.powf(rng.gen_range(-1.0..10.0));
        let f = if rng.gen() { f } else { -f };

        let text = float_to_text(f, 1, 0, 10);
        let parsed: f64 = parse_float(&text).unwrap();
        assert!(relative_error(parsed, f) < 1e-9, "{} -> {}", f, text);
    }
}

#[test]
fn test_default_round_trip() {
    let mut rng = rng();

    for _ in 0..SAMPLES {
        let f: f64 = 10f64.powf(rng.gen_range(-3.0..15.0));

        let text = float_to_text(f, 1, 0, 0);
        assert!(!text.contains('e'), "{}", text);
        let parsed: f64 = parse_float(&text).unwrap();
        assert!(relative_error(parsed, f) < 1e-13, "{} -> {}", f, text);
    }
}

#[test]
fn test_scientific_round_trip() {
    let mut rng = rng();

    for _ in 0..SAMPLES {
        let exponent = if rng.gen() {
            rng.gen_range(19.0..300.0)
        } else {
            rng.gen_range(-300.0..-17.01)
        };
        let f: f64 = 10f64.powf(exponent);

        let text = float_to_text(f, 1, 0, 0);
        assert!(text.contains('e'), "{}", text);
        let parsed: f64 = parse_float(&text).unwrap();
        assert!(relative_error(parsed, f) < 1e-13, "{} -> {}", f, text);
    }
}
