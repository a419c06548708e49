use std::str::FromStr;

use pretty_assertions::assert_eq;

use super::*;

fn dec(text: &str) -> BigDecimal {
    BigDecimal::from_str(text).unwrap()
}

fn int(radix: Radix, integral: &str) -> NumberParts<'_> {
    NumberParts {
        radix,
        integral,
        fraction: None,
        exponent: None,
    }
}

fn eval(parts: &NumberParts<'_>) -> BigDecimal {
    evaluate(parts).unwrap()
}

// === Radix ===

#[test]
fn radix_from_prefix() {
    assert_eq!(Radix::from_prefix(b'b'), Some(Radix::Binary));
    assert_eq!(Radix::from_prefix(b'O'), Some(Radix::Octal));
    assert_eq!(Radix::from_prefix(b'x'), Some(Radix::Hex));
    assert_eq!(Radix::from_prefix(b'X'), Some(Radix::Hex));
    assert_eq!(Radix::from_prefix(b'd'), None);
    assert_eq!(Radix::from_prefix(b'1'), None);
}

#[test]
fn radix_digits() {
    assert!(Radix::Binary.is_digit(b'1'));
    assert!(!Radix::Binary.is_digit(b'2'));
    assert!(Radix::Octal.is_digit(b'7'));
    assert!(!Radix::Octal.is_digit(b'8'));
    assert!(Radix::Decimal.is_digit(b'9'));
    assert!(!Radix::Decimal.is_digit(b'a'));
    assert!(Radix::Hex.is_digit(b'f'));
    assert!(Radix::Hex.is_digit(b'F'));
    assert!(!Radix::Hex.is_digit(b'g'));
    assert!(!Radix::Hex.is_digit(b'p'));
}

// === Integers ===

#[test]
fn prefixed_integers() {
    assert_eq!(eval(&int(Radix::Hex, "1A")), dec("26"));
    assert_eq!(eval(&int(Radix::Binary, "101")), dec("5"));
    assert_eq!(eval(&int(Radix::Octal, "17")), dec("15"));
    assert_eq!(eval(&int(Radix::Hex, "FF")), dec("255"));
}

#[test]
fn integers_beyond_u64() {
    assert_eq!(
        eval(&int(Radix::Decimal, "123456789012345678901234567890")),
        dec("123456789012345678901234567890")
    );
    assert_eq!(
        eval(&int(Radix::Hex, "10000000000000000")),
        dec("18446744073709551616")
    );
}

// === Fractions ===

#[test]
fn decimal_fraction_is_exact() {
    let parts = NumberParts {
        fraction: Some("5"),
        ..int(Radix::Decimal, "10")
    };
    assert_eq!(eval(&parts), dec("10.5"));
}

#[test]
fn fraction_scale_is_digit_count_of_its_value() {
    // "05" has the value 5, one digit: (10 × 10 + 5) / 10
    let parts = NumberParts {
        fraction: Some("05"),
        ..int(Radix::Decimal, "10")
    };
    assert_eq!(eval(&parts), dec("10.5"));
    let parts = NumberParts {
        fraction: Some("05"),
        ..int(Radix::Decimal, "1")
    };
    assert_eq!(eval(&parts), dec("1.5"));
}

#[test]
fn zero_fraction_keeps_integral() {
    let parts = NumberParts {
        fraction: Some("000"),
        ..int(Radix::Decimal, "42")
    };
    assert_eq!(eval(&parts), dec("42"));
    let parts = NumberParts {
        fraction: Some("0"),
        ..int(Radix::Hex, "F")
    };
    assert_eq!(eval(&parts), dec("15"));
}

#[test]
fn binary_fraction() {
    // 0b1.11 = 1.75
    let parts = NumberParts {
        fraction: Some("11"),
        ..int(Radix::Binary, "1")
    };
    assert_eq!(eval(&parts), dec("1.75"));
    // 0b1.01: the fraction's value 1 has one binary digit, so (2 + 1) / 2
    let parts = NumberParts {
        fraction: Some("01"),
        ..int(Radix::Binary, "1")
    };
    assert_eq!(eval(&parts), dec("1.5"));
}

#[test]
fn hex_fraction() {
    // 0x0.8 = 0.5, 0xA.C = 10.75
    let half = NumberParts {
        fraction: Some("8"),
        ..int(Radix::Hex, "0")
    };
    assert_eq!(eval(&half), dec("0.5"));
    let parts = NumberParts {
        fraction: Some("C"),
        ..int(Radix::Hex, "A")
    };
    assert_eq!(eval(&parts), dec("10.75"));
}

#[test]
fn octal_fraction() {
    // 0o7.4 = 7.5
    let parts = NumberParts {
        fraction: Some("4"),
        ..int(Radix::Octal, "7")
    };
    assert_eq!(eval(&parts), dec("7.5"));
}

// === Exponents ===

fn with_exponent<'a>(base: NumberParts<'a>, negative: bool, digits: &'a str) -> NumberParts<'a> {
    NumberParts {
        exponent: Some(Exponent { negative, digits }),
        ..base
    }
}

#[test]
fn hex_exponent_is_binary_scale() {
    assert_eq!(eval(&with_exponent(int(Radix::Hex, "1"), false, "4")), dec("16"));
    assert_eq!(eval(&with_exponent(int(Radix::Hex, "1"), true, "1")), dec("0.5"));
}

#[test]
fn exponent_digits_use_literal_radix() {
    // 0x1p10 is 1 × 2^16
    assert_eq!(
        eval(&with_exponent(int(Radix::Hex, "1"), false, "10")),
        dec("65536")
    );
    // 0b1p11 is 1 × 2^3
    assert_eq!(
        eval(&with_exponent(int(Radix::Binary, "1"), false, "11")),
        dec("8")
    );
}

#[test]
fn decimal_exponent_is_power_of_ten() {
    assert_eq!(eval(&with_exponent(int(Radix::Decimal, "5"), true, "1")), dec("0.5"));
    assert_eq!(eval(&with_exponent(int(Radix::Decimal, "5"), false, "3")), dec("5000"));
    assert_eq!(
        eval(&with_exponent(int(Radix::Decimal, "25"), true, "4")),
        dec("0.0025")
    );
}

#[test]
fn fraction_and_exponent_combine() {
    let parts = with_exponent(
        NumberParts {
            fraction: Some("5"),
            ..int(Radix::Decimal, "1")
        },
        false,
        "2",
    );
    assert_eq!(eval(&parts), dec("150"));
}

#[test]
fn zero_exponent_is_identity() {
    assert_eq!(eval(&with_exponent(int(Radix::Decimal, "7"), false, "0")), dec("7"));
    assert_eq!(eval(&with_exponent(int(Radix::Hex, "7"), true, "0")), dec("7"));
}

#[test]
fn largest_decimal_exponent_is_exact() {
    let value = eval(&with_exponent(int(Radix::Decimal, "1"), true, "999999999"));
    assert_eq!(value.as_bigint_and_exponent(), (BigInt::from(1), 999_999_999));
    let value = eval(&with_exponent(int(Radix::Decimal, "3"), false, "999999999"));
    assert_eq!(value.as_bigint_and_exponent(), (BigInt::from(3), -999_999_999));
}

#[test]
fn exponent_overflow() {
    let err = evaluate(&with_exponent(int(Radix::Decimal, "1"), false, "2147483648"));
    assert_eq!(err, Err(LexErrorKind::ExponentOverflow));
    let err = evaluate(&with_exponent(int(Radix::Decimal, "1"), true, "1000000000"));
    assert_eq!(err, Err(LexErrorKind::ExponentOverflow));
    let err = evaluate(&with_exponent(int(Radix::Hex, "1"), true, "FFFFFFFFFF"));
    assert_eq!(err, Err(LexErrorKind::ExponentOverflow));
    let err = evaluate(&with_exponent(
        int(Radix::Decimal, "1"),
        false,
        "99999999999999999999999999",
    ));
    assert_eq!(err, Err(LexErrorKind::ExponentOverflow));
}

#[test]
fn power_of_two_exponent_above_limit_is_rejected_without_computing() {
    // 0x7FFFFFFF fits an i32 but is above MAX_EXPONENT
    let err = evaluate(&with_exponent(int(Radix::Hex, "1"), true, "7FFFFFFF"));
    assert_eq!(err, Err(LexErrorKind::ExponentOverflow));
    let err = evaluate(&with_exponent(int(Radix::Hex, "1"), false, "7FFFFFFF"));
    assert_eq!(err, Err(LexErrorKind::ExponentOverflow));
    // 1_000_000_000 in binary
    let digits = "111011100110101100101000000000";
    let err = evaluate(&with_exponent(int(Radix::Binary, "1"), true, digits));
    assert_eq!(err, Err(LexErrorKind::ExponentOverflow));
}
