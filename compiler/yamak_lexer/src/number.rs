//! Exact evaluation of numeric literals.
//!
//! The scanner splits a literal into its digit runs ([`NumberParts`]); this
//! module turns them into an exact [`BigDecimal`]. All arithmetic is done on
//! an integer mantissa and a base-10 scale, so dividing by a power of the
//! radix never rounds:
//!
//! - `/ 10^n` raises the scale by `n`.
//! - `/ 2^n` multiplies the mantissa by `5^n` and raises the scale by `n`
//!   (since `1 / 2^n == 5^n / 10^n`).
//! - `× 10^n` lowers the scale; `× 2^n` shifts the mantissa.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::LexErrorKind;

/// Numeral base of a literal, selected by its `0b`/`0o`/`0x` prefix.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Radix {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    /// Radix named by the letter after a leading `0`, if any.
    pub(crate) fn from_prefix(letter: u8) -> Option<Self> {
        match letter {
            b'b' | b'B' => Some(Radix::Binary),
            b'o' | b'O' => Some(Radix::Octal),
            b'x' | b'X' => Some(Radix::Hex),
            _ => None,
        }
    }

    pub(crate) fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }

    /// Returns `true` if `b` is a digit in this radix.
    #[inline]
    pub(crate) fn is_digit(self, b: u8) -> bool {
        match self {
            Radix::Binary => matches!(b, b'0' | b'1'),
            Radix::Octal => matches!(b, b'0'..=b'7'),
            Radix::Decimal => b.is_ascii_digit(),
            Radix::Hex => b.is_ascii_hexdigit(),
        }
    }

    /// Bits per digit for the power-of-two radixes.
    fn bits_per_digit(self) -> Option<u64> {
        match self {
            Radix::Binary => Some(1),
            Radix::Octal => Some(3),
            Radix::Hex => Some(4),
            Radix::Decimal => None,
        }
    }
}

/// Digit runs of one numeric literal, prefix and punctuation removed.
#[derive(Clone, Debug)]
pub(crate) struct NumberParts<'a> {
    pub radix: Radix,
    pub integral: &'a str,
    pub fraction: Option<&'a str>,
    pub exponent: Option<Exponent<'a>>,
}

/// The part after `p`/`P`. Digits are in the literal's radix.
#[derive(Clone, Debug)]
pub(crate) struct Exponent<'a> {
    pub negative: bool,
    pub digits: &'a str,
}

/// Largest accepted exponent magnitude.
///
/// Well inside `i32`; larger powers are rejected before any arithmetic.
pub(crate) const MAX_EXPONENT: u32 = 999_999_999;

/// Compute the exact value of a literal.
///
/// The fraction `f` is read as an integer and combined as
/// `(integral × B^d + f) / B^d`, where `d` is the number of base-`B` digits
/// in `f`'s value. The exponent base is 10 for decimal literals and 2 for
/// every other radix. Fails with [`LexErrorKind::ExponentOverflow`] when
/// the exponent magnitude exceeds [`MAX_EXPONENT`].
pub(crate) fn evaluate(parts: &NumberParts<'_>) -> Result<BigDecimal, LexErrorKind> {
    let radix = parts.radix;
    let mut value = Exact {
        mantissa: parse_digits(parts.integral, radix),
        scale: 0,
    };

    if let Some(fraction) = parts.fraction {
        // The scale is the digit count of the fraction's value, so leading
        // zeros do not count and an all-zero fraction leaves the value as is.
        let significant = fraction.trim_start_matches('0');
        let count = u32::try_from(significant.len()).map_err(|_| LexErrorKind::ExponentOverflow)?;
        let shift = BigInt::from(radix.value()).pow(count);
        value.mantissa = value.mantissa * shift + parse_digits(significant, radix);
        match radix.bits_per_digit() {
            Some(bits) => value.divide_pow2(bits * u64::from(count))?,
            None => value.divide_pow10(u64::from(count))?,
        }
    }

    if let Some(exponent) = &parts.exponent {
        let magnitude = u32::try_from(&parse_digits(exponent.digits, radix))
            .ok()
            .filter(|&magnitude| magnitude <= MAX_EXPONENT)
            .ok_or(LexErrorKind::ExponentOverflow)?;
        let magnitude = u64::from(magnitude);
        match (radix, exponent.negative) {
            (Radix::Decimal, false) => value.multiply_pow10(magnitude)?,
            (Radix::Decimal, true) => value.divide_pow10(magnitude)?,
            (_, false) => value.multiply_pow2(magnitude)?,
            (_, true) => value.divide_pow2(magnitude)?,
        }
    }

    Ok(BigDecimal::new(value.mantissa, value.scale))
}

/// Digits are validated by the scanner; an empty run reads as zero.
fn parse_digits(digits: &str, radix: Radix) -> BigInt {
    BigInt::parse_bytes(digits.as_bytes(), radix.value()).unwrap_or_default()
}

/// `mantissa × 10^-scale`
struct Exact {
    mantissa: BigInt,
    scale: i64,
}

impl Exact {
    fn shift_scale(&mut self, delta: u64, raise: bool) -> Result<(), LexErrorKind> {
        let delta = i64::try_from(delta).map_err(|_| LexErrorKind::ExponentOverflow)?;
        let scale = if raise {
            self.scale.checked_add(delta)
        } else {
            self.scale.checked_sub(delta)
        };
        self.scale = scale.ok_or(LexErrorKind::ExponentOverflow)?;
        Ok(())
    }

    fn multiply_pow10(&mut self, n: u64) -> Result<(), LexErrorKind> {
        self.shift_scale(n, false)
    }

    fn divide_pow10(&mut self, n: u64) -> Result<(), LexErrorKind> {
        self.shift_scale(n, true)
    }

    fn multiply_pow2(&mut self, n: u64) -> Result<(), LexErrorKind> {
        let bits = usize::try_from(n).map_err(|_| LexErrorKind::ExponentOverflow)?;
        self.mantissa <<= bits;
        Ok(())
    }

    fn divide_pow2(&mut self, n: u64) -> Result<(), LexErrorKind> {
        let power = u32::try_from(n).map_err(|_| LexErrorKind::ExponentOverflow)?;
        self.mantissa *= BigInt::from(5u8).pow(power);
        self.shift_scale(n, true)
    }
}

#[cfg(test)]
mod tests;
