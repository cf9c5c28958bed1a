//! The decimal engine does all of the arithmetic in the system. Amounts travel
//! between money values as plain decimal strings ("-12.5", "0.2333") and are
//! only ever turned into exact numbers for the duration of a single operation.
//! Nothing in here touches binary floating point.
//!
//! Arithmetic runs on an unbounded integer mantissa plus a scale, so sums and
//! products are exact no matter how many digits they need. Every operation
//! takes a target `scale` and truncates (rounds toward zero) to that many
//! fractional digits, and only then is the result normalized: trailing
//! fractional zeros are dropped and a negative zero comes out as `"0"`.
//!
//! Fixed-width `Decimal`s are still handed out by [parse] for things that
//! store a number (conversion factors). A literal that is well-formed but
//! doesn't fit one is a `DecimalOverflow`, not a format error.

use crate::error::{Error, Result};
use num_bigint::{BigInt, Sign};
use num_traits::{ToPrimitive, Zero};
use rust_decimal::prelude::Decimal;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;

/// The most fractional digits a result can be truncated to.
pub const MAX_SCALE: u32 = 28;

/// Returns true if `literal` looks like `[+-]digits[.digits]`.
fn is_literal(literal: &str) -> bool {
    let unsigned = literal
        .strip_prefix('-')
        .or_else(|| literal.strip_prefix('+'))
        .unwrap_or(literal);
    let mut parts = unsigned.splitn(2, '.');
    let int = parts.next().unwrap_or("");
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match parts.next() {
        Some(frac) => all_digits(int) && all_digits(frac),
        None => all_digits(int),
    }
}

fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u32).pow(exp)
}

/// An exact decimal: `mantissa * 10^-scale`, with no limit on either.
#[derive(Clone, Debug, PartialEq)]
struct Exact {
    mantissa: BigInt,
    scale: u32,
}

impl Exact {
    fn parse(literal: &str) -> Result<Self> {
        if !is_literal(literal) {
            Err(Error::InvalidDecimalFormat(literal.into()))?;
        }
        let (negative, unsigned) = match literal.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, literal.strip_prefix('+').unwrap_or(literal)),
        };
        let mut parts = unsigned.splitn(2, '.');
        let int = parts.next().unwrap_or("");
        let frac = parts.next().unwrap_or("");
        let digits = format!("{}{}", int, frac);
        let mantissa = BigInt::parse_bytes(digits.as_bytes(), 10)
            .ok_or_else(|| Error::InvalidDecimalFormat(literal.into()))?;
        let scale = u32::try_from(frac.len()).map_err(|_| Error::DecimalOverflow)?;
        Ok(Self {
            mantissa: if negative { -mantissa } else { mantissa },
            scale,
        })
    }

    /// The mantissa expressed at a (larger or equal) scale.
    fn mantissa_at(&self, scale: u32) -> BigInt {
        &self.mantissa * pow10(scale - self.scale)
    }

    fn add(&self, other: &Exact) -> Exact {
        let scale = self.scale.max(other.scale);
        Exact { mantissa: self.mantissa_at(scale) + other.mantissa_at(scale), scale }
    }

    fn mul(&self, other: &Exact) -> Exact {
        Exact { mantissa: &self.mantissa * &other.mantissa, scale: self.scale + other.scale }
    }

    fn neg(&self) -> Exact {
        Exact { mantissa: -&self.mantissa, scale: self.scale }
    }

    fn cmp(&self, other: &Exact) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.mantissa_at(scale).cmp(&other.mantissa_at(scale))
    }

    /// Drop digits past `scale`, toward zero. BigInt division truncates.
    fn truncate(self, scale: u32) -> Exact {
        if self.scale <= scale {
            return self;
        }
        Exact { mantissa: self.mantissa / pow10(self.scale - scale), scale }
    }

    fn normalize(mut self) -> Exact {
        let ten = BigInt::from(10u32);
        while self.scale > 0 && !self.mantissa.is_zero() && (&self.mantissa % &ten).is_zero() {
            self.mantissa /= &ten;
            self.scale -= 1;
        }
        if self.mantissa.is_zero() {
            self.scale = 0;
        }
        self
    }

    fn into_decimal(self) -> Result<Decimal> {
        let mantissa = self.mantissa.to_i128().ok_or(Error::DecimalOverflow)?;
        Decimal::try_from_i128_with_scale(mantissa, self.scale)
            .map_err(|_| Error::DecimalOverflow)
    }
}

impl From<&Decimal> for Exact {
    fn from(value: &Decimal) -> Self {
        Exact { mantissa: BigInt::from(value.mantissa()), scale: value.scale() }
    }
}

impl fmt::Display for Exact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.magnitude().to_str_radix(10);
        let scale = self.scale as usize;
        let digits = if digits.len() <= scale {
            format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
        } else {
            digits
        };
        if self.mantissa.sign() == Sign::Minus {
            f.write_str("-")?;
        }
        let (int, frac) = digits.split_at(digits.len() - scale);
        if frac.is_empty() {
            f.write_str(int)
        } else {
            write!(f, "{}.{}", int, frac)
        }
    }
}

/// Make sure a string is a plain decimal literal, of any size.
pub fn check_literal(literal: &str) -> Result<()> {
    Exact::parse(literal).map(|_| ())
}

/// Parse a decimal literal into a fixed-width `Decimal`.
///
/// Only plain literals are accepted: no exponents, separators, or whitespace.
/// Well-formed literals that don't fit (more than 28 fractional digits, or a
/// mantissa over 96 bits) fail with `DecimalOverflow`.
pub fn parse(literal: &str) -> Result<Decimal> {
    check_literal(literal)?;
    Decimal::from_str_exact(literal.strip_prefix('+').unwrap_or(literal))
        .map_err(|_| Error::DecimalOverflow)
}

/// Make sure a scale is something the engine can truncate to.
pub fn check_scale(scale: u32) -> Result<u32> {
    if scale > MAX_SCALE {
        Err(Error::InvalidScale(scale))?;
    }
    Ok(scale)
}

fn finish(value: Exact, scale: u32) -> String {
    value.truncate(scale).normalize().to_string()
}

fn apply<F>(a: &str, b: &str, scale: u32, op: F) -> Result<String>
    where F: Fn(&Exact, &Exact) -> Exact,
{
    let scale = check_scale(scale)?;
    let result = op(&Exact::parse(a)?, &Exact::parse(b)?);
    Ok(finish(result, scale))
}

/// Add two decimal strings, truncating the sum to `scale` digits.
pub fn add(a: &str, b: &str, scale: u32) -> Result<String> {
    apply(a, b, scale, |x, y| x.add(y))
}

/// Subtract `b` from `a`, truncating the difference to `scale` digits.
pub fn subtract(a: &str, b: &str, scale: u32) -> Result<String> {
    apply(a, b, scale, |x, y| x.add(&y.neg()))
}

/// Multiply two decimal strings, truncating the product to `scale` digits.
pub fn multiply(a: &str, b: &str, scale: u32) -> Result<String> {
    apply(a, b, scale, |x, y| x.mul(y))
}

/// Flip the sign of a decimal string. Same as multiplying by "-1".
pub fn negate(a: &str, scale: u32) -> Result<String> {
    multiply(a, "-1", scale)
}

/// Add up any number of decimal strings exactly, truncating once at the end.
pub fn sum<I, S>(amounts: I, scale: u32) -> Result<String>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>,
{
    let scale = check_scale(scale)?;
    let mut total = Exact { mantissa: BigInt::zero(), scale: 0 };
    for amount in amounts {
        total = total.add(&Exact::parse(amount.as_ref())?);
    }
    Ok(finish(total, scale))
}

/// `1 / value`, truncated to `scale` digits. Fails with `DivisionByZero` for
/// a zero value and `DecimalOverflow` if the result doesn't fit a `Decimal`.
pub fn reciprocal(value: &Decimal, scale: u32) -> Result<Decimal> {
    let scale = check_scale(scale)?;
    if value.is_zero() {
        Err(Error::DivisionByZero)?;
    }
    let exact = Exact::from(value);
    // 1 / (m * 10^-s) = 10^s / m; shift by `scale` more digits before dividing
    let mantissa = pow10(exact.scale + scale) / exact.mantissa;
    Exact { mantissa, scale }.normalize().into_decimal()
}

/// Test whether a decimal string is zero, regardless of sign or trailing zeros.
pub fn is_zero(a: &str) -> Result<bool> {
    Ok(Exact::parse(a)?.mantissa.is_zero())
}

/// Test whether a decimal string is strictly below zero ("-0.00" is not).
pub fn is_negative(a: &str) -> Result<bool> {
    Ok(Exact::parse(a)?.mantissa.sign() == Sign::Minus)
}

/// Numerically compare two decimal strings. Formatting does not matter, so
/// "1.50" and "1.5" are equal.
pub fn compare(a: &str, b: &str) -> Result<Ordering> {
    Ok(Exact::parse(a)?.cmp(&Exact::parse(b)?))
}

/// Strip trailing zeros (and the sign of zero) from a decimal string.
pub fn normalize(a: &str) -> Result<String> {
    Ok(Exact::parse(a)?.normalize().to_string())
}
