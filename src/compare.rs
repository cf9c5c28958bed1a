//! Helpers for comparing two money values.
//!
//! Comparisons are numeric, so "1.50 USD" equals "1.5 USD", and both sides
//! must share a currency: comparing across currencies fails with
//! `CurrencyMismatch` rather than answering false. Convert first.

use crate::{
    decimal,
    error::Result,
    money::{self, Money},
};
use std::cmp::Ordering;

/// Order `left` against `right`.
pub fn ordering<A, B>(left: &A, right: &B) -> Result<Ordering>
    where A: Money + ?Sized,
          B: Money + ?Sized,
{
    money::same_currency(left, right)?;
    decimal::compare(&left.amount()?, &right.amount()?)
}

/// Whether `left` and `right` are the same amount of the same currency.
pub fn equal<A, B>(left: &A, right: &B) -> Result<bool>
    where A: Money + ?Sized,
          B: Money + ?Sized,
{
    Ok(ordering(left, right)? == Ordering::Equal)
}

/// Whether `left` is more than `right`.
pub fn greater_than<A, B>(left: &A, right: &B) -> Result<bool>
    where A: Money + ?Sized,
          B: Money + ?Sized,
{
    Ok(ordering(left, right)? == Ordering::Greater)
}

/// Whether `left` is less than `right`.
pub fn less_than<A, B>(left: &A, right: &B) -> Result<bool>
    where A: Money + ?Sized,
          B: Money + ?Sized,
{
    Ok(ordering(left, right)? == Ordering::Less)
}
