//! The `Money` trait is the one contract everything in this crate shares.
//!
//! A base value ([JustMoney][just]) stores an amount directly. Every other
//! implementation is a decorator that wraps one or more inner `Money` values
//! and derives its own amount from them *every time it is asked*. There is no
//! caching: a tree of decorators is immutable, so recomputing is always
//! correct, and evaluation errors surface at the moment `amount()` or
//! `currency()` is called.
//!
//! [just]: ../just_money/struct.JustMoney.html

use crate::{
    currency::Currency,
    error::{Error, Result},
};

/// An amount of a currency.
pub trait Money {
    /// The amount as an exact decimal string.
    fn amount(&self) -> Result<String>;

    /// The currency the amount is denominated in.
    fn currency(&self) -> Result<Currency>;

    /// The number of fractional digits this value is meant to be shown with.
    ///
    /// This is declarative only. Arithmetic truncates to its own precision and
    /// never consults it.
    fn scale(&self) -> u32;
}

impl<M: Money + ?Sized> Money for &M {
    fn amount(&self) -> Result<String> {
        (**self).amount()
    }

    fn currency(&self) -> Result<Currency> {
        (**self).currency()
    }

    fn scale(&self) -> u32 {
        (**self).scale()
    }
}

impl<M: Money + ?Sized> Money for Box<M> {
    fn amount(&self) -> Result<String> {
        (**self).amount()
    }

    fn currency(&self) -> Result<Currency> {
        (**self).currency()
    }

    fn scale(&self) -> u32 {
        (**self).scale()
    }
}

/// Make sure two money values share a currency, returning it.
pub(crate) fn same_currency<A, B>(left: &A, right: &B) -> Result<Currency>
    where A: Money + ?Sized,
          B: Money + ?Sized,
{
    let lcur = left.currency()?;
    let rcur = right.currency()?;
    if lcur != rcur {
        tracing::debug!(left = lcur.as_str(), right = rcur.as_str(), "currency mismatch");
        return Err(Error::CurrencyMismatch(lcur.into(), rcur.into()));
    }
    Ok(lcur)
}
