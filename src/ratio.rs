//! Ratios tell us how much one unit of a source currency is worth in a target
//! currency. The lookup is keyed on the *ordered* pair, so USD -> EUR and
//! EUR -> USD are separate entries, and there is no implicit 1:1 rate for a
//! currency converted into itself: if you want one, register it.

use crate::{
    currency::Currency,
    decimal,
    error::{Error, Result},
};
use rust_decimal::prelude::*;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;
use tracing::debug;

/// The multiplier that takes an amount in one currency to another.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct ConversionFactor {
    value: Decimal,
}

impl ConversionFactor {
    /// Create a factor from a decimal literal.
    pub fn new(literal: &str) -> Result<Self> {
        Ok(Self { value: decimal::parse(literal)? })
    }

    /// The factor as a normalized decimal string.
    pub fn as_number(&self) -> String {
        self.value.normalize().to_string()
    }

    /// The factor as an exact decimal.
    pub fn value(&self) -> &Decimal {
        &self.value
    }
}

impl From<Decimal> for ConversionFactor {
    fn from(value: Decimal) -> Self {
        Self { value }
    }
}

/// Anything that can look up a conversion factor for an ordered currency pair.
pub trait Ratio {
    /// Find the factor for converting `source` into `target`, failing with
    /// `RateNotFound` if none exists.
    fn of(&self, source: &Currency, target: &Currency) -> Result<ConversionFactor>;
}

impl<R: Ratio + ?Sized> Ratio for &R {
    fn of(&self, source: &Currency, target: &Currency) -> Result<ConversionFactor> {
        (**self).of(source, target)
    }
}

impl<R: Ratio + ?Sized> Ratio for Box<R> {
    fn of(&self, source: &Currency, target: &Currency) -> Result<ConversionFactor> {
        (**self).of(source, target)
    }
}

impl<R: Ratio + ?Sized> Ratio for Rc<R> {
    fn of(&self, source: &Currency, target: &Currency) -> Result<ConversionFactor> {
        (**self).of(source, target)
    }
}

impl<R: Ratio + ?Sized> Ratio for Arc<R> {
    fn of(&self, source: &Currency, target: &Currency) -> Result<ConversionFactor> {
        (**self).of(source, target)
    }
}

/// An in-memory table of conversion factors.
///
/// Fill it up front, then share it (by reference, `Rc`, or `Arc`). Lookups
/// never mutate the table, so a shared table needs no locking.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RateTable {
    rates: HashMap<(Currency, Currency), ConversionFactor>,
}

impl RateTable {
    /// Create an empty rate table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the factor for `source` -> `target`.
    pub fn register(&mut self, source: Currency, target: Currency, factor: &str) -> Result<&mut Self> {
        let factor = ConversionFactor::new(factor)?;
        self.rates.insert((source, target), factor);
        Ok(self)
    }

    /// Register `source` -> `target` at `factor` and the reverse pair at
    /// `1 / factor`, truncated to `scale` digits. A zero factor has no inverse
    /// and fails with `DivisionByZero`.
    pub fn register_with_inverse(&mut self, source: Currency, target: Currency, factor: &str, scale: u32) -> Result<&mut Self> {
        let forward = decimal::parse(factor)?;
        let inverse = decimal::reciprocal(&forward, scale)?;
        self.rates.insert((target.clone(), source.clone()), ConversionFactor::from(inverse));
        self.rates.insert((source, target), ConversionFactor::from(forward));
        Ok(self)
    }

    /// How many pairs are registered.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether or not the table has any entries.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Ratio for RateTable {
    fn of(&self, source: &Currency, target: &Currency) -> Result<ConversionFactor> {
        match self.rates.get(&(source.clone(), target.clone())) {
            Some(factor) => Ok(*factor),
            None => {
                debug!(source = source.as_str(), target = target.as_str(), "no conversion rate registered");
                Err(Error::RateNotFound(source.to_string(), target.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::*;

    fn usd() -> Currency { Currency::raw("USD") }
    fn eur() -> Currency { Currency::raw("EUR") }

    #[test]
    fn looks_up_ordered_pairs() {
        let mut table = RateTable::new();
        assert!(table.is_empty());
        table.register(usd(), eur(), "0.2333").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.of(&usd(), &eur()).unwrap().as_number(), "0.2333");
        assert_eq!(table.of(&eur(), &usd()), Err(Error::RateNotFound("EUR".into(), "USD".into())));
    }

    #[test]
    fn no_implicit_identity() {
        let table = RateTable::new();
        assert_eq!(table.of(&usd(), &usd()), Err(Error::RateNotFound("USD".into(), "USD".into())));

        let mut table = RateTable::new();
        table.register(usd(), usd(), "1").unwrap();
        assert_eq!(table.of(&usd(), &usd()).unwrap().as_number(), "1");
    }

    #[test]
    fn rejects_bad_factors() {
        let mut table = RateTable::new();
        assert_eq!(table.register(usd(), eur(), "1,5").err(), Some(Error::InvalidDecimalFormat("1,5".into())));
        assert_eq!(table.register_with_inverse(usd(), eur(), "0", 4).err(), Some(Error::DivisionByZero));
        assert_eq!(table.register_with_inverse(usd(), eur(), "-0.00", 4).err(), Some(Error::DivisionByZero));
        assert_eq!(table.register_with_inverse(usd(), eur(), "2", 29).err(), Some(Error::InvalidScale(29)));
        // well-formed, but too many digits to store as a factor
        assert_eq!(table.register(usd(), eur(), "0.00000000000000000000000000001").err(), Some(Error::DecimalOverflow));
        assert!(table.is_empty());
    }

    #[test]
    fn registers_inverse() {
        let mut table = RateTable::new();
        table.register_with_inverse(usd(), eur(), "3", 4).unwrap();
        assert_eq!(table.of(&usd(), &eur()).unwrap().as_number(), "3");
        assert_eq!(table.of(&eur(), &usd()).unwrap().as_number(), "0.3333");
        assert_eq!(table.of(&eur(), &usd()).unwrap().value(), &dec!(0.3333));
    }

    #[test]
    fn shares_table() {
        let mut table = RateTable::new();
        table.register(usd(), eur(), "2").unwrap();
        let shared = Arc::new(table);
        let by_ref: &dyn Ratio = &*shared;
        assert_eq!(shared.of(&usd(), &eur()).unwrap().as_number(), "2");
        assert_eq!(by_ref.of(&usd(), &eur()).unwrap().as_number(), "2");
        assert!(Rc::new(RateTable::new()).of(&usd(), &eur()).is_err());
    }
}
