use crate::{
    currency::Currency,
    decimal,
    error::Result,
    money::Money,
    operations::DEFAULT_PRECISION,
};
use tracing::trace;

/// A money value multiplied by a plain decimal factor (a quantity, a tax rate,
/// a discount...). The currency does not change.
#[derive(Clone, Debug)]
pub struct Multiplied<M> {
    origin: M,
    factor: String,
    precision: u32,
}

impl<M> Multiplied<M> {
    /// Multiply `origin` by `factor` at the default precision. Fails if the
    /// factor isn't a decimal literal.
    pub fn new<T: Into<String>>(origin: M, factor: T) -> Result<Self> {
        Self::with_precision(origin, factor, DEFAULT_PRECISION)
    }

    /// Multiply `origin` by `factor`, truncating to `precision` digits.
    pub fn with_precision<T: Into<String>>(origin: M, factor: T, precision: u32) -> Result<Self> {
        let factor = factor.into();
        decimal::check_literal(&factor)?;
        let precision = decimal::check_scale(precision)?;
        Ok(Self { origin, factor, precision })
    }
}

impl<M: Money> Money for Multiplied<M> {
    fn amount(&self) -> Result<String> {
        let amount = self.origin.amount()?;
        trace!(amount = amount.as_str(), factor = self.factor.as_str(), precision = self.precision, "multiplied");
        decimal::multiply(&amount, &self.factor, self.precision)
    }

    fn currency(&self) -> Result<Currency> {
        self.origin.currency()
    }

    fn scale(&self) -> u32 {
        self.origin.scale()
    }
}
