use crate::{
    currency::Currency,
    decimal,
    error::Result,
    money::{self, Money},
    operations::DEFAULT_PRECISION,
};
use tracing::trace;

/// The sum of two money values of the same currency.
#[derive(Clone, Debug)]
pub struct Plus<A, B> {
    left: A,
    right: B,
    precision: u32,
}

impl<A, B> Plus<A, B> {
    /// Add `right` to `left` at the default precision.
    pub fn new(left: A, right: B) -> Self {
        Self { left, right, precision: DEFAULT_PRECISION }
    }

    /// Add `right` to `left`, truncating to `precision` digits.
    pub fn with_precision(left: A, right: B, precision: u32) -> Result<Self> {
        let precision = decimal::check_scale(precision)?;
        Ok(Self { left, right, precision })
    }
}

impl<A: Money, B: Money> Money for Plus<A, B> {
    fn amount(&self) -> Result<String> {
        money::same_currency(&self.left, &self.right)?;
        let left = self.left.amount()?;
        let right = self.right.amount()?;
        trace!(left = left.as_str(), right = right.as_str(), precision = self.precision, "plus");
        decimal::add(&left, &right, self.precision)
    }

    fn currency(&self) -> Result<Currency> {
        money::same_currency(&self.left, &self.right)
    }

    fn scale(&self) -> u32 {
        self.left.scale().max(self.right.scale())
    }
}
