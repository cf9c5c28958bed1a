use crate::{
    currency::Currency,
    decimal,
    error::{Error, Result},
    money::{self, Money},
    operations::DEFAULT_PRECISION,
};
use tracing::trace;

/// The sum of any number of money values of one currency.
///
/// The sum is exact until the very end, and is truncated once.
#[derive(Clone, Debug)]
pub struct SumOf<M> {
    items: Vec<M>,
    precision: u32,
}

impl<M> SumOf<M> {
    /// Sum `items` at the default precision.
    pub fn new(items: Vec<M>) -> Self {
        Self { items, precision: DEFAULT_PRECISION }
    }

    /// Sum `items`, truncating to `precision` digits.
    pub fn with_precision(items: Vec<M>, precision: u32) -> Result<Self> {
        let precision = decimal::check_scale(precision)?;
        Ok(Self { items, precision })
    }
}

impl<M: Money> Money for SumOf<M> {
    fn amount(&self) -> Result<String> {
        self.currency()?;
        let amounts = self.items.iter()
            .map(|item| item.amount())
            .collect::<Result<Vec<_>>>()?;
        trace!(items = amounts.len(), precision = self.precision, "sum of");
        decimal::sum(&amounts, self.precision)
    }

    fn currency(&self) -> Result<Currency> {
        let (first, rest) = self.items.split_first().ok_or(Error::EmptySum)?;
        let mut currency = first.currency()?;
        for item in rest {
            currency = money::same_currency(first, item)?;
        }
        Ok(currency)
    }

    fn scale(&self) -> u32 {
        self.items.iter().map(|m| m.scale()).max().unwrap_or(0)
    }
}
