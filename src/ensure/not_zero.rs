use crate::{
    currency::Currency,
    decimal,
    error::{Error, Result},
    money::Money,
};
use tracing::debug;

/// Passes `origin` through untouched, but fails with `ZeroAmountNotAllowed`
/// whenever its amount evaluates to zero ("0", "-0.00", ...).
#[derive(Clone, Debug)]
pub struct NotZero<M> {
    origin: M,
}

impl<M> NotZero<M> {
    /// Guard `origin` against zero.
    pub fn new(origin: M) -> Self {
        Self { origin }
    }
}

impl<M: Money> Money for NotZero<M> {
    fn amount(&self) -> Result<String> {
        let amount = self.origin.amount()?;
        if decimal::is_zero(&amount)? {
            debug!(amount = amount.as_str(), "zero amount rejected");
            Err(Error::ZeroAmountNotAllowed)?;
        }
        Ok(amount)
    }

    fn currency(&self) -> Result<Currency> {
        self.origin.currency()
    }

    fn scale(&self) -> u32 {
        self.origin.scale()
    }
}
