use crate::{
    currency::Currency,
    decimal,
    error::{Error, Result},
    money::Money,
};
use tracing::debug;

/// Passes `origin` through untouched, but fails with
/// `NegativeAmountNotAllowed` whenever its amount evaluates below zero.
/// Zero itself (signed or not) is allowed.
#[derive(Clone, Debug)]
pub struct NotNegative<M> {
    origin: M,
}

impl<M> NotNegative<M> {
    /// Guard `origin` against negative amounts.
    pub fn new(origin: M) -> Self {
        Self { origin }
    }
}

impl<M: Money> Money for NotNegative<M> {
    fn amount(&self) -> Result<String> {
        let amount = self.origin.amount()?;
        if decimal::is_negative(&amount)? {
            debug!(amount = amount.as_str(), "negative amount rejected");
            return Err(Error::NegativeAmountNotAllowed(amount));
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
