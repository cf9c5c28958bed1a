//! `JustMoney` is the base value of the system: the leaf of every decorator
//! tree and the only `Money` that stores its amount instead of computing it.

use crate::{
    currency::Currency,
    decimal,
    error::{Error, Result},
    money::Money,
};
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
#[cfg(feature = "with_serde")]
use std::convert::TryFrom;

/// The scale a `JustMoney` gets when the builder isn't given one.
pub const DEFAULT_SCALE: u32 = 2;

/// An amount, a currency, and a scale, stored as given.
///
/// The amount is validated as a decimal literal on the way in but is never
/// rewritten: `amount()` hands back exactly the string that was stored.
#[derive(Clone, Debug, PartialEq, derive_builder::Builder)]
#[builder(pattern = "owned", setter(into), build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with_serde", serde(try_from = "JustMoneyRepr"))]
pub struct JustMoney {
    amount: String,
    currency: Currency,
    #[builder(default = "DEFAULT_SCALE")]
    scale: u32,
}

impl JustMoneyBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        if let Some(amount) = self.amount.as_ref() {
            decimal::check_literal(amount).map_err(|e| e.to_string())?;
        }
        if let Some(scale) = self.scale {
            decimal::check_scale(scale).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

impl JustMoney {
    /// Create a new base value, failing if `amount` isn't a decimal literal or
    /// `scale` is out of range.
    pub fn new<T: Into<String>>(amount: T, currency: Currency, scale: u32) -> Result<Self> {
        let amount = amount.into();
        decimal::check_literal(&amount)?;
        decimal::check_scale(scale)?;
        Ok(Self { amount, currency, scale })
    }

    /// Start building a `JustMoney` (scale defaults to `DEFAULT_SCALE`).
    pub fn builder() -> JustMoneyBuilder {
        JustMoneyBuilder::default()
    }

    /// Like `builder().build()`, with the builder's error mapped into ours.
    pub fn build(builder: JustMoneyBuilder) -> Result<Self> {
        builder.build().map_err(|e| Error::BuilderFailed(e))
    }
}

impl Money for JustMoney {
    fn amount(&self) -> Result<String> {
        Ok(self.amount.clone())
    }

    fn currency(&self) -> Result<Currency> {
        Ok(self.currency.clone())
    }

    fn scale(&self) -> u32 {
        self.scale
    }
}

#[cfg(feature = "with_serde")]
#[derive(Deserialize)]
struct JustMoneyRepr {
    amount: String,
    currency: Currency,
    scale: u32,
}

#[cfg(feature = "with_serde")]
impl TryFrom<JustMoneyRepr> for JustMoney {
    type Error = Error;

    fn try_from(repr: JustMoneyRepr) -> Result<Self> {
        JustMoney::new(repr.amount, repr.currency, repr.scale)
    }
}
