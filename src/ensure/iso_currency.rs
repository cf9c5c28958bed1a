use crate::{
    currency::{iso, Currency},
    error::{Error, Result},
};
use std::convert::TryFrom;
use tracing::debug;

/// A currency whose code has been checked against ISO 4217.
///
/// The check happens once, at construction. After that it is an ordinary
/// [Currency] (see `From<IsoCurrency> for Currency`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IsoCurrency(Currency);

impl IsoCurrency {
    /// Validate `code`, failing with `UnknownCurrencyCode` if it isn't an ISO
    /// 4217 alphabetic code. Case-sensitive.
    pub fn new<T: Into<String>>(code: T) -> Result<Self> {
        let code = code.into();
        if !iso::is_iso_code(&code) {
            debug!(code = code.as_str(), "unknown currency code");
            return Err(Error::UnknownCurrencyCode(code));
        }
        Ok(Self(Currency::raw(code)))
    }

    /// The underlying currency.
    pub fn currency(&self) -> &Currency {
        &self.0
    }
}

impl From<IsoCurrency> for Currency {
    fn from(iso: IsoCurrency) -> Self {
        iso.0
    }
}

impl TryFrom<&str> for IsoCurrency {
    type Error = Error;

    fn try_from(code: &str) -> Result<Self> {
        Self::new(code)
    }
}
