//! Currencies give money its identity. Two amounts can only be added or
//! compared if they carry the same currency, and a currency is nothing more
//! than its code: equality is structural.
//!
//! There are two ways in. [Currency::validated] only accepts ISO 4217
//! alphabetic codes (see the [IsoCurrency guard][iso]), while [Currency::raw]
//! takes any code as-is for closed domains and test doubles.
//!
//! [iso]: ../ensure/struct.IsoCurrency.html

pub mod iso;

use crate::{
    ensure::IsoCurrency,
    error::Result,
};
use getset::Getters;
#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};
use std::fmt;

/// An immutable currency code, such as "USD" or "EUR".
#[derive(Clone, Debug, PartialEq, Eq, Hash, Getters)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with_serde", serde(transparent))]
#[getset(get = "pub")]
pub struct Currency {
    /// The currency's code, verbatim.
    code: String,
}

impl Currency {
    /// Create a currency from an ISO 4217 alphabetic code, failing with
    /// `UnknownCurrencyCode` for anything else. Case-sensitive.
    pub fn validated<T: Into<String>>(code: T) -> Result<Self> {
        IsoCurrency::new(code).map(Currency::from)
    }

    /// Create a currency without any validation.
    pub fn raw<T: Into<String>>(code: T) -> Self {
        Self { code: code.into() }
    }

    /// Return the code as a string slice.
    pub fn as_str(&self) -> &str {
        self.code.as_str()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn validates() {
        let usd = Currency::validated("USD").unwrap();
        assert_eq!(usd.as_str(), "USD");
        assert_eq!(usd.code(), "USD");
        assert_eq!(Currency::validated("XX9"), Err(Error::UnknownCurrencyCode("XX9".into())));
        assert_eq!(Currency::validated("eur"), Err(Error::UnknownCurrencyCode("eur".into())));
        assert_eq!(Currency::validated(""), Err(Error::UnknownCurrencyCode("".into())));
    }

    #[test]
    fn raw_skips_validation() {
        let tokens = Currency::raw("TOKENS");
        assert_eq!(tokens.as_str(), "TOKENS");
        assert_eq!(tokens.to_string(), "TOKENS");
        assert_eq!(String::from(tokens), "TOKENS".to_string());
    }

    #[test]
    fn equality_is_by_code() {
        assert_eq!(Currency::validated("EUR").unwrap(), Currency::raw("EUR"));
        assert_ne!(Currency::raw("EUR"), Currency::raw("USD"));
    }

    #[cfg(feature = "with_serde")]
    #[test]
    fn serializes_as_code() {
        let ser = serde_json::to_string(&Currency::raw("BYN")).unwrap();
        assert_eq!(ser, r#""BYN""#);
        let de: Currency = serde_json::from_str(&ser).unwrap();
        assert_eq!(de, Currency::raw("BYN"));
    }
}
