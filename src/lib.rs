//! Money as immutable, composable values.
//!
//! Every value in this crate implements the [Money] trait: it has an amount
//! (an exact decimal string, never a float), a currency, and a scale. The
//! base value, [JustMoney], stores those directly. Everything else is a
//! decorator that wraps other money and computes its amount from them, lazily
//! and on every call:
//!
//! ```
//! use elegant_money::{money, Money, Currency, RateTable};
//! use elegant_money::ensure::NotZero;
//! use elegant_money::operations::{Converted, DiffOf, Minus};
//!
//! let price = NotZero::new(money("3", "EUR", 2).unwrap());
//! assert_eq!(Minus::new(&price).amount().unwrap(), "-3");
//!
//! let diff = DiffOf::new(money("1", "USD", 2).unwrap(), money("1.2333", "USD", 4).unwrap());
//! assert_eq!(diff.amount().unwrap(), "-0.2333");
//!
//! let mut rates = RateTable::new();
//! rates.register(Currency::validated("USD").unwrap(), Currency::validated("EUR").unwrap(), "0.9").unwrap();
//! let eur = Converted::new(diff, Currency::validated("EUR").unwrap(), &rates);
//! assert_eq!(eur.amount().unwrap(), "-0.2099");
//! ```
//!
//! Building a tree never evaluates anything, so evaluation errors (a zero
//! where `NotZero` forbids it, a missing rate, mixed currencies) come out of
//! `amount()` and `currency()`. Only literals, scales, and currency codes are
//! validated at construction.

#[macro_use]
mod util;
pub mod error;
pub mod decimal;
pub mod currency;
pub mod ratio;
pub mod money;
pub mod just_money;
pub mod zero_of;
pub mod operations;
pub mod ensure;
pub mod compare;

pub use crate::{
    currency::Currency,
    error::{Error, Result},
    just_money::{JustMoney, DEFAULT_SCALE},
    money::Money,
    operations::DEFAULT_PRECISION,
    ratio::{ConversionFactor, RateTable, Ratio},
    zero_of::ZeroOf,
};

/// Create a base money value from raw input.
///
/// Fails with `InvalidDecimalFormat` if `amount` isn't a decimal literal,
/// `UnknownCurrencyCode` if `currency` isn't an ISO 4217 code, or
/// `InvalidScale` if `scale` is out of range.
pub fn money<T: Into<String>>(amount: T, currency: &str, scale: u32) -> Result<JustMoney> {
    JustMoney::new(amount, Currency::validated(currency)?, scale)
}
