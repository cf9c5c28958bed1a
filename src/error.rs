//! The main error enum for the money system lives here, and documents the
//! various conditions that can occur while building or evaluating money.

use thiserror::Error;

/// This is our error enum. It contains an entry for any part of the system in
/// which an expectation is not met or a problem occurs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Two operands of a binary operation carry different currencies
    #[error("currency mismatch: {0} vs {1}")]
    CurrencyMismatch(String, String),
    /// A well-formed decimal does not fit where it needs to be stored
    #[error("decimal overflow")]
    DecimalOverflow,
    /// Something asked for the inverse of zero
    #[error("division by zero")]
    DivisionByZero,
    /// A sum was requested over zero items
    #[error("cannot sum an empty set of money")]
    EmptySum,
    /// A builder failed to build a value
    #[error("error building object {0}")]
    BuilderFailed(String),
    /// The given string is not a plain decimal literal
    #[error("invalid decimal format: {0:?}")]
    InvalidDecimalFormat(String),
    /// The requested scale cannot be represented
    #[error("invalid scale: {0}")]
    InvalidScale(u32),
    /// A `NotNegative`-guarded value evaluated below zero
    #[error("negative amount not allowed: {0}")]
    NegativeAmountNotAllowed(String),
    /// No conversion factor is registered for the (source, target) pair
    #[error("no rate registered for {0} -> {1}")]
    RateNotFound(String, String),
    /// The currency code is not an ISO 4217 alphabetic code
    #[error("unknown currency code: {0:?}")]
    UnknownCurrencyCode(String),
    /// A `NotZero`-guarded value evaluated to zero
    #[error("zero amount not allowed")]
    ZeroAmountNotAllowed,
}

/// Wraps `std::result::Result` around our `Error` enum
pub type Result<T> = std::result::Result<T, Error>;
