//! Guards: wrappers that check a precondition and fail fast, instead of
//! computing anything.
//!
//! `NotZero` and `NotNegative` are `Money` decorators that re-check the
//! wrapped amount on every `amount()` call and otherwise pass everything
//! through. `IsoCurrency` is the construction-time guard behind
//! [Currency::validated][validated].
//!
//! [validated]: ../currency/struct.Currency.html#method.validated

mod iso_currency;
mod not_negative;
mod not_zero;

pub use iso_currency::IsoCurrency;
pub use not_negative::NotNegative;
pub use not_zero::NotZero;
