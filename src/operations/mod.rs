//! Operations are the arithmetic decorators: each one wraps its operand(s),
//! holds no other state, and computes its amount from them on every call.
//!
//! Arithmetic truncates to a *precision* (fractional digits), which defaults
//! to [DEFAULT_PRECISION] and can be picked per node with `with_precision()`.
//! Precision is separate from `Money::scale()`, which nodes only pass along:
//! unary operations report their origin's scale, and operations over several
//! values report the largest scale among them.
//!
//! Operations over more than one value require all of them to share a
//! currency and fail with `CurrencyMismatch` otherwise.

mod converted;
mod diff_of;
mod minus;
mod multiplied;
mod plus;
mod sum_of;

pub use converted::Converted;
pub use diff_of::DiffOf;
pub use minus::Minus;
pub use multiplied::Multiplied;
pub use plus::Plus;
pub use sum_of::SumOf;

/// How many fractional digits arithmetic keeps unless told otherwise.
pub const DEFAULT_PRECISION: u32 = 4;
