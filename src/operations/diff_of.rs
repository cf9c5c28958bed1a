use crate::{
    currency::Currency,
    error::Result,
    money::Money,
    operations::{Minus, Plus},
};

/// The difference of two money values of the same currency: `left - right`.
///
/// This is literally `Plus(left, Minus(right))`.
#[derive(Clone, Debug)]
pub struct DiffOf<A, B> {
    inner: Plus<A, Minus<B>>,
}

impl<A, B> DiffOf<A, B> {
    /// Subtract `right` from `left` at the default precision.
    pub fn new(left: A, right: B) -> Self {
        Self { inner: Plus::new(left, Minus::new(right)) }
    }

    /// Subtract `right` from `left`, truncating to `precision` digits.
    pub fn with_precision(left: A, right: B, precision: u32) -> Result<Self> {
        let right = Minus::with_precision(right, precision)?;
        Ok(Self { inner: Plus::with_precision(left, right, precision)? })
    }
}

impl<A: Money, B: Money> Money for DiffOf<A, B> {
    fn amount(&self) -> Result<String> {
        self.inner.amount()
    }

    fn currency(&self) -> Result<Currency> {
        self.inner.currency()
    }

    fn scale(&self) -> u32 {
        self.inner.scale()
    }
}
