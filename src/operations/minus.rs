use crate::{
    currency::Currency,
    decimal,
    error::Result,
    money::Money,
    operations::DEFAULT_PRECISION,
};
use tracing::trace;

/// The negation of a money value.
#[derive(Clone, Debug)]
pub struct Minus<M> {
    origin: M,
    precision: u32,
}

impl<M> Minus<M> {
    /// Negate `origin` at the default precision.
    pub fn new(origin: M) -> Self {
        Self { origin, precision: DEFAULT_PRECISION }
    }

    /// Negate `origin`, truncating to `precision` digits.
    pub fn with_precision(origin: M, precision: u32) -> Result<Self> {
        let precision = decimal::check_scale(precision)?;
        Ok(Self { origin, precision })
    }
}

impl<M: Money> Money for Minus<M> {
    fn amount(&self) -> Result<String> {
        let amount = self.origin.amount()?;
        trace!(amount = amount.as_str(), precision = self.precision, "minus");
        decimal::negate(&amount, self.precision)
    }

    fn currency(&self) -> Result<Currency> {
        self.origin.currency()
    }

    fn scale(&self) -> u32 {
        self.origin.scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Error,
        util::test::*,
    };
    use proptest::prelude::*;

    #[test]
    fn negates() {
        let neg = Minus::new(ThreeEuro::new());
        assert_eq!(neg.amount().unwrap(), "-3");
        assert_eq!(neg.currency().unwrap(), Currency::raw("EUR"));
        assert_eq!(neg.scale(), 2);

        assert_eq!(Minus::new(usd("-0.2333", 4)).amount().unwrap(), "0.2333");
        assert_eq!(Minus::new(ZeroBelarusRuble::new()).amount().unwrap(), "0");
    }

    #[test]
    fn truncates() {
        assert_eq!(Minus::new(usd("1.23456", 2)).amount().unwrap(), "-1.2345");
        assert_eq!(Minus::with_precision(usd("1.23456", 2), 1).unwrap().amount().unwrap(), "-1.2");
        assert!(matches!(Minus::with_precision(usd("1", 2), 100), Err(Error::InvalidScale(100))));
    }

    #[test]
    fn propagates_errors() {
        let neg = Minus::new(BrokenMoney::new(Currency::raw("USD")));
        assert_eq!(neg.amount(), Err(Error::InvalidDecimalFormat("1..0".into())));
        assert_eq!(neg.currency().unwrap(), Currency::raw("USD"));
    }

    proptest! {
        #[test]
        fn self_inverse(amount in decimal_literal(4)) {
            let money = usd(&amount, 4);
            let twice = Minus::new(Minus::new(&money));
            prop_assert_eq!(twice.amount().unwrap(), decimal::normalize(&amount).unwrap());
            prop_assert_eq!(twice.currency().unwrap(), money.currency().unwrap());
        }
    }
}
