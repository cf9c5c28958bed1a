use crate::{
    currency::Currency,
    decimal,
    error::Result,
    money::Money,
    operations::DEFAULT_PRECISION,
    ratio::Ratio,
};
use tracing::trace;

/// A money value converted into another currency through a `Ratio`.
///
/// The rate is looked up on every evaluation, keyed on the origin's currency
/// and the target. A missing rate fails with `RateNotFound`; converting a
/// currency into itself needs an explicitly registered rate like any other.
#[derive(Clone, Debug)]
pub struct Converted<M, R> {
    origin: M,
    target: Currency,
    ratio: R,
    precision: u32,
}

impl<M, R> Converted<M, R> {
    /// Convert `origin` into `target` at the default precision.
    pub fn new(origin: M, target: Currency, ratio: R) -> Self {
        Self { origin, target, ratio, precision: DEFAULT_PRECISION }
    }

    /// Convert `origin` into `target`, truncating to `precision` digits.
    pub fn with_precision(origin: M, target: Currency, ratio: R, precision: u32) -> Result<Self> {
        let precision = decimal::check_scale(precision)?;
        Ok(Self { origin, target, ratio, precision })
    }
}

impl<M: Money, R: Ratio> Money for Converted<M, R> {
    fn amount(&self) -> Result<String> {
        let factor = self.ratio.of(&self.origin.currency()?, &self.target)?;
        let amount = self.origin.amount()?;
        let factor = factor.as_number();
        trace!(amount = amount.as_str(), factor = factor.as_str(), target = self.target.as_str(), "converted");
        decimal::multiply(&amount, &factor, self.precision)
    }

    fn currency(&self) -> Result<Currency> {
        Ok(self.target.clone())
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
        ratio::RateTable,
        util::test::*,
    };
    use std::rc::Rc;

    #[test]
    fn converts_with_registered_rate() {
        let rates = usd_eur_rates();
        let conv = Converted::new(usd("1", 2), Currency::raw("EUR"), &rates);
        assert_eq!(conv.amount().unwrap(), "0.2333");
        assert_eq!(conv.currency().unwrap(), Currency::raw("EUR"));
        assert_eq!(conv.scale(), 2);

        let conv = Converted::new(usd("10.5", 2), Currency::raw("EUR"), &rates);
        assert_eq!(conv.amount().unwrap(), "2.4496");

        let conv = Converted::with_precision(usd("10.5", 2), Currency::raw("EUR"), &rates, 2).unwrap();
        assert_eq!(conv.amount().unwrap(), "2.44");
    }

    #[test]
    fn missing_rate() {
        let rates = usd_eur_rates();
        let conv = Converted::new(ThreeEuro::new(), Currency::raw("USD"), &rates);
        assert_eq!(conv.amount(), Err(Error::RateNotFound("EUR".into(), "USD".into())));
        // the target currency itself is known without a lookup
        assert_eq!(conv.currency().unwrap(), Currency::raw("USD"));
    }

    #[test]
    fn no_identity_shortcut() {
        let rates = RateTable::new();
        let conv = Converted::new(ThreeEuro::new(), Currency::raw("EUR"), &rates);
        assert_eq!(conv.amount(), Err(Error::RateNotFound("EUR".into(), "EUR".into())));
    }

    #[test]
    fn chains_through_shared_table() {
        let mut rates = RateTable::new();
        rates.register(Currency::raw("EUR"), Currency::raw("USD"), "1.1").unwrap();
        rates.register(Currency::raw("USD"), Currency::raw("JPY"), "150").unwrap();
        let rates = Rc::new(rates);
        let conv = Converted::new(
            Converted::new(ThreeEuro::new(), Currency::raw("USD"), rates.clone()),
            Currency::raw("JPY"),
            rates,
        );
        assert_eq!(conv.amount().unwrap(), "495");
        assert_eq!(conv.currency().unwrap(), Currency::raw("JPY"));
    }
}
