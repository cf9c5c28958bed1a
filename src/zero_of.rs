//! `ZeroOf` turns any money value into a zero of the same currency and scale,
//! for things like opening balances and empty totals.

use crate::{
    currency::Currency,
    error::Result,
    money::Money,
};

/// Zero, in the currency and scale of `origin`. The origin's amount is never
/// evaluated.
#[derive(Clone, Debug)]
pub struct ZeroOf<M> {
    origin: M,
}

impl<M> ZeroOf<M> {
    /// Create a zero of `origin`'s currency.
    pub fn new(origin: M) -> Self {
        Self { origin }
    }
}

impl<M: Money> Money for ZeroOf<M> {
    fn amount(&self) -> Result<String> {
        Ok("0".into())
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
        just_money::JustMoney,
        operations::Minus,
        util::test::*,
    };
    use proptest::prelude::*;

    #[test]
    fn zeroes() {
        let zero = ZeroOf::new(JustMoney::new("128.256", Currency::raw("USD"), 4).unwrap());
        assert_eq!(zero.currency().unwrap().as_str(), "USD");
        assert_eq!(zero.amount().unwrap(), "0");
        assert_eq!(zero.scale(), 4);
    }

    #[test]
    fn never_evaluates_origin() {
        let zero = ZeroOf::new(BrokenMoney::new(Currency::raw("BYN")));
        assert_eq!(zero.amount().unwrap(), "0");
        assert_eq!(zero.currency().unwrap(), Currency::raw("BYN"));
    }

    proptest! {
        #[test]
        fn idempotent(amount in decimal_literal(6), scale in 0u32..8) {
            let money = eur(&amount, scale);
            let once = ZeroOf::new(&money);
            let twice = ZeroOf::new(ZeroOf::new(Minus::new(&money)));
            prop_assert_eq!(once.amount().unwrap(), "0");
            prop_assert_eq!(twice.amount().unwrap(), "0");
            prop_assert_eq!(once.currency().unwrap(), money.currency().unwrap());
            prop_assert_eq!(twice.currency().unwrap(), money.currency().unwrap());
            prop_assert_eq!(twice.scale(), scale);
        }
    }
}
