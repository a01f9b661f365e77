use crate::decimal::{Money, Percent, Rate};
use crate::error::{ConfigError, ProjectionError};

/// How the down payment was specified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownPayment {
    Amount(Money),
    PercentOfPrice(Percent),
}

impl DownPayment {
    /// Resolve the two mutually exclusive scenario inputs; exactly one is required.
    /// A zero counts as not supplied.
    pub fn from_inputs(
        amount: Option<Money>,
        percent: Option<Percent>,
    ) -> Result<Self, ConfigError> {
        let amount = amount.filter(|amount| !amount.is_zero());
        let percent = percent.filter(|percent| !percent.is_zero());
        match (amount, percent) {
            (Some(_), Some(_)) => Err(ConfigError::ConflictingDownPayment),
            (Some(amount), None) => Ok(DownPayment::Amount(amount)),
            (None, Some(percent)) => Ok(DownPayment::PercentOfPrice(percent)),
            (None, None) => Err(ConfigError::MissingDownPayment),
        }
    }
}

/// The acquisition: price, cash put down, and purchase closing costs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub price: Money,
    pub down_payment: Money,
    pub down_payment_percent: Percent,
    pub closing_cost_rate: Rate,
    pub closing_cost: Money,
    /// Cash needed at closing: down payment plus closing cost
    pub initial_cost: Money,
}

impl Purchase {
    pub fn new(
        price: Money,
        down_payment: DownPayment,
        closing_cost_rate: Rate,
    ) -> Result<Self, ProjectionError> {
        if !price.is_positive() {
            return Err(ConfigError::NonPositivePrice.into());
        }
        if closing_cost_rate.is_negative() {
            return Err(ConfigError::Negative {
                field: "purchase.closing_cost_percent",
            }
            .into());
        }

        let (down_payment, down_payment_percent) = match down_payment {
            DownPayment::Amount(amount) => {
                let percent = (amount * Percent::from_int(100))
                    .checked_div(price, "down payment percent")?
                    .cast();
                (amount.round_cents(), percent)
            }
            DownPayment::PercentOfPrice(percent) => {
                ((price * percent.rate()).round_cents(), percent)
            }
        };

        if down_payment.is_negative() {
            return Err(ConfigError::Negative {
                field: "purchase.down_payment",
            }
            .into());
        }
        if down_payment > price {
            return Err(ConfigError::DownPaymentExceedsPrice {
                down_payment,
                price,
            }
            .into());
        }

        let closing_cost = (price * closing_cost_rate).round_cents();
        Ok(Self {
            price,
            down_payment,
            down_payment_percent,
            closing_cost_rate,
            closing_cost,
            initial_cost: down_payment + closing_cost,
        })
    }

    pub fn loan_amount(&self) -> Money {
        self.price - self.down_payment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percent_down_payment() {
        let purchase = Purchase::new(
            Money::from_int(890_000),
            DownPayment::PercentOfPrice(Percent::from_int(20)),
            Rate::from_percent(dec!(2)),
        )
        .unwrap();

        assert_eq!(purchase.down_payment, Money::from_int(178_000));
        assert_eq!(purchase.closing_cost, Money::from_int(17_800));
        assert_eq!(purchase.initial_cost, Money::from_int(195_800));
        assert_eq!(purchase.loan_amount(), Money::from_int(712_000));
    }

    #[test]
    fn test_absolute_down_payment_derives_percent() {
        let purchase = Purchase::new(
            Money::from_int(500_000),
            DownPayment::Amount(Money::from_int(125_000)),
            Rate::ZERO,
        )
        .unwrap();

        assert_eq!(purchase.down_payment_percent, Percent::from_int(25));
        assert_eq!(purchase.initial_cost, Money::from_int(125_000));
    }

    #[test]
    fn test_down_payment_inputs_are_mutually_exclusive() {
        assert_eq!(
            DownPayment::from_inputs(Some(Money::ONE), Some(Percent::ONE)),
            Err(ConfigError::ConflictingDownPayment)
        );
        assert_eq!(
            DownPayment::from_inputs(None, None),
            Err(ConfigError::MissingDownPayment)
        );
    }

    #[test]
    fn test_zero_down_payment_counts_as_missing() {
        assert_eq!(
            DownPayment::from_inputs(Some(Money::ZERO), None),
            Err(ConfigError::MissingDownPayment)
        );
        assert_eq!(
            DownPayment::from_inputs(None, Some(Percent::ZERO)),
            Err(ConfigError::MissingDownPayment)
        );
        assert_eq!(
            DownPayment::from_inputs(Some(Money::ZERO), Some(Percent::from_int(20))),
            Ok(DownPayment::PercentOfPrice(Percent::from_int(20)))
        );
    }

    #[test]
    fn test_rejects_down_payment_above_price() {
        let err = Purchase::new(
            Money::from_int(100),
            DownPayment::Amount(Money::from_int(101)),
            Rate::ZERO,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::Config(ConfigError::DownPaymentExceedsPrice { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_price() {
        let err = Purchase::new(
            Money::ZERO,
            DownPayment::Amount(Money::ZERO),
            Rate::ZERO,
        )
        .unwrap_err();
        assert_eq!(err, ProjectionError::Config(ConfigError::NonPositivePrice));
    }
}
