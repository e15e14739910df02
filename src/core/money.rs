use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity for rounding a customer price.
///
/// Prices are snapped to the nearest multiple of the step before any
/// fee computation in forward mode.
///
/// # Examples
///
/// ```
/// use pricing_engine::core::money::{round_to_step, RoundingStep};
/// use rust_decimal_macros::dec;
///
/// let price = round_to_step(dec!(10.034), RoundingStep::FiveCents.step());
/// assert_eq!(price, dec!(10.05));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundingStep {
    #[default]
    #[serde(rename = "0.01")]
    OneCent,
    #[serde(rename = "0.05")]
    FiveCents,
    #[serde(rename = "0.10")]
    TenCents,
}

impl RoundingStep {
    /// The step size as a decimal amount.
    pub fn step(self) -> Decimal {
        match self {
            RoundingStep::OneCent => dec!(0.01),
            RoundingStep::FiveCents => dec!(0.05),
            RoundingStep::TenCents => dec!(0.10),
        }
    }

    /// The fractional ending used by psychological pricing at this step.
    ///
    /// A price rounded at 0.01 ends in .99, at 0.05 in .95, at 0.10 in .90.
    pub fn psych_ending(self) -> Decimal {
        match self {
            RoundingStep::OneCent => dec!(0.99),
            RoundingStep::FiveCents => dec!(0.95),
            RoundingStep::TenCents => dec!(0.90),
        }
    }
}

impl fmt::Display for RoundingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.step())
    }
}

/// Round a value to the nearest multiple of `step`, half-up at the
/// step granularity.
///
/// A non-positive step leaves the value unchanged.
pub fn round_to_step(value: Decimal, step: Decimal) -> Decimal {
    if step <= Decimal::ZERO {
        return value;
    }
    let multiples =
        (value / step).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    multiples * step
}

/// Force a price to a "psychological" ending: integer floor plus the
/// step-keyed fraction (.99, .95 or .90).
///
/// Values ≤ 0 pass through unchanged.
pub fn apply_psych_price(value: Decimal, step: RoundingStep) -> Decimal {
    if value <= Decimal::ZERO {
        return value;
    }
    value.floor() + step.psych_ending()
}

/// Round to the currency's minor unit (2 decimal places), half-up.
pub fn round_money(n: Decimal) -> Decimal {
    n.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_step_half_up() {
        assert_eq!(round_to_step(dec!(10.034), dec!(0.05)), dec!(10.05));
        assert_eq!(round_to_step(dec!(10.024), dec!(0.05)), dec!(10.00));
        assert_eq!(round_to_step(dec!(10.025), dec!(0.05)), dec!(10.05));
        assert_eq!(round_to_step(dec!(19.99), dec!(0.10)), dec!(20.00));
    }

    #[test]
    fn test_round_to_step_penny_is_money_rounding() {
        assert_eq!(round_to_step(dec!(9.994), dec!(0.01)), dec!(9.99));
        assert_eq!(round_to_step(dec!(9.995), dec!(0.01)), dec!(10.00));
    }

    #[test]
    fn test_round_to_step_degenerate_step() {
        assert_eq!(round_to_step(dec!(12.34), Decimal::ZERO), dec!(12.34));
    }

    #[test]
    fn test_psych_price_endings() {
        assert_eq!(
            apply_psych_price(dec!(19.7), RoundingStep::OneCent),
            dec!(19.99)
        );
        assert_eq!(
            apply_psych_price(dec!(19.7), RoundingStep::FiveCents),
            dec!(19.95)
        );
        assert_eq!(
            apply_psych_price(dec!(19.7), RoundingStep::TenCents),
            dec!(19.90)
        );
    }

    #[test]
    fn test_psych_price_non_positive_passthrough() {
        assert_eq!(
            apply_psych_price(Decimal::ZERO, RoundingStep::OneCent),
            Decimal::ZERO
        );
        assert_eq!(
            apply_psych_price(dec!(-5), RoundingStep::TenCents),
            dec!(-5)
        );
    }

    #[test]
    fn test_round_money() {
        assert_eq!(round_money(dec!(9.654)), dec!(9.65));
        assert_eq!(round_money(dec!(9.655)), dec!(9.66));
        assert_eq!(round_money(dec!(0.1)), dec!(0.10));
    }

    #[test]
    fn test_step_serde_names() {
        let json = serde_json::to_string(&RoundingStep::FiveCents).unwrap();
        assert_eq!(json, "\"0.05\"");
        let step: RoundingStep = serde_json::from_str("\"0.10\"").unwrap();
        assert_eq!(step, RoundingStep::TenCents);
    }
}
