//! Quote orchestration: price adjustment, provider dispatch, rounding.

pub mod breakdown;

use crate::core::money::{apply_psych_price, round_to_step};
use crate::core::normalize::normalize_state;
use crate::core::quote::{QuoteInput, QuoteResult};
use crate::core::state::{CalcState, Mode};
use crate::providers;
use log::debug;

/// Compute a quote for one transaction, rounded to the currency's
/// minor unit.
///
/// The state is normalized first, so callers may pass raw user input.
///
/// # Examples
///
/// ```
/// use pricing_engine::core::state::CalcState;
/// use rust_decimal_macros::dec;
///
/// let mut state = CalcState::default();
/// state.amount = dec!(10.00);
/// let result = pricing_engine::engine::quote(&state);
/// assert_eq!(result.provider_fee(), dec!(0.35)); // UK standard: 1.5% + 0.20
/// assert_eq!(result.net_before_vat, dec!(9.65));
/// ```
pub fn quote(state: &CalcState) -> QuoteResult {
    quote_raw(state).rounded()
}

/// Compute a quote at full precision, without display rounding.
///
/// The analysis layer builds on this form so that derived numbers are
/// not distorted by intermediate rounding.
pub fn quote_raw(state: &CalcState) -> QuoteResult {
    let state = normalize_state(state);
    let model = providers::model(state.provider);

    let amount = match state.mode {
        Mode::Forward => {
            let stepped = round_to_step(state.amount, state.rounding_step.step());
            if state.psych_pricing {
                apply_psych_price(stepped, state.rounding_step)
            } else {
                stepped
            }
        }
        // Reverse mode solves the gross; the amount field is unused.
        Mode::Reverse => state.amount,
    };

    debug!(
        "quote {} {} product={} amount={} target_net={}",
        state.provider, state.mode, state.product, amount, state.target_net
    );

    let input = QuoteInput {
        mode: state.mode,
        region: state.region,
        product: state.product.clone(),
        amount,
        target_net: state.target_net,
        fx_percent: state.fx_percent,
        platform_percent: state.platform_fee_percent,
        platform_base: state.platform_fee_base,
        vat_percent: state.vat_percent,
        percent_override: state.custom_percent,
        fixed_override: state.custom_fixed,
        custom_label: if state.custom_label.is_empty() {
            None
        } else {
            Some(state.custom_label.clone())
        },
    };

    model.quote(&input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::money::RoundingStep;
    use crate::core::state::{PlatformFeeBase, ProviderId};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_forward_basic_uk_scenario() {
        let mut state = CalcState::default();
        state.amount = dec!(10.00);
        let result = quote(&state);
        assert!(result.denom_ok);
        assert_eq!(result.gross, dec!(10.00));
        assert_eq!(result.provider_fee(), dec!(0.35));
        assert_eq!(result.net_before_vat, dec!(9.65));
        assert_eq!(result.symbol, "£");
    }

    #[test]
    fn test_forward_applies_rounding_step() {
        let mut state = CalcState::default();
        state.amount = dec!(10.034);
        state.rounding_step = RoundingStep::FiveCents;
        let result = quote(&state);
        assert_eq!(result.gross, dec!(10.05));
    }

    #[test]
    fn test_forward_applies_psych_pricing() {
        let mut state = CalcState::default();
        state.amount = dec!(19.70);
        state.psych_pricing = true;
        let result = quote(&state);
        assert_eq!(result.gross, dec!(19.99));

        state.rounding_step = RoundingStep::TenCents;
        let result = quote(&state);
        assert_eq!(result.gross, dec!(19.90));
    }

    #[test]
    fn test_reverse_ignores_price_adjustment() {
        let mut state = CalcState::default();
        state.mode = Mode::Reverse;
        state.target_net = dec!(100);
        state.psych_pricing = true;
        let result = quote(&state);
        assert!(result.denom_ok);
        // Solved charge is rounded to the minor unit only, not psych-priced
        assert_eq!(result.gross, dec!(101.73)); // (100 + 0.20) / 0.985
    }

    #[test]
    fn test_reverse_round_trip_within_display_tolerance() {
        let mut state = CalcState::default();
        state.mode = Mode::Reverse;
        state.target_net = dec!(250);
        state.fx_percent = dec!(2);
        state.platform_fee_percent = dec!(5);
        let reverse = quote(&state);
        assert!(reverse.denom_ok);

        let mut forward = state.clone();
        forward.mode = Mode::Forward;
        forward.amount = reverse.gross;
        let result = quote(&forward);
        assert!((result.net_before_vat - dec!(250)).abs() <= dec!(0.01));
    }

    #[test]
    fn test_unsolvable_reverse_is_flagged() {
        let mut state = CalcState::default();
        state.mode = Mode::Reverse;
        state.fx_percent = dec!(60);
        state.platform_fee_percent = dec!(40);
        let result = quote(&state);
        assert!(!result.denom_ok);
        assert_eq!(result.gross, Decimal::ZERO);
    }

    #[test]
    fn test_custom_label_flows_to_fee_line() {
        let mut state = CalcState::default();
        state.provider = ProviderId::Custom;
        state.product = "custom".to_string();
        state.custom_label = "Acme Pay".to_string();
        state.custom_percent = Some(dec!(1));
        let result = quote(&state);
        assert_eq!(result.meta.provider_label, "Acme Pay");
        assert_eq!(result.fees[0].label, "Acme Pay fee");
    }

    #[test]
    fn test_after_provider_base_round_trip() {
        let mut state = CalcState::default();
        state.mode = Mode::Reverse;
        state.target_net = dec!(75);
        state.platform_fee_percent = dec!(12);
        state.platform_fee_base = PlatformFeeBase::AfterProvider;
        let reverse = quote(&state);
        assert!(reverse.denom_ok);

        let mut forward = state.clone();
        forward.mode = Mode::Forward;
        forward.amount = reverse.gross;
        let result = quote(&forward);
        assert!((result.net_before_vat - dec!(75)).abs() <= dec!(0.01));
    }

    #[test]
    fn test_outputs_are_rounded() {
        let mut state = CalcState::default();
        state.amount = dec!(9.99);
        state.vat_percent = dec!(20);
        let result = quote(&state);
        assert!(result.vat_amount.scale() <= 2);
        assert!(result.net_after_vat.scale() <= 2);
    }
}
