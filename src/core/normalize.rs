//! Scenario canonicalization.
//!
//! `normalize_state` is total and idempotent: malformed or out-of-range
//! input is clamped or defaulted, never rejected. The engine is invoked
//! continuously from live user input, so every repair is silent.

use crate::core::state::{CalcState, ProviderId, VolumeTier};
use crate::providers;
use rust_decimal::Decimal;

fn clamp_percent(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, Decimal::from(100))
}

fn clamp_money(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Produce the canonical, always-valid form of a scenario.
///
/// Guarantees on the output:
/// - every percentage field lies in [0, 100];
/// - `amount` and `target_net` are ≥ 0;
/// - the provider/product pair is valid (unknown products fall back to
///   the provider's first product);
/// - `volume.tiers` is non-empty (a single 100%-share tier at the
///   current amount is synthesized when absent);
/// - `custom_label` is empty unless the provider is `custom`.
///
/// The fixed-fee override is deliberately left unclamped: a negative
/// value models a per-transaction rebate.
///
/// # Examples
///
/// ```
/// use pricing_engine::core::normalize::normalize_state;
/// use pricing_engine::core::state::CalcState;
/// use rust_decimal_macros::dec;
///
/// let mut state = CalcState::default();
/// state.fx_percent = dec!(250);
/// let normalized = normalize_state(&state);
/// assert_eq!(normalized.fx_percent, dec!(100));
/// assert_eq!(normalize_state(&normalized), normalized);
/// ```
pub fn normalize_state(state: &CalcState) -> CalcState {
    let mut s = state.clone();

    s.amount = clamp_money(s.amount);
    s.target_net = clamp_money(s.target_net);
    s.fx_percent = clamp_percent(s.fx_percent);
    s.platform_fee_percent = clamp_percent(s.platform_fee_percent);
    s.vat_percent = clamp_percent(s.vat_percent);
    s.custom_percent = s.custom_percent.map(clamp_percent);

    let model = providers::model(s.provider);
    if !model.products().iter().any(|p| p.id == s.product) {
        s.product = model.products()[0].id.to_string();
    }

    if s.provider != ProviderId::Custom {
        s.custom_label.clear();
    }

    s.sensitivity.delta_percent = clamp_percent(s.sensitivity.delta_percent);
    s.volume.refund_rate_percent = clamp_percent(s.volume.refund_rate_percent);
    for tier in &mut s.volume.tiers {
        tier.share_percent = clamp_percent(tier.share_percent);
        tier.price = clamp_money(tier.price);
        tier.fx_percent = clamp_percent(tier.fx_percent);
    }
    if s.volume.tiers.is_empty() {
        s.volume.tiers.push(VolumeTier {
            share_percent: Decimal::from(100),
            price: s.amount,
            fx_percent: s.fx_percent,
        });
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percent_clamping() {
        let mut state = CalcState::default();
        state.fx_percent = dec!(-5);
        state.platform_fee_percent = dec!(150);
        state.vat_percent = dec!(101);
        let s = normalize_state(&state);
        assert_eq!(s.fx_percent, Decimal::ZERO);
        assert_eq!(s.platform_fee_percent, dec!(100));
        assert_eq!(s.vat_percent, dec!(100));
    }

    #[test]
    fn test_money_clamping() {
        let mut state = CalcState::default();
        state.amount = dec!(-10);
        state.target_net = dec!(-1);
        let s = normalize_state(&state);
        assert_eq!(s.amount, Decimal::ZERO);
        assert_eq!(s.target_net, Decimal::ZERO);
    }

    #[test]
    fn test_fixed_override_keeps_rebates() {
        let mut state = CalcState::default();
        state.custom_fixed = Some(dec!(-0.25));
        let s = normalize_state(&state);
        assert_eq!(s.custom_fixed, Some(dec!(-0.25)));
    }

    #[test]
    fn test_percent_override_is_clamped() {
        let mut state = CalcState::default();
        state.custom_percent = Some(dec!(400));
        let s = normalize_state(&state);
        assert_eq!(s.custom_percent, Some(dec!(100)));
    }

    #[test]
    fn test_unknown_product_falls_back_to_first() {
        let mut state = CalcState::default();
        state.product = "no-such-product".to_string();
        let s = normalize_state(&state);
        assert_eq!(s.product, "standard");
    }

    #[test]
    fn test_product_repair_respects_provider() {
        let mut state = CalcState::default();
        state.provider = ProviderId::Paypal;
        state.product = "standard".to_string(); // a stripe tier, not a paypal product
        let s = normalize_state(&state);
        assert_eq!(s.product, "checkout");
    }

    #[test]
    fn test_custom_label_cleared_for_real_providers() {
        let mut state = CalcState::default();
        state.custom_label = "Acme Pay".to_string();
        let s = normalize_state(&state);
        assert!(s.custom_label.is_empty());

        state.provider = ProviderId::Custom;
        state.product = "custom".to_string();
        let s = normalize_state(&state);
        assert_eq!(s.custom_label, "Acme Pay");
    }

    #[test]
    fn test_empty_tiers_synthesized() {
        let mut state = CalcState::default();
        state.amount = dec!(40);
        state.fx_percent = dec!(2);
        state.volume.tiers.clear();
        let s = normalize_state(&state);
        assert_eq!(s.volume.tiers.len(), 1);
        assert_eq!(s.volume.tiers[0].share_percent, dec!(100));
        assert_eq!(s.volume.tiers[0].price, dec!(40));
        assert_eq!(s.volume.tiers[0].fx_percent, dec!(2));
    }

    #[test]
    fn test_tier_fields_clamped() {
        let mut state = CalcState::default();
        state.volume.tiers = vec![VolumeTier {
            share_percent: dec!(130),
            price: dec!(-4),
            fx_percent: dec!(-1),
        }];
        let s = normalize_state(&state);
        assert_eq!(s.volume.tiers[0].share_percent, dec!(100));
        assert_eq!(s.volume.tiers[0].price, Decimal::ZERO);
        assert_eq!(s.volume.tiers[0].fx_percent, Decimal::ZERO);
    }

    #[test]
    fn test_idempotence() {
        let mut state = CalcState::default();
        state.fx_percent = dec!(-3);
        state.product = "bogus".to_string();
        state.volume.tiers.clear();
        state.custom_label = "label".to_string();
        let once = normalize_state(&state);
        let twice = normalize_state(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_break_even_target_not_clamped() {
        // A negative break-even target disables the analysis instead of
        // being silently repaired.
        let mut state = CalcState::default();
        state.break_even.target_net = dec!(-50);
        let s = normalize_state(&state);
        assert_eq!(s.break_even.target_net, dec!(-50));
    }
}
