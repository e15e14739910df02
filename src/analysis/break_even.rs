use crate::core::money::round_money;
use crate::core::normalize::normalize_state;
use crate::core::state::{CalcState, Mode};
use crate::engine;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The charge required to take home a target net.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEven {
    pub target_net: Decimal,
    pub required_charge: Decimal,
    /// `false` when the fee configuration makes the target unreachable.
    pub denom_ok: bool,
}

/// Solve for the customer charge that nets the break-even target.
///
/// Returns `None` when the analysis is disabled or the target is
/// negative.
pub fn compute_break_even(state: &CalcState) -> Option<BreakEven> {
    let state = normalize_state(state);
    if !state.break_even.enabled || state.break_even.target_net < Decimal::ZERO {
        return None;
    }

    let mut probe = state.clone();
    probe.mode = Mode::Reverse;
    probe.target_net = state.break_even.target_net;
    let result = engine::quote_raw(&probe);

    Some(BreakEven {
        target_net: state.break_even.target_net,
        required_charge: round_money(result.gross),
        denom_ok: result.denom_ok,
    })
}

impl fmt::Display for BreakEven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Break-Even ===")?;
        writeln!(f, "Target net:      {}", self.target_net)?;
        if self.denom_ok {
            writeln!(f, "Required charge: {}", self.required_charge)
        } else {
            writeln!(f, "Required charge: unreachable (fees ≥ 100%)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_disabled_returns_none() {
        let state = CalcState::default();
        assert!(compute_break_even(&state).is_none());
    }

    #[test]
    fn test_negative_target_returns_none() {
        let mut state = CalcState::default();
        state.break_even.enabled = true;
        state.break_even.target_net = dec!(-1);
        assert!(compute_break_even(&state).is_none());
    }

    #[test]
    fn test_basic_break_even() {
        let mut state = CalcState::default();
        state.break_even.enabled = true;
        state.break_even.target_net = dec!(100);
        let be = compute_break_even(&state).unwrap();
        assert!(be.denom_ok);
        // UK standard 1.5% + 0.20: (100 + 0.20) / 0.985
        assert_eq!(be.required_charge, dec!(101.73));
    }

    #[test]
    fn test_mode_of_scenario_is_irrelevant() {
        let mut state = CalcState::default();
        state.break_even.enabled = true;
        state.break_even.target_net = dec!(100);
        let forward = compute_break_even(&state).unwrap();
        state.mode = Mode::Reverse;
        let reverse = compute_break_even(&state).unwrap();
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_unreachable_target_is_flagged() {
        let mut state = CalcState::default();
        state.break_even.enabled = true;
        state.break_even.target_net = dec!(100);
        state.fx_percent = dec!(70);
        state.platform_fee_percent = dec!(30);
        let be = compute_break_even(&state).unwrap();
        assert!(!be.denom_ok);
        assert_eq!(be.required_charge, Decimal::ZERO);
    }
}
