use crate::core::money::round_money;
use crate::core::normalize::normalize_state;
use crate::core::quote::QuoteResult;
use crate::core::state::{CalcState, PlatformFeeBase, SensitivityTarget};
use crate::engine;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Net proceeds under an upward and downward drift of the targeted
/// fee percentage(s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityReport {
    pub delta_percent: Decimal,
    pub target: SensitivityTarget,
    pub base_net: Decimal,
    pub net_up: Decimal,
    pub net_down: Decimal,
}

/// Perturb the targeted fee percentage(s) by ±delta and recompute net.
///
/// This is a local drift model: the gross charge stays fixed at its
/// current value and only the fee composition moves — the charge is
/// NOT re-solved against the shifted fees. Fixed fees are likewise
/// held constant. Returns `None` when the analysis is disabled or the
/// base quote is invalid.
pub fn compute_sensitivity(state: &CalcState) -> Option<SensitivityReport> {
    let state = normalize_state(state);
    if !state.sensitivity.enabled {
        return None;
    }

    let base = engine::quote_raw(&state);
    if !base.denom_ok {
        return None;
    }

    let delta = state.sensitivity.delta_percent;
    let hundred = Decimal::from(100);
    let up = perturbed_net(&state, &base, Decimal::ONE + delta / hundred);
    let down = perturbed_net(&state, &base, Decimal::ONE - delta / hundred);

    Some(SensitivityReport {
        delta_percent: delta,
        target: state.sensitivity.target,
        base_net: round_money(base.net_before_vat),
        net_up: round_money(up),
        net_down: round_money(down),
    })
}

/// Net before VAT with the targeted percentages scaled by `factor`,
/// against the unperturbed gross.
fn perturbed_net(state: &CalcState, base: &QuoteResult, factor: Decimal) -> Decimal {
    let target = state.sensitivity.target;
    let hundred = Decimal::from(100);
    let scale = |hit: bool, percent: Decimal| if hit { percent * factor } else { percent };

    let p = scale(
        matches!(target, SensitivityTarget::All | SensitivityTarget::Provider),
        base.meta.percent_used,
    ) / hundred;
    let fxp = scale(
        matches!(target, SensitivityTarget::All | SensitivityTarget::Fx),
        state.fx_percent,
    ) / hundred;
    let plat = scale(
        matches!(target, SensitivityTarget::All | SensitivityTarget::Platform),
        state.platform_fee_percent,
    ) / hundred;

    let gross = base.gross;
    let provider_fee = gross * p + base.meta.fixed_used;
    let fx_fee = gross * fxp;
    let platform_fee = match state.platform_fee_base {
        PlatformFeeBase::Gross => gross * plat,
        PlatformFeeBase::AfterProvider => (gross - provider_fee) * plat,
    };
    gross - provider_fee - fx_fee - platform_fee
}

impl fmt::Display for SensitivityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Fee Sensitivity (±{}%) ===", self.delta_percent)?;
        writeln!(f, "Target:    {}", self.target)?;
        writeln!(f, "Base net:  {}", self.base_net)?;
        writeln!(f, "Fees up:   {}", self.net_up)?;
        writeln!(f, "Fees down: {}", self.net_down)
    }
}
