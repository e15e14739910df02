//! Higher-order analyses built on the quote engine.
//!
//! - **break_even** — reverse re-solve at a target net
//! - **sensitivity** — local fee-drift perturbation at fixed gross
//! - **volume** — monthly projection across weighted basket tiers

pub mod break_even;
pub mod sensitivity;
pub mod volume;

pub use break_even::{compute_break_even, BreakEven};
pub use sensitivity::{compute_sensitivity, SensitivityReport};
pub use volume::{compute_volume, TierBreakdown, VolumeProjection};

use crate::core::normalize::normalize_state;
use crate::core::quote::QuoteResult;
use crate::core::state::CalcState;
use crate::engine;
use serde::Serialize;
use std::fmt;

/// The base quote plus every enabled analysis, for one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub quote: QuoteResult,
    pub break_even: Option<BreakEven>,
    pub sensitivity: Option<SensitivityReport>,
    pub volume: Option<VolumeProjection>,
}

/// Run the quote and all enabled analyses for a scenario.
pub fn run_analyses(state: &CalcState) -> AnalysisReport {
    let state = normalize_state(state);
    let raw = engine::quote_raw(&state);
    AnalysisReport {
        break_even: compute_break_even(&state),
        sensitivity: compute_sensitivity(&state),
        volume: compute_volume(&state, &raw),
        quote: raw.rounded(),
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.quote)?;
        if let Some(be) = &self.break_even {
            writeln!(f)?;
            write!(f, "{}", be)?;
        }
        if let Some(s) = &self.sensitivity {
            writeln!(f)?;
            write!(f, "{}", s)?;
        }
        if let Some(v) = &self.volume {
            writeln!(f)?;
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_report_with_everything_off() {
        let state = CalcState::default();
        let report = run_analyses(&state);
        assert!(report.quote.denom_ok);
        assert!(report.break_even.is_none());
        assert!(report.sensitivity.is_none());
        assert!(report.volume.is_none());
    }

    #[test]
    fn test_report_with_everything_on() {
        let mut state = CalcState::default();
        state.amount = dec!(20);
        state.break_even.enabled = true;
        state.sensitivity.enabled = true;
        state.volume.enabled = true;
        let report = run_analyses(&state);
        assert!(report.break_even.is_some());
        assert!(report.sensitivity.is_some());
        assert!(report.volume.is_some());
    }
}
