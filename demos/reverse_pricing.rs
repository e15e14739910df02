//! Break-even, sensitivity and volume analysis example.
//!
//! Builds one marketplace scenario and runs every analysis on it.

use pricing_engine::analysis::run_analyses;
use pricing_engine::core::state::{CalcState, SensitivityTarget, VolumeTier};
use rust_decimal_macros::dec;

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  pricing-engine: Analysis Example        ║");
    println!("╚══════════════════════════════════════════╝\n");

    let mut state = CalcState::default();
    state.amount = dec!(29.99);
    state.fx_percent = dec!(2);
    state.platform_fee_percent = dec!(8);
    state.vat_percent = dec!(20);

    state.break_even.enabled = true;
    state.break_even.target_net = dec!(25);

    state.sensitivity.enabled = true;
    state.sensitivity.delta_percent = dec!(15);
    state.sensitivity.target = SensitivityTarget::All;

    state.volume.enabled = true;
    state.volume.tx_per_month = 400;
    state.volume.refund_rate_percent = dec!(3);
    state.volume.tiers = vec![
        VolumeTier {
            share_percent: dec!(55),
            price: dec!(29.99),
            fx_percent: dec!(2),
        },
        VolumeTier {
            share_percent: dec!(35),
            price: dec!(9.99),
            fx_percent: dec!(0),
        },
        VolumeTier {
            share_percent: dec!(10),
            price: dec!(99.99),
            fx_percent: dec!(2),
        },
    ];

    let report = run_analyses(&state);
    println!("{}", report);
}
