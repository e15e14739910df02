//! Basic forward and reverse quoting example.
//!
//! Demonstrates how the pricing engine decomposes a customer charge
//! into fees and net proceeds, and how it solves the reverse problem.

use pricing_engine::core::state::{CalcState, Mode, PlatformFeeBase};
use pricing_engine::engine;
use rust_decimal_macros::dec;

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  pricing-engine: Basic Quoting Example   ║");
    println!("╚══════════════════════════════════════════╝\n");

    // --- Scenario 1: Forward quote ---
    println!("━━━ Scenario 1: Forward (price → net) ━━━\n");

    let mut state = CalcState::default();
    state.amount = dec!(49.99);
    state.fx_percent = dec!(1);
    state.platform_fee_percent = dec!(10);
    state.platform_fee_base = PlatformFeeBase::AfterProvider;
    state.vat_percent = dec!(20);

    let forward = engine::quote(&state);
    println!("{}", forward);

    // --- Scenario 2: Reverse quote ---
    println!("━━━ Scenario 2: Reverse (target net → price) ━━━\n");

    state.mode = Mode::Reverse;
    state.target_net = dec!(40);

    let reverse = engine::quote(&state);
    println!("{}", reverse);

    println!(
        "To net {}{}, charge {}{}",
        reverse.symbol, state.target_net, reverse.symbol, reverse.gross
    );
}
