//! # pricing-engine
//!
//! Open payment pricing and fee quoting engine.
//!
//! Given a scenario configuration (provider, region, pricing model, fee
//! assumptions), this engine computes the customer charge, a full fee
//! breakdown, and net proceeds — forward (price → net) or reverse
//! (target net → required price) — plus break-even, fee-sensitivity,
//! and monthly volume analyses.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: scenario state, money utilities, regions, quotes
//! - **providers** — Pluggable fee models behind one `FeeModel` trait
//! - **engine** — Forward/reverse fee algebra, VAT extraction, dispatch
//! - **analysis** — Break-even, fee sensitivity, monthly volume projection

pub mod analysis;
pub mod core;
pub mod engine;
pub mod providers;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::analysis::{run_analyses, AnalysisReport};
    pub use crate::core::normalize::normalize_state;
    pub use crate::core::quote::{QuoteInput, QuoteResult};
    pub use crate::core::region::Region;
    pub use crate::core::state::{CalcState, Mode, PlatformFeeBase, ProviderId};
    pub use crate::engine::quote;
    pub use crate::providers::FeeModel;
}
