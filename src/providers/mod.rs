//! Pluggable provider fee models.
//!
//! Each payment provider is one implementation of [`FeeModel`],
//! registered in a static registry keyed by [`ProviderId`]. Adding a
//! provider means adding one implementation and one registry arm — the
//! dispatcher never changes.

pub mod adyen;
pub mod custom;
pub mod paypal;
pub mod square;
pub mod stripe;

use crate::core::quote::{QuoteInput, QuoteMeta, QuoteResult, RateCard};
use crate::core::region::Region;
use crate::core::state::ProviderId;
use crate::engine::breakdown;

pub use adyen::Adyen;
pub use custom::Custom;
pub use paypal::Paypal;
pub use square::Square;
pub use stripe::Stripe;

/// A product variant offered by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub label: &'static str,
}

/// A provider fee model.
///
/// All models share one formula shape: resolve the percent-plus-fixed
/// rate (override fields win over the table), then run the engine's
/// forward/reverse breakdown. The rate tables of the modeled providers
/// are indicative stand-ins, not contractual pricing.
pub trait FeeModel: Sync {
    fn id(&self) -> ProviderId;

    /// Built-in display name.
    fn label(&self) -> &'static str;

    /// Product variants, in declaration order. The first product is the
    /// fallback for unknown product ids. Never empty.
    fn products(&self) -> &'static [Product];

    /// Table rate for a region and product, before override resolution.
    fn default_rate(&self, region: Region, product: &str) -> RateCard;

    /// Display name for one quote. The custom provider resolves this
    /// from the scenario's label field.
    fn display_label(&self, _input: &QuoteInput) -> String {
        self.label().to_string()
    }

    /// Compute a quote for one transaction.
    fn quote(&self, input: &QuoteInput) -> QuoteResult {
        let table = self.default_rate(input.region, &input.product);
        let rate = RateCard {
            percent: input.percent_override.unwrap_or(table.percent),
            fixed: input.fixed_override.unwrap_or(table.fixed),
        };
        let meta = QuoteMeta {
            provider: self.id(),
            provider_label: self.display_label(input),
            product: input.product.clone(),
            percent_used: rate.percent,
            fixed_used: rate.fixed,
        };
        breakdown::compute(input, rate, meta)
    }
}

static STRIPE: Stripe = Stripe;
static PAYPAL: Paypal = Paypal;
static SQUARE: Square = Square;
static ADYEN: Adyen = Adyen;
static CUSTOM: Custom = Custom;

/// Look up the fee model for a provider id.
pub fn model(id: ProviderId) -> &'static dyn FeeModel {
    match id {
        ProviderId::Stripe => &STRIPE,
        ProviderId::Paypal => &PAYPAL,
        ProviderId::Square => &SQUARE,
        ProviderId::Adyen => &ADYEN,
        ProviderId::Custom => &CUSTOM,
    }
}

/// Every registered fee model, in registry order.
pub fn all_models() -> [&'static dyn FeeModel; 5] {
    [&STRIPE, &PAYPAL, &SQUARE, &ADYEN, &CUSTOM]
}
