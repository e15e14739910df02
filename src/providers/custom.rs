use crate::core::quote::{QuoteInput, RateCard};
use crate::core::region::Region;
use crate::core::state::ProviderId;
use crate::providers::{FeeModel, Product};

/// User-defined provider.
///
/// The built-in rate is always 0% + 0; real numbers come from the
/// scenario's override fields. The display name comes from the
/// scenario's custom label when one is set.
pub struct Custom;

const PRODUCTS: &[Product] = &[Product {
    id: "custom",
    label: "Custom rate",
}];

impl FeeModel for Custom {
    fn id(&self) -> ProviderId {
        ProviderId::Custom
    }

    fn label(&self) -> &'static str {
        "Custom"
    }

    fn products(&self) -> &'static [Product] {
        PRODUCTS
    }

    fn default_rate(&self, _region: Region, _product: &str) -> RateCard {
        RateCard::zero()
    }

    fn display_label(&self, input: &QuoteInput) -> String {
        input
            .custom_label
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(self.label())
            .to_string()
    }
}
