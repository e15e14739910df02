use crate::core::quote::RateCard;
use crate::core::region::{pricing_tiers, tier_rate, Region};
use crate::core::state::ProviderId;
use crate::providers::{FeeModel, Product};

/// The built-in card provider.
///
/// Unlike the modeled providers, its rates come from the per-region
/// pricing tier table and the product id selects a discrete tier
/// (`standard`, `eu-cards`, `international`). Tier selection is a thin
/// layer over the shared fee algebra, not a different algorithm.
pub struct Stripe;

const PRODUCTS: &[Product] = &[
    Product {
        id: "standard",
        label: "Standard cards",
    },
    Product {
        id: "eu-cards",
        label: "EU cards",
    },
    Product {
        id: "international",
        label: "International cards",
    },
];

impl FeeModel for Stripe {
    fn id(&self) -> ProviderId {
        ProviderId::Stripe
    }

    fn label(&self) -> &'static str {
        "Stripe"
    }

    fn products(&self) -> &'static [Product] {
        PRODUCTS
    }

    fn default_rate(&self, region: Region, product: &str) -> RateCard {
        tier_rate(region, product)
    }
}

impl Stripe {
    /// The tier ids available in a region, for callers building pickers.
    pub fn tier_ids(region: Region) -> Vec<&'static str> {
        pricing_tiers(region).iter().map(|t| t.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::tests::forward_input;
    use rust_decimal_macros::dec;

    #[test]
    fn test_uk_standard_ten_pounds() {
        let result = Stripe.quote(&forward_input(dec!(10.00)));
        assert_eq!(result.provider_fee(), dec!(0.35)); // 1.5% + 0.20
        assert_eq!(result.net_before_vat, dec!(9.65));
        assert!(result.denom_ok);
    }

    #[test]
    fn test_tier_selection_by_product() {
        let mut input = forward_input(dec!(100));
        input.product = "international".to_string();
        let result = Stripe.quote(&input);
        assert_eq!(result.meta.percent_used, dec!(3.25));
        assert_eq!(result.provider_fee(), dec!(3.45));
    }

    #[test]
    fn test_us_rates_differ() {
        let mut input = forward_input(dec!(100));
        input.region = Region::Us;
        let result = Stripe.quote(&input);
        assert_eq!(result.meta.percent_used, dec!(2.9));
        assert_eq!(result.meta.fixed_used, dec!(0.30));
    }

    #[test]
    fn test_tier_ids_match_products() {
        let ids = Stripe::tier_ids(Region::Uk);
        for p in Stripe.products() {
            assert!(ids.contains(&p.id));
        }
    }
}
