use crate::core::quote::RateCard;
use crate::core::region::Region;
use crate::core::state::ProviderId;
use crate::providers::{FeeModel, Product};
use rust_decimal_macros::dec;

/// Modeled Adyen fee schedule. Indicative only — Adyen actually prices
/// interchange++, which this flat percent-plus-fixed table stands in for.
pub struct Adyen;

const PRODUCTS: &[Product] = &[
    Product {
        id: "cards",
        label: "Card processing",
    },
    Product {
        id: "platform",
        label: "Platform / marketplace",
    },
];

impl FeeModel for Adyen {
    fn id(&self) -> ProviderId {
        ProviderId::Adyen
    }

    fn label(&self) -> &'static str {
        "Adyen"
    }

    fn products(&self) -> &'static [Product] {
        PRODUCTS
    }

    fn default_rate(&self, region: Region, product: &str) -> RateCard {
        match (product, region) {
            ("platform", Region::Uk) => RateCard::new(dec!(1.65), dec!(0.11)),
            ("platform", Region::Eu) => RateCard::new(dec!(1.65), dec!(0.11)),
            ("platform", Region::Us) => RateCard::new(dec!(2.85), dec!(0.13)),
            (_, Region::Uk) => RateCard::new(dec!(1.4), dec!(0.11)),
            (_, Region::Eu) => RateCard::new(dec!(1.4), dec!(0.11)),
            (_, Region::Us) => RateCard::new(dec!(2.6), dec!(0.13)),
        }
    }
}
