use crate::core::quote::RateCard;
use crate::core::region::Region;
use crate::core::state::ProviderId;
use crate::providers::{FeeModel, Product};
use rust_decimal_macros::dec;

/// Modeled Square fee schedule. Indicative only.
pub struct Square;

const PRODUCTS: &[Product] = &[
    Product {
        id: "online",
        label: "Online payments",
    },
    Product {
        id: "invoices",
        label: "Invoices",
    },
];

impl FeeModel for Square {
    fn id(&self) -> ProviderId {
        ProviderId::Square
    }

    fn label(&self) -> &'static str {
        "Square"
    }

    fn products(&self) -> &'static [Product] {
        PRODUCTS
    }

    fn default_rate(&self, region: Region, product: &str) -> RateCard {
        match (product, region) {
            ("invoices", Region::Uk) => RateCard::new(dec!(2.5), dec!(0)),
            ("invoices", Region::Eu) => RateCard::new(dec!(2.5), dec!(0)),
            ("invoices", Region::Us) => RateCard::new(dec!(3.3), dec!(0.30)),
            (_, Region::Uk) => RateCard::new(dec!(1.4), dec!(0.25)),
            (_, Region::Eu) => RateCard::new(dec!(1.4), dec!(0.25)),
            (_, Region::Us) => RateCard::new(dec!(2.9), dec!(0.30)),
        }
    }
}
