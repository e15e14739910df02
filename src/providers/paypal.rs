use crate::core::quote::RateCard;
use crate::core::region::Region;
use crate::core::state::ProviderId;
use crate::providers::{FeeModel, Product};
use rust_decimal_macros::dec;

/// Modeled PayPal fee schedule. Indicative only.
pub struct Paypal;

const PRODUCTS: &[Product] = &[
    Product {
        id: "checkout",
        label: "PayPal Checkout",
    },
    Product {
        id: "micropayments",
        label: "Micropayments",
    },
];

impl FeeModel for Paypal {
    fn id(&self) -> ProviderId {
        ProviderId::Paypal
    }

    fn label(&self) -> &'static str {
        "PayPal"
    }

    fn products(&self) -> &'static [Product] {
        PRODUCTS
    }

    fn default_rate(&self, region: Region, product: &str) -> RateCard {
        match (product, region) {
            ("micropayments", Region::Uk) => RateCard::new(dec!(5.0), dec!(0.05)),
            ("micropayments", Region::Eu) => RateCard::new(dec!(5.0), dec!(0.05)),
            ("micropayments", Region::Us) => RateCard::new(dec!(4.99), dec!(0.09)),
            (_, Region::Uk) => RateCard::new(dec!(2.9), dec!(0.30)),
            (_, Region::Eu) => RateCard::new(dec!(3.4), dec!(0.35)),
            (_, Region::Us) => RateCard::new(dec!(3.49), dec!(0.49)),
        }
    }
}
