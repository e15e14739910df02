use crate::core::quote::RateCard;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Billing region of the scenario.
///
/// The region selects the currency symbol and the default rate tables
/// used by the built-in card provider.
///
/// # Examples
///
/// ```
/// use pricing_engine::core::region::Region;
///
/// assert_eq!(Region::Uk.symbol(), "£");
/// assert_eq!(Region::Us.currency_code(), "USD");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Uk,
    Eu,
    Us,
}

impl Region {
    /// Currency symbol used for display.
    pub fn symbol(self) -> &'static str {
        match self {
            Region::Uk => "£",
            Region::Eu => "€",
            Region::Us => "$",
        }
    }

    /// ISO 4217 code of the region's billing currency.
    pub fn currency_code(self) -> &'static str {
        match self {
            Region::Uk => "GBP",
            Region::Eu => "EUR",
            Region::Us => "USD",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Uk => "UK",
            Region::Eu => "EU",
            Region::Us => "US",
        };
        write!(f, "{}", name)
    }
}

/// Error parsing a region identifier.
#[derive(Debug, Error)]
#[error("unknown region '{0}', expected uk, eu or us")]
pub struct ParseRegionError(String);

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uk" => Ok(Region::Uk),
            "eu" => Ok(Region::Eu),
            "us" => Ok(Region::Us),
            _ => Err(ParseRegionError(s.to_string())),
        }
    }
}

/// One discrete pricing tier of the built-in card provider.
///
/// Tiers are selected by the caller via the scenario's product id,
/// never computed from the transaction itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub id: &'static str,
    pub label: &'static str,
    pub rate: RateCard,
}

/// The per-region pricing tier table for the built-in card provider.
///
/// These rates are indicative stand-ins, not contractual pricing.
/// The first tier in each list is the fallback for unknown tier ids.
pub fn pricing_tiers(region: Region) -> Vec<PricingTier> {
    match region {
        Region::Uk => vec![
            PricingTier {
                id: "standard",
                label: "Standard UK cards",
                rate: RateCard::new(dec!(1.5), dec!(0.20)),
            },
            PricingTier {
                id: "eu-cards",
                label: "EU cards",
                rate: RateCard::new(dec!(2.5), dec!(0.20)),
            },
            PricingTier {
                id: "international",
                label: "International cards",
                rate: RateCard::new(dec!(3.25), dec!(0.20)),
            },
        ],
        Region::Eu => vec![
            PricingTier {
                id: "standard",
                label: "Standard EEA cards",
                rate: RateCard::new(dec!(1.5), dec!(0.25)),
            },
            PricingTier {
                id: "eu-cards",
                label: "Non-domestic EEA cards",
                rate: RateCard::new(dec!(2.5), dec!(0.25)),
            },
            PricingTier {
                id: "international",
                label: "International cards",
                rate: RateCard::new(dec!(3.25), dec!(0.25)),
            },
        ],
        Region::Us => vec![
            PricingTier {
                id: "standard",
                label: "Standard US cards",
                rate: RateCard::new(dec!(2.9), dec!(0.30)),
            },
            PricingTier {
                id: "eu-cards",
                label: "EEA cards",
                rate: RateCard::new(dec!(3.4), dec!(0.30)),
            },
            PricingTier {
                id: "international",
                label: "International cards",
                rate: RateCard::new(dec!(3.9), dec!(0.30)),
            },
        ],
    }
}

/// Look up a tier rate by id, falling back to the region's first tier.
pub fn tier_rate(region: Region, tier_id: &str) -> RateCard {
    let tiers = pricing_tiers(region);
    tiers
        .iter()
        .find(|t| t.id == tier_id)
        .map(|t| t.rate)
        .unwrap_or(tiers[0].rate)
}
