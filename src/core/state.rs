use crate::core::money::RoundingStep;
use crate::core::region::Region;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a registered fee model.
///
/// `Custom` is a user-defined provider whose built-in rate is zero and
/// which is expected to be driven entirely by the override fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    #[default]
    Stripe,
    Paypal,
    Square,
    Adyen,
    Custom,
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            ProviderId::Stripe => "stripe",
            ProviderId::Paypal => "paypal",
            ProviderId::Square => "square",
            ProviderId::Adyen => "adyen",
            ProviderId::Custom => "custom",
        };
        write!(f, "{}", id)
    }
}

/// Error parsing a provider identifier.
#[derive(Debug, Error)]
#[error("unknown provider '{0}', expected stripe, paypal, square, adyen or custom")]
pub struct ParseProviderError(String);

impl FromStr for ProviderId {
    type Err = ParseProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stripe" => Ok(ProviderId::Stripe),
            "paypal" => Ok(ProviderId::Paypal),
            "square" => Ok(ProviderId::Square),
            "adyen" => Ok(ProviderId::Adyen),
            "custom" => Ok(ProviderId::Custom),
            _ => Err(ParseProviderError(s.to_string())),
        }
    }
}

/// Direction of the quote computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Customer price is given; compute the net proceeds.
    #[default]
    Forward,
    /// Target net is given; solve for the required customer price.
    Reverse,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Forward => write!(f, "forward"),
            Mode::Reverse => write!(f, "reverse"),
        }
    }
}

/// Base amount the platform's own cut is computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformFeeBase {
    /// Percent of the gross customer charge.
    #[default]
    Gross,
    /// Percent of what remains after the provider's fee.
    AfterProvider,
}

/// Which fee category the sensitivity analysis perturbs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensitivityTarget {
    #[default]
    All,
    Provider,
    Fx,
    Platform,
}

impl fmt::Display for SensitivityTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SensitivityTarget::All => "all",
            SensitivityTarget::Provider => "provider",
            SensitivityTarget::Fx => "fx",
            SensitivityTarget::Platform => "platform",
        };
        write!(f, "{}", name)
    }
}

/// One weighted slice of the monthly transaction mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeTier {
    /// Share of monthly transactions falling in this tier, 0–100.
    pub share_percent: Decimal,
    /// Customer price of a transaction in this tier.
    pub price: Decimal,
    /// FX surcharge percent applying to this tier.
    pub fx_percent: Decimal,
}

impl Default for VolumeTier {
    fn default() -> Self {
        Self {
            share_percent: dec!(100),
            price: dec!(25),
            fx_percent: Decimal::ZERO,
        }
    }
}

/// Break-even analysis settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakEvenConfig {
    pub enabled: bool,
    /// The net proceeds to break even on.
    pub target_net: Decimal,
}

impl Default for BreakEvenConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            target_net: dec!(100),
        }
    }
}

/// Fee-sensitivity analysis settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensitivityConfig {
    pub enabled: bool,
    /// Relative perturbation applied to the targeted percent(s), 0–100.
    pub delta_percent: Decimal,
    pub target: SensitivityTarget,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            delta_percent: dec!(10),
            target: SensitivityTarget::All,
        }
    }
}

/// Monthly volume projection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeConfig {
    pub enabled: bool,
    pub tx_per_month: u32,
    /// Expected refund rate applied to monthly net, 0–100.
    pub refund_rate_percent: Decimal,
    /// Weighted basket of transaction tiers. Never empty after
    /// normalization.
    pub tiers: Vec<VolumeTier>,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            tx_per_month: 100,
            refund_rate_percent: Decimal::ZERO,
            tiers: vec![VolumeTier::default()],
        }
    }
}

/// The single source of truth for one pricing scenario.
///
/// A `CalcState` is created with defaults, adjusted by the caller, and
/// normalized before every engine call. All engine entry points treat
/// it as an immutable snapshot.
///
/// # Examples
///
/// ```
/// use pricing_engine::core::state::CalcState;
/// use rust_decimal_macros::dec;
///
/// let mut state = CalcState::default();
/// state.amount = dec!(49.99);
/// let quote = pricing_engine::engine::quote(&state);
/// assert!(quote.denom_ok);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcState {
    pub provider: ProviderId,
    /// Provider-specific fee-model variant. For the built-in card
    /// provider this selects the regional pricing tier.
    pub product: String,
    pub region: Region,
    pub mode: Mode,
    /// Forward-mode input: the customer price. Clamped ≥ 0.
    pub amount: Decimal,
    /// Reverse-mode input: the desired net proceeds. Clamped ≥ 0.
    pub target_net: Decimal,
    /// Flat FX surcharge percent applied to gross, 0–100.
    pub fx_percent: Decimal,
    /// The platform's own cut, 0–100.
    pub platform_fee_percent: Decimal,
    pub platform_fee_base: PlatformFeeBase,
    /// VAT percent, 0–100. VAT is assumed included in the customer
    /// price and extracted arithmetically, never added on top.
    pub vat_percent: Decimal,
    pub rounding_step: RoundingStep,
    pub psych_pricing: bool,
    /// Override of the provider's percent rate. `None` means use the
    /// provider's table default.
    pub custom_percent: Option<Decimal>,
    /// Override of the provider's fixed fee. May be negative to model
    /// a per-transaction rebate.
    pub custom_fixed: Option<Decimal>,
    /// Display name for the custom provider. Emptied by normalization
    /// unless the provider is `custom`.
    pub custom_label: String,
    pub break_even: BreakEvenConfig,
    pub sensitivity: SensitivityConfig,
    pub volume: VolumeConfig,
}

impl Default for CalcState {
    fn default() -> Self {
        Self {
            provider: ProviderId::Stripe,
            product: "standard".to_string(),
            region: Region::Uk,
            mode: Mode::Forward,
            amount: dec!(25),
            target_net: dec!(100),
            fx_percent: Decimal::ZERO,
            platform_fee_percent: Decimal::ZERO,
            platform_fee_base: PlatformFeeBase::Gross,
            vat_percent: Decimal::ZERO,
            rounding_step: RoundingStep::OneCent,
            psych_pricing: false,
            custom_percent: None,
            custom_fixed: None,
            custom_label: String::new(),
            break_even: BreakEvenConfig::default(),
            sensitivity: SensitivityConfig::default(),
            volume: VolumeConfig::default(),
        }
    }
}
