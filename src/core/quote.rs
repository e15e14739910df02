use crate::core::money::round_money;
use crate::core::region::Region;
use crate::core::state::{Mode, PlatformFeeBase, ProviderId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Percent-plus-fixed fee rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCard {
    /// Percent of gross, e.g. `1.5` for 1.5%.
    pub percent: Decimal,
    /// Fixed amount per transaction.
    pub fixed: Decimal,
}

impl RateCard {
    pub fn new(percent: Decimal, fixed: Decimal) -> Self {
        Self { percent, fixed }
    }

    /// A zero rate (used by the custom provider's built-in table).
    pub fn zero() -> Self {
        Self {
            percent: Decimal::ZERO,
            fixed: Decimal::ZERO,
        }
    }
}

impl fmt::Display for RateCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% + {}", self.percent, self.fixed)
    }
}

/// Category of a fee component in a quote breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeKind {
    Provider,
    Fx,
    Platform,
}

/// One line of the fee breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeLine {
    pub kind: FeeKind,
    pub label: String,
    pub amount: Decimal,
}

/// Provenance of a quote: which model produced it and which rate it
/// actually used after override resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteMeta {
    pub provider: ProviderId,
    pub provider_label: String,
    pub product: String,
    pub percent_used: Decimal,
    pub fixed_used: Decimal,
}

/// Normalized input handed to a fee model's `quote` operation.
///
/// In forward mode `amount` is the customer price, already adjusted by
/// the engine's rounding-step and psychological-pricing pass. In
/// reverse mode `target_net` drives the algebraic solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteInput {
    pub mode: Mode,
    pub region: Region,
    pub product: String,
    pub amount: Decimal,
    pub target_net: Decimal,
    pub fx_percent: Decimal,
    pub platform_percent: Decimal,
    pub platform_base: PlatformFeeBase,
    pub vat_percent: Decimal,
    /// Override of the provider's percent rate; `None` means table default.
    pub percent_override: Option<Decimal>,
    /// Override of the provider's fixed fee; `None` means table default.
    pub fixed_override: Option<Decimal>,
    /// Display name for the custom provider, if any.
    pub custom_label: Option<String>,
}

/// The result of a single fee-model invocation.
///
/// `denom_ok` is the load-bearing validity flag: when `false` the
/// reverse solve had no valid solution (fees sum to ≥ 100% of gross)
/// and every money field is zeroed. Consumers must check it before
/// trusting fee or net fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Currency symbol of the scenario's region.
    pub symbol: String,
    /// The customer charge: given in forward mode, solved in reverse.
    pub gross: Decimal,
    pub fees: Vec<FeeLine>,
    pub net_before_vat: Decimal,
    pub vat_percent: Decimal,
    pub vat_amount: Decimal,
    pub net_after_vat: Decimal,
    pub denom_ok: bool,
    pub meta: QuoteMeta,
}

impl QuoteResult {
    /// The amount of one fee component, zero when absent.
    pub fn fee(&self, kind: FeeKind) -> Decimal {
        self.fees
            .iter()
            .find(|f| f.kind == kind)
            .map(|f| f.amount)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn provider_fee(&self) -> Decimal {
        self.fee(FeeKind::Provider)
    }

    pub fn fx_fee(&self) -> Decimal {
        self.fee(FeeKind::Fx)
    }

    pub fn platform_fee(&self) -> Decimal {
        self.fee(FeeKind::Platform)
    }

    /// Sum of all fee components.
    pub fn total_fees(&self) -> Decimal {
        self.fees.iter().map(|f| f.amount).sum()
    }

    /// Total fees as a percentage of gross.
    pub fn effective_fee_percent(&self) -> f64 {
        if self.gross == Decimal::ZERO {
            return 0.0;
        }
        let pct = self.total_fees() * Decimal::from(100) / self.gross;
        pct.to_string().parse::<f64>().unwrap_or(0.0)
    }

    /// Display form with every money field rounded to the currency's
    /// minor unit.
    pub fn rounded(&self) -> QuoteResult {
        QuoteResult {
            symbol: self.symbol.clone(),
            gross: round_money(self.gross),
            fees: self
                .fees
                .iter()
                .map(|f| FeeLine {
                    kind: f.kind,
                    label: f.label.clone(),
                    amount: round_money(f.amount),
                })
                .collect(),
            net_before_vat: round_money(self.net_before_vat),
            vat_percent: self.vat_percent,
            vat_amount: round_money(self.vat_amount),
            net_after_vat: round_money(self.net_after_vat),
            denom_ok: self.denom_ok,
            meta: self.meta.clone(),
        }
    }
}

impl fmt::Display for QuoteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Quote ===")?;
        writeln!(
            f,
            "Provider:       {} ({})",
            self.meta.provider_label, self.meta.product
        )?;
        if !self.denom_ok {
            writeln!(f, "Valid:          false")?;
            return writeln!(f, "Fees exceed 100% of gross; no solution.");
        }
        writeln!(f, "Customer pays:  {}{}", self.symbol, self.gross)?;
        for fee in &self.fees {
            writeln!(f, "  {:<18} {}{}", fee.label, self.symbol, fee.amount)?;
        }
        writeln!(f, "Net before VAT: {}{}", self.symbol, self.net_before_vat)?;
        if self.vat_percent > Decimal::ZERO {
            writeln!(
                f,
                "VAT ({}%):      {}{}",
                self.vat_percent, self.symbol, self.vat_amount
            )?;
            writeln!(f, "Net after VAT:  {}{}", self.symbol, self.net_after_vat)?;
        }
        writeln!(f, "Effective fees: {:.2}%", self.effective_fee_percent())
    }
}
