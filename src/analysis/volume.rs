use crate::core::money::round_money;
use crate::core::normalize::normalize_state;
use crate::core::quote::{QuoteResult, RateCard};
use crate::core::state::{CalcState, PlatformFeeBase};
use crate::providers;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monthly totals contributed by one basket tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierBreakdown {
    pub share_percent: Decimal,
    pub price: Decimal,
    /// Transactions per month falling in this tier (fractional).
    pub tx: Decimal,
    pub gross: Decimal,
    pub provider_fees: Decimal,
    pub fx_fees: Decimal,
    pub platform_fees: Decimal,
    pub net: Decimal,
}

/// Projected monthly economics across the weighted basket.
///
/// Refunds are an expected-value model: they reverse the net
/// contribution proportionally rather than being simulated per event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeProjection {
    pub tx_per_month: u32,
    pub gross_monthly: Decimal,
    pub provider_fees_monthly: Decimal,
    pub fx_fees_monthly: Decimal,
    pub platform_fees_monthly: Decimal,
    pub net_monthly: Decimal,
    pub refund_loss_monthly: Decimal,
    pub net_after_refunds_monthly: Decimal,
    pub vat_monthly: Decimal,
    pub net_after_vat_monthly: Decimal,
    pub net_after_refunds_after_vat_monthly: Decimal,
    pub tiers: Vec<TierBreakdown>,
}

/// Project the per-transaction model across the monthly basket.
///
/// `per_txn` is the current single-transaction quote; when no override
/// is set, the provider's blended percent is back-solved from it
/// (`provider_fee / gross × 100`, fixed folded into the percent)
/// rather than looked up from the rate table.
///
/// Returns `None` when the projection is disabled, there are no
/// transactions, or no tier has positive share.
pub fn compute_volume(state: &CalcState, per_txn: &QuoteResult) -> Option<VolumeProjection> {
    let state = normalize_state(state);
    let config = &state.volume;
    if !config.enabled || config.tx_per_month == 0 {
        return None;
    }
    if !config
        .tiers
        .iter()
        .any(|t| t.share_percent > Decimal::ZERO)
    {
        return None;
    }

    let rate = resolve_rate(&state, per_txn);
    let hundred = Decimal::from(100);
    let tx_total = Decimal::from(config.tx_per_month);
    debug!(
        "volume projection: {} tx/month at {}% + {}",
        config.tx_per_month, rate.percent, rate.fixed
    );

    let mut gross_monthly = Decimal::ZERO;
    let mut provider_monthly = Decimal::ZERO;
    let mut fx_monthly = Decimal::ZERO;
    let mut platform_monthly = Decimal::ZERO;
    let mut tiers = Vec::with_capacity(config.tiers.len());

    for tier in &config.tiers {
        let tx = tx_total * tier.share_percent / hundred;
        let gross = tx * tier.price;

        let provider_per_tx = tier.price * rate.percent / hundred + rate.fixed;
        let fx_per_tx = tier.price * tier.fx_percent / hundred;
        let platform_per_tx = match state.platform_fee_base {
            PlatformFeeBase::Gross => tier.price * state.platform_fee_percent / hundred,
            PlatformFeeBase::AfterProvider => {
                (tier.price - provider_per_tx) * state.platform_fee_percent / hundred
            }
        };

        let provider_fees = tx * provider_per_tx;
        let fx_fees = tx * fx_per_tx;
        let platform_fees = tx * platform_per_tx;

        gross_monthly += gross;
        provider_monthly += provider_fees;
        fx_monthly += fx_fees;
        platform_monthly += platform_fees;

        tiers.push(TierBreakdown {
            share_percent: tier.share_percent,
            price: tier.price,
            tx,
            gross: round_money(gross),
            provider_fees: round_money(provider_fees),
            fx_fees: round_money(fx_fees),
            platform_fees: round_money(platform_fees),
            net: round_money(gross - provider_fees - fx_fees - platform_fees),
        });
    }

    let net_monthly = gross_monthly - provider_monthly - fx_monthly - platform_monthly;
    let refund_loss = net_monthly * config.refund_rate_percent / hundred;
    let net_after_refunds = net_monthly - refund_loss;

    let vat_monthly = if state.vat_percent > Decimal::ZERO {
        gross_monthly * state.vat_percent / (hundred + state.vat_percent)
    } else {
        Decimal::ZERO
    };
    let net_after_vat = net_monthly - vat_monthly;
    let net_after_refunds_after_vat = net_after_refunds - vat_monthly;

    Some(VolumeProjection {
        tx_per_month: config.tx_per_month,
        gross_monthly: round_money(gross_monthly),
        provider_fees_monthly: round_money(provider_monthly),
        fx_fees_monthly: round_money(fx_monthly),
        platform_fees_monthly: round_money(platform_monthly),
        net_monthly: round_money(net_monthly),
        refund_loss_monthly: round_money(refund_loss),
        net_after_refunds_monthly: round_money(net_after_refunds),
        vat_monthly: round_money(vat_monthly),
        net_after_vat_monthly: round_money(net_after_vat),
        net_after_refunds_after_vat_monthly: round_money(net_after_refunds_after_vat),
        tiers,
    })
}

/// Per-transaction provider rate used across every tier.
///
/// Precedence: override fields, else the blended percent back-solved
/// from the current single-transaction quote, else the table default.
fn resolve_rate(state: &CalcState, per_txn: &QuoteResult) -> RateCard {
    let table = providers::model(state.provider).default_rate(state.region, &state.product);
    if state.custom_percent.is_some() || state.custom_fixed.is_some() {
        return RateCard {
            percent: state.custom_percent.unwrap_or(table.percent),
            fixed: state.custom_fixed.unwrap_or(table.fixed),
        };
    }
    if per_txn.denom_ok && per_txn.gross > Decimal::ZERO {
        return RateCard {
            percent: per_txn.provider_fee() / per_txn.gross * Decimal::from(100),
            fixed: Decimal::ZERO,
        };
    }
    table
}

impl fmt::Display for VolumeProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Monthly Projection ({} tx) ===", self.tx_per_month)?;
        writeln!(f, "Gross:          {}", self.gross_monthly)?;
        writeln!(f, "Provider fees:  {}", self.provider_fees_monthly)?;
        writeln!(f, "FX fees:        {}", self.fx_fees_monthly)?;
        writeln!(f, "Platform fees:  {}", self.platform_fees_monthly)?;
        writeln!(f, "Net:            {}", self.net_monthly)?;
        writeln!(f, "Refund loss:    {}", self.refund_loss_monthly)?;
        writeln!(f, "Net after refunds: {}", self.net_after_refunds_monthly)?;
        if self.vat_monthly > Decimal::ZERO {
            writeln!(f, "VAT:            {}", self.vat_monthly)?;
            writeln!(
                f,
                "Net after refunds and VAT: {}",
                self.net_after_refunds_after_vat_monthly
            )?;
        }
        for tier in &self.tiers {
            writeln!(
                f,
                "  {}% @ {}: {} tx, gross {}, net {}",
                tier.share_percent, tier.price, tier.tx, tier.gross, tier.net
            )?;
        }
        Ok(())
    }
}
