//! Shared fee algebra used by every provider model.
//!
//! Forward mode takes the gross as given; reverse mode inverts the
//! forward decomposition in closed form to solve for the gross that
//! yields a target net. An unsolvable configuration (fees summing to
//! ≥ 100% of gross) is reported through `denom_ok = false`, never as
//! an error.

use crate::core::quote::{FeeKind, FeeLine, QuoteInput, QuoteMeta, QuoteResult, RateCard};
use crate::core::state::{Mode, PlatformFeeBase};
use log::{debug, warn};
use rust_decimal::Decimal;

fn hundred() -> Decimal {
    Decimal::from(100)
}

/// Solve for the gross charge that produces `target_net` after fees.
///
/// Fractions (`p`, `fxp`, `plat`) are percent values already divided
/// by 100. Returns `None` when the denominator is not positive, i.e.
/// fees consume the entire charge and no finite solution exists.
///
/// With the platform cut taken from gross:
/// `net = gross·(1 − p − fxp − plat) − fixed`
///
/// With the platform cut taken after the provider fee:
/// `net = gross·(1 − p − fxp − plat + p·plat) − fixed·(1 − plat)`
pub fn solve_gross(
    target_net: Decimal,
    fixed: Decimal,
    p: Decimal,
    fxp: Decimal,
    plat: Decimal,
    base: PlatformFeeBase,
) -> Option<Decimal> {
    let one = Decimal::ONE;
    let (denom, numer) = match base {
        PlatformFeeBase::Gross => (one - p - fxp - plat, target_net + fixed),
        PlatformFeeBase::AfterProvider => (
            one - p - fxp - plat + p * plat,
            target_net + fixed * (one - plat),
        ),
    };
    if denom <= Decimal::ZERO {
        return None;
    }
    numer.checked_div(denom)
}

/// Compute the full fee breakdown for one transaction.
///
/// This is the single formula all five provider models share; the
/// models differ only in how `rate` was resolved.
pub fn compute(input: &QuoteInput, rate: RateCard, meta: QuoteMeta) -> QuoteResult {
    let p = rate.percent / hundred();
    let fxp = input.fx_percent / hundred();
    let plat = input.platform_percent / hundred();

    let gross = match input.mode {
        Mode::Forward => Some(input.amount),
        Mode::Reverse => solve_gross(
            input.target_net,
            rate.fixed,
            p,
            fxp,
            plat,
            input.platform_base,
        ),
    };

    let gross = match gross {
        Some(g) if g >= Decimal::ZERO => g,
        _ => {
            warn!(
                "unsolvable scenario for {}: fee percentages consume the whole charge",
                meta.provider
            );
            return invalid_result(input, meta);
        }
    };

    let provider_fee = gross * p + rate.fixed;
    let fx_fee = gross * fxp;
    let platform_fee = match input.platform_base {
        PlatformFeeBase::Gross => gross * plat,
        PlatformFeeBase::AfterProvider => (gross - provider_fee) * plat,
    };
    let net_before_vat = gross - provider_fee - fx_fee - platform_fee;

    // VAT is included in the customer price and extracted, never added.
    let vat_amount = if input.vat_percent > Decimal::ZERO {
        gross * input.vat_percent / (hundred() + input.vat_percent)
    } else {
        Decimal::ZERO
    };
    let net_after_vat = net_before_vat - vat_amount;

    debug!(
        "{} {} gross={} provider={} fx={} platform={}",
        meta.provider, input.mode, gross, provider_fee, fx_fee, platform_fee
    );

    QuoteResult {
        symbol: input.region.symbol().to_string(),
        gross,
        fees: fee_lines(&meta, provider_fee, fx_fee, platform_fee),
        net_before_vat,
        vat_percent: input.vat_percent,
        vat_amount,
        net_after_vat,
        denom_ok: true,
        meta,
    }
}

/// The reported shape of an unsolvable scenario: flag down, money zeroed.
fn invalid_result(input: &QuoteInput, meta: QuoteMeta) -> QuoteResult {
    QuoteResult {
        symbol: input.region.symbol().to_string(),
        gross: Decimal::ZERO,
        fees: fee_lines(&meta, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
        net_before_vat: Decimal::ZERO,
        vat_percent: input.vat_percent,
        vat_amount: Decimal::ZERO,
        net_after_vat: Decimal::ZERO,
        denom_ok: false,
        meta,
    }
}

fn fee_lines(
    meta: &QuoteMeta,
    provider_fee: Decimal,
    fx_fee: Decimal,
    platform_fee: Decimal,
) -> Vec<FeeLine> {
    vec![
        FeeLine {
            kind: FeeKind::Provider,
            label: format!("{} fee", meta.provider_label),
            amount: provider_fee,
        },
        FeeLine {
            kind: FeeKind::Fx,
            label: "FX surcharge".to_string(),
            amount: fx_fee,
        },
        FeeLine {
            kind: FeeKind::Platform,
            label: "Platform fee".to_string(),
            amount: platform_fee,
        },
    ]
}
