use serde::Serialize;

/// Risk loading applied on top of the predicted claim cost.
pub const RISK_LOAD: f64 = 0.20;

/// Profit margin applied after the risk loading.
pub const PROFIT_MARGIN: f64 = 0.10;

/// Coverage offered as a multiple of the annual premium.
pub const COVERAGE_MULTIPLIER: f64 = 10.0;

/// Priced quote, all amounts in INR rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    pub claim_inr: f64,
    pub premium_inr: f64,
    pub coverage_inr: f64,
}

/// Turns a predicted claim cost into a full quote.
///
/// The premium loads the claim for risk and margin, and the coverage is a
/// fixed multiple of the premium. Each amount is rounded independently.
pub fn price_claim(claim: f64) -> Quote {
    let premium = claim * (1.0 + RISK_LOAD) * (1.0 + PROFIT_MARGIN);
    let coverage = premium * COVERAGE_MULTIPLIER;

    Quote {
        claim_inr: round_inr(claim),
        premium_inr: round_inr(premium),
        coverage_inr: round_inr(coverage),
    }
}

fn round_inr(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
