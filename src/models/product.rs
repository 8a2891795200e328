use serde::{Deserialize, Serialize};
use std::fmt;

// NewType pattern for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asin(pub String);

impl fmt::Display for Asin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Title and raw NEW-price series for one product, as returned by the
/// pricing collaborator. Raw values are cents; `None` means no data at
/// that observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductHistory {
    pub asin: Asin,
    pub title: String,
    pub raw_series: Vec<Option<i64>>,
}

/// Cleaned price series plus the derived {current, peak, lowest} triple.
/// Every element of `series` is strictly positive, in dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub series: Vec<f64>,
    pub current: f64,
    pub peak: f64,
    pub lowest: f64,
}

/// The intentionally inflated savings pair. Both values may be negative
/// when the current price sits above the peak; callers display as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsEstimate {
    pub amount: f64,
    pub percentage: f64,
}
