pub mod savings;
pub mod statement;

pub use savings::*;
pub use statement::*;

use crate::error::LookupError;
use crate::models::PriceSummary;

/// Turn the raw minor-unit series from the pricing collaborator into a
/// clean dollar series plus its {current, peak, lowest} triple.
///
/// Null, zero, and negative observations mean "no data at this time" and
/// are dropped before conversion. The series is chronological, so the
/// current price is the last surviving element.
pub fn normalize(raw_series: &[Option<i64>]) -> Result<PriceSummary, LookupError> {
    let series: Vec<f64> = raw_series
        .iter()
        .copied()
        .filter_map(|cents| cents.filter(|&c| c > 0))
        .map(|cents| cents as f64 / 100.0)
        .collect();

    let current = match series.last() {
        Some(&price) => price,
        None => return Err(LookupError::NoValidPriceData),
    };
    let peak = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lowest = series.iter().copied().fold(f64::INFINITY, f64::min);

    Ok(PriceSummary {
        series,
        current,
        peak,
        lowest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn filters_invalid_points_and_derives_summary() {
        let raw = [Some(0), None, Some(1050), Some(990), Some(1200)];
        let summary = normalize(&raw).unwrap();

        assert_eq!(summary.series, vec![10.50, 9.90, 12.00]);
        assert_eq!(summary.current, 12.00);
        assert_eq!(summary.peak, 12.00);
        assert_eq!(summary.lowest, 9.90);
    }

    #[test]
    fn all_invalid_series_fails() {
        let raw = [Some(0), None, Some(-1), Some(0)];
        assert!(matches!(
            normalize(&raw),
            Err(LookupError::NoValidPriceData)
        ));
    }

    #[test]
    fn empty_series_fails() {
        assert!(matches!(normalize(&[]), Err(LookupError::NoValidPriceData)));
    }

    #[test]
    fn single_valid_point_collapses_the_triple() {
        let summary = normalize(&[None, Some(499)]).unwrap();
        assert_eq!(summary.current, 4.99);
        assert_eq!(summary.peak, 4.99);
        assert_eq!(summary.lowest, 4.99);
    }

    #[test]
    fn summary_always_feeds_the_estimator() {
        // Any non-empty cleaned series must satisfy the estimator without
        // panicking, single-element series included.
        for raw in [
            vec![Some(100)],
            vec![Some(100), Some(5000), Some(250)],
            vec![None, Some(1), Some(0), Some(i64::MAX)],
        ] {
            let summary = normalize(&raw).unwrap();
            let estimate = estimate_savings(summary.current, summary.peak, summary.lowest);
            assert!(estimate.amount.is_finite());
            assert!(estimate.percentage.is_finite());
        }
    }
}
