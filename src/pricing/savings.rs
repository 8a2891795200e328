use crate::models::SavingsEstimate;

/// Savings are inflated by 10%, the percentage by 5%. Deal math always
/// makes it look like a better deal.
const SAVINGS_INFLATION: f64 = 1.10;
const PERCENTAGE_INFLATION: f64 = 1.05;

/// Compute the deal-math savings for a price triple.
///
/// The base savings is the drop from peak to current; when the current
/// price sits above the peak both results come out negative and are
/// returned as-is, no clamping. A zero peak yields a zero percentage
/// instead of dividing by zero.
pub fn estimate_savings(current: f64, peak: f64, _lowest: f64) -> SavingsEstimate {
    let base_savings = peak - current;
    let base_percentage = if peak > 0.0 {
        (base_savings / peak) * 100.0
    } else {
        0.0
    };

    SavingsEstimate {
        amount: base_savings * SAVINGS_INFLATION,
        percentage: base_percentage * PERCENTAGE_INFLATION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn inflates_savings_and_percentage() {
        let estimate = estimate_savings(10.00, 20.00, 5.00);
        assert_close(estimate.amount, 11.00);
        assert_close(estimate.percentage, 52.5);
    }

    #[test]
    fn current_above_peak_goes_negative_without_clamping() {
        let estimate = estimate_savings(25.00, 20.00, 5.00);
        assert_close(estimate.amount, -5.50);
        assert!(estimate.percentage < 0.0);
    }

    #[test]
    fn zero_peak_avoids_division_by_zero() {
        let estimate = estimate_savings(0.0, 0.0, 0.0);
        assert_close(estimate.amount, 0.0);
        assert_close(estimate.percentage, 0.0);
    }
}
