use rand::seq::SliceRandom;
use rand::Rng;

const LOWEST_PRICE_STATEMENT: &str =
    "This is literally the LOWEST price! It would be irresponsible NOT to buy it!";
const MAJOR_DISCOUNT_STATEMENT: &str =
    "That's a MAJOR discount! It's like they're paying you to take it!";

/// The flavor statements used when neither fixed branch applies. Several
/// are parameterized by the current and peak prices.
pub fn statement_pool(current: f64, peak: f64) -> Vec<String> {
    vec![
        format!("That's like getting paid ${:.2} to shop!", peak - current),
        "Remember, if it's on sale, it's basically saving money!".to_string(),
        format!("If you use it 10 times, it's only ${:.2} per use!", current / 10.0),
        format!("That's only {:.2} per day for a month!", current / 30.0),
        "Buy now, your future self will thank you!".to_string(),
        "It's an investment in your happiness!".to_string(),
        "If you return something else, this is basically free!".to_string(),
        "You've already saved money by not buying it at the peak price!".to_string(),
    ]
}

/// Pick the deal-math statement for a price triple.
///
/// The two threshold branches are deterministic; only the catch-all case
/// draws from the statement pool. The rng is a parameter so callers that
/// need a pinned choice can pass a seeded one.
pub fn pick_statement<R: Rng + ?Sized>(current: f64, peak: f64, lowest: f64, rng: &mut R) -> String {
    if current <= lowest * 1.10 {
        LOWEST_PRICE_STATEMENT.to_string()
    } else if current <= peak * 0.80 {
        MAJOR_DISCOUNT_STATEMENT.to_string()
    } else {
        let pool = statement_pool(current, peak);
        pool.choose(rng)
            .cloned()
            .unwrap_or_else(|| LOWEST_PRICE_STATEMENT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn near_lowest_price_is_deterministic_across_seeds() {
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let statement = pick_statement(5.00, 20.00, 5.00, &mut rng);
            assert_eq!(statement, LOWEST_PRICE_STATEMENT);
        }
    }

    #[test]
    fn lowest_branch_includes_ten_percent_margin() {
        let mut rng = StdRng::seed_from_u64(0);
        // 5.49 <= 5.00 * 1.10
        let statement = pick_statement(5.49, 20.00, 5.00, &mut rng);
        assert_eq!(statement, LOWEST_PRICE_STATEMENT);
    }

    #[test]
    fn deep_discount_hits_the_major_discount_branch() {
        let mut rng = StdRng::seed_from_u64(0);
        let statement = pick_statement(15.00, 20.00, 1.00, &mut rng);
        assert_eq!(statement, MAJOR_DISCOUNT_STATEMENT);
    }

    #[test]
    fn catch_all_draws_from_the_pool() {
        let pool = statement_pool(19.00, 20.00);
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            // current is well above both thresholds
            let statement = pick_statement(19.00, 20.00, 1.00, &mut rng);
            assert!(pool.contains(&statement), "unexpected statement: {}", statement);
        }
    }

    #[test]
    fn pinned_seed_pins_the_choice() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            pick_statement(19.00, 20.00, 1.00, &mut a),
            pick_statement(19.00, 20.00, 1.00, &mut b)
        );
    }
}
