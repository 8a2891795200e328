use crate::models::{PriceSummary, ProductHistory, SavingsEstimate, SearchHistory};
use crate::parsers::extract_decimal;

/// Terminal rendering of one completed lookup. This is the whole
/// presentation layer; everything here is display-only.
pub fn render_lookup(
    product: &ProductHistory,
    summary: &PriceSummary,
    savings: &SavingsEstimate,
    statement: &str,
    competitor_price: Option<&str>,
) {
    println!();
    println!("== {} ==", product.title);
    println!();

    println!("Price Analysis ({} tracked price points)", summary.series.len());
    println!("  Current Price: ${:.2}", summary.current);
    println!(
        "  Peak Price:    ${:.2} ({})",
        summary.peak,
        format_delta(summary.current - summary.peak)
    );
    println!(
        "  Lowest Price:  ${:.2} ({})",
        summary.lowest,
        format_delta(summary.lowest - summary.current)
    );
    println!();

    println!("By Deal Math Logic...");
    println!(
        "  You're saving ${:.2} ({:.1}% off peak price)!",
        savings.amount, savings.percentage
    );
    println!("  {}", statement);
    println!();

    println!("Compare with Walmart");
    match competitor_price {
        Some(price_text) => println!("  {}", competitor_comparison(summary.current, price_text)),
        None => println!("  Couldn't find this product on Walmart"),
    }
}

/// One of three outcomes once the scraped text parses to a decimal:
/// Walmart cheaper, Amazon cheaper, or a tie. Text without a decimal is
/// reported verbatim rather than guessed at.
pub fn competitor_comparison(current_price: f64, scraped_text: &str) -> String {
    match extract_decimal(scraped_text) {
        Some(walmart_price) => {
            let diff = current_price - walmart_price;
            if diff > 0.0 {
                format!(
                    "Walmart price: ${:.2} (you'd save ${:.2} shopping at Walmart!)",
                    walmart_price, diff
                )
            } else if diff < 0.0 {
                format!(
                    "Walmart price: ${:.2} (Amazon is ${:.2} cheaper!)",
                    walmart_price,
                    diff.abs()
                )
            } else {
                format!("Walmart price: ${:.2} (same as Amazon!)", walmart_price)
            }
        }
        None => format!("Walmart price: {}", scraped_text),
    }
}

pub fn render_history(history: &SearchHistory) {
    if history.is_empty() {
        return;
    }

    println!();
    println!("Your Search History");
    for entry in history.entries() {
        println!(
            "  {} — current price ${:.2} ({})",
            entry.title, entry.current_price, entry.url
        );
    }
}

fn format_delta(delta: f64) -> String {
    if delta < 0.0 {
        format!("{:.2}", delta)
    } else {
        format!("+{:.2}", delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walmart_cheaper_reports_the_difference() {
        let line = competitor_comparison(15.00, "$12.50");
        assert_eq!(
            line,
            "Walmart price: $12.50 (you'd save $2.50 shopping at Walmart!)"
        );
    }

    #[test]
    fn amazon_cheaper_reports_the_absolute_difference() {
        let line = competitor_comparison(10.00, "$12.50");
        assert_eq!(line, "Walmart price: $12.50 (Amazon is $2.50 cheaper!)");
    }

    #[test]
    fn equal_prices_report_a_tie() {
        let line = competitor_comparison(12.50, "Now $12.50");
        assert_eq!(line, "Walmart price: $12.50 (same as Amazon!)");
    }

    #[test]
    fn non_numeric_text_is_reported_verbatim() {
        let line = competitor_comparison(12.50, "See price in cart");
        assert_eq!(line, "Walmart price: See price in cart");
    }

    #[test]
    fn deltas_are_signed() {
        assert_eq!(format_delta(-2.5), "-2.50");
        assert_eq!(format_delta(2.5), "+2.50");
        assert_eq!(format_delta(0.0), "+0.00");
    }
}
