//! Plain-text reports for solve results and comparisons.
//!
//! Output carries no color codes so it can be piped or written to files.

use std::fmt::Write;

use knapforge_config::ReportConfig;
use knapforge_core::{Algorithm, ComparisonSummary, SolveResult};

const RULE_WIDTH: usize = 25;
const BAR_WIDTH: usize = 30;

/// Renders a single result: value, selected items, time and (optionally) a
/// per-item usage chart over `item_count` items.
///
/// # Example
///
/// ```
/// use knapforge_config::ReportConfig;
/// use knapforge_console::render_result;
/// use knapforge_core::SolveResult;
/// use knapforge_core::Algorithm;
///
/// let text = render_result(&SolveResult::empty(Algorithm::ZeroOne), 0, &ReportConfig::default());
/// assert!(text.starts_with("0/1 KNAPSACK RESULT"));
/// assert!(text.contains("Max Value: 0"));
/// ```
pub fn render_result(result: &SolveResult, item_count: usize, config: &ReportConfig) -> String {
    let mut out = String::new();
    let title = match result.algorithm {
        Algorithm::ZeroOne => "0/1 KNAPSACK RESULT",
        Algorithm::Fractional => "FRACTIONAL KNAPSACK RESULT",
    };
    let _ = writeln!(out, "{}\n{}\n", title, "-".repeat(RULE_WIDTH));
    let _ = writeln!(
        out,
        "Max Value: {}\n",
        value_text(result.algorithm, result.total_value, config)
    );

    let _ = writeln!(out, "Selected Items:");
    for entry in &result.selected {
        match result.algorithm {
            Algorithm::ZeroOne => {
                let _ = writeln!(out, "  Value: {}, Weight: {}", entry.value, entry.weight);
            }
            Algorithm::Fractional if entry.is_whole() => {
                let _ = writeln!(
                    out,
                    "  Value: {}, Weight: {} (100%)",
                    entry.value, entry.weight
                );
            }
            Algorithm::Fractional => {
                let _ = writeln!(
                    out,
                    "  Value: {}, Weight: {} (Used: {:.1}%)",
                    entry.value,
                    entry.weight,
                    entry.fraction_used * 100.0
                );
            }
        }
    }

    let _ = writeln!(
        out,
        "\nExecution Time: {:.prec$} ms",
        result.elapsed_ms(),
        prec = config.time_precision
    );

    if config.show_chart && item_count > 0 {
        let _ = writeln!(out, "\nItem Usage:");
        for (index, fraction) in result.usage_by_item(item_count).into_iter().enumerate() {
            let _ = writeln!(out, "{}", usage_row(index, fraction));
        }
    }

    out
}

/// Renders the head-to-head comparison.
pub fn render_comparison(summary: &ComparisonSummary, config: &ReportConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ALGORITHM COMPARISON\n{}\n", "-".repeat(RULE_WIDTH));

    for algorithm in Algorithm::ALL {
        let _ = writeln!(
            out,
            "{}:\n  Value: {}\n  Time: {:.prec$} ms\n",
            algorithm,
            value_text(algorithm, summary.value_of(algorithm), config),
            summary.elapsed_of(algorithm).as_secs_f64() * 1000.0,
            prec = config.time_precision
        );
    }

    let _ = writeln!(out, "Faster Method: {}", summary.faster);
    let _ = writeln!(out, "Higher Value Achieved: {}", summary.higher_value);
    out
}

/// Renders both results' usage side by side, one pair of bars per item.
pub fn render_usage_comparison(
    zero_one: &SolveResult,
    fractional: &SolveResult,
    item_count: usize,
) -> String {
    let mut out = String::new();
    let zero_one_usage = zero_one.usage_by_item(item_count);
    let fractional_usage = fractional.usage_by_item(item_count);

    for index in 0..item_count {
        let _ = writeln!(
            out,
            "Item {:<4} 0/1        │{}│ {:>5.1}%",
            index + 1,
            bar(zero_one_usage[index]),
            zero_one_usage[index] * 100.0
        );
        let _ = writeln!(
            out,
            "          Fractional │{}│ {:>5.1}%",
            bar(fractional_usage[index]),
            fractional_usage[index] * 100.0
        );
    }
    out
}

fn value_text(algorithm: Algorithm, value: f64, config: &ReportConfig) -> String {
    match algorithm {
        Algorithm::ZeroOne => format!("{}", value as u64),
        Algorithm::Fractional => format!("{:.prec$}", value, prec = config.value_precision),
    }
}

fn usage_row(index: usize, fraction: f64) -> String {
    format!(
        "  Item {:<4} │{}│ {:>5.1}%",
        index + 1,
        bar(fraction),
        fraction * 100.0
    )
}

fn bar(fraction: f64) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use knapforge_core::SelectionEntry;
    use knapforge_test::scenario_a;

    fn scenario_a_results() -> (SolveResult, SolveResult) {
        let items = scenario_a().items;
        let zero_one = SolveResult::new(
            Algorithm::ZeroOne,
            220.0,
            vec![
                SelectionEntry::whole(1, &items[1]),
                SelectionEntry::whole(2, &items[2]),
            ],
            Duration::from_micros(1500),
        );
        let fractional = SolveResult::new(
            Algorithm::Fractional,
            240.0,
            vec![
                SelectionEntry::whole(0, &items[0]),
                SelectionEntry::whole(1, &items[1]),
                SelectionEntry::partial(2, &items[2], 2.0 / 3.0),
            ],
            Duration::from_micros(250),
        );
        (zero_one, fractional)
    }

    #[test]
    fn test_zero_one_report() {
        let (zero_one, _) = scenario_a_results();
        let text = render_result(&zero_one, 3, &ReportConfig::default());

        assert!(text.starts_with("0/1 KNAPSACK RESULT\n-------------------------\n"));
        assert!(text.contains("Max Value: 220\n"));
        assert!(text.contains("  Value: 100, Weight: 20\n  Value: 120, Weight: 30\n"));
        assert!(text.contains("Execution Time: 1.500 ms"));
        assert!(text.contains("Item 1"));
        assert!(text.contains("0.0%"));
        assert!(text.contains("100.0%"));
    }

    #[test]
    fn test_fractional_report() {
        let (_, fractional) = scenario_a_results();
        let text = render_result(&fractional, 3, &ReportConfig::default());

        assert!(text.starts_with("FRACTIONAL KNAPSACK RESULT"));
        assert!(text.contains("Max Value: 240.00"));
        assert!(text.contains("  Value: 60, Weight: 10 (100%)"));
        assert!(text.contains("  Value: 120, Weight: 30 (Used: 66.7%)"));
    }

    #[test]
    fn test_chart_can_be_disabled() {
        let (zero_one, _) = scenario_a_results();
        let config = ReportConfig {
            show_chart: false,
            ..ReportConfig::default()
        };
        let text = render_result(&zero_one, 3, &config);
        assert!(!text.contains("Item Usage"));
    }

    #[test]
    fn test_comparison_report() {
        let summary = ComparisonSummary {
            zero_one_value: 220.0,
            fractional_value: 240.0,
            zero_one_elapsed: Duration::from_micros(1500),
            fractional_elapsed: Duration::from_micros(250),
            faster: Algorithm::Fractional,
            higher_value: Algorithm::Fractional,
        };
        let text = render_comparison(&summary, &ReportConfig::default());

        assert!(text.starts_with("ALGORITHM COMPARISON"));
        assert!(text.contains("0/1 Knapsack:\n  Value: 220\n  Time: 1.500 ms"));
        assert!(text.contains("Fractional Knapsack:\n  Value: 240.00\n  Time: 0.250 ms"));
        assert!(text.contains("Faster Method: Fractional Knapsack"));
        assert!(text.contains("Higher Value Achieved: Fractional Knapsack"));
    }

    #[test]
    fn test_usage_comparison() {
        let (zero_one, fractional) = scenario_a_results();
        let text = render_usage_comparison(&zero_one, &fractional, 3);
        assert_eq!(text.lines().count(), 6);
        assert!(text.lines().next().unwrap().ends_with("  0.0%"));
        assert!(text.lines().nth(5).unwrap().ends_with(" 66.7%"));
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar(0.0).chars().count(), BAR_WIDTH);
        assert_eq!(bar(1.0), "█".repeat(BAR_WIDTH));
        assert_eq!(bar(0.5).chars().filter(|&c| c == '█').count(), 15);
    }
}
