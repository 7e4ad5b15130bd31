//! Colorful console output for solver events, plus plain-text reports.
//!
//! Provides a custom `tracing` layer that formats solver events with colors,
//! and [`report`] functions that render results for a terminal.
//!
//! ## Log Levels
//!
//! - **INFO**: Solve start/end and comparisons
//! - **WARN**: Rejected runs
//! - **DEBUG**: Table dimensions and sort completion
//! - **TRACE**: Individual admitted items

pub mod report;

pub use report::{render_comparison, render_result, render_usage_comparison};

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "knapforge_solver=info";

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the Knapforge banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let default_directive: Directive = DEFAULT_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into());
        let filter = EnvFilter::builder()
            .with_default_directive(default_directive)
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
 _  __                  __
| |/ /_ __   __ _ _ __ / _| ___  _ __ __ _  ___
| ' /| '_ \ / _` | '_ \ |_ / _ \| '__/ _` |/ _ \
| . \| | | | (_| | |_) |  _| (_) | | | (_| |  __/
|_|\_\_| |_|\__,_| .__/|_|  \___/|_|  \__, |\___|
                 |_|                  |___/
"#;

    let version_line = format!("              v{} - Exact Knapsack Solvers\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("knapforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    algorithm: Option<String>,
    item_count: Option<u64>,
    capacity: Option<i64>,
    total_value: Option<f64>,
    selected_count: Option<u64>,
    duration_us: Option<u64>,
    cells: Option<u64>,
    limit: Option<u64>,
    rows: Option<u64>,
    cols: Option<u64>,
    item: Option<u64>,
    fraction: Option<f64>,
    faster: Option<String>,
    higher_value: Option<String>,
    zero_one_value: Option<f64>,
    fractional_value: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "item_count" => self.item_count = Some(value),
            "capacity" => self.capacity = Some(value as i64),
            "selected_count" => self.selected_count = Some(value),
            "duration_us" => self.duration_us = Some(value),
            "cells" => self.cells = Some(value),
            "limit" => self.limit = Some(value),
            "rows" => self.rows = Some(value),
            "cols" => self.cols = Some(value),
            "item" => self.item = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "capacity" => self.capacity = Some(value),
            _ => self.record_u64(field, value as u64),
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "total_value" => self.total_value = Some(value),
            "fraction" => self.fraction = Some(value),
            "zero_one_value" => self.zero_one_value = Some(value),
            "fractional_value" => self.fractional_value = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "algorithm" => self.algorithm = Some(value.to_string()),
            "faster" => self.faster = Some(value.to_string()),
            "higher_value" => self.higher_value = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "solve_rejected" => format_solve_rejected(v),
        "compare" => format_compare(v),
        "table_built" => format_table_built(v),
        "item_admitted" => format_item_admitted(v, level),
        _ => String::new(),
    }
}

fn algorithm_label(name: Option<&str>) -> &'static str {
    match name {
        Some("zero_one") => "0/1 Knapsack",
        Some("fractional") => "Fractional Knapsack",
        _ => "Unknown",
    }
}

fn format_solve_start(v: &EventVisitor) -> String {
    let items = v.item_count.unwrap_or(0);
    let capacity = v.capacity.unwrap_or(0);

    format!(
        "{} {} │ {} items │ capacity {}",
        "▶".bright_green().bold(),
        algorithm_label(v.algorithm.as_deref()).white().bold(),
        items.to_formatted_string(&Locale::en).bright_yellow(),
        capacity.to_formatted_string(&Locale::en).bright_yellow(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let value = v.total_value.unwrap_or(0.0);
    let selected = v.selected_count.unwrap_or(0);
    let duration = v.duration_us.unwrap_or(0);

    format!(
        "{} {} complete │ value {} │ {} selected │ {}",
        "■".bright_cyan().bold(),
        algorithm_label(v.algorithm.as_deref()).white().bold(),
        format_value(value).bright_green().bold(),
        selected.to_formatted_string(&Locale::en).white(),
        format_duration_us(duration).yellow(),
    )
}

fn format_solve_rejected(v: &EventVisitor) -> String {
    let reason = match (v.cells, v.limit) {
        (Some(cells), Some(limit)) => format!(
            "table of {} cells exceeds limit {}",
            cells.to_formatted_string(&Locale::en),
            limit.to_formatted_string(&Locale::en)
        ),
        _ => format!(
            "{} items, capacity {}",
            v.item_count.unwrap_or(0),
            v.capacity.unwrap_or(0)
        ),
    };

    format!(
        "{} {} refused │ {}",
        "✗".bright_red().bold(),
        algorithm_label(v.algorithm.as_deref()).white().bold(),
        reason.bright_red(),
    )
}

fn format_compare(v: &EventVisitor) -> String {
    format!(
        "{} Compared │ 0/1 {} vs fractional {} │ faster: {} │ higher value: {}",
        "⚖".bright_magenta().bold(),
        format_value(v.zero_one_value.unwrap_or(0.0)).bright_yellow(),
        format_value(v.fractional_value.unwrap_or(0.0)).bright_yellow(),
        algorithm_label(v.faster.as_deref()).bright_green(),
        algorithm_label(v.higher_value.as_deref()).bright_green(),
    )
}

fn format_table_built(v: &EventVisitor) -> String {
    format!(
        "  {} table {} x {} ({} cells)",
        "▦".bright_blue(),
        v.rows.unwrap_or(0).to_formatted_string(&Locale::en),
        v.cols.unwrap_or(0).to_formatted_string(&Locale::en),
        v.cells
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta(),
    )
}

fn format_item_admitted(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let fraction = v.fraction.unwrap_or(1.0);
    format!(
        "  {} Item {} │ {}",
        "✓".bright_green(),
        v.item.unwrap_or(0).to_formatted_string(&Locale::en).bright_black(),
        format!("{:.1}%", fraction * 100.0).bright_black(),
    )
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < u64::MAX as f64 {
        (value as u64).to_formatted_string(&Locale::en)
    } else {
        format!("{:.2}", value)
    }
}

fn format_duration_us(us: u64) -> String {
    if us < 1000 {
        format!("{}µs", us)
    } else if us < 1_000_000 {
        format!("{:.3}ms", us as f64 / 1000.0)
    } else {
        format!("{:.2}s", us as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(220.0), "220");
        assert_eq!(format_value(12_345.0), "12,345");
        assert_eq!(format_value(2.0 / 3.0), "0.67");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_us(12), "12µs");
        assert_eq!(format_duration_us(1_500), "1.500ms");
        assert_eq!(format_duration_us(2_500_000), "2.50s");
    }

    #[test]
    fn test_unknown_events_are_silent() {
        let visitor = EventVisitor {
            event: Some("something_else".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor, Level::INFO).is_empty());
    }

    #[test]
    fn test_item_admitted_only_at_trace() {
        let visitor = EventVisitor {
            event: Some("item_admitted".to_string()),
            item: Some(3),
            fraction: Some(0.5),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor, Level::DEBUG).is_empty());
        assert!(format_event(&visitor, Level::TRACE).contains("50.0%"));
    }

    #[test]
    fn test_algorithm_label() {
        assert_eq!(algorithm_label(Some("zero_one")), "0/1 Knapsack");
        assert_eq!(algorithm_label(Some("fractional")), "Fractional Knapsack");
        assert_eq!(algorithm_label(None), "Unknown");
    }
}
