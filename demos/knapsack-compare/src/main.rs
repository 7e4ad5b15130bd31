//! Knapsack comparison demo
//!
//! Solves one instance with both the 0/1 and the fractional solver, prints
//! each result and the head-to-head comparison.
//!
//! Items come from `--item value:weight` flags, or from a TOML config file.
//! Without either, the classic three-item instance is used.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use knapforge::console::{self, render_comparison, render_result, render_usage_comparison};
use knapforge::prelude::*;
use knapforge::KnapsackConfig;

/// Solve a knapsack instance exactly and compare the 0/1 and fractional answers.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file holding capacity, items and solver settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// An item as `value:weight`; repeat for more items
    #[arg(short, long = "item")]
    items: Vec<Item>,
    /// Knapsack capacity (overrides the config file)
    #[arg(short = 'w', long)]
    capacity: Option<i64>,
    /// Which algorithm(s) to run
    #[arg(short, long, value_enum, default_value_t = Mode::Both)]
    mode: Mode,
    /// Skip the per-item usage charts
    #[arg(long)]
    no_chart: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    ZeroOne,
    Fractional,
    Both,
}

fn load_config(args: &Args) -> Result<KnapsackConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => KnapsackConfig::load(path)?,
        None => KnapsackConfig::load_or_default("knapsack.toml")?,
    };

    if !args.items.is_empty() {
        config.items = args.items.clone();
    }
    if config.items.is_empty() {
        config = config
            .with_item(Item::new(60, 10)?)
            .with_item(Item::new(100, 20)?)
            .with_item(Item::new(120, 30)?)
            .with_capacity(50);
    }
    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }
    if args.no_chart {
        config.report.show_chart = false;
    }
    Ok(config)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args)?;
    let mut session = KnapsackSession::from_config(&config);
    let item_count = session.store().len();

    println!("Items:");
    for (index, item) in session.store().items().iter().enumerate() {
        println!("  Item {:<4} {}", index + 1, item);
    }
    println!("Capacity: {}\n", session.store().capacity());

    if matches!(args.mode, Mode::ZeroOne | Mode::Both) {
        let result = session.run_zero_one()?;
        println!("{}", render_result(result, item_count, &config.report));
    }
    if matches!(args.mode, Mode::Fractional | Mode::Both) {
        let result = session.run_fractional()?;
        println!("{}", render_result(result, item_count, &config.report));
    }

    if args.mode == Mode::Both {
        let summary = session.compare()?;
        println!("{}", render_comparison(&summary, &config.report));

        if let (Some(zero_one), Some(fractional)) = (
            session.last_result(Algorithm::ZeroOne),
            session.last_result(Algorithm::Fractional),
        ) {
            if config.report.show_chart {
                println!("{}", render_usage_comparison(zero_one, fractional, item_count));
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    console::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
