//! order-advisor: order recommendation scoring and ranking tool
//!
//! Scores and ranks (factory, product, warehouse) combinations from
//! predicted demand, delay, and sustainability metrics.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use order_advisor::{
    cli,
    config::AppConfig,
    engine::FilterSelection,
    model::AggregationMode,
    reports::ReportFormat,
    store::RecordStore,
    table::{SortColumn, SortDirection},
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with scoring info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput Format:",
        "\n  CSV with columns Factory, Product_ID, Warehouse, Demand, Delay, Sustainable_Order",
        "\n\nOutput Formats:",
        "\n  summary, json, csv",
        "\n\nFeatures:",
        "\n  Key aggregation, subset-relative scoring, weighted ranking, sustainability split"
    )
}

#[derive(Parser)]
#[command(name = "order-advisor")]
#[command(version, long_version = build_long_version())]
#[command(about = "Order recommendation scoring and ranking tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Recommendation produced
    1  No records matched the filter
    2  Weights did not sum to 1.00 (unscored table produced)
    3  Error occurred

EXAMPLES:
    # Top recommendation for a product
    order-advisor recommend predictions.csv --product P-100

    # Top 5 for a factory, heavier demand weighting, JSON output
    order-advisor recommend predictions.csv --factory F1 --top-n 5 \\
        --w-demand 0.6 --w-delay 0.2 --w-sustain 0.2 -o json

    # Compound filter: one product in one warehouse
    order-advisor recommend predictions.csv --product P-100 --warehouse W2

    # Unscored table of everything, worst delays first
    order-advisor view predictions.csv --sort delay")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `recommend` subcommand
#[derive(Parser)]
struct RecommendArgs {
    /// Path to the predictions CSV
    input: PathBuf,

    /// Filter by product ID
    #[arg(long)]
    product: Option<String>,

    /// Filter by warehouse ID (alone, or combined with --product)
    #[arg(long)]
    warehouse: Option<String>,

    /// Filter by factory ID
    #[arg(long, conflicts_with_all = ["product", "warehouse"])]
    factory: Option<String>,

    /// How many top recommendations (clamped to the subset size)
    #[arg(long)]
    top_n: Option<usize>,

    /// Weight for the demand sub-score
    #[arg(long)]
    w_demand: Option<f64>,

    /// Weight for the delay sub-score
    #[arg(long)]
    w_delay: Option<f64>,

    /// Weight for the sustainability sub-score
    #[arg(long)]
    w_sustain: Option<f64>,

    /// Aggregation mode
    #[arg(long, value_enum)]
    mode: Option<AggregationMode>,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Sort the display table by this column
    #[arg(long, value_enum)]
    sort: Option<SortColumn>,

    /// Sort direction (defaults to the column's convention)
    #[arg(long, value_enum, requires = "sort")]
    direction: Option<SortDirection>,
}

/// Arguments for the `view` subcommand
#[derive(Parser)]
struct ViewArgs {
    /// Path to the predictions CSV
    input: PathBuf,

    /// Filter by product ID
    #[arg(long)]
    product: Option<String>,

    /// Filter by warehouse ID (alone, or combined with --product)
    #[arg(long)]
    warehouse: Option<String>,

    /// Filter by factory ID
    #[arg(long, conflicts_with_all = ["product", "warehouse"])]
    factory: Option<String>,

    /// Aggregation mode
    #[arg(long, value_enum)]
    mode: Option<AggregationMode>,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Sort the display table by this column
    #[arg(long, value_enum)]
    sort: Option<SortColumn>,

    /// Sort direction (defaults to the column's convention)
    #[arg(long, value_enum, requires = "sort")]
    direction: Option<SortDirection>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score, rank, and recommend combinations to order
    Recommend(RecommendArgs),
    /// Show the (optionally filtered) table without scoring
    View(ViewArgs),
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    match run() {
        Ok(code) if code != 0 => std::process::exit(code),
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(cli::exit_codes::ERROR);
        }
    }
}

fn run() -> Result<i32> {
    let cli_args = Cli::parse();

    // Initialize logging
    let log_level = if cli_args.verbose {
        "debug"
    } else if cli_args.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // File config is the base; explicit CLI arguments override it.
    let base = match &cli_args.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    match cli_args.command {
        Commands::Recommend(args) => {
            let store = RecordStore::load(&args.input)
                .with_context(|| format!("loading {}", args.input.display()))?;

            let mut config = base;
            let filter = build_filter(args.product, args.warehouse, args.factory)?;
            if filter.is_some() {
                config.controls.filter = filter;
            }
            if let Some(top_n) = args.top_n {
                config.controls.top_n = top_n;
            }
            if let Some(demand) = args.w_demand {
                config.controls.weights.demand = demand;
            }
            if let Some(delay) = args.w_delay {
                config.controls.weights.delay = delay;
            }
            if let Some(sustain) = args.w_sustain {
                config.controls.weights.sustainability = sustain;
            }
            apply_common_overrides(
                &mut config,
                args.mode,
                args.output,
                args.output_file,
                args.sort,
                args.direction,
            );

            Ok(cli::run_recommend(&store, &config)?)
        }
        Commands::View(args) => {
            let store = RecordStore::load(&args.input)
                .with_context(|| format!("loading {}", args.input.display()))?;

            let mut config = base;
            let filter = build_filter(args.product, args.warehouse, args.factory)?;
            if filter.is_some() {
                config.controls.filter = filter;
            }
            apply_common_overrides(
                &mut config,
                args.mode,
                args.output,
                args.output_file,
                args.sort,
                args.direction,
            );

            Ok(cli::run_view(&store, &config)?)
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(cli::exit_codes::SUCCESS)
        }
    }
}

/// Translate the three optional filter flags into a selection.
///
/// `--product` and `--warehouse` may be combined (compound filter);
/// `--factory` stands alone (clap enforces the conflicts). Returns `None`
/// when no flag was given, so a config-file filter can still apply.
fn build_filter(
    product: Option<String>,
    warehouse: Option<String>,
    factory: Option<String>,
) -> Result<Option<FilterSelection>> {
    Ok(match (product, warehouse, factory) {
        (Some(product), Some(warehouse), None) => {
            Some(FilterSelection::ProductWarehouse { product, warehouse })
        }
        (Some(product), None, None) => Some(FilterSelection::Product(product)),
        (None, Some(warehouse), None) => Some(FilterSelection::Warehouse(warehouse)),
        (None, None, Some(factory)) => Some(FilterSelection::Factory(factory)),
        (None, None, None) => None,
        _ => anyhow::bail!("--factory cannot be combined with --product or --warehouse"),
    })
}

fn apply_common_overrides(
    config: &mut AppConfig,
    mode: Option<AggregationMode>,
    output: Option<ReportFormat>,
    output_file: Option<PathBuf>,
    sort: Option<SortColumn>,
    direction: Option<SortDirection>,
) {
    if let Some(mode) = mode {
        config.controls.mode = mode;
    }
    if let Some(format) = output {
        config.output.format = format;
    }
    if output_file.is_some() {
        config.output.file = output_file;
    }
    if sort.is_some() {
        config.controls.sort_column = sort;
    }
    if direction.is_some() {
        config.controls.sort_direction = direction;
    }
}
