//! bondcast-sim — terminal forecaster for decaying bond prices.
//!
//! Thin adapter over the pure curve math: parses the six curve scalars
//! (from flags or a JSON scenario file), samples the spot-price series,
//! and renders it as a terminal plot.

mod plot;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use bondcast_core::constants::WAD;
use bondcast_core::params::CurveParams;
use bondcast_curve::forecast::{price_series, to_display};

/// Bond price forecaster for decaying bonding-curve instruments.
#[derive(Parser)]
#[command(name = "bondcast-sim")]
#[command(version, about = "Forecast decaying bond prices as a terminal plot")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast a curve from explicit parameters or a scenario file.
    Forecast(ForecastArgs),
    /// Run the reference scenario from the protocol design notes.
    Demo,
}

#[derive(Args)]
struct ForecastArgs {
    /// Outstanding debt in the price denominator, in wads.
    #[arg(long, required_unless_present = "scenario", conflicts_with = "scenario")]
    available_debt: Option<u128>,

    /// Decaying input-side virtual reserve, in wads.
    #[arg(long, required_unless_present = "scenario", conflicts_with = "scenario")]
    virtual_input: Option<u128>,

    /// Output-side virtual reserve in the price denominator, in wads.
    #[arg(long, required_unless_present = "scenario", conflicts_with = "scenario")]
    virtual_output: Option<u128>,

    /// Ticks per halving of the excess above the level target.
    #[arg(long, required_unless_present = "scenario", conflicts_with = "scenario")]
    half_life: Option<u64>,

    /// Asymptotic level as basis points of the virtual input, in [0, 10000].
    #[arg(long, required_unless_present = "scenario", conflicts_with = "scenario")]
    level_bips: Option<u64>,

    /// Number of half-lives to forecast.
    #[arg(long)]
    half_lives: u64,

    /// Base elapsed offset in ticks (resume mid-curve).
    #[arg(long, default_value_t = 0)]
    elapsed: u64,

    /// JSON scenario file holding the five curve parameters.
    #[arg(long)]
    scenario: Option<PathBuf>,
}

/// The worked example from the protocol design notes: 50 wad debt, 100/50
/// virtual reserves, one-tick half-life, level at 9000 bips.
fn demo_params() -> CurveParams {
    CurveParams {
        available_debt: 50 * WAD,
        virtual_input: 100 * WAD,
        virtual_output: 50 * WAD,
        half_life: 1,
        level_bips: 9_000,
    }
}

const DEMO_HALF_LIVES: u64 = 7;

fn resolve_params(args: &ForecastArgs) -> Result<CurveParams> {
    if let Some(path) = &args.scenario {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario file {}", path.display()))?;
        let params: CurveParams =
            serde_json::from_str(&data).context("invalid scenario JSON")?;
        return Ok(params);
    }
    // clap enforces presence when no scenario file is given.
    Ok(CurveParams {
        available_debt: args.available_debt.context("--available-debt is required")?,
        virtual_input: args.virtual_input.context("--virtual-input is required")?,
        virtual_output: args.virtual_output.context("--virtual-output is required")?,
        half_life: args.half_life.context("--half-life is required")?,
        level_bips: args.level_bips.context("--level-bips is required")?,
    })
}

fn run_forecast(params: CurveParams, base_elapsed: u64, half_lives: u64) -> Result<()> {
    params.validate().context("invalid curve parameters")?;
    info!(
        available_debt = params.available_debt,
        virtual_input = params.virtual_input,
        virtual_output = params.virtual_output,
        half_life = params.half_life,
        level_bips = params.level_bips,
        half_lives,
        base_elapsed,
        "sampling forecast"
    );

    let prices = price_series(&params, base_elapsed, half_lives)
        .context("failed to sample the price series")?;
    if prices.is_empty() {
        bail!("nothing to plot: half_life * half_lives is zero ticks");
    }

    let display: Vec<f64> = prices.iter().copied().map(to_display).collect();
    println!("{}", plot::render(&display, "Bond Price Forecast", " wad"));
    println!("Starting Price: {}", display[0]);
    println!("Ending Price: {}", display[display.len() - 1]);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    info!("bondcast-sim v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Forecast(args) => {
            let params = resolve_params(&args)?;
            run_forecast(params, args.elapsed, args.half_lives)
        }
        Commands::Demo => run_forecast(demo_params(), 0, DEMO_HALF_LIVES),
    }
}
