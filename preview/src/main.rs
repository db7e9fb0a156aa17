// Gridotto prize previewer
//
// Purpose: Show how a prize pool is split among the winners of a draw
//
// Usage:
//   cargo run --bin gridotto_preview -- --pool 100 --model 1 --winners 3
//   cargo run --bin gridotto_preview -- --pool-wei 33333000000000000000 --tiers 1:60,2:40 --json

mod output;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use primitive_types::U256;

use gridotto_common::{
    address::Address,
    config::{COIN_SYMBOL, DIAMOND_ADDRESS, VERSION},
    distribution::{compute_tier_distribution, preview_pool_wei, PrizeModel, TierTable},
    units,
};

use output::PreviewReport;

// Equal split previews one entry per winner
const MAX_WINNERS: i64 = 10_000;

#[derive(Parser, Debug)]
#[command(name = "gridotto_preview", version = VERSION)]
#[command(about = "Preview how a Gridotto prize pool is split among winners")]
struct Args {
    /// Prize pool in LYX, e.g. 12.5
    #[arg(
        short,
        long,
        allow_hyphen_values = true,
        required_unless_present = "pool_wei",
        conflicts_with = "pool_wei"
    )]
    pool: Option<String>,

    /// Prize pool in wei
    #[arg(long)]
    pool_wei: Option<String>,

    /// Prize model id: 0 winner takes all, 1 3-tier, 2 4-tier, 3 equal split.
    /// Unknown ids are previewed as winner takes all
    #[arg(short, long, default_value_t = 0)]
    model: u64,

    /// Number of winners, at most 10000
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(..=MAX_WINNERS)
    )]
    winners: u32,

    /// Creator-defined tiers used instead of the prize model, e.g. 1:50,2:30,3:20
    #[arg(short, long)]
    tiers: Option<String>,

    /// Print the preview as JSON
    #[arg(long)]
    json: bool,
}

fn parse_pool(args: &Args) -> Result<U256> {
    match (&args.pool, &args.pool_wei) {
        (Some(pool), _) => {
            units::parse_lyx(pool).with_context(|| format!("Invalid pool amount '{}'", pool))
        }
        (None, Some(wei)) => U256::from_dec_str(wei.trim())
            .map_err(|e| anyhow::anyhow!("Invalid wei amount '{}': {:?}", wei, e)),
        (None, None) => anyhow::bail!("A pool amount is required"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    debug!("{:?}", args);

    let pool_wei = parse_pool(&args)?;
    let contract: Address = DIAMOND_ADDRESS
        .parse()
        .context("Invalid Gridotto contract address")?;

    let (model_name, entries) = match &args.tiers {
        Some(tiers) => {
            let table: TierTable = tiers
                .parse()
                .with_context(|| format!("Invalid tiers '{}'", tiers))?;
            let pool = units::wei_to_lyx_f64(pool_wei);
            let entries = compute_tier_distribution(pool, &table, args.winners)
                .context("Failed to compute tier distribution")?;
            ("Custom Tiers", entries)
        }
        None => {
            let model = PrizeModel::from_id(args.model);
            let entries = preview_pool_wei(pool_wei, model, args.winners)
                .context("Failed to compute prize distribution")?;
            (model.display_name(), entries)
        }
    };

    info!(
        "Previewing {} {} with {} for {} winner(s)",
        units::format_wei(pool_wei),
        COIN_SYMBOL,
        model_name,
        args.winners
    );

    let report = PreviewReport::new(contract, pool_wei, model_name, args.winners, &entries);
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize preview")?;
        println!("{}", json);
    } else {
        println!("{}", report.to_table());
    }

    Ok(())
}
