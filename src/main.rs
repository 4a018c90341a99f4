use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use num_bigint::BigUint;
use num_traits::One;

use strategos::exchange::{self, published};
use strategos::strategy::render::{ascii_art, Glyphs};
use strategos::strategy::wf_paths;
use strategos::{optimizer, Weights};

#[derive(Parser, Debug)]
#[command(
    name = "strategos",
    about = "Minimum-cost evaluation strategies for isogeny chains"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search the optimal strategy for a chain of the given length.
    Optimize {
        /// Chain length (strategy height).
        length: usize,
        /// Cost of one left edge (point multiplication step).
        #[arg(long, default_value_t = 1)]
        left: u64,
        /// Cost of one right edge (isogeny evaluation step).
        #[arg(long, default_value_t = 1)]
        right: u64,
        /// Print the strategy as slash-art.
        #[arg(long)]
        art: bool,
    },
    /// Total operation count against a published per-degree cost table.
    Opcount {
        /// Chain length.
        length: usize,
        /// Isogeny degree to look up in the DJP table.
        #[arg(long, default_value_t = 4)]
        degree: u32,
        /// Operation-kind weight (repeatable), e.g. --weight m=1.
        #[arg(long = "weight", value_name = "KIND=WEIGHT")]
        weights: Vec<String>,
        /// Print the strategy as slash-art.
        #[arg(long)]
        art: bool,
    },
    /// Count the well-formed strategies of a given height.
    Enumerate {
        /// Strategy height (keep small; the count grows quickly).
        height: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Optimize {
            length,
            left,
            right,
            art,
        } => run_optimize(length, left, right, art)?,
        Commands::Opcount {
            length,
            degree,
            weights,
            art,
        } => run_opcount(length, degree, &weights, art)?,
        Commands::Enumerate { height } => run_enumerate(height)?,
    }

    Ok(())
}

fn run_optimize(length: usize, left: u64, right: u64, art: bool) -> Result<()> {
    let table = optimizer::optimal_strategies(length, left, right)
        .context("strategy search failed")?;

    let (cost, strategy) = &table[length];
    let (l, r) = strategy.count();
    println!(
        "height {}\tcost={}\tleft-edges={}\tright-edges={}",
        length, cost, l, r
    );
    if art {
        print!("{}", ascii_art(strategy, Glyphs::Unicode));
    }
    Ok(())
}

fn run_opcount(length: usize, degree: u32, weight_args: &[String], art: bool) -> Result<()> {
    let table = published::djp();
    let party = table
        .get(&degree)
        .with_context(|| format!("no published costs for degree {}", degree))?;

    let weights = parse_weights(weight_args)?;
    let report = exchange::opcount(length, party, weights.as_ref())
        .context("operation count failed")?;

    let (l, r) = report.strategy.count();
    println!(
        "chain {}\tdegree {}\tscalar={}\tleft-edges={}\tright-edges={}",
        length, degree, report.scalar, l, r
    );
    println!("total: {}", report.total);
    if art {
        print!("{}", ascii_art(&report.strategy, Glyphs::Unicode));
    }
    Ok(())
}

fn run_enumerate(height: usize) -> Result<()> {
    let reachable = (BigUint::one() << height) - BigUint::one();
    let all = wf_paths(&reachable)
        .with_context(|| format!("enumeration failed for height {}", height))?;
    println!("height {}\twell-formed strategies: {}", height, all.len());
    Ok(())
}

fn parse_weights(args: &[String]) -> Result<Option<Weights>> {
    if args.is_empty() {
        return Ok(None);
    }

    let mut weights = Weights::default();
    for arg in args {
        let (kind, value) = arg
            .split_once('=')
            .with_context(|| format!("invalid weight '{}', expected KIND=WEIGHT", arg))?;
        let value: i64 = value
            .parse()
            .with_context(|| format!("invalid weight value in '{}'", arg))?;
        weights = weights.and(kind, value);
    }
    Ok(Some(weights))
}
