use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Sort a list of integers in place and print it before and after
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Values to sort
    #[arg(
        default_values_t = [34, 223, 22, 31, 1, 100, 50, 40, 22, 72],
        allow_negative_numbers = true
    )]
    values: Vec<i64>,

    /// First index of the range to sort, defaults to 0
    #[arg(long)]
    low: Option<usize>,

    /// Last index of the range to sort, defaults to the last element
    #[arg(long)]
    high: Option<usize>,
}

/// Fills in a missing bound of a partially given range, `None` means sort everything.
fn resolve_range(low: Option<usize>, high: Option<usize>, len: usize) -> Option<(usize, usize)> {
    match (low, high) {
        (None, None) => None,
        (low, high) => Some((
            low.unwrap_or(0),
            high.unwrap_or_else(|| len.saturating_sub(1)),
        )),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut values = args.values;

    println!("before sorting: {values:?}");

    match resolve_range(args.low, args.high, values.len()) {
        None => {
            let len = values.len();
            info!(len, "sorting all values");
            quicksort_rs::sort_with_len(&mut values, len)
                .context("failed to sort values")?;
        }
        Some((low, high)) => {
            info!(low, high, "sorting range");
            quicksort_rs::sort_range(&mut values, low, high)
                .with_context(|| format!("failed to sort range [{low}, {high}]"))?;
        }
    }

    println!("after sorting: {values:?}");

    Ok(())
}
