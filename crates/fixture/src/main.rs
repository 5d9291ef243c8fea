use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use gildedrose_fixture::{ReportFormat, default_inventory, load_inventory, render, simulate};

#[derive(Parser)]
#[command(
    name = "gildedrose-fixture",
    version,
    about = "Advance the shop inventory day by day and print every state"
)]
struct Cli {
    /// Number of days to simulate after the initial state.
    #[arg(default_value_t = 2)]
    days: u32,

    /// JSON inventory file (array of {name, sell_in, quality}); defaults to the starter shop.
    #[arg(long, value_name = "PATH")]
    inventory: Option<PathBuf>,

    /// Report layout.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let cli = Cli::parse();

    let items = match &cli.inventory {
        Some(path) => load_inventory(path)
            .with_context(|| format!("loading inventory from {}", path.display()))?,
        None => default_inventory(),
    };
    tracing::info!(items = items.len(), days = cli.days, "starting simulation");

    let simulation = simulate(items, cli.days);
    let report = render(&simulation, cli.format)?;
    print!("{report}");
    Ok(())
}
