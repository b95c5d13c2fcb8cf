use anyhow::Context;
use clap::Parser;
use shoplist::config::{AddQuantityPolicy, Config};
use shoplist::logging::init_tracing;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "shoplist", version, about = "Terminal shopping list")]
struct Cli {
    /// Config file (default: ~/.config/shoplist/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file (overrides SHOPLIST_LOG)
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,

    /// How to treat an unparseable quantity when adding an item
    #[arg(long, value_enum, value_name = "POLICY")]
    add_policy: Option<AddQuantityPolicy>,

    /// Print the final list as JSON after the UI closes
    #[arg(long)]
    print_on_exit: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    if let Some(policy) = cli.add_policy {
        config.list.add_quantity_policy = policy;
    }

    let snapshot = shoplist::ui::run(&config)?;

    if cli.print_on_exit {
        let json = serde_json::to_string_pretty(snapshot.items())
            .context("Failed to serialize list")?;
        println!("{}", json);
    }
    Ok(())
}
