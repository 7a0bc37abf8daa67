mod spots;

use clap::{Parser, Subcommand};
use sehri_core::registry::DEFAULT_CITY;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sehri-cli")]
#[command(about = "Browse sehri distribution spots from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List spots for a city, optionally narrowed by search term and area
    List {
        #[arg(long, default_value = DEFAULT_CITY)]
        city: String,
        /// Case-insensitive match on name, area, features, notes and zone
        #[arg(long)]
        search: Option<String>,
        /// Exact area name (see `areas`)
        #[arg(long)]
        area: Option<String>,
        /// Print JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Show every area that has spots in a city
    Areas {
        #[arg(long, default_value = DEFAULT_CITY)]
        city: String,
    },
    /// Show supported cities and how many spots each has
    Cities,
    /// Show a single spot by location id
    Show {
        id: u32,
        #[arg(long)]
        json: bool,
    },
    /// Load the datasets and report drift against the verified/supported lists
    Validate,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = sehri_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        println!("sehri-cli: run with --help to see available commands");
        return Ok(());
    };

    let catalog = sehri_core::Catalog::load(&config)?;

    match command {
        Commands::List {
            city,
            search,
            area,
            json,
        } => spots::run_list(&catalog, &city, search.as_deref(), area, json)?,
        Commands::Areas { city } => spots::run_areas(&catalog, &city),
        Commands::Cities => spots::run_cities(&catalog),
        Commands::Show { id, json } => spots::run_show(&catalog, id, json)?,
        Commands::Validate => spots::run_validate(&catalog),
    }

    Ok(())
}
