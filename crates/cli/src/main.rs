mod http;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use shelfmap_core::{execute_lookup, LookupError, LookupRequest};
use tracing_subscriber::EnvFilter;

use crate::http::{HttpDiagramSource, HttpStackDataSource};

const DEFAULT_DATA_URL: &str =
    "https://www.law.georgetown.edu/wp-content/themes/georgetownlaw/georgetownlaw/images/library-maps/";
const DEFAULT_MAP_URL: &str =
    "https://www.law.georgetown.edu/wp-content/themes/georgetownlaw/georgetownlaw/images/library-maps/ebw-";

/// Shelfmap - locate a call number on a library floor map
#[derive(Debug, Parser)]
#[command(
    name = "shelfmap",
    version,
    about = "Resolve a call number to a shelf and highlight it on the floor map"
)]
struct Cli {
    /// Location code identifying the stack dataset to search.
    #[arg(long)]
    location: Option<String>,

    /// Call number to locate.
    #[arg(long)]
    callnumber: Option<String>,

    /// Base URL for stack data files (data-<location>.json).
    #[arg(long, default_value = DEFAULT_DATA_URL)]
    data_url: String,

    /// Base URL for floor map files (<floor>.svg).
    #[arg(long, default_value = DEFAULT_MAP_URL)]
    map_url: String,

    /// Library display name for the summary heading.
    #[arg(long, default_value = "Williams Library")]
    library_name: String,

    /// Where to write the highlighted floor map.
    #[arg(long, default_value = "floor-map.svg")]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let exit_code = run(cli).await?;
    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<i32> {
    // Both inputs are required; report a missing one immediately, before
    // any fetch is attempted.
    let request = match (&cli.location, &cli.callnumber) {
        (None, _) => {
            eprintln!("Error: {}", LookupError::MissingLocation);
            return Ok(2);
        }
        (_, None) => {
            eprintln!("Error: {}", LookupError::MissingCallNumber);
            return Ok(2);
        }
        (Some(location), Some(callnumber)) => LookupRequest {
            location_code: location.clone(),
            call_number: callnumber.clone(),
            library_name: cli.library_name.clone(),
        },
    };

    let client = reqwest::Client::new();
    let data_source = HttpStackDataSource::new(client.clone(), cli.data_url.clone());
    let diagram_source = HttpDiagramSource::new(client, cli.map_url.clone());

    match execute_lookup(&request, &data_source, &diagram_source).await {
        Ok(outcome) => {
            println!("{}", outcome.summary);
            std::fs::write(&cli.out, outcome.diagram.svg.as_bytes())?;
            println!();
            println!(
                "Highlighted map for floor {} written to {}",
                outcome.diagram.floor,
                cli.out.display()
            );
            Ok(0)
        }
        Err(error) => {
            eprintln!("Error: {error}");
            Ok(1)
        }
    }
}
