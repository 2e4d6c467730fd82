use std::path::PathBuf;

use clap::Parser;
use contact_mapper::config::{DEFAULT_OUTPUT, DEFAULT_PREVIEW_ROWS, MapperConfig};
use contact_mapper::io::csv_write;
use contact_mapper::mapper;
use contact_mapper::{MapperError, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging().and_then(|()| run(cli)) {
        eprintln!("error: {error}");
        if matches!(error, MapperError::InputNotFound(_)) {
            eprintln!("Please make sure you have provided the correct path to the input file.");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = MapperConfig::default().with_preview_rows(cli.preview);
    println!("Reading data from '{}'...", cli.input_file.display());
    let mapped = mapper::run(&cli.input_file, &cli.output, &config)?;

    println!("Successfully mapped data to '{}'", cli.output.display());
    if config.preview_rows > 0 {
        println!("\n--- First {} rows of mapped data ---", config.preview_rows);
        print!(
            "{}",
            csv_write::render_preview(&mapped.records, config.preview_rows)?
        );
    }
    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| MapperError::Logging(err.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Maps columns from a contact export CSV to the mailing-list format."
)]
struct Cli {
    /// The path to the source CSV file to be processed.
    input_file: PathBuf,

    /// The path for the output file.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Number of mapped rows to print after a successful run.
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    preview: usize,
}
