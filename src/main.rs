use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sheet_unify::standardize::DEFAULT_EXPIRY_WARRANTY;
use sheet_unify::unify;
use sheet_unify::{ColumnMapping, Result, StandardizeOptions, Standardizer, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging().and_then(|()| run(cli)) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Merge(args) => execute_merge(args),
    }
}

fn execute_merge(args: MergeArgs) -> Result<()> {
    let mapping = match &args.mapping {
        Some(path) => {
            if !path.exists() {
                return Err(ToolError::MissingInput(path.clone()));
            }
            ColumnMapping::from_json_file(path)?
        }
        None => ColumnMapping::default(),
    };

    let options = StandardizeOptions {
        expiry_warranty: args.expiry_warranty,
        keep_project_data: args.keep_project_data,
    };
    let standardizer = Standardizer::new(mapping, options);

    if let Some(report) = unify::unify_files(&args.inputs, &args.output, &standardizer)? {
        println!(
            "Unified {} file(s), {} row(s) saved as {}",
            report.files,
            report.rows,
            report.output.display()
        );
    }
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Merge spreadsheets with inconsistent column names into one standardized workbook."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Standardize and concatenate a batch of `.xlsx` files.
    Merge(MergeArgs),
}

#[derive(clap::Args)]
struct MergeArgs {
    /// Input workbooks, merged in the order given.
    inputs: Vec<PathBuf>,

    /// Output workbook path. Overwritten if it exists.
    #[arg(long, short, default_value = "output.xlsx")]
    output: PathBuf,

    /// JSON file replacing the built-in column mapping.
    #[arg(long)]
    mapping: Option<PathBuf>,

    /// Value written into the `Expiry Warranty` column.
    #[arg(long, default_value = DEFAULT_EXPIRY_WARRANTY)]
    expiry_warranty: String,

    /// Keep source `Project` values instead of blanking the column.
    #[arg(long)]
    keep_project_data: bool,
}
