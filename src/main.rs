use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use xlsx2csv::cli;

#[derive(Parser)]
#[command(name = "xlsx2csv")]
#[command(about = "Convert every sheet of an Excel workbook (.xlsx) to its own CSV file")]
#[command(override_usage = "xlsx2csv [OPTIONS] <INPUT_XLSX> <OUTPUT_DIR>")]
#[command(long_about = "xlsx2csv - Excel workbook to CSV, one file per sheet

Each sheet is written to <OUTPUT_DIR>/<input name>_<sheet name>.csv.
Every cell is wrapped in double quotes; cell text is not escaped.
The output directory is created if it does not exist.

EXIT CODES:
  0   success
  81  fewer than 2 arguments
  82  input file does not exist
  83  output directory could not be created
  98  file I/O error during conversion
  99  any other conversion error

EXAMPLE:
  xlsx2csv quarterly.xlsx ./csv     # → ./csv/quarterly_Sheet1.csv, ...")]
#[command(version)]
struct Cli {
    /// Input workbook (.xlsx) followed by the output directory
    #[arg(value_name = "PATHS")]
    paths: Vec<PathBuf>,

    /// Show per-sheet progress on stderr
    #[arg(short, long, env = "XLSX2CSV_VERBOSE")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "xlsx2csv=debug"
    } else {
        "xlsx2csv=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging(args.verbose);

    match cli::convert(&args.paths) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(e.exit_code()),
    }
}
