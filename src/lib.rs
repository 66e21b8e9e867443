//! xlsx2csv - split an Excel workbook into one CSV file per worksheet
//!
//! Each sheet of `<input>.xlsx` becomes `<output_dir>/<input>_<sheet>.csv`.
//! Every row is one line; every cell is wrapped in double quotes and cells
//! are separated by commas.
//!
//! # Example
//!
//! ```no_run
//! use xlsx2csv::cli::prepare_output_dir;
//! use xlsx2csv::excel::WorkbookConverter;
//! use xlsx2csv::types::ConvertConfig;
//!
//! let config = ConvertConfig::new("report.xlsx", "csv");
//! prepare_output_dir(&config.output_dir)?;
//!
//! for path in WorkbookConverter::new(&config).convert()? {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), xlsx2csv::error::ConvertError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{ConvertError, ConvertResult};
pub use types::ConvertConfig;
