//! Shared types for a conversion run

use std::path::{Path, PathBuf};

/// Validated paths for one run. Built once by argument validation and
/// passed by reference through the rest of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
}

impl ConvertConfig {
    pub fn new<I: AsRef<Path>, O: AsRef<Path>>(input: I, output_dir: O) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Input file name without directory and extension (`data/book.xlsx` → `book`)
    pub fn prefix(&self) -> String {
        self.input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Output CSV path for a sheet: `<output_dir>/<prefix>_<sheet>.csv`
    pub fn output_path(&self, sheet_name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}.csv", self.prefix(), sheet_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_strips_directory_and_extension() {
        let config = ConvertConfig::new("data/reports/book.xlsx", "out");
        assert_eq!(config.prefix(), "book");
    }

    #[test]
    fn test_prefix_keeps_inner_dots() {
        let config = ConvertConfig::new("q1.final.xlsx", "out");
        assert_eq!(config.prefix(), "q1.final");
    }

    #[test]
    fn test_output_path() {
        let config = ConvertConfig::new("data/book.xlsx", "out");
        assert_eq!(
            config.output_path("Sheet 1"),
            PathBuf::from("out").join("book_Sheet 1.csv")
        );
    }
}
