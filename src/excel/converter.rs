//! Workbook converter implementation - Excel (.xlsx) → one CSV per sheet

use crate::error::{ConvertError, ConvertResult};
use crate::types::ConvertConfig;
use crate::writer;
use calamine::{Reader, Xlsx};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Converts every worksheet of a workbook into `<prefix>_<sheet>.csv`
pub struct WorkbookConverter<'a> {
    config: &'a ConvertConfig,
}

impl<'a> WorkbookConverter<'a> {
    /// Create a converter for an already validated input and prepared
    /// output directory
    pub fn new(config: &'a ConvertConfig) -> Self {
        Self { config }
    }

    /// Write one CSV file per sheet, in workbook order.
    ///
    /// Returns the produced paths in the same order. On failure, files
    /// already written for earlier sheets stay on disk.
    pub fn convert(&self) -> ConvertResult<Vec<PathBuf>> {
        let input = File::open(&self.config.input)?;
        let mut workbook: Xlsx<BufReader<File>> = Xlsx::new(BufReader::new(input))?;

        let sheet_names = workbook.sheet_names().to_vec();
        debug!(sheets = sheet_names.len(), "opened workbook");

        let mut outputs = Vec::with_capacity(sheet_names.len());
        for sheet_name in sheet_names {
            let output = self.config.output_path(&sheet_name);
            self.convert_sheet(&mut workbook, &sheet_name, &output)?;
            outputs.push(output);
        }

        Ok(outputs)
    }

    /// Write a single sheet; the output file is created or truncated first
    fn convert_sheet(
        &self,
        workbook: &mut Xlsx<BufReader<File>>,
        sheet_name: &str,
        output: &Path,
    ) -> ConvertResult<()> {
        let range = workbook.worksheet_range(sheet_name).map_err(|e| match e {
            calamine::XlsxError::Io(io) => ConvertError::FileIo(io),
            other => {
                ConvertError::Conversion(format!("Failed to read sheet '{}': {}", sheet_name, other))
            }
        })?;

        let mut out = BufWriter::new(File::create(output)?);
        // calamine trims the range to its first used cell; realign to A1
        let origin = range.start().unwrap_or((0, 0));
        let lines = writer::write_rows(&mut out, origin, range.rows())?;
        out.flush()?;

        info!(sheet = sheet_name, lines, path = %output.display(), "sheet written");
        Ok(())
    }
}
