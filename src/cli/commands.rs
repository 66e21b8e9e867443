use crate::cli::reporter;
use crate::error::{ConvertError, ConvertResult};
use crate::excel::WorkbookConverter;
use crate::types::ConvertConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Check the positional arguments and build the run configuration.
///
/// The first path must name an existing file. The output directory is not
/// checked here; see [`prepare_output_dir`].
pub fn validate_args(paths: &[PathBuf]) -> ConvertResult<ConvertConfig> {
    let (input, output_dir) = match paths {
        [input, output_dir, rest @ ..] => {
            if !rest.is_empty() {
                warn!(ignored = rest.len(), "ignoring extra arguments");
            }
            (input, output_dir)
        }
        _ => return Err(ConvertError::InsufficientArguments),
    };

    if !input.is_file() {
        return Err(ConvertError::InputNotFound(input.clone()));
    }

    Ok(ConvertConfig::new(input, output_dir))
}

/// Create the output directory (and missing parents) unless it already exists
pub fn prepare_output_dir(dir: &Path) -> ConvertResult<()> {
    if dir.is_dir() {
        debug!(path = %dir.display(), "output directory exists");
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|source| ConvertError::OutputDirectoryCreateFailed {
        path: dir.to_path_buf(),
        source,
    })?;
    debug!(path = %dir.display(), "created output directory");
    Ok(())
}

/// Execute the conversion: validate, prepare, convert, report.
///
/// Failures are reported to the console before being returned; the caller
/// only needs to turn them into an exit code.
pub fn convert(paths: &[PathBuf]) -> ConvertResult<Vec<PathBuf>> {
    let result = run_pipeline(paths);
    if let Err(ref e) = result {
        reporter::failure(e);
    }
    result
}

fn run_pipeline(paths: &[PathBuf]) -> ConvertResult<Vec<PathBuf>> {
    let config = validate_args(paths)?;
    prepare_output_dir(&config.output_dir)?;

    reporter::start(&config);
    let outputs = WorkbookConverter::new(&config).convert()?;
    reporter::complete(&outputs);

    Ok(outputs)
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
