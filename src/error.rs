use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Terminal outcomes of a run; each one maps to a process exit code.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Not enough arguments: expected <input.xlsx> <output-directory>")]
    InsufficientArguments,

    #[error("Input workbook does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to create output directory: {}", path.display())]
    OutputDirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File I/O failed")]
    FileIo(#[from] io::Error),

    #[error("Unexpected error while converting workbook")]
    Conversion(String),
}

impl ConvertError {
    /// Process exit code reported for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConvertError::InsufficientArguments => 81,
            ConvertError::InputNotFound(_) => 82,
            ConvertError::OutputDirectoryCreateFailed { .. } => 83,
            ConvertError::FileIo(_) => 98,
            ConvertError::Conversion(_) => 99,
        }
    }

    /// Underlying system or library message, shown on a second console line.
    pub fn detail(&self) -> Option<String> {
        match self {
            ConvertError::InsufficientArguments | ConvertError::InputNotFound(_) => None,
            ConvertError::OutputDirectoryCreateFailed { source, .. } => Some(source.to_string()),
            ConvertError::FileIo(e) => Some(e.to_string()),
            ConvertError::Conversion(msg) => Some(msg.clone()),
        }
    }
}

impl From<calamine::XlsxError> for ConvertError {
    fn from(err: calamine::XlsxError) -> Self {
        match err {
            calamine::XlsxError::Io(e) => ConvertError::FileIo(e),
            other => ConvertError::Conversion(other.to_string()),
        }
    }
}
