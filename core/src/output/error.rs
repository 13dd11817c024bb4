use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum OutputError {
    Serialize,
    Compress,
    CreateDirectory,
    CreateFile,
    WriteFile,
    UnsupportedFormat,
}

impl std::error::Error for OutputError {}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::Serialize => write!(f, "Failed to serialize artifact data"),
            OutputError::Compress => write!(f, "Failed to compress output"),
            OutputError::CreateDirectory => write!(f, "Failed to create output directory"),
            OutputError::CreateFile => write!(f, "Failed to create output file"),
            OutputError::WriteFile => write!(f, "Failed to write output file"),
            OutputError::UnsupportedFormat => write!(f, "Unsupported output format"),
        }
    }
}
