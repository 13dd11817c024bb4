use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum UtilsError {
    Regex,
    CreateDirectory,
    LogFile,
    Compress,
}

impl std::error::Error for UtilsError {}

impl fmt::Display for UtilsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtilsError::Regex => write!(f, "Failed to compile regex"),
            UtilsError::CreateDirectory => write!(f, "Failed to create directory"),
            UtilsError::LogFile => write!(f, "Failed to create log file"),
            UtilsError::Compress => write!(f, "Failed to compress data"),
        }
    }
}
