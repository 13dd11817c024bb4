use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum WinArtifactError {
    UserAssist,
    RecentDocs,
    Mru,
    Shortcuts,
    UrlFiles,
    JumpLists,
    UsbStor,
    Edge,
    Serialize,
    Output,
}

impl std::error::Error for WinArtifactError {}

impl fmt::Display for WinArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinArtifactError::UserAssist => write!(f, "Failed to parse UserAssist"),
            WinArtifactError::RecentDocs => write!(f, "Failed to parse RecentDocs"),
            WinArtifactError::Mru => write!(f, "Failed to parse MRU keys"),
            WinArtifactError::Shortcuts => write!(f, "Failed to parse shortcut files"),
            WinArtifactError::UrlFiles => write!(f, "Failed to parse url files"),
            WinArtifactError::JumpLists => write!(f, "Failed to check JumpList files"),
            WinArtifactError::UsbStor => write!(f, "Failed to parse USBSTOR"),
            WinArtifactError::Edge => write!(f, "Failed to parse Edge favorites"),
            WinArtifactError::Serialize => write!(f, "Failed to serialize artifact data"),
            WinArtifactError::Output => write!(f, "Failed to output artifact data"),
        }
    }
}
