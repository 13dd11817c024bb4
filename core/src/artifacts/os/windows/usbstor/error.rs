use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum UsbStorError {
    RegistryAccess,
}

impl std::error::Error for UsbStorError {}

impl fmt::Display for UsbStorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsbStorError::RegistryAccess => write!(f, "Could not access USBSTOR Registry keys"),
        }
    }
}
