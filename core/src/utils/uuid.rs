use log::warn;
use uuid::Uuid;

/// Create a UUID and return as a string
pub(crate) fn generate_uuid() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/// Convert little endian bytes to a UUID/GUID string
pub(crate) fn format_guid_le_bytes(data: &[u8]) -> String {
    let guid_size = 16;
    if data.len() != guid_size {
        warn!(
            "[core] Provided little endian data does not meet GUID size of 16 bytes, got: {}",
            data.len()
        );
        return format!("Not a GUID/UUID: {data:?}");
    }

    let guid_data = data.try_into();
    match guid_data {
        Ok(result) => Uuid::from_bytes_le(result).hyphenated().to_string(),
        Err(_err) => {
            warn!("[core] Could not convert little endian bytes to a GUID/UUID format: {data:?}");
            format!("Could not convert data: {data:?}")
        }
    }
}
