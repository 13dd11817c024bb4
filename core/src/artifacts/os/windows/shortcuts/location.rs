use crate::utils::{
    nom_helper::{Endian, nom_unsigned_four_bytes},
    strings::extract_utf8_string,
};
use nom::{
    Needed,
    bytes::complete::{take, take_while},
};

#[derive(Debug)]
pub(crate) struct LnkLocation {
    _size: u32,
    _header_size: u32,
    /**Set only when the location has a volume ID and local base path */
    pub(crate) local_path: Option<String>,
}

impl LnkLocation {
    /// Parse the location information (LinkInfo) from `shortcut` data.
    /// All offsets are relative to the start of the structure
    pub(crate) fn parse_location(data: &[u8]) -> nom::IResult<&[u8], LnkLocation> {
        let (input, size) = nom_unsigned_four_bytes(data, Endian::Le)?;

        // Size includes the size itself (4 bytes)
        let adjust_size = 4;
        if size < adjust_size {
            return Err(nom::Err::Incomplete(Needed::Unknown));
        }
        let (remaining_input, input) = take(size - adjust_size)(input)?;

        let (input, header_size) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, flags) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, _volume_offset) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (_, local_path_offset) = nom_unsigned_four_bytes(input, Endian::Le)?;

        let mut location = LnkLocation {
            _size: size,
            _header_size: header_size,
            local_path: None,
        };

        // The target is either on a local volume or a network share. Only local base
        // paths are extracted
        let volume_and_base_path = 0x1;
        if (flags & volume_and_base_path) == volume_and_base_path {
            let (path_start, _) = take(local_path_offset)(data)?;
            let (_, path_data) = take_while(|b| b != 0)(path_start)?;
            location.local_path = Some(extract_utf8_string(path_data));
        }

        Ok((remaining_input, location))
    }
}

/// Build a LinkInfo structure holding one local base path
#[cfg(test)]
pub(in crate::artifacts::os::windows::shortcuts) fn build_location(path: &str) -> Vec<u8> {
    let header_size: u32 = 28;
    let path_bytes = path.as_bytes();
    let size = header_size + path_bytes.len() as u32 + 1;

    let mut data = Vec::new();
    data.extend_from_slice(&size.to_le_bytes());
    data.extend_from_slice(&header_size.to_le_bytes());
    // VolumeIDAndLocalBasePath flag
    data.extend_from_slice(&1_u32.to_le_bytes());
    // Volume ID offset
    data.extend_from_slice(&0_u32.to_le_bytes());
    // Local base path offset
    data.extend_from_slice(&header_size.to_le_bytes());
    // Common network relative link and common path suffix offsets
    data.extend_from_slice(&[0; 8]);
    data.extend_from_slice(path_bytes);
    data.push(0);
    data
}
