use crate::artifacts::os::windows::registry::error::RegistryError;
use crate::utils::{
    known_folders::lookup_known_folder,
    nom_helper::{Endian, nom_data, nom_unsigned_eight_bytes, nom_unsigned_four_bytes},
    regex_options::create_regex,
    time::filetime_to_unixepoch,
};
use std::time::Duration;

/// Decoded `UserAssist` Count record. Two layouts exist: entries written before
/// Windows 7 are 16 bytes, entries written by Windows 7 and later are 68+ bytes
/// (72 on current builds)
#[derive(Debug, PartialEq)]
pub enum CountRecord {
    Legacy {
        run_count: u32,
        last_run: Option<i64>,
    },
    Modern {
        /**A single field records both the run count and the focus count */
        count: u32,
        focus_duration: Duration,
        last_run: Option<i64>,
    },
}

/// Parse the binary data of a `UserAssist` Count value. The layout is selected by the
/// data length
pub fn parse_count_record(data: &[u8]) -> Result<CountRecord, RegistryError> {
    let legacy_size = 16;
    let modern_size = 68;
    if data.len() < legacy_size {
        return Err(RegistryError::TruncatedValue);
    }

    let record_result = if data.len() < modern_size {
        legacy_record(data)
    } else {
        modern_record(data)
    };

    match record_result {
        Ok((_, record)) => Ok(record),
        Err(_err) => Err(RegistryError::TruncatedValue),
    }
}

/// Pre Windows 7 layout: run count at offset 4, FILETIME at offset 8
fn legacy_record(data: &[u8]) -> nom::IResult<&[u8], CountRecord> {
    let (input, _session_id) = nom_unsigned_four_bytes(data, Endian::Le)?;
    let (input, run_count) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, filetime) = nom_unsigned_eight_bytes(input, Endian::Le)?;

    let record = CountRecord::Legacy {
        run_count,
        last_run: filetime_or_none(&filetime),
    };
    Ok((input, record))
}

/// Windows 7+ layout: count at offset 8, focus time in milliseconds at offset 12,
/// FILETIME at offset 60
fn modern_record(data: &[u8]) -> nom::IResult<&[u8], CountRecord> {
    let unknown_header_size = 8;
    let (input, _) = nom_data(data, unknown_header_size)?;
    let (input, count) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, focus_ms) = nom_unsigned_four_bytes(input, Endian::Le)?;

    let unknown_size = 44;
    let (input, _) = nom_data(input, unknown_size)?;
    let (input, filetime) = nom_unsigned_eight_bytes(input, Endian::Le)?;

    let record = CountRecord::Modern {
        count,
        focus_duration: Duration::from_millis(focus_ms as u64),
        last_run: filetime_or_none(&filetime),
    };
    Ok((input, record))
}

/// Treat timestamps before 1970 as never run. A zeroed FILETIME decodes to 1601
fn filetime_or_none(filetime: &u64) -> Option<i64> {
    let epoch = filetime_to_unixepoch(filetime);
    if epoch < 0 {
        return None;
    }
    Some(epoch)
}

/// The `UserAssist` executable path is ROT13 encoded.
/// It is possible to disable the encoding via a Registry setting
pub fn rot_decode(rot: &str) -> String {
    let rot_shift = 13;
    rot.chars()
        .map(|c| match c {
            'a'..='m' | 'A'..='M' => ((c as u8) + rot_shift) as char,
            'n'..='z' | 'N'..='Z' => ((c as u8) - rot_shift) as char,
            _ => c,
        })
        .collect()
}

/// ROT13 decode a `UserAssist` value name and resolve a leading known folder GUID to
/// its directory name. Unmapped GUIDs are left in place
pub fn transform_value_name(name: &str) -> String {
    let decoded = rot_decode(name);

    let guid_regex =
        create_regex(r"(?i)\b[A-F0-9]{8}(?:-[A-F0-9]{4}){3}-[A-F0-9]{12}\b").unwrap(); // always valid
    if let Some(guid_match) = guid_regex.find(&decoded) {
        let guid = guid_match.as_str();
        if let Some(folder) = lookup_known_folder(guid) {
            return decoded.replace(&format!("{{{guid}}}"), folder);
        }
    }
    decoded
}
