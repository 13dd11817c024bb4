use crate::utils::encoding::base64_encode_standard;
use log::warn;

/// Get a UTF16 string from provided bytes data. Stops at the first NUL character
pub(crate) fn extract_utf16_string(data: &[u8]) -> String {
    let mut utf16_data: Vec<u16> = Vec::new();
    let wide_char_size = 2;
    for wide_char in data.chunks(wide_char_size) {
        if wide_char.len() < wide_char_size {
            break;
        }
        let value = u16::from_le_bytes([wide_char[0], wide_char[1]]);
        if value == 0 {
            break;
        }
        utf16_data.push(value);
    }

    // Windows uses UTF16
    let utf16_result = String::from_utf16(&utf16_data);
    match utf16_result {
        Ok(result) => result,
        Err(err) => {
            warn!("[strings] Failed to get UTF16 string: {err:?}");
            format!(
                "Failed to get UTF16 string: {}",
                base64_encode_standard(data)
            )
        }
    }
}

/// Split UTF16 bytes data on NUL characters and return all non-empty segments
pub(crate) fn extract_utf16_segments(data: &[u8]) -> Vec<String> {
    let mut wide_chars: Vec<u16> = Vec::new();
    let wide_char_size = 2;
    for wide_char in data.chunks(wide_char_size) {
        if wide_char.len() < wide_char_size {
            break;
        }
        wide_chars.push(u16::from_le_bytes([wide_char[0], wide_char[1]]));
    }

    let mut segments = Vec::new();
    for segment in wide_chars.split(|value| *value == 0) {
        if segment.is_empty() {
            continue;
        }
        let utf16_result = String::from_utf16(segment);
        match utf16_result {
            Ok(result) => segments.push(result),
            Err(err) => {
                warn!("[strings] Failed to get UTF16 string segment: {err:?}");
            }
        }
    }
    segments
}

/// Get a UTF8 string from provided bytes data
pub(crate) fn extract_utf8_string(data: &[u8]) -> String {
    let utf8_result = String::from_utf8(data.to_vec());
    match utf8_result {
        Ok(result) => result.trim_end_matches('\0').to_string(),
        Err(err) => {
            warn!("[strings] Failed to get UTF8 string: {err:?}");
            format!(
                "Failed to get UTF8 string: {}",
                base64_encode_standard(data)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::strings::{
        extract_utf8_string, extract_utf16_segments, extract_utf16_string,
    };

    #[test]
    fn test_extract_utf16_string() {
        let test_data = vec![
            79, 0, 83, 0, 81, 0, 85, 0, 69, 0, 82, 0, 89, 0, 68, 0, 46, 0, 69, 0, 88, 0, 69, 0, 0,
            0,
        ];
        assert_eq!(extract_utf16_string(&test_data), "OSQUERYD.EXE")
    }

    #[test]
    fn test_extract_utf16_string_no_terminator() {
        let test_data = vec![82, 0, 117, 0, 115, 0, 116, 0];
        assert_eq!(extract_utf16_string(&test_data), "Rust")
    }

    #[test]
    fn test_extract_utf16_segments() {
        let test_data = vec![
            97, 0, 46, 0, 116, 0, 120, 0, 116, 0, 0, 0, 98, 0, 46, 0, 116, 0, 120, 0, 116, 0, 0,
            0, 0, 0,
        ];
        assert_eq!(extract_utf16_segments(&test_data), ["a.txt", "b.txt"])
    }

    #[test]
    fn test_extract_utf8_string() {
        let test_data = vec![79, 83, 81, 85, 69, 82, 89, 68, 46, 69, 88, 69, 0];
        assert_eq!(extract_utf8_string(&test_data), "OSQUERYD.EXE")
    }
}
