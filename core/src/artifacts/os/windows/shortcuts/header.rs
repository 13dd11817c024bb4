use crate::utils::{
    nom_helper::{
        Endian, nom_unsigned_eight_bytes, nom_unsigned_four_bytes, nom_unsigned_two_bytes,
    },
    uuid::format_guid_le_bytes,
};
use nom::bytes::complete::take;
use std::mem::size_of;

#[derive(Debug)]
pub(crate) struct LnkHeader {
    /**Should always be 0x4c (76) */
    _size: u32,
    /**Should be 00021401-0000-0000-c000-000000000046 */
    _class_id: String,
    pub(crate) data_flags: Vec<DataFlags>,
    pub(crate) is_directory: bool,
    pub(crate) hotkey: String,
}

/// Flags controlling which optional structures follow the header. Only the structures
/// this parser walks are tracked
#[derive(Debug, PartialEq)]
pub(crate) enum DataFlags {
    HasTargetIdList,
    HasLinkInfo,
}

impl LnkHeader {
    /// Parse the fixed size (76 byte) `Shortcut` header
    pub(crate) fn parse_header(data: &[u8]) -> nom::IResult<&[u8], LnkHeader> {
        let (input, size) = nom_unsigned_four_bytes(data, Endian::Le)?;
        let (input, guid_data) = take(size_of::<u128>())(input)?;
        let (input, data_flags) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, attribute_flags) = nom_unsigned_four_bytes(input, Endian::Le)?;

        let (input, _created_filetime) = nom_unsigned_eight_bytes(input, Endian::Le)?;
        let (input, _access_filetime) = nom_unsigned_eight_bytes(input, Endian::Le)?;
        let (input, _modified_filetime) = nom_unsigned_eight_bytes(input, Endian::Le)?;

        let (input, _file_size) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, _icon_index) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, _window_value) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, hot_key) = nom_unsigned_two_bytes(input, Endian::Le)?;

        let (input, _unknown) = nom_unsigned_two_bytes(input, Endian::Le)?;
        let (input, _unknown2) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, _unknown3) = nom_unsigned_four_bytes(input, Endian::Le)?;

        let directory_attribute = 0x10;
        let header = LnkHeader {
            _size: size,
            _class_id: format_guid_le_bytes(guid_data),
            data_flags: LnkHeader::get_flags(&data_flags),
            is_directory: (attribute_flags & directory_attribute) == directory_attribute,
            hotkey: LnkHeader::decode_hotkey(&hot_key),
        };

        Ok((input, header))
    }

    /// Get the data flags that control which structures follow the header
    fn get_flags(flags: &u32) -> Vec<DataFlags> {
        let mut lnk_flags: Vec<DataFlags> = Vec::new();

        let has_target_id_list = 0x1;
        let has_link_info = 0x2;

        if (flags & has_target_id_list) == has_target_id_list {
            lnk_flags.push(DataFlags::HasTargetIdList);
        }
        if (flags & has_link_info) == has_link_info {
            lnk_flags.push(DataFlags::HasLinkInfo);
        }

        lnk_flags
    }

    /// Decode the hotkey field. The low byte is a virtual key code, the high byte holds
    /// the shift/ctrl/alt modifier bits. Keys are joined in `ctrl+shift+A` form
    fn decode_hotkey(hot_key: &u16) -> String {
        let low_byte_mask = 0xff;
        let modifiers = (hot_key >> u8::BITS) as u8;
        let virtual_key = (hot_key & low_byte_mask) as u8;

        let hotkeyf_shift = 0x1;
        let hotkeyf_control = 0x2;
        let hotkeyf_alt = 0x4;

        let mut keys: Vec<String> = Vec::new();
        if (modifiers & hotkeyf_control) == hotkeyf_control {
            keys.push(String::from("ctrl"));
        }
        if (modifiers & hotkeyf_shift) == hotkeyf_shift {
            keys.push(String::from("shift"));
        }
        if (modifiers & hotkeyf_alt) == hotkeyf_alt {
            keys.push(String::from("alt"));
        }
        if let Some(name) = LnkHeader::virtual_key_name(&virtual_key) {
            keys.push(name);
        }
        keys.join("+")
    }

    /// Map a virtual key code to its name. Only keys that can appear in shortcut
    /// hotkeys are covered, anything else is dropped
    fn virtual_key_name(virtual_key: &u8) -> Option<String> {
        let name = match virtual_key {
            0x30..=0x39 | 0x41..=0x5a => (*virtual_key as char).to_string(),
            // Function keys F1-F24
            0x70..=0x87 => format!("F{}", virtual_key - 0x6f),
            0x90 => String::from("NumLock"),
            0x91 => String::from("ScrollLock"),
            _ => return None,
        };
        Some(name)
    }

    /// Verify provided bytes contain `shortcut` data
    pub(crate) fn check_header(data: &[u8]) -> nom::IResult<&[u8], bool> {
        let (input, size) = nom_unsigned_four_bytes(data, Endian::Le)?;
        let (_, guid_data) = take(size_of::<u128>())(input)?;

        let class_id = format_guid_le_bytes(guid_data);

        let header_size = 76;
        let header_id = "00021401-0000-0000-c000-000000000046";
        if size == header_size && class_id == header_id {
            return Ok((data, true));
        }
        Ok((data, false))
    }
}

/// Build a valid 76 byte header with the provided flags, attributes, and hotkey
#[cfg(test)]
pub(in crate::artifacts::os::windows::shortcuts) fn build_header(
    flags: u32,
    attributes: u32,
    hotkey: u16,
) -> Vec<u8> {
    let mut data = vec![76, 0, 0, 0];
    // Class ID 00021401-0000-0000-c000-000000000046
    data.extend_from_slice(&[1, 20, 2, 0, 0, 0, 0, 0, 192, 0, 0, 0, 0, 0, 0, 70]);
    data.extend_from_slice(&flags.to_le_bytes());
    data.extend_from_slice(&attributes.to_le_bytes());
    // Created, accessed, modified FILETIMEs
    data.extend_from_slice(&[0; 24]);
    // File size, icon index, window value
    data.extend_from_slice(&[0; 12]);
    data.extend_from_slice(&hotkey.to_le_bytes());
    // Reserved fields
    data.extend_from_slice(&[0; 10]);
    data
}

#[cfg(test)]
mod tests {
    use super::{DataFlags, LnkHeader, build_header};

    #[test]
    fn test_parse_header() {
        let test = build_header(0x3, 0x10, 0x0341);
        assert_eq!(test.len(), 76);

        let (_, result) = LnkHeader::parse_header(&test).unwrap();
        assert_eq!(result._size, 76);
        assert_eq!(result._class_id, "00021401-0000-0000-c000-000000000046");
        assert_eq!(
            result.data_flags,
            [DataFlags::HasTargetIdList, DataFlags::HasLinkInfo]
        );
        assert_eq!(result.is_directory, true);
        assert_eq!(result.hotkey, "ctrl+shift+A");
    }

    #[test]
    fn test_get_flags() {
        let test = 1;
        let result = LnkHeader::get_flags(&test);
        assert_eq!(result[0], DataFlags::HasTargetIdList)
    }

    #[test]
    fn test_decode_hotkey_no_key() {
        let test = 0;
        let result = LnkHeader::decode_hotkey(&test);
        assert_eq!(result, "");
    }

    #[test]
    fn test_decode_hotkey_function_key() {
        // alt+F4
        let test = 0x0473;
        let result = LnkHeader::decode_hotkey(&test);
        assert_eq!(result, "alt+F4");
    }

    #[test]
    fn test_decode_hotkey_unrecognized_key() {
        // Low byte is not a known virtual key
        let test = 0x00ee;
        let result = LnkHeader::decode_hotkey(&test);
        assert_eq!(result, "");
    }

    #[test]
    fn test_check_header() {
        let test = [
            76, 0, 0, 0, 1, 20, 2, 0, 0, 0, 0, 0, 192, 0, 0, 0, 0, 0, 0, 70, 139, 0, 32, 0, 16, 0,
            0, 0, 159, 38, 31, 30, 26, 246, 216, 1, 133, 5, 25, 151, 28, 27, 217, 1, 40, 54, 5,
            151, 28, 27, 217, 1, 0, 192, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0,
        ];

        let (_, result) = LnkHeader::check_header(&test).unwrap();
        assert_eq!(result, true);
    }

    #[test]
    fn test_check_header_not_lnk() {
        let test = [0; 76];
        let (_, result) = LnkHeader::check_header(&test).unwrap();
        assert_eq!(result, false);
    }
}
