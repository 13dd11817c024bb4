use super::error::RegistryError;
use crate::utils::{
    nom_helper::{Endian, nom_unsigned_eight_bytes, nom_unsigned_four_bytes},
    strings::{extract_utf16_segments, extract_utf16_string},
};

/// A raw Registry value as supplied by a `RegistryReader`: value name, raw type tag,
/// and undecoded data bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegValue {
    pub name: String,
    pub reg_type: u32,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryType {
    Sz,
    ExpandSz,
    Dword,
    MultiSz,
    Qword,
}

impl RegistryType {
    /// Map a raw Registry type tag to a supported type. Tags not in the supported set
    /// (ex: REG_BINARY) have dedicated decoders and are rejected here
    pub fn from_tag(tag: u32) -> Option<RegistryType> {
        let reg_type = match tag {
            1 => RegistryType::Sz,
            2 => RegistryType::ExpandSz,
            4 => RegistryType::Dword,
            7 => RegistryType::MultiSz,
            11 => RegistryType::Qword,
            _ => return None,
        };
        Some(reg_type)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum DecodedValue {
    Text(String),
    Uint32(u32),
    Uint64(u64),
    MultiText(Vec<String>),
}

/// Decode a typed Registry value into a semantic value.
/// String data is UTF16 and NUL terminated if a terminator is present
pub fn decode_value(value: &RegValue) -> Result<DecodedValue, RegistryError> {
    let reg_type = match RegistryType::from_tag(value.reg_type) {
        Some(result) => result,
        None => return Err(RegistryError::UnsupportedType),
    };

    match reg_type {
        RegistryType::Sz | RegistryType::ExpandSz => {
            Ok(DecodedValue::Text(extract_utf16_string(&value.data)))
        }
        RegistryType::MultiSz => Ok(DecodedValue::MultiText(extract_utf16_segments(&value.data))),
        RegistryType::Dword => {
            let result = nom_unsigned_four_bytes(&value.data, Endian::Le);
            match result {
                Ok((_, number)) => Ok(DecodedValue::Uint32(number)),
                Err(_err) => Err(RegistryError::TruncatedValue),
            }
        }
        RegistryType::Qword => {
            let result = nom_unsigned_eight_bytes(&value.data, Endian::Le);
            match result {
                Ok((_, number)) => Ok(DecodedValue::Uint64(number)),
                Err(_err) => Err(RegistryError::TruncatedValue),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DecodedValue, RegValue, RegistryType, decode_value};
    use crate::artifacts::os::windows::registry::error::RegistryError;

    #[test]
    fn test_from_tag() {
        assert_eq!(RegistryType::from_tag(1), Some(RegistryType::Sz));
        assert_eq!(RegistryType::from_tag(2), Some(RegistryType::ExpandSz));
        assert_eq!(RegistryType::from_tag(4), Some(RegistryType::Dword));
        assert_eq!(RegistryType::from_tag(7), Some(RegistryType::MultiSz));
        assert_eq!(RegistryType::from_tag(11), Some(RegistryType::Qword));
        assert_eq!(RegistryType::from_tag(3), None);
    }

    #[test]
    fn test_decode_value_string() {
        let test = RegValue {
            name: String::from("a"),
            reg_type: 1,
            data: vec![99, 0, 109, 0, 100, 0, 0, 0],
        };
        let result = decode_value(&test).unwrap();
        assert_eq!(result, DecodedValue::Text(String::from("cmd")));
    }

    #[test]
    fn test_decode_value_string_no_terminator() {
        let test = RegValue {
            name: String::from("a"),
            reg_type: 2,
            data: vec![99, 0, 109, 0, 100, 0],
        };
        let result = decode_value(&test).unwrap();
        assert_eq!(result, DecodedValue::Text(String::from("cmd")));
    }

    #[test]
    fn test_decode_value_dword() {
        let test = RegValue {
            name: String::from("count"),
            reg_type: 4,
            data: vec![5, 0, 0, 0],
        };
        let result = decode_value(&test).unwrap();
        assert_eq!(result, DecodedValue::Uint32(5));
    }

    #[test]
    fn test_decode_value_qword() {
        let test = RegValue {
            name: String::from("count"),
            reg_type: 11,
            data: vec![1, 0, 0, 0, 0, 0, 0, 0],
        };
        let result = decode_value(&test).unwrap();
        assert_eq!(result, DecodedValue::Uint64(1));
    }

    #[test]
    fn test_decode_value_multi_string() {
        let test = RegValue {
            name: String::from("HardwareID"),
            reg_type: 7,
            data: vec![
                85, 0, 83, 0, 66, 0, 0, 0, 68, 0, 105, 0, 115, 0, 107, 0, 0, 0, 0, 0,
            ],
        };
        let result = decode_value(&test).unwrap();
        assert_eq!(
            result,
            DecodedValue::MultiText(vec![String::from("USB"), String::from("Disk")])
        );
    }

    #[test]
    fn test_decode_value_unsupported_type() {
        let test = RegValue {
            name: String::from("blob"),
            reg_type: 3,
            data: vec![0, 0],
        };
        let result = decode_value(&test);
        assert_eq!(result, Err(RegistryError::UnsupportedType));
    }

    #[test]
    fn test_decode_value_truncated_qword() {
        let test = RegValue {
            name: String::from("count"),
            reg_type: 11,
            data: vec![1, 0],
        };
        let result = decode_value(&test);
        assert_eq!(result, Err(RegistryError::TruncatedValue));
    }

    #[test]
    fn test_decode_value_truncated_dword() {
        let test = RegValue {
            name: String::from("count"),
            reg_type: 4,
            data: vec![1, 0, 0],
        };
        let result = decode_value(&test);
        assert_eq!(result, Err(RegistryError::TruncatedValue));
    }
}
