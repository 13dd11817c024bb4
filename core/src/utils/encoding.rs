use base64::{Engine, engine::general_purpose};

/// Base64 encode data using the STANDARD engine
pub(crate) fn base64_encode_standard(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

#[cfg(test)]
mod tests {
    use crate::utils::encoding::base64_encode_standard;

    #[test]
    fn test_base64_encode_standard() {
        let test = b"Pretty cool huh?";
        let result = base64_encode_standard(test);
        assert_eq!(result, "UHJldHR5IGNvb2wgaHVoPw==");
    }
}
