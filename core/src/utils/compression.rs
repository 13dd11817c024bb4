use super::error::UtilsError;
use flate2::{Compression, write::GzEncoder};
use log::error;
use std::io::Write;

/// Compress provided data with gzip
pub(crate) fn compress_gzip_data(data: &[u8]) -> Result<Vec<u8>, UtilsError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    let write_result = encoder.write_all(data);
    match write_result {
        Ok(_) => {}
        Err(err) => {
            error!("[core] Could not gzip compress data: {err:?}");
            return Err(UtilsError::Compress);
        }
    }

    let finish_result = encoder.finish();
    match finish_result {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[core] Could not finish gzip compressing data: {err:?}");
            Err(UtilsError::Compress)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::compress_gzip_data;

    #[test]
    fn test_compress_gzip_data() {
        let test = b"compress me please";
        let result = compress_gzip_data(test).unwrap();
        // gzip magic number
        assert_eq!(result[0], 0x1f);
        assert_eq!(result[1], 0x8b);
    }
}
