use super::{error::OutputError, local::local_output};
use crate::structs::toml::Output;
use crate::utils::{compression::compress_gzip_data, time::time_now, uuid::generate_uuid};
use log::{error, info};
use serde_json::{Value, json};

/// Output artifact data to `json` format. A small metadata envelope is included with each file
pub(crate) fn json_format(
    serde_data: &Value,
    output_name: &str,
    output: &Output,
    start_time: &u64,
) -> Result<(), OutputError> {
    if output.format != "json" {
        error!("[core] Unknown output format: {}", output.format);
        return Err(OutputError::UnsupportedFormat);
    }

    let uuid = generate_uuid();
    let mut collection_output = json![{
        "metadata": {
            "uuid": uuid,
            "collection_name": output.name,
            "artifact_name": output_name,
            "start_time": start_time,
            "complete_time": time_now(),
            "platform": std::env::consts::OS,
            "version": env!("CARGO_PKG_VERSION"),
        }
    }];

    collection_output["data"] = serde_data.clone();

    let serde_collection_results = serde_json::to_string(&collection_output);
    let serde_collection = match serde_collection_results {
        Ok(results) => results,
        Err(err) => {
            error!("[core] Failed to serialize json output: {err:?}");
            return Err(OutputError::Serialize);
        }
    };
    let collection_data = serde_collection.as_bytes();

    let (output_data, extension) = if output.compress {
        let compressed_results = compress_gzip_data(collection_data);
        match compressed_results {
            Ok(result) => (result, String::from("json.gz")),
            Err(err) => {
                error!("[core] Failed to compress data: {err:?}");
                return Err(OutputError::Compress);
            }
        }
    } else {
        (collection_data.to_vec(), output.format.clone())
    };

    let output_result = local_output(&output_data, output, &uuid, &extension);
    match output_result {
        Ok(_) => info!("[core] {output_name} json output success"),
        Err(err) => {
            error!("[core] Failed to output {output_name} json: {err:?}");
            return Err(err);
        }
    }

    Ok(())
}
