use crate::{
    error::TomlError, filesystem::files::read_file, structs::toml::VestigeToml,
    utils::logging::create_log_file,
};
use log::{info, warn};
use simplelog::{Config, WriteLogger};
use std::str::from_utf8;

#[cfg(target_os = "windows")]
use crate::artifacts::windows_collection::windows_collection;

/// Parse a collection TOML file at provided path
pub fn parse_toml_file(path: &str) -> Result<(), TomlError> {
    let buffer_result = read_file(path);
    let buffer = match buffer_result {
        Ok(results) => results,
        Err(_) => {
            return Err(TomlError::NoFile);
        }
    };

    parse_toml_data(&buffer)
}

/// Parse an already read collection TOML file
pub fn parse_toml_data(data: &[u8]) -> Result<(), TomlError> {
    let toml_results = toml::from_str(from_utf8(data).unwrap_or_default());
    let collector: VestigeToml = match toml_results {
        Ok(results) => results,
        Err(_) => {
            return Err(TomlError::BadToml);
        }
    };

    collect(&collector)
}

/// Collect artifacts for the target system described by the TOML config
fn collect(collector: &VestigeToml) -> Result<(), TomlError> {
    if let Ok((log_file, level)) = create_log_file(&collector.output) {
        let _ = WriteLogger::init(level, Config::default(), log_file);
    }
    info!(
        "[core] Starting collection {} with {} artifact(s)",
        collector.output.name,
        collector.artifacts.len()
    );

    if collector.system != "windows" {
        warn!("[core] Unsupported target system: {}", collector.system);
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        use log::error;

        let result = windows_collection(collector);
        match result {
            Ok(_) => info!("[core] Windows collection complete"),
            Err(err) => {
                error!("[core] Windows collection failed: {err:?}");
                return Err(TomlError::Collection);
            }
        }
    }

    #[cfg(not(target_os = "windows"))]
    warn!("[core] Windows artifact collection requires a Windows host");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_toml_data;

    #[test]
    fn test_parse_toml_data_bad_toml() {
        let result = parse_toml_data(b"not a collection");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_toml_data_unknown_system() {
        let test = r#"
        system = "solaris"

        [output]
        name = "triage"
        directory = "./tmp"
        format = "json"
        compress = false

        [[artifacts]]
        artifact_name = "userassist"
        "#;

        parse_toml_data(test.as_bytes()).unwrap();
    }
}
