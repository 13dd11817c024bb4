use super::{error::UtilsError, uuid::generate_uuid};
use crate::structs::toml::Output;
use log::{LevelFilter, error};
use std::fs::{File, create_dir_all};

/// Create log output file and logging level based on TOML `Output` configuration
pub(crate) fn create_log_file(output: &Output) -> Result<(File, LevelFilter), UtilsError> {
    let path = format!("{}/{}", output.directory, output.name);
    let result = create_dir_all(&path);
    match result {
        Ok(_) => {}
        Err(err) => {
            error!("[core] Failed to create logging output directory for {path}. Error: {err:?}");
            return Err(UtilsError::CreateDirectory);
        }
    }

    let output_result = File::create(format!("{path}/{}.log", generate_uuid()));
    let log_file = match output_result {
        Ok(result) => result,
        Err(err) => {
            error!("[core] Failed to create log file at {path}. Error: {err:?}");
            return Err(UtilsError::LogFile);
        }
    };

    let level = if let Some(log_level) = &output.logging {
        match log_level.to_lowercase().as_str() {
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            _ => LevelFilter::Warn,
        }
    } else {
        LevelFilter::Warn
    };

    Ok((log_file, level))
}

#[cfg(test)]
mod tests {
    use super::create_log_file;
    use crate::structs::toml::Output;
    use log::LevelFilter;

    #[test]
    fn test_create_log_file() {
        let test = Output {
            name: String::from("logging"),
            directory: String::from("./tmp"),
            format: String::from("json"),
            compress: false,
            logging: Some(String::new()),
        };

        let (_, level) = create_log_file(&test).unwrap();
        assert_eq!(level, LevelFilter::Warn);
    }
}
