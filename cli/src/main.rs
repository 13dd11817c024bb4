use base64::{Engine, engine::general_purpose};
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Full path to TOML collector
    #[clap(short, long, value_parser)]
    toml: Option<String>,

    /// Base64 encoded TOML file
    #[clap(short, long, value_parser)]
    data: Option<String>,
}

fn main() {
    let args = Args::parse();
    println!("[vestige] Starting vestige collection!");

    if let Some(toml) = args.toml {
        if !toml.is_empty() {
            let collection_results = vestige_core::core::parse_toml_file(&toml);
            match collection_results {
                Ok(_) => info!("[vestige] Collection success"),
                Err(err) => {
                    println!("[vestige] Failed to collect artifacts: {err:?}");
                    return;
                }
            }
        }
    } else if let Some(data) = args.data {
        if !data.is_empty() {
            let toml_data_results = general_purpose::STANDARD.decode(&data);
            let toml_data = match toml_data_results {
                Ok(results) => results,
                Err(err) => {
                    println!(
                        "[vestige] Failed to base64 decode TOML collector {data}, error: {err:?}",
                    );
                    return;
                }
            };
            let collection_results = vestige_core::core::parse_toml_data(&toml_data);
            match collection_results {
                Ok(_) => info!("[vestige] Collection success"),
                Err(err) => {
                    println!("[vestige] Failed to collect artifacts: {err:?}");
                    return;
                }
            }
        }
    } else {
        println!("[vestige] No TOML file or data provided!");
        return;
    }
    println!("[vestige] Finished vestige collection!");
}
