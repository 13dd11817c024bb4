use super::os::windows::{
    artifacts::{
        edge_favorites, explorer_mru, jumplist_apps, office_mru, recentdocs, shortcuts, urlfiles,
        usbstor, userassist,
    },
    error::WinArtifactError,
};
use crate::structs::toml::VestigeToml;
use log::{error, info, warn};

/// Collect the Windows artifacts listed in the collection TOML
pub(crate) fn windows_collection(collector: &VestigeToml) -> Result<(), WinArtifactError> {
    for artifacts in &collector.artifacts {
        match artifacts.artifact_name.as_str() {
            "userassist" => {
                let results = userassist(&collector.output);
                match results {
                    Ok(_) => info!("Collected UserAssist"),
                    Err(err) => {
                        error!("[core] Failed to parse UserAssist, error: {err:?}");
                        continue;
                    }
                }
            }
            "recentdocs" => {
                let results = recentdocs(&collector.output);
                match results {
                    Ok(_) => info!("Collected RecentDocs"),
                    Err(err) => {
                        error!("[core] Failed to parse RecentDocs, error: {err:?}");
                        continue;
                    }
                }
            }
            "office-mru" => {
                let results = office_mru(&collector.output);
                match results {
                    Ok(_) => info!("Collected Office MRU"),
                    Err(err) => {
                        error!("[core] Failed to parse Office MRU, error: {err:?}");
                        continue;
                    }
                }
            }
            "explorer-mru" => {
                let results = explorer_mru(&collector.output);
                match results {
                    Ok(_) => info!("Collected Explorer MRU"),
                    Err(err) => {
                        error!("[core] Failed to parse Explorer MRU, error: {err:?}");
                        continue;
                    }
                }
            }
            "usbstor" => {
                let results = usbstor(&collector.output);
                match results {
                    Ok(_) => info!("Collected USBSTOR devices"),
                    Err(err) => {
                        error!("[core] Failed to parse USBSTOR, error: {err:?}");
                        continue;
                    }
                }
            }
            "shortcuts" => {
                let options = artifacts.shortcuts.clone().unwrap_or_default();
                let results = shortcuts(&options, &collector.output);
                match results {
                    Ok(_) => info!("Collected shortcut files"),
                    Err(err) => {
                        error!("[core] Failed to parse shortcut files, error: {err:?}");
                        continue;
                    }
                }
            }
            "urlfiles" => {
                let options = artifacts.urlfiles.clone().unwrap_or_default();
                let results = urlfiles(&options, &collector.output);
                match results {
                    Ok(_) => info!("Collected url files"),
                    Err(err) => {
                        error!("[core] Failed to parse url files, error: {err:?}");
                        continue;
                    }
                }
            }
            "jumplist-apps" => {
                let options = artifacts.jumplists.clone().unwrap_or_default();
                let results = jumplist_apps(&options, &collector.output);
                match results {
                    Ok(_) => info!("Collected JumpList applications"),
                    Err(err) => {
                        error!("[core] Failed to check JumpList files, error: {err:?}");
                        continue;
                    }
                }
            }
            "edge-favorites" => {
                let options = artifacts.edge.clone().unwrap_or_default();
                let results = edge_favorites(&options, &collector.output);
                match results {
                    Ok(_) => info!("Collected Edge favorites"),
                    Err(err) => {
                        error!("[core] Failed to parse Edge favorites, error: {err:?}");
                        continue;
                    }
                }
            }
            unsupported => {
                warn!("[core] Unsupported artifact: {unsupported}");
                continue;
            }
        }
    }
    Ok(())
}
