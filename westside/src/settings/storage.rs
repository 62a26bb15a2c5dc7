use std::fs;
use std::path::{Path, PathBuf};

use super::errors::SettingsError;
use super::model::SettingsData;

/// Status describing how settings were loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum SettingsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Load settings at startup, seeding a default file on first run.
///
/// Never fails: any problem is logged and defaults are used.
pub(crate) fn load_initial_settings() -> SettingsData {
    let path = settings_path();
    match load_settings_from_path(&path) {
        Ok((settings, SettingsLoadStatus::Loaded)) => {
            log::info!("settings loaded from {}", path.display());
            settings
        },
        Ok((settings, SettingsLoadStatus::Missing)) => {
            if let Err(err) = save_settings_to_path(&path, &settings) {
                log::warn!(
                    "failed to write default settings to {}: {err}",
                    path.display()
                );
            }
            settings
        },
        Ok((settings, SettingsLoadStatus::Invalid(message))) => {
            log::warn!(
                "settings file {} is invalid, using defaults: {message}",
                path.display()
            );
            settings
        },
        Err(err) => {
            log::warn!("settings read failed, using defaults: {err}");
            SettingsData::default()
        },
    }
}

fn load_settings_from_path(
    path: &Path,
) -> Result<(SettingsData, SettingsLoadStatus), SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok((SettingsData::default(), SettingsLoadStatus::Missing));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<SettingsData>(&data) {
        Ok(settings) => Ok((settings, SettingsLoadStatus::Loaded)),
        Err(err) => Ok((
            SettingsData::default(),
            SettingsLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn save_settings_to_path(
    path: &Path,
    settings: &SettingsData,
) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let payload = serde_json::to_string_pretty(settings)?;
    write_atomic(path, payload.as_bytes())?;

    Ok(())
}

fn settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("westside")
            .join("settings.json");
    }

    std::env::temp_dir().join("westside").join("settings.json")
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
