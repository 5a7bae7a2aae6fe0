use crate::error::AppError;
use crate::models::ThemeMode;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::error;

const CONFIG_FILENAME: &str = "bethel_connect_config.json";

static CONFIG_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[derive(Serialize, Deserialize, Default, PartialEq, Clone)]
pub struct AppConfig {
    pub theme_mode: Option<ThemeMode>,
}

impl AppConfig {
    pub fn get_theme(&self) -> ThemeMode {
        self.theme_mode.unwrap_or_default()
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "bethelagdubai", "BethelConnect") {
        let config_dir = proj_dirs.config_dir();
        if !config_dir.exists() {
            let _ = fs::create_dir_all(config_dir);
        }
        return config_dir.join(CONFIG_FILENAME);
    }

    std::env::current_dir()
        .unwrap_or_default()
        .join(CONFIG_FILENAME)
}

fn load_config_inner() -> AppConfig {
    let path = get_config_path();
    match fs::read_to_string(&path) {
        Ok(contents) => match serde_json::from_str::<AppConfig>(&contents) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Failed to parse config at {:?}: {}", path, e);
                AppConfig::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
        Err(e) => {
            error!("Failed to read config at {:?}: {}", path, e);
            AppConfig::default()
        }
    }
}

pub fn load_config() -> AppConfig {
    let _guard = CONFIG_LOCK.lock().unwrap();
    load_config_inner()
}

fn save_config_inner(config: &AppConfig) -> Result<(), AppError> {
    let path = get_config_path();
    let json = serde_json::to_string_pretty(config)?;
    fs::write(&path, json)?;
    Ok(())
}

pub fn save_config(config: &AppConfig) -> Result<(), AppError> {
    let _guard = CONFIG_LOCK.lock().unwrap();
    save_config_inner(config)
}

pub fn save_theme(theme_mode: ThemeMode) -> Result<(), AppError> {
    let _guard = CONFIG_LOCK.lock().unwrap();
    let mut config = load_config_inner();
    config.theme_mode = Some(theme_mode);
    save_config_inner(&config)
}
