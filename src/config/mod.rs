//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! the widgets to mount, the theme, the tick rate, toggle tracing and hotkey
//! overrides.

mod error;
pub mod hotkeys;

pub use error::ConfigError;

use crate::error::AppError;
use crate::ui::Theme;
use crate::widget::WidgetProps;
use hotkeys::HotkeyMap;
use log::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/widget-dash";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub tick_rate_ms: u64,
    pub trace_toggles: bool,
    pub widgets: Vec<WidgetProps>,
    pub hotkeys: HotkeyMap,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default)]
    pub trace_toggles: bool,
    #[serde(default = "default_widgets")]
    pub widgets: Vec<WidgetProps>,
    #[serde(default)]
    pub hotkeys: HotkeyMap,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_tick_rate_ms() -> u64 {
    80
}

fn default_widgets() -> Vec<WidgetProps> {
    vec![
        WidgetProps::new("Sales").with_data(json!({})),
        WidgetProps::new("Traffic").with_loading(true),
        WidgetProps::new("Signups"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            tick_rate_ms: default_tick_rate_ms(),
            trace_toggles: false,
            widgets: default_widgets(),
            hotkeys: hotkeys::default_hotkeys(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. If no file exists yet, write one holding the
    /// defaults to the default directory or the custom one.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            self.apply_yaml(&contents)?;
            debug!("Loaded configuration from {}", file_path.display());
        } else {
            info!(
                "No configuration found, writing defaults to {}",
                file_path.display()
            );
            self.save()?;
        }

        Ok(())
    }

    /// Replace the current values with those parsed from a YAML document.
    /// Missing fields take their defaults, hotkeys are merged over the
    /// default bindings.
    ///
    pub fn apply_yaml(&mut self, contents: &str) -> Result<(), ConfigError> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.theme_name = data.theme_name;
        self.tick_rate_ms = data.tick_rate_ms;
        self.trace_toggles = data.trace_toggles;
        self.widgets = data.widgets;
        self.hotkeys = hotkeys::merge_hotkeys(&data.hotkeys);
        Ok(())
    }

    /// Serialize the configuration to a YAML document.
    ///
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            tick_rate_ms: self.tick_rate_ms,
            trace_toggles: self.trace_toggles,
            widgets: self.widgets.clone(),
            hotkeys: self.hotkeys.clone(),
        };
        serde_yaml::to_string(&data).map_err(|e| ConfigError::SerializationFailed(e.to_string()))
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let content = self.to_yaml()?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Return the path of the loaded configuration file, if any.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Return the palette named by `theme_name`.
    ///
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Theme::by_name(&self.theme_name).ok_or_else(|| ConfigError::UnknownTheme(self.theme_name.clone()))
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
