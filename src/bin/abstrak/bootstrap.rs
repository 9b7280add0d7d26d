use chrono::prelude::*;
use std::io::prelude::*;
use std::path::PathBuf;
use std::{env, fs::File};

use abstrak::constants::config::{DEFAULT_CONF, DEFAULT_CONF_FILE};
use abstrak::debug;
pub use abstrak::{
    config::{parse as config_parse, MainConfig},
    error::*,
};

use crate::directories::PROJECT_DIRS;

#[derive(Debug)]
pub struct BootStrap {
    config: MainConfig,
}

impl BootStrap {
    pub fn new() -> Result<Self> {
        Ok(BootStrap {
            config: BootStrap::init()?,
        })
    }

    /// Locates and parses the main configuration file. Without a configuration
    /// directory the built-in defaults are used.
    ///
    /// # Returns
    /// A `Result` containing the main configuration.
    pub fn init() -> Result<MainConfig> {
        match BootStrap::config_file()? {
            Some(conf_file) => parse_main_config(&conf_file),
            None => {
                debug!("No configuration directory available, using defaults");
                Ok(MainConfig::default())
            }
        }
    }

    /// Retrieves the configuration file path using the following order :
    ///
    /// - The file path specified by the environment variable ABSTRAK_CONFIG_FILE
    /// - The default file inside the directory from PROJECT_DIRS
    ///
    /// # Returns
    /// The path to the configuration file, if any
    ///
    /// # Errors
    /// Returns an error if the file path cannot be interpolated
    pub fn config_file() -> Result<Option<PathBuf>> {
        if let Some(file) = env::var_os("ABSTRAK_CONFIG_FILE") {
            let file = file.to_string_lossy().to_string();
            let expanded = shellexpand::env(&file).map_err(|e| Error::InterpolationError {
                cause: e.to_string(),
            })?;
            return Ok(Some(PathBuf::from(expanded.to_string())));
        }
        Ok(PROJECT_DIRS
            .as_ref()
            .map(|dirs| dirs.config_dir().join(DEFAULT_CONF_FILE)))
    }

    pub fn get_config(&self) -> &MainConfig {
        &self.config
    }
}

/// Creates the default main configuration file
/// # Arguments
/// * `config_file` - The path to the configuration file
///
/// # Returns
/// A `Result` containing the configuration data as a `String`
///
/// # Errors
/// * `ConfigError` - If the configuration file cannot be created
/// * `IoError` - If an I/O error occurs while creating the configuration file
fn create_default_config(config_file: &PathBuf) -> Result<String> {
    let parent_dir = config_file
        .parent()
        .ok_or_else(|| Error::ConfigError(config_file.to_string_lossy().into_owned()))?;
    std::fs::create_dir_all(parent_dir)?;
    let current_date: DateTime<Local> = Local::now();
    let config_data = DEFAULT_CONF.replacen("${date}", &current_date.to_string(), 1);

    File::create(config_file)?.write_all(config_data.as_bytes())?;
    debug!("Created default configuration in {}", config_file.display());
    Ok(config_data)
}

/// Processes the main configuration file retrieving the associated `MainConfig` structure
///
/// If the file does not exist, a default configuration file is created.
///
/// # Errors
///
/// This function returns an error if the configuration file cannot be read or parsed.
pub fn parse_main_config(conf_file: &PathBuf) -> Result<MainConfig> {
    let file_name = conf_file.to_string_lossy().to_string();
    let toml_data = match config_parse(conf_file) {
        Ok(data) => data,
        Err(Error::Io(e)) if e.kind() == ::std::io::ErrorKind::NotFound => {
            create_default_config(conf_file)?
        }
        Err(Error::Io(e)) => {
            return Err(Error::ConfigReadError {
                file: file_name,
                cause: e.to_string(),
            });
        }
        Err(e) => return Err(e),
    };

    debug!("Loaded configuration from {}", file_name);
    MainConfig::from_toml(&toml_data, &file_name)
}
