use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chain::{Chain, ChainKind};
use crate::constants::chain::DEFAULT_CHAIN;
use crate::error::*;
use crate::transforms::ChainOptions;

#[derive(Deserialize, Debug, Default)]
pub struct MainConfig {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub chains: BTreeMap<String, ChainConfig>,
}

#[derive(Deserialize, Debug, Serialize, PartialEq)]
#[serde(default)]
pub struct Defaults {
    pub chain: String,
    pub collapse_whitespace: bool,
    pub punctuation: Option<String>,
    pub special_characters: Option<String>,
}

/// A custom chain declared in the configuration file
#[derive(Deserialize, Debug, Serialize, PartialEq)]
pub struct ChainConfig {
    pub stages: Vec<String>,
    #[serde(default)]
    pub punctuation: Option<String>,
    #[serde(default)]
    pub special_characters: Option<String>,
    #[serde(default)]
    pub collapse_whitespace: Option<bool>,
}

impl Default for Defaults {
    fn default() -> Defaults {
        Defaults {
            chain: DEFAULT_CHAIN.to_string(),
            collapse_whitespace: true,
            punctuation: None,
            special_characters: None,
        }
    }
}

impl ChainConfig {
    fn options(&self) -> ChainOptions {
        ChainOptions {
            punctuation: self.punctuation.clone(),
            special_characters: self.special_characters.clone(),
            collapse_whitespace: self.collapse_whitespace,
        }
    }
}

impl MainConfig {
    /// Parses the configuration from its TOML representation
    ///
    /// # Arguments
    /// * `toml_data` - The TOML content
    /// * `file` - The file name, used in error messages
    ///
    /// # Errors
    /// Returns `Error::SerdeTomlError` if the content cannot be parsed.
    ///
    /// # Examples
    /// ```
    /// use abstrak::config::MainConfig;
    ///
    /// let config = MainConfig::from_toml("[defaults]\nchain = \"abstract\"\n", "abstrak.toml").unwrap();
    /// assert_eq!(config.defaults.chain, "abstract");
    /// ```
    pub fn from_toml(toml_data: &str, file: &str) -> Result<Self> {
        toml::from_str(toml_data).map_err(|e: toml::de::Error| Error::SerdeTomlError {
            file: file.to_string(),
            cause: e.to_string(),
        })
    }

    /// Options from the `[defaults]` section
    pub fn options(&self) -> ChainOptions {
        ChainOptions {
            punctuation: self.defaults.punctuation.clone(),
            special_characters: self.defaults.special_characters.clone(),
            collapse_whitespace: Some(self.defaults.collapse_whitespace),
        }
    }

    /// Names of every selectable chain, built-in ones first
    pub fn chain_names(&self) -> Vec<String> {
        let mut names: Vec<String> = ChainKind::ALL.iter().map(|k| k.to_string()).collect();
        let custom: Vec<String> = self
            .chains
            .keys()
            .filter(|name| !names.contains(*name))
            .cloned()
            .collect();
        names.extend(custom);
        names
    }

    /// Stage names of the given chain, as declared
    pub fn chain_stages(&self, name: &str) -> Result<Vec<String>> {
        if let Some(custom) = self.chains.get(name) {
            return Ok(custom.stages.clone());
        }
        let kind = name.parse::<ChainKind>()?;
        Ok(kind.stages().iter().map(|s| s.to_string()).collect())
    }

    /// Builds the chain with the given name, or the default one.
    ///
    /// Chains declared in the configuration take precedence over built-in
    /// chains with the same name. Options are layered: defaults section, then
    /// the chain's own section, then `overrides`.
    ///
    /// # Errors
    /// * `UnknownChain` - If the name matches no chain
    /// * `UnknownStage` - If a declared chain lists an unknown stage
    /// * `InvalidCharacterSet` - If a custom character set is malformed
    pub fn build_chain(&self, name: Option<&str>, overrides: &ChainOptions) -> Result<Chain> {
        let name = name.unwrap_or(&self.defaults.chain);
        let base = self.options();

        match self.chains.get(name) {
            Some(custom) => {
                let options = base.overlay(&custom.options()).overlay(overrides);
                Chain::from_names(name, &custom.stages, &options)
            }
            None => {
                let kind = name.parse::<ChainKind>()?;
                Chain::from_kind(kind, &base.overlay(overrides))
            }
        }
    }
}

pub fn parse(file_path: &Path) -> Result<String> {
    let mut config_content = String::new();
    File::open(file_path)?.read_to_string(&mut config_content)?;
    Ok(config_content)
}
