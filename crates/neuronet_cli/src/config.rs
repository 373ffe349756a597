use neuronet_core::NeuronConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// trace, debug, info, warn or error
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub log: LogConfig,
    /// When present, replaces the neuron flags given on the command line.
    #[serde(default)]
    pub neuron: Option<NeuronConfig>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Default settings with the `[neuron]` section commented out, so a
    /// generated file leaves the neuron flags in effect until it is edited.
    pub fn template() -> Result<String> {
        let mut text = Settings::default().to_toml()?;
        let neuron = toml::to_string_pretty(&NeuronConfig::default())?;
        text.push_str("\n# Uncomment to replace the neuron flags.\n# [neuron]\n");
        for line in neuron.lines() {
            text.push_str("# ");
            text.push_str(line);
            text.push('\n');
        }
        Ok(text)
    }

    pub fn save_template(path: &Path) -> Result<()> {
        fs::write(path, Self::template()?)
            .with_context(|| format!("writing settings to {}", path.display()))
    }
}
