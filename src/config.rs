use crate::error::{Result, SkyGuideError};
use crate::logic::news::DEFAULT_TRUSTED_SOURCES;
use crate::logic::Thresholds;
use crate::models::{Division, Mode, DIVISIONS};
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub open_meteo: OpenMeteoConfig,
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub news: NewsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationConfig {
    #[serde(default = "default_district")]
    pub district: String,
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_district() -> String {
    "Dhaka".into()
}

fn default_mode() -> String {
    Mode::General.as_str().into()
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            district: default_district(),
            mode: default_mode(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenMeteoConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".into()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_enabled() -> bool {
    true
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            enabled: default_enabled(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewsConfig {
    /// JSON file of articles read by `skyguide news`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed: Option<PathBuf>,
    #[serde(default = "default_trusted_sources")]
    pub trusted_sources: Vec<String>,
}

fn default_trusted_sources() -> Vec<String> {
    DEFAULT_TRUSTED_SOURCES.iter().map(|s| s.to_string()).collect()
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            feed: None,
            trusted_sources: default_trusted_sources(),
        }
    }
}

impl Config {
    /// Load config from an explicit path, the standard locations, or fall
    /// back to built-in defaults when no file exists.
    pub fn load(config_override: Option<&PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(SkyGuideError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p.clone()
            }
            None => {
                let p = Self::find_config_path()?;
                if !p.exists() {
                    tracing::debug!("No config file at {:?}, using defaults", p);
                    return Ok(Self::default());
                }
                p
            }
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| SkyGuideError::Config(format!("Failed to read config: {}", e)))?;

        tracing::debug!("Loaded config from {:?}", config_path);
        Self::parse(&config_str)
    }

    /// Parse YAML after substituting `${VAR}` placeholders
    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;

        serde_yaml::from_str(&content)
            .map_err(|e| SkyGuideError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        Self::default_config_path()
    }

    /// Default path for writing new config files (~/.config/skyguide/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SkyGuideError::Config("Cannot determine config directory".into()))?
            .join("skyguide");
        Ok(config_dir.join("config.yaml"))
    }

    /// Human-readable problems that do not stop the app from running
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !Division::is_known(&self.location.district) {
            warnings.push(format!(
                "District '{}' is not a known division; Dhaka coordinates will be used",
                self.location.district
            ));
        }

        if Mode::from_str(&self.location.mode).is_none() {
            warnings.push(format!(
                "Mode '{}' is not recognized; general guidance will be used",
                self.location.mode
            ));
        }

        if !self.open_meteo.enabled {
            warnings.push("Open-Meteo is disabled; use --snapshot to supply weather".into());
        }

        if self.news.trusted_sources.is_empty() {
            warnings.push("news.trusted_sources is empty; every article will be dropped".into());
        }

        if self.open_meteo.timeout_secs == 0 {
            warnings.push("open_meteo.timeout_secs is 0; requests will time out immediately".into());
        }

        warnings
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up SkyGuide!");
        println!();

        let division_names: Vec<&str> = DIVISIONS.iter().map(|d| d.name).collect();
        let district_index = Select::new()
            .with_prompt("  Home division")
            .items(&division_names)
            .default(0)
            .interact()
            .map_err(|e| SkyGuideError::Config(format!("Input error: {}", e)))?;

        let mode_names: Vec<&str> = Mode::ALL.iter().map(|m| m.as_str()).collect();
        let mode_index = Select::new()
            .with_prompt("  Guidance mode")
            .items(&mode_names)
            .default(0)
            .interact()
            .map_err(|e| SkyGuideError::Config(format!("Input error: {}", e)))?;

        println!();
        println!("Open-Meteo");
        let base_url: String = Input::new()
            .with_prompt("  API base URL")
            .default(default_base_url())
            .interact_text()
            .map_err(|e| SkyGuideError::Config(format!("Input error: {}", e)))?;

        let timeout_secs: u64 = Input::new()
            .with_prompt("  Request timeout (seconds)")
            .default(default_timeout_secs())
            .interact_text()
            .map_err(|e| SkyGuideError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            location: LocationConfig {
                district: division_names[district_index].to_string(),
                mode: mode_names[mode_index].to_string(),
            },
            open_meteo: OpenMeteoConfig {
                base_url,
                timeout_secs,
                enabled: true,
            },
            thresholds: Thresholds::default(),
            news: NewsConfig::default(),
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)?;

        let content = format!(
            "# SkyGuide Configuration\n# Generated by `skyguide init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| SkyGuideError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}
