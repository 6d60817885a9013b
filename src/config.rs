use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

/// A document node carrying a static ZAR-denominated amount.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ValueEntry {
    pub name: String,
    pub zar: f64,
}

/// One currency-tagged document: inline values, table rows and
/// pre-formatted labels.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DocumentConfig {
    pub name: String,
    #[serde(default)]
    pub values: Vec<ValueEntry>,
    #[serde(default)]
    pub table: Vec<ValueEntry>,
    #[serde(default)]
    pub labels: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RateProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub exchange_rate: Option<RateProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            exchange_rate: Some(RateProviderConfig {
                base_url: "https://api.exchangerate-api.com".to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub documents: Vec<DocumentConfig>,
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// Overrides the platform data directory for the preference store.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "fxtoggle", "fxtoggle")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn default_data_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "fxtoggle", "fxtoggle")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// The preference-store directory, honoring the config override.
    pub fn data_path(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Self::default_data_path(),
        }
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
documents:
  - name: "Investor Teaser"
    values:
      - name: "Annual revenue"
        zar: 12500000
      - name: "Seed round"
        zar: 2500000
    labels:
      - "R2.5M ARR target"
  - name: "Financial Models"
    table:
      - name: "Year 1 revenue"
        zar: 4800000
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.documents.len(), 2);
        assert_eq!(config.documents[0].name, "Investor Teaser");
        assert_eq!(config.documents[0].values.len(), 2);
        assert_eq!(config.documents[0].values[0].name, "Annual revenue");
        assert_eq!(config.documents[0].values[0].zar, 12_500_000.0);
        assert_eq!(config.documents[0].labels, vec!["R2.5M ARR target"]);
        assert!(config.documents[0].table.is_empty());
        assert_eq!(config.documents[1].table.len(), 1);

        // Providers default to the public endpoint when omitted
        assert_eq!(
            config.providers.exchange_rate.unwrap().base_url,
            "https://api.exchangerate-api.com"
        );
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_config_with_overrides() {
        let yaml_str = r#"
documents:
  - name: "Test"
    values:
      - name: "Value"
        zar: 1.0
providers:
  exchange_rate:
    base_url: "http://example.com/rates"
data_dir: "/tmp/fxtoggle-test"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).unwrap();
        assert_eq!(
            config.providers.exchange_rate.unwrap().base_url,
            "http://example.com/rates"
        );
        assert_eq!(
            config.data_dir,
            Some(PathBuf::from("/tmp/fxtoggle-test"))
        );
    }
}
