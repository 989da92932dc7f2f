use k8s_reporter_kube::GroupVersionResource;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

#[cfg(test)]
#[path = "./config.tests.rs"]
mod config_tests;

/// Possible errors from reading configuration file.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Cannot read configuration file.
    #[error("cannot read configuration file")]
    IoError(#[from] std::io::Error),

    /// Cannot deserialize configuration.
    #[error("cannot deserialize configuration")]
    SerializationError(#[from] serde_yaml::Error),
}

/// Reporter configuration that can be stored in a YAML file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReporterConfig {
    /// Kube context to connect to, the current one is used if not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Use the current kube context if the configured one cannot be used.
    #[serde(default)]
    pub fallback_to_default: bool,

    /// Resource type to report.
    pub resource: GroupVersionResource,

    /// Namespace to read from, all namespaces if not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl ReporterConfig {
    /// Creates new [`ReporterConfig`] for the specified `resource` and the current kube context.
    pub fn new(resource: GroupVersionResource) -> Self {
        Self {
            context: None,
            fallback_to_default: false,
            resource,
            namespace: None,
        }
    }

    /// Loads the configuration from a YAML file.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut file = File::open(path).await?;

        let mut config_str = String::new();
        file.read_to_string(&mut config_str).await?;

        Self::from_yaml(&config_str)
    }

    /// Parses the configuration from a YAML string.
    pub fn from_yaml(config_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str::<ReporterConfig>(config_str)?)
    }
}
