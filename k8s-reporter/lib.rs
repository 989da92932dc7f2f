pub use self::builder::{ReporterBuilder, ReporterOption, with_dynamic_client, with_resource_type};
pub use self::config::{ConfigError, ReporterConfig};
pub use self::errors::ReporterError;
pub use self::reporter::{Reader, YamlReporter};

pub use k8s_reporter_kube::{GroupVersionResource, Namespace};

mod builder;
mod config;
mod errors;
mod reporter;

#[cfg(test)]
mod fake_api;
