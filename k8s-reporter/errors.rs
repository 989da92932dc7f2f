use k8s_reporter_kube::{ClientError, utils::is_not_found};

/// Possible errors from building [`crate::YamlReporter`] or reading resources with it.
#[derive(thiserror::Error, Debug)]
pub enum ReporterError {
    /// Kubernetes client was not provided.
    #[error("no kubernetes client set, use with_dynamic_client or ReporterBuilder::with_client during initialization")]
    MissingClient,

    /// Resource type was not provided.
    #[error("no resource type set, use with_resource_type or ReporterBuilder::with_resource_type during initialization")]
    MissingResourceType,

    /// Unable to create kubernetes client.
    #[error("unable to create kubernetes client")]
    ClientError(#[from] ClientError),

    /// Requested resource does not exist.
    #[error("requested resource was not found")]
    NotFound(#[source] kube::Error),

    /// Unable to read resources from the kubernetes API.
    #[error("unable to read resources from the kubernetes API")]
    KubeError(#[from] kube::Error),

    /// Unable to serialize resource to YAML.
    #[error("unable to serialize resource to YAML")]
    SerializationError(#[from] serde_yaml::Error),
}

impl ReporterError {
    /// Wraps error returned by the kubernetes API for a single named resource.\
    /// **Note** that a missing resource is reported as [`ReporterError::NotFound`].
    pub(crate) fn from_get(error: kube::Error) -> Self {
        if is_not_found(&error) {
            Self::NotFound(error)
        } else {
            Self::KubeError(error)
        }
    }

    /// Returns `true` if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns `true` if the error was caused by missing configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingClient | Self::MissingResourceType)
    }
}
