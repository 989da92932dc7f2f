use k8s_reporter_kube::{GroupVersionResource, ResourceClient};
use kube::Client;

use crate::{ReporterError, YamlReporter};

#[cfg(test)]
#[path = "./builder.tests.rs"]
mod builder_tests;

/// Single configuration value that knows how to apply itself to the [`ReporterBuilder`].
pub enum ReporterOption {
    DynamicClient(Client),
    ResourceType(GroupVersionResource),
}

impl ReporterOption {
    /// Applies this option to the `builder`.
    pub fn apply(self, builder: &mut ReporterBuilder) {
        match self {
            ReporterOption::DynamicClient(client) => builder.client = Some(client),
            ReporterOption::ResourceType(resource_type) => builder.resource_type = Some(resource_type),
        }
    }
}

/// Returns [`ReporterOption`] that sets kubernetes client.
pub fn with_dynamic_client(client: Client) -> ReporterOption {
    ReporterOption::DynamicClient(client)
}

/// Returns [`ReporterOption`] that sets resource type the reporter operates on.
pub fn with_resource_type(resource_type: GroupVersionResource) -> ReporterOption {
    ReporterOption::ResourceType(resource_type)
}

/// Accumulates configuration for the [`YamlReporter`] and validates it on build.
#[derive(Default)]
pub struct ReporterBuilder {
    client: Option<Client>,
    resource_type: Option<GroupVersionResource>,
}

impl ReporterBuilder {
    /// Sets kubernetes client.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets resource type.
    pub fn with_resource_type(mut self, resource_type: GroupVersionResource) -> Self {
        self.resource_type = Some(resource_type);
        self
    }

    /// Applies all provided `options` in order, the last one wins for the same field.
    pub fn with_options(mut self, options: impl IntoIterator<Item = ReporterOption>) -> Self {
        for option in options {
            option.apply(&mut self);
        }

        self
    }

    /// Validates configuration and builds [`YamlReporter`].\
    /// **Note** that missing client is reported before missing resource type.
    pub fn build(self) -> Result<YamlReporter, ReporterError> {
        let Some(client) = self.client else {
            return Err(ReporterError::MissingClient);
        };
        let Some(resource_type) = self.resource_type else {
            return Err(ReporterError::MissingResourceType);
        };

        let resource = ResourceClient::new(client, &resource_type);
        Ok(YamlReporter::from_parts(resource_type, resource))
    }
}
