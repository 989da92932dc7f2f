use k8s_reporter_kube::utils::{serialize_resource, set_items_type_meta};
use k8s_reporter_kube::{GroupVersionResource, KubernetesClient, Namespace, ResourceClient};
use kube::api::{GetParams, ListParams};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{ReporterBuilder, ReporterConfig, ReporterError, ReporterOption};

#[cfg(test)]
#[path = "./reporter.tests.rs"]
mod reporter_tests;

/// Read access to kubernetes resources rendered as YAML documents.\
/// **Note** that `cancellation` is accepted for future use, no implementation reacts to it yet.
#[allow(async_fn_in_trait)]
pub trait Reader {
    /// Lists all resources in the `namespace` (empty for all namespaces) filtered by `params`.
    async fn list(
        &self,
        cancellation: &CancellationToken,
        namespace: &str,
        params: &ListParams,
    ) -> Result<Vec<String>, ReporterError>;

    /// Gets one resource by its `name` and `namespace`.
    async fn get(
        &self,
        cancellation: &CancellationToken,
        name: &str,
        namespace: &str,
        params: &GetParams,
    ) -> Result<String, ReporterError>;
}

/// Fetches kubernetes resources of one configured type and returns them as YAML.
#[derive(Clone)]
pub struct YamlReporter {
    resource_type: GroupVersionResource,
    resource: ResourceClient,
}

impl YamlReporter {
    /// Creates new [`YamlReporter`] instance from the provided `options`.
    pub fn new(options: impl IntoIterator<Item = ReporterOption>) -> Result<Self, ReporterError> {
        ReporterBuilder::default().with_options(options).build()
    }

    /// Returns new [`ReporterBuilder`] instance.
    pub fn builder() -> ReporterBuilder {
        ReporterBuilder::default()
    }

    /// Creates new [`YamlReporter`] instance connected to the kube context from `config`.
    pub async fn from_config(config: &ReporterConfig) -> Result<Self, ReporterError> {
        let client = KubernetesClient::new(config.context.as_deref(), config.fallback_to_default).await?;
        debug!("using kube context '{}' for {}", client.context(), config.resource);

        Self::builder()
            .with_client(client.get_client())
            .with_resource_type(config.resource.clone())
            .build()
    }

    pub(crate) fn from_parts(resource_type: GroupVersionResource, resource: ResourceClient) -> Self {
        Self { resource_type, resource }
    }

    /// Returns resource type this reporter operates on.
    pub fn resource_type(&self) -> &GroupVersionResource {
        &self.resource_type
    }
}

impl Reader for YamlReporter {
    async fn list(
        &self,
        _cancellation: &CancellationToken,
        namespace: &str,
        params: &ListParams,
    ) -> Result<Vec<String>, ReporterError> {
        let namespace = Namespace::from(namespace);
        let mut list = self.resource.get_api(&namespace).list(params).await?;
        set_items_type_meta(&mut list);
        debug!("listed {} {} in {}", list.items.len(), self.resource_type, namespace);

        list.items
            .iter()
            .map(|item| serialize_resource(item).map_err(ReporterError::from))
            .collect()
    }

    async fn get(
        &self,
        _cancellation: &CancellationToken,
        name: &str,
        namespace: &str,
        params: &GetParams,
    ) -> Result<String, ReporterError> {
        let namespace = Namespace::from(namespace);
        debug!("getting {} '{}' in {}", self.resource_type, name, namespace);

        let resource = self
            .resource
            .get_api(&namespace)
            .get_with(name, params)
            .await
            .map_err(ReporterError::from_get)?;

        Ok(serialize_resource(&resource)?)
    }
}
