use kube::api::{ApiResource, DynamicObject};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Config};
use tracing::warn;

use crate::{GroupVersionResource, Namespace};

/// Possible errors from building kubernetes client.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Failed to process kube configuration.
    #[error("failed to process kube configuration")]
    KubeconfigError(#[from] kube::config::KubeconfigError),

    /// Failed to build kubernetes client.
    #[error("failed to build kubernetes client")]
    KubeError(#[from] kube::Error),
}

/// Wrapper for the kubernetes [`Client`] that remembers kube context it was created for.
pub struct KubernetesClient {
    client: Client,
    context: String,
}

impl KubernetesClient {
    /// Creates new [`KubernetesClient`] instance.\
    /// **Note** that if `fallback_to_default` is set, the default context is used when the provided one fails.
    pub async fn new(kube_context: Option<&str>, fallback_to_default: bool) -> Result<Self, ClientError> {
        let (client, context) = get_client_fallback(kube_context, fallback_to_default).await?;
        Ok(Self { client, context })
    }

    /// Returns cloned kubernetes client that can be consumed.
    pub fn get_client(&self) -> Client {
        self.client.clone()
    }

    /// Returns kube context name for the currently held kubernetes client.
    pub fn context(&self) -> &str {
        &self.context
    }
}

/// Kubernetes client narrowed down to one resource type.\
/// It creates [`Api`] for any namespace on demand.
#[derive(Clone)]
pub struct ResourceClient {
    client: Client,
    ar: ApiResource,
}

impl ResourceClient {
    /// Creates new [`ResourceClient`] instance bound to the `resource_type`.
    pub fn new(client: Client, resource_type: &GroupVersionResource) -> Self {
        Self {
            client,
            ar: resource_type.to_api_resource(),
        }
    }

    /// Returns new [`Api`] object for the specified `namespace`.
    pub fn get_api(&self, namespace: &Namespace) -> Api<DynamicObject> {
        get_dynamic_api(&self.ar, self.client.clone(), namespace)
    }
}

/// Gets dynamic api client for given `resource` and `namespace`.\
/// **Note** that for all namespaces the resulting API is not scoped to any namespace.
pub fn get_dynamic_api(ar: &ApiResource, client: Client, namespace: &Namespace) -> Api<DynamicObject> {
    match namespace.as_option() {
        Some(namespace) => Api::namespaced_with(client, namespace, ar),
        None => Api::all_with(client, ar),
    }
}

/// Creates kubernetes client and returns it together with used context.\
/// If provided context is not valid it can try the default one.
async fn get_client_fallback(kube_context: Option<&str>, try_default: bool) -> Result<(Client, String), ClientError> {
    match get_client(kube_context).await {
        Ok(result) => Ok(result),
        Err(error) if try_default && kube_context.is_some() => {
            warn!("{}, fallback to the default context", error);
            get_client(None).await
        },
        Err(error) => Err(error),
    }
}

/// Creates kubernetes client and returns it together with used context.
async fn get_client(kube_context: Option<&str>) -> Result<(Client, String), ClientError> {
    match kube_context {
        Some(ctx) => Ok((get_client_for_context(ctx).await?, ctx.to_owned())),
        None => Ok((
            Client::try_default().await?,
            Kubeconfig::read().ok().and_then(|c| c.current_context).unwrap_or_default(),
        )),
    }
}

/// Creates kubernetes client for the provided context.
async fn get_client_for_context(kube_context: &str) -> Result<Client, ClientError> {
    let kube_config_options = KubeConfigOptions {
        context: Some(String::from(kube_context)),
        user: None,
        cluster: None,
    };
    let config = Config::from_kubeconfig(&kube_config_options).await?;

    Ok(Client::try_from(config)?)
}
