pub use self::client::{ClientError, KubernetesClient, ResourceClient, get_dynamic_api};
pub use self::core::{CORE_VERSION, GroupVersionResource, Namespace, ResourceTypeError};

pub mod utils;

mod client;
mod core;
