pub use self::namespace::Namespace;
pub use self::resource_type::{CORE_VERSION, GroupVersionResource, ResourceTypeError};

mod namespace;
mod resource_type;
