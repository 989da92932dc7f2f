use kube::api::ApiResource;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[cfg(test)]
#[path = "./resource_type.tests.rs"]
mod resource_type_tests;

pub const CORE_VERSION: &str = "v1";

/// Possible errors from parsing resource type descriptor.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ResourceTypeError {
    /// Resource name is empty.
    #[error("resource name cannot be empty")]
    MissingResource,

    /// Resource version is empty.
    #[error("resource version cannot be empty, use the 'resource.group/version' form")]
    MissingVersion,
}

/// Identifies a class of kubernetes objects by its group, version and plural resource name.\
/// **Note** that the empty group represents the core API group.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupVersionResource {
    #[serde(default)]
    group: String,
    version: String,
    resource: String,
}

impl GroupVersionResource {
    /// Creates new [`GroupVersionResource`] instance.
    pub fn new(group: impl Into<String>, version: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            resource: resource.into(),
        }
    }

    /// Creates new [`GroupVersionResource`] instance for the core API group.
    pub fn core(resource: impl Into<String>) -> Self {
        Self::new(String::new(), CORE_VERSION, resource)
    }

    /// Returns resource's group.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Returns resource's version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns plural resource name.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Returns `true` if the resource belongs to the core API group.
    pub fn is_core(&self) -> bool {
        self.group.is_empty()
    }

    /// Returns resource's api version, e.g. `v1` or `apps/v1`.
    pub fn api_version(&self) -> String {
        if self.is_core() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    /// Returns [`ApiResource`] that can be used to build dynamic kubernetes API.\
    /// **Note** that kind is left empty as it cannot be known from the resource name alone.
    pub fn to_api_resource(&self) -> ApiResource {
        ApiResource {
            group: self.group.clone(),
            version: self.version.clone(),
            api_version: self.api_version(),
            kind: String::new(),
            plural: self.resource.clone(),
        }
    }
}

impl Display for GroupVersionResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_core() {
            write!(f, "{}./{}", self.resource, self.version)
        } else {
            write!(f, "{}.{}/{}", self.resource, self.group, self.version)
        }
    }
}

impl FromStr for GroupVersionResource {
    type Err = ResourceTypeError;

    /// Parses resource type from the `resource.group/version` form.\
    /// **Note** that a bare resource name is treated as a core `v1` resource.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (name_and_group, version) = match value.split_once('/') {
            Some((name_and_group, version)) => (name_and_group, Some(version)),
            None => (value, None),
        };

        let (resource, group) = name_and_group.split_once('.').unwrap_or((name_and_group, ""));
        if resource.is_empty() {
            return Err(ResourceTypeError::MissingResource);
        }

        let version = match version {
            Some("") => return Err(ResourceTypeError::MissingVersion),
            Some(version) => version,
            None if group.is_empty() => CORE_VERSION,
            None => return Err(ResourceTypeError::MissingVersion),
        };

        Ok(Self::new(group, version, resource))
    }
}
