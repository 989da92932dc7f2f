use kube::api::{DynamicObject, ObjectList};
use kube::core::TypeMeta;

#[cfg(test)]
#[path = "./utils.tests.rs"]
mod utils_tests;

const NOT_FOUND_CODE: u16 = 404;

/// Serializes kubernetes resource to YAML.\
/// **Note** that the whole object is serialized, including its type meta and all kind-specific data.
pub fn serialize_resource(resource: &DynamicObject) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(resource)
}

/// Returns `true` if the kubernetes API reported that the requested object does not exist.
pub fn is_not_found(error: &kube::Error) -> bool {
    matches!(error, kube::Error::Api(response) if response.code == NOT_FOUND_CODE)
}

/// Sets type meta on list items that were received without it.\
/// **Note** that API server sends `apiVersion` and `kind` only for the list itself, e.g. `PodList`.
pub fn set_items_type_meta(list: &mut ObjectList<DynamicObject>) {
    let kind = list.types.kind.strip_suffix("List").unwrap_or(&list.types.kind);
    let types = TypeMeta {
        api_version: list.types.api_version.clone(),
        kind: kind.to_owned(),
    };

    for item in list.items.iter_mut().filter(|i| i.types.is_none()) {
        item.types = Some(types.clone());
    }
}
