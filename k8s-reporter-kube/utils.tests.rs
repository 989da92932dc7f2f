use k8s_openapi::serde_json::{self, json};

use super::*;

fn object(api_version: &str, kind: &str, namespace: &str, name: &str) -> DynamicObject {
    serde_json::from_value(json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": {
            "namespace": namespace,
            "name": name,
        },
        "spec": {
            "replicas": 3,
        },
    }))
    .unwrap()
}

#[test]
fn serialize_resource_test() {
    let yaml = serialize_resource(&object("group/version", "Pod", "ns-foo", "name-foo")).unwrap();

    assert!(yaml.contains("apiVersion: group/version"));
    assert!(yaml.contains("kind: Pod"));
    assert!(yaml.contains("name: name-foo"));
    assert!(yaml.contains("namespace: ns-foo"));
    assert!(yaml.contains("replicas: 3"));
}

#[test]
fn set_items_type_meta_test() {
    let mut list: ObjectList<DynamicObject> = serde_json::from_value(json!({
        "apiVersion": "v1",
        "kind": "PodList",
        "metadata": {},
        "items": [
            { "metadata": { "name": "web", "namespace": "ns-foo" }, "spec": {} },
            { "apiVersion": "v2", "kind": "Other", "metadata": { "name": "db", "namespace": "ns-foo" } },
        ],
    }))
    .unwrap();

    set_items_type_meta(&mut list);

    let types = list.items[0].types.as_ref().unwrap();
    assert_eq!("v1", types.api_version);
    assert_eq!("Pod", types.kind);

    let types = list.items[1].types.as_ref().unwrap();
    assert_eq!("v2", types.api_version);
    assert_eq!("Other", types.kind);

    let yaml = serialize_resource(&list.items[0]).unwrap();
    assert!(yaml.contains("apiVersion: v1"));
    assert!(yaml.contains("kind: Pod"));
}
