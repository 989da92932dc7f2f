use http::StatusCode;
use k8s_openapi::serde_json::Value;
use rstest::rstest;

use crate::fake_api::{FakeApi, labeled, unstructured};
use crate::{with_dynamic_client, with_resource_type};

use super::*;

fn mixed_objects() -> Vec<Value> {
    vec![
        unstructured("group/version", "Pod", "ns-foo", "name-foo"),
        unstructured("group/version", "Pod", "ns-foo", "name-foo2"),
        unstructured("group2/version", "Deploy", "ns-foo", "name2-foo"),
        unstructured("group/version", "TheKind", "ns-foo", "name-bar"),
        unstructured("group/version", "Whatever", "ns-foo", "name-baz"),
        unstructured("group2/version", "TheKind", "ns-foo", "name2-baz"),
    ]
}

fn pods() -> GroupVersionResource {
    GroupVersionResource::new("group", "version", "pods")
}

fn reporter(api: FakeApi, resource_type: GroupVersionResource) -> YamlReporter {
    YamlReporter::new([with_dynamic_client(api.into_client()), with_resource_type(resource_type)]).unwrap()
}

#[rstest]
#[case(mixed_objects(), "ns-foo", 2)]
#[case(mixed_objects(), "ns-foo-other", 0)]
#[case(vec![
    unstructured("group/version", "Pod", "ns-foo", "name-foo"),
    unstructured("group/version", "Pod", "ns-bar", "name-bar"),
], "", 2)]
#[tokio::test]
async fn list_test(#[case] objects: Vec<Value>, #[case] namespace: &str, #[case] expected: usize) {
    let reporter = reporter(FakeApi::new(objects), pods());

    let list = reporter
        .list(&CancellationToken::new(), namespace, &ListParams::default())
        .await
        .unwrap();

    assert_eq!(expected, list.len());
}

#[tokio::test]
async fn list_keeps_store_order_test() {
    let reporter = reporter(FakeApi::new(mixed_objects()), pods());

    let list = reporter
        .list(&CancellationToken::new(), "ns-foo", &ListParams::default())
        .await
        .unwrap();

    assert!(list[0].contains("name: name-foo\n"));
    assert!(list[1].contains("name: name-foo2\n"));
}

#[tokio::test]
async fn list_sets_items_type_meta_test() {
    let reporter = reporter(FakeApi::new(mixed_objects()), pods());

    let list = reporter
        .list(&CancellationToken::new(), "ns-foo", &ListParams::default())
        .await
        .unwrap();

    assert_eq!(2, list.len());
    for document in list {
        assert!(document.contains("apiVersion: group/version\n"));
        assert!(document.contains("kind: Pod\n"));
    }
}

#[tokio::test]
async fn list_unknown_resource_is_not_not_found_test() {
    let reporter = reporter(FakeApi::new(mixed_objects()), GroupVersionResource::new("group", "version", "widgets"));

    let result = reporter
        .list(&CancellationToken::new(), "ns-foo", &ListParams::default())
        .await;

    assert!(matches!(result, Err(ReporterError::KubeError(_))));
    assert!(result.is_err_and(|e| !e.is_not_found()));
}

#[tokio::test]
async fn list_passes_label_selector_test() {
    let objects = vec![
        labeled("v1", "Pod", "ns-foo", "web", &[("app", "web")]),
        labeled("v1", "Pod", "ns-foo", "db", &[("app", "db")]),
    ];
    let reporter = reporter(FakeApi::new(objects), GroupVersionResource::core("pods"));

    let list = reporter
        .list(&CancellationToken::new(), "ns-foo", &ListParams::default().labels("app=web"))
        .await
        .unwrap();

    assert_eq!(1, list.len());
    assert!(list[0].contains("name: web"));
}

#[tokio::test]
async fn list_fails_on_api_error_test() {
    let reporter = reporter(FakeApi::failing(StatusCode::FORBIDDEN), pods());

    let result = reporter
        .list(&CancellationToken::new(), "ns-foo", &ListParams::default())
        .await;

    assert!(matches!(result, Err(ReporterError::KubeError(_))));
}

#[tokio::test]
async fn get_test() {
    let reporter = reporter(FakeApi::new(mixed_objects()), pods());

    let resource = reporter
        .get(&CancellationToken::new(), "name-foo", "ns-foo", &GetParams::default())
        .await
        .unwrap();

    assert!(resource.contains("name-foo"));
    assert!(resource.contains("ns-foo"));
    assert!(resource.contains(pods().version()));
}

#[tokio::test]
async fn get_not_found_test() {
    let reporter = reporter(FakeApi::new(Vec::new()), GroupVersionResource::core("pods"));

    let result = reporter
        .get(&CancellationToken::new(), "name-foo", "ns-foo", &GetParams::default())
        .await;

    assert!(result.is_err_and(|e| e.is_not_found()));
}

#[tokio::test]
async fn get_other_kind_not_found_test() {
    let reporter = reporter(FakeApi::new(mixed_objects()), pods());

    let result = reporter
        .get(&CancellationToken::new(), "name-bar", "ns-foo", &GetParams::default())
        .await;

    assert!(matches!(result, Err(ReporterError::NotFound(_))));
}

#[tokio::test]
async fn get_fails_on_api_error_test() {
    let reporter = reporter(FakeApi::failing(StatusCode::FORBIDDEN), pods());

    let result = reporter
        .get(&CancellationToken::new(), "name-foo", "ns-foo", &GetParams::default())
        .await;

    assert!(matches!(result, Err(ReporterError::KubeError(_))));
}
