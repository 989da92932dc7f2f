use crate::fake_api::FakeApi;

use super::*;

fn resource_type() -> GroupVersionResource {
    GroupVersionResource::new("group", "version", "pods")
}

#[tokio::test]
async fn build_with_client_and_resource_type_test() {
    let client = FakeApi::new(Vec::new()).into_client();
    let reporter = YamlReporter::new([with_dynamic_client(client), with_resource_type(resource_type())]).unwrap();

    assert_eq!(&resource_type(), reporter.resource_type());
}

#[tokio::test]
async fn build_without_resource_type_test() {
    let client = FakeApi::new(Vec::new()).into_client();
    let result = YamlReporter::new([with_dynamic_client(client)]);

    assert!(matches!(result, Err(ReporterError::MissingResourceType)));
}

#[test]
fn build_without_client_test() {
    let result = YamlReporter::new([with_resource_type(resource_type())]);
    assert!(matches!(result, Err(ReporterError::MissingClient)));
}

#[test]
fn missing_configuration_messages_test() {
    let message = ReporterError::MissingClient.to_string();
    assert!(message.contains("with_dynamic_client"));
    assert!(message.contains("ReporterBuilder::with_client"));

    let message = ReporterError::MissingResourceType.to_string();
    assert!(message.contains("with_resource_type"));
    assert!(message.contains("ReporterBuilder::with_resource_type"));
}

#[test]
fn build_without_options_test() {
    let result = YamlReporter::new([]);
    assert!(matches!(result, Err(ReporterError::MissingClient)));
    assert!(result.is_err_and(|e| e.is_configuration()));
}

#[tokio::test]
async fn builder_methods_test() {
    let client = FakeApi::new(Vec::new()).into_client();
    let reporter = YamlReporter::builder()
        .with_resource_type(GroupVersionResource::core("secrets"))
        .with_client(client)
        .build()
        .unwrap();

    assert_eq!(&GroupVersionResource::core("secrets"), reporter.resource_type());
}

#[test]
fn with_options_applies_in_order_test() {
    let builder = ReporterBuilder::default().with_options([
        with_resource_type(GroupVersionResource::core("secrets")),
        with_resource_type(resource_type()),
    ]);

    assert_eq!(Some(resource_type()), builder.resource_type);
    assert!(matches!(builder.build(), Err(ReporterError::MissingClient)));
}

#[test]
fn last_option_wins_test() {
    let mut builder = ReporterBuilder::default();
    with_resource_type(GroupVersionResource::core("secrets")).apply(&mut builder);
    with_resource_type(resource_type()).apply(&mut builder);

    assert_eq!(Some(resource_type()), builder.resource_type);
    assert!(builder.client.is_none());
}
