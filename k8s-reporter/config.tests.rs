use super::*;

#[test]
fn from_yaml_full_test() {
    let config = ReporterConfig::from_yaml(
        "context: kind-dev
fallback_to_default: true
namespace: ns-foo
resource:
  group: apps
  version: v1
  resource: deployments
",
    )
    .unwrap();

    assert_eq!(Some("kind-dev"), config.context.as_deref());
    assert!(config.fallback_to_default);
    assert_eq!(Some("ns-foo"), config.namespace.as_deref());
    assert_eq!(GroupVersionResource::new("apps", "v1", "deployments"), config.resource);
}

#[test]
fn from_yaml_defaults_test() {
    let config = ReporterConfig::from_yaml("resource: { version: v1, resource: pods }").unwrap();
    assert_eq!(ReporterConfig::new(GroupVersionResource::core("pods")), config);
}

#[test]
fn from_yaml_missing_resource_test() {
    let result = ReporterConfig::from_yaml("context: kind-dev");
    assert!(matches!(result, Err(ConfigError::SerializationError(_))));
}

#[tokio::test]
async fn load_missing_file_test() {
    let result = ReporterConfig::load(Path::new("/nonexistent/kreport.yaml")).await;
    assert!(matches!(result, Err(ConfigError::IoError(_))));
}
