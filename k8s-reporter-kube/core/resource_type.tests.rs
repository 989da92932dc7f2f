use rstest::rstest;

use super::*;

#[rstest]
#[case("pods", "", "v1", "pods")]
#[case("pods./v1", "", "v1", "pods")]
#[case("pods./v2", "", "v2", "pods")]
#[case("deployments.apps/v1", "apps", "v1", "deployments")]
#[case("certificates.cert-manager.io/v1", "cert-manager.io", "v1", "certificates")]
fn parse_resource_type_test(#[case] text: &str, #[case] group: &str, #[case] version: &str, #[case] resource: &str) {
    let gvr = text.parse::<GroupVersionResource>().unwrap();
    assert_eq!(group, gvr.group());
    assert_eq!(version, gvr.version());
    assert_eq!(resource, gvr.resource());
}

#[rstest]
#[case("", ResourceTypeError::MissingResource)]
#[case(".apps/v1", ResourceTypeError::MissingResource)]
#[case("deployments.apps", ResourceTypeError::MissingVersion)]
#[case("deployments.apps/", ResourceTypeError::MissingVersion)]
fn parse_invalid_resource_type_test(#[case] text: &str, #[case] expected: ResourceTypeError) {
    assert_eq!(Err(expected), text.parse::<GroupVersionResource>());
}

#[test]
fn api_version_test() {
    assert_eq!("v1", GroupVersionResource::core("pods").api_version());
    assert_eq!("group/version", GroupVersionResource::new("group", "version", "pods").api_version());
}

#[test]
fn display_parses_back_test() {
    let gvr = GroupVersionResource::new("apps", "v1", "deployments");
    assert_eq!("deployments.apps/v1", gvr.to_string());
    assert_eq!(gvr, gvr.to_string().parse().unwrap());

    let gvr = GroupVersionResource::core("pods");
    assert_eq!("pods./v1", gvr.to_string());
    assert_eq!(gvr, gvr.to_string().parse().unwrap());
}

#[test]
fn to_api_resource_test() {
    let ar = GroupVersionResource::new("group", "version", "pods").to_api_resource();
    assert_eq!("group", ar.group);
    assert_eq!("version", ar.version);
    assert_eq!("group/version", ar.api_version);
    assert_eq!("pods", ar.plural);
}

#[test]
fn deserialize_with_default_group_test() {
    let gvr: GroupVersionResource = serde_yaml::from_str("version: v1\nresource: secrets\n").unwrap();
    assert_eq!(GroupVersionResource::core("secrets"), gvr);
}
