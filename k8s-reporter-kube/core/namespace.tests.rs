use super::*;

#[test]
fn empty_namespace_is_all_test() {
    let namespace: Namespace = "".into();
    assert!(namespace.is_all());
    assert_eq!(None, namespace.as_option());
    assert_eq!("", namespace.as_str());
    assert_eq!("/ALL/", namespace.to_string());
    assert_eq!(Namespace::default(), namespace);
}

#[test]
fn named_namespace_test() {
    let namespace: Namespace = "ns-foo".into();
    assert!(!namespace.is_all());
    assert_eq!(Some("ns-foo"), namespace.as_option());
    assert_eq!("'ns-foo'", namespace.to_string());
}

#[test]
fn all_is_not_special_test() {
    let namespace: Namespace = "all".into();
    assert!(!namespace.is_all());
    assert_eq!("all", namespace.as_str());
}
