use super::*;

#[test]
fn join_documents_test() {
    assert_eq!(None, join_documents(&[]));

    let documents = vec!["name: a\n".to_owned(), "name: b\n".to_owned()];
    assert_eq!(Some("name: a\n---\nname: b\n".to_owned()), join_documents(&documents));
}
