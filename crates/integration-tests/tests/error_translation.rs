use domains::translate::{translate, ErrorKind, Translated};
use integration_tests::{forum, payload, OWNER, STRANGER};
use serde_json::json;

#[tokio::test]
async fn use_case_failures_translate_to_client_errors() {
    let forum = forum();

    let err = forum
        .services
        .add_comment
        .execute(&payload(json!({ "content": "x" })), OWNER, "thread-404")
        .await
        .unwrap_err();
    let client = translate(err).client().cloned().unwrap();
    assert_eq!(client.kind, ErrorKind::NotFound);
    assert_eq!(client.message, "thread tidak tersedia");

    let thread = forum.thread("Terjemahan").await;
    let err = forum
        .services
        .add_comment
        .execute(&payload(json!({})), OWNER, &thread.id)
        .await
        .unwrap_err();
    let client = translate(err).client().cloned().unwrap();
    assert_eq!(client.kind.status_code(), 400);
    assert_eq!(client.message, "harus mengirimkan content");
}

#[tokio::test]
async fn foreign_delete_translates_to_access_denied() {
    let forum = forum();
    let thread = forum.thread("Akses").await;
    let comment = forum.comment(&thread.id, OWNER, "x").await;

    let err = forum
        .services
        .delete_comment
        .execute(&payload(json!({
            "thread_id": thread.id,
            "comment_id": comment.id,
            "owner": STRANGER,
        })))
        .await
        .unwrap_err();

    match translate(err) {
        Translated::Client(client) => {
            assert_eq!(client.kind, ErrorKind::Authorization);
            assert_eq!(client.message, "Akses ditolak");
        }
        Translated::Passthrough(other) => panic!("unexpected passthrough: {other}"),
    }
}
