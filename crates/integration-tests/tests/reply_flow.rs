use domains::errors::{CommentError, DomainError, ReplyError, ThreadError};
use integration_tests::{forum, payload, OWNER, STRANGER};
use serde_json::json;

#[tokio::test]
async fn missing_thread_is_reported_before_missing_comment() {
    let forum = forum();
    let err = forum
        .services
        .add_reply
        .execute(
            &payload(json!({ "content": "balasan" })),
            OWNER,
            "thread-404",
            "comment-404",
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Thread(ThreadError::NotFound { .. })));
}

#[tokio::test]
async fn reply_to_missing_comment_is_not_found() {
    let forum = forum();
    let thread = forum.thread("Tanpa komentar").await;
    let err = forum
        .services
        .add_reply
        .execute(
            &payload(json!({ "content": "balasan" })),
            OWNER,
            &thread.id,
            "comment-404",
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Comment(CommentError::NotFound { .. })));
}

#[tokio::test]
async fn replies_nest_under_their_comment() {
    let forum = forum();
    let thread = forum.thread("Bersarang").await;
    let first = forum.comment(&thread.id, OWNER, "satu").await;
    let second = forum.comment(&thread.id, OWNER, "dua").await;
    let reply = forum.reply(&thread.id, &second.id, STRANGER, "untuk dua").await;
    assert!(reply.id.starts_with("reply-"));
    assert_eq!(reply.owner, STRANGER);

    let detail = forum.services.get_detail_thread.execute(&thread.id).await.unwrap();
    assert_eq!(detail.comments[0].id, first.id);
    assert_eq!(detail.comments[0].replies.as_ref().map(Vec::len), Some(0));

    let replies = detail.comments[1].replies.as_ref().unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].username, "johndoe");
    assert_eq!(replies[0].content, "untuk dua");
}

#[tokio::test]
async fn non_owner_cannot_delete_a_reply() {
    let forum = forum();
    let thread = forum.thread("Balasan orang").await;
    let comment = forum.comment(&thread.id, OWNER, "komentar").await;
    let reply = forum.reply(&thread.id, &comment.id, OWNER, "balasanku").await;

    let err = forum
        .services
        .delete_reply
        .execute(&payload(json!({
            "thread_id": thread.id,
            "comment_id": comment.id,
            "reply_id": reply.id,
            "owner": STRANGER,
        })))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Reply(ReplyError::NotOwner { .. })));
}

#[tokio::test]
async fn owner_deletes_reply_and_content_survives_in_storage() {
    let forum = forum();
    let thread = forum.thread("Hapus balasan").await;
    let comment = forum.comment(&thread.id, OWNER, "komentar").await;
    let reply = forum.reply(&thread.id, &comment.id, OWNER, "balasan asli").await;

    forum
        .services
        .delete_reply
        .execute(&payload(json!({
            "thread_id": thread.id,
            "comment_id": comment.id,
            "reply_id": reply.id,
            "owner": OWNER,
        })))
        .await
        .unwrap();

    let stored = forum.store.stored_reply(&reply.id).unwrap();
    assert!(stored.is_delete);
    assert_eq!(stored.content, "balasan asli");

    let detail = forum.services.get_detail_thread.execute(&thread.id).await.unwrap();
    let shown = &detail.comments[0].replies.as_ref().unwrap()[0];
    assert_eq!(shown.content, "**balasan telah dihapus**");
}

#[tokio::test]
async fn delete_reply_requires_every_route_id() {
    let forum = forum();
    let err = forum
        .services
        .delete_reply
        .execute(&payload(json!({ "reply_id": "reply-123", "owner": OWNER })))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Reply(ReplyError::NotContainNeededProperty { .. })
    ));
}
