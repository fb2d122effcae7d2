//! Read-side assembly: stored rows to the nested view returned to clients,
//! with soft-deleted content masked.

use domains::masking::SoftDeletable;
use domains::models::{
    CommentView, ReplyView, StoredComment, StoredReply, ThreadDetail, ThreadHeader,
};

pub fn reply_view(reply: &StoredReply) -> ReplyView {
    ReplyView {
        id: reply.id.clone(),
        username: reply.username.clone(),
        date: reply.date,
        content: reply.visible_content().to_owned(),
    }
}

pub fn comment_view(comment: &StoredComment, replies: Option<&[StoredReply]>) -> CommentView {
    CommentView {
        id: comment.id.clone(),
        username: comment.username.clone(),
        date: comment.date,
        content: comment.visible_content().to_owned(),
        replies: replies.map(|rs| rs.iter().map(reply_view).collect()),
    }
}

pub fn thread_detail(thread: ThreadHeader, comments: Vec<CommentView>) -> ThreadDetail {
    ThreadDetail {
        id: thread.id,
        title: thread.title,
        body: thread.body,
        date: thread.date,
        username: thread.username,
        comments,
    }
}
