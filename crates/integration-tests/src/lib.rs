//! Shared fixtures for the integration tests: a forum wired on the in-memory
//! store with two known users.

use std::sync::Arc;

use configs::{telemetry, LogSettings};
use domains::entities::Payload;
use domains::models::{AddedComment, AddedReply, AddedThread, User};
use serde_json::{json, Value};
use services::{ForumServices, Repositories};
use storage_adapters::InMemoryForumStore;

pub const OWNER: &str = "user-123";
pub const STRANGER: &str = "user-456";

pub struct Forum {
    pub store: Arc<InMemoryForumStore>,
    pub services: ForumServices,
}

pub fn payload(v: Value) -> Payload {
    v.as_object().cloned().unwrap_or_default()
}

pub fn forum() -> Forum {
    telemetry::init(&LogSettings {
        level: "warn".into(),
        json: false,
    });

    let store = Arc::new(InMemoryForumStore::new());
    store.insert_user(User {
        id: OWNER.into(),
        username: "dicoding".into(),
    });
    store.insert_user(User {
        id: STRANGER.into(),
        username: "johndoe".into(),
    });

    let services = ForumServices::new(Repositories::from_store(store.clone()));
    Forum { store, services }
}

impl Forum {
    pub async fn thread(&self, title: &str) -> AddedThread {
        self.services
            .add_thread
            .execute(&payload(json!({ "title": title, "body": "isi thread" })), OWNER)
            .await
            .expect("thread fixture")
    }

    pub async fn comment(&self, thread_id: &str, owner: &str, content: &str) -> AddedComment {
        self.services
            .add_comment
            .execute(&payload(json!({ "content": content })), owner, thread_id)
            .await
            .expect("comment fixture")
    }

    pub async fn reply(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
        content: &str,
    ) -> AddedReply {
        self.services
            .add_reply
            .execute(&payload(json!({ "content": content })), owner, thread_id, comment_id)
            .await
            .expect("reply fixture")
    }
}
