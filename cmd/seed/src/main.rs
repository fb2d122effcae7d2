//! # seed
//!
//! Applies the schema and fills an empty database with a demo user, thread,
//! comment and reply, going through the same use cases the API uses.

use std::sync::Arc;

use anyhow::Context;
use configs::{telemetry, Settings};
use domains::entities::Payload;
use domains::translate::{translate, Translated};
use secrecy::ExposeSecret;
use serde_json::{json, Value};
use services::{ForumServices, Repositories};
use storage_adapters::postgres::{
    self, PgCommentRepository, PgReplyRepository, PgThreadRepository, PgUserRepository,
};

const DEMO_USER_ID: &str = "user-seed";
const DEMO_USERNAME: &str = "dicoding";

fn payload(v: Value) -> Payload {
    v.as_object().cloned().unwrap_or_default()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("loading settings")?;
    telemetry::init(&settings.log);

    let pool = postgres::connect(
        settings.database.url.expose_secret(),
        settings.database.max_connections,
    )
    .await
    .context("connecting to postgres")?;

    if settings.database.run_migrations {
        postgres::migrate(&pool).await.context("running migrations")?;
    }

    sqlx::query("INSERT INTO users (id, username) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
        .bind(DEMO_USER_ID)
        .bind(DEMO_USERNAME)
        .execute(&pool)
        .await
        .context("inserting demo user")?;

    let forum = ForumServices::new(Repositories {
        users: Arc::new(PgUserRepository::new(pool.clone())),
        threads: Arc::new(PgThreadRepository::new(pool.clone())),
        comments: Arc::new(PgCommentRepository::new(pool.clone())),
        replies: Arc::new(PgReplyRepository::new(pool)),
    });

    let thread = match forum
        .add_thread
        .execute(
            &payload(json!({ "title": "Selamat datang", "body": "Thread pertama di forum ini." })),
            DEMO_USER_ID,
        )
        .await
    {
        Ok(thread) => thread,
        Err(err) => match translate(err) {
            Translated::Client(client) => {
                tracing::info!(reason = client.message, "demo thread not created, skipping");
                println!("{}", serde_json::to_string_pretty(&client)?);
                return Ok(());
            }
            Translated::Passthrough(err) => return Err(err).context("creating demo thread"),
        },
    };

    let comment = forum
        .add_comment
        .execute(&payload(json!({ "content": "Halo semua!" })), DEMO_USER_ID, &thread.id)
        .await
        .context("creating demo comment")?;

    forum
        .add_reply
        .execute(
            &payload(json!({ "content": "Halo juga!" })),
            DEMO_USER_ID,
            &thread.id,
            &comment.id,
        )
        .await
        .context("creating demo reply")?;

    let detail = forum
        .get_detail_thread
        .execute(&thread.id)
        .await
        .context("reading demo thread back")?;
    tracing::info!(thread_id = %detail.id, comments = detail.comments.len(), "seed complete");
    println!("{}", serde_json::to_string_pretty(&detail)?);

    Ok(())
}
