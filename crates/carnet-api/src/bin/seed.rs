//! carnet-seed: one-off seed routine demonstrating entity relationships.
//!
//! Creates one user, one category, one note owned by both, one tag, and
//! connects the tag to the note, then exits. Connecting the tag twice
//! would be a no-op — the association is idempotent at the store level.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carnet_core::{CategoryInput, NoteInput, TagInput, UserInput};
use carnet_core::{CategoryRepository, NoteRepository, TagRepository, UserRepository};
use carnet_db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "carnet_seed=info,carnet_db=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/carnet".to_string());

    let db = Database::connect(&database_url).await?;
    db.migrate().await?;

    let user = db
        .users
        .create(UserInput {
            name: "Jean Dupont".to_string(),
            email: "jean.dupont@example.com".to_string(),
            password: "securepassword123".to_string(),
        })
        .await?;
    info!(user_id = user.id, "Created user");

    let category = db
        .categories
        .create(CategoryInput {
            name: "Travail".to_string(),
        })
        .await?;
    info!(category_id = category.id, "Created category");

    let note = db
        .notes
        .create(NoteInput {
            title: "Réunion importante".to_string(),
            content: "Il faut préparer le rapport pour demain.".to_string(),
            user_id: user.id,
            category_id: category.id,
        })
        .await?;
    info!(note_id = note.id, "Created note");

    let tag = db
        .tags
        .create(TagInput {
            name: "Urgent".to_string(),
        })
        .await?;
    info!(tag_id = tag.id, "Created tag");

    db.notes.connect_tag(note.id, tag.id).await?;
    info!(note_id = note.id, tag_id = tag.id, "Connected tag to note");

    info!("Seed data created successfully");
    db.close().await;

    Ok(())
}
