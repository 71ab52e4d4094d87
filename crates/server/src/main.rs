use anyhow::Context;
use db::DBService;
use server::{AppState, app};
use services::services::archive_sweep::ArchiveSweepService;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    utils::logging::init("info,sqlx=warn");

    let database_path =
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| "kanban.db".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3731".to_string())
        .parse()
        .context("PORT must be a number")?;
    let archive_after_days: i64 = std::env::var("ARCHIVE_AFTER_DAYS")
        .unwrap_or_else(|_| "30".to_string())
        .parse()
        .context("ARCHIVE_AFTER_DAYS must be a number")?;

    let db = DBService::new(&format!("sqlite://{database_path}"))
        .await
        .context("failed to open database")?;

    ArchiveSweepService::spawn(db.clone(), archive_after_days).await;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .context("failed to bind listener")?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app(AppState::new(db)))
        .await
        .context("server error")?;

    Ok(())
}
