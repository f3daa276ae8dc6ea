use anyhow::Result;
use blogful::config::AppConfig;
use blogful::domain::article::ArticleReadRepository;
use blogful::infrastructure::{database, repositories::PostgresArticleRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url(), config.max_connections()).await?;
    let repo = PostgresArticleRepository::new(pool.clone());

    let listed = repo.list_all().await;
    pool.close().await;

    let articles = listed?;
    tracing::info!(count = articles.len(), "fetched articles");
    println!("{}", serde_json::to_string_pretty(&articles)?);
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
