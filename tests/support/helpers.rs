// tests/support/helpers.rs
use blogful::domain::article::NewArticle;
use blogful::infrastructure::database;
use sqlx::PgPool;

/// Opens a pool against `TEST_DB_URL` with the schema applied and the table
/// emptied. Returns `None` unless `RUN_DB_INTEGRATION=1`.
pub async fn db_or_skip() -> Option<PgPool> {
    if std::env::var("RUN_DB_INTEGRATION").unwrap_or_default() != "1" {
        eprintln!("skipping integration test: set RUN_DB_INTEGRATION=1 and TEST_DB_URL to run");
        return None;
    }

    let database_url =
        std::env::var("TEST_DB_URL").expect("TEST_DB_URL must be set for integration tests");
    let pool = database::init_pool(&database_url, 5)
        .await
        .expect("init pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    truncate(&pool).await;
    Some(pool)
}

/// Empties the table and resets the identity so seeded ids start at 1.
pub async fn truncate(pool: &PgPool) {
    sqlx::query("TRUNCATE blogful_articles RESTART IDENTITY")
        .execute(pool)
        .await
        .expect("truncate blogful_articles");
}

/// Seeds rows with plain SQL so repository tests do not depend on
/// `insert` being correct.
pub async fn seed(pool: &PgPool, articles: &[NewArticle]) {
    for article in articles {
        sqlx::query(
            "INSERT INTO blogful_articles (title, content, date_published) VALUES ($1, $2, $3)",
        )
        .bind(&article.title)
        .bind(&article.content)
        .bind(article.date_published)
        .execute(pool)
        .await
        .expect("seed article");
    }
}
