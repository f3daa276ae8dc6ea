//! Data-access layer for blog articles stored in `PostgreSQL`.
//!
//! The caller opens a [`sqlx::PgPool`] (see [`infrastructure::database::init_pool`])
//! and hands it to [`infrastructure::repositories::PostgresArticleRepository`],
//! which implements the read and write traits in [`domain::article`].

pub mod config;
pub mod domain;
pub mod infrastructure;
