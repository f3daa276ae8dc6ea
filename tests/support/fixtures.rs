// tests/support/fixtures.rs
use blogful::domain::article::NewArticle;
use chrono::{TimeZone, Utc};

/// Seed rows, in insertion order.
pub fn make_articles() -> Vec<NewArticle> {
    vec![
        NewArticle::new(
            "First test post!",
            "Lorem ipsum dolor sit amet, consectetur adipisicing elit. Natus consequuntur deserunt commodi, nobis qui inventore corrupti iusto aliquid debitis unde non.",
        )
        .published_at(Utc.with_ymd_and_hms(2029, 1, 22, 16, 28, 32).unwrap()),
        NewArticle::new(
            "Second test post!",
            "Cum, exercitationem cupiditate dignissimos est perspiciatis, nobis commodi alias saepe atque facilis labore sequi deleniti.",
        )
        .published_at(Utc.with_ymd_and_hms(2100, 5, 22, 16, 28, 32).unwrap()),
        NewArticle::new(
            "Third test post!",
            "Possimus, voluptate? Necessitatibus ullam reprehenderit, iste quibusdam adipisci assumenda veritatis quisquam facere.",
        )
        .published_at(Utc.with_ymd_and_hms(1919, 12, 22, 16, 28, 32).unwrap()),
        NewArticle::new(
            "Fourth test post!",
            "Earum molestiae accusamus veniam consectetur tempora, corporis obcaecati ad nisi asperiores tenetur, autem magnam.",
        )
        .published_at(Utc.with_ymd_and_hms(1919, 12, 22, 16, 28, 32).unwrap()),
    ]
}
