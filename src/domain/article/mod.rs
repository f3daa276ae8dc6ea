pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticlePatch, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::ArticleId;
