//! Article join row and create DTOs.

use chronicle_core::article::FlatRow;
use chronicle_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// One row of `articles LEFT JOIN comments`.
///
/// The comment columns are `NULL` for an article without comments.
#[derive(Debug, Clone, FromRow)]
pub struct ArticleCommentRow {
    pub article_id: DbId,
    pub article_title: String,
    pub article_authored: Timestamp,
    pub comment_id: Option<DbId>,
    pub comment_text: Option<String>,
}

impl From<ArticleCommentRow> for FlatRow {
    fn from(row: ArticleCommentRow) -> Self {
        FlatRow {
            article_id: row.article_id,
            article_title: row.article_title,
            article_authored: row.article_authored,
            comment_id: row.comment_id,
            comment_text: row.comment_text,
        }
    }
}

/// DTO for drafting a new article.
///
/// Postgres keeps microsecond precision, so `authored` reads back truncated
/// to the microsecond.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArticle {
    pub title: String,
    pub authored: Timestamp,
}

/// DTO for appending a comment to an existing article.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub article_id: DbId,
    pub text: String,
}
