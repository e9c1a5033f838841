//! Repository for the `articles` and `comments` tables.
//!
//! Articles are always read back as full aggregates: the join below is
//! fetched and folded into [`Article`] values with their comments attached.

use chronicle_core::article::{Article, FlatRow};
use chronicle_core::error::CoreError;
use chronicle_core::fold::{fold_articles, fold_one};
use chronicle_core::types::DbId;
use chronicle_core::validation::{validate_comment_text, validate_title};
use sqlx::PgPool;

use crate::error::StoreResult;
use crate::models::article::{ArticleCommentRow, CreateArticle, CreateComment};

/// Left join producing one row per comment, or one comment-less row per
/// article without comments.
const SELECT_JOINED: &str = "SELECT a.id AS article_id, a.title AS article_title, \
            a.authored AS article_authored, c.id AS comment_id, c.comment AS comment_text \
     FROM articles a \
     LEFT JOIN comments c ON c.article_id = a.id";

/// Reads and writes article aggregates.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article with no comments and return it as stored.
    ///
    /// An insert that yields no generated id is a broken store, reported as
    /// [`CoreError::PreconditionViolation`].
    pub async fn create_draft(pool: &PgPool, input: &CreateArticle) -> StoreResult<Article> {
        validate_title(&input.title)?;

        let id: Option<DbId> = sqlx::query_scalar(
            "INSERT INTO articles (title, authored) VALUES ($1, $2) RETURNING id",
        )
        .bind(&input.title)
        .bind(input.authored)
        .fetch_optional(pool)
        .await?;

        let Some(id) = id else {
            return Err(CoreError::PreconditionViolation(
                "insert into articles returned no generated id".into(),
            )
            .into());
        };
        tracing::info!(article_id = id, title = %input.title, "Drafted article");

        Self::require(pool, id).await
    }

    /// Append a comment to `article` and return the re-read aggregate.
    pub async fn add_comment(
        pool: &PgPool,
        article: &Article,
        text: &str,
    ) -> StoreResult<Article> {
        let input = CreateComment {
            article_id: article.id,
            text: text.to_string(),
        };
        Self::insert_comment(pool, &input).await
    }

    /// Insert a comment row and return the owning article as it now stands.
    ///
    /// A missing parent article fails with a foreign key violation.
    pub async fn insert_comment(pool: &PgPool, input: &CreateComment) -> StoreResult<Article> {
        validate_comment_text(&input.text)?;

        let result = sqlx::query("INSERT INTO comments (article_id, comment) VALUES ($1, $2)")
            .bind(input.article_id)
            .bind(&input.text)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::PreconditionViolation(format!(
                "insert into comments for article {} affected no rows",
                input.article_id
            ))
            .into());
        }
        tracing::debug!(article_id = input.article_id, "Added comment");

        Self::require(pool, input.article_id).await
    }

    /// Every article with its comments, ordered by article id and comments
    /// by comment id.
    pub async fn find_all(pool: &PgPool) -> StoreResult<Vec<Article>> {
        let query = format!("{SELECT_JOINED} ORDER BY a.id, c.id");
        let rows = sqlx::query_as::<_, ArticleCommentRow>(&query)
            .fetch_all(pool)
            .await?;

        let row_count = rows.len();
        let articles = fold_articles(rows.into_iter().map(FlatRow::from));
        tracing::debug!(row_count, article_count = articles.len(), "Folded article rows");
        Ok(articles)
    }

    /// Find one article with its comments.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> StoreResult<Option<Article>> {
        let query = format!("{SELECT_JOINED} WHERE a.id = $1 ORDER BY c.id");
        let rows = sqlx::query_as::<_, ArticleCommentRow>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;

        Ok(fold_one(rows.into_iter().map(FlatRow::from)))
    }

    /// Re-read an article that was just written. Absence here means the
    /// store lost a confirmed write.
    async fn require(pool: &PgPool, id: DbId) -> StoreResult<Article> {
        match Self::find_by_id(pool, id).await? {
            Some(article) => Ok(article),
            None => {
                tracing::error!(article_id = id, "Article missing right after write");
                Err(CoreError::NotFound {
                    entity: "article",
                    id,
                }
                .into())
            }
        }
    }
}
