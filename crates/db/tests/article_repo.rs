//! Integration tests for article aggregates.
//!
//! Exercises the repository against a real database:
//! - Drafting and reading back an article with no comments
//! - Appending comments with read-after-write
//! - Folding the full join across several articles
//! - Validation and foreign key failures

use assert_matches::assert_matches;
use chrono::{TimeZone, Utc};
use sqlx::PgPool;
use chronicle_core::article::Article;
use chronicle_core::error::CoreError;
use chronicle_core::types::Timestamp;
use chronicle_db::error::StoreError;
use chronicle_db::models::article::{CreateArticle, CreateComment};
use chronicle_db::repositories::ArticleRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn authored() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 5, 4, 10, 15, 0).unwrap()
}

fn new_article(title: &str) -> CreateArticle {
    CreateArticle {
        title: title.to_string(),
        authored: authored(),
    }
}

async fn article_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM articles")
        .fetch_one(pool)
        .await
        .unwrap()
}

fn comment_texts(article: &Article) -> Vec<&str> {
    article.comments.iter().map(|c| c.text.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Drafts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_draft_then_find_all(pool: PgPool) {
    let draft = ArticleRepo::create_draft(&pool, &new_article("Beat the Queue"))
        .await
        .unwrap();
    assert!(draft.id > 0);
    assert!(draft.comments.is_empty());

    let all = ArticleRepo::find_all(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, draft.id);
    assert_eq!(all[0].title, "Beat the Queue");
    assert_eq!(all[0].authored, authored());
    assert!(all[0].comments.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_draft_rejects_blank_title(pool: PgPool) {
    let result = ArticleRepo::create_draft(&pool, &new_article("  ")).await;
    assert_matches!(result, Err(StoreError::Core(CoreError::Validation(_))));
    assert_eq!(article_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_id_missing_returns_none(pool: PgPool) {
    let found = ArticleRepo::find_by_id(&pool, 424_242).await.unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_comment_appends_last(pool: PgPool) {
    let mut article = ArticleRepo::create_draft(&pool, &new_article("Waiter! There's a bug"))
        .await
        .unwrap();

    for text in ["first", "second"] {
        article = ArticleRepo::add_comment(&pool, &article, text).await.unwrap();
    }
    assert_eq!(comment_texts(&article), vec!["first", "second"]);
    let before: Vec<i64> = article.comments.iter().map(|c| c.id).collect();

    let updated = ArticleRepo::add_comment(&pool, &article, "third").await.unwrap();
    assert_eq!(updated.id, article.id);
    assert_eq!(updated.comments.len(), 3);
    assert_eq!(
        updated.comments[..2].iter().map(|c| c.id).collect::<Vec<_>>(),
        before
    );
    assert_eq!(updated.comments[2].text, "third");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_insert_comment_for_missing_article_fails(pool: PgPool) {
    let input = CreateComment {
        article_id: 999_999,
        text: "orphan".to_string(),
    };
    let result = ArticleRepo::insert_comment(&pool, &input).await;
    assert_matches!(result, Err(StoreError::Database(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_comment_rejects_blank_text(pool: PgPool) {
    let article = ArticleRepo::create_draft(&pool, &new_article("Quiet"))
        .await
        .unwrap();
    let result = ArticleRepo::add_comment(&pool, &article, "").await;
    assert_matches!(result, Err(StoreError::Core(CoreError::Validation(_))));

    let reread = ArticleRepo::find_by_id(&pool, article.id).await.unwrap().unwrap();
    assert!(reread.comments.is_empty());
}

// ---------------------------------------------------------------------------
// Full fold
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_all_folds_mixed_articles(pool: PgPool) {
    let plan: [(&str, &[&str]); 3] = [
        ("A", &[]),
        ("B", &["b1", "b2", "b3"]),
        ("C", &["c1"]),
    ];

    for (title, comments) in plan {
        let mut article = ArticleRepo::create_draft(&pool, &new_article(title))
            .await
            .unwrap();
        for text in comments {
            article = ArticleRepo::add_comment(&pool, &article, text).await.unwrap();
        }
    }

    let all = ArticleRepo::find_all(&pool).await.unwrap();
    assert_eq!(all.len(), 3);

    let summary: Vec<(&str, Vec<&str>)> = all
        .iter()
        .map(|a| (a.title.as_str(), comment_texts(a)))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("A", vec![]),
            ("B", vec!["b1", "b2", "b3"]),
            ("C", vec!["c1"]),
        ]
    );
}
