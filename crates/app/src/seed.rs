//! Demo content inserted on request at startup.

use chrono::Utc;
use chronicle_db::error::StoreResult;
use chronicle_db::models::article::CreateArticle;
use chronicle_db::repositories::ArticleRepo;
use chronicle_db::DbPool;

/// Titles and comment bodies of the demo articles.
pub const DEMO_ARTICLES: [(&str, &[&str]); 3] = [
    ("Beat the Queue with this simple trick: Apache Kafka", &[]),
    (
        "Waiter! There's a bug in my JSoup!",
        &[
            "this made me laugh and cry",
            "you  too will believe a man can try",
            "I love beautiful soup in Python and I love JSoup in Java",
        ],
    ),
    (
        "You Can Get to Production with These Ten Easy Tricks",
        &["liar! There are only two tricks!"],
    ),
];

/// Draft each demo article and append its comments in order.
///
/// Returns the number of articles created.
pub async fn seed_demo(pool: &DbPool) -> StoreResult<usize> {
    let authored = Utc::now();
    for (title, comments) in DEMO_ARTICLES {
        let input = CreateArticle {
            title: title.to_string(),
            authored,
        };
        let mut article = ArticleRepo::create_draft(pool, &input).await?;
        for text in comments {
            article = ArticleRepo::add_comment(pool, &article, text).await?;
        }
        tracing::info!(
            article_id = article.id,
            comment_count = article.comments.len(),
            "Seeded demo article"
        );
    }
    Ok(DEMO_ARTICLES.len())
}
