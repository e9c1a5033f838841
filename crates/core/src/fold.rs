//! Folds flat join rows back into article aggregates.
//!
//! The join produces one row per comment with the article columns repeated,
//! and a single comment-less row for articles without comments. Folding
//! groups rows by article id (first occurrence wins) and appends each row's
//! comment to its article in row order.
//!
//! Repeated `(article_id, comment_id)` pairs are not collapsed: the join is
//! trusted to be row-distinct, so a duplicated row yields a duplicated
//! comment.
//!
//! Every row is assumed to satisfy the join invariant: rows sharing an
//! article id carry identical article columns. Later copies of the article
//! columns are ignored, not compared.

use indexmap::IndexMap;

use crate::article::{Article, FlatRow};
use crate::types::DbId;

/// Fold rows into an id-keyed map whose iteration order is the order in
/// which each article id was first seen.
pub fn fold_rows<I>(rows: I) -> IndexMap<DbId, Article>
where
    I: IntoIterator<Item = FlatRow>,
{
    let mut articles: IndexMap<DbId, Article> = IndexMap::new();

    for row in rows {
        let article = articles.entry(row.article_id).or_insert_with(|| {
            Article::draft(row.article_id, row.article_title.clone(), row.article_authored)
        });

        if let Some((comment_id, text)) = row.comment() {
            article.push_comment(comment_id, text);
        }
    }

    articles
}

/// Fold rows into a list of articles in first-occurrence order.
pub fn fold_articles<I>(rows: I) -> Vec<Article>
where
    I: IntoIterator<Item = FlatRow>,
{
    fold_rows(rows).into_values().collect()
}

/// Fold rows expected to describe a single article (a by-id fetch).
///
/// Returns `None` when there are no rows at all.
pub fn fold_one<I>(rows: I) -> Option<Article>
where
    I: IntoIterator<Item = FlatRow>,
{
    fold_rows(rows).into_values().next()
}
