//! Article aggregate and the flat join row it is rebuilt from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// Comment ids at or below this value mean "no comment in this row".
pub const ABSENT_COMMENT_ID: DbId = 0;

/// A single comment, owned by exactly one [`Article`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: DbId,
    pub text: String,
}

/// An article together with its comments, in the order they were read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub authored: Timestamp,
    pub comments: Vec<Comment>,
}

impl Article {
    /// A freshly drafted article with no comments yet.
    pub fn draft(id: DbId, title: impl Into<String>, authored: Timestamp) -> Self {
        Self {
            id,
            title: title.into(),
            authored,
            comments: Vec::new(),
        }
    }

    pub fn push_comment(&mut self, id: DbId, text: impl Into<String>) {
        self.comments.push(Comment {
            id,
            text: text.into(),
        });
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} \"{}\" (authored {})",
            self.id,
            self.title,
            self.authored.to_rfc3339()
        )?;
        if self.comments.is_empty() {
            return write!(f, "\n    (no comments)");
        }
        for comment in &self.comments {
            write!(f, "\n    - #{}: {}", comment.id, comment.text)?;
        }
        Ok(())
    }
}

/// One row of the `articles LEFT JOIN comments` result.
///
/// Article columns repeat on every row belonging to the same article. The
/// comment columns are both absent when the article has no comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow {
    pub article_id: DbId,
    pub article_title: String,
    pub article_authored: Timestamp,
    pub comment_id: Option<DbId>,
    pub comment_text: Option<String>,
}

impl FlatRow {
    /// Row for an article that has no comments.
    pub fn without_comment(id: DbId, title: impl Into<String>, authored: Timestamp) -> Self {
        Self {
            article_id: id,
            article_title: title.into(),
            article_authored: authored,
            comment_id: None,
            comment_text: None,
        }
    }

    /// Row carrying one comment of the article.
    pub fn with_comment(
        id: DbId,
        title: impl Into<String>,
        authored: Timestamp,
        comment_id: DbId,
        comment_text: impl Into<String>,
    ) -> Self {
        Self {
            article_id: id,
            article_title: title.into(),
            article_authored: authored,
            comment_id: Some(comment_id),
            comment_text: Some(comment_text.into()),
        }
    }

    /// The comment carried by this row, if any.
    ///
    /// A missing or non-positive id means the row has no comment. A positive
    /// id with missing text cannot come out of the join; it is read as an
    /// empty body rather than checked.
    pub fn comment(&self) -> Option<(DbId, &str)> {
        match self.comment_id {
            Some(id) if id > ABSENT_COMMENT_ID => {
                Some((id, self.comment_text.as_deref().unwrap_or_default()))
            }
            _ => None,
        }
    }
}
