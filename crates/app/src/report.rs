//! Console rendering of article aggregates.

use chronicle_core::article::Article;

/// Render every article, separated by blank lines.
pub fn render(articles: &[Article]) -> String {
    if articles.is_empty() {
        return "No articles.".to_string();
    }
    articles
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}
