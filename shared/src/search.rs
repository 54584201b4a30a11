//! Free-text search over the catalog, with relevance ordering.

use serde::Deserialize;

use crate::query::resolve_category_id;
use crate::{Article, Category};

/// Result cap applied when the caller does not pass one.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Maximum number of search suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Vocabulary backing the search-suggestion endpoint.
const SUGGESTION_TERMS: &[&str] = &[
    "Artificial Intelligence",
    "Machine Learning",
    "Neural Networks",
    "Deep Learning",
    "Quantum Computing",
    "Quantum Entanglement",
    "Quantum Algorithms",
    "CRISPR",
    "Gene Editing",
    "Biotechnology",
    "Blockchain",
    "Cryptocurrency",
    "Web3",
    "Space Technology",
    "Mars Mission",
    "Cybersecurity",
    "Data Privacy",
];

/// Optional search filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchFilter {
    /// Category slug; unknown slugs skip the filter, same as the list path.
    pub category: Option<String>,
    pub limit: Option<usize>,
}

/// Case-insensitive substring search across title, excerpt, content, tags,
/// author name, and category name.
///
/// An empty or whitespace-only query short-circuits to an empty result set;
/// it is not treated as a match-everything filter. Ordering is a stable
/// three-key sort: title matches first, then the trending flag, then newest
/// first.
pub fn search_articles(
    articles: &[Article],
    categories: &[Category],
    query: &str,
    filter: &SearchFilter,
) -> Vec<Article> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let category_id = filter
        .category
        .as_deref()
        .and_then(|slug| resolve_category_id(categories, slug));

    let mut results: Vec<Article> = articles
        .iter()
        .filter(|article| matches_query(article, &needle))
        .filter(|article| match category_id {
            Some(id) => article.category.id == id,
            None => true,
        })
        .cloned()
        .collect();

    results.sort_by(|a, b| {
        let a_title = a.title.to_lowercase().contains(&needle);
        let b_title = b.title.to_lowercase().contains(&needle);
        b_title
            .cmp(&a_title)
            .then(b.trending.cmp(&a.trending))
            .then(b.published_at.cmp(&a.published_at))
    });

    results.truncate(filter.limit.unwrap_or(DEFAULT_SEARCH_LIMIT));
    results
}

/// Up to [`MAX_SUGGESTIONS`] vocabulary terms containing the query.
pub fn suggestions(query: &str) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    SUGGESTION_TERMS
        .iter()
        .filter(|term| term.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .map(|term| term.to_string())
        .collect()
}

fn matches_query(article: &Article, needle: &str) -> bool {
    article.title.to_lowercase().contains(needle)
        || article.excerpt.to_lowercase().contains(needle)
        || article.content.to_lowercase().contains(needle)
        || article
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
        || article.author.name.to_lowercase().contains(needle)
        || article.category.name.to_lowercase().contains(needle)
}
