//! Article list filtering and pagination.

use serde::Deserialize;

use crate::{Article, Category};

/// Page size applied when slicing without an explicit limit.
pub const DEFAULT_PAGE_SIZE: usize = 20;

const FEATURED_FEED_LIMIT: usize = 6;
const TRENDING_FEED_LIMIT: usize = 10;

/// Optional article list filters. All fields combine with AND.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleFilter {
    /// Category slug. Resolved to a category id before matching; an unknown
    /// slug leaves the set unfiltered (see [`filter_articles`]).
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub trending: Option<bool>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Filter `articles`, sort newest-first, and slice `[offset, offset+limit)`.
///
/// An unknown category slug does NOT produce an empty result: the category
/// filter is silently skipped and the full set comes back. This mirrors the
/// long-standing behavior of the product and is asserted by a test below;
/// callers that want strict slug handling should resolve the slug first via
/// [`crate::catalog::Catalog::category_by_slug`].
pub fn filter_articles(
    articles: &[Article],
    categories: &[Category],
    filter: &ArticleFilter,
) -> Vec<Article> {
    let category_id = filter
        .category
        .as_deref()
        .and_then(|slug| resolve_category_id(categories, slug));

    let mut matched: Vec<Article> = articles
        .iter()
        .filter(|article| {
            if let Some(id) = category_id {
                if article.category.id != id {
                    return false;
                }
            }
            if let Some(featured) = filter.featured {
                if article.featured != featured {
                    return false;
                }
            }
            if let Some(trending) = filter.trending {
                if article.trending != trending {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect();

    matched.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    if filter.offset.is_some() || filter.limit.is_some() {
        let start = filter.offset.unwrap_or(0).min(matched.len());
        let end = (start + filter.limit.unwrap_or(DEFAULT_PAGE_SIZE)).min(matched.len());
        matched = matched[start..end].to_vec();
    }

    matched
}

/// The featured feed: featured articles, newest first, capped at 6.
pub fn featured_articles(articles: &[Article], categories: &[Category]) -> Vec<Article> {
    filter_articles(
        articles,
        categories,
        &ArticleFilter {
            featured: Some(true),
            limit: Some(FEATURED_FEED_LIMIT),
            ..ArticleFilter::default()
        },
    )
}

/// The editorially flagged trending feed, capped at 10.
///
/// Distinct from the engagement-scored ranking in [`crate::trending`]: this
/// only looks at the boolean flag on the article.
pub fn flagged_trending_articles(articles: &[Article], categories: &[Category]) -> Vec<Article> {
    filter_articles(
        articles,
        categories,
        &ArticleFilter {
            trending: Some(true),
            limit: Some(TRENDING_FEED_LIMIT),
            ..ArticleFilter::default()
        },
    )
}

pub(crate) fn resolve_category_id<'a>(categories: &'a [Category], slug: &str) -> Option<&'a str> {
    categories
        .iter()
        .find(|category| category.slug == slug)
        .map(|category| category.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;

    #[test]
    fn category_filter_matches_resolved_id_only() {
        let (categories, _, articles) = seed();
        let filter = ArticleFilter {
            category: Some("ai".to_string()),
            ..ArticleFilter::default()
        };
        let results = filter_articles(&articles, &categories, &filter);

        assert!(!results.is_empty());
        for article in &results {
            assert_eq!(article.category.slug, "ai");
        }
    }

    #[test]
    fn unknown_category_slug_returns_unfiltered_set() {
        // Documented quirk: an unknown slug skips the filter instead of
        // returning an empty list. Arguably wrong, kept for compatibility.
        let (categories, _, articles) = seed();
        let filter = ArticleFilter {
            category: Some("does-not-exist".to_string()),
            ..ArticleFilter::default()
        };
        let results = filter_articles(&articles, &categories, &filter);
        assert_eq!(results.len(), articles.len());
    }

    #[test]
    fn results_sorted_newest_first() {
        let (categories, _, articles) = seed();
        let results = filter_articles(&articles, &categories, &ArticleFilter::default());
        for pair in results.windows(2) {
            assert!(pair[0].published_at >= pair[1].published_at);
        }
    }

    #[test]
    fn featured_and_trending_flags_filter() {
        let (categories, _, articles) = seed();

        let featured = filter_articles(
            &articles,
            &categories,
            &ArticleFilter {
                featured: Some(true),
                ..ArticleFilter::default()
            },
        );
        assert!(featured.iter().all(|a| a.featured));

        let not_trending = filter_articles(
            &articles,
            &categories,
            &ArticleFilter {
                trending: Some(false),
                ..ArticleFilter::default()
            },
        );
        assert!(not_trending.iter().all(|a| !a.trending));
    }

    #[test]
    fn page_size_never_exceeds_limit() {
        let (categories, _, articles) = seed();
        for limit in 1..=articles.len() + 2 {
            let page = filter_articles(
                &articles,
                &categories,
                &ArticleFilter {
                    limit: Some(limit),
                    ..ArticleFilter::default()
                },
            );
            assert!(page.len() <= limit);
        }
    }

    #[test]
    fn concatenated_pages_reproduce_full_sorted_list() {
        let (categories, _, articles) = seed();
        let full = filter_articles(&articles, &categories, &ArticleFilter::default());

        let limit = 3;
        let mut paged = Vec::new();
        let mut offset = 0;
        loop {
            let page = filter_articles(
                &articles,
                &categories,
                &ArticleFilter {
                    limit: Some(limit),
                    offset: Some(offset),
                    ..ArticleFilter::default()
                },
            );
            if page.is_empty() {
                break;
            }
            offset += page.len();
            paged.extend(page);
        }

        assert_eq!(paged, full);
    }

    #[test]
    fn offset_past_end_yields_empty_page() {
        let (categories, _, articles) = seed();
        let page = filter_articles(
            &articles,
            &categories,
            &ArticleFilter {
                offset: Some(articles.len() + 10),
                limit: Some(5),
                ..ArticleFilter::default()
            },
        );
        assert!(page.is_empty());
    }

    #[test]
    fn convenience_feeds_apply_flag_and_cap() {
        let (categories, _, articles) = seed();

        let featured = featured_articles(&articles, &categories);
        assert!(featured.len() <= 6);
        assert!(featured.iter().all(|a| a.featured));

        let trending = flagged_trending_articles(&articles, &categories);
        assert!(trending.len() <= 10);
        assert!(trending.iter().all(|a| a.trending));
    }
}
