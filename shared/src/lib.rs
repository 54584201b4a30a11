//! Shared domain types and content logic for the PulseFeed backend.
//!
//! Everything in this crate is plain in-memory data plus pure functions over
//! it; the HTTP layer in `pulsefeed-backend` is a thin shell around these
//! modules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod query;
pub mod recent;
pub mod search;
pub mod trending;

/// Full article data model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    /// URL key, unique across the catalog.
    pub slug: String,
    pub excerpt: String,
    /// Markdown body text.
    pub content: String,
    pub cover_image: String,
    pub author: Author,
    pub category: Category,
    pub tags: Vec<String>,
    pub published_at: DateTime<Utc>,
    /// Estimated reading time in minutes.
    pub read_time: u32,
    pub likes: u64,
    pub views: u64,
    pub featured: bool,
    pub trending: bool,
}

/// List item (trimmed, no body text).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub cover_image: String,
    pub author: Author,
    pub category: Category,
    pub tags: Vec<String>,
    pub published_at: DateTime<Utc>,
    pub read_time: u32,
    pub likes: u64,
    pub views: u64,
    pub featured: bool,
    pub trending: bool,
}

impl From<Article> for ArticleSummary {
    fn from(a: Article) -> Self {
        ArticleSummary {
            id: a.id,
            title: a.title,
            slug: a.slug,
            excerpt: a.excerpt,
            cover_image: a.cover_image,
            author: a.author,
            category: a.category,
            tags: a.tags,
            published_at: a.published_at,
            read_time: a.read_time,
            likes: a.likes,
            views: a.views,
            featured: a.featured,
            trending: a.trending,
        }
    }
}

/// Article category. `slug` is the unique lookup key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// UI color token, passed through as-is.
    pub color: String,
    /// UI icon token, passed through as-is.
    pub icon: String,
}

/// Article author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub verified: bool,
}

/// Signed-in user (mocked session layer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role: Role,
    pub preferences: UserPreferences,
}

/// User role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Per-user preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Category slugs the user follows.
    pub categories: Vec<String>,
    pub notifications: bool,
    pub theme: Theme,
}

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}
