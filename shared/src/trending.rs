//! Trending engine: time-decayed engagement scoring for articles and
//! synthetic scoring for the trending-topics dashboard.
//!
//! Topic scores are simulated: fixed base scores with a timeframe multiplier
//! and jitter, standing in for a real analytics pipeline. Article scores are
//! computed from stored counters. Both take their randomness/clock as
//! explicit parameters so tests stay deterministic.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Article, ArticleSummary};

/// Ranked-article cap applied when the caller does not pass one.
pub const DEFAULT_TRENDING_LIMIT: usize = 10;

/// Scoring window. Selects the decay rate, the synthetic topic-score
/// multiplier, and the minimum article count for topic inclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "6h")]
    SixHours,
    #[serde(rename = "24h")]
    OneDay,
    #[serde(rename = "7d")]
    SevenDays,
}

impl Timeframe {
    /// All windows, shortest first.
    pub const ALL: [Timeframe; 4] = [
        Timeframe::OneHour,
        Timeframe::SixHours,
        Timeframe::OneDay,
        Timeframe::SevenDays,
    ];

    /// Exponential decay constant applied to content age. Shorter windows
    /// decay faster: recent spikes dominate at 1h, sustained engagement
    /// dominates at 7d.
    pub fn decay_rate(self) -> f64 {
        match self {
            Timeframe::OneHour => 0.9,
            Timeframe::SixHours => 0.7,
            Timeframe::OneDay => 0.5,
            Timeframe::SevenDays => 0.2,
        }
    }

    /// Window length in hours.
    pub fn hours(self) -> u32 {
        match self {
            Timeframe::OneHour => 1,
            Timeframe::SixHours => 6,
            Timeframe::OneDay => 24,
            Timeframe::SevenDays => 168,
        }
    }

    /// Multiplier applied to synthetic topic base scores. Activity
    /// concentrates in short windows and accumulates over long ones.
    pub fn score_multiplier(self) -> f64 {
        match self {
            Timeframe::OneHour => 0.3,
            Timeframe::SixHours => 0.6,
            Timeframe::OneDay => 1.0,
            Timeframe::SevenDays => 1.8,
        }
    }

    /// A topic needs at least this many articles to show up in the window.
    pub fn min_topic_articles(self) -> u32 {
        match self {
            Timeframe::OneHour => 1,
            Timeframe::SixHours => 2,
            Timeframe::OneDay => 3,
            Timeframe::SevenDays => 5,
        }
    }

    /// Wire form, identical to the serde rename.
    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::OneHour => "1h",
            Timeframe::SixHours => "6h",
            Timeframe::OneDay => "24h",
            Timeframe::SevenDays => "7d",
        }
    }
}

/// Topic trend direction shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Hot,
    New,
}

/// Engagement counters feeding the article score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engagement {
    pub views: u64,
    pub likes: u64,
    pub shares: u64,
    pub comments: u64,
}

impl Engagement {
    /// Shares and comments are not tracked in the data model; estimate them
    /// as 10% and 5% of likes. An approximation, not measured data.
    pub fn estimated(views: u64, likes: u64) -> Self {
        Engagement {
            views,
            likes,
            shares: likes / 10,
            comments: likes / 20,
        }
    }

    fn weighted(self) -> f64 {
        (self.views + self.likes * 5 + self.shares * 10 + self.comments * 15) as f64
    }
}

/// Weighted engagement with exponential time decay:
/// `(views + likes*5 + shares*10 + comments*15) * exp(-age_hours * decay)`.
pub fn engagement_score(engagement: Engagement, age_hours: f64, decay_rate: f64) -> f64 {
    engagement.weighted() * (-age_hours * decay_rate).exp()
}

/// Score one article for the window at the given instant.
pub fn article_score(article: &Article, timeframe: Timeframe, now: DateTime<Utc>) -> f64 {
    let age_hours = (now - article.published_at).num_seconds() as f64 / 3600.0;
    engagement_score(
        Engagement::estimated(article.views, article.likes),
        age_hours,
        timeframe.decay_rate(),
    )
}

/// An article paired with its computed engagement score.
#[derive(Debug, Clone, Serialize)]
pub struct RankedArticle {
    #[serde(flatten)]
    pub article: ArticleSummary,
    pub engagement_score: f64,
}

/// Rank articles by engagement score, highest first, capped at `limit`
/// (default 10).
pub fn rank_articles(
    articles: &[Article],
    timeframe: Timeframe,
    limit: Option<usize>,
    now: DateTime<Utc>,
) -> Vec<RankedArticle> {
    let mut ranked: Vec<RankedArticle> = articles
        .iter()
        .map(|article| RankedArticle {
            engagement_score: article_score(article, timeframe, now),
            article: article.clone().into(),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.engagement_score
            .partial_cmp(&a.engagement_score)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(limit.unwrap_or(DEFAULT_TRENDING_LIMIT));
    ranked
}

/// A trending theme on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingTopic {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display label, not a catalog category slug.
    pub category: String,
    pub trend: TrendDirection,
    pub engagement_score: u64,
    pub timeframe: Timeframe,
    /// Number of articles currently attached to the topic.
    pub articles: u32,
    /// Week-over-week growth, percent.
    pub growth_rate: f64,
    pub keywords: Vec<String>,
}

struct TopicSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    trend: TrendDirection,
    base_score: f64,
    articles: u32,
    growth_rate: f64,
    keywords: &'static [&'static str],
}

const TOPIC_SEEDS: &[TopicSeed] = &[
    TopicSeed {
        id: "1",
        title: "AI Consciousness Debate",
        description: "Growing discussion around whether current AI models show signs of consciousness",
        category: "AI Ethics",
        trend: TrendDirection::Hot,
        base_score: 15420.0,
        articles: 12,
        growth_rate: 245.0,
        keywords: &["AI consciousness", "sentient AI", "AI ethics", "machine consciousness"],
    },
    TopicSeed {
        id: "2",
        title: "Quantum Internet Breakthrough",
        description: "Scientists achieve record-breaking quantum entanglement over 1000km",
        category: "Quantum Computing",
        trend: TrendDirection::Up,
        base_score: 8930.0,
        articles: 8,
        growth_rate: 180.0,
        keywords: &["quantum internet", "quantum entanglement", "quantum communication"],
    },
    TopicSeed {
        id: "3",
        title: "CRISPR Gene Drive Controversy",
        description: "Heated debate over releasing gene-edited mosquitoes in the wild",
        category: "Biotechnology",
        trend: TrendDirection::Up,
        base_score: 12340.0,
        articles: 15,
        growth_rate: 156.0,
        keywords: &["CRISPR", "gene drive", "genetic modification", "mosquito control"],
    },
    TopicSeed {
        id: "4",
        title: "Web3 Sustainability Claims",
        description: "Critics question environmental benefits of new blockchain protocols",
        category: "Blockchain",
        trend: TrendDirection::Down,
        base_score: 6780.0,
        articles: 9,
        growth_rate: -23.0,
        keywords: &["Web3 sustainability", "blockchain environment", "crypto energy"],
    },
    TopicSeed {
        id: "5",
        title: "Space Mining Rights",
        description: "International tensions rise over asteroid mining territorial claims",
        category: "Space Technology",
        trend: TrendDirection::Hot,
        base_score: 11250.0,
        articles: 7,
        growth_rate: 312.0,
        keywords: &["space mining", "asteroid mining", "space law", "space resources"],
    },
    TopicSeed {
        id: "6",
        title: "Neural Implant Privacy",
        description: "Concerns over data security in brain-computer interfaces",
        category: "Neurotechnology",
        trend: TrendDirection::Up,
        base_score: 9870.0,
        articles: 11,
        growth_rate: 89.0,
        keywords: &["neural implants", "brain privacy", "BCI security", "neuroethics"],
    },
];

/// Synthetic score for a fixed base: `floor(base * multiplier * jitter)`
/// with jitter uniform in [0.8, 1.2).
pub fn timeframed_score(base: f64, timeframe: Timeframe, rng: &mut impl Rng) -> u64 {
    let jitter = 0.8 + rng.gen::<f64>() * 0.4;
    (base * timeframe.score_multiplier() * jitter).floor() as u64
}

/// Trending topics for the window, scored and sorted highest first. Topics
/// without enough attached articles for the window are dropped.
pub fn topics_for(timeframe: Timeframe, rng: &mut impl Rng) -> Vec<TrendingTopic> {
    topics_from_seeds(TOPIC_SEEDS, timeframe, rng)
}

fn topics_from_seeds(
    seeds: &[TopicSeed],
    timeframe: Timeframe,
    rng: &mut impl Rng,
) -> Vec<TrendingTopic> {
    let mut topics: Vec<TrendingTopic> = seeds
        .iter()
        .filter(|seed| seed.articles >= timeframe.min_topic_articles())
        .map(|seed| TrendingTopic {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            category: seed.category.to_string(),
            trend: seed.trend,
            engagement_score: timeframed_score(seed.base_score, timeframe, rng),
            timeframe,
            articles: seed.articles,
            growth_rate: seed.growth_rate,
            keywords: seed.keywords.iter().map(|kw| kw.to_string()).collect(),
        })
        .collect();

    topics.sort_by(|a, b| b.engagement_score.cmp(&a.engagement_score));
    topics
}

/// Per-category engagement figure in the analytics summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEngagement {
    pub name: String,
    pub engagement: u64,
}

/// Dashboard analytics summary for a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingAnalytics {
    pub total_engagement: u64,
    pub active_topics: usize,
    pub growth_rate: f64,
    pub top_categories: Vec<CategoryEngagement>,
}

const TOTAL_ENGAGEMENT_BASE: f64 = 125_000.0;

const TOP_CATEGORY_BASES: &[(&str, f64)] = &[
    ("AI Ethics", 45_000.0),
    ("Quantum Computing", 32_000.0),
    ("Biotechnology", 28_000.0),
    ("Space Technology", 20_000.0),
];

/// Analytics summary for the window, same synthetic scoring as topics.
pub fn analytics_for(timeframe: Timeframe, rng: &mut impl Rng) -> TrendingAnalytics {
    let growth_rate = match timeframe {
        Timeframe::OneHour => 15.2,
        Timeframe::SixHours => 8.7,
        Timeframe::OneDay => 12.4,
        Timeframe::SevenDays => 5.8,
    };

    TrendingAnalytics {
        total_engagement: timeframed_score(TOTAL_ENGAGEMENT_BASE, timeframe, rng),
        active_topics: TOPIC_SEEDS.len(),
        growth_rate,
        top_categories: TOP_CATEGORY_BASES
            .iter()
            .map(|(name, base)| CategoryEngagement {
                name: name.to_string(),
                engagement: timeframed_score(*base, timeframe, rng),
            })
            .collect(),
    }
}
