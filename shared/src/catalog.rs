//! In-memory article catalog.
//!
//! The catalog is compiled-in seed content. The only mutation it supports is
//! the view-count increment on article fetch; everything else is read-only
//! snapshots, so callers can filter and rank over plain slices.

use std::collections::HashSet;

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{Article, Author, Category};

/// Article store shared across request handlers.
pub struct Catalog {
    articles: RwLock<Vec<Article>>,
    categories: Vec<Category>,
    authors: Vec<Author>,
}

impl Catalog {
    /// Build a catalog from the compiled-in seed dataset.
    pub fn from_seed() -> Result<Self> {
        let (categories, authors, articles) = seed();
        Self::new(articles, categories, authors)
    }

    /// Build a catalog from explicit content, validating referential
    /// integrity and slug uniqueness up front.
    pub fn new(
        articles: Vec<Article>,
        categories: Vec<Category>,
        authors: Vec<Author>,
    ) -> Result<Self> {
        validate(&articles, &categories, &authors)?;
        tracing::debug!(
            articles = articles.len(),
            categories = categories.len(),
            "catalog validated"
        );
        Ok(Self {
            articles: RwLock::new(articles),
            categories,
            authors,
        })
    }

    /// Snapshot of all articles, current view counts included.
    pub async fn articles(&self) -> Vec<Article> {
        self.articles.read().await.clone()
    }

    pub async fn article_count(&self) -> usize {
        self.articles.read().await.len()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|cat| cat.slug == slug)
    }

    /// Fetch one article by slug, bumping its view count.
    ///
    /// Views only ever increase here, which keeps them monotonically
    /// non-decreasing for the lifetime of the process.
    pub async fn article_by_slug(&self, slug: &str) -> Option<Article> {
        let mut articles = self.articles.write().await;
        let article = articles.iter_mut().find(|article| article.slug == slug)?;
        article.views += 1;
        Some(article.clone())
    }
}

fn validate(articles: &[Article], categories: &[Category], authors: &[Author]) -> Result<()> {
    let category_ids: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();
    let author_ids: HashSet<&str> = authors.iter().map(|a| a.id.as_str()).collect();

    let mut slugs = HashSet::new();
    for article in articles {
        if !slugs.insert(article.slug.as_str()) {
            bail!("duplicate article slug: {}", article.slug);
        }
        if !category_ids.contains(article.category.id.as_str()) {
            bail!(
                "article {} references unknown category {}",
                article.slug,
                article.category.id
            );
        }
        if !author_ids.contains(article.author.id.as_str()) {
            bail!(
                "article {} references unknown author {}",
                article.slug,
                article.author.id
            );
        }
    }

    let mut category_slugs = HashSet::new();
    for category in categories {
        if !category_slugs.insert(category.slug.as_str()) {
            bail!("duplicate category slug: {}", category.slug);
        }
    }

    Ok(())
}

fn ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .unwrap_or_else(|err| panic!("invalid seed timestamp {value}: {err}"))
}

fn category(id: &str, name: &str, slug: &str, color: &str, icon: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        color: color.to_string(),
        icon: icon.to_string(),
    }
}

fn author(id: &str, name: &str, avatar: &str, bio: &str) -> Author {
    Author {
        id: id.to_string(),
        name: name.to_string(),
        avatar: avatar.to_string(),
        bio: bio.to_string(),
        verified: true,
    }
}

struct ArticleSeed<'a> {
    id: &'a str,
    title: &'a str,
    slug: &'a str,
    excerpt: &'a str,
    content: &'a str,
    cover_image: &'a str,
    author: usize,
    category: usize,
    tags: &'a [&'a str],
    published_at: &'a str,
    read_time: u32,
    likes: u64,
    views: u64,
    featured: bool,
    trending: bool,
}

/// Seed content for the tech-research catalog.
pub(crate) fn seed() -> (Vec<Category>, Vec<Author>, Vec<Article>) {
    let categories = vec![
        category("1", "Artificial Intelligence", "ai", "bg-blue-500", "Brain"),
        category("2", "Quantum Computing", "quantum", "bg-purple-500", "Cpu"),
        category("3", "Blockchain & Web3", "blockchain", "bg-green-500", "Link"),
        category("4", "Biotechnology", "biotech", "bg-red-500", "Dna"),
        category("5", "Space Technology", "space", "bg-indigo-500", "Rocket"),
        category("6", "Cybersecurity", "security", "bg-orange-500", "Shield"),
    ];

    let authors = vec![
        author(
            "1",
            "Dr. Sarah Chen",
            "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg",
            "AI Research Scientist with 15+ years in machine learning and neural networks",
        ),
        author(
            "2",
            "Marcus Rodriguez",
            "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg",
            "Technology journalist covering emerging tech trends and innovations",
        ),
        author(
            "3",
            "Dr. Emily Watson",
            "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg",
            "Quantum computing researcher and technology evangelist",
        ),
        author(
            "4",
            "Alex Kim",
            "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg",
            "Blockchain developer and Web3 advocate",
        ),
        author(
            "5",
            "Dr. James Wright",
            "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg",
            "Space technology engineer and former NASA researcher",
        ),
    ];

    let seeds = [
        ArticleSeed {
            id: "1",
            title: "The Revolutionary Impact of Quantum-AI Hybrid Systems on Modern Computing",
            slug: "quantum-ai-hybrid-systems-computing-revolution",
            excerpt: "Exploring how the convergence of quantum computing and artificial \
                      intelligence is reshaping computational paradigms and opening new \
                      frontiers in problem-solving capabilities.",
            content: "The intersection of quantum computing and artificial intelligence \
                      represents one of the most exciting frontiers in modern technology.\n\n\
                      ## The Quantum Advantage\n\n\
                      Qubits can exist in multiple states simultaneously, offering exponential \
                      advantages over classical computers for specific problem classes. Combined \
                      with AI's pattern recognition, hybrid systems tackle previously \
                      intractable challenges.\n\n\
                      ## Breakthrough Applications\n\n\
                      - **Optimization**: complex logistics and resource allocation\n\
                      - **Cryptography**: quantum-resistant security protocols\n\
                      - **Drug discovery**: accelerated molecular simulation\n\
                      - **Financial modeling**: better risk assessment\n\n\
                      Companies like IBM and Google are racing to deliver practical quantum-AI \
                      applications across industries.",
            cover_image: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg",
            author: 0,
            category: 0,
            tags: &["Quantum Computing", "AI", "Machine Learning", "Technology"],
            published_at: "2024-01-15T10:00:00Z",
            read_time: 12,
            likes: 1247,
            views: 8932,
            featured: true,
            trending: true,
        },
        ArticleSeed {
            id: "2",
            title: "Breakthrough in Neural Interface Technology: Direct Brain-Computer Communication",
            slug: "neural-interface-brain-computer-communication",
            excerpt: "Scientists achieve unprecedented success in creating seamless \
                      brain-computer interfaces that could revolutionize how we interact with \
                      digital systems.",
            content: "Brain-computer interfaces have reached a pivotal moment: neural signals \
                      can now be translated into digital commands with remarkable precision.\n\n\
                      ## Clinical Breakthroughs\n\n\
                      - **Motor control**: paralyzed patients operating robotic limbs\n\
                      - **Communication**: direct neural-to-text translation\n\
                      - **Sensory restoration**: artificial vision and hearing\n\n\
                      Machine learning decodes neural activity in real time, adapting to \
                      individual brain patterns and improving accuracy over time. Important \
                      questions about privacy and security remain open.",
            cover_image: "https://images.pexels.com/photos/8386434/pexels-photo-8386434.jpeg",
            author: 1,
            category: 3,
            tags: &["Neurotechnology", "BCI", "Innovation", "Medical Technology"],
            published_at: "2024-01-14T14:30:00Z",
            read_time: 8,
            likes: 892,
            views: 5421,
            featured: true,
            trending: false,
        },
        ArticleSeed {
            id: "3",
            title: "The Next Generation of Blockchain: Sustainable and Scalable Web3 Solutions",
            slug: "next-generation-blockchain-sustainable-web3",
            excerpt: "Analyzing emerging blockchain technologies that promise to solve \
                      scalability and environmental concerns while maintaining \
                      decentralization principles.",
            content: "The blockchain industry is undergoing a fundamental transformation as \
                      developers address the scalability and energy problems that limited \
                      mainstream adoption.\n\n\
                      ## Sustainable Consensus\n\n\
                      Proof-of-Stake already cut energy use dramatically; delegated validation, \
                      proof-of-history, and hybrid mechanisms push further.\n\n\
                      ## Scalability\n\n\
                      Sharding and layer-2 rollups let networks process thousands of \
                      transactions per second without giving up decentralization.",
            cover_image: "https://images.pexels.com/photos/8499886/pexels-photo-8499886.jpeg",
            author: 3,
            category: 2,
            tags: &["Blockchain", "Web3", "Cryptocurrency", "Sustainability"],
            published_at: "2024-01-13T09:15:00Z",
            read_time: 10,
            likes: 634,
            views: 3876,
            featured: false,
            trending: true,
        },
        ArticleSeed {
            id: "4",
            title: "Space Manufacturing: How Zero-Gravity Production Could Transform Industries",
            slug: "space-manufacturing-zero-gravity-production",
            excerpt: "Investigating the potential of manufacturing in space environments and \
                      how it could lead to revolutionary advances in materials science and \
                      production.",
            content: "Microgravity enables production processes that are impossible on Earth: \
                      perfect crystals, exotic alloys, and ultra-pure fiber optics.\n\n\
                      ## Why Orbit\n\n\
                      Without gravity-driven convection and sedimentation, materials form with \
                      fewer defects. Early experiments aboard the ISS produced optical fiber an \
                      order of magnitude clearer than terrestrial equivalents.\n\n\
                      Commercial stations planned for the next decade aim to turn these \
                      experiments into industrial supply chains.",
            cover_image: "https://images.pexels.com/photos/586063/pexels-photo-586063.jpeg",
            author: 4,
            category: 4,
            tags: &["Space Technology", "Manufacturing", "Innovation", "Materials Science"],
            published_at: "2024-01-12T16:45:00Z",
            read_time: 15,
            likes: 756,
            views: 4329,
            featured: false,
            trending: false,
        },
        ArticleSeed {
            id: "5",
            title: "Cybersecurity in the Age of AI: New Threats and Advanced Defense Mechanisms",
            slug: "cybersecurity-ai-threats-defense-mechanisms",
            excerpt: "Examining how artificial intelligence is both creating new cybersecurity \
                      challenges and providing innovative solutions for digital protection.",
            content: "Artificial intelligence cuts both ways in security: attackers automate \
                      phishing and vulnerability discovery while defenders deploy anomaly \
                      detection at machine speed.\n\n\
                      ## The New Threat Landscape\n\n\
                      Deepfake social engineering and adversarial inputs against ML-based \
                      filters are already in the wild.\n\n\
                      ## Defense in Depth\n\n\
                      Behavioral baselining, automated incident response, and AI-assisted code \
                      review shrink the window between intrusion and containment.",
            cover_image: "https://images.pexels.com/photos/5380664/pexels-photo-5380664.jpeg",
            author: 0,
            category: 5,
            tags: &["Cybersecurity", "AI", "Digital Protection", "Technology"],
            published_at: "2024-01-11T11:20:00Z",
            read_time: 9,
            likes: 445,
            views: 2987,
            featured: false,
            trending: true,
        },
        ArticleSeed {
            id: "6",
            title: "Gene Editing 2.0: CRISPR Advances and the Future of Personalized Medicine",
            slug: "gene-editing-crispr-personalized-medicine",
            excerpt: "Deep dive into the latest CRISPR developments and how they're paving the \
                      way for truly personalized medical treatments and therapies.",
            content: "Base editing and prime editing extend CRISPR beyond simple cuts, enabling \
                      single-letter corrections with far fewer off-target effects.\n\n\
                      ## From Lab to Clinic\n\n\
                      Approved therapies for sickle cell disease marked the turning point; \
                      trials now target inherited blindness, high cholesterol, and certain \
                      cancers.\n\n\
                      Treatment tailored to an individual's genome is moving from promise to \
                      standard of care.",
            cover_image: "https://images.pexels.com/photos/3938023/pexels-photo-3938023.jpeg",
            author: 2,
            category: 3,
            tags: &["CRISPR", "Gene Editing", "Biotechnology", "Medicine"],
            published_at: "2024-01-10T13:00:00Z",
            read_time: 11,
            likes: 923,
            views: 6543,
            featured: false,
            trending: false,
        },
        ArticleSeed {
            id: "7",
            title: "The Rise of Autonomous AI Agents: From Chatbots to Digital Employees",
            slug: "autonomous-ai-agents-digital-employees",
            excerpt: "Exploring how AI agents are evolving from simple chatbots to \
                      sophisticated digital workers capable of complex reasoning and \
                      autonomous decision-making.",
            content: "AI agents now plan multi-step tasks, call external tools, and verify \
                      their own output, a qualitative jump from scripted chatbots.\n\n\
                      ## What Changed\n\n\
                      Long-context reasoning and reliable tool use let agents handle workflows \
                      like research synthesis, code review, and customer operations end to \
                      end.\n\n\
                      ## Open Problems\n\n\
                      Evaluation, cost control, and safe delegation remain active research \
                      areas as organizations hand agents real responsibility.",
            cover_image: "https://images.pexels.com/photos/8439093/pexels-photo-8439093.jpeg",
            author: 0,
            category: 0,
            tags: &["AI Agents", "Automation", "Future of Work", "Machine Learning"],
            published_at: "2024-01-09T08:30:00Z",
            read_time: 13,
            likes: 1156,
            views: 7234,
            featured: true,
            trending: true,
        },
        ArticleSeed {
            id: "8",
            title: "Fusion Energy Breakthrough: The Dawn of Unlimited Clean Power",
            slug: "fusion-energy-breakthrough-unlimited-clean-power",
            excerpt: "Recent advances in fusion technology bring us closer to achieving the \
                      holy grail of energy production: safe, clean, and virtually unlimited \
                      power.",
            content: "Net energy gain at the National Ignition Facility turned fusion from a \
                      perpetual promise into an engineering problem.\n\n\
                      ## The Road to the Grid\n\n\
                      High-temperature superconducting magnets shrink tokamaks to commercial \
                      scale, and private ventures now target pilot plants within the decade.\n\n\
                      A fusion-powered grid would decouple economic growth from carbon \
                      emissions entirely.",
            cover_image: "https://images.pexels.com/photos/2166711/pexels-photo-2166711.jpeg",
            author: 4,
            category: 4,
            tags: &["Fusion Energy", "Clean Technology", "Climate Change", "Physics"],
            published_at: "2024-01-08T15:20:00Z",
            read_time: 14,
            likes: 2341,
            views: 12456,
            featured: true,
            trending: true,
        },
    ];

    let articles = seeds
        .iter()
        .map(|seed| Article {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            slug: seed.slug.to_string(),
            excerpt: seed.excerpt.to_string(),
            content: seed.content.to_string(),
            cover_image: seed.cover_image.to_string(),
            author: authors[seed.author].clone(),
            category: categories[seed.category].clone(),
            tags: seed.tags.iter().map(|tag| tag.to_string()).collect(),
            published_at: ts(seed.published_at),
            read_time: seed.read_time,
            likes: seed.likes,
            views: seed.views,
            featured: seed.featured,
            trending: seed.trending,
        })
        .collect();

    (categories, authors, articles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_passes_validation() {
        let catalog = Catalog::from_seed().expect("seed catalog");
        assert_eq!(catalog.categories().len(), 6);
        assert_eq!(catalog.authors().len(), 5);
    }

    #[tokio::test]
    async fn seed_has_unique_slugs_and_valid_references() {
        let catalog = Catalog::from_seed().expect("seed catalog");
        let articles = catalog.articles().await;
        assert_eq!(articles.len(), 8);

        let slugs: HashSet<&str> = articles.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs.len(), articles.len());

        for article in &articles {
            assert!(catalog.category_by_slug(&article.category.slug).is_some());
        }
    }

    #[test]
    fn duplicate_slug_is_rejected() {
        let (categories, authors, mut articles) = seed();
        articles[1].slug = articles[0].slug.clone();
        let err = Catalog::new(articles, categories, authors);
        assert!(err.is_err());
    }

    #[test]
    fn unknown_category_reference_is_rejected() {
        let (categories, authors, mut articles) = seed();
        articles[0].category.id = "999".to_string();
        let err = Catalog::new(articles, categories, authors);
        assert!(err.is_err());
    }

    #[tokio::test]
    async fn fetch_by_slug_increments_views() {
        let catalog = Catalog::from_seed().expect("seed catalog");
        let before = catalog
            .article_by_slug("quantum-ai-hybrid-systems-computing-revolution")
            .await
            .expect("article exists");
        let after = catalog
            .article_by_slug("quantum-ai-hybrid-systems-computing-revolution")
            .await
            .expect("article exists");
        assert_eq!(after.views, before.views + 1);
    }

    #[tokio::test]
    async fn fetch_unknown_slug_returns_none() {
        let catalog = Catalog::from_seed().expect("seed catalog");
        assert!(catalog.article_by_slug("no-such-article").await.is_none());
    }

    #[test]
    fn category_lookup_by_slug() {
        let catalog = Catalog::from_seed().expect("seed catalog");
        let quantum = catalog.category_by_slug("quantum").expect("quantum category");
        assert_eq!(quantum.name, "Quantum Computing");
        assert!(catalog.category_by_slug("cooking").is_none());
    }
}
