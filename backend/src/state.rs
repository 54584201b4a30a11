use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use pulsefeed_shared::catalog::Catalog;
use pulsefeed_shared::recent::RecentSearchStore;
use tokio::sync::RwLock;

use crate::session::SessionStore;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Seed article catalog.
    pub catalog: Arc<Catalog>,
    /// Recent-search history, persisted under the data directory.
    pub recent_searches: Arc<RwLock<RecentSearchStore>>,
    /// Mocked authentication session.
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(data_dir: &Path) -> Result<Self> {
        let catalog = Catalog::from_seed()?;
        let recent_searches = RecentSearchStore::open(data_dir)?;

        Ok(Self {
            catalog: Arc::new(catalog),
            recent_searches: Arc::new(RwLock::new(recent_searches)),
            sessions: Arc::new(SessionStore::default()),
        })
    }

    pub async fn article_count(&self) -> usize {
        self.catalog.article_count().await
    }
}
