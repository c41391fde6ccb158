use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::{NewsdeskError, Result};
use crate::catalog::ContentStore;
use crate::config::Config;
use crate::prefs::{
    BookmarkService, ReadingProgressService, SearchHistory, SessionService, SocialService,
    ThemeService,
};
use crate::remote::{FakeSource, HttpSource, RemoteSource};
use crate::repository::ArticleRepository;
use crate::store::sqlite::SqliteStore;

pub struct AppContext {
    pub config: Config,
    pub store: Arc<SqliteStore>,
    pub catalog: Arc<ContentStore>,
    pub repository: ArticleRepository,
}

impl AppContext {
    pub fn new(config: Config, db_path: Option<PathBuf>) -> Result<Self> {
        let db_path = match db_path {
            Some(p) => p,
            None => Self::default_db_path()?,
        };

        let store = Arc::new(SqliteStore::new(&db_path)?);
        Self::with_store(config, store)
    }

    pub fn in_memory(config: Config) -> Result<Self> {
        let store = Arc::new(SqliteStore::in_memory()?);
        Self::with_store(config, store)
    }

    fn with_store(config: Config, store: Arc<SqliteStore>) -> Result<Self> {
        let catalog = Arc::new(ContentStore::new());
        let repository = Self::build_repository(&config, catalog.clone())?;

        Ok(Self {
            config,
            store,
            catalog,
            repository,
        })
    }

    fn build_repository(config: &Config, catalog: Arc<ContentStore>) -> Result<ArticleRepository> {
        let api = &config.api;

        let remote: Arc<dyn RemoteSource + Send + Sync> = if api.use_fake {
            tracing::debug!("Using in-process fake backend");
            Arc::new(FakeSource::new(catalog.clone(), api.fake_faults()))
        } else if api.use_remote {
            tracing::debug!("Using backend at {}", api.base_url);
            Arc::new(HttpSource::with_timeout(&api.base_url, api.timeout())?)
        } else {
            return Ok(ArticleRepository::local(catalog));
        };

        Ok(ArticleRepository::with_remote(catalog, remote))
    }

    fn default_db_path() -> Result<PathBuf> {
        let db_path = Config::default_db_path().map_err(|e| NewsdeskError::Config(e.to_string()))?;
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(db_path)
    }

    pub fn bookmarks(&self) -> BookmarkService<SqliteStore> {
        BookmarkService::new(self.store.clone())
    }

    pub fn search_history(&self) -> SearchHistory<SqliteStore> {
        SearchHistory::new(self.store.clone())
    }

    pub fn progress(&self) -> ReadingProgressService<SqliteStore> {
        ReadingProgressService::new(self.store.clone())
    }

    pub fn social(&self) -> SocialService<SqliteStore> {
        SocialService::new(self.store.clone())
    }

    pub fn session(&self) -> SessionService<SqliteStore> {
        SessionService::new(self.store.clone())
    }

    pub fn theme(&self) -> ThemeService<SqliteStore> {
        ThemeService::new(self.store.clone())
    }
}
