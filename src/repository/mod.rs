//! Remote-first article access with a local fallback.
//!
//! Every fetch resolves to exactly one answer: the remote result when it is
//! non-empty, otherwise the [`ContentStore`] equivalent. Transport errors
//! never reach the caller.

use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;

use crate::app::Result;
use crate::catalog::{query, ContentStore};
use crate::domain::Article;
use crate::remote::RemoteSource;

/// Page size used when pulling the whole catalog from the remote.
pub const FETCH_ALL_LIMIT: u32 = 100;

/// Await `remote`; keep its value when `usable`, otherwise compute `fallback`.
async fn or_fallback<T, Fut, U, F>(what: &str, remote: Fut, usable: U, fallback: F) -> T
where
    Fut: Future<Output = Result<T>>,
    U: FnOnce(&T) -> bool,
    F: FnOnce() -> T,
{
    match remote.await {
        Ok(value) if usable(&value) => value,
        Ok(_) => {
            tracing::debug!("Remote returned nothing for {}, using local catalog", what);
            fallback()
        }
        Err(e) => {
            tracing::warn!("Remote fetch of {} failed: {}. Using local catalog", what, e);
            fallback()
        }
    }
}

#[derive(Clone)]
pub struct ArticleRepository {
    catalog: Arc<ContentStore>,
    remote: Option<Arc<dyn RemoteSource + Send + Sync>>,
}

impl ArticleRepository {
    /// Local-only repository.
    pub fn local(catalog: Arc<ContentStore>) -> Self {
        Self {
            catalog,
            remote: None,
        }
    }

    pub fn with_remote(catalog: Arc<ContentStore>, remote: Arc<dyn RemoteSource + Send + Sync>) -> Self {
        Self {
            catalog,
            remote: Some(remote),
        }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub fn catalog(&self) -> &Arc<ContentStore> {
        &self.catalog
    }

    /// Articles of one category.
    ///
    /// The fallback is the full local category, not a page of it.
    pub async fn fetch_by_category(&self, category_id: &str, page: u32, limit: u32) -> Vec<Article> {
        let Some(remote) = &self.remote else {
            return self.catalog.by_category(category_id);
        };

        or_fallback(
            &format!("category {}", category_id),
            remote.articles(Some(category_id), page, limit),
            |articles| !articles.is_empty(),
            || self.catalog.by_category(category_id),
        )
        .await
    }

    pub async fn fetch_by_id(&self, id: &str) -> Option<Article> {
        let Some(remote) = &self.remote else {
            return self.catalog.by_id(id);
        };

        or_fallback(
            &format!("article {}", id),
            remote.article(id),
            Option::is_some,
            || self.catalog.by_id(id),
        )
        .await
    }

    /// One category listing per id, fetched concurrently, in input order.
    pub async fn fetch_sections(&self, category_ids: &[String], limit: u32) -> Vec<(String, Vec<Article>)> {
        let fetches = category_ids.iter().map(|id| async move {
            let articles = self.fetch_by_category(id, 1, limit).await;
            (id.clone(), articles)
        });
        join_all(fetches).await
    }

    /// Everything the backend has, or the whole local catalog.
    pub async fn fetch_all(&self) -> Vec<Article> {
        let Some(remote) = &self.remote else {
            return self.catalog.articles();
        };

        or_fallback(
            "all articles",
            remote.articles(None, 1, FETCH_ALL_LIMIT),
            |articles| !articles.is_empty(),
            || self.catalog.articles(),
        )
        .await
    }

    /// Most viewed articles first.
    pub async fn fetch_popular(&self, count: usize) -> Vec<Article> {
        query::top_by_views(&self.fetch_all().await, count)
    }

    /// Newest articles first.
    pub async fn fetch_latest(&self, count: usize) -> Vec<Article> {
        query::newest(&self.fetch_all().await, count)
    }
}
