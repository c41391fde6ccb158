use std::sync::Arc;

use async_trait::async_trait;

use crate::app::Result;
use crate::catalog::ContentStore;
use crate::domain::Article;
use crate::remote::{FaultInjector, RemoteSource};

/// In-process stand-in for the article API.
///
/// Answers from a [`ContentStore`] with the same listing policy as the fake
/// server, after the injected delay and failure roll.
pub struct FakeSource {
    catalog: Arc<ContentStore>,
    faults: FaultInjector,
}

impl FakeSource {
    pub fn new(catalog: Arc<ContentStore>, faults: FaultInjector) -> Self {
        Self { catalog, faults }
    }
}

#[async_trait]
impl RemoteSource for FakeSource {
    async fn articles(&self, category: Option<&str>, page: u32, limit: u32) -> Result<Vec<Article>> {
        self.faults.apply().await?;

        let listing = self.catalog.listing(category, page, limit);
        tracing::debug!(
            "Fake source returning {} articles for category {:?}, page {}, limit {}",
            listing.articles.len(),
            category,
            page,
            limit
        );
        Ok(listing.articles)
    }

    async fn article(&self, id: &str) -> Result<Option<Article>> {
        self.faults.apply().await?;

        let article = self.catalog.by_id(id);
        if article.is_none() {
            tracing::debug!("Fake source has no article {}", id);
        }
        Ok(article)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NewsdeskError;

    fn source(faults: FaultInjector) -> FakeSource {
        FakeSource::new(Arc::new(ContentStore::new()), faults)
    }

    #[tokio::test]
    async fn test_articles_newest_first_page() {
        let source = source(FaultInjector::disabled());
        let articles = source.articles(Some("tech"), 1, 3).await.unwrap();
        let ids: Vec<_> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["tech1", "tech2", "tech3"]);
    }

    #[tokio::test]
    async fn test_page_past_end_is_empty() {
        let source = source(FaultInjector::disabled());
        assert!(source.articles(Some("tech"), 9, 20).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_article_lookup() {
        let source = source(FaultInjector::disabled());
        assert_eq!(source.article("news1").await.unwrap().unwrap().id, "news1");
        assert!(source.article("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_injected_errors_surface() {
        let source = source(FaultInjector::new(0.0, 0, 0, 1.0));
        assert!(matches!(
            source.articles(None, 1, 20).await,
            Err(NewsdeskError::Simulated(_))
        ));
        assert!(source.article("tech1").await.is_err());
    }
}
