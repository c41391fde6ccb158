use std::collections::BTreeSet;
use std::sync::Arc;

use crate::app::Result;
use crate::catalog::ContentStore;
use crate::domain::Article;
use crate::prefs::Preferences;
use crate::store::Store;

const NAMESPACE: &str = "bookmarks";
const KEY_IDS: &str = "bookmarked_article_ids";

pub struct BookmarkService<S> {
    prefs: Preferences<S>,
}

impl<S: Store> BookmarkService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            prefs: Preferences::new(store, NAMESPACE),
        }
    }

    pub fn bookmarked_ids(&self) -> Result<BTreeSet<String>> {
        self.prefs.set(KEY_IDS)
    }

    pub fn is_bookmarked(&self, article_id: &str) -> Result<bool> {
        Ok(self.bookmarked_ids()?.contains(article_id))
    }

    /// Flip the bookmark on `article` and persist it. Returns the new state.
    pub fn toggle(&self, article: &mut Article) -> Result<bool> {
        let mut ids = self.bookmarked_ids()?;
        let bookmarked = if ids.remove(&article.id) {
            false
        } else {
            ids.insert(article.id.clone());
            true
        };
        self.prefs.put_set(KEY_IDS, &ids)?;

        tracing::debug!("Bookmark on {} is now {}", article.id, bookmarked);
        article.bookmarked = bookmarked;
        Ok(bookmarked)
    }

    /// Set the `bookmarked` flag on each article from the stored ids.
    pub fn sync(&self, articles: &mut [Article]) -> Result<()> {
        let ids = self.bookmarked_ids()?;
        for article in articles {
            article.bookmarked = ids.contains(&article.id);
        }
        Ok(())
    }

    /// Bookmarked articles that still exist in the catalog, in catalog order.
    pub fn bookmarked_articles(&self, catalog: &ContentStore) -> Result<Vec<Article>> {
        let ids = self.bookmarked_ids()?;
        Ok(catalog
            .articles()
            .into_iter()
            .filter(|a| ids.contains(&a.id))
            .map(|mut a| {
                a.bookmarked = true;
                a
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteStore;

    fn service() -> BookmarkService<SqliteStore> {
        BookmarkService::new(Arc::new(SqliteStore::in_memory().unwrap()))
    }

    #[test]
    fn test_toggle_twice_restores() {
        let service = service();
        let catalog = ContentStore::new();
        let mut article = catalog.by_id("tech2").unwrap();

        assert!(service.toggle(&mut article).unwrap());
        assert!(article.bookmarked);
        assert!(service.is_bookmarked("tech2").unwrap());

        assert!(!service.toggle(&mut article).unwrap());
        assert!(!article.bookmarked);
        assert!(service.bookmarked_ids().unwrap().is_empty());
    }

    #[test]
    fn test_sync_and_listing() {
        let service = service();
        let catalog = ContentStore::new();
        let mut first = catalog.by_id("news1").unwrap();
        let mut second = catalog.by_id("tech1").unwrap();
        service.toggle(&mut first).unwrap();
        service.toggle(&mut second).unwrap();

        let mut tech = catalog.by_category("tech");
        service.sync(&mut tech).unwrap();
        let flagged: Vec<_> = tech.iter().filter(|a| a.bookmarked).map(|a| a.id.as_str()).collect();
        assert_eq!(flagged, vec!["tech1"]);

        let saved = service.bookmarked_articles(&catalog).unwrap();
        let ids: Vec<_> = saved.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["tech1", "news1"]);
        assert!(saved.iter().all(|a| a.bookmarked));
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let service = service();
        let catalog = ContentStore::new();
        let mut ghost = Article::new("ghost", "Gone", chrono::Utc::now());
        service.toggle(&mut ghost).unwrap();
        assert!(service.bookmarked_articles(&catalog).unwrap().is_empty());
    }
}
