pub mod filters;
pub mod query;
pub mod sample;

use std::sync::OnceLock;

use crate::domain::{Article, Category};

pub use filters::{DateRange, SearchFilters, SortBy};
pub use query::{ListingPage, Pagination};

/// Owner of the canonical article list.
///
/// The sample catalog is generated on first access and cached; every read
/// hands out a clone so callers can never mutate the cached list.
pub struct ContentStore {
    articles: OnceLock<Vec<Article>>,
    categories: Vec<Category>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self {
            articles: OnceLock::new(),
            categories: sample::generate_categories(),
        }
    }

    /// A store seeded with a fixed list instead of the sample catalog.
    pub fn with_articles(articles: Vec<Article>) -> Self {
        let store = Self::new();
        let _ = store.articles.set(articles);
        store
    }

    fn cached(&self) -> &[Article] {
        self.articles.get_or_init(|| {
            let articles = sample::generate_articles();
            tracing::debug!("Generated sample catalog with {} articles", articles.len());
            articles
        })
    }

    pub fn articles(&self) -> Vec<Article> {
        self.cached().to_vec()
    }

    pub fn len(&self) -> usize {
        self.cached().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cached().is_empty()
    }

    pub fn by_category(&self, category_id: &str) -> Vec<Article> {
        query::by_category(self.cached(), category_id)
    }

    pub fn by_subcategory(&self, subcategory_id: &str) -> Vec<Article> {
        query::by_subcategory(self.cached(), subcategory_id)
    }

    pub fn by_author(&self, author_id: &str) -> Vec<Article> {
        query::by_author(self.cached(), author_id)
    }

    pub fn by_id(&self, id: &str) -> Option<Article> {
        query::by_id(self.cached(), id)
    }

    /// Search titles, bodies and author names. `None` and blank queries
    /// match nothing.
    pub fn search<'a>(&self, query: impl Into<Option<&'a str>>) -> Vec<Article> {
        match query.into() {
            Some(q) => query::search(self.cached(), q),
            None => Vec::new(),
        }
    }

    pub fn top_by_views(&self, limit: usize) -> Vec<Article> {
        query::top_by_views(self.cached(), limit)
    }

    pub fn top_by_likes(&self, limit: usize) -> Vec<Article> {
        query::top_by_likes(self.cached(), limit)
    }

    pub fn newest(&self, limit: usize) -> Vec<Article> {
        query::newest(self.cached(), limit)
    }

    pub fn listing(&self, category: Option<&str>, page: u32, limit: u32) -> ListingPage {
        query::listing(self.cached(), category, page, limit)
    }

    pub fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    pub fn category(&self, id: &str) -> Option<Category> {
        self.categories
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(id))
            .cloned()
    }

    pub fn subcategories_for(&self, category_id: &str) -> Vec<String> {
        self.category(category_id)
            .map(|c| c.subcategories)
            .unwrap_or_default()
    }

    pub fn is_valid_category(&self, id: &str) -> bool {
        self.category(id).is_some()
    }

    pub fn is_valid_subcategory(&self, category_id: &str, tag: &str) -> bool {
        self.category(category_id)
            .is_some_and(|c| c.contains_subcategory(tag))
    }

    /// Display name for a category id, or the id itself when unknown.
    pub fn display_name(&self, id: &str) -> String {
        self.category(id)
            .map(|c| c.name)
            .unwrap_or_else(|| id.to_string())
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}
