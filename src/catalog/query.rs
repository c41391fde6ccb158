use serde::{Deserialize, Serialize};

use crate::domain::Article;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 20;

/// Pagination metadata attached to a listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPage {
    pub articles: Vec<Article>,
    pub pagination: Pagination,
}

pub fn by_category(articles: &[Article], category_id: &str) -> Vec<Article> {
    articles
        .iter()
        .filter(|a| a.category_id.eq_ignore_ascii_case(category_id))
        .cloned()
        .collect()
}

pub fn by_subcategory(articles: &[Article], subcategory_id: &str) -> Vec<Article> {
    articles
        .iter()
        .filter(|a| {
            a.subcategory_id
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case(subcategory_id))
        })
        .cloned()
        .collect()
}

pub fn by_author(articles: &[Article], author_id: &str) -> Vec<Article> {
    articles
        .iter()
        .filter(|a| a.author_id.eq_ignore_ascii_case(author_id))
        .cloned()
        .collect()
}

pub fn by_id(articles: &[Article], id: &str) -> Option<Article> {
    articles.iter().find(|a| a.id == id).cloned()
}

/// Case-insensitive substring match on title, content and author name.
///
/// Results keep catalog order; there is no relevance ranking.
pub fn search(articles: &[Article], query: &str) -> Vec<Article> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    articles
        .iter()
        .filter(|a| {
            a.title.to_lowercase().contains(&needle)
                || a.content.to_lowercase().contains(&needle)
                || a.author_name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

pub fn top_by_views(articles: &[Article], limit: usize) -> Vec<Article> {
    let mut sorted = articles.to_vec();
    sorted.sort_by(|a, b| b.view_count.cmp(&a.view_count));
    sorted.truncate(limit);
    sorted
}

pub fn top_by_likes(articles: &[Article], limit: usize) -> Vec<Article> {
    let mut sorted = articles.to_vec();
    sorted.sort_by(|a, b| b.like_count.cmp(&a.like_count));
    sorted.truncate(limit);
    sorted
}

pub fn newest(articles: &[Article], limit: usize) -> Vec<Article> {
    let mut sorted = articles.to_vec();
    sort_newest_first(&mut sorted);
    sorted.truncate(limit);
    sorted
}

pub(crate) fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.published_at().cmp(&a.published_at()));
}

/// Filter by optional category, sort newest first and cut one page out.
///
/// A blank category means no filter. Pages past the end come back empty
/// with the real `total`.
pub fn listing(articles: &[Article], category: Option<&str>, page: u32, limit: u32) -> ListingPage {
    let mut filtered = match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => by_category(articles, category),
        None => articles.to_vec(),
    };
    sort_newest_first(&mut filtered);

    let total = filtered.len();
    let page = page.max(1);
    let limit = limit.max(1);
    let start = (page as usize - 1).saturating_mul(limit as usize);

    let slice = if start >= total {
        Vec::new()
    } else {
        let end = start.saturating_add(limit as usize).min(total);
        filtered[start..end].to_vec()
    };

    tracing::debug!(
        "Listing {} of {} articles, page {}/{}",
        slice.len(),
        total,
        page,
        total.div_ceil(limit as usize)
    );

    ListingPage {
        pagination: Pagination {
            page,
            limit,
            total,
            count: slice.len(),
        },
        articles: slice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn article(id: &str, category: &str, views: u32, days_ago: i64) -> Article {
        let base = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
        let mut article = Article::new(id, format!("Title {}", id), base - Duration::days(days_ago));
        article.category_id = category.into();
        article.view_count = views;
        article.like_count = views / 10;
        article
    }

    fn ids(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_by_category_ignores_case() {
        let articles = vec![article("a", "Tech", 1, 0), article("b", "news", 1, 1)];
        assert_eq!(ids(&by_category(&articles, "tech")), vec!["a"]);
        assert_eq!(ids(&by_category(&articles, "TECH")), vec!["a"]);
        assert!(by_category(&articles, "gardening").is_empty());
    }

    #[test]
    fn test_by_subcategory_skips_untagged() {
        let mut tagged = article("a", "tech", 1, 0);
        tagged.subcategory_id = Some("AI".into());
        let untagged = article("b", "tech", 1, 0);
        let articles = vec![tagged, untagged];
        assert_eq!(ids(&by_subcategory(&articles, "ai")), vec!["a"]);
    }

    #[test]
    fn test_by_author() {
        let articles = vec![article("a", "tech", 1, 0), article("b", "tech", 1, 0)];
        assert_eq!(ids(&by_author(&articles, "AUTHOR_b")), vec!["b"]);
    }

    #[test]
    fn test_search_blank_query_is_empty() {
        let articles = vec![article("a", "tech", 1, 0)];
        assert!(search(&articles, "").is_empty());
        assert!(search(&articles, "   ").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_and_keeps_order() {
        let mut first = article("a", "tech", 1, 0);
        first.title = "Practical AI".into();
        let mut second = article("b", "tech", 1, 0);
        second.author_name = "Kai Brennan".into();
        let mut third = article("c", "tech", 1, 0);
        third.content = "Nothing relevant here".into();
        let articles = vec![first, second, third];

        let upper = search(&articles, "AI");
        let lower = search(&articles, " ai ");
        assert_eq!(upper, lower);
        assert_eq!(ids(&upper), vec!["a", "b"]);
    }

    #[test]
    fn test_top_by_views_descending_and_truncated() {
        let views = [10, 50, 5, 90, 20];
        let articles: Vec<_> = views
            .iter()
            .enumerate()
            .map(|(i, v)| article(&format!("a{}", i), "tech", *v, 0))
            .collect();

        let top = top_by_views(&articles, 3);
        let counts: Vec<u32> = top.iter().map(|a| a.view_count).collect();
        assert_eq!(counts, vec![90, 50, 20]);
    }

    #[test]
    fn test_top_by_views_is_stable_on_ties() {
        let articles = vec![
            article("first", "tech", 7, 0),
            article("second", "tech", 7, 0),
            article("third", "tech", 9, 0),
        ];
        assert_eq!(ids(&top_by_views(&articles, 10)), vec!["third", "first", "second"]);
    }

    #[test]
    fn test_top_by_likes_limit_larger_than_len() {
        let articles = vec![article("a", "tech", 100, 0), article("b", "tech", 300, 0)];
        assert_eq!(ids(&top_by_likes(&articles, 10)), vec!["b", "a"]);
    }

    #[test]
    fn test_newest() {
        let articles = vec![
            article("old", "tech", 1, 5),
            article("new", "tech", 1, 0),
            article("mid", "tech", 1, 2),
        ];
        assert_eq!(ids(&newest(&articles, 2)), vec!["new", "mid"]);
    }

    #[test]
    fn test_empty_catalog_yields_empty_results() {
        assert!(by_category(&[], "tech").is_empty());
        assert!(search(&[], "ai").is_empty());
        assert!(top_by_views(&[], 3).is_empty());
        assert!(newest(&[], 3).is_empty());
        assert_eq!(listing(&[], None, 1, 20).pagination.total, 0);
    }

    #[test]
    fn test_listing_second_page_of_twelve() {
        // Catalog order is already newest first.
        let articles: Vec<_> = (1..=12)
            .map(|i| article(&format!("a{}", i), "tech", 1, i))
            .collect();

        let page = listing(&articles, None, 2, 5);
        assert_eq!(ids(&page.articles), vec!["a6", "a7", "a8", "a9", "a10"]);
        assert_eq!(
            page.pagination,
            Pagination {
                page: 2,
                limit: 5,
                total: 12,
                count: 5
            }
        );
    }

    #[test]
    fn test_listing_past_end_is_empty() {
        let articles: Vec<_> = (1..=3).map(|i| article(&format!("a{}", i), "tech", 1, i)).collect();
        let page = listing(&articles, None, 4, 2);
        assert!(page.articles.is_empty());
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.count, 0);
    }

    #[test]
    fn test_listing_filters_and_sorts() {
        let articles = vec![
            article("old-tech", "tech", 1, 9),
            article("news", "news", 1, 0),
            article("new-tech", "tech", 1, 1),
        ];
        let page = listing(&articles, Some("TECH"), 1, 20);
        assert_eq!(ids(&page.articles), vec!["new-tech", "old-tech"]);

        let unfiltered = listing(&articles, Some("  "), 1, 20);
        assert_eq!(unfiltered.pagination.total, 3);
    }
}
