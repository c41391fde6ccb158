use chrono::{DateTime, Duration, Utc};
use clap::ValueEnum;

use crate::catalog::query::sort_newest_first;
use crate::domain::Article;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortBy {
    /// Catalog order
    #[default]
    Relevance,
    DateNewest,
    DateOldest,
    /// Most viewed first
    Popularity,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DateRange {
    #[default]
    AllTime,
    Last24Hours,
    LastWeek,
    LastMonth,
    LastYear,
}

impl DateRange {
    pub fn window(self) -> Option<Duration> {
        match self {
            DateRange::AllTime => None,
            DateRange::Last24Hours => Some(Duration::hours(24)),
            DateRange::LastWeek => Some(Duration::days(7)),
            DateRange::LastMonth => Some(Duration::days(30)),
            DateRange::LastYear => Some(Duration::days(365)),
        }
    }
}

/// Narrowing and ordering applied on top of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub sort_by: SortBy,
    pub date_range: DateRange,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

impl SearchFilters {
    pub fn has_active_filters(&self) -> bool {
        self.sort_by != SortBy::Relevance
            || self.date_range != DateRange::AllTime
            || self.category.is_some()
            || self.subcategory.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn apply(&self, articles: &[Article], now: DateTime<Utc>) -> Vec<Article> {
        let window = self.date_range.window();

        let mut filtered: Vec<Article> = articles
            .iter()
            .filter(|a| {
                self.category
                    .as_deref()
                    .is_none_or(|c| a.category_id.eq_ignore_ascii_case(c))
            })
            .filter(|a| {
                self.subcategory.as_deref().is_none_or(|s| {
                    a.subcategory_id
                        .as_deref()
                        .is_some_and(|tag| tag.eq_ignore_ascii_case(s))
                })
            })
            .filter(|a| window.is_none_or(|w| now - a.published_at() <= w))
            .cloned()
            .collect();

        match self.sort_by {
            SortBy::Relevance => {}
            SortBy::DateNewest => sort_newest_first(&mut filtered),
            SortBy::DateOldest => filtered.sort_by_key(|a| a.published_at()),
            SortBy::Popularity => filtered.sort_by(|a, b| b.view_count.cmp(&a.view_count)),
        }

        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn article(id: &str, category: &str, sub: &str, views: u32, days_ago: i64) -> Article {
        let mut article = Article::new(id, id, now() - Duration::days(days_ago));
        article.category_id = category.into();
        article.subcategory_id = Some(sub.into());
        article.view_count = views;
        article
    }

    fn fixture() -> Vec<Article> {
        vec![
            article("a", "tech", "ai", 10, 3),
            article("b", "news", "world", 90, 0),
            article("c", "tech", "web", 50, 40),
            article("d", "tech", "ai", 5, 400),
        ]
    }

    fn ids(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_default_keeps_order_and_everything() {
        let filters = SearchFilters::default();
        assert!(!filters.has_active_filters());
        assert_eq!(ids(&filters.apply(&fixture(), now())), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_category_and_subcategory() {
        let filters = SearchFilters {
            category: Some("TECH".into()),
            subcategory: Some("ai".into()),
            ..Default::default()
        };
        assert!(filters.has_active_filters());
        assert_eq!(ids(&filters.apply(&fixture(), now())), vec!["a", "d"]);
    }

    #[test]
    fn test_date_ranges() {
        let mut filters = SearchFilters {
            date_range: DateRange::LastWeek,
            ..Default::default()
        };
        assert_eq!(ids(&filters.apply(&fixture(), now())), vec!["a", "b"]);

        filters.date_range = DateRange::LastYear;
        assert_eq!(ids(&filters.apply(&fixture(), now())), vec!["a", "b", "c"]);

        filters.date_range = DateRange::Last24Hours;
        assert_eq!(ids(&filters.apply(&fixture(), now())), vec!["b"]);
    }

    #[test]
    fn test_sorting() {
        let mut filters = SearchFilters {
            sort_by: SortBy::Popularity,
            ..Default::default()
        };
        assert_eq!(ids(&filters.apply(&fixture(), now())), vec!["b", "c", "a", "d"]);

        filters.sort_by = SortBy::DateNewest;
        assert_eq!(ids(&filters.apply(&fixture(), now())), vec!["b", "a", "c", "d"]);

        filters.sort_by = SortBy::DateOldest;
        assert_eq!(ids(&filters.apply(&fixture(), now())), vec!["d", "c", "a", "b"]);
    }

    #[test]
    fn test_clear_resets() {
        let mut filters = SearchFilters {
            sort_by: SortBy::DateOldest,
            category: Some("tech".into()),
            ..Default::default()
        };
        filters.clear();
        assert_eq!(filters, SearchFilters::default());
    }
}
