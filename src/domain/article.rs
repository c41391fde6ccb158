use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub category_id: String,
    pub subcategory_id: Option<String>,
    pub author_id: String,
    pub author_name: String,
    pub author_image_url: Option<String>,
    #[serde(rename = "publishDate")]
    published_at: DateTime<Utc>,
    #[serde(default)]
    pub view_count: u32,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub share_count: u32,

    // Client-local state, never on the wire.
    #[serde(skip)]
    pub bookmarked: bool,
    #[serde(skip)]
    pub liked: bool,
    #[serde(skip)]
    pub shared: bool,
    #[serde(skip)]
    pub reading_progress: u8,
    #[serde(skip)]
    pub last_read_at: Option<DateTime<Utc>>,
}

impl Article {
    pub fn new(id: impl Into<String>, title: impl Into<String>, published_at: DateTime<Utc>) -> Self {
        let id = id.into();
        Self {
            author_id: format!("author_{}", id),
            id,
            title: title.into(),
            content: String::new(),
            image_url: None,
            category_id: String::new(),
            subcategory_id: None,
            author_name: String::new(),
            author_image_url: None,
            published_at,
            view_count: 0,
            like_count: 0,
            share_count: 0,
            bookmarked: false,
            liked: false,
            shared: false,
            reading_progress: 0,
            last_read_at: None,
        }
    }

    /// Publish time. Fixed at construction.
    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    pub fn display_author(&self) -> &str {
        if self.author_name.is_empty() {
            "(Unknown author)"
        } else {
            &self.author_name
        }
    }

    /// True when the article has been started but not finished.
    pub fn is_in_progress(&self) -> bool {
        self.reading_progress > 0 && self.reading_progress < 100
    }
}
