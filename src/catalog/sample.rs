//! Fixed sample catalog used when no backend is reachable.
//!
//! Generation is pure data construction: the same call always yields the
//! same articles, anchored at [`ANCHOR`] and stepping back one or more days
//! per entry.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::{Article, Category};

pub const CATEGORY_TECH: &str = "tech";
pub const CATEGORY_HEALTH: &str = "health";
pub const CATEGORY_LIFESTYLE: &str = "lifestyle";
pub const CATEGORY_BUSINESS: &str = "business";
pub const CATEGORY_SPORTS: &str = "sports";
pub const CATEGORY_NEWS: &str = "news";

const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
    Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. \
    Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris.";

const IMAGE_BASE: &str = "https://example.com/images/";
const AUTHOR_IMAGE_BASE: &str = "https://example.com/authors/";

struct Entry {
    id: &'static str,
    title: &'static str,
    author: &'static str,
    image: &'static str,
    views: u32,
    category: &'static str,
    subcategory: &'static str,
    days_ago: i64,
}

const ENTRIES: &[Entry] = &[
    Entry { id: "tech1", title: "The Future of AI in Android Development", author: "Alex Johnson", image: "ai_android.jpg", views: 1250, category: CATEGORY_TECH, subcategory: "android", days_ago: 0 },
    Entry { id: "tech2", title: "Android 14: New Features and Updates", author: "Maria Garcia", image: "android_14.jpg", views: 980, category: CATEGORY_TECH, subcategory: "android", days_ago: 1 },
    Entry { id: "tech3", title: "iOS 17: What's New for Developers", author: "James Wilson", image: "ios17.jpg", views: 1100, category: CATEGORY_TECH, subcategory: "ios", days_ago: 2 },
    Entry { id: "tech4", title: "Building Your First SwiftUI App", author: "Sarah Chen", image: "swiftui.jpg", views: 850, category: CATEGORY_TECH, subcategory: "ios", days_ago: 3 },
    Entry { id: "tech5", title: "Building Scalable Web Applications in 2023", author: "David Kim", image: "web_dev.jpg", views: 1320, category: CATEGORY_TECH, subcategory: "web", days_ago: 4 },
    Entry { id: "tech6", title: "React vs Vue vs Angular in 2023", author: "Emma Davis", image: "frameworks.jpg", views: 1500, category: CATEGORY_TECH, subcategory: "web", days_ago: 5 },
    Entry { id: "tech7", title: "The Future of AI in Mobile Development", author: "Alex Johnson", image: "ai_mobile.jpg", views: 2100, category: CATEGORY_TECH, subcategory: "ai", days_ago: 6 },
    Entry { id: "tech8", title: "Getting Started with Machine Learning", author: "Robert Taylor", image: "ml_basics.jpg", views: 1750, category: CATEGORY_TECH, subcategory: "ai", days_ago: 7 },
    Entry { id: "health1", title: "10 Essential Exercises for Home Workouts", author: "Dr. Michael Brown", image: "home_workout.jpg", views: 1530, category: CATEGORY_HEALTH, subcategory: "fitness", days_ago: 8 },
    Entry { id: "health2", title: "The Science of Intermittent Fasting", author: "Dr. Emily Wilson", image: "nutrition.jpg", views: 2100, category: CATEGORY_HEALTH, subcategory: "nutrition", days_ago: 10 },
    Entry { id: "sport1", title: "Local Team Wins Championship in Overtime Thriller", author: "John Sportsman", image: "football_championship.jpg", views: 3200, category: CATEGORY_SPORTS, subcategory: "football", days_ago: 11 },
    Entry { id: "sport2", title: "NBA Season Preview: Top Teams to Watch", author: "Jane Hooper", image: "nba_preview.jpg", views: 2750, category: CATEGORY_SPORTS, subcategory: "basketball", days_ago: 12 },
    Entry { id: "news1", title: "Global Leaders Sign Historic Climate Agreement", author: "Global News Network", image: "climate_summit.jpg", views: 4100, category: CATEGORY_NEWS, subcategory: "world", days_ago: 13 },
    Entry { id: "news2", title: "New Economic Policy Aims to Boost Local Businesses", author: "Financial Times", image: "economic_policy.jpg", views: 1870, category: CATEGORY_NEWS, subcategory: "economy", days_ago: 14 },
    Entry { id: "health3", title: "Mindfulness Habits That Actually Stick", author: "Dr. Priya Nair", image: "mindfulness.jpg", views: 1420, category: CATEGORY_HEALTH, subcategory: "mental health", days_ago: 15 },
    Entry { id: "lifestyle1", title: "A Week in Lisbon on a Budget", author: "Sofia Martins", image: "lisbon.jpg", views: 1180, category: CATEGORY_LIFESTYLE, subcategory: "travel", days_ago: 16 },
    Entry { id: "lifestyle2", title: "Five Weeknight Dinners Under 30 Minutes", author: "Marco Rossi", image: "dinners.jpg", views: 1640, category: CATEGORY_LIFESTYLE, subcategory: "food", days_ago: 17 },
    Entry { id: "lifestyle3", title: "Capsule Wardrobes: Less Is More", author: "Chloe Martin", image: "capsule.jpg", views: 720, category: CATEGORY_LIFESTYLE, subcategory: "fashion", days_ago: 18 },
    Entry { id: "business1", title: "Index Funds for First-Time Investors", author: "Daniel Osei", image: "index_funds.jpg", views: 1950, category: CATEGORY_BUSINESS, subcategory: "finance", days_ago: 19 },
    Entry { id: "business2", title: "What Rising Rates Mean for Small Businesses", author: "Financial Times", image: "rates.jpg", views: 1330, category: CATEGORY_BUSINESS, subcategory: "economy", days_ago: 20 },
    Entry { id: "sport3", title: "Inside the Tennis Season's Biggest Upset", author: "Laura Fischer", image: "tennis_upset.jpg", views: 2240, category: CATEGORY_SPORTS, subcategory: "tennis", days_ago: 21 },
    Entry { id: "news3", title: "Parliament Debates New Data Privacy Bill", author: "Global News Network", image: "privacy_bill.jpg", views: 2580, category: CATEGORY_NEWS, subcategory: "politics", days_ago: 22 },
];

/// Publish time of the newest sample article.
pub fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

pub fn generate_articles() -> Vec<Article> {
    let anchor = anchor();
    ENTRIES
        .iter()
        .map(|entry| build(entry, anchor - Duration::days(entry.days_ago)))
        .collect()
}

pub fn generate_categories() -> Vec<Category> {
    vec![
        Category::new(CATEGORY_TECH, "Technology", &["android", "ios", "web", "ai"]),
        Category::new(CATEGORY_HEALTH, "Health", &["fitness", "nutrition", "mental health"]),
        Category::new(CATEGORY_LIFESTYLE, "Lifestyle", &["travel", "food", "fashion"]),
        Category::new(CATEGORY_BUSINESS, "Business", &["finance", "economy"]),
        Category::new(CATEGORY_SPORTS, "Sports", &["football", "basketball", "tennis"]),
        Category::new(CATEGORY_NEWS, "News", &["world", "politics", "economy"]),
    ]
}

fn build(entry: &Entry, published_at: DateTime<Utc>) -> Article {
    let mut article = Article::new(entry.id, entry.title, published_at);
    article.content = LOREM_IPSUM.to_string();
    article.image_url = Some(format!("{}{}", IMAGE_BASE, entry.image));
    article.category_id = entry.category.to_string();
    article.subcategory_id = Some(entry.subcategory.to_string());
    article.author_name = entry.author.to_string();
    article.author_image_url = Some(format!(
        "{}{}.jpg",
        AUTHOR_IMAGE_BASE,
        entry.author.to_lowercase().replace(' ', "_")
    ));
    article.view_count = entry.views;
    article.like_count = entry.views / 10;
    article
}
