use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::app::Result;
use crate::domain::{Article, ReadingStats};
use crate::prefs::Preferences;
use crate::store::Store;

const NAMESPACE: &str = "reading_progress";

// One prefix per field, id last, so no id can spell another article's key.
const PROGRESS_PREFIX: &str = "progress/";
const LAST_READ_PREFIX: &str = "last_read/";
const IN_PROGRESS_PREFIX: &str = "in_progress/";

fn progress_key(id: &str) -> String {
    format!("{}{}", PROGRESS_PREFIX, id)
}

fn last_read_key(id: &str) -> String {
    format!("{}{}", LAST_READ_PREFIX, id)
}

fn in_progress_key(id: &str) -> String {
    format!("{}{}", IN_PROGRESS_PREFIX, id)
}

pub struct ReadingProgressService<S> {
    prefs: Preferences<S>,
}

impl<S: Store> ReadingProgressService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            prefs: Preferences::new(store, NAMESPACE),
        }
    }

    /// Store `percent` (clamped to 0-100) for `article` and stamp it as read now.
    pub fn save(&self, article: &mut Article, percent: i64) -> Result<()> {
        let percent = percent.clamp(0, 100);
        let now = Utc::now();

        self.prefs.set_i64(&progress_key(&article.id), percent)?;
        self.prefs.set_string(&last_read_key(&article.id), &now.to_rfc3339())?;
        self.prefs
            .set_bool(&in_progress_key(&article.id), percent > 0 && percent < 100)?;

        article.reading_progress = percent as u8;
        article.last_read_at = Some(now);
        tracing::debug!("Saved {}% progress on {}", percent, article.id);
        Ok(())
    }

    pub fn progress(&self, article_id: &str) -> Result<u8> {
        Ok(self
            .prefs
            .i64(&progress_key(article_id))?
            .map_or(0, |p| p.clamp(0, 100) as u8))
    }

    pub fn last_read_at(&self, article_id: &str) -> Result<Option<DateTime<Utc>>> {
        Ok(self
            .prefs
            .string(&last_read_key(article_id))?
            .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
            .map(|dt| dt.with_timezone(&Utc)))
    }

    /// Load stored progress onto `article`.
    pub fn apply(&self, article: &mut Article) -> Result<()> {
        article.reading_progress = self.progress(&article.id)?;
        article.last_read_at = self.last_read_at(&article.id)?;
        Ok(())
    }

    /// Started but unfinished articles, most recently read first.
    pub fn continue_reading(&self, articles: &[Article]) -> Result<Vec<Article>> {
        let mut started = Vec::new();
        for article in articles {
            let mut article = article.clone();
            self.apply(&mut article)?;
            if article.is_in_progress() {
                started.push(article);
            }
        }
        started.sort_by(|a, b| b.last_read_at.cmp(&a.last_read_at));
        Ok(started)
    }

    pub fn mark_completed(&self, article: &mut Article) -> Result<()> {
        self.save(article, 100)
    }

    pub fn clear(&self, article_id: &str) -> Result<()> {
        self.prefs.remove(&progress_key(article_id))?;
        self.prefs.remove(&last_read_key(article_id))?;
        self.prefs.remove(&in_progress_key(article_id))
    }

    pub fn stats(&self) -> Result<ReadingStats> {
        let mut stats = ReadingStats::default();
        for (key, value) in self.prefs.entries()? {
            if !key.starts_with(PROGRESS_PREFIX) {
                continue;
            }
            let Ok(percent) = value.parse::<i64>() else {
                continue;
            };
            if percent > 0 {
                stats.started += 1;
            }
            if percent >= 100 {
                stats.completed += 1;
            }
        }
        Ok(stats)
    }
}
