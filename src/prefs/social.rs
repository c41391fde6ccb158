use std::sync::Arc;

use crate::app::Result;
use crate::domain::Article;
use crate::prefs::Preferences;
use crate::store::Store;

const NAMESPACE: &str = "social_interactions";

/// Likes and shares recorded on this device.
///
/// Counts start from whatever the article carried when it was first liked
/// or shared and are kept locally from then on.
pub struct SocialService<S> {
    prefs: Preferences<S>,
}

impl<S: Store> SocialService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            prefs: Preferences::new(store, NAMESPACE),
        }
    }

    pub fn is_liked(&self, article_id: &str) -> Result<bool> {
        self.prefs.bool(&format!("liked_{}", article_id))
    }

    pub fn is_shared(&self, article_id: &str) -> Result<bool> {
        self.prefs.bool(&format!("shared_{}", article_id))
    }

    /// Flip the like on `article`. Returns whether it is now liked.
    pub fn toggle_like(&self, article: &mut Article) -> Result<bool> {
        let count_key = format!("like_count_{}", article.id);
        let liked = !self.is_liked(&article.id)?;
        let count = self
            .prefs
            .i64(&count_key)?
            .unwrap_or(i64::from(article.like_count));
        let count = if liked { count + 1 } else { (count - 1).max(0) };

        self.prefs.set_bool(&format!("liked_{}", article.id), liked)?;
        self.prefs.set_i64(&count_key, count)?;

        article.liked = liked;
        article.like_count = clamp_count(count);
        Ok(liked)
    }

    /// Count a share of `article`. Only the first share per device counts.
    /// Returns whether this call was counted.
    pub fn record_share(&self, article: &mut Article) -> Result<bool> {
        if self.is_shared(&article.id)? {
            self.apply(article)?;
            return Ok(false);
        }

        let count_key = format!("share_count_{}", article.id);
        let count = self
            .prefs
            .i64(&count_key)?
            .unwrap_or(i64::from(article.share_count))
            + 1;

        self.prefs.set_bool(&format!("shared_{}", article.id), true)?;
        self.prefs.set_i64(&count_key, count)?;

        article.shared = true;
        article.share_count = clamp_count(count);
        Ok(true)
    }

    /// Overlay stored flags and counts onto `article`.
    pub fn apply(&self, article: &mut Article) -> Result<()> {
        article.liked = self.is_liked(&article.id)?;
        article.shared = self.is_shared(&article.id)?;
        if let Some(count) = self.prefs.i64(&format!("like_count_{}", article.id))? {
            article.like_count = clamp_count(count);
        }
        if let Some(count) = self.prefs.i64(&format!("share_count_{}", article.id))? {
            article.share_count = clamp_count(count);
        }
        Ok(())
    }

    pub fn reset(&self) -> Result<()> {
        self.prefs.clear()
    }
}

fn clamp_count(count: i64) -> u32 {
    u32::try_from(count.max(0)).unwrap_or(u32::MAX)
}
