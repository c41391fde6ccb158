use std::sync::Arc;

use crate::app::Result;
use crate::domain::ThemeMode;
use crate::prefs::Preferences;
use crate::store::Store;

const NAMESPACE: &str = "theme";
const KEY_MODE: &str = "theme_mode";

pub struct ThemeService<S> {
    prefs: Preferences<S>,
}

impl<S: Store> ThemeService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            prefs: Preferences::new(store, NAMESPACE),
        }
    }

    /// Saved theme, or [`ThemeMode::System`] when nothing usable is stored.
    pub fn current(&self) -> Result<ThemeMode> {
        let Some(raw) = self.prefs.string(KEY_MODE)? else {
            return Ok(ThemeMode::default());
        };
        Ok(raw.parse().unwrap_or_else(|e| {
            tracing::warn!("{}, using system theme", e);
            ThemeMode::System
        }))
    }

    pub fn save(&self, mode: ThemeMode) -> Result<()> {
        self.prefs.set_string(KEY_MODE, mode.as_str())
    }
}
