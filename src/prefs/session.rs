use std::sync::Arc;

use chrono::Utc;

use crate::app::Result;
use crate::domain::UserProfile;
use crate::prefs::Preferences;
use crate::store::Store;

const NAMESPACE: &str = "session";
const KEY_USER: &str = "user";
const KEY_LOGGED_IN: &str = "is_logged_in";
const KEY_LOGIN_AT: &str = "login_at";

pub struct SessionService<S> {
    prefs: Preferences<S>,
}

impl<S: Store> SessionService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            prefs: Preferences::new(store, NAMESPACE),
        }
    }

    pub fn create_login_session(&self, user: &UserProfile) -> Result<()> {
        self.prefs.set_json(KEY_USER, user)?;
        self.prefs.set_string(KEY_LOGIN_AT, &Utc::now().to_rfc3339())?;
        self.prefs.set_bool(KEY_LOGGED_IN, true)?;
        tracing::info!("Logged in as {}", user.email);
        Ok(())
    }

    pub fn is_logged_in(&self) -> Result<bool> {
        self.prefs.bool(KEY_LOGGED_IN)
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Result<Option<UserProfile>> {
        if !self.is_logged_in()? {
            return Ok(None);
        }
        self.prefs.json(KEY_USER)
    }

    pub fn logout(&self) -> Result<()> {
        self.prefs.clear()
    }
}
