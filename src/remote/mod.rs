pub mod fake_source;
pub mod faults;
pub mod http_source;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::Article;

pub use fake_source::FakeSource;
pub use faults::FaultInjector;
pub use http_source::HttpSource;

/// A backend that serves articles over some transport.
///
/// Absence is not an error: an unknown id is `Ok(None)` and an empty
/// category is `Ok(vec![])`.
#[async_trait]
pub trait RemoteSource {
    async fn articles(&self, category: Option<&str>, page: u32, limit: u32) -> Result<Vec<Article>>;

    async fn article(&self, id: &str) -> Result<Option<Article>>;
}
