use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::app::{NewsdeskError, Result};
use crate::catalog::ListingPage;
use crate::domain::Article;
use crate::remote::RemoteSource;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the `/articles` JSON API.
pub struct HttpSource {
    client: Client,
    base_url: Url,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(NewsdeskError::Config(format!(
                "Base URL cannot carry paths: {}",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("newsdesk/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| NewsdeskError::Config(format!("Invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn remote_error(response: reqwest::Response) -> NewsdeskError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        NewsdeskError::Remote { status, message }
    }
}

#[async_trait]
impl RemoteSource for HttpSource {
    async fn articles(&self, category: Option<&str>, page: u32, limit: u32) -> Result<Vec<Article>> {
        let mut url = self.endpoint(&["articles"])?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(category) = category {
                query.append_pair("category", category);
            }
            query.append_pair("page", &page.to_string());
            query.append_pair("limit", &limit.to_string());
        }

        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Self::remote_error(response).await);
        }

        let listing: ListingPage = response.json().await?;
        Ok(listing.articles)
    }

    async fn article(&self, id: &str) -> Result<Option<Article>> {
        let url = self.endpoint(&["articles", id])?;

        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::remote_error(response).await);
        }

        Ok(Some(response.json().await?))
    }
}
