use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// Shared HTTP client; clones reuse one connection pool
#[derive(Clone)]
pub struct ApiHttpClient {
    client: Client,
}

impl ApiHttpClient {
    pub fn new(user_agent: &str, timeout_secs: Option<u64>) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    /// GET `url` and return the body as text, whatever the status code
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.send_get_request(url).await?;
        response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))
    }

    fn build_client(user_agent: &str, timeout_secs: Option<u64>) -> Result<Client> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build().context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))
    }
}
