use crate::domain::ports::DataSource;
use crate::utils::error::{Result, TravelError};
use async_trait::async_trait;
use reqwest::Client;

/// Reads the dataset with a single GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        tracing::debug!("Dataset response status: {}", status);

        if !status.is_success() {
            return Err(TravelError::StatusError {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn location(&self) -> &str {
        &self.url
    }
}
