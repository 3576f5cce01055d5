use crate::domain::ports::DataSource;
use crate::utils::error::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct FileSource {
    path: String,
}

impl FileSource {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(&self.path).await?)
    }

    fn location(&self) -> &str {
        &self.path
    }
}
