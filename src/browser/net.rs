use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;

use crate::{
    error::{NetError, NetResult},
    models::web::HEADERS_DEFAULT,
};

/// GET capability the pipeline is written against. Must be safe to call from many tasks at once.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get_bytes(&self, url: &str, query: &[(&str, &str)]) -> NetResult<Bytes>;
}

#[derive(Clone, Debug)]
pub struct HttpFetcher {
    inner: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> NetResult<Self> {
        let inner = Client::builder()
            .default_headers(HEADERS_DEFAULT.clone())
            .brotli(true)
            .gzip(true)
            .timeout(timeout)
            .build()
            .map_err(|e| NetError::Client(e.to_string()))?;

        Ok(HttpFetcher { inner })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get_bytes(&self, url: &str, query: &[(&str, &str)]) -> NetResult<Bytes> {
        let response = self.inner.get(url)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetError::http_status(status.as_u16(), response.url().to_string()));
        }

        Ok(response.bytes().await?)
    }
}
