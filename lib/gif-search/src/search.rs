use crate::{APIConfig, Error, Result, SearchResponse};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GifSearch {
    pub config: APIConfig,
    client: Client,
}

impl GifSearch {
    pub fn new(config: APIConfig) -> Result<GifSearch> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(GifSearch { config, client })
    }

    /// Search url with the query, credentials and an optional result limit.
    /// An empty limit is left out, as the upstream then uses its default.
    pub fn url(&self, query: &str, limit: Option<&str>) -> Result<Url> {
        let base = format!("{}/search", self.config.api_base_url.trim_end_matches('/'));

        let mut params = vec![
            ("q", query),
            ("key", self.config.api_key.as_str()),
            ("client_key", self.config.client_key.as_str()),
        ];

        if let Some(limit) = limit.map(str::trim).filter(|l| !l.is_empty()) {
            params.push(("limit", limit));
        }

        Url::parse_with_params(&base, &params).map_err(|e| Error::InvalidUrl {
            url: base.clone(),
            reason: e.to_string(),
        })
    }

    /// Query the upstream and keep every failure kind apart.
    pub async fn fetch(&self, query: &str, limit: Option<&str>) -> Result<Vec<Value>> {
        let url = self.url(query, limit)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Status(status));
        }

        let body = response.json::<SearchResponse>().await?;
        Ok(body.results)
    }

    /// Query the upstream; any failure yields an empty list.
    pub async fn search(&self, query: &str, limit: Option<&str>) -> Vec<Value> {
        match self.fetch(query, limit).await {
            Ok(results) => {
                log::debug!("gif search {query:?}: {} results", results.len());
                results
            }
            Err(e) => {
                log::warn!("gif search {query:?} failed: {e}");
                vec![]
            }
        }
    }
}
