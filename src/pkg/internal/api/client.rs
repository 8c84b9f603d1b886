use serde::Serialize;
use serde_json::Value;
use standard_error::{Interpolate, StandardError};

use crate::{conf::settings, prelude::Result};

use super::spec::ResourceOps;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Result<Self> {
        ApiClient::with_base_url(&settings.api_base_url)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!(
                "{}/{}",
                settings.service_name,
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| StandardError::new("ERR-HTTP-000").interpolate_err(e.to_string()))?;
        Ok(ApiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl ResourceOps for ApiClient {
    async fn fetch_resource(&self, path: &str, token: &str) -> Result<Value> {
        let url = self.url(path);
        tracing::debug!("fetching {}", &url);
        let res = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| StandardError::new("ERR-HTTP-001").interpolate_err(e.to_string()))?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::error!("fetch {} failed: {} {}", &url, &status, &body);
            return Err(StandardError::new(&format!(
                "ERR-HTTP-002: status {} body {}",
                status.as_u16(),
                body
            )));
        }
        let payload = res
            .json::<Value>()
            .await
            .map_err(|e| StandardError::new("ERR-DECODE-001").interpolate_err(e.to_string()))?;
        Ok(payload)
    }

    async fn submit_resource<B: Serialize + Sync>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<()> {
        let url = self.url(path);
        tracing::debug!("submitting to {}", &url);
        let res = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(|e| StandardError::new("ERR-HTTP-001").interpolate_err(e.to_string()))?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::error!("submit to {} failed: {} {}", &url, &status, &body);
            return Err(StandardError::new(&format!(
                "ERR-HTTP-003: status {} body {}",
                status.as_u16(),
                body
            )));
        }
        Ok(())
    }
}
