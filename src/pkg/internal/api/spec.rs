use serde::Serialize;
use serde_json::Value;

use crate::prelude::Result;

// reads return raw JSON so the normalizer can reconcile key casing before typed decoding
#[async_trait::async_trait]
pub trait ResourceOps {
    async fn fetch_resource(&self, path: &str, token: &str) -> Result<Value>;

    async fn submit_resource<B: Serialize + Sync>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<()>;
}
