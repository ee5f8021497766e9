use common::models::Store;
use serde_json::json;
use sqlx::SqlitePool;

/// Header carrying the store's Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Build the GraphQL Admin API endpoint for a store domain.
pub fn build_endpoint(domain: &str, api_version: &str) -> String {
    format!("https://{}/admin/api/{}/graphql.json", domain, api_version)
}

/// Read-only lookup of store credentials.
#[allow(async_fn_in_trait)]
pub trait CredentialStore {
    async fn find_store(&self, id: i64) -> anyhow::Result<Option<Store>>;
}

impl CredentialStore for SqlitePool {
    async fn find_store(&self, id: i64) -> anyhow::Result<Option<Store>> {
        db::get_store(self, id).await
    }
}

/// Buffered upstream reply. Status and body are kept raw so failures can be
/// relayed verbatim.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

/// One POST of a GraphQL document to a store endpoint. An `Err` means the
/// call never produced an HTTP status.
#[allow(async_fn_in_trait)]
pub trait Upstream {
    async fn post_graphql(
        &self,
        endpoint: &str,
        access_token: &str,
        query: &str,
    ) -> anyhow::Result<UpstreamReply>;
}

impl Upstream for reqwest::Client {
    async fn post_graphql(
        &self,
        endpoint: &str,
        access_token: &str,
        query: &str,
    ) -> anyhow::Result<UpstreamReply> {
        let body = serde_json::to_vec(&json!({ "query": query }))?;
        let response = self
            .post(endpoint)
            .header(ACCESS_TOKEN_HEADER, access_token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => format!("Failed to read response body: {}", e),
        };
        Ok(UpstreamReply { status, body })
    }
}
