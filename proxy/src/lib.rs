pub mod error;
pub(crate) mod shared;
pub mod upstream;

use actix_web::{http::Method, web, HttpResponse};
use common::catalog::DataType;
use common::config::AppConfig;
use common::models::Store;
use serde_json::Value;

pub use error::ProxyError;
pub use upstream::{build_endpoint, CredentialStore, Upstream, UpstreamReply};

/// A validated proxy invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyRequest {
    pub store_id: i64,
    pub data_type: DataType,
}

impl ProxyRequest {
    /// Validate a raw request body. Nothing is looked up here.
    pub fn from_body(body: &[u8]) -> Result<Self, ProxyError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|_| ProxyError::BadRequest("Request body must be a JSON object".to_string()))?;
        let (Some(store_id), Some(data_type)) = (
            shared::required(&value, "store_id"),
            shared::required(&value, "data_type"),
        ) else {
            return Err(ProxyError::BadRequest(
                "store_id and data_type are required".to_string(),
            ));
        };
        let store_id = shared::parse_store_id(store_id)
            .ok_or_else(|| ProxyError::BadRequest("store_id must be an integer".to_string()))?;
        let data_type = shared::parse_data_type(data_type)?;
        Ok(Self {
            store_id,
            data_type,
        })
    }
}

/// Resolve the store's credentials, run the canned query for the requested
/// data type and return the upstream `data` member.
pub async fn fetch_store_data<S, U>(
    credentials: &S,
    upstream: &U,
    config: &AppConfig,
    request: &ProxyRequest,
) -> Result<Value, ProxyError>
where
    S: CredentialStore,
    U: Upstream,
{
    let store = credentials
        .find_store(request.store_id)
        .await
        .map_err(|e| ProxyError::Internal(format!("Failed to load store: {}", e)))?
        .ok_or_else(|| ProxyError::NotFound(format!("Store {} not found", request.store_id)))?;

    query_store(upstream, config, &store, request.data_type).await
}

/// Run the canned query for `data_type` against a store whose credentials are
/// already loaded.
pub async fn query_store<U: Upstream>(
    upstream: &U,
    config: &AppConfig,
    store: &Store,
    data_type: DataType,
) -> Result<Value, ProxyError> {
    let endpoint = build_endpoint(&store.domain, &config.api_version);
    log::info!("{} {} -> {}", store.name, data_type, endpoint);

    let reply = upstream
        .post_graphql(&endpoint, &store.access_token, data_type.query())
        .await
        .map_err(|e| ProxyError::Upstream {
            status: None,
            body: format!("{:#}", e),
        })?;

    if !(200..300).contains(&reply.status) {
        return Err(ProxyError::Upstream {
            status: Some(reply.status),
            body: reply.body,
        });
    }

    let mut payload: Value = serde_json::from_str(&reply.body)
        .map_err(|e| ProxyError::Internal(format!("Invalid JSON from Shopify API: {}", e)))?;

    if let Some(errors) = payload.get("errors").filter(|e| has_errors(e)) {
        return Err(ProxyError::GraphQl(errors.clone()));
    }

    match payload.get_mut("data").map(Value::take) {
        Some(data) if !data.is_null() => Ok(data),
        _ => Err(ProxyError::Internal(
            "Shopify API response contained no data".to_string(),
        )),
    }
}

fn has_errors(errors: &Value) -> bool {
    match errors {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

pub async fn proxy_handler<S, U>(
    body: web::Bytes,
    credentials: web::Data<S>,
    upstream: web::Data<U>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ProxyError>
where
    S: CredentialStore + 'static,
    U: Upstream + 'static,
{
    let result = match ProxyRequest::from_body(&body) {
        Ok(request) => {
            fetch_store_data(
                credentials.get_ref(),
                upstream.get_ref(),
                config.get_ref(),
                &request,
            )
            .await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(data) => Ok(HttpResponse::Ok().json(data)),
        Err(e) => {
            log::warn!("proxy {}: {}", e.kind(), e);
            Err(e)
        }
    }
}

/// CORS preflight acknowledgement. Headers come from the scope middleware.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

/// Mount the proxy function at `/functions/v1/shopify-proxy`.
///
/// `S` and `U` must be registered as `web::Data` on the app.
pub fn configure<S, U>(cfg: &mut web::ServiceConfig, config: &AppConfig)
where
    S: CredentialStore + 'static,
    U: Upstream + 'static,
{
    cfg.service(
        web::scope("/functions/v1")
            .wrap(shared::cors_headers(config))
            .service(
                web::resource("/shopify-proxy")
                    .route(web::method(Method::OPTIONS).to(preflight))
                    .route(web::post().to(proxy_handler::<S, U>)),
            ),
    );
}
