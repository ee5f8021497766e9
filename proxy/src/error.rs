use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::{json, Value};

/// Every way a proxy invocation can fail. Rendered as
/// `{"error": string, "details"?: any}` only at the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// Transport failure (`status` is `None`) or a non-2xx upstream reply.
    #[error("{}", upstream_message(.status))]
    Upstream { status: Option<u16>, body: String },

    /// The upstream accepted the call but returned GraphQL `errors`.
    #[error("Shopify API returned GraphQL errors")]
    GraphQl(Value),

    #[error("{0}")]
    Internal(String),
}

fn upstream_message(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("Shopify API error: {}", code),
        None => "Failed to reach Shopify API".to_string(),
    }
}

impl ProxyError {
    pub fn kind(&self) -> &'static str {
        match self {
            ProxyError::BadRequest(_) => "bad_request",
            ProxyError::NotFound(_) => "not_found",
            ProxyError::Upstream { .. } => "upstream_error",
            ProxyError::GraphQl(_) => "graphql_error",
            ProxyError::Internal(_) => "internal",
        }
    }

    pub fn details(&self) -> Option<Value> {
        match self {
            ProxyError::Upstream { body, .. } => Some(Value::String(body.clone())),
            ProxyError::GraphQl(errors) => Some(errors.clone()),
            _ => None,
        }
    }

    pub fn envelope(&self) -> Value {
        let mut body = json!({ "error": self.to_string() });
        if let Some(details) = self.details() {
            body["details"] = details;
        }
        body
    }
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::NotFound(_) => StatusCode::NOT_FOUND,
            // Mirror upstream error statuses; anything else (no status, 1xx-3xx) is a bad gateway.
            ProxyError::Upstream { status, .. } => status
                .and_then(|s| StatusCode::from_u16(s).ok())
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            ProxyError::GraphQl(_) | ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.envelope())
    }
}
