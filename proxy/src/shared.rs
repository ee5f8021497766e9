use actix_web::middleware::DefaultHeaders;
use common::catalog::DataType;
use common::config::AppConfig;
use serde_json::Value;

use crate::error::ProxyError;

/// CORS headers attached to every response under the proxy scope, including
/// preflights, extractor failures and method mismatches.
pub fn cors_headers(config: &AppConfig) -> DefaultHeaders {
    DefaultHeaders::new()
        .add((
            "Access-Control-Allow-Origin",
            config.cors_allow_origin.clone(),
        ))
        .add((
            "Access-Control-Allow-Headers",
            config.cors_allow_headers.clone(),
        ))
        .add(("Access-Control-Allow-Methods", "POST, OPTIONS"))
}

/// Accept an integer or a string of digits; the dashboard form posts ids as text.
pub fn parse_store_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn parse_data_type(value: &Value) -> Result<DataType, ProxyError> {
    let raw = value
        .as_str()
        .ok_or_else(|| ProxyError::BadRequest("data_type must be a string".to_string()))?;
    raw.parse::<DataType>()
        .map_err(|e| ProxyError::BadRequest(e.to_string()))
}

/// Look up a required, non-null member of a JSON object.
pub fn required<'a>(body: &'a Value, field: &str) -> Option<&'a Value> {
    body.get(field).filter(|v| !v.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn store_id_from_number_or_string() {
        assert_eq!(parse_store_id(&json!(7)), Some(7));
        assert_eq!(parse_store_id(&json!(" 12 ")), Some(12));
        assert_eq!(parse_store_id(&json!(1.5)), None);
        assert_eq!(parse_store_id(&json!("abc")), None);
        assert_eq!(parse_store_id(&json!(true)), None);
    }

    #[test]
    fn data_type_must_be_known_string() {
        assert_eq!(parse_data_type(&json!("orders")).unwrap(), DataType::Orders);
        assert!(matches!(
            parse_data_type(&json!("refunds")),
            Err(ProxyError::BadRequest(_))
        ));
        assert!(matches!(
            parse_data_type(&json!(3)),
            Err(ProxyError::BadRequest(_))
        ));
    }

    #[test]
    fn null_members_count_as_missing() {
        let body = json!({"store_id": null, "data_type": "orders"});
        assert!(required(&body, "store_id").is_none());
        assert!(required(&body, "data_type").is_some());
        assert!(required(&json!([1, 2]), "store_id").is_none());
    }
}
