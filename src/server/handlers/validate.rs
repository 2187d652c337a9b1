//! IPv4 validation handler.

use axum::{body::Bytes, Json};
use serde_json::Value;

use super::super::types::ValidateResponse;
use crate::error_handling::ApiError;
use crate::validation::is_valid_ipv4;

/// `POST /v1/tools/validate` with a JSON body `{"ip": "..."}`.
///
/// The body is parsed here rather than through the `Json` extractor so that
/// malformed JSON and a missing `Content-Type` both answer 400.
pub async fn validate_handler(body: Bytes) -> Result<Json<ValidateResponse>, ApiError> {
    let ip = extract_ip(&body)?;
    Ok(Json(ValidateResponse {
        status: is_valid_ipv4(&ip),
    }))
}

/// Pulls the `ip` field out of a request body.
///
/// Absent, `null`, `false`, `0` and `""` all count as missing.
fn extract_ip(body: &[u8]) -> Result<String, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::missing_parameter("ip"));
    }
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| ApiError::Validation("Malformed JSON body".to_string()))?;

    match value.get("ip") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(ApiError::missing_parameter("ip")),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(ApiError::missing_parameter("ip")),
        Some(Value::String(ip)) if ip.is_empty() => Err(ApiError::missing_parameter("ip")),
        Some(Value::String(ip)) => Ok(ip.clone()),
        Some(_) => Err(ApiError::Validation(
            "Invalid parameter: ip must be a string".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<String, ApiError>) -> String {
        result.expect_err("expected a validation error").to_string()
    }

    #[test]
    fn test_extract_ip_string() {
        assert_eq!(extract_ip(br#"{"ip":"10.0.0.1"}"#).unwrap(), "10.0.0.1");
    }

    #[test]
    fn test_extract_ip_falsy_values_are_missing() {
        let bodies: [&[u8]; 7] = [
            br#"{}"#,
            br#"{"ip":null}"#,
            br#"{"ip":""}"#,
            br#"{"ip":false}"#,
            br#"{"ip":0}"#,
            b"",
            b"  \n",
        ];
        for body in bodies {
            assert_eq!(
                message(extract_ip(body)),
                "Missing required parameter: ip",
                "body {:?}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_extract_ip_malformed_json() {
        assert_eq!(message(extract_ip(b"{ip: 1.2.3.4")), "Malformed JSON body");
    }

    #[test]
    fn test_extract_ip_non_object_body_is_missing() {
        assert_eq!(
            message(extract_ip(br#"["1.2.3.4"]"#)),
            "Missing required parameter: ip"
        );
    }

    #[test]
    fn test_extract_ip_non_string_is_rejected() {
        assert_eq!(
            message(extract_ip(br#"{"ip":12345}"#)),
            "Invalid parameter: ip must be a string"
        );
        assert_eq!(
            message(extract_ip(br#"{"ip":["1.2.3.4"]}"#)),
            "Invalid parameter: ip must be a string"
        );
    }
}
