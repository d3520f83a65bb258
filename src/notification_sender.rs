use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::constants::TELEGRAM_API_URL;
use crate::errors::DeliveryError;

/// Response envelope of the Telegram Bot API.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
    error_code: Option<i64>,
}

/// Delivers the message via the Bot API `sendMessage` method
/// (form-encoded, single attempt).
pub async fn send_telegram(
    client: &Client,
    token: &str,
    chat_id: &str,
    text: &str,
) -> Result<(), DeliveryError> {
    let api = format!("{TELEGRAM_API_URL}/bot{token}/sendMessage");

    let form = [
        ("chat_id", chat_id),
        ("text", text),
        ("parse_mode", "Markdown"),
    ];

    let resp = client
        .post(&api)
        .form(&form)
        .send()
        .await
        .map_err(DeliveryError::Network)?;

    let status = resp.status();
    let api_resp: ApiResponse = resp
        .json()
        .await
        .map_err(|_| DeliveryError::Rejected(format!("HTTP {status}")))?;

    check_envelope(status, api_resp)
}

// the API reports errors both as HTTP status and in the JSON envelope,
// the envelope description is the useful part
fn check_envelope(status: StatusCode, resp: ApiResponse) -> Result<(), DeliveryError> {
    if resp.ok {
        return Ok(());
    }

    let code = resp.error_code.unwrap_or_else(|| status.as_u16().into());
    let description = resp
        .description
        .unwrap_or_else(|| "no description".to_string());

    Err(DeliveryError::Rejected(format!("{code}: {description}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_deserializes() {
        let resp: ApiResponse =
            serde_json::from_str(r#"{"ok":true,"result":{"message_id":42}}"#).unwrap();

        assert!(resp.ok);
        assert_eq!(resp.description, None);
        assert_eq!(resp.error_code, None);
    }

    #[test]
    fn error_envelope_deserializes() {
        let resp: ApiResponse = serde_json::from_str(
            r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#,
        )
        .unwrap();

        assert!(!resp.ok);
        assert_eq!(resp.error_code, Some(400));
        assert_eq!(
            resp.description.as_deref(),
            Some("Bad Request: chat not found")
        );
    }

    #[test]
    fn ok_envelope_is_a_successful_delivery() {
        let resp = ApiResponse {
            ok: true,
            description: None,
            error_code: None,
        };

        assert!(check_envelope(StatusCode::OK, resp).is_ok());
    }

    #[test]
    fn rejected_envelope_maps_to_delivery_error() {
        let resp = ApiResponse {
            ok: false,
            description: Some("Bad Request: chat not found".to_string()),
            error_code: Some(400),
        };

        let err = check_envelope(StatusCode::BAD_REQUEST, resp).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Telegram rejected the message: 400: Bad Request: chat not found"
        );
    }

    #[test]
    fn bare_envelope_falls_back_to_http_status() {
        let resp = ApiResponse {
            ok: false,
            description: None,
            error_code: None,
        };

        let err = check_envelope(StatusCode::BAD_GATEWAY, resp).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Telegram rejected the message: 502: no description"
        );
    }
}
