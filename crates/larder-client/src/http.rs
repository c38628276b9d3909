//! Shared HTTP response classification for the remote client.
//!
//! Centralizes status-code checks (401/403 → [`ClientError::Auth`],
//! other non-success → [`ClientError::Api`]) so individual endpoint
//! modules stay focused on request construction and response mapping.

use reqwest::StatusCode;

use crate::error::ClientError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. 401 and 403 classify as
/// [`ClientError::Auth`]; any other non-success status as
/// [`ClientError::Api`] with the response body as message.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ClientError::Auth {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
