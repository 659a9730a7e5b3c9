// src/core/net.rs
//
// One blocking GET with a timeout. No retries: a failed fetch is reported
// to the caller and the dashboard stays on its previous state.

use std::time::Duration;

use crate::config::consts::USER_AGENT;
use crate::error::SourceError;

pub fn http_get_bytes(url: &str, timeout: Duration) -> Result<Vec<u8>, SourceError> {
    let http_err = |err| SourceError::Http { url: s!(url), err };

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(http_err)?;

    logd!("Net: GET {} (timeout {:?})", url, timeout);
    let resp = client.get(url).send().map_err(http_err)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(SourceError::Status { url: s!(url), status: status.as_u16() });
    }

    let body = resp.bytes().map_err(http_err)?;
    logd!("Net: {} bytes from {}", body.len(), url);
    Ok(body.to_vec())
}
