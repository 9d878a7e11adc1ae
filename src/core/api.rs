//! Node API client.
//!
//! Thin blocking client for the ledger node's HTTP API. Every endpoint
//! wraps its payload as `{ "data": ... }` and reports failures as
//! `{ "message": ... }`.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::Url;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, Result};

/// Operations the commands need from a node.
pub trait NodeApi {
    fn constants(&self) -> Result<Value>;
    fn status(&self) -> Result<Value>;
    fn forging_status(&self) -> Result<Value>;
    fn update_forging_status(&self, update: &ForgingUpdate<'_>) -> Result<Value>;
    fn broadcast_transaction(&self, transaction: &Value) -> Result<Value>;
}

/// Body of a forging status change.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgingUpdate<'a> {
    pub password: &'a str,
    pub public_key: &'a str,
    pub forging: bool,
}

/// HTTP implementation of [`NodeApi`].
pub struct HttpNode {
    base_url: Url,
    client: Client,
}

impl HttpNode {
    /// Build a client for the node at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        // Endpoints join onto the base, so a path prefix must end in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = Client::builder()
            .user_agent(concat!("tally/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(ApiError::from)?;
        Ok(Self { base_url, client })
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url.join(path.trim_start_matches('/')).map_err(|e| {
            ApiError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn get(&self, path: &str) -> Result<Value> {
        let url = self.url(path)?;
        debug!(%url, "GET");
        send(self.client.get(url))
    }
}

impl NodeApi for HttpNode {
    fn constants(&self) -> Result<Value> {
        self.get("/api/node/constants")
    }

    fn status(&self) -> Result<Value> {
        self.get("/api/node/status")
    }

    fn forging_status(&self) -> Result<Value> {
        self.get("/api/node/status/forging")
    }

    fn update_forging_status(&self, update: &ForgingUpdate<'_>) -> Result<Value> {
        let url = self.url("/api/node/status/forging")?;
        debug!(%url, forging = update.forging, "PUT");
        send(self.client.put(url).json(update))
    }

    fn broadcast_transaction(&self, transaction: &Value) -> Result<Value> {
        let url = self.url("/api/transactions")?;
        debug!(%url, "POST");
        send(self.client.post(url).json(transaction))
    }
}

fn send(request: RequestBuilder) -> Result<Value> {
    let response = request.send().map_err(ApiError::from)?;
    let status = response.status().as_u16();
    let text = response.text().map_err(ApiError::from)?;
    debug!(status, "node responded");
    unwrap_response(status, &text)
}

/// Longest slice of a non-JSON error body kept in the message.
const MAX_RAW_MESSAGE: usize = 200;

/// Pull `data` out of a successful response, or the node's `message` out of
/// a failed one. Failed responses keep their status even when the body is
/// not JSON (a proxy error page, say).
fn unwrap_response(status: u16, text: &str) -> Result<Value> {
    let body: Option<Value> = serde_json::from_str(text).ok();

    if !(200..300).contains(&status) {
        let message = match body.as_ref().and_then(|b| b.get("message")).and_then(Value::as_str) {
            Some(message) => message.to_string(),
            None if text.trim().is_empty() => "no message".to_string(),
            None => text.trim().chars().take(MAX_RAW_MESSAGE).collect(),
        };
        return Err(ApiError::Rejected { status, message }.into());
    }

    let mut body =
        body.ok_or_else(|| ApiError::InvalidResponse("body is not JSON".to_string()))?;
    match body.get_mut("data") {
        Some(data) => Ok(data.take()),
        None => Err(ApiError::InvalidResponse("missing data field".to_string()).into()),
    }
}
