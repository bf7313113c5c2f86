//! Sidecar bridge: endpoint routing, transport seam, and envelope handling.
//!
//! Every query interface goes through [`Bridge::call`], which resolves a
//! logical operation name to an endpoint path, posts a JSON body over the
//! configured [`Transport`], and unwraps the sidecar's response envelope.
//! The transport is the injectable seam: production uses [`HttpTransport`],
//! tests script their own responses without a network.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config;
use crate::error::{CollectionError, Result};

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// Minimal request capability the bridge needs: post a JSON body to an
/// endpoint path and get a JSON value back.
pub trait Transport: Send {
    fn post(&self, path: &str, body: &Value) -> Result<Value>;
}

/// Blocking HTTP transport against the sidecar. The client is created
/// lazily on first use.
pub struct HttpTransport {
    base_url: String,
    timeout: Duration,
    client: RefCell<Option<Client>>,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            client: RefCell::new(None),
        }
    }

    fn client(&self) -> Client {
        let mut slot = self.client.borrow_mut();
        if slot.is_none() {
            *slot = Some(
                Client::builder()
                    .timeout(self.timeout)
                    .build()
                    .expect("failed to build HTTP client"),
            );
        }
        slot.as_ref().unwrap().clone()
    }
}

impl Transport for HttpTransport {
    fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);
        let response = self
            .client()
            .post(&url)
            .json(body)
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }
}

// ---------------------------------------------------------------------------
// Bridge
// ---------------------------------------------------------------------------

/// Routes logical operation names (`"collection.list"`, `"decks.analyze"`,
/// ...) to endpoint paths and unwraps response envelopes.
pub struct Bridge {
    endpoints: HashMap<&'static str, &'static str>,
    transport: Box<dyn Transport>,
}

impl Bridge {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            endpoints: config::endpoints(),
            transport,
        }
    }

    /// Call an operation and return the envelope's `data` payload.
    pub fn call(&self, operation: &str, body: Value) -> Result<Value> {
        let path = self.endpoints.get(operation).ok_or_else(|| {
            CollectionError::InvalidArgument(format!("Unknown operation: {}", operation))
        })?;
        let raw = self.transport.post(path, &body)?;
        unwrap_envelope(raw)
    }

    /// Call an operation and deserialize the payload into `T`.
    pub fn call_into<T: DeserializeOwned>(&self, operation: &str, body: Value) -> Result<T> {
        let data = self.call(operation, body)?;
        Ok(serde_json::from_value(data)?)
    }
}

/// Sidecar responses are `{ "ok": bool, "data": ..., "error": "..." }`.
/// An `ok: false` envelope surfaces as [`CollectionError::Api`] with the
/// sidecar's message; a response without the envelope shape passes through
/// unchanged.
fn unwrap_envelope(raw: Value) -> Result<Value> {
    let Some(ok) = raw.get("ok").and_then(Value::as_bool) else {
        return Ok(raw);
    };
    if !ok {
        let message = raw
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string();
        return Err(CollectionError::Api(message));
    }
    Ok(raw.get("data").cloned().unwrap_or(Value::Null))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_ok_unwraps_data() {
        let value = unwrap_envelope(serde_json::json!({"ok": true, "data": [1, 2]})).unwrap();
        assert_eq!(value, serde_json::json!([1, 2]));
    }

    #[test]
    fn envelope_error_surfaces_message() {
        let err = unwrap_envelope(serde_json::json!({"ok": false, "error": "no such deck"}))
            .unwrap_err();
        assert!(matches!(err, CollectionError::Api(m) if m == "no such deck"));
    }

    #[test]
    fn non_envelope_passes_through() {
        let value = unwrap_envelope(serde_json::json!({"rows": []})).unwrap();
        assert_eq!(value, serde_json::json!({"rows": []}));
    }
}
