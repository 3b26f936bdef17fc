//! Resilient HTTP client for the fixture service.
//!
//! # Design
//! `HttpClient` owns a connection-reusing `ureq::Agent` configured with
//! `http_status_as_error(false)`, so 4xx/5xx responses come back as data
//! rather than `Err`. The only errors are transport faults (connect failure,
//! timeout, broken stream), and every verb runs its attempt through the retry
//! policy. `send_raw` is the single-attempt escape hatch for callers that
//! must not retry.
//!
//! Each attempt produces one `Envelope`; only the final attempt's envelope
//! (or the final transport error) reaches the caller. A retried call starts a
//! fresh attempt with no partial state carried over.

use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::error::ClientError;
use crate::retry::{with_retry, RetryPolicy};

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Outcome of one completed HTTP round-trip.
///
/// `json` is `None` when the body was not valid JSON; the parse failure is
/// logged as a warning and never aborts the call. `text` keeps the raw body
/// for diagnostics.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub status: u16,
    pub elapsed: Duration,
    pub json: Option<Value>,
    pub text: String,
}

impl Envelope {
    /// Convert the parsed body into a typed value.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        let body = self
            .json
            .clone()
            .ok_or_else(|| ClientError::Decode("response body was not JSON".to_string()))?;
        serde_json::from_value(body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Synchronous client with per-verb retry over a shared connection pool.
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    agent: ureq::Agent,
    policy: RetryPolicy,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(10))
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_timeout(&config.base_url, config.timeout())
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
            policy: RetryPolicy::default(),
        }
    }

    /// Replace the retry policy attached to every verb.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Envelope, ClientError> {
        with_retry(&self.policy, || {
            self.attempt(&HttpMethod::Get, endpoint, query, None)
        })
    }

    pub fn post(&self, endpoint: &str, json: &Value) -> Result<Envelope, ClientError> {
        with_retry(&self.policy, || {
            self.attempt(&HttpMethod::Post, endpoint, &[], Some(json))
        })
    }

    pub fn put(&self, endpoint: &str, json: &Value) -> Result<Envelope, ClientError> {
        with_retry(&self.policy, || {
            self.attempt(&HttpMethod::Put, endpoint, &[], Some(json))
        })
    }

    pub fn patch(&self, endpoint: &str, json: &Value) -> Result<Envelope, ClientError> {
        with_retry(&self.policy, || {
            self.attempt(&HttpMethod::Patch, endpoint, &[], Some(json))
        })
    }

    pub fn delete(&self, endpoint: &str) -> Result<Envelope, ClientError> {
        with_retry(&self.policy, || {
            self.attempt(&HttpMethod::Delete, endpoint, &[], None)
        })
    }

    /// Perform exactly one attempt with no retry.
    pub fn send_raw(
        &self,
        method: HttpMethod,
        endpoint: &str,
        json: Option<&Value>,
    ) -> Result<Envelope, ClientError> {
        self.attempt(&method, endpoint, &[], json)
    }

    fn attempt(
        &self,
        method: &HttpMethod,
        endpoint: &str,
        query: &[(&str, &str)],
        json: Option<&Value>,
    ) -> Result<Envelope, ClientError> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::info!(method = method.as_str(), %url, ?query, body = ?json, "request");

        let payload = match json {
            Some(value) => {
                Some(serde_json::to_string(value).map_err(|e| ClientError::Serialize(e.to_string()))?)
            }
            None => None,
        };

        let started = Instant::now();
        let result = match (method, payload) {
            (HttpMethod::Get, _) => {
                let mut request = self.agent.get(&url);
                for (key, value) in query {
                    request = request.query(*key, *value);
                }
                request.call()
            }
            (HttpMethod::Delete, _) => self.agent.delete(&url).call(),
            (HttpMethod::Post, Some(body)) => {
                self.agent.post(&url).content_type("application/json").send(body.as_bytes())
            }
            (HttpMethod::Post, None) => self.agent.post(&url).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                self.agent.put(&url).content_type("application/json").send(body.as_bytes())
            }
            (HttpMethod::Put, None) => self.agent.put(&url).send_empty(),
            (HttpMethod::Patch, Some(body)) => {
                self.agent.patch(&url).content_type("application/json").send(body.as_bytes())
            }
            (HttpMethod::Patch, None) => self.agent.patch(&url).send_empty(),
        };

        let mut response = result.map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let elapsed = started.elapsed();
        tracing::info!(status, "response");

        let text = match response.body_mut().read_to_string() {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read response body");
                String::new()
            }
        };
        let json = match serde_json::from_str::<Value>(&text) {
            Ok(value) => {
                tracing::info!(body = %value, "json response");
                Some(value)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse JSON response");
                None
            }
        };

        Ok(Envelope { status, elapsed, json, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = HttpClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn envelope_decode_typed() {
        let envelope = Envelope {
            status: 200,
            elapsed: Duration::from_millis(1),
            json: Some(json!({"id": 1, "userId": 7, "title": "x"})),
            text: String::new(),
        };
        let album: crate::types::Album = envelope.decode().unwrap();
        assert_eq!(album.id, 1);
        assert_eq!(album.user_id, 7);
        assert_eq!(album.title, "x");
    }

    #[test]
    fn envelope_decode_without_body_fails() {
        let envelope = Envelope {
            status: 204,
            elapsed: Duration::from_millis(1),
            json: None,
            text: String::new(),
        };
        let err = envelope.decode::<crate::types::Album>().unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn method_names_match_wire_spelling() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }
}
