// Nucleo HTTP client
//
// Wraps `reqwest::Client` with the per-robot message URL, the signed
// command envelope, and the fixed Nucleo headers. The individual vendor
// commands are implemented as inherent methods in `commands.rs` to keep
// this module focused on transport mechanics.

use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use crate::auth;
use crate::error::Error;

/// Production Nucleo endpoint.
pub const DEFAULT_BASE_URL: &str = "https://nucleo.neatocloud.com";

/// API version, carried in the `Accept` header.
const ACCEPT_HEADER: &str = "application/vnd.neato.nucleo.v1";

/// Default client identification for the `X-Agent` header.
/// The vendor expects a `platform|model|version` triple.
const DEFAULT_AGENT: &str = concat!("botvac-rs|rust|", env!("CARGO_PKG_VERSION"));

/// The `{reqId, cmd, params}` envelope every command travels in.
/// `params` is omitted entirely when absent — the vendor rejects
/// explicit nulls.
#[derive(Debug, Serialize)]
struct Envelope<'a> {
    #[serde(rename = "reqId")]
    req_id: u32,
    cmd: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<Value>,
}

/// Raw HTTP client for one robot's Nucleo message endpoint.
///
/// Owns the robot serial, the shared secret, and the base URL. Every
/// call is a signed POST to `/vendors/neato/robots/{serial}/messages`;
/// the parsed JSON response body is returned unmodified — interpreting
/// its shape is the caller's concern, and so is any reading of HTTP
/// status codes beyond success/failure.
pub struct NucleoClient {
    http: reqwest::Client,
    base_url: Url,
    serial: String,
    secret: SecretString,
    agent: String,
}

impl NucleoClient {
    /// Create a client for the production endpoint.
    pub fn new(serial: impl Into<String>, secret: SecretString) -> Result<Self, Error> {
        let base_url = Url::parse(DEFAULT_BASE_URL)?;
        Ok(Self::with_client(
            reqwest::Client::new(),
            base_url,
            serial,
            secret,
        ))
    }

    /// Create a client with a pre-built `reqwest::Client` and base URL.
    ///
    /// Use this to point at a test server or to share connection pools.
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        serial: impl Into<String>,
        secret: SecretString,
    ) -> Self {
        Self {
            http,
            base_url,
            serial: serial.into(),
            secret,
            agent: DEFAULT_AGENT.to_owned(),
        }
    }

    /// Point at a different endpoint (e.g. a test server).
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the `X-Agent` client identification string.
    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = agent.into();
        self
    }

    /// The robot serial this client is bound to.
    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// The per-robot message URL: `{base}/vendors/neato/robots/{serial}/messages`
    fn message_url(&self) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/vendors/neato/robots/{}/messages", self.serial);
        Ok(Url::parse(&full)?)
    }

    /// Send one command and return the parsed JSON response body.
    ///
    /// Exactly one network call per invocation: no retry, no caching.
    /// The date is formatted once and used for both the `Date` header
    /// and the signature — the two must never diverge, and a fresh pair
    /// is generated on every call.
    pub async fn execute(&self, cmd: &str, params: Option<Value>) -> Result<Value, Error> {
        let envelope = Envelope {
            req_id: 1,
            cmd,
            params,
        };
        let body = serde_json::to_string(&envelope).map_err(|e| Error::Encode {
            message: format!("encoding envelope: {e}"),
        })?;

        let date = auth::format_date(Utc::now());
        let token = auth::sign_request(&self.serial, self.secret.expose_secret(), &date, &body);

        let url = self.message_url()?;
        debug!("POST {} cmd={}", url, cmd);

        let resp = self
            .http
            .post(url)
            .header("Accept", ACCEPT_HEADER)
            .header("Date", &date)
            .header("Authorization", &token)
            .header("X-Agent", &self.agent)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        let text = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                body: truncate_on_char_boundary(&text, 200).to_owned(),
            });
        }

        trace!("response body: {} bytes", text.len());
        serde_json::from_str(&text).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: text,
        })
    }
}

/// Cut `s` to at most `max` bytes without splitting a UTF-8 character.
/// Error bodies come back in whatever encoding the vendor felt like,
/// so the preview must not assume the cut lands on a boundary.
fn truncate_on_char_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_char_boundaries() {
        // 199 ASCII bytes, then a two-byte char straddling the cut.
        let body = format!("{}ééé", "x".repeat(199));
        let cut = truncate_on_char_boundary(&body, 200);
        assert_eq!(cut.len(), 199);
        assert!(cut.chars().all(|c| c == 'x'));

        assert_eq!(truncate_on_char_boundary("short", 200), "short");
        assert_eq!(truncate_on_char_boundary("ééé", 3), "é");
    }
}
