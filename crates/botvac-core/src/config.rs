// ── Robot connection configuration ──

use secrecy::SecretString;
use url::Url;

use botvac_api::client::DEFAULT_BASE_URL;

/// Everything needed to talk to one robot.
///
/// Serial and secret come from the vendor account pairing; acquiring
/// them (login flow, token storage) is out of scope for this crate.
#[derive(Debug, Clone)]
pub struct RobotConfig {
    /// Robot serial, as printed under the dustbin.
    pub serial: String,
    /// Per-robot shared secret used for request signing.
    pub secret: SecretString,
    /// Nucleo endpoint; overridable for testing.
    pub base_url: Url,
    /// `X-Agent` client identification string.
    pub agent: Option<String>,
}

impl RobotConfig {
    /// Configuration against the production Nucleo endpoint.
    pub fn new(serial: impl Into<String>, secret: SecretString) -> Self {
        Self {
            serial: serial.into(),
            secret,
            base_url: Url::parse(DEFAULT_BASE_URL).unwrap_or_else(|_| {
                unreachable!("default base URL is valid")
            }),
            agent: None,
        }
    }

    /// Point at a different endpoint (e.g. a test server).
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the `X-Agent` string.
    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = Some(agent.into());
        self
    }
}
