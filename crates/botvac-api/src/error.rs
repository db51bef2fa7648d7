use thiserror::Error;

/// Top-level error type for the `botvac-api` crate.
///
/// Deliberately small: this crate does not interpret what the vendor
/// says, it only reports that the conversation itself failed.
/// `botvac-core` maps these into domain-appropriate variants.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Non-success HTTP status, passed through uninterpreted.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    // ── Data ────────────────────────────────────────────────────────
    /// A request payload could not be encoded to JSON.
    #[error("Encoding error: {message}")]
    Encode { message: String },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_and_deserialization_are_distinct_variants() {
        let encode = Error::Encode {
            message: "bad payload".into(),
        };
        let decode = Error::Deserialization {
            message: "bad body".into(),
            body: "not json".into(),
        };
        assert_eq!(encode.to_string(), "Encoding error: bad payload");
        assert_eq!(decode.to_string(), "Deserialization error: bad body");
    }
}
