//! Transport boundary consumed by the collection engine.
//!
//! The engine performs no I/O of its own: every command execution goes
//! through a [`Client`] implementation owned by the caller (SSH/NETCONF
//! session handling, authentication, transport retries and timeouts all live
//! behind this trait). A slow client call blocks the poll for that target;
//! the engine adds no timeout or cancellation of its own.

use serde::de::DeserializeOwned;

/// Externally-supplied gates for optional sub-collections.
///
/// The orchestrator consults these before running an optional step; a
/// disabled capability means the step is never invoked and no samples for it
/// appear in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Satellite chassis inventory scraping.
    SatelliteTelemetry,
    /// License usage scraping.
    LicenseScraping,
}

/// Failure executing or decoding one command.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Transport or dispatch failure.
    Execution(String),
    /// Well-formed bytes could not be decoded where a structured response
    /// was expected.
    Decode(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Execution(msg) => write!(f, "execution failed: {}", msg),
            ClientError::Decode(msg) => write!(f, "response decode failed: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

/// Command execution against one target device.
pub trait Client {
    /// Executes `command` and returns the raw response bytes.
    ///
    /// Parsing is a separate, pure phase on top of this call; the client has
    /// no side effects beyond the command execution itself.
    fn run_raw(&mut self, command: &str) -> Result<Vec<u8>, ClientError>;

    /// Executes `command` and decodes the structured response into `T`.
    ///
    /// Malformed or truncated bytes yield [`ClientError::Decode`].
    fn run_and_decode<T: DeserializeOwned>(&mut self, command: &str) -> Result<T, ClientError> {
        let raw = self.run_raw(command)?;
        serde_json::from_slice(&raw)
            .map_err(|e| ClientError::Decode(format!("{}: {}", command, e)))
    }

    /// Whether an optional sub-collection is enabled for this target.
    fn is_feature_enabled(&self, capability: Capability) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockClient;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Doc {
        value: i64,
    }

    #[test]
    fn decode_uses_raw_bytes() {
        let mut client = MockClient::new();
        client.respond("show thing", r#"{"value": 42}"#);
        let doc: Doc = client.run_and_decode("show thing").unwrap();
        assert_eq!(doc.value, 42);
    }

    #[test]
    fn malformed_structured_response_is_a_decode_error() {
        let mut client = MockClient::new();
        client.respond("show thing", "<not json>");
        let err = client.run_and_decode::<Doc>("show thing").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn missing_command_is_an_execution_error() {
        let mut client = MockClient::new();
        let err = client.run_raw("show absent").unwrap_err();
        assert!(matches!(err, ClientError::Execution(_)));
    }
}
