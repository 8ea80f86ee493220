//! Canned-response client for testing collectors without a live device.
//!
//! `MockClient` maps commands to canned response bytes and records every
//! command it executes, so tests can assert both what was collected and
//! which steps ran.

use std::collections::{HashMap, HashSet};

use crate::client::{Capability, Client, ClientError};

/// In-memory [`Client`] backed by canned responses.
#[derive(Debug, Clone, Default)]
pub struct MockClient {
    responses: HashMap<String, Vec<u8>>,
    capabilities: HashSet<Capability>,
    executed: Vec<String>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the canned response for a command.
    pub fn respond(&mut self, command: &str, body: impl Into<Vec<u8>>) {
        self.responses.insert(command.to_string(), body.into());
    }

    /// Enables an optional capability for this target.
    pub fn enable(&mut self, capability: Capability) {
        self.capabilities.insert(capability);
    }

    /// Commands executed so far, in order.
    pub fn executed(&self) -> &[String] {
        &self.executed
    }
}

impl Client for MockClient {
    fn run_raw(&mut self, command: &str) -> Result<Vec<u8>, ClientError> {
        self.executed.push(command.to_string());
        self.responses
            .get(command)
            .cloned()
            .ok_or_else(|| ClientError::Execution(format!("no canned response for '{}'", command)))
    }

    fn is_feature_enabled(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_executed_commands_in_order() {
        let mut client = MockClient::new();
        client.respond("show a", "1");
        client.respond("show b", "2");
        let _ = client.run_raw("show a");
        let _ = client.run_raw("show b");
        assert_eq!(client.executed(), ["show a", "show b"]);
    }

    #[test]
    fn capabilities_default_to_disabled() {
        let mut client = MockClient::new();
        assert!(!client.is_feature_enabled(Capability::SatelliteTelemetry));
        client.enable(Capability::SatelliteTelemetry);
        assert!(client.is_feature_enabled(Capability::SatelliteTelemetry));
        assert!(!client.is_feature_enabled(Capability::LicenseScraping));
    }
}
