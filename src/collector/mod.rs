//! Collection orchestration.
//!
//! A poll against one target is a straight-line, synchronous sequence of
//! sub-collections (one command execution plus its parse/reconcile/assemble
//! pipeline each), run strictly in declared order:
//!
//! system buffers → system information → satellites (optional) → license
//! (optional) → isis → aaa
//!
//! Failure policy: a required step that fails aborts the whole poll for the
//! target and the error is returned wrapped with the originating command
//! name. Optional steps are gated by [`Capability`] predicates; their
//! failures are swallowed (logged below error severity, no samples emitted)
//! and subsequent steps still run.
//!
//! Nothing survives across polls: all per-poll data is owned by the single
//! call stack processing that poll. The only shared state is the immutable
//! [`Registry`], read-only after construction.

pub mod aaa;
pub mod isis;
pub mod mock;
pub mod system;

use crate::client::{Client, ClientError};
use crate::metrics::{Descriptor, Sample};

/// The full descriptor set, built once at process start and passed by
/// reference. Never re-initialized or mutated afterwards.
#[derive(Debug)]
pub struct Registry {
    pub system: system::SystemMetrics,
    pub isis: isis::IsisMetrics,
    pub aaa: aaa::AaaMetrics,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            system: system::SystemMetrics::new(),
            isis: isis::IsisMetrics::new(),
            aaa: aaa::AaaMetrics::new(),
        }
    }

    /// All descriptors, for exposition consumers that advertise the metric
    /// set up front.
    pub fn descriptors(&self) -> Vec<&Descriptor> {
        let mut all = self.system.descriptors();
        all.extend(self.isis.descriptors());
        all.extend(self.aaa.descriptors());
        all
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// A required sub-collection failed; the poll for the target was aborted.
#[derive(Debug)]
pub struct CollectError {
    command: &'static str,
    source: ClientError,
}

impl CollectError {
    pub(crate) fn new(command: &'static str, source: ClientError) -> Self {
        Self { command, source }
    }

    /// The command whose execution or decoding failed.
    pub fn command(&self) -> &'static str {
        self.command
    }
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "command '{}' failed: {}", self.command, self.source)
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Runs one full poll against one target.
///
/// Returns every sample the enabled sub-collections produced, or the first
/// required-step error. Optional data may be silently absent from a
/// successful poll.
pub fn collect_target<'r, C: Client>(
    client: &mut C,
    registry: &'r Registry,
    target: &str,
) -> Result<Vec<Sample<'r>>, CollectError> {
    let mut samples = Vec::new();
    system::collect(client, &registry.system, target, &mut samples)?;
    isis::collect(client, &registry.isis, target, &mut samples)?;
    aaa::collect(client, &registry.aaa, target, &mut samples)?;
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_descriptors_are_unique_by_name() {
        let registry = Registry::new();
        let descs = registry.descriptors();
        let mut names: Vec<_> = descs.iter().map(|d| d.name()).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }

    #[test]
    fn every_descriptor_leads_with_the_target_label() {
        let registry = Registry::new();
        for desc in registry.descriptors() {
            assert_eq!(desc.labels()[0], "target", "descriptor {}", desc.name());
        }
    }

    #[test]
    fn collect_error_carries_the_command() {
        let err = CollectError::new(
            "show system buffers",
            ClientError::Execution("session closed".to_string()),
        );
        assert_eq!(err.command(), "show system buffers");
        assert!(err.to_string().contains("show system buffers"));
        assert!(err.to_string().contains("session closed"));
    }
}
