//! routerstat — network device metric collection engine.
//!
//! Polls router operational state over a command transport and turns the
//! responses into labeled metric samples:
//! - `client` — command transport abstraction and capability gating
//! - `collector` — per-subsystem collection (system, isis, aaa) and the
//!   poll orchestrator
//! - `enums` — device enum token normalization
//! - `metrics` — metric descriptors and samples
//! - `reconcile` — parallel-array reconciliation

pub mod client;
pub mod collector;
pub mod enums;
pub mod metrics;
pub mod reconcile;
