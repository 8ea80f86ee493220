//! ISIS sub-collections: adjacency state, interface timers, backup coverage
//! and backup SPF paths. All four steps are required.

pub mod rpc;

use tracing::warn;

use super::CollectError;
use crate::client::Client;
use crate::enums::{normalize, EnumDomain};
use crate::metrics::{Descriptor, MetricKind, Sample};

const PREFIX_TARGET: &[&str] = &["target"];
const INTERFACE_LABELS: &[&str] = &["target", "interface_name"];
const INTERFACE_LEVEL_LABELS: &[&str] = &["target", "interface_name", "level"];
const ADJACENCY_LABELS: &[&str] = &["target", "interface_name", "system_name", "level"];
const COVERAGE_LABELS: &[&str] = &[
    "target",
    "topology",
    "level",
    "node_coverage",
    "ipv4_route_coverage",
    "ipv6_route_coverage",
    "clns_route_coverage",
    "ipv4_mpls_route_coverage",
    "ipv6_mpls_route_coverage",
    "ipv4_mpls_sspf_route_coverage",
    "ipv6_mpls_sspf_route_coverage",
];
const BACKUP_PATH_LABELS: &[&str] = &[
    "target",
    "node_name",
    "backup_path_via",
    "backup_path_via_interface",
];

const ADJACENCY_COMMAND: &str = "show isis adjacency";
const INTERFACE_COMMAND: &str = "show isis interface extensive";
const COVERAGE_COMMAND: &str = "show isis backup coverage";
const BACKUP_SPF_COMMAND: &str = "show isis backup spf results";

/// ISIS metric descriptors.
#[derive(Debug)]
pub struct IsisMetrics {
    pub up_count: Descriptor,
    pub total_count: Descriptor,
    pub adjacency_state: Descriptor,
    pub adjacency_count: Descriptor,
    pub adjacency_priority: Descriptor,
    pub adjacency_metric: Descriptor,
    pub adjacency_hello_timer: Descriptor,
    pub adjacency_hold_timer: Descriptor,
    pub lsp_interval: Descriptor,
    pub csnp_interval: Descriptor,
    pub hello_padding: Descriptor,
    pub max_hello_size: Descriptor,
    pub backup_node_coverage: Descriptor,
    pub backup_path: Descriptor,
}

impl IsisMetrics {
    pub(crate) fn new() -> Self {
        use MetricKind::{Counter, Gauge};
        Self {
            up_count: Descriptor::new(
                "junos_isis_up_count",
                "Number of ISIS adjacencies in state up",
                Gauge,
                PREFIX_TARGET,
            ),
            total_count: Descriptor::new(
                "junos_isis_total_count",
                "Number of ISIS adjacencies",
                Gauge,
                PREFIX_TARGET,
            ),
            adjacency_state: Descriptor::new(
                "junos_isis_adjacency_state",
                "The ISIS adjacency state (0 = DOWN, 1 = UP, 2 = NEW, 3 = ONE-WAY, 4 = INITIALIZING, 5 = REJECTED)",
                Gauge,
                ADJACENCY_LABELS,
            ),
            adjacency_count: Descriptor::new(
                "junos_isis_adjacency_count",
                "The number of ISIS adjacencies for an interface",
                Counter,
                INTERFACE_LEVEL_LABELS,
            ),
            adjacency_priority: Descriptor::new(
                "junos_isis_adjacency_priority",
                "The ISIS adjacency priority",
                Gauge,
                INTERFACE_LEVEL_LABELS,
            ),
            adjacency_metric: Descriptor::new(
                "junos_isis_adjacency_metric",
                "The ISIS adjacency metric",
                Gauge,
                INTERFACE_LEVEL_LABELS,
            ),
            adjacency_hello_timer: Descriptor::new(
                "junos_isis_adjacency_hello_timer_seconds",
                "The ISIS adjacency hello timer",
                Gauge,
                INTERFACE_LEVEL_LABELS,
            ),
            adjacency_hold_timer: Descriptor::new(
                "junos_isis_adjacency_hold_timer_seconds",
                "The ISIS adjacency hold timer",
                Gauge,
                INTERFACE_LEVEL_LABELS,
            ),
            lsp_interval: Descriptor::new(
                "junos_isis_lsp_interval_ms",
                "The ISIS LSP interval",
                Gauge,
                INTERFACE_LABELS,
            ),
            csnp_interval: Descriptor::new(
                "junos_isis_csnp_interval_seconds",
                "The ISIS CSNP interval",
                Gauge,
                INTERFACE_LABELS,
            ),
            hello_padding: Descriptor::new(
                "junos_isis_hello_padding",
                "The ISIS hello padding (0 = UNKNOWN, 1 = ADAPTIVE, 2 = DISABLE, 3 = LOOSE, 4 = STRICT)",
                Gauge,
                INTERFACE_LABELS,
            ),
            max_hello_size: Descriptor::new(
                "junos_isis_max_hello_size_bytes",
                "The ISIS max hello size",
                Gauge,
                INTERFACE_LABELS,
            ),
            backup_node_coverage: Descriptor::new(
                "junos_isis_backup_node_coverage",
                "The ISIS backup node coverage in percents",
                Gauge,
                COVERAGE_LABELS,
            ),
            backup_path: Descriptor::new(
                "junos_isis_backup_path",
                "An ISIS backup path",
                Gauge,
                BACKUP_PATH_LABELS,
            ),
        }
    }

    pub fn descriptors(&self) -> Vec<&Descriptor> {
        vec![
            &self.up_count,
            &self.total_count,
            &self.adjacency_state,
            &self.adjacency_count,
            &self.adjacency_priority,
            &self.adjacency_metric,
            &self.adjacency_hello_timer,
            &self.adjacency_hold_timer,
            &self.lsp_interval,
            &self.csnp_interval,
            &self.hello_padding,
            &self.max_hello_size,
            &self.backup_node_coverage,
            &self.backup_path,
        ]
    }
}

pub(crate) fn collect<'r, C: Client>(
    client: &mut C,
    descs: &'r IsisMetrics,
    target: &str,
    out: &mut Vec<Sample<'r>>,
) -> Result<(), CollectError> {
    collect_adjacencies(client, descs, target, out)?;
    collect_interfaces(client, descs, target, out)?;
    collect_backup_coverage(client, descs, target, out)?;
    collect_backup_paths(client, descs, target, out)?;
    Ok(())
}

fn collect_adjacencies<'r, C: Client>(
    client: &mut C,
    descs: &'r IsisMetrics,
    target: &str,
    out: &mut Vec<Sample<'r>>,
) -> Result<(), CollectError> {
    let doc: rpc::AdjacencyDocument = client
        .run_and_decode(ADJACENCY_COMMAND)
        .map_err(|e| CollectError::new(ADJACENCY_COMMAND, e))?;

    let adjacencies = &doc.isis_adjacency_information.isis_adjacency;
    let up = adjacencies
        .iter()
        .filter(|a| a.adjacency_state.eq_ignore_ascii_case("up"))
        .count();

    out.push(descs.up_count.sample(vec![target.to_string()], up as f64));
    out.push(
        descs
            .total_count
            .sample(vec![target.to_string()], adjacencies.len() as f64),
    );

    for adjacency in adjacencies {
        let labels = vec![
            target.to_string(),
            adjacency.interface_name.clone(),
            adjacency.system_name.clone(),
            adjacency.level.to_string(),
        ];
        let state = normalize(&adjacency.adjacency_state, EnumDomain::AdjacencyState);
        out.push(descs.adjacency_state.sample(labels, state));
    }

    Ok(())
}

fn collect_interfaces<'r, C: Client>(
    client: &mut C,
    descs: &'r IsisMetrics,
    target: &str,
    out: &mut Vec<Sample<'r>>,
) -> Result<(), CollectError> {
    let doc: rpc::InterfaceDocument = client
        .run_and_decode(INTERFACE_COMMAND)
        .map_err(|e| CollectError::new(INTERFACE_COMMAND, e))?;

    for interface in &doc.isis_interface_information.isis_interface {
        let level_data = &interface.interface_level_data;
        if level_data.passive.to_lowercase() == "passive" {
            continue;
        }

        let level_labels = vec![
            target.to_string(),
            interface.interface_name.clone(),
            level_data.level.clone(),
        ];
        out.push(descs.adjacency_count.sample(level_labels.clone(), level_data.adjacency_count));
        out.push(
            descs
                .adjacency_priority
                .sample(level_labels.clone(), level_data.interface_priority),
        );
        out.push(descs.adjacency_metric.sample(level_labels.clone(), level_data.metric));
        out.push(
            descs
                .adjacency_hello_timer
                .sample(level_labels.clone(), level_data.hello_time),
        );
        out.push(
            descs
                .adjacency_hold_timer
                .sample(level_labels, level_data.holddown_time),
        );

        let interface_labels = vec![target.to_string(), interface.interface_name.clone()];
        out.push(descs.lsp_interval.sample(interface_labels.clone(), interface.lsp_interval));
        out.push(descs.csnp_interval.sample(interface_labels.clone(), interface.csnp_interval));
        out.push(descs.hello_padding.sample(
            interface_labels.clone(),
            normalize(&interface.hello_padding, EnumDomain::HelloPadding),
        ));
        out.push(descs.max_hello_size.sample(interface_labels, interface.max_hello_size));
    }

    Ok(())
}

fn collect_backup_coverage<'r, C: Client>(
    client: &mut C,
    descs: &'r IsisMetrics,
    target: &str,
    out: &mut Vec<Sample<'r>>,
) -> Result<(), CollectError> {
    let doc: rpc::BackupCoverageDocument = client
        .run_and_decode(COVERAGE_COMMAND)
        .map_err(|e| CollectError::new(COVERAGE_COMMAND, e))?;

    let coverage = &doc.isis_backup_coverage_information.isis_backup_coverage;
    let labels = vec![
        target.to_string(),
        coverage.isis_topology_id.clone(),
        coverage.level.clone(),
        coverage.isis_node_coverage.clone(),
        coverage.isis_route_coverage_ipv4.clone(),
        coverage.isis_route_coverage_ipv6.clone(),
        coverage.isis_route_coverage_clns.clone(),
        coverage.isis_route_coverage_ipv4_mpls.clone(),
        coverage.isis_route_coverage_ipv6_mpls.clone(),
        coverage.isis_route_coverage_ipv4_mpls_sspf.clone(),
        coverage.isis_route_coverage_ipv6_mpls_sspf.clone(),
    ];
    out.push(
        descs
            .backup_node_coverage
            .sample(labels, percentage_to_f64(&coverage.isis_node_coverage)),
    );

    Ok(())
}

fn collect_backup_paths<'r, C: Client>(
    client: &mut C,
    descs: &'r IsisMetrics,
    target: &str,
    out: &mut Vec<Sample<'r>>,
) -> Result<(), CollectError> {
    let doc: rpc::BackupSpfDocument = client
        .run_and_decode(BACKUP_SPF_COMMAND)
        .map_err(|e| CollectError::new(BACKUP_SPF_COMMAND, e))?;

    for node in &doc.isis_spf_information.isis_spf {
        for result in &node.isis_backup_spf_result {
            let node_name = result
                .node_id
                .strip_suffix(".00")
                .unwrap_or(&result.node_id);

            for _reason in &result.no_coverage_reason {
                let labels = vec![
                    target.to_string(),
                    node_name.to_string(),
                    String::new(),
                    String::new(),
                ];
                out.push(descs.backup_path.sample(labels, 0.0));
            }

            let labels = vec![
                target.to_string(),
                node_name.to_string(),
                result.backup_next_hop.isis_next_hop.clone(),
                result.backup_next_hop.interface_name.clone(),
            ];
            out.push(descs.backup_path.sample(labels, 1.0));
        }
    }

    Ok(())
}

/// Parses a percentage string such as `"97.56%"`. Failures are logged and
/// reported as 0.
fn percentage_to_f64(percentage: &str) -> f64 {
    match percentage.trim_end_matches('%').parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(percentage, "failed to parse percentage value");
            0.0
        }
    }
}
