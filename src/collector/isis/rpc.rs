//! Structured response schemas for the ISIS sub-collections.

use serde::Deserialize;

/// `show isis adjacency`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AdjacencyDocument {
    pub isis_adjacency_information: AdjacencyInformation,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AdjacencyInformation {
    pub isis_adjacency: Vec<Adjacency>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Adjacency {
    pub interface_name: String,
    pub system_name: String,
    pub level: i64,
    pub adjacency_state: String,
}

/// `show isis interface extensive`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct InterfaceDocument {
    pub isis_interface_information: InterfaceInformation,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct InterfaceInformation {
    pub isis_interface: Vec<IsisInterface>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct IsisInterface {
    pub interface_name: String,
    pub lsp_interval: f64,
    pub csnp_interval: f64,
    pub hello_padding: String,
    pub max_hello_size: f64,
    pub interface_level_data: InterfaceLevelData,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct InterfaceLevelData {
    pub level: String,
    pub adjacency_count: f64,
    pub interface_priority: f64,
    pub metric: f64,
    pub hello_time: f64,
    pub holddown_time: f64,
    pub passive: String,
}

/// `show isis backup coverage`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BackupCoverageDocument {
    pub isis_backup_coverage_information: BackupCoverageInformation,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BackupCoverageInformation {
    pub isis_backup_coverage: BackupCoverage,
}

/// Coverage percentages are reported as strings like `"97.56%"` and carried
/// through as labels; only the node coverage is parsed into the value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BackupCoverage {
    pub isis_topology_id: String,
    pub level: String,
    pub isis_node_coverage: String,
    pub isis_route_coverage_ipv4: String,
    pub isis_route_coverage_ipv6: String,
    pub isis_route_coverage_clns: String,
    pub isis_route_coverage_ipv4_mpls: String,
    pub isis_route_coverage_ipv6_mpls: String,
    pub isis_route_coverage_ipv4_mpls_sspf: String,
    pub isis_route_coverage_ipv6_mpls_sspf: String,
}

/// `show isis backup spf results`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BackupSpfDocument {
    pub isis_spf_information: SpfInformation,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SpfInformation {
    pub isis_spf: Vec<SpfNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SpfNode {
    pub isis_backup_spf_result: Vec<BackupSpfResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BackupSpfResult {
    pub node_id: String,
    pub no_coverage_reason: Vec<String>,
    pub backup_next_hop: BackupNextHop,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BackupNextHop {
    pub isis_next_hop: String,
    pub interface_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_document_decodes() {
        let doc: AdjacencyDocument = serde_json::from_str(
            r#"{"isis-adjacency-information": {"isis-adjacency": [
                {"interface-name": "ge-0/0/0.0", "system-name": "r2",
                 "level": 2, "adjacency-state": "Up"}
            ]}}"#,
        )
        .unwrap();
        let adj = &doc.isis_adjacency_information.isis_adjacency[0];
        assert_eq!(adj.interface_name, "ge-0/0/0.0");
        assert_eq!(adj.level, 2);
        assert_eq!(adj.adjacency_state, "Up");
    }

    #[test]
    fn absent_spf_next_hop_defaults_to_empty() {
        let doc: BackupSpfDocument = serde_json::from_str(
            r#"{"isis-spf-information": {"isis-spf": [
                {"isis-backup-spf-result": [
                    {"node-id": "r3.00", "no-coverage-reason": ["no-backup-path"]}
                ]}
            ]}}"#,
        )
        .unwrap();
        let result = &doc.isis_spf_information.isis_spf[0].isis_backup_spf_result[0];
        assert_eq!(result.backup_next_hop.isis_next_hop, "");
        assert_eq!(result.no_coverage_reason.len(), 1);
    }
}
