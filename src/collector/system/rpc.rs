//! Structured response schemas for the system sub-collections.
//!
//! Devices are asked for JSON output rendering; field names follow the
//! device's kebab-case node names. Every field defaults, so nodes absent
//! from a document resolve numeric fields to 0 and text fields to the empty
//! string instead of failing the decode.

use serde::Deserialize;

/// Envelope for `show system buffers`.
///
/// Platforms without a structured form of the command return the raw CLI
/// text in `output` instead of populating `memory-statistics`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BuffersDocument {
    pub memory_statistics: MemoryStatistics,
    pub output: String,
}

/// Kernel buffer statistics, from either response shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MemoryStatistics {
    pub mbufs_current: i64,
    pub mbufs_cache: i64,
    pub mbufs_total: i64,
    pub mbufs_denied: i64,

    pub mbuf_clusters_current: i64,
    pub mbuf_clusters_cache: i64,
    pub mbuf_clusters_total: i64,
    pub mbuf_clusters_max: i64,
    pub mbuf_clusters_denied: i64,

    pub packet_zone_current: i64,
    pub packet_zone_cache: i64,

    pub jumbo_clusters_current_4k: i64,
    pub jumbo_clusters_cache_4k: i64,
    pub jumbo_clusters_total_4k: i64,
    pub jumbo_clusters_max_4k: i64,
    pub jumbo_clusters_denied_4k: i64,

    pub jumbo_clusters_current_9k: i64,
    pub jumbo_clusters_cache_9k: i64,
    pub jumbo_clusters_total_9k: i64,
    pub jumbo_clusters_max_9k: i64,
    pub jumbo_clusters_denied_9k: i64,

    pub jumbo_clusters_current_16k: i64,
    pub jumbo_clusters_cache_16k: i64,
    pub jumbo_clusters_total_16k: i64,
    pub jumbo_clusters_max_16k: i64,
    pub jumbo_clusters_denied_16k: i64,

    /// Network allocation values are reported in kilobytes.
    pub network_alloc_current: i64,
    pub network_alloc_cache: i64,
    pub network_alloc_total: i64,

    pub sfbufs_denied: i64,
    pub sfbufs_delayed: i64,

    pub mbuf_and_clusters_denied: i64,
    pub io_init: i64,
}

/// `show system information`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SystemInformationDocument {
    pub system_information: SystemInformation,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SystemInformation {
    pub hardware_model: String,
    pub os_name: String,
    pub os_version: String,
    pub serial_number: String,
    pub host_name: String,
}

/// `show chassis satellite detail`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SatelliteDocument {
    pub satellite_information: SatelliteInformation,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SatelliteInformation {
    pub satellite: Vec<Satellite>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Satellite {
    pub model: String,
    pub version: String,
    pub serial_number: String,
    pub alias: String,
    pub slot_id: i64,
    pub operation_state: String,
}

/// `show system license usage`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LicenseDocument {
    pub license_usage_summary: LicenseUsageSummary,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LicenseUsageSummary {
    pub feature_summary: Vec<LicenseFeature>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LicenseFeature {
    pub name: String,
    pub description: String,
    pub used_licensed: i64,
    pub licensed: i64,
    pub needed: i64,
    pub validity_type: String,
    pub end_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_nodes_default_to_zero_and_empty() {
        let doc: BuffersDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(doc.memory_statistics.mbufs_current, 0);
        assert_eq!(doc.output, "");

        let doc: SystemInformationDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(doc.system_information.hardware_model, "");
    }

    #[test]
    fn structured_buffers_decode() {
        let doc: BuffersDocument = serde_json::from_str(
            r#"{"memory-statistics": {"mbufs-current": 3216, "jumbo-clusters-max-9k": 1019555}}"#,
        )
        .unwrap();
        assert_eq!(doc.memory_statistics.mbufs_current, 3216);
        assert_eq!(doc.memory_statistics.jumbo_clusters_max_9k, 1019555);
        assert_eq!(doc.memory_statistics.sfbufs_denied, 0);
    }

    #[test]
    fn license_features_decode() {
        let doc: LicenseDocument = serde_json::from_str(
            r#"{"license-usage-summary": {"feature-summary": [
                {"name": "scale-subscriber", "description": "Subscribers",
                 "used-licensed": 10, "licensed": 1000, "needed": 0,
                 "validity-type": "permanent"}
            ]}}"#,
        )
        .unwrap();
        let feature = &doc.license_usage_summary.feature_summary[0];
        assert_eq!(feature.name, "scale-subscriber");
        assert_eq!(feature.licensed, 1000);
        assert_eq!(feature.end_date, "");
    }
}
