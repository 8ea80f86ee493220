//! System sub-collections: kernel buffers, hardware inventory, satellite
//! inventory and license usage.
//!
//! Buffers and system information are required steps; satellite and license
//! collection are optional, gated by [`Capability`] predicates, and their
//! failures are swallowed — devices report a variety of errors when the
//! feature is absent.

pub mod buffers;
pub mod rpc;

use chrono::{Local, NaiveDate};
use tracing::debug;

use super::CollectError;
use crate::client::{Capability, Client};
use crate::metrics::{Descriptor, MetricKind, Sample};

const PREFIX_TARGET: &[&str] = &["target"];
const PREFIX_TARGET_PAGE_SIZE: &[&str] = &["target", "page_size"];
const HARDWARE_LABELS: &[&str] = &[
    "target", "model", "os", "os_version", "serial", "hostname", "alias", "slot_id", "state",
];
const LICENSE_LABELS: &[&str] = &["target", "feature_name", "feature_description"];

const BUFFERS_COMMAND: &str = "show system buffers";
const INFORMATION_COMMAND: &str = "show system information";
const SATELLITE_COMMAND: &str = "show chassis satellite detail";
const LICENSE_COMMAND: &str = "show system license usage";

/// System metric descriptors.
#[derive(Debug)]
pub struct SystemMetrics {
    pub mbufs_current: Descriptor,
    pub mbufs_cache: Descriptor,
    pub mbufs_total: Descriptor,
    pub mbufs_denied: Descriptor,

    pub mbuf_clusters_current: Descriptor,
    pub mbuf_clusters_cache: Descriptor,
    pub mbuf_clusters_total: Descriptor,
    pub mbuf_clusters_max: Descriptor,
    pub mbuf_clusters_denied: Descriptor,

    pub packet_zone_current: Descriptor,
    pub packet_zone_cache: Descriptor,

    pub jumbo_clusters_current: Descriptor,
    pub jumbo_clusters_cache: Descriptor,
    pub jumbo_clusters_total: Descriptor,
    pub jumbo_clusters_max: Descriptor,
    pub jumbo_clusters_denied: Descriptor,

    pub network_alloc_current: Descriptor,
    pub network_alloc_cache: Descriptor,
    pub network_alloc_total: Descriptor,

    pub sfbufs_denied: Descriptor,
    pub sfbufs_delayed: Descriptor,

    pub io_init: Descriptor,
    pub mbuf_and_clusters_denied: Descriptor,

    pub hardware_info: Descriptor,

    pub license_used: Descriptor,
    pub license_installed: Descriptor,
    pub license_needed: Descriptor,
    pub license_expiry: Descriptor,
}

impl SystemMetrics {
    pub(crate) fn new() -> Self {
        use MetricKind::Gauge;
        Self {
            mbufs_current: Descriptor::new(
                "junos_system_mbufs_bytes_current",
                "Current number of bytes in mbufs",
                Gauge,
                PREFIX_TARGET,
            ),
            mbufs_cache: Descriptor::new(
                "junos_system_mbufs_bytes_cache",
                "Cached number of bytes in mbufs",
                Gauge,
                PREFIX_TARGET,
            ),
            mbufs_total: Descriptor::new(
                "junos_system_mbufs_bytes_total",
                "Total number of bytes in mbufs",
                Gauge,
                PREFIX_TARGET,
            ),
            mbufs_denied: Descriptor::new(
                "junos_system_mbufs_denied_count",
                "Number of mbuf requests denied",
                Gauge,
                PREFIX_TARGET,
            ),
            mbuf_clusters_current: Descriptor::new(
                "junos_system_mbuf_cluster_bytes_current",
                "Current number of bytes in mbuf clusters",
                Gauge,
                PREFIX_TARGET,
            ),
            mbuf_clusters_cache: Descriptor::new(
                "junos_system_mbuf_cluster_bytes_cache",
                "Cached number of bytes in mbuf clusters",
                Gauge,
                PREFIX_TARGET,
            ),
            mbuf_clusters_total: Descriptor::new(
                "junos_system_mbuf_cluster_bytes_total",
                "Total number of bytes in mbuf clusters",
                Gauge,
                PREFIX_TARGET,
            ),
            mbuf_clusters_max: Descriptor::new(
                "junos_system_mbuf_cluster_bytes_max",
                "Max number of bytes in mbuf clusters",
                Gauge,
                PREFIX_TARGET,
            ),
            mbuf_clusters_denied: Descriptor::new(
                "junos_system_mbufs_and_clusters_denied_count",
                "Number of mbuf cluster requests denied",
                Gauge,
                PREFIX_TARGET,
            ),
            packet_zone_current: Descriptor::new(
                "junos_system_mbuf_and_clusters_from_packet_zone_bytes_current",
                "Current number of bytes used for mbuf+clusters in packet zone",
                Gauge,
                PREFIX_TARGET,
            ),
            packet_zone_cache: Descriptor::new(
                "junos_system_mbuf_and_clusters_from_packet_zone_bytes_cache",
                "Cached number of bytes used for mbuf+clusters in packet zone",
                Gauge,
                PREFIX_TARGET,
            ),
            jumbo_clusters_current: Descriptor::new(
                "junos_system_jumbo_clusters_current",
                "Current jumbo clusters in use",
                Gauge,
                PREFIX_TARGET_PAGE_SIZE,
            ),
            jumbo_clusters_cache: Descriptor::new(
                "junos_system_jumbo_clusters_cache",
                "Cached jumbo clusters in use",
                Gauge,
                PREFIX_TARGET_PAGE_SIZE,
            ),
            jumbo_clusters_total: Descriptor::new(
                "junos_system_jumbo_clusters_total",
                "Total jumbo clusters in use",
                Gauge,
                PREFIX_TARGET_PAGE_SIZE,
            ),
            jumbo_clusters_max: Descriptor::new(
                "junos_system_jumbo_clusters_max",
                "Max jumbo clusters in use",
                Gauge,
                PREFIX_TARGET_PAGE_SIZE,
            ),
            jumbo_clusters_denied: Descriptor::new(
                "junos_system_jumbo_clusters_denied_count",
                "Number of jumbo cluster requests denied",
                Gauge,
                PREFIX_TARGET_PAGE_SIZE,
            ),
            network_alloc_current: Descriptor::new(
                "junos_system_network_allocated_bytes_current",
                "Current number of bytes allocated for network",
                Gauge,
                PREFIX_TARGET,
            ),
            network_alloc_cache: Descriptor::new(
                "junos_system_network_allocated_bytes_cache",
                "Cached number of bytes allocated for network",
                Gauge,
                PREFIX_TARGET,
            ),
            network_alloc_total: Descriptor::new(
                "junos_system_network_allocated_bytes_total",
                "Total number of bytes allocated for network",
                Gauge,
                PREFIX_TARGET,
            ),
            sfbufs_denied: Descriptor::new(
                "junos_system_sfbufs_denied_count",
                "Number of sfbuf requests denied",
                Gauge,
                PREFIX_TARGET,
            ),
            sfbufs_delayed: Descriptor::new(
                "junos_system_sfbufs_delayed_count",
                "Number of sfbuf requests delayed",
                Gauge,
                PREFIX_TARGET,
            ),
            io_init: Descriptor::new(
                "junos_system_io_requests_count",
                "Number of I/O requests initiated",
                Gauge,
                PREFIX_TARGET,
            ),
            mbuf_and_clusters_denied: Descriptor::new(
                "junos_system_mbuf_and_clusters_denied_count",
                "Number of mbuf+cluster requests denied",
                Gauge,
                PREFIX_TARGET,
            ),
            hardware_info: Descriptor::new(
                "junos_system_hardware_info",
                "Hardware information about this system",
                Gauge,
                HARDWARE_LABELS,
            ),
            license_used: Descriptor::new(
                "junos_system_license_used",
                "Amount of license used",
                Gauge,
                LICENSE_LABELS,
            ),
            license_installed: Descriptor::new(
                "junos_system_license_installed",
                "Amount of license installed",
                Gauge,
                LICENSE_LABELS,
            ),
            license_needed: Descriptor::new(
                "junos_system_license_needed",
                "Amount of license needed",
                Gauge,
                LICENSE_LABELS,
            ),
            license_expiry: Descriptor::new(
                "junos_system_license_expiry",
                "Days until expiry, if applicable; -1 = expired; +Inf = permanent; -Inf = invalid",
                Gauge,
                LICENSE_LABELS,
            ),
        }
    }

    pub fn descriptors(&self) -> Vec<&Descriptor> {
        vec![
            &self.mbufs_current,
            &self.mbufs_cache,
            &self.mbufs_total,
            &self.mbufs_denied,
            &self.mbuf_clusters_current,
            &self.mbuf_clusters_cache,
            &self.mbuf_clusters_total,
            &self.mbuf_clusters_max,
            &self.mbuf_clusters_denied,
            &self.packet_zone_current,
            &self.packet_zone_cache,
            &self.jumbo_clusters_current,
            &self.jumbo_clusters_cache,
            &self.jumbo_clusters_total,
            &self.jumbo_clusters_max,
            &self.jumbo_clusters_denied,
            &self.network_alloc_current,
            &self.network_alloc_cache,
            &self.network_alloc_total,
            &self.sfbufs_denied,
            &self.sfbufs_delayed,
            &self.io_init,
            &self.mbuf_and_clusters_denied,
            &self.hardware_info,
            &self.license_used,
            &self.license_installed,
            &self.license_needed,
            &self.license_expiry,
        ]
    }
}

pub(crate) fn collect<'r, C: Client>(
    client: &mut C,
    descs: &'r SystemMetrics,
    target: &str,
    out: &mut Vec<Sample<'r>>,
) -> Result<(), CollectError> {
    collect_buffers(client, descs, target, out)?;
    collect_system_information(client, descs, target, out)?;
    if client.is_feature_enabled(Capability::SatelliteTelemetry) {
        collect_satellites(client, descs, target, out);
    }
    if client.is_feature_enabled(Capability::LicenseScraping) {
        collect_license(client, descs, target, out);
    }
    Ok(())
}

fn collect_buffers<'r, C: Client>(
    client: &mut C,
    descs: &'r SystemMetrics,
    target: &str,
    out: &mut Vec<Sample<'r>>,
) -> Result<(), CollectError> {
    let raw = client
        .run_raw(BUFFERS_COMMAND)
        .map_err(|e| CollectError::new(BUFFERS_COMMAND, e))?;
    let (stats, _mode) = buffers::parse(&raw).map_err(|e| CollectError::new(BUFFERS_COMMAND, e))?;

    let base = vec![target.to_string()];
    let push = |out: &mut Vec<Sample<'r>>, desc: &'r Descriptor, value: i64| {
        out.push(desc.sample(base.clone(), value as f64));
    };

    push(out, &descs.mbufs_current, stats.mbufs_current);
    push(out, &descs.mbufs_cache, stats.mbufs_cache);
    push(out, &descs.mbufs_total, stats.mbufs_total);
    push(out, &descs.mbufs_denied, stats.mbufs_denied);

    push(out, &descs.mbuf_clusters_current, stats.mbuf_clusters_current);
    push(out, &descs.mbuf_clusters_cache, stats.mbuf_clusters_cache);
    push(out, &descs.mbuf_clusters_total, stats.mbuf_clusters_total);
    push(out, &descs.mbuf_clusters_max, stats.mbuf_clusters_max);
    push(out, &descs.mbuf_clusters_denied, stats.mbuf_clusters_denied);

    push(out, &descs.packet_zone_current, stats.packet_zone_current);
    push(out, &descs.packet_zone_cache, stats.packet_zone_cache);

    let jumbo = [
        (
            "4k",
            stats.jumbo_clusters_current_4k,
            stats.jumbo_clusters_cache_4k,
            stats.jumbo_clusters_total_4k,
            stats.jumbo_clusters_max_4k,
            stats.jumbo_clusters_denied_4k,
        ),
        (
            "9k",
            stats.jumbo_clusters_current_9k,
            stats.jumbo_clusters_cache_9k,
            stats.jumbo_clusters_total_9k,
            stats.jumbo_clusters_max_9k,
            stats.jumbo_clusters_denied_9k,
        ),
        (
            "16k",
            stats.jumbo_clusters_current_16k,
            stats.jumbo_clusters_cache_16k,
            stats.jumbo_clusters_total_16k,
            stats.jumbo_clusters_max_16k,
            stats.jumbo_clusters_denied_16k,
        ),
    ];
    for (page_size, current, cache, total, max, denied) in jumbo {
        let labels = vec![target.to_string(), page_size.to_string()];
        out.push(descs.jumbo_clusters_current.sample(labels.clone(), current as f64));
        out.push(descs.jumbo_clusters_cache.sample(labels.clone(), cache as f64));
        out.push(descs.jumbo_clusters_total.sample(labels.clone(), total as f64));
        out.push(descs.jumbo_clusters_max.sample(labels.clone(), max as f64));
        out.push(descs.jumbo_clusters_denied.sample(labels, denied as f64));
    }

    push(out, &descs.sfbufs_denied, stats.sfbufs_denied);
    push(out, &descs.sfbufs_delayed, stats.sfbufs_delayed);

    push(out, &descs.mbuf_and_clusters_denied, stats.mbuf_and_clusters_denied);
    push(out, &descs.io_init, stats.io_init);

    // Network allocation values are reported in kilobytes.
    push(out, &descs.network_alloc_current, stats.network_alloc_current * 1024);
    push(out, &descs.network_alloc_cache, stats.network_alloc_cache * 1024);
    push(out, &descs.network_alloc_total, stats.network_alloc_total * 1024);

    Ok(())
}

fn collect_system_information<'r, C: Client>(
    client: &mut C,
    descs: &'r SystemMetrics,
    target: &str,
    out: &mut Vec<Sample<'r>>,
) -> Result<(), CollectError> {
    let doc: rpc::SystemInformationDocument = client
        .run_and_decode(INFORMATION_COMMAND)
        .map_err(|e| CollectError::new(INFORMATION_COMMAND, e))?;

    let info = doc.system_information;
    let labels = vec![
        target.to_string(),
        info.hardware_model,
        info.os_name,
        info.os_version,
        info.serial_number,
        info.host_name,
        String::new(),
        String::new(),
        String::new(),
    ];
    out.push(descs.hardware_info.sample(labels, 1.0));

    Ok(())
}

fn collect_satellites<'r, C: Client>(
    client: &mut C,
    descs: &'r SystemMetrics,
    target: &str,
    out: &mut Vec<Sample<'r>>,
) {
    let doc: rpc::SatelliteDocument = match client.run_and_decode(SATELLITE_COMMAND) {
        Ok(doc) => doc,
        Err(e) => {
            debug!(command = SATELLITE_COMMAND, error = %e, "satellite collection skipped");
            return;
        }
    };

    for satellite in &doc.satellite_information.satellite {
        let labels = vec![
            target.to_string(),
            satellite.model.to_lowercase(),
            "satellite".to_string(),
            satellite.version.clone(),
            satellite.serial_number.clone(),
            String::new(),
            satellite.alias.clone(),
            satellite.slot_id.to_string(),
            satellite.operation_state.to_lowercase(),
        ];
        out.push(descs.hardware_info.sample(labels, 1.0));
    }
}

fn collect_license<'r, C: Client>(
    client: &mut C,
    descs: &'r SystemMetrics,
    target: &str,
    out: &mut Vec<Sample<'r>>,
) {
    let doc: rpc::LicenseDocument = match client.run_and_decode(LICENSE_COMMAND) {
        Ok(doc) => doc,
        Err(e) => {
            debug!(command = LICENSE_COMMAND, error = %e, "license collection skipped");
            return;
        }
    };

    let today = Local::now().date_naive();
    for feature in &doc.license_usage_summary.feature_summary {
        let labels = vec![
            target.to_string(),
            feature.name.to_lowercase(),
            feature.description.to_lowercase(),
        ];
        out.push(descs.license_used.sample(labels.clone(), feature.used_licensed as f64));
        out.push(descs.license_installed.sample(labels.clone(), feature.licensed as f64));
        out.push(descs.license_needed.sample(labels.clone(), feature.needed as f64));

        let expiry = license_expiry_days(&feature.validity_type, &feature.end_date, today);
        out.push(descs.license_expiry.sample(labels, expiry));
    }
}

/// Four-way license expiry rule, per license entry.
///
/// "expired" → -1; "permanent" → +∞; otherwise the end date is parsed as
/// `%Y-%m-%d` and the result is the day count until it — possibly negative
/// without the entry being flagged "expired" by its validity type. An
/// unparseable date is the -∞ invalid sentinel.
pub(crate) fn license_expiry_days(validity: &str, end_date: &str, today: NaiveDate) -> f64 {
    if validity == "expired" {
        return -1.0;
    }
    if validity == "permanent" {
        return f64::INFINITY;
    }
    match NaiveDate::parse_from_str(end_date.to_lowercase().trim(), "%Y-%m-%d") {
        Ok(date) => (date - today).num_days() as f64,
        Err(_) => f64::NEG_INFINITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    #[test]
    fn expired_validity_is_minus_one() {
        assert_eq!(license_expiry_days("expired", "2020-01-01", today()), -1.0);
    }

    #[test]
    fn permanent_validity_is_positive_infinity() {
        assert_eq!(license_expiry_days("permanent", "", today()), f64::INFINITY);
    }

    #[test]
    fn far_future_date_is_a_large_positive_day_count() {
        let days = license_expiry_days("valid", "2099-01-01", today());
        assert!(days > 26_000.0, "got {}", days);
    }

    #[test]
    fn unparseable_date_is_negative_infinity() {
        assert_eq!(
            license_expiry_days("valid", "not-a-date", today()),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn past_date_goes_negative_without_being_expired() {
        let days = license_expiry_days("valid", "2026-08-19", today());
        assert_eq!(days, -10.0);
    }

    #[test]
    fn near_future_date_counts_days() {
        let days = license_expiry_days("valid", "2026-09-08", today());
        assert_eq!(days, 10.0);
    }
}
