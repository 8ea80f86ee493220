//! Structured response schemas for the AAA sub-collections.
//!
//! The radius-servers document is peculiar: the device reports one flat
//! node per statistic per server, so every field arrives as a parallel
//! array indexed by server position rather than as a list of per-server
//! records.

use serde::Deserialize;

/// `show network-access aaa statistics accounting detail`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AccountingDocument {
    pub aaa_module_statistics: AccountingModuleStatistics,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AccountingModuleStatistics {
    pub aaa_module_accounting_statistics: AccountingStatistics,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AccountingStatistics {
    pub requests: i64,
    pub accounting_request_failures: i64,
    pub accounting_request_success: i64,
    pub accounting_response_failures: i64,
    pub accounting_response_success: i64,
    pub timeouts: i64,
    pub acct_requests_pending: i64,
    pub acct_malformed_responses: i64,
    pub acct_retransmissions: i64,
    pub acct_bad_authenticators: i64,
    pub acct_packets_dropped: i64,
}

/// `show network-access aaa statistics authentication detail`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AuthenticationDocument {
    pub aaa_module_statistics: AuthenticationModuleStatistics,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AuthenticationModuleStatistics {
    pub aaa_module_authentication_statistics: AuthenticationStatistics,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AuthenticationStatistics {
    pub requests: i64,
    pub accepts: i64,
    pub rejects: i64,
    pub radius_failures: i64,
    pub rejects_invalid_credentials: i64,
    pub rejects_malformed_request: i64,
    pub rejects_internal_failure: i64,
    pub local_failures: i64,
    pub ldap_failures: i64,
    pub challenges: i64,
    pub timeouts: i64,
}

/// `show network-access aaa statistics detail radius`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RadiusDocument {
    pub aaa_module_statistics: RadiusModuleStatistics,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RadiusModuleStatistics {
    pub aaa_module_radius_statistics: RadiusStatistics,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RadiusStatistics {
    pub radius_server: Vec<RadiusServer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RadiusServer {
    pub server_address: String,
    pub max_outstanding: i64,
    pub current_outstanding: i64,
    pub peak_outstanding: i64,
    pub fail_outstanding: i64,
}

/// `show network-access aaa radius-servers detail`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RadiusServersDocument {
    pub aaa_module_radius_servers_information: RadiusServersInformation,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RadiusServersInformation {
    pub aaa_module_radius_servers_statistics: RadiusServersStatistics,
}

/// Parallel arrays, one entry per configured server. Arrays shorter than
/// `server_address` are padded with zeroes at emit time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RadiusServersStatistics {
    pub server_address: Vec<String>,
    pub last_rtt: Vec<i64>,
    pub authentication_requests: Vec<i64>,
    pub authentication_rollover_requests: Vec<i64>,
    pub authentication_retransmissions: Vec<i64>,
    pub accepts: Vec<i64>,
    pub rejects: Vec<i64>,
    pub challenges: Vec<i64>,
    pub authentication_malformed_responses: Vec<i64>,
    pub authentication_bad_authenticators: Vec<i64>,
    pub authentication_requests_pending: Vec<i64>,
    pub authentication_timeouts: Vec<i64>,
    pub authentication_unknown_responses: Vec<i64>,
    pub authentication_packets_dropped: Vec<i64>,
    pub accounting_start_requests: Vec<i64>,
    pub accounting_interim_requests: Vec<i64>,
    pub accounting_stop_requests: Vec<i64>,
    pub accounting_rollover_requests: Vec<i64>,
    pub accounting_retransmissions: Vec<i64>,
    pub accounting_start_response: Vec<i64>,
    pub accounting_interim_response: Vec<i64>,
    pub accounting_stop_response: Vec<i64>,
    pub accounting_malformed_response: Vec<i64>,
    pub accounting_bad_authenticators: Vec<i64>,
    pub accounting_requests_pending: Vec<i64>,
    pub accounting_timeouts: Vec<i64>,
    pub accounting_unknown_responses: Vec<i64>,
    pub accounting_packets_dropped: Vec<i64>,
}

/// `show network-access local-certificate statistics extensive`.
///
/// The device nests a `local-cert-statistics-table` node inside another
/// node of the same name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LocalCertificateDocument {
    pub local_cert_statistics_information: LocalCertificateInformation,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LocalCertificateInformation {
    pub local_cert_statistics_table: LocalCertificateOuterTable,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LocalCertificateOuterTable {
    pub local_cert_statistics_table: LocalCertificateTable,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LocalCertificateTable {
    pub local_cert_statistics_data: Vec<LocalCertificateCounter>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LocalCertificateCounter {
    pub local_cert_counter_name: String,
    pub local_cert_counter_value: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accounting_document_decodes() {
        let doc: AccountingDocument = serde_json::from_str(
            r#"{"aaa-module-statistics": {"aaa-module-accounting-statistics": {
                "requests": 100, "accounting-request-failures": 2,
                "acct-requests-pending": 3, "acct-packets-dropped": 1
            }}}"#,
        )
        .unwrap();
        let stats = doc.aaa_module_statistics.aaa_module_accounting_statistics;
        assert_eq!(stats.requests, 100);
        assert_eq!(stats.accounting_request_failures, 2);
        assert_eq!(stats.acct_requests_pending, 3);
        assert_eq!(stats.accounting_request_success, 0);
    }

    #[test]
    fn radius_servers_arrays_decode_independently() {
        let doc: RadiusServersDocument = serde_json::from_str(
            r#"{"aaa-module-radius-servers-information":
                {"aaa-module-radius-servers-statistics": {
                    "server-address": ["10.0.0.1", "10.0.0.2"],
                    "last-rtt": [12, 9],
                    "accepts": [100]
                }}}"#,
        )
        .unwrap();
        let stats = doc
            .aaa_module_radius_servers_information
            .aaa_module_radius_servers_statistics;
        assert_eq!(stats.server_address.len(), 2);
        assert_eq!(stats.last_rtt, [12, 9]);
        assert_eq!(stats.accepts, [100]);
        assert!(stats.rejects.is_empty());
    }

    #[test]
    fn local_certificate_double_nesting_decodes() {
        let doc: LocalCertificateDocument = serde_json::from_str(
            r#"{"local-cert-statistics-information": {"local-cert-statistics-table":
                {"local-cert-statistics-table": {"local-cert-statistics-data": [
                    {"local-cert-counter-name": "total-requests",
                     "local-cert-counter-value": 42}
                ]}}}}"#,
        )
        .unwrap();
        let data = &doc
            .local_cert_statistics_information
            .local_cert_statistics_table
            .local_cert_statistics_table
            .local_cert_statistics_data;
        assert_eq!(data[0].local_cert_counter_name, "total-requests");
        assert_eq!(data[0].local_cert_counter_value, 42);
    }
}
