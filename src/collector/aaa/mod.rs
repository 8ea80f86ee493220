//! AAA sub-collections: accounting and authentication module statistics,
//! per-server radius counters and local certificate statistics. All five
//! steps are required.
//!
//! The radius-servers document arrives as parallel arrays, so emission goes
//! through [`crate::reconcile`] to keep every counter paired with the right
//! server address.

pub mod rpc;

use super::CollectError;
use crate::client::Client;
use crate::metrics::{Descriptor, MetricKind, Sample};
use crate::reconcile::reconcile;

const PREFIX_TARGET: &[&str] = &["target"];
const SERVER_LABELS: &[&str] = &["target", "server_address"];

const ACCOUNTING_COMMAND: &str = "show network-access aaa statistics accounting detail";
const AUTHENTICATION_COMMAND: &str = "show network-access aaa statistics authentication detail";
const RADIUS_COMMAND: &str = "show network-access aaa statistics detail radius";
const RADIUS_SERVERS_COMMAND: &str = "show network-access aaa radius-servers detail";
const LOCAL_CERT_COMMAND: &str = "show network-access local-certificate statistics extensive";

/// A per-server counter from the radius-servers document, keyed by the
/// reconciliation field it reads.
#[derive(Debug)]
struct RadiusServerMetric {
    field: &'static str,
    descriptor: Descriptor,
}

/// AAA metric descriptors.
#[derive(Debug)]
pub struct AaaMetrics {
    pub accounting_requests: Descriptor,
    pub accounting_request_failures: Descriptor,
    pub accounting_request_success: Descriptor,
    pub accounting_response_failures: Descriptor,
    pub accounting_response_success: Descriptor,
    pub accounting_timeouts: Descriptor,
    pub accounting_requests_pending: Descriptor,
    pub accounting_malformed_responses: Descriptor,
    pub accounting_retransmissions: Descriptor,
    pub accounting_bad_authenticators: Descriptor,
    pub accounting_packets_dropped: Descriptor,

    pub authentication_requests: Descriptor,
    pub authentication_accepts: Descriptor,
    pub authentication_rejects: Descriptor,
    pub authentication_radius_failures: Descriptor,
    pub authentication_invalid_credentials: Descriptor,
    pub authentication_malformed_requests: Descriptor,
    pub authentication_internal_failures: Descriptor,
    pub authentication_local_failures: Descriptor,
    pub authentication_ldap_failures: Descriptor,
    pub authentication_challenges: Descriptor,
    pub authentication_timeouts: Descriptor,

    pub radius_server_max_outstanding: Descriptor,
    pub radius_server_current_outstanding: Descriptor,
    pub radius_server_peak_outstanding: Descriptor,
    pub radius_server_fail_outstanding: Descriptor,

    radius_server_details: Vec<RadiusServerMetric>,

    pub local_cert_requests: Descriptor,
    pub local_cert_failed_requests: Descriptor,
    pub local_cert_total_responses: Descriptor,
    pub local_cert_configured_responses: Descriptor,
}

fn counter(name: &'static str, help: &'static str) -> Descriptor {
    Descriptor::new(name, help, MetricKind::Counter, PREFIX_TARGET)
}

fn server_metric(
    field: &'static str,
    name: &'static str,
    help: &'static str,
    kind: MetricKind,
) -> RadiusServerMetric {
    RadiusServerMetric {
        field,
        descriptor: Descriptor::new(name, help, kind, SERVER_LABELS),
    }
}

impl AaaMetrics {
    pub(crate) fn new() -> Self {
        use MetricKind::{Counter, Gauge};
        Self {
            accounting_requests: counter(
                "junos_aaa_accounting_requests_total",
                "Total accounting requests",
            ),
            accounting_request_failures: counter(
                "junos_aaa_accounting_request_failures_total",
                "Total accounting request failures",
            ),
            accounting_request_success: counter(
                "junos_aaa_accounting_request_success_total",
                "Total accounting request success",
            ),
            accounting_response_failures: counter(
                "junos_aaa_accounting_response_failures_total",
                "Total accounting response failures",
            ),
            accounting_response_success: counter(
                "junos_aaa_accounting_response_success_total",
                "Total accounting response success",
            ),
            accounting_timeouts: counter(
                "junos_aaa_accounting_timeouts_total",
                "Total accounting timeouts",
            ),
            accounting_requests_pending: Descriptor::new(
                "junos_aaa_accounting_requests_pending",
                "Pending accounting requests",
                Gauge,
                PREFIX_TARGET,
            ),
            accounting_malformed_responses: counter(
                "junos_aaa_accounting_malformed_responses_total",
                "Total accounting malformed responses",
            ),
            accounting_retransmissions: counter(
                "junos_aaa_accounting_retransmissions_total",
                "Total accounting retransmissions",
            ),
            accounting_bad_authenticators: counter(
                "junos_aaa_accounting_bad_authenticators_total",
                "Total accounting bad authenticators",
            ),
            accounting_packets_dropped: counter(
                "junos_aaa_accounting_packets_dropped_total",
                "Total accounting packets dropped",
            ),

            authentication_requests: counter(
                "junos_aaa_authentication_requests_total",
                "Total authentication requests",
            ),
            authentication_accepts: counter(
                "junos_aaa_authentication_accepts_total",
                "Total authentication accepts",
            ),
            authentication_rejects: counter(
                "junos_aaa_authentication_rejects_total",
                "Total authentication rejects",
            ),
            authentication_radius_failures: counter(
                "junos_aaa_authentication_radius_failures_total",
                "Total authentication radius failures",
            ),
            authentication_invalid_credentials: counter(
                "junos_aaa_authentication_invalid_credentials_total",
                "Total authentication invalid credentials",
            ),
            authentication_malformed_requests: counter(
                "junos_aaa_authentication_malformed_requests_total",
                "Total authentication malformed requests",
            ),
            authentication_internal_failures: counter(
                "junos_aaa_authentication_internal_failures_total",
                "Total authentication internal failures",
            ),
            authentication_local_failures: counter(
                "junos_aaa_authentication_local_failures_total",
                "Total authentication local failures",
            ),
            authentication_ldap_failures: counter(
                "junos_aaa_authentication_ldap_failures_total",
                "Total authentication ldap failures",
            ),
            authentication_challenges: counter(
                "junos_aaa_authentication_challenges_total",
                "Total authentication challenges",
            ),
            authentication_timeouts: counter(
                "junos_aaa_authentication_timeouts_total",
                "Total authentication timeouts",
            ),

            radius_server_max_outstanding: Descriptor::new(
                "junos_aaa_radius_server_max_outstanding",
                "Max outstanding requests for radius server",
                Gauge,
                SERVER_LABELS,
            ),
            radius_server_current_outstanding: Descriptor::new(
                "junos_aaa_radius_server_current_outstanding",
                "Current outstanding requests for radius server",
                Gauge,
                SERVER_LABELS,
            ),
            radius_server_peak_outstanding: Descriptor::new(
                "junos_aaa_radius_server_peak_outstanding",
                "Peak outstanding requests for radius server",
                Gauge,
                SERVER_LABELS,
            ),
            radius_server_fail_outstanding: Descriptor::new(
                "junos_aaa_radius_server_fail_outstanding",
                "Fail outstanding requests for radius server",
                Gauge,
                SERVER_LABELS,
            ),

            radius_server_details: vec![
                server_metric(
                    "last_rtt",
                    "junos_aaa_radius_server_last_rtt",
                    "Last RTT for radius server",
                    Gauge,
                ),
                server_metric(
                    "authentication_requests",
                    "junos_aaa_radius_server_auth_requests_total",
                    "Total authentication requests for radius server",
                    Counter,
                ),
                server_metric(
                    "authentication_rollover_requests",
                    "junos_aaa_radius_server_auth_rollover_requests_total",
                    "Total authentication rollover requests for radius server",
                    Counter,
                ),
                server_metric(
                    "authentication_retransmissions",
                    "junos_aaa_radius_server_auth_retransmissions_total",
                    "Total authentication retransmissions for radius server",
                    Counter,
                ),
                server_metric(
                    "accepts",
                    "junos_aaa_radius_server_accepts_total",
                    "Total accepts for radius server",
                    Counter,
                ),
                server_metric(
                    "rejects",
                    "junos_aaa_radius_server_rejects_total",
                    "Total rejects for radius server",
                    Counter,
                ),
                server_metric(
                    "challenges",
                    "junos_aaa_radius_server_challenges_total",
                    "Total challenges for radius server",
                    Counter,
                ),
                server_metric(
                    "authentication_malformed_responses",
                    "junos_aaa_radius_server_auth_malformed_responses_total",
                    "Total authentication malformed responses for radius server",
                    Counter,
                ),
                server_metric(
                    "authentication_bad_authenticators",
                    "junos_aaa_radius_server_auth_bad_authenticators_total",
                    "Total authentication bad authenticators for radius server",
                    Counter,
                ),
                server_metric(
                    "authentication_requests_pending",
                    "junos_aaa_radius_server_auth_requests_pending",
                    "Pending authentication requests for radius server",
                    Gauge,
                ),
                server_metric(
                    "authentication_timeouts",
                    "junos_aaa_radius_server_auth_timeouts_total",
                    "Total authentication timeouts for radius server",
                    Counter,
                ),
                server_metric(
                    "authentication_unknown_responses",
                    "junos_aaa_radius_server_auth_unknown_responses_total",
                    "Total authentication unknown responses for radius server",
                    Counter,
                ),
                server_metric(
                    "authentication_packets_dropped",
                    "junos_aaa_radius_server_auth_packets_dropped_total",
                    "Total authentication packets dropped for radius server",
                    Counter,
                ),
                server_metric(
                    "accounting_start_requests",
                    "junos_aaa_radius_server_acct_start_requests_total",
                    "Total accounting start requests for radius server",
                    Counter,
                ),
                server_metric(
                    "accounting_interim_requests",
                    "junos_aaa_radius_server_acct_interim_requests_total",
                    "Total accounting interim requests for radius server",
                    Counter,
                ),
                server_metric(
                    "accounting_stop_requests",
                    "junos_aaa_radius_server_acct_stop_requests_total",
                    "Total accounting stop requests for radius server",
                    Counter,
                ),
                server_metric(
                    "accounting_rollover_requests",
                    "junos_aaa_radius_server_acct_rollover_requests_total",
                    "Total accounting rollover requests for radius server",
                    Counter,
                ),
                server_metric(
                    "accounting_retransmissions",
                    "junos_aaa_radius_server_acct_retransmissions_total",
                    "Total accounting retransmissions for radius server",
                    Counter,
                ),
                server_metric(
                    "accounting_start_response",
                    "junos_aaa_radius_server_acct_start_response_total",
                    "Total accounting start response for radius server",
                    Counter,
                ),
                server_metric(
                    "accounting_interim_response",
                    "junos_aaa_radius_server_acct_interim_response_total",
                    "Total accounting interim response for radius server",
                    Counter,
                ),
                server_metric(
                    "accounting_stop_response",
                    "junos_aaa_radius_server_acct_stop_response_total",
                    "Total accounting stop response for radius server",
                    Counter,
                ),
                server_metric(
                    "accounting_malformed_response",
                    "junos_aaa_radius_server_acct_malformed_response_total",
                    "Total accounting malformed response for radius server",
                    Counter,
                ),
                server_metric(
                    "accounting_bad_authenticators",
                    "junos_aaa_radius_server_acct_bad_authenticators_total",
                    "Total accounting bad authenticators for radius server",
                    Counter,
                ),
                server_metric(
                    "accounting_requests_pending",
                    "junos_aaa_radius_server_acct_requests_pending",
                    "Pending accounting requests for radius server",
                    Gauge,
                ),
                server_metric(
                    "accounting_timeouts",
                    "junos_aaa_radius_server_acct_timeouts_total",
                    "Total accounting timeouts for radius server",
                    Counter,
                ),
                server_metric(
                    "accounting_unknown_responses",
                    "junos_aaa_radius_server_acct_unknown_responses_total",
                    "Total accounting unknown responses for radius server",
                    Counter,
                ),
                server_metric(
                    "accounting_packets_dropped",
                    "junos_aaa_radius_server_acct_packets_dropped_total",
                    "Total accounting packets dropped for radius server",
                    Counter,
                ),
            ],

            local_cert_requests: counter(
                "junos_aaa_local_cert_requests_total",
                "Total local certificate requests",
            ),
            local_cert_failed_requests: counter(
                "junos_aaa_local_cert_failed_requests_total",
                "Total local certificate failed requests",
            ),
            local_cert_total_responses: counter(
                "junos_aaa_local_cert_total_responses_total",
                "Total local certificate total responses",
            ),
            local_cert_configured_responses: counter(
                "junos_aaa_local_cert_configured_responses_total",
                "Total local certificate configured responses",
            ),
        }
    }

    pub fn descriptors(&self) -> Vec<&Descriptor> {
        let mut descriptors = vec![
            &self.accounting_requests,
            &self.accounting_request_failures,
            &self.accounting_request_success,
            &self.accounting_response_failures,
            &self.accounting_response_success,
            &self.accounting_timeouts,
            &self.accounting_requests_pending,
            &self.accounting_malformed_responses,
            &self.accounting_retransmissions,
            &self.accounting_bad_authenticators,
            &self.accounting_packets_dropped,
            &self.authentication_requests,
            &self.authentication_accepts,
            &self.authentication_rejects,
            &self.authentication_radius_failures,
            &self.authentication_invalid_credentials,
            &self.authentication_malformed_requests,
            &self.authentication_internal_failures,
            &self.authentication_local_failures,
            &self.authentication_ldap_failures,
            &self.authentication_challenges,
            &self.authentication_timeouts,
            &self.radius_server_max_outstanding,
            &self.radius_server_current_outstanding,
            &self.radius_server_peak_outstanding,
            &self.radius_server_fail_outstanding,
        ];
        descriptors.extend(self.radius_server_details.iter().map(|m| &m.descriptor));
        descriptors.extend([
            &self.local_cert_requests,
            &self.local_cert_failed_requests,
            &self.local_cert_total_responses,
            &self.local_cert_configured_responses,
        ]);
        descriptors
    }
}

pub(crate) fn collect<'r, C: Client>(
    client: &mut C,
    descs: &'r AaaMetrics,
    target: &str,
    out: &mut Vec<Sample<'r>>,
) -> Result<(), CollectError> {
    collect_accounting(client, descs, target, out)?;
    collect_authentication(client, descs, target, out)?;
    collect_radius(client, descs, target, out)?;
    collect_radius_servers(client, descs, target, out)?;
    collect_local_cert(client, descs, target, out)?;
    Ok(())
}

fn collect_accounting<'r, C: Client>(
    client: &mut C,
    descs: &'r AaaMetrics,
    target: &str,
    out: &mut Vec<Sample<'r>>,
) -> Result<(), CollectError> {
    let doc: rpc::AccountingDocument = client
        .run_and_decode(ACCOUNTING_COMMAND)
        .map_err(|e| CollectError::new(ACCOUNTING_COMMAND, e))?;

    let stats = doc.aaa_module_statistics.aaa_module_accounting_statistics;
    let labels = || vec![target.to_string()];
    out.push(descs.accounting_requests.sample(labels(), stats.requests as f64));
    out.push(
        descs
            .accounting_request_failures
            .sample(labels(), stats.accounting_request_failures as f64),
    );
    out.push(
        descs
            .accounting_request_success
            .sample(labels(), stats.accounting_request_success as f64),
    );
    out.push(
        descs
            .accounting_response_failures
            .sample(labels(), stats.accounting_response_failures as f64),
    );
    out.push(
        descs
            .accounting_response_success
            .sample(labels(), stats.accounting_response_success as f64),
    );
    out.push(descs.accounting_timeouts.sample(labels(), stats.timeouts as f64));
    out.push(
        descs
            .accounting_requests_pending
            .sample(labels(), stats.acct_requests_pending as f64),
    );
    out.push(
        descs
            .accounting_malformed_responses
            .sample(labels(), stats.acct_malformed_responses as f64),
    );
    out.push(
        descs
            .accounting_retransmissions
            .sample(labels(), stats.acct_retransmissions as f64),
    );
    out.push(
        descs
            .accounting_bad_authenticators
            .sample(labels(), stats.acct_bad_authenticators as f64),
    );
    out.push(
        descs
            .accounting_packets_dropped
            .sample(labels(), stats.acct_packets_dropped as f64),
    );

    Ok(())
}

fn collect_authentication<'r, C: Client>(
    client: &mut C,
    descs: &'r AaaMetrics,
    target: &str,
    out: &mut Vec<Sample<'r>>,
) -> Result<(), CollectError> {
    let doc: rpc::AuthenticationDocument = client
        .run_and_decode(AUTHENTICATION_COMMAND)
        .map_err(|e| CollectError::new(AUTHENTICATION_COMMAND, e))?;

    let stats = doc
        .aaa_module_statistics
        .aaa_module_authentication_statistics;
    let labels = || vec![target.to_string()];
    out.push(descs.authentication_requests.sample(labels(), stats.requests as f64));
    out.push(descs.authentication_accepts.sample(labels(), stats.accepts as f64));
    out.push(descs.authentication_rejects.sample(labels(), stats.rejects as f64));
    out.push(
        descs
            .authentication_radius_failures
            .sample(labels(), stats.radius_failures as f64),
    );
    out.push(
        descs
            .authentication_invalid_credentials
            .sample(labels(), stats.rejects_invalid_credentials as f64),
    );
    out.push(
        descs
            .authentication_malformed_requests
            .sample(labels(), stats.rejects_malformed_request as f64),
    );
    out.push(
        descs
            .authentication_internal_failures
            .sample(labels(), stats.rejects_internal_failure as f64),
    );
    out.push(
        descs
            .authentication_local_failures
            .sample(labels(), stats.local_failures as f64),
    );
    out.push(
        descs
            .authentication_ldap_failures
            .sample(labels(), stats.ldap_failures as f64),
    );
    out.push(descs.authentication_challenges.sample(labels(), stats.challenges as f64));
    out.push(descs.authentication_timeouts.sample(labels(), stats.timeouts as f64));

    Ok(())
}

fn collect_radius<'r, C: Client>(
    client: &mut C,
    descs: &'r AaaMetrics,
    target: &str,
    out: &mut Vec<Sample<'r>>,
) -> Result<(), CollectError> {
    let doc: rpc::RadiusDocument = client
        .run_and_decode(RADIUS_COMMAND)
        .map_err(|e| CollectError::new(RADIUS_COMMAND, e))?;

    for server in &doc.aaa_module_statistics.aaa_module_radius_statistics.radius_server {
        let labels = || vec![target.to_string(), server.server_address.clone()];
        out.push(
            descs
                .radius_server_max_outstanding
                .sample(labels(), server.max_outstanding as f64),
        );
        out.push(
            descs
                .radius_server_current_outstanding
                .sample(labels(), server.current_outstanding as f64),
        );
        out.push(
            descs
                .radius_server_peak_outstanding
                .sample(labels(), server.peak_outstanding as f64),
        );
        out.push(
            descs
                .radius_server_fail_outstanding
                .sample(labels(), server.fail_outstanding as f64),
        );
    }

    Ok(())
}

fn collect_radius_servers<'r, C: Client>(
    client: &mut C,
    descs: &'r AaaMetrics,
    target: &str,
    out: &mut Vec<Sample<'r>>,
) -> Result<(), CollectError> {
    let doc: rpc::RadiusServersDocument = client
        .run_and_decode(RADIUS_SERVERS_COMMAND)
        .map_err(|e| CollectError::new(RADIUS_SERVERS_COMMAND, e))?;

    let stats = doc
        .aaa_module_radius_servers_information
        .aaa_module_radius_servers_statistics;
    let records = reconcile(
        &stats.server_address,
        &[
            ("last_rtt", &stats.last_rtt),
            ("authentication_requests", &stats.authentication_requests),
            (
                "authentication_rollover_requests",
                &stats.authentication_rollover_requests,
            ),
            (
                "authentication_retransmissions",
                &stats.authentication_retransmissions,
            ),
            ("accepts", &stats.accepts),
            ("rejects", &stats.rejects),
            ("challenges", &stats.challenges),
            (
                "authentication_malformed_responses",
                &stats.authentication_malformed_responses,
            ),
            (
                "authentication_bad_authenticators",
                &stats.authentication_bad_authenticators,
            ),
            (
                "authentication_requests_pending",
                &stats.authentication_requests_pending,
            ),
            ("authentication_timeouts", &stats.authentication_timeouts),
            (
                "authentication_unknown_responses",
                &stats.authentication_unknown_responses,
            ),
            (
                "authentication_packets_dropped",
                &stats.authentication_packets_dropped,
            ),
            ("accounting_start_requests", &stats.accounting_start_requests),
            (
                "accounting_interim_requests",
                &stats.accounting_interim_requests,
            ),
            ("accounting_stop_requests", &stats.accounting_stop_requests),
            (
                "accounting_rollover_requests",
                &stats.accounting_rollover_requests,
            ),
            (
                "accounting_retransmissions",
                &stats.accounting_retransmissions,
            ),
            ("accounting_start_response", &stats.accounting_start_response),
            (
                "accounting_interim_response",
                &stats.accounting_interim_response,
            ),
            ("accounting_stop_response", &stats.accounting_stop_response),
            (
                "accounting_malformed_response",
                &stats.accounting_malformed_response,
            ),
            (
                "accounting_bad_authenticators",
                &stats.accounting_bad_authenticators,
            ),
            (
                "accounting_requests_pending",
                &stats.accounting_requests_pending,
            ),
            ("accounting_timeouts", &stats.accounting_timeouts),
            (
                "accounting_unknown_responses",
                &stats.accounting_unknown_responses,
            ),
            (
                "accounting_packets_dropped",
                &stats.accounting_packets_dropped,
            ),
        ],
    );

    for record in &records {
        for metric in &descs.radius_server_details {
            let labels = vec![target.to_string(), record.key().to_string()];
            out.push(metric.descriptor.sample(labels, record.value(metric.field)));
        }
    }

    Ok(())
}

fn collect_local_cert<'r, C: Client>(
    client: &mut C,
    descs: &'r AaaMetrics,
    target: &str,
    out: &mut Vec<Sample<'r>>,
) -> Result<(), CollectError> {
    let doc: rpc::LocalCertificateDocument = client
        .run_and_decode(LOCAL_CERT_COMMAND)
        .map_err(|e| CollectError::new(LOCAL_CERT_COMMAND, e))?;

    let data = &doc
        .local_cert_statistics_information
        .local_cert_statistics_table
        .local_cert_statistics_table
        .local_cert_statistics_data;
    for counter in data {
        let descriptor = match counter.local_cert_counter_name.as_str() {
            "total-requests" => &descs.local_cert_requests,
            "failed-requests" => &descs.local_cert_failed_requests,
            "total-responses" => &descs.local_cert_total_responses,
            // The device misspells this counter name.
            "cofigured-responses" => &descs.local_cert_configured_responses,
            _ => continue,
        };
        out.push(descriptor.sample(
            vec![target.to_string()],
            counter.local_cert_counter_value as f64,
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockClient;

    #[test]
    fn descriptor_count_covers_all_families() {
        let descs = AaaMetrics::new();
        assert_eq!(descs.descriptors().len(), 57);
    }

    #[test]
    fn accounting_counters_are_emitted_in_order() {
        let mut client = MockClient::new();
        client.respond(
            ACCOUNTING_COMMAND,
            r#"{"aaa-module-statistics": {"aaa-module-accounting-statistics": {
                "requests": 100, "accounting-request-success": 98,
                "timeouts": 2, "acct-requests-pending": 1
            }}}"#,
        );

        let descs = AaaMetrics::new();
        let mut out = Vec::new();
        collect_accounting(&mut client, &descs, "r1", &mut out).unwrap();

        assert_eq!(out.len(), 11);
        assert_eq!(out[0].descriptor().name(), "junos_aaa_accounting_requests_total");
        assert_eq!(out[0].value(), 100.0);
        let pending = out
            .iter()
            .find(|s| s.descriptor().name() == "junos_aaa_accounting_requests_pending")
            .unwrap();
        assert_eq!(pending.value(), 1.0);
    }

    #[test]
    fn radius_servers_zero_fill_missing_counters() {
        let mut client = MockClient::new();
        client.respond(
            RADIUS_SERVERS_COMMAND,
            r#"{"aaa-module-radius-servers-information":
                {"aaa-module-radius-servers-statistics": {
                    "server-address": ["10.0.0.1", "10.0.0.2"],
                    "last-rtt": [12],
                    "accepts": [100, 80]
                }}}"#,
        );

        let descs = AaaMetrics::new();
        let mut out = Vec::new();
        collect_radius_servers(&mut client, &descs, "r1", &mut out).unwrap();

        // 27 samples per server.
        assert_eq!(out.len(), 54);

        let rtt: Vec<_> = out
            .iter()
            .filter(|s| s.descriptor().name() == "junos_aaa_radius_server_last_rtt")
            .collect();
        assert_eq!(rtt[0].label_values(), ["r1", "10.0.0.1"]);
        assert_eq!(rtt[0].value(), 12.0);
        assert_eq!(rtt[1].label_values(), ["r1", "10.0.0.2"]);
        assert_eq!(rtt[1].value(), 0.0);

        let accepts: Vec<_> = out
            .iter()
            .filter(|s| s.descriptor().name() == "junos_aaa_radius_server_accepts_total")
            .collect();
        assert_eq!(accepts[1].value(), 80.0);
    }

    #[test]
    fn local_cert_matches_device_counter_names() {
        let mut client = MockClient::new();
        client.respond(
            LOCAL_CERT_COMMAND,
            r#"{"local-cert-statistics-information": {"local-cert-statistics-table":
                {"local-cert-statistics-table": {"local-cert-statistics-data": [
                    {"local-cert-counter-name": "total-requests",
                     "local-cert-counter-value": 42},
                    {"local-cert-counter-name": "cofigured-responses",
                     "local-cert-counter-value": 7},
                    {"local-cert-counter-name": "unrelated-counter",
                     "local-cert-counter-value": 9}
                ]}}}}"#,
        );

        let descs = AaaMetrics::new();
        let mut out = Vec::new();
        collect_local_cert(&mut client, &descs, "r1", &mut out).unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].descriptor().name(), "junos_aaa_local_cert_requests_total");
        assert_eq!(out[0].value(), 42.0);
        assert_eq!(
            out[1].descriptor().name(),
            "junos_aaa_local_cert_configured_responses_total"
        );
        assert_eq!(out[1].value(), 7.0);
    }
}
