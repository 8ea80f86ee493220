//! Parallel-array reconciliation.
//!
//! Some counter groups arrive as parallel arrays: one "key" array of entity
//! identities (e.g. server addresses) plus one array per counter,
//! index-correlated with the keys. Devices omit counters for entities where
//! a feature is disabled, so the array lengths are not guaranteed to match.
//! Reconciliation aligns every value array against the key array so that
//! downstream label assembly can never mispair an entity with another
//! entity's counter.

use std::collections::HashMap;

/// Per-entity grouping of index-aligned counters.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<'a> {
    key: &'a str,
    fields: HashMap<&'static str, f64>,
}

impl<'a> Record<'a> {
    /// The entity identity this record was keyed on.
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// Value of a named counter; 0 if the source sequence was too short or
    /// the name was never reconciled.
    pub fn value(&self, name: &str) -> f64 {
        self.fields.get(name).copied().unwrap_or(0.0)
    }
}

/// Aligns named value sequences against a key sequence.
///
/// Produces exactly `keys.len()` records. For index `i` and sequence `s`,
/// the record's field is `s[i]` when `i < s.len()` and 0 otherwise; entries
/// beyond `keys.len()` are ignored.
pub fn reconcile<'a>(
    keys: &'a [String],
    value_seqs: &[(&'static str, &[i64])],
) -> Vec<Record<'a>> {
    keys.iter()
        .enumerate()
        .map(|(i, key)| {
            let fields = value_seqs
                .iter()
                .map(|(name, seq)| (*name, seq.get(i).copied().unwrap_or(0) as f64))
                .collect();
            Record { key, fields }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("192.0.2.{}", i + 1)).collect()
    }

    #[test]
    fn record_count_matches_key_count() {
        let keys = keys(4);
        let requests = [10, 20];
        let records = reconcile(&keys, &[("requests", &requests)]);
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn short_sequences_zero_fill() {
        let keys = keys(3);
        let requests = [10, 20];
        let records = reconcile(&keys, &[("requests", &requests)]);
        assert_eq!(records[0].value("requests"), 10.0);
        assert_eq!(records[1].value("requests"), 20.0);
        assert_eq!(records[2].value("requests"), 0.0);
    }

    #[test]
    fn long_sequences_are_truncated() {
        let keys = keys(2);
        let rtt = [5, 6, 7, 8];
        let records = reconcile(&keys, &[("rtt", &rtt)]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].value("rtt"), 6.0);
    }

    #[test]
    fn unknown_field_defaults_to_zero() {
        let keys = keys(1);
        let records = reconcile(&keys, &[]);
        assert_eq!(records[0].value("anything"), 0.0);
    }

    #[test]
    fn keys_are_preserved_in_order() {
        let keys = vec!["2001:db8::1".to_string(), "2001:db8::2".to_string()];
        let records = reconcile(&keys, &[]);
        assert_eq!(records[0].key(), "2001:db8::1");
        assert_eq!(records[1].key(), "2001:db8::2");
    }

    #[test]
    fn empty_keys_yield_no_records() {
        let requests = [1, 2, 3];
        let records = reconcile(&[], &[("requests", &requests)]);
        assert!(records.is_empty());
    }
}
