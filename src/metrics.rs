//! Metric descriptor and sample model.
//!
//! A [`Descriptor`] is the static identity of a metric family: name, help
//! text, kind and the ordered list of label names. Descriptors are built once
//! at process start (see [`crate::collector::Registry`]) and never mutated.
//!
//! A [`Sample`] is one concrete labeled value emitted for a descriptor during
//! a poll. Label values are positional: the value at index `i` belongs to the
//! label name at index `i` of the owning descriptor. Every sample must carry
//! exactly as many label values as the descriptor declares names, in the same
//! order — exposition consumers key on that.

/// Whether a metric accumulates monotonically or represents a point-in-time
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Gauge,
}

/// Static identity of one metric family.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    name: &'static str,
    help: &'static str,
    kind: MetricKind,
    labels: &'static [&'static str],
}

impl Descriptor {
    pub const fn new(
        name: &'static str,
        help: &'static str,
        kind: MetricKind,
        labels: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            help,
            kind,
            labels,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn help(&self) -> &'static str {
        self.help
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    /// Ordered label names. The first label is always `target`.
    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    /// Assembles one sample for this descriptor.
    ///
    /// `label_values` must match the declared label names in count and order:
    /// target first, then any caller-supplied prefix labels in call order,
    /// then record-specific labels in declared order.
    ///
    /// Panics on a cardinality mismatch. A mis-sized sample would corrupt
    /// the exposition for every consumer keyed on this descriptor.
    pub fn sample(&self, label_values: Vec<String>, value: f64) -> Sample<'_> {
        assert_eq!(
            label_values.len(),
            self.labels.len(),
            "label cardinality mismatch for {}",
            self.name
        );
        Sample {
            descriptor: self,
            label_values,
            value,
        }
    }
}

/// One labeled value emitted for a descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<'a> {
    descriptor: &'a Descriptor,
    label_values: Vec<String>,
    value: f64,
}

impl<'a> Sample<'a> {
    pub fn descriptor(&self) -> &'a Descriptor {
        self.descriptor
    }

    /// Label values, positionally matching `descriptor().labels()`.
    pub fn label_values(&self) -> &[String] {
        &self.label_values
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_DESC: Descriptor = Descriptor::new(
        "test_adjacency_state",
        "Test descriptor",
        MetricKind::Gauge,
        &["target", "interface_name", "level"],
    );

    #[test]
    fn sample_carries_descriptor_and_ordered_labels() {
        let s = TEST_DESC.sample(
            vec!["r1".to_string(), "ge-0/0/0".to_string(), "2".to_string()],
            1.0,
        );
        assert_eq!(s.descriptor().name(), "test_adjacency_state");
        assert_eq!(s.label_values(), ["r1", "ge-0/0/0", "2"]);
        assert_eq!(s.value(), 1.0);
    }

    #[test]
    fn label_count_matches_declaration() {
        let s = TEST_DESC.sample(
            vec!["r1".to_string(), "ge-0/0/0".to_string(), "1".to_string()],
            0.0,
        );
        assert_eq!(s.label_values().len(), TEST_DESC.labels().len());
    }

    #[test]
    #[should_panic(expected = "label cardinality mismatch")]
    fn too_few_labels_is_rejected() {
        let _ = TEST_DESC.sample(vec!["r1".to_string()], 0.0);
    }

    #[test]
    #[should_panic(expected = "label cardinality mismatch")]
    fn too_many_labels_is_rejected() {
        let _ = TEST_DESC.sample(
            vec![
                "r1".to_string(),
                "ge-0/0/0".to_string(),
                "2".to_string(),
                "extra".to_string(),
            ],
            0.0,
        );
    }
}
