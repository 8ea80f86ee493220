//! Categorical token normalization.
//!
//! Devices report some state as free-form text tokens. Each domain below
//! maps its tokens to stable numeric codes so the values can be emitted as
//! gauges. Matching is case-insensitive and total: any token outside a
//! domain's table normalizes to 0 and is logged at debug severity, never
//! raised as an error.

use tracing::debug;

/// A named finite mapping from text token to numeric code.
///
/// License validity is deliberately not a domain here: it is handled by a
/// dedicated four-way rule in the system collector because its result
/// depends on an end-date field, not the token alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumDomain {
    /// Adjacency state: down=0, up=1, new=2, one-way=3, initializing=4,
    /// rejected=5.
    AdjacencyState,
    /// Hello padding mode: unknown=0, adaptive=1, disable=2, loose=3,
    /// strict=4.
    HelloPadding,
}

const ADJACENCY_STATE_CODES: &[(&str, f64)] = &[
    ("down", 0.0),
    ("up", 1.0),
    ("new", 2.0),
    ("one-way", 3.0),
    ("initializing", 4.0),
    ("rejected", 5.0),
];

const HELLO_PADDING_CODES: &[(&str, f64)] = &[
    ("unknown", 0.0),
    ("adaptive", 1.0),
    ("disable", 2.0),
    ("loose", 3.0),
    ("strict", 4.0),
];

impl EnumDomain {
    fn table(self) -> &'static [(&'static str, f64)] {
        match self {
            EnumDomain::AdjacencyState => ADJACENCY_STATE_CODES,
            EnumDomain::HelloPadding => HELLO_PADDING_CODES,
        }
    }
}

/// Normalizes a categorical token to its domain's numeric code.
pub fn normalize(token: &str, domain: EnumDomain) -> f64 {
    for (name, code) in domain.table() {
        if token.eq_ignore_ascii_case(name) {
            return *code;
        }
    }
    debug!(token, ?domain, "unrecognized enum token, normalizing to 0");
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_states_are_documented_codes() {
        assert_eq!(normalize("Down", EnumDomain::AdjacencyState), 0.0);
        assert_eq!(normalize("Up", EnumDomain::AdjacencyState), 1.0);
        assert_eq!(normalize("New", EnumDomain::AdjacencyState), 2.0);
        assert_eq!(normalize("One-way", EnumDomain::AdjacencyState), 3.0);
        assert_eq!(normalize("Initializing", EnumDomain::AdjacencyState), 4.0);
        assert_eq!(normalize("Rejected", EnumDomain::AdjacencyState), 5.0);
    }

    #[test]
    fn hello_padding_is_documented_codes() {
        assert_eq!(normalize("adaptive", EnumDomain::HelloPadding), 1.0);
        assert_eq!(normalize("Disable", EnumDomain::HelloPadding), 2.0);
        assert_eq!(normalize("LOOSE", EnumDomain::HelloPadding), 3.0);
        assert_eq!(normalize("strict", EnumDomain::HelloPadding), 4.0);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(normalize("ONE-WAY", EnumDomain::AdjacencyState), 3.0);
        assert_eq!(normalize("one-way", EnumDomain::AdjacencyState), 3.0);
    }

    #[test]
    fn unrecognized_tokens_normalize_to_zero() {
        assert_eq!(normalize("flapping", EnumDomain::AdjacencyState), 0.0);
        assert_eq!(normalize("", EnumDomain::HelloPadding), 0.0);
        assert_eq!(normalize("Ünknöwn", EnumDomain::AdjacencyState), 0.0);
    }
}
