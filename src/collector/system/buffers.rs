//! `show system buffers` response parsing.
//!
//! The command has two response shapes. Newer platforms return a structured
//! document with a `memory-statistics` node. Platforms without a structured
//! form return the raw CLI text instead: a banner line, twelve informational
//! lines in fixed order, and a trailing blank line. Each line index has a
//! statically declared pattern shape (1 to 4 leading integers embedded in a
//! descriptive sentence) and a fixed destination-field mapping; both are
//! data in [`LINE_TABLE`], not computed.
//!
//! Parsing is lenient: a line that fails its declared pattern leaves its
//! destination fields at 0 and processing continues with the next line.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::rpc::{BuffersDocument, MemoryStatistics};
use crate::client::ClientError;

/// Which response shape the statistics were extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Decoded from the structured `memory-statistics` node.
    Structured,
    /// Extracted positionally from the CLI text carried in `output`.
    FreeText,
    /// A feature-absent sentinel matched; all fields are at their 0 default.
    FeatureAbsent,
}

/// Responses that mean the platform has no buffers command at all. Not an
/// error: the poll continues with every destination field at 0.
const SYNTAX_ERROR_SENTINEL: &str = "\nerror: syntax error, expecting <command>: buffers\n";
const NOT_VALID_SENTINEL: &str = "error: command is not valid on the";

static RE_INTS_1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+).*").expect("static regex"));
static RE_INTS_2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)/(\d+).*").expect("static regex"));
static RE_INTS_3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)/(\d+).*").expect("static regex"));
static RE_INTS_4: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)/(\d+)/(\d+).*").expect("static regex"));
static RE_KILO_3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)K/(\d+)K/(\d+)K.*").expect("static regex"));

/// Declared pattern shape of one informational line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineShape {
    Ints1,
    Ints2,
    Ints3,
    Ints4,
    /// Three integers each suffixed with `K` (values in kilobytes).
    Kilo3,
}

impl LineShape {
    fn regex(self) -> &'static Regex {
        match self {
            LineShape::Ints1 => &RE_INTS_1,
            LineShape::Ints2 => &RE_INTS_2,
            LineShape::Ints3 => &RE_INTS_3,
            LineShape::Ints4 => &RE_INTS_4,
            LineShape::Kilo3 => &RE_KILO_3,
        }
    }
}

/// One entry per informational line, in device output order. The `apply`
/// function receives exactly as many values as the shape captures.
struct LineSpec {
    shape: LineShape,
    apply: fn(&mut MemoryStatistics, &[i64]),
}

static LINE_TABLE: [LineSpec; 12] = [
    // "3216/15519/18735 mbufs in use (current/cache/total)"
    LineSpec {
        shape: LineShape::Ints3,
        apply: |s, v| {
            s.mbufs_current = v[0];
            s.mbufs_cache = v[1];
            s.mbufs_total = v[2];
        },
    },
    // "3074/14458/17532/2039110 mbuf clusters in use (current/cache/total/max)"
    LineSpec {
        shape: LineShape::Ints4,
        apply: |s, v| {
            s.mbuf_clusters_current = v[0];
            s.mbuf_clusters_cache = v[1];
            s.mbuf_clusters_total = v[2];
            s.mbuf_clusters_max = v[3];
        },
    },
    // "3069/7557 mbuf+clusters out of packet secondary zone in use (current/cache)"
    LineSpec {
        shape: LineShape::Ints2,
        apply: |s, v| {
            s.packet_zone_current = v[0];
            s.packet_zone_cache = v[1];
        },
    },
    // "0/1101/1101/1019555 4k (page size) jumbo clusters in use (current/cache/total/max)"
    LineSpec {
        shape: LineShape::Ints4,
        apply: |s, v| {
            s.jumbo_clusters_current_4k = v[0];
            s.jumbo_clusters_cache_4k = v[1];
            s.jumbo_clusters_total_4k = v[2];
            s.jumbo_clusters_max_4k = v[3];
        },
    },
    // "0/1101/1101/1019555 9k (page size) jumbo clusters in use (current/cache/total/max)"
    LineSpec {
        shape: LineShape::Ints4,
        apply: |s, v| {
            s.jumbo_clusters_current_9k = v[0];
            s.jumbo_clusters_cache_9k = v[1];
            s.jumbo_clusters_total_9k = v[2];
            s.jumbo_clusters_max_9k = v[3];
        },
    },
    // "0/1101/1101/1019555 16k (page size) jumbo clusters in use (current/cache/total/max)"
    LineSpec {
        shape: LineShape::Ints4,
        apply: |s, v| {
            s.jumbo_clusters_current_16k = v[0];
            s.jumbo_clusters_cache_16k = v[1];
            s.jumbo_clusters_total_16k = v[2];
            s.jumbo_clusters_max_16k = v[3];
        },
    },
    // "6952K/37199K/44152K bytes allocated to network (current/cache/total)"
    LineSpec {
        shape: LineShape::Kilo3,
        apply: |s, v| {
            s.network_alloc_current = v[0];
            s.network_alloc_cache = v[1];
            s.network_alloc_total = v[2];
        },
    },
    // "0/0/0 requests for mbufs denied (mbufs/clusters/mbuf+clusters)"
    // The second capture feeds both cluster-denied fields; the third capture
    // is unused. This matches the established exporter output.
    LineSpec {
        shape: LineShape::Ints3,
        apply: |s, v| {
            s.mbufs_denied = v[0];
            s.mbuf_clusters_denied = v[1];
            s.mbuf_and_clusters_denied = v[1];
        },
    },
    // "0/0/0 requests for jumbo clusters denied (4k/9k/16k)"
    LineSpec {
        shape: LineShape::Ints3,
        apply: |s, v| {
            s.jumbo_clusters_denied_4k = v[0];
            s.jumbo_clusters_denied_9k = v[1];
            s.jumbo_clusters_denied_16k = v[2];
        },
    },
    // "0 requests for sfbufs denied"
    LineSpec {
        shape: LineShape::Ints1,
        apply: |s, v| s.sfbufs_denied = v[0],
    },
    // "0 requests for sfbufs delayed"
    LineSpec {
        shape: LineShape::Ints1,
        apply: |s, v| s.sfbufs_delayed = v[0],
    },
    // "0 requests for I/O initiated by sendfile"
    LineSpec {
        shape: LineShape::Ints1,
        apply: |s, v| s.io_init = v[0],
    },
];

/// Parses a `show system buffers` response of either shape.
///
/// The feature-absent sentinels are checked on the raw text before any
/// decoding; a match yields default statistics and no error. Otherwise the
/// bytes must form a valid document — a decode failure is fatal for the
/// owning sub-collection.
pub fn parse(raw: &[u8]) -> Result<(MemoryStatistics, ParseMode), ClientError> {
    let text = String::from_utf8_lossy(raw);
    if text == SYNTAX_ERROR_SENTINEL || text.contains(NOT_VALID_SENTINEL) {
        debug!("target does not support the buffers command");
        return Ok((MemoryStatistics::default(), ParseMode::FeatureAbsent));
    }

    let doc: BuffersDocument =
        serde_json::from_slice(raw).map_err(|e| ClientError::Decode(e.to_string()))?;

    if doc.output.is_empty() {
        return Ok((doc.memory_statistics, ParseMode::Structured));
    }

    let mut stats = doc.memory_statistics;
    parse_free_text(&doc.output, &mut stats);
    Ok((stats, ParseMode::FreeText))
}

/// Positional extraction from the CLI text form.
fn parse_free_text(output: &str, stats: &mut MemoryStatistics) {
    let lines: Vec<&str> = output.split('\n').map(str::trim).collect();
    if lines.len() < 2 {
        return;
    }
    // Drop the leading banner line and the trailing blank line.
    let body = &lines[1..lines.len() - 1];

    for (index, (spec, line)) in LINE_TABLE.iter().zip(body).enumerate() {
        match extract(spec.shape, line) {
            Some(values) => (spec.apply)(stats, &values),
            None => {
                debug!(index, line, "buffer line did not match its declared shape");
            }
        }
    }
}

/// Captures the leading integers a shape declares, or None on mismatch.
fn extract(shape: LineShape, line: &str) -> Option<Vec<i64>> {
    let caps = shape.regex().captures(line)?;
    let mut values = Vec::with_capacity(caps.len() - 1);
    for i in 1..caps.len() {
        values.push(caps.get(i)?.as_str().parse().ok()?);
    }
    Some(values)
}
