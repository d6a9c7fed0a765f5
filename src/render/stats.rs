//! Stats side panel content.

use crate::layout::PartNode;

const KIB: u64 = 1024;

/// Kibibyte-threshold size label used by the panel (coarser than the tree
/// builder's multi-unit formatter).
pub fn to_size(bytes: u64) -> String {
    if bytes > KIB {
        format!("{:.2}kb", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes}b")
    }
}

/// What the panel shows for one node.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsPanel {
    File {
        name: String,
        /// `"<size> (<deflated size> gz)"`.
        size_label: String,
        loc: u64,
        /// Extra table rows, in display order.
        rows: Vec<(String, String)>,
    },
    Directory {
        name: String,
    },
}

pub fn stats_for(node: &PartNode) -> StatsPanel {
    match (node.size, node.size_gzipped) {
        (Some(size), Some(gz)) => StatsPanel::File {
            name: node.name.clone(),
            size_label: format!("{} ({} gz)", to_size(size), to_size(gz)),
            loc: node.loc.unwrap_or(0),
            rows: node
                .table
                .iter()
                .flat_map(|t| t.iter())
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        },
        _ => StatsPanel::Directory {
            name: node.name.clone(),
        },
    }
}
