//! Build the directory tree from a validated source map.
//!
//! Each source path is split on `/` and walked segment by segment; sources
//! sharing a directory prefix merge under one node. Leaves carry the byte
//! size, deflated size, line count, original contents, and the stats-panel
//! table for the file.

use crate::sourcemap::SourceMap;
use crate::tree::node::{Table, TreeNode};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;
use url::Url;

const GIB: u64 = 1024 * 1024 * 1024;
const MIB: u64 = 1024 * 1024;
const KIB: u64 = 1024;

/// Per-file facts handed to the caller's table function.
#[derive(Debug, Clone, PartialEq)]
pub struct FileInfo<'a> {
    /// Full original path as it appears in the map.
    pub name: &'a str,
    pub contents: &'a str,
    pub size: u64,
    pub size_gzipped: u64,
    pub loc: u64,
}

/// Caller-supplied extra stats rows, appended after the `Name`/`Size`
/// defaults. Reusing a default key overwrites it in place.
pub type TableFn<'a> = dyn Fn(&FileInfo) -> Vec<(String, String)> + 'a;

/// Convert a source map's flat `(path, contents)` list into a nested tree.
///
/// Duplicate leaf paths keep the last occurrence. The map is assumed
/// validated; mismatched array lengths are the caller's problem.
pub fn build_tree(map: &SourceMap, table: &TableFn) -> TreeNode {
    let mut root = TreeNode::root();
    for (name, contents) in map.entries() {
        let size = contents.len() as u64;
        let size_gzipped = deflated_len(contents.as_bytes());
        let loc = contents.split('\n').count() as u64;

        let mut node = &mut root;
        for segment in path_segments(name) {
            node = node.child_mut(&segment);
        }

        let mut rows = Table::new();
        rows.insert("Name", name);
        rows.insert(
            "Size",
            format!(
                "{} ({} gz)",
                friendly_bytes(size),
                friendly_bytes(size_gzipped)
            ),
        );
        for (key, value) in table(&FileInfo {
            name,
            contents,
            size,
            size_gzipped,
            loc,
        }) {
            rows.insert(key, value);
        }

        node.size = Some(size);
        node.size_gzipped = Some(size_gzipped);
        node.loc = Some(loc);
        node.contents = Some(contents.to_string());
        node.table = Some(rows);
    }
    root
}

/// Byte length of the zlib-deflated contents.
pub fn deflated_len(bytes: &[u8]) -> u64 {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    // Writing into a Vec cannot fail.
    let compressed = encoder
        .write_all(bytes)
        .and_then(|_| encoder.finish())
        .unwrap_or_default();
    compressed.len() as u64
}

/// Path segments of a source URL: the pathname split on `/`, empty segments
/// dropped. Relative paths are used as-is with any query/fragment stripped.
fn path_segments(source: &str) -> Vec<String> {
    let pathname = match Url::parse(source) {
        Ok(url) => url.path().to_string(),
        Err(_) => source
            .split(['?', '#'])
            .next()
            .unwrap_or(source)
            .to_string(),
    };
    pathname
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Human-friendly byte label: two decimals above the kb threshold, raw
/// integer below it.
pub fn friendly_bytes(bytes: u64) -> String {
    if bytes > GIB {
        format!("{:.2} gb", bytes as f64 / GIB as f64)
    } else if bytes > MIB {
        format!("{:.2} mb", bytes as f64 / MIB as f64)
    } else if bytes > KIB {
        format!("{:.2} kb", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} b")
    }
}
