//! Inline source-map extraction from generated JS/CSS files.
//!
//! Bundlers append a `sourceMappingURL` comment to the generated file, either
//! carrying the whole map inline as a base64 `data:` URL or pointing at a
//! sibling `.map` file. Only the inline form is resolved here; an external
//! reference is surfaced for the caller to read itself.

use crate::error::{ExtractError, MapError};
use crate::sourcemap::SourceMap;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;
use std::sync::LazyLock;

/// Prelude marking an inline map. Any other reference is treated as an
/// external file, never as malformed.
const DATA_PRELUDE: &str = "data:application/json;base64,";

static MAP_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?://|/\*)#\s*sourceMappingURL\s*=(.*)$")
        .expect("map-comment pattern compiles")
});

/// Find the single `sourceMappingURL` comment in `code` and decode its map.
///
/// Fails with [`ExtractError::CommentCount`] unless exactly one comment is
/// present, and with [`ExtractError::ExternalFile`] when the reference lacks
/// the inline `data:` prelude.
pub fn extract_sourcemap(code: &str) -> Result<SourceMap, ExtractError> {
    let references: Vec<&str> = MAP_COMMENT
        .captures_iter(code)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();
    if references.len() != 1 {
        return Err(ExtractError::CommentCount {
            found: references.len(),
        });
    }
    let reference = references[0].trim().trim_end_matches("*/").trim_end();
    match reference.strip_prefix(DATA_PRELUDE) {
        Some(payload) => {
            let bytes = STANDARD.decode(payload).map_err(MapError::from)?;
            Ok(SourceMap::from_slice(&bytes)?)
        }
        None => Err(ExtractError::ExternalFile {
            reference: reference.to_string(),
        }),
    }
}
