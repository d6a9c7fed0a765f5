//! Source map wire model and validation.
//!
//! Only the fields the visualiser needs are decoded: the source paths, the
//! embedded original contents, and the generated file name. Mappings and the
//! rest of the format are ignored.

use crate::error::MapError;
use serde::Deserialize;

/// A decoded source map, as bundlers embed it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceMap {
    /// Original source paths, in bundler order.
    #[serde(default)]
    pub sources: Option<Vec<String>>,

    /// Original source contents, index-aligned with `sources`.
    #[serde(rename = "sourcesContent", default)]
    pub sources_content: Option<Vec<String>>,

    /// Name of the generated file this map describes.
    #[serde(default)]
    pub file: Option<String>,
}

impl SourceMap {
    /// Parse a source map from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, MapError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Parse a source map from JSON text.
    pub fn from_str(text: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Check that original contents are present for every source.
    pub fn validate(&self) -> Result<(), MapError> {
        match (&self.sources, &self.sources_content) {
            (Some(sources), Some(contents)) if sources.len() == contents.len() => Ok(()),
            _ => Err(MapError::MissingSourceContents),
        }
    }

    /// Iterate `(path, contents)` pairs. Call [`validate`](Self::validate)
    /// first; unvalidated maps silently stop at the shorter sequence.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sources
            .iter()
            .flatten()
            .zip(self.sources_content.iter().flatten())
            .map(|(s, c)| (s.as_str(), c.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SourceMap {
        SourceMap {
            sources: Some(vec!["/foo/bar.js".to_string(), "/foo/baz.js".to_string()]),
            sources_content: Some(vec!["aaa\nbbb".to_string(), "ccc\nddd".to_string()]),
            file: Some("foo.js".to_string()),
        }
    }

    #[test]
    fn parses_camel_case_fields() {
        let map = SourceMap::from_str(
            r#"{"sources":["/a.js"],"sourcesContent":["x"],"file":"out.js"}"#,
        )
        .unwrap();
        assert_eq!(map.sources.as_deref(), Some(&["/a.js".to_string()][..]));
        assert_eq!(map.sources_content.as_deref(), Some(&["x".to_string()][..]));
        assert_eq!(map.file.as_deref(), Some("out.js"));
    }

    #[test]
    fn rejects_non_json() {
        assert!(matches!(
            SourceMap::from_slice(b"not json"),
            Err(MapError::Json(_))
        ));
    }

    #[test]
    fn validate_accepts_aligned_arrays() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_contents() {
        let map = SourceMap {
            sources: Some(vec!["/a.js".to_string()]),
            sources_content: None,
            file: None,
        };
        assert!(matches!(
            map.validate(),
            Err(MapError::MissingSourceContents)
        ));
    }

    #[test]
    fn validate_rejects_length_mismatch() {
        let map = SourceMap {
            sources: Some(vec!["/a.js".to_string(), "/b.js".to_string()]),
            sources_content: Some(vec!["x".to_string()]),
            file: None,
        };
        assert!(matches!(
            map.validate(),
            Err(MapError::MissingSourceContents)
        ));
    }

    #[test]
    fn entries_pairs_sources_with_contents() {
        let map = sample();
        let entries: Vec<_> = map.entries().collect();
        assert_eq!(
            entries,
            vec![("/foo/bar.js", "aaa\nbbb"), ("/foo/baz.js", "ccc\nddd")]
        );
    }
}
