//! Tree node model: one node per path segment, files carry size metadata.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Insertion-ordered label/value rows shown in the stats panel.
///
/// JSON object key order is display order, so entries keep the order they
/// were inserted in rather than sorting by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table(Vec<(String, String)>);

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row, or overwrite an existing key in place (the row keeps
    /// its original position).
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(row) => row.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Table {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut table = Table::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Table {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = Table;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of string labels to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Table, A::Error> {
                let mut table = Table::new();
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    table.insert(k, v);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

/// A file or directory in the source tree.
///
/// Files are distinguished by the presence of `size`, not by an empty
/// `children` list; a directory may legitimately have zero children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Single path segment, not a full path. The synthetic root is `/`.
    pub name: String,

    /// Child nodes in first-seen order.
    #[serde(default)]
    pub children: Vec<TreeNode>,

    /// Byte size of the original contents, file nodes only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub size: Option<u64>,

    /// Deflated byte size, file nodes only.
    #[serde(
        rename = "sizeGzipped",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub size_gzipped: Option<u64>,

    /// Line count, file nodes only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub loc: Option<u64>,

    /// Original source text, retained for search matching.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub contents: Option<String>,

    /// Stats-panel rows; always carries at least `Name` and `Size`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub table: Option<Table>,
}

impl TreeNode {
    /// The synthetic root node, named `/`.
    pub fn root() -> Self {
        Self::named("/")
    }

    pub fn named(name: impl Into<String>) -> Self {
        TreeNode {
            name: name.into(),
            ..TreeNode::default()
        }
    }

    pub fn is_file(&self) -> bool {
        self.size.is_some()
    }

    /// Find the child with `name`, creating it at the end of `children` on
    /// first sight.
    pub fn child_mut(&mut self, name: &str) -> &mut TreeNode {
        let idx = match self.children.iter().position(|c| c.name == name) {
            Some(idx) => idx,
            None => {
                self.children.push(TreeNode::named(name));
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }

    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_preserves_insertion_order() {
        let mut table = Table::new();
        table.insert("Name", "/foo/bar.js");
        table.insert("Size", "7 b (15 b gz)");
        table.insert("Author", "someone");
        let keys: Vec<_> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Name", "Size", "Author"]);
    }

    #[test]
    fn table_overwrite_keeps_position() {
        let mut table = Table::new();
        table.insert("Name", "original");
        table.insert("Size", "7 b");
        table.insert("Name", "overwritten");
        let rows: Vec<_> = table.iter().collect();
        assert_eq!(rows, vec![("Name", "overwritten"), ("Size", "7 b")]);
    }

    #[test]
    fn table_serializes_as_object_in_order() {
        let mut table = Table::new();
        table.insert("Size", "1 b");
        table.insert("Name", "/a.js");
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"Size":"1 b","Name":"/a.js"}"#);
    }

    #[test]
    fn child_mut_reuses_existing_segment() {
        let mut root = TreeNode::root();
        root.child_mut("foo");
        root.child_mut("foo");
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn node_json_omits_leaf_fields_on_directories() {
        let mut root = TreeNode::root();
        root.child_mut("foo");
        let json = serde_json::to_string(&root).unwrap();
        assert!(!json.contains("size"));
        assert!(!json.contains("table"));
        assert!(json.contains(r#""children":[{"name":"foo","children":[]}]"#));
    }

    #[test]
    fn node_json_round_trips() {
        let mut root = TreeNode::root();
        let leaf = root.child_mut("foo").child_mut("bar.js");
        leaf.size = Some(7);
        leaf.size_gzipped = Some(15);
        leaf.loc = Some(2);
        leaf.contents = Some("aaa\nbbb".to_string());
        let mut table = Table::new();
        table.insert("Name", "/foo/bar.js");
        table.insert("Size", "7 b (15 b gz)");
        leaf.table = Some(table);

        let json = serde_json::to_string(&root).unwrap();
        assert!(json.contains(r#""sizeGzipped":15"#));
        let parsed: TreeNode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, root);
    }
}
