//! Source tree model and construction.

pub mod builder;
pub mod node;

pub use builder::{build_tree, friendly_bytes, FileInfo, TableFn};
pub use node::{Table, TreeNode};
