//! Sunmap: Source Map Sunburst Visualiser
//!
//! Converts a JavaScript/CSS source map carrying embedded original source
//! contents into a self-contained interactive HTML page: a radial sunburst
//! where each arc is a file sized by byte size, with breadcrumb navigation,
//! click-to-zoom, and live text search across file contents.

pub mod error;
pub mod extract;
pub mod html;
pub mod layout;
pub mod logging;
pub mod render;
pub mod search;
pub mod sourcemap;
pub mod tooling;
pub mod tree;
