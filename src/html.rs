//! Standalone HTML page assembly.
//!
//! Thin templating glue around the core: validates the map, builds the tree,
//! and splices the serialized tree plus the bundled client script and style
//! into a single self-contained page.

use crate::error::MapError;
use crate::sourcemap::SourceMap;
use crate::tree::builder::{build_tree, TableFn};
use crate::tree::node::TreeNode;

const DEFAULT_SCRIPT: &str = include_str!("../assets/client.js");
const DEFAULT_STYLE: &str = include_str!("../assets/client.css");

/// Page-assembly options; everything defaults to the bundled client.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlOptions<'a> {
    /// Page title; falls back to the sourcemap's `file` name.
    pub title: Option<&'a str>,
    /// Replacement for the bundled client script.
    pub script: Option<&'a str>,
    /// Replacement for the bundled stylesheet.
    pub style: Option<&'a str>,
}

/// Replacement for the default tree builder.
pub type BuildTreeFn<'a> = dyn Fn(&SourceMap, &TableFn) -> TreeNode + 'a;

/// Render a validated source map to a complete HTML page using the default
/// tree builder and an empty extra-rows table.
pub fn build_html(map: &SourceMap, options: &HtmlOptions) -> Result<String, MapError> {
    build_html_with(map, options, &|_| Vec::new(), None)
}

/// Parse raw JSON bytes and render them; the parse failure becomes the
/// malformed-map error kind.
pub fn build_html_from_slice(bytes: &[u8], options: &HtmlOptions) -> Result<String, MapError> {
    let map = SourceMap::from_slice(bytes)?;
    build_html(&map, options)
}

/// Full-control variant: caller-supplied extra table rows and, optionally, a
/// replacement tree builder.
pub fn build_html_with(
    map: &SourceMap,
    options: &HtmlOptions,
    table: &TableFn,
    build: Option<&BuildTreeFn>,
) -> Result<String, MapError> {
    map.validate()?;
    let tree = match build {
        Some(builder) => builder(map, table),
        None => build_tree(map, table),
    };
    let data = embeddable_json(&tree)?;
    let title = options
        .title
        .filter(|t| !t.is_empty())
        .or(map.file.as_deref())
        .unwrap_or("");
    let title = escape_html(title);
    let style = options.style.unwrap_or(DEFAULT_STYLE);
    let script = options.script.unwrap_or(DEFAULT_SCRIPT);

    Ok(format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\"/>\n\
         <title>{title}</title>\n\
         <style>{style}</style>\n\
         </head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         <input id=\"search\" type=\"text\" placeholder=\"Search file contents\"/>\n\
         <div id=\"graph\"></div>\n\
         <script type=\"text/javascript\">\n\
         {script}\n\
         ;;\n\
         var data = ({data})\n\
         </script>\n\
         </body>\n\
         </html>\n"
    ))
}

/// Serialize the tree for embedding inside a `<script>` block. `</` is
/// escaped so file contents cannot terminate the block early.
fn embeddable_json(tree: &TreeNode) -> Result<String, MapError> {
    Ok(serde_json::to_string_pretty(tree)?.replace("</", "<\\/"))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
