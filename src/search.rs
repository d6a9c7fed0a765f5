//! Debounced content search over the rendered tree.
//!
//! Input events are gated by a leading-edge debounce and routed into the
//! highlight engine: matching file arcs stay opaque, everything else dims.

use crate::layout::PartNode;
use crate::render::Sunburst;
use regex::Regex;

/// Minimum gap between accepted search inputs.
pub const DEBOUNCE_MS: u64 = 300;

/// Leading-edge debounce: the timestamp of the last *accepted* event gates
/// later ones; rejected events do not extend the window.
#[derive(Debug, Clone, Copy, Default)]
pub struct Debouncer {
    window_ms: u64,
    last_accepted_at: Option<u64>,
}

impl Debouncer {
    pub fn new(window_ms: u64) -> Self {
        Debouncer {
            window_ms,
            last_accepted_at: None,
        }
    }

    /// Accept or reject an event at `now_ms`. The first event is always
    /// accepted.
    pub fn accept(&mut self, now_ms: u64) -> bool {
        match self.last_accepted_at {
            Some(last) if now_ms.saturating_sub(last) < self.window_ms => false,
            _ => {
                self.last_accepted_at = Some(now_ms);
                true
            }
        }
    }
}

/// Replacement for the default regex matcher: receives the candidate node
/// and the raw query text.
pub type SearchPredicate = Box<dyn Fn(&PartNode, &str) -> bool>;

/// Case-sensitive regex over leaf contents. Directories never match, and an
/// unparseable pattern matches nothing.
pub fn default_filter(node: &PartNode, query: &str) -> bool {
    match (Regex::new(query), node.contents.as_deref()) {
        (Ok(re), Some(contents)) => re.is_match(contents),
        _ => false,
    }
}

/// Debounces raw input events and applies the content filter through the
/// highlight engine.
pub struct SearchController {
    debounce: Debouncer,
    filter: Option<SearchPredicate>,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchController {
    pub fn new() -> Self {
        SearchController {
            debounce: Debouncer::new(DEBOUNCE_MS),
            filter: None,
        }
    }

    /// Use a caller-supplied predicate instead of the regex default.
    pub fn with_filter(filter: SearchPredicate) -> Self {
        SearchController {
            debounce: Debouncer::new(DEBOUNCE_MS),
            filter: Some(filter),
        }
    }

    /// Feed one input event. Returns whether the search ran; rejected
    /// events leave the graph untouched.
    pub fn input(&mut self, now_ms: u64, query: &str, graph: &mut Sunburst) -> bool {
        if !self.debounce.accept(now_ms) {
            return false;
        }
        graph.hide_stats();
        graph.update_breadcrumbs(&[]);
        match &self.filter {
            Some(filter) => graph.highlight_nodes(|node| filter(node, query)),
            None => {
                let matcher = Regex::new(query).ok();
                graph.highlight_nodes(|node| {
                    match (&matcher, node.contents.as_deref()) {
                        (Some(re), Some(contents)) => re.is_match(contents),
                        _ => false,
                    }
                });
            }
        }
        true
    }
}

/// Read a parameter out of a query/hash string (`a=1&search=foo`), decoding
/// form escapes. Used once at load to pre-populate the search box.
pub fn query_param(query: &str, key: &str) -> Option<String> {
    url::form_urlencoded::parse(query.trim_start_matches(['?', '#']).as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
