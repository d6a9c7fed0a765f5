//! End-to-end pipeline: generated file -> extracted map -> tree -> layout ->
//! interactive scene.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sunmap::extract::extract_sourcemap;
use sunmap::layout::Partition;
use sunmap::render::{RenderOptions, Sunburst, DIMMED_OPACITY, FULL_OPACITY};
use sunmap::search::SearchController;
use sunmap::sourcemap::SourceMap;
use sunmap::tree::builder::build_tree;
use sunmap::tree::node::TreeNode;

const MAP_JSON: &str = r#"{
  "file": "bundle.js",
  "sources": ["/src/app.js", "/src/util/strings.js", "/vendor/lib.js"],
  "sourcesContent": [
    "import strings from './util/strings'\nconsole.log(strings)",
    "export default ['a', 'b']\n",
    "module.exports = function () { return 42 }"
  ]
}"#;

fn generated_file() -> String {
    format!(
        "console.log('bundled')\n//# sourceMappingURL=data:application/json;base64,{}",
        STANDARD.encode(MAP_JSON)
    )
}

fn build_sample_tree() -> (SourceMap, TreeNode) {
    let map = extract_sourcemap(&generated_file()).unwrap();
    map.validate().unwrap();
    let tree = build_tree(&map, &|_| Vec::new());
    (map, tree)
}

#[test]
fn extracted_map_produces_the_expected_tree_shape() {
    let (_, tree) = build_sample_tree();
    assert_eq!(tree.name, "/");
    let names: Vec<_> = tree.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["src", "vendor"]);

    let src = tree.child("src").unwrap();
    assert!(src.child("app.js").unwrap().is_file());
    assert!(src
        .child("util")
        .unwrap()
        .child("strings.js")
        .unwrap()
        .is_file());
}

#[test]
fn serialized_tree_round_trips_structurally() {
    let (_, tree) = build_sample_tree();
    let json = serde_json::to_string(&tree).unwrap();
    let parsed: TreeNode = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, tree);
}

#[test]
fn layout_values_aggregate_through_the_extracted_tree() {
    let (map, tree) = build_sample_tree();
    let partition = Partition::build(&tree);
    let total: u64 = map.entries().map(|(_, c)| c.len() as u64).sum();
    assert_eq!(partition.root().unwrap().value, total);

    // src spans its share of the circle, vendor the rest
    let src = &partition.nodes[1];
    let vendor_idx = partition
        .nodes
        .iter()
        .position(|n| n.name == "vendor")
        .unwrap();
    let vendor = &partition.nodes[vendor_idx];
    assert!((src.x1 - vendor.x0).abs() < 1e-12);
    assert!((vendor.x1 - 1.0).abs() < 1e-12);
}

#[test]
fn hover_zoom_and_search_drive_the_scene() {
    let (_, tree) = build_sample_tree();
    let mut graph = Sunburst::new(RenderOptions {
        selector: "#graph".to_string(),
        width: 960.0,
        height: 700.0,
    });
    graph.visualize(&tree);

    let strings = graph
        .partition()
        .nodes
        .iter()
        .position(|n| n.name == "strings.js")
        .unwrap();

    // hover: breadcrumbs read root-first down to the hovered file
    graph.highlight_ancestor_path(strings);
    let trail: Vec<_> = graph
        .scene()
        .breadcrumbs
        .iter()
        .map(|c| c.name.clone())
        .collect();
    assert_eq!(trail, vec!["src", "util", "strings.js"]);

    // click: zoom tween lands on the node's span
    let tween = graph.zoom_to_node(strings);
    graph.apply_scale_state(tween.sample(300));
    let node = &graph.partition().nodes[strings];
    assert_eq!(tween.target().x_domain, (node.x0, node.x1));

    // search: only the file containing the query stays opaque
    let mut search = SearchController::new();
    assert!(search.input(0, "console", &mut graph));
    let app = graph
        .partition()
        .nodes
        .iter()
        .position(|n| n.name == "app.js")
        .unwrap();
    assert_eq!(graph.scene().arcs[app].opacity, FULL_OPACITY);
    assert_eq!(graph.scene().arcs[strings].opacity, DIMMED_OPACITY);
}
