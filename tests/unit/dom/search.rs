//! Unit tests for the attribute-matching tree search

use quote_monitor::dom::{find_nodes, Document, NodeId, NodeRef};

const NONE: [(&str, &str); 0] = [];

/// Straightforward recursive pre-order filter to compare against
fn reference_matches<'a>(node: NodeRef<'a>, key: &str, value: &str, out: &mut Vec<NodeId>) {
    for attribute in node.attributes() {
        if attribute.key == key && attribute.value == value {
            out.push(node.id());
        }
    }
    for child in node.children() {
        reference_matches(child, key, value, out);
    }
}

fn ids(nodes: &[NodeRef<'_>]) -> Vec<NodeId> {
    nodes.iter().map(|n| n.id()).collect()
}

/// doc
/// ├── a (k=v)
/// │   ├── b
/// │   │   └── c (k=v)
/// │   └── d (k=v)
/// └── e
///     └── f (k=v)
fn nested_tree() -> (Document, [NodeId; 6]) {
    let mut doc = Document::new();
    let root = doc.root().id();
    let a = doc.append_element(root, "a", [("k", "v")]);
    let b = doc.append_element(a, "b", NONE);
    let c = doc.append_element(b, "c", [("x", "y"), ("k", "v")]);
    let d = doc.append_element(a, "d", [("k", "v")]);
    let e = doc.append_element(root, "e", [("k", "other")]);
    let f = doc.append_element(e, "f", [("k", "v")]);
    (doc, [a, b, c, d, e, f])
}

#[test]
fn test_empty_tree_returns_empty() {
    let doc = Document::new();
    assert!(find_nodes(doc.root(), "class", "pr").is_empty());
}

#[test]
fn test_no_match_returns_empty() {
    let (doc, _) = nested_tree();
    assert!(find_nodes(doc.root(), "k", "missing").is_empty());
    assert!(find_nodes(doc.root(), "missing", "v").is_empty());
}

#[test]
fn test_matches_come_back_in_pre_order() {
    let (doc, [a, _, c, d, _, f]) = nested_tree();
    let matches = find_nodes(doc.root(), "k", "v");
    assert_eq!(ids(&matches), vec![a, c, d, f]);
}

#[test]
fn test_only_root_match_returns_root() {
    let mut doc = Document::new();
    let root = doc.root().id();
    let top = doc.append_element(root, "div", [("class", "pr")]);
    let child = doc.append_element(top, "span", [("class", "other")]);
    doc.append_text(child, "9.89");

    let start = doc.get(top).expect("top exists");
    let matches = find_nodes(start, "class", "pr");
    assert_eq!(matches, vec![start]);
}

#[test]
fn test_search_stays_within_subtree() {
    let (doc, [a, _, c, d, _, _]) = nested_tree();
    let start = doc.get(a).expect("a exists");
    assert_eq!(ids(&find_nodes(start, "k", "v")), vec![a, c, d]);
}

#[test]
fn test_duplicate_attribute_matches_twice() {
    let mut doc = Document::new();
    let root = doc.root().id();
    let dup = doc.append_element(root, "span", [("class", "pr"), ("id", "x"), ("class", "pr")]);
    let single = doc.append_element(root, "span", [("class", "pr")]);

    let matches = find_nodes(doc.root(), "class", "pr");
    assert_eq!(ids(&matches), vec![dup, dup, single]);
}

#[test]
fn test_matching_is_exact() {
    let mut doc = Document::new();
    let root = doc.root().id();
    doc.append_element(root, "span", [("class", "pr bold")]);
    doc.append_element(root, "span", [("class", "PR")]);
    doc.append_element(root, "span", [("CLASS", "pr")]);

    assert!(find_nodes(doc.root(), "class", "pr").is_empty());
}

#[test]
fn test_search_is_idempotent() {
    let (doc, _) = nested_tree();
    let first = find_nodes(doc.root(), "k", "v");
    let second = find_nodes(doc.root(), "k", "v");
    assert_eq!(first, second);
}

#[test]
fn test_agrees_with_recursive_reference_on_parsed_html() {
    let html = r#"
        <html><head><title class="pr">t</title></head>
        <body class="pr">
          <div class="pr"><p>one</p><p class="pr">two<b class="pr">!</b></p></div>
          <ul><li class="x">a</li><li class="pr">b</li></ul>
          <span class="pr">
            <span id="ref_1_l">9.89</span>
          </span>
        </body></html>"#;
    let doc = Document::parse_html(html);

    let mut expected = Vec::new();
    reference_matches(doc.root(), "class", "pr", &mut expected);

    let actual = find_nodes(doc.root(), "class", "pr");
    assert_eq!(ids(&actual), expected);
    assert_eq!(actual.len(), 7);
    assert_eq!(actual[0].name(), Some("title"));
    assert_eq!(actual[1].name(), Some("body"));
}

#[test]
fn test_deep_tree_does_not_overflow() {
    let mut doc = Document::new();
    let mut parent = doc.root().id();
    for _ in 0..100_000 {
        parent = doc.append_element(parent, "div", NONE);
    }
    let leaf = doc.append_element(parent, "span", [("class", "pr")]);

    let matches = find_nodes(doc.root(), "class", "pr");
    assert_eq!(ids(&matches), vec![leaf]);
}
