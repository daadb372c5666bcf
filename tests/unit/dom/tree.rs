//! Unit tests for the document tree

use quote_monitor::dom::{Document, NodeKind};

#[test]
fn test_new_document_has_only_root() {
    let doc = Document::new();
    assert_eq!(doc.len(), 1);
    assert!(doc.is_empty());
    assert_eq!(doc.root().kind(), NodeKind::Document);
    assert!(doc.root().parent().is_none());
    assert!(!doc.root().has_children());
}

#[test]
fn test_append_links_siblings_in_order() {
    let mut doc = Document::new();
    let root = doc.root().id();
    let ul = doc.append_element(root, "ul", Vec::<(&str, &str)>::new());
    let first = doc.append_element(ul, "li", [("id", "1")]);
    let second = doc.append_text(ul, "between");
    let third = doc.append_element(ul, "li", [("id", "3")]);

    let ul_ref = doc.get(ul).expect("ul exists");
    let ids: Vec<_> = ul_ref.children().map(|n| n.id()).collect();
    assert_eq!(ids, vec![first, second, third]);

    let back: Vec<_> = ul_ref.children().rev().map(|n| n.id()).collect();
    assert_eq!(back, vec![third, second, first]);

    let middle = doc.get(second).expect("text exists");
    assert_eq!(middle.prev_sibling().map(|n| n.id()), Some(first));
    assert_eq!(middle.next_sibling().map(|n| n.id()), Some(third));
    assert_eq!(middle.parent().map(|n| n.id()), Some(ul));
    assert_eq!(middle.text(), Some("between"));
}

#[test]
fn test_duplicate_attributes_are_kept() {
    let mut doc = Document::new();
    let root = doc.root().id();
    let span = doc.append_element(root, "span", [("class", "pr"), ("class", "pr")]);

    let node = doc.get(span).expect("span exists");
    assert_eq!(node.attributes().len(), 2);
    assert_eq!(node.attr("class"), Some("pr"));
    assert_eq!(node.name(), Some("span"));
}

#[test]
fn test_parse_html_keeps_whitespace_text_nodes() {
    let doc = Document::parse_html(
        "<html><body><span class=\"pr\">\n<span id=\"p\">9.89</span>\n</span></body></html>",
    );
    let anchor = quote_monitor::dom::find_nodes(doc.root(), "class", "pr")[0];

    let kinds: Vec<_> = anchor.children().map(|n| n.kind()).collect();
    assert_eq!(kinds, vec![NodeKind::Text, NodeKind::Element, NodeKind::Text]);
    assert_eq!(anchor.first_child().and_then(|n| n.text()), Some("\n"));
    assert_eq!(anchor.text_content(), "\n9.89\n");
}

#[test]
fn test_parse_html_records_doctype_and_comments() {
    let doc = Document::parse_html("<!DOCTYPE html><html><body><!-- note --><p>x</p></body></html>");
    let root = doc.root();

    let doctype = root.first_child().expect("doctype");
    assert_eq!(doctype.kind(), NodeKind::Doctype);
    assert_eq!(doctype.name(), Some("html"));

    let mut stack = vec![root];
    let mut comments = Vec::new();
    while let Some(node) = stack.pop() {
        if node.kind() == NodeKind::Comment {
            comments.push(node.data().to_string());
        }
        stack.extend(node.children());
    }
    assert_eq!(comments, vec![" note ".to_string()]);
}

#[test]
fn test_get_rejects_foreign_ids() {
    let mut big = Document::new();
    let root = big.root().id();
    let mut last = root;
    for _ in 0..5 {
        last = big.append_element(root, "div", Vec::<(&str, &str)>::new());
    }

    let small = Document::new();
    assert!(small.get(last).is_none());
}
