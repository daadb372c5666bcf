//! Attribute-matching tree search

use super::tree::NodeRef;

/// Find every node under `root` (root included) carrying the attribute
/// `key="value"`.
///
/// The walk is a full pre-order traversal: a node is visited before its
/// children, and a left sibling's whole subtree before the right sibling.
/// Matching is exact and case-sensitive on both key and value. A node is
/// pushed once per matching attribute, so a node with a duplicated
/// attribute shows up more than once. An empty result covers both "no
/// match" and "empty tree".
pub fn find_nodes<'a>(root: NodeRef<'a>, key: &str, value: &str) -> Vec<NodeRef<'a>> {
    let mut matches = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        for attribute in node.attributes() {
            if attribute.key == key && attribute.value == value {
                matches.push(node);
            }
        }

        let mark = stack.len();
        stack.extend(node.children());
        stack[mark..].reverse();
    }

    matches
}
