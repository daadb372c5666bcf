//! Owned document tree
//!
//! Nodes live in a flat arena addressed by [`NodeId`]. Children are linked
//! through first-child / next-sibling pointers, with last-child and
//! previous-sibling kept for O(1) appends and backwards steps. A tree can be
//! built from HTML via [`Document::parse_html`] or by hand through the
//! `append_*` methods, which only ever attach fresh nodes and so cannot form
//! a cycle.

use std::fmt;

use scraper::{Html, Node as HtmlNode};

/// Index of a node inside its [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Doctype,
    Element,
    Text,
    Comment,
    ProcessingInstruction,
}

/// A single key/value attribute on an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    /// Tag name for elements, doctype name, or processing-instruction target
    name: Option<String>,
    /// Character data for text, comment and processing-instruction nodes
    data: String,
    attributes: Vec<Attribute>,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    prev_sibling: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            name: None,
            data: String::new(),
            attributes: Vec::new(),
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }
}

/// Parsed markup document
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    const ROOT: NodeId = NodeId(0);

    /// Create a document holding only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::new(NodeKind::Document)],
        }
    }

    /// Parse an HTML document.
    ///
    /// Parsing is error-tolerant: malformed markup is repaired the way a
    /// browser would, so every input yields a tree. Whitespace-only text
    /// nodes are kept, which matters for sibling-relative navigation.
    pub fn parse_html(html: &str) -> Self {
        let parsed = Html::parse_document(html);
        let mut document = Document::new();

        let mut stack = Vec::new();
        for child in parsed.tree.root().children().rev() {
            stack.push((Self::ROOT, child));
        }

        while let Some((parent, node)) = stack.pop() {
            let id = match node.value() {
                HtmlNode::Document | HtmlNode::Fragment => parent,
                HtmlNode::Doctype(doctype) => {
                    let mut data = NodeData::new(NodeKind::Doctype);
                    data.name = Some(doctype.name().to_string());
                    document.append(parent, data)
                }
                HtmlNode::Element(element) => {
                    document.append_element(parent, element.name(), element.attrs())
                }
                HtmlNode::Text(text) => document.append_text(parent, &**text),
                HtmlNode::Comment(comment) => document.append_comment(parent, &**comment),
                HtmlNode::ProcessingInstruction(pi) => {
                    let mut data = NodeData::new(NodeKind::ProcessingInstruction);
                    data.name = Some((*pi.target).to_string());
                    data.data = (*pi.data).to_string();
                    document.append(parent, data)
                }
            };

            // Reversed so the leftmost child is popped (and appended) first
            for child in node.children().rev() {
                stack.push((id, child));
            }
        }

        document
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            document: self,
            id: Self::ROOT,
        }
    }

    /// Look up a node by id
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { document: self, id })
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the document holds nothing but its root
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Append an element as the last child of `parent`.
    ///
    /// Attributes keep their given order, duplicates included.
    ///
    /// # Panics
    /// Panics if `parent` does not belong to this document.
    pub fn append_element<I, K, V>(&mut self, parent: NodeId, name: &str, attributes: I) -> NodeId
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut data = NodeData::new(NodeKind::Element);
        data.name = Some(name.to_string());
        data.attributes = attributes
            .into_iter()
            .map(|(key, value)| Attribute::new(key, value))
            .collect();
        self.append(parent, data)
    }

    /// Append a text node as the last child of `parent`
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let mut data = NodeData::new(NodeKind::Text);
        data.data = text.to_string();
        self.append(parent, data)
    }

    /// Append a comment node as the last child of `parent`
    pub fn append_comment(&mut self, parent: NodeId, text: &str) -> NodeId {
        let mut data = NodeData::new(NodeKind::Comment);
        data.data = text.to_string();
        self.append(parent, data)
    }

    fn append(&mut self, parent: NodeId, mut data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        let prev = self.nodes[parent.0].last_child;

        data.parent = Some(parent);
        data.prev_sibling = prev;
        self.nodes.push(data);

        match prev {
            Some(prev) => self.nodes[prev.0].next_sibling = Some(id),
            None => self.nodes[parent.0].first_child = Some(id),
        }
        self.nodes[parent.0].last_child = Some(id);
        id
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed handle to a node inside a [`Document`]
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    document: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    fn node_data(&self) -> &'a NodeData {
        &self.document.nodes[self.id.0]
    }

    fn at(&self, id: Option<NodeId>) -> Option<NodeRef<'a>> {
        id.map(|id| NodeRef {
            document: self.document,
            id,
        })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.node_data().kind
    }

    pub fn is_element(&self) -> bool {
        self.kind() == NodeKind::Element
    }

    /// Tag name of an element, or the doctype / processing-instruction name
    pub fn name(&self) -> Option<&'a str> {
        self.node_data().name.as_deref()
    }

    /// Character data of a text node; `None` for every other kind
    pub fn text(&self) -> Option<&'a str> {
        match self.kind() {
            NodeKind::Text => Some(&self.node_data().data),
            _ => None,
        }
    }

    /// Raw character data (text, comment or processing-instruction body)
    pub fn data(&self) -> &'a str {
        &self.node_data().data
    }

    pub fn attributes(&self) -> &'a [Attribute] {
        &self.node_data().attributes
    }

    /// Value of the first attribute named `key`
    pub fn attr(&self, key: &str) -> Option<&'a str> {
        self.attributes()
            .iter()
            .find(|attribute| attribute.key == key)
            .map(|attribute| attribute.value.as_str())
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.at(self.node_data().parent)
    }

    pub fn first_child(&self) -> Option<NodeRef<'a>> {
        self.at(self.node_data().first_child)
    }

    pub fn last_child(&self) -> Option<NodeRef<'a>> {
        self.at(self.node_data().last_child)
    }

    pub fn next_sibling(&self) -> Option<NodeRef<'a>> {
        self.at(self.node_data().next_sibling)
    }

    pub fn prev_sibling(&self) -> Option<NodeRef<'a>> {
        self.at(self.node_data().prev_sibling)
    }

    pub fn has_children(&self) -> bool {
        self.node_data().first_child.is_some()
    }

    /// Children in document order
    pub fn children(&self) -> Children<'a> {
        Children {
            front: self.first_child(),
            back: self.last_child(),
        }
    }

    /// Concatenated text of every text node below (and including) this one
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![*self];
        while let Some(node) = stack.pop() {
            if let Some(text) = node.text() {
                out.push_str(text);
            }
            let mark = stack.len();
            stack.extend(node.children());
            stack[mark..].reverse();
        }
        out
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.document, other.document) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id.0)
            .field("kind", &self.kind())
            .field("name", &self.name())
            .finish()
    }
}

/// Iterator over a node's children
pub struct Children<'a> {
    front: Option<NodeRef<'a>>,
    back: Option<NodeRef<'a>>,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.front?;
        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else {
            self.front = node.next_sibling();
        }
        Some(node)
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let node = self.back?;
        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else {
            self.back = node.prev_sibling();
        }
        Some(node)
    }
}
