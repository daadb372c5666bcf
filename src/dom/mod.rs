//! Document tree, attribute search and relative path navigation

pub mod path;
pub mod search;
pub mod tree;

pub use path::{NodePath, ParsePathError, PathError, Step};
pub use search::find_nodes;
pub use tree::{Attribute, Document, NodeId, NodeKind, NodeRef};
