//! Declarative relative paths through a document tree
//!
//! A [`NodePath`] is an ordered list of structural steps. Resolving it from a
//! start node either lands on a node or reports which step fell off the
//! tree. Steps count every node kind, including whitespace text nodes.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::tree::NodeRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Parent,
    FirstChild,
    LastChild,
    NextSibling,
    PrevSibling,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Parent => "parent",
            Step::FirstChild => "first-child",
            Step::LastChild => "last-child",
            Step::NextSibling => "next-sibling",
            Step::PrevSibling => "prev-sibling",
        }
    }

    fn apply<'a>(&self, node: NodeRef<'a>) -> Option<NodeRef<'a>> {
        match self {
            Step::Parent => node.parent(),
            Step::FirstChild => node.first_child(),
            Step::LastChild => node.last_child(),
            Step::NextSibling => node.next_sibling(),
            Step::PrevSibling => node.prev_sibling(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Step {
    type Err = ParsePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parent" => Ok(Step::Parent),
            "first-child" => Ok(Step::FirstChild),
            "last-child" => Ok(Step::LastChild),
            "next-sibling" => Ok(Step::NextSibling),
            "prev-sibling" => Ok(Step::PrevSibling),
            other => Err(ParsePathError::UnknownStep(other.to_string())),
        }
    }
}

/// A step that had nowhere to go
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("path step {index} ({step}) has no target from node #{from}")]
pub struct PathError {
    /// Zero-based position of the failing step
    pub index: usize,
    pub step: Step,
    /// Arena index of the node the step was taken from
    pub from: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePathError {
    #[error("unknown path step '{0}'")]
    UnknownStep(String),
}

/// Ordered list of steps, written as `first-child/next-sibling/...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath {
    steps: Cow<'static, [Step]>,
}

impl NodePath {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Cow::Owned(steps),
        }
    }

    pub const fn from_static(steps: &'static [Step]) -> Self {
        Self {
            steps: Cow::Borrowed(steps),
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Walk the path from `start`. An empty path resolves to `start` itself.
    pub fn resolve<'a>(&self, start: NodeRef<'a>) -> Result<NodeRef<'a>, PathError> {
        self.steps
            .iter()
            .enumerate()
            .try_fold(start, |node, (index, step)| {
                step.apply(node).ok_or(PathError {
                    index,
                    step: *step,
                    from: node.id().index(),
                })
            })
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(step.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for NodePath {
    type Err = ParsePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(NodePath::new(Vec::new()));
        }
        s.split('/')
            .map(|part| part.trim().parse::<Step>())
            .collect::<Result<Vec<_>, _>>()
            .map(NodePath::new)
    }
}
