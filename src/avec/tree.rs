//! Collection tree built from decoded items.

use alloc::{vec, vec::Vec};
use core::ops::Index;

use log::debug;

use crate::sans::tag::{MainTag, Tag};

use super::{
    Error,
    item::{Item, ItemId},
    lexer::Span,
    state::{State, StateError},
};

/// Index of a node in a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A group of fields and nested collections.
    Collection {
        /// The `Collection` item opening this node.
        opener: ItemId,
        /// The `End Collection` item closing this node.
        closer: Option<ItemId>,
        children: Vec<NodeId>,
    },
    /// A single emitted field.
    Report {
        /// The `Input`, `Output` or `Feature` item emitting this field.
        trigger: ItemId,
        /// Local `Usage` items of the context, in arrival order.
        usages: Vec<ItemId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub parent: Option<NodeId>,
    /// Global then local items in effect when this node was created.
    pub context: Vec<ItemId>,
    /// The `Usage Page` item in effect when this node was created.
    pub usage_page: Option<ItemId>,
    pub kind: NodeKind,
}

impl Node {
    pub fn is_collection(&self) -> bool {
        matches!(self.kind, NodeKind::Collection { .. })
    }

    /// Child nodes in arrival order. Reports have none.
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Collection { children, .. } => children,
            NodeKind::Report { .. } => &[],
        }
    }

    /// The main item that created this node.
    pub fn main_item(&self) -> ItemId {
        match self.kind {
            NodeKind::Collection { opener, .. } => opener,
            NodeKind::Report { trigger, .. } => trigger,
        }
    }
}

/// A forest of collections, stored in an arena.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Tree {
    /// Top-level collections, in the order they were closed.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Enclosing nodes, innermost first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> {
        core::iter::successors(self[id].parent, |&p| self[p].parent)
    }

    /// The `Usage Page` item governing a node: its own, or failing that the
    /// nearest enclosing node's.
    pub fn usage_page(&self, id: NodeId) -> Option<ItemId> {
        core::iter::once(id)
            .chain(self.ancestors(id))
            .find_map(|n| self[n].usage_page)
    }

    /// Depth-first, pre-order traversal of every root, yielding each node
    /// with its nesting depth.
    pub fn walk(&self) -> Walk<'_> {
        let stack = self.roots.iter().rev().map(|&id| (0, id)).collect();
        Walk { tree: self, stack }
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn adopt(&mut self, parent: NodeId, child: NodeId) {
        if let NodeKind::Collection { children, .. } = &mut self.nodes[parent.0].kind {
            children.push(child);
        }
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

/// Iterator returned by [`Tree::walk`].
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    tree: &'a Tree,
    stack: Vec<(usize, NodeId)>,
}

impl Iterator for Walk<'_> {
    type Item = (usize, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let (depth, id) = self.stack.pop()?;
        let children = tree[id].children().iter().rev();
        self.stack.extend(children.map(|&c| (depth + 1, c)));
        Some((depth, id))
    }
}

/// Builds a [`Tree`] from items in arrival order.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    state: State,
    stack: Vec<(NodeId, Span)>, // Open collections and their opening items.
    tree: Tree,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The global and local context accumulated so far.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Number of currently open collections.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Apply the next item.
    pub fn push(&mut self, id: ItemId, item: &Item) -> Result<(), Error> {
        let span = item.span();
        let state_error = |reason| Error::State { reason, span };

        match item.tag {
            Tag::Global(tag) => self.state.assign_global(id, tag).map_err(state_error)?,
            Tag::Local(tag) => self.state.append_local(id, tag),
            Tag::Main(MainTag::Collection) => self.open(id, span),
            Tag::Main(MainTag::EndCollection) => self.close(id).map_err(state_error)?,
            Tag::Main(MainTag::Input | MainTag::Output | MainTag::Feature) => {
                self.emit(id).map_err(state_error)?
            }
        }

        Ok(())
    }

    /// Finish building, failing if any collection is still open.
    pub fn finish(self) -> Result<Tree, Error> {
        match self.stack.last() {
            Some(&(_, span)) => Err(Error::UnterminatedCollection {
                open: self.stack.len(),
                span,
            }),
            None => Ok(self.tree),
        }
    }

    fn open(&mut self, opener: ItemId, span: Span) {
        let node = Node {
            parent: self.stack.last().map(|&(id, _)| id),
            usage_page: self.state.usage_page(),
            context: self.state.snapshot_and_reset_local(),
            kind: NodeKind::Collection {
                opener,
                closer: None,
                children: vec![],
            },
        };

        let id = self.tree.push(node);
        debug!("open collection {} at depth {}", id.0, self.stack.len());
        self.stack.push((id, span));
    }

    fn close(&mut self, closer: ItemId) -> Result<(), StateError> {
        let (id, _) = self.stack.pop().ok_or(StateError::NoOpenCollection)?;

        if let NodeKind::Collection { closer: c, .. } = &mut self.tree.nodes[id.0].kind {
            *c = Some(closer);
        }

        match self.stack.last() {
            Some(&(parent, _)) => self.tree.adopt(parent, id),
            None => self.tree.roots.push(id),
        }

        debug!("close collection {} at depth {}", id.0, self.stack.len());
        Ok(())
    }

    fn emit(&mut self, trigger: ItemId) -> Result<(), StateError> {
        let &(parent, _) = self
            .stack
            .last()
            .ok_or(StateError::FieldOutsideCollection)?;

        let usages = self.state.usages();
        let node = Node {
            parent: Some(parent),
            usage_page: self.state.usage_page(),
            context: self.state.snapshot_and_reset_local(),
            kind: NodeKind::Report { trigger, usages },
        };

        let id = self.tree.push(node);
        self.tree.adopt(parent, id);
        Ok(())
    }
}
