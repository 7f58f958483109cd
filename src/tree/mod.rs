//! Host-owned widget tree.
//!
//! The host builds a [`VisualTree`] mirroring its window layout. Styling passes
//! only touch style fields and repaint flags; nodes are never added or removed
//! by this crate.

mod chart;

pub use chart::{Axis, Border, ChartArea, ChartPane, Fill, FillType, FontSpec, Legend, Tick};

use egui::Color32;
use serde_json::Value;

/// Index of a node inside its [`VisualTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Colors a node is drawn with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub background: Color32,
    pub foreground: Color32,
}

/// How a tab container paints its tab headers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TabDrawMode {
    /// Toolkit draws tab headers with the node's colors.
    #[default]
    Normal,
    /// Host draws tab headers itself.
    OwnerDrawFixed,
}

/// Tabbed page host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabContainer {
    pub draw_mode: TabDrawMode,
}

/// Check box or toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Checkable {
    pub checked: bool,
}

/// Component classification used to pick kind-specific styling.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum NodeKind {
    /// Plain control: background and foreground only.
    #[default]
    Generic,
    /// Tab host; forced back to normal header drawing.
    TabContainer(TabContainer),
    /// Check box; styled like a generic control.
    Checkable(Checkable),
    /// Plotting surface whose axes, legend and fills are themed too.
    ChartPane(Box<ChartPane>),
    /// Host widget type with no special handling.
    Other(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualNode {
    pub name: String,
    /// Free-form host tag. Only string tags can carry the exclusion token.
    pub tag: Option<Value>,
    pub kind: NodeKind,
    pub style: Style,
    /// Set by styling passes; cleared by the host once it has redrawn the node.
    pub needs_repaint: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl VisualNode {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    pub fn generic(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Generic)
    }

    pub fn with_tag(mut self, tag: impl Into<Value>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The tag as text, if it is a string.
    pub fn tag_str(&self) -> Option<&str> {
        self.tag.as_ref().and_then(Value::as_str)
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn chart_pane(&self) -> Option<&ChartPane> {
        match &self.kind {
            NodeKind::ChartPane(pane) => Some(pane),
            _ => None,
        }
    }
}

/// Arena of [`VisualNode`]s with a single root.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualTree {
    nodes: Vec<VisualNode>,
}

impl VisualTree {
    /// Create a tree containing only `root`.
    pub fn new(mut root: VisualNode) -> Self {
        root.parent = None;
        root.children.clear();
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append `node` as the last child of `parent`.
    ///
    /// # Panics
    /// If `parent` does not belong to this tree.
    pub fn add_child(&mut self, parent: NodeId, mut node: VisualNode) -> NodeId {
        assert!(parent.0 < self.nodes.len(), "parent {parent:?} not in tree");
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        node.children.clear();
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&VisualNode> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut VisualNode> {
        self.nodes.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &VisualNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// `id` and everything below it, parents before children.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            let Some(node) = self.get(cur) else { continue };
            out.push(cur);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    /// Find the first node with the given name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.iter().find(|(_, n)| n.name == name).map(|(id, _)| id)
    }

    /// Clear every repaint request, as the host does after redrawing.
    pub fn clear_repaint_flags(&mut self) {
        for node in &mut self.nodes {
            node.needs_repaint = false;
        }
    }
}
