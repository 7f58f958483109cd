//! Tree styling pass.
//!
//! Children are styled before their parent. A node whose string tag contains
//! the exclusion token keeps its own colors and is not repainted, but its
//! descendants are styled as usual.

use tracing::debug;

use crate::theme::ThemeContext;
use crate::tree::{NodeId, NodeKind, TabDrawMode, VisualNode, VisualTree};

/// Tag token that opts a single node out of theming.
pub const DEFAULT_EXCLUSION_TOKEN: &str = "NoTheme";

/// Counters for one styling pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StyleReport {
    pub visited: usize,
    pub styled: usize,
    pub excluded: usize,
}

/// Applies a [`ThemeContext`] to visual trees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StylingEngine {
    exclusion_token: String,
}

impl Default for StylingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StylingEngine {
    pub fn new() -> Self {
        Self::with_exclusion_token(DEFAULT_EXCLUSION_TOKEN)
    }

    pub fn with_exclusion_token(token: impl Into<String>) -> Self {
        Self {
            exclusion_token: token.into(),
        }
    }

    pub fn exclusion_token(&self) -> &str {
        &self.exclusion_token
    }

    pub fn is_excluded(&self, node: &VisualNode) -> bool {
        node.tag_str()
            .is_some_and(|tag| tag.contains(self.exclusion_token.as_str()))
    }

    /// Style `root` and everything below it.
    pub fn apply_theme(&self, tree: &mut VisualTree, root: NodeId, ctx: &ThemeContext) -> StyleReport {
        self.apply_theme_with(tree, root, ctx, |_| {})
    }

    /// Like [`apply_theme`](Self::apply_theme), calling `on_refresh` for every node styled.
    pub fn apply_theme_with(
        &self,
        tree: &mut VisualTree,
        root: NodeId,
        ctx: &ThemeContext,
        mut on_refresh: impl FnMut(NodeId),
    ) -> StyleReport {
        let mut report = StyleReport::default();

        // (node, children already pushed)
        let mut stack = vec![(root, false)];
        while let Some((id, expanded)) = stack.pop() {
            if !expanded {
                let Some(node) = tree.get(id) else { continue };
                stack.push((id, true));
                stack.extend(node.children().iter().rev().map(|&c| (c, false)));
                continue;
            }

            let Some(node) = tree.get_mut(id) else { continue };
            report.visited += 1;
            if self.is_excluded(node) {
                report.excluded += 1;
                continue;
            }
            style_node(node, ctx);
            report.styled += 1;
            on_refresh(id);
        }

        debug!(
            theme = %ctx.theme(),
            visited = report.visited,
            styled = report.styled,
            excluded = report.excluded,
            "applied theme to visual tree"
        );
        report
    }
}

fn style_node(node: &mut VisualNode, ctx: &ThemeContext) {
    let bg = ctx.background();
    let fg = ctx.foreground();
    node.style.background = bg;
    node.style.foreground = fg;

    match &mut node.kind {
        NodeKind::TabContainer(tabs) => tabs.draw_mode = TabDrawMode::Normal,
        // Checked/unchecked colors are not themed yet; the box uses the generic colors.
        NodeKind::Checkable(_) => {}
        NodeKind::ChartPane(pane) => pane.apply_colors(bg, fg),
        NodeKind::Generic | NodeKind::Other(_) => {}
    }

    node.needs_repaint = true;
}
