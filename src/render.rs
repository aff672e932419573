//! Read-only views of a tree for humans: a node/edge export for graph renderers (with a
//! Graphviz DOT writer) and a sideways text layout for the console.
//!
//! None of this touches the tree. In particular the `NULL` placeholders drawn for missing
//! children exist only in the export, with ids of their own.
//!
//! # Examples
//!
//! ```
//! use bintree::render::RenderOptions;
//! use bintree::build_ideal;
//!
//! let tree = build_ideal(&[1, 2, 3]).unwrap();
//! let graph = tree.render_graph();
//!
//! assert_eq!(graph.nodes().len(), 3);
//! assert_eq!(graph.nodes()[0].left, Some(1));
//!
//! let dot = graph.to_dot(&RenderOptions { show_empty: false });
//! assert!(dot.contains("n0 -> n1;"));
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::node::Node;
use crate::tree::{InOrder, Tree};

/// Columns of indentation per tree level in [`Sideways`].
const INDENT: usize = 10;

/// One tree node as a renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderNode {
    /// The node's construction id.
    pub order_id: usize,
    /// The node's value as display text.
    pub label: String,
    /// Construction id of the left child, if there is one.
    pub left: Option<usize>,
    /// Construction id of the right child, if there is one.
    pub right: Option<usize>,
}

/// Every node of a tree, in pre-order, ready to hand to a graph renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderGraph {
    nodes: Vec<RenderNode>,
}

/// Knobs for [`RenderGraph::to_dot`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw a red `NULL` leaf for every missing child.
    pub show_empty: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { show_empty: true }
    }
}

impl RenderGraph {
    /// Exports `tree` in a single walk.
    pub fn from_tree<T>(tree: &Tree<T>) -> Self
    where
        T: fmt::Display,
    {
        let nodes = tree
            .walk()
            .map(|(node, _)| RenderNode {
                order_id: node.order_id,
                label: node.value.to_string(),
                left: node.left().map(Node::order_id),
                right: node.right().map(Node::order_id),
            })
            .collect();
        Self { nodes }
    }

    /// The exported nodes, root first.
    pub fn nodes(&self) -> &[RenderNode] {
        &self.nodes
    }

    /// Writes the graph in Graphviz DOT format.
    pub fn to_dot(&self, options: &RenderOptions) -> String {
        Dot {
            graph: self,
            options,
        }
        .to_string()
    }
}

struct Dot<'a> {
    graph: &'a RenderGraph,
    options: &'a RenderOptions,
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph tree {{")?;
        writeln!(
            f,
            "    node [shape=ellipse, style=filled, fillcolor=\"#FFFF00\", width=0.35, height=0.35];"
        )?;
        writeln!(f, "    edge [color=\"#0000FF\", arrowhead=normal];")?;

        let mut empties = 0;
        for node in &self.graph.nodes {
            writeln!(f, "    n{} [label=\"{}\"];", node.order_id, escape(&node.label))?;
            for child in [node.left, node.right] {
                match child {
                    Some(child) => writeln!(f, "    n{} -> n{};", node.order_id, child)?,
                    None if self.options.show_empty => {
                        writeln!(
                            f,
                            "    null{} [label=\"NULL\", fillcolor=\"#FF0000\", width=0.5];",
                            empties
                        )?;
                        writeln!(f, "    n{} -> null{};", node.order_id, empties)?;
                        empties += 1;
                    }
                    None => {}
                }
            }
        }

        writeln!(f, "}}")
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Maps every construction id in `tree` to its node.
pub fn order_index<T>(tree: &Tree<T>) -> HashMap<usize, &Node<T>> {
    tree.walk().map(|(node, _)| (node.order_id, node)).collect()
}

/// Displays a tree on its side: right subtree on top, left subtree below, each level
/// indented ten more columns than its parent.
///
/// ```
/// use bintree::build_ideal;
///
/// let tree = build_ideal(&[1, 2, 3]).unwrap();
/// let expected = [
///     "                   3",
///     "         2",
///     "                   1",
/// ];
/// assert_eq!(tree.sideways().to_string(), expected.join("\n") + "\n");
/// ```
pub struct Sideways<'a, T>(pub &'a Tree<T>);

impl<T> fmt::Display for Sideways<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, depth) in InOrder::new(self.0.root(), true) {
            writeln!(f, "{:>width$}", node.value, width = INDENT * depth)?;
        }
        Ok(())
    }
}

impl<T> Tree<T> {
    /// Exports this tree for a graph renderer. See [`RenderGraph`].
    pub fn render_graph(&self) -> RenderGraph
    where
        T: fmt::Display,
    {
        RenderGraph::from_tree(self)
    }

    /// A sideways text view of this tree. See [`Sideways`].
    pub fn sideways(&self) -> Sideways<'_, T> {
        Sideways(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_ideal, UnbalancedTree};

    #[test]
    fn export_records_children() {
        let tree = build_ideal(&[1, 2, 3, 4, 5]).unwrap();
        let graph = tree.render_graph();

        assert_eq!(
            graph.nodes()[0],
            RenderNode {
                order_id: 0,
                label: "3".to_string(),
                left: Some(1),
                right: Some(3),
            }
        );
        assert_eq!(graph.nodes()[1].left, None);
        assert_eq!(graph.nodes()[1].right, Some(2));
        assert_eq!(graph.nodes().len(), 5);
    }

    #[test]
    fn empty_tree_exports_nothing() {
        let tree: Tree<i32> = Tree::new();
        let graph = tree.render_graph();

        assert!(graph.nodes().is_empty());
        assert_eq!(
            graph.to_dot(&RenderOptions::default()).lines().last(),
            Some("}")
        );
    }

    #[test]
    fn dot_with_null_sentinels() {
        let tree: UnbalancedTree<_> = [2, 1].into_iter().collect();
        let dot = tree.render_graph().to_dot(&RenderOptions::default());

        // 2 has an empty right slot, 1 has two empty slots.
        assert_eq!(dot.matches("label=\"NULL\"").count(), 3);
        assert!(dot.contains("n0 -> n1;"));
        assert!(dot.contains("n0 -> null0;"));
        assert!(dot.contains("n1 -> null1;"));
        assert!(dot.contains("n1 -> null2;"));

        // The tree itself is untouched.
        assert_eq!(tree.size(), 2);
    }

    #[test]
    fn dot_without_null_sentinels() {
        let tree: UnbalancedTree<_> = [2, 1].into_iter().collect();
        let dot = tree
            .render_graph()
            .to_dot(&RenderOptions { show_empty: false });

        assert!(!dot.contains("NULL"));
        assert!(dot.contains("n0 [label=\"2\"];"));
    }

    #[test]
    fn dot_escapes_labels() {
        let tree = build_ideal(&["say \"hi\"".to_string()]).unwrap();
        let dot = tree.render_graph().to_dot(&RenderOptions::default());

        assert!(dot.contains(r#"n0 [label="say \"hi\""];"#));
    }

    #[test]
    fn index_by_order_id() {
        let tree: UnbalancedTree<_> = [50, 20, 80, 10].into_iter().collect();
        let index = order_index(&*tree);

        assert_eq!(index.len(), 4);
        assert_eq!(index.get(&2).map(|n| *n.value()), Some(80));
        assert_eq!(index.get(&3).map(|n| *n.value()), Some(10));
        assert!(index.get(&4).is_none());
    }

    #[test]
    fn sideways_indents_by_depth() {
        let tree: UnbalancedTree<_> = [2, 1, 3, 4].into_iter().collect();
        let text = tree.sideways().to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines,
            [
                "                             4",
                "                   3",
                "         2",
                "                   1",
            ]
        );
    }
}
