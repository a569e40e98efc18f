//! General N-ary tree over a generational arena.

use generational_arena::{Arena, Index};
use tracing::instrument;

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct TreeNode {
    /// Numeric payload of this node
    pub value: i64,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in insertion order
    pub children: Vec<Index>,
}

/// Arena-based N-ary tree.
///
/// Uses a generational arena for memory-safe node references and O(1) lookups.
/// Callers wire the tree up front via [`insert_node`](GeneralTree::insert_node)
/// and query it read-only afterwards; there is no removal.
#[derive(Debug)]
pub struct GeneralTree {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for GeneralTree {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneralTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts a node and links it under `parent`. A `None` parent installs
    /// the node as the root.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, value: i64, parent: Option<Index>) -> Index {
        let node = TreeNode {
            value,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self) -> PostOrderIterator {
        PostOrderIterator::new(self)
    }

    /// Sum of all node values, 0 for an empty tree.
    ///
    /// Full O(n) scan; traversal order is irrelevant for the sum.
    #[instrument(level = "debug", skip(self))]
    pub fn sum_values(&self) -> i64 {
        self.iter().map(|(_, node)| node.value).sum()
    }

    /// Number of nodes with an even value, 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn count_evens(&self) -> usize {
        self.iter().filter(|(_, node)| node.value % 2 == 0).count()
    }

    /// Number of nodes with a value strictly greater than `lower_bound`,
    /// 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn num_greater(&self, lower_bound: i64) -> usize {
        self.iter()
            .filter(|(_, node)| node.value > lower_bound)
            .count()
    }

    /// Node count of the longest root-to-leaf path, 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    #[instrument(level = "trace", skip(self))]
    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Collects the values of all leaf nodes (nodes with no children),
    /// left to right. Empty trees return an empty vector.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_values(&self) -> Vec<i64> {
        let mut leaves = Vec::new();
        if let Some(root) = self.root {
            self.collect_leaves(root, &mut leaves);
        }
        leaves
    }

    #[instrument(level = "trace", skip(self))]
    fn collect_leaves(&self, node_idx: Index, leaves: &mut Vec<i64>) {
        if let Some(node) = self.get_node(node_idx) {
            if node.children.is_empty() {
                leaves.push(node.value);
            } else {
                for &child in &node.children {
                    self.collect_leaves(child, leaves);
                }
            }
        }
    }
}

pub struct TreeIterator<'a> {
    tree: &'a GeneralTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a GeneralTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    tree: &'a GeneralTree,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(tree: &'a GeneralTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, false));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // root
    // ├── 2
    // └── 3
    //     └── 4
    fn sample_tree() -> GeneralTree {
        let mut tree = GeneralTree::new();
        let root = tree.insert_node(1, None);
        tree.insert_node(2, Some(root));
        let three = tree.insert_node(3, Some(root));
        tree.insert_node(4, Some(three));
        tree
    }

    #[test]
    fn test_preorder_iteration_order() {
        let tree = sample_tree();
        let values: Vec<i64> = tree.iter().map(|(_, n)| n.value).collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_postorder_iteration_order() {
        let tree = sample_tree();
        let values: Vec<i64> = tree.iter_postorder().map(|(_, n)| n.value).collect();
        assert_eq!(values, vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_parent_links() {
        let tree = sample_tree();
        let root = tree.root().unwrap();
        assert_eq!(tree.get_node(root).unwrap().parent, None);
        for &child in &tree.get_node(root).unwrap().children {
            assert_eq!(tree.get_node(child).unwrap().parent, Some(root));
        }
    }
}
