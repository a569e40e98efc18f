//! termtree-based rendering for both tree structures.

use std::fmt;

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::binary::BinaryTree;
use crate::domain::general::GeneralTree;

pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeRender for GeneralTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        if let Some(root_idx) = self.root() {
            let mut tree = Tree::new(self.get_node(root_idx).unwrap().value.to_string());

            fn build_tree(arena: &GeneralTree, node_idx: Index, parent_tree: &mut Tree<String>) {
                if let Some(node) = arena.get_node(node_idx) {
                    for &child_idx in &node.children {
                        if let Some(child) = arena.get_node(child_idx) {
                            let mut child_tree = Tree::new(child.value.to_string());
                            build_tree(arena, child_idx, &mut child_tree);
                            parent_tree.push(child_tree);
                        }
                    }
                }
            }

            build_tree(self, root_idx, &mut tree);
            tree
        } else {
            Tree::new("(empty)".to_string())
        }
    }
}

impl TreeRender for BinaryTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        if let Some(root_idx) = self.root() {
            let mut tree = Tree::new(self.get_node(root_idx).unwrap().value.to_string());

            // Present children only, left before right
            fn build_tree(arena: &BinaryTree, node_idx: Index, parent_tree: &mut Tree<String>) {
                if let Some(node) = arena.get_node(node_idx) {
                    for child_idx in [node.left, node.right].into_iter().flatten() {
                        if let Some(child) = arena.get_node(child_idx) {
                            let mut child_tree = Tree::new(child.value.to_string());
                            build_tree(arena, child_idx, &mut child_tree);
                            parent_tree.push(child_tree);
                        }
                    }
                }
            }

            build_tree(self, root_idx, &mut tree);
            tree
        } else {
            Tree::new("(empty)".to_string())
        }
    }
}

impl fmt::Display for GeneralTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string())
    }
}

impl fmt::Display for BinaryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string())
    }
}
