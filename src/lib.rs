//! Arena-based general and binary trees with classic traversal queries.
//!
//! Two independent structures: [`GeneralTree`] (N-ary, aggregate queries) and
//! [`BinaryTree`] (depth metrics, maximum path sum, bounded successor search,
//! identity-based relationship tests, pre-order text codec). Nodes live in a
//! generational arena; an [`Index`](generational_arena::Index) is the node
//! handle callers wire trees with and pass back into identity queries.

pub mod domain;
pub mod tree_traits;
pub mod util;

pub use domain::{
    BinaryTree, BinaryTreeNode, Branch, DomainError, GeneralTree, TreeNode, TreeResult,
};
pub use tree_traits::TreeRender;
