//! Domain layer: tree structures and traversal queries
//!
//! This layer is independent of external concerns (no I/O, no rendering).

pub mod binary;
pub mod codec;
pub mod error;
pub mod general;

pub use binary::{BinaryTree, BinaryTreeNode, Branch};
pub use error::{DomainError, TreeResult};
pub use general::{GeneralTree, TreeNode};
