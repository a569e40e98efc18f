//! Pre-order text codec for [`BinaryTree`].
//!
//! The serialized form is a comma-separated pre-order token stream: each
//! node emits its value, then its left subtree, then its right subtree; an
//! absent child is the literal token `null`. The empty tree is exactly
//! `null`. This is the sole text representation of a tree.

use generational_arena::Index;
use itertools::Itertools;
use tracing::instrument;

use crate::domain::binary::{BinaryTree, Branch};
use crate::domain::error::{DomainError, TreeResult};

impl BinaryTree {
    /// Encodes the tree into its comma-separated pre-order form.
    #[instrument(level = "debug", skip(self))]
    pub fn serialize(&self) -> String {
        let mut tokens = Vec::new();
        self.encode_subtree(self.root(), &mut tokens);
        tokens.iter().join(",")
    }

    fn encode_subtree(&self, idx: Option<Index>, tokens: &mut Vec<String>) {
        match idx.and_then(|i| self.get_node(i)) {
            None => tokens.push("null".to_string()),
            Some(node) => {
                tokens.push(node.value.to_string());
                self.encode_subtree(node.left, tokens);
                self.encode_subtree(node.right, tokens);
            }
        }
    }

    /// Rebuilds a tree from its serialized form.
    ///
    /// Round-trip invariant: `deserialize(serialize(t))` is value- and
    /// shape-identical to `t`, for any tree including the empty one.
    /// Malformed input is a decode failure, never a silently wrong tree:
    /// a token that is neither `null` nor an integer, a stream ending
    /// mid-subtree, and leftover tokens each raise their own error.
    #[instrument(level = "debug")]
    pub fn deserialize(input: &str) -> TreeResult<BinaryTree> {
        let mut tokens = input.split(',');
        let mut tree = BinaryTree::new();

        Self::decode_subtree(&mut tokens, &mut tree, None)?;

        if let Some(extra) = tokens.next() {
            return Err(DomainError::TrailingToken {
                token: extra.to_string(),
            });
        }
        Ok(tree)
    }

    fn decode_subtree<'a>(
        tokens: &mut impl Iterator<Item = &'a str>,
        tree: &mut BinaryTree,
        parent: Option<(Index, Branch)>,
    ) -> TreeResult<()> {
        let token = tokens.next().ok_or(DomainError::UnexpectedEnd)?;
        if token == "null" {
            return Ok(());
        }

        let value: i64 = token.parse().map_err(|_| DomainError::InvalidToken {
            token: token.to_string(),
        })?;
        let node_idx = match parent {
            None => tree.insert_root(value),
            Some((parent_idx, branch)) => tree.insert_child(parent_idx, branch, value),
        };

        Self::decode_subtree(tokens, tree, Some((node_idx, Branch::Left)))?;
        Self::decode_subtree(tokens, tree, Some((node_idx, Branch::Right)))
    }
}
