//! Tests for the pre-order text codec

use rstest::{fixture, rstest};

use rstree::util::testing::init_test_setup;
use rstree::{BinaryTree, DomainError};

/// 1
/// ├── 2
/// └── 3
#[fixture]
fn three_node_tree() -> BinaryTree {
    init_test_setup();
    let mut tree = BinaryTree::new();
    let root = tree.insert_root(1);
    tree.insert_left(root, 2);
    tree.insert_right(root, 3);
    tree
}

/// Walks both trees in lockstep and asserts identical shape and values.
fn assert_same_tree(left: &BinaryTree, right: &BinaryTree) {
    fn walk(
        left: &BinaryTree,
        right: &BinaryTree,
        l_idx: Option<generational_arena::Index>,
        r_idx: Option<generational_arena::Index>,
    ) {
        match (
            l_idx.and_then(|i| left.get_node(i)),
            r_idx.and_then(|i| right.get_node(i)),
        ) {
            (None, None) => {}
            (Some(l), Some(r)) => {
                assert_eq!(l.value, r.value);
                walk(left, right, l.left, r.left);
                walk(left, right, l.right, r.right);
            }
            (l, r) => panic!(
                "shape mismatch: left present={}, right present={}",
                l.is_some(),
                r.is_some()
            ),
        }
    }
    walk(left, right, left.root(), right.root());
}

// ============================================================
// Serialization Tests
// ============================================================

#[rstest]
fn given_three_node_tree_when_serializing_then_emits_preorder_with_null_sentinels(
    three_node_tree: BinaryTree,
) {
    assert_eq!(three_node_tree.serialize(), "1,2,null,null,3,null,null");
}

#[test]
fn given_empty_tree_when_serializing_then_emits_single_null_token() {
    assert_eq!(BinaryTree::new().serialize(), "null");
}

#[test]
fn given_left_skewed_tree_when_serializing_then_right_sides_are_null() {
    init_test_setup();
    let mut tree = BinaryTree::new();
    let root = tree.insert_root(1);
    let two = tree.insert_left(root, 2);
    tree.insert_left(two, 3);
    assert_eq!(tree.serialize(), "1,2,3,null,null,null,null");
}

// ============================================================
// Round-Trip Tests
// ============================================================

#[rstest]
fn given_three_node_tree_when_round_tripping_then_shape_and_values_match(
    three_node_tree: BinaryTree,
) {
    let restored = BinaryTree::deserialize(&three_node_tree.serialize()).unwrap();
    assert_same_tree(&three_node_tree, &restored);
    assert_eq!(restored.serialize(), three_node_tree.serialize());
}

#[test]
fn given_asymmetric_tree_when_round_tripping_then_shape_and_values_match() {
    init_test_setup();
    //     5
    //    / \
    //  -3   9
    //    \   \
    //     7   11
    let mut tree = BinaryTree::new();
    let root = tree.insert_root(5);
    let minus_three = tree.insert_left(root, -3);
    let nine = tree.insert_right(root, 9);
    tree.insert_right(minus_three, 7);
    tree.insert_right(nine, 11);

    let restored = BinaryTree::deserialize(&tree.serialize()).unwrap();
    assert_same_tree(&tree, &restored);
    assert_eq!(restored.min_depth(), tree.min_depth());
    assert_eq!(restored.max_depth(), tree.max_depth());
}

#[test]
fn given_empty_tree_when_round_tripping_then_stays_empty() {
    let restored = BinaryTree::deserialize("null").unwrap();
    assert!(restored.is_empty());
    assert_eq!(restored.serialize(), "null");
}

#[test]
fn given_serialized_form_when_deserializing_then_queries_work_on_rebuilt_tree() {
    init_test_setup();
    let tree = BinaryTree::deserialize("1,2,null,null,3,null,null").unwrap();
    assert_eq!(tree.max_sum(), 6);
    assert_eq!(tree.next_larger(1), Some(2));
    assert_eq!(tree.min_depth(), 2);
}

// ============================================================
// Decode Failure Tests
// ============================================================

#[test]
fn given_truncated_input_when_deserializing_then_reports_unexpected_end() {
    assert_eq!(
        BinaryTree::deserialize("1,2").unwrap_err(),
        DomainError::UnexpectedEnd
    );
}

#[test]
fn given_trailing_tokens_when_deserializing_then_names_first_leftover() {
    assert_eq!(
        BinaryTree::deserialize("1,null,null,7").unwrap_err(),
        DomainError::TrailingToken {
            token: "7".to_string()
        }
    );
}

#[rstest]
#[case("1,x,null", "x")]
#[case("", "")]
#[case("1,2.5,null,null,null", "2.5")]
fn given_non_numeric_token_when_deserializing_then_names_offender(
    #[case] input: &str,
    #[case] offender: &str,
) {
    assert_eq!(
        BinaryTree::deserialize(input).unwrap_err(),
        DomainError::InvalidToken {
            token: offender.to_string()
        }
    );
}
