//! Depth-first walks over [`BinaryTree`].
//!
//! Every walk here recurses once per level, so the call stack grows with the
//! height of the tree. Heavily skewed trees with tens of thousands of levels
//! can exhaust the stack; use [`BinaryTree::max_depth`] (iterative) when only
//! the height is needed. Dropping a tree never recurses, whatever its shape.

use crate::binary_tree::BinaryTree;
use std::fmt;
use tracing::trace;

/// Where in the recursion a node is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then node, then right subtree.
    In,
    /// Left subtree, then right subtree, then node.
    Post,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Order::Pre => "preorder",
            Order::In => "inorder",
            Order::Post => "postorder",
        };
        f.write_str(name)
    }
}

impl<T> BinaryTree<T> {
    /// Plain depth-first walk: left subtree fully, then right subtree.
    /// Observes nothing and returns how many nodes were walked.
    pub fn dfs(&self) -> usize {
        match self {
            BinaryTree::Empty => 0,
            BinaryTree::Node { left, right, .. } => 1 + left.dfs() + right.dfs(),
        }
    }

    /// Calls `visit` on every value in the given order.
    pub fn walk<'a, F>(&'a self, order: Order, visit: &mut F)
    where
        F: FnMut(&'a T),
    {
        let BinaryTree::Node { value, left, right } = self else {
            return;
        };
        if order == Order::Pre {
            visit(value);
        }
        left.walk(order, visit);
        if order == Order::In {
            visit(value);
        }
        right.walk(order, visit);
        if order == Order::Post {
            visit(value);
        }
    }
}

impl<T: Clone + fmt::Debug> BinaryTree<T> {
    /// Collects the values in the given order, tracing each visit.
    pub fn traverse(&self, order: Order) -> Vec<T> {
        let mut result = Vec::new();
        self.walk(order, &mut |value: &T| {
            trace!(%order, ?value, "visit");
            result.push(value.clone());
        });
        result
    }

    pub fn pre_order(&self) -> Vec<T> {
        self.traverse(Order::Pre)
    }

    /// Returns the in-order traversal. For a search tree built with
    /// [`BinaryTree::insert`] this yields the values in sorted order.
    pub fn in_order(&self) -> Vec<T> {
        self.traverse(Order::In)
    }

    pub fn post_order(&self) -> Vec<T> {
        self.traverse(Order::Post)
    }
}
