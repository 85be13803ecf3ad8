use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::collections::VecDeque;
use std::fmt;
use std::mem;
use std::ops::Range;

/// An owned binary tree. `Empty` marks an absent node; every `Node` exclusively
/// owns both of its subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryTree<T> {
    Empty,
    Node {
        value: T,
        left: Box<BinaryTree<T>>,
        right: Box<BinaryTree<T>>,
    },
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        BinaryTree::Empty
    }
}

// Unlinks subtrees onto a work list so skewed trees of any height drop
// without recursing through the `Box` chain.
impl<T> Drop for BinaryTree<T> {
    fn drop(&mut self) {
        let BinaryTree::Node { left, right, .. } = self else {
            return;
        };
        let mut pending = Vec::new();
        Self::detach_children(left, right, &mut pending);
        while let Some(mut tree) = pending.pop() {
            if let BinaryTree::Node { left, right, .. } = &mut tree {
                Self::detach_children(left, right, &mut pending);
            }
            // `tree` has no children left, so dropping it is shallow.
        }
    }
}

impl<T> BinaryTree<T> {
    fn detach_children(left: &mut Self, right: &mut Self, pending: &mut Vec<Self>) {
        for child in [left, right] {
            if !child.is_empty() {
                pending.push(mem::take(child));
            }
        }
    }

    /// Creates a new empty tree.
    pub fn new() -> Self {
        BinaryTree::Empty
    }

    pub fn leaf(value: T) -> Self {
        Self::node(value, BinaryTree::Empty, BinaryTree::Empty)
    }

    pub fn node(value: T, left: Self, right: Self) -> Self {
        BinaryTree::Node {
            value,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, BinaryTree::Empty)
    }

    /// A leaf is a present node whose children are both absent.
    pub fn is_leaf(&self) -> bool {
        match self {
            BinaryTree::Empty => false,
            BinaryTree::Node { left, right, .. } => left.is_empty() && right.is_empty(),
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            BinaryTree::Empty => None,
            BinaryTree::Node { value, .. } => Some(value),
        }
    }

    pub fn left(&self) -> Option<&BinaryTree<T>> {
        match self {
            BinaryTree::Node { left, .. } if !left.is_empty() => Some(left),
            _ => None,
        }
    }

    pub fn right(&self) -> Option<&BinaryTree<T>> {
        match self {
            BinaryTree::Node { right, .. } if !right.is_empty() => Some(right),
            _ => None,
        }
    }

    /// Number of present nodes.
    pub fn len(&self) -> usize {
        self.dfs()
    }

    /// Builds a tree from a level-order listing where `None` marks a missing
    /// child. Children of missing nodes are not listed, so `[1, None, 2, 3]`
    /// is the root 1 with right child 2, whose left child is 3.
    pub fn from_level_order<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let mut slots: Vec<Option<T>> = items.into_iter().collect();
        if !matches!(slots.first(), Some(Some(_))) {
            return BinaryTree::Empty;
        }

        // Child slot indices of every present node, filled breadth-first.
        let mut children = vec![(None, None); slots.len()];
        let mut queue = VecDeque::from([0]);
        let mut next = 1;
        while let Some(parent) = queue.pop_front() {
            let left = Self::claim_slot(&slots, &mut next, &mut queue);
            let right = Self::claim_slot(&slots, &mut next, &mut queue);
            children[parent] = (left, right);
        }

        Self::build_from_slots(Some(0), &mut slots, &children)
    }

    fn claim_slot(slots: &[Option<T>], next: &mut usize, queue: &mut VecDeque<usize>) -> Option<usize> {
        let index = *next;
        if index >= slots.len() {
            return None;
        }
        *next += 1;
        if slots[index].is_some() {
            queue.push_back(index);
            Some(index)
        } else {
            None
        }
    }

    fn build_from_slots(
        index: Option<usize>,
        slots: &mut [Option<T>],
        children: &[(Option<usize>, Option<usize>)],
    ) -> Self {
        let Some(index) = index else {
            return BinaryTree::Empty;
        };
        let Some(value) = slots.get_mut(index).and_then(Option::take) else {
            return BinaryTree::Empty;
        };
        let (left, right) = children.get(index).copied().unwrap_or((None, None));
        Self::node(
            value,
            Self::build_from_slots(left, slots, children),
            Self::build_from_slots(right, slots, children),
        )
    }

    /// Hangs `value` off a randomly chosen empty slot, walking down by coin flips.
    pub fn insert_random<R: Rng + ?Sized>(&mut self, new_value: T, rng: &mut R) {
        match self {
            BinaryTree::Empty => *self = BinaryTree::leaf(new_value),
            BinaryTree::Node { left, right, .. } => {
                if rng.gen_bool(0.5) {
                    left.insert_random(new_value, rng)
                } else {
                    right.insert_random(new_value, rng)
                }
            }
        }
    }

    /// Generates a tree of random shape with `count` nodes drawn from `values`.
    /// An empty value range yields an empty tree.
    pub fn random<R: Rng + ?Sized>(count: usize, values: Range<T>, rng: &mut R) -> Self
    where
        T: SampleUniform + PartialOrd + Clone,
    {
        let mut tree = BinaryTree::new();
        if values.is_empty() {
            return tree;
        }
        for _ in 0..count {
            let value = rng.gen_range(values.clone());
            tree.insert_random(value, rng);
        }
        tree
    }
}

impl<T: Ord> BinaryTree<T> {
    /// Inserts a value with search-tree ordering. Values less than the current
    /// node go left; values greater or equal go right.
    pub fn insert(&mut self, new_value: T) {
        match self {
            BinaryTree::Empty => *self = BinaryTree::leaf(new_value),
            BinaryTree::Node { value, left, right } => {
                if new_value < *value {
                    left.insert(new_value)
                } else {
                    right.insert(new_value)
                }
            }
        }
    }

    /// Builds a search tree by inserting the values one by one.
    pub fn from_vec(values: impl IntoIterator<Item = T>) -> Self {
        let mut tree = BinaryTree::new();
        for val in values {
            tree.insert(val);
        }
        tree
    }
}

impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryTree::Empty => write!(f, "None"),
            BinaryTree::Node { value, left, right } => {
                write!(f, "TreeNode(value={value}, left={left}, right={right})")
            }
        }
    }
}
