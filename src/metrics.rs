use crate::binary_tree::BinaryTree;

impl<T> BinaryTree<T> {
    /// Number of nodes on the longest root-to-leaf path, computed recursively.
    pub fn max_depth_recursive(&self) -> usize {
        match self {
            BinaryTree::Empty => 0,
            BinaryTree::Node { left, right, .. } => {
                let left_depth = left.max_depth_recursive();
                let right_depth = right.max_depth_recursive();
                left_depth.max(right_depth) + 1
            }
        }
    }

    /// Same as [`BinaryTree::max_depth_recursive`] but driven by an explicit
    /// stack of `(node, depth)` pairs, so tree height does not touch the call stack.
    pub fn max_depth_iterative(&self) -> usize {
        if self.is_empty() {
            return 0;
        }

        let mut stack = vec![(self, 1)];
        let mut max_depth = 0;
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let BinaryTree::Node { left, right, .. } = node {
                // Only present children are pushed.
                if !left.is_empty() {
                    stack.push((&**left, depth + 1));
                }
                if !right.is_empty() {
                    stack.push((&**right, depth + 1));
                }
            }
        }
        max_depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth_iterative()
    }
}

impl<T: Ord> BinaryTree<T> {
    /// Counts nodes whose value is not exceeded by any ancestor on the path
    /// from the root. The root is always good.
    pub fn count_good_nodes(&self) -> usize {
        self.good_nodes_below(None)
    }

    // `ancestor_max` is `None` until the root has been seen.
    fn good_nodes_below(&self, ancestor_max: Option<&T>) -> usize {
        let BinaryTree::Node { value, left, right } = self else {
            return 0;
        };
        let is_good = ancestor_max.map_or(true, |max| value >= max);
        let path_max = match ancestor_max {
            Some(max) if max > value => max,
            _ => value,
        };
        usize::from(is_good) + left.good_nodes_below(Some(path_max)) + right.good_nodes_below(Some(path_max))
    }
}
