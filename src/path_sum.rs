use crate::binary_tree::BinaryTree;

// The target is threaded down by subtracting each ancestor's value, so a leaf
// matches when what remains equals its own value. The remainder is carried as
// `i128`, which holds every difference of 64-bit or narrower integers; a
// remainder that still overflows cannot be matched by any leaf below it.
impl<T> BinaryTree<T>
where
    T: Copy + Into<i128>,
{
    /// Returns true if some root-to-leaf path sums to `target`.
    pub fn has_path_sum(&self, target: T) -> bool {
        self.has_remaining(target.into())
    }

    fn has_remaining(&self, remaining: i128) -> bool {
        let BinaryTree::Node { value, left, right } = self else {
            return false;
        };
        let value: i128 = (*value).into();
        if self.is_leaf() {
            return remaining == value;
        }
        let Some(rest) = remaining.checked_sub(value) else {
            return false;
        };
        left.has_remaining(rest) || right.has_remaining(rest)
    }

    /// Counts the root-to-leaf paths that sum to `target`.
    pub fn count_path_sum(&self, target: T) -> usize {
        self.count_remaining(target.into())
    }

    fn count_remaining(&self, remaining: i128) -> usize {
        let BinaryTree::Node { value, left, right } = self else {
            return 0;
        };
        let value: i128 = (*value).into();
        if self.is_leaf() {
            return usize::from(remaining == value);
        }
        let Some(rest) = remaining.checked_sub(value) else {
            return 0;
        };
        left.count_remaining(rest) + right.count_remaining(rest)
    }

    /// Returns one root-to-leaf path summing to `target`, preferring paths
    /// through the left subtree.
    pub fn find_path_with_sum(&self, target: T) -> Option<Vec<T>> {
        let mut path = self.leaf_first_path(target.into())?;
        path.reverse();
        Some(path)
    }

    // Built leaf first so each level appends instead of prepending.
    fn leaf_first_path(&self, remaining: i128) -> Option<Vec<T>> {
        let BinaryTree::Node { value, left, right } = self else {
            return None;
        };
        let wide: i128 = (*value).into();
        if self.is_leaf() {
            return (remaining == wide).then(|| vec![*value]);
        }
        let rest = remaining.checked_sub(wide)?;
        let mut path = left
            .leaf_first_path(rest)
            .or_else(|| right.leaf_first_path(rest))?;
        path.push(*value);
        Some(path)
    }

    /// Returns every root-to-leaf path summing to `target`, left subtree paths
    /// first. No match (or an empty tree) gives an empty list.
    pub fn find_paths_with_sum(&self, target: T) -> Vec<Vec<T>> {
        let mut paths = Vec::new();
        let mut current = Vec::new();
        self.collect_paths(target.into(), &mut current, &mut paths);
        paths
    }

    fn collect_paths(&self, remaining: i128, current: &mut Vec<T>, paths: &mut Vec<Vec<T>>) {
        let BinaryTree::Node { value, left, right } = self else {
            return;
        };
        let wide: i128 = (*value).into();
        current.push(*value);
        if self.is_leaf() {
            if remaining == wide {
                paths.push(current.clone());
            }
        } else if let Some(rest) = remaining.checked_sub(wide) {
            left.collect_paths(rest, current, paths);
            right.collect_paths(rest, current, paths);
        }
        current.pop();
    }
}
