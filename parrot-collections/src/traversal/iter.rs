use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use crate::traversal::NodeHandle;

/// Depth-first, node before children.
pub struct PreOrder<N, F, I: IntoIterator> {
    children: F,
    root: Option<N>,

    // One child iterator per ancestor of the next node to be produced.
    stack: Vec<I::IntoIter>,
}

impl<N, F, I> PreOrder<N, F, I>
where
    F: FnMut(N) -> I,
    I: IntoIterator,
{
    pub fn new(root: Option<N>, children: F) -> Self {
        Self {
            children,
            root,
            stack: Vec::new(),
        }
    }
}

impl<N, F, I> Iterator for PreOrder<N, F, I>
where
    N: Copy,
    F: FnMut(N) -> I,
    I: IntoIterator,
    I::Item: Into<Option<N>>,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        if let Some(root) = self.root.take() {
            self.stack.push((self.children)(root).into_iter());
            return Some(root);
        }

        loop {
            let last_iter = self.stack.last_mut()?;
            let Some(child) = last_iter.next() else {
                self.stack.pop();
                continue;
            };

            let child: Option<N> = child.into();
            if let Some(child) = child {
                self.stack.push((self.children)(child).into_iter());
                return Some(child);
            }
        }
    }
}

/// Depth-first, children before node.
pub struct PostOrder<N, F, I: IntoIterator> {
    children: F,
    root: Option<N>,

    // Each frame holds a node that has not been produced yet and what is left of its children.
    stack: Vec<(N, I::IntoIter)>,
}

impl<N, F, I> PostOrder<N, F, I>
where
    F: FnMut(N) -> I,
    I: IntoIterator,
{
    pub fn new(root: Option<N>, children: F) -> Self {
        Self {
            children,
            root,
            stack: Vec::new(),
        }
    }
}

impl<N, F, I> Iterator for PostOrder<N, F, I>
where
    N: Copy,
    F: FnMut(N) -> I,
    I: IntoIterator,
    I::Item: Into<Option<N>>,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        if let Some(root) = self.root.take() {
            let children = (self.children)(root).into_iter();
            self.stack.push((root, children));
        }

        loop {
            let (_, children) = self.stack.last_mut()?;
            let Some(child) = children.next() else {
                return self.stack.pop().map(|(node, _)| node);
            };

            let child: Option<N> = child.into();
            if let Some(child) = child {
                let grandchildren = (self.children)(child).into_iter();
                self.stack.push((child, grandchildren));
            }
        }
    }
}

/// Left subtree, node, right subtree. `branches` returns the `(left, right)` pair of a node.
pub struct InOrder<N, F> {
    branches: F,
    cur: Option<N>,

    // Nodes whose left subtree is being walked, each with its pending right subtree.
    stack: Vec<(N, Option<N>)>,
}

impl<N, F> InOrder<N, F> {
    pub fn new(root: Option<N>, branches: F) -> Self {
        Self {
            branches,
            cur: root,
            stack: Vec::new(),
        }
    }
}

impl<N, F> Iterator for InOrder<N, F>
where
    N: Copy,
    F: FnMut(N) -> (Option<N>, Option<N>),
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        while let Some(node) = self.cur.take() {
            let (left, right) = (self.branches)(node);
            self.stack.push((node, right));
            self.cur = left;
        }

        let (node, right) = self.stack.pop()?;
        self.cur = right;
        Some(node)
    }
}

/// Level order. A child is queued only if its key has not been seen before, so a node whose
/// key repeats (and everything beneath it) is skipped.
pub struct BreadthFirst<N, F, K, H> {
    children: F,
    key: K,
    queue: VecDeque<N>,
    seen: HashSet<H>,
}

impl<N: NodeHandle, F> BreadthFirst<N, F, fn(N) -> N::Id, N::Id> {
    /// Nodes are keyed by identity, so distinct nodes are all produced even when equal.
    pub fn new(root: Option<N>, children: F) -> Self {
        Self::with_key(root, children, N::id)
    }
}

impl<N, F, K, H> BreadthFirst<N, F, K, H>
where
    N: Copy,
    K: FnMut(N) -> H,
    H: Hash + Eq,
{
    pub fn with_key(root: Option<N>, children: F, mut key: K) -> Self {
        let mut queue = VecDeque::new();
        let mut seen = HashSet::new();
        if let Some(root) = root {
            seen.insert(key(root));
            queue.push_back(root);
        }
        Self {
            children,
            key,
            queue,
            seen,
        }
    }

    /// Number of distinct keys recorded so far, including nodes queued but not yet produced.
    pub fn seen(&self) -> usize {
        self.seen.len()
    }
}

impl<N, F, I, K, H> Iterator for BreadthFirst<N, F, K, H>
where
    N: Copy,
    F: FnMut(N) -> I,
    I: IntoIterator,
    I::Item: Into<Option<N>>,
    K: FnMut(N) -> H,
    H: Hash + Eq,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let node = self.queue.pop_front()?;
        for child in (self.children)(node) {
            let child: Option<N> = child.into();
            let Some(child) = child else {
                continue;
            };
            if self.seen.insert((self.key)(child)) {
                self.queue.push_back(child);
            }
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use crate::node::{BinaryTreeNode, TreeNode};
    use crate::traversal::iter::{BreadthFirst, InOrder, PostOrder, PreOrder};

    fn sample() -> TreeNode<u32> {
        TreeNode::new(1)
            .with_child(TreeNode::new(2).with_child(4).with_child(5))
            .with_child(3)
    }

    fn values<'a>(nodes: impl Iterator<Item = &'a TreeNode<u32>>) -> Vec<u32> {
        nodes.map(|n| *n.value()).collect()
    }

    #[test]
    fn test_empty_root() {
        let none: Option<&TreeNode<u32>> = None;
        assert_eq!(PreOrder::new(none, TreeNode::children).count(), 0);
        assert_eq!(PostOrder::new(none, TreeNode::children).count(), 0);
        assert_eq!(BreadthFirst::new(none, TreeNode::children).count(), 0);

        let none: Option<&BinaryTreeNode<u32>> = None;
        assert_eq!(InOrder::new(none, BinaryTreeNode::branches).count(), 0);
    }

    #[test]
    fn test_single_node() {
        let leaf = TreeNode::new(9);
        assert_eq!(values(PreOrder::new(Some(&leaf), TreeNode::children)), vec![9]);
        assert_eq!(values(PostOrder::new(Some(&leaf), TreeNode::children)), vec![9]);
        assert_eq!(
            values(BreadthFirst::new(Some(&leaf), TreeNode::children)),
            vec![9]
        );
    }

    #[test]
    fn test_orders() {
        let tree = sample();
        assert_eq!(
            values(PreOrder::new(Some(&tree), TreeNode::children)),
            vec![1, 2, 4, 5, 3]
        );
        assert_eq!(
            values(PostOrder::new(Some(&tree), TreeNode::children)),
            vec![4, 5, 2, 3, 1]
        );
        assert_eq!(
            values(BreadthFirst::new(Some(&tree), TreeNode::children)),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn test_absent_children_are_skipped() {
        let tree = BinaryTreeNode::new(2).with_right(BinaryTreeNode::new(3).with_left(1));
        let pre: Vec<u32> = PreOrder::new(Some(&tree), BinaryTreeNode::children)
            .map(|n| *n.value())
            .collect();
        assert_eq!(pre, vec![2, 3, 1]);

        let post: Vec<u32> = PostOrder::new(Some(&tree), BinaryTreeNode::children)
            .map(|n| *n.value())
            .collect();
        assert_eq!(post, vec![1, 3, 2]);

        let in_order: Vec<u32> = InOrder::new(Some(&tree), BinaryTreeNode::branches)
            .map(|n| *n.value())
            .collect();
        assert_eq!(in_order, vec![2, 1, 3]);
    }

    #[test]
    fn test_identity_vs_value_keys() {
        let tree = TreeNode::new(0)
            .with_child(TreeNode::new(7).with_child(1))
            .with_child(TreeNode::new(7).with_child(2));

        let by_identity = BreadthFirst::new(Some(&tree), TreeNode::children);
        assert_eq!(values(by_identity), vec![0, 7, 7, 1, 2]);

        let value = |n: &TreeNode<u32>| *n.value();
        let mut by_value = BreadthFirst::with_key(Some(&tree), TreeNode::children, value);
        let mut visited = Vec::new();
        for node in by_value.by_ref() {
            visited.push(*node.value());
        }
        // The second 7 is never queued, so neither is its child.
        assert_eq!(visited, vec![0, 7, 1]);
        assert_eq!(by_value.seen(), 3);
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let depth = 100_000u32;
        let mut tree = BinaryTreeNode::new(depth);
        for value in (0..depth).rev() {
            tree = BinaryTreeNode::new(value).with_right(tree);
        }
        let count = InOrder::new(Some(&tree), BinaryTreeNode::branches).count();
        assert_eq!(count as u32, depth + 1);
        let count = PostOrder::new(Some(&tree), BinaryTreeNode::children).count();
        assert_eq!(count as u32, depth + 1);

        // Dropping a long chain of boxes recurses; unlink it iteratively first.
        let mut next = Some(tree);
        while let Some(mut node) = next {
            next = node.take_right();
        }
    }
}
