use crate::traversal::iter::{BreadthFirst, InOrder, PostOrder, PreOrder};
use crate::traversal::{breadth_first, in_order, post_order, pre_order};

/// A node with a value and two optional owned children.
///
/// Nothing ties `left`/`right` to the ordering of the values; any binary shape can be built.
/// In-order traversal only relies on the labelling: left subtree, node, right subtree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BinaryTreeNode<T> {
    value: T,
    left: Option<Box<BinaryTreeNode<T>>>,
    right: Option<Box<BinaryTreeNode<T>>>,
}

impl<T> From<T> for BinaryTreeNode<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> BinaryTreeNode<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn set_value(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    pub fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub fn left(&self) -> Option<&BinaryTreeNode<T>> {
        self.left.as_deref()
    }

    #[inline]
    pub fn right(&self) -> Option<&BinaryTreeNode<T>> {
        self.right.as_deref()
    }

    #[inline]
    pub fn left_mut(&mut self) -> Option<&mut BinaryTreeNode<T>> {
        self.left.as_deref_mut()
    }

    #[inline]
    pub fn right_mut(&mut self) -> Option<&mut BinaryTreeNode<T>> {
        self.right.as_deref_mut()
    }

    /// Both child slots, left first, absent ones included as `None`.
    #[inline]
    pub fn children(&self) -> [Option<&BinaryTreeNode<T>>; 2] {
        [self.left(), self.right()]
    }

    /// `(left, right)`, the accessor shape in-order traversal expects.
    #[inline]
    pub fn branches(&self) -> (Option<&BinaryTreeNode<T>>, Option<&BinaryTreeNode<T>>) {
        (self.left(), self.right())
    }

    /// Puts `node` in the left slot and returns a mutable reference to it. Any previous left
    /// subtree is dropped.
    pub fn set_left(&mut self, node: impl Into<BinaryTreeNode<T>>) -> &mut BinaryTreeNode<T> {
        self.left.insert(Box::new(node.into()))
    }

    /// Puts `node` in the right slot and returns a mutable reference to it. Any previous right
    /// subtree is dropped.
    pub fn set_right(&mut self, node: impl Into<BinaryTreeNode<T>>) -> &mut BinaryTreeNode<T> {
        self.right.insert(Box::new(node.into()))
    }

    pub fn take_left(&mut self) -> Option<BinaryTreeNode<T>> {
        self.left.take().map(|node| *node)
    }

    pub fn take_right(&mut self) -> Option<BinaryTreeNode<T>> {
        self.right.take().map(|node| *node)
    }

    pub fn with_left(mut self, node: impl Into<BinaryTreeNode<T>>) -> Self {
        self.left = Some(Box::new(node.into()));
        self
    }

    pub fn with_right(mut self, node: impl Into<BinaryTreeNode<T>>) -> Self {
        self.right = Some(Box::new(node.into()));
        self
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn pre_order<A>(&self, action: A)
    where
        A: FnMut(&BinaryTreeNode<T>),
    {
        pre_order(Some(self), BinaryTreeNode::children, action);
    }

    pub fn post_order<A>(&self, action: A)
    where
        A: FnMut(&BinaryTreeNode<T>),
    {
        post_order(Some(self), BinaryTreeNode::children, action);
    }

    pub fn in_order<A>(&self, action: A)
    where
        A: FnMut(&BinaryTreeNode<T>),
    {
        in_order(Some(self), BinaryTreeNode::branches, action);
    }

    pub fn breadth_first<A>(&self, action: A)
    where
        A: FnMut(&BinaryTreeNode<T>),
    {
        breadth_first(Some(self), BinaryTreeNode::children, action);
    }

    pub fn iter_pre_order(&self) -> impl Iterator<Item = &BinaryTreeNode<T>> + '_ {
        PreOrder::new(Some(self), BinaryTreeNode::children)
    }

    pub fn iter_post_order(&self) -> impl Iterator<Item = &BinaryTreeNode<T>> + '_ {
        PostOrder::new(Some(self), BinaryTreeNode::children)
    }

    pub fn iter_in_order(&self) -> impl Iterator<Item = &BinaryTreeNode<T>> + '_ {
        InOrder::new(Some(self), BinaryTreeNode::branches)
    }

    pub fn iter_breadth_first(&self) -> impl Iterator<Item = &BinaryTreeNode<T>> + '_ {
        BreadthFirst::new(Some(self), BinaryTreeNode::children)
    }
}
