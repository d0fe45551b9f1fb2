use std::ops::{Index, IndexMut};

use crate::traversal::iter::{BreadthFirst, PostOrder, PreOrder};
use crate::traversal::{breadth_first, post_order, pre_order};

/// A node carrying a value and an ordered list of owned children.
///
/// Children belong to exactly one parent and hold no reference back to it, so a `TreeNode`
/// graph is always a tree. Dropping a node drops its whole subtree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TreeNode<T> {
    value: T,
    children: Vec<TreeNode<T>>,
}

impl<T> From<T> for TreeNode<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> TreeNode<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
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

    /// Replaces the value, returning the previous one.
    pub fn set_value(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    pub fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub fn children(&self) -> &[TreeNode<T>] {
        &self.children
    }

    #[inline]
    pub fn children_mut(&mut self) -> &mut [TreeNode<T>] {
        &mut self.children
    }

    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// True when the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, index: usize) -> Option<&TreeNode<T>> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut TreeNode<T>> {
        self.children.get_mut(index)
    }

    /// Appends `child` and returns it, so trees can be built top-down:
    ///
    /// ```rust
    /// use parrot_collections::node::TreeNode;
    ///
    /// let mut root = TreeNode::new("F");
    /// root.add_child("B").add_child("A");
    /// assert_eq!(root[0][0].value(), &"A");
    /// ```
    pub fn add_child(&mut self, child: impl Into<TreeNode<T>>) -> &mut TreeNode<T> {
        let index = self.children.len();
        self.children.push(child.into());
        &mut self.children[index]
    }

    /// Builder-style [`TreeNode::add_child`].
    pub fn with_child(mut self, child: impl Into<TreeNode<T>>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Inserts `child` at `index`, shifting later children along.
    ///
    /// # Panics
    ///
    /// If `index > self.child_count()`.
    pub fn insert_child(&mut self, index: usize, child: impl Into<TreeNode<T>>) {
        self.children.insert(index, child.into());
    }

    /// Removes and returns the child at `index`, or `None` if there is no such child.
    pub fn remove_child(&mut self, index: usize) -> Option<TreeNode<T>> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    /// Detaches every child, returning them in order.
    pub fn take_children(&mut self) -> Vec<TreeNode<T>> {
        std::mem::take(&mut self.children)
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// The position of the first direct child holding `value`.
    pub fn position_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.children.iter().position(|child| &child.value == value)
    }

    pub fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.position_of(value).is_some()
    }

    pub fn pre_order<A>(&self, action: A)
    where
        A: FnMut(&TreeNode<T>),
    {
        pre_order(Some(self), TreeNode::children, action);
    }

    pub fn post_order<A>(&self, action: A)
    where
        A: FnMut(&TreeNode<T>),
    {
        post_order(Some(self), TreeNode::children, action);
    }

    /// Level-order visit; nodes are told apart by address.
    pub fn breadth_first<A>(&self, action: A)
    where
        A: FnMut(&TreeNode<T>),
    {
        breadth_first(Some(self), TreeNode::children, action);
    }

    pub fn iter_pre_order(&self) -> impl Iterator<Item = &TreeNode<T>> + '_ {
        PreOrder::new(Some(self), TreeNode::children)
    }

    pub fn iter_post_order(&self) -> impl Iterator<Item = &TreeNode<T>> + '_ {
        PostOrder::new(Some(self), TreeNode::children)
    }

    pub fn iter_breadth_first(&self) -> impl Iterator<Item = &TreeNode<T>> + '_ {
        BreadthFirst::new(Some(self), TreeNode::children)
    }
}

impl<T> Index<usize> for TreeNode<T> {
    type Output = TreeNode<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.children[index]
    }
}

impl<T> IndexMut<usize> for TreeNode<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.children[index]
    }
}

#[cfg(test)]
mod tests {
    use crate::node::TreeNode;

    #[test]
    fn test_children_start_empty() {
        let node = TreeNode::new(1);
        assert!(node.is_leaf());
        assert_eq!(node.child_count(), 0);
        assert!(node.children().is_empty());

        let node = TreeNode::<String>::default();
        assert_eq!(node.value(), "");
        assert!(node.is_leaf());
    }

    #[test]
    fn test_child_collection_ops() {
        let mut root = TreeNode::new("root");
        root.add_child("a");
        root.add_child("c");
        root.insert_child(1, "b");
        assert_eq!(
            root.children().iter().map(|c| *c.value()).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );

        assert_eq!(root.position_of(&"c"), Some(2));
        assert!(root.contains_value(&"b"));
        assert!(!root.contains_value(&"z"));

        let removed = root.remove_child(0).unwrap();
        assert_eq!(removed.into_value(), "a");
        assert!(root.remove_child(5).is_none());
        assert_eq!(root.child_count(), 2);

        root[0].set_value("B");
        assert_eq!(root.child(0).map(TreeNode::value), Some(&"B"));

        let taken = root.take_children();
        assert_eq!(taken.len(), 2);
        assert!(root.is_leaf());

        root.add_child("x");
        root.clear_children();
        assert!(root.is_leaf());
    }

    #[test]
    fn test_value_accessors() {
        let mut node = TreeNode::new(5);
        *node.value_mut() += 1;
        assert_eq!(node.set_value(10), 6);
        assert_eq!(*node.value(), 10);
    }

    #[test]
    fn test_builder_and_equality() {
        let built = TreeNode::new(1)
            .with_child(TreeNode::new(2).with_child(3))
            .with_child(4);

        let mut manual = TreeNode::new(1);
        manual.add_child(2).add_child(3);
        manual.add_child(4);
        assert_eq!(built, manual);

        let mut copy = built.clone();
        copy.child_mut(1).unwrap().set_value(40);
        assert_ne!(copy, built);
    }
}
