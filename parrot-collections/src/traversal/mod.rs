//! Tree traversal over any node shape.
//!
//! Nothing here knows about a concrete node type. A traversal is given a root (`None` visits
//! nothing), an accessor returning a node's children, and an action run once per visited
//! node. Children may be produced directly (`&Node`) or as optional slots
//! (`Option<&Node>`); absent slots are skipped. In-order traversal instead takes an accessor
//! returning the `(left, right)` pair.
//!
//! All orders run on explicit stacks and queues, so deep or degenerate trees do not exhaust
//! the call stack. The lazy forms live in [`iter`].
//!
//! ```rust
//! use parrot_collections::node::TreeNode;
//! use parrot_collections::traversal::pre_order;
//!
//! let mut root = TreeNode::new("F");
//! root.add_child("B").add_child("A");
//! root.add_child("G");
//!
//! let mut seen = Vec::new();
//! pre_order(Some(&root), TreeNode::children, |n| seen.push(*n.value()));
//! assert_eq!(seen, ["F", "B", "A", "G"]);
//! ```

pub mod iter;

use std::hash::Hash;

use tracing::{instrument, trace};

use crate::traversal::iter::{BreadthFirst, InOrder, PostOrder, PreOrder};

/// A cheap handle to a node with a notion of identity, used to key the breadth-first visited
/// set. Implemented for all shared references, whose identity is their address.
pub trait NodeHandle: Copy {
    type Id: Hash + Eq;

    fn id(self) -> Self::Id;
}

impl<T: ?Sized> NodeHandle for &T {
    type Id = *const T;

    #[inline]
    fn id(self) -> Self::Id {
        self as *const T
    }
}

/// Visits each node, then each of its present children in order.
#[instrument(level = "trace", skip_all)]
pub fn pre_order<N, F, I, A>(root: Option<N>, children: F, mut action: A)
where
    N: Copy,
    F: FnMut(N) -> I,
    I: IntoIterator,
    I::Item: Into<Option<N>>,
    A: FnMut(N),
{
    for node in PreOrder::new(root, children) {
        action(node);
    }
}

/// Visits each present child in order, then the node itself.
#[instrument(level = "trace", skip_all)]
pub fn post_order<N, F, I, A>(root: Option<N>, children: F, mut action: A)
where
    N: Copy,
    F: FnMut(N) -> I,
    I: IntoIterator,
    I::Item: Into<Option<N>>,
    A: FnMut(N),
{
    for node in PostOrder::new(root, children) {
        action(node);
    }
}

/// Visits the left subtree, then the node, then the right subtree.
#[instrument(level = "trace", skip_all)]
pub fn in_order<N, F, A>(root: Option<N>, branches: F, mut action: A)
where
    N: Copy,
    F: FnMut(N) -> (Option<N>, Option<N>),
    A: FnMut(N),
{
    for node in InOrder::new(root, branches) {
        action(node);
    }
}

/// Visits nodes level by level. A node already visited is not visited again; identity is
/// decided by [`NodeHandle::id`], so distinct nodes holding equal values are all visited.
pub fn breadth_first<N, F, I, A>(root: Option<N>, children: F, action: A)
where
    N: NodeHandle,
    F: FnMut(N) -> I,
    I: IntoIterator,
    I::Item: Into<Option<N>>,
    A: FnMut(N),
{
    breadth_first_by_key(root, children, N::id, action);
}

/// [`breadth_first`] with the visited set keyed by `key`. Once a key has been seen, any later
/// node with the same key is skipped together with its subtree.
///
/// Keying by value reproduces visited-by-equality semantics:
///
/// ```rust
/// use parrot_collections::node::TreeNode;
/// use parrot_collections::traversal::breadth_first_by_key;
///
/// let root = TreeNode::new("a").with_child("b").with_child("b");
///
/// let mut visits = 0;
/// breadth_first_by_key(Some(&root), TreeNode::children, |n| *n.value(), |_| visits += 1);
/// assert_eq!(visits, 2);
/// ```
#[instrument(level = "trace", skip_all)]
pub fn breadth_first_by_key<N, F, I, K, H, A>(root: Option<N>, children: F, key: K, mut action: A)
where
    N: Copy,
    F: FnMut(N) -> I,
    I: IntoIterator,
    I::Item: Into<Option<N>>,
    K: FnMut(N) -> H,
    H: Hash + Eq,
    A: FnMut(N),
{
    let mut nodes = BreadthFirst::with_key(root, children, key);
    let mut visited = 0usize;
    for node in nodes.by_ref() {
        action(node);
        visited += 1;
    }
    trace!(visited, distinct = nodes.seen(), "breadth-first traversal complete");
}
