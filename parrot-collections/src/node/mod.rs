mod binary_tree_node;
mod tree_node;

pub use binary_tree_node::BinaryTreeNode;
pub use tree_node::TreeNode;
