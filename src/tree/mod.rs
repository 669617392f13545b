//! Trees.
//!
//! - `binary`: an unbalanced search tree whose nodes track subtree sizes
//! - `avl`: a height-balanced key set
//! - `red_black`: a left-leaning red-black map
//! - `btree`: a B-tree key set with configurable minimum degree
//! - `merkle`: a hash tree committing to a list of data blocks

pub mod avl;
pub mod binary;
pub mod btree;
pub mod merkle;
pub mod red_black;

pub use avl::AvlTree;
pub use binary::{BinaryTree, TreeNode};
pub use btree::BTree;
pub use merkle::{MerkleHash, MerkleNode, MerkleTree};
pub use red_black::RedBlackTree;
