//! An ordered set built on a self-adjusting binary search tree.
//!
//! Every insert, search, and removal splays the touched key to the root of the tree, so keys that
//! were used recently are cheap to reach again. See [`splay_tree`](splay_tree/index.html).

#[macro_use]
extern crate log;

pub mod splay_tree;
