//! Self-adjusting binary search tree with the additional property that recently accessed keys are
//! quick to access again.
//!
//! The tree is splayed top-down: a single pass from the root towards the target key restructures
//! the tree so that the key, or the last node visited while looking for it, ends up at the root.
//! Every operation runs in amortized `O(log n)` time and uses constant stack space.

mod node;
mod set;
mod tree;

pub use self::set::{SplaySet, SplaySetIntoIter, SplaySetIter};
