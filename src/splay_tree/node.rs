use crate::splay_tree::tree::Tree;
use std::mem;

pub struct Node<T> {
    pub key: T,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            left: None,
            right: None,
        }
    }

    /// Promotes the right child into this node's slot. The current node becomes the left child of
    /// the promoted node and adopts its former left subtree. Does nothing without a right child.
    pub fn rotate_left(&mut self) {
        if let Some(mut child) = self.right.take() {
            self.right = child.left.take();
            mem::swap(&mut *child, self);
            self.left = Some(child);
        }
    }

    /// Mirror of `rotate_left`.
    pub fn rotate_right(&mut self) {
        if let Some(mut child) = self.left.take() {
            self.left = child.right.take();
            mem::swap(&mut *child, self);
            self.right = Some(child);
        }
    }
}
