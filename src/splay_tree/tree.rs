use crate::splay_tree::node::Node;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

/// Whether `key` continues past `child` in the direction given by `ordering`.
fn descends<T, V>(child: &Tree<T>, key: &V, ordering: Ordering) -> bool
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    child
        .as_ref()
        .map_or(false, |child| key.cmp(child.key.borrow()) == ordering)
}

/// Top-down splay. Walks from `root` towards `key`, moving every node it passes into one of two side
/// trees: `less` collects nodes with keys below `key` and `greater` those above. Afterwards
/// `root` holds `key`, or the last node visited if `key` is absent, with the side trees as its
/// subtrees.
pub fn splay<T, V>(root: &mut Box<Node<T>>, key: &V)
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut less: Tree<T> = None;
    let mut greater: Tree<T> = None;
    let mut links = 0;
    {
        let mut less_tail = &mut less;
        let mut greater_tail = &mut greater;
        loop {
            let ordering = key.cmp(root.key.borrow());
            match ordering {
                Ordering::Less if descends(&root.left, key, Ordering::Less) => root.rotate_right(),
                Ordering::Greater if descends(&root.right, key, Ordering::Greater) => {
                    root.rotate_left()
                },
                _ => {},
            }

            let next = match ordering {
                Ordering::Less => root.left.take(),
                Ordering::Greater => root.right.take(),
                Ordering::Equal => None,
            };
            let child = match next {
                Some(child) => child,
                None => break,
            };

            // Smallest key so far above `key` hangs on the left spine of `greater`, and the
            // largest key so far below it on the right spine of `less`.
            let parent = mem::replace(root, child);
            if ordering == Ordering::Less {
                greater_tail = &mut greater_tail.insert(parent).left;
            } else {
                less_tail = &mut less_tail.insert(parent).right;
            }
            links += 1;
        }
        *less_tail = root.left.take();
        *greater_tail = root.right.take();
    }
    root.left = less;
    root.right = greater;
    trace!("splay linked {} nodes into the side trees", links);
}

/// Inserts `key` and makes it the root. Returns `false` if it was already present, in which case
/// the tree is splayed but otherwise unchanged.
pub fn insert<T: Ord>(tree: &mut Tree<T>, key: T) -> bool {
    let mut old_root = match tree.take() {
        Some(mut root) => {
            splay(&mut root, &key);
            root
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    let ordering = key.cmp(&old_root.key);
    if ordering == Ordering::Equal {
        *tree = Some(old_root);
        return false;
    }

    // The splayed root is a neighbour of `key`, so it only needs to give up its subtree on the
    // far side of the new key.
    let mut new_root = Node::new(key);
    if ordering == Ordering::Less {
        new_root.left = old_root.left.take();
        new_root.right = Some(old_root);
    } else {
        new_root.right = old_root.right.take();
        new_root.left = Some(old_root);
    }
    trace!("split root around the new key");
    *tree = Some(Box::new(new_root));
    true
}

/// Removes `key`. The left subtree is splayed for `key`, which brings its maximum to the top with
/// no right child, and the right subtree hangs off that.
pub fn remove<T, V>(tree: &mut Tree<T>, key: &V) -> Option<T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut root = tree.take()?;
    splay(&mut root, key);
    if key.cmp(root.key.borrow()) != Ordering::Equal {
        *tree = Some(root);
        return None;
    }

    let Node { key: removed, left, right } = *root;
    *tree = match left {
        Some(mut left) => {
            splay(&mut left, key);
            left.right = right;
            trace!("joined subtrees under the predecessor of the removed key");
            Some(left)
        },
        None => right,
    };
    Some(removed)
}

pub fn search<'a, T, V>(tree: &'a mut Tree<T>, key: &V) -> Option<&'a T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let root = tree.as_mut()?;
    splay(root, key);
    if key.cmp(root.key.borrow()) == Ordering::Equal {
        Some(&root.key)
    } else {
        None
    }
}

pub fn contains<T, V>(tree: &Tree<T>, key: &V) -> bool
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(node) = curr {
        curr = match key.cmp(node.key.borrow()) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    let mut node = tree.as_ref()?;
    while let Some(left) = &node.left {
        node = left;
    }
    Some(&node.key)
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    let mut node = tree.as_ref()?;
    while let Some(right) = &node.right {
        node = right;
    }
    Some(&node.key)
}

/// Frees every node without recursing. Left children are rotated up until the current node has
/// none, at which point it can be dropped on its own.
pub fn clear<T>(tree: &mut Tree<T>) {
    let mut curr = tree.take();
    while let Some(mut node) = curr {
        if node.left.is_some() {
            node.rotate_right();
            curr = Some(node);
        } else {
            curr = node.right.take();
        }
    }
}
