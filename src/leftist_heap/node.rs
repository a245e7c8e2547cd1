use crate::leftist_heap::tree::Tree;
use std::rc::Rc;

/// An immutable node of a leftist tree.
///
/// The constructor decides which subtree becomes the right child, so every node satisfies
/// `rank(right) <= rank(left)` no matter what subtrees it is given. Nothing can reassign a child
/// after construction, which is what allows subtrees to be shared between heaps.
#[derive(Debug)]
pub struct Node<T> {
    pub(super) data: T,
    pub(super) children: Children<T>,
    pub(super) rank: usize,
}

/// The two subtrees of a node. Dropping it releases every node it owns alone with an explicit
/// stack, since a left spine can be as long as the tree is large.
#[derive(Debug)]
pub(super) struct Children<T> {
    pub(super) left: Tree<T>,
    pub(super) right: Tree<T>,
}

impl<T> Drop for Children<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Rc<Node<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(node) = stack.pop() {
            if let Ok(mut node) = Rc::try_unwrap(node) {
                stack.extend(node.children.left.take());
                stack.extend(node.children.right.take());
            }
        }
    }
}

/// Returns the null path length of a tree, which is zero for an empty tree.
pub fn rank<T>(tree: &Tree<T>) -> usize {
    match tree {
        Some(node) => node.rank,
        None => 0,
    }
}

impl<T> Node<T> {
    /// Constructs a node from a payload and two leftist trees in either order. The subtree with
    /// the smaller rank becomes the right child. If the ranks are equal, `a` becomes the right
    /// child and `b` the left child.
    ///
    /// # Examples
    ///
    /// ```
    /// use leftist_queue::leftist_heap::{rank, Node};
    /// use std::rc::Rc;
    ///
    /// let leaf = Some(Rc::new(Node::new(2, None, None)));
    /// let node = Node::new(1, None, leaf);
    ///
    /// assert_eq!(rank(node.left()), 1);
    /// assert_eq!(rank(node.right()), 0);
    /// assert_eq!(node.rank(), 1);
    /// ```
    pub fn new(data: T, a: Tree<T>, b: Tree<T>) -> Self {
        let (left, right) = if rank(&b) < rank(&a) { (a, b) } else { (b, a) };
        let rank = rank(&right) + 1;
        Node {
            data,
            children: Children { left, right },
            rank,
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn left(&self) -> &Tree<T> {
        &self.children.left
    }

    pub fn right(&self) -> &Tree<T> {
        &self.children.right
    }

    /// Returns the length of the right spine starting at this node.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Returns `true` if the node has no children. Because of the leftist property, this is the
    /// same as having no left child.
    pub fn is_leaf(&self) -> bool {
        self.children.left.is_none() && self.children.right.is_none()
    }
}
