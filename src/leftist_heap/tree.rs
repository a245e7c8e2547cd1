use crate::leftist_heap::node::Node;
use std::collections::VecDeque;
use std::rc::Rc;

/// A possibly empty leftist tree. Subtrees are reference counted and may be shared.
pub type Tree<T> = Option<Rc<Node<T>>>;

pub fn singleton<T>(data: T) -> Tree<T> {
    Some(Rc::new(Node::new(data, None, None)))
}

/// Takes a node apart. A node that is not shared is consumed and its payload moved out; a shared
/// node is left untouched and its payload cloned.
pub fn into_parts<T>(node: Rc<Node<T>>) -> (T, Tree<T>, Tree<T>)
where
    T: Clone,
{
    match Rc::try_unwrap(node) {
        Ok(node) => {
            let Node { data, mut children, .. } = node;
            (data, children.left.take(), children.right.take())
        },
        Err(node) => (node.data.clone(), node.left().clone(), node.right().clone()),
    }
}

/// Merges two heap-ordered leftist trees. When the roots compare equal, the root of `h1` becomes
/// the root of the result.
pub fn merge<T>(h1: Tree<T>, h2: Tree<T>) -> Tree<T>
where
    T: Ord + Clone,
{
    match (h1, h2) {
        (None, tree) | (tree, None) => tree,
        (Some(h1), Some(h2)) => {
            let (small, large) = if h1.data <= h2.data { (h1, h2) } else { (h2, h1) };
            let (data, left, right) = into_parts(small);
            let merged_right = merge(right, Some(large));
            Some(Rc::new(Node::new(data, left, merged_right)))
        }
    }
}

/// Builds a heap from singleton trees by merging them in pairs, round robin, which takes linear
/// time overall.
pub fn merge_all<T, I>(trees: I) -> Tree<T>
where
    T: Ord + Clone,
    I: IntoIterator<Item = Tree<T>>,
{
    let mut pending: VecDeque<Tree<T>> = trees.into_iter().collect();
    while pending.len() > 1 {
        if let (Some(h1), Some(h2)) = (pending.pop_front(), pending.pop_front()) {
            pending.push_back(merge(h1, h2));
        }
    }
    pending.pop_front().and_then(|tree| tree)
}

/// Rebuilds an arbitrary tree into a valid heap and returns it along with its number of nodes.
/// Neither the shape nor the order of `tree` is assumed to be valid.
pub fn rebuild<T>(tree: Tree<T>) -> (Tree<T>, usize)
where
    T: Ord + Clone,
{
    let mut stack: Vec<Rc<Node<T>>> = tree.into_iter().collect();
    let mut singletons = Vec::new();
    while let Some(node) = stack.pop() {
        let (data, left, right) = into_parts(node);
        stack.extend(left);
        stack.extend(right);
        singletons.push(singleton(data));
    }
    let len = singletons.len();
    (merge_all(singletons), len)
}
