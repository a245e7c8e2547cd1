use crate::entry::Entry;
use crate::leftist_heap::node::Node;
use crate::leftist_heap::tree::{self, Tree};
use crate::leftist_heap::{Error, Result};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;
use std::result;

/// A minimum priority queue implemented using a leftist heap.
///
/// A leftist heap is a heap-ordered binary tree where the null path length of every right child
/// is at most that of its sibling. Merging walks down right spines only, so two queues of sizes
/// `m` and `n` merge in `O(log m + log n)` time, and insertion and removal of the minimum are
/// both a single merge.
///
/// Nodes are immutable and reference counted. Cloning a queue is `O(1)` and the clone is a
/// snapshot: later operations on either queue never affect the other. Payloads are cloned only
/// when a node being rebuilt is still referenced by another snapshot. Because any node may be
/// shared, `add`, `remove_minimum`, `meld`, and the conversions that build a heap require both
/// `P: Clone` and `V: Clone`. Values that are expensive to clone or do not implement `Clone` can
/// be stored behind an `Rc`.
///
/// A queue serializes as a flat sequence of its entries, and deserializing rebuilds the heap, so
/// neither direction depends on the shape of the tree.
///
/// # Examples
///
/// ```
/// use leftist_queue::leftist_heap::MinPriorityQueue;
///
/// let mut queue = MinPriorityQueue::new();
/// queue.add(5, "a");
/// queue.add(3, "b");
/// queue.add(8, "c");
///
/// assert_eq!(queue.len(), 3);
/// assert_eq!(queue.minimum_priority(), Ok(&3));
///
/// assert_eq!(queue.remove_minimum(), Ok("b"));
/// assert_eq!(queue.remove_minimum(), Ok("a"));
/// assert_eq!(queue.remove_minimum(), Ok("c"));
/// assert!(queue.remove_minimum().is_err());
/// ```
pub struct MinPriorityQueue<P, V> {
    root: Tree<Entry<P, V>>,
    len: usize,
}

impl<P, V> MinPriorityQueue<P, V> {
    /// Constructs a new, empty `MinPriorityQueue<P, V>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use leftist_queue::leftist_heap::MinPriorityQueue;
    ///
    /// let queue: MinPriorityQueue<u32, u32> = MinPriorityQueue::new();
    /// ```
    pub fn new() -> Self {
        MinPriorityQueue { root: None, len: 0 }
    }

    /// Inserts a value with the given priority.
    ///
    /// # Examples
    ///
    /// ```
    /// use leftist_queue::leftist_heap::MinPriorityQueue;
    ///
    /// let mut queue = MinPriorityQueue::new();
    /// queue.add(1, 'a');
    /// assert_eq!(queue.peek(), Some((&1, &'a')));
    /// ```
    pub fn add(&mut self, priority: P, value: V)
    where
        P: Ord + Clone,
        V: Clone,
    {
        let node = tree::singleton(Entry { priority, value });
        self.root = Self::merge(self.root.take(), node);
        self.len += 1;
        trace!("Added an element; {} elements in queue.", self.len);
    }

    /// Merges two heaps into one. If the minimum priorities are equal, the minimum of `h1` becomes
    /// the root of the result. Nodes of either heap that are shared elsewhere are left intact.
    ///
    /// # Examples
    ///
    /// ```
    /// use leftist_queue::leftist_heap::MinPriorityQueue;
    ///
    /// let mut a = MinPriorityQueue::new();
    /// a.add(2, 'a');
    /// let mut b = MinPriorityQueue::new();
    /// b.add(1, 'b');
    ///
    /// let merged = MinPriorityQueue::merge(a.root().clone(), b.root().clone());
    /// let queue = MinPriorityQueue::from(merged);
    /// assert_eq!(queue.len(), 2);
    /// assert_eq!(queue.minimum_priority(), Ok(&1));
    /// assert_eq!(a.len(), 1);
    /// ```
    pub fn merge(h1: Tree<Entry<P, V>>, h2: Tree<Entry<P, V>>) -> Tree<Entry<P, V>>
    where
        P: Ord + Clone,
        V: Clone,
    {
        tree::merge(h1, h2)
    }

    /// Returns the minimum priority in the queue, or `Error::EmptyQueue` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use leftist_queue::leftist_heap::{Error, MinPriorityQueue};
    ///
    /// let mut queue = MinPriorityQueue::new();
    /// assert_eq!(queue.minimum_priority(), Err(Error::EmptyQueue));
    /// queue.add(1, 'a');
    /// assert_eq!(queue.minimum_priority(), Ok(&1));
    /// ```
    pub fn minimum_priority(&self) -> Result<&P> {
        match self.root {
            Some(ref node) => Ok(&node.data().priority),
            None => {
                debug!("Attempted to read the minimum priority of an empty queue.");
                Err(Error::EmptyQueue)
            },
        }
    }

    /// Returns the minimum priority and its value without removing them, or `None` if the queue
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use leftist_queue::leftist_heap::MinPriorityQueue;
    ///
    /// let mut queue = MinPriorityQueue::new();
    /// assert_eq!(queue.peek(), None);
    /// queue.add(2, 'b');
    /// queue.add(1, 'a');
    /// assert_eq!(queue.peek(), Some((&1, &'a')));
    /// ```
    pub fn peek(&self) -> Option<(&P, &V)> {
        self.root.as_ref().map(|node| {
            let entry = node.data();
            (&entry.priority, &entry.value)
        })
    }

    /// Removes the value with the minimum priority and returns it, or returns
    /// `Error::EmptyQueue` and leaves the queue unchanged if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use leftist_queue::leftist_heap::{Error, MinPriorityQueue};
    ///
    /// let mut queue = MinPriorityQueue::new();
    /// queue.add(2, 'b');
    /// queue.add(1, 'a');
    /// assert_eq!(queue.remove_minimum(), Ok('a'));
    /// assert_eq!(queue.remove_minimum(), Ok('b'));
    /// assert_eq!(queue.remove_minimum(), Err(Error::EmptyQueue));
    /// ```
    pub fn remove_minimum(&mut self) -> Result<V>
    where
        P: Ord + Clone,
        V: Clone,
    {
        let root = match self.root.take() {
            Some(root) => root,
            None => {
                debug!("Attempted to remove the minimum of an empty queue.");
                return Err(Error::EmptyQueue);
            },
        };
        let (entry, left, right) = tree::into_parts(root);
        self.root = Self::merge(left, right);
        self.len -= 1;
        trace!("Removed the minimum; {} elements in queue.", self.len);
        Ok(entry.value)
    }

    /// Moves all elements of `other` into this queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use leftist_queue::leftist_heap::MinPriorityQueue;
    ///
    /// let mut a = MinPriorityQueue::new();
    /// a.add(3, 'c');
    /// let mut b = MinPriorityQueue::new();
    /// b.add(1, 'a');
    /// b.add(2, 'b');
    ///
    /// a.meld(b);
    /// assert_eq!(a.len(), 3);
    /// assert_eq!(a.remove_minimum(), Ok('a'));
    /// ```
    pub fn meld(&mut self, other: Self)
    where
        P: Ord + Clone,
        V: Clone,
    {
        self.root = Self::merge(self.root.take(), other.root);
        self.len += other.len;
        trace!("Melded {} elements; {} elements in queue.", other.len, self.len);
    }

    /// Returns the underlying heap.
    pub fn root(&self) -> &Tree<Entry<P, V>> {
        &self.root
    }

    /// Consumes the queue and returns the underlying heap.
    pub fn into_root(self) -> Tree<Entry<P, V>> {
        self.root
    }

    /// Returns the number of elements in the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use leftist_queue::leftist_heap::MinPriorityQueue;
    ///
    /// let mut queue = MinPriorityQueue::new();
    /// queue.add(1, 1);
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use leftist_queue::leftist_heap::MinPriorityQueue;
    ///
    /// let queue: MinPriorityQueue<u32, u32> = MinPriorityQueue::new();
    /// assert!(queue.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the queue, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use leftist_queue::leftist_heap::MinPriorityQueue;
    ///
    /// let mut queue = MinPriorityQueue::new();
    /// queue.add(1, 1);
    /// queue.clear();
    /// assert_eq!(queue.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

impl<P, V> Clone for MinPriorityQueue<P, V> {
    fn clone(&self) -> Self {
        MinPriorityQueue {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<P, V> Default for MinPriorityQueue<P, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, V> fmt::Debug for MinPriorityQueue<P, V>
where
    P: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MinPriorityQueue")
            .field("len", &self.len)
            .field("min", &self.peek())
            .finish()
    }
}

impl<P, V> From<Tree<Entry<P, V>>> for MinPriorityQueue<P, V>
where
    P: Ord + Clone,
    V: Clone,
{
    /// Wraps a tree of any shape and order in a queue, rebuilding it into a valid heap in linear
    /// time.
    fn from(root: Tree<Entry<P, V>>) -> Self {
        let (root, len) = tree::rebuild(root);
        MinPriorityQueue { root, len }
    }
}

impl<P, V> FromIterator<(P, V)> for MinPriorityQueue<P, V>
where
    P: Ord + Clone,
    V: Clone,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (P, V)>,
    {
        let mut len = 0;
        let singletons = iter.into_iter().map(|(priority, value)| {
            len += 1;
            tree::singleton(Entry { priority, value })
        });
        let root = tree::merge_all(singletons);
        MinPriorityQueue { root, len }
    }
}

impl<P, V> Extend<(P, V)> for MinPriorityQueue<P, V>
where
    P: Ord + Clone,
    V: Clone,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (P, V)>,
    {
        for (priority, value) in iter {
            self.add(priority, value);
        }
    }
}

impl<P, V> Serialize for MinPriorityQueue<P, V>
where
    P: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        let mut stack: Vec<&Rc<Node<Entry<P, V>>>> = self.root.iter().collect();
        while let Some(node) = stack.pop() {
            seq.serialize_element(node.data())?;
            stack.extend(node.left().iter());
            stack.extend(node.right().iter());
        }
        seq.end()
    }
}

impl<'de, P, V> Deserialize<'de> for MinPriorityQueue<P, V>
where
    P: Ord + Clone + Deserialize<'de>,
    V: Clone + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries: Vec<Entry<P, V>> = Vec::deserialize(deserializer)?;
        trace!("Deserialized {} elements.", entries.len());
        Ok(entries
            .into_iter()
            .map(|Entry { priority, value }| (priority, value))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::MinPriorityQueue;
    use crate::leftist_heap::Error;
    use std::rc::Rc;

    #[test]
    fn test_len_empty() {
        let queue: MinPriorityQueue<u32, u32> = MinPriorityQueue::new();
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let queue: MinPriorityQueue<u32, u32> = MinPriorityQueue::default();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_add() {
        let mut queue = MinPriorityQueue::new();
        queue.add(1, 'a');
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.minimum_priority(), Ok(&1));
        assert!(queue.root().as_ref().unwrap().is_leaf());
    }

    #[test]
    fn test_scenario() {
        let mut queue = MinPriorityQueue::new();
        queue.add(5, "a");
        queue.add(3, "b");
        queue.add(8, "c");
        assert_eq!(queue.minimum_priority(), Ok(&3));

        assert_eq!(queue.remove_minimum(), Ok("b"));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.remove_minimum(), Ok("a"));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.remove_minimum(), Ok("c"));
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.remove_minimum(), Err(Error::EmptyQueue));
    }

    #[test]
    fn test_empty_errors() {
        let mut queue: MinPriorityQueue<u32, u32> = MinPriorityQueue::new();
        assert_eq!(queue.minimum_priority(), Err(Error::EmptyQueue));
        assert_eq!(queue.remove_minimum(), Err(Error::EmptyQueue));
        assert_eq!(queue.len(), 0);
        assert!(queue.root().is_none());
    }

    #[test]
    fn test_equal_priorities_keep_insertion_order_at_root() {
        let mut queue = MinPriorityQueue::new();
        queue.add(1, 'a');
        queue.add(1, 'b');
        assert_eq!(queue.peek(), Some((&1, &'a')));
    }

    #[test]
    fn test_clone_is_snapshot() {
        let mut queue = MinPriorityQueue::new();
        for i in 0..10 {
            queue.add(i, i * 10);
        }
        let snapshot = queue.clone();
        assert_eq!(queue.remove_minimum(), Ok(0));
        queue.add(100, 1000);
        queue.clear();

        let mut snapshot = snapshot;
        assert_eq!(snapshot.len(), 10);
        for i in 0..10 {
            assert_eq!(snapshot.remove_minimum(), Ok(i * 10));
        }
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_values_without_clone() {
        #[derive(Debug, PartialEq)]
        struct Payload(u32);

        let mut queue = MinPriorityQueue::new();
        queue.add(2, Rc::new(Payload(2)));
        queue.add(1, Rc::new(Payload(1)));
        let mut snapshot = queue.clone();

        assert_eq!(queue.remove_minimum().map(|value| value.0), Ok(1));
        assert_eq!(snapshot.remove_minimum().map(|value| value.0), Ok(1));
        let value = queue.remove_minimum().unwrap();
        assert_eq!(*value, Payload(2));
        assert_eq!(Rc::strong_count(&value), 2);
    }

    #[test]
    fn test_meld() {
        let mut a: MinPriorityQueue<u32, u32> = (0..5).map(|i| (i * 2, i)).collect();
        let b: MinPriorityQueue<u32, u32> = (0..5).map(|i| (i * 2 + 1, i)).collect();
        a.meld(b);
        assert_eq!(a.len(), 10);
        for i in 0..10 {
            assert_eq!(a.minimum_priority(), Ok(&i));
            assert_eq!(a.remove_minimum(), Ok(i / 2));
        }
    }

    #[test]
    fn test_meld_empty() {
        let mut a = MinPriorityQueue::new();
        a.meld(MinPriorityQueue::new());
        assert!(a.is_empty());
        a.add(1, 'a');
        a.meld(MinPriorityQueue::new());
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn test_extend() {
        let mut queue = MinPriorityQueue::new();
        queue.extend(vec![(3, 'c'), (1, 'a'), (2, 'b')]);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.remove_minimum(), Ok('a'));
    }

    #[test]
    fn test_from_root() {
        let mut queue = MinPriorityQueue::new();
        queue.add(2, 'b');
        queue.add(1, 'a');
        let mut queue = MinPriorityQueue::from(queue.into_root());
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.remove_minimum(), Ok('a'));
        assert_eq!(queue.remove_minimum(), Ok('b'));
    }

    #[test]
    fn test_debug() {
        let mut queue = MinPriorityQueue::new();
        queue.add(1, 'a');
        assert_eq!(
            format!("{:?}", queue),
            "MinPriorityQueue { len: 1, min: Some((1, 'a')) }",
        );
    }
}
