//! Persistent meldable heap where the null path length of every right child is at most that of
//! its sibling.
//!
//! Keeping the short side on the right bounds the right spine of a heap with `n` nodes by
//! `floor(log2(n + 1))`, and merging two heaps only ever walks right spines. Nodes are immutable
//! and reference counted, so a heap can be shared by any number of queues or snapshots.

mod node;
mod queue;
mod tree;

pub use self::node::{rank, Node};
pub use self::queue::MinPriorityQueue;
pub use self::tree::Tree;
pub use crate::entry::Entry;

use std::error;
use std::fmt;
use std::result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The queue holds no elements.
    EmptyQueue,
}

impl error::Error for Error {
    fn description(&self) -> &str {
        match self {
            Error::EmptyQueue => "priority queue is empty",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyQueue => write!(f, "priority queue is empty"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
