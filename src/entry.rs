use std::cmp::Ordering;

/// A priority and its associated value.
///
/// Comparisons look at the priority alone: two entries with equal priorities are equal even if
/// their values differ, and `V` needs no comparison traits.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Entry<P, V> {
    pub priority: P,
    pub value: V,
}

impl<P, V> Ord for Entry<P, V>
where
    P: Ord,
{
    fn cmp(&self, other: &Entry<P, V>) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

impl<P, V> PartialOrd for Entry<P, V>
where
    P: Ord,
{
    fn partial_cmp(&self, other: &Entry<P, V>) -> Option<Ordering> {
        Some(self.priority.cmp(&other.priority))
    }
}

/// Entries are equal when their priorities are equal. The values are not compared.
impl<P, V> PartialEq for Entry<P, V>
where
    P: Ord,
{
    fn eq(&self, other: &Entry<P, V>) -> bool {
        self.priority == other.priority
    }
}

impl<P, V> Eq for Entry<P, V> where P: Ord {}
