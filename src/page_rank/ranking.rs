use keyed_priority_queue::KeyedPriorityQueue;
use std::iter::Iterator;

/// Pages popped in descending weight order.
pub struct Ranking {
    queue: KeyedPriorityQueue<usize, OrdWeight>,
}

impl Ranking {
    pub fn new(weights: &[f64]) -> Self {
        let mut queue = KeyedPriorityQueue::new();
        for (page, w) in weights.iter().enumerate() {
            queue.push(page, OrdWeight(*w));
        }
        Self { queue }
    }
}

impl Iterator for Ranking {
    type Item = (usize, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop().map(|(page, w)| (page, w.0))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl ExactSizeIterator for Ranking {}

struct OrdWeight(f64);
impl PartialOrd for OrdWeight {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for OrdWeight {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}
impl PartialEq for OrdWeight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}
impl Eq for OrdWeight {}
