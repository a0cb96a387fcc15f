use crate::model::NodeId;

use std::{
    collections::BinaryHeap,
    cmp::Ordering
};


/// Entry on the open list
#[derive(Debug)]
struct OpenNode {
    node: NodeId,
    f_cost: f64, // g + h at push time
    seq: usize, // push order, breaks ties on f_cost
}

// BinaryHeap is a max heap, flip the comparisons so the smallest f_cost
// (then the oldest push) ends up on top
impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_cost
            .total_cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for OpenNode {}


/// Discovered nodes waiting to be expanded, ordered by f = g + h
#[derive(Debug, Default)]
pub(crate) struct OpenList {
    heap: BinaryHeap<OpenNode>,
    next_seq: usize,
}

impl OpenList {

    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, node: NodeId, f_cost: f64) {
        self.heap.push(OpenNode { node, f_cost, seq: self.next_seq });
        self.next_seq += 1;
    }

    /// Remove the node with the lowest f_cost
    /// Equal f_cost comes out in push order
    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|open| open.node)
    }

    /// Remove the node with the lowest f according to `current_f`, ignoring the f_cost
    /// stored at push time. Needed once annotations can change while a node is queued.
    /// Equal f comes out in push order. Linear in the size of the list.
    pub(crate) fn pop_lowest_by<F>(&mut self, current_f: F) -> Option<NodeId>
    where
        F: Fn(NodeId) -> f64,
    {
        let mut entries = std::mem::take(&mut self.heap).into_vec();

        let lowest = entries
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                current_f(a.node)
                    .total_cmp(&current_f(b.node))
                    .then_with(|| a.seq.cmp(&b.seq))
            })
            .map(|(i, _)| i);

        let node = lowest.map(|i| entries.swap_remove(i).node);
        self.heap = BinaryHeap::from(entries);
        node
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}
