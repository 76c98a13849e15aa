//! Frontier containers: FIFO, LIFO, and a cost-ordered min-heap.
//!
//! None of the containers suppress duplicates on their own. Engines decide
//! what to push; stale entries are discarded by the engine on pop.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, VecDeque};
use std::mem::size_of;

use labyrinth_kernel::grid::Cell;

use crate::node::FrontierKey;

fn track_high_water(high_water: &mut u64, len: usize) {
    let size = len as u64;
    if size > *high_water {
        *high_water = size;
    }
}

/// First-in, first-out frontier (breadth-first).
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<Cell>,
    pushes: u64,
    high_water: u64,
}

impl FifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cell: Cell) {
        self.queue.push_back(cell);
        self.pushes += 1;
        track_high_water(&mut self.high_water, self.queue.len());
    }

    #[must_use]
    pub fn pop(&mut self) -> Option<Cell> {
        self.queue.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[must_use]
    pub fn pushes(&self) -> u64 {
        self.pushes
    }

    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    #[must_use]
    pub fn approx_bytes(&self) -> u64 {
        (self.queue.len() * size_of::<Cell>()) as u64
    }
}

/// Last-in, first-out frontier (depth-first).
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<Cell>,
    pushes: u64,
    high_water: u64,
}

impl LifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cell: Cell) {
        self.stack.push(cell);
        self.pushes += 1;
        track_high_water(&mut self.high_water, self.stack.len());
    }

    #[must_use]
    pub fn pop(&mut self) -> Option<Cell> {
        self.stack.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    #[must_use]
    pub fn pushes(&self) -> u64 {
        self.pushes
    }

    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    #[must_use]
    pub fn approx_bytes(&self) -> u64 {
        (self.stack.len() * size_of::<Cell>()) as u64
    }
}

/// An entry popped from a [`CostFrontier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostEntry {
    pub cell: Cell,
    /// Cumulative cost from the start.
    pub cost: u64,
    /// Ordering priority (`cost` for UCS, `cost + heuristic` for A*).
    pub priority: u64,
}

#[derive(Debug)]
struct HeapEntry {
    key: Reverse<FrontierKey>,
    cell: Cell,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-heap frontier ordered by [`FrontierKey`].
///
/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse`. Creation
/// order is assigned on push, which makes ties resolve to the older entry.
///
/// Also tracks the costs of pending entries per cell so engines can ask
/// whether a cheaper (or equal) copy of a cell is already queued.
#[derive(Debug, Default)]
pub struct CostFrontier {
    heap: BinaryHeap<HeapEntry>,
    pending: BTreeMap<Cell, BTreeMap<u64, u32>>,
    next_order: u64,
    high_water: u64,
}

impl CostFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cell: Cell, priority: u64, cost: u64) {
        let key = FrontierKey {
            priority,
            cost,
            creation_order: self.next_order,
        };
        self.next_order += 1;
        self.heap.push(HeapEntry {
            key: Reverse(key),
            cell,
        });
        *self
            .pending
            .entry(cell)
            .or_default()
            .entry(cost)
            .or_insert(0) += 1;
        track_high_water(&mut self.high_water, self.heap.len());
    }

    /// Pop the entry with the smallest key.
    #[must_use]
    pub fn pop(&mut self) -> Option<CostEntry> {
        let HeapEntry { key, cell } = self.heap.pop()?;
        let key = key.0;
        self.forget_pending(cell, key.cost);
        Some(CostEntry {
            cell,
            cost: key.cost,
            priority: key.priority,
        })
    }

    fn forget_pending(&mut self, cell: Cell, cost: u64) {
        let Some(costs) = self.pending.get_mut(&cell) else {
            return;
        };
        if let Some(count) = costs.get_mut(&cost) {
            *count -= 1;
            if *count == 0 {
                costs.remove(&cost);
            }
        }
        if costs.is_empty() {
            self.pending.remove(&cell);
        }
    }

    /// Lowest cumulative cost among queued entries for `cell`.
    #[must_use]
    pub fn pending_cost(&self, cell: Cell) -> Option<u64> {
        self.pending
            .get(&cell)
            .and_then(|costs| costs.keys().next().copied())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total pushes so far (equal to the next creation order).
    #[must_use]
    pub fn pushes(&self) -> u64 {
        self.next_order
    }

    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    #[must_use]
    pub fn approx_bytes(&self) -> u64 {
        let heap = self.heap.len() * size_of::<HeapEntry>();
        let pending = self.pending.len() * (size_of::<Cell>() + size_of::<(u64, u32)>());
        (heap + pending) as u64
    }
}
