//! Ordered flight sequence
//!
//! A counted, doubly linked, position-addressable sequence of flight
//! records. Nodes live in an owning arena (a growable vector of slots
//! addressed by stable indices, with a free list for reclaimed slots), so
//! the prev/next links are indices rather than pointers and extraction can
//! never leave a dangling reference.
//!
//! Index semantics:
//! - Positions are 0-based; position 0 is the head.
//! - Insertion clamps out-of-range positions to the nearest boundary and
//!   always succeeds.
//! - Extraction rejects out-of-range positions with `None` and leaves the
//!   chain untouched.
//!
//! The container holds no lock and performs no logging; callers sharing it
//! across threads must wrap it in their own mutual exclusion.

use crate::flight::FlightRecord;

/// Sentinel index marking the absence of a node.
const NIL: usize = usize::MAX;

#[derive(Debug, Clone)]
struct Node {
    record: Option<FlightRecord>,
    prev: usize,
    next: usize,
}

/// The ordered flight sequence.
///
/// Invariants:
/// - The chain reachable from `head` is a single doubly linked run with no
///   cycles; `head`'s prev link and the terminal node's next link are `NIL`.
/// - `len` always equals the number of nodes reachable from `head`.
#[derive(Debug, Clone)]
pub struct FlightSequence {
    nodes: Vec<Node>,
    head: usize,
    free: usize,
    len: usize,
}

impl Default for FlightSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightSequence {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: NIL,
            free: NIL,
            len: 0,
        }
    }

    /// Number of flights currently in the sequence. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a flight at the front of the sequence. Always succeeds.
    pub fn push_front(&mut self, record: FlightRecord) {
        let new = self.alloc(record);
        if self.head != NIL {
            self.nodes[self.head].prev = new;
            self.nodes[new].next = self.head;
        }
        self.head = new;
        self.len += 1;
    }

    /// Append a flight after the current terminal node. Always succeeds.
    ///
    /// The sequence keeps no tail link, so this walks the chain — O(n).
    pub fn push_back(&mut self, record: FlightRecord) {
        let new = self.alloc(record);
        if self.head == NIL {
            self.head = new;
        } else {
            let tail = self.terminal();
            self.nodes[tail].next = new;
            self.nodes[new].prev = tail;
        }
        self.len += 1;
    }

    /// Insert a flight at `position`, clamping out-of-range positions.
    ///
    /// `position <= 0` behaves as [`push_front`](Self::push_front);
    /// `position >= len` behaves as [`push_back`](Self::push_back);
    /// otherwise the new node is spliced in immediately before the node
    /// currently at `position`. Never fails.
    pub fn insert_at(&mut self, record: FlightRecord, position: i64) {
        if position <= 0 {
            self.push_front(record);
        } else if position as usize >= self.len {
            self.push_back(record);
        } else {
            let current = self.node_at(position as usize);
            let prev = self.nodes[current].prev;
            let new = self.alloc(record);
            self.nodes[prev].next = new;
            self.nodes[new].prev = prev;
            self.nodes[new].next = current;
            self.nodes[current].prev = new;
            self.len += 1;
        }
    }

    /// Remove and return the flight at `position`.
    ///
    /// Returns `None` for any position outside `[0, len)`; in that case the
    /// chain and the count are left untouched.
    pub fn extract_at(&mut self, position: i64) -> Option<FlightRecord> {
        if position < 0 || position as usize >= self.len {
            return None;
        }
        let current = self.node_at(position as usize);
        let (prev, next) = (self.nodes[current].prev, self.nodes[current].next);

        if prev != NIL {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.nodes[next].prev = prev;
        }

        self.len -= 1;
        self.release(current)
    }

    /// The flight at the head, without removing it.
    pub fn first(&self) -> Option<&FlightRecord> {
        if self.head == NIL {
            return None;
        }
        self.nodes[self.head].record.as_ref()
    }

    /// The flight at the terminal node, without removing it. O(n).
    pub fn last(&self) -> Option<&FlightRecord> {
        if self.head == NIL {
            return None;
        }
        self.nodes[self.terminal()].record.as_ref()
    }

    /// Materialize the sequence head-to-tail into a freshly allocated list.
    pub fn to_vec(&self) -> Vec<FlightRecord> {
        let mut out = Vec::with_capacity(self.len);
        let mut current = self.head;
        while current != NIL {
            if let Some(record) = &self.nodes[current].record {
                out.push(record.clone());
            }
            current = self.nodes[current].next;
        }
        out
    }

    /// Move the flight at `from` to `to`.
    ///
    /// Composed strictly as extraction followed by insertion: the flight is
    /// first extracted, so `to` is interpreted against the sequence length
    /// *after* removal (removing an earlier element shifts every later
    /// index down by one before the destination applies). If extraction
    /// fails the move reports `false` and nothing is inserted.
    pub fn reorder(&mut self, from: i64, to: i64) -> bool {
        match self.extract_at(from) {
            Some(record) => {
                self.insert_at(record, to);
                true
            }
            None => false,
        }
    }

    /// Arena slot for a new node, reusing a freed slot when one exists.
    fn alloc(&mut self, record: FlightRecord) -> usize {
        let node = Node {
            record: Some(record),
            prev: NIL,
            next: NIL,
        };
        if self.free != NIL {
            let slot = self.free;
            self.free = self.nodes[slot].next;
            self.nodes[slot] = node;
            slot
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }

    /// Return a slot to the free list and take its record out.
    fn release(&mut self, slot: usize) -> Option<FlightRecord> {
        let record = self.nodes[slot].record.take();
        self.nodes[slot].prev = NIL;
        self.nodes[slot].next = self.free;
        self.free = slot;
        record
    }

    /// Slot index of the node at `position`. Caller guarantees
    /// `position < len`.
    fn node_at(&self, position: usize) -> usize {
        let mut current = self.head;
        for _ in 0..position {
            current = self.nodes[current].next;
        }
        current
    }

    /// Slot index of the terminal node. Caller guarantees non-empty.
    fn terminal(&self) -> usize {
        let mut current = self.head;
        while self.nodes[current].next != NIL {
            current = self.nodes[current].next;
        }
        current
    }
}
