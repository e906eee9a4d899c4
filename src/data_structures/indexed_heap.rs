use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Failures reported by [`IndexedMinHeap`] operations
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    #[error("Key is already present in the heap")]
    DuplicateKey,

    #[error("Heap is empty")]
    Empty,

    #[error("Key is not present in the heap")]
    KeyNotFound,
}

/// A single slot of the heap array
#[derive(Debug, Clone)]
struct Entry<K, P> {
    key: K,
    priority: P,
    /// Insertion sequence number, used to break priority ties
    seq: u64,
}

impl<K, P: Ord> Entry<K, P> {
    fn precedes(&self, other: &Self) -> bool {
        (&self.priority, self.seq) < (&other.priority, other.seq)
    }
}

/// Binary min-heap addressable by key
///
/// Every key is stored at most once. A side table maps each key to its slot in
/// the heap array, which gives O(1) membership tests and lets
/// [`decrease_key`](Self::decrease_key) restore heap order in O(log n) without
/// removing and reinserting the entry.
///
/// Entries with equal priority leave the heap in insertion order, so a fixed
/// sequence of operations always yields the same extraction order.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<K, P>
where
    K: Eq + Hash + Clone + Debug,
    P: Ord + Copy + Debug,
{
    /// Heap-ordered entries, 0-indexed
    entries: Vec<Entry<K, P>>,

    /// Key -> index into `entries`
    positions: HashMap<K, usize>,

    /// Next insertion sequence number
    next_seq: u64,
}

impl<K, P> Default for IndexedMinHeap<K, P>
where
    K: Eq + Hash + Clone + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> IndexedMinHeap<K, P>
where
    K: Eq + Hash + Clone + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        IndexedMinHeap {
            entries: Vec::new(),
            positions: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Creates a new empty heap with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Returns the number of keys in the heap
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the heap holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `key` is currently in the heap
    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Returns the current priority of `key`, if present
    pub fn priority(&self, key: &K) -> Option<P> {
        self.positions
            .get(key)
            .map(|&index| self.entries[index].priority)
    }

    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Option<(&K, P)> {
        self.entries
            .first()
            .map(|entry| (&entry.key, entry.priority))
    }

    /// Adds `key` with the given priority.
    ///
    /// Fails with [`HeapError::DuplicateKey`] if the key is already present.
    pub fn insert(&mut self, key: K, priority: P) -> Result<(), HeapError> {
        if self.positions.contains_key(&key) {
            return Err(HeapError::DuplicateKey);
        }

        let index = self.entries.len();
        self.positions.insert(key.clone(), index);
        self.entries.push(Entry {
            key,
            priority,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.sift_up(index);

        Ok(())
    }

    /// Removes and returns the minimum entry, or `None` if the heap is empty
    pub fn pop(&mut self) -> Option<(K, P)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);
        let entry = self.entries.pop()?;
        self.positions.remove(&entry.key);

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Some((entry.key, entry.priority))
    }

    /// Removes and returns the minimum entry.
    ///
    /// Fails with [`HeapError::Empty`] if there is nothing to extract.
    pub fn extract_min(&mut self) -> Result<(K, P), HeapError> {
        self.pop().ok_or(HeapError::Empty)
    }

    /// Lowers the priority of `key` to `priority`.
    ///
    /// Returns `Ok(true)` when the priority changed and `Ok(false)` when
    /// `priority` is not strictly lower than the current one (no-op). Fails
    /// with [`HeapError::KeyNotFound`] if the key is not in the heap.
    pub fn decrease_key(&mut self, key: &K, priority: P) -> Result<bool, HeapError> {
        let index = *self.positions.get(key).ok_or(HeapError::KeyNotFound)?;

        if priority >= self.entries[index].priority {
            return Ok(false);
        }

        self.entries[index].priority = priority;
        self.sift_up(index);

        Ok(true)
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.entries[index].precedes(&self.entries[parent]) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.entries[left].precedes(&self.entries[smallest]) {
                smallest = left;
            }
            if right < len && self.entries[right].precedes(&self.entries[smallest]) {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.swap(index, smallest);
            index = smallest;
        }
    }

    /// Swaps two slots and keeps the position table in sync
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        if let Some(pos) = self.positions.get_mut(&self.entries[a].key) {
            *pos = a;
        }
        if let Some(pos) = self.positions.get_mut(&self.entries[b].key) {
            *pos = b;
        }
    }
}
