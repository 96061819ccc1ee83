// Doubly linked chain of key/value entries, used as a hash bucket's collision list

pub mod error;

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

pub use error::{ChainError, ChainResult};

/// Handle of an entry slot inside a chain's arena
type EntryId = usize;

/// Chain entry structure
///
/// Links are handles into the owning chain's arena, so an entry never shares
/// ownership with its neighbours.
#[derive(Debug, Clone)]
pub struct Entry<V> {
    key: String,
    value: V,
    previous: Option<EntryId>,
    next: Option<EntryId>,
}

impl<V> Entry<V> {
    fn new(key: String, value: V) -> Self {
        Entry {
            key,
            value,
            previous: None,
            next: None,
        }
    }

    /// Key of this entry
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored value
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Mutable access to the stored value
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Overwrite the value in place and return the old one
    pub fn replace_value(&mut self, value: V) -> V {
        mem::replace(&mut self.value, value)
    }

    fn into_pair(self) -> (String, V) {
        (self.key, self.value)
    }
}

/// Doubly linked list of entries
///
/// Entries live in an arena of slots; `head`, `tail` and the per-entry links
/// are slot handles. Slots freed by removal are reused by later insertions.
/// The chain does not enforce key uniqueness.
#[derive(Debug, Clone)]
pub struct Chain<V> {
    /// Entry arena, `None` marks a vacant slot
    entries: Vec<Option<Entry<V>>>,
    /// Vacant slots available for reuse
    vacant: Vec<EntryId>,
    /// Handle of the first entry
    head: Option<EntryId>,
    /// Handle of the last entry
    tail: Option<EntryId>,
    /// Number of linked entries
    size: usize,
}

impl<V> Default for Chain<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Chain<V> {
    /// Create a new empty chain
    pub fn new() -> Self {
        Chain {
            entries: Vec::new(),
            vacant: Vec::new(),
            head: None,
            tail: None,
            size: 0,
        }
    }

    /// Number of entries in the chain
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the chain is empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// First entry, if any
    pub fn head(&self) -> Option<&Entry<V>> {
        self.head.map(|id| self.entry(id))
    }

    /// Last entry, if any
    pub fn tail(&self) -> Option<&Entry<V>> {
        self.tail.map(|id| self.entry(id))
    }

    fn entry(&self, id: EntryId) -> &Entry<V> {
        match &self.entries[id] {
            Some(entry) => entry,
            None => unreachable!("chain handle {} points at a vacant slot", id),
        }
    }

    fn entry_mut(&mut self, id: EntryId) -> &mut Entry<V> {
        match &mut self.entries[id] {
            Some(entry) => entry,
            None => unreachable!("chain handle {} points at a vacant slot", id),
        }
    }

    fn allocate(&mut self, entry: Entry<V>) -> EntryId {
        match self.vacant.pop() {
            Some(id) => {
                self.entries[id] = Some(entry);
                id
            }
            None => {
                self.entries.push(Some(entry));
                self.entries.len() - 1
            }
        }
    }

    fn release(&mut self, id: EntryId) -> Entry<V> {
        match self.entries[id].take() {
            Some(entry) => {
                self.vacant.push(id);
                entry
            }
            None => unreachable!("chain handle {} released twice", id),
        }
    }

    /// Add an entry at the tail
    pub fn append(&mut self, key: impl Into<String>, value: V) {
        let id = self.allocate(Entry::new(key.into(), value));

        match self.tail {
            Some(tail) => {
                self.entry_mut(tail).next = Some(id);
                self.entry_mut(id).previous = Some(tail);
            }
            None => self.head = Some(id),
        }

        self.tail = Some(id);
        self.size += 1;
    }

    /// Add an entry at the head
    pub fn prepend(&mut self, key: impl Into<String>, value: V) {
        let id = self.allocate(Entry::new(key.into(), value));

        match self.head {
            Some(head) => {
                self.entry_mut(head).previous = Some(id);
                self.entry_mut(id).next = Some(head);
            }
            None => self.tail = Some(id),
        }

        self.head = Some(id);
        self.size += 1;
    }

    /// Handle of the entry at `index`, walking from the nearer end
    fn locate(&self, index: usize) -> Option<EntryId> {
        if index >= self.size {
            return None;
        }

        if index <= self.size / 2 {
            let mut current = self.head?;
            for _ in 0..index {
                current = self.entry(current).next?;
            }
            Some(current)
        } else {
            let mut current = self.tail?;
            for _ in 0..(self.size - 1 - index) {
                current = self.entry(current).previous?;
            }
            Some(current)
        }
    }

    /// Entry at a zero-based position, `None` when out of range
    pub fn at(&self, index: usize) -> Option<&Entry<V>> {
        self.locate(index).map(|id| self.entry(id))
    }

    /// Mutable entry at a zero-based position
    pub fn at_mut(&mut self, index: usize) -> Option<&mut Entry<V>> {
        let id = self.locate(index)?;
        Some(self.entry_mut(id))
    }

    /// Insert an entry so that it becomes the element at `index`.
    ///
    /// `index == 0` prepends and `index == len()` appends; anything larger
    /// is rejected.
    pub fn insert_at(&mut self, key: impl Into<String>, value: V, index: usize) -> ChainResult<()> {
        if index > self.size {
            return Err(ChainError::IndexOutOfBounds {
                index,
                size: self.size,
            });
        }

        if index == 0 {
            self.prepend(key, value);
            return Ok(());
        }
        if index == self.size {
            self.append(key, value);
            return Ok(());
        }

        let successor = self.locate(index).ok_or(ChainError::IndexOutOfBounds {
            index,
            size: self.size,
        })?;
        let predecessor = self.entry(successor).previous;

        let id = self.allocate(Entry::new(key.into(), value));
        {
            let entry = self.entry_mut(id);
            entry.previous = predecessor;
            entry.next = Some(successor);
        }
        self.entry_mut(successor).previous = Some(id);
        if let Some(predecessor) = predecessor {
            self.entry_mut(predecessor).next = Some(id);
        }

        self.size += 1;
        Ok(())
    }

    /// Detach the entry at `index` and return its key and value
    pub fn remove_at(&mut self, index: usize) -> ChainResult<(String, V)> {
        let id = self.locate(index).ok_or(ChainError::IndexOutOfBounds {
            index,
            size: self.size,
        })?;
        Ok(self.unlink(id))
    }

    /// Remove the tail entry
    pub fn pop(&mut self) -> Option<(String, V)> {
        let id = self.tail?;
        Some(self.unlink(id))
    }

    fn pop_front(&mut self) -> Option<(String, V)> {
        let id = self.head?;
        Some(self.unlink(id))
    }

    fn unlink(&mut self, id: EntryId) -> (String, V) {
        let entry = self.release(id);

        match entry.previous {
            Some(previous) => self.entry_mut(previous).next = entry.next,
            None => self.head = entry.next,
        }
        match entry.next {
            Some(next) => self.entry_mut(next).previous = entry.previous,
            None => self.tail = entry.previous,
        }

        self.size -= 1;
        if self.size == 0 {
            // Nothing is linked any more, drop the vacant slots as well
            self.entries.clear();
            self.vacant.clear();
        }

        entry.into_pair()
    }

    /// Check if any entry has the given key
    pub fn contains(&self, key: &str) -> bool {
        self.iter().any(|entry| entry.key == key)
    }

    /// Position of the first entry with the given key
    pub fn find(&self, key: &str) -> Option<usize> {
        self.iter().position(|entry| entry.key == key)
    }

    /// First entry with the given key
    pub fn lookup(&self, key: &str) -> Option<&Entry<V>> {
        self.iter().find(|entry| entry.key == key)
    }

    /// First entry with the given key, mutably
    pub fn lookup_mut(&mut self, key: &str) -> Option<&mut Entry<V>> {
        let mut current = self.head;
        while let Some(id) = current {
            if self.entry(id).key == key {
                return Some(self.entry_mut(id));
            }
            current = self.entry(id).next;
        }
        None
    }

    /// Iterate entries from head to tail
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            chain: self,
            front: self.head,
            back: self.tail,
            remaining: self.size,
        }
    }
}

impl<V: fmt::Display> fmt::Display for Chain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.iter() {
            write!(f, "key:({}, value: {}) -> ", entry.key, entry.value)?;
        }
        write!(f, "null")
    }
}

/// Borrowing iterator over a chain's entries
pub struct Iter<'a, V> {
    chain: &'a Chain<V>,
    front: Option<EntryId>,
    back: Option<EntryId>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.chain.entry(self.front?);
        self.front = entry.next;
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.chain.entry(self.back?);
        self.back = entry.previous;
        self.remaining -= 1;
        Some(entry)
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a Chain<V> {
    type Item = &'a Entry<V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that drains a chain in order
pub struct IntoIter<V> {
    chain: Chain<V>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.chain.size, Some(self.chain.size))
    }
}

impl<V> DoubleEndedIterator for IntoIter<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chain.pop()
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> IntoIterator for Chain<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { chain: self }
    }
}
