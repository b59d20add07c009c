//! Minimum-priority structures used by the tree builder.
//!
//! The builder only ever needs two things: take out the smallest item and put
//! an item back where it belongs. [`PriorityQueue`] captures that, and the three
//! backends below differ only in how they store the items:
//!
//! - [`SortedArray`] keeps a ring buffer sorted ascending and finds insertion
//!   points with a binary search, so placing an item costs O(log n) comparisons.
//! - [`SortedList`] keeps a singly linked list sorted ascending. Links give no
//!   random access, so insertion walks the list with the same comparison and
//!   costs O(n). This asymmetry with [`SortedArray`] is accepted.
//! - [`MinHeap`] wraps [`BinaryHeap`] and does not keep a total order at all,
//!   only the minimum.
//!
//! All three agree on which item is the smallest, so a build produces the same
//! tree regardless of the backend.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::error::{Error, Result};

/// Insert-in-order and remove-minimum over a totally ordered item type.
pub trait PriorityQueue<T: Ord> {
    /// Add `item`, keeping the order.
    fn insert(&mut self, item: T);

    /// Remove and return the smallest item.
    ///
    /// # Errors
    /// Returns `Error::EmptyStructure` if the queue holds nothing.
    fn remove_smallest(&mut self) -> Result<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Array-backed sorted sequence; position 0 is the minimum.
#[derive(Debug)]
pub struct SortedArray<T> {
    items: VecDeque<T>,
}

impl<T> SortedArray<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Items in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Default for SortedArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> PriorityQueue<T> for SortedArray<T> {
    fn insert(&mut self, item: T) {
        // first position whose item is not smaller than the new one
        let index = self.items.partition_point(|current| *current < item);
        self.items.insert(index, item);
    }

    fn remove_smallest(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(Error::EmptyStructure)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[derive(Debug)]
struct Link<T> {
    item: T,
    next: Option<Box<Link<T>>>,
}

/// Link-based sorted sequence; the head is the minimum.
#[derive(Debug)]
pub struct SortedList<T> {
    head: Option<Box<Link<T>>>,
    len: usize,
}

impl<T> SortedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Items in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::successors(self.head.as_deref(), |link| link.next.as_deref())
            .map(|link| &link.item)
    }
}

impl<T> Default for SortedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> PriorityQueue<T> for SortedList<T> {
    fn insert(&mut self, item: T) {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|link| link.item < item) {
            cursor = &mut cursor.as_mut().expect("checked with while loop condition").next;
        }

        let next = cursor.take();
        *cursor = Some(Box::new(Link { item, next }));
        self.len += 1;
    }

    fn remove_smallest(&mut self) -> Result<T> {
        let head = self.head.take().ok_or(Error::EmptyStructure)?;
        let Link { item, next } = *head;
        self.head = next;
        self.len -= 1;

        Ok(item)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Drop for SortedList<T> {
    fn drop(&mut self) {
        // unlink one by one instead of recursing through nested boxes
        let mut cursor = self.head.take();
        while let Some(mut link) = cursor {
            cursor = link.next.take();
        }
    }
}

/// Binary-heap-backed queue; only the minimum is ordered.
#[derive(Debug)]
pub struct MinHeap<T> {
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> PriorityQueue<T> for MinHeap<T> {
    fn insert(&mut self, item: T) {
        self.heap.push(Reverse(item));
    }

    fn remove_smallest(&mut self) -> Result<T> {
        self.heap
            .pop()
            .map(|Reverse(item)| item)
            .ok_or(Error::EmptyStructure)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
