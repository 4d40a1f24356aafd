use std::fmt::{self, Debug};

use log::{debug, trace};

use crate::error::{HeapError, InvalidArgument, Result};

pub const DEFAULT_BRANCHING_FACTOR: usize = 2;

/// Initial number of slots, counting the unused slot 0.
pub const DEFAULT_CAPACITY: usize = 10;

/// A min-heap in which every node has up to `d` children.
///
/// Slots are numbered from 1 with the root at slot 1. The children of slot
/// `i` are the `d` consecutive slots starting at `d * (i - 1) + 2`, and its
/// parent is `(i + d - 2) / d`. Slot `i` is stored at `data[i - 1]`, so the
/// tree never exists as nodes, only as arithmetic over one buffer.
pub struct DHeap<T: Ord> {
    data: Vec<T>,
    /// Logical slot count, including slot 0. Grows to `2 * capacity + 1`.
    capacity: usize,
    d: usize,
}

impl<T> DHeap<T>
where
    T: Ord,
{
    pub fn new(branching_factor: usize) -> Result<Self> {
        Self::with_capacity(branching_factor, DEFAULT_CAPACITY)
    }

    /// Like [`DHeap::new`], but starts with room for `capacity` slots
    /// (slot 0 included). A capacity of 0 is treated as 1.
    pub fn with_capacity(branching_factor: usize, capacity: usize) -> Result<Self> {
        validate_branching_factor(branching_factor)?;
        Ok(Self::from_parts(branching_factor, capacity.max(1)))
    }

    /// Builds a heap out of `items` in linear time.
    pub fn from_vec(branching_factor: usize, items: Vec<T>) -> Result<Self> {
        validate_branching_factor(branching_factor)?;
        Ok(Self::build(branching_factor, items))
    }

    fn from_parts(d: usize, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity - 1),
            capacity,
            d,
        }
    }

    fn build(d: usize, mut items: Vec<T>) -> Self {
        let capacity = DEFAULT_CAPACITY.max(items.len() + 1);
        items.reserve_exact(capacity - 1 - items.len());
        let mut heap = Self {
            data: items,
            capacity,
            d,
        };
        let size = heap.data.len();
        if size > 1 {
            for hole in (1..=heap.parent(size)).rev() {
                heap.percolate_down(hole);
            }
        }
        debug!("built {}-ary heap of {} elements", d, size);
        heap
    }

    pub fn branching_factor(&self) -> usize {
        self.d
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drops every element. The storage keeps its capacity.
    pub fn make_empty(&mut self) {
        trace!("emptying heap of {} elements", self.data.len());
        self.data.clear();
    }

    pub fn insert(&mut self, x: T) {
        if self.data.len() + 1 >= self.capacity {
            self.grow();
        }
        self.data.push(x);
        self.percolate_up(self.data.len());
    }

    pub fn find_min(&self) -> Result<&T> {
        self.data.first().ok_or(HeapError::Underflow)
    }

    pub fn delete_min(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(HeapError::Underflow);
        }
        // The last element takes the root's place.
        let min = self.data.swap_remove(0);
        self.percolate_down(1);
        Ok(min)
    }

    /// Returns the element in slot `index`. Only the live slots
    /// `1..=size()` hold elements.
    pub fn get(&self, index: usize) -> Result<&T> {
        index
            .checked_sub(1)
            .and_then(|i| self.data.get(i))
            .ok_or(HeapError::IndexOutOfRange {
                index,
                len: self.data.len(),
            })
    }

    pub fn parent_index(&self, index: usize) -> Result<usize> {
        if index <= 1 {
            return Err(InvalidArgument::NoParent(index).into());
        }
        Ok(self.parent(index))
    }

    pub fn first_child_index(&self, index: usize) -> Result<usize> {
        if index < 1 {
            return Err(InvalidArgument::NoChildren(index).into());
        }
        self.first_child(index)
            .ok_or(InvalidArgument::ChildIndexOverflow(index).into())
    }

    /// Consumes the heap, yielding its elements smallest first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(min) = self.delete_min() {
            sorted.push(min);
        }
        sorted
    }

    // Same value as (i + d - 2) / d without overflowing near usize::MAX.
    fn parent(&self, i: usize) -> usize {
        (i - 2) / self.d + 1
    }

    fn first_child(&self, i: usize) -> Option<usize> {
        self.d.checked_mul(i - 1)?.checked_add(2)
    }

    fn grow(&mut self) {
        let new_capacity = 2 * self.capacity + 1;
        debug!(
            "growing heap storage from {} to {} slots",
            self.capacity, new_capacity
        );
        self.data.reserve_exact(new_capacity - 1 - self.data.len());
        self.capacity = new_capacity;
    }

    fn percolate_up(&mut self, mut hole: usize) {
        while hole > 1 {
            let parent = self.parent(hole);
            if self.data[hole - 1] >= self.data[parent - 1] {
                return;
            }
            self.data.swap(hole - 1, parent - 1);
            hole = parent;
        }
    }

    fn percolate_down(&mut self, mut hole: usize) {
        let size = self.data.len();
        while let Some(first) = self.first_child(hole).filter(|&c| c <= size) {
            let last = first.saturating_add(self.d - 1).min(size);
            let mut smallest = first;
            for child in first + 1..=last {
                if self.data[child - 1] < self.data[smallest - 1] {
                    smallest = child;
                }
            }
            if self.data[smallest - 1] >= self.data[hole - 1] {
                return;
            }
            self.data.swap(hole - 1, smallest - 1);
            hole = smallest;
        }
    }
}

fn validate_branching_factor(d: usize) -> Result<()> {
    if d < 2 {
        return Err(InvalidArgument::BranchingFactor(d).into());
    }
    Ok(())
}

impl<T: Ord> Default for DHeap<T> {
    fn default() -> Self {
        Self::from_parts(DEFAULT_BRANCHING_FACTOR, DEFAULT_CAPACITY)
    }
}

impl<T: Ord> Extend<T> for DHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl<T: Ord> FromIterator<T> for DHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(DEFAULT_BRANCHING_FACTOR, iter.into_iter().collect())
    }
}

impl<T: Ord + Debug> Debug for DHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "d={}: ", self.d)?;
        for item in self.data.iter() {
            write!(f, "{:?} ", item)?;
        }
        Ok(())
    }
}
