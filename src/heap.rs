/// Capacity of a heap created with [`Heap::new`].
pub const DEFAULT_CAPACITY: usize = 5;

/// Which end of the ordering sits at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapOrder {
    /// The greatest element is removed first.
    Max,
    /// The least element is removed first.
    Min,
}

/// Errors that can occur while using a heap
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum HeapError {
    #[error("Heap is empty")]
    EmptyCollection,
}

/// An array-backed binary heap whose ordering is fixed at construction.
///
/// Elements live densely in `items[0..size]`. The backing storage doubles
/// whenever it is full and is never shrunk, not even by [`Heap::clear`].
#[derive(Debug)]
pub struct Heap<T: Ord> {
    items: Vec<T>,
    order: HeapOrder,
}

impl<T: Ord> Heap<T> {
    pub fn new(order: HeapOrder) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, order)
    }

    pub fn with_capacity(capacity: usize, order: HeapOrder) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Number of elements currently stored.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Drop every stored element. The backing capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Insert an element, growing the storage first if it is full.
    pub fn add(&mut self, item: T) {
        if self.items.len() == self.items.capacity() {
            let additional = self.items.capacity().max(1);
            self.items.reserve_exact(additional);
        }
        self.items.push(item);
        self.bubble_up(self.items.len() - 1);
    }

    /// Remove and return the root element.
    pub fn remove(&mut self) -> Result<T, HeapError> {
        if self.items.is_empty() {
            return Err(HeapError::EmptyCollection);
        }
        // swap_remove moves the last element into the root slot
        let root = self.items.swap_remove(0);
        self.trickle_down(0);
        Ok(root)
    }

    /// The root element, without removing it.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.items.first().ok_or(HeapError::EmptyCollection)
    }

    /// True if `a` must sit above `b`.
    fn outranks(&self, a: &T, b: &T) -> bool {
        match self.order {
            HeapOrder::Max => a > b,
            HeapOrder::Min => a < b,
        }
    }

    fn bubble_up(&mut self, mut index: usize) {
        while let Some(above) = parent(index) {
            if !self.outranks(&self.items[index], &self.items[above]) {
                break;
            }
            self.items.swap(index, above);
            index = above;
        }
    }

    fn trickle_down(&mut self, mut index: usize) {
        let size = self.items.len();
        loop {
            let left = left_child(index);
            if left >= size {
                break;
            }
            let right = right_child(index);
            let mut child = left;
            if right < size && self.outranks(&self.items[right], &self.items[left]) {
                child = right;
            }
            if !self.outranks(&self.items[child], &self.items[index]) {
                break;
            }
            self.items.swap(index, child);
            index = child;
        }
    }
}

fn parent(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

fn left_child(index: usize) -> usize {
    2 * index + 1
}

fn right_child(index: usize) -> usize {
    2 * index + 2
}
