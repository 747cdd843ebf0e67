//! Bounded binary min-heap.
//!
//! Records are kept in a fixed number of slots. The occupied slots always form
//! the prefix `0..len` and every record compares greater than or equal to its
//! parent at `(i - 1) / 2`, so the minimum is found at slot `0`.

use base::error::HeapError;
use std::fmt::Display;

#[derive(Debug, Clone)]
pub struct Heap<T> {
    slots: Vec<Option<T>>,
    len: usize,
}

impl<T: Ord> Heap<T> {
    pub fn new(capacity: usize) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::InvalidArgument {
                reason: "capacity has to be a positive integer".to_string(),
            });
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Ok(Self { slots, len: 0 })
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }
    /// Drops every held record. The capacity is kept.
    pub fn clear(&mut self) {
        self.slots.fill_with(|| None);
        self.len = 0;
    }
    /// Returns the minimum without removing it.
    pub fn peek(&self) -> Result<&T, HeapError> {
        if self.len == 0 {
            return Err(HeapError::EmptyQueue);
        }
        self.slots[0].as_ref().ok_or(HeapError::EmptyQueue)
    }
    /// Accepts a possibly absent record. `None` is rejected with
    /// [`HeapError::NullRecord`] before the capacity is looked at.
    pub fn insert(&mut self, record: Option<T>) -> Result<(), HeapError> {
        match record {
            Some(record) => self.push(record),
            None => Err(HeapError::NullRecord),
        }
    }
    pub fn push(&mut self, record: T) -> Result<(), HeapError> {
        if self.is_full() {
            return Err(HeapError::QueueFull);
        }
        self.slots[self.len] = Some(record);
        self.len += 1;
        self.sift_up(self.len - 1)
    }
    /// Removes and returns the minimum.
    ///
    /// The last occupied slot is moved into the root and sifted down, which
    /// keeps the shape of the tree intact across any number of calls.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.len == 0 {
            return Err(HeapError::EmptyQueue);
        }
        let last = self.len - 1;
        self.slots.swap(0, last);
        let Some(result) = self.slots[last].take() else {
            return Err(HeapError::IndexOutOfRange {
                index: last,
                len: self.len,
            });
        };
        self.len = last;
        if self.len > 0 {
            self.sift_down(0)?;
        }
        Ok(result)
    }
    /// Copies the heap. Records themselves are cloned with `T::clone`, so a
    /// heap of `Rc`/`Arc` handles shares its records with the duplicate.
    pub fn duplicate(&self) -> Self
    where
        T: Clone,
    {
        self.clone()
    }
    /// Occupied slots in storage order, which is not sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots[..self.len].iter().flatten()
    }
    pub fn into_iter_sorted(self) -> IntoIterSorted<T> {
        IntoIterSorted { inner: self }
    }
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter_sorted().collect()
    }
    /// One record per line, smallest first. Empty when the heap is empty.
    pub fn render(&self) -> String
    where
        T: Display,
    {
        self.to_string()
    }
    /// Copy of the whole backing sequence, including unoccupied slots.
    #[doc(hidden)]
    pub fn slots(&self) -> Vec<Option<T>>
    where
        T: Clone,
    {
        self.slots.clone()
    }
    /// Whether the slots are packed and in heap order.
    #[doc(hidden)]
    pub fn is_heap(&self) -> bool {
        let packed = self
            .slots
            .iter()
            .enumerate()
            .all(|(i, slot)| slot.is_some() == (i < self.len));
        packed && (1..self.len).all(|i| self.slots[i] >= self.slots[(i - 1) / 2])
    }
    fn sift_up(&mut self, mut i: usize) -> Result<(), HeapError> {
        if i >= self.len {
            return Err(HeapError::IndexOutOfRange {
                index: i,
                len: self.len,
            });
        }
        // both slots lie in the occupied prefix, so comparing the `Option`s
        // compares the records
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.slots[i] < self.slots[parent] {
                self.slots.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
        Ok(())
    }
    fn sift_down(&mut self, mut i: usize) -> Result<(), HeapError> {
        if i >= self.len {
            return Err(HeapError::IndexOutOfRange {
                index: i,
                len: self.len,
            });
        }
        loop {
            let left = 2 * i + 1;
            if left >= self.len {
                break;
            }
            let right = left + 1;
            let child = if right < self.len && self.slots[right] < self.slots[left] {
                right
            } else {
                left
            };
            if self.slots[child] < self.slots[i] {
                self.slots.swap(i, child);
                i = child;
            } else {
                break;
            }
        }
        Ok(())
    }
}

impl<T: Ord + Display> Display for Heap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut sorted = self.iter().collect::<Vec<_>>();
        sorted.sort();
        for (i, record) in sorted.into_iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}

pub struct IntoIterSorted<T> {
    inner: Heap<T>,
}

impl<T: Ord> Iterator for IntoIterSorted<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }
}

impl<T: Ord> ExactSizeIterator for IntoIterSorted<T> {}
