//! A binary min-heap over a growable store of boxed elements.
//!
//! [`MinHeap`] keeps the smallest element at its root and manages its own
//! backing store: the store doubles when full and halves when it drops to a
//! quarter full. Elements are boxed, so restoring heap order and resizing
//! only ever move pointers.
//!
//! Traversal ([`MinHeap::iter`], [`Cursor`], [`CursorMut`]) follows storage
//! order, which is breadth-first over the tree shape of the heap and **not**
//! ascending order. Use [`MinHeap::into_iter_sorted`] or repeated
//! [`MinHeap::pop_min`] calls for sorted output.

use core::cmp::Ordering;
use core::fmt;
use core::iter::{FromIterator, FusedIterator};
use core::mem;

use std::borrow::Borrow;
use std::collections::VecDeque;
use std::slice;
use std::vec::{self, Vec};

use log::{debug, trace};

mod cursor;

pub use cursor::{Cursor, CursorMut};

/// The smallest size of the backing store, in slots.
///
/// One slot of every store is reserved and never holds an element, so an
/// empty heap can take exactly one insertion before it grows.
pub const MIN_SLOTS: usize = 2;

/// A priority queue implemented with a binary min-heap.
///
/// The heap owns every element it holds. [`Clone`] produces an independent
/// deep copy and [`PartialEq`] compares the *contents* of two heaps as
/// multisets, regardless of how the elements are laid out in storage.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the [`Ord`]
/// trait, changes while it is in the heap. This is only possible through
/// [`iter_mut`], [`CursorMut`], [`Cell`], [`RefCell`], global state, I/O, or
/// unsafe code. The behavior resulting from such a logic error is not
/// specified but will not be undefined behavior.
///
/// # Examples
///
/// ```
/// use min_heap::MinHeap;
///
/// let mut heap = MinHeap::new();
/// assert_eq!(heap.peek_min(), None);
///
/// heap.insert(String::from("orange"));
/// heap.insert(String::from("blue"));
/// heap.insert(String::from("yellow"));
///
/// // The root is always the smallest element.
/// assert_eq!(heap.peek_min().map(String::as_str), Some("blue"));
/// assert_eq!(heap.len(), 3);
///
/// // Iteration visits the backing store in storage order.
/// assert_eq!(heap.to_string(), "[blue,orange,yellow]");
///
/// // Removing the minimum repeatedly yields ascending order.
/// heap.delete_min();
/// assert_eq!(heap.pop_min().as_deref(), Some("orange"));
/// assert_eq!(heap.pop_min().as_deref(), Some("yellow"));
/// assert!(heap.is_empty());
/// ```
///
/// The layout of the backing store, including its reserved slot and unused
/// trailing slots, can be printed for diagnostics:
///
/// ```
/// use min_heap::MinHeap;
///
/// let heap = MinHeap::from(["orange", "blue"]);
///
/// assert_eq!(heap.capacity(), 4);
/// assert_eq!(heap.layout().to_string(), "[x,blue,orange,_]");
/// ```
///
/// # Time complexity
///
/// | [insert]         | [delete_min]     | [peek_min] | [exists]  | [eq]                |
/// |------------------|------------------|------------|-----------|---------------------|
/// | *O*(log(*n*))~   | *O*(log(*n*))~   | *O*(1)     | *O*(*n*)  | *O*(*n* log(*n*))   |
///
/// Costs marked `~` are amortized over the occasional resize of the backing
/// store.
///
/// [`iter_mut`]: MinHeap::iter_mut
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
/// [insert]: MinHeap::insert
/// [delete_min]: MinHeap::delete_min
/// [peek_min]: MinHeap::peek_min
/// [exists]: MinHeap::exists
/// [eq]: PartialEq::eq
pub struct MinHeap<T> {
    data: Vec<Box<T>>,
    slots: usize,
}

impl<T: Clone> Clone for MinHeap<T> {
    /// Creates a deep copy with the same store size.
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.slots - 1);
        data.extend(self.data.iter().cloned());
        MinHeap {
            data,
            slots: self.slots,
        }
    }

    /// Replaces the contents of `self` with a deep copy of `source`.
    ///
    /// The copy is made before `self` is touched, so a panicking `T::clone`
    /// leaves `self` unchanged.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Default for MinHeap<T> {
    /// Creates an empty `MinHeap<T>`.
    #[inline]
    fn default() -> MinHeap<T> {
        MinHeap::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for MinHeap<T> {
    /// Prints the live elements in storage order, e.g. `[blue,orange]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f, false)
    }
}

impl<T> MinHeap<T> {
    /// Creates an empty `MinHeap` with a store of [`MIN_SLOTS`] slots.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::new();
    /// heap.insert(4);
    /// ```
    #[must_use]
    pub fn new() -> MinHeap<T> {
        MinHeap {
            data: Vec::with_capacity(MIN_SLOTS - 1),
            slots: MIN_SLOTS,
        }
    }

    /// Creates an empty `MinHeap` that can hold `capacity` elements before
    /// its store has to grow.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::with_capacity(10);
    /// assert_eq!(heap.capacity(), 11);
    /// heap.insert(4);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> MinHeap<T> {
        let slots = capacity.saturating_add(1).max(MIN_SLOTS);
        MinHeap {
            data: Vec::with_capacity(slots - 1),
            slots,
        }
    }

    /// Returns the number of slots in the backing store.
    ///
    /// This includes the reserved slot, so a heap can hold
    /// `capacity() - 1` elements before its store grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::new();
    /// assert_eq!(heap.capacity(), 2);
    /// heap.insert(1);
    /// heap.insert(2);
    /// assert_eq!(heap.capacity(), 4);
    /// ```
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots
    }

    /// Returns the length of the binary heap.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let heap = MinHeap::from([1, 3]);
    ///
    /// assert_eq!(heap.len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the binary heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the smallest item in the binary heap, or `None` if it is
    /// empty.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::new();
    /// assert_eq!(heap.peek_min(), None);
    ///
    /// heap.insert(5);
    /// heap.insert(1);
    /// heap.insert(2);
    /// assert_eq!(heap.peek_min(), Some(&1));
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek_min(&self) -> Option<&T> {
        self.data.first().map(|node| &**node)
    }

    /// Exchanges the contents of two heaps without touching their elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut a = MinHeap::from([4, 2]);
    /// let mut b = MinHeap::from([7]);
    ///
    /// a.swap(&mut b);
    ///
    /// assert_eq!(a.peek_min(), Some(&7));
    /// assert_eq!(b.len(), 2);
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1).
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.slots, &mut other.slots);
        mem::swap(&mut self.data, &mut other.data);
    }

    /// Drops all items from the binary heap and shrinks the store back to
    /// [`MIN_SLOTS`].
    pub fn clear(&mut self) {
        debug!(
            "clearing heap of {} elements ({} slots)",
            self.len(),
            self.slots
        );
        self.data = Vec::with_capacity(MIN_SLOTS - 1);
        self.slots = MIN_SLOTS;
    }

    /// Returns an iterator visiting all values in storage order.
    ///
    /// Storage order is breadth-first over the heap's tree: the first item
    /// is the smallest, but the rest are not sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let heap = MinHeap::from([1, 2, 3, 4]);
    ///
    /// assert_eq!(heap.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    /// assert_eq!(heap.iter().rev().next(), Some(&4));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter: self.data.iter(),
        }
    }

    /// Returns an iterator visiting all values mutably in storage order.
    ///
    /// Changing the relative order of the values through this iterator is a
    /// logic error.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            iter: self.data.iter_mut(),
        }
    }

    /// Returns a cursor at the first element in storage order.
    ///
    /// On an empty heap this is equal to [`end`](MinHeap::end).
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(&self.data, 0)
    }

    /// Returns a cursor at the past-the-end position.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(&self.data, self.len())
    }

    /// Returns a mutable cursor at the first element in storage order.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(&mut self.data, 0)
    }

    /// Returns a mutable cursor at the past-the-end position.
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len();
        CursorMut::new(&mut self.data, len)
    }

    /// Consumes the `MinHeap` and returns the underlying values in storage
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let heap = MinHeap::from([3, 1, 2]);
    ///
    /// assert_eq!(heap.into_vec(), [1, 3, 2]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Writes the backing store to `out`.
    ///
    /// In compact mode only the live elements are written, as
    /// `[e1,e2,...]`. In complete mode the reserved slot is written as `x`
    /// and every unused trailing slot as `_`, for example `[x,e1,e2,_]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let heap = MinHeap::<i32>::new();
    ///
    /// let mut compact = String::new();
    /// heap.print(&mut compact, false).unwrap();
    /// assert_eq!(compact, "[]");
    ///
    /// let mut complete = String::new();
    /// heap.print(&mut complete, true).unwrap();
    /// assert_eq!(complete, "[x,_]");
    /// ```
    pub fn print<W: fmt::Write>(&self, out: &mut W, complete: bool) -> fmt::Result
    where
        T: fmt::Display,
    {
        out.write_char('[')?;
        if complete {
            out.write_char('x')?;
        }
        for (i, node) in self.data.iter().enumerate() {
            if complete || i > 0 {
                out.write_char(',')?;
            }
            write!(out, "{}", node)?;
        }
        if complete {
            for _ in self.len() + 1..self.slots {
                out.write_str(",_")?;
            }
        }
        out.write_char(']')
    }

    /// Returns a value whose [`Display`](fmt::Display) implementation prints
    /// the complete layout of the backing store.
    ///
    /// See [`print`](MinHeap::print).
    pub fn layout(&self) -> Layout<'_, T> {
        Layout { heap: self }
    }

    /// Reallocates the backing store at double or half its slot count and
    /// moves the boxed elements over.
    fn resize(&mut self, grow: bool) {
        let slots = if grow {
            self.slots * 2
        } else {
            (self.slots / 2).max(MIN_SLOTS)
        };
        debug_assert!(self.len() < slots);

        let mut data = Vec::with_capacity(slots - 1);
        data.append(&mut self.data);
        trace!(
            "resizing backing store from {} to {} slots ({} live)",
            self.slots,
            slots,
            data.len()
        );

        self.data = data;
        self.slots = slots;
    }
}

impl<T: Ord> MinHeap<T> {
    /// Pushes an item onto the binary heap.
    ///
    /// Outstanding cursors and iterators borrow the heap, so none can
    /// survive this call.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::new();
    /// heap.insert(3);
    /// heap.insert(5);
    /// heap.insert(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek_min(), Some(&1));
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(log(*n*)) amortized. A single call costs *O*(*n*) when the store
    /// has to grow.
    pub fn insert(&mut self, value: T) {
        if self.len() >= self.slots - 1 {
            self.resize(true);
        }

        self.data.push(Box::new(value));
        self.sift_up(self.len() - 1);
    }

    /// Inserts `value` unless an equal item is already in the heap.
    ///
    /// Returns whether the value was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::new();
    ///
    /// assert!(heap.insert_unique(1));
    /// assert!(!heap.insert_unique(1));
    /// assert_eq!(heap.len(), 1);
    /// ```
    pub fn insert_unique(&mut self, value: T) -> bool {
        if self.exists(&value) {
            return false;
        }
        self.insert(value);
        true
    }

    /// Removes the smallest item from the binary heap.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty. Use [`pop_min`](MinHeap::pop_min) when
    /// emptiness is not known in advance.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::from([2, 1]);
    ///
    /// heap.delete_min();
    /// assert_eq!(heap.peek_min(), Some(&2));
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(log(*n*)) amortized.
    pub fn delete_min(&mut self) {
        if self.remove_min().is_none() {
            panic!("delete_min called on an empty MinHeap");
        }
    }

    /// Removes the smallest item from the binary heap and returns it, or
    /// `None` if it is empty.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let mut heap = MinHeap::from([1, 3]);
    ///
    /// assert_eq!(heap.pop_min(), Some(1));
    /// assert_eq!(heap.pop_min(), Some(3));
    /// assert_eq!(heap.pop_min(), None);
    /// ```
    pub fn pop_min(&mut self) -> Option<T> {
        self.remove_min().map(|node| *node)
    }

    /// Returns `true` if the heap holds an item equal to `value`.
    ///
    /// The search walks the heap breadth-first and skips every subtree whose
    /// root is greater than `value`, since nothing below it can be equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let heap = MinHeap::from([String::from("white"), String::from("black")]);
    ///
    /// assert!(heap.exists("white"));
    /// assert!(!heap.exists("grey"));
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(*n*) in the worst case.
    pub fn exists<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut queue = VecDeque::new();
        queue.push_back(0);

        while let Some(pos) = queue.pop_front() {
            let Some(node) = self.data.get(pos) else {
                continue;
            };
            let item: &Q = (**node).borrow();
            match item.cmp(value) {
                Ordering::Equal => return true,
                Ordering::Less => {
                    queue.push_back(2 * pos + 1);
                    queue.push_back(2 * pos + 2);
                }
                Ordering::Greater => {}
            }
        }

        false
    }

    /// Returns `true` if every item is greater than or equal to its parent
    /// and the store has room for every item.
    pub fn check_integrity(&self) -> bool {
        self.len() < self.slots
            && (1..self.len()).all(|i| self.data[i] >= self.data[(i - 1) / 2])
    }

    /// Consumes the `MinHeap` and returns a vector in sorted (ascending)
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    ///
    /// let mut heap = MinHeap::from([1, 2, 4, 5, 7]);
    /// heap.insert(6);
    /// heap.insert(3);
    ///
    /// assert_eq!(heap.into_sorted_vec(), [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter_sorted().collect()
    }

    /// Returns an iterator which retrieves elements in ascending order.
    /// This method consumes the original heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let heap = MinHeap::from([5, 4, 3, 2, 1]);
    ///
    /// assert_eq!(heap.into_iter_sorted().take(2).collect::<Vec<_>>(), [1, 2]);
    /// ```
    pub fn into_iter_sorted(self) -> IntoIterSorted<T> {
        IntoIterSorted { inner: self }
    }

    /// Takes the root out, refills it from the last slot and restores heap
    /// order, shrinking the store once it is a quarter full.
    fn remove_min(&mut self) -> Option<Box<T>> {
        if self.is_empty() {
            return None;
        }

        let min = self.data.swap_remove(0);
        self.sift_down(0);

        if !self.is_empty() && self.len() <= self.slots / 4 {
            self.resize(false);
        }

        Some(min)
    }

    /// Moves the item at `pos` towards the root while it is smaller than its
    /// parent.
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.data[pos] >= self.data[parent] {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    /// Moves the item at `pos` towards the leaves while one of its children
    /// is smaller. Ties between the children go to the right child.
    fn sift_down(&mut self, mut pos: usize) {
        let end = self.len();
        loop {
            let left = 2 * pos + 1;
            if left >= end {
                return;
            }

            let right = left + 1;
            let child = if right < end && self.data[right] <= self.data[left] {
                right
            } else {
                left
            };

            if self.data[child] >= self.data[pos] {
                return;
            }
            self.data.swap(pos, child);
            pos = child;
        }
    }
}

impl<T: Ord + Clone> PartialEq for MinHeap<T> {
    /// Two heaps are equal when they hold the same items with the same
    /// multiplicities, however those items are laid out.
    ///
    /// # Time complexity
    ///
    /// *O*(*n* log(*n*)); both heaps are copied and drained.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut lhs = self.clone();
        let mut rhs = other.clone();
        while let (Some(a), Some(b)) = (lhs.pop_min(), rhs.pop_min()) {
            if a != b {
                return false;
            }
        }

        true
    }
}

impl<T: Ord + Clone> Eq for MinHeap<T> {}

/// Prints the complete layout of a [`MinHeap`] store.
///
/// This `struct` is created by [`MinHeap::layout`].
pub struct Layout<'a, T: 'a> {
    heap: &'a MinHeap<T>,
}

impl<T: fmt::Display> fmt::Display for Layout<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.heap.print(f, true)
    }
}

impl<T: fmt::Display> fmt::Debug for Layout<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// An iterator over the elements of a `MinHeap`, in storage order.
///
/// This `struct` is created by [`MinHeap::iter()`]. See its
/// documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, Box<T>>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next().map(|node| &**node)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back().map(|node| &**node)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the elements of a `MinHeap`, in storage order.
///
/// This `struct` is created by [`MinHeap::iter_mut()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    iter: slice::IterMut<'a, Box<T>>,
}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut")
            .field(&self.iter.as_slice())
            .finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.iter.next().map(|node| &mut **node)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.iter.next_back().map(|node| &mut **node)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of a `MinHeap`, in storage order.
///
/// This `struct` is created by [`MinHeap::into_iter()`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`IntoIterator`]: core::iter::IntoIterator
#[derive(Clone)]
pub struct IntoIter<T> {
    iter: vec::IntoIter<Box<T>>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter")
            .field(&self.iter.as_slice())
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next().map(|node| *node)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back().map(|node| *node)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// An owning iterator yielding the elements of a `MinHeap` in ascending
/// order.
///
/// This `struct` is created by [`MinHeap::into_iter_sorted()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct IntoIterSorted<T> {
    inner: MinHeap<T>,
}

impl<T: Ord> Iterator for IntoIterSorted<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_min()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T: Ord> ExactSizeIterator for IntoIterSorted<T> {}

impl<T: Ord> FusedIterator for IntoIterSorted<T> {}

impl<T> IntoIterator for MinHeap<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator that moves each value out of the heap
    /// in storage order.
    ///
    /// # Examples
    ///
    /// ```
    /// use min_heap::MinHeap;
    /// let heap = MinHeap::from([1, 2, 3, 4]);
    ///
    /// for x in heap {
    ///     // x has type i32, not &i32
    ///     println!("{x}");
    /// }
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            iter: self.data.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a MinHeap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut MinHeap<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    /// Inserts the items of `vec` one by one, in order.
    fn from(vec: Vec<T>) -> MinHeap<T> {
        vec.into_iter().collect()
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for MinHeap<T> {
    /// ```
    /// use min_heap::MinHeap;
    ///
    /// let h1 = MinHeap::from([1, 4, 2, 3]);
    /// let h2: MinHeap<_> = [4, 3, 2, 1].into();
    /// assert_eq!(h1, h2);
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T> From<MinHeap<T>> for Vec<T> {
    /// Converts a `MinHeap<T>` into a `Vec<T>` in storage order.
    fn from(heap: MinHeap<T>) -> Vec<T> {
        heap.into_vec()
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> MinHeap<T> {
        let mut heap = MinHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(move |value| self.insert(value));
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
