//! Position cursors over the backing store of a [`MinHeap`].
//!
//! A cursor points either at a live element or at the past-the-end position
//! of a heap, and can be stepped in both directions. Like every traversal of
//! a `MinHeap`, cursors follow storage order, not sorted order.
//!
//! [`MinHeap`]: crate::MinHeap

use core::fmt;
use core::ptr;

/// Index arithmetic shared by [`Cursor`] and [`CursorMut`].
///
/// `offset` ranges over `0..=len`, where `len` marks the past-the-end
/// position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Position {
    offset: usize,
}

impl Position {
    fn new(offset: usize) -> Self {
        Position { offset }
    }

    #[inline]
    fn advance(&mut self, len: usize) {
        assert!(
            self.offset < len,
            "cannot move a cursor past the end of the heap"
        );
        self.offset += 1;
    }

    #[inline]
    fn retreat(&mut self) {
        assert!(
            self.offset > 0,
            "cannot move a cursor before the beginning of the heap"
        );
        self.offset -= 1;
    }
}

/// A read-only cursor over the elements of a `MinHeap`.
///
/// This `struct` is created by [`MinHeap::begin`] and [`MinHeap::end`], or
/// by converting a [`CursorMut`]. A `Default` cursor is detached: it belongs
/// to no heap, compares equal to every other detached cursor and must not be
/// moved.
///
/// # Examples
///
/// ```
/// use min_heap::MinHeap;
///
/// let heap = MinHeap::from([3, 1, 2]);
///
/// let mut cursor = heap.begin();
/// let mut seen = Vec::new();
/// while cursor != heap.end() {
///     seen.push(*cursor.get().unwrap());
///     cursor.move_next();
/// }
///
/// // Storage order, the smallest element first.
/// assert_eq!(seen, [1, 3, 2]);
/// ```
///
/// [`MinHeap::begin`]: crate::MinHeap::begin
/// [`MinHeap::end`]: crate::MinHeap::end
pub struct Cursor<'a, T: 'a> {
    data: Option<&'a [Box<T>]>,
    pos: Position,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(data: &'a [Box<T>], offset: usize) -> Self {
        debug_assert!(offset <= data.len());
        Cursor {
            data: Some(data),
            pos: Position::new(offset),
        }
    }

    /// Returns the element under the cursor, or `None` when the cursor is
    /// detached or at the past-the-end position.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        self.data
            .and_then(|data| data.get(self.pos.offset))
            .map(|node| &**node)
    }

    /// Returns the distance from the beginning of the heap, or `None` for a
    /// detached cursor.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        self.data.map(|_| self.pos.offset)
    }

    /// Moves the cursor to the next element in storage order.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is detached or already at the past-the-end
    /// position.
    pub fn move_next(&mut self) {
        let Some(data) = self.data else {
            panic!("cannot move a detached cursor");
        };
        self.pos.advance(data.len());
    }

    /// Moves the cursor to the previous element in storage order.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is detached or already at the first position.
    pub fn move_prev(&mut self) {
        assert!(self.data.is_some(), "cannot move a detached cursor");
        self.pos.retreat();
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> Default for Cursor<'_, T> {
    /// Creates a detached cursor.
    fn default() -> Self {
        Cursor {
            data: None,
            pos: Position::new(0),
        }
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.data, other.data) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => {
                ptr::eq(lhs.as_ptr(), rhs.as_ptr()) && self.pos == other.pos
            }
            _ => false,
        }
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("current", &self.get())
            .finish()
    }
}

/// A cursor over the elements of a `MinHeap` that allows editing them.
///
/// This `struct` is created by [`MinHeap::begin_mut`] and
/// [`MinHeap::end_mut`]. It converts into a read-only [`Cursor`] with
/// [`From`] or [`CursorMut::as_cursor`]; there is no conversion in the other
/// direction.
///
/// It is a logic error to change an element through this cursor in a way
/// that changes its ordering relative to the other elements. The heap stays
/// memory safe but its methods may return wrong results afterwards.
///
/// # Examples
///
/// ```
/// use min_heap::MinHeap;
///
/// let mut heap = MinHeap::new();
/// heap.insert(String::from("blueberry"));
/// heap.insert(String::from("pear"));
///
/// let mut cursor = heap.begin_mut();
/// cursor.get_mut().unwrap().replace_range(..4, "black");
/// assert_eq!(cursor.get().map(String::as_str), Some("blackberry"));
/// ```
///
/// [`MinHeap::begin_mut`]: crate::MinHeap::begin_mut
/// [`MinHeap::end_mut`]: crate::MinHeap::end_mut
pub struct CursorMut<'a, T: 'a> {
    data: Option<&'a mut [Box<T>]>,
    pos: Position,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(data: &'a mut [Box<T>], offset: usize) -> Self {
        debug_assert!(offset <= data.len());
        CursorMut {
            data: Some(data),
            pos: Position::new(offset),
        }
    }

    /// Returns the element under the cursor, or `None` when the cursor is
    /// detached or at the past-the-end position.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.data
            .as_deref()
            .and_then(|data| data.get(self.pos.offset))
            .map(|node| &**node)
    }

    /// Returns the element under the cursor mutably, or `None` when the
    /// cursor is detached or at the past-the-end position.
    #[must_use]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        let offset = self.pos.offset;
        self.data
            .as_deref_mut()
            .and_then(|data| data.get_mut(offset))
            .map(|node| &mut **node)
    }

    /// Returns the distance from the beginning of the heap, or `None` for a
    /// detached cursor.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        self.data.as_ref().map(|_| self.pos.offset)
    }

    /// Moves the cursor to the next element in storage order.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is detached or already at the past-the-end
    /// position.
    pub fn move_next(&mut self) {
        let Some(data) = self.data.as_deref() else {
            panic!("cannot move a detached cursor");
        };
        let len = data.len();
        self.pos.advance(len);
    }

    /// Moves the cursor to the previous element in storage order.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is detached or already at the first position.
    pub fn move_prev(&mut self) {
        assert!(self.data.is_some(), "cannot move a detached cursor");
        self.pos.retreat();
    }

    /// Returns a read-only cursor at the same position, borrowing from this
    /// one.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            data: self.data.as_deref(),
            pos: self.pos,
        }
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        Cursor {
            data: cursor.data.map(|data| &*data),
            pos: cursor.pos,
        }
    }
}

impl<T> Default for CursorMut<'_, T> {
    /// Creates a detached cursor.
    fn default() -> Self {
        CursorMut {
            data: None,
            pos: Position::new(0),
        }
    }
}

impl<T> PartialEq for CursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_cursor() == other.as_cursor()
    }
}

impl<T> Eq for CursorMut<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("offset", &self.offset())
            .field("current", &self.get())
            .finish()
    }
}
