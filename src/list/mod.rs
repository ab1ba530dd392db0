use std::fmt;
use std::fmt::{Debug, Formatter};
use std::iter;
use std::iter::FromIterator;

use crate::list::arena::{Arena, NodeId};

pub(crate) mod arena;

/// The `List` is a circular doubly-linked list with a built-in cursor, called
/// the *window*. It allows inserting and removing elements at the window in
/// constant time, and seeking the window to an absolute position at a cost
/// proportional to the distance from the last access.
///
/// Node storage lives in a slot arena owned by the list; the ring is nothing
/// but index relationships between slots, so no operation can produce a
/// dangling link.
///
/// # The window
///
/// The window is either *parked at the header* (the permanent sentinel slot,
/// [`index`] = 0) or *focused on element k* ([`index`] = k, counted from 1).
/// Every traversal operation moves the window and keeps the index in step:
///
/// - [`next`] and [`prev`] step one link, wrapping over the header at either
///   boundary of the ring;
/// - [`first`], [`last`] and [`get_at`] jump, [`get_at`] stepping in whichever
///   direction is cheaper from the current position;
/// - [`insert`], [`remove`] and [`replace`] edit relative to the window.
///
/// Reads of an absent element (the parked window, an out-of-range position,
/// an empty list) yield `None`; no operation panics.
///
/// [`index`]: List::index
/// [`next`]: List::next
/// [`prev`]: List::prev
/// [`first`]: List::first
/// [`last`]: List::last
/// [`get_at`]: List::get_at
/// [`insert`]: List::insert
/// [`remove`]: List::remove
/// [`replace`]: List::replace
pub struct List<T> {
    arena: Arena<T>,
    /// The focused slot; the header when parked.
    window: NodeId,
    /// 1-based ordinal of the window, 0 when parked at the header.
    index: usize,
    len: usize,
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use window_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        List {
            arena: Arena::new(),
            window: NodeId::HEADER,
            index: 0,
            len: 0,
        }
    }

    /// Create an empty `List` with room for `capacity` elements before the
    /// arena reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        List {
            arena: Arena::with_capacity(capacity),
            window: NodeId::HEADER,
            index: 0,
            len: 0,
        }
    }

    /// Returns the number of elements in the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the `List` is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the 1-based position of the window, or 0 if the window is
    /// parked at the header.
    ///
    /// `index() == 0` if and only if [`is_head`] is `true`.
    ///
    /// [`is_head`]: List::is_head
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if the window is focused on the first element.
    ///
    /// `false` on an empty list, even though the header's `next` is then the
    /// header itself.
    #[inline]
    pub fn is_first(&self) -> bool {
        self.len > 0 && self.window == self.arena.next(NodeId::HEADER)
    }

    /// Returns `true` if the window is focused on the last element.
    ///
    /// `false` on an empty list.
    #[inline]
    pub fn is_last(&self) -> bool {
        self.len > 0 && self.window == self.arena.prev(NodeId::HEADER)
    }

    /// Returns `true` if the window is parked at the header.
    ///
    /// # Examples
    ///
    /// ```
    /// use window_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_head());
    ///
    /// list.push_back(1);
    /// list.first();
    /// assert!(!list.is_head());
    /// ```
    #[inline]
    pub fn is_head(&self) -> bool {
        self.window == NodeId::HEADER
    }

    /// Provides a reference to the element at the window, or `None` if the
    /// window is parked at the header.
    ///
    /// Does not move the window.
    ///
    /// # Examples
    ///
    /// ```
    /// use window_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    ///
    /// assert_eq!(list.current(), None); // parked at the header
    /// list.first();
    /// assert_eq!(list.current(), Some(&1));
    /// ```
    #[inline]
    pub fn current(&self) -> Option<&T> {
        self.arena.value(self.window)
    }

    /// Provides a mutable reference to the element at the window, or `None`
    /// if the window is parked at the header.
    ///
    /// # Examples
    ///
    /// ```
    /// use window_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.first();
    ///
    /// if let Some(x) = list.current_mut() {
    ///     *x += 10;
    /// }
    /// assert_eq!(list.current(), Some(&11));
    /// ```
    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.arena.value_mut(self.window)
    }

    /// Inserts a new element immediately after the window.
    ///
    /// The window does not move, so the new element becomes the window's
    /// successor; with the window parked at the header this inserts at the
    /// front of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use window_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.first();
    ///
    /// list.insert(9); // [1, 9, 2, 3], window still on 1
    /// assert_eq!(list.current(), Some(&1));
    /// assert_eq!(list.next(), Some(&9));
    /// ```
    pub fn insert(&mut self, value: T) {
        let node = self.arena.alloc(value);
        self.arena.link_after(self.window, node);
        self.len += 1;
    }

    /// Adds an element first in the list.
    ///
    /// If the window is focused on an element, its ordinal shifts up by one
    /// and the index follows; the window itself stays on the same element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use window_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([2, 3]);
    /// list.first();
    ///
    /// list.push_front(1); // [1, 2, 3]
    /// assert_eq!(list.index(), 2);
    /// assert_eq!(list.current(), Some(&2));
    /// ```
    pub fn push_front(&mut self, value: T) {
        let node = self.arena.alloc(value);
        self.arena.link_after(NodeId::HEADER, node);
        self.len += 1;
        if self.index > 0 {
            self.index += 1;
        }
    }

    /// Appends an element to the back of the list.
    ///
    /// A tail insertion never shifts an existing element's ordinal, so the
    /// window and index are unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use window_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.last(), Some(&2));
    /// ```
    pub fn push_back(&mut self, value: T) {
        let node = self.arena.alloc(value);
        let tail = self.arena.prev(NodeId::HEADER);
        self.arena.link_after(tail, node);
        self.len += 1;
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This is a destructive merge: after the call `other` is empty, with its
    /// window parked at its own header, and behaves as a fresh list. `self`'s
    /// window and index are unchanged.
    ///
    /// # Complexity
    ///
    /// The payloads move between the two arenas, so this operation computes
    /// in *O*(*m*) time where *m* is `other.len()`; the ring concatenation
    /// itself is a single O(1) splice.
    ///
    /// # Examples
    ///
    /// ```
    /// use window_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut a = List::from_iter([1, 2, 3]);
    /// let mut b = List::from_iter([4, 5]);
    ///
    /// a.append(&mut b);
    /// assert_eq!(a, List::from_iter(1..=5));
    /// assert!(b.is_empty());
    ///
    /// b.push_back(6); // fully reusable
    /// assert_eq!(b.len(), 1);
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if other.len == 0 {
            return;
        }
        // Rebuild other's ring as a detached ring in our arena, in order.
        let mut chain: Option<NodeId> = None;
        let mut src = other.arena.next(NodeId::HEADER);
        while src != NodeId::HEADER {
            let succ = other.arena.next(src);
            other.arena.unlink(src);
            let node = self.arena.alloc(other.arena.free(src));
            if let Some(last) = chain {
                self.arena.link_after(last, node);
            }
            chain = Some(node);
            src = succ;
        }
        if let Some(last) = chain {
            let tail = self.arena.prev(NodeId::HEADER);
            self.arena.splice(tail, last);
        }
        self.len += other.len;
        other.len = 0;
        other.window = NodeId::HEADER;
        other.index = 0;
    }

    /// Removes the element at the window and returns it, or `None` if the
    /// window is parked at the header.
    ///
    /// The window retreats to the removed element's predecessor, so after
    /// removing the element at position p it rests at position p - 1 (the
    /// header when p was 1).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use window_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.get_at(2);
    ///
    /// assert_eq!(list.remove(), Some(2));
    /// assert_eq!(list.index(), 1);
    /// assert_eq!(list.current(), Some(&1));
    ///
    /// assert_eq!(list.remove(), Some(1));
    /// assert!(list.is_head());
    /// assert_eq!(list.remove(), None);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.window == NodeId::HEADER {
            return None;
        }
        let node = self.window;
        self.window = self.arena.prev(node);
        self.arena.unlink(node);
        self.len -= 1;
        self.index -= 1;
        Some(self.arena.free(node))
    }

    /// Replaces the element at the window and returns the old one, or
    /// returns `None` without mutating anything if the window is parked at
    /// the header.
    ///
    /// # Examples
    ///
    /// ```
    /// use window_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(["a", "b"]);
    /// assert_eq!(list.replace("z"), None); // parked at the header
    ///
    /// list.first();
    /// assert_eq!(list.replace("z"), Some("a"));
    /// assert_eq!(list.current(), Some(&"z"));
    /// ```
    pub fn replace(&mut self, value: T) -> Option<T> {
        if self.window == NodeId::HEADER {
            return None;
        }
        self.arena.replace(self.window, value)
    }

    /// Moves the window to the absolute 1-based `position` and returns the
    /// element there, or `None` (without moving) if `position` is 0 or
    /// exceeds the length.
    ///
    /// The window steps one link at a time in the cheaper direction from its
    /// current position, so the cost is O(|`position` - [`index`]|) rather
    /// than O(`position`), which is favorable for sequential or locality-biased
    /// access patterns.
    ///
    /// [`index`]: List::index
    ///
    /// # Examples
    ///
    /// ```
    /// use window_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter('a'..='e');
    ///
    /// assert_eq!(list.get_at(4), Some(&'d'));
    /// assert_eq!(list.get_at(2), Some(&'b')); // two steps back from the last access
    /// assert_eq!(list.get_at(0), None);
    /// assert_eq!(list.get_at(6), None);
    /// assert_eq!(list.index(), 2);
    /// ```
    pub fn get_at(&mut self, position: usize) -> Option<&T> {
        if position == 0 || position > self.len {
            return None;
        }
        while self.index < position {
            self.window = self.arena.next(self.window);
            self.index += 1;
        }
        while self.index > position {
            self.window = self.arena.prev(self.window);
            self.index -= 1;
        }
        self.arena.value(self.window)
    }

    /// Advances the window one step forward and returns the element now
    /// focused.
    ///
    /// Stepping past the last element lands on the header: `None` is
    /// returned and the index resets to 0; the next call starts over at the
    /// first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use window_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2]);
    ///
    /// assert_eq!(list.next(), Some(&1));
    /// assert_eq!(list.next(), Some(&2));
    /// assert_eq!(list.next(), None); // stepped off the end onto the header
    /// assert_eq!(list.index(), 0);
    /// assert_eq!(list.next(), Some(&1)); // and around again
    /// ```
    pub fn next(&mut self) -> Option<&T> {
        self.window = self.arena.next(self.window);
        self.index += 1;
        if self.index > self.len {
            self.index = 0;
        }
        self.arena.value(self.window)
    }

    /// Advances the window one step backward and returns the element now
    /// focused.
    ///
    /// Stepping before the first element lands on the header; stepping
    /// backward from the header wraps to the tail side of the ring, with the
    /// index becoming the length.
    ///
    /// # Examples
    ///
    /// ```
    /// use window_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// assert_eq!(list.prev(), Some(&3)); // wraps to the tail side
    /// assert_eq!(list.index(), 3);
    /// assert_eq!(list.prev(), Some(&2));
    /// ```
    pub fn prev(&mut self) -> Option<&T> {
        self.window = self.arena.prev(self.window);
        self.index = if self.index == 0 {
            self.len
        } else {
            self.index - 1
        };
        self.arena.value(self.window)
    }

    /// Jumps the window to the first element and returns it.
    ///
    /// On an empty list the window parks at the header, the index stays 0,
    /// and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use window_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.first(), Some(&1));
    /// assert_eq!(list.index(), 1);
    ///
    /// let mut empty: List<i32> = List::new();
    /// assert_eq!(empty.first(), None);
    /// assert_eq!(empty.index(), 0);
    /// ```
    pub fn first(&mut self) -> Option<&T> {
        self.window = self.arena.next(NodeId::HEADER);
        self.index = if self.len == 0 { 0 } else { 1 };
        self.arena.value(self.window)
    }

    /// Jumps the window to the last element and returns it.
    ///
    /// On an empty list the window parks at the header and `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use window_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.last(), Some(&3));
    /// assert_eq!(list.index(), 3);
    /// ```
    pub fn last(&mut self) -> Option<&T> {
        self.window = self.arena.prev(NodeId::HEADER);
        self.index = self.len;
        self.arena.value(self.window)
    }

    /// Removes all elements from the `List` and parks the window at the
    /// header.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use window_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.index(), 0);
    /// ```
    pub fn clear(&mut self) {
        while !self.is_empty() {
            self.first();
            self.remove();
        }
    }

    /// Walk the ring front to back. Internal: the public traversal surface
    /// is the window protocol.
    pub(crate) fn values(&self) -> impl Iterator<Item = &T> + '_ {
        let mut cur = self.arena.next(NodeId::HEADER);
        iter::from_fn(move || {
            if cur == NodeId::HEADER {
                return None;
            }
            let value = self.arena.value(cur);
            cur = self.arena.next(cur);
            value
        })
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare lists by their element sequences; where either window rests does
/// not take part in the comparison.
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.values().eq(other.values())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Clone> Clone for List<T> {
    /// The clone's window is parked at the header.
    fn clone(&self) -> Self {
        self.values().cloned().collect()
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

// Ensure that `List` is covariant in its type parameter.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
}

#[cfg(test)]
impl<T> List<T> {
    /// Check every structural invariant: both link directions agree, the
    /// ring holds exactly `len` elements, and the window rests `index`
    /// steps from the header.
    fn assert_well_formed(&self) {
        let mut count = 0;
        let mut cur = NodeId::HEADER;
        loop {
            let next = self.arena.next(cur);
            assert_eq!(self.arena.prev(next), cur, "ring backlink mismatch");
            cur = next;
            if cur == NodeId::HEADER {
                break;
            }
            count += 1;
            assert!(count <= self.len, "ring holds more nodes than len");
        }
        assert_eq!(count, self.len, "len does not match ring size");
        assert!(self.index <= self.len, "index out of range");
        let mut probe = NodeId::HEADER;
        for _ in 0..self.index {
            probe = self.arena.next(probe);
        }
        assert_eq!(probe, self.window, "window does not rest at index");
        if self.index == 0 {
            assert!(self.is_head(), "index 0 away from the header");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.index(), 0);
        assert!(list.is_head());
        assert!(!list.is_first());
        assert!(!list.is_last());
        list.assert_well_formed();

        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.remove(), None); // still parked at the header
        list.assert_well_formed();
    }

    #[test]
    fn list_insert_after_window() {
        let mut list = List::new();
        list.insert(1); // parked: inserts at the front
        assert_eq!(list.len(), 1);
        assert_eq!(list.index(), 0);
        list.assert_well_formed();

        list.first();
        list.insert(3);
        list.insert(2); // window unmoved, both land right after 1
        assert_eq!(list, List::from_iter([1, 2, 3]));
        assert_eq!(list.index(), 1);
        assert_eq!(list.current(), Some(&1));
        list.assert_well_formed();
    }

    #[test]
    fn list_push_front_shifts_index() {
        let mut list = List::from_iter([2, 3]);
        list.last(); // index 2 on 3
        list.push_front(1);
        assert_eq!(list.index(), 3);
        assert_eq!(list.current(), Some(&3));
        assert_eq!(list, List::from_iter([1, 2, 3]));
        list.assert_well_formed();

        // Parked window stays parked.
        let mut list = List::from_iter([2]);
        list.push_front(1);
        assert_eq!(list.index(), 0);
        assert!(list.is_head());
        list.assert_well_formed();
    }

    #[test]
    fn list_push_back_keeps_index() {
        let mut list = List::from_iter([1, 2]);
        list.first();
        list.push_back(3);
        assert_eq!(list.index(), 1);
        assert_eq!(list.current(), Some(&1));
        assert_eq!(list, List::from_iter([1, 2, 3]));
        list.assert_well_formed();
    }

    #[test]
    fn list_remove_retreats_window() {
        let mut list = List::from_iter([1, 2, 3]);
        list.get_at(3);
        assert_eq!(list.remove(), Some(3));
        assert_eq!(list.index(), 2);
        assert_eq!(list.current(), Some(&2));
        list.assert_well_formed();

        assert_eq!(list.remove(), Some(2));
        assert_eq!(list.remove(), Some(1));
        assert!(list.is_head());
        assert_eq!(list.len(), 0);
        list.assert_well_formed();
    }

    #[test]
    fn list_remove_on_empty() {
        let mut list = List::<i32>::new();
        assert_eq!(list.remove(), None);
        assert_eq!(list.len(), 0);
        assert_eq!(list.index(), 0);
        list.assert_well_formed();
    }

    #[test]
    fn list_replace() {
        let mut list = List::from_iter([1, 2]);
        assert_eq!(list.replace(9), None);
        assert_eq!(list, List::from_iter([1, 2]));

        list.get_at(2);
        assert_eq!(list.replace(9), Some(2));
        assert_eq!(list, List::from_iter([1, 9]));
        assert_eq!(list.index(), 2);
        list.assert_well_formed();
    }

    #[test]
    fn list_get_at_agrees_with_stepping() {
        let mut by_jump = List::from_iter(0..10);
        let mut by_step = List::from_iter(0..10);

        for &target in &[1, 5, 2, 10, 9, 1] {
            let jumped = by_jump.get_at(target).copied();

            by_step.first();
            for _ in 1..target {
                by_step.next();
            }
            assert_eq!(jumped, by_step.current().copied());
            assert_eq!(by_jump.index(), target);
            by_jump.assert_well_formed();
        }

        assert_eq!(by_jump.get_at(0), None);
        assert_eq!(by_jump.get_at(11), None);
        assert_eq!(by_jump.index(), 1); // unmoved by the failed seeks
    }

    #[test]
    fn list_forward_traversal_lands_on_header() {
        let mut list = List::from_iter(0..4);
        let mut seen = Vec::new();
        list.first();
        for _ in 0..list.len() {
            seen.push(*list.current().unwrap());
            list.next();
        }
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert!(list.is_head());
        assert_eq!(list.index(), 0);
    }

    #[test]
    fn list_prev_then_next_is_identity() {
        let mut list = List::from_iter([1, 2, 3]);
        list.get_at(2);
        list.prev();
        list.next();
        assert_eq!(list.index(), 2);
        assert_eq!(list.current(), Some(&2));

        // Across the boundary: 3 -> header -> 3.
        list.last();
        list.next();
        assert!(list.is_head());
        list.prev();
        assert_eq!(list.index(), 3);
        assert_eq!(list.current(), Some(&3));
    }

    #[test]
    fn list_wrap_rules_on_empty() {
        let mut list = List::<i32>::new();
        assert_eq!(list.next(), None);
        assert_eq!(list.index(), 0);
        assert_eq!(list.prev(), None);
        assert_eq!(list.index(), 0);
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
        assert_eq!(list.index(), 0);
        assert!(list.is_head());
        list.assert_well_formed();
    }

    #[test]
    fn list_wrap_rules_on_single_element() {
        let mut list = List::from_iter([7]);

        assert_eq!(list.next(), Some(&7));
        assert_eq!(list.index(), 1);
        assert_eq!(list.next(), None); // off the end, onto the header
        assert_eq!(list.index(), 0);

        assert_eq!(list.prev(), Some(&7)); // and back around
        assert_eq!(list.index(), 1);
        assert_eq!(list.prev(), None);
        assert_eq!(list.index(), 0);

        assert!(!list.is_first()); // parked, not focused
        list.first();
        assert!(list.is_first());
        assert!(list.is_last());
        list.assert_well_formed();
    }

    #[test]
    fn list_append_merges_and_empties_source() {
        let mut a = List::from_iter([1, 2, 3]);
        let mut b = List::from_iter([4, 5]);
        a.first(); // window on 1

        a.append(&mut b);
        assert_eq!(a, List::from_iter(1..=5));
        assert_eq!(a.len(), 5);
        assert_eq!(a.index(), 1); // untouched by the merge
        assert_eq!(a.current(), Some(&1));
        a.assert_well_formed();

        assert_eq!(b.len(), 0);
        assert!(b.is_head());
        assert_eq!(b.index(), 0);
        b.assert_well_formed();

        // The emptied source behaves as a fresh list.
        b.push_back(6);
        b.push_front(0);
        assert_eq!(b, List::from_iter([0, 6]));
        b.assert_well_formed();
    }

    #[test]
    fn list_append_edge_cases() {
        // Empty source: no-op on either side.
        let mut a = List::from_iter([1]);
        let mut b = List::new();
        a.last();
        a.append(&mut b);
        assert_eq!(a, List::from_iter([1]));
        assert_eq!(a.index(), 1);
        a.assert_well_formed();

        // Empty destination takes over the whole source.
        let mut c = List::new();
        let mut d = List::from_iter([1, 2]);
        d.first(); // source window position must not leak into the merge
        c.append(&mut d);
        assert_eq!(c, List::from_iter([1, 2]));
        assert!(c.is_head());
        assert!(d.is_empty());
        c.assert_well_formed();
        d.assert_well_formed();
    }

    #[test]
    fn list_length_matches_reachable_count() {
        let mut list = List::new();
        for i in 0..6 {
            list.push_back(i);
            list.assert_well_formed();
        }
        list.get_at(3);
        list.remove();
        list.assert_well_formed();
        list.insert(9);
        list.assert_well_formed();
        list.push_front(-1);
        list.assert_well_formed();
        assert_eq!(list.len(), list.values().count());
    }

    #[test]
    fn list_slot_reuse_after_churn() {
        let mut list = List::from_iter(0..4);
        for round in 0..3 {
            list.first();
            list.remove();
            list.push_back(round + 4);
            list.assert_well_formed();
        }
        assert_eq!(list, List::from_iter([3, 4, 5, 6]));
    }

    #[test]
    fn list_clear() {
        let mut list = List::from_iter(0..5);
        list.get_at(3);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.index(), 0);
        assert!(list.is_head());
        list.assert_well_formed();

        list.push_back(1);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn list_drop_releases_payloads() {
        struct DropChecker<'a> {
            value: i32,
            dropped: &'a RefCell<Vec<i32>>,
        }
        impl<'a> Drop for DropChecker<'a> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::new());
        let mut list = List::new();
        for value in 1..=3 {
            list.push_back(DropChecker {
                value,
                dropped: &dropped,
            });
        }
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_clone_eq_debug() {
        let mut list = List::from_iter([1, 2, 3]);
        list.get_at(2);

        let clone = list.clone();
        assert_eq!(clone, list); // equality ignores the window position
        assert_eq!(clone.index(), 0);
        assert_eq!(format!("{:?}", clone), "[1, 2, 3]");

        let other = List::from_iter([1, 2]);
        assert_ne!(clone, other);
    }
}
