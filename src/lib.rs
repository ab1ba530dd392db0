//! This crate provides a circular doubly-linked list with a built-in cursor
//! (the *window*), plus a [`Stack`] layered on top of it.
//!
//! The [`List`] keeps a single movable window and a position counter in step
//! with every edit, so repeated local traversal (`next`/`prev` chains, or
//! bounded jumps with [`get_at`]) costs only the distance actually moved
//! instead of a scan from the front.
//!
//! Here is a quick example showing how the window works.
//!
//! ```
//! use window_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! assert_eq!(list.get_at(3), Some(&3));   // seek forward from the header
//! assert_eq!(list.get_at(2), Some(&2));   // one step back, not a re-scan
//!
//! assert_eq!(list.remove(), Some(2));     // window retreats to position 1
//! assert_eq!(list.current(), Some(&1));
//!
//! list.insert(9);                         // insert right after the window
//! assert_eq!(list, List::from_iter([1, 9, 3, 4]));
//! ```
//!
//! # Memory Layout
//!
//! Node storage lives in a slot arena, a `Vec` owned by the list, and the
//! ring is nothing but index relationships between slots:
//!
//! ```text
//!        slots: Vec<Slot<T>>
//!   ┌──────────┬──────────┬──────────┬──────────┐
//!   │ header   │ Some(a)  │ (vacant) │ Some(b)  │
//!   │ next: 1  │ next: 3  │          │ next: 0  │
//!   │ prev: 3  │ prev: 0  │          │ prev: 1  │
//!   └──────────┴──────────┴──────────┴──────────┘
//!        0          1          2          3
//!
//!   ring: header → a → b → header        list: [a, b]
//! ```
//!
//! Slot 0 is the permanent header: it holds no payload and marks the logical
//! start/end boundary of the ring. An empty list is the header linked to
//! itself. Vacant slots are recycled through a free list, so churn does not
//! grow the arena, and a stale index can never dangle: the arena owns every
//! slot for the lifetime of the list.
//!
//! # The window
//!
//! In a list of length *n* the window is in one of *n* + 1 states: parked at
//! the header (`index() == 0`) or focused on element *k* (`index() == k`,
//! counted from 1). Stepping off either end of the ring lands on the header
//! rather than failing, and every read of an absent element (the parked
//! window, an out-of-range position) yields `None`. See [`List`] for the
//! full protocol.
//!
//! Because the window is part of the list's own state, every operation that
//! moves it takes `&mut self`; sharing a list across threads without
//! external synchronization is rejected at compile time.
//!
//! # Stack
//!
//! The [`Stack`] (default feature `stack`) is a LIFO view over a `List`:
//! pushing prepends, popping removes the first element, and the peeking
//! operations position the window. It is how the list is consumed when only
//! top-of-stack access is needed.

#[doc(inline)]
pub use crate::convert::to_vec;
#[doc(inline)]
pub use crate::list::List;
#[cfg(feature = "stack")]
#[doc(inline)]
pub use crate::stack::Stack;

pub mod list;
#[cfg(feature = "stack")]
pub mod stack;

mod convert;
