//! This crate provides a doubly-linked list whose forward links *own* their
//! nodes and whose backward links only *observe* them.
//!
//! The [`List`] allows inserting and removing elements at both ends in
//! constant time, and at any given position in *O*(*n*) time. Its cursors
//! are weak observers: they never extend a node's lifetime, and they can
//! report that their target node has been deallocated.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use shared_list::{List, ListError};
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! list.push_front(0); // [0, 1, 2, 3, 4]
//! assert_eq!(list.len(), 5);
//!
//! list.insert(3, 10)?; // insert 10 at position 3
//! assert_eq!(list, List::from_iter([0, 1, 2, 10, 3, 4]));
//!
//! assert_eq!(list.remove(3), Ok(10)); // remove it again
//! assert_eq!(list.pop_back(), Ok(4));
//! assert_eq!(list, List::from_iter([0, 1, 2, 3]));
//! # Ok::<(), ListError>(())
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!   ╔═══════════╗   next   ╔═══════════╗   next             ╔═══════════╗
//!   ║   next    ║ ───────→ ║   next    ║ ───────→ ┄┄ ─────→ ║   next    ║ ──→ ∅
//!   ╟───────────╢          ╟───────────╢    Node 2, 3, ...  ╟───────────╢
//! ∅ ║   prev    ║ ←╌╌╌╌╌╌╌ ║   prev    ║ ←╌╌╌╌╌╌╌ ┄┄ ╌╌╌╌╌╌ ║   prev    ║
//!   ╟───────────╢          ╟───────────╢                    ╟───────────╢
//!   ║ payload T ║          ║ payload T ║                    ║ payload T ║
//!   ╚═══════════╝          ╚═══════════╝                    ╚═══════════╝
//!      Node 0 ↑                Node 1                        Node n-1 ↑
//!             │                                                       │
//!       ╔═══════════╗                                                 │
//!       ║ head,tail ║ ─────────────────── tail ──────────────────────┘
//!       ╟───────────╢
//!       ║   (len)   ║
//!       ╚═══════════╝
//!           List
//! ```
//! Solid arrows are strong (owning) references, dashed arrows are weak
//! (observing) references.
//!
//! The `List` contains:
//! - a strong reference `head` that owns the first node;
//! - a strong reference `tail` to the last node, so pushing and popping at
//!   the back stay *O*(1);
//! - a length field `len` counting the elements. It can be disabled by
//!   disabling the `length` feature in your `Cargo.toml`, in which case
//!   [`len`] walks the chain instead:
//! ```text
//! [dependencies]
//! shared_list = { default-features = false }
//! ```
//!
//! Each node of the list `List<T>` is allocated on the heap and contains:
//! - the strong `next` reference that owns the next node (or nothing if it
//!   is the last node in the list);
//! - the weak `prev` reference that observes the previous node (or nothing
//!   if it is the first node in the list);
//! - the actual payload `T`.
//!
//! Ownership flows strictly head→tail: every node is owned by its unique
//! predecessor (or by the list itself), and the forward/backward link pair
//! is asymmetric by type, so no strong reference cycle can ever form. The
//! `prev` links and all cursors never keep a node alive.
//!
//! # Iteration
//!
//! Consuming the list is done with the [`IntoIter`] iterator, which is
//! double-ended and pops elements off the ends of the list.
//!
//! ## Examples
//!
//! ```
//! use shared_list::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//! let mut iter = list.into_iter();
//! assert_eq!(iter.next(), Some(1));
//! assert_eq!(iter.next_back(), Some(3));
//! assert_eq!(iter.next(), Some(2));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//! ```
//!
//! # Cursor Views
//!
//! The [`Cursor`] is a weak, non-owning view into the list. It is created
//! by [`cursor_front`] or [`cursor_back`] and advanced with [`move_next`]
//! and [`move_prev`]. Because a cursor holds no borrow of the list, it can
//! outlive the node it watches; [`is_live`] tells whether the target node
//! still exists.
//!
//! Walking past either end of the list *detaches* the cursor, which is a
//! different state from *expiring*: a detached cursor watches nothing (it
//! compares equal to [`Cursor::default`]), while an expired cursor still
//! remembers which node it watched before the node was destroyed.
//!
//! ## Examples
//!
//! ```
//! use shared_list::{Cursor, List};
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//!
//! let mut cursor = list.cursor_front();
//! assert_eq!(cursor.get(), Some(1));
//!
//! cursor.move_next();
//! assert_eq!(cursor.get(), Some(2));
//!
//! // Weak cursors observe node deallocation.
//! let front = list.cursor_front();
//! assert_eq!(list.pop_front(), Ok(1));
//! assert!(!front.is_live());
//! assert_ne!(front, Cursor::default()); // expired, not detached
//!
//! // Cursors of cloneable elements are iterators.
//! assert_eq!(Vec::from_iter(cursor), vec![2, 3]);
//! ```
//!
//! [`List`]: crate::List
//! [`IntoIter`]: crate::IntoIter
//! [`Cursor`]: crate::Cursor
//! [`Cursor::default`]: crate::Cursor::default
//! [`len`]: crate::List::len
//! [`cursor_front`]: crate::List::cursor_front
//! [`cursor_back`]: crate::List::cursor_back
//! [`move_next`]: crate::Cursor::move_next
//! [`move_prev`]: crate::Cursor::move_prev
//! [`is_live`]: crate::Cursor::is_live

#[doc(inline)]
pub use list::cursor::Cursor;
#[doc(inline)]
pub use list::error::ListError;
#[doc(inline)]
pub use list::iterator::IntoIter;
#[doc(inline)]
pub use list::List;

pub mod list;
