use std::fmt::{self, Debug, Formatter};
use std::rc::{Rc, Weak};

use crate::list::{StrongLink, WeakLink};

/// A weak, non-owning cursor over a [`List`].
///
/// The cursor watches a single node through a weak reference. It holds no
/// borrow of the list, so the list stays fully usable while cursors exist
/// and a cursor may outlive the node it watches. Because of this, every
/// access is guarded: [`with`], [`with_mut`] and [`get`] return `None` once
/// the node is gone.
///
/// A cursor is in one of three states:
/// - **live**: the watched node still exists;
/// - **expired**: the watched node has been destroyed while the cursor
///   still pointed at it;
/// - **detached**: the cursor watches nothing. This is the end-of-sequence
///   state, produced by [`Cursor::default`], by [`cursor_front`] on an
///   empty list, or by moving past either end of the list.
///
/// Expired and detached are distinct: an expired cursor keeps the identity
/// of its dead node and never compares equal to a detached one, so
/// "invalidated by deletion" is never mistaken for "normally reached the
/// end".
///
/// # Examples
///
/// ```
/// use shared_list::{Cursor, List};
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2]);
///
/// let mut cursor = list.cursor_front();
/// let front = cursor.clone();
/// cursor.move_next();
/// assert_eq!(cursor.get(), Some(2));
///
/// assert_eq!(list.pop_front(), Ok(1));
/// assert!(!front.is_live()); // expired
/// assert!(cursor.is_live()); // unaffected
///
/// cursor.move_next(); // past the back of the list
/// assert_eq!(cursor, Cursor::default());
/// ```
///
/// [`List`]: crate::List
/// [`with`]: Cursor::with
/// [`with_mut`]: Cursor::with_mut
/// [`get`]: Cursor::get
/// [`cursor_front`]: crate::List::cursor_front
pub struct Cursor<T> {
    target: WeakLink<T>,
}

impl<T> Cursor<T> {
    pub(crate) fn new(node: Option<&StrongLink<T>>) -> Self {
        let target = node.map(Rc::downgrade).unwrap_or_default();
        Self { target }
    }

    /// Returns `true` if the watched node still exists.
    ///
    /// This is the "not at the end, not invalidated" test: it is `false`
    /// both for a detached cursor and for an expired one.
    pub fn is_live(&self) -> bool {
        self.target.strong_count() > 0
    }

    /// Moves the cursor to the next node, following the strong forward
    /// link and re-wrapping it weakly.
    ///
    /// Moving off the back of the list, or off an expired node, detaches
    /// the cursor.
    pub fn move_next(&mut self) {
        self.target = match self.target.upgrade() {
            Some(node) => node
                .borrow()
                .next
                .as_ref()
                .map(Rc::downgrade)
                .unwrap_or_default(),
            None => Weak::new(),
        };
    }

    /// Moves the cursor to the previous node, following the weak backward
    /// link.
    ///
    /// Moving off the front of the list, or off an expired node, detaches
    /// the cursor.
    pub fn move_prev(&mut self) {
        self.target = match self.target.upgrade() {
            Some(node) => node.borrow().prev.clone(),
            None => Weak::new(),
        };
    }

    /// Calls `f` with a borrow of the watched value, or returns `None` if
    /// the node is gone.
    ///
    /// # Panics
    ///
    /// The node is borrowed for the duration of the call, so this panics
    /// if its value is already mutably borrowed, e.g. through
    /// [`List::front_mut`]/[`List::back_mut`] or a nested [`with_mut`] on
    /// a cursor watching the same node. Removing the watched node from the
    /// list inside `f` also panics, since the cursor is pinning it.
    ///
    /// [`List::front_mut`]: crate::List::front_mut
    /// [`List::back_mut`]: crate::List::back_mut
    /// [`with_mut`]: Cursor::with_mut
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let node = self.target.upgrade()?;
        let node = node.borrow();
        Some(f(&node.value))
    }

    /// Calls `f` with a mutable borrow of the watched value, or returns
    /// `None` if the node is gone.
    ///
    /// # Panics
    ///
    /// The node is borrowed mutably for the duration of the call, so this
    /// panics if its value is borrowed at all at that point, e.g. through
    /// [`List::front`]/[`List::back`] or a nested cursor access to the
    /// same node. Removing the watched node from the list inside `f` also
    /// panics, since the cursor is pinning it.
    ///
    /// [`List::front`]: crate::List::front
    /// [`List::back`]: crate::List::back
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_front();
    /// assert_eq!(cursor.with_mut(|value| *value = 10), Some(()));
    /// assert_eq!(list, List::from_iter([10, 2, 3]));
    /// ```
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let node = self.target.upgrade()?;
        let mut node = node.borrow_mut();
        Some(f(&mut node.value))
    }

    /// Returns a clone of the watched value, or `None` if the node is
    /// gone.
    pub fn get(&self) -> Option<T>
    where
        T: Clone,
    {
        self.with(T::clone)
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
        }
    }
}

/// The default cursor is detached, watching nothing. It represents the
/// end of any sequence.
impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Self {
            target: Weak::new(),
        }
    }
}

/// Two cursors are equal iff they watch the same node, or both watch no
/// node at all. An expired cursor keeps its node's identity, so it is
/// *not* equal to a detached cursor.
impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.target.ptr_eq(&other.target)
    }
}

impl<T> Eq for Cursor<T> {}

impl<T: Debug> Debug for Cursor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.target.upgrade() {
            Some(node) => {
                let node = node.borrow();
                f.debug_tuple("Cursor").field(&node.value).finish()
            }
            None => f.debug_tuple("Cursor").field(&format_args!("<dead>")).finish(),
        }
    }
}

/// A cursor over cloneable elements can be used as an iterator: it yields
/// the watched value and advances, ending as soon as it goes dead.
impl<T: Clone> Iterator for Cursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.get()?;
        self.move_next();
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use crate::Cursor;
    use std::iter::FromIterator;

    #[test]
    fn cursor_traversal() {
        let list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_front();
        for expected in 1..=3 {
            assert!(cursor.is_live());
            assert_eq!(cursor.get(), Some(expected));
            cursor.move_next();
        }
        assert!(!cursor.is_live());
        assert_eq!(cursor, Cursor::default());

        let mut cursor = list.cursor_back();
        for expected in (1..=3).rev() {
            assert_eq!(cursor.get(), Some(expected));
            cursor.move_prev();
        }
        assert_eq!(cursor, Cursor::default());
    }

    #[test]
    fn cursor_on_empty_list_is_detached() {
        let list = List::<i32>::new();
        assert_eq!(list.cursor_front(), Cursor::default());
        assert_eq!(list.cursor_back(), Cursor::default());
        assert_eq!(list.cursor_front().get(), None);
    }

    #[test]
    fn cursor_expires_when_node_is_removed() {
        let mut list = List::from_iter([1, 2, 3]);
        let front = list.cursor_front();
        let second = {
            let mut cursor = list.cursor_front();
            cursor.move_next();
            cursor
        };

        assert_eq!(list.pop_front(), Ok(1));
        assert!(!front.is_live());
        assert_eq!(front.get(), None);
        // The rest of the chain is untouched.
        assert!(second.is_live());
        assert_eq!(second.get(), Some(2));
    }

    #[test]
    fn cursor_expired_is_not_detached() {
        let mut list = List::from_iter([1]);
        let expired = list.cursor_front();
        list.pop_front().unwrap();

        let detached = Cursor::<i32>::default();
        assert!(!expired.is_live());
        assert!(!detached.is_live());
        assert_ne!(expired, detached);
        assert_eq!(detached, Cursor::default());
    }

    #[test]
    fn cursor_identity_equality() {
        let list = List::from_iter([1, 2]);
        assert_eq!(list.cursor_front(), list.cursor_front());
        assert_ne!(list.cursor_front(), list.cursor_back());

        let mut cursor = list.cursor_front();
        cursor.move_next();
        assert_eq!(cursor, list.cursor_back());

        // Same value, different node, different list.
        let other = List::from_iter([1, 2]);
        assert_ne!(list.cursor_front(), other.cursor_front());
    }

    #[test]
    fn cursor_does_not_keep_nodes_alive() {
        let list = List::from_iter([1, 2, 3]);
        let cursors: Vec<_> = {
            let mut cursor = list.cursor_front();
            let mut all = Vec::new();
            while cursor.is_live() {
                all.push(cursor.clone());
                cursor.move_next();
            }
            all
        };
        assert_eq!(cursors.len(), 3);

        drop(list);
        assert!(cursors.iter().all(|cursor| !cursor.is_live()));
    }

    #[test]
    fn cursor_mutates_through_with_mut() {
        let list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_front();
        while cursor.is_live() {
            cursor.with_mut(|value| *value *= 2);
            cursor.move_next();
        }
        assert_eq!(list, List::from_iter([2, 4, 6]));
    }

    #[test]
    #[should_panic(expected = "already borrowed")]
    fn cursor_with_mut_conflicts_with_held_borrow() {
        let list = List::from_iter([1]);
        let cursor = list.cursor_front();
        let front = list.front();
        assert_eq!(front.as_deref(), Some(&1));
        // `front` still holds a borrow of the node's value.
        cursor.with_mut(|value| *value = 2);
    }

    #[test]
    fn cursor_as_iterator() {
        let list = List::from_iter([1, 2, 3]);
        assert_eq!(Vec::from_iter(list.cursor_front()), vec![1, 2, 3]);

        let mut iter = list.cursor_front();
        iter.next();
        assert_eq!(Vec::from_iter(iter), vec![2, 3]);
    }
}
