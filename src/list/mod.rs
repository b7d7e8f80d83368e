use std::cell::{Ref, RefCell, RefMut};
use std::fmt::{Debug, Formatter};
use std::rc::{Rc, Weak};

use crate::list::cursor::Cursor;
use crate::list::error::ListError;

pub mod cursor;
pub mod error;
pub mod iterator;

/// A strong link owns the node it points to.
pub(crate) type StrongLink<T> = Rc<RefCell<Node<T>>>;
/// A weak link observes a node without keeping it alive.
pub(crate) type WeakLink<T> = Weak<RefCell<Node<T>>>;

/// The `List` is a doubly-linked list whose forward links own their nodes
/// and whose backward links only observe them. It allows inserting and
/// removing elements at both ends in *O*(1) time, and at any given position
/// in *O*(*n*) time.
///
/// The `List` contains:
/// - a strong reference `head` that owns the first node;
/// - a strong reference `tail` to the last node;
/// - a length field `len` counting the elements. It can be disabled by
///   disabling the `length` feature in your `Cargo.toml`:
/// ```text
/// [dependencies]
/// shared_list = { default-features = false }
/// ```
///
/// # Ownership Conventions
///
/// - the list is the sole root of ownership: a node is owned by its unique
///   predecessor's `next` link, or by `head` if it is the first node. The
///   `tail` reference is the one exception, keeping the last node reachable
///   in *O*(1);
/// - `prev` links and cursors are weak and never extend a node's lifetime.
pub struct List<T> {
    head: Option<StrongLink<T>>,
    tail: Option<StrongLink<T>>,
    #[cfg(feature = "length")]
    /// the length of the list
    pub(crate) len: usize,
}

pub(crate) struct Node<T> {
    pub(crate) next: Option<StrongLink<T>>,
    pub(crate) prev: WeakLink<T>,
    pub(crate) value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> StrongLink<T> {
        Rc::new(RefCell::new(Node {
            next: None,
            prev: Weak::new(),
            value,
        }))
    }

    /// Reclaim the value of a node that has been unlinked from every strong
    /// link of the list.
    ///
    /// Cursors and `prev` links are weak, so an unlinked node normally has
    /// exactly one strong reference left: the one passed in. The exception
    /// is a [`Cursor::with`]/[`Cursor::with_mut`] call pinning the node for
    /// the duration of its closure; unlinking the node from inside that
    /// closure panics here.
    fn into_value(node: StrongLink<T>) -> T {
        match Rc::try_unwrap(node) {
            Ok(cell) => cell.into_inner().value,
            Err(_) => panic!("cannot remove a node while a cursor is accessing it"),
        }
    }
}

// private methods
impl<T> List<T> {
    /// Walk the strong chain from the head, returning the node at position
    /// `at`, or `None` if the chain is shorter than that.
    fn node_at(&self, at: usize) -> Option<StrongLink<T>> {
        let mut node = self.head.clone()?;
        for _ in 0..at {
            let next = node.borrow().next.clone()?;
            node = next;
        }
        Some(node)
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use shared_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            #[cfg(feature = "length")]
            len: 0,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_back(1);
    /// assert!(!list.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements in the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time with the `length`
    /// feature enabled, and in *O*(*n*) time otherwise, by walking the
    /// strong chain and counting the nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.len(), 0);
    ///
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[cfg(feature = "length")]
    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(not(feature = "length"))]
    pub fn len(&self) -> usize {
        let mut len = 0;
        let mut node = self.head.clone();
        while let Some(current) = node {
            len += 1;
            node = current.borrow().next.clone();
        }
        len
    }

    /// Removes all elements from the `List`.
    ///
    /// Nodes are released one by one; dropping the whole chain through the
    /// owning `next` links at once would recurse once per node. Like
    /// [`pop_front`], this panics if a cursor is accessing one of the
    /// removed nodes at the time of the call.
    ///
    /// [`pop_front`]: List::pop_front
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list, List::new());
    /// ```
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Provides a borrow of the front element, or `None` if the list is
    /// empty.
    pub fn front(&self) -> Option<Ref<'_, T>> {
        self.head
            .as_ref()
            .map(|node| Ref::map(node.borrow(), |node| &node.value))
    }

    /// Provides a borrow of the back element, or `None` if the list is
    /// empty.
    pub fn back(&self) -> Option<Ref<'_, T>> {
        self.tail
            .as_ref()
            .map(|node| Ref::map(node.borrow(), |node| &node.value))
    }

    /// Provides a mutable borrow of the front element, or `None` if the
    /// list is empty.
    pub fn front_mut(&mut self) -> Option<RefMut<'_, T>> {
        self.head
            .as_ref()
            .map(|node| RefMut::map(node.borrow_mut(), |node| &mut node.value))
    }

    /// Provides a mutable borrow of the back element, or `None` if the list
    /// is empty.
    pub fn back_mut(&mut self) -> Option<RefMut<'_, T>> {
        self.tail
            .as_ref()
            .map(|node| RefMut::map(node.borrow_mut(), |node| &mut node.value))
    }

    /// Inserts an element at the front of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front().as_deref(), Some(&1));
    /// ```
    pub fn push_front(&mut self, value: T) {
        let node = Node::new(value);
        match self.head.take() {
            Some(head) => {
                head.borrow_mut().prev = Rc::downgrade(&node);
                node.borrow_mut().next = Some(head);
            }
            None => self.tail = Some(Rc::clone(&node)),
        }
        self.head = Some(node);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Inserts an element at the back of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.back().as_deref(), Some(&2));
    /// ```
    pub fn push_back(&mut self, value: T) {
        let node = Node::new(value);
        match self.tail.take() {
            Some(tail) => {
                node.borrow_mut().prev = Rc::downgrade(&tail);
                tail.borrow_mut().next = Some(Rc::clone(&node));
            }
            None => self.head = Some(Rc::clone(&node)),
        }
        self.tail = Some(node);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Removes the front element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    ///
    /// # Panics
    ///
    /// Panics if called from inside a [`Cursor::with`] or
    /// [`Cursor::with_mut`] closure that is accessing the node being
    /// removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Ok(2));
    /// assert_eq!(list.pop_front(), Err(ListError::EmptyList));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        let head = self.head.take().ok_or(ListError::EmptyList)?;
        match head.borrow_mut().next.take() {
            Some(next) => {
                next.borrow_mut().prev = Weak::new();
                self.head = Some(next);
            }
            None => self.tail = None,
        }
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Ok(Node::into_value(head))
    }

    /// Removes the back element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    ///
    /// # Panics
    ///
    /// Panics if called from inside a [`Cursor::with`] or
    /// [`Cursor::with_mut`] closure that is accessing the node being
    /// removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.pop_back(), Ok(2));
    /// assert_eq!(list.pop_back(), Ok(1));
    /// assert_eq!(list.pop_back(), Err(ListError::EmptyList));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        let tail = self.tail.take().ok_or(ListError::EmptyList)?;
        match tail.borrow().prev.upgrade() {
            Some(prev) => {
                prev.borrow_mut().next = None;
                self.tail = Some(prev);
            }
            None => self.head = None,
        }
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Ok(Node::into_value(tail))
    }

    /// Inserts an element at position `at`.
    ///
    /// `insert(0, value)` is equivalent to [`push_front`], and
    /// `insert(len, value)` is equivalent to [`push_back`]; inserting at
    /// any position in between splices a new node before the node currently
    /// at that position.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `at > len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`at`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_list::{List, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.insert(1, 10)?;
    /// assert_eq!(list, List::from_iter([1, 10, 2, 3]));
    ///
    /// assert_eq!(
    ///     list.insert(9, 11),
    ///     Err(ListError::OutOfRange { index: 9, len: 4 }),
    /// );
    /// # Ok::<(), ListError>(())
    /// ```
    ///
    /// [`push_front`]: List::push_front
    /// [`push_back`]: List::push_back
    pub fn insert(&mut self, at: usize, value: T) -> Result<(), ListError> {
        if at == 0 {
            self.push_front(value);
            return Ok(());
        }
        let len = self.len();
        if at == len {
            self.push_back(value);
            return Ok(());
        }
        if at > len {
            return Err(ListError::OutOfRange { index: at, len });
        }
        // 1 <= at < len, so the node at `at` and its predecessor both exist.
        let out_of_range = ListError::OutOfRange { index: at, len };
        let prev = self.node_at(at - 1).ok_or(out_of_range)?;
        let next = prev.borrow().next.clone().ok_or(out_of_range)?;

        let node = Rc::new(RefCell::new(Node {
            next: Some(Rc::clone(&next)),
            prev: Rc::downgrade(&prev),
            value,
        }));
        prev.borrow_mut().next = Some(Rc::clone(&node));
        next.borrow_mut().prev = Rc::downgrade(&node);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
        Ok(())
    }

    /// Removes the element at position `at` and returns it.
    ///
    /// `remove(0)` is equivalent to [`pop_front`] (and therefore reports
    /// [`ListError::EmptyList`] on an empty list), and `remove(len - 1)` is
    /// equivalent to [`pop_back`]; removing at any position in between
    /// splices the node out by linking its neighbours to each other.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfRange`] if `at >= len`.
    ///
    /// # Panics
    ///
    /// Panics if called from inside a [`Cursor::with`] or
    /// [`Cursor::with_mut`] closure that is accessing the node being
    /// removed.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`at`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_list::{List, ListError};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list, List::from_iter([1, 3]));
    ///
    /// assert_eq!(
    ///     list.remove(5),
    ///     Err(ListError::OutOfRange { index: 5, len: 2 }),
    /// );
    /// ```
    ///
    /// [`pop_front`]: List::pop_front
    /// [`pop_back`]: List::pop_back
    pub fn remove(&mut self, at: usize) -> Result<T, ListError> {
        if at == 0 {
            return self.pop_front();
        }
        let len = self.len();
        if len > 0 && at == len - 1 {
            return self.pop_back();
        }
        if at >= len {
            return Err(ListError::OutOfRange { index: at, len });
        }
        // 1 <= at < len - 1, so the node at `at` has live neighbours on
        // both sides.
        let out_of_range = ListError::OutOfRange { index: at, len };
        let node = self.node_at(at).ok_or(out_of_range)?;
        let next = node.borrow_mut().next.take().ok_or(out_of_range)?;
        let prev = node.borrow().prev.upgrade().ok_or(out_of_range)?;

        prev.borrow_mut().next = Some(Rc::clone(&next));
        next.borrow_mut().prev = Rc::downgrade(&prev);
        node.borrow_mut().prev = Weak::new();
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Ok(Node::into_value(node))
    }

    /// Provides a cursor watching the front node of the list.
    ///
    /// On an empty list the cursor is detached.
    ///
    /// # Examples
    ///
    /// ```
    /// use shared_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_front();
    /// assert_eq!(cursor.get(), Some(1));
    /// cursor.move_next();
    /// assert_eq!(cursor.get(), Some(2));
    /// ```
    pub fn cursor_front(&self) -> Cursor<T> {
        Cursor::new(self.head.as_ref())
    }

    /// Provides a cursor watching the back node of the list.
    ///
    /// On an empty list the cursor is detached.
    pub fn cursor_back(&self) -> Cursor<T> {
        Cursor::new(self.tail.as_ref())
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: every value is cloned into a freshly built chain, and no node
/// is ever shared between the original and the copy.
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let mut list = Self::new();
        let mut node = self.head.clone();
        while let Some(current) = node {
            let current = current.borrow();
            list.push_back(current.value.clone());
            node = current.next.clone();
        }
        list
    }
}

/// Two lists are equal iff their lengths match and every value compares
/// equal pairwise in traversal order.
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        #[cfg(feature = "length")]
        {
            if self.len != other.len {
                return false;
            }
        }
        let mut a = self.head.clone();
        let mut b = other.head.clone();
        loop {
            match (a, b) {
                (None, None) => return true,
                (Some(x), Some(y)) => {
                    if x.borrow().value != y.borrow().value {
                        return false;
                    }
                    a = x.borrow().next.clone();
                    b = y.borrow().next.clone();
                }
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        let mut node = self.head.clone();
        while let Some(current) = node {
            list.entry(&current.borrow().value);
            node = current.borrow().next.clone();
        }
        list.finish()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
