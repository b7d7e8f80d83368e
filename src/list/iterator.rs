use std::fmt;
use std::iter::{FromIterator, FusedIterator};

use crate::list::List;

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// It is double-ended: the front end pops from the head of the list, the
/// back end pops from the tail.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back().ok()
    }
}

#[cfg(feature = "length")]
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn test_into_iter() {
        let mut iter = List::from_iter(0..5).into_iter();
        #[cfg(feature = "length")]
        assert_eq!(iter.len(), 5);

        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(4));
        #[cfg(feature = "length")]
        assert_eq!(iter.len(), 3);

        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), Some(3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None); // Fused
        #[cfg(feature = "length")]
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_into_iter_collects_in_order() {
        let list = List::from_iter([1, 2, 3]);
        assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);

        let list = List::from_iter(0..10);
        assert_eq!(
            Vec::from_iter(list.into_iter().rev()),
            Vec::from_iter((0..10).rev())
        );
    }

    #[test]
    fn test_extend() {
        let mut list = List::from_iter(0..3);
        list.extend(3..5);
        assert_eq!(list, List::from_iter(0..5));

        // The `Copy` convenience impl.
        let more = [5, 6];
        list.extend(more.iter());
        assert_eq!(list, List::from_iter(0..7));
    }
}
