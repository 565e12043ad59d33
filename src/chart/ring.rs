use std::collections::vec_deque;
use std::collections::VecDeque;
use std::num::NonZeroUsize;
use crate::chart::ChartError;
/// Fixed-capacity ring that overwrites its oldest element once full.
///
/// The capacity is chosen at construction and never changes; a different
/// window size means building a new buffer and dropping the old history.
#[derive(Clone, Debug)]
pub struct CircularBuffer<T> {
    items: VecDeque<T>,
    capacity: NonZeroUsize,
}
impl<T> CircularBuffer<T> {
    pub fn new(capacity: usize) -> Result<Self, ChartError> {
        let capacity =
            NonZeroUsize::new(capacity).ok_or(ChartError::InvalidCapacity { capacity })?;
        Ok(Self::with_capacity(capacity))
    }
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }
    /// Appends `value`, evicting the oldest element when the buffer is full.
    pub fn append(&mut self, value: T) {
        if self.items.len() == self.capacity.get() {
            self.items.pop_front();
        }
        self.items.push_back(value);
    }
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity.get()
    }
    /// Oldest retained element.
    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }
    /// Newest element.
    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }
    /// Element `index` positions after the oldest one.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }
    /// Walks the window from oldest to newest. Each call starts a fresh walk.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.items.iter(),
        }
    }
}
impl<T: Clone> CircularBuffer<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}
/// Borrowing iterator over a [`CircularBuffer`], oldest first.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: vec_deque::Iter<'a, T>,
}
impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<'a, T> IntoIterator for &'a CircularBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn zero_capacity_is_rejected() {
        let err = CircularBuffer::<f32>::new(0).unwrap_err();
        assert!(matches!(err, ChartError::InvalidCapacity { capacity: 0 }));
    }
    #[test]
    fn fills_without_eviction_up_to_capacity() {
        let mut buffer = CircularBuffer::new(4).unwrap();
        for v in [1, 2, 3] {
            buffer.append(v);
        }
        assert_eq!(buffer.len(), 3);
        assert!(!buffer.is_full());
        assert_eq!(buffer.to_vec(), vec![1, 2, 3]);
        assert_eq!(buffer.first(), Some(&1));
        assert_eq!(buffer.last(), Some(&3));
    }
    #[test]
    fn overwrites_oldest_once_full() {
        for capacity in 1..=6 {
            let mut buffer = CircularBuffer::new(capacity).unwrap();
            for v in 0..20 {
                buffer.append(v);
            }
            assert_eq!(buffer.len(), capacity);
            let expected: Vec<i32> = (20 - capacity as i32..20).collect();
            assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), expected);
        }
    }
    #[test]
    fn empty_buffer_has_no_ends() {
        let buffer = CircularBuffer::<f32>::new(3).unwrap();
        assert!(buffer.first().is_none());
        assert!(buffer.last().is_none());
        assert_eq!(buffer.iter().count(), 0);
    }
    #[test]
    fn iteration_is_restartable() {
        let mut buffer = CircularBuffer::new(2).unwrap();
        buffer.append('a');
        buffer.append('b');
        buffer.append('c');
        let walk = buffer.iter();
        let first_pass: String = walk.clone().collect();
        let second_pass: String = walk.collect();
        assert_eq!(first_pass, "bc");
        assert_eq!(second_pass, "bc");
        assert_eq!(buffer.iter().rev().copied().collect::<String>(), "cb");
        assert_eq!(buffer.iter().len(), 2);
    }
}
