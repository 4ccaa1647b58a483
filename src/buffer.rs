//! Growable primitive buffers for typed-array decoding.
//!
//! While a `[B;`, `[I;` or `[L;` literal is being read its final length is
//! unknown, so elements are collected in a [`GrowableBuffer`] specialised for
//! the primitive width and frozen into the tag's boxed slice once the closing
//! bracket is seen. Capacity grows by half its current size on exhaustion,
//! giving amortised O(1) pushes without boxing individual elements.

const DEFAULT_CAPACITY: usize = 10;

/// A 1.5x-growing buffer of `Copy` primitives.
#[derive(Debug, Clone)]
pub(crate) struct GrowableBuffer<T> {
    data: Vec<T>,
}

pub(crate) type ByteBuffer = GrowableBuffer<i8>;
pub(crate) type IntBuffer = GrowableBuffer<i32>;
pub(crate) type LongBuffer = GrowableBuffer<i64>;

impl<T: Copy> GrowableBuffer<T> {
    pub(crate) fn new() -> Self {
        GrowableBuffer {
            data: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    pub(crate) fn push(&mut self, value: T) {
        if self.data.len() == self.data.capacity() {
            let grow_by = (self.data.capacity() >> 1).max(1);
            self.data.reserve_exact(grow_by);
        }
        self.data.push(value);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Freezes the collected elements into an exactly-sized slice.
    pub(crate) fn into_boxed_slice(self) -> Box<[T]> {
        self.data.into_boxed_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_default_capacity() {
        let buffer = IntBuffer::new();
        assert_eq!(buffer.len(), 0);
        assert!(buffer.capacity() >= DEFAULT_CAPACITY);
    }

    #[test]
    fn test_grows_past_initial_capacity() {
        let mut buffer = LongBuffer::new();
        for i in 0..1000 {
            buffer.push(i);
        }
        assert_eq!(buffer.len(), 1000);
        assert!(buffer.capacity() >= 1000);
        let values = buffer.into_boxed_slice();
        assert_eq!(values.len(), 1000);
        assert_eq!(values[999], 999);
    }

    #[test]
    fn test_growth_is_geometric() {
        let mut buffer = ByteBuffer::new();
        let start = buffer.capacity();
        for i in 0..=start {
            buffer.push(i as i8);
        }
        assert!(buffer.capacity() >= start + start / 2);
    }

    #[test]
    fn test_freeze_is_exact() {
        let mut buffer = ByteBuffer::new();
        buffer.push(1);
        buffer.push(-1);
        assert_eq!(&*buffer.into_boxed_slice(), &[1, -1]);
    }
}
