/*!
# CSR-based Sliced Buffers

This module provides a **Compressed Sparse Row (CSR)**-like data structure for storing
variable-length slices efficiently. It backs every adjacency list of the
[`AlgorithmGraph`](crate::repr::AlgorithmGraph).

The key idea:

- A contiguous `buffer: Vec<T>` stores all elements.
- A non-decreasing `offsets: Vec<usize>` stores slice boundaries, where slice `i` is `buffer[offsets[i]..offsets[i+1]]`.

### Invariants
All constructions verify the following invariants:

1. `offsets.len() >= 1`
2. `offsets` is non-decreasing
3. `offsets[0] == 0` and the last offset equals `buffer.len()`
*/

use std::ops::Index;

use crate::node::Node;

/// CSR-like structure storing slices of elements.
///
/// - `buffer`: all elements contiguously
/// - `offsets`: start indices of each slice, followed by `buffer.len()`
#[derive(Debug, Clone, PartialEq)]
pub struct SlicedBuffer<T> {
    buffer: Vec<T>,
    offsets: Vec<usize>,
}

impl<T> Default for SlicedBuffer<T> {
    fn default() -> Self {
        Self {
            buffer: Vec::new(),
            offsets: vec![0],
        }
    }
}

impl<T> SlicedBuffer<T> {
    /// Constructs a new `SlicedBuffer`.
    ///
    /// # Panics
    /// Panics if:
    /// - `offsets` is empty or does not start at `0`
    /// - `offsets` is not sorted
    /// - the last offset is not `buffer.len()`
    ///
    /// # Examples
    /// ```
    /// use lgraphs::utils::sliced_buffer::SlicedBuffer;
    ///
    /// let sb = SlicedBuffer::new(vec![1u32, 2, 4, 5, 6, 7, 8], vec![0, 2, 4, 7]);
    /// assert_eq!(sb.len(), 3);
    /// assert_eq!(&sb[2], &[6, 7, 8]);
    /// ```
    pub fn new(buffer: Vec<T>, offsets: Vec<usize>) -> Self {
        assert_eq!(offsets.first(), Some(&0));
        assert!(offsets.is_sorted());
        assert_eq!(offsets.last(), Some(&buffer.len()));

        Self { buffer, offsets }
    }

    /// Builds a buffer with `n` slices from `(slice, value)` pairs.
    ///
    /// Entries keep their relative input order within every slice
    /// (stable counting sort).
    ///
    /// # Panics
    /// Panics if a slice index is `>= n`.
    pub fn from_pairs<P>(n: usize, pairs: P) -> Self
    where
        P: IntoIterator<Item = (Node, T)>,
        P::IntoIter: Clone,
    {
        let pairs = pairs.into_iter();

        let mut offsets = vec![0usize; n + 1];
        for (u, _) in pairs.clone() {
            offsets[u as usize + 1] += 1;
        }
        for i in 1..=n {
            offsets[i] += offsets[i - 1];
        }

        let mut slots: Vec<Option<T>> = Vec::with_capacity(offsets[n]);
        slots.resize_with(offsets[n], || None);
        let mut cursor = offsets.clone();
        for (u, value) in pairs {
            slots[cursor[u as usize]] = Some(value);
            cursor[u as usize] += 1;
        }

        Self {
            buffer: slots.into_iter().flatten().collect(),
            offsets,
        }
    }

    /// Returns the number of slices.
    #[allow(clippy::len_without_is_empty)]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns the total number of entries in the buffer.
    #[inline(always)]
    pub fn number_of_entries(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the length of slice `u`.
    #[inline(always)]
    pub fn size_of(&self, u: Node) -> usize {
        let u = u as usize;
        self.offsets[u + 1] - self.offsets[u]
    }

    /// Returns a reference to the complete buffer.
    #[inline(always)]
    pub fn raw_buffer_slice(&self) -> &[T] {
        &self.buffer
    }

    /// Returns an iterator over all slices in order.
    pub fn slices(&self) -> impl Iterator<Item = &[T]> + Clone + '_ {
        self.offsets
            .windows(2)
            .map(|w| &self.buffer[w[0]..w[1]])
    }
}

impl SlicedBuffer<Node> {
    /// Interprets slice `u` as the out-list of `u` and returns the buffer of in-lists.
    /// Runs in one linear pass over all entries.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::utils::sliced_buffer::SlicedBuffer;
    ///
    /// // 0 -> 1, 0 -> 2, 1 -> 2
    /// let out = SlicedBuffer::new(vec![1u32, 2, 2], vec![0, 2, 3, 3]);
    /// let inc = out.transposed();
    /// assert_eq!(&inc[2], &[0, 1]);
    /// assert!(inc[0].is_empty());
    /// ```
    pub fn transposed(&self) -> Self {
        let n = self.len();
        Self::from_pairs(
            n,
            self.slices()
                .enumerate()
                .flat_map(|(u, vs)| vs.iter().map(move |&v| (v, u as Node))),
        )
    }
}

impl<T> Index<Node> for SlicedBuffer<T> {
    type Output = [T];

    #[inline(always)]
    fn index(&self, idx: Node) -> &Self::Output {
        let idx = idx as usize;
        &self.buffer[self.offsets[idx]..self.offsets[idx + 1]]
    }
}
