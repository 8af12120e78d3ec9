//! Element access for the selection machinery.
//!
//! Everything in this crate addresses elements by index and moves them only by swapping, so a
//! typed slice and an untyped block of fixed-stride bytes can share one implementation.

use crate::error::{Result, SelectError};

/// An indexable, swappable sequence of elements.
///
/// `Elem` is what the caller supplied `leq` gets to see, `T` for slices and the raw bytes of
/// one element for [`RawBlocks`].
pub trait Elements {
    type Elem: ?Sized;

    fn len(&self) -> usize;

    /// Returns the element at `idx`. Panics if `idx >= self.len()`.
    fn elem(&self, idx: usize) -> &Self::Elem;

    /// Exchanges the elements at `a` and `b`. Panics if either is out of bounds.
    fn swap(&mut self, a: usize, b: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Elements for [T] {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn elem(&self, idx: usize) -> &T {
        &self[idx]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

/// `len` elements of `elem_size` bytes each, laid out back to back at the start of `bytes`.
///
/// The element type is unknown, the only thing known about an element is its width. Bytes past
/// `len * elem_size` are never touched.
#[derive(Debug)]
pub struct RawBlocks<'a> {
    bytes: &'a mut [u8],
    elem_size: usize,
    len: usize,
}

impl<'a> RawBlocks<'a> {
    pub fn new(bytes: &'a mut [u8], len: usize, elem_size: usize) -> Result<Self> {
        if elem_size == 0 {
            return Err(SelectError::ZeroElementSize);
        }

        let needed = len
            .checked_mul(elem_size)
            .ok_or(SelectError::SizeOverflow { len, elem_size })?;

        if bytes.len() < needed {
            return Err(SelectError::BufferTooSmall {
                needed,
                actual: bytes.len(),
            });
        }

        Ok(Self {
            bytes: &mut bytes[..needed],
            elem_size,
            len,
        })
    }

    pub fn elem_size(&self) -> usize {
        self.elem_size
    }

    /// Byte offset of element `idx`.
    #[inline]
    pub fn offset(&self, idx: usize) -> usize {
        idx * self.elem_size
    }
}

impl Elements for RawBlocks<'_> {
    type Elem = [u8];

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn elem(&self, idx: usize) -> &[u8] {
        let start = self.offset(idx);
        &self.bytes[start..start + self.elem_size]
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }

        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (lo_start, hi_start) = (self.offset(lo), self.offset(hi));

        // The blocks never overlap, `lo` lives entirely in the head.
        let (head, tail) = self.bytes.split_at_mut(hi_start);
        head[lo_start..lo_start + self.elem_size].swap_with_slice(&mut tail[..self.elem_size]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_blocks_validation() {
        let mut bytes = [0u8; 12];

        assert_eq!(
            RawBlocks::new(&mut bytes, 3, 0).unwrap_err(),
            SelectError::ZeroElementSize
        );
        assert_eq!(
            RawBlocks::new(&mut bytes, 4, 4).unwrap_err(),
            SelectError::BufferTooSmall {
                needed: 16,
                actual: 12
            }
        );
        assert_eq!(
            RawBlocks::new(&mut bytes, usize::MAX, 2).unwrap_err(),
            SelectError::SizeOverflow {
                len: usize::MAX,
                elem_size: 2
            }
        );

        let blocks = RawBlocks::new(&mut bytes, 2, 4).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks.elem_size(), 4);
        assert_eq!(blocks.offset(1), 4);
    }

    #[test]
    fn raw_blocks_swap() {
        let mut bytes = [1u8, 1, 2, 2, 3, 3, 9];
        let mut blocks = RawBlocks::new(&mut bytes, 3, 2).unwrap();

        blocks.swap(2, 0);
        assert_eq!(blocks.elem(0), &[3, 3]);
        assert_eq!(blocks.elem(2), &[1, 1]);

        blocks.swap(1, 1);
        assert_eq!(blocks.elem(1), &[2, 2]);

        blocks.swap(0, 1);
        drop(blocks);

        // The trailing byte is outside the element region.
        assert_eq!(bytes, [2, 2, 3, 3, 1, 1, 9]);
    }

    #[test]
    fn slice_elements() {
        let mut v = [4, 5, 6];
        <[i32] as Elements>::swap(&mut v, 0, 2);
        assert_eq!(*v.elem(0), 6);
        assert_eq!(<[i32] as Elements>::len(&v), 3);
        assert!(!<[i32] as Elements>::is_empty(&v));
    }
}
