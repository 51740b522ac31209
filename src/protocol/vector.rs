//! Lazy vector view: `u32 len` diikuti `len` elemen inline.
//!
//! Elemen dibaca saat diakses; vector of offsets memakai `Vector<ForwardsUOffset<T>>`.

use std::fmt;
use std::marker::PhantomData;

use super::follow::{Follow, Inline};
use super::layout::SIZE_UOFFSET;
use crate::core::scalar::{check_range, read_u32};
use crate::error::{DecodeError, DecodeResult};

pub struct Vector<'a, T> {
    buf: &'a [u8],
    loc: usize,
    len: usize,
    _marker: PhantomData<T>,
}

impl<'a, T> Clone for Vector<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Vector<'a, T> {}

impl<'a, T> fmt::Debug for Vector<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("loc", &self.loc)
            .field("len", &self.len)
            .finish()
    }
}

impl<'a, T: Inline> Vector<'a, T> {
    /// `loc` menunjuk ke prefix panjang. Seluruh elemen harus muat di buffer.
    pub fn new(buf: &'a [u8], loc: usize) -> DecodeResult<Self> {
        let len = read_u32(buf, loc)? as usize;
        let bytes = len
            .checked_mul(T::SIZE)
            .ok_or(DecodeError::OffsetOverflow { pos: loc })?;
        check_range(buf, loc + SIZE_UOFFSET, bytes)?;
        Ok(Self {
            buf,
            loc,
            len,
            _marker: PhantomData,
        })
    }
}

impl<'a, T> Vector<'a, T> {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn loc(&self) -> usize {
        self.loc
    }
}

impl<'a, T: Follow<'a> + Inline> Vector<'a, T> {
    /// Elemen ke-`index`.
    pub fn get(&self, index: usize) -> DecodeResult<T::Inner> {
        if index >= self.len {
            return Err(DecodeError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        T::follow(self.buf, self.loc + SIZE_UOFFSET + index * T::SIZE)
    }

    pub fn iter(&self) -> VectorIter<'a, T> {
        VectorIter {
            vector: *self,
            index: 0,
        }
    }
}

impl<'a> Vector<'a, u8> {
    /// Raw bytes tanpa copy.
    pub fn bytes(&self) -> &'a [u8] {
        let start = self.loc + SIZE_UOFFSET;
        &self.buf[start..start + self.len]
    }
}

impl<'a, T: Inline + 'a> Follow<'a> for Vector<'a, T> {
    type Inner = Vector<'a, T>;

    #[inline]
    fn follow(buf: &'a [u8], pos: usize) -> DecodeResult<Vector<'a, T>> {
        Vector::new(buf, pos)
    }
}

/// Iterator elemen. Elemen rusak di-yield sebagai `Err`.
pub struct VectorIter<'a, T> {
    vector: Vector<'a, T>,
    index: usize,
}

impl<'a, T: Follow<'a> + Inline> Iterator for VectorIter<'a, T> {
    type Item = DecodeResult<T::Inner>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.vector.len {
            return None;
        }
        let item = self.vector.get(self.index);
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vector.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, T: Follow<'a> + Inline> ExactSizeIterator for VectorIter<'a, T> {}
