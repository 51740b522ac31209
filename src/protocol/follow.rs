//! Lazy interpretation rules: "di posisi ini ada apa?"
//!
//! `Follow` membaca satu nilai di posisi absolut tanpa menyentuh data lain.
//! `ForwardsUOffset<T>` menambahkan satu indirection (u32 relatif) sebelum membaca `T`.
//! Semua posisi di-bounds-check; buffer rusak menghasilkan `DecodeError`, bukan panic.

use std::marker::PhantomData;

use super::layout::SIZE_UOFFSET;
use crate::core::scalar::{check_range, read_scalar, read_u32};
use crate::error::{DecodeError, DecodeResult};

/// Cara membaca `Self` dari buffer di posisi `pos`.
pub trait Follow<'a> {
    type Inner;

    fn follow(buf: &'a [u8], pos: usize) -> DecodeResult<Self::Inner>;
}

/// Tipe dengan ukuran tetap ketika disimpan inline (elemen vector, struct, uoffset).
pub trait Inline {
    const SIZE: usize;
}

macro_rules! impl_follow_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> Follow<'a> for $ty {
                type Inner = $ty;

                #[inline(always)]
                fn follow(buf: &'a [u8], pos: usize) -> DecodeResult<$ty> {
                    read_scalar::<$ty>(buf, pos)
                }
            }

            impl Inline for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();
            }
        )*
    };
}

impl_follow_scalar!(bool, i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

/// Resolve uoffset di `pos`: `pos + read_u32(pos)`.
///
/// Target harus berada di dalam buffer; offset nol ditolak.
#[inline(always)]
pub fn indirect(buf: &[u8], pos: usize) -> DecodeResult<usize> {
    let relative = read_u32(buf, pos)? as usize;
    if relative == 0 {
        return Err(DecodeError::NullOffset { pos });
    }
    let target = pos
        .checked_add(relative)
        .ok_or(DecodeError::OffsetOverflow { pos })?;
    if target >= buf.len() {
        return Err(DecodeError::OutOfBounds {
            pos: target,
            need: 1,
            len: buf.len(),
        });
    }
    Ok(target)
}

/// Reference maju (u32) ke `T`.
pub struct ForwardsUOffset<T>(PhantomData<T>);

impl<'a, T: Follow<'a>> Follow<'a> for ForwardsUOffset<T> {
    type Inner = T::Inner;

    #[inline(always)]
    fn follow(buf: &'a [u8], pos: usize) -> DecodeResult<T::Inner> {
        let target = indirect(buf, pos)?;
        T::follow(buf, target)
    }
}

impl<T> Inline for ForwardsUOffset<T> {
    const SIZE: usize = SIZE_UOFFSET;
}

/// String: u32 len, bytes, NUL.
impl<'a> Follow<'a> for &'a str {
    type Inner = &'a str;

    fn follow(buf: &'a [u8], pos: usize) -> DecodeResult<&'a str> {
        let bytes = read_string_bytes(buf, pos)?;
        std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8 { pos })
    }
}

/// Byte string tanpa validasi UTF-8.
pub(crate) fn read_string_bytes(buf: &[u8], pos: usize) -> DecodeResult<&[u8]> {
    let len = read_u32(buf, pos)? as usize;
    let start = pos + SIZE_UOFFSET;
    check_range(buf, start, len + 1)?;
    if buf[start + len] != 0 {
        return Err(DecodeError::MissingTerminator { pos });
    }
    Ok(&buf[start..start + len])
}
