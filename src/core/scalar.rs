//! Fixed-width little-endian scalar codec
//!
//! Setiap primitive punya lebar tetap dan alignment natural yang sama dengan lebarnya.
//! Read/write selalu lewat `from_le_bytes`/`to_le_bytes`, jadi buffer tidak perlu aligned
//! di memory host (aman dipakai di atas mmap region maupun `Vec<u8>` biasa).

use crate::error::{DecodeError, DecodeResult};

/// Primitive yang bisa disimpan langsung di buffer.
pub trait Scalar: Copy + PartialEq + Sized {
    /// Lebar dalam bytes, juga alignment natural.
    const WIDTH: usize;

    /// Tulis little-endian ke `dst[..WIDTH]`.
    fn write_le(self, dst: &mut [u8]);

    /// Baca little-endian dari `src[..WIDTH]`.
    fn read_le(src: &[u8]) -> Self;
}

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                #[inline(always)]
                fn write_le(self, dst: &mut [u8]) {
                    dst[..Self::WIDTH].copy_from_slice(&self.to_le_bytes());
                }

                #[inline(always)]
                fn read_le(src: &[u8]) -> Self {
                    let mut bytes = [0u8; std::mem::size_of::<$ty>()];
                    bytes.copy_from_slice(&src[..Self::WIDTH]);
                    <$ty>::from_le_bytes(bytes)
                }
            }
        )*
    };
}

impl_scalar!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl Scalar for bool {
    const WIDTH: usize = 1;

    #[inline(always)]
    fn write_le(self, dst: &mut [u8]) {
        dst[0] = self as u8;
    }

    #[inline(always)]
    fn read_le(src: &[u8]) -> Self {
        src[0] != 0
    }
}

/// Bounds check untuk `need` bytes di `pos`.
#[inline(always)]
pub fn check_range(buf: &[u8], pos: usize, need: usize) -> DecodeResult<()> {
    match pos.checked_add(need) {
        Some(end) if end <= buf.len() => Ok(()),
        Some(_) => Err(DecodeError::OutOfBounds {
            pos,
            need,
            len: buf.len(),
        }),
        None => Err(DecodeError::OffsetOverflow { pos }),
    }
}

/// Baca scalar di posisi absolut (bounds-checked).
#[inline(always)]
pub fn read_scalar<T: Scalar>(buf: &[u8], pos: usize) -> DecodeResult<T> {
    check_range(buf, pos, T::WIDTH)?;
    Ok(T::read_le(&buf[pos..]))
}

/// Overwrite scalar di posisi absolut (bounds-checked).
///
/// Caller harus sudah me-resolve slot vtable: posisi ini harus berisi scalar dengan lebar sama.
#[inline(always)]
pub fn write_scalar<T: Scalar>(buf: &mut [u8], pos: usize, value: T) -> DecodeResult<()> {
    check_range(buf, pos, T::WIDTH)?;
    value.write_le(&mut buf[pos..]);
    Ok(())
}

pub fn read_i8(buf: &[u8], pos: usize) -> DecodeResult<i8> {
    read_scalar(buf, pos)
}

pub fn read_u8(buf: &[u8], pos: usize) -> DecodeResult<u8> {
    read_scalar(buf, pos)
}

pub fn read_i16(buf: &[u8], pos: usize) -> DecodeResult<i16> {
    read_scalar(buf, pos)
}

pub fn read_u16(buf: &[u8], pos: usize) -> DecodeResult<u16> {
    read_scalar(buf, pos)
}

pub fn read_i32(buf: &[u8], pos: usize) -> DecodeResult<i32> {
    read_scalar(buf, pos)
}

pub fn read_u32(buf: &[u8], pos: usize) -> DecodeResult<u32> {
    read_scalar(buf, pos)
}

pub fn read_i64(buf: &[u8], pos: usize) -> DecodeResult<i64> {
    read_scalar(buf, pos)
}

pub fn read_u64(buf: &[u8], pos: usize) -> DecodeResult<u64> {
    read_scalar(buf, pos)
}

pub fn read_f32(buf: &[u8], pos: usize) -> DecodeResult<f32> {
    read_scalar(buf, pos)
}

pub fn read_f64(buf: &[u8], pos: usize) -> DecodeResult<f64> {
    read_scalar(buf, pos)
}
