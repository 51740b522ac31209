//! Backward-Growing Byte Arena
//!
//! Buffer diisi dari BELAKANG ke depan: child ditulis dulu, parent belakangan,
//! sehingga saat parent ditulis posisi child sudah final.
//!
//! Posisi diekspresikan sebagai "offset dari akhir buffer" (`offset()`), bukan index
//! absolut. Saat region di-grow, byte lama di-copy ke EKOR region baru sehingga
//! semua offset yang sudah dihitung tetap valid.
//!
//! ```text
//!   0            head                       len
//!   ├──── free ────┼──── written (offset() bytes) ──┤
//!                  ◄──── tumbuh ke kiri
//! ```

use tracing::trace;

use super::scalar::Scalar;
use crate::error::{BuildError, BuildResult};

/// Batas ukuran buffer: semua offset disimpan sebagai u32/i32.
pub const MAX_BUFFER_SIZE: usize = i32::MAX as usize;

/// Kapasitas awal default
pub const DEFAULT_CAPACITY: usize = 1024;

/// Byte arena yang tumbuh ke belakang.
#[derive(Debug, Clone)]
pub struct BackBuffer {
    buf: Vec<u8>,
    head: usize,
    min_align: usize,
}

impl Default for BackBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl BackBuffer {
    /// Pre-allocate `capacity` bytes. Tidak ada alokasi lagi sampai kapasitas habis.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_BUFFER_SIZE);
        Self {
            buf: vec![0u8; capacity],
            head: capacity,
            min_align: 1,
        }
    }

    /// Jumlah byte yang sudah ditulis (= alamat objek yang baru saja ditulis).
    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.buf.len() - self.head
    }

    /// Kapasitas region saat ini
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Alignment terbesar yang pernah diminta
    #[inline(always)]
    pub fn min_align(&self) -> usize {
        self.min_align
    }

    /// Byte yang sudah ditulis, dari depan ke belakang.
    #[inline(always)]
    pub fn data(&self) -> &[u8] {
        &self.buf[self.head..]
    }

    /// Reset untuk reuse. Alokasi dipertahankan.
    pub fn reset(&mut self) {
        self.head = self.buf.len();
        self.min_align = 1;
    }

    /// Pastikan ada ruang `additional` byte di depan `head`.
    fn ensure(&mut self, additional: usize) -> BuildResult<()> {
        if self.head >= additional {
            return Ok(());
        }

        let used = self.offset();
        let required = used + additional;
        if required > MAX_BUFFER_SIZE {
            return Err(BuildError::BufferTooLarge {
                requested: required,
                limit: MAX_BUFFER_SIZE,
            });
        }

        let mut new_len = self.buf.len().max(1);
        while new_len < required {
            new_len = new_len.saturating_mul(2);
        }
        let new_len = new_len.min(MAX_BUFFER_SIZE);

        // Copy ke ekor region baru: offset dari akhir tidak berubah
        let mut grown = vec![0u8; new_len];
        grown[new_len - used..].copy_from_slice(&self.buf[self.head..]);

        trace!(from = self.buf.len(), to = new_len, used, "back buffer grown");

        self.buf = grown;
        self.head = new_len - used;
        Ok(())
    }

    /// Siapkan penulisan: setelah `additional` byte berikutnya ditulis,
    /// posisi akan aligned ke `size`. Sekaligus memastikan ada ruang untuk
    /// satu elemen berukuran `size` setelah itu.
    pub fn prep(&mut self, size: usize, additional: usize) -> BuildResult<()> {
        debug_assert!(size.is_power_of_two());
        if size > self.min_align {
            self.min_align = size;
        }

        // -(offset + additional) mod size
        let align_size = (!(self.offset() + additional)).wrapping_add(1) & (size - 1);
        self.ensure(align_size + size + additional)?;
        self.pad(align_size);
        Ok(())
    }

    /// Tulis `n` byte nol.
    #[inline(always)]
    pub fn pad(&mut self, n: usize) {
        debug_assert!(self.head >= n);
        let start = self.head - n;
        self.buf[start..self.head].fill(0);
        self.head = start;
    }

    /// Align lalu tulis scalar.
    #[inline(always)]
    pub fn push<T: Scalar>(&mut self, value: T) -> BuildResult<()> {
        self.prep(T::WIDTH, 0)?;
        self.place(value);
        Ok(())
    }

    /// Tulis scalar TANPA align; ruang harus sudah disiapkan lewat `prep`.
    #[inline(always)]
    pub fn place<T: Scalar>(&mut self, value: T) {
        debug_assert!(self.head >= T::WIDTH);
        self.head -= T::WIDTH;
        value.write_le(&mut self.buf[self.head..]);
    }

    /// Tulis raw bytes apa adanya (tanpa align).
    pub fn push_bytes(&mut self, bytes: &[u8]) -> BuildResult<()> {
        self.ensure(bytes.len())?;
        self.head -= bytes.len();
        self.buf[self.head..self.head + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    /// Reservasi `len` byte nol di depan dan kembalikan slice-nya untuk diisi caller.
    pub fn make_space(&mut self, len: usize) -> BuildResult<&mut [u8]> {
        self.ensure(len)?;
        self.pad(len);
        Ok(&mut self.buf[self.head..self.head + len])
    }

    /// Overwrite scalar yang sudah ditulis, dialamatkan dengan offset dari akhir.
    #[inline(always)]
    pub fn write_at<T: Scalar>(&mut self, offset: usize, value: T) {
        let pos = self.buf.len() - offset;
        value.write_le(&mut self.buf[pos..]);
    }

    /// Baca scalar yang sudah ditulis, dialamatkan dengan offset dari akhir.
    #[inline(always)]
    pub fn read_at<T: Scalar>(&self, offset: usize) -> T {
        T::read_le(&self.buf[self.buf.len() - offset..])
    }

    /// Slice `len` byte mulai dari objek di `offset`.
    #[inline(always)]
    pub fn slice_at(&self, offset: usize, len: usize) -> &[u8] {
        let pos = self.buf.len() - offset;
        &self.buf[pos..pos + len]
    }
}
