//! Binary Layout: konstanta, offset handle, dan kontrak struct inline
//!
//! Layout buffer (little-endian):
//! ┌──────────────────────────────────────────────────────────────┐
//! │ [u32 size prefix] (opsional)                                 │
//! │ u32 root offset ──────────────────────────┐                  │
//! │ [4 byte file identifier] (opsional)       │                  │
//! ├───────────────────────────────────────────┼──────────────────┤
//! │ vtable: u16 vt_len │ u16 table_len │ u16 slot*               │
//! │ table:  i32 soffset (table - vtable) │ field bytes ...  ◄────┘
//! │ string: u32 len │ bytes │ 0                                  │
//! │ vector: u32 len │ elements                                   │
//! └──────────────────────────────────────────────────────────────┘

use std::fmt;
use std::marker::PhantomData;

/// Ukuran forward reference (u32)
pub const SIZE_UOFFSET: usize = 4;
/// Ukuran table → vtable reference (i32)
pub const SIZE_SOFFSET: usize = 4;
/// Ukuran satu entry vtable (u16)
pub const SIZE_VOFFSET: usize = 2;
/// Ukuran prefix panjang buffer
pub const SIZE_SIZE_PREFIX: usize = 4;
/// Panjang file identifier
pub const FILE_IDENTIFIER_LENGTH: usize = 4;
/// Header vtable: vt_len + table_len
pub const VTABLE_METADATA_FIELDS: usize = 2;
pub const VTABLE_METADATA_SIZE: usize = VTABLE_METADATA_FIELDS * SIZE_VOFFSET;
/// Slot terbanyak per table: panjang vtable harus muat di u16.
pub const MAX_FIELDS: usize = u16::MAX as usize / SIZE_VOFFSET - VTABLE_METADATA_FIELDS;

/// Slot index → byte offset di dalam vtable ("voffset").
///
/// Slot 0 → 4, slot 1 → 6, slot 2 → 8, ...
/// Hasil yang tidak muat di u16 saturasi ke `u16::MAX`, yang tidak pernah valid di vtable.
#[inline(always)]
pub const fn field_index_to_voffset(slot: u16) -> u16 {
    slot.saturating_mul(SIZE_VOFFSET as u16).saturating_add(VTABLE_METADATA_SIZE as u16)
}

/// Kebalikan dari `field_index_to_voffset`.
#[inline(always)]
pub const fn voffset_to_field_index(voffset: u16) -> u16 {
    (voffset - VTABLE_METADATA_SIZE as u16) / SIZE_VOFFSET as u16
}

/// Handle ke objek yang sudah selesai ditulis di builder.
///
/// `value` adalah offset dari AKHIR buffer (bukan posisi absolut), jadi tetap valid
/// walaupun buffer di-grow. `T` hanya penanda tipe objek yang ditunjuk:
/// `Offset<str>` untuk string, `Offset<[u32]>` untuk vector, dst.
pub struct Offset<T: ?Sized> {
    value: u32,
    _marker: PhantomData<T>,
}

impl<T: ?Sized> Offset<T> {
    #[inline(always)]
    pub const fn new(value: u32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Lepas penanda tipe.
    #[inline(always)]
    pub const fn as_untyped(&self) -> Offset<()> {
        Offset::new(self.value)
    }
}

impl<T: ?Sized> Clone for Offset<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Offset<T> {}

impl<T: ?Sized> PartialEq for Offset<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: ?Sized> Eq for Offset<T> {}

impl<T: ?Sized> fmt::Debug for Offset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Offset({})", self.value)
    }
}

/// Fixed-shape record yang ditulis inline (tanpa vtable, tanpa indirection).
///
/// Implementasi (biasanya hasil code generator) menentukan layout final:
/// setiap field di byte offset konstan, termasuk padding. `SIZE` harus kelipatan `ALIGN`.
pub trait Struct: Sized {
    const SIZE: usize;
    const ALIGN: usize;

    /// Serialize ke `dst[..SIZE]`. `dst` sudah di-zero.
    fn write_to(&self, dst: &mut [u8]);
}
