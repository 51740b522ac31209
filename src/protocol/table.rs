//! Zero-Copy Table Access
//!
//! `Table` hanya berisi `&[u8]` + posisi. Tidak ada parsing di awal: setiap getter
//! me-resolve vtable → slot → posisi field saat dipanggil.
//!
//! ```text
//! vtable = table - soffset          (i32 di awal table)
//! slot   = vtable[voffset]          (u16, 0 = absent)
//! field  = table + slot
//! ```
//!
//! Banyak reader boleh membaca buffer yang sama secara bersamaan (`Table` adalah `Copy`).
//! Mutasi butuh `&mut [u8]`, jadi borrow checker yang menserialisasi mutasi vs reader.

use super::follow::{indirect, Follow, ForwardsUOffset};
use super::layout::{FILE_IDENTIFIER_LENGTH, SIZE_SIZE_PREFIX, SIZE_UOFFSET, VTABLE_METADATA_SIZE};
use super::vector::Vector;
use crate::core::scalar::{check_range, read_i32, read_u16, read_u32, write_scalar, Scalar};
use crate::error::{DecodeError, DecodeResult};

/// Vtable: `[u16 vt_len][u16 table_len][u16 slot]*`
#[derive(Debug, Clone, Copy)]
pub struct VTable<'a> {
    buf: &'a [u8],
    loc: usize,
    len: usize,
}

impl<'a> VTable<'a> {
    fn at(buf: &'a [u8], loc: usize) -> DecodeResult<Self> {
        let len = read_u16(buf, loc)? as usize;
        if len < VTABLE_METADATA_SIZE || len % 2 != 0 {
            return Err(DecodeError::InvalidVtable {
                pos: loc,
                reason: "length must be even and at least 4",
            });
        }
        check_range(buf, loc, len)?;
        Ok(Self { buf, loc, len })
    }

    #[inline(always)]
    pub fn loc(&self) -> usize {
        self.loc
    }

    /// Panjang vtable dalam bytes
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_fields() == 0
    }

    /// Panjang inline table dalam bytes (termasuk soffset).
    #[inline(always)]
    pub fn table_len(&self) -> DecodeResult<usize> {
        Ok(read_u16(self.buf, self.loc + 2)? as usize)
    }

    /// Jumlah slot yang tercatat (slot trailing yang absent tidak ditulis).
    #[inline(always)]
    pub fn num_fields(&self) -> usize {
        (self.len - VTABLE_METADATA_SIZE) / 2
    }

    /// Nilai slot di `voffset`; 0 jika di luar vtable.
    #[inline(always)]
    pub fn get(&self, voffset: u16) -> DecodeResult<u16> {
        let voffset = voffset as usize;
        if voffset >= self.len {
            return Ok(0);
        }
        read_u16(self.buf, self.loc + voffset)
    }
}

/// Posisi table di dalam buffer final.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    buf: &'a [u8],
    loc: usize,
}

impl<'a> Table<'a> {
    /// Tidak ada validasi di sini; setiap akses di-bounds-check.
    #[inline(always)]
    pub fn new(buf: &'a [u8], loc: usize) -> Self {
        Self { buf, loc }
    }

    #[inline(always)]
    pub fn buf(&self) -> &'a [u8] {
        self.buf
    }

    #[inline(always)]
    pub fn loc(&self) -> usize {
        self.loc
    }

    pub fn vtable(&self) -> DecodeResult<VTable<'a>> {
        let soffset = read_i32(self.buf, self.loc)? as i64;
        let vtable = self.loc as i64 - soffset;
        if vtable < 0 {
            return Err(DecodeError::OffsetOverflow { pos: self.loc });
        }
        VTable::at(self.buf, vtable as usize)
    }

    /// Posisi absolut field di `voffset`, atau `None` jika absent.
    pub fn field_offset(&self, voffset: u16) -> DecodeResult<Option<usize>> {
        let vtable = self.vtable()?;
        let slot = vtable.get(voffset)? as usize;
        if slot == 0 {
            return Ok(None);
        }
        if slot >= vtable.table_len()? {
            return Err(DecodeError::InvalidVtable {
                pos: vtable.loc(),
                reason: "field offset beyond table length",
            });
        }
        Ok(Some(self.loc + slot))
    }

    /// Scalar dengan default skema jika absent.
    #[inline]
    pub fn get<T: Scalar>(&self, voffset: u16, default: T) -> DecodeResult<T> {
        Ok(self.get_optional(voffset)?.unwrap_or(default))
    }

    /// Scalar tanpa default (`None` jika absent).
    pub fn get_optional<T: Scalar>(&self, voffset: u16) -> DecodeResult<Option<T>> {
        match self.field_offset(voffset)? {
            Some(pos) => crate::core::scalar::read_scalar(self.buf, pos).map(Some),
            None => Ok(None),
        }
    }

    /// Baca field dengan aturan `T` di posisi field (tanpa indirection tambahan).
    pub fn get_field<T: Follow<'a>>(&self, voffset: u16) -> DecodeResult<Option<T::Inner>> {
        match self.field_offset(voffset)? {
            Some(pos) => T::follow(self.buf, pos).map(Some),
            None => Ok(None),
        }
    }

    /// Sub-table lewat uoffset.
    pub fn get_table(&self, voffset: u16) -> DecodeResult<Option<Table<'a>>> {
        self.get_field::<ForwardsUOffset<Table<'a>>>(voffset)
    }

    pub fn get_str(&self, voffset: u16) -> DecodeResult<Option<&'a str>> {
        self.get_field::<ForwardsUOffset<&'a str>>(voffset)
    }

    pub fn get_vector<T: 'a>(&self, voffset: u16) -> DecodeResult<Option<Vector<'a, T>>>
    where
        Vector<'a, T>: Follow<'a, Inner = Vector<'a, T>>,
    {
        self.get_field::<ForwardsUOffset<Vector<'a, T>>>(voffset)
    }

    /// Struct inline: posisi = table + slot, TANPA indirection.
    pub fn get_struct<S: Follow<'a>>(&self, voffset: u16) -> DecodeResult<Option<S::Inner>> {
        self.get_field::<S>(voffset)
    }
}

impl<'a> Follow<'a> for Table<'a> {
    type Inner = Table<'a>;

    #[inline(always)]
    fn follow(buf: &'a [u8], pos: usize) -> DecodeResult<Table<'a>> {
        Ok(Table::new(buf, pos))
    }
}

/// Table di atas buffer yang bisa dimutasi (hanya overwrite scalar in-place).
#[derive(Debug)]
pub struct TableMut<'a> {
    buf: &'a mut [u8],
    loc: usize,
}

impl<'a> TableMut<'a> {
    #[inline(always)]
    pub fn new(buf: &'a mut [u8], loc: usize) -> Self {
        Self { buf, loc }
    }

    #[inline(always)]
    pub fn loc(&self) -> usize {
        self.loc
    }

    /// View read-only ke table yang sama.
    #[inline(always)]
    pub fn as_table(&self) -> Table<'_> {
        Table::new(self.buf, self.loc)
    }

    /// Overwrite field scalar. `Ok(false)` jika field absent: buffer tidak disentuh,
    /// karena mutasi tidak boleh mengubah ukuran buffer.
    pub fn mutate<T: Scalar>(&mut self, voffset: u16, value: T) -> DecodeResult<bool> {
        self.mutate_at(voffset, 0, value)
    }

    /// Overwrite scalar di `offset` byte di dalam field (mis. field dari struct inline).
    pub fn mutate_at<T: Scalar>(&mut self, voffset: u16, offset: usize, value: T) -> DecodeResult<bool> {
        let pos = match self.as_table().field_offset(voffset)? {
            Some(pos) => pos,
            None => return Ok(false),
        };
        write_scalar(self.buf, pos + offset, value)?;
        Ok(true)
    }

    /// Sub-table untuk mutasi bertingkat.
    pub fn get_table_mut(&mut self, voffset: u16) -> DecodeResult<Option<TableMut<'_>>> {
        let pos = match self.as_table().field_offset(voffset)? {
            Some(pos) => indirect(self.buf, pos)?,
            None => return Ok(None),
        };
        Ok(Some(TableMut::new(self.buf, pos)))
    }
}

// =============================================================================
// Root access
// =============================================================================

/// Root table: uoffset di byte 0.
pub fn root_of(buf: &[u8]) -> DecodeResult<Table<'_>> {
    let pos = indirect(buf, 0)?;
    Ok(Table::new(buf, pos))
}

/// Root table untuk buffer dengan prefix u32 panjang.
pub fn size_prefixed_root_of(buf: &[u8]) -> DecodeResult<Table<'_>> {
    check_size_prefix(buf)?;
    let pos = indirect(buf, SIZE_SIZE_PREFIX)?;
    Ok(Table::new(buf, pos))
}

pub fn root_of_mut(buf: &mut [u8]) -> DecodeResult<TableMut<'_>> {
    let pos = indirect(buf, 0)?;
    Ok(TableMut::new(buf, pos))
}

pub fn size_prefixed_root_of_mut(buf: &mut [u8]) -> DecodeResult<TableMut<'_>> {
    check_size_prefix(buf)?;
    let pos = indirect(buf, SIZE_SIZE_PREFIX)?;
    Ok(TableMut::new(buf, pos))
}

/// Prefix harus cocok dengan sisa buffer.
pub(crate) fn check_size_prefix(buf: &[u8]) -> DecodeResult<()> {
    let size = read_u32(buf, 0)? as usize;
    check_range(buf, SIZE_SIZE_PREFIX, size)
}

/// Cek file identifier (4 byte setelah root offset).
pub fn buffer_has_identifier(buf: &[u8], ident: &[u8; FILE_IDENTIFIER_LENGTH], size_prefixed: bool) -> bool {
    let start = if size_prefixed {
        SIZE_SIZE_PREFIX + SIZE_UOFFSET
    } else {
        SIZE_UOFFSET
    };
    buf.get(start..start + FILE_IDENTIFIER_LENGTH) == Some(&ident[..])
}

/// Root table, hanya jika file identifier cocok.
pub fn root_with_identifier<'a>(buf: &'a [u8], ident: &[u8; FILE_IDENTIFIER_LENGTH]) -> DecodeResult<Table<'a>> {
    check_range(buf, SIZE_UOFFSET, FILE_IDENTIFIER_LENGTH)?;
    if !buffer_has_identifier(buf, ident, false) {
        let mut found = [0u8; FILE_IDENTIFIER_LENGTH];
        found.copy_from_slice(&buf[SIZE_UOFFSET..SIZE_UOFFSET + FILE_IDENTIFIER_LENGTH]);
        return Err(DecodeError::IdentifierMismatch {
            expected: *ident,
            found,
        });
    }
    root_of(buf)
}
