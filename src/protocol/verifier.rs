//! Structural verifier untuk buffer yang tidak dipercaya.
//!
//! Reader sudah bounds-checked per akses, tapi verifier memeriksa SELURUH graph di depan
//! supaya error muncul sekali di awal, bukan di tengah pemrosesan. Walk dikendalikan oleh
//! `Verifiable` impl hasil generator:
//!
//! ```ignore
//! v.visit_table(pos)?
//!     .visit_field::<ForwardsUOffset<Child>>(VT_CHILD, false)?
//!     .visit_field::<i32>(VT_SCORE, false)?
//!     .finish();
//! ```
//!
//! Batas `VerifierOptions` (depth, jumlah table, apparent size) mencegah buffer adversarial
//! (mis. DAG yang me-refer table yang sama berkali-kali) menghabiskan CPU.

use super::follow::{ForwardsUOffset, Inline};
use super::layout::{SIZE_SIZE_PREFIX, SIZE_UOFFSET, VTABLE_METADATA_SIZE};
use super::vector::Vector;
use crate::config::VerifierOptions;
use crate::core::back_buffer::MAX_BUFFER_SIZE;
use crate::core::scalar::{check_range, read_i32, read_u16, read_u32};
use crate::error::{DecodeError, DecodeResult};

/// Tipe yang bisa memverifikasi representasinya di posisi `pos`.
pub trait Verifiable {
    fn run_verifier(v: &mut Verifier<'_>, pos: usize) -> DecodeResult<()>;
}

pub struct Verifier<'a> {
    buf: &'a [u8],
    opts: VerifierOptions,
    depth: usize,
    num_tables: usize,
    apparent_size: usize,
}

impl<'a> Verifier<'a> {
    pub fn new(buf: &'a [u8], opts: &VerifierOptions) -> Self {
        Self {
            buf,
            opts: opts.clone(),
            depth: 0,
            num_tables: 0,
            apparent_size: 0,
        }
    }

    #[inline]
    pub fn buf(&self) -> &'a [u8] {
        self.buf
    }

    /// Jumlah table yang sudah dikunjungi.
    #[inline]
    pub fn num_tables(&self) -> usize {
        self.num_tables
    }

    #[inline]
    fn is_aligned(&self, pos: usize, align: usize) -> DecodeResult<()> {
        if self.opts.check_alignment && align > 1 && pos % align != 0 {
            return Err(DecodeError::Unaligned { pos, align });
        }
        Ok(())
    }

    fn apparent(&mut self, bytes: usize) -> DecodeResult<()> {
        self.apparent_size = self.apparent_size.saturating_add(bytes);
        if self.apparent_size > self.opts.max_apparent_size {
            return Err(DecodeError::ApparentSizeTooLarge {
                limit: self.opts.max_apparent_size,
            });
        }
        Ok(())
    }

    /// Nilai inline berukuran tetap (scalar atau struct).
    pub fn verify_inline(&mut self, pos: usize, size: usize, align: usize) -> DecodeResult<()> {
        self.is_aligned(pos, align)?;
        check_range(self.buf, pos, size)?;
        self.apparent(size)
    }

    /// uoffset di `pos`; mengembalikan posisi target.
    pub fn verify_uoffset(&mut self, pos: usize) -> DecodeResult<usize> {
        self.is_aligned(pos, SIZE_UOFFSET)?;
        let relative = read_u32(self.buf, pos)? as usize;
        if relative == 0 {
            return Err(DecodeError::NullOffset { pos });
        }
        let target = pos
            .checked_add(relative)
            .ok_or(DecodeError::OffsetOverflow { pos })?;
        check_range(self.buf, target, 1)?;
        Ok(target)
    }

    /// Prefix panjang vector dan seluruh elemennya harus muat. Mengembalikan `(start, len)`.
    pub fn verify_vector_range(&mut self, pos: usize, elem_size: usize) -> DecodeResult<(usize, usize)> {
        self.is_aligned(pos, SIZE_UOFFSET)?;
        let len = read_u32(self.buf, pos)? as usize;
        let bytes = len
            .checked_mul(elem_size)
            .ok_or(DecodeError::OffsetOverflow { pos })?;
        let start = pos + SIZE_UOFFSET;
        check_range(self.buf, start, bytes)?;
        self.apparent(SIZE_UOFFSET + bytes)?;
        Ok((start, len))
    }

    /// String: panjang, terminator NUL, dan UTF-8.
    pub fn verify_string(&mut self, pos: usize) -> DecodeResult<()> {
        let (start, len) = self.verify_vector_range(pos, 1)?;
        check_range(self.buf, start, len + 1)?;
        if self.buf[start + len] != 0 {
            return Err(DecodeError::MissingTerminator { pos });
        }
        std::str::from_utf8(&self.buf[start..start + len])
            .map_err(|_| DecodeError::InvalidUtf8 { pos })?;
        Ok(())
    }

    /// Mulai verifikasi table di `pos`: soffset, vtable, dan panjang inline table.
    pub fn visit_table<'v>(&'v mut self, pos: usize) -> DecodeResult<TableVerifier<'v, 'a>> {
        self.is_aligned(pos, 4)?;
        let soffset = read_i32(self.buf, pos)? as i64;
        let vtable = pos as i64 - soffset;
        if vtable < 0 || vtable as usize >= self.buf.len() {
            return Err(DecodeError::InvalidVtable {
                pos,
                reason: "vtable position outside buffer",
            });
        }
        let vtable = vtable as usize;

        self.is_aligned(vtable, 2)?;
        let vt_len = read_u16(self.buf, vtable)? as usize;
        if vt_len < VTABLE_METADATA_SIZE || vt_len % 2 != 0 {
            return Err(DecodeError::InvalidVtable {
                pos: vtable,
                reason: "length must be even and at least 4",
            });
        }
        check_range(self.buf, vtable, vt_len)?;

        let table_len = read_u16(self.buf, vtable + 2)? as usize;
        if table_len < 4 {
            return Err(DecodeError::InvalidVtable {
                pos: vtable,
                reason: "table length smaller than its soffset",
            });
        }
        check_range(self.buf, pos, table_len)?;

        self.num_tables += 1;
        if self.num_tables > self.opts.max_tables {
            return Err(DecodeError::TooManyTables {
                limit: self.opts.max_tables,
            });
        }
        self.depth += 1;
        if self.depth > self.opts.max_depth {
            return Err(DecodeError::DepthLimitReached {
                limit: self.opts.max_depth,
            });
        }
        self.apparent(vt_len + table_len)?;

        Ok(TableVerifier {
            verifier: self,
            pos,
            vtable,
            vt_len,
            table_len,
        })
    }
}

/// Verifikasi field satu table. `finish()` menutup level nesting.
pub struct TableVerifier<'v, 'a> {
    verifier: &'v mut Verifier<'a>,
    pos: usize,
    vtable: usize,
    vt_len: usize,
    table_len: usize,
}

impl<'v, 'a> TableVerifier<'v, 'a> {
    fn slot(&self, voffset: u16) -> DecodeResult<usize> {
        let voffset = voffset as usize;
        if voffset >= self.vt_len {
            return Ok(0);
        }
        Ok(read_u16(self.verifier.buf, self.vtable + voffset)? as usize)
    }

    /// Field berisi `T` inline di table (scalar, struct, atau uoffset).
    pub fn visit_field<T: Verifiable + Inline>(self, voffset: u16, required: bool) -> DecodeResult<Self> {
        let slot = self.slot(voffset)?;
        if slot == 0 {
            if required {
                return Err(DecodeError::MissingRequiredField {
                    pos: self.pos,
                    voffset,
                });
            }
            return Ok(self);
        }
        if slot + T::SIZE > self.table_len {
            return Err(DecodeError::InvalidVtable {
                pos: self.vtable,
                reason: "field extends past table end",
            });
        }
        T::run_verifier(self.verifier, self.pos + slot)?;
        Ok(self)
    }

    pub fn finish(self) -> &'v mut Verifier<'a> {
        self.verifier.depth -= 1;
        self.verifier
    }
}

macro_rules! impl_verifiable_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Verifiable for $ty {
                #[inline]
                fn run_verifier(v: &mut Verifier<'_>, pos: usize) -> DecodeResult<()> {
                    v.verify_inline(pos, std::mem::size_of::<$ty>(), std::mem::size_of::<$ty>())
                }
            }
        )*
    };
}

impl_verifiable_scalar!(bool, i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl<T: Verifiable> Verifiable for ForwardsUOffset<T> {
    #[inline]
    fn run_verifier(v: &mut Verifier<'_>, pos: usize) -> DecodeResult<()> {
        let target = v.verify_uoffset(pos)?;
        T::run_verifier(v, target)
    }
}

impl<'a> Verifiable for &'a str {
    #[inline]
    fn run_verifier(v: &mut Verifier<'_>, pos: usize) -> DecodeResult<()> {
        v.verify_string(pos)
    }
}

impl<'a, T: Verifiable + Inline> Verifiable for Vector<'a, T> {
    fn run_verifier(v: &mut Verifier<'_>, pos: usize) -> DecodeResult<()> {
        let (start, len) = v.verify_vector_range(pos, T::SIZE)?;
        for i in 0..len {
            T::run_verifier(v, start + i * T::SIZE)?;
        }
        Ok(())
    }
}

fn check_buffer_len(buf: &[u8]) -> DecodeResult<()> {
    if buf.len() > MAX_BUFFER_SIZE {
        return Err(DecodeError::BufferTooLarge {
            len: buf.len(),
            limit: MAX_BUFFER_SIZE,
        });
    }
    Ok(())
}

/// Verifikasi seluruh buffer dengan root bertipe `T`.
pub fn verify_root<T: Verifiable>(buf: &[u8], opts: &VerifierOptions) -> DecodeResult<()> {
    check_buffer_len(buf)?;
    let mut v = Verifier::new(buf, opts);
    <ForwardsUOffset<T>>::run_verifier(&mut v, 0)
}

/// Seperti `verify_root`, untuk buffer dengan prefix u32 panjang.
pub fn verify_size_prefixed_root<T: Verifiable>(buf: &[u8], opts: &VerifierOptions) -> DecodeResult<()> {
    check_buffer_len(buf)?;
    super::table::check_size_prefix(buf)?;
    let mut v = Verifier::new(buf, opts);
    <ForwardsUOffset<T>>::run_verifier(&mut v, SIZE_SIZE_PREFIX)
}
