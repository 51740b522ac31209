//! Table Builder di atas BackBuffer
//!
//! Urutan pemakaian (leaves-first, graph harus acyclic):
//!
//! ```ignore
//! let name = builder.create_string("child")?;       // child dulu
//! builder.start_object(2)?;
//! builder.add_field_offset(0, name)?;
//! builder.add_field_i32(1, 42, 0)?;
//! let root = builder.end_object()?;                  // posisi parent final
//! builder.finish(root, None)?;
//! let bytes = builder.finished_data()?;
//! ```
//!
//! Error urutan operasi (nested object, field tanpa object, reference ke objek yang
//! belum selesai) mem-POISON builder: semua operasi berikutnya gagal sampai `reset()`.
//! Buffer setengah jadi tidak pernah dikembalikan.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use super::layout::{
    field_index_to_voffset, Offset, Struct, FILE_IDENTIFIER_LENGTH, MAX_FIELDS, SIZE_SOFFSET,
    SIZE_UOFFSET, SIZE_VOFFSET, VTABLE_METADATA_FIELDS,
};
use crate::config::BuilderConfig;
use crate::core::back_buffer::BackBuffer;
use crate::core::scalar::Scalar;
use crate::error::{BuildError, BuildResult};

/// State machine per object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectState {
    NotStarted,
    /// `start` = offset buffer saat `start_object` dipanggil.
    FieldsBeingAdded { start: usize },
    Ended,
}

#[derive(Debug, Clone, Copy)]
struct VectorState {
    len: usize,
    pushed: usize,
    /// Objek yang direferensi elemen harus sudah selesai sebelum vector dimulai.
    limit: usize,
}

/// Builder untuk satu buffer. Single-threaded: satu builder, satu owner.
pub struct Builder {
    bb: BackBuffer,
    config: BuilderConfig,
    state: ObjectState,
    /// Slot → offset field (dari akhir buffer); 0 = absent.
    slots: Vec<u32>,
    /// Offset semua vtable yang sudah ditulis, untuk dedup.
    vtables: Vec<usize>,
    vtable_scratch: Vec<u8>,
    vector: Option<VectorState>,
    shared_strings: HashMap<String, u32>,
    finished: bool,
    poisoned: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(BuilderConfig::default().with_capacity(capacity))
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            bb: BackBuffer::with_capacity(config.initial_capacity),
            config,
            state: ObjectState::NotStarted,
            slots: Vec::new(),
            vtables: Vec::new(),
            vtable_scratch: Vec::new(),
            vector: None,
            shared_strings: HashMap::new(),
            finished: false,
            poisoned: false,
        }
    }

    /// Reset untuk buffer berikutnya. Alokasi dipertahankan, poison dihapus.
    pub fn reset(&mut self) {
        self.bb.reset();
        self.state = ObjectState::NotStarted;
        self.slots.clear();
        self.vtables.clear();
        self.vector = None;
        self.shared_strings.clear();
        self.finished = false;
        self.poisoned = false;
    }

    /// Posisi saat ini (jumlah byte yang sudah ditulis).
    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.bb.offset()
    }

    #[inline(always)]
    pub fn object_state(&self) -> ObjectState {
        self.state
    }

    /// Jumlah vtable unik yang sudah ditulis
    #[inline(always)]
    pub fn vtable_count(&self) -> usize {
        self.vtables.len()
    }

    #[inline(always)]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[inline(always)]
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    // =========================================================================
    // Guards
    // =========================================================================

    /// Tandai builder rusak jika `result` error.
    fn track<T>(&mut self, result: BuildResult<T>) -> BuildResult<T> {
        if let Err(ref e) = result {
            if !self.poisoned {
                warn!(error = %e, "builder poisoned");
            }
            self.poisoned = true;
        }
        result
    }

    fn check_live(&self, op: &'static str) -> BuildResult<()> {
        if self.poisoned {
            return Err(BuildError::Poisoned);
        }
        if self.finished {
            return Err(BuildError::AlreadyFinished { op });
        }
        Ok(())
    }

    /// Tidak boleh ada object ATAU vector yang sedang dibangun.
    fn check_not_nested(&self, op: &'static str) -> BuildResult<()> {
        if let ObjectState::FieldsBeingAdded { .. } = self.state {
            return Err(BuildError::ObjectInProgress { op });
        }
        if self.vector.is_some() {
            return Err(BuildError::VectorInProgress { op });
        }
        Ok(())
    }

    fn object_start(&self, op: &'static str) -> BuildResult<usize> {
        match self.state {
            ObjectState::FieldsBeingAdded { start } => Ok(start),
            _ => Err(BuildError::NotInObject { op }),
        }
    }

    fn check_slot(&self, slot: u16) -> BuildResult<()> {
        if slot as usize >= self.slots.len() {
            return Err(BuildError::SlotOutOfRange {
                slot,
                field_count: self.slots.len(),
            });
        }
        Ok(())
    }

    /// Objek yang direferensi harus sudah selesai sebelum `limit`.
    fn check_reference(target: u32, limit: usize) -> BuildResult<()> {
        if target == 0 || target as usize > limit {
            return Err(BuildError::UnfinishedReference {
                target,
                limit: limit as u32,
            });
        }
        Ok(())
    }

    // =========================================================================
    // Raw writes
    // =========================================================================

    /// Tulis uoffset ke `target`, relatif ke posisi field itu sendiri.
    fn push_uoffset(&mut self, target: u32) -> BuildResult<()> {
        self.bb.prep(SIZE_UOFFSET, 0)?;
        let relative = (self.bb.offset() + SIZE_UOFFSET) as u32 - target;
        self.bb.place(relative);
        Ok(())
    }

    fn write_struct<S: Struct>(&mut self, value: &S) -> BuildResult<u32> {
        self.bb.prep(S::ALIGN, S::SIZE)?;
        let dst = self.bb.make_space(S::SIZE)?;
        value.write_to(dst);
        Ok(self.bb.offset() as u32)
    }

    // =========================================================================
    // Tables
    // =========================================================================

    /// Mulai table baru dengan `field_count` slot.
    pub fn start_object(&mut self, field_count: usize) -> BuildResult<()> {
        let result = self.try_start_object(field_count);
        self.track(result)
    }

    fn try_start_object(&mut self, field_count: usize) -> BuildResult<()> {
        self.check_live("start_object")?;
        self.check_not_nested("start_object")?;
        if field_count > MAX_FIELDS {
            return Err(BuildError::TooManyFields {
                field_count,
                limit: MAX_FIELDS,
            });
        }
        self.slots.clear();
        self.slots.resize(field_count, 0);
        self.state = ObjectState::FieldsBeingAdded {
            start: self.bb.offset(),
        };
        Ok(())
    }

    /// Tambah field scalar. Tidak ditulis jika `value == default` (kecuali force_defaults).
    pub fn add_field_scalar<T: Scalar>(
        &mut self,
        slot: u16,
        value: T,
        default: T,
    ) -> BuildResult<()> {
        let result = self.try_add_field_scalar(slot, value, default);
        self.track(result)
    }

    fn try_add_field_scalar<T: Scalar>(&mut self, slot: u16, value: T, default: T) -> BuildResult<()> {
        self.check_live("add_field")?;
        self.object_start("add_field")?;
        self.check_slot(slot)?;

        if value == default && !self.config.force_defaults {
            return Ok(());
        }

        self.bb.push(value)?;
        self.slots[slot as usize] = self.bb.offset() as u32;
        Ok(())
    }

    #[inline(always)]
    pub fn add_field_bool(&mut self, slot: u16, value: bool, default: bool) -> BuildResult<()> {
        self.add_field_scalar(slot, value, default)
    }

    #[inline(always)]
    pub fn add_field_i8(&mut self, slot: u16, value: i8, default: i8) -> BuildResult<()> {
        self.add_field_scalar(slot, value, default)
    }

    #[inline(always)]
    pub fn add_field_u8(&mut self, slot: u16, value: u8, default: u8) -> BuildResult<()> {
        self.add_field_scalar(slot, value, default)
    }

    #[inline(always)]
    pub fn add_field_i16(&mut self, slot: u16, value: i16, default: i16) -> BuildResult<()> {
        self.add_field_scalar(slot, value, default)
    }

    #[inline(always)]
    pub fn add_field_u16(&mut self, slot: u16, value: u16, default: u16) -> BuildResult<()> {
        self.add_field_scalar(slot, value, default)
    }

    #[inline(always)]
    pub fn add_field_i32(&mut self, slot: u16, value: i32, default: i32) -> BuildResult<()> {
        self.add_field_scalar(slot, value, default)
    }

    #[inline(always)]
    pub fn add_field_u32(&mut self, slot: u16, value: u32, default: u32) -> BuildResult<()> {
        self.add_field_scalar(slot, value, default)
    }

    #[inline(always)]
    pub fn add_field_i64(&mut self, slot: u16, value: i64, default: i64) -> BuildResult<()> {
        self.add_field_scalar(slot, value, default)
    }

    #[inline(always)]
    pub fn add_field_u64(&mut self, slot: u16, value: u64, default: u64) -> BuildResult<()> {
        self.add_field_scalar(slot, value, default)
    }

    #[inline(always)]
    pub fn add_field_f32(&mut self, slot: u16, value: f32, default: f32) -> BuildResult<()> {
        self.add_field_scalar(slot, value, default)
    }

    #[inline(always)]
    pub fn add_field_f64(&mut self, slot: u16, value: f64, default: f64) -> BuildResult<()> {
        self.add_field_scalar(slot, value, default)
    }

    /// Tambah reference ke table/string/vector yang SUDAH selesai.
    ///
    /// Default offset selalu "tidak ada": `Offset` bernilai 0 dianggap absent dan
    /// tidak ditulis. Offset lain selalu ditulis.
    pub fn add_field_offset<T: ?Sized>(&mut self, slot: u16, target: Offset<T>) -> BuildResult<()> {
        let result = self.try_add_field_offset(slot, target.value());
        self.track(result)
    }

    fn try_add_field_offset(&mut self, slot: u16, target: u32) -> BuildResult<()> {
        self.check_live("add_field_offset")?;
        let start = self.object_start("add_field_offset")?;
        self.check_slot(slot)?;
        if target == 0 {
            return Ok(());
        }
        Self::check_reference(target, start)?;

        self.push_uoffset(target)?;
        self.slots[slot as usize] = self.bb.offset() as u32;
        Ok(())
    }

    /// Catat struct yang BARU SAJA ditulis inline (lewat `create_struct`) sebagai field.
    pub fn add_field_struct<S: Struct>(&mut self, slot: u16, value: Offset<S>) -> BuildResult<()> {
        let result = self.try_add_field_struct(slot, value.value());
        self.track(result)
    }

    fn try_add_field_struct(&mut self, slot: u16, value: u32) -> BuildResult<()> {
        self.check_live("add_field_struct")?;
        let start = self.object_start("add_field_struct")?;
        self.check_slot(slot)?;

        // Harus ditulis SETELAH start_object, tepat sebelum call ini
        let current = self.bb.offset() as u32;
        if value != current || value as usize <= start {
            return Err(BuildError::StructNotInline {
                offset: value,
                current,
            });
        }
        self.slots[slot as usize] = value;
        Ok(())
    }

    /// Tulis struct inline lalu catat sebagai field, dalam satu langkah.
    pub fn push_field_struct<S: Struct>(&mut self, slot: u16, value: &S) -> BuildResult<()> {
        let result = self.try_push_field_struct(slot, value);
        self.track(result)
    }

    fn try_push_field_struct<S: Struct>(&mut self, slot: u16, value: &S) -> BuildResult<()> {
        self.check_live("push_field_struct")?;
        self.object_start("push_field_struct")?;
        self.check_slot(slot)?;
        let offset = self.write_struct(value)?;
        self.slots[slot as usize] = offset;
        Ok(())
    }

    /// Tulis struct inline di posisi saat ini.
    pub fn create_struct<S: Struct>(&mut self, value: &S) -> BuildResult<Offset<S>> {
        let result = self
            .check_live("create_struct")
            .and_then(|_| self.write_struct(value));
        self.track(result).map(Offset::new)
    }

    /// Tutup table: tulis soffset, lalu vtable baru atau reuse yang identik.
    pub fn end_object<T: ?Sized>(&mut self) -> BuildResult<Offset<T>> {
        let result = self.try_end_object();
        self.track(result).map(Offset::new)
    }

    fn try_end_object(&mut self) -> BuildResult<u32> {
        self.check_live("end_object")?;
        let start = self.object_start("end_object")?;

        // Placeholder soffset, di-patch setelah posisi vtable diketahui
        self.bb.push(0i32)?;
        let object_offset = self.bb.offset();

        let table_size = object_offset - start;
        if table_size > u16::MAX as usize {
            return Err(BuildError::TableTooLarge { size: table_size });
        }

        // Trailing absent slots tidak ditulis
        let trimmed = self
            .slots
            .iter()
            .rposition(|&o| o != 0)
            .map_or(0, |i| i + 1);
        let vtable_len = (VTABLE_METADATA_FIELDS + trimmed) * SIZE_VOFFSET;

        self.vtable_scratch.clear();
        self.vtable_scratch
            .extend_from_slice(&(vtable_len as u16).to_le_bytes());
        self.vtable_scratch
            .extend_from_slice(&(table_size as u16).to_le_bytes());
        for &field in &self.slots[..trimmed] {
            let voffset = if field != 0 {
                (object_offset - field as usize) as u16
            } else {
                0
            };
            self.vtable_scratch.extend_from_slice(&voffset.to_le_bytes());
        }

        let existing = if self.config.dedup_vtables {
            self.vtables.iter().copied().find(|&vt| {
                self.bb.read_at::<u16>(vt) as usize == vtable_len
                    && self.bb.slice_at(vt, vtable_len) == self.vtable_scratch.as_slice()
            })
        } else {
            None
        };

        let vtable_offset = match existing {
            Some(vt) => {
                trace!(vtable = vt, table = object_offset, "vtable reused");
                vt
            }
            None => {
                self.bb.prep(SIZE_VOFFSET, vtable_len)?;
                self.bb.push_bytes(&self.vtable_scratch)?;
                let vt = self.bb.offset();
                self.vtables.push(vt);
                vt
            }
        };

        // table_pos - vtable_pos, dalam koordinat absolut buffer final
        let soffset = vtable_offset as i64 - object_offset as i64;
        self.bb.write_at(object_offset, soffset as i32);

        self.state = ObjectState::Ended;
        self.slots.clear();
        Ok(object_offset as u32)
    }

    /// Cek field wajib pada table yang baru selesai.
    pub fn required_field<T: ?Sized>(&mut self, table: Offset<T>, slot: u16) -> BuildResult<()> {
        let result = self.try_required_field(table.value(), slot);
        self.track(result)
    }

    fn try_required_field(&self, table: u32, slot: u16) -> BuildResult<()> {
        if self.poisoned {
            return Err(BuildError::Poisoned);
        }
        let table_offset = table as usize;
        if table_offset == 0 || table_offset > self.bb.offset() {
            return Err(BuildError::UnfinishedReference {
                target: table,
                limit: self.bb.offset() as u32,
            });
        }

        if table_offset < SIZE_SOFFSET {
            return Err(BuildError::NotATable { offset: table });
        }

        // soffset harus menunjuk ke salah satu vtable yang ditulis builder ini
        let soffset = self.bb.read_at::<i32>(table_offset) as i64;
        let vtable = table_offset as i64 + soffset;
        let vtable = match usize::try_from(vtable) {
            Ok(vt) if self.vtables.contains(&vt) => vt,
            _ => return Err(BuildError::NotATable { offset: table }),
        };
        let vtable_len = self.bb.read_at::<u16>(vtable) as usize;
        let voffset = field_index_to_voffset(slot) as usize;

        let present = voffset < vtable_len && self.bb.read_at::<u16>(vtable - voffset) != 0;
        if !present {
            return Err(BuildError::MissingRequiredField { table, slot });
        }
        Ok(())
    }

    // =========================================================================
    // Strings & vectors
    // =========================================================================

    /// String: u32 len, bytes UTF-8, NUL terminator.
    pub fn create_string(&mut self, value: &str) -> BuildResult<Offset<str>> {
        let result = self.try_create_string(value);
        self.track(result).map(Offset::new)
    }

    fn try_create_string(&mut self, value: &str) -> BuildResult<u32> {
        self.check_live("create_string")?;
        self.check_not_nested("create_string")?;

        let bytes = value.as_bytes();
        self.bb.prep(SIZE_UOFFSET, bytes.len() + 1)?;
        self.bb.push_bytes(&[0])?;
        self.bb.push_bytes(bytes)?;
        self.bb.push(bytes.len() as u32)?;
        Ok(self.bb.offset() as u32)
    }

    /// Seperti `create_string`, tapi string identik hanya ditulis sekali per buffer.
    pub fn create_shared_string(&mut self, value: &str) -> BuildResult<Offset<str>> {
        match self.shared_strings.get(value).copied() {
            Some(existing) => {
                let result = self
                    .check_live("create_shared_string")
                    .and_then(|_| self.check_not_nested("create_shared_string"));
                self.track(result)?;
                Ok(Offset::new(existing))
            }
            None => {
                let offset = self.create_string(value)?;
                self.shared_strings.insert(value.to_owned(), offset.value());
                Ok(offset)
            }
        }
    }

    /// Mulai vector `len` elemen berukuran `elem_size`, aligned ke `alignment`.
    /// Elemen di-push dari yang TERAKHIR.
    pub fn start_vector(&mut self, elem_size: usize, len: usize, alignment: usize) -> BuildResult<()> {
        let result = self.try_start_vector(elem_size, len, alignment);
        self.track(result)
    }

    fn try_start_vector(&mut self, elem_size: usize, len: usize, alignment: usize) -> BuildResult<()> {
        self.check_live("start_vector")?;
        self.check_not_nested("start_vector")?;

        let limit = self.bb.offset();
        let body = elem_size.saturating_mul(len);
        self.bb.prep(SIZE_UOFFSET, body)?;
        self.bb.prep(alignment.max(1), body)?;
        self.vector = Some(VectorState {
            len,
            pushed: 0,
            limit,
        });
        Ok(())
    }

    fn vector_mut(&mut self, op: &'static str) -> BuildResult<&mut VectorState> {
        self.vector.as_mut().ok_or(BuildError::NotInVector { op })
    }

    /// Push satu elemen scalar.
    pub fn push_vector_element<T: Scalar>(&mut self, value: T) -> BuildResult<()> {
        let result = self.try_push_vector_element(value);
        self.track(result)
    }

    fn try_push_vector_element<T: Scalar>(&mut self, value: T) -> BuildResult<()> {
        self.check_live("push_vector_element")?;
        self.vector_mut("push_vector_element")?;
        self.bb.push(value)?;
        self.vector_mut("push_vector_element")?.pushed += 1;
        Ok(())
    }

    /// Push reference ke objek yang sudah selesai sebelum vector dimulai.
    pub fn push_vector_offset<T: ?Sized>(&mut self, target: Offset<T>) -> BuildResult<()> {
        let result = self.try_push_vector_offset(target.value());
        self.track(result)
    }

    fn try_push_vector_offset(&mut self, target: u32) -> BuildResult<()> {
        self.check_live("push_vector_offset")?;
        let limit = self.vector_mut("push_vector_offset")?.limit;
        Self::check_reference(target, limit)?;
        self.push_uoffset(target)?;
        self.vector_mut("push_vector_offset")?.pushed += 1;
        Ok(())
    }

    /// Push struct inline sebagai elemen.
    pub fn push_vector_struct<S: Struct>(&mut self, value: &S) -> BuildResult<()> {
        let result = self.try_push_vector_struct(value);
        self.track(result)
    }

    fn try_push_vector_struct<S: Struct>(&mut self, value: &S) -> BuildResult<()> {
        self.check_live("push_vector_struct")?;
        self.vector_mut("push_vector_struct")?;
        self.write_struct(value)?;
        self.vector_mut("push_vector_struct")?.pushed += 1;
        Ok(())
    }

    /// Tutup vector: tulis u32 jumlah elemen.
    pub fn end_vector<T: ?Sized>(&mut self) -> BuildResult<Offset<T>> {
        let result = self.try_end_vector();
        self.track(result).map(Offset::new)
    }

    fn try_end_vector(&mut self) -> BuildResult<u32> {
        self.check_live("end_vector")?;
        let state = self
            .vector
            .take()
            .ok_or(BuildError::NotInVector { op: "end_vector" })?;
        if state.pushed != state.len {
            return Err(BuildError::VectorLengthMismatch {
                declared: state.len,
                pushed: state.pushed,
            });
        }
        self.bb.push(state.len as u32)?;
        Ok(self.bb.offset() as u32)
    }

    /// Vector of scalars.
    pub fn create_vector<T: Scalar>(&mut self, items: &[T]) -> BuildResult<Offset<[T]>> {
        self.start_vector(T::WIDTH, items.len(), T::WIDTH)?;
        for &item in items.iter().rev() {
            self.push_vector_element(item)?;
        }
        self.end_vector()
    }

    /// Vector of bytes, ditulis sebagai satu blok.
    pub fn create_byte_vector(&mut self, bytes: &[u8]) -> BuildResult<Offset<[u8]>> {
        self.start_vector(1, bytes.len(), 1)?;
        let result = self.bb.push_bytes(bytes);
        self.track(result)?;
        if let Some(state) = self.vector.as_mut() {
            state.pushed = bytes.len();
        }
        self.end_vector()
    }

    /// Vector of references ke table/string/vector.
    pub fn create_vector_of_offsets<T: ?Sized>(
        &mut self,
        items: &[Offset<T>],
    ) -> BuildResult<Offset<[Offset<T>]>> {
        self.start_vector(SIZE_UOFFSET, items.len(), SIZE_UOFFSET)?;
        for &item in items.iter().rev() {
            self.push_vector_offset(item)?;
        }
        self.end_vector()
    }

    /// Vector of inline structs.
    pub fn create_vector_of_structs<S: Struct>(&mut self, items: &[S]) -> BuildResult<Offset<[S]>> {
        self.start_vector(S::SIZE, items.len(), S::ALIGN)?;
        for item in items.iter().rev() {
            self.push_vector_struct(item)?;
        }
        self.end_vector()
    }

    // =========================================================================
    // Finish
    // =========================================================================

    /// Tulis root offset (dan file identifier opsional). Buffer jadi final.
    pub fn finish<T: ?Sized>(
        &mut self,
        root: Offset<T>,
        file_identifier: Option<&[u8; FILE_IDENTIFIER_LENGTH]>,
    ) -> BuildResult<()> {
        let result = self.try_finish(root.value(), file_identifier, false);
        self.track(result)
    }

    /// Seperti `finish`, dengan prefix u32 panjang buffer di depan.
    pub fn finish_size_prefixed<T: ?Sized>(
        &mut self,
        root: Offset<T>,
        file_identifier: Option<&[u8; FILE_IDENTIFIER_LENGTH]>,
    ) -> BuildResult<()> {
        let result = self.try_finish(root.value(), file_identifier, true);
        self.track(result)
    }

    fn try_finish(
        &mut self,
        root: u32,
        file_identifier: Option<&[u8; FILE_IDENTIFIER_LENGTH]>,
        size_prefixed: bool,
    ) -> BuildResult<()> {
        self.check_live("finish")?;
        self.check_not_nested("finish")?;
        Self::check_reference(root, self.bb.offset())?;

        let prefix_len = if size_prefixed { SIZE_UOFFSET } else { 0 };
        let ident_len = if file_identifier.is_some() {
            FILE_IDENTIFIER_LENGTH
        } else {
            0
        };

        let align = self.bb.min_align().max(SIZE_UOFFSET);
        self.bb.prep(align, SIZE_UOFFSET + ident_len + prefix_len)?;
        if let Some(ident) = file_identifier {
            self.bb.push_bytes(ident)?;
        }
        self.push_uoffset(root)?;
        if size_prefixed {
            let size = self.bb.offset() as u32;
            self.bb.push(size)?;
        }

        self.finished = true;
        debug!(
            size = self.bb.offset(),
            vtables = self.vtables.len(),
            size_prefixed,
            "buffer finished"
        );
        Ok(())
    }

    /// Byte buffer final. Gagal jika belum `finish` atau builder ter-poison.
    pub fn finished_data(&self) -> BuildResult<&[u8]> {
        if self.poisoned {
            return Err(BuildError::Poisoned);
        }
        if !self.finished {
            return Err(BuildError::NotFinished);
        }
        Ok(self.bb.data())
    }
}
