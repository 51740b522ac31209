//! Error types untuk Builder, Reader, dan Mapped Storage
//!
//! Tiga kategori:
//! - `BuildError`: urutan operasi builder salah (fatal untuk buffer yang sedang dibangun)
//! - `DecodeError`: buffer rusak / offset keluar batas saat dibaca
//! - `StorageError`: I/O saat persist atau mmap buffer
//!
//! Mutasi pada field yang absent BUKAN error: `mutate` mengembalikan `Ok(false)`.

use std::io;
use thiserror::Error;

/// Construction-state errors. Setelah salah satu terjadi, builder ter-poison.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("{op} called while an object is being built")]
    ObjectInProgress { op: &'static str },

    #[error("{op} called with no object in progress")]
    NotInObject { op: &'static str },

    #[error("{op} called while a vector is being built")]
    VectorInProgress { op: &'static str },

    #[error("{op} called with no vector in progress")]
    NotInVector { op: &'static str },

    #[error("object declared {field_count} fields, at most {limit} fit in a vtable")]
    TooManyFields { field_count: usize, limit: usize },

    #[error("offset {offset} does not refer to a table written by this builder")]
    NotATable { offset: u32 },

    #[error("slot {slot} out of range for object with {field_count} fields")]
    SlotOutOfRange { slot: u16, field_count: usize },

    #[error("offset {target} does not refer to a finished object (limit {limit})")]
    UnfinishedReference { target: u32, limit: u32 },

    #[error("struct at offset {offset} was not written inline (current offset {current})")]
    StructNotInline { offset: u32, current: u32 },

    #[error("table of {size} bytes exceeds the 65535 byte vtable range")]
    TableTooLarge { size: usize },

    #[error("required field at slot {slot} missing from table at offset {table}")]
    MissingRequiredField { table: u32, slot: u16 },

    #[error("vector declared {declared} elements but {pushed} were pushed")]
    VectorLengthMismatch { declared: usize, pushed: usize },

    #[error("{op} called after the buffer was finished")]
    AlreadyFinished { op: &'static str },

    #[error("buffer has not been finished")]
    NotFinished,

    #[error("builder is poisoned by an earlier error; call reset()")]
    Poisoned,

    #[error("buffer would grow to {requested} bytes, limit is {limit}")]
    BufferTooLarge { requested: usize, limit: usize },
}

/// Errors raised while interpreting a finished buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("read of {need} bytes at position {pos:#x} exceeds buffer length {len}")]
    OutOfBounds { pos: usize, need: usize, len: usize },

    #[error("offset at position {pos:#x} overflows the address space")]
    OffsetOverflow { pos: usize },

    #[error("vtable at {pos:#x} is malformed: {reason}")]
    InvalidVtable { pos: usize, reason: &'static str },

    #[error("position {pos:#x} is not aligned to {align} bytes")]
    Unaligned { pos: usize, align: usize },

    #[error("string at {pos:#x} is not valid UTF-8")]
    InvalidUtf8 { pos: usize },

    #[error("string at {pos:#x} is missing its NUL terminator")]
    MissingTerminator { pos: usize },

    #[error("index {index} out of range for vector of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("uoffset at {pos:#x} is zero")]
    NullOffset { pos: usize },

    #[error("buffer of {len} bytes exceeds the {limit} byte format limit")]
    BufferTooLarge { len: usize, limit: usize },

    #[error("unknown {type_name} discriminant {value}")]
    UnknownEnumValue { type_name: &'static str, value: i64 },

    #[error("required field at voffset {voffset} absent in table at {pos:#x}")]
    MissingRequiredField { pos: usize, voffset: u16 },

    #[error("file identifier mismatch: expected {expected:?}, found {found:?}")]
    IdentifierMismatch { expected: [u8; 4], found: [u8; 4] },

    #[error("nesting depth exceeds limit {limit}")]
    DepthLimitReached { limit: usize },

    #[error("table count exceeds limit {limit}")]
    TooManyTables { limit: usize },

    #[error("apparent size exceeds limit {limit}")]
    ApparentSizeTooLarge { limit: usize },
}

/// Errors from persisting or mapping a buffer file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("buffer file is empty")]
    Empty,

    #[error("mapped buffer is malformed: {0}")]
    Decode(#[from] DecodeError),
}

pub type BuildResult<T> = std::result::Result<T, BuildError>;
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
pub type StorageResult<T> = std::result::Result<T, StorageError>;
