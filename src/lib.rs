//! Flatbed - Zero-Copy Table Buffer Encoding Engine
//!
//! Arsitektur:
//! - Back-to-front builder: child selalu ditulis sebelum parent (graph acyclic)
//! - Vtable dedup: table dengan layout sama berbagi satu vtable
//! - Lazy access: field dibaca saat diminta, langsung dari buffer
//! - Zero-Copy: buffer final bisa di-mmap dan dimutasi in-place

pub mod config;
pub mod core;
pub mod error;
pub mod generated;
pub mod logging;
pub mod protocol;

pub use config::{BuilderConfig, VerifierOptions};
pub use error::{BuildError, BuildResult, DecodeError, DecodeResult, StorageError, StorageResult};
pub use generated::{namespace_a, namespace_c};
pub use protocol::{Builder, Offset, Table, TableMut, Vector};
