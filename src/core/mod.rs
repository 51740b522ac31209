//! Core module: Back-to-front byte arena, scalar codec, dan mmap backing
//!
//! Prinsip desain:
//! - Offset dari AKHIR buffer: growth tidak pernah meng-invalidasi handle
//! - Little-endian fixed width: layout sama di semua platform
//! - Zero-Copy: buffer final bisa di-mmap dan dibaca langsung

pub mod back_buffer;
pub mod mmap_storage;
pub mod scalar;

pub use back_buffer::{BackBuffer, DEFAULT_CAPACITY, MAX_BUFFER_SIZE};
pub use mmap_storage::{MmapBuffer, MmapBufferMut};
pub use scalar::Scalar;
