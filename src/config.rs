//! Konfigurasi Builder dan Verifier

use crate::core::back_buffer::{DEFAULT_CAPACITY, MAX_BUFFER_SIZE};

/// Configuration for a [`Builder`](crate::protocol::Builder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Initial capacity of the back buffer in bytes.
    pub initial_capacity: usize,
    /// Write scalar fields even when they equal their declared default.
    pub force_defaults: bool,
    /// Reuse byte-identical vtables instead of writing a new one per table.
    pub dedup_vtables: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            force_defaults: false,
            dedup_vtables: true,
        }
    }
}

impl BuilderConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity.min(MAX_BUFFER_SIZE);
        self
    }

    pub fn with_force_defaults(mut self, force: bool) -> Self {
        self.force_defaults = force;
        self
    }

    pub fn with_vtable_dedup(mut self, dedup: bool) -> Self {
        self.dedup_vtables = dedup;
        self
    }
}

/// Limits applied while verifying an untrusted buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierOptions {
    /// Maximum nesting of tables.
    pub max_depth: usize,
    /// Maximum number of tables visited.
    pub max_tables: usize,
    /// Maximum total bytes covered by verified objects. Overlapping objects
    /// count once per visit, which bounds work on adversarial DAG-shaped buffers.
    pub max_apparent_size: usize,
    /// Require scalars, offsets and vtables to sit at their natural alignment
    /// relative to the buffer start.
    pub check_alignment: bool,
}

impl Default for VerifierOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_tables: 1_000_000,
            max_apparent_size: 1 << 30,
            check_alignment: true,
        }
    }
}

impl VerifierOptions {
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_max_tables(mut self, tables: usize) -> Self {
        self.max_tables = tables;
        self
    }

    pub fn with_max_apparent_size(mut self, size: usize) -> Self {
        self.max_apparent_size = size;
        self
    }

    pub fn with_alignment_check(mut self, check: bool) -> Self {
        self.check_alignment = check;
        self
    }
}
