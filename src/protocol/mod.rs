//! Protocol Layer: Table Encoding dan Lazy Access
//!
//! Prinsip desain:
//! - Flat Binary: field dibaca langsung dari buffer tanpa parsing
//! - Vtable: field absent tidak memakan tempat, layout identik di-share
//! - Bounds-checked: buffer rusak menghasilkan error, bukan panic

pub mod builder;
pub mod follow;
pub mod layout;
pub mod table;
pub mod vector;
pub mod verifier;

pub use builder::{Builder, ObjectState};
pub use follow::{indirect, Follow, ForwardsUOffset, Inline};
pub use layout::{field_index_to_voffset, Offset, Struct, FILE_IDENTIFIER_LENGTH, MAX_FIELDS};
pub use table::{
    buffer_has_identifier, root_of, root_of_mut, root_with_identifier, size_prefixed_root_of,
    size_prefixed_root_of_mut, Table, TableMut, VTable,
};
pub use vector::{Vector, VectorIter};
pub use verifier::{verify_root, verify_size_prefixed_root, TableVerifier, Verifiable, Verifier};
