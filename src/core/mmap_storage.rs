//! Memory-Mapped Buffer Files untuk Zero-Copy Access
//!
//! Buffer final di-persist apa adanya (tanpa header tambahan) lalu di-mmap kembali:
//! - Zero-copy read: `Table` langsung membaca page cache
//! - In-place mutation: `MmapBufferMut` + `TableMut::mutate` mengubah file tanpa rewrite
//! - Kernel-managed paging: buffer besar tidak perlu muat di heap

use memmap2::{Mmap, MmapMut, MmapOptions};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::core::back_buffer::MAX_BUFFER_SIZE;
use crate::error::{DecodeError, DecodeResult, StorageError, StorageResult};
use crate::protocol::table::{root_of, root_of_mut, size_prefixed_root_of, Table, TableMut};

fn check_len(file: &File) -> StorageResult<usize> {
    let len = file.metadata()?.len() as usize;
    if len == 0 {
        return Err(StorageError::Empty);
    }
    if len > MAX_BUFFER_SIZE {
        return Err(DecodeError::BufferTooLarge {
            len,
            limit: MAX_BUFFER_SIZE,
        }
        .into());
    }
    Ok(len)
}

/// Read-only mapping dari file buffer.
pub struct MmapBuffer {
    mmap: Mmap,
}

impl MmapBuffer {
    /// Tulis buffer final ke `path` (file lama di-truncate) dan fsync.
    pub fn persist<P: AsRef<Path>>(path: P, bytes: &[u8]) -> StorageResult<()> {
        if bytes.is_empty() {
            return Err(StorageError::Empty);
        }
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path.as_ref())?;
        file.write_all(bytes)?;
        file.sync_all()?;
        debug!(path = %path.as_ref().display(), size = bytes.len(), "buffer persisted");
        Ok(())
    }

    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let file = File::open(path.as_ref())?;
        let len = check_len(&file)?;

        // SAFETY: mapping read-only; file tidak boleh di-truncate proses lain selama mapping hidup
        let mmap = unsafe { MmapOptions::new().len(len).map(&file)? };
        debug!(path = %path.as_ref().display(), size = len, "buffer mapped read-only");
        Ok(Self { mmap })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.mmap
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    pub fn root(&self) -> DecodeResult<Table<'_>> {
        root_of(&self.mmap)
    }

    /// Root untuk file dengan size prefix; prefix harus cocok dengan panjang file.
    pub fn size_prefixed_root(&self) -> DecodeResult<Table<'_>> {
        size_prefixed_root_of(&self.mmap)
    }
}

/// Read-write mapping: mutasi langsung ke page cache, `flush` untuk sync ke disk.
pub struct MmapBufferMut {
    mmap: MmapMut,
}

impl MmapBufferMut {
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path.as_ref())?;
        let len = check_len(&file)?;

        // SAFETY: File sudah dibuka dengan read/write permission
        let mmap = unsafe { MmapOptions::new().len(len).map_mut(&file)? };
        debug!(path = %path.as_ref().display(), size = len, "buffer mapped read-write");
        Ok(Self { mmap })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.mmap
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.mmap
    }

    pub fn root(&self) -> DecodeResult<Table<'_>> {
        root_of(&self.mmap)
    }

    pub fn root_mut(&mut self) -> DecodeResult<TableMut<'_>> {
        root_of_mut(&mut self.mmap)
    }

    /// Sync perubahan ke file.
    pub fn flush(&self) -> StorageResult<()> {
        self.mmap.flush()?;
        Ok(())
    }
}
