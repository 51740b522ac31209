//! Flatbed Inspect - dump struktur buffer file
//!
//! Menampilkan:
//! - Header: size prefix, root offset, file identifier
//! - Root vtable: panjang, panjang table, posisi setiap slot
//! - Raw bytes setiap field (lebar ditebak dari jarak ke field berikutnya)
//!
//! Usage:
//!   cargo run --bin flatbed_inspect -- <FILE> [OPTIONS]

use flatbed::core::scalar::read_u32;
use flatbed::core::MmapBuffer;
use flatbed::logging::init_tracing;
use flatbed::protocol::{buffer_has_identifier, root_of, size_prefixed_root_of, Table};
use flatbed::DecodeResult;
use tracing::{debug, error};

/// Inspect configuration
#[derive(Default)]
struct InspectConfig {
    path: Option<String>,
    size_prefixed: bool,
    ident: Option<[u8; 4]>,
    verbose: bool,
}

fn main() {
    let config = parse_args();
    let filter = if config.verbose { "debug" } else { "warn" };
    if let Err(e) = init_tracing(filter) {
        eprintln!("failed to install tracing subscriber: {}", e);
    }

    let path = match &config.path {
        Some(p) => p.clone(),
        None => {
            eprintln!("Usage: flatbed_inspect <FILE> [--size-prefixed] [--ident XXXX] [-v]");
            std::process::exit(2);
        }
    };

    let mapped = match MmapBuffer::open(&path) {
        Ok(m) => m,
        Err(e) => {
            error!(path = %path, error = %e, "cannot map buffer");
            std::process::exit(1);
        }
    };

    if let Err(e) = inspect(mapped.as_bytes(), &config) {
        error!(error = %e, "buffer is malformed");
        std::process::exit(1);
    }
}

fn inspect(buf: &[u8], config: &InspectConfig) -> DecodeResult<()> {
    println!("🔍 {} ({} bytes)", config.path.as_deref().unwrap_or("-"), buf.len());
    println!("==========================================\n");

    let root = if config.size_prefixed {
        let root = size_prefixed_root_of(buf)?;
        println!("  Size prefix:  {}", read_u32(buf, 0)?);
        root
    } else {
        root_of(buf)?
    };
    println!("  Root table:   @{:#x}", root.loc());

    let ident_at = if config.size_prefixed { 8 } else { 4 };
    if let Some(raw) = buf.get(ident_at..ident_at + 4) {
        println!("  Identifier:   {:?}", String::from_utf8_lossy(raw));
    }
    if let Some(expected) = &config.ident {
        let ok = buffer_has_identifier(buf, expected, config.size_prefixed);
        println!(
            "  Expected:     {:?} {}",
            String::from_utf8_lossy(expected),
            if ok { "✅" } else { "❌" }
        );
    }

    dump_table(&root)
}

fn dump_table(table: &Table<'_>) -> DecodeResult<()> {
    let vtable = table.vtable()?;
    let table_len = vtable.table_len()?;

    println!("\n📋 Vtable @{:#x}", vtable.loc());
    println!("------------------------------------------");
    println!("  vtable length: {} bytes", vtable.len());
    println!("  table length:  {} bytes", table_len);
    println!("  slots:         {}", vtable.num_fields());

    // Offset field terurut, untuk menebak lebar tiap field
    let mut offsets: Vec<usize> = Vec::with_capacity(vtable.num_fields());
    for slot in 0..vtable.num_fields() {
        let off = vtable.get(flatbed::protocol::field_index_to_voffset(slot as u16))? as usize;
        if off != 0 {
            offsets.push(off);
        }
    }
    offsets.sort_unstable();

    for slot in 0..vtable.num_fields() {
        let voffset = flatbed::protocol::field_index_to_voffset(slot as u16);
        let off = vtable.get(voffset)? as usize;
        if off == 0 {
            println!("  [{:2}] voffset {:3}  absent", slot, voffset);
            continue;
        }
        let end = offsets
            .iter()
            .copied()
            .find(|&o| o > off)
            .unwrap_or(table_len);
        let start = table.loc() + off;
        let rendered = match table.buf().get(start..table.loc() + end) {
            Some(bytes) => {
                debug!(slot, start, width = bytes.len(), "field");
                hex(bytes)
            }
            None => "<out of bounds>".to_string(),
        };
        println!("  [{:2}] voffset {:3}  @{:#06x}  {}", slot, voffset, start, rendered);
    }
    Ok(())
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_args() -> InspectConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = InspectConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--size-prefixed" | "-s" => {
                config.size_prefixed = true;
            }
            "--ident" | "-i" => {
                if i + 1 < args.len() {
                    let raw = args[i + 1].as_bytes();
                    if raw.len() == 4 {
                        config.ident = Some([raw[0], raw[1], raw[2], raw[3]]);
                    } else {
                        eprintln!("--ident needs exactly 4 bytes, ignoring {:?}", args[i + 1]);
                    }
                    i += 1;
                }
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                println!("Flatbed Inspect - dump table buffer layout\n");
                println!("Usage: flatbed_inspect <FILE> [OPTIONS]\n");
                println!("Options:");
                println!("  -s, --size-prefixed   Buffer starts with a u32 size prefix");
                println!("  -i, --ident <XXXX>    Check the 4-byte file identifier");
                println!("  -v, --verbose         Debug logging");
                println!("  -h, --help            Show this help");
                std::process::exit(0);
            }
            other => {
                if config.path.is_none() {
                    config.path = Some(other.to_string());
                }
            }
        }
        i += 1;
    }

    config
}
