//! WASI snapshot0 ("wasi_unstable") ABI vocabulary shared by the in-memory
//! sandbox filesystem and its embedders.
//!
//! Everything in this crate mirrors the wire-level contract of the syscall
//! surface: error codes, file types, rights bitmasks, and the aggregate
//! structures (`Fdstat`, `Filestat`, `Dirent`, `Prestat`) together with their
//! little-endian encodings. The engine never hands raw Rust structs across
//! the sandbox boundary; it encodes them with the `*_to_le_bytes` helpers
//! defined here.

mod directory;
mod error;
mod file;
mod io;

pub use directory::*;
pub use error::*;
pub use file::*;
pub use io::*;

/// Non-negative file size or length of a region within a file.
pub type Filesize = u64;
/// Timestamp in nanoseconds.
pub type Timestamp = u64;
/// A file descriptor handle.
pub type Fd = u32;
/// File serial number that is unique within the file system.
pub type Inode = u64;
/// Identifier for a device containing a file system.
pub type Device = u64;
/// Number of hard links to an inode. Snapshot0 keeps this at 32 bits.
pub type Linkcount = u32;
/// A pointer into the sandboxed caller's 32-bit linear memory.
pub type WasmPtr = u32;
