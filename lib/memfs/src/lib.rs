//! An in-memory filesystem that exposes the WASI snapshot0 file and
//! directory syscall surface to a sandboxed module, with no access to a host
//! filesystem.
//!
//! The engine owns a bounded inode arena, a packed directory-entry store per
//! directory node, and a numeric file-descriptor table; a recursive path
//! resolver walks directory entries to turn `/`-separated paths into inodes.
//! Descriptors 0 to 2 pass stdio writes straight through to the host, and
//! descriptor 3 is the preopened root of the synthetic tree.
//!
//! Bytes only cross the trust boundary through the [`Boundary`] collaborator;
//! the engine validates the sizes and offsets on its own side of every copy
//! and leaves caller-space address validation to the collaborator.
//!
//! ```
//! use memfs::{EmulatedGuest, MemFsBuilder, MemFsEnv, ROOT_FD};
//! use memfs_wasi_types::{Errno, Fdflags, Lookupflags, Oflags, Rights};
//!
//! let fs = MemFsBuilder::new()
//!     .with_file("test.c", b"int main() { return 42; }\n")
//!     .unwrap()
//!     .build();
//! let mut env = MemFsEnv::with_state(fs, EmulatedGuest::new(0x10000));
//!
//! // The caller stages a path in its own memory, then opens it.
//! env.boundary.write_bytes(0x100, b"test.c");
//! let errno = memfs::syscalls::path_open(
//!     &mut env,
//!     ROOT_FD,
//!     Lookupflags::empty(),
//!     0x100,
//!     6,
//!     Oflags::empty(),
//!     Rights::default_file(),
//!     Rights::default_file(),
//!     Fdflags::empty(),
//!     0x200,
//! );
//! assert_eq!(errno, Errno::Success);
//! ```

#[macro_use]
mod macros;
mod boundary;
mod builder;
mod fs;
pub mod syscalls;

pub use boundary::{Boundary, EmulatedGuest};
pub use builder::{BuilderError, MemFsBuilder};
pub use fs::{MemFs, MAX_FDS, MAX_NODES, MAX_PATH, ROOT_FD};
pub use syscalls::MemFsEnv;
