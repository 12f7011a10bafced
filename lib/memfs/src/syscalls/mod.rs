//! The externally callable WASI snapshot0 operations.
//!
//! Every operation validates descriptors against the table, resolves paths
//! through the directory-entry store, and marshals results through the
//! [`Boundary`] collaborator. Each returns a single [`Errno`]; output
//! parameters are written through the boundary only on success. Failures are
//! returned to the immediate caller, never retried and never swallowed;
//! tracing is a best-effort side channel on top.

mod wasi;

pub use self::wasi::*;
pub use memfs_wasi_types::*;

pub use crate::boundary::Boundary;
pub use crate::fs::MemFs;
pub(crate) use crate::fs::{Kind, MAX_PATH};
pub(crate) use byteorder::{ByteOrder, LittleEndian};
pub(crate) use tracing::{field, instrument, Span};

/// Engine state plus the boundary collaborator, threaded through every
/// operation.
pub struct MemFsEnv<B> {
    pub state: MemFs,
    pub boundary: B,
}

impl<B: Boundary> MemFsEnv<B> {
    /// Initializes a fresh engine (stdio descriptors plus the root preopen)
    /// behind `boundary`. Initialization happens here, once, before any
    /// operation can be invoked.
    pub fn new(boundary: B) -> Self {
        Self::with_state(MemFs::new(), boundary)
    }

    /// Wraps an already-seeded engine, e.g. one built by
    /// [`crate::MemFsBuilder`].
    pub fn with_state(state: MemFs, boundary: B) -> Self {
        MemFsEnv { state, boundary }
    }
}

/// Copies a path argument into the engine-side scratch buffer and returns
/// its byte length.
pub(crate) fn read_guest_path<B: Boundary>(
    env: &mut MemFsEnv<B>,
    path: WasmPtr,
    path_len: u32,
) -> Result<usize, Errno> {
    let len = path_len as usize;
    if len > MAX_PATH {
        return Err(Errno::Nametoolong);
    }
    env.boundary.copy_in(&mut env.state.path_buf[..len], path);
    Ok(len)
}

/// Records the scratch path on the current span, for the syscall traces.
pub(crate) fn record_scratch_path<B: Boundary>(env: &MemFsEnv<B>, len: usize) {
    let path = String::from_utf8_lossy(&env.state.path_buf[..len]);
    Span::current().record("path", path.as_ref());
}

pub(crate) fn read_iovs<B: Boundary>(env: &MemFsEnv<B>, iovs: WasmPtr, iovs_len: u32) -> Vec<Iovec> {
    let mut raw = vec![0u8; iovs_len as usize * IOVEC_SIZE];
    env.boundary.copy_in(&mut raw, iovs);
    raw.chunks_exact(IOVEC_SIZE)
        .map(|chunk| Iovec {
            buf: LittleEndian::read_u32(&chunk[..4]),
            buf_len: LittleEndian::read_u32(&chunk[4..]),
        })
        .collect()
}

pub(crate) fn read_ciovs<B: Boundary>(
    env: &MemFsEnv<B>,
    iovs: WasmPtr,
    iovs_len: u32,
) -> Vec<Ciovec> {
    let mut raw = vec![0u8; iovs_len as usize * IOVEC_SIZE];
    env.boundary.copy_in(&mut raw, iovs);
    raw.chunks_exact(IOVEC_SIZE)
        .map(|chunk| Ciovec {
            buf: LittleEndian::read_u32(&chunk[..4]),
            buf_len: LittleEndian::read_u32(&chunk[4..]),
        })
        .collect()
}

/// Writes a little-endian `u32` result (byte counts, new descriptors)
/// through the boundary.
pub(crate) fn write_u32_out<B: Boundary>(boundary: &mut B, at: WasmPtr, value: u32) {
    let mut raw = [0u8; 4];
    LittleEndian::write_u32(&mut raw, value);
    boundary.copy_out(at, &raw);
}
