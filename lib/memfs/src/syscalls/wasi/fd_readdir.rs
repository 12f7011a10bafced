use super::*;
use crate::syscalls::*;

/// ### `fd_readdir()`
/// Read directory entries from a directory. Not wired up to the entry store
/// in this capability model; always reports `Errno::Notcapable`.
#[instrument(level = "trace", skip_all, fields(%fd, %buf_len, %cookie), ret)]
pub fn fd_readdir<B: Boundary>(
    _env: &mut MemFsEnv<B>,
    fd: Fd,
    _buf: WasmPtr,
    buf_len: u32,
    cookie: Dircookie,
    _bufused: WasmPtr,
) -> Errno {
    Errno::Notcapable
}
