use super::*;
use crate::syscalls::*;

/// ### `fd_read()`
/// Read from a file descriptor at its current cursor. Descriptors here have
/// no cursor; callers read through `fd_pread` instead. Always reports
/// `Errno::Notcapable`.
#[instrument(level = "trace", skip_all, fields(%fd, %iovs_len), ret)]
pub fn fd_read<B: Boundary>(
    _env: &mut MemFsEnv<B>,
    fd: Fd,
    _iovs: WasmPtr,
    iovs_len: u32,
    _nread: WasmPtr,
) -> Errno {
    Errno::Notcapable
}
