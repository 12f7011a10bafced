use super::*;
use crate::syscalls::*;

/// ### `fd_seek()`
/// Update the offset of a file descriptor. Descriptors here carry no cursor;
/// always reports `Errno::Notcapable`.
#[instrument(level = "trace", skip_all, fields(%fd, %offset, %whence), ret)]
pub fn fd_seek<B: Boundary>(
    _env: &mut MemFsEnv<B>,
    fd: Fd,
    offset: i64,
    whence: u8,
    _newoffset: WasmPtr,
) -> Errno {
    Errno::Notcapable
}
