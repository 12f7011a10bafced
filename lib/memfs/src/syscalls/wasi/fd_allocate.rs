use super::*;
use crate::syscalls::*;

/// ### `fd_allocate()`
/// Allocate extra space for a file descriptor. Files in the synthetic tree
/// never grow after creation; always reports `Errno::Notcapable`.
#[instrument(level = "trace", skip_all, fields(%fd, %offset, %len), ret)]
pub fn fd_allocate<B: Boundary>(
    _env: &mut MemFsEnv<B>,
    fd: Fd,
    offset: Filesize,
    len: Filesize,
) -> Errno {
    Errno::Notcapable
}
