use super::*;
use crate::syscalls::*;

/// ### `fd_fdstat_set_flags()`
/// Set file descriptor flags for a file descriptor. Not permitted under this
/// capability model; always reports `Errno::Notcapable`.
#[instrument(level = "trace", skip_all, fields(%fd, ?flags), ret)]
pub fn fd_fdstat_set_flags<B: Boundary>(_env: &mut MemFsEnv<B>, fd: Fd, flags: Fdflags) -> Errno {
    Errno::Notcapable
}
