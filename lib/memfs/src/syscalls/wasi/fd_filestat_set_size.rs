use super::*;
use crate::syscalls::*;

/// ### `fd_filestat_set_size()`
/// Change the size of an open file. There is no truncation or growth path
/// into the synthetic tree; always reports `Errno::Notcapable`.
#[instrument(level = "trace", skip_all, fields(%fd, %st_size), ret)]
pub fn fd_filestat_set_size<B: Boundary>(
    _env: &mut MemFsEnv<B>,
    fd: Fd,
    st_size: Filesize,
) -> Errno {
    Errno::Notcapable
}
