use super::*;
use crate::syscalls::*;

/// ### `fd_filestat_get()`
/// Get the metadata of the node an open file descriptor refers to.
/// Input:
/// - `Fd fd`
///     The open file descriptor whose metadata will be read
/// Output:
/// - `Filestat *buf`
///     Where the metadata from `fd` will be written
#[instrument(level = "trace", skip_all, fields(%fd), ret)]
pub fn fd_filestat_get<B: Boundary>(env: &mut MemFsEnv<B>, fd: Fd, buf: WasmPtr) -> Errno {
    let stat = wasi_try!(env.state.filestat_fd(fd));
    env.boundary.copy_out(buf, &filestat_to_le_bytes(&stat));
    Errno::Success
}
