use super::*;
use crate::syscalls::*;

/// ### `fd_prestat_dir_name()`
/// Copy the name of a preopened directory into caller memory. Copies at most
/// `path_len` bytes; callers size the buffer from `fd_prestat_get`.
/// Inputs:
/// - `Fd fd`
///     The preopened file descriptor to query
/// - `char *path`
///     Where the name will be written
/// - `u32 path_len`
///     The capacity of `path`
#[instrument(level = "trace", skip_all, fields(%fd, %path_len), ret)]
pub fn fd_prestat_dir_name<B: Boundary>(
    env: &mut MemFsEnv<B>,
    fd: Fd,
    path: WasmPtr,
    path_len: u32,
) -> Errno {
    let name = wasi_try!(env.state.preopen_name(fd));
    let len = name.len().min(path_len as usize);
    env.boundary.copy_out(path, &name.as_bytes()[..len]);
    Errno::Success
}
