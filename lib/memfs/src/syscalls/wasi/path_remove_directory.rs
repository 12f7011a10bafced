use super::*;
use crate::syscalls::*;

/// ### `path_remove_directory()`
/// Remove a directory. Entry removal does not exist in the append-only
/// store; always reports `Errno::Notcapable` after recording the path for
/// the trace.
#[instrument(level = "trace", skip_all, fields(%fd, path = field::Empty), ret)]
pub fn path_remove_directory<B: Boundary>(
    env: &mut MemFsEnv<B>,
    fd: Fd,
    path: WasmPtr,
    path_len: u32,
) -> Errno {
    let len = wasi_try!(read_guest_path(env, path, path_len));
    record_scratch_path(env, len);
    Errno::Notcapable
}
