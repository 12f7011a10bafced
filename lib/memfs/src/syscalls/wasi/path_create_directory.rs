use super::*;
use crate::syscalls::*;

/// ### `path_create_directory()`
/// Create a directory at a path. Mutation through the syscall surface is not
/// permitted under this capability model; always reports `Errno::Notcapable`
/// after recording the path for the trace.
#[instrument(level = "trace", skip_all, fields(%fd, path = field::Empty), ret)]
pub fn path_create_directory<B: Boundary>(
    env: &mut MemFsEnv<B>,
    fd: Fd,
    path: WasmPtr,
    path_len: u32,
) -> Errno {
    let len = wasi_try!(read_guest_path(env, path, path_len));
    record_scratch_path(env, len);
    Errno::Notcapable
}
