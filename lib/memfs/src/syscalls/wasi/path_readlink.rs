use super::*;
use crate::syscalls::*;

/// ### `path_readlink()`
/// Read the contents of a symbolic link. Symbolic links do not exist in the
/// synthetic tree; always reports `Errno::Notcapable` after recording the
/// path for the trace.
#[instrument(level = "trace", skip_all, fields(%fd, path = field::Empty, %buf_len), ret)]
pub fn path_readlink<B: Boundary>(
    env: &mut MemFsEnv<B>,
    fd: Fd,
    path: WasmPtr,
    path_len: u32,
    _buf: WasmPtr,
    buf_len: u32,
    _bufused: WasmPtr,
) -> Errno {
    let len = wasi_try!(read_guest_path(env, path, path_len));
    record_scratch_path(env, len);
    Errno::Notcapable
}
