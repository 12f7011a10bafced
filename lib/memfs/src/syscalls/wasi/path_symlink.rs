use super::*;
use crate::syscalls::*;

/// ### `path_symlink()`
/// Create a symbolic link. Symbolic links do not exist in the synthetic
/// tree; always reports `Errno::Notcapable` after recording both paths for
/// the trace.
#[instrument(
    level = "trace",
    skip_all,
    fields(old_path = field::Empty, %fd, new_path = field::Empty),
    ret
)]
pub fn path_symlink<B: Boundary>(
    env: &mut MemFsEnv<B>,
    old_path: WasmPtr,
    old_path_len: u32,
    fd: Fd,
    new_path: WasmPtr,
    new_path_len: u32,
) -> Errno {
    let len = wasi_try!(read_guest_path(env, old_path, old_path_len));
    let old = String::from_utf8_lossy(&env.state.path_buf[..len]).into_owned();
    Span::current().record("old_path", old.as_str());
    let len = wasi_try!(read_guest_path(env, new_path, new_path_len));
    let new = String::from_utf8_lossy(&env.state.path_buf[..len]).into_owned();
    Span::current().record("new_path", new.as_str());
    Errno::Notcapable
}
