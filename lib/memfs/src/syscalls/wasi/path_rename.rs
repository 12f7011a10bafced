use super::*;
use crate::syscalls::*;

/// ### `path_rename()`
/// Rename a file or directory. Mutation through the syscall surface is not
/// permitted under this capability model; always reports `Errno::Notcapable`
/// after recording both paths for the trace.
#[instrument(
    level = "trace",
    skip_all,
    fields(%old_fd, old_path = field::Empty, %new_fd, new_path = field::Empty),
    ret
)]
pub fn path_rename<B: Boundary>(
    env: &mut MemFsEnv<B>,
    old_fd: Fd,
    old_path: WasmPtr,
    old_path_len: u32,
    new_fd: Fd,
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
