use super::*;
use crate::syscalls::*;

/// ### `path_filestat_get()`
/// Access metadata about a file or directory by path, resolved relative to
/// the directory `fd` is bound to.
/// Inputs:
/// - `Fd fd`
///     The directory that `path` is relative to
/// - `Lookupflags flags`
///     Flags to control how `path` is understood; there are no symbolic
///     links here, so these are recorded and otherwise ignored
/// - `const char *path`, `u32 path_len`
///     String containing the file path
/// Output:
/// - `Filestat *buf`
///     Where the metadata will be stored
#[instrument(level = "trace", skip_all, fields(%fd, ?flags, path = field::Empty), ret)]
pub fn path_filestat_get<B: Boundary>(
    env: &mut MemFsEnv<B>,
    fd: Fd,
    flags: Lookupflags,
    path: WasmPtr,
    path_len: u32,
    buf: WasmPtr,
) -> Errno {
    let dir_inode = wasi_try!(env.state.get_fd(fd)).inode;
    let len = wasi_try!(read_guest_path(env, path, path_len));
    record_scratch_path(env, len);

    let (inode, _) = wasi_try!(
        env.state.lookup_path(dir_inode, &env.state.path_buf[..len]);
        Errno::Noent
    );
    let stat = env.state.node(inode).stat;
    env.boundary.copy_out(buf, &filestat_to_le_bytes(&stat));
    Errno::Success
}
