use super::*;
use crate::syscalls::*;

/// ### `fd_pread()`
/// Read from the file at the given offset without updating the file cursor.
/// Each buffer is filled up to its capacity, clamped to the file's stored
/// size; reading past the end of the file yields zero additional bytes, not
/// an error.
/// Inputs:
/// - `Fd fd`
///     The file descriptor to read from
/// - `const Iovec *iovs`
///     Buffers in caller memory to read into
/// - `u32 iovs_len`
///     The number of buffers
/// - `Filesize offset`
///     The file offset to start reading at
/// Output:
/// - `size_t *nread`
///     Where the total number of bytes read is written
#[instrument(level = "trace", skip_all, fields(%fd, %offset, nread = field::Empty), ret)]
pub fn fd_pread<B: Boundary>(
    env: &mut MemFsEnv<B>,
    fd: Fd,
    iovs: WasmPtr,
    iovs_len: u32,
    offset: Filesize,
    nread: WasmPtr,
) -> Errno {
    let inode = wasi_try!(env.state.get_fd(fd)).inode;
    let iovs = read_iovs(env, iovs, iovs_len);

    let MemFsEnv { state, boundary } = env;
    let data = match &state.node(inode).kind {
        Kind::File { data } => data,
        Kind::Directory { .. } => return Errno::Isdir,
        Kind::CharacterDevice => return Errno::Inval,
    };

    let mut total = 0usize;
    for iov in &iovs {
        let start = (offset as usize).saturating_add(total).min(data.len());
        let len = (iov.buf_len as usize).min(data.len() - start);
        boundary.copy_out(iov.buf, &data[start..start + len]);
        total += len;
    }

    Span::current().record("nread", total as u64);
    write_u32_out(boundary, nread, total as u32);
    Errno::Success
}
