use super::*;
use crate::syscalls::*;

/// ### `fd_write()`
/// Write to a file descriptor.
///
/// Descriptors 0 to 2 bypass the filesystem entirely: the iovec list is
/// decoded and handed verbatim to the host's write primitive, whether or not
/// the stdio descriptors are still open. Every other descriptor reports
/// `Errno::Badf`; there is no write path into the in-memory tree.
/// Inputs:
/// - `Fd fd`
///     The file descriptor to write to
/// - `const Ciovec *iovs`
///     Buffers in caller memory to gather from
/// - `u32 iovs_len`
///     The number of buffers
/// Output:
/// - `size_t *nwritten`
///     Where the host-reported byte count is written
#[instrument(level = "trace", skip_all, fields(%fd, nwritten = field::Empty), ret)]
pub fn fd_write<B: Boundary>(
    env: &mut MemFsEnv<B>,
    fd: Fd,
    iovs: WasmPtr,
    iovs_len: u32,
    nwritten: WasmPtr,
) -> Errno {
    if fd <= 2 {
        let iovs = read_ciovs(env, iovs, iovs_len);
        let written = wasi_try!(env.boundary.host_write(fd, &iovs));
        Span::current().record("nwritten", written as u64);
        write_u32_out(&mut env.boundary, nwritten, written as u32);
        return Errno::Success;
    }
    Errno::Badf
}
