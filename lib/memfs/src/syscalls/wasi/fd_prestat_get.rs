use super::*;
use crate::syscalls::*;

/// ### `fd_prestat_get()`
/// Get metadata about a preopened file descriptor, so a caller can discover
/// the namespace roots it was granted.
/// Input:
/// - `Fd fd`
///     The preopened file descriptor to query
/// Output:
/// - `Prestat *buf`
///     Where the metadata will be written
/// Errors:
/// - `Errno::Badf`
///     If `fd` is not open or is not a preopen
#[instrument(level = "trace", skip_all, fields(%fd), ret)]
pub fn fd_prestat_get<B: Boundary>(env: &mut MemFsEnv<B>, fd: Fd, buf: WasmPtr) -> Errno {
    let prestat = wasi_try!(env.state.prestat_fd(fd));
    env.boundary.copy_out(buf, &prestat_to_le_bytes(&prestat));
    Errno::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EmulatedGuest, MemFsEnv, ROOT_FD};
    use pretty_assertions::assert_eq;

    #[test]
    fn the_root_preopen_reports_its_name_length() {
        let mut env = MemFsEnv::new(EmulatedGuest::new(0x1000));
        assert_eq!(fd_prestat_get(&mut env, ROOT_FD, 0x100), Errno::Success);
        assert_eq!(env.boundary.read_bytes(0x100, 1)[0], Preopentype::Dir as u8);
        assert_eq!(env.boundary.read_u32(0x104), 1);
    }

    #[test]
    fn stdio_descriptors_are_not_preopens() {
        let mut env = MemFsEnv::new(EmulatedGuest::new(0x1000));
        for fd in 0..=2 {
            assert_eq!(fd_prestat_get(&mut env, fd, 0x100), Errno::Badf);
        }
    }

    #[test]
    fn unknown_descriptors_report_badf() {
        let mut env = MemFsEnv::new(EmulatedGuest::new(0x1000));
        assert_eq!(fd_prestat_get(&mut env, 50, 0x100), Errno::Badf);
    }
}
