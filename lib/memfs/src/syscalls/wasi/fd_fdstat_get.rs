use super::*;
use crate::syscalls::*;

/// ### `fd_fdstat_get()`
/// Get metadata of a file descriptor.
/// Input:
/// - `Fd fd`
///     The file descriptor whose metadata will be accessed
/// Output:
/// - `Fdstat *buf`
///     The location in caller memory where the metadata will be written
#[instrument(level = "trace", skip_all, fields(%fd), ret)]
pub fn fd_fdstat_get<B: Boundary>(env: &mut MemFsEnv<B>, fd: Fd, buf: WasmPtr) -> Errno {
    let stat = wasi_try!(env.state.fdstat(fd));
    env.boundary.copy_out(buf, &fdstat_to_le_bytes(&stat));
    Errno::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EmulatedGuest, MemFsEnv, ROOT_FD};
    use pretty_assertions::assert_eq;

    fn setup() -> MemFsEnv<EmulatedGuest> {
        MemFsEnv::new(EmulatedGuest::new(0x1000))
    }

    #[test]
    fn stdio_descriptors_report_character_devices() {
        let mut env = setup();
        for fd in 0..=2 {
            assert_eq!(fd_fdstat_get(&mut env, fd, 0x100), Errno::Success);
            let encoded = env.boundary.read_bytes(0x100, FDSTAT_SIZE);
            assert_eq!(encoded[0], Filetype::CharacterDevice as u8);
        }
    }

    #[test]
    fn the_root_preopen_reports_a_directory_with_directory_rights() {
        let mut env = setup();
        assert_eq!(fd_fdstat_get(&mut env, ROOT_FD, 0x100), Errno::Success);
        assert_eq!(
            env.boundary.read_bytes(0x100, 1)[0],
            Filetype::Directory as u8
        );
        assert_eq!(
            env.boundary.read_u64(0x100 + 8),
            Rights::default_dir().bits()
        );
        assert_eq!(
            env.boundary.read_u64(0x100 + 16),
            Rights::default_dir().bits()
        );
    }

    #[test]
    fn unknown_descriptors_report_badf_and_write_nothing() {
        let mut env = setup();
        assert_eq!(fd_fdstat_get(&mut env, 1500, 0x100), Errno::Badf);
        assert_eq!(env.boundary.read_bytes(0x100, FDSTAT_SIZE), [0; FDSTAT_SIZE]);
    }
}
