use super::*;
use crate::syscalls::*;

/// ### `fd_close()`
/// Close an open file descriptor.
///
/// Only the descriptor slot is released; the node it pointed at, and that
/// node's buffers, stay allocated for the lifetime of the engine.
/// Inputs:
/// - `Fd fd`
///     A file descriptor mapping to an open file to close
/// Errors:
/// - `Errno::Badf`
///     If `fd` is invalid or not open
#[instrument(level = "trace", skip_all, fields(%fd), ret)]
pub fn fd_close<B: Boundary>(env: &mut MemFsEnv<B>, fd: Fd) -> Errno {
    wasi_try!(env.state.close_fd(fd));
    Errno::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EmulatedGuest, MemFsBuilder, ROOT_FD};
    use pretty_assertions::assert_eq;

    fn setup() -> MemFsEnv<EmulatedGuest> {
        let fs = MemFsBuilder::new().with_file("f", b"data").unwrap().build();
        MemFsEnv::with_state(fs, EmulatedGuest::new(0x1000))
    }

    fn open_f(env: &mut MemFsEnv<EmulatedGuest>) -> Fd {
        env.boundary.write_bytes(0x10, b"f");
        let errno = path_open(
            env,
            ROOT_FD,
            Lookupflags::empty(),
            0x10,
            1,
            Oflags::empty(),
            Rights::default_file(),
            Rights::default_file(),
            Fdflags::empty(),
            0x40,
        );
        assert_eq!(errno, Errno::Success);
        env.boundary.read_u32(0x40)
    }

    #[test]
    fn closing_an_open_descriptor_frees_the_slot() {
        let mut env = setup();
        let fd = open_f(&mut env);
        assert_eq!(fd_close(&mut env, fd), Errno::Success);
        assert_eq!(fd_close(&mut env, fd), Errno::Badf);
    }

    #[test]
    fn closed_numbers_are_reused_lowest_first() {
        let mut env = setup();
        let a = open_f(&mut env);
        let b = open_f(&mut env);
        assert_eq!((a, b), (4, 5));
        assert_eq!(fd_close(&mut env, a), Errno::Success);
        assert_eq!(open_f(&mut env), a);
    }

    #[test]
    fn unknown_descriptors_report_badf() {
        let mut env = setup();
        assert_eq!(fd_close(&mut env, 99), Errno::Badf);
    }
}
