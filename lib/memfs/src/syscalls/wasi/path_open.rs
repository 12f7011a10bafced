use super::*;
use crate::syscalls::*;

/// ### `path_open()`
/// Open a file or directory located at `path`, relative to the directory
/// `dirfd` is bound to, and bind it to a fresh descriptor.
///
/// The caller-supplied rights and flags are stored on the new descriptor as
/// given; the descriptor's file type always comes from the resolved node.
/// Creation is not part of this capability model, so any nonzero `oflags`
/// reports `Errno::Notcapable`.
/// Inputs:
/// - `Fd dirfd`
///     The directory that `path` is relative to
/// - `Lookupflags dirflags`
///     Flags for path resolution; recorded, otherwise ignored (no symlinks)
/// - `const char *path`, `u32 path_len`
///     String containing the path of the file or directory to open
/// - `Oflags oflags`
///     How the file will be opened
/// - `Rights fs_rights_base`, `Rights fs_rights_inheriting`
///     The rights attached to the new descriptor
/// - `Fdflags fs_flags`
///     The flags of the file descriptor
/// Output:
/// - `Fd *fd`
///     Where the new file descriptor number is written
#[instrument(
    level = "trace",
    skip_all,
    fields(%dirfd, ?dirflags, path = field::Empty, new_fd = field::Empty),
    ret
)]
#[allow(clippy::too_many_arguments)]
pub fn path_open<B: Boundary>(
    env: &mut MemFsEnv<B>,
    dirfd: Fd,
    dirflags: Lookupflags,
    path: WasmPtr,
    path_len: u32,
    oflags: Oflags,
    fs_rights_base: Rights,
    fs_rights_inheriting: Rights,
    fs_flags: Fdflags,
    fd_out: WasmPtr,
) -> Errno {
    let dir_inode = wasi_try!(env.state.get_fd(dirfd)).inode;
    let len = wasi_try!(read_guest_path(env, path, path_len));
    record_scratch_path(env, len);

    let (inode, _) = wasi_try!(
        env.state.lookup_path(dir_inode, &env.state.path_buf[..len]);
        Errno::Noent
    );
    if !oflags.is_empty() {
        return Errno::Notcapable;
    }

    let fd = wasi_try!(env
        .state
        .create_fd(fs_rights_base, fs_rights_inheriting, fs_flags, inode));
    Span::current().record("new_fd", fd);
    write_u32_out(&mut env.boundary, fd_out, fd);
    Errno::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EmulatedGuest, MemFsBuilder, MemFsEnv, ROOT_FD};
    use pretty_assertions::assert_eq;

    fn setup() -> MemFsEnv<EmulatedGuest> {
        let fs = MemFsBuilder::new()
            .with_file("a/b.txt", b"contents")
            .unwrap()
            .build();
        MemFsEnv::with_state(fs, EmulatedGuest::new(0x10000))
    }

    fn open(
        env: &mut MemFsEnv<EmulatedGuest>,
        dirfd: Fd,
        path: &str,
        oflags: Oflags,
        rights: Rights,
    ) -> Result<Fd, Errno> {
        env.boundary.write_bytes(0x10, path.as_bytes());
        let errno = path_open(
            env,
            dirfd,
            Lookupflags::empty(),
            0x10,
            path.len() as u32,
            oflags,
            rights,
            rights,
            Fdflags::empty(),
            0x40,
        );
        match errno {
            Errno::Success => Ok(env.boundary.read_u32(0x40)),
            err => Err(err),
        }
    }

    #[test]
    fn opens_nested_files_and_reports_the_new_descriptor() {
        let mut env = setup();
        let fd = open(&mut env, ROOT_FD, "a/b.txt", Oflags::empty(), Rights::default_file())
            .unwrap();
        assert_eq!(fd, 4);
        let stat = env.state.fdstat(fd).unwrap();
        assert_eq!(stat.fs_filetype, Filetype::RegularFile);
        assert_eq!(stat.fs_rights_base, Rights::default_file());
    }

    #[test]
    fn opening_a_directory_reports_the_directory_type_regardless_of_rights() {
        let mut env = setup();
        let fd = open(&mut env, ROOT_FD, "a", Oflags::empty(), Rights::FD_READ).unwrap();
        let stat = env.state.fdstat(fd).unwrap();
        assert_eq!(stat.fs_filetype, Filetype::Directory);
        assert_eq!(stat.fs_rights_base, Rights::FD_READ);
    }

    #[test]
    fn descriptors_opened_beneath_an_opened_directory_resolve_relative_paths() {
        let mut env = setup();
        let dir = open(&mut env, ROOT_FD, "a", Oflags::empty(), Rights::default_dir()).unwrap();
        let file = open(&mut env, dir, "b.txt", Oflags::empty(), Rights::default_file()).unwrap();
        let stat = env.state.filestat_fd(file).unwrap();
        assert_eq!(stat.st_size, 8);
    }

    #[test]
    fn missing_paths_report_noent() {
        let mut env = setup();
        assert_eq!(
            open(&mut env, ROOT_FD, "missing", Oflags::empty(), Rights::default_file()),
            Err(Errno::Noent)
        );
    }

    #[test]
    fn resolving_through_a_file_descriptor_reports_noent() {
        let mut env = setup();
        let file = open(&mut env, ROOT_FD, "a/b.txt", Oflags::empty(), Rights::default_file())
            .unwrap();
        assert_eq!(
            open(&mut env, file, "x", Oflags::empty(), Rights::default_file()),
            Err(Errno::Noent)
        );
    }

    #[test]
    fn creation_flags_report_notcapable() {
        let mut env = setup();
        assert_eq!(
            open(&mut env, ROOT_FD, "a/b.txt", Oflags::CREATE, Rights::default_file()),
            Err(Errno::Notcapable)
        );
        assert_eq!(
            open(&mut env, ROOT_FD, "a/b.txt", Oflags::TRUNC, Rights::default_file()),
            Err(Errno::Notcapable)
        );
    }

    #[test]
    fn unknown_directory_descriptors_report_badf() {
        let mut env = setup();
        assert_eq!(
            open(&mut env, 42, "a", Oflags::empty(), Rights::default_file()),
            Err(Errno::Badf)
        );
    }
}
