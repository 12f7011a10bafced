//! The filesystem state: inode arena, descriptor table, and path resolution.

pub(crate) mod arena;
pub(crate) mod dirent;
pub(crate) mod fd_table;

use self::arena::NodeArena;
use self::dirent::DirentStore;
use self::fd_table::{FdEntry, FdTable};
use memfs_wasi_types::{
    Device, Errno, Fd, Fdflags, Fdstat, Filestat, Filetype, Inode, Prestat, Rights,
};
use tracing::debug;

/// Capacity of the inode arena.
pub const MAX_NODES: usize = 1024;
/// Capacity of the descriptor table.
pub const MAX_FDS: usize = 4096;
/// Upper bound on the byte length of a path argument.
pub const MAX_PATH: usize = 8192;

/// The preopened root directory descriptor, established at initialization
/// right after the three stdio descriptors.
pub const ROOT_FD: Fd = 3;

const STDIN_DEVICE: Device = 0;
const STDOUT_DEVICE: Device = 1;
const STDERR_DEVICE: Device = 2;
/// Device id reported for everything that lives in the synthetic tree.
const MEM_DEVICE: Device = 3;

/// Node content, selected by the node's file type. Access goes through this
/// tag only; there is no way to read file bytes out of a directory node.
#[derive(Debug)]
pub(crate) enum Kind {
    File { data: Vec<u8> },
    Directory { entries: DirentStore },
    CharacterDevice,
}

/// One arena-allocated record: a file, directory, or character device.
#[derive(Debug)]
pub(crate) struct Node {
    /// Inode of the containing directory; the root points at itself.
    pub parent: Inode,
    /// The node's own name, not a full path.
    pub name: String,
    pub stat: Filestat,
    pub kind: Kind,
}

/// The whole engine state. Constructed exactly once per sandbox by
/// [`MemFs::new`] (or through [`crate::MemFsBuilder`]); there is no teardown,
/// the embedder drops it with the rest of the sandbox.
#[derive(Debug)]
pub struct MemFs {
    nodes: NodeArena,
    fds: FdTable,
    root: Inode,
    /// Scratch buffer that path arguments are copied into before resolution.
    pub(crate) path_buf: Vec<u8>,
}

impl MemFs {
    /// Builds the initial state: stdin/stdout/stderr as character device
    /// nodes bound to descriptors 0 to 2, and an empty root directory bound
    /// to the [`ROOT_FD`] preopen.
    pub fn new() -> Self {
        let mut fs = MemFs {
            nodes: NodeArena::new(MAX_NODES),
            fds: FdTable::new(MAX_FDS),
            root: 0,
            path_buf: vec![0; MAX_PATH],
        };

        let stdin = fs.create_node(None, "stdin", char_device_stat(STDIN_DEVICE), Kind::CharacterDevice);
        let fd = fs.bind_fd(Rights::default_file(), Rights::default_file(), Fdflags::empty(), stdin, false)
            .expect("fresh descriptor table cannot be full");
        assert_eq!(fd, 0);

        let stdout = fs.create_node(None, "stdout", char_device_stat(STDOUT_DEVICE), Kind::CharacterDevice);
        let fd = fs.bind_fd(Rights::default_file(), Rights::default_file(), Fdflags::APPEND, stdout, false)
            .expect("fresh descriptor table cannot be full");
        assert_eq!(fd, 1);

        let stderr = fs.create_node(None, "stderr", char_device_stat(STDERR_DEVICE), Kind::CharacterDevice);
        let fd = fs.bind_fd(Rights::default_file(), Rights::default_file(), Fdflags::APPEND, stderr, false)
            .expect("fresh descriptor table cannot be full");
        assert_eq!(fd, 2);

        let root = fs.create_node(None, "/", directory_stat(), Kind::Directory { entries: DirentStore::new() });
        fs.root = root;
        fs.append_dirent(root, ".", root);
        fs.append_dirent(root, "..", root);
        let fd = fs.bind_fd(Rights::default_dir(), Rights::default_dir(), Fdflags::empty(), root, true)
            .expect("fresh descriptor table cannot be full");
        assert_eq!(fd, ROOT_FD);

        fs
    }

    /// The inode of the preopened root directory.
    pub fn root(&self) -> Inode {
        self.root
    }

    /// Creates a directory under `parent` and seeds its `.` and `..`
    /// entries. Appending a name that already exists is permitted; the older
    /// entry keeps winning lookups.
    pub fn create_dir_at(&mut self, parent: Inode, name: &str) -> Result<Inode, Errno> {
        if !matches!(self.nodes.get(parent).kind, Kind::Directory { .. }) {
            return Err(Errno::Notdir);
        }
        let inode = self.create_node(
            Some(parent),
            name,
            directory_stat(),
            Kind::Directory { entries: DirentStore::new() },
        );
        self.append_dirent(inode, ".", inode);
        self.append_dirent(inode, "..", parent);
        self.append_dirent(parent, name, inode);
        Ok(inode)
    }

    /// Creates a regular file under `parent` holding `contents`. The buffer
    /// is sized to the contents once; there is no append or truncate path.
    pub fn create_file_at(&mut self, parent: Inode, name: &str, contents: &[u8]) -> Result<Inode, Errno> {
        if !matches!(self.nodes.get(parent).kind, Kind::Directory { .. }) {
            return Err(Errno::Notdir);
        }
        let mut stat = file_stat();
        stat.st_size = contents.len() as u64;
        let inode = self.create_node(
            Some(parent),
            name,
            stat,
            Kind::File { data: contents.to_vec() },
        );
        self.append_dirent(parent, name, inode);
        Ok(inode)
    }

    /// Resolves a `/`-separated path, one component per directory level,
    /// starting at `dir`. Returns the matched inode and its containing
    /// directory, or `None` when a component is missing or a non-terminal
    /// component is not a directory. The first matching entry wins.
    pub(crate) fn lookup_path(&self, dir: Inode, path: &[u8]) -> Option<(Inode, Inode)> {
        let entries = match &self.nodes.get(dir).kind {
            Kind::Directory { entries } => entries,
            _ => return None,
        };
        let sep = path.iter().position(|&b| b == b'/').unwrap_or(path.len());
        let component = &path[..sep];
        for record in entries.iter() {
            if record.name != component {
                continue;
            }
            if sep == path.len() {
                return Some((record.dirent.d_ino, dir));
            }
            if record.dirent.d_type == Filetype::Directory {
                return self.lookup_path(record.dirent.d_ino, &path[sep + 1..]);
            }
            // Cannot descend through a non-directory.
            return None;
        }
        None
    }

    pub(crate) fn get_fd(&self, fd: Fd) -> Result<&FdEntry, Errno> {
        self.fds.get(fd)
    }

    pub(crate) fn node(&self, inode: Inode) -> &Node {
        self.nodes.get(inode)
    }

    pub fn fdstat(&self, fd: Fd) -> Result<Fdstat, Errno> {
        let entry = self.fds.get(fd)?;
        debug!(%fd, ?entry, "fdstat");
        Ok(entry.stat)
    }

    pub fn filestat_fd(&self, fd: Fd) -> Result<Filestat, Errno> {
        let entry = self.fds.get(fd)?;
        Ok(self.nodes.get(entry.inode).stat)
    }

    pub fn prestat_fd(&self, fd: Fd) -> Result<Prestat, Errno> {
        let entry = self.fds.get(fd)?;
        if !entry.is_preopen {
            return Err(Errno::Badf);
        }
        assert_eq!(entry.stat.fs_filetype, Filetype::Directory);
        Ok(Prestat::dir(self.nodes.get(entry.inode).name.len() as u32))
    }

    /// The name of a preopened directory, for `fd_prestat_dir_name`.
    pub fn preopen_name(&self, fd: Fd) -> Result<&str, Errno> {
        let entry = self.fds.get(fd)?;
        if !entry.is_preopen {
            return Err(Errno::Badf);
        }
        assert_eq!(entry.stat.fs_filetype, Filetype::Directory);
        Ok(&self.nodes.get(entry.inode).name)
    }

    /// Binds a fresh descriptor to `inode`. The caller-supplied rights and
    /// flags are stored as given, but the file type always comes from the
    /// node itself; callers cannot claim a false type.
    pub fn create_fd(
        &mut self,
        rights: Rights,
        rights_inheriting: Rights,
        flags: Fdflags,
        inode: Inode,
    ) -> Result<Fd, Errno> {
        self.bind_fd(rights, rights_inheriting, flags, inode, false)
    }

    pub fn close_fd(&mut self, fd: Fd) -> Result<(), Errno> {
        self.fds.release(fd)
    }

    fn bind_fd(
        &mut self,
        rights: Rights,
        rights_inheriting: Rights,
        flags: Fdflags,
        inode: Inode,
        is_preopen: bool,
    ) -> Result<Fd, Errno> {
        let stat = Fdstat {
            fs_filetype: self.nodes.get(inode).stat.st_filetype,
            fs_flags: flags,
            fs_rights_base: rights,
            fs_rights_inheriting: rights_inheriting,
        };
        self.fds.bind(FdEntry {
            stat,
            inode,
            is_preopen,
        })
    }

    fn create_node(
        &mut self,
        parent: Option<Inode>,
        name: &str,
        stat: Filestat,
        kind: Kind,
    ) -> Inode {
        let inode = self.nodes.insert(Node {
            parent: 0,
            name: name.to_owned(),
            stat,
            kind,
        });
        let node = self.nodes.get_mut(inode);
        node.stat.st_ino = inode;
        node.parent = parent.unwrap_or(inode);
        inode
    }

    fn append_dirent(&mut self, dir: Inode, name: &str, target: Inode) {
        let d_type = self.nodes.get(target).stat.st_filetype;
        match &mut self.nodes.get_mut(dir).kind {
            Kind::Directory { entries } => entries.append(name, target, d_type),
            _ => panic!("dirent append on non-directory inode {dir}"),
        }
    }
}

impl Default for MemFs {
    fn default() -> Self {
        Self::new()
    }
}

fn char_device_stat(dev: Device) -> Filestat {
    Filestat {
        st_dev: dev,
        st_filetype: Filetype::CharacterDevice,
        ..Filestat::default()
    }
}

fn directory_stat() -> Filestat {
    Filestat {
        st_dev: MEM_DEVICE,
        st_filetype: Filetype::Directory,
        st_size: 4096,
        ..Filestat::default()
    }
}

fn file_stat() -> Filestat {
    Filestat {
        st_dev: MEM_DEVICE,
        st_filetype: Filetype::RegularFile,
        ..Filestat::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn initialization_lays_out_stdio_and_the_root_preopen() {
        let fs = MemFs::new();
        for fd in 0..=2 {
            let stat = fs.fdstat(fd).unwrap();
            assert_eq!(stat.fs_filetype, Filetype::CharacterDevice);
        }
        assert_eq!(fs.fdstat(1).unwrap().fs_flags, Fdflags::APPEND);
        let root = fs.fdstat(ROOT_FD).unwrap();
        assert_eq!(root.fs_filetype, Filetype::Directory);
        assert_eq!(fs.filestat_fd(ROOT_FD).unwrap().st_ino, fs.root());
        assert_eq!(fs.prestat_fd(ROOT_FD).unwrap(), Prestat::dir(1));
        assert_eq!(fs.preopen_name(ROOT_FD).unwrap(), "/");
    }

    #[test]
    fn stdio_descriptors_are_not_preopens() {
        let fs = MemFs::new();
        for fd in 0..=2 {
            assert_eq!(fs.prestat_fd(fd).unwrap_err(), Errno::Badf);
        }
    }

    #[test]
    fn st_ino_always_equals_the_arena_index() {
        let mut fs = MemFs::new();
        let root = fs.root();
        let dir = fs.create_dir_at(root, "a").unwrap();
        let file = fs.create_file_at(dir, "b.txt", b"hello").unwrap();
        assert_eq!(fs.node(dir).stat.st_ino, dir);
        assert_eq!(fs.node(file).stat.st_ino, file);
        assert_eq!(fs.node(file).parent, dir);
    }

    #[test]
    fn resolves_nested_paths_from_the_root() {
        let mut fs = MemFs::new();
        let root = fs.root();
        let dir = fs.create_dir_at(root, "a").unwrap();
        let file = fs.create_file_at(dir, "b.txt", b"hello").unwrap();

        assert_eq!(fs.lookup_path(root, b"a"), Some((dir, root)));
        assert_eq!(fs.lookup_path(root, b"a/b.txt"), Some((file, dir)));
        assert_eq!(fs.lookup_path(root, b"."), Some((root, root)));
        assert_eq!(fs.lookup_path(root, b"a/.."), Some((root, dir)));
    }

    #[test]
    fn missing_components_fail_resolution() {
        let mut fs = MemFs::new();
        let root = fs.root();
        let dir = fs.create_dir_at(root, "a").unwrap();
        fs.create_file_at(dir, "b.txt", b"hello").unwrap();

        assert_eq!(fs.lookup_path(root, b"a/missing.txt"), None);
        assert_eq!(fs.lookup_path(root, b"missing"), None);
        assert_eq!(fs.lookup_path(root, b""), None);
    }

    #[test]
    fn descending_through_a_file_fails_resolution() {
        let mut fs = MemFs::new();
        let root = fs.root();
        let dir = fs.create_dir_at(root, "a").unwrap();
        fs.create_file_at(dir, "b.txt", b"hello").unwrap();

        assert_eq!(fs.lookup_path(root, b"a/b.txt/x"), None);
    }

    #[test]
    fn resolution_from_a_non_directory_fails() {
        let mut fs = MemFs::new();
        let root = fs.root();
        let file = fs.create_file_at(root, "f", b"").unwrap();
        assert_eq!(fs.lookup_path(file, b"x"), None);
    }

    #[test]
    fn duplicate_names_resolve_to_the_oldest_entry() {
        let mut fs = MemFs::new();
        let root = fs.root();
        let first = fs.create_file_at(root, "dup", b"one").unwrap();
        let second = fs.create_file_at(root, "dup", b"two").unwrap();
        assert_ne!(first, second);
        assert_eq!(fs.lookup_path(root, b"dup"), Some((first, root)));
    }

    #[test]
    fn closed_descriptors_are_reused_lowest_first() {
        let mut fs = MemFs::new();
        let root = fs.root();
        let file = fs.create_file_at(root, "f", b"").unwrap();
        let a = fs
            .create_fd(Rights::default_file(), Rights::default_file(), Fdflags::empty(), file)
            .unwrap();
        let b = fs
            .create_fd(Rights::default_file(), Rights::default_file(), Fdflags::empty(), file)
            .unwrap();
        assert_eq!((a, b), (4, 5));

        fs.close_fd(a).unwrap();
        let c = fs
            .create_fd(Rights::default_file(), Rights::default_file(), Fdflags::empty(), file)
            .unwrap();
        assert_eq!(c, a);

        // The still-open stdio and preopen handles were never touched.
        for fd in 0..=3 {
            assert!(fs.fdstat(fd).is_ok());
        }
    }

    #[test]
    fn closing_a_descriptor_leaves_the_node_alive() {
        let mut fs = MemFs::new();
        let root = fs.root();
        let file = fs.create_file_at(root, "f", b"data").unwrap();
        let fd = fs
            .create_fd(Rights::default_file(), Rights::default_file(), Fdflags::empty(), file)
            .unwrap();
        fs.close_fd(fd).unwrap();
        assert_eq!(fs.node(file).stat.st_size, 4);
        assert_eq!(fs.lookup_path(root, b"f"), Some((file, root)));
    }

    #[test]
    fn descriptors_carry_supplied_rights_but_the_real_file_type() {
        let mut fs = MemFs::new();
        let root = fs.root();
        let dir = fs.create_dir_at(root, "a").unwrap();
        let fd = fs
            .create_fd(Rights::FD_READ, Rights::FD_READ, Fdflags::APPEND, dir)
            .unwrap();
        let stat = fs.fdstat(fd).unwrap();
        assert_eq!(stat.fs_filetype, Filetype::Directory);
        assert_eq!(stat.fs_rights_base, Rights::FD_READ);
        assert_eq!(stat.fs_rights_inheriting, Rights::FD_READ);
        assert_eq!(stat.fs_flags, Fdflags::APPEND);
    }

    #[test]
    fn directory_listings_carry_dot_entries_then_children() {
        let mut fs = MemFs::new();
        let root = fs.root();
        fs.create_file_at(root, "one", b"").unwrap();
        fs.create_file_at(root, "two", b"").unwrap();

        let entries = match &fs.node(root).kind {
            Kind::Directory { entries } => entries,
            _ => unreachable!(),
        };
        let names: Vec<_> = entries.iter().map(|r| r.name.to_vec()).collect();
        assert_eq!(
            names,
            vec![b".".to_vec(), b"..".to_vec(), b"one".to_vec(), b"two".to_vec()]
        );
    }

    #[test]
    #[should_panic(expected = "node arena exhausted")]
    fn arena_exhaustion_is_fatal_not_an_errno() {
        let mut fs = MemFs::new();
        let root = fs.root();
        for i in 0..MAX_NODES {
            fs.create_file_at(root, &format!("f{i}"), b"").unwrap();
        }
    }
}
