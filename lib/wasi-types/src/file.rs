use crate::{Device, Filesize, Inode, Linkcount, Timestamp};
use num_enum::TryFromPrimitive;
#[cfg(feature = "enable-serde")]
use serde::{Deserialize, Serialize};

/// The type of a file descriptor or file.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub enum Filetype {
    /// The type of the file descriptor or file is unknown or is different
    /// from any of the other types specified.
    Unknown = 0,
    /// The file descriptor or file refers to a block device inode.
    BlockDevice = 1,
    /// The file descriptor or file refers to a character device inode.
    CharacterDevice = 2,
    /// The file descriptor or file refers to a directory inode.
    Directory = 3,
    /// The file descriptor or file refers to a regular file inode.
    RegularFile = 4,
    /// The file descriptor or file refers to a datagram socket.
    SocketDgram = 5,
    /// The file descriptor or file refers to a byte-stream socket.
    SocketStream = 6,
    /// The file refers to a symbolic link inode.
    SymbolicLink = 7,
}

bitflags::bitflags! {
    /// File descriptor rights, determining which actions may be performed.
    #[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
    pub struct Rights: u64 {
        /// The right to invoke `fd_datasync`.
        const FD_DATASYNC = 1 << 0;
        /// The right to invoke `fd_read` and `sock_recv`.
        const FD_READ = 1 << 1;
        /// The right to invoke `fd_seek`. This flag implies `rights::fd_tell`.
        const FD_SEEK = 1 << 2;
        /// The right to invoke `fd_fdstat_set_flags`.
        const FD_FDSTAT_SET_FLAGS = 1 << 3;
        /// The right to invoke `fd_sync`.
        const FD_SYNC = 1 << 4;
        /// The right to invoke `fd_seek` in such a way that the file offset
        /// remains unaltered, or to invoke `fd_tell`.
        const FD_TELL = 1 << 5;
        /// The right to invoke `fd_write` and `sock_send`.
        const FD_WRITE = 1 << 6;
        /// The right to invoke `fd_advise`.
        const FD_ADVISE = 1 << 7;
        /// The right to invoke `fd_allocate`.
        const FD_ALLOCATE = 1 << 8;
        /// The right to invoke `path_create_directory`.
        const PATH_CREATE_DIRECTORY = 1 << 9;
        /// If `rights::path_open` is set, the right to invoke `path_open`
        /// with `oflags::creat`.
        const PATH_CREATE_FILE = 1 << 10;
        /// The right to invoke `path_link` with the file descriptor as the
        /// source directory.
        const PATH_LINK_SOURCE = 1 << 11;
        /// The right to invoke `path_link` with the file descriptor as the
        /// target directory.
        const PATH_LINK_TARGET = 1 << 12;
        /// The right to invoke `path_open`.
        const PATH_OPEN = 1 << 13;
        /// The right to invoke `fd_readdir`.
        const FD_READDIR = 1 << 14;
        /// The right to invoke `path_readlink`.
        const PATH_READLINK = 1 << 15;
        /// The right to invoke `path_rename` with the file descriptor as the
        /// source directory.
        const PATH_RENAME_SOURCE = 1 << 16;
        /// The right to invoke `path_rename` with the file descriptor as the
        /// target directory.
        const PATH_RENAME_TARGET = 1 << 17;
        /// The right to invoke `path_filestat_get`.
        const PATH_FILESTAT_GET = 1 << 18;
        /// The right to change a file's size.
        /// If `rights::path_open` is set, includes the right to invoke
        /// `path_open` with `oflags::trunc`.
        const PATH_FILESTAT_SET_SIZE = 1 << 19;
        /// The right to invoke `path_filestat_set_times`.
        const PATH_FILESTAT_SET_TIMES = 1 << 20;
        /// The right to invoke `fd_filestat_get`.
        const FD_FILESTAT_GET = 1 << 21;
        /// The right to invoke `fd_filestat_set_size`.
        const FD_FILESTAT_SET_SIZE = 1 << 22;
        /// The right to invoke `fd_filestat_set_times`.
        const FD_FILESTAT_SET_TIMES = 1 << 23;
        /// The right to invoke `path_symlink`.
        const PATH_SYMLINK = 1 << 24;
        /// The right to invoke `path_remove_directory`.
        const PATH_REMOVE_DIRECTORY = 1 << 25;
        /// The right to invoke `path_unlink_file`.
        const PATH_UNLINK_FILE = 1 << 26;
        /// If `rights::fd_read` is set, includes the right to invoke
        /// `poll_oneoff` to subscribe to `eventtype::fd_read`.
        /// If `rights::fd_write` is set, includes the right to invoke
        /// `poll_oneoff` to subscribe to `eventtype::fd_write`.
        const POLL_FD_READWRITE = 1 << 27;
        /// The right to invoke `sock_shutdown`.
        const SOCK_SHUTDOWN = 1 << 28;
    }
}

impl Rights {
    /// The rights granted to every file descriptor at creation time.
    pub const fn default_file() -> Self {
        Self::from_bits_truncate(0x0000_0000_1fff_ffff)
    }

    /// The rights granted to every directory descriptor at creation time.
    /// Descriptors opened beneath a directory inherit from this mask without
    /// narrowing.
    pub const fn default_dir() -> Self {
        Self::from_bits_truncate(0x0000_0000_1fff_ffff)
    }
}

impl core::fmt::Display for Rights {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Rights(")?;
        core::fmt::Debug::fmt(self, f)?;
        f.write_str(" (0x")?;
        core::fmt::LowerHex::fmt(&self.bits(), f)?;
        f.write_str("))")?;
        Ok(())
    }
}

bitflags::bitflags! {
    /// File descriptor flags.
    #[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
    pub struct Fdflags: u16 {
        /// Append mode: data written to the file is always appended to the
        /// file's end.
        const APPEND = 1 << 0;
        /// Write according to synchronized I/O data integrity completion.
        /// Only the data stored in the file is synchronized.
        const DSYNC = 1 << 1;
        /// Non-blocking mode.
        const NONBLOCK = 1 << 2;
        /// Synchronized read I/O operations.
        const RSYNC = 1 << 3;
        /// Write according to synchronized I/O file integrity completion.
        const SYNC = 1 << 4;
    }
}

bitflags::bitflags! {
    /// Open flags used by `path_open`.
    #[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
    pub struct Oflags: u16 {
        /// Create file if it does not exist.
        const CREATE = 1 << 0;
        /// Fail if not a directory.
        const DIRECTORY = 1 << 1;
        /// Fail if file already exists.
        const EXCL = 1 << 2;
        /// Truncate file to size 0.
        const TRUNC = 1 << 3;
    }
}

bitflags::bitflags! {
    /// Flags determining the method of how paths are resolved.
    #[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
    pub struct Lookupflags: u32 {
        /// As long as the resolved path corresponds to a symbolic link, it is
        /// expanded.
        const SYMLINK_FOLLOW = 1 << 0;
    }
}

/// Identifies the kind of a preopened capability.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub enum Preopentype {
    /// A pre-opened directory.
    Dir = 0,
}

/// File descriptor attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub struct Fdstat {
    /// File type.
    pub fs_filetype: Filetype,
    /// File descriptor flags.
    pub fs_flags: Fdflags,
    /// Rights that apply to this file descriptor.
    pub fs_rights_base: Rights,
    /// Maximum set of rights that may be installed on new file descriptors
    /// that are created through this file descriptor, e.g., through
    /// `path_open`.
    pub fs_rights_inheriting: Rights,
}

/// File attributes, snapshot0 layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub struct Filestat {
    /// Device ID of device containing the file.
    pub st_dev: Device,
    /// File serial number.
    pub st_ino: Inode,
    /// File type.
    pub st_filetype: Filetype,
    /// Number of hard links to the file.
    pub st_nlink: Linkcount,
    /// For regular files, the file size in bytes. For symbolic links, the
    /// length of the pathname contained in the symbolic link.
    pub st_size: Filesize,
    /// Last data access timestamp.
    pub st_atim: Timestamp,
    /// Last data modification timestamp.
    pub st_mtim: Timestamp,
    /// Last file status change timestamp.
    pub st_ctim: Timestamp,
}

impl Default for Filestat {
    fn default() -> Self {
        Self {
            st_dev: Default::default(),
            st_ino: Default::default(),
            st_filetype: Filetype::Unknown,
            st_nlink: 1,
            st_size: Default::default(),
            st_atim: Default::default(),
            st_mtim: Default::default(),
            st_ctim: Default::default(),
        }
    }
}

/// Information about a pre-opened capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub struct Prestat {
    /// The kind of the preopen.
    pub pr_type: Preopentype,
    /// The length of the directory name for `Preopentype::Dir`.
    pub pr_name_len: u32,
}

impl Prestat {
    pub fn dir(name_len: u32) -> Self {
        Prestat {
            pr_type: Preopentype::Dir,
            pr_name_len: name_len,
        }
    }
}

/// Encoded size of [`Fdstat`].
pub const FDSTAT_SIZE: usize = 24;
/// Encoded size of [`Filestat`] (snapshot0).
pub const FILESTAT_SIZE: usize = 56;
/// Encoded size of [`Prestat`].
pub const PRESTAT_SIZE: usize = 8;

pub fn fdstat_to_le_bytes(stat: &Fdstat) -> Vec<u8> {
    let mut out = Vec::with_capacity(FDSTAT_SIZE);
    out.push(stat.fs_filetype as u8);
    out.push(0);
    out.extend_from_slice(&stat.fs_flags.bits().to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&stat.fs_rights_base.bits().to_le_bytes());
    out.extend_from_slice(&stat.fs_rights_inheriting.bits().to_le_bytes());
    assert_eq!(out.len(), FDSTAT_SIZE);
    out
}

pub fn filestat_to_le_bytes(stat: &Filestat) -> Vec<u8> {
    let mut out = Vec::with_capacity(FILESTAT_SIZE);
    out.extend_from_slice(&stat.st_dev.to_le_bytes());
    out.extend_from_slice(&stat.st_ino.to_le_bytes());
    out.push(stat.st_filetype as u8);
    out.extend_from_slice(&[0; 3]);
    out.extend_from_slice(&stat.st_nlink.to_le_bytes());
    out.extend_from_slice(&stat.st_size.to_le_bytes());
    out.extend_from_slice(&stat.st_atim.to_le_bytes());
    out.extend_from_slice(&stat.st_mtim.to_le_bytes());
    out.extend_from_slice(&stat.st_ctim.to_le_bytes());
    assert_eq!(out.len(), FILESTAT_SIZE);
    out
}

pub fn prestat_to_le_bytes(prestat: &Prestat) -> Vec<u8> {
    let mut out = Vec::with_capacity(PRESTAT_SIZE);
    out.push(prestat.pr_type as u8);
    out.extend_from_slice(&[0; 3]);
    out.extend_from_slice(&prestat.pr_name_len.to_le_bytes());
    assert_eq!(out.len(), PRESTAT_SIZE);
    out
}
