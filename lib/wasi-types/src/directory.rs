use crate::{Filetype, Inode};
#[cfg(feature = "enable-serde")]
use serde::{Deserialize, Serialize};

/// A reference to the offset of a directory entry.
pub type Dircookie = u64;
/// The cookie denoting the first entry of a directory.
pub const DIRCOOKIE_START: Dircookie = 0;
/// The type for the `d_namlen` field of [`Dirent`].
pub type Dirnamlen = u32;

/// A directory entry header. On the wire it is immediately followed by
/// `d_namlen` name bytes and a terminating null byte; `d_next` is both the
/// offset of the successor entry and the exclusive end of this record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub struct Dirent {
    /// The offset of the next directory entry stored in this directory.
    pub d_next: Dircookie,
    /// The serial number of the file referred to by this directory entry.
    pub d_ino: Inode,
    /// The length of the name of the directory entry.
    pub d_namlen: Dirnamlen,
    /// The type of the file referred to by this directory entry.
    pub d_type: Filetype,
}

/// Encoded size of [`Dirent`], padding included.
pub const DIRENT_SIZE: usize = 24;

pub fn dirent_to_le_bytes(ent: &Dirent) -> Vec<u8> {
    let mut out = Vec::with_capacity(DIRENT_SIZE);
    out.extend_from_slice(&ent.d_next.to_le_bytes());
    out.extend_from_slice(&ent.d_ino.to_le_bytes());
    out.extend_from_slice(&ent.d_namlen.to_le_bytes());
    out.push(ent.d_type as u8);
    out.extend_from_slice(&[0; 3]);
    assert_eq!(out.len(), DIRENT_SIZE);
    out
}

/// Decodes a dirent header from the front of `bytes`. Returns `None` when
/// fewer than [`DIRENT_SIZE`] bytes are available; an unrecognized file type
/// byte decodes as [`Filetype::Unknown`].
pub fn dirent_from_le_bytes(bytes: &[u8]) -> Option<Dirent> {
    if bytes.len() < DIRENT_SIZE {
        return None;
    }
    let u64_at = |at: usize| {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&bytes[at..at + 8]);
        u64::from_le_bytes(raw)
    };
    let d_next = u64_at(0);
    let d_ino = u64_at(8);
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&bytes[16..20]);
    let d_namlen = u32::from_le_bytes(raw);
    let d_type = Filetype::try_from(bytes[20]).unwrap_or(Filetype::Unknown);
    Some(Dirent {
        d_next,
        d_ino,
        d_namlen,
        d_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dirent_encoding_layout() {
        let ent = Dirent {
            d_next: 32,
            d_ino: 5,
            d_namlen: 7,
            d_type: Filetype::RegularFile,
        };
        let bytes = dirent_to_le_bytes(&ent);
        assert_eq!(bytes.len(), DIRENT_SIZE);
        assert_eq!(&bytes[0..8], &32u64.to_le_bytes());
        assert_eq!(&bytes[8..16], &5u64.to_le_bytes());
        assert_eq!(&bytes[16..20], &7u32.to_le_bytes());
        assert_eq!(bytes[20], 4);
        assert_eq!(dirent_from_le_bytes(&bytes), Some(ent));
    }

    #[test]
    fn truncated_header_does_not_decode() {
        assert_eq!(dirent_from_le_bytes(&[0; DIRENT_SIZE - 1]), None);
    }
}
