use memfs_wasi_types::{
    dirent_from_le_bytes, dirent_to_le_bytes, Dircookie, Dirent, Dirnamlen, Filetype, Inode,
    DIRENT_SIZE,
};

/// Packed, append-only store of directory entries.
///
/// Each record is a [`DIRENT_SIZE`]-byte header followed by the entry name
/// and a null terminator. `d_next` holds the offset of the successor record,
/// so the final record's `d_next` equals the buffer size and iteration ends
/// exactly there. There is no removal and no reordering; appending a name
/// that already exists shadows nothing on write, but lookups always take the
/// oldest entry with that name.
#[derive(Debug, Default)]
pub(crate) struct DirentStore {
    bytes: Vec<u8>,
}

/// One decoded record: the fixed header plus a view of the name bytes.
#[derive(Debug)]
pub(crate) struct DirentRecord<'a> {
    pub dirent: Dirent,
    pub name: &'a [u8],
}

impl DirentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total size of the packed buffer in bytes.
    pub fn size(&self) -> Dircookie {
        self.bytes.len() as Dircookie
    }

    pub fn append(&mut self, name: &str, ino: Inode, d_type: Filetype) {
        let record_len = DIRENT_SIZE + name.len() + 1;
        let dirent = Dirent {
            d_next: (self.bytes.len() + record_len) as Dircookie,
            d_ino: ino,
            d_namlen: name.len() as Dirnamlen,
            d_type,
        };
        self.bytes.reserve(record_len);
        self.bytes.extend_from_slice(&dirent_to_le_bytes(&dirent));
        self.bytes.extend_from_slice(name.as_bytes());
        self.bytes.push(0);
    }

    /// Lazy, forward-only walk over the packed records, restartable by
    /// calling again.
    pub fn iter(&self) -> DirentIter<'_> {
        DirentIter {
            store: self,
            offset: 0,
        }
    }
}

pub(crate) struct DirentIter<'a> {
    store: &'a DirentStore,
    offset: usize,
}

impl<'a> Iterator for DirentIter<'a> {
    type Item = DirentRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = &self.store.bytes;
        if self.offset == bytes.len() {
            return None;
        }
        // Every decode is checked against the real buffer length instead of
        // trusting the stored offsets; a record that escapes the buffer or
        // fails to advance means the store is corrupt, which is an engine
        // bug, not a caller error.
        let dirent = match dirent_from_le_bytes(&bytes[self.offset..]) {
            Some(dirent) => dirent,
            None => panic!("truncated dirent header at offset {}", self.offset),
        };
        let name_start = self.offset + DIRENT_SIZE;
        let name_end = name_start + dirent.d_namlen as usize;
        let next = dirent.d_next as usize;
        if next != name_end + 1 || next > bytes.len() {
            panic!("corrupt dirent record at offset {}", self.offset);
        }
        let name = &bytes[name_start..name_end];
        self.offset = next;
        Some(DirentRecord { dirent, name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn iterates_in_append_order_and_stops_at_the_buffer_end() {
        let mut store = DirentStore::new();
        store.append(".", 4, Filetype::Directory);
        store.append("..", 3, Filetype::Directory);
        store.append("test.c", 5, Filetype::RegularFile);

        let names: Vec<_> = store.iter().map(|r| r.name.to_vec()).collect();
        assert_eq!(names, vec![b".".to_vec(), b"..".to_vec(), b"test.c".to_vec()]);

        let last = store.iter().last().unwrap();
        assert_eq!(last.dirent.d_next, store.size());
        assert_eq!(last.dirent.d_ino, 5);
        assert_eq!(last.dirent.d_type, Filetype::RegularFile);
    }

    #[test]
    fn empty_store_yields_nothing() {
        assert_eq!(DirentStore::new().iter().count(), 0);
    }

    #[test]
    fn record_sizes_are_header_plus_name_plus_null() {
        let mut store = DirentStore::new();
        store.append("ab", 1, Filetype::RegularFile);
        assert_eq!(store.size(), (DIRENT_SIZE + 2 + 1) as u64);
    }
}
