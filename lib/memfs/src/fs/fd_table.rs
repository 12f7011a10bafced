use memfs_wasi_types::{Errno, Fd, Fdstat, Inode};

/// A live descriptor: the fd-level stat handed back by `fd_fdstat_get`, the
/// owning inode, and whether this is a preopened directory handle.
#[derive(Debug, Clone)]
pub(crate) struct FdEntry {
    pub stat: Fdstat,
    pub inode: Inode,
    pub is_preopen: bool,
}

/// Fixed-capacity descriptor table. A free slot is simply an empty one;
/// binding scans for the lowest free index, so closed numbers are reused
/// eagerly while open stdio and preopen handles stay put.
#[derive(Debug)]
pub(crate) struct FdTable {
    slots: Vec<Option<FdEntry>>,
}

impl FdTable {
    pub fn new(capacity: usize) -> Self {
        FdTable {
            slots: vec![None; capacity],
        }
    }

    pub fn bind(&mut self, entry: FdEntry) -> Result<Fd, Errno> {
        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(Errno::Mfile)?;
        self.slots[slot] = Some(entry);
        Ok(slot as Fd)
    }

    pub fn get(&self, fd: Fd) -> Result<&FdEntry, Errno> {
        self.slots
            .get(fd as usize)
            .and_then(Option::as_ref)
            .ok_or(Errno::Badf)
    }

    /// Frees the slot for reuse. The node the descriptor pointed at is left
    /// untouched.
    pub fn release(&mut self, fd: Fd) -> Result<(), Errno> {
        let slot = self.slots.get_mut(fd as usize).ok_or(Errno::Badf)?;
        if slot.is_none() {
            return Err(Errno::Badf);
        }
        *slot = None;
        Ok(())
    }
}
