use super::Node;
use memfs_wasi_types::Inode;

/// Fixed-capacity pool of nodes with an explicit free-list stack.
///
/// Nodes are never returned to the free list: closing a descriptor releases
/// the descriptor, not the node it points at. Exhausting the pool or
/// dereferencing an index outside it is an engine invariant violation and
/// aborts the process; neither condition is reachable from well-formed
/// external input alone.
#[derive(Debug)]
pub(crate) struct NodeArena {
    slots: Vec<Option<Node>>,
    free: Vec<Inode>,
}

impl NodeArena {
    pub fn new(capacity: usize) -> Self {
        NodeArena {
            slots: (0..capacity).map(|_| None).collect(),
            // Popping hands out the lowest free index first.
            free: (0..capacity as Inode).rev().collect(),
        }
    }

    pub fn insert(&mut self, node: Node) -> Inode {
        let inode = match self.free.pop() {
            Some(inode) => inode,
            None => {
                tracing::error!(capacity = self.slots.len(), "node arena exhausted");
                panic!("node arena exhausted ({} nodes)", self.slots.len());
            }
        };
        self.slots[inode as usize] = Some(node);
        inode
    }

    pub fn get(&self, inode: Inode) -> &Node {
        match self.slots.get(inode as usize).and_then(Option::as_ref) {
            Some(node) => node,
            None => {
                tracing::error!(inode, "invalid inode index");
                panic!("invalid inode index {inode}");
            }
        }
    }

    pub fn get_mut(&mut self, inode: Inode) -> &mut Node {
        match self.slots.get_mut(inode as usize).and_then(Option::as_mut) {
            Some(node) => node,
            None => {
                tracing::error!(inode, "invalid inode index");
                panic!("invalid inode index {inode}");
            }
        }
    }
}
