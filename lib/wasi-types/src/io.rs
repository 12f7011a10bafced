use crate::WasmPtr;
#[cfg(feature = "enable-serde")]
use serde::{Deserialize, Serialize};

/// A region of caller memory for scatter/gather reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub struct Iovec {
    /// The address of the buffer to be filled.
    pub buf: WasmPtr,
    /// The length of the buffer to be filled.
    pub buf_len: u32,
}

/// A region of caller memory for scatter/gather writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub struct Ciovec {
    /// The address of the buffer to be written.
    pub buf: WasmPtr,
    /// The length of the buffer to be written.
    pub buf_len: u32,
}

/// Encoded size of [`Iovec`] and [`Ciovec`] on a 32-bit guest.
pub const IOVEC_SIZE: usize = 8;
