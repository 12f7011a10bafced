//! Convenience layer for seeding the synthetic tree before the engine is
//! handed to the sandbox.

use crate::fs::{Kind, MemFs};
use memfs_wasi_types::Inode;
use thiserror::Error;

/// Errors produced while seeding the filesystem image. These surface at
/// build time on the embedder's side; they never reach the sandboxed caller.
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("path `{0}` is empty or contains an empty component")]
    EmptyPath(String),
    #[error("`{0}` already exists")]
    DuplicateEntry(String),
    #[error("`{0}` exists and is not a directory")]
    NotADirectory(String),
}

/// Builds a [`MemFs`] with content seeded below the root preopen.
///
/// Intermediate directories are created on demand, so
/// `with_file("include/stdio.h", ..)` is enough to produce both nodes.
/// Unlike the raw entry store, the builder rejects duplicate names; a seeded
/// image with two entries of the same name is always a mistake.
#[derive(Debug)]
pub struct MemFsBuilder {
    fs: MemFs,
}

impl MemFsBuilder {
    pub fn new() -> Self {
        MemFsBuilder { fs: MemFs::new() }
    }

    /// Creates a directory (and any missing parents) at `path`.
    pub fn with_dir(mut self, path: &str) -> Result<Self, BuilderError> {
        let components = split_components(path)?;
        let mut current = self.fs.root();
        for component in components {
            current = self.descend_or_create(current, component, path)?;
        }
        Ok(self)
    }

    /// Creates a regular file holding `contents` at `path`, creating any
    /// missing parent directories.
    pub fn with_file(mut self, path: &str, contents: &[u8]) -> Result<Self, BuilderError> {
        let mut components = split_components(path)?;
        let name = components.pop().ok_or_else(|| BuilderError::EmptyPath(path.to_owned()))?;
        let mut parent = self.fs.root();
        for component in components {
            parent = self.descend_or_create(parent, component, path)?;
        }
        if self.fs.lookup_path(parent, name.as_bytes()).is_some() {
            return Err(BuilderError::DuplicateEntry(path.to_owned()));
        }
        self.fs
            .create_file_at(parent, name, contents)
            .map_err(|_| BuilderError::NotADirectory(path.to_owned()))?;
        Ok(self)
    }

    pub fn build(self) -> MemFs {
        self.fs
    }

    fn descend_or_create(
        &mut self,
        current: Inode,
        component: &str,
        full_path: &str,
    ) -> Result<Inode, BuilderError> {
        match self.fs.lookup_path(current, component.as_bytes()) {
            Some((inode, _)) => {
                if !matches!(self.fs.node(inode).kind, Kind::Directory { .. }) {
                    return Err(BuilderError::NotADirectory(full_path.to_owned()));
                }
                Ok(inode)
            }
            None => self
                .fs
                .create_dir_at(current, component)
                .map_err(|_| BuilderError::NotADirectory(full_path.to_owned())),
        }
    }
}

impl Default for MemFsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn split_components(path: &str) -> Result<Vec<&str>, BuilderError> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Err(BuilderError::EmptyPath(path.to_owned()));
    }
    let components: Vec<&str> = trimmed.split('/').collect();
    if components.iter().any(|c| c.is_empty()) {
        return Err(BuilderError::EmptyPath(path.to_owned()));
    }
    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seeds_nested_files_with_intermediate_directories() {
        let fs = MemFsBuilder::new()
            .with_file("include/stdio.h", b"#pragma once\n")
            .unwrap()
            .with_file("test.c", b"int main() { return 42; }\n")
            .unwrap()
            .build();

        let root = fs.root();
        let (file, _) = fs.lookup_path(root, b"include/stdio.h").unwrap();
        assert_eq!(fs.node(file).stat.st_size, 13);
        assert!(fs.lookup_path(root, b"test.c").is_some());
    }

    #[test]
    fn with_dir_reuses_existing_directories() {
        let fs = MemFsBuilder::new()
            .with_dir("a/b")
            .unwrap()
            .with_file("a/b/c.txt", b"c")
            .unwrap()
            .build();
        assert!(fs.lookup_path(fs.root(), b"a/b/c.txt").is_some());
    }

    #[test]
    fn leading_slashes_are_tolerated() {
        let fs = MemFsBuilder::new().with_file("/test.c", b"x").unwrap().build();
        assert!(fs.lookup_path(fs.root(), b"test.c").is_some());
    }

    #[test]
    fn duplicate_files_are_rejected() {
        let err = MemFsBuilder::new()
            .with_file("x", b"1")
            .unwrap()
            .with_file("x", b"2")
            .unwrap_err();
        assert!(matches!(err, BuilderError::DuplicateEntry(_)));
    }

    #[test]
    fn files_cannot_be_traversed_as_directories() {
        let err = MemFsBuilder::new()
            .with_file("x", b"1")
            .unwrap()
            .with_file("x/y", b"2")
            .unwrap_err();
        assert!(matches!(err, BuilderError::NotADirectory(_)));
    }

    #[test]
    fn empty_components_are_rejected() {
        let err = MemFsBuilder::new().with_file("a//b", b"").unwrap_err();
        assert!(matches!(err, BuilderError::EmptyPath(_)));
    }
}
