//! Including external files as text
//!
//! An [`Inserter`] resolves a name to a path and reads it. Missing or
//! unreadable files are logged and become an empty node, so a broken include
//! never aborts page construction.

use crate::maybe::none;
use crate::node::{text, Node};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

type Resolver = Box<dyn Fn(&str) -> PathBuf + Send + Sync>;
type FileReader = Box<dyn Fn(&Path) -> io::Result<Vec<u8>> + Send + Sync>;

/// Reads files into text nodes
pub struct Inserter {
    resolver: Resolver,
    reader: FileReader,
}

impl Inserter {
    pub fn new<R, F>(resolver: R, reader: F) -> Self
    where
        R: Fn(&str) -> PathBuf + Send + Sync + 'static,
        F: Fn(&Path) -> io::Result<Vec<u8>> + Send + Sync + 'static,
    {
        Self {
            resolver: Box::new(resolver),
            reader: Box::new(reader),
        }
    }

    /// Resolves names relative to `root` and reads from disk.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self::new(move |file| root.join(file), |path| fs::read(path))
    }

    /// The file's contents as a text node, or an empty node if it cannot be
    /// read. Invalid UTF-8 is replaced rather than rejected.
    pub fn include(&self, file: &str) -> Node {
        let path = (self.resolver)(file);
        match (self.reader)(&path) {
            Ok(bytes) => text(String::from_utf8_lossy(&bytes).into_owned()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::warn!("file doesn't exist: {}", path.display());
                none()
            }
            Err(err) => {
                log::warn!("failed to include '{file}' ({}): {err}", path.display());
                none()
            }
        }
    }
}

impl std::fmt::Debug for Inserter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inserter").finish_non_exhaustive()
    }
}
