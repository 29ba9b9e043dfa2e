use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::files::DirectoryReader;

/// [`DirectoryReader`] over an ordered `path -> contents` map.
///
/// A directory lists the files whose parent is exactly that directory, in
/// insertion order. Unknown directories are empty.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDirectoryReader {
    files: IndexMap<PathBuf, String>,
}

impl InMemoryDirectoryReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    /// Replaces the whole file map.
    pub fn set_files<P, C, I>(&mut self, files: I)
    where
        P: Into<PathBuf>,
        C: Into<String>,
        I: IntoIterator<Item = (P, C)>,
    {
        self.files = files
            .into_iter()
            .map(|(path, contents)| (path.into(), contents.into()))
            .collect();
    }

    #[must_use]
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }
}

impl DirectoryReader for InMemoryDirectoryReader {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<String>> {
        Ok(self
            .files
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }
}
