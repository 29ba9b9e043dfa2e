use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlaygroundError, PlaygroundResult};

/// One entry of a directory summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSummary {
    pub directory: PathBuf,
    pub file_name: String,
}

/// Lists the file names directly inside a directory.
pub trait DirectoryReader {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<String>>;
}

impl<R: DirectoryReader + ?Sized> DirectoryReader for &R {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<String>> {
        (**self).read_dir(dir)
    }
}

/// [`DirectoryReader`] over the real file system.
///
/// Only regular files are listed, sorted by name.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDirectoryReader;

impl DirectoryReader for StdDirectoryReader {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Summarizes every file in `dir`, in the order the reader reports them.
pub fn summarize_files_in_directory<R: DirectoryReader>(
    reader: &R,
    dir: impl AsRef<Path>,
) -> PlaygroundResult<Vec<FileSummary>> {
    let dir = dir.as_ref();
    let names = reader.read_dir(dir).map_err(|source| PlaygroundError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    debug!(directory = %dir.display(), count = names.len(), "summarized directory");

    Ok(names
        .into_iter()
        .map(|file_name| FileSummary {
            directory: dir.to_path_buf(),
            file_name,
        })
        .collect())
}
