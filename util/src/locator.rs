use std::{
    fmt,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Language the existing SOAP project is assumed to be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLanguage {
    Java,
    Python,
}

impl SourceLanguage {
    pub fn extension(&self) -> &'static str {
        match self {
            SourceLanguage::Java => "java",
            SourceLanguage::Python => "py",
        }
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension().map_or(false, |ext| ext == self.extension())
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLanguage::Java => f.write_str("java"),
            SourceLanguage::Python => f.write_str("python"),
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map_or(false, |name| name.starts_with('.'))
}

/// Every non-hidden file under `root`, sorted by name at each level.
///
/// Symbolic links are followed. Unreadable directories, link loops and a
/// missing root are skipped with a warning.
pub fn list_files<P: AsRef<Path>>(root: P) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root.as_ref())
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => (),
            Err(err) => warn!("skipping unreadable project entry: {}", err),
        }
    }

    debug!(root = %root.as_ref().display(), count = files.len(), "listed project files");
    files
}

/// Java wins as soon as a single `.java` file is present; mixed projects are
/// therefore treated as Java and their Python files go unreported.
pub fn detect_language<P: AsRef<Path>>(paths: &[P]) -> SourceLanguage {
    if paths
        .iter()
        .any(|path| SourceLanguage::Java.matches(path.as_ref()))
    {
        SourceLanguage::Java
    } else {
        SourceLanguage::Python
    }
}

/// Source files of `language` among `paths`. Contents are never read.
pub fn select_language_files(paths: Vec<PathBuf>, language: SourceLanguage) -> Vec<PathBuf> {
    paths
        .into_iter()
        .filter(|path| language.matches(path))
        .collect()
}
