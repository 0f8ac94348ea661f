use std::{
    fs, io,
    path::{Path, PathBuf},
};

use soap_to_rest_codegen::types::GeneratedFile;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to create directory {}", .path.display())]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to write file {}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Creates `path` and its parents. Succeeds if it already exists.
pub fn create_dir<P: AsRef<Path>>(path: P) -> Result<(), Error> {
    let path = path.as_ref();

    fs::create_dir_all(path).map_err(|source| Error::CreateDirError {
        path: path.to_owned(),
        source,
    })
}

/// Writes `file` below `output`, creating intermediate directories, and
/// returns the full path written. Existing files are overwritten.
pub fn write(output: &Path, file: &GeneratedFile) -> Result<PathBuf, Error> {
    let path = output.join(&file.path);

    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }

    fs::write(&path, &file.contents).map_err(|source| Error::WriteError {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), bytes = file.contents.len(), "wrote generated file");
    Ok(path)
}

pub fn write_all(output: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>, Error> {
    files.iter().map(|file| write(output, file)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out");

        let written = write_all(
            &output,
            &[
                GeneratedFile::new("app.py", "print()\n".into()),
                GeneratedFile::new(Path::new("pojos").join("A.java"), "class A {}\n".into()),
            ],
        )
        .unwrap();

        assert_eq!(written, vec![output.join("app.py"), output.join("pojos/A.java")]);
        assert_eq!(fs::read_to_string(output.join("app.py")).unwrap(), "print()\n");
        assert_eq!(
            fs::read_to_string(output.join("pojos/A.java")).unwrap(),
            "class A {}\n"
        );
    }

    #[test]
    fn create_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b");

        create_dir(&path).unwrap();
        create_dir(&path).unwrap();
        assert!(path.is_dir());
    }

    #[test]
    fn reports_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();

        let result = write(&blocker, &GeneratedFile::new("app.py", String::new()));
        assert!(matches!(result, Err(Error::CreateDirError { .. }) | Err(Error::WriteError { .. })));
    }
}
