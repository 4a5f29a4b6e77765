use std::{error::Error, fs::File, io::ErrorKind, path::Path};

/// A module for reading
/// [FASTA](https://en.wikipedia.org/wiki/FASTA_format) files.
pub mod fasta;

/// An error with path context that keeps the underlying error as its source.
#[derive(Debug)]
struct ContextError {
    description: String,
    source:      Box<dyn Error + Send + Sync>,
}

impl std::fmt::Display for ContextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}

impl Error for ContextError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Opening sequence files with the file kind and path added to any error.
pub(crate) trait FileContext {
    const FILE_KIND: &str;

    /// Opens a file, failing with [`ErrorKind::InvalidInput`] if it is empty.
    #[inline]
    fn open_nonempty_file<P: AsRef<Path>>(filename: P) -> std::io::Result<File> {
        let path = filename.as_ref();

        let file = File::open(path).map_err(|err| Self::wrap_error("file open error", path, err))?;
        let metadata = file
            .metadata()
            .map_err(|err| Self::wrap_error("metadata error", path, err))?;
        if metadata.len() == 0 {
            return Err(Self::context_error("file empty", path, ErrorKind::InvalidInput));
        }

        Ok(file)
    }

    fn describe(description: &str, path: &Path) -> String {
        format!(
            "{description} for {kind}: '{path}'",
            kind = Self::FILE_KIND,
            path = path.display()
        )
    }

    fn context_error(description: &str, path: &Path, kind: ErrorKind) -> std::io::Error {
        std::io::Error::new(kind, Self::describe(description, path))
    }

    fn wrap_error(description: &str, path: &Path, err: std::io::Error) -> std::io::Error {
        let kind = err.kind();
        std::io::Error::new(
            kind,
            ContextError {
                description: Self::describe(description, path),
                source:      Box::new(err),
            },
        )
    }
}
