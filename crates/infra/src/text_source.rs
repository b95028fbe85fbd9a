// crates/infra/src/text_source.rs
use std::io::BufRead;
use std::path::{Path, PathBuf};

use char_stats_ports::TextSource;
use char_stats_shared_kernel::{SourceError, SourceName, SourceResult};

use crate::persistence::FileReader;

/// [`TextSource`] backed by the local filesystem.
///
/// Names are resolved against an explicit root directory handed in at
/// construction time. Absolute names bypass the root entirely, so
/// callers can mix project-relative and fully qualified paths.
#[derive(Debug, Clone)]
pub struct FsTextSource {
    root: PathBuf,
}

impl FsTextSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &SourceName) -> PathBuf {
        let candidate = Path::new(name.as_str());
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.root.join(candidate)
        }
    }

    fn locate(&self, name: &SourceName) -> SourceResult<PathBuf> {
        let path = self.resolve(name);
        if !path.exists() {
            return Err(SourceError::NotFound { name: name.as_str().to_string() });
        }
        Ok(path)
    }
}

impl Default for FsTextSource {
    /// Resolves names against the current working directory.
    fn default() -> Self {
        Self::new(".")
    }
}

impl TextSource for FsTextSource {
    fn read_to_string(&self, name: &SourceName) -> SourceResult<String> {
        let path = self.locate(name)?;
        let bytes = FileReader::read_to_end(&path)
            .map_err(|source| SourceError::Read { name: name.as_str().to_string(), source })?;
        String::from_utf8(bytes)
            .map_err(|_| SourceError::Decode { name: name.as_str().to_string() })
    }

    fn read_lines(&self, name: &SourceName) -> SourceResult<Vec<String>> {
        let path = self.locate(name)?;
        let reader = FileReader::open_buffered(&path)
            .map_err(|source| SourceError::Read { name: name.as_str().to_string(), source })?;
        reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(|source| match source.kind() {
                std::io::ErrorKind::InvalidData => {
                    SourceError::Decode { name: name.as_str().to_string() }
                }
                _ => SourceError::Read { name: name.as_str().to_string(), source },
            })
    }
}
