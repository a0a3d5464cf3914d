//! Size Oracle: byte length of a record's content files.

use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Content file extensions counted towards a document's size
pub const CONTENT_EXTENSIONS: [&str; 4] = [".pdf", ".epub", ".content", ".pagedata"];

/// Reports the total size of the content files stored for a base key
pub trait SizeOracle {
    fn content_size(&self, base_key: &str) -> u64;
}

impl<F> SizeOracle for F
where
    F: Fn(&str) -> u64,
{
    fn content_size(&self, base_key: &str) -> u64 {
        self(base_key)
    }
}

/// Sums the sizes of `<base_dir>/<key><ext>` for every existing extension
#[derive(Debug, Clone)]
pub struct FileSizeOracle {
    base_dir: PathBuf,
}

impl FileSizeOracle {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

/// Length of one content file; `None` when it does not exist or is not a
/// regular file.
fn content_file_len(path: &Path) -> io::Result<Option<u64>> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(Some(meta.len())),
        Ok(_) => Ok(None),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

impl SizeOracle for FileSizeOracle {
    fn content_size(&self, base_key: &str) -> u64 {
        CONTENT_EXTENSIONS
            .iter()
            .filter_map(|ext| {
                let path = self.base_dir.join(format!("{}{}", base_key, ext));
                match content_file_len(&path) {
                    Ok(len) => len,
                    Err(e) => {
                        warn!(
                            path = %path.display(),
                            error = %e,
                            "content file not readable; counted as 0 bytes"
                        );
                        None
                    }
                }
            })
            .sum()
    }
}
