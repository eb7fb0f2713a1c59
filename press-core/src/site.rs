use std::fmt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

#[derive(Debug)]
pub enum ScanError {
    Io(std::io::Error),
    InvalidPath(PathBuf),
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::Io(err)
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Io(e) => write!(f, "IO error: {}", e),
            ScanError::InvalidPath(p) => write!(f, "Invalid path: {}", p.display()),
        }
    }
}

impl std::error::Error for ScanError {}

/// One markdown source file and the path its page renders to, relative
/// to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub source: PathBuf,
    pub output: PathBuf,
}

pub struct SiteScanner {
    content_dir: PathBuf,
}

impl SiteScanner {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            content_dir: path.as_ref().to_path_buf(),
        }
    }

    /// Discover every markdown file under the content directory. Pages
    /// come back sorted by source path so output is deterministic.
    pub fn scan(&self) -> Result<Vec<Page>, ScanError> {
        let mut pages = Vec::new();
        for entry in WalkDir::new(&self.content_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path().is_file() && e.path().extension().map(|ext| ext == "md").unwrap_or(false)
            })
        {
            let path = entry.path();
            let relative = path
                .strip_prefix(&self.content_dir)
                .map_err(|_| ScanError::InvalidPath(path.to_path_buf()))?;

            pages.push(Page {
                source: path.to_path_buf(),
                output: relative.with_extension("html"),
            });
        }
        pages.sort_by(|a, b| a.source.cmp(&b.source));

        Ok(pages)
    }
}
