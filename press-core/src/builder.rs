use std::fmt;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::assets::copy_assets;
use crate::config::BuildConfig;
use crate::markdown::ConvertError;
use crate::site::{Page, ScanError, SiteScanner};
use crate::template::render_page;

#[derive(Debug)]
pub enum BuildError {
    MissingContentDir(PathBuf),
    MissingTemplate(PathBuf),
    Scan(ScanError),
    Convert(PathBuf, ConvertError),
    Io(std::io::Error),
}

impl From<ScanError> for BuildError {
    fn from(err: ScanError) -> Self {
        BuildError::Scan(err)
    }
}

impl From<std::io::Error> for BuildError {
    fn from(err: std::io::Error) -> Self {
        BuildError::Io(err)
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingContentDir(p) => {
                write!(f, "content directory not found: {}", p.display())
            }
            BuildError::MissingTemplate(p) => write!(f, "template not found: {}", p.display()),
            BuildError::Scan(e) => write!(f, "scan error: {}", e),
            BuildError::Convert(p, e) => write!(f, "{}: {}", p.display(), e),
            BuildError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for BuildError {}

#[derive(Debug)]
pub struct BuildSummary {
    pub pages: usize,
    pub assets: u64,
}

/// Orchestrates one site build: clear the output directory, copy static
/// assets in, then render every discovered page through the template.
pub struct SiteBuilder {
    content_dir: PathBuf,
    assets_dir: PathBuf,
    template_path: PathBuf,
    output_dir: PathBuf,
}

impl Default for SiteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteBuilder {
    pub fn new() -> Self {
        Self::from_config(&BuildConfig::default())
    }

    pub fn from_config(config: &BuildConfig) -> Self {
        Self {
            content_dir: PathBuf::from(&config.content),
            assets_dir: PathBuf::from(&config.assets),
            template_path: PathBuf::from(&config.template),
            output_dir: PathBuf::from(&config.output),
        }
    }

    pub fn content_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.content_dir = path.as_ref().to_path_buf();
        self
    }

    pub fn assets_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.assets_dir = path.as_ref().to_path_buf();
        self
    }

    pub fn template_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.template_path = path.as_ref().to_path_buf();
        self
    }

    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = path.as_ref().to_path_buf();
        self
    }

    pub fn build(&self) -> Result<BuildSummary, BuildError> {
        if !self.content_dir.is_dir() {
            return Err(BuildError::MissingContentDir(self.content_dir.clone()));
        }
        let template = std::fs::read_to_string(&self.template_path)
            .map_err(|_| BuildError::MissingTemplate(self.template_path.clone()))?;

        // Start from a clean output directory so stale pages never linger.
        if self.output_dir.exists() {
            std::fs::remove_dir_all(&self.output_dir)?;
        }
        std::fs::create_dir_all(&self.output_dir)?;

        let assets = copy_assets(&self.assets_dir, &self.output_dir)?;

        let pages = SiteScanner::new(&self.content_dir).scan()?;

        // Pages never depend on each other, so they render in parallel;
        // the first failure aborts the build.
        pages
            .par_iter()
            .try_for_each(|page| self.generate_page(&template, page))?;

        Ok(BuildSummary {
            pages: pages.len(),
            assets,
        })
    }

    fn generate_page(&self, template: &str, page: &Page) -> Result<(), BuildError> {
        let output_path = self.output_dir.join(&page.output);
        println!(
            "Generating {} -> {}",
            page.source.display(),
            output_path.display()
        );

        let markdown = std::fs::read_to_string(&page.source)?;
        let html = render_page(&markdown, template)
            .map_err(|e| BuildError::Convert(page.source.clone(), e))?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&output_path, html)?;

        Ok(())
    }
}
