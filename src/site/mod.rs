//! Site assembly: turns a pages directory into an output directory.
//!
//! Every `.md` file in the pages directory is converted and wrapped in the
//! page template; every other file is copied through. An index page then
//! links all generated pages. Problems with individual files are logged and
//! recorded in the [`BuildReport`]; only a failed stylesheet copy (or an
//! unusable pages/output directory) aborts the build.

mod config;
mod fs;
mod report;
mod template;

pub use config::{SiteConfig, DEFAULT_OUT_DIR, DEFAULT_PAGES_DIR, DEFAULT_TEMPLATES_DIR};
pub use fs::{FileSystem, MemoryFs, StdFs};
pub use report::{BuildReport, Skipped};
pub use template::{index_list, render_index, render_post, LIST_MARKER, POST_MARKER};

use crate::convert::HtmlRenderer;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Builds a site with the real filesystem.
///
/// # Example
///
/// ```no_run
/// use mdblog::site::{build_site, SiteConfig};
///
/// let report = build_site(&SiteConfig::rooted_at("./blog"))?;
/// println!("{} pages", report.pages.len());
/// # Ok::<(), mdblog::Error>(())
/// ```
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    SiteBuilder::new(config.clone()).build()
}

/// Outcome of generating one page.
type PageResult = std::result::Result<PathBuf, Skipped>;

/// Drives a site build over a [`FileSystem`].
#[derive(Debug)]
pub struct SiteBuilder<F = StdFs> {
    config: SiteConfig,
    fs: F,
    renderer: HtmlRenderer,
}

impl SiteBuilder<StdFs> {
    /// Creates a builder that works on the real filesystem.
    pub fn new(config: SiteConfig) -> Self {
        Self::with_fs(config, StdFs)
    }
}

impl<F: FileSystem> SiteBuilder<F> {
    /// Creates a builder over the given filesystem.
    pub fn with_fs(config: SiteConfig, fs: F) -> Self {
        let renderer = HtmlRenderer::new(config.convert.clone());
        Self {
            config,
            fs,
            renderer,
        }
    }

    /// Returns the build configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Returns the underlying filesystem.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Runs the build.
    ///
    /// Returns an error only when the output directory cannot be created,
    /// the stylesheet cannot be copied, or the pages directory cannot be
    /// listed. Everything else ends up in [`BuildReport::skipped`].
    pub fn build(&self) -> Result<BuildReport> {
        self.prepare_out_dir()?;
        let stylesheet = self.copy_stylesheet()?;

        let entries = self.list_pages()?;
        let (documents, others): (Vec<PathBuf>, Vec<PathBuf>) = entries
            .into_iter()
            .partition(|path| self.config.is_document(path));

        let mut report = BuildReport {
            stylesheet,
            ..BuildReport::default()
        };

        for result in self.generate_pages(&documents) {
            match result {
                Ok(page) => report.pages.push(page),
                Err(skipped) => report.skipped.push(skipped),
            }
        }

        for path in &others {
            match self.copy_through(path) {
                Ok(dest) => report.copied.push(dest),
                Err(skipped) => report.skipped.push(skipped),
            }
        }

        // Pages are listed even when their generation failed.
        report.index_entries = documents
            .iter()
            .map(|path| self.config.output_name(path))
            .collect();

        match self.write_index(&report.index_entries) {
            Ok(index) => report.index = Some(index),
            Err(skipped) => report.skipped.push(skipped),
        }

        log::info!(
            "Built {} pages, copied {} files, skipped {}",
            report.pages.len(),
            report.copied.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Converts one Markdown string with this builder's options.
    pub fn convert(&self, markdown: &str) -> String {
        self.renderer.render(markdown)
    }

    /// Generates the HTML page for a single document.
    pub fn generate_page(&self, document: &Path) -> Result<PathBuf> {
        let bytes = self.fs.read(document).map_err(|source| Error::ReadInput {
            path: document.to_path_buf(),
            source,
        })?;
        // Invalid UTF-8 becomes U+FFFD rather than dropping the page.
        let markdown = String::from_utf8_lossy(&bytes);

        let html = self.convert(&markdown);
        let template = self.read_template(&self.config.post_template)?;

        let dest = self.config.out_dir.join(self.config.output_name(document));
        self.write_output(&dest, &render_post(&template, &html))?;

        log::info!("HTML file generated successfully: {}", dest.display());
        Ok(dest)
    }

    /// Writes the index page listing `names`.
    pub fn generate_index<S: AsRef<str>>(&self, names: &[S]) -> Result<PathBuf> {
        let template = self.read_template(&self.config.index_template)?;
        let dest = self.config.index_path();
        self.write_output(&dest, &render_index(&template, names))?;

        log::info!("Blog page generated successfully: {}", dest.display());
        Ok(dest)
    }

    fn generate_pages(&self, documents: &[PathBuf]) -> Vec<PageResult> {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return documents
                .par_iter()
                .map(|document| self.page_result(document))
                .collect();
        }

        documents
            .iter()
            .map(|document| self.page_result(document))
            .collect()
    }

    fn page_result(&self, document: &Path) -> PageResult {
        self.generate_page(document).map_err(|err| {
            log::error!("{err}");
            Skipped {
                path: document.to_path_buf(),
                reason: err.to_string(),
            }
        })
    }

    fn write_index(&self, names: &[String]) -> std::result::Result<PathBuf, Skipped> {
        self.generate_index(names).map_err(|err| {
            log::error!("{err}");
            Skipped {
                path: self.config.index_path(),
                reason: err.to_string(),
            }
        })
    }

    fn prepare_out_dir(&self) -> Result<()> {
        let out_dir = &self.config.out_dir;
        if self.fs.exists(out_dir) {
            return Ok(());
        }

        log::debug!("Creating output directory: {}", out_dir.display());
        self.fs
            .create_dir(out_dir)
            .map_err(|source| Error::WriteOutput {
                path: out_dir.clone(),
                source,
            })
    }

    fn copy_stylesheet(&self) -> Result<PathBuf> {
        let from = &self.config.stylesheet;
        let to = self.config.stylesheet_dest();
        self.fs.copy(from, &to).map_err(|source| Error::Stylesheet {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;
        Ok(to)
    }

    fn list_pages(&self) -> Result<Vec<PathBuf>> {
        let dir = &self.config.pages_dir;
        let mut entries = self.fs.list_dir(dir).map_err(|source| Error::PagesDir {
            path: dir.clone(),
            source,
        })?;
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(entries)
    }

    fn copy_through(&self, path: &Path) -> std::result::Result<PathBuf, Skipped> {
        let Some(name) = path.file_name() else {
            return Err(Skipped {
                path: path.to_path_buf(),
                reason: "path has no file name".to_string(),
            });
        };

        let dest = self.config.out_dir.join(name);
        match self.fs.copy(path, &dest) {
            Ok(()) => {
                log::debug!("Copied {} to {}", path.display(), dest.display());
                Ok(dest)
            }
            Err(err) => {
                log::warn!("Failed to copy {} to {}: {}", path.display(), dest.display(), err);
                Err(Skipped {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                })
            }
        }
    }

    fn read_template(&self, path: &Path) -> Result<String> {
        self.fs
            .read_to_string(path)
            .map_err(|source| Error::Template {
                path: path.to_path_buf(),
                source,
            })
    }

    fn write_output(&self, path: &Path, contents: &str) -> Result<()> {
        self.fs
            .write(path, contents)
            .map_err(|source| Error::WriteOutput {
                path: path.to_path_buf(),
                source,
            })
    }
}
