//! Site build configuration.

use crate::convert::ConvertOptions;
use std::path::{Path, PathBuf};

/// Directory holding Markdown pages, relative to the project root.
pub const DEFAULT_PAGES_DIR: &str = "pages";
/// Output directory, relative to the project root.
pub const DEFAULT_OUT_DIR: &str = "out";
/// Directory holding templates and the stylesheet.
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Paths and options for building a site.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory scanned for pages. Not recursed into.
    pub pages_dir: PathBuf,

    /// Directory receiving generated pages, copied files and the index.
    /// Created if missing (one level only).
    pub out_dir: PathBuf,

    /// Template for each page, containing `<BlogPost></BlogPost>`.
    pub post_template: PathBuf,

    /// Template for the index page, containing `<BlogList></BlogList>`.
    pub index_template: PathBuf,

    /// Stylesheet copied into the output directory.
    pub stylesheet: PathBuf,

    /// File name of the stylesheet inside the output directory.
    pub stylesheet_name: String,

    /// File name of the index page inside the output directory.
    pub index_name: String,

    /// Extension (without dot) of files treated as Markdown pages.
    pub document_extension: String,

    /// Extension (without dot) of generated pages.
    pub output_extension: String,

    /// Whether to convert documents in parallel.
    pub parallel: bool,

    /// Markdown conversion options.
    pub convert: ConvertOptions,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::rooted_at(".")
    }
}

impl SiteConfig {
    /// Creates a configuration for the default layout under the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration for the default layout under `root`:
    /// `pages/`, `out/`, `templates/post.html`, `templates/blog.html` and
    /// `templates/styles.css`.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let templates = root.join(DEFAULT_TEMPLATES_DIR);
        Self {
            pages_dir: root.join(DEFAULT_PAGES_DIR),
            out_dir: root.join(DEFAULT_OUT_DIR),
            post_template: templates.join("post.html"),
            index_template: templates.join("blog.html"),
            stylesheet: templates.join("styles.css"),
            stylesheet_name: "styles.css".to_string(),
            index_name: "blog.html".to_string(),
            document_extension: "md".to_string(),
            output_extension: "html".to_string(),
            parallel: true,
            convert: ConvertOptions::default(),
        }
    }

    /// Sets the pages directory.
    pub fn with_pages_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.pages_dir = dir.into();
        self
    }

    /// Sets the output directory.
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    /// Sets the page template.
    pub fn with_post_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.post_template = path.into();
        self
    }

    /// Sets the index template.
    pub fn with_index_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.index_template = path.into();
        self
    }

    /// Sets the stylesheet source.
    pub fn with_stylesheet(mut self, path: impl Into<PathBuf>) -> Self {
        self.stylesheet = path.into();
        self
    }

    /// Sets the index page file name.
    pub fn with_index_name(mut self, name: impl Into<String>) -> Self {
        self.index_name = name.into();
        self
    }

    /// Sets the conversion options.
    pub fn with_convert_options(mut self, options: ConvertOptions) -> Self {
        self.convert = options;
        self
    }

    /// Disables parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Path the stylesheet is copied to.
    pub fn stylesheet_dest(&self) -> PathBuf {
        self.out_dir.join(&self.stylesheet_name)
    }

    /// Path the index page is written to.
    pub fn index_path(&self) -> PathBuf {
        self.out_dir.join(&self.index_name)
    }

    /// Returns true if `path` has the Markdown document extension.
    pub fn is_document(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext == self.document_extension.as_str())
    }

    /// File name of the page generated from `document`: its stem plus the
    /// output extension.
    pub fn output_name(&self, document: &Path) -> String {
        let stem = document.file_stem().unwrap_or_default().to_string_lossy();
        format!("{}.{}", stem, self.output_extension)
    }
}
