//! mdblog CLI - static blog generator
//!
//! Converts a directory of Markdown pages into HTML pages plus an index.

use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use mdblog::site::SiteBuilder;
use mdblog::{BuildReport, ConvertOptions, SiteConfig};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Markdown pages to a static HTML blog
#[derive(Parser)]
#[command(
    name = "mdblog",
    version,
    about = "Build a static blog from a directory of Markdown pages",
    long_about = "mdblog - static blog generator.\n\n\
                  Converts every .md file in the pages directory to HTML using a page\n\
                  template, copies all other files, and writes an index page.\n\n\
                  Usage:\n  \
                  mdblog                    Build the site in the current directory\n  \
                  mdblog <root>             Build the site rooted at <root>\n  \
                  mdblog convert <file>     Convert a single Markdown file"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project root (for the default build)
    #[arg(global = false)]
    root: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site (default command)
    Build(BuildArgs),

    /// Convert a single Markdown file to HTML
    Convert {
        /// Input Markdown file
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wrap the output in a page template
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Escape HTML in headings, list items and paragraphs
        #[arg(long)]
        escape_text: bool,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args, Default)]
struct BuildArgs {
    /// Project root holding pages/, templates/ and out/
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Pages directory (default: <root>/pages)
    #[arg(long)]
    pages: Option<PathBuf>,

    /// Output directory (default: <root>/out)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Page template (default: <root>/templates/post.html)
    #[arg(long)]
    post_template: Option<PathBuf>,

    /// Index template (default: <root>/templates/blog.html)
    #[arg(long)]
    index_template: Option<PathBuf>,

    /// Stylesheet (default: <root>/templates/styles.css)
    #[arg(long)]
    stylesheet: Option<PathBuf>,

    /// Escape HTML in headings, list items and paragraphs
    #[arg(long)]
    escape_text: bool,

    /// Convert documents one at a time
    #[arg(long)]
    sequential: bool,

    /// Print the build report as JSON
    #[arg(long)]
    json: bool,
}

impl BuildArgs {
    fn rooted_at(root: PathBuf) -> Self {
        Self {
            root,
            ..Self::default()
        }
    }

    fn into_config(self) -> SiteConfig {
        let mut config = SiteConfig::rooted_at(&self.root).with_convert_options(
            ConvertOptions::new().with_escape_text(self.escape_text),
        );

        if let Some(pages) = self.pages {
            config = config.with_pages_dir(pages);
        }
        if let Some(out) = self.out {
            config = config.with_out_dir(out);
        }
        if let Some(template) = self.post_template {
            config = config.with_post_template(template);
        }
        if let Some(template) = self.index_template {
            config = config.with_index_template(template);
        }
        if let Some(stylesheet) = self.stylesheet {
            config = config.with_stylesheet(stylesheet);
        }
        if self.sequential {
            config = config.sequential();
        }

        config
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        None => {
            let root = cli.root.unwrap_or_else(|| PathBuf::from("."));
            run_build(BuildArgs::rooted_at(root))
        }
        Some(Commands::Build(args)) => run_build(args),
        Some(Commands::Convert {
            input,
            output,
            template,
            escape_text,
        }) => run_convert(&input, output.as_deref(), template.as_deref(), escape_text),
        Some(Commands::Version) => {
            print_version();
            Ok(())
        }
    }
}

fn run_build(args: BuildArgs) -> Result<(), Box<dyn std::error::Error>> {
    let json = args.json;
    let config = args.into_config();

    let pb = create_spinner(&format!("Building {}...", config.pages_dir.display()));
    let result = SiteBuilder::new(config).build();
    pb.finish_and_clear();
    let report = result?;

    if json {
        println!("{}", report.to_json());
    } else {
        print_summary(&report);
    }

    Ok(())
}

fn run_convert(
    input: &Path,
    output: Option<&Path>,
    template: Option<&Path>,
    escape_text: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(mdblog::Error::NotFound(input.to_path_buf()).into());
    }

    let options = ConvertOptions::new().with_escape_text(escape_text);
    let mut html = mdblog::convert_file(input, &options)?;

    if let Some(template) = template {
        let contents = fs::read_to_string(template).map_err(|source| mdblog::Error::Template {
            path: template.to_path_buf(),
            source,
        })?;
        html = mdblog::site::render_post(&contents, &html);
    }

    write_output(output, &html)?;

    if let Some(path) = output {
        println!(
            "{} Converted to HTML: {}",
            "✓".green().bold(),
            path.display()
        );
    }

    Ok(())
}

fn print_summary(report: &BuildReport) {
    let title = if report.is_complete() {
        "Build Complete".green().bold()
    } else {
        "Build Finished With Errors".yellow().bold()
    };
    println!("{}", title);
    println!("{}", "─".repeat(40));

    for page in &report.pages {
        println!("  {} {}", "✓".green(), page.display());
    }
    for copied in &report.copied {
        println!("  {} {} (copied)", "✓".green(), copied.display());
    }
    if let Some(ref index) = report.index {
        println!("  {} {} (index)", "✓".green(), index.display());
    }
    for skipped in &report.skipped {
        println!(
            "  {} {}: {}",
            "✗".red(),
            skipped.path.display(),
            skipped.reason
        );
    }

    println!("\n{}", "Statistics".cyan().bold());
    println!("{}", "─".repeat(40));
    println!("{}: {}", "Pages".bold(), report.pages.len());
    println!("{}: {}", "Copied".bold(), report.copied.len());
    println!("{}: {}", "Skipped".bold(), report.skipped.len());
}

fn print_version() {
    println!("{} {}", "mdblog".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Static blog generator: Markdown pages to HTML");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_build_uses_root_layout() {
        let config = BuildArgs::rooted_at(PathBuf::from("site")).into_config();
        assert_eq!(config.pages_dir, PathBuf::from("site/pages"));
        assert_eq!(config.out_dir, PathBuf::from("site/out"));
        assert!(config.parallel);
    }

    #[test]
    fn test_build_args_override_paths() {
        let cli = Cli::parse_from([
            "mdblog",
            "build",
            "--root",
            "site",
            "--out",
            "public",
            "--escape-text",
            "--sequential",
        ]);
        let Some(Commands::Build(args)) = cli.command else {
            panic!("expected build command");
        };
        let config = args.into_config();
        assert_eq!(config.pages_dir, PathBuf::from("site/pages"));
        assert_eq!(config.out_dir, PathBuf::from("public"));
        assert!(config.convert.escape_text);
        assert!(!config.parallel);
    }

    #[test]
    fn test_verbose_is_counted() {
        let cli = Cli::parse_from(["mdblog", "-vv", "version"]);
        assert_eq!(cli.verbose, 2);
    }
}
