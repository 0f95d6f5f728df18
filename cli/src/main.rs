//! mdsite CLI - static page generator for restricted Markdown

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use mdsite::{JsonFormat, SiteOptions};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(version)]
#[command(about = "Build HTML pages from restricted Markdown", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Base path for root-relative links when building with defaults
    #[arg(value_name = "BASE_PATH")]
    base_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site: copy static assets and render every content page
    Build {
        /// Markdown content directory
        #[arg(long, value_name = "DIR", default_value = "content")]
        content: PathBuf,

        /// HTML template with {{ Title }} and {{ Content }} placeholders
        #[arg(long, value_name = "FILE", default_value = "template.html")]
        template: PathBuf,

        /// Static assets directory
        #[arg(long = "static", value_name = "DIR", default_value = "static")]
        static_dir: PathBuf,

        /// Output directory (replaced on every build)
        #[arg(short, long, value_name = "DIR", default_value = "public")]
        output: PathBuf,

        /// Prefix for root-relative href and src attributes
        #[arg(long, env = "MDSITE_BASE_PATH", default_value = "/")]
        base_path: String,

        /// Render pages one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Render one Markdown file to an HTML fragment
    Html {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the title of a Markdown file
    Title {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Dump the parsed block tree as JSON
    Json {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Build {
            content,
            template,
            static_dir,
            output,
            base_path,
            sequential,
        }) => cmd_build(
            SiteOptions::new()
                .with_content_dir(content)
                .with_template(template)
                .with_static_dir(static_dir)
                .with_output_dir(output)
                .with_base_path(base_path)
                .with_parallel(!sequential),
        ),
        Some(Commands::Html { input, output }) => cmd_html(&input, output.as_deref()),
        Some(Commands::Title { input }) => cmd_title(&input),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        None => {
            // Default behavior: build with the conventional layout
            let mut options = SiteOptions::new();
            if let Some(base_path) = cli.base_path {
                options = options.with_base_path(base_path);
            }
            cmd_build(options)
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_build(options: SiteOptions) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("building site with {:?}", options);
    let report = mdsite::build_site(&options)?;

    println!("{}", "Generated pages:".green().bold());
    for (i, page) in report.pages.iter().enumerate() {
        let branch = if i + 1 == report.pages.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), page.display());
    }
    println!(
        "\n{} {} pages, {} static files",
        "Done!".green().bold(),
        report.pages.len(),
        report.static_files
    );

    Ok(())
}

fn cmd_html(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = fs::read_to_string(input)?;
    let html = mdsite::render_document(&markdown)?;
    write_output(output, &html)
}

fn cmd_title(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = fs::read_to_string(input)?;
    println!("{}", mdsite::extract_title(&markdown)?);
    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = fs::read_to_string(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = mdsite::to_json(&markdown, format)?;
    write_output(output, &json)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_base_path() {
        let cli = Cli::try_parse_from(["mdsite", "/docs/"]).unwrap();
        assert_eq!(cli.base_path.as_deref(), Some("/docs/"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_base_path_rejected_before_subcommand() {
        assert!(Cli::try_parse_from(["mdsite", "/docs/", "build"]).is_err());
    }

    #[test]
    fn test_build_subcommand_flags() {
        let cli =
            Cli::try_parse_from(["mdsite", "build", "--base-path", "/docs/", "--sequential"])
                .unwrap();
        match cli.command {
            Some(Commands::Build {
                base_path,
                sequential,
                ..
            }) => {
                assert_eq!(base_path, "/docs/");
                assert!(sequential);
            }
            _ => panic!("expected build command"),
        }
    }
}
