//! Page generation and static asset copying.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use super::{rewrite_base_path, SiteOptions, Template};
use crate::error::{Error, Result};

/// Summary of a site build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Generated pages, sorted
    pub pages: Vec<PathBuf>,

    /// Number of static files copied
    pub static_files: usize,
}

/// A markdown source and the HTML file it renders to.
#[derive(Debug, Clone)]
struct PageJob {
    source: PathBuf,
    dest: PathBuf,
}

/// Copy static assets into a fresh output directory, returning the file count.
///
/// `dest` is removed first if it exists.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize> {
    if dest.exists() {
        log::debug!("removing {}", dest.display());
        fs::remove_dir_all(dest)?;
    }
    copy_dir(src, dest)
}

fn copy_dir(src: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest)?;
    let mut count = 0;
    for entry in sorted_entries(src)? {
        let target = dest.join(entry.file_name().unwrap_or_default());
        if entry.is_dir() {
            count += copy_dir(&entry, &target)?;
        } else {
            log::trace!("copying {} to {}", entry.display(), target.display());
            fs::copy(&entry, &target)?;
            count += 1;
        }
    }
    Ok(count)
}

/// Render one markdown file into a complete HTML page.
pub fn generate_page(from: &Path, template: &Template, dest: &Path, base_path: &str) -> Result<()> {
    log::info!("Generating page from {} to {}", from.display(), dest.display());

    let markdown = fs::read_to_string(from)?;
    let content = crate::render_document(&markdown)?;
    let title = crate::extract_title(&markdown)?;

    let page = rewrite_base_path(&template.render(&title, &content), base_path);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, page)?;
    Ok(())
}

/// Render every file under `content_dir` into `dest_dir`, mirroring the
/// directory layout with `.html` extensions. Returns the written paths.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Template,
    dest_dir: &Path,
    base_path: &str,
    parallel: bool,
) -> Result<Vec<PathBuf>> {
    let mut jobs = Vec::new();
    collect_jobs(content_dir, dest_dir, &mut jobs)?;
    log::debug!("found {} pages under {}", jobs.len(), content_dir.display());

    let run = |job: &PageJob| -> Result<PathBuf> {
        generate_page(&job.source, template, &job.dest, base_path)
            .map_err(|e| e.in_page(&job.source))?;
        Ok(job.dest.clone())
    };

    let mut pages = if parallel {
        jobs.par_iter().map(run).collect::<Result<Vec<_>>>()?
    } else {
        jobs.iter().map(run).collect::<Result<Vec<_>>>()?
    };
    pages.sort();
    Ok(pages)
}

fn collect_jobs(content_dir: &Path, dest_dir: &Path, jobs: &mut Vec<PageJob>) -> Result<()> {
    for entry in sorted_entries(content_dir)? {
        let name = entry.file_name().unwrap_or_default();
        if entry.is_dir() {
            collect_jobs(&entry, &dest_dir.join(name), jobs)?;
        } else {
            let mut file_name = entry.file_stem().unwrap_or(name).to_os_string();
            file_name.push(".html");
            let dest = dest_dir.join(file_name);
            jobs.push(PageJob {
                source: entry,
                dest,
            });
        }
    }
    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();
    Ok(entries)
}

/// Build the whole site: copy static assets, then generate every page.
pub fn build_site(options: &SiteOptions) -> Result<BuildReport> {
    let static_files = if options.static_dir.is_dir() {
        copy_static(&options.static_dir, &options.output_dir)?
    } else {
        log::warn!(
            "static directory {} not found, skipping asset copy",
            options.static_dir.display()
        );
        if options.output_dir.exists() {
            log::debug!("removing {}", options.output_dir.display());
            fs::remove_dir_all(&options.output_dir)?;
        }
        0
    };

    let template = Template::load(&options.template_path)?;
    if !options.content_dir.is_dir() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("content directory {} not found", options.content_dir.display()),
        )));
    }

    let pages = generate_pages_recursive(
        &options.content_dir,
        &template,
        &options.output_dir,
        &options.base_path,
        options.parallel,
    )?;

    log::info!("built {} pages, copied {} static files", pages.len(), static_files);
    Ok(BuildReport {
        pages,
        static_files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_jobs_mirrors_tree() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(content.join("blog/2024")).unwrap();
        fs::write(content.join("index.md"), "# Home").unwrap();
        fs::write(content.join("blog/2024/post.v2.md"), "# Post").unwrap();

        let mut jobs = Vec::new();
        collect_jobs(&content, Path::new("public"), &mut jobs).unwrap();
        let dests: Vec<PathBuf> = jobs.into_iter().map(|j| j.dest).collect();
        assert_eq!(
            dests,
            vec![
                PathBuf::from("public/blog/2024/post.v2.html"),
                PathBuf::from("public/index.html"),
            ]
        );
    }

    #[test]
    fn test_copy_static_replaces_dest() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("static");
        let dest = dir.path().join("public");
        fs::create_dir_all(src.join("images")).unwrap();
        fs::write(src.join("index.css"), "body {}").unwrap();
        fs::write(src.join("images/logo.png"), [0u8, 1, 2]).unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("stale.html"), "old").unwrap();

        let copied = copy_static(&src, &dest).unwrap();
        assert_eq!(copied, 2);
        assert!(!dest.join("stale.html").exists());
        assert_eq!(fs::read_to_string(dest.join("index.css")).unwrap(), "body {}");
        assert_eq!(fs::read(dest.join("images/logo.png")).unwrap(), vec![0u8, 1, 2]);
    }

    #[test]
    fn test_generate_page_error_names_source() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(content.join("bad.md"), "no title here").unwrap();

        let template = Template::new("{{ Content }}");
        let err = generate_pages_recursive(&content, &template, &dir.path().join("out"), "/", false)
            .unwrap_err();
        match err {
            Error::Page { path, source } => {
                assert!(path.ends_with("bad.md"));
                assert!(matches!(*source, Error::MissingTitle));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
