//! Static site renderer: writes the paginated list pages and one detail page per job.
//!
//! Output layout under the chosen root:
//! - `html/list1.html` … `html/list<N>.html`
//! - `html/jobs/<ID>.html`
//!
//! Any create/write/render failure aborts the render. Pages written before the
//! failure are left in place.

pub mod pagination;
pub mod templates;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use askama::Template;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::errors::{AppError, Result};
use crate::models::job::Job;
use crate::render::pagination::{page_count, paginate, JOBS_PER_PAGE};
use crate::render::templates::{JobDetailPage, JobListPage};

pub const DEFAULT_SITE_TITLE: &str = "Gopher Jobs";
pub const DEFAULT_FOOTER: &str = "Created by the Gopher Jobs maintainers";
pub const DEFAULT_LINK: &str = "https://github.com/gopherjobs";

const HTML_DIR: &str = "html";
const JOBS_DIR: &str = "jobs";

/// Fixed text shown on every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMeta {
    pub title: String,
    pub footer: String,
    pub link: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: DEFAULT_SITE_TITLE.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
            link: DEFAULT_LINK.to_string(),
        }
    }
}

/// Counts of pages written by one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    pub list_pages: usize,
    pub detail_pages: usize,
}

pub struct SiteRenderer {
    meta: SiteMeta,
}

impl SiteRenderer {
    pub fn new(meta: SiteMeta) -> Self {
        Self { meta }
    }

    /// Renders the site under `output_root` (`.` when empty), stamping every
    /// page with the current time.
    ///
    /// `None` for `jobs` is rejected with `EmptyInput` before anything touches
    /// the filesystem; an empty slice renders a single empty list page.
    pub fn render(&self, jobs: Option<&[Job]>, output_root: &Path) -> Result<RenderReport> {
        self.render_at(jobs, output_root, Utc::now())
    }

    pub fn render_at(
        &self,
        jobs: Option<&[Job]>,
        output_root: &Path,
        now: DateTime<Utc>,
    ) -> Result<RenderReport> {
        let jobs =
            jobs.ok_or_else(|| AppError::EmptyInput("jobs collection is absent".to_string()))?;

        let output_root = if output_root.as_os_str().is_empty() {
            Path::new(".")
        } else {
            output_root
        };

        // every ID is checked before anything is written
        let detail_paths = jobs
            .iter()
            .map(|job| detail_page_path(output_root, job))
            .collect::<Result<Vec<_>>>()?;

        let jobs_dir = detail_dir(output_root);
        fs::create_dir_all(&jobs_dir).map_err(|e| AppError::io(&jobs_dir, e))?;

        let created_at = now.timestamp();
        let created_at_display = now.format("%Y-%m-%d %H:%M UTC").to_string();

        let total_pages = page_count(jobs.len(), JOBS_PER_PAGE);

        for page in paginate(jobs, JOBS_PER_PAGE) {
            let out_file = list_page_path(output_root, page.number);
            let template = JobListPage {
                title: &self.meta.title,
                created_at,
                created_at_display: &created_at_display,
                jobs: page.items,
                page: page.number,
                total_pages,
                footer: &self.meta.footer,
                link: &self.meta.link,
            };
            write_page(&out_file, &template)?;
            info!(file = %out_file.display(), jobs = page.items.len(), "Wrote job list");
        }

        for (job, out_file) in jobs.iter().zip(&detail_paths) {
            let template = JobDetailPage {
                title: &job.title,
                created_at,
                created_at_display: &created_at_display,
                job,
                footer: &self.meta.footer,
                link: &self.meta.link,
            };
            write_page(out_file, &template)?;
            info!(file = %out_file.display(), "Wrote job description");
        }

        Ok(RenderReport {
            list_pages: total_pages,
            detail_pages: jobs.len(),
        })
    }
}

/// Renders `template` and writes it to `path`. A failed sync after the bytes
/// are written is only logged.
fn write_page<T: Template>(path: &Path, template: &T) -> Result<()> {
    let html = template.render().map_err(|source| AppError::Template {
        path: path.to_path_buf(),
        source,
    })?;

    let mut file = File::create(path).map_err(|e| AppError::io(path, e))?;
    file.write_all(html.as_bytes())
        .map_err(|e| AppError::io(path, e))?;

    if let Err(e) = file.sync_all() {
        warn!(file = %path.display(), error = %e, "Failed to sync file after writing");
    }

    Ok(())
}

/// Path of the list page with the given number under `output_root`.
pub fn list_page_path(output_root: &Path, number: usize) -> PathBuf {
    output_root.join(HTML_DIR).join(format!("list{number}.html"))
}

/// Path of the detail page for `job`, always directly inside `detail_dir`.
///
/// An ID that would turn into a path of its own (separators, a root or a
/// drive prefix) is rejected with `InvalidInput`.
pub fn detail_page_path(output_root: &Path, job: &Job) -> Result<PathBuf> {
    let file_name = job.page_file_name();
    let mut components = Path::new(&file_name).components();
    let single_name = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if !single_name || file_name.contains(&['/', '\\'][..]) {
        return Err(AppError::InvalidInput(format!(
            "job ID cannot be used as a file name: {:?}",
            job.id
        )));
    }

    Ok(detail_dir(output_root).join(file_name))
}

/// Directory holding the detail pages under `output_root`.
pub fn detail_dir(output_root: &Path) -> PathBuf {
    output_root.join(HTML_DIR).join(JOBS_DIR)
}
