use tracing::{debug, info};

use crate::classify::{classify_all, retain_relevant, KeywordClassifier};
use crate::config::Config;
use crate::errors::Result;
use crate::render::SiteRenderer;

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub loaded: usize,
    pub kept: usize,
    pub remote: usize,
    pub relocation: usize,
    pub list_pages: usize,
    pub detail_pages: usize,
}

/// Load → classify → filter → render. The first error aborts the run.
pub fn run(config: &Config) -> Result<RunSummary> {
    let jobs = crate::ingest::load_jobs(&config.input_dir)?;
    let loaded = jobs.len();

    let classifier = KeywordClassifier::new(config.match_mode);
    let kept = retain_relevant(classify_all(&classifier, jobs));

    for (idx, job) in kept.iter().enumerate() {
        debug!(
            position = idx + 1,
            id = %job.id,
            remote = job.remote,
            relocation = job.relocation,
            "Keeping job"
        );
    }

    let report = SiteRenderer::new(config.site.clone())
        .render(Some(kept.as_slice()), &config.output_dir)?;

    let summary = RunSummary {
        loaded,
        kept: kept.len(),
        remote: kept.iter().filter(|j| j.remote).count(),
        relocation: kept.iter().filter(|j| j.relocation).count(),
        list_pages: report.list_pages,
        detail_pages: report.detail_pages,
    };

    info!(
        loaded = summary.loaded,
        kept = summary.kept,
        remote = summary.remote,
        relocation = summary.relocation,
        list_pages = summary.list_pages,
        match_mode = %config.match_mode,
        "Site generated"
    );

    Ok(summary)
}
