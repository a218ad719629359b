//! Compiled HTML templates for the list and detail pages.
//!
//! Templates live in `templates/` at the crate root and are escaped as HTML.
//! Arithmetic needed by the templates (prev/next links, page-number ranges)
//! goes through `plus`, `minus` and `seq`, exposed as zero-argument methods.

use askama::Template;

use crate::models::job::Job;

pub fn plus(a: usize, b: usize) -> usize {
    a.saturating_add(b)
}

pub fn minus(a: usize, b: usize) -> usize {
    a.saturating_sub(b)
}

/// Inclusive range `start..=end`; empty when `start > end`.
pub fn seq(start: usize, end: usize) -> Vec<usize> {
    (start..=end).collect()
}

/// Entry in the page-number navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub number: usize,
    pub current: bool,
}

#[derive(Template)]
#[template(path = "job_list.html")]
pub struct JobListPage<'a> {
    pub title: &'a str,
    pub created_at: i64,
    pub created_at_display: &'a str,
    pub jobs: &'a [Job],
    pub page: usize,
    pub total_pages: usize,
    pub footer: &'a str,
    pub link: &'a str,
}

impl JobListPage<'_> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn previous_page(&self) -> usize {
        minus(self.page, 1)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn next_page(&self) -> usize {
        plus(self.page, 1)
    }

    /// Position of the first job on this page, 1-based, across all pages.
    pub fn first_position(&self) -> usize {
        plus(minus(self.page, 1) * super::pagination::JOBS_PER_PAGE, 1)
    }

    pub fn page_links(&self) -> Vec<PageLink> {
        seq(1, self.total_pages)
            .into_iter()
            .map(|number| PageLink {
                number,
                current: number == self.page,
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "job_description.html")]
pub struct JobDetailPage<'a> {
    pub title: &'a str,
    pub created_at: i64,
    pub created_at_display: &'a str,
    pub job: &'a Job,
    pub footer: &'a str,
    pub link: &'a str,
}
