//! Job classifier: pluggable trait that flags listings as remote and/or relocation friendly.
//!
//! Default: `KeywordClassifier` (keyword search over lowercased title + description).
//! The pipeline only depends on `JobClassifier`, so backends can be swapped.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::classify::keywords::{
    contains_any, contains_any_word, RELOCATION_KEYWORDS, REMOTE_KEYWORDS,
};
use crate::models::job::Job;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// How keywords are matched against listing text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Plain substring containment ("remotely" matches "remote").
    #[default]
    Substring,
    /// Keyword must not be adjacent to another letter or digit.
    WordBoundary,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(MatchMode::Substring),
            "word_boundary" | "word-boundary" | "word" => Ok(MatchMode::WordBoundary),
            other => Err(format!(
                "unsupported match mode `{other}`; expected substring|word_boundary"
            )),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Substring => f.write_str("substring"),
            MatchMode::WordBoundary => f.write_str("word_boundary"),
        }
    }
}

/// Flags computed for a single listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub remote: bool,
    pub relocation: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

pub trait JobClassifier {
    fn classify(&self, job: &Job) -> Classification;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordClassifier
// ────────────────────────────────────────────────────────────────────────────

/// Keyword-based classifier.
///
/// remote     = title or description contains any of `REMOTE_KEYWORDS`
/// relocation = title or description contains any of `RELOCATION_KEYWORDS`
///
/// Both texts are lowercased before matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier {
    mode: MatchMode,
}

impl KeywordClassifier {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    fn matches(&self, text: &str, keywords: &[&str]) -> bool {
        match self.mode {
            MatchMode::Substring => contains_any(text, keywords),
            MatchMode::WordBoundary => contains_any_word(text, keywords),
        }
    }
}

impl JobClassifier for KeywordClassifier {
    fn classify(&self, job: &Job) -> Classification {
        let title = job.title.to_lowercase();
        let description = job.description.to_lowercase();

        Classification {
            remote: self.matches(&description, REMOTE_KEYWORDS)
                || self.matches(&title, REMOTE_KEYWORDS),
            relocation: self.matches(&description, RELOCATION_KEYWORDS)
                || self.matches(&title, RELOCATION_KEYWORDS),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline helpers
// ────────────────────────────────────────────────────────────────────────────

/// Sets the remote/relocation flags on every job, preserving order.
pub fn classify_all(classifier: &dyn JobClassifier, jobs: Vec<Job>) -> Vec<Job> {
    jobs.into_iter()
        .map(|mut job| {
            let flags = classifier.classify(&job);
            job.remote = flags.remote;
            job.relocation = flags.relocation;
            debug!(
                id = %job.id,
                remote = job.remote,
                relocation = job.relocation,
                "Classified job"
            );
            job
        })
        .collect()
}

/// Keeps jobs that are remote or relocation friendly. Stable and idempotent.
pub fn retain_relevant(mut jobs: Vec<Job>) -> Vec<Job> {
    jobs.retain(Job::is_relevant);
    jobs
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
