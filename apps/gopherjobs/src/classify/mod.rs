// Classification: keyword flags for remote/relocation, then the relevance filter.
// Pure in-memory stage, no error paths.

pub mod classifier;
pub mod keywords;

pub use classifier::{classify_all, retain_relevant, JobClassifier, KeywordClassifier, MatchMode};
