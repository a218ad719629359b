use serde::{Deserialize, Serialize};

/// A single job listing. Text fields are copied verbatim from the source row;
/// the two flags are filled in by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub url: String,
    pub title: String,
    pub location: String,
    /// senior, mid-level, entry level
    pub level: String,
    pub description: String,
    /// full-time, part-time
    #[serde(rename = "type")]
    pub job_type: String,
    pub company: String,
    pub company_industry: String,
    #[serde(rename = "Remote")]
    pub remote: bool,
    #[serde(rename = "Relocation")]
    pub relocation: bool,
}

impl Job {
    /// Whether the listing should be published.
    pub fn is_relevant(&self) -> bool {
        self.remote || self.relocation
    }

    /// File name of the detail page for this listing.
    pub fn page_file_name(&self) -> String {
        format!("{}.html", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::sample_job;

    #[test]
    fn test_job_serializes_with_expected_wire_fields() {
        let mut job = sample_job("42", "Go Engineer", "Remote friendly");
        job.remote = true;

        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["id"], "42");
        assert_eq!(json["type"], "Full-time");
        assert_eq!(json["company_industry"], "Software Development");
        assert_eq!(json["Remote"], true);
        assert_eq!(json["Relocation"], false);

        let decoded: Job = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, job);
    }

    #[test]
    fn test_is_relevant_requires_either_flag() {
        let mut job = sample_job("1", "Engineer", "Office based");
        assert!(!job.is_relevant());

        job.relocation = true;
        assert!(job.is_relevant());

        job.relocation = false;
        job.remote = true;
        assert!(job.is_relevant());
    }

    #[test]
    fn test_page_file_name_uses_id() {
        let job = sample_job("3901", "Engineer", "");
        assert_eq!(job.page_file_name(), "3901.html");
    }
}
