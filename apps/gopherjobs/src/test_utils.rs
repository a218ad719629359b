//! Shared test fixtures: sample jobs and CSV files laid out like the scraper exports.

#[cfg(test)]
pub mod fixtures {
    use std::path::{Path, PathBuf};

    use crate::ingest::columns;
    use crate::models::job::Job;

    /// Creates an unclassified job with the given identity and text fields.
    pub fn sample_job(id: &str, title: &str, description: &str) -> Job {
        Job {
            id: id.to_string(),
            url: format!("https://example.com/jobs/{id}"),
            title: title.to_string(),
            location: "Berlin, Germany".to_string(),
            level: "Mid-Senior level".to_string(),
            description: description.to_string(),
            job_type: "Full-time".to_string(),
            company: "Acme".to_string(),
            company_industry: "Software Development".to_string(),
            remote: false,
            relocation: false,
        }
    }

    /// Header row with `MIN_COLUMNS` named columns.
    pub fn header_row() -> Vec<String> {
        (0..columns::MIN_COLUMNS)
            .map(|i| format!("column_{i}"))
            .collect()
    }

    /// Full-width data row; unmapped columns are filled with filler text.
    pub fn job_row(id: &str, title: &str, description: &str) -> Vec<String> {
        let mut row: Vec<String> = (0..columns::MIN_COLUMNS)
            .map(|i| format!("unused_{i}"))
            .collect();
        row[columns::ID] = id.to_string();
        row[columns::URL] = format!("https://example.com/jobs/{id}");
        row[columns::TITLE] = title.to_string();
        row[columns::COMPANY] = "Acme".to_string();
        row[columns::LOCATION] = "Amsterdam, Netherlands".to_string();
        row[columns::JOB_TYPE] = "Full-time".to_string();
        row[columns::LEVEL] = "Entry level".to_string();
        row[columns::DESCRIPTION] = description.to_string();
        row[columns::COMPANY_INDUSTRY] = "IT Services and IT Consulting".to_string();
        row
    }

    /// Writes `rows` as a CSV file at `dir/name`, creating parent directories.
    /// Rows may have differing widths.
    pub fn write_csv(dir: &Path, name: &str, rows: &[Vec<String>]) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&path)
            .expect("Failed to create fixture CSV");
        for row in rows {
            writer.write_record(row).expect("Failed to write fixture row");
        }
        writer.flush().expect("Failed to flush fixture CSV");
        path
    }
}
