//! Positional column layout of the scraped job CSV exports.
//!
//! Columns are bound by index, not by header name. Rows shorter than
//! `MIN_COLUMNS` are rejected by `job_from_record`.

use csv::StringRecord;

use crate::models::job::Job;

pub const ID: usize = 0;
pub const URL: usize = 2;
pub const TITLE: usize = 4;
pub const COMPANY: usize = 5;
pub const LOCATION: usize = 6;
pub const JOB_TYPE: usize = 8;
pub const LEVEL: usize = 15;
pub const DESCRIPTION: usize = 19;
pub const COMPANY_INDUSTRY: usize = 20;

/// Highest mapped index + 1.
pub const MIN_COLUMNS: usize = COMPANY_INDUSTRY + 1;

/// Maps a data row onto a `Job`. Returns `None` for rows with fewer than
/// `MIN_COLUMNS` fields. Values are copied byte-for-byte.
pub fn job_from_record(record: &StringRecord) -> Option<Job> {
    if record.len() < MIN_COLUMNS {
        return None;
    }

    let field = |index: usize| record.get(index).unwrap_or_default().to_string();

    Some(Job {
        id: field(ID),
        url: field(URL),
        title: field(TITLE),
        location: field(LOCATION),
        level: field(LEVEL),
        description: field(DESCRIPTION),
        job_type: field(JOB_TYPE),
        company: field(COMPANY),
        company_industry: field(COMPANY_INDUSTRY),
        remote: false,
        relocation: false,
    })
}
