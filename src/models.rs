use serde::{Deserialize, Serialize};

/// One "Registered" course row, attributed to the semester header above it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    pub code: String,
    pub title: String,
    pub credits: f64,
    pub ects: f64,
    pub semester: String,
}

/// Cumulative state as of the transcript's last computed summary row.
/// Only ever produced whole; a transcript missing any of the three
/// fields has no summary at all.
#[derive(Debug, Clone)]
pub struct SummaryTotals {
    pub su_credits: f64,
    pub ects: f64,
    pub cgpa: f64,
}

#[derive(Debug, Clone)]
pub struct TermGpa {
    pub gpa: f64,
    pub su_credits: f64,
    pub ects: f64,
}

#[derive(Debug, Clone)]
pub struct Projection {
    pub su_credits: f64,
    pub ects: f64,
    pub cgpa: f64,
}
