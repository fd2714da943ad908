use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::CourseRecord;

/// Semester headers look like "Fall 2024-2025". The matched substring is
/// the canonical label stamped on every course row until the next header.
static SEMESTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(Fall|Spring|Summer)\s+\d{4}-\d{4}").unwrap());

/// Pipe layout: `CODE | TITLE | UG | Registered | credits | ects`.
/// CODE is 2-4 capitals, whitespace, 3 digits; TITLE is everything up to
/// the next pipe; credits and ects carry exactly two fractional digits.
static PIPE_ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([A-Z]{2,4}\s+\d{3})\s*\|\s*([^|]+?)\s*\|\s*UG\s*\|\s*Registered\s*\|\s*(\d+\.\d{2})\s*\|\s*(\d+\.\d{2})",
    )
    .unwrap()
});

/// Whitespace layout: same fields without delimiters. The title is the
/// longest digit-free run before the literal "UG", so a title containing
/// a digit never matches this form (the pipe form still catches it).
static SPACE_ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z]{2,4}\s+\d{3})\s+([^\d]+)\s+UG\s+Registered\s+(\d+\.\d{2})\s+(\d+\.\d{2})")
        .unwrap()
});

#[derive(Default)]
struct Scan {
    current_semester: Option<String>,
    records: Vec<CourseRecord>,
}

/// Walks the transcript text line by line and collects every "Registered"
/// course row, in document order. Rows seen before the first semester
/// header have no semester to belong to and are dropped; anything else
/// that matches neither row pattern is skipped without comment.
pub fn extract_registered_courses(text: &str) -> Vec<CourseRecord> {
    let scan = text.lines().fold(Scan::default(), |mut scan, line| {
        let line = line.trim();
        if line.is_empty() {
            return scan;
        }
        if let Some(header) = SEMESTER_RE.find(line) {
            scan.current_semester = Some(header.as_str().to_string());
            return scan;
        }
        if let Some(semester) = scan.current_semester.as_deref() {
            if let Some(record) = match_course_row(line, semester) {
                scan.records.push(record);
            }
        }
        scan
    });
    scan.records
}

fn match_course_row(line: &str, semester: &str) -> Option<CourseRecord> {
    // Pipe format first; the whitespace form is only a fallback for the
    // same line, never a second pass.
    let caps = PIPE_ROW_RE
        .captures(line)
        .or_else(|| SPACE_ROW_RE.captures(line))?;
    // The patterns pin the numeric shape, but a parse failure still only
    // drops this line rather than aborting the scan.
    let credits = caps[3].parse().ok()?;
    let ects = caps[4].parse().ok()?;
    Some(CourseRecord {
        code: caps[1].trim().to_string(),
        title: caps[2].trim().to_string(),
        credits,
        ects,
        semester: semester.to_string(),
    })
}

/// Last semester header in the document, if any.
pub fn latest_semester(text: &str) -> Option<String> {
    text.lines()
        .filter_map(|line| SEMESTER_RE.find(line))
        .last()
        .map(|header| header.as_str().to_string())
}

/// Distinct semesters holding at least one registered course with SU
/// credits, lexicographically sorted so callers can present a stable
/// choice list.
pub fn semesters_with_registered_credits(courses: &[CourseRecord]) -> Vec<String> {
    let semesters: BTreeSet<&str> = courses
        .iter()
        .filter(|course| course.credits > 0.0)
        .map(|course| course.semester.as_str())
        .collect();
    semesters.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_row_after_header_yields_one_record() {
        let text = "Fall 2024-2025\nCS 201 | Data Structures | UG | Registered | 3.00 | 6.00\n";
        let courses = extract_registered_courses(text);
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].code, "CS 201");
        assert_eq!(courses[0].title, "Data Structures");
        assert_eq!(courses[0].credits, 3.0);
        assert_eq!(courses[0].ects, 6.0);
        assert_eq!(courses[0].semester, "Fall 2024-2025");
    }

    #[test]
    fn whitespace_row_is_matched_as_fallback() {
        let text = "Spring 2024-2025\nMATH 302 Linear Algebra UG Registered 4.00 7.50\n";
        let courses = extract_registered_courses(text);
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].code, "MATH 302");
        assert_eq!(courses[0].title, "Linear Algebra");
        assert_eq!(courses[0].credits, 4.0);
        assert_eq!(courses[0].ects, 7.5);
    }

    #[test]
    fn rows_before_any_header_are_dropped() {
        let text = "CS 201 | Data Structures | UG | Registered | 3.00 | 6.00\nFall 2024-2025\n";
        assert!(extract_registered_courses(text).is_empty());
    }

    #[test]
    fn each_line_produces_at_most_one_record() {
        let text = "\
Fall 2024-2025
CS 201 | Data Structures | UG | Registered | 3.00 | 6.00
CS 201 Data Structures UG Registered 3.00 6.00
";
        let courses = extract_registered_courses(text);
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].code, courses[1].code);
        assert_eq!(courses[0].title, courses[1].title);
    }

    #[test]
    fn rows_follow_the_most_recent_header() {
        let text = "\
Fall 2024-2025
CS 201 | Data Structures | UG | Registered | 3.00 | 6.00
Spring 2024-2025
HUM 101 | Cultures of the Past | UG | Registered | 2.00 | 4.00
PROJ 999 | Senior Project | UG | Registered | 0.00 | 1.00
";
        let courses = extract_registered_courses(text);
        assert_eq!(courses.len(), 3);
        assert_eq!(courses[0].semester, "Fall 2024-2025");
        assert_eq!(courses[1].semester, "Spring 2024-2025");
        assert_eq!(courses[2].semester, "Spring 2024-2025");
    }

    #[test]
    fn blank_and_noise_lines_do_not_reset_the_semester() {
        let text = "\
Fall 2024-2025

Course Code Course Title  Faculty Status
CS 201 | Data Structures | UG | Registered | 3.00 | 6.00
";
        let courses = extract_registered_courses(text);
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].semester, "Fall 2024-2025");
    }

    #[test]
    fn completed_rows_are_not_registered_courses() {
        let text = "\
Fall 2024-2025
CS 101 | Intro to Computing | UG | Completed | 3.00 | 6.00
CS 201 | Data Structures | UG | Registered | 3.00 | 6.00
";
        let courses = extract_registered_courses(text);
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].code, "CS 201");
    }

    #[test]
    fn whitespace_titles_containing_digits_never_match() {
        // Long-standing quirk of the whitespace layout: the title capture
        // excludes digits, so "Calculus 2" only parses in pipe form.
        let text = "Fall 2024-2025\nMATH 102 Calculus 2 UG Registered 4.00 6.00\n";
        assert!(extract_registered_courses(text).is_empty());

        let piped = "Fall 2024-2025\nMATH 102 | Calculus 2 | UG | Registered | 4.00 | 6.00\n";
        let courses = extract_registered_courses(piped);
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].title, "Calculus 2");
    }

    #[test]
    fn header_embedded_in_a_wider_line_still_counts() {
        let text = "Term: Fall 2024-2025 (in progress)\nCS 201 | Data Structures | UG | Registered | 3.00 | 6.00\n";
        let courses = extract_registered_courses(text);
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].semester, "Fall 2024-2025");
    }

    #[test]
    fn latest_semester_returns_the_last_header() {
        let text = "Fall 2023-2024\nnoise\nSpring 2023-2024\nFall 2024-2025\n";
        assert_eq!(latest_semester(text).as_deref(), Some("Fall 2024-2025"));
    }

    #[test]
    fn latest_semester_is_none_without_headers() {
        assert_eq!(latest_semester("no headers here\njust text\n"), None);
    }

    #[test]
    fn zero_credit_semesters_are_excluded_from_the_choice_list() {
        let course = |semester: &str, credits: f64| CourseRecord {
            code: "CS 201".to_string(),
            title: "Data Structures".to_string(),
            credits,
            ects: 6.0,
            semester: semester.to_string(),
        };
        let courses = vec![
            course("Spring 2024-2025", 3.0),
            course("Fall 2024-2025", 0.0),
            course("Fall 2023-2024", 4.0),
            course("Spring 2024-2025", 0.0),
        ];
        let semesters = semesters_with_registered_credits(&courses);
        assert_eq!(semesters, vec!["Fall 2023-2024", "Spring 2024-2025"]);
    }
}
