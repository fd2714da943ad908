use std::sync::LazyLock;

use regex::Regex;

use crate::models::SummaryTotals;

/// Leftover layout markup (e.g. "<td>") that can ride along on OCR lines.
static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.\d+").unwrap());

const LABELS: [&str; 3] = ["total earned su credits", "total earned ects", "cgpa"];

/// Finds the cumulative summary block: a single line carrying all three
/// column labels, followed by a value line with at least three decimal
/// numbers. The first qualifying header decides the outcome; if its value
/// line comes up short the summary is absent, never patched together from
/// a later block.
pub fn extract_summary_values(text: &str) -> Option<SummaryTotals> {
    let lines: Vec<&str> = text.lines().collect();
    for (index, line) in lines.iter().enumerate() {
        let cleaned = MARKUP_RE.replace_all(line, "").to_lowercase();
        if !LABELS.iter().all(|label| cleaned.contains(label)) {
            continue;
        }
        let value_line = lines[index + 1..]
            .iter()
            .map(|following| following.trim())
            .find(|following| !following.is_empty())?;
        let numbers: Vec<f64> = NUMBER_RE
            .find_iter(value_line)
            .filter_map(|m| m.as_str().parse().ok())
            .collect();
        return match numbers.as_slice() {
            [su_credits, ects, cgpa, ..] => Some(SummaryTotals {
                su_credits: *su_credits,
                ects: *ects,
                cgpa: *cgpa,
            }),
            _ => None,
        };
    }
    None
}
