use anyhow::Result;

use crate::grades::Grade;
use crate::models::{CourseRecord, Projection, SummaryTotals, TermGpa};

/// Supplies one validated grade per course. Implementations own any
/// re-prompting; the aggregation below never sees an invalid grade and
/// asks in extraction order, which is also the order prompts appear.
pub trait GradeProvider {
    fn grade_for(&mut self, code: &str, title: &str) -> Result<Grade>;
}

#[derive(Default)]
struct Totals {
    grade_points: f64,
    credits: f64,
    su_credits: f64,
    ects: f64,
}

impl Totals {
    fn add(&mut self, course: &CourseRecord, grade: Grade) {
        match grade.points() {
            Some(points) => {
                self.grade_points += points * course.credits;
                self.credits += course.credits;
                self.su_credits += course.credits;
                self.ects += course.ects;
            }
            // S/U earns credits and ECTS but never moves the GPA.
            None => {
                self.su_credits += course.credits;
                self.ects += course.ects;
            }
        }
    }
}

/// GPA over the courses of one semester, graded as the provider answers.
/// Zero-credit courses are skipped before the provider is ever asked.
pub fn calculate_term_gpa(
    courses: &[CourseRecord],
    target_semester: &str,
    provider: &mut impl GradeProvider,
) -> Result<TermGpa> {
    let mut totals = Totals::default();
    for course in courses {
        if course.semester != target_semester {
            continue;
        }
        if course.credits == 0.0 {
            continue;
        }
        let grade = provider.grade_for(&course.code, &course.title)?;
        totals.add(course, grade);
    }
    let gpa = if totals.credits > 0.0 {
        totals.grade_points / totals.credits
    } else {
        0.0
    };
    Ok(TermGpa {
        gpa,
        su_credits: totals.su_credits,
        ects: totals.ects,
    })
}

/// Projects the cumulative GPA after grading every registered course with
/// SU credits, on top of the transcript's prior summary. The prior grade
/// points are reconstructed as cgpa * su_credits; when no newly graded
/// course is GPA-eligible the CGPA stays exactly at its prior value.
pub fn project_cgpa(
    prior: &SummaryTotals,
    courses: &[CourseRecord],
    provider: &mut impl GradeProvider,
) -> Result<Projection> {
    let prior_grade_points = prior.cgpa * prior.su_credits;
    let mut totals = Totals::default();
    for course in courses {
        if course.credits == 0.0 {
            continue;
        }
        let grade = provider.grade_for(&course.code, &course.title)?;
        totals.add(course, grade);
    }
    let final_grade_points = prior_grade_points + totals.grade_points;
    let final_credits = prior.su_credits + totals.credits;
    let final_ects = prior.ects + totals.ects;
    let cgpa = if final_credits > 0.0 {
        final_grade_points / final_credits
    } else {
        prior.cgpa
    };
    Ok(Projection {
        su_credits: final_credits,
        ects: final_ects,
        cgpa,
    })
}
