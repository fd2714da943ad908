use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use crate::gpa::GradeProvider;
use crate::grades::{self, Grade};

/// Asks on stdin for each course's expected grade and keeps asking until
/// the answer is one of the accepted tokens.
pub struct StdinGradeProvider;

impl GradeProvider for StdinGradeProvider {
    fn grade_for(&mut self, code: &str, _title: &str) -> Result<Grade> {
        let stdin = io::stdin();
        read_grade(code, &mut stdin.lock(), &mut io::stdout())
    }
}

fn read_grade(code: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<Grade> {
    loop {
        write!(output, "{code}: ")?;
        output.flush()?;
        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("failed to read grade input")?;
        if read == 0 {
            bail!("grade input ended before all courses were graded");
        }
        match Grade::from_str(&line.trim().to_uppercase()) {
            Some(grade) => return Ok(grade),
            None => {
                writeln!(output, "Not a valid grade.")?;
                writeln!(output, "Valid grades: {}", grades::valid_grades())?;
            }
        }
    }
}
