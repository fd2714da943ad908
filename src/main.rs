use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod extract;
mod gpa;
mod grades;
mod models;
mod pdf;
mod prompt;
mod server;
mod summary;

#[derive(Parser)]
#[command(name = "transcript-gpa")]
#[command(about = "Transcript course extraction and GPA projection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the Registered courses extracted from the transcript
    Courses {
        #[arg(long)]
        pdf: Option<PathBuf>,
        /// Also write the extracted courses to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Show the cumulative totals and latest semester from the transcript
    Summary {
        #[arg(long)]
        pdf: Option<PathBuf>,
    },
    /// Calculate the GPA of one semester from estimated grades
    TermGpa {
        #[arg(long)]
        pdf: Option<PathBuf>,
        #[arg(long, default_value = "Spring 2024-2025")]
        semester: String,
    },
    /// Project the new CGPA once the registered courses are graded
    Project {
        #[arg(long)]
        pdf: Option<PathBuf>,
    },
    /// Serve the transcript processing API over HTTP
    Serve {
        #[arg(long, default_value = "0.0.0.0:8000")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Courses { pdf, csv } => {
            let document = load_document(pdf)?;
            let courses = extract::extract_registered_courses(&document);
            if courses.is_empty() {
                println!("No registered courses found in the document.");
                return Ok(());
            }
            println!("Registered courses:");
            for course in &courses {
                println!(
                    "- {} {} ({}) {:.2} SU / {:.2} ECTS",
                    course.code, course.title, course.semester, course.credits, course.ects
                );
            }
            if let Some(out) = csv {
                let written = write_courses_csv(&courses, &out)?;
                println!("Wrote {written} courses to {}.", out.display());
            }
        }
        Commands::Summary { pdf } => {
            let document = load_document(pdf)?;
            match summary::extract_summary_values(&document) {
                Some(totals) => {
                    println!("Total Earned SU Credits: {:.2}", totals.su_credits);
                    println!("Total Earned ECTS: {:.2}", totals.ects);
                    println!("CGPA: {:.2}", totals.cgpa);
                }
                None => {
                    println!(
                        "Could not extract previous CGPA, SU Credits, or ECTS from the document."
                    );
                }
            }
            match extract::latest_semester(&document) {
                Some(semester) => println!("Latest semester: {semester}"),
                None => println!("No semester headers found in the document."),
            }
        }
        Commands::TermGpa { pdf, semester } => {
            let document = load_document(pdf)?;
            let courses = extract::extract_registered_courses(&document);
            if courses.is_empty() {
                println!("No registered courses found in the document.");
                return Ok(());
            }
            if !courses
                .iter()
                .any(|c| c.semester == semester && c.credits > 0.0)
            {
                println!("No Registered courses with SU credits > 0 found in {semester}.");
                let semesters = extract::semesters_with_registered_credits(&courses);
                if !semesters.is_empty() {
                    println!("Semesters with registered courses: {}", semesters.join(", "));
                }
                return Ok(());
            }

            println!("\nEnter estimated grades for registered courses in {semester}:");
            println!("\nValid grades: {}\n", grades::valid_grades());
            let mut provider = prompt::StdinGradeProvider;
            let term = gpa::calculate_term_gpa(&courses, &semester, &mut provider)?;
            println!("\nTerm GPA for {semester}: {:.2}", term.gpa);
            println!("Total SU Credits: {:.2}", term.su_credits);
            println!("Total ECTS: {:.2}", term.ects);
        }
        Commands::Project { pdf } => {
            let document = load_document(pdf)?;
            let Some(prior) = summary::extract_summary_values(&document) else {
                println!("Could not extract previous CGPA, SU Credits, or ECTS from the document.");
                return Ok(());
            };
            let courses = extract::extract_registered_courses(&document);
            if courses.is_empty() {
                println!("No registered courses found in the document.");
                return Ok(());
            }
            if !courses.iter().any(|c| c.credits > 0.0) {
                println!("No Registered courses with SU credits > 0 found.");
                return Ok(());
            }

            println!("Enter estimated grades:");
            let mut provider = prompt::StdinGradeProvider;
            let projection = gpa::project_cgpa(&prior, &courses, &mut provider)?;
            println!("\nNew Total Earned SU Credits: {:.2}", projection.su_credits);
            println!("New Total Earned ECTS: {:.2}", projection.ects);
            println!("New CGPA: {:.2}", projection.cgpa);
        }
        Commands::Serve { bind } => {
            server::serve(&bind).await?;
        }
    }

    Ok(())
}

fn load_document(pdf: Option<PathBuf>) -> Result<String> {
    let path = match pdf {
        Some(path) => path,
        None => pdf::find_transcript_pdf(Path::new("."))?,
    };
    pdf::document_text(&path)
}

fn write_courses_csv(courses: &[models::CourseRecord], out: &Path) -> Result<usize> {
    let mut writer = csv::Writer::from_path(out)
        .with_context(|| format!("failed to create {}", out.display()))?;
    for course in courses {
        writer.serialize(course)?;
    }
    writer.flush()?;
    Ok(courses.len())
}
