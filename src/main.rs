//! Command-line entry point for the leave planner.
//!
//! Resolves flags into [`Options`], runs the pipeline, writes the HTML
//! report to the output file, echoes it on stdout, and emits the numeric
//! summary on stderr so machine consumers can separate the two streams.

use std::fs;
use std::path::PathBuf;
use std::process;

use chrono::{Datelike, Local};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use leave_planner::config::{Options, YearSelection};
use leave_planner::error::PlannerError;
use leave_planner::models::WorkWeekPattern;
use leave_planner::planner::build_plan;

/// Plan leave and generate an HTML calendar highlighting working days,
/// public holidays, and planned leave.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory containing public-holidays-sg-<year>.ics files.
    #[arg(long, default_value = "public-holidays")]
    public_dir: PathBuf,

    /// CSV file listing leave ranges like yyyymmdd-yyyymmdd, separated by commas.
    #[arg(long, default_value = "holidays.csv")]
    csv: PathBuf,

    /// 7 chars (Mon..Sun) of 0/1 indicating working days.
    #[arg(long, default_value = "1111100")]
    working_days: String,

    /// Output HTML file path.
    #[arg(long, default_value = "leave_plan.html")]
    out: PathBuf,

    /// Title for the generated HTML page.
    #[arg(long, default_value = "Leave Planner")]
    title: String,

    /// CSV file with leave-package,leave-to-carry-over,misc-leave,carry-over-cap.
    #[arg(long, default_value = "leave.csv")]
    leave_csv: PathBuf,

    /// Which year(s) to render in the HTML report.
    #[arg(long, value_enum, default_value = "both")]
    show_years: YearSelection,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // The work-week pattern is the only fatal configuration error; it
    // aborts before any other processing.
    let work_week: WorkWeekPattern = match cli.working_days.parse() {
        Ok(pattern) => pattern,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(2);
        }
    };

    let options = Options {
        public_dir: cli.public_dir,
        leave_ranges_path: cli.csv,
        policy_path: cli.leave_csv,
        work_week,
        out_path: cli.out,
        title: cli.title,
        show_years: cli.show_years,
    };

    let current_year = Local::now().year();
    let plan = build_plan(&options, current_year);

    // A failed write is reported but the document is still emitted below.
    if let Err(err) = fs::write(&options.out_path, &plan.html) {
        let err = PlannerError::WriteFailed {
            path: options.out_path.display().to_string(),
            message: err.to_string(),
        };
        eprintln!("{err}");
    }

    println!("{}", plan.html);

    for line in plan.summary.lines() {
        eprintln!("{line}");
    }
}
