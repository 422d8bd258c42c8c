use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use crs_engine::batch::{QuickEstimateImporter, QuickEstimateRow};
use crs_engine::config::AppConfig;
use crs_engine::error::AppError;
use crs_engine::telemetry;
use crs_engine::{BasicInfo, CandidateProfile, CrsCalculator, ScoringConfig};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "crs",
    about = "Score Express Entry candidate profiles against the Comprehensive Ranking System",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the CRS total for a candidate profile
    Score(ProfileArgs),
    /// Print the section-by-section breakdown as JSON
    Breakdown(ProfileArgs),
    /// Print program eligibility and unmet criteria as JSON
    Eligibility(ProfileArgs),
    /// Print breakdown, eligibility and input anomalies as JSON
    Assess(ProfileArgs),
    /// Estimate the core score from bucketed answers
    Estimate(EstimateArgs),
    /// Estimate every row of a CSV of bucketed answers
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct ProfileArgs {
    /// Candidate profile JSON file
    #[arg(long)]
    profile: PathBuf,
    #[command(flatten)]
    date: AsOfArg,
}

#[derive(Args, Debug)]
struct EstimateArgs {
    /// Age range, e.g. 20-29 or 45+
    #[arg(long, default_value = "")]
    age: String,
    /// Highest education level, e.g. bachelors
    #[arg(long, default_value = "")]
    education: String,
    /// Language band, e.g. clb7
    #[arg(long, default_value = "")]
    language: String,
    /// Canadian work experience range, e.g. none or 2-years
    #[arg(long, default_value = "none")]
    experience: String,
    #[command(flatten)]
    date: AsOfArg,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// CSV with id, age, education, language and experience columns
    #[arg(long)]
    csv: PathBuf,
    /// Emit JSON rows instead of `id,score` lines
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    date: AsOfArg,
}

#[derive(Args, Debug)]
struct AsOfArg {
    /// Assessment date (YYYY-MM-DD); defaults to CRS_AS_OF, then today
    #[arg(long = "as-of", value_parser = parse_date)]
    as_of: Option<NaiveDate>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let resolve = |arg: &AsOfArg| -> CrsCalculator {
        let today = Local::now().date_naive();
        let scoring = match arg.as_of {
            Some(as_of) => ScoringConfig::new(as_of),
            None => config.assessment.scoring_config(today),
        };
        info!(?config.environment, as_of = %scoring.as_of, "scoring engine configured");
        CrsCalculator::new(scoring)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Score(args) => {
            let calculator = resolve(&args.date);
            let profile = load_profile(&args.profile)?;
            writeln!(out, "{}", calculator.calculate_points(&profile))?;
        }
        Command::Breakdown(args) => {
            let calculator = resolve(&args.date);
            let profile = load_profile(&args.profile)?;
            write_json(&mut out, &calculator.points_breakdown(&profile))?;
        }
        Command::Eligibility(args) => {
            let calculator = resolve(&args.date);
            let profile = load_profile(&args.profile)?;
            write_json(&mut out, &calculator.check_eligibility(&profile))?;
        }
        Command::Assess(args) => {
            let calculator = resolve(&args.date);
            let profile = load_profile(&args.profile)?;
            write_json(&mut out, &calculator.assess(&profile))?;
        }
        Command::Estimate(args) => {
            let calculator = resolve(&args.date);
            let info = BasicInfo {
                age: args.age,
                education: args.education,
                language_proficiency: args.language,
                canadian_work_experience: args.experience,
            };
            writeln!(out, "{}", calculator.quick_estimate(&info))?;
        }
        Command::Batch(args) => {
            let calculator = resolve(&args.date);
            let rows = QuickEstimateImporter::from_path(&args.csv, &calculator)?;
            if args.json {
                write_json(&mut out, &rows)?;
            } else {
                render_batch(&mut out, &rows)?;
            }
        }
    }

    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn load_profile(path: &Path) -> Result<CandidateProfile, AppError> {
    let file = File::open(path)?;
    Ok(CandidateProfile::from_reader(BufReader::new(file))?)
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn render_batch<W: Write>(out: &mut W, rows: &[QuickEstimateRow]) -> io::Result<()> {
    writeln!(out, "id,score")?;
    for row in rows {
        writeln!(out, "{},{}", row.id, row.score)?;
    }
    Ok(())
}
