use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{CandidateProfile, EducationLevel, LanguageTestResult, WorkExperience};
use super::experience::{credited, total_credited};
use super::language::meets_in_all_abilities;

const SKILLED_WORKER_MONTHS: u32 = 12;
const CANADIAN_EXPERIENCE_MONTHS: u32 = 12;
const SKILLED_TRADES_MONTHS: u32 = 24;

const SKILLED_WORKER_CLB: u8 = 7;
const CANADIAN_EXPERIENCE_CLB: u8 = 7;
const CANADIAN_EXPERIENCE_NOC_B_CLB: u8 = 5;
const TRADES_ORAL_CLB: u8 = 5;
const TRADES_LITERACY_CLB: u8 = 4;

/// Federal economic programs evaluated by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImmigrationProgram {
    FederalSkilledWorker,
    CanadianExperienceClass,
    FederalSkilledTrades,
}

impl ImmigrationProgram {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::FederalSkilledWorker,
            Self::CanadianExperienceClass,
            Self::FederalSkilledTrades,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FederalSkilledWorker => "Federal Skilled Worker Program",
            Self::CanadianExperienceClass => "Canadian Experience Class",
            Self::FederalSkilledTrades => "Federal Skilled Trades Program",
        }
    }
}

/// Programs a profile qualifies for, plus every unmet criterion across the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub is_eligible: bool,
    pub eligible_programs: Vec<ImmigrationProgram>,
    pub reasons: Vec<String>,
}

impl EligibilityResult {
    pub fn summary(&self) -> String {
        if self.eligible_programs.is_empty() {
            return "not eligible for any program".to_string();
        }

        let labels = self
            .eligible_programs
            .iter()
            .map(|program| program.label())
            .collect::<Vec<_>>();
        format!("eligible for {}", labels.join(", "))
    }
}

pub fn check_eligibility(profile: &CandidateProfile, as_of: NaiveDate) -> EligibilityResult {
    let mut eligible_programs = Vec::new();
    let mut reasons = Vec::new();

    for program in ImmigrationProgram::ordered() {
        let gaps = match program {
            ImmigrationProgram::FederalSkilledWorker => skilled_worker_gaps(profile, as_of),
            ImmigrationProgram::CanadianExperienceClass => {
                canadian_experience_gaps(profile, as_of)
            }
            ImmigrationProgram::FederalSkilledTrades => skilled_trades_gaps(profile, as_of),
        };

        if gaps.is_empty() {
            eligible_programs.push(program);
        } else {
            reasons.extend(
                gaps.into_iter()
                    .map(|gap| format!("{}: {gap}", program.label())),
            );
        }
    }

    EligibilityResult {
        is_eligible: !eligible_programs.is_empty(),
        eligible_programs,
        reasons,
    }
}

fn skilled_worker_gaps(profile: &CandidateProfile, as_of: NaiveDate) -> Vec<String> {
    let mut gaps = Vec::new();

    let skilled = total_credited(
        profile.work_experience.iter().filter(|entry| entry.is_skilled()),
        as_of,
    );
    if !skilled.at_least_months(SKILLED_WORKER_MONTHS) {
        gaps.push(format!(
            "requires at least {SKILLED_WORKER_MONTHS} months of skilled work experience (NOC 0, 1, 2 or 3), found {}",
            skilled.months()
        ));
    }

    if !any_sitting(&profile.language_proficiency, |result| {
        meets_in_all_abilities(result, SKILLED_WORKER_CLB)
    }) {
        gaps.push(format!(
            "requires a language test with CLB {SKILLED_WORKER_CLB} or higher in all four abilities"
        ));
    }

    if profile.education.is_empty() {
        gaps.push("requires at least one education credential".to_string());
    }

    gaps
}

fn canadian_experience_gaps(profile: &CandidateProfile, as_of: NaiveDate) -> Vec<String> {
    let mut gaps = Vec::new();

    let qualifying = profile
        .work_experience
        .iter()
        .filter(|entry| entry.is_canadian_experience && entry.is_skilled())
        .collect::<Vec<&WorkExperience>>();

    let canadian = total_credited(qualifying.iter().copied(), as_of);
    if !canadian.at_least_months(CANADIAN_EXPERIENCE_MONTHS) {
        gaps.push(format!(
            "requires at least {CANADIAN_EXPERIENCE_MONTHS} months of skilled Canadian work experience, found {}",
            canadian.months()
        ));
    }

    // NOC B experience relaxes the benchmark.
    let has_noc_b = qualifying
        .iter()
        .any(|entry| entry.is_skilled_trade() && !credited(entry, as_of).is_empty());
    let threshold = if has_noc_b {
        CANADIAN_EXPERIENCE_NOC_B_CLB
    } else {
        CANADIAN_EXPERIENCE_CLB
    };

    if !any_sitting(&profile.language_proficiency, |result| {
        meets_in_all_abilities(result, threshold)
    }) {
        gaps.push(format!(
            "requires a language test with CLB {threshold} or higher in all four abilities"
        ));
    }

    gaps
}

fn skilled_trades_gaps(profile: &CandidateProfile, as_of: NaiveDate) -> Vec<String> {
    let mut gaps = Vec::new();

    let trades = total_credited(
        profile
            .work_experience
            .iter()
            .filter(|entry| entry.is_skilled_trade()),
        as_of,
    );
    if !trades.at_least_months(SKILLED_TRADES_MONTHS) {
        gaps.push(format!(
            "requires at least {SKILLED_TRADES_MONTHS} months of skilled trades experience (NOC 3), found {}",
            trades.months()
        ));
    }

    if !any_sitting(&profile.language_proficiency, meets_trades_language) {
        gaps.push(format!(
            "requires CLB {TRADES_ORAL_CLB} in speaking and listening and CLB {TRADES_LITERACY_CLB} in reading and writing"
        ));
    }

    let has_certificate = profile
        .education
        .iter()
        .any(|entry| entry.level == EducationLevel::Certificate);
    if !profile.has_job_offer && !has_certificate {
        gaps.push("requires a job offer or a certificate of qualification".to_string());
    }

    gaps
}

fn meets_trades_language(result: &LanguageTestResult) -> bool {
    let clb = result.clb_equivalent;
    clb.speaking >= TRADES_ORAL_CLB
        && clb.listening >= TRADES_ORAL_CLB
        && clb.reading >= TRADES_LITERACY_CLB
        && clb.writing >= TRADES_LITERACY_CLB
}

fn any_sitting<F>(results: &[LanguageTestResult], predicate: F) -> bool
where
    F: Fn(&LanguageTestResult) -> bool,
{
    results.iter().any(predicate)
}
