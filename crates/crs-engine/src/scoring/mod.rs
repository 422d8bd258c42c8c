//! Comprehensive Ranking System scoring and program eligibility.
//!
//! Every calculator is a pure function of a [`CandidateProfile`] and the assessment
//! date used to close open-ended work-experience intervals. Nothing here performs I/O
//! or keeps state between calls, so a [`CrsCalculator`] can be shared across threads.

mod additional;
mod anomalies;
pub mod domain;
mod eligibility;
mod experience;
mod human_capital;
mod language;
mod quick;
mod spouse;
pub mod tables;
mod transferability;

#[cfg(test)]
mod tests;

pub use self::additional::{additional_points, calculate_additional_points, AdditionalPoints};
pub use self::anomalies::{profile_anomalies, ProfileAnomaly};
pub use self::domain::{
    AdaptabilityFactors, CandidateProfile, ClbScores, EducationEntry, EducationLevel,
    JobOfferDetails, Language, LanguageTestResult, MaritalStatus, Occupation, ProfileError,
    RelativesInCanada, SpouseProfile, WorkExperience,
};
pub use self::eligibility::{EligibilityResult, ImmigrationProgram};
pub use self::experience::{months_between, CreditedExperience};
pub use self::human_capital::{calculate_core_human_capital, CoreHumanCapitalPoints};
pub use self::quick::{
    age_from_range, clb_from_band, synthetic_profile, years_from_range, BasicInfo,
};
pub use self::spouse::{calculate_spouse_points, SpousePoints};
pub use self::transferability::{calculate_skill_transferability, SkillTransferabilityPoints};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use self::tables::{MAX_TOTAL, SKILL_TRANSFERABILITY_CAP};

/// Inputs the engine needs besides the profile itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Closes open-ended experience and anchors quick-estimate experience.
    pub as_of: NaiveDate,
}

impl ScoringConfig {
    pub const fn new(as_of: NaiveDate) -> Self {
        Self { as_of }
    }
}

/// Section-by-section CRS result. `total` is the clamped sum of the section subtotals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    pub core_human_capital: CoreHumanCapitalPoints,
    pub spouse: SpousePoints,
    pub skill_transferability: SkillTransferabilityPoints,
    pub additional: AdditionalPoints,
    pub total: u32,
}

impl PointsBreakdown {
    /// Sum of the four section subtotals before the overall ceiling applies.
    pub fn raw_total(&self) -> u32 {
        self.core_human_capital.subtotal
            + self.spouse.subtotal
            + self.skill_transferability.subtotal
            + self.additional.subtotal
    }
}

/// Breakdown and eligibility for one profile, with any input anomalies noticed on the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub breakdown: PointsBreakdown,
    pub eligibility: EligibilityResult,
    pub anomalies: Vec<String>,
}

/// Stateless engine applying the CRS grids to candidate profiles.
#[derive(Debug, Clone)]
pub struct CrsCalculator {
    config: ScoringConfig,
}

impl CrsCalculator {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn as_of(&self) -> NaiveDate {
        self.config.as_of
    }

    pub fn calculate_points(&self, profile: &CandidateProfile) -> u32 {
        self.points_breakdown(profile).total
    }

    pub fn points_breakdown(&self, profile: &CandidateProfile) -> PointsBreakdown {
        let as_of = self.config.as_of;

        let core_human_capital = calculate_core_human_capital(profile, as_of);
        let spouse = spouse::spouse_section(profile, as_of);

        let mut skill_transferability = calculate_skill_transferability(profile, as_of);
        skill_transferability.subtotal = skill_transferability
            .subtotal
            .min(SKILL_TRANSFERABILITY_CAP);

        let additional = additional_points(profile);

        let mut breakdown = PointsBreakdown {
            core_human_capital,
            spouse,
            skill_transferability,
            additional,
            total: 0,
        };
        breakdown.total = breakdown.raw_total().min(MAX_TOTAL);

        debug!(
            core = breakdown.core_human_capital.subtotal,
            spouse = breakdown.spouse.subtotal,
            transferability = breakdown.skill_transferability.subtotal,
            additional = breakdown.additional.subtotal,
            total = breakdown.total,
            "computed CRS breakdown"
        );

        breakdown
    }

    pub fn check_eligibility(&self, profile: &CandidateProfile) -> EligibilityResult {
        let result = eligibility::check_eligibility(profile, self.config.as_of);
        debug!(
            eligible = result.is_eligible,
            programs = result.eligible_programs.len(),
            gaps = result.reasons.len(),
            "evaluated program eligibility"
        );
        result
    }

    /// Core human capital score of a synthetic single-applicant profile.
    ///
    /// Spouse, skill transferability and additional points are left out on purpose:
    /// the bucketed answers carry too little detail to estimate them.
    pub fn quick_estimate(&self, info: &BasicInfo) -> u32 {
        let profile = synthetic_profile(info, self.config.as_of);
        self.points_breakdown(&profile)
            .core_human_capital
            .subtotal
            .min(MAX_TOTAL)
    }

    pub fn assess(&self, profile: &CandidateProfile) -> Assessment {
        let anomalies = profile_anomalies(profile, self.config.as_of);
        for anomaly in &anomalies {
            warn!(%anomaly, "profile value outside expected range; scoring by saturation");
        }

        Assessment {
            breakdown: self.points_breakdown(profile),
            eligibility: self.check_eligibility(profile),
            anomalies: anomalies.iter().map(ToString::to_string).collect(),
        }
    }
}

pub fn calculate_points(profile: &CandidateProfile, as_of: NaiveDate) -> u32 {
    CrsCalculator::new(ScoringConfig::new(as_of)).calculate_points(profile)
}

pub fn get_points_breakdown(profile: &CandidateProfile, as_of: NaiveDate) -> PointsBreakdown {
    CrsCalculator::new(ScoringConfig::new(as_of)).points_breakdown(profile)
}

pub fn check_eligibility(profile: &CandidateProfile, as_of: NaiveDate) -> EligibilityResult {
    CrsCalculator::new(ScoringConfig::new(as_of)).check_eligibility(profile)
}

pub fn get_quick_estimate(info: &BasicInfo, as_of: NaiveDate) -> u32 {
    CrsCalculator::new(ScoringConfig::new(as_of)).quick_estimate(info)
}
