use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{CandidateProfile, EducationLevel};
use super::experience::total_credited;
use super::language::highest_effective_clb;
use super::tables::{
    foreign_experience_combination, TRANSFERABILITY_CLB_POINTS, TRANSFERABILITY_COMBINATION_CAP,
};

/// Skill transferability combinations. `subtotal` is the raw sum of the three
/// combinations; the section ceiling is applied when the breakdown is assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillTransferabilityPoints {
    pub education: u32,
    pub foreign_work_experience: u32,
    pub certificate_of_qualification: u32,
    pub subtotal: u32,
}

pub fn calculate_skill_transferability(
    profile: &CandidateProfile,
    as_of: NaiveDate,
) -> SkillTransferabilityPoints {
    let clb = highest_effective_clb(&profile.language_proficiency);

    let has_degree = profile
        .education
        .iter()
        .any(|entry| entry.level.is_bachelors_or_above());
    let education = if has_degree {
        TRANSFERABILITY_CLB_POINTS
            .lookup(clb)
            .min(TRANSFERABILITY_COMBINATION_CAP)
    } else {
        0
    };

    let foreign = total_credited(
        profile
            .work_experience
            .iter()
            .filter(|entry| !entry.is_canadian_experience),
        as_of,
    );
    let foreign_work_experience = foreign_experience_combination(foreign.years(), clb)
        .min(TRANSFERABILITY_COMBINATION_CAP);

    let has_certificate = profile
        .education
        .iter()
        .any(|entry| entry.level == EducationLevel::Certificate);
    let certificate_of_qualification = if has_certificate {
        TRANSFERABILITY_CLB_POINTS
            .lookup(clb)
            .min(TRANSFERABILITY_COMBINATION_CAP)
    } else {
        0
    };

    SkillTransferabilityPoints {
        education,
        foreign_work_experience,
        certificate_of_qualification,
        subtotal: education + foreign_work_experience + certificate_of_qualification,
    }
}
