use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{CandidateProfile, SpouseProfile};
use super::experience::total_credited;
use super::tables::{
    SPOUSE_EDUCATION_POINTS, SPOUSE_EXPERIENCE_POINTS, SPOUSE_LANGUAGE_CAP,
    SPOUSE_LANGUAGE_POINTS,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpousePoints {
    pub education: u32,
    pub language_proficiency: u32,
    pub canadian_work_experience: u32,
    pub subtotal: u32,
}

pub fn calculate_spouse_points(spouse: &SpouseProfile, as_of: NaiveDate) -> SpousePoints {
    let education = spouse
        .education
        .iter()
        .map(|entry| SPOUSE_EDUCATION_POINTS.lookup(entry.level))
        .max()
        .unwrap_or(0);

    // Each ability is banded on its own, unlike the principal applicant's minimum rule.
    let language_proficiency = spouse
        .language_proficiency
        .iter()
        .flat_map(|result| result.clb_equivalent.abilities())
        .map(|clb| SPOUSE_LANGUAGE_POINTS.lookup(u32::from(clb)))
        .sum::<u32>()
        .min(SPOUSE_LANGUAGE_CAP);

    let experience = total_credited(&spouse.canadian_work_experience, as_of);
    let canadian_work_experience = SPOUSE_EXPERIENCE_POINTS.lookup(experience.years());

    SpousePoints {
        education,
        language_proficiency,
        canadian_work_experience,
        subtotal: education + language_proficiency + canadian_work_experience,
    }
}

/// Spouse section for a profile: all zeros unless the spouse is counted.
pub fn spouse_section(profile: &CandidateProfile, as_of: NaiveDate) -> SpousePoints {
    profile
        .counted_spouse()
        .map(|spouse| calculate_spouse_points(spouse, as_of))
        .unwrap_or_default()
}
