use serde::{Deserialize, Serialize};

use super::domain::{CandidateProfile, JobOfferDetails, Language};
use super::language::clb_for;
use super::tables::{
    CANADIAN_EDUCATION_POINTS, FRENCH_ONLY_POINTS, FRENCH_WITH_ENGLISH_POINTS,
    PROVINCIAL_NOMINATION_POINTS, SENIOR_MANAGEMENT_OFFER_POINTS, SIBLING_IN_CANADA_POINTS,
    SKILLED_OFFER_POINTS,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalPoints {
    pub provincial_nomination: u32,
    pub job_offer: u32,
    pub canadian_education: u32,
    pub french_language: u32,
    pub sibling_in_canada: u32,
    pub subtotal: u32,
}

/// Flat sum of the additional factors.
pub fn calculate_additional_points(profile: &CandidateProfile) -> u32 {
    additional_points(profile).subtotal
}

pub fn additional_points(profile: &CandidateProfile) -> AdditionalPoints {
    let provincial_nomination = if profile.has_provincial_nomination {
        PROVINCIAL_NOMINATION_POINTS
    } else {
        0
    };

    let job_offer = if profile.has_job_offer {
        profile
            .job_offer_details
            .as_ref()
            .map(job_offer_points)
            .unwrap_or(0)
    } else {
        0
    };

    let canadian_education = profile
        .education
        .iter()
        .filter(|entry| entry.is_canadian())
        .map(|entry| CANADIAN_EDUCATION_POINTS.lookup(entry.level))
        .max()
        .unwrap_or(0);

    let french_language = french_language_points(profile);

    let sibling_in_canada = if profile.adaptability_factors.relatives_in_canada.has {
        SIBLING_IN_CANADA_POINTS
    } else {
        0
    };

    AdditionalPoints {
        provincial_nomination,
        job_offer,
        canadian_education,
        french_language,
        sibling_in_canada,
        subtotal: provincial_nomination
            + job_offer
            + canadian_education
            + french_language
            + sibling_in_canada,
    }
}

fn job_offer_points(details: &JobOfferDetails) -> u32 {
    if details.lmia_exempt {
        return 0;
    }

    let noc = details.noc.trim();
    if noc.starts_with("00") {
        SENIOR_MANAGEMENT_OFFER_POINTS
    } else if matches!(noc.chars().next(), Some('0'..='3')) {
        SKILLED_OFFER_POINTS
    } else {
        0
    }
}

fn french_language_points(profile: &CandidateProfile) -> u32 {
    let french = clb_for(&profile.language_proficiency, &Language::French);
    if french < 7 {
        return 0;
    }

    let english = clb_for(&profile.language_proficiency, &Language::English);
    if english >= 5 {
        FRENCH_WITH_ENGLISH_POINTS
    } else {
        FRENCH_ONLY_POINTS
    }
}
