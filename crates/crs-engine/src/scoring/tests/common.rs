use chrono::NaiveDate;

use crate::scoring::domain::{
    AdaptabilityFactors, CandidateProfile, ClbScores, EducationEntry, EducationLevel,
    JobOfferDetails, Language, LanguageTestResult, MaritalStatus, Occupation, RelativesInCanada,
    SpouseProfile, WorkExperience,
};
use crate::scoring::{CrsCalculator, ScoringConfig};

pub(super) fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid assessment date")
}

pub(super) fn calculator() -> CrsCalculator {
    CrsCalculator::new(ScoringConfig::new(as_of()))
}

pub(super) fn empty_profile(age: u32) -> CandidateProfile {
    CandidateProfile {
        age,
        marital_status: MaritalStatus::Single,
        spouse_profile: None,
        education: Vec::new(),
        language_proficiency: Vec::new(),
        work_experience: Vec::new(),
        has_job_offer: false,
        job_offer_details: None,
        has_provincial_nomination: false,
        adaptability_factors: AdaptabilityFactors::default(),
    }
}

pub(super) fn sitting(language: Language, clb: ClbScores) -> LanguageTestResult {
    let test = match language {
        Language::French => "TEF",
        _ => "IELTS",
    };
    LanguageTestResult {
        language,
        test: test.to_string(),
        speaking: 0.0,
        listening: 0.0,
        reading: 0.0,
        writing: 0.0,
        clb_equivalent: clb,
    }
}

pub(super) fn english(clb: u8) -> LanguageTestResult {
    sitting(Language::English, ClbScores::uniform(clb))
}

pub(super) fn french(clb: u8) -> LanguageTestResult {
    sitting(Language::French, ClbScores::uniform(clb))
}

pub(super) fn degree(level: EducationLevel, country: &str) -> EducationEntry {
    EducationEntry::new(level, country)
}

/// Job ending on the assessment date spanning `months` complete months.
pub(super) fn job(noc: &str, months: u32, hours: f32, canadian: bool) -> WorkExperience {
    let end = as_of();
    let start = end
        .checked_sub_months(chrono::Months::new(months))
        .expect("start date in range");

    WorkExperience {
        occupation: Occupation {
            noc: noc.to_string(),
        },
        country: if canadian { "Canada" } else { "Philippines" }.to_string(),
        is_canadian_experience: canadian,
        start_date: start,
        end_date: Some(end),
        hours_per_week: hours,
    }
}

pub(super) fn job_offer(noc: &str, lmia_exempt: bool) -> JobOfferDetails {
    JobOfferDetails {
        noc: noc.to_string(),
        lmia_exempt,
    }
}

pub(super) fn sibling() -> AdaptabilityFactors {
    AdaptabilityFactors {
        relatives_in_canada: RelativesInCanada { has: true },
    }
}

/// 29-year-old master's graduate, CLB 9 English, two years of Canadian software work.
pub(super) fn strong_single_profile() -> CandidateProfile {
    CandidateProfile {
        education: vec![
            degree(EducationLevel::Bachelors, "India"),
            degree(EducationLevel::Masters, "Canada"),
        ],
        language_proficiency: vec![english(9)],
        work_experience: vec![
            job("21231", 24, 40.0, true),
            job("21231", 36, 40.0, false),
        ],
        ..empty_profile(29)
    }
}

pub(super) fn spouse_profile() -> SpouseProfile {
    SpouseProfile {
        education: vec![degree(EducationLevel::Bachelors, "Brazil")],
        language_proficiency: vec![english(7)],
        canadian_work_experience: vec![job("41200", 12, 40.0, true)],
    }
}

pub(super) fn married(profile: CandidateProfile) -> CandidateProfile {
    CandidateProfile {
        marital_status: MaritalStatus::Married,
        spouse_profile: Some(spouse_profile()),
        ..profile
    }
}
