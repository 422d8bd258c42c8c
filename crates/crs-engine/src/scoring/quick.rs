use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::domain::{
    AdaptabilityFactors, CandidateProfile, ClbScores, EducationEntry, EducationLevel, Language,
    LanguageTestResult, MaritalStatus, Occupation, WorkExperience,
};
use super::tables::IELTS_BANDS_BY_CLB;

const SYNTHETIC_HOURS_PER_WEEK: f32 = 40.0;
const CANADA: &str = "Canada";

/// Bucketed self-reported answers from the quick-estimate form.
///
/// Buckets that cannot be read contribute nothing to the estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicInfo {
    /// Age range such as `"20-29"` or `"45+"`.
    pub age: String,
    pub education: String,
    /// Language band such as `"clb7"`.
    pub language_proficiency: String,
    /// Canadian experience range such as `"none"` or `"2-years"`.
    pub canadian_work_experience: String,
}

/// Representative age for a bucket: `"20-29"` is 25, `"45+"` is 45, `"under-18"` is 17.
pub fn age_from_range(value: &str) -> Option<u32> {
    let trimmed = value.trim().to_ascii_lowercase();

    if let Some(rest) = trimmed
        .strip_prefix("under")
        .or_else(|| trimmed.strip_prefix('<'))
    {
        let limit = rest.trim_matches(|c: char| !c.is_ascii_digit()).parse::<u32>().ok()?;
        return Some(limit.saturating_sub(1));
    }

    if let Some(lower) = trimmed.strip_suffix('+') {
        return lower.trim().parse().ok();
    }

    match trimmed.split_once('-') {
        Some((low, high)) => {
            let low = low.trim().parse::<u32>().ok()?;
            let high = high.trim().parse::<u32>().ok()?;
            Some(low.checked_add(high)?.checked_add(1)? / 2)
        }
        None => trimmed.parse().ok(),
    }
}

/// CLB level for a band such as `"clb7"`, `"CLB 9"` or `"clb10+"`.
pub fn clb_from_band(value: &str) -> Option<u8> {
    let trimmed = value.trim().to_ascii_lowercase();
    let level = trimmed.strip_prefix("clb").unwrap_or(&trimmed);
    level
        .trim()
        .trim_end_matches('+')
        .trim()
        .parse()
        .ok()
}

/// Whole years for an experience bucket; `"none"` and sub-year buckets are zero.
pub fn years_from_range(value: &str) -> u32 {
    let trimmed = value.trim().to_ascii_lowercase();
    if trimmed.is_empty() || trimmed == "none" || trimmed.starts_with("less") || trimmed.starts_with('<')
    {
        return 0;
    }

    let digits: String = trimmed
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// Single-applicant profile with at most one language sitting and one Canadian job.
pub fn synthetic_profile(info: &BasicInfo, as_of: NaiveDate) -> CandidateProfile {
    let education = match EducationLevel::from_label(&info.education) {
        EducationLevel::Unrecognized => Vec::new(),
        level => vec![EducationEntry::new(level, "")],
    };

    let language_proficiency = clb_from_band(&info.language_proficiency)
        .map(synthetic_sitting)
        .into_iter()
        .collect();

    let years = years_from_range(&info.canadian_work_experience);
    let work_experience = as_of
        .checked_sub_months(Months::new(years.saturating_mul(12)))
        .filter(|_| years > 0)
        .map(|start_date| WorkExperience {
            occupation: Occupation::default(),
            country: CANADA.to_string(),
            is_canadian_experience: true,
            start_date,
            end_date: Some(as_of),
            hours_per_week: SYNTHETIC_HOURS_PER_WEEK,
        })
        .into_iter()
        .collect();

    CandidateProfile {
        age: age_from_range(&info.age).unwrap_or(0),
        marital_status: MaritalStatus::Single,
        spouse_profile: None,
        education,
        language_proficiency,
        work_experience,
        has_job_offer: false,
        job_offer_details: None,
        has_provincial_nomination: false,
        adaptability_factors: AdaptabilityFactors::default(),
    }
}

fn synthetic_sitting(clb: u8) -> LanguageTestResult {
    let [listening, reading, writing, speaking] = IELTS_BANDS_BY_CLB
        .iter()
        .rev()
        .find(|(level, _)| clb >= *level)
        .map(|(_, bands)| *bands)
        .unwrap_or([0.0; 4]);

    LanguageTestResult {
        language: Language::English,
        test: "IELTS".to_string(),
        speaking,
        listening,
        reading,
        writing,
        clb_equivalent: ClbScores::uniform(clb),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_ranges_map_to_representative_ages() {
        assert_eq!(age_from_range("20-29"), Some(25));
        assert_eq!(age_from_range("30-34"), Some(32));
        assert_eq!(age_from_range("45+"), Some(45));
        assert_eq!(age_from_range("under-18"), Some(17));
        assert_eq!(age_from_range("33"), Some(33));
        assert_eq!(age_from_range("old"), None);
    }

    #[test]
    fn oversized_age_ranges_are_unreadable() {
        assert_eq!(age_from_range("4294967295-4294967295"), None);
        assert_eq!(age_from_range("4294967295-0"), None);
        assert_eq!(age_from_range("4294967294-0"), Some(2147483647));
    }

    #[test]
    fn language_bands_parse_with_or_without_prefix() {
        assert_eq!(clb_from_band("clb7"), Some(7));
        assert_eq!(clb_from_band("CLB 9"), Some(9));
        assert_eq!(clb_from_band("clb10+"), Some(10));
        assert_eq!(clb_from_band("fluent"), None);
    }

    #[test]
    fn experience_buckets_parse_leading_years() {
        assert_eq!(years_from_range("none"), 0);
        assert_eq!(years_from_range("less-than-1-year"), 0);
        assert_eq!(years_from_range("2-years"), 2);
        assert_eq!(years_from_range("5-plus-years"), 5);
        assert_eq!(years_from_range("some"), 0);
    }

    #[test]
    fn synthetic_profile_has_single_language_and_job() {
        let as_of = NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date");
        let info = BasicInfo {
            age: "30-34".to_string(),
            education: "masters".to_string(),
            language_proficiency: "clb9".to_string(),
            canadian_work_experience: "3-years".to_string(),
        };

        let profile = synthetic_profile(&info, as_of);
        assert_eq!(profile.age, 32);
        assert_eq!(profile.language_proficiency.len(), 1);
        assert_eq!(profile.language_proficiency[0].listening, 8.0);
        assert_eq!(profile.work_experience.len(), 1);
        assert_eq!(
            profile.work_experience[0].start_date,
            NaiveDate::from_ymd_opt(2022, 3, 1).expect("valid date")
        );
        assert!(!profile.has_counted_spouse());
    }

    #[test]
    fn unreadable_buckets_leave_sections_empty() {
        let as_of = NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date");
        let profile = synthetic_profile(&BasicInfo::default(), as_of);

        assert_eq!(profile.age, 0);
        assert!(profile.education.is_empty());
        assert!(profile.language_proficiency.is_empty());
        assert!(profile.work_experience.is_empty());
    }
}
