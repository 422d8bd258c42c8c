use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{CandidateProfile, EducationEntry, LanguageTestResult};
use super::experience::total_credited;
use super::language::effective_clb;
use super::tables::{
    AGE_POINTS, CANADIAN_EXPERIENCE_POINTS, EDUCATION_POINTS, FIRST_LANGUAGE_POINTS,
    LANGUAGE_ABILITIES, SECOND_LANGUAGE_CAP, SECOND_LANGUAGE_POINTS,
};

/// Age, education, official languages and Canadian work experience.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreHumanCapitalPoints {
    pub age: u32,
    pub education: u32,
    pub first_official_language: u32,
    pub second_official_language: u32,
    pub language_proficiency: u32,
    pub canadian_work_experience: u32,
    pub subtotal: u32,
}

pub fn calculate_core_human_capital(
    profile: &CandidateProfile,
    as_of: NaiveDate,
) -> CoreHumanCapitalPoints {
    let with_spouse = profile.has_counted_spouse();

    let age = AGE_POINTS.select(with_spouse).lookup(profile.age);
    let education = education_points(&profile.education, with_spouse);
    let (first_official_language, second_official_language) =
        language_points(&profile.language_proficiency, with_spouse);
    let language_proficiency = first_official_language + second_official_language;

    let canadian = total_credited(
        profile
            .work_experience
            .iter()
            .filter(|entry| entry.is_canadian_experience),
        as_of,
    );
    let canadian_work_experience = CANADIAN_EXPERIENCE_POINTS
        .select(with_spouse)
        .lookup(canadian.years());

    CoreHumanCapitalPoints {
        age,
        education,
        first_official_language,
        second_official_language,
        language_proficiency,
        canadian_work_experience,
        subtotal: age + education + language_proficiency + canadian_work_experience,
    }
}

/// Highest-scoring credential only; credentials never add up.
pub(crate) fn education_points(entries: &[EducationEntry], with_spouse: bool) -> u32 {
    let table = EDUCATION_POINTS.select(with_spouse);
    entries
        .iter()
        .map(|entry| table.lookup(entry.level))
        .max()
        .unwrap_or(0)
}

pub(crate) fn first_language_points(result: &LanguageTestResult, with_spouse: bool) -> u32 {
    FIRST_LANGUAGE_POINTS
        .select(with_spouse)
        .lookup(effective_clb(result))
        * LANGUAGE_ABILITIES
}

/// Returns `(first, second)` language points.
///
/// The best-scoring sitting is the first language; among sittings in a different
/// language the best benchmark earns the second-language bonus from CLB 5.
pub(crate) fn language_points(results: &[LanguageTestResult], with_spouse: bool) -> (u32, u32) {
    // `rev` makes ties resolve to the earliest sitting.
    let Some(first) = results
        .iter()
        .rev()
        .max_by_key(|result| first_language_points(result, with_spouse))
    else {
        return (0, 0);
    };

    let second_clb = results
        .iter()
        .filter(|result| result.language != first.language)
        .map(effective_clb)
        .max()
        .unwrap_or(0);

    let second = SECOND_LANGUAGE_POINTS
        .lookup(second_clb)
        .min(SECOND_LANGUAGE_CAP);

    (first_language_points(first, with_spouse), second)
}
