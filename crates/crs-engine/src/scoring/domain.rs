use std::io::Read;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Candidate snapshot assembled upstream by the profile-management layer.
///
/// Absent or `null` collections deserialize to empty vectors so that missing data
/// scores zero instead of failing the whole calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub age: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub marital_status: MaritalStatus,
    #[serde(default)]
    pub spouse_profile: Option<SpouseProfile>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language_proficiency: Vec<LanguageTestResult>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_job_offer: bool,
    #[serde(default)]
    pub job_offer_details: Option<JobOfferDetails>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_provincial_nomination: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub adaptability_factors: AdaptabilityFactors,
}

impl CandidateProfile {
    pub fn from_json(raw: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ProfileError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Spouse factors only count for a married candidate who supplied a spouse profile.
    pub fn counted_spouse(&self) -> Option<&SpouseProfile> {
        match self.marital_status {
            MaritalStatus::Married => self.spouse_profile.as_ref(),
            _ => None,
        }
    }

    pub fn has_counted_spouse(&self) -> bool {
        self.counted_spouse().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaritalStatus {
    #[default]
    Single,
    Married,
    CommonLaw,
    Divorced,
    Widowed,
    Separated,
    #[serde(other)]
    Other,
}

/// Accompanying spouse details consumed by the spouse factor calculator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpouseProfile {
    #[serde(default, deserialize_with = "one_or_many")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language_proficiency: Vec<LanguageTestResult>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub canadian_work_experience: Vec<WorkExperience>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub level: EducationLevel,
    #[serde(default, deserialize_with = "null_as_default")]
    pub field: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
}

impl EducationEntry {
    pub fn new(level: EducationLevel, country: &str) -> Self {
        Self {
            level,
            field: String::new(),
            country: country.to_string(),
        }
    }

    pub fn is_canadian(&self) -> bool {
        is_canada(&self.country)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationLevel {
    HighSchool,
    OneYearDiploma,
    TwoYearDiploma,
    Bachelors,
    TwoOrMoreDegrees,
    Masters,
    Phd,
    Certificate,
    #[serde(other)]
    Unrecognized,
}

impl EducationLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighSchool => "highSchool",
            Self::OneYearDiploma => "oneYearDiploma",
            Self::TwoYearDiploma => "twoYearDiploma",
            Self::Bachelors => "bachelors",
            Self::TwoOrMoreDegrees => "twoOrMoreDegrees",
            Self::Masters => "masters",
            Self::Phd => "phd",
            Self::Certificate => "certificate",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Lenient parse accepting camelCase, snake_case, kebab-case or spaced labels.
    pub fn from_label(value: &str) -> Self {
        let compact: String = value
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match compact.as_str() {
            "highschool" | "secondary" => Self::HighSchool,
            "oneyeardiploma" => Self::OneYearDiploma,
            "twoyeardiploma" => Self::TwoYearDiploma,
            "bachelors" | "bachelor" => Self::Bachelors,
            "twoormoredegrees" => Self::TwoOrMoreDegrees,
            "masters" | "master" => Self::Masters,
            "phd" | "doctorate" => Self::Phd,
            "certificate" => Self::Certificate,
            _ => Self::Unrecognized,
        }
    }

    pub const fn is_bachelors_or_above(self) -> bool {
        matches!(
            self,
            Self::Bachelors | Self::TwoOrMoreDegrees | Self::Masters | Self::Phd
        )
    }
}

/// Tested language. Labels are matched case-insensitively; anything other than
/// English or French keeps its lowercased name so distinct languages stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    English,
    French,
    Other(String),
}

impl Language {
    pub fn from_label(value: &str) -> Self {
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "english" | "en" => Self::English,
            "french" | "fr" | "francais" | "français" => Self::French,
            _ => Self::Other(normalized),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::English => "english",
            Self::French => "french",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.label().to_string()
    }
}

/// One language test sitting with raw band scores and their CLB equivalents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageTestResult {
    pub language: Language,
    #[serde(default, deserialize_with = "null_as_default")]
    pub test: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub speaking: f32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub listening: f32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reading: f32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub writing: f32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub clb_equivalent: ClbScores,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClbScores {
    pub speaking: u8,
    pub listening: u8,
    pub reading: u8,
    pub writing: u8,
}

impl ClbScores {
    pub const fn uniform(level: u8) -> Self {
        Self {
            speaking: level,
            listening: level,
            reading: level,
            writing: level,
        }
    }

    pub fn abilities(&self) -> [u8; 4] {
        [self.speaking, self.listening, self.reading, self.writing]
    }

    /// The weakest ability decides the benchmark for the whole sitting.
    pub fn minimum(&self) -> u8 {
        self.abilities().into_iter().min().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    #[serde(default, deserialize_with = "null_as_default")]
    pub occupation: Occupation,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_canadian_experience: bool,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hours_per_week: f32,
}

impl WorkExperience {
    pub fn noc(&self) -> &str {
        self.occupation.noc.trim()
    }

    /// NOC TEER/skill level digit, i.e. the first character of the code.
    pub fn noc_leading_digit(&self) -> Option<char> {
        self.noc().chars().next().filter(char::is_ascii_digit)
    }

    /// Skilled occupations lead with 0, 1, 2 or 3.
    pub fn is_skilled(&self) -> bool {
        matches!(self.noc_leading_digit(), Some('0'..='3'))
    }

    pub fn is_skilled_trade(&self) -> bool {
        self.noc_leading_digit() == Some('3')
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Occupation {
    pub noc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobOfferDetails {
    pub noc: String,
    pub lmia_exempt: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdaptabilityFactors {
    pub relatives_in_canada: RelativesInCanada,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelativesInCanada {
    pub has: bool,
}

/// Raised when a profile payload cannot be read into the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("candidate profile is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub(crate) fn is_canada(country: &str) -> bool {
    let trimmed = country.trim();
    trimmed.eq_ignore_ascii_case("canada") || trimmed.eq_ignore_ascii_case("ca")
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<OneOrMany<T>>::deserialize(deserializer)?;
    Ok(match value {
        Some(OneOrMany::One(entry)) => vec![entry],
        Some(OneOrMany::Many(entries)) => entries,
        None => Vec::new(),
    })
}
