use chrono::NaiveDate;

use super::domain::CandidateProfile;

const MAX_PLAUSIBLE_AGE: u32 = 120;
const HOURS_IN_WEEK: f32 = 168.0;
const MAX_CLB: u8 = 12;

/// Out-of-range input the engine scores by saturation rather than rejecting.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileAnomaly {
    #[error("age {0} is outside the plausible range")]
    ImplausibleAge(u32),
    #[error("work experience #{index} reports {hours} hours per week")]
    ExcessiveHours { index: usize, hours: f32 },
    #[error("work experience #{index} ends before it starts")]
    InvertedInterval { index: usize },
    #[error("work experience #{index} starts after the assessment date {as_of}")]
    FutureInterval { index: usize, as_of: NaiveDate },
    #[error("language sitting #{index} reports CLB {clb} above the benchmark scale")]
    ClbOutOfScale { index: usize, clb: u8 },
}

pub fn profile_anomalies(profile: &CandidateProfile, as_of: NaiveDate) -> Vec<ProfileAnomaly> {
    let mut anomalies = Vec::new();

    if profile.age > MAX_PLAUSIBLE_AGE {
        anomalies.push(ProfileAnomaly::ImplausibleAge(profile.age));
    }

    for (index, entry) in profile.work_experience.iter().enumerate() {
        if entry.hours_per_week > HOURS_IN_WEEK {
            anomalies.push(ProfileAnomaly::ExcessiveHours {
                index,
                hours: entry.hours_per_week,
            });
        }
        if entry.end_date.is_some_and(|end| end < entry.start_date) {
            anomalies.push(ProfileAnomaly::InvertedInterval { index });
        }
        if entry.start_date > as_of {
            anomalies.push(ProfileAnomaly::FutureInterval { index, as_of });
        }
    }

    for (index, result) in profile.language_proficiency.iter().enumerate() {
        if let Some(clb) = result
            .clb_equivalent
            .abilities()
            .into_iter()
            .find(|clb| *clb > MAX_CLB)
        {
            anomalies.push(ProfileAnomaly::ClbOutOfScale { index, clb });
        }
    }

    anomalies
}
