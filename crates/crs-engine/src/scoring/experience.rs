use chrono::{Datelike, NaiveDate};

use super::domain::WorkExperience;

const FULL_TIME_HOURS: f32 = 30.0;
const PART_TIME_HOURS: f32 = 15.0;

/// Experience credit measured in half months so part-time proration stays integral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct CreditedExperience {
    half_months: u32,
}

impl CreditedExperience {
    pub const fn from_half_months(half_months: u32) -> Self {
        Self { half_months }
    }

    pub const fn half_months(self) -> u32 {
        self.half_months
    }

    /// Whole credited months, rounded down.
    pub const fn months(self) -> u32 {
        self.half_months / 2
    }

    /// Whole credited years, rounded down.
    pub const fn years(self) -> u32 {
        self.half_months / 24
    }

    pub const fn at_least_months(self, months: u32) -> bool {
        self.half_months >= months.saturating_mul(2)
    }

    pub const fn is_empty(self) -> bool {
        self.half_months == 0
    }
}

impl std::iter::Sum for CreditedExperience {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::from_half_months(
            iter.fold(0u32, |total, credit| total.saturating_add(credit.half_months)),
        )
    }
}

/// Complete calendar months between two dates; a partial trailing month does not count.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end <= start {
        return 0;
    }

    let years = end.year() - start.year();
    let months = years * 12 + end.month() as i32 - start.month() as i32;
    let adjusted = if end.day() < start.day() {
        months - 1
    } else {
        months
    };

    adjusted.max(0) as u32
}

/// Prorated credit for a single entry; open-ended and future-dated intervals are
/// closed at `as_of`.
pub fn credited(entry: &WorkExperience, as_of: NaiveDate) -> CreditedExperience {
    let end = entry.end_date.map_or(as_of, |end| end.min(as_of));
    let months = months_between(entry.start_date, end);

    let hours = entry.hours_per_week;
    let half_months = if !hours.is_finite() || hours < PART_TIME_HOURS {
        0
    } else if hours < FULL_TIME_HOURS {
        months
    } else {
        months.saturating_mul(2)
    };

    CreditedExperience::from_half_months(half_months)
}

pub fn total_credited<'a, I>(entries: I, as_of: NaiveDate) -> CreditedExperience
where
    I: IntoIterator<Item = &'a WorkExperience>,
{
    entries
        .into_iter()
        .map(|entry| credited(entry, as_of))
        .sum()
}
