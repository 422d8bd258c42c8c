//! Published CRS point grids.
//!
//! Every grid is read-only `static` data. Grids that differ for candidates with an
//! accompanying spouse are stored as a [`SpouseContext`] pair so both columns of the
//! published table sit next to each other.

use super::domain::EducationLevel;

pub const MAX_TOTAL: u32 = 1200;
pub const SKILL_TRANSFERABILITY_CAP: u32 = 100;
pub const TRANSFERABILITY_COMBINATION_CAP: u32 = 50;
pub const SECOND_LANGUAGE_CAP: u32 = 6;
pub const SPOUSE_LANGUAGE_CAP: u32 = 20;

/// Number of abilities a language test reports (speaking, listening, reading, writing).
pub const LANGUAGE_ABILITIES: u32 = 4;

pub const PROVINCIAL_NOMINATION_POINTS: u32 = 600;
pub const SENIOR_MANAGEMENT_OFFER_POINTS: u32 = 200;
pub const SKILLED_OFFER_POINTS: u32 = 50;
pub const SIBLING_IN_CANADA_POINTS: u32 = 15;
pub const FRENCH_WITH_ENGLISH_POINTS: u32 = 50;
pub const FRENCH_ONLY_POINTS: u32 = 25;

/// Table keyed by a discrete value; keys that are not listed score zero.
#[derive(Debug)]
pub struct ExactTable<K: 'static> {
    rows: &'static [(K, u32)],
}

impl<K: PartialEq + Copy + 'static> ExactTable<K> {
    pub const fn new(rows: &'static [(K, u32)]) -> Self {
        Self { rows }
    }

    pub fn lookup(&self, key: K) -> u32 {
        self.rows
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, points)| *points)
            .unwrap_or(0)
    }

    pub fn rows(&self) -> &'static [(K, u32)] {
        self.rows
    }
}

/// Step table with ascending thresholds; a value earns the row of the highest
/// threshold it reaches and saturates at the last row.
#[derive(Debug)]
pub struct StepTable {
    rows: &'static [(u32, u32)],
}

impl StepTable {
    pub const fn new(rows: &'static [(u32, u32)]) -> Self {
        Self { rows }
    }

    pub fn lookup(&self, value: u32) -> u32 {
        self.rows
            .iter()
            .rev()
            .find(|(threshold, _)| value >= *threshold)
            .map(|(_, points)| *points)
            .unwrap_or(0)
    }

    pub fn rows(&self) -> &'static [(u32, u32)] {
        self.rows
    }
}

/// The two columns of a grid that depends on whether a spouse is counted.
#[derive(Debug)]
pub struct SpouseContext<T: 'static> {
    pub single: T,
    pub with_spouse: T,
}

impl<T: 'static> SpouseContext<T> {
    pub const fn select(&self, with_spouse: bool) -> &T {
        if with_spouse {
            &self.with_spouse
        } else {
            &self.single
        }
    }
}

pub static AGE_POINTS: SpouseContext<ExactTable<u32>> = SpouseContext {
    single: ExactTable::new(&[
        (18, 99),
        (19, 105),
        (20, 110),
        (21, 110),
        (22, 110),
        (23, 110),
        (24, 110),
        (25, 110),
        (26, 110),
        (27, 110),
        (28, 110),
        (29, 110),
        (30, 105),
        (31, 99),
        (32, 94),
        (33, 88),
        (34, 83),
        (35, 77),
        (36, 72),
        (37, 66),
        (38, 61),
        (39, 55),
        (40, 50),
        (41, 39),
        (42, 28),
        (43, 17),
        (44, 6),
    ]),
    with_spouse: ExactTable::new(&[
        (18, 90),
        (19, 95),
        (20, 100),
        (21, 100),
        (22, 100),
        (23, 100),
        (24, 100),
        (25, 100),
        (26, 100),
        (27, 100),
        (28, 100),
        (29, 100),
        (30, 95),
        (31, 90),
        (32, 85),
        (33, 80),
        (34, 75),
        (35, 70),
        (36, 65),
        (37, 60),
        (38, 55),
        (39, 50),
        (40, 45),
        (41, 35),
        (42, 25),
        (43, 15),
        (44, 5),
    ]),
};

pub static EDUCATION_POINTS: SpouseContext<ExactTable<EducationLevel>> = SpouseContext {
    single: ExactTable::new(&[
        (EducationLevel::HighSchool, 30),
        (EducationLevel::OneYearDiploma, 90),
        (EducationLevel::TwoYearDiploma, 98),
        (EducationLevel::Bachelors, 120),
        (EducationLevel::TwoOrMoreDegrees, 128),
        (EducationLevel::Masters, 135),
        (EducationLevel::Phd, 150),
    ]),
    with_spouse: ExactTable::new(&[
        (EducationLevel::HighSchool, 28),
        (EducationLevel::OneYearDiploma, 84),
        (EducationLevel::TwoYearDiploma, 91),
        (EducationLevel::Bachelors, 112),
        (EducationLevel::TwoOrMoreDegrees, 119),
        (EducationLevel::Masters, 126),
        (EducationLevel::Phd, 140),
    ]),
};

/// Points per ability for the first official language, keyed by CLB.
pub static FIRST_LANGUAGE_POINTS: SpouseContext<StepTable> = SpouseContext {
    single: StepTable::new(&[(4, 6), (6, 9), (7, 17), (8, 23), (9, 31), (10, 34)]),
    with_spouse: StepTable::new(&[(4, 6), (6, 8), (7, 16), (8, 22), (9, 29), (10, 32)]),
};

pub static SECOND_LANGUAGE_POINTS: StepTable = StepTable::new(&[(5, 1), (7, 3), (9, 6)]);

pub static CANADIAN_EXPERIENCE_POINTS: SpouseContext<StepTable> = SpouseContext {
    single: StepTable::new(&[(1, 40), (2, 53), (3, 64), (4, 72), (5, 80)]),
    with_spouse: StepTable::new(&[(1, 35), (2, 46), (3, 56), (4, 63), (5, 70)]),
};

pub static SPOUSE_EDUCATION_POINTS: ExactTable<EducationLevel> = ExactTable::new(&[
    (EducationLevel::HighSchool, 2),
    (EducationLevel::OneYearDiploma, 6),
    (EducationLevel::TwoYearDiploma, 7),
    (EducationLevel::Bachelors, 8),
    (EducationLevel::TwoOrMoreDegrees, 9),
    (EducationLevel::Masters, 10),
    (EducationLevel::Phd, 10),
]);

/// Points per ability for the spouse, keyed by CLB.
pub static SPOUSE_LANGUAGE_POINTS: StepTable = StepTable::new(&[(5, 1), (7, 3), (9, 5)]);

/// Four years of spouse experience sits on the three-year row.
pub static SPOUSE_EXPERIENCE_POINTS: StepTable =
    StepTable::new(&[(1, 3), (2, 5), (3, 8), (5, 10)]);

/// Shared CLB tiering for the education and certificate combinations.
pub static TRANSFERABILITY_CLB_POINTS: StepTable = StepTable::new(&[(7, 25), (9, 50)]);

pub static CANADIAN_EDUCATION_POINTS: ExactTable<EducationLevel> = ExactTable::new(&[
    (EducationLevel::OneYearDiploma, 15),
    (EducationLevel::TwoYearDiploma, 30),
    (EducationLevel::Bachelors, 30),
    (EducationLevel::TwoOrMoreDegrees, 30),
    (EducationLevel::Masters, 30),
    (EducationLevel::Phd, 30),
]);

/// Foreign experience combined with language: 1-2 years vs 3+ years against CLB 7-8 vs 9+.
pub fn foreign_experience_combination(years: u32, clb: u32) -> u32 {
    match (years, clb) {
        (0, _) => 0,
        (_, clb) if clb < 7 => 0,
        (1..=2, 7..=8) => 13,
        (1..=2, _) => 25,
        (_, 7..=8) => 25,
        _ => 50,
    }
}

/// Approximate IELTS General Training bands (listening, reading, writing, speaking) per CLB.
pub static IELTS_BANDS_BY_CLB: &[(u8, [f32; 4])] = &[
    (4, [4.5, 3.5, 4.0, 4.0]),
    (5, [5.0, 4.0, 5.0, 5.0]),
    (6, [5.5, 5.0, 5.5, 5.5]),
    (7, [6.0, 6.0, 6.0, 6.0]),
    (8, [7.5, 6.5, 6.5, 6.5]),
    (9, [8.0, 7.0, 7.0, 7.0]),
    (10, [8.5, 8.0, 7.5, 7.5]),
];
