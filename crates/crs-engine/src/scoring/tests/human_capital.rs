use super::common::{
    as_of, calculator, degree, empty_profile, english, french, job, married, strong_single_profile,
};
use crate::scoring::{calculate_core_human_capital, CandidateProfile, EducationLevel};

#[test]
fn strong_single_profile_scores_each_factor() {
    let points = calculate_core_human_capital(&strong_single_profile(), as_of());

    assert_eq!(points.age, 110);
    assert_eq!(points.education, 135);
    assert_eq!(points.first_official_language, 124);
    assert_eq!(points.second_official_language, 0);
    assert_eq!(points.language_proficiency, 124);
    assert_eq!(points.canadian_work_experience, 53);
    assert_eq!(points.subtotal, 422);
}

#[test]
fn counted_spouse_switches_to_the_lower_grid() {
    let points = calculate_core_human_capital(&married(strong_single_profile()), as_of());

    assert_eq!(points.age, 100);
    assert_eq!(points.education, 126);
    assert_eq!(points.first_official_language, 116);
    assert_eq!(points.canadian_work_experience, 46);
    assert_eq!(points.subtotal, 388);
}

#[test]
fn age_points_peak_between_twenty_and_twenty_nine() {
    let calculator = calculator();
    let age_points = |age: u32| {
        calculator
            .points_breakdown(&empty_profile(age))
            .core_human_capital
            .age
    };

    for age in 20..=29 {
        assert_eq!(age_points(age), 110, "age {age}");
    }
    for age in 0..=120 {
        assert!(age_points(age) <= 110, "age {age}");
    }
    for age in 29..45 {
        assert!(age_points(age + 1) <= age_points(age), "age {age}");
    }
    assert_eq!(age_points(17), 0);
    assert_eq!(age_points(45), 0);
    assert_eq!(age_points(200), 0);
}

#[test]
fn bilingual_candidate_earns_second_language_bonus() {
    let profile = CandidateProfile {
        language_proficiency: vec![french(10), english(9)],
        ..empty_profile(30)
    };

    let points = calculate_core_human_capital(&profile, as_of());
    assert_eq!(points.first_official_language, 136);
    assert_eq!(points.second_official_language, 6);
    assert_eq!(points.language_proficiency, 142);
}

#[test]
fn only_canadian_experience_counts_toward_core() {
    let profile = CandidateProfile {
        work_experience: vec![
            job("21231", 60, 40.0, false),
            job("21231", 11, 40.0, true),
        ],
        ..empty_profile(30)
    };

    assert_eq!(
        calculate_core_human_capital(&profile, as_of()).canadian_work_experience,
        0
    );
}

#[test]
fn part_time_experience_is_prorated_before_banding() {
    let half_time = CandidateProfile {
        work_experience: vec![job("21231", 48, 20.0, true)],
        ..empty_profile(30)
    };
    let too_few_hours = CandidateProfile {
        work_experience: vec![job("21231", 48, 10.0, true)],
        ..empty_profile(30)
    };

    assert_eq!(
        calculate_core_human_capital(&half_time, as_of()).canadian_work_experience,
        53
    );
    assert_eq!(
        calculate_core_human_capital(&too_few_hours, as_of()).canadian_work_experience,
        0
    );
}

#[test]
fn certificate_alone_scores_no_core_education() {
    let profile = CandidateProfile {
        education: vec![degree(EducationLevel::Certificate, "Canada")],
        ..empty_profile(30)
    };

    assert_eq!(calculate_core_human_capital(&profile, as_of()).education, 0);
}
