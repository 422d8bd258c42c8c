use super::common::{
    as_of, calculator, degree, empty_profile, english, french, job, job_offer, married, sibling,
    spouse_profile, strong_single_profile,
};
use crate::scoring::{
    calculate_additional_points, calculate_points, get_points_breakdown, get_quick_estimate,
    BasicInfo, CandidateProfile, EducationLevel, MaritalStatus,
};

#[test]
fn strong_single_profile_breakdown() {
    let breakdown = calculator().points_breakdown(&strong_single_profile());

    assert_eq!(breakdown.core_human_capital.subtotal, 422);
    assert_eq!(breakdown.spouse.subtotal, 0);
    assert_eq!(breakdown.skill_transferability.subtotal, 100);
    assert_eq!(breakdown.additional.canadian_education, 30);
    assert_eq!(breakdown.additional.subtotal, 30);
    assert_eq!(breakdown.total, 552);
}

#[test]
fn married_profile_scores_spouse_factors() {
    let breakdown = calculator().points_breakdown(&married(strong_single_profile()));

    assert_eq!(breakdown.core_human_capital.subtotal, 388);
    assert_eq!(breakdown.spouse.education, 8);
    assert_eq!(breakdown.spouse.language_proficiency, 12);
    assert_eq!(breakdown.spouse.canadian_work_experience, 3);
    assert_eq!(breakdown.spouse.subtotal, 23);
    assert_eq!(breakdown.total, 541);
}

#[test]
fn spouse_is_ignored_unless_married_with_details() {
    let calculator = calculator();
    let single = calculator.points_breakdown(&strong_single_profile());

    let single_with_details = CandidateProfile {
        spouse_profile: Some(spouse_profile()),
        ..strong_single_profile()
    };
    let married_without_details = CandidateProfile {
        marital_status: MaritalStatus::Married,
        ..strong_single_profile()
    };
    let common_law = CandidateProfile {
        marital_status: MaritalStatus::CommonLaw,
        spouse_profile: Some(spouse_profile()),
        ..strong_single_profile()
    };

    for profile in [single_with_details, married_without_details, common_law] {
        let breakdown = calculator.points_breakdown(&profile);
        assert_eq!(breakdown.spouse.subtotal, 0);
        assert_eq!(breakdown, single);
    }
}

#[test]
fn maximal_profile_is_clamped_to_the_overall_ceiling() {
    let profile = CandidateProfile {
        education: vec![
            degree(EducationLevel::Phd, "Canada"),
            degree(EducationLevel::Certificate, "Canada"),
        ],
        language_proficiency: vec![french(10), english(9)],
        work_experience: vec![
            job("00012", 60, 40.0, true),
            job("00012", 60, 40.0, false),
        ],
        has_job_offer: true,
        job_offer_details: Some(job_offer("00012", false)),
        has_provincial_nomination: true,
        adaptability_factors: sibling(),
        ..empty_profile(25)
    };

    let breakdown = calculator().points_breakdown(&profile);

    assert_eq!(breakdown.core_human_capital.subtotal, 482);
    assert_eq!(breakdown.skill_transferability.certificate_of_qualification, 50);
    assert_eq!(breakdown.skill_transferability.subtotal, 100);
    assert_eq!(breakdown.additional.provincial_nomination, 600);
    assert_eq!(breakdown.additional.job_offer, 200);
    assert_eq!(breakdown.additional.french_language, 50);
    assert_eq!(breakdown.additional.sibling_in_canada, 15);
    assert_eq!(breakdown.additional.canadian_education, 30);
    assert_eq!(breakdown.additional.subtotal, 895);
    assert_eq!(breakdown.raw_total(), 1477);
    assert_eq!(breakdown.total, 1200);
}

#[test]
fn additional_factors_stack_past_the_nomination_value() {
    let profile = CandidateProfile {
        has_job_offer: true,
        job_offer_details: Some(job_offer("00012", false)),
        has_provincial_nomination: true,
        adaptability_factors: sibling(),
        ..empty_profile(25)
    };

    let breakdown = calculator().points_breakdown(&profile);

    assert_eq!(breakdown.additional.subtotal, 815);
    assert_eq!(
        breakdown.additional.subtotal,
        calculate_additional_points(&profile)
    );
    assert_eq!(breakdown.total, 110 + 815);
}

#[test]
fn total_clamps_just_above_the_ceiling() {
    let profile = CandidateProfile {
        has_job_offer: true,
        job_offer_details: Some(job_offer("21231", false)),
        has_provincial_nomination: true,
        ..strong_single_profile()
    };

    let breakdown = calculator().points_breakdown(&profile);

    assert_eq!(breakdown.additional.subtotal, 680);
    assert_eq!(breakdown.raw_total(), 1202);
    assert_eq!(breakdown.total, 1200);
}

#[test]
fn job_offer_needs_the_flag_and_details() {
    let details_without_flag = CandidateProfile {
        job_offer_details: Some(job_offer("21231", false)),
        ..empty_profile(30)
    };
    let flag_without_details = CandidateProfile {
        has_job_offer: true,
        ..empty_profile(30)
    };
    let exempt = CandidateProfile {
        has_job_offer: true,
        job_offer_details: Some(job_offer("00012", true)),
        ..empty_profile(30)
    };

    let calculator = calculator();
    for profile in [details_without_flag, flag_without_details, exempt] {
        assert_eq!(calculator.points_breakdown(&profile).additional.job_offer, 0);
    }
}

#[test]
fn french_bonus_depends_on_english_level() {
    let french_only = CandidateProfile {
        language_proficiency: vec![french(8)],
        ..empty_profile(30)
    };
    let with_english = CandidateProfile {
        language_proficiency: vec![french(8), english(5)],
        ..empty_profile(30)
    };

    let calculator = calculator();
    assert_eq!(
        calculator.points_breakdown(&french_only).additional.french_language,
        25
    );
    assert_eq!(
        calculator.points_breakdown(&with_english).additional.french_language,
        50
    );
}

#[test]
fn empty_profile_scores_zero() {
    let breakdown = calculator().points_breakdown(&empty_profile(0));
    assert_eq!(breakdown, Default::default());
}

#[test]
fn total_matches_breakdown_and_is_stable() {
    let profiles = [
        empty_profile(35),
        strong_single_profile(),
        married(strong_single_profile()),
    ];

    for profile in &profiles {
        let breakdown = get_points_breakdown(profile, as_of());
        let first = calculate_points(profile, as_of());
        let second = calculate_points(profile, as_of());

        assert_eq!(first, second);
        assert_eq!(first, breakdown.total);
        assert_eq!(breakdown.total, breakdown.raw_total().min(1200));
    }
}

#[test]
fn open_ended_experience_closes_at_assessment_date() {
    let mut current_job = job("21231", 36, 40.0, true);
    current_job.end_date = None;
    let profile = CandidateProfile {
        work_experience: vec![current_job],
        ..empty_profile(30)
    };

    let breakdown = calculator().points_breakdown(&profile);
    assert_eq!(breakdown.core_human_capital.canadian_work_experience, 64);
}

#[test]
fn quick_estimate_scores_core_of_synthetic_profile() {
    let info = BasicInfo {
        age: "20-29".to_string(),
        education: "bachelors".to_string(),
        language_proficiency: "clb7".to_string(),
        canadian_work_experience: "none".to_string(),
    };

    assert_eq!(get_quick_estimate(&info, as_of()), 110 + 120 + 68);
    assert_eq!(calculator().quick_estimate(&info), 298);
}

#[test]
fn quick_estimate_counts_canadian_years() {
    let info = BasicInfo {
        age: "30-34".to_string(),
        education: "masters".to_string(),
        language_proficiency: "clb9".to_string(),
        canadian_work_experience: "3-years".to_string(),
    };

    assert_eq!(calculator().quick_estimate(&info), 94 + 135 + 124 + 64);
}

#[test]
fn quick_estimate_ignores_an_oversized_age_range() {
    let info = BasicInfo {
        age: "4294967295-4294967295".to_string(),
        education: "bachelors".to_string(),
        language_proficiency: "clb7".to_string(),
        canadian_work_experience: "none".to_string(),
    };

    assert_eq!(get_quick_estimate(&info, as_of()), 120 + 68);
}

#[test]
fn capitalised_language_labels_still_score() {
    let profile: CandidateProfile = serde_json::from_value(serde_json::json!({
        "age": 30,
        "maritalStatus": "single",
        "languageProficiency": [{
            "language": "English",
            "clbEquivalent": { "speaking": 9, "listening": 9, "reading": 9, "writing": 9 }
        }]
    }))
    .expect("profile parses");

    let breakdown = calculator().points_breakdown(&profile);
    assert_eq!(breakdown.core_human_capital.first_official_language, 124);
}

#[test]
fn assessment_reports_anomalies_alongside_scores() {
    let mut profile = strong_single_profile();
    profile.age = 130;
    profile.work_experience[0].hours_per_week = 400.0;

    let assessment = calculator().assess(&profile);

    assert_eq!(assessment.breakdown.core_human_capital.age, 0);
    assert_eq!(assessment.anomalies.len(), 2);
    assert!(assessment.anomalies[0].contains("130"));
    assert_eq!(
        assessment.breakdown.core_human_capital.canadian_work_experience,
        53
    );
}
