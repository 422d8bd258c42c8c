//! Comprehensive Ranking System points engine and program eligibility evaluator.

pub mod batch;
pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;

pub use scoring::{
    calculate_points, check_eligibility, get_points_breakdown, get_quick_estimate, BasicInfo,
    CandidateProfile, CrsCalculator, EligibilityResult, PointsBreakdown, ScoringConfig,
};
