use super::domain::{Language, LanguageTestResult};

/// Benchmark for a sitting: the weakest of its four abilities.
pub fn effective_clb(result: &LanguageTestResult) -> u32 {
    u32::from(result.clb_equivalent.minimum())
}

/// Best effective CLB across every sitting in any language, zero without any.
pub fn highest_effective_clb(results: &[LanguageTestResult]) -> u32 {
    results.iter().map(effective_clb).max().unwrap_or(0)
}

/// Best effective CLB recorded for one language, zero without a sitting.
pub fn clb_for(results: &[LanguageTestResult], language: &Language) -> u32 {
    results
        .iter()
        .filter(|result| result.language == *language)
        .map(effective_clb)
        .max()
        .unwrap_or(0)
}

pub fn meets_in_all_abilities(result: &LanguageTestResult, threshold: u8) -> bool {
    result.clb_equivalent.minimum() >= threshold
}
