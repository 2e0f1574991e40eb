use super::super::domain::{CriteriaDecision, ScreeningResult};

const DEFAULT_PASS_RATIO: f32 = 0.5;

/// Criteria-by-criteria substring matcher used when no upstream scorer is
/// configured or it is unavailable. Deterministic: a criteria item matches
/// iff every whitespace token appears (case-insensitively) somewhere in the
/// resume text.
pub fn screen(resume_text: &str, criteria: &str, pass_ratio: f32) -> ScreeningResult {
    let items: Vec<&str> = criteria
        .split([',', '\n'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect();

    if items.is_empty() {
        return ScreeningResult {
            success: true,
            criteria_decisions: Vec::new(),
            overall_decision: false,
            overall_reasoning: "No criteria provided.".to_string(),
        };
    }

    let lowered = resume_text.to_lowercase();
    let criteria_decisions: Vec<CriteriaDecision> = items
        .iter()
        .map(|item| {
            let matched = item
                .to_lowercase()
                .split_whitespace()
                .all(|token| lowered.contains(token));
            let reasoning = if matched {
                format!("Found evidence for '{item}' in the resume.")
            } else {
                format!("Could not find clear evidence for '{item}'.")
            };
            CriteriaDecision {
                criteria: item.to_string(),
                decision: matched,
                reasoning,
            }
        })
        .collect();

    let passed = criteria_decisions
        .iter()
        .filter(|decision| decision.decision)
        .count();
    let overall_decision = passed >= required_matches(items.len(), pass_ratio);
    let overall_reasoning = format!(
        "Matched {passed} of {} criteria, recommend {}.",
        items.len(),
        if overall_decision { "passing" } else { "rejecting" }
    );

    ScreeningResult {
        success: true,
        criteria_decisions,
        overall_decision,
        overall_reasoning,
    }
}

/// Criteria count that must match for a pass. An out-of-range ratio falls
/// back to the default rather than silently passing or failing everything.
fn required_matches(item_count: usize, pass_ratio: f32) -> usize {
    let ratio = if pass_ratio.is_finite() && pass_ratio > 0.0 && pass_ratio <= 1.0 {
        pass_ratio
    } else {
        DEFAULT_PASS_RATIO
    };
    (item_count as f32 * ratio).ceil() as usize
}
