//! Budget fit: what the freelancer would cost over the job's duration,
//! compared with the job's stated budget.
//!
//! The estimate is `rate × hours` for every job type. Fixed-price and hourly
//! jobs are estimated the same way.

use crate::models::job::JobType;

/// Score used when either the budget or the rate is not stated.
pub const NEUTRAL: f64 = 0.5;
/// One month of full-time work.
pub const DEFAULT_HOURS: f64 = 160.0;
pub const HOURS_PER_WEEK: f64 = 40.0;
pub const HOURS_PER_MONTH: f64 = 160.0;
/// At or above this share of the budget, the fit is perfect.
pub const FULL_UTILIZATION: f64 = 0.7;

/// Scores a freelancer's rate against a job's budget, in [0, 1].
pub fn score_budget(
    job_budget: f64,
    candidate_rate: f64,
    _job_type: JobType,
    duration: Option<&str>,
) -> f64 {
    if job_budget.is_nan()
        || job_budget <= 0.0
        || candidate_rate.is_nan()
        || candidate_rate <= 0.0
    {
        return NEUTRAL;
    }

    let estimated_cost = candidate_rate * estimate_hours(duration);

    let score = if estimated_cost <= job_budget {
        let utilization = estimated_cost / job_budget;
        if utilization >= FULL_UTILIZATION {
            1.0
        } else {
            0.8 + 0.2 * utilization
        }
    } else {
        let overage = (estimated_cost - job_budget) / job_budget;
        (1.0 - overage).max(0.0)
    };

    score.clamp(0.0, 1.0)
}

/// Hours implied by a free-form duration such as "2 weeks" or "3 months".
///
/// The count is every digit in the text concatenated ("1-2 weeks" reads as
/// 12 weeks), defaulting to 1. "week" is checked before "month". Text with
/// neither keyword falls back to [`DEFAULT_HOURS`].
pub fn estimate_hours(duration: Option<&str>) -> f64 {
    let Some(duration) = duration else {
        return DEFAULT_HOURS;
    };
    let duration = duration.to_lowercase();

    if duration.contains("week") {
        digit_count(&duration) * HOURS_PER_WEEK
    } else if duration.contains("month") {
        digit_count(&duration) * HOURS_PER_MONTH
    } else {
        DEFAULT_HOURS
    }
}

fn digit_count(text: &str) -> f64 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 1.0;
    }
    // f64 so a long digit run saturates instead of overflowing
    digits.parse::<f64>().unwrap_or(1.0)
}
