//! Ranking: evaluate every pair, drop weak matches, best first, top N.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::engine::{evaluate, MatchResult};
use crate::models::freelancer::CandidateProfile;
use crate::models::job::JobRequirement;

pub const DEFAULT_LIMIT: usize = 10;
pub const DEFAULT_MIN_PERCENTAGE: f64 = 30.0;
/// Upper bound on `limit`, for requests and configured defaults alike.
pub const MAX_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankOptions {
    /// Maximum number of entries returned.
    pub limit: usize,
    /// Entries below this match percentage are dropped. Inclusive.
    pub min_percentage: f64,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            min_percentage: DEFAULT_MIN_PERCENTAGE,
        }
    }
}

/// One ranked item with its evaluation.
#[derive(Debug, Clone)]
pub struct Ranked<T> {
    pub item: T,
    pub result: MatchResult,
}

/// Evaluates each item, keeps those at or above `min_percentage`, sorts by
/// match percentage descending and truncates to `limit`.
///
/// The sort is stable, so equal percentages keep their input order.
pub fn rank_by<T, F>(
    items: impl IntoIterator<Item = T>,
    options: &RankOptions,
    mut evaluate_item: F,
) -> Vec<Ranked<T>>
where
    F: FnMut(&T) -> MatchResult,
{
    let mut evaluated = 0usize;
    let mut ranked: Vec<Ranked<T>> = items
        .into_iter()
        .map(|item| {
            evaluated += 1;
            let result = evaluate_item(&item);
            Ranked { item, result }
        })
        .filter(|r| r.result.match_percentage >= options.min_percentage)
        .collect();

    debug!(
        evaluated,
        below_threshold = evaluated - ranked.len(),
        min_percentage = options.min_percentage,
        "filtered match candidates"
    );

    ranked.sort_by(|a, b| {
        b.result
            .match_percentage
            .total_cmp(&a.result.match_percentage)
    });
    ranked.truncate(options.limit);
    ranked
}

/// Best freelancers for one job.
pub fn rank_candidates_for_job<'a, C>(
    job: &JobRequirement,
    candidates: &'a [C],
    options: &RankOptions,
) -> Vec<Ranked<&'a C>>
where
    C: AsRef<CandidateProfile>,
{
    rank_by(candidates, options, |candidate| {
        evaluate(job, (*candidate).as_ref())
    })
}

/// Best jobs for one freelancer.
pub fn rank_jobs_for_candidate<'a, J>(
    candidate: &CandidateProfile,
    jobs: &'a [J],
    options: &RankOptions,
) -> Vec<Ranked<&'a J>>
where
    J: AsRef<JobRequirement>,
{
    rank_by(jobs, options, |job| evaluate((*job).as_ref(), candidate))
}
