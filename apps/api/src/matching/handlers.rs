//! Axum route handlers for the Matching API.
//!
//! Stateless: the caller sends the job and freelancer snapshots it already
//! holds, and gets back a ranked, annotated list.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::engine::{evaluate, MatchResult, MatchTier, ScoreBreakdown};
use crate::matching::ranker::{
    rank_candidates_for_job, rank_jobs_for_candidate, RankOptions, Ranked, MAX_LIMIT,
};
use crate::models::freelancer::{CandidateProfile, FreelancerListing};
use crate::models::job::{JobListing, JobRequirement};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub job: JobRequirement,
    pub candidate: CandidateProfile,
}

#[derive(Debug, Deserialize)]
pub struct CandidatesForJobRequest {
    pub job: JobListing,
    #[serde(default)]
    pub candidates: Vec<FreelancerListing>,
    pub limit: Option<usize>,
    pub min_percentage: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct JobsForCandidateRequest {
    pub candidate: FreelancerListing,
    #[serde(default)]
    pub jobs: Vec<JobListing>,
    pub limit: Option<usize>,
    pub min_percentage: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CandidateRecommendation {
    pub candidate: FreelancerListing,
    pub match_percentage: f64,
    pub match_tier: MatchTier,
    pub breakdown: ScoreBreakdown,
    pub recommendation: String,
}

#[derive(Debug, Serialize)]
pub struct JobRecommendation {
    pub job: JobListing,
    pub match_percentage: f64,
    pub match_tier: MatchTier,
    pub breakdown: ScoreBreakdown,
    pub recommendation: String,
}

#[derive(Debug, Serialize)]
pub struct CandidatesForJobResponse {
    pub job_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub recommendations: Vec<CandidateRecommendation>,
}

#[derive(Debug, Serialize)]
pub struct JobsForCandidateResponse {
    pub candidate_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub recommendations: Vec<JobRecommendation>,
}

impl From<Ranked<&FreelancerListing>> for CandidateRecommendation {
    fn from(ranked: Ranked<&FreelancerListing>) -> Self {
        let MatchResult {
            match_percentage,
            match_tier,
            breakdown,
            recommendation,
            ..
        } = ranked.result;
        Self {
            candidate: ranked.item.clone(),
            match_percentage,
            match_tier,
            breakdown,
            recommendation,
        }
    }
}

impl From<Ranked<&JobListing>> for JobRecommendation {
    fn from(ranked: Ranked<&JobListing>) -> Self {
        let MatchResult {
            match_percentage,
            match_tier,
            breakdown,
            recommendation,
            ..
        } = ranked.result;
        Self {
            job: ranked.item.clone(),
            match_percentage,
            match_tier,
            breakdown,
            recommendation,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/score
///
/// Evaluates a single job/freelancer pair with the full breakdown.
pub async fn handle_score(
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<MatchResult>, AppError> {
    let Json(request) = payload?;
    Ok(Json(evaluate(&request.job, &request.candidate)))
}

/// POST /api/v1/match/candidates
///
/// Ranks the supplied freelancers for one job.
pub async fn handle_candidates_for_job(
    State(state): State<AppState>,
    payload: Result<Json<CandidatesForJobRequest>, JsonRejection>,
) -> Result<Json<CandidatesForJobResponse>, AppError> {
    let Json(request) = payload?;
    let options = resolve_options(&state, request.limit, request.min_percentage)?;

    let recommendations: Vec<CandidateRecommendation> =
        rank_candidates_for_job(&request.job.requirement, &request.candidates, &options)
            .into_iter()
            .map(CandidateRecommendation::from)
            .collect();

    info!(
        job_id = %request.job.id,
        evaluated = request.candidates.len(),
        returned = recommendations.len(),
        "Ranked freelancers for job"
    );

    Ok(Json(CandidatesForJobResponse {
        job_id: request.job.id,
        generated_at: Utc::now(),
        recommendations,
    }))
}

/// POST /api/v1/match/jobs
///
/// Ranks the supplied jobs for one freelancer.
pub async fn handle_jobs_for_candidate(
    State(state): State<AppState>,
    payload: Result<Json<JobsForCandidateRequest>, JsonRejection>,
) -> Result<Json<JobsForCandidateResponse>, AppError> {
    let Json(request) = payload?;
    let options = resolve_options(&state, request.limit, request.min_percentage)?;

    let recommendations: Vec<JobRecommendation> =
        rank_jobs_for_candidate(&request.candidate.profile, &request.jobs, &options)
            .into_iter()
            .map(JobRecommendation::from)
            .collect();

    info!(
        candidate_id = %request.candidate.id,
        evaluated = request.jobs.len(),
        returned = recommendations.len(),
        "Ranked jobs for freelancer"
    );

    Ok(Json(JobsForCandidateResponse {
        candidate_id: request.candidate.id,
        generated_at: Utc::now(),
        recommendations,
    }))
}

/// Request overrides on top of the configured defaults.
fn resolve_options(
    state: &AppState,
    limit: Option<usize>,
    min_percentage: Option<f64>,
) -> Result<RankOptions, AppError> {
    let defaults = state.rank_defaults;
    let options = RankOptions {
        limit: limit.unwrap_or(defaults.limit),
        min_percentage: min_percentage.unwrap_or(defaults.min_percentage),
    };

    if options.limit > MAX_LIMIT {
        return Err(AppError::Validation(format!(
            "limit cannot exceed {MAX_LIMIT}"
        )));
    }
    if !(0.0..=100.0).contains(&options.min_percentage) {
        return Err(AppError::Validation(
            "min_percentage must be between 0 and 100".to_string(),
        ));
    }

    Ok(options)
}
