//! Match engine: combines the four dimension scores into one weighted score,
//! classifies it into a tier and explains it in a sentence or two.

use serde::{Deserialize, Serialize};

use crate::matching::availability::score_availability;
use crate::matching::budget::score_budget;
use crate::matching::experience::score_experience;
use crate::matching::skills::score_skills;
use crate::models::freelancer::CandidateProfile;
use crate::models::job::JobRequirement;

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub budget: f64,
    pub availability: f64,
}

/// Skills dominate; availability is a tie-breaker more than a filter.
pub const MATCH_WEIGHTS: MatchWeights = MatchWeights {
    skills: 0.4,
    experience: 0.25,
    budget: 0.25,
    availability: 0.1,
};

impl MatchWeights {
    pub fn combine(&self, scores: &DimensionScores) -> f64 {
        (self.skills * scores.skills
            + self.experience * scores.experience
            + self.budget * scores.budget
            + self.availability * scores.availability)
            .clamp(0.0, 1.0)
    }

    #[cfg(test)]
    fn sum(&self) -> f64 {
        self.skills + self.experience + self.budget + self.availability
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Raw per-dimension scores, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub skills: f64,
    pub experience: f64,
    pub budget: f64,
    pub availability: f64,
}

/// Per-dimension scores as percentages rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_match: f64,
    pub experience_match: f64,
    pub budget_compatibility: f64,
    pub availability_match: f64,
}

impl From<&DimensionScores> for ScoreBreakdown {
    fn from(scores: &DimensionScores) -> Self {
        Self {
            skill_match: to_percentage(scores.skills),
            experience_match: to_percentage(scores.experience),
            budget_compatibility: to_percentage(scores.budget),
            availability_match: to_percentage(scores.availability),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl MatchTier {
    /// Lower bounds are inclusive: 80 / 60 / 40.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            MatchTier::Excellent
        } else if percentage >= 60.0 {
            MatchTier::Good
        } else if percentage >= 40.0 {
            MatchTier::Fair
        } else {
            MatchTier::Poor
        }
    }

    fn opening(self) -> &'static str {
        match self {
            MatchTier::Excellent => "Highly recommended match! ",
            MatchTier::Good => "Good match with strong potential. ",
            MatchTier::Fair => "Fair match. ",
            MatchTier::Poor => "Consider carefully. ",
        }
    }
}

/// Full evaluation of one job/freelancer pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall_score: f64,
    /// Ranking key. `overall_score × 100`, rounded to one decimal.
    pub match_percentage: f64,
    pub match_tier: MatchTier,
    pub breakdown: ScoreBreakdown,
    pub recommendation: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Evaluation
// ────────────────────────────────────────────────────────────────────────────

/// Scores every dimension of the pair. Never mutates either side.
pub fn score_dimensions(job: &JobRequirement, candidate: &CandidateProfile) -> DimensionScores {
    DimensionScores {
        skills: score_skills(&job.required_skills, &candidate.skills),
        experience: score_experience(job.experience_level, candidate.experience_years),
        budget: score_budget(
            job.budget,
            candidate.hourly_rate,
            job.job_type,
            job.duration.as_deref(),
        ),
        availability: score_availability(job.job_type, candidate.availability),
    }
}

pub fn evaluate(job: &JobRequirement, candidate: &CandidateProfile) -> MatchResult {
    evaluate_scores(&score_dimensions(job, candidate))
}

/// Turns dimension scores into a tiered, annotated result.
pub fn evaluate_scores(scores: &DimensionScores) -> MatchResult {
    let overall_score = MATCH_WEIGHTS.combine(scores);
    let match_percentage = to_percentage(overall_score);
    let match_tier = MatchTier::from_percentage(match_percentage);
    let breakdown = ScoreBreakdown::from(scores);
    let recommendation = build_recommendation(match_tier, &breakdown);

    MatchResult {
        overall_score,
        match_percentage,
        match_tier,
        breakdown,
        recommendation,
    }
}

/// `score × 100` rounded to one decimal.
///
/// Rounds half away from zero on the already-scaled float, so exact `.x5`
/// ties go up: 0.4125 gives 41.3 where a round-half-to-even would give 41.2.
/// A tie can therefore land on the upper side of a 30/40/60/80 boundary
/// (0.2995 gives 30.0, not 29.9).
pub fn to_percentage(score: f64) -> f64 {
    (score * 100.0 * 10.0).round() / 10.0
}

/// Tier opening followed by per-dimension remarks. The skill remark is
/// always present; experience and budget only speak up outside 60–80.
pub fn build_recommendation(tier: MatchTier, breakdown: &ScoreBreakdown) -> String {
    let mut details: Vec<&str> = Vec::with_capacity(3);

    details.push(if breakdown.skill_match >= 80.0 {
        "Excellent skill alignment"
    } else if breakdown.skill_match >= 60.0 {
        "Good skill fit"
    } else {
        "Some skill gaps to consider"
    });

    if breakdown.experience_match >= 80.0 {
        details.push("experience level is perfect");
    } else if breakdown.experience_match < 60.0 {
        details.push("experience level may not be ideal");
    }

    if breakdown.budget_compatibility >= 80.0 {
        details.push("budget is well-aligned");
    } else if breakdown.budget_compatibility < 60.0 {
        details.push("budget compatibility needs review");
    }

    format!("{}{}.", tier.opening(), details.join(", "))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::freelancer::Availability;
    use crate::models::job::{ExperienceLevel, JobType};

    fn breakdown(skill: f64, experience: f64, budget: f64) -> ScoreBreakdown {
        ScoreBreakdown {
            skill_match: skill,
            experience_match: experience,
            budget_compatibility: budget,
            availability_match: 100.0,
        }
    }

    fn uniform(score: f64) -> DimensionScores {
        DimensionScores {
            skills: score,
            experience: score,
            budget: score,
            availability: score,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!((MATCH_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_perfect_scores_are_excellent() {
        let result = evaluate_scores(&uniform(1.0));
        assert_eq!(result.overall_score, 1.0);
        assert_eq!(result.match_percentage, 100.0);
        assert_eq!(result.match_tier, MatchTier::Excellent);
        assert_eq!(result.breakdown.skill_match, 100.0);
    }

    #[test]
    fn test_zero_scores_are_poor() {
        let result = evaluate_scores(&uniform(0.0));
        assert_eq!(result.match_percentage, 0.0);
        assert_eq!(result.match_tier, MatchTier::Poor);
    }

    #[test]
    fn test_neutral_scores_are_fair() {
        let result = evaluate_scores(&uniform(0.5));
        assert_eq!(result.match_percentage, 50.0);
        assert_eq!(result.match_tier, MatchTier::Fair);
    }

    #[test]
    fn test_tier_boundaries_are_inclusive() {
        assert_eq!(MatchTier::from_percentage(80.0), MatchTier::Excellent);
        assert_eq!(MatchTier::from_percentage(79.9), MatchTier::Good);
        assert_eq!(MatchTier::from_percentage(60.0), MatchTier::Good);
        assert_eq!(MatchTier::from_percentage(59.9), MatchTier::Fair);
        assert_eq!(MatchTier::from_percentage(40.0), MatchTier::Fair);
        assert_eq!(MatchTier::from_percentage(39.9), MatchTier::Poor);
    }

    #[test]
    fn test_percentage_rounds_to_one_decimal() {
        assert_eq!(to_percentage(0.6543), 65.4);
        assert_eq!(to_percentage(0.6567), 65.7);
        assert_eq!(to_percentage(1.3 / 3.0), 43.3);
    }

    #[test]
    fn test_percentage_ties_round_up() {
        assert_eq!(to_percentage(0.4125), 41.3);
    }

    #[test]
    fn test_worked_example() {
        let job = JobRequirement {
            required_skills: vec!["python".into(), "django".into()],
            budget: 16000.0,
            duration: None,
            experience_level: ExperienceLevel::Intermediate,
            job_type: JobType::Hourly,
        };
        let candidate = CandidateProfile {
            skills: vec!["Python".into(), "Flask".into()],
            experience_years: 1,
            hourly_rate: 50.0,
            availability: Availability::PartTime,
        };

        let result = evaluate(&job, &candidate);

        // 0.4·0.65 + 0.25·0.8 + 0.25·0.9 + 0.1·1.0
        assert!((result.overall_score - 0.785).abs() < 1e-9);
        assert_eq!(result.match_percentage, 78.5);
        assert_eq!(result.match_tier, MatchTier::Good);
        assert_eq!(result.breakdown.skill_match, 65.0);
        assert_eq!(result.breakdown.experience_match, 80.0);
        assert_eq!(result.breakdown.budget_compatibility, 90.0);
        assert_eq!(result.breakdown.availability_match, 100.0);
        assert_eq!(
            result.recommendation,
            "Good match with strong potential. Good skill fit, experience level is perfect, budget is well-aligned."
        );
    }

    #[test]
    fn test_evaluate_does_not_touch_inputs() {
        let job = JobRequirement {
            required_skills: vec!["  Rust ".into()],
            ..Default::default()
        };
        let candidate = CandidateProfile {
            skills: vec!["RUST".into()],
            ..Default::default()
        };
        let _ = evaluate(&job, &candidate);
        assert_eq!(job.required_skills[0], "  Rust ");
        assert_eq!(candidate.skills[0], "RUST");
    }

    #[test]
    fn test_recommendation_all_strong() {
        let rec = build_recommendation(MatchTier::Excellent, &breakdown(80.0, 80.0, 80.0));
        assert_eq!(
            rec,
            "Highly recommended match! Excellent skill alignment, experience level is perfect, budget is well-aligned."
        );
    }

    #[test]
    fn test_recommendation_middle_band_is_silent() {
        let rec = build_recommendation(MatchTier::Good, &breakdown(60.0, 60.0, 79.9));
        assert_eq!(rec, "Good match with strong potential. Good skill fit.");
    }

    #[test]
    fn test_recommendation_weak_dimensions() {
        let rec = build_recommendation(MatchTier::Poor, &breakdown(59.9, 59.9, 0.0));
        assert_eq!(
            rec,
            "Consider carefully. Some skill gaps to consider, experience level may not be ideal, budget compatibility needs review."
        );
    }

    #[test]
    fn test_recommendation_fair_opening() {
        let rec = build_recommendation(MatchTier::Fair, &breakdown(10.0, 70.0, 90.0));
        assert_eq!(
            rec,
            "Fair match. Some skill gaps to consider, budget is well-aligned."
        );
    }

    #[test]
    fn test_tier_serializes_lowercase() {
        let json = serde_json::to_value(MatchTier::Excellent).unwrap();
        assert_eq!(json, serde_json::json!("excellent"));
    }
}
