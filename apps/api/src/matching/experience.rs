use crate::models::job::ExperienceLevel;

/// Score used when the job states no recognizable level.
pub const NEUTRAL: f64 = 0.5;
/// Flat score for candidates above the level's band.
pub const OVER_QUALIFIED: f64 = 0.8;
/// Lost per year a candidate falls short of the band.
pub const SHORTFALL_PENALTY_PER_YEAR: f64 = 0.2;

/// Scores a candidate's years against the job's required level, in [0, 1].
pub fn score_experience(level: ExperienceLevel, candidate_years: u32) -> f64 {
    let Some((min, max)) = level.year_band() else {
        return NEUTRAL;
    };

    if (min..=max).contains(&candidate_years) {
        1.0
    } else if candidate_years > max {
        OVER_QUALIFIED
    } else {
        let shortfall = f64::from(min - candidate_years);
        (1.0 - SHORTFALL_PENALTY_PER_YEAR * shortfall).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_band_scores_one() {
        assert_eq!(score_experience(ExperienceLevel::Entry, 0), 1.0);
        assert_eq!(score_experience(ExperienceLevel::Entry, 1), 1.0);
        assert_eq!(score_experience(ExperienceLevel::Entry, 2), 1.0);
        assert_eq!(score_experience(ExperienceLevel::Intermediate, 2), 1.0);
        assert_eq!(score_experience(ExperienceLevel::Intermediate, 5), 1.0);
        assert_eq!(score_experience(ExperienceLevel::Expert, 5), 1.0);
        assert_eq!(score_experience(ExperienceLevel::Expert, 100), 1.0);
    }

    #[test]
    fn test_unspecified_is_neutral() {
        assert_eq!(score_experience(ExperienceLevel::Unspecified, 0), 0.5);
        assert_eq!(score_experience(ExperienceLevel::Unspecified, 12), 0.5);
    }

    #[test]
    fn test_over_qualified_is_flat() {
        assert_eq!(score_experience(ExperienceLevel::Entry, 3), 0.8);
        assert_eq!(score_experience(ExperienceLevel::Intermediate, 20), 0.8);
        assert_eq!(score_experience(ExperienceLevel::Expert, 101), 0.8);
    }

    #[test]
    fn test_shortfall_decays_linearly() {
        assert!((score_experience(ExperienceLevel::Intermediate, 1) - 0.8).abs() < 1e-9);
        assert!((score_experience(ExperienceLevel::Expert, 3) - 0.6).abs() < 1e-9);
        assert!((score_experience(ExperienceLevel::Expert, 1) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_shortfall_floors_at_zero() {
        assert_eq!(score_experience(ExperienceLevel::Expert, 0), 0.0);
    }
}
