//! Skill overlap between what a job asks for and what a freelancer lists.
//!
//! Per required skill, the best available credit is taken:
//! - exact match → 1.0
//! - either string contains the other → 0.5
//! - candidate lists a related skill → 0.3
//! - otherwise → 0.0
//!
//! The final score is the mean credit, capped at 1.0.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const EXACT_MATCH: f64 = 1.0;
pub const PARTIAL_MATCH: f64 = 0.5;
pub const RELATED_MATCH: f64 = 0.3;

/// Primary skill → skills that commonly come with it. Asymmetric on purpose:
/// "python" credits "django", and "django" credits "python" only because it
/// is listed separately.
static RELATED_SKILLS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let table: &[(&str, &[&str])] = &[
            ("python", &["django", "flask", "fastapi", "pandas", "numpy"]),
            ("javascript", &["react", "node.js", "vue", "angular", "express"]),
            ("java", &["spring", "hibernate", "maven", "gradle"]),
            ("react", &["javascript", "redux", "next.js", "typescript"]),
            ("node.js", &["javascript", "express", "mongodb", "postgresql"]),
            ("django", &["python", "postgresql", "rest api"]),
            ("flask", &["python", "rest api", "sqlalchemy"]),
            ("aws", &["cloud", "devops", "docker", "kubernetes"]),
            ("docker", &["kubernetes", "devops", "aws", "linux"]),
            ("postgresql", &["sql", "database", "mysql"]),
            ("mysql", &["sql", "database", "postgresql"]),
            ("mongodb", &["nosql", "database", "node.js"]),
        ];
        table.iter().copied().collect()
    });

/// Skills related to `skill` (already normalized), if it is a known primary skill.
pub fn related_skills(skill: &str) -> Option<&'static [&'static str]> {
    RELATED_SKILLS.get(skill).copied()
}

pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Scores `candidate` against `required`, in [0, 1].
///
/// Returns 0.0 when either side is empty. Duplicated required skills count
/// once each toward the denominator.
pub fn score_skills<R, C>(required: &[R], candidate: &[C]) -> f64
where
    R: AsRef<str>,
    C: AsRef<str>,
{
    if required.is_empty() || candidate.is_empty() {
        return 0.0;
    }

    let candidate: Vec<String> = candidate
        .iter()
        .map(|s| normalize_skill(s.as_ref()))
        .collect();

    let total: f64 = required
        .iter()
        .map(|s| skill_credit(&normalize_skill(s.as_ref()), &candidate))
        .sum();

    (total / required.len() as f64).clamp(0.0, 1.0)
}

/// Credit earned by a single normalized required skill.
fn skill_credit(required: &str, candidate: &[String]) -> f64 {
    if candidate.iter().any(|c| c == required) {
        return EXACT_MATCH;
    }

    if candidate
        .iter()
        .any(|c| c.contains(required) || required.contains(c.as_str()))
    {
        return PARTIAL_MATCH;
    }

    match related_skills(required) {
        Some(related)
            if candidate
                .iter()
                .any(|c| related.iter().any(|r| *r == c.as_str())) =>
        {
            RELATED_MATCH
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: [&str; 0] = [];

    #[test]
    fn test_empty_sides_score_zero() {
        assert_eq!(score_skills(&EMPTY, &["rust"]), 0.0);
        assert_eq!(score_skills(&["rust"], &EMPTY), 0.0);
        assert_eq!(score_skills(&EMPTY, &EMPTY), 0.0);
    }

    #[test]
    fn test_all_exact_matches_score_one() {
        let score = score_skills(&["Python", " SQL "], &["sql", "python", "go"]);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_substring_is_partial_credit() {
        // "react" is contained in "react native"
        assert_eq!(score_skills(&["react native"], &["React"]), 0.5);
        assert_eq!(score_skills(&["sql"], &["postgresql"]), 0.5);
    }

    #[test]
    fn test_related_skill_credit() {
        assert!((score_skills(&["python"], &["pandas"]) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_related_credit_does_not_accumulate() {
        // two related skills still earn a single 0.3
        assert!((score_skills(&["python"], &["pandas", "numpy"]) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_related_table_is_asymmetric() {
        // "pandas" has no entry of its own, so "python" earns nothing for it.
        assert_eq!(score_skills(&["pandas"], &["python"]), 0.0);
    }

    #[test]
    fn test_partial_beats_related() {
        // "aws" is related to "docker", but "docker compose" contains "docker".
        assert_eq!(score_skills(&["docker"], &["aws", "docker compose"]), 0.5);
    }

    #[test]
    fn test_mean_over_required_skills() {
        // exact 1.0 + related 0.3 + miss 0.0 over three skills
        let score = score_skills(&["java", "aws", "haskell"], &["java", "kubernetes"]);
        assert!((score - 1.3 / 3.0).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_required_order_does_not_matter() {
        let a = score_skills(&["java", "aws", "haskell"], &["java", "kubernetes"]);
        let b = score_skills(&["haskell", "java", "aws"], &["java", "kubernetes"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_score_is_bounded() {
        let required = ["rust", "go", "python", "docker", "mysql"];
        let candidate = ["rust", "golang", "django", "linux", "sql", "mysql"];
        let score = score_skills(&required, &candidate);
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn test_related_lookup_uses_normalized_key() {
        assert!(related_skills("node.js").is_some());
        assert!(related_skills("Node.js").is_none());
    }
}
