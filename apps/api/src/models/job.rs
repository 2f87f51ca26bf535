use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::lenient;

/// Seniority a job asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Value")]
pub enum ExperienceLevel {
    Entry,
    Intermediate,
    Expert,
    #[default]
    Unspecified,
}

impl ExperienceLevel {
    /// Case-insensitive; anything unrecognized is `Unspecified`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("entry") => ExperienceLevel::Entry,
            Some("intermediate") => ExperienceLevel::Intermediate,
            Some("expert") => ExperienceLevel::Expert,
            _ => ExperienceLevel::Unspecified,
        }
    }

    /// Inclusive band of years that fully satisfies this level.
    pub fn year_band(self) -> Option<(u32, u32)> {
        match self {
            ExperienceLevel::Entry => Some((0, 2)),
            ExperienceLevel::Intermediate => Some((2, 5)),
            ExperienceLevel::Expert => Some((5, 100)),
            ExperienceLevel::Unspecified => None,
        }
    }
}

/// Non-string values read as missing.
impl From<Value> for ExperienceLevel {
    fn from(raw: Value) -> Self {
        ExperienceLevel::parse(lenient::into_text(raw).as_deref())
    }
}

/// Engagement shape of a job posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Value")]
pub enum JobType {
    #[default]
    Project,
    Hourly,
    Contract,
    /// Present but not one of the known types.
    Other,
}

impl JobType {
    /// Blank or missing means `Project`.
    pub fn parse(raw: Option<&str>) -> Self {
        let normalized = raw.map(|s| s.trim().to_lowercase()).unwrap_or_default();
        match normalized.as_str() {
            "" | "project" => JobType::Project,
            "hourly" => JobType::Hourly,
            "contract" => JobType::Contract,
            _ => JobType::Other,
        }
    }
}

/// Non-string values read as missing.
impl From<Value> for JobType {
    fn from(raw: Value) -> Self {
        JobType::parse(lenient::into_text(raw).as_deref())
    }
}

/// The parts of a job posting the matcher reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRequirement {
    #[serde(default, deserialize_with = "lenient::skill_list")]
    pub required_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub budget: f64,
    /// Free-form, e.g. "3 months" or "2 weeks".
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub duration: Option<String>,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub job_type: JobType,
}

impl AsRef<JobRequirement> for JobRequirement {
    fn as_ref(&self) -> &JobRequirement {
        self
    }
}

/// A job posting snapshot as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub requirement: JobRequirement,
}

impl AsRef<JobRequirement> for JobListing {
    fn as_ref(&self) -> &JobRequirement {
        &self.requirement
    }
}
