use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::lenient;

/// How much time a freelancer can commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "Value")]
pub enum Availability {
    #[default]
    FullTime,
    PartTime,
    Contract,
    /// Present but not one of the known values.
    Other,
}

impl Availability {
    /// Blank or missing means `FullTime`.
    pub fn parse(raw: Option<&str>) -> Self {
        let normalized = raw.map(|s| s.trim().to_lowercase()).unwrap_or_default();
        match normalized.as_str() {
            "" | "full-time" => Availability::FullTime,
            "part-time" => Availability::PartTime,
            "contract" => Availability::Contract,
            _ => Availability::Other,
        }
    }
}

/// Non-string values read as missing.
impl From<Value> for Availability {
    fn from(raw: Value) -> Self {
        Availability::parse(lenient::into_text(raw).as_deref())
    }
}

/// The parts of a freelancer profile the matcher reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default, deserialize_with = "lenient::skill_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::whole_years")]
    pub experience_years: u32,
    /// 0.0 means the freelancer has not stated a rate.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub hourly_rate: f64,
    #[serde(default)]
    pub availability: Availability,
}

impl AsRef<CandidateProfile> for CandidateProfile {
    fn as_ref(&self) -> &CandidateProfile {
        self
    }
}

/// A freelancer profile snapshot as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreelancerListing {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(flatten)]
    pub profile: CandidateProfile,
}

impl AsRef<CandidateProfile> for FreelancerListing {
    fn as_ref(&self) -> &CandidateProfile {
        &self.profile
    }
}
