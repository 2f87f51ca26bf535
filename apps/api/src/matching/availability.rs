use crate::models::freelancer::Availability;
use crate::models::job::JobType;

/// Score for pairs outside the compatibility matrix.
pub const UNKNOWN_PAIR: f64 = 0.5;

/// Looks up how well a freelancer's availability suits a job type, in [0, 1].
pub fn score_availability(job_type: JobType, availability: Availability) -> f64 {
    match (job_type, availability) {
        (JobType::Project, Availability::FullTime) => 1.0,
        (JobType::Project, Availability::PartTime) => 0.7,
        (JobType::Project, Availability::Contract) => 1.0,
        (JobType::Hourly, Availability::FullTime) => 0.8,
        (JobType::Hourly, Availability::PartTime) => 1.0,
        (JobType::Hourly, Availability::Contract) => 0.8,
        (JobType::Contract, Availability::FullTime) => 1.0,
        (JobType::Contract, Availability::PartTime) => 0.6,
        (JobType::Contract, Availability::Contract) => 1.0,
        (JobType::Other, _) | (_, Availability::Other) => UNKNOWN_PAIR,
    }
}
