// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ExperienceLevel, Profile, Role, ScoredProfile, ScoringWeights};
pub use requests::{CompatibilityRequest, RankMatchesRequest};
pub use responses::{CompatibilityResponse, ErrorResponse, HealthResponse, RankMatchesResponse};
