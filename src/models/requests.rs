use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::Profile;

/// Request to score a single pair of profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityRequest {
    #[serde(default)]
    pub user: Option<Profile>,
    #[serde(default)]
    pub target: Option<Profile>,
}

/// Request to rank candidates for a reference user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankMatchesRequest {
    #[serde(alias = "current_user", rename = "currentUser", default)]
    pub current_user: Option<Profile>,
    // Hard ceiling; the configured api.max_candidates is usually lower
    #[validate(length(max = 10000))]
    #[serde(default)]
    pub candidates: Vec<Profile>,
}
