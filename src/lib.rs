//! Mentor Match - compatibility scoring and ranking for mentorship matching
//!
//! This library scores how well a mentor and a mentee fit together (0-100)
//! and ranks candidate profiles for a reference user. Scoring is a fixed
//! linear blend of skill overlap, career overlap, experience delta and
//! availability.

pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{calculate_compatibility, rank_matches, MatchResult, Matcher};
pub use models::{ExperienceLevel, Profile, Role, ScoredProfile, ScoringWeights};
