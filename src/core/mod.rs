// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod similarity;
pub mod skills;

/// Number of ranked mentors a mentee is shown
pub const MENTEE_MATCH_LIMIT: usize = 5;

pub use filters::{is_eligible_candidate, result_limit, roles_complement};
pub use matcher::{rank_matches, MatchResult, Matcher};
pub use scoring::{calculate_compatibility, score_breakdown, score_pair, ScoreBreakdown, MAX_SCORE};
pub use similarity::{career_tokens, set_similarity};
pub use skills::{semantic_skills, SKILL_SYNONYMS};
